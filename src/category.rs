//! Closed vocabularies of the export: status, priority and observation type.
//!
//! Every enum keeps an explicit catch-all so unknown export values still
//! round-trip their text and fall back to the neutral fill.

use std::fmt;

/// Dashboard palette.
pub mod palette {
    pub const SUCCESS: &str = "#059669";
    pub const DANGER: &str = "#be123c";
    pub const WARNING: &str = "#f59e0b";
    pub const INFO: &str = "#3b82f6";
    pub const NEUTRAL: &str = "#64748b";
}

/// Workflow state of an observation (`Estatus`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    Open,
    Started,
    ReadyForReview,
    Closed,
    Other(String),
}

impl Status {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "Abierto" => Status::Open,
            "Iniciado" => Status::Started,
            "Listo para revisión" => Status::ReadyForReview,
            "Cerrado" => Status::Closed,
            other => Status::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Status::Open => "Abierto",
            Status::Started => "Iniciado",
            Status::ReadyForReview => "Listo para revisión",
            Status::Closed => "Cerrado",
            Status::Other(s) => s,
        }
    }

    /// Closed, or handed over for sign-off.
    pub fn is_resolved(&self) -> bool {
        matches!(self, Status::Closed | Status::ReadyForReview)
    }

    pub fn fill(&self) -> &'static str {
        match self {
            Status::Closed => palette::SUCCESS,
            Status::Started => palette::WARNING,
            Status::Open => palette::DANGER,
            Status::ReadyForReview => palette::INFO,
            Status::Other(_) => palette::NEUTRAL,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Urgency assigned to an observation (`Prioridad`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Priority {
    Urgent,
    High,
    Medium,
    Low,
    Other(String),
}

impl Priority {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "Urgent" => Priority::Urgent,
            "High" => Priority::High,
            "Medium" => Priority::Medium,
            "Low" => Priority::Low,
            other => Priority::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Priority::Urgent => "Urgent",
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
            Priority::Other(s) => s,
        }
    }

    /// Urgent or high.
    pub fn is_critical(&self) -> bool {
        matches!(self, Priority::Urgent | Priority::High)
    }

    pub fn fill(&self) -> &'static str {
        match self {
            Priority::Urgent => palette::DANGER,
            Priority::High => palette::WARNING,
            Priority::Medium => palette::INFO,
            Priority::Low | Priority::Other(_) => palette::NEUTRAL,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized observation type (`Tipo`). Anything off the allow-list is `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeLabel {
    Deficiency,
    Safety,
    Finishes,
    Electrical,
    Sanitary,
    Structural,
    Other,
}

impl TypeLabel {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "Deficiencia" => TypeLabel::Deficiency,
            "Seguridad" => TypeLabel::Safety,
            "Acabados" => TypeLabel::Finishes,
            "Eléctrico" => TypeLabel::Electrical,
            "Sanitario" => TypeLabel::Sanitary,
            "Estructural" => TypeLabel::Structural,
            _ => TypeLabel::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeLabel::Deficiency => "Deficiencia",
            TypeLabel::Safety => "Seguridad",
            TypeLabel::Finishes => "Acabados",
            TypeLabel::Electrical => "Eléctrico",
            TypeLabel::Sanitary => "Sanitario",
            TypeLabel::Structural => "Estructural",
            TypeLabel::Other => "Otros",
        }
    }
}

impl fmt::Display for TypeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
