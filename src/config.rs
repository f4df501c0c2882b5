// src/config.rs
use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::IngestError;

/// The raw columns the engine understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Column {
    Number,
    Kind,
    Specialty,
    Title,
    Assignee,
    Company,
    NotifiedOn,
    CreatedOn,
    Status,
    Priority,
    Location,
}

/// Header text of each known column. Defaults match the Spanish export.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ColumnNames {
    pub number: String,
    pub kind: String,
    pub specialty: String,
    pub title: String,
    pub assignee: String,
    pub company: String,
    pub notified_on: String,
    pub created_on: String,
    pub status: String,
    pub priority: String,
    pub location: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            number: "Número".into(),
            kind: "Tipo".into(),
            specialty: "Especialidad".into(),
            title: "Título".into(),
            assignee: "Persona asignada".into(),
            company: "Compañía de la persona asignada".into(),
            notified_on: "Fecha de notificación".into(),
            created_on: "Fecha de creación".into(),
            status: "Estatus".into(),
            priority: "Prioridad".into(),
            location: "Ubicación".into(),
        }
    }
}

impl ColumnNames {
    fn pairs(&self) -> [(Column, &str); 11] {
        [
            (Column::Number, self.number.as_str()),
            (Column::Kind, self.kind.as_str()),
            (Column::Specialty, self.specialty.as_str()),
            (Column::Title, self.title.as_str()),
            (Column::Assignee, self.assignee.as_str()),
            (Column::Company, self.company.as_str()),
            (Column::NotifiedOn, self.notified_on.as_str()),
            (Column::CreatedOn, self.created_on.as_str()),
            (Column::Status, self.status.as_str()),
            (Column::Priority, self.priority.as_str()),
            (Column::Location, self.location.as_str()),
        ]
    }

    /// Which known column a header names, if any. Exact match after cleaning.
    pub fn resolve(&self, header: &str) -> Option<Column> {
        self.pairs()
            .into_iter()
            .find(|(_, name)| *name == header)
            .map(|(col, _)| col)
    }
}

/// Dashboard flavour; picks the default view sizes.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Basic,
    #[default]
    Advanced,
}

/// Top-N cut-offs for the ranked views.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub classifications: usize,
    pub assignees: usize,
    pub companies: usize,
    pub units: usize,
    pub detail_rows: usize,
}

impl Limits {
    pub fn for_variant(variant: Variant) -> Self {
        let (classifications, detail_rows) = match variant {
            Variant::Basic => (6, 8),
            Variant::Advanced => (8, 15),
        };
        Self {
            classifications,
            assignees: 8,
            companies: 8,
            units: 10,
            detail_rows,
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::for_variant(Variant::default())
    }
}

/// Per-key limit overrides from the config file. Unset keys keep the
/// variant's value.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(default)]
pub struct LimitOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classifications: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignees: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub companies: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail_rows: Option<usize>,
}

impl LimitOverrides {
    pub fn apply(&self, base: Limits) -> Limits {
        Limits {
            classifications: self.classifications.unwrap_or(base.classifications),
            assignees: self.assignees.unwrap_or(base.assignees),
            companies: self.companies.unwrap_or(base.companies),
            units: self.units.unwrap_or(base.units),
            detail_rows: self.detail_rows.unwrap_or(base.detail_rows),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub columns: ColumnNames,
    #[serde(default)]
    pub variant: Variant,
    /// Explicit limits, layered over the variant's defaults.
    #[serde(default)]
    pub limits: LimitOverrides,
}

impl EngineConfig {
    pub fn limits(&self) -> Limits {
        self.limits.apply(Limits::for_variant(self.variant))
    }

    /// Reject configs that could never match a header.
    pub fn validate(&self) -> Result<(), IngestError> {
        if let Some((col, _)) = self
            .columns
            .pairs()
            .into_iter()
            .find(|(_, name)| name.trim().is_empty())
        {
            return Err(IngestError::Config(format!(
                "header name for {:?} is empty",
                col
            )));
        }
        Ok(())
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).context("parsing engine config YAML")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_yaml_str(&text).with_context(|| format!("loading config {}", path.display()))
    }
}
