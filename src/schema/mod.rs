pub mod record;
pub mod types;

pub use record::{build, Record};
pub use types::RawFields;
