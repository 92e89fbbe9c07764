pub mod catalog;
pub mod formatter;
pub mod guide;
pub mod labels;
pub mod resolver;

pub use crate::domain::model::{Algorithm, ProductionProblem, RecordKind, Technique, UseCase};
pub use crate::domain::ports::{CatalogEntry, Storage};
pub use crate::utils::error::Result;
