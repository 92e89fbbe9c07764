use crate::domain::model::{ProductionProblem, RecordKind, Technique, UseCase};
use crate::utils::error::Result;

/// A record that can be looked up by name inside a catalog.
pub trait CatalogEntry {
    const KIND: RecordKind;

    fn name(&self) -> &str;
}

impl CatalogEntry for Technique {
    const KIND: RecordKind = RecordKind::Technique;

    fn name(&self) -> &str {
        self.name
    }
}

impl CatalogEntry for ProductionProblem {
    const KIND: RecordKind = RecordKind::Problem;

    fn name(&self) -> &str {
        self.name
    }
}

impl CatalogEntry for UseCase {
    const KIND: RecordKind = RecordKind::UseCase;

    fn name(&self) -> &str {
        self.name
    }
}

/// Destination for rendered documents when they are not printed to stdout.
pub trait Storage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}
