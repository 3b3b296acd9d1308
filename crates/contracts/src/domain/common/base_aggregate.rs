use super::EntityMetadata;
use serde::{Deserialize, Serialize};

/// Common head of every aggregate: identity, business code, display name
/// and lifecycle metadata. Aggregates flatten this into their wire shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseAggregate<Id> {
    pub id: Id,
    /// Business code, e.g. "EOI-2026-001"
    pub code: String,
    /// Display name of the record
    pub description: String,
    pub comment: Option<String>,
    pub metadata: EntityMetadata,
}

impl<Id> BaseAggregate<Id> {
    pub fn new(id: Id, code: String, description: String) -> Self {
        Self {
            id,
            code,
            description,
            comment: None,
            metadata: EntityMetadata::new(),
        }
    }

    /// Rehydrate from storage without touching the metadata
    pub fn with_metadata(
        id: Id,
        code: String,
        description: String,
        comment: Option<String>,
        metadata: EntityMetadata,
    ) -> Self {
        Self {
            id,
            code,
            description,
            comment,
            metadata,
        }
    }

    /// Refresh the updated timestamp and version
    pub fn touch(&mut self) {
        self.metadata.touch();
    }
}
