use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier stamped on every wall, door and window when it is created.
///
/// Serializes as a plain UUID string so hosts can store it as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(Uuid);

impl ElementId {
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<Uuid> for ElementId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// Creates a fresh random id. Ids are never reused.
pub fn generate_id() -> ElementId {
    ElementId(Uuid::new_v4())
}
