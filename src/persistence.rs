use serde::{Deserialize, Serialize};

use crate::document::ElementSet;
use crate::error::SketchResult;

/// A sketch as handed to the host's storage layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedSketch {
    /// Version of the crate that wrote the sketch
    pub version: String,
    pub elements: ElementSet,
}

impl SavedSketch {
    pub fn new(elements: ElementSet) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            elements,
        }
    }

    /// Unwrap the element set, warning if it was written by another version.
    pub fn into_elements(self) -> ElementSet {
        if self.version != env!("CARGO_PKG_VERSION") {
            log::warn!(
                "Sketch version {} differs from current version {}",
                self.version,
                env!("CARGO_PKG_VERSION")
            );
        }
        self.elements
    }
}

/// Encode a sketch as JSON.
pub fn encode(elements: &ElementSet) -> SketchResult<String> {
    Ok(serde_json::to_string(&SavedSketch::new(elements.clone()))?)
}

/// Decode a sketch written by [`encode`].
pub fn decode(json: &str) -> SketchResult<ElementSet> {
    let saved: SavedSketch = serde_json::from_str(json)?;
    Ok(saved.into_elements())
}
