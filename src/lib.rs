#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod config;
pub mod document;
pub mod element;
pub mod error;
pub mod history;
pub mod id_generator;
pub mod input;
pub mod persistence;
pub mod renderer;
pub mod sketch;
pub mod state;
pub mod surface;
pub mod tools;

pub use app::SketchApp;
pub use config::SketchConfig;
pub use document::ElementSet;
pub use element::{Door, Element, MaterialType, Point, Room, Wall, Window};
pub use error::{SketchError, SketchResult};
pub use history::SnapshotHistory;
pub use id_generator::ElementId;
pub use input::{InputEvent, InputHandler};
pub use renderer::Renderer;
pub use sketch::SketchTool;
pub use state::{DrawMode, EditorState};
pub use surface::{DrawingSurface, EguiSurface};
pub use tools::DrawElementTool;
