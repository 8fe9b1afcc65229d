// Tool implementations
mod draw_element_tool;
pub use draw_element_tool::{DrawElementState, DrawElementTool, ToolContext};
