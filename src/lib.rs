// ABOUTME: Library module for the pitchdeck program.
// ABOUTME: Contains the slide catalog, renderer, viewer state and export pipeline.

// Reexport modules
pub mod catalog;
pub mod config;
pub mod errors;
pub mod export;
pub mod icons;
pub mod layout;
pub mod pptx;
pub mod serve;
pub mod summary;
pub mod utils;
pub mod viewer;

// Reexport common types and functions
pub use catalog::{catalog, SlideRecord};
pub use config::Config;
pub use errors::{DeckError, Result};
pub use export::{export_deck, ExportConfig, EXPORT_FILE_NAME};
pub use layout::{render_slide, LayoutKind, RenderMode};
pub use pptx::{generate_pptx, PptxConfig};
pub use serve::{serve, ServeConfig};
pub use summary::{copy_to_clipboard, summarize};
pub use viewer::{ExportStatus, NavCommand, ViewerState};

#[cfg(test)]
mod tests;
