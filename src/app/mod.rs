//! Application layer.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (formats, Document, Command, config)
//! - `services/` - Operations (formatting commands, export, prompts, text sync)
//! - `error.rs` - Error type shared by the layers
//! - `state.rs` - Main application coordinator (GUI builds only)

pub mod domain;
pub mod error;
pub mod file_filters;
pub mod services;
#[cfg(feature = "gui")]
pub mod state;

// Re-exports for convenient external access
pub use domain::{
    Alignment, CharFormat, Command, Document, EditorConfig, FormatState, ListStyle, Message, Rgb,
    RichTextDocument, Selection, VerticalOffset,
};
pub use error::{AppError, Result};
pub use services::commands::{execute, CommandOutcome};
pub use services::export::{save, SaveReport};
pub use services::prompt::UserPrompt;
