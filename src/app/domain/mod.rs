//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Character/paragraph formats
//! - The rich-text document and the capability trait commands use
//! - Editor configuration
//! - Command and message types for the event system

pub mod document;
pub mod format;
pub mod messages;
pub mod rich_text;
pub mod settings;

pub use document::{Document, ListGroup, ListId, Paragraph, Run};
pub use format::{Alignment, CharFormat, CharFormatPatch, FormatState, ListStyle, Rgb, VerticalOffset};
pub use messages::{Command, Message};
pub use rich_text::{RichTextDocument, Selection};
pub use settings::EditorConfig;
