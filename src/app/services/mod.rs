//! Services layer - business operations.
//!
//! This module contains the operations run on behalf of the toolbar:
//! - Formatting commands
//! - Plain-text export
//! - User prompts
//! - Editor-to-document text sync

pub mod commands;
pub mod export;
pub mod prompt;
pub mod text_sync;
