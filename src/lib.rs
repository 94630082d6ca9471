//! RichPad: a small rich-text editor.
//!
//! The document model, formatting commands and export writer live under
//! [`app`] and build without a GUI toolkit. The FLTK front end in [`ui`] and
//! [`app::state`] is enabled by the default `gui` feature.

pub mod app;
#[cfg(feature = "gui")]
pub mod ui;
