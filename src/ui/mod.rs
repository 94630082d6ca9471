//! FLTK front end: window, toolbar, dialogs and the style projection of the
//! document onto FLTK's text widgets.

pub mod buffer;
pub mod dialogs;
pub mod file_dialogs;
pub mod main_window;
pub mod render;
pub mod toolbar;
