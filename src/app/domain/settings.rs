use super::format::{CharFormat, DEFAULT_POINT_SIZE};

/// Editor configuration. There is no settings file; every value comes from
/// [`Default`].
#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    pub window_title: String,
    pub window_x: i32,
    pub window_y: i32,
    pub window_width: i32,
    pub window_height: i32,
    pub toolbar_height: i32,
    pub status_bar_height: i32,
    /// Point size of the first typed character.
    pub font_size: u32,
    /// Label of the save dialog's file filter.
    pub save_filter_description: String,
    pub save_filter_pattern: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            window_title: "Editor de Texto Rico".to_string(),
            window_x: 100,
            window_y: 100,
            window_width: 800,
            window_height: 600,
            toolbar_height: 30,
            status_bar_height: 24,
            font_size: DEFAULT_POINT_SIZE,
            save_filter_description: "Documento do Word".to_string(),
            save_filter_pattern: "*.docx".to_string(),
        }
    }
}

impl EditorConfig {
    /// Format the document starts with.
    pub fn initial_format(&self) -> CharFormat {
        CharFormat::with_point_size(self.font_size)
    }
}
