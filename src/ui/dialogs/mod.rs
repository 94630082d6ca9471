use std::path::PathBuf;

use fltk::dialog::{self, ColorMode};

use crate::app::domain::Rgb;
use crate::app::services::prompt::UserPrompt;
use crate::ui::file_dialogs::native_save_dialog;

/// Answers the command layer's questions with FLTK's modal dialogs.
pub struct FltkPrompt {
    save_filter: String,
}

impl FltkPrompt {
    pub fn new(save_filter: String) -> Self {
        Self { save_filter }
    }
}

impl UserPrompt for FltkPrompt {
    fn pick_color(&mut self) -> Option<Rgb> {
        dialog::color_chooser("Cor", ColorMode::Rgb).map(Rgb::from)
    }

    fn ask_url(&mut self) -> Option<String> {
        dialog::message_title("Inserir Hiperlink");
        dialog::input_default("URL:", "")
    }

    fn pick_save_path(&mut self) -> Option<PathBuf> {
        native_save_dialog("Salvar Arquivo", &self.save_filter).map(PathBuf::from)
    }
}
