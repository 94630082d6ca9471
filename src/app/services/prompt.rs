//! Modal questions the command layer asks the user.
//!
//! Every question returns `Some` when the user confirms and `None` when the
//! dialog is cancelled, so a cancelled command can simply return.

use std::path::PathBuf;

use crate::app::domain::Rgb;

pub trait UserPrompt {
    fn pick_color(&mut self) -> Option<Rgb>;

    fn ask_url(&mut self) -> Option<String>;

    fn pick_save_path(&mut self) -> Option<PathBuf>;
}

/// Answers queued up front, for driving commands without a GUI.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompt {
    pub color: Option<Rgb>,
    pub url: Option<String>,
    pub save_path: Option<PathBuf>,
    /// Number of questions asked so far.
    pub asked: usize,
}

impl UserPrompt for ScriptedPrompt {
    fn pick_color(&mut self) -> Option<Rgb> {
        self.asked += 1;
        self.color.take()
    }

    fn ask_url(&mut self) -> Option<String> {
        self.asked += 1;
        self.url.take()
    }

    fn pick_save_path(&mut self) -> Option<PathBuf> {
        self.asked += 1;
        self.save_path.take()
    }
}
