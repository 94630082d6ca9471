//! Plain-text export behind the "Salvar Arquivo" button.
//!
//! The save dialog offers `.docx`, but only the document's plain text is
//! written, as UTF-8, whatever the chosen extension. Formatting, alignment,
//! list membership and link targets are dropped.

use std::fs;
use std::path::Path;

use crate::app::domain::RichTextDocument;
use crate::app::error::{AppError, Result};

pub const SAVE_SUCCESS_MESSAGE: &str = "Arquivo salvo com sucesso!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReport {
    pub bytes_written: usize,
}

impl SaveReport {
    pub fn status_message(&self) -> &'static str {
        SAVE_SUCCESS_MESSAGE
    }
}

/// Status line for a failed save.
pub fn failure_message(err: &AppError) -> String {
    format!("Erro ao salvar arquivo: {}", err)
}

/// Write the document's plain text to `path`, truncating any existing file.
///
/// The text is snapshotted before the file is opened. A failed write may leave
/// a truncated file behind; the document itself is never touched.
pub fn save<D: RichTextDocument + ?Sized>(doc: &D, path: &Path) -> Result<SaveReport> {
    let text = doc.plain_text();
    fs::write(path, text.as_bytes())?;
    log::info!("Saved {} bytes of plain text to {}", text.len(), path.display());
    Ok(SaveReport {
        bytes_written: text.len(),
    })
}
