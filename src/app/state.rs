use std::cell::Cell;
use std::rc::Rc;

use fltk::{
    app::Sender,
    frame::Frame,
    prelude::*,
    text::{TextBuffer, TextEditor},
    window::Window,
};

use super::domain::{Command, Document, EditorConfig, Message, RichTextDocument};
use super::file_filters::get_save_filter;
use super::services::commands::execute;
use super::services::text_sync::{self, TextEdit, sync_text};
use crate::ui::buffer::{apply_selection, buffer_text, editor_selection, track_edits};
use crate::ui::dialogs::FltkPrompt;
use crate::ui::main_window::MainWidgets;
use crate::ui::render::StyleMap;

/// Owns the session's document and keeps the FLTK widgets in step with it.
pub struct AppState {
    pub document: Document,
    pub window: Window,
    pub editor: TextEditor,
    pub buffer: TextBuffer,
    pub style_buffer: TextBuffer,
    pub status: Frame,
    style_map: StyleMap,
    prompt: FltkPrompt,
    /// Set while the app itself rewrites the buffer.
    muted: Rc<Cell<bool>>,
    /// An edit could not be replayed; resync from the whole text.
    out_of_step: bool,
    /// The text changed since the styles were last rendered.
    dirty: bool,
    /// Result of the last command, shown until the text changes.
    status_message: Option<String>,
    shown_status: String,
}

impl AppState {
    pub fn new(widgets: MainWidgets, config: &EditorConfig, sender: Sender<Message>) -> Self {
        let MainWidgets {
            wind,
            text_editor,
            mut buffer,
            style_buffer,
            status,
        } = widgets;
        let muted = track_edits(&mut buffer, &style_buffer, sender);
        let format = config.initial_format();
        let filter = get_save_filter(&config.save_filter_description, &config.save_filter_pattern);

        let mut state = Self {
            document: Document::new(format),
            window: wind,
            editor: text_editor,
            buffer,
            style_buffer,
            status,
            style_map: StyleMap::new(format),
            prompt: FltkPrompt::new(filter),
            muted,
            out_of_step: false,
            dirty: false,
            status_message: None,
            shown_status: String::new(),
        };
        state.render_styles();
        state.update_status();
        state
    }

    /// Replay one edit reported by the editor buffer.
    pub fn apply_edit(&mut self, pos: usize, deleted: usize, inserted: &str) {
        if self.out_of_step {
            return;
        }
        let edit = TextEdit::new(pos, deleted, inserted);
        match text_sync::apply_edit(&mut self.document, &edit) {
            Ok(()) => self.dirty = true,
            Err(e) => {
                log::warn!("Could not replay edit {:?}: {}", edit, e);
                self.out_of_step = true;
            }
        }
    }

    /// Bring the document's selection in line with the editor, resyncing the
    /// whole text first if the two got out of step.
    pub fn sync_from_editor(&mut self) {
        if self.out_of_step || self.buffer.length().max(0) as usize != self.document.len() {
            self.resync_text();
        }

        let selection = editor_selection(&self.buffer, &self.editor);
        if let Err(e) = self.document.set_selection(selection) {
            log::warn!("Ignoring editor selection {:?}: {}", selection, e);
        }

        if self.dirty {
            self.dirty = false;
            self.status_message = None;
            self.render_styles();
        }
        self.update_status();
    }

    fn resync_text(&mut self) {
        let text = buffer_text(&self.buffer);
        match sync_text(&mut self.document, &text) {
            Ok(changed) => self.dirty |= changed,
            Err(e) => {
                log::error!("Editor and document diverged ({}); reloading editor", e);
                let text = self.document.plain_text();
                self.reload_buffer(&text);
                self.dirty = true;
            }
        }
        self.out_of_step = false;
    }

    fn reload_buffer(&mut self, text: &str) {
        self.muted.set(true);
        self.buffer.set_text(text);
        self.muted.set(false);
    }

    pub fn run_command(&mut self, command: Command) {
        self.sync_from_editor();

        let outcome = execute(&mut self.document, &mut self.prompt, command);
        log::debug!("{:?} -> {:?}", command, outcome);
        if let Some(message) = outcome.status_message() {
            self.status_message = Some(message);
        }

        let text = self.document.plain_text();
        if buffer_text(&self.buffer) != text {
            self.reload_buffer(&text);
        }
        self.render_styles();
        apply_selection(&mut self.buffer, &mut self.editor, self.document.selection());
        self.update_status();
        let _ = self.editor.take_focus();
    }

    fn render_styles(&mut self) {
        let styles = self.style_map.render(&self.document);
        self.style_buffer.set_text(&styles);
        self.editor
            .set_highlight_data_ext(self.style_buffer.clone(), self.style_map.entries());
        self.editor.redraw();
    }

    /// Status line: the last command's message, or the alignment, font size
    /// and list marker at the caret. `TextDisplay` draws neither paragraph
    /// alignment nor list markers, so this is where they are shown.
    fn status_text(&self) -> String {
        if let Some(ref message) = self.status_message {
            return message.clone();
        }
        let index = self.document.cursor_paragraph();
        let format = self.document.current_format();
        let mut text = format!(
            "  Alinhamento: {}  |  Fonte: {} pt",
            format.alignment.display_name(),
            format.chars.point_size
        );
        if let Some(marker) = self.document.list_marker(index) {
            text.push_str(&format!("  |  Lista: {}", marker));
        }
        text
    }

    fn update_status(&mut self) {
        let text = self.status_text();
        if text != self.shown_status {
            self.status.set_label(&text);
            self.status.redraw();
            self.shown_status = text;
        }
    }

    pub fn quit(&mut self) {
        self.window.hide();
    }
}
