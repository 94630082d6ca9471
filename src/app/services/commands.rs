//! Formatting command layer.
//!
//! Each command is computed from the format at the edit point and
//! applied through [`RichTextDocument`], so the same code drives the FLTK
//! editor and the in-memory document used in tests.

use crate::app::domain::{
    Alignment, CharFormat, CharFormatPatch, Command, ListStyle, Rgb,
    RichTextDocument, VerticalOffset,
};
use crate::app::services::export::{self, SaveReport};
use crate::app::services::prompt::UserPrompt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Superscript,
    Subscript,
}

impl Toggle {
    /// Negate exactly one attribute of `current`.
    pub fn patch(self, current: &CharFormat) -> CharFormatPatch {
        let mut patch = CharFormatPatch::default();
        match self {
            Self::Bold => patch.bold = Some(!current.bold),
            Self::Italic => patch.italic = Some(!current.italic),
            Self::Underline => patch.underline = Some(!current.underline),
            Self::Strikethrough => patch.strikethrough = Some(!current.strikethrough),
            Self::Superscript => {
                patch.vertical_offset = Some(toggle_offset(current.vertical_offset, VerticalOffset::Superscript))
            }
            Self::Subscript => {
                patch.vertical_offset = Some(toggle_offset(current.vertical_offset, VerticalOffset::Subscript))
            }
        }
        patch
    }
}

fn toggle_offset(current: VerticalOffset, requested: VerticalOffset) -> VerticalOffset {
    if current == requested {
        VerticalOffset::Normal
    } else {
        requested
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStep {
    Increase,
    Decrease,
}

impl FontStep {
    /// One point up or down, never below 1.
    pub fn apply(self, size: u32) -> u32 {
        match self {
            Self::Increase => size.saturating_add(1),
            Self::Decrease => size.saturating_sub(1).max(1),
        }
    }
}

/// A format change with its parameter already known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatEdit {
    Toggle(Toggle),
    Color(Rgb),
    Font(FontStep),
    Align(Alignment),
}

impl FormatEdit {
    /// Character-level part of the edit; `None` for paragraph edits.
    pub fn char_patch(&self, current: &CharFormat) -> Option<CharFormatPatch> {
        match *self {
            Self::Toggle(toggle) => Some(toggle.patch(current)),
            Self::Color(color) => Some(CharFormatPatch {
                color: Some(color),
                ..Default::default()
            }),
            Self::Font(step) => Some(CharFormatPatch {
                point_size: Some(step.apply(current.point_size)),
                ..Default::default()
            }),
            Self::Align(_) => None,
        }
    }
}

/// Apply a parameterized edit to the document's selection.
pub fn apply_edit<D: RichTextDocument + ?Sized>(doc: &mut D, edit: FormatEdit) {
    match edit {
        FormatEdit::Align(alignment) => doc.set_alignment(alignment),
        other => {
            let current = doc.current_format();
            if let Some(patch) = other.char_patch(&current.chars) {
                doc.merge_char_format(&patch);
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Applied,
    /// The user dismissed a dialog; nothing changed.
    Cancelled,
    Saved(SaveReport),
    Failed(String),
}

impl CommandOutcome {
    /// Text for the status bar, if the outcome has one.
    pub fn status_message(&self) -> Option<String> {
        match self {
            Self::Saved(report) => Some(report.status_message().to_string()),
            Self::Failed(message) => Some(message.clone()),
            Self::Applied | Self::Cancelled => None,
        }
    }
}

/// Run one toolbar command against `doc`, asking `prompt` for any input it
/// needs.
pub fn execute<D, P>(doc: &mut D, prompt: &mut P, command: Command) -> CommandOutcome
where
    D: RichTextDocument + ?Sized,
    P: UserPrompt + ?Sized,
{
    log::debug!("Executing {:?}", command);
    let edit = match command {
        Command::ToggleBold => FormatEdit::Toggle(Toggle::Bold),
        Command::ToggleItalic => FormatEdit::Toggle(Toggle::Italic),
        Command::ToggleUnderline => FormatEdit::Toggle(Toggle::Underline),
        Command::ToggleStrikethrough => FormatEdit::Toggle(Toggle::Strikethrough),
        Command::ToggleSuperscript => FormatEdit::Toggle(Toggle::Superscript),
        Command::ToggleSubscript => FormatEdit::Toggle(Toggle::Subscript),
        Command::IncreaseFont => FormatEdit::Font(FontStep::Increase),
        Command::DecreaseFont => FormatEdit::Font(FontStep::Decrease),
        Command::Align(alignment) => FormatEdit::Align(alignment),
        Command::ChangeColor => match prompt.pick_color() {
            Some(color) => FormatEdit::Color(color),
            None => return CommandOutcome::Cancelled,
        },
        Command::InsertHyperlink => return insert_hyperlink(doc, prompt),
        Command::BulletList => {
            doc.create_list(ListStyle::Bullet);
            return CommandOutcome::Applied;
        }
        Command::NumberedList => {
            doc.create_list(ListStyle::Numbered);
            return CommandOutcome::Applied;
        }
        Command::Save => return save(&*doc, prompt),
    };
    apply_edit(doc, edit);
    CommandOutcome::Applied
}

fn insert_hyperlink<D, P>(doc: &mut D, prompt: &mut P) -> CommandOutcome
where
    D: RichTextDocument + ?Sized,
    P: UserPrompt + ?Sized,
{
    let url = match prompt.ask_url() {
        Some(url) if !url.is_empty() => url,
        _ => return CommandOutcome::Cancelled,
    };
    match doc.insert_hyperlink(&url) {
        Ok(()) => CommandOutcome::Applied,
        Err(e) => {
            log::error!("Failed to insert hyperlink: {}", e);
            CommandOutcome::Failed(e.to_string())
        }
    }
}

fn save<D, P>(doc: &D, prompt: &mut P) -> CommandOutcome
where
    D: RichTextDocument + ?Sized,
    P: UserPrompt + ?Sized,
{
    let Some(path) = prompt.pick_save_path() else {
        return CommandOutcome::Cancelled;
    };
    match export::save(doc, &path) {
        Ok(report) => CommandOutcome::Saved(report),
        Err(e) => {
            log::warn!("Saving to {} failed: {}", path.display(), e);
            CommandOutcome::Failed(export::failure_message(&e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::{Document, Selection};
    use crate::app::services::prompt::ScriptedPrompt;

    fn run(doc: &mut Document, command: Command) -> CommandOutcome {
        execute(doc, &mut ScriptedPrompt::default(), command)
    }

    fn typed(text: &str) -> Document {
        let mut doc = Document::default();
        doc.insert_text(text).unwrap();
        doc
    }

    #[test]
    fn test_toggle_twice_restores_every_attribute() {
        let toggles = [
            Command::ToggleBold,
            Command::ToggleItalic,
            Command::ToggleUnderline,
            Command::ToggleStrikethrough,
            Command::ToggleSuperscript,
            Command::ToggleSubscript,
        ];
        for command in toggles {
            let mut doc = typed("Hello world");
            doc.set_selection(Selection::new(0, 5)).unwrap();
            let before = doc.clone();
            run(&mut doc, command);
            assert_ne!(doc, before, "{:?} changed nothing", command);
            run(&mut doc, command);
            assert_eq!(doc, before, "{:?} twice is not a no-op", command);
        }
    }

    #[test]
    fn test_toggle_flips_only_its_attribute() {
        let current = CharFormat {
            italic: true,
            underline: true,
            point_size: 20,
            ..CharFormat::default()
        };
        let patch = FormatEdit::Toggle(Toggle::Bold).char_patch(&current).unwrap();
        assert_eq!(patch.apply_to(&current), CharFormat { bold: true, ..current });
        assert_eq!(FormatEdit::Align(Alignment::Right).char_patch(&current), None);
    }

    #[test]
    fn test_superscript_then_subscript() {
        let mut doc = Document::default();
        run(&mut doc, Command::ToggleSuperscript);
        assert_eq!(doc.current_format().chars.vertical_offset, VerticalOffset::Superscript);
        run(&mut doc, Command::ToggleSubscript);
        assert_eq!(
            doc.current_format().chars,
            CharFormat {
                vertical_offset: VerticalOffset::Subscript,
                ..CharFormat::default()
            }
        );
    }

    #[test]
    fn test_subscript_twice_is_normal() {
        let mut doc = Document::default();
        run(&mut doc, Command::ToggleSubscript);
        run(&mut doc, Command::ToggleSubscript);
        assert_eq!(doc.current_format().chars.vertical_offset, VerticalOffset::Normal);
    }

    #[test]
    fn test_font_floor() {
        let mut doc = Document::new(CharFormat::with_point_size(1));
        run(&mut doc, Command::DecreaseFont);
        assert_eq!(doc.current_format().chars.point_size, 1);

        let mut doc = Document::new(CharFormat::with_point_size(5));
        for _ in 0..3 {
            run(&mut doc, Command::DecreaseFont);
        }
        assert_eq!(doc.current_format().chars.point_size, 2);
    }

    #[test]
    fn test_font_increase_has_no_ceiling() {
        assert_eq!(FontStep::Increase.apply(96), 97);
        assert_eq!(FontStep::Increase.apply(u32::MAX), u32::MAX);
    }

    #[test]
    fn test_font_size_applies_to_selection() {
        let mut doc = typed("abc");
        doc.set_selection(Selection::new(0, 3)).unwrap();
        run(&mut doc, Command::IncreaseFont);
        let size = doc.paragraphs()[0].runs()[0].format.point_size;
        assert_eq!(size, CharFormat::default().point_size + 1);
    }

    #[test]
    fn test_alignment_last_write_wins() {
        let mut doc = typed("paragraph");
        for alignment in [Alignment::Left, Alignment::Center, Alignment::Justify] {
            run(&mut doc, Command::Align(alignment));
        }
        assert_eq!(doc.paragraphs()[0].alignment, Alignment::Justify);
        assert_eq!(doc.current_format().alignment, Alignment::Justify);
    }

    #[test]
    fn test_color_cancel_is_noop() {
        let mut doc = typed("abc");
        doc.set_selection(Selection::new(0, 3)).unwrap();
        let before = doc.clone();
        let mut prompt = ScriptedPrompt::default();
        let outcome = execute(&mut doc, &mut prompt, Command::ChangeColor);
        assert_eq!(outcome, CommandOutcome::Cancelled);
        assert_eq!(prompt.asked, 1);
        assert_eq!(doc, before);
    }

    #[test]
    fn test_color_applies_to_selection() {
        let mut doc = typed("abc");
        doc.set_selection(Selection::new(1, 3)).unwrap();
        let mut prompt = ScriptedPrompt {
            color: Some(Rgb::new(0, 128, 0)),
            ..Default::default()
        };
        assert_eq!(execute(&mut doc, &mut prompt, Command::ChangeColor), CommandOutcome::Applied);
        let runs = doc.paragraphs()[0].runs();
        assert_eq!(runs[0].format.color, None);
        assert_eq!(runs[1].format.color, Some(Rgb::new(0, 128, 0)));
    }

    #[test]
    fn test_hyperlink_cancel_or_empty_leaves_document() {
        for answer in [None, Some(String::new())] {
            let mut doc = typed("text");
            let before = doc.clone();
            let mut prompt = ScriptedPrompt { url: answer, ..Default::default() };
            let outcome = execute(&mut doc, &mut prompt, Command::InsertHyperlink);
            assert_eq!(outcome, CommandOutcome::Cancelled);
            assert_eq!(doc, before);
        }
    }

    #[test]
    fn test_hyperlink_accepts_any_string() {
        let mut doc = Document::default();
        let mut prompt = ScriptedPrompt {
            url: Some("not a url".to_string()),
            ..Default::default()
        };
        execute(&mut doc, &mut prompt, Command::InsertHyperlink);
        let run = &doc.paragraphs()[0].runs()[0];
        assert_eq!(run.text, "not a url");
        assert_eq!(run.link.as_deref(), Some("not a url"));
    }

    #[test]
    fn test_list_commands_switch_style() {
        let mut doc = typed("item");
        run(&mut doc, Command::BulletList);
        assert_eq!(doc.paragraphs()[0].list.map(|g| g.style), Some(ListStyle::Bullet));
        run(&mut doc, Command::NumberedList);
        assert_eq!(doc.paragraphs()[0].list.map(|g| g.style), Some(ListStyle::Numbered));
        assert_eq!(doc.list_marker(0).as_deref(), Some("1."));
    }

    #[test]
    fn test_save_cancelled() {
        let mut doc = typed("abc");
        assert_eq!(run(&mut doc, Command::Save), CommandOutcome::Cancelled);
    }

    #[test]
    fn test_save_reports_status() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.docx");
        let mut doc = typed("abc");
        let mut prompt = ScriptedPrompt { save_path: Some(path.clone()), ..Default::default() };

        let outcome = execute(&mut doc, &mut prompt, Command::Save);

        assert_eq!(outcome.status_message().as_deref(), Some("Arquivo salvo com sucesso!"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "abc");
    }

    #[test]
    fn test_save_failure_reports_status() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("doc.docx");
        let mut doc = typed("abc");
        let before = doc.clone();
        let mut prompt = ScriptedPrompt { save_path: Some(path), ..Default::default() };

        let outcome = execute(&mut doc, &mut prompt, Command::Save);

        assert!(matches!(outcome, CommandOutcome::Failed(_)));
        assert!(outcome.status_message().unwrap().starts_with("Erro ao salvar arquivo: "));
        assert_eq!(doc, before);
    }
}
