//! Fold edits made in the editor widget back into the document.
//!
//! The widget owns keyboard input. Its buffer's modify callback reports each
//! edit as a position, a deleted byte count and the inserted text, and
//! [`apply_edit`] replays that at exactly the same offset. When the two get
//! out of step, [`sync_text`] diffs the whole text and replays the difference
//! as one [`RichTextDocument::replace`].

use std::ops::Range;

use crate::app::domain::RichTextDocument;
use crate::app::error::Result;

/// A single contiguous edit: `range` of the old text became `inserted`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub range: Range<usize>,
    pub inserted: String,
}

impl TextEdit {
    /// `deleted` bytes at `pos` were replaced by `inserted`.
    pub fn new(pos: usize, deleted: usize, inserted: impl Into<String>) -> Self {
        Self {
            range: pos..pos + deleted,
            inserted: inserted.into(),
        }
    }
}

/// Replay one edit reported by the editor buffer.
pub fn apply_edit<D: RichTextDocument + ?Sized>(doc: &mut D, edit: &TextEdit) -> Result<()> {
    doc.replace(edit.range.clone(), &edit.inserted)
}

/// Find the edit turning `old` into `new`, or `None` if they are equal.
///
/// The common prefix is taken first, then the longest common suffix of what
/// remains; both stop on char boundaries of the two strings.
pub fn diff_text(old: &str, new: &str) -> Option<TextEdit> {
    if old == new {
        return None;
    }

    let mut prefix = old
        .bytes()
        .zip(new.bytes())
        .take_while(|(a, b)| a == b)
        .count();
    while !old.is_char_boundary(prefix) || !new.is_char_boundary(prefix) {
        prefix -= 1;
    }

    let max_suffix = (old.len() - prefix).min(new.len() - prefix);
    let mut suffix = old
        .bytes()
        .rev()
        .zip(new.bytes().rev())
        .take(max_suffix)
        .take_while(|(a, b)| a == b)
        .count();
    while !old.is_char_boundary(old.len() - suffix) || !new.is_char_boundary(new.len() - suffix) {
        suffix -= 1;
    }

    Some(TextEdit {
        range: prefix..old.len() - suffix,
        inserted: new[prefix..new.len() - suffix].to_string(),
    })
}

/// Bring `doc` in line with `widget_text`. Returns whether anything changed.
pub fn sync_text<D: RichTextDocument + ?Sized>(doc: &mut D, widget_text: &str) -> Result<bool> {
    let current = doc.plain_text();
    match diff_text(&current, widget_text) {
        Some(edit) => {
            log::debug!("Replaying edit {:?} ({} bytes inserted)", edit.range, edit.inserted.len());
            doc.replace(edit.range, &edit.inserted)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::{CharFormat, CharFormatPatch, Document, Paragraph, Run, Selection};

    fn bold() -> CharFormatPatch {
        CharFormatPatch { bold: Some(true), ..Default::default() }
    }

    fn runs(doc: &Document) -> Vec<(String, bool)> {
        doc.paragraphs()[0]
            .runs()
            .iter()
            .map(|r| (r.text.clone(), r.format.bold))
            .collect()
    }

    #[test]
    fn test_equal_texts() {
        assert_eq!(diff_text("same", "same"), None);
    }

    #[test]
    fn test_insertion() {
        let edit = diff_text("Hello world", "Hello big world").unwrap();
        assert_eq!(edit.range, 6..6);
        assert_eq!(edit.inserted, "big ");
    }

    #[test]
    fn test_deletion() {
        let edit = diff_text("abcdef", "abef").unwrap();
        assert_eq!(edit.range, 2..4);
        assert_eq!(edit.inserted, "");
    }

    #[test]
    fn test_replacement() {
        let edit = diff_text("cat", "cut").unwrap();
        assert_eq!(edit.range, 1..2);
        assert_eq!(edit.inserted, "u");
    }

    #[test]
    fn test_repeated_char_insert() {
        let edit = diff_text("aa", "aaa").unwrap();
        assert_eq!(edit.range, 2..2);
        assert_eq!(edit.inserted, "a");
    }

    #[test]
    fn test_multibyte_boundaries() {
        // 'é' and 'è' share their first UTF-8 byte.
        let edit = diff_text("café", "cafè").unwrap();
        assert_eq!(edit.range, 3..5);
        assert_eq!(edit.inserted, "è");
    }

    #[test]
    fn test_typing_into_empty() {
        let edit = diff_text("", "x").unwrap();
        assert_eq!(edit.range, 0..0);
        assert_eq!(edit.inserted, "x");
    }

    #[test]
    fn test_sync_applies_pending_format() {
        let mut doc = Document::default();
        doc.insert_text("Hello").unwrap();
        doc.merge_char_format(&CharFormatPatch { italic: Some(true), ..Default::default() });

        assert!(sync_text(&mut doc, "Hello there").unwrap());
        assert!(!sync_text(&mut doc, "Hello there").unwrap());

        let runs = doc.paragraphs()[0].runs();
        assert_eq!(runs[1].text, " there");
        assert!(runs[1].format.italic);
    }

    #[test]
    fn test_sync_enter_and_backspace() {
        let mut doc = Document::default();
        sync_text(&mut doc, "ab").unwrap();
        sync_text(&mut doc, "a\nb").unwrap();
        assert_eq!(doc.paragraphs().len(), 2);
        sync_text(&mut doc, "ab").unwrap();
        assert_eq!(doc.paragraphs().len(), 1);
        assert_eq!(doc.plain_text(), "ab");
    }

    #[test]
    fn test_typing_before_identical_char_lands_at_caret() {
        let mut doc = Document::default();
        doc.insert_text("ab").unwrap();
        doc.set_selection(Selection::caret(0)).unwrap();
        doc.merge_char_format(&bold());

        apply_edit(&mut doc, &TextEdit::new(0, 0, "a")).unwrap();

        assert_eq!(doc.plain_text(), "aab");
        assert_eq!(
            runs(&doc),
            vec![("a".to_string(), true), ("ab".to_string(), false)]
        );
        assert_eq!(doc.selection(), Selection::caret(1));
    }

    #[test]
    fn test_backspace_removes_the_reported_run() {
        let mut doc = Document::from_paragraphs(vec![Paragraph::from_runs(vec![
            Run::new("a", CharFormat::default()),
            Run::new("a", CharFormat { bold: true, ..CharFormat::default() }),
        ])]);

        // Backspace after the plain "a".
        apply_edit(&mut doc, &TextEdit::new(0, 1, "")).unwrap();

        assert_eq!(runs(&doc), vec![("a".to_string(), true)]);
    }

    #[test]
    fn test_replacing_a_selection_is_remove_then_insert() {
        let mut doc = Document::default();
        doc.insert_text("one two").unwrap();

        apply_edit(&mut doc, &TextEdit::new(4, 3, "")).unwrap();
        apply_edit(&mut doc, &TextEdit::new(4, 0, "three")).unwrap();

        assert_eq!(doc.plain_text(), "one three");
    }

    #[test]
    fn test_edit_past_the_end_is_rejected() {
        let mut doc = Document::default();
        doc.insert_text("abc").unwrap();
        assert!(apply_edit(&mut doc, &TextEdit::new(2, 5, "")).is_err());
        assert_eq!(doc.plain_text(), "abc");
    }
}
