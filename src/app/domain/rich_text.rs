//! The capability the formatting commands are written against.
//!
//! Commands never see a concrete document type: anything that can report the
//! format at the edit point and accept merges, paragraph changes and text
//! insertion can be driven by the toolbar. [`Document`](super::Document) is
//! the in-memory implementation.

use std::ops::Range;

use super::format::{Alignment, CharFormatPatch, FormatState, ListStyle};
use crate::app::error::Result;

/// Cursor and selection as byte offsets into the plain text.
///
/// `head` is where the caret sits; `anchor` is the other end of the
/// selection and equals `head` when nothing is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub anchor: usize,
    pub head: usize,
}

impl Selection {
    pub fn caret(pos: usize) -> Self {
        Self { anchor: pos, head: pos }
    }

    pub fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    pub fn is_collapsed(&self) -> bool {
        self.anchor == self.head
    }

    pub fn start(&self) -> usize {
        self.anchor.min(self.head)
    }

    pub fn end(&self) -> usize {
        self.anchor.max(self.head)
    }

    pub fn range(&self) -> Range<usize> {
        self.start()..self.end()
    }
}

pub trait RichTextDocument {
    fn selection(&self) -> Selection;

    fn set_selection(&mut self, selection: Selection) -> Result<()>;

    /// Format at the edit point: the pending format for a collapsed cursor,
    /// the first selected character otherwise.
    fn current_format(&self) -> FormatState;

    /// Merge into the selection (if any) and into the pending format.
    fn merge_char_format(&mut self, patch: &CharFormatPatch);

    /// Set the alignment of every paragraph touched by the selection.
    fn set_alignment(&mut self, alignment: Alignment);

    /// Move every paragraph touched by the selection into a new list group.
    fn create_list(&mut self, style: ListStyle);

    /// Replace `range` with `text` in the pending format and leave the caret
    /// after the inserted text. `'\n'` starts a new paragraph.
    fn replace(&mut self, range: Range<usize>, text: &str) -> Result<()>;

    fn insert_text(&mut self, text: &str) -> Result<()> {
        let range = self.selection().range();
        self.replace(range, text)
    }

    /// Replace the selection with a run whose text and target are both `url`.
    fn insert_hyperlink(&mut self, url: &str) -> Result<()>;

    fn plain_text(&self) -> String;
}
