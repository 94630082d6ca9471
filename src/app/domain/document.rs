use std::ops::{Range, RangeInclusive};

use super::format::{Alignment, CharFormat, CharFormatPatch, FormatState, ListStyle};
use super::rich_text::{RichTextDocument, Selection};
use crate::app::error::{AppError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListId(pub u64);

/// Membership of a paragraph in a list. Paragraphs sharing an `id` are
/// numbered together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListGroup {
    pub id: ListId,
    pub style: ListStyle,
}

/// A span of text in one format. Hyperlink runs also carry their target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub text: String,
    pub format: CharFormat,
    pub link: Option<String>,
}

impl Run {
    pub fn new(text: impl Into<String>, format: CharFormat) -> Self {
        Self {
            text: text.into(),
            format,
            link: None,
        }
    }

    pub fn hyperlink(url: &str, format: CharFormat) -> Self {
        Self {
            text: url.to_string(),
            format,
            link: Some(url.to_string()),
        }
    }

    fn same_style(&self, other: &Run) -> bool {
        self.format == other.format && self.link == other.link
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Paragraph {
    runs: Vec<Run>,
    pub alignment: Alignment,
    pub list: Option<ListGroup>,
}

impl Paragraph {
    pub fn from_runs(runs: Vec<Run>) -> Self {
        let mut paragraph = Self {
            runs,
            ..Self::default()
        };
        paragraph.normalize();
        paragraph
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    pub fn len(&self) -> usize {
        self.runs.iter().map(|r| r.text.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    fn is_char_boundary(&self, offset: usize) -> bool {
        let mut start = 0;
        for run in &self.runs {
            let end = start + run.text.len();
            if offset <= end {
                return run.text.is_char_boundary(offset - start);
            }
            start = end;
        }
        offset == start
    }

    /// Format of the character starting at `offset`.
    fn format_at(&self, offset: usize) -> Option<CharFormat> {
        let mut start = 0;
        for run in &self.runs {
            let end = start + run.text.len();
            if offset < end {
                return Some(run.format);
            }
            start = end;
        }
        None
    }

    /// Make `offset` fall on a run boundary and return the index of the run
    /// starting there (`runs.len()` at the end).
    fn split_at(&mut self, offset: usize) -> usize {
        let mut start = 0;
        for i in 0..self.runs.len() {
            if offset == start {
                return i;
            }
            let end = start + self.runs[i].text.len();
            if offset < end {
                let tail = self.runs[i].text.split_off(offset - start);
                let right = Run {
                    text: tail,
                    format: self.runs[i].format,
                    link: self.runs[i].link.clone(),
                };
                self.runs.insert(i + 1, right);
                return i + 1;
            }
            start = end;
        }
        self.runs.len()
    }

    fn insert_runs(&mut self, offset: usize, runs: Vec<Run>) {
        let idx = self.split_at(offset);
        self.runs.splice(idx..idx, runs);
        self.normalize();
    }

    fn remove(&mut self, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        let start = self.split_at(range.start);
        let end = self.split_at(range.end);
        self.runs.drain(start..end);
        self.normalize();
    }

    fn patch(&mut self, range: Range<usize>, patch: &CharFormatPatch) {
        if range.is_empty() {
            return;
        }
        let start = self.split_at(range.start);
        let end = self.split_at(range.end);
        for run in &mut self.runs[start..end] {
            run.format = patch.apply_to(&run.format);
        }
        self.normalize();
    }

    /// Cut the paragraph at `offset`; the tail keeps alignment and list.
    fn split_off(&mut self, offset: usize) -> Paragraph {
        let idx = self.split_at(offset);
        let tail = self.runs.split_off(idx);
        self.normalize();
        Paragraph {
            runs: tail,
            alignment: self.alignment,
            list: self.list,
        }
    }

    fn append(&mut self, other: Paragraph) {
        self.runs.extend(other.runs);
        self.normalize();
    }

    fn normalize(&mut self) {
        self.runs.retain(|r| !r.text.is_empty());
        let mut merged: Vec<Run> = Vec::with_capacity(self.runs.len());
        for run in self.runs.drain(..) {
            match merged.last_mut() {
                Some(last) if last.same_style(&run) => last.text.push_str(&run.text),
                _ => merged.push(run),
            }
        }
        self.runs = merged;
    }
}

/// In-memory rich-text document: paragraphs of runs, the selection, and the
/// pending format for the next typed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    paragraphs: Vec<Paragraph>,
    selection: Selection,
    pending: CharFormat,
    next_list_id: u64,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(CharFormat::default())
    }
}

impl Document {
    /// An empty document whose typed text starts in `format`.
    pub fn new(format: CharFormat) -> Self {
        Self {
            paragraphs: vec![Paragraph::default()],
            selection: Selection::default(),
            pending: format,
            next_list_id: 1,
        }
    }

    /// Build a document from ready-made paragraphs, caret at the start.
    pub fn from_paragraphs(paragraphs: Vec<Paragraph>) -> Self {
        let mut doc = Self::default();
        if !paragraphs.is_empty() {
            doc.paragraphs = paragraphs;
        }
        doc
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Length of the plain text in bytes, paragraph separators included.
    pub fn len(&self) -> usize {
        let text: usize = self.paragraphs.iter().map(Paragraph::len).sum();
        text + self.paragraphs.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Index of the paragraph holding the caret.
    pub fn cursor_paragraph(&self) -> usize {
        self.locate(self.selection.head).map(|(p, _)| p).unwrap_or(0)
    }

    /// List marker of a paragraph: `•` for bullets, `N.` for the N-th item of
    /// a numbered group.
    pub fn list_marker(&self, index: usize) -> Option<String> {
        let group = self.paragraphs.get(index)?.list?;
        match group.style {
            ListStyle::Bullet => Some("\u{2022}".to_string()),
            ListStyle::Numbered => {
                let ordinal = self.paragraphs[..=index]
                    .iter()
                    .filter(|p| p.list.map(|g| g.id) == Some(group.id))
                    .count();
                Some(format!("{}.", ordinal))
            }
        }
    }

    /// Map a plain-text offset to (paragraph index, offset in paragraph).
    fn locate(&self, pos: usize) -> Result<(usize, usize)> {
        let mut start = 0;
        for (i, paragraph) in self.paragraphs.iter().enumerate() {
            let end = start + paragraph.len();
            if pos <= end {
                if !paragraph.is_char_boundary(pos - start) {
                    break;
                }
                return Ok((i, pos - start));
            }
            start = end + 1;
        }
        Err(AppError::InvalidPosition {
            offset: pos,
            len: self.len(),
        })
    }

    fn touched_paragraphs(&self) -> RangeInclusive<usize> {
        let start = self.locate(self.selection.start()).map(|(p, _)| p).unwrap_or(0);
        let end = self.locate(self.selection.end()).map(|(p, _)| p).unwrap_or(start);
        start..=end
    }

    fn first_selected_format(&self) -> Option<CharFormat> {
        let (sp, so) = self.locate(self.selection.start()).ok()?;
        let (ep, eo) = self.locate(self.selection.end()).ok()?;
        for i in sp..=ep {
            let from = if i == sp { so } else { 0 };
            if i == ep && from >= eo {
                break;
            }
            if let Some(format) = self.paragraphs[i].format_at(from) {
                return Some(format);
            }
        }
        None
    }

    /// Remove `range` and insert `runs` in its place; `'\n'` inside run text
    /// opens new paragraphs. Returns the offset just after the insertion.
    fn splice(&mut self, range: Range<usize>, runs: Vec<Run>) -> Result<usize> {
        if range.start > range.end {
            return Err(AppError::InvalidPosition {
                offset: range.start,
                len: self.len(),
            });
        }
        let (sp, so) = self.locate(range.start)?;
        let (ep, eo) = self.locate(range.end)?;

        if sp == ep {
            self.paragraphs[sp].remove(so..eo);
        } else {
            let mut last = self.paragraphs[ep].clone();
            last.remove(0..eo);
            self.paragraphs.drain(sp + 1..=ep);
            let len = self.paragraphs[sp].len();
            self.paragraphs[sp].remove(so..len);
            self.paragraphs[sp].append(last);
        }

        let inserted: usize = runs.iter().map(|r| r.text.len()).sum();

        // Group the runs into lines.
        let mut lines: Vec<Vec<Run>> = vec![Vec::new()];
        for run in runs {
            for (i, piece) in run.text.split('\n').enumerate() {
                let piece = Run {
                    text: piece.to_string(),
                    format: run.format,
                    link: run.link.clone(),
                };
                match lines.last_mut() {
                    Some(line) if i == 0 => line.push(piece),
                    _ => lines.push(vec![piece]),
                }
            }
        }

        let mut lines = lines.into_iter();
        let first = lines.next().unwrap_or_default();
        let rest: Vec<Vec<Run>> = lines.collect();

        if rest.is_empty() {
            self.paragraphs[sp].insert_runs(so, first);
        } else {
            let mut tail = self.paragraphs[sp].split_off(so);
            self.paragraphs[sp].insert_runs(so, first);
            let alignment = self.paragraphs[sp].alignment;
            let list = self.paragraphs[sp].list;
            let count = rest.len();
            let mut created = Vec::with_capacity(count);
            for (i, line) in rest.into_iter().enumerate() {
                if i + 1 == count {
                    tail.insert_runs(0, line);
                    created.push(std::mem::take(&mut tail));
                } else {
                    let mut paragraph = Paragraph::from_runs(line);
                    paragraph.alignment = alignment;
                    paragraph.list = list;
                    created.push(paragraph);
                }
            }
            self.paragraphs.splice(sp + 1..sp + 1, created);
        }

        Ok(range.start + inserted)
    }
}

impl RichTextDocument for Document {
    fn selection(&self) -> Selection {
        self.selection
    }

    fn set_selection(&mut self, selection: Selection) -> Result<()> {
        self.locate(selection.anchor)?;
        self.locate(selection.head)?;
        self.selection = selection;
        Ok(())
    }

    fn current_format(&self) -> FormatState {
        let chars = if self.selection.is_collapsed() {
            self.pending
        } else {
            self.first_selected_format().unwrap_or(self.pending)
        };
        let alignment = self.paragraphs[self.cursor_paragraph()].alignment;
        FormatState { chars, alignment }
    }

    fn merge_char_format(&mut self, patch: &CharFormatPatch) {
        if patch.is_empty() {
            return;
        }
        self.pending = patch.apply_to(&self.pending);
        if self.selection.is_collapsed() {
            return;
        }
        let (Ok((sp, so)), Ok((ep, eo))) = (
            self.locate(self.selection.start()),
            self.locate(self.selection.end()),
        ) else {
            return;
        };
        for i in sp..=ep {
            let paragraph = &mut self.paragraphs[i];
            let from = if i == sp { so } else { 0 };
            let to = if i == ep { eo } else { paragraph.len() };
            paragraph.patch(from..to, patch);
        }
    }

    fn set_alignment(&mut self, alignment: Alignment) {
        for i in self.touched_paragraphs() {
            self.paragraphs[i].alignment = alignment;
        }
    }

    fn create_list(&mut self, style: ListStyle) {
        let group = ListGroup {
            id: ListId(self.next_list_id),
            style,
        };
        self.next_list_id += 1;
        for i in self.touched_paragraphs() {
            self.paragraphs[i].list = Some(group);
        }
    }

    fn replace(&mut self, range: Range<usize>, text: &str) -> Result<()> {
        let end = self.splice(range, vec![Run::new(text, self.pending)])?;
        self.selection = Selection::caret(end);
        Ok(())
    }

    fn insert_hyperlink(&mut self, url: &str) -> Result<()> {
        // A link is a single inline run.
        let url = url.replace('\n', " ");
        let range = self.selection.range();
        let end = self.splice(range, vec![Run::hyperlink(&url, self.pending)])?;
        self.selection = Selection::caret(end);
        Ok(())
    }

    fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
