use std::collections::HashMap;

use fltk::enums::{Color, Font};
use fltk::text::{StyleTableEntryExt, TextAttr};

use crate::app::domain::{CharFormat, Document, Rgb, VerticalOffset};

/// Hyperlinks are drawn in the classic link blue.
pub const LINK_COLOR: Rgb = Rgb::new(0, 0, 238);

/// Upper bound on style chars: 'A' through 'z'.
const MAX_STYLES: usize = 58;

const MAX_DRAWN_SIZE: u32 = 1000;

/// What FLTK can actually draw of a run's format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct StyleKey {
    bold: bool,
    italic: bool,
    underline: bool,
    strikethrough: bool,
    color: Option<Rgb>,
    size: i32,
}

impl StyleKey {
    fn of(format: &CharFormat, link: bool) -> Self {
        let size = format.point_size.min(MAX_DRAWN_SIZE);
        let size = match format.vertical_offset {
            VerticalOffset::Normal => size,
            VerticalOffset::Superscript | VerticalOffset::Subscript => (size * 2 / 3).max(1),
        };
        Self {
            bold: format.bold,
            italic: format.italic,
            underline: format.underline || link,
            strikethrough: format.strikethrough,
            color: if link { Some(LINK_COLOR) } else { format.color },
            size: size as i32,
        }
    }

    fn entry(&self) -> StyleTableEntryExt {
        let font = match (self.bold, self.italic) {
            (false, false) => Font::Helvetica,
            (true, false) => Font::HelveticaBold,
            (false, true) => Font::HelveticaItalic,
            (true, true) => Font::HelveticaBoldItalic,
        };
        let mut attr = TextAttr::None;
        if self.underline {
            attr |= TextAttr::Underline;
        }
        if self.strikethrough {
            attr |= TextAttr::StrikeThrough;
        }
        StyleTableEntryExt {
            color: match self.color {
                Some(c) => Color::from_rgb(c.r, c.g, c.b),
                None => Color::Foreground,
            },
            font,
            size: self.size,
            attr,
            bgcolor: Color::Background2,
        }
    }
}

/// Maps run formats to FLTK style characters ('A', 'B', 'C', ...).
/// Built fresh for every render so the table only holds styles in use.
pub struct StyleMap {
    key_to_char: HashMap<StyleKey, char>,
    entries: Vec<StyleTableEntryExt>,
    base: CharFormat,
}

impl StyleMap {
    /// `base` is the style of paragraph separators and the fallback entry.
    pub fn new(base: CharFormat) -> Self {
        let mut map = Self {
            key_to_char: HashMap::new(),
            entries: Vec::new(),
            base,
        };
        map.clear();
        map
    }

    pub fn get_or_insert(&mut self, format: &CharFormat, link: bool) -> char {
        let key = StyleKey::of(format, link);
        if let Some(&ch) = self.key_to_char.get(&key) {
            return ch;
        }
        let idx = self.entries.len();
        if idx >= MAX_STYLES {
            return 'A';
        }
        let ch = (b'A' + idx as u8) as char;
        self.entries.push(key.entry());
        self.key_to_char.insert(key, ch);
        ch
    }

    /// Get the style table entries for FLTK's set_highlight_data_ext.
    pub fn entries(&self) -> Vec<StyleTableEntryExt> {
        self.entries.clone()
    }

    pub fn clear(&mut self) {
        self.key_to_char.clear();
        self.entries.clear();
        let base = self.base;
        self.get_or_insert(&base, false);
    }

    /// One style char per byte of the document's plain text.
    pub fn render(&mut self, doc: &Document) -> String {
        self.clear();
        let mut styles = String::with_capacity(doc.len());
        for (i, paragraph) in doc.paragraphs().iter().enumerate() {
            if i > 0 {
                styles.push('A');
            }
            for run in paragraph.runs() {
                let ch = self.get_or_insert(&run.format, run.link.is_some());
                styles.extend(std::iter::repeat_n(ch, run.text.len()));
            }
        }
        styles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::{Paragraph, Run};

    #[test]
    fn test_render_one_char_per_byte() {
        let bold = CharFormat { bold: true, ..CharFormat::default() };
        let doc = Document::from_paragraphs(vec![
            Paragraph::from_runs(vec![
                Run::new("Olá", CharFormat::default()),
                Run::new("!", bold),
            ]),
            Paragraph::from_runs(vec![Run::hyperlink("x.y", CharFormat::default())]),
        ]);
        let mut map = StyleMap::new(CharFormat::default());

        let styles = map.render(&doc);

        assert_eq!(styles.len(), doc.len());
        assert_eq!(styles, "AAAABACCC");
        assert_eq!(map.entries().len(), 3);
    }

    #[test]
    fn test_underline_and_strikethrough_get_their_own_style() {
        let mut map = StyleMap::new(CharFormat::default());
        let underlined = CharFormat { underline: true, ..CharFormat::default() };
        let struck = CharFormat { strikethrough: true, ..CharFormat::default() };
        let both = CharFormat { underline: true, strikethrough: true, ..CharFormat::default() };

        assert_eq!(map.get_or_insert(&underlined, false), 'B');
        assert_eq!(map.get_or_insert(&struck, false), 'C');
        assert_eq!(map.get_or_insert(&both, false), 'D');

        let entries = map.entries();
        assert_eq!(entries[0].attr, TextAttr::None);
        assert_eq!(entries[1].attr, TextAttr::Underline);
        assert_eq!(entries[2].attr, TextAttr::StrikeThrough);
        assert_eq!(entries[3].attr, TextAttr::Underline | TextAttr::StrikeThrough);
    }

    #[test]
    fn test_links_are_underlined() {
        let mut map = StyleMap::new(CharFormat::default());
        let underlined = CharFormat { underline: true, ..CharFormat::default() };
        let link = map.get_or_insert(&CharFormat::default(), true);
        assert_eq!(link, 'B');
        assert_eq!(map.entries()[1].attr, TextAttr::Underline);
        // A plain underline is still a different style: it is not blue.
        assert_eq!(map.get_or_insert(&underlined, false), 'C');
    }

    #[test]
    fn test_superscript_is_drawn_smaller() {
        let mut map = StyleMap::new(CharFormat::default());
        let superscript = CharFormat {
            vertical_offset: VerticalOffset::Superscript,
            ..CharFormat::default()
        };
        assert_eq!(map.get_or_insert(&superscript, false), 'B');
        assert_eq!(map.entries()[1].size, 8);
    }
}
