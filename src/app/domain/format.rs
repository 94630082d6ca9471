//! Character and paragraph format records.
//!
//! Everything here is a plain value type: formats are copied into runs,
//! compared to merge neighbouring runs, and patched by the command layer.

/// Point size used for a fresh document.
pub const DEFAULT_POINT_SIZE: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerticalOffset {
    #[default]
    Normal,
    Superscript,
    Subscript,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Left => "Esquerda",
            Self::Center => "Centro",
            Self::Right => "Direita",
            Self::Justify => "Justificado",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListStyle {
    /// Unordered, disc bullet.
    Bullet,
    /// Ordered, decimal numbering.
    Numbered,
}

/// Per-run character formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharFormat {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
    pub vertical_offset: VerticalOffset,
    /// `None` means the host's default foreground.
    pub color: Option<Rgb>,
    /// Always at least 1.
    pub point_size: u32,
}

impl Default for CharFormat {
    fn default() -> Self {
        Self::with_point_size(DEFAULT_POINT_SIZE)
    }
}

impl CharFormat {
    pub fn with_point_size(point_size: u32) -> Self {
        Self {
            bold: false,
            italic: false,
            underline: false,
            strikethrough: false,
            vertical_offset: VerticalOffset::Normal,
            color: None,
            point_size: point_size.max(1),
        }
    }
}

/// The effective formatting at the edit point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatState {
    pub chars: CharFormat,
    pub alignment: Alignment,
}

/// A partial character format. Only the `Some` fields are written when the
/// patch is merged, so unrelated attributes of every run survive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharFormatPatch {
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<bool>,
    pub strikethrough: Option<bool>,
    pub vertical_offset: Option<VerticalOffset>,
    pub color: Option<Rgb>,
    pub point_size: Option<u32>,
}

impl CharFormatPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply_to(&self, format: &CharFormat) -> CharFormat {
        CharFormat {
            bold: self.bold.unwrap_or(format.bold),
            italic: self.italic.unwrap_or(format.italic),
            underline: self.underline.unwrap_or(format.underline),
            strikethrough: self.strikethrough.unwrap_or(format.strikethrough),
            vertical_offset: self.vertical_offset.unwrap_or(format.vertical_offset),
            color: self.color.or(format.color),
            point_size: self.point_size.map(|s| s.max(1)).unwrap_or(format.point_size),
        }
    }
}
