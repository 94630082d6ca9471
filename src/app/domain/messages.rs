use super::format::Alignment;

/// A formatting or file command, one per toolbar button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ChangeColor,
    IncreaseFont,
    DecreaseFont,
    ToggleBold,
    ToggleItalic,
    ToggleUnderline,
    ToggleStrikethrough,
    InsertHyperlink,
    ToggleSuperscript,
    ToggleSubscript,
    Align(Alignment),
    BulletList,
    NumberedList,
    Save,
}

impl Command {
    /// Toolbar label, in toolbar order.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ChangeColor => "Cor",
            Self::IncreaseFont => "Aumentar Fonte",
            Self::DecreaseFont => "Diminuir Fonte",
            Self::ToggleBold => "Negrito",
            Self::ToggleItalic => "Itálico",
            Self::ToggleUnderline => "Sublinhado",
            Self::ToggleStrikethrough => "Riscado",
            Self::InsertHyperlink => "Hiperlink",
            Self::ToggleSuperscript => "Sobrescrito",
            Self::ToggleSubscript => "Subscrito",
            Self::Align(Alignment::Left) => "Alinhar Esquerda",
            Self::Align(Alignment::Center) => "Alinhar Centro",
            Self::Align(Alignment::Right) => "Alinhar Direita",
            Self::Align(Alignment::Justify) => "Justificar",
            Self::BulletList => "Lista de Pontos",
            Self::NumberedList => "Lista de Números",
            Self::Save => "Salvar Arquivo",
        }
    }

    /// Every command in toolbar order.
    pub fn all() -> &'static [Command] {
        &[
            Self::ChangeColor,
            Self::IncreaseFont,
            Self::DecreaseFont,
            Self::ToggleBold,
            Self::ToggleItalic,
            Self::ToggleUnderline,
            Self::ToggleStrikethrough,
            Self::InsertHyperlink,
            Self::ToggleSuperscript,
            Self::ToggleSubscript,
            Self::Align(Alignment::Left),
            Self::Align(Alignment::Center),
            Self::Align(Alignment::Right),
            Self::Align(Alignment::Justify),
            Self::BulletList,
            Self::NumberedList,
            Self::Save,
        ]
    }
}

/// All messages that can be sent through the FLTK channel.
/// Each toolbar button sends one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Run(Command),
    /// The editor buffer changed: `deleted` bytes at `pos` became `inserted`.
    Edited {
        pos: usize,
        deleted: usize,
        inserted: String,
    },
    WindowClose,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toolbar_order() {
        let all = Command::all();
        assert_eq!(all.len(), 17);
        assert_eq!(all.first(), Some(&Command::ChangeColor));
        assert_eq!(all.last(), Some(&Command::Save));
    }

    #[test]
    fn test_labels_are_unique() {
        let mut labels: Vec<_> = Command::all().iter().map(Command::label).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), Command::all().len());
    }
}
