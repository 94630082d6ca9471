use fltk::{
    app::Sender,
    button::Button,
    enums::{Font, Shortcut},
    group::Flex,
    prelude::*,
};

use crate::app::domain::{Alignment, Command, Message};

/// Short caption drawn on the button; the full label goes in the tooltip.
fn caption(command: Command) -> &'static str {
    match command {
        Command::ChangeColor => "Cor",
        Command::IncreaseFont => "A+",
        Command::DecreaseFont => "A-",
        Command::ToggleBold => "N",
        Command::ToggleItalic => "I",
        Command::ToggleUnderline => "S",
        Command::ToggleStrikethrough => "R",
        Command::InsertHyperlink => "Link",
        Command::ToggleSuperscript => "x\u{b2}",
        Command::ToggleSubscript => "x\u{2082}",
        Command::Align(Alignment::Left) => "Esq",
        Command::Align(Alignment::Center) => "Cen",
        Command::Align(Alignment::Right) => "Dir",
        Command::Align(Alignment::Justify) => "Just",
        Command::BulletList => "\u{2022}",
        Command::NumberedList => "1.",
        Command::Save => "Salvar",
    }
}

fn shortcut(command: Command) -> Shortcut {
    match command {
        Command::ToggleBold => Shortcut::Ctrl | 'b',
        Command::ToggleItalic => Shortcut::Ctrl | 'i',
        Command::ToggleUnderline => Shortcut::Ctrl | 'u',
        Command::Save => Shortcut::Ctrl | 's',
        _ => Shortcut::None,
    }
}

fn caption_font(command: Command) -> Font {
    match command {
        Command::ToggleBold => Font::HelveticaBold,
        Command::ToggleItalic => Font::HelveticaItalic,
        _ => Font::Helvetica,
    }
}

/// Fill `row` with one button per command, in toolbar order.
pub fn build_toolbar(row: &mut Flex, sender: &Sender<Message>) {
    row.begin();
    for &command in Command::all() {
        let mut button = Button::default().with_label(caption(command));
        button.set_tooltip(command.label());
        button.set_label_font(caption_font(command));
        button.set_shortcut(shortcut(command));
        button.emit(sender.clone(), Message::Run(command));
    }
    row.end();
}
