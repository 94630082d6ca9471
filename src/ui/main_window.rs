use fltk::{
    app::Sender,
    enums::{Align, Color, FrameType},
    frame::Frame,
    group::{Flex, FlexType},
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
    window::Window,
};

use super::toolbar::build_toolbar;
use crate::app::domain::{EditorConfig, Message};

pub struct MainWidgets {
    pub wind: Window,
    pub text_editor: TextEditor,
    pub buffer: TextBuffer,
    pub style_buffer: TextBuffer,
    pub status: Frame,
}

pub fn build_main_window(config: &EditorConfig, sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(
        config.window_x,
        config.window_y,
        config.window_width,
        config.window_height,
        None,
    );
    wind.set_label(&config.window_title);
    wind.set_xclass("RichPad");

    let mut flex = Flex::new(0, 0, config.window_width, config.window_height, None);
    flex.set_type(FlexType::Column);

    let mut toolbar = Flex::new(0, 0, 0, config.toolbar_height, None);
    toolbar.set_type(FlexType::Row);
    build_toolbar(&mut toolbar, sender);
    flex.fixed(&toolbar, config.toolbar_height);

    let buffer = TextBuffer::default();
    let style_buffer = TextBuffer::default();
    let mut text_editor = TextEditor::new(0, 0, 0, 0, "");
    text_editor.set_buffer(buffer.clone());
    text_editor.wrap_mode(WrapMode::AtBounds, 0);

    let mut status = Frame::default();
    status.set_frame(FrameType::FlatBox);
    status.set_color(Color::from_rgb(240, 240, 240));
    status.set_label_size(13);
    status.set_align(Align::Left | Align::Inside);
    flex.fixed(&status, config.status_bar_height);

    flex.end();
    wind.resizable(&flex);
    wind.end();

    let s = sender.clone();
    wind.set_callback(move |_| {
        if fltk::app::event() == fltk::enums::Event::Close {
            s.send(Message::WindowClose);
        }
    });

    MainWidgets {
        wind,
        text_editor,
        buffer,
        style_buffer,
        status,
    }
}
