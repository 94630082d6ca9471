use fltk::{app, prelude::*};
use log::LevelFilter;

use rich_pad::app::domain::{EditorConfig, Message};
use rich_pad::app::state::AppState;
use rich_pad::ui::main_window::build_main_window;

fn main() {
    let mut logger = env_logger::Builder::from_default_env();
    if std::env::var_os("RUST_LOG").is_none() {
        logger.filter_level(LevelFilter::Info);
        logger.filter_module("rich_pad", LevelFilter::Debug);
    }
    logger.init();

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let config = EditorConfig::default();
    let mut widgets = build_main_window(&config, &sender);
    widgets.wind.show();

    let mut state = AppState::new(widgets, &config, sender);
    log::info!("Editor started with an empty document");

    while app.wait() {
        // Edits are queued in the order the buffer saw them.
        while let Some(msg) = receiver.recv() {
            match msg {
                Message::Edited { pos, deleted, inserted } => state.apply_edit(pos, deleted, &inserted),
                Message::Run(command) => state.run_command(command),
                Message::WindowClose => {
                    log::info!("Window closed, discarding unsaved document");
                    state.quit();
                    app.quit();
                }
            }
        }
        state.sync_from_editor();
    }
}
