pub mod app;
pub mod board;
pub mod popup;
pub mod scoreboard;
pub mod settings_modal;
pub mod win_line;

pub use app::App;
