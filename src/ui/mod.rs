//! Terminal UI: a full-screen game view with a column selector, driven by the
//! keyboard or by the random picker.

mod app;
pub mod board_widget;
mod game_view;

pub use app::App;
