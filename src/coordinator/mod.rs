mod app;
pub mod cli;
pub mod commands;
mod frame;
mod toggle;

pub use app::App;
pub use commands::{COMMENT_TOGGLE, CommandError, CommandRegistry};
pub use frame::Frame;
pub use toggle::ToggleController;
