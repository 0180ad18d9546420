mod comment_style;
mod config;
mod outcome;

pub use comment_style::{Classification, CommentStyle};
pub use config::{Config, GeneralConfig};
pub use outcome::{RowChange, ToggleError, ToggleOutcome};
