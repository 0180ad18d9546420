mod buffer;
pub mod comment;
pub mod host;
mod line;
pub mod selection;
pub mod style;

pub use buffer::{DEFAULT_FILETYPE, TextBuffer};
pub use comment::{classify, comment_line, toggle_line, uncomment_line};
pub use host::{EditBuffer, EditSurface, LineEditor};
pub use line::Line;
pub use selection::Selection;
pub use style::{StyleResolver, VarStore, style_var_name};
