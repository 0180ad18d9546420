mod config_io;
mod file_io;

pub use config_io::{
    config_dir, config_path, ensure_config_dir, expand_tilde, load_config, load_config_from,
    save_config, save_config_to,
};
pub use file_io::{Document, LineEnding, read_document, write_document};
