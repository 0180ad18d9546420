//! Filetype naming for files opened by the CLI host.
//!
//! The name is what keys the `<filetype>-comment-style` variable. The file
//! extension is used verbatim unless the `[filetypes]` table maps it (or, for
//! extensionless files, the file name) to something else.

use std::path::Path;

use crate::types::Config;

pub fn detect_filetype(path: &Path, config: &Config) -> String {
    let lookup = |key: &str| config.filetypes.get(key).cloned();

    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        let ext = ext.to_lowercase();
        return lookup(&ext).unwrap_or(ext);
    }

    path.file_name()
        .and_then(|n| n.to_str())
        .and_then(|name| lookup(name).or_else(|| lookup(&name.to_lowercase())))
        .unwrap_or_else(|| config.general.default_filetype.clone())
}
