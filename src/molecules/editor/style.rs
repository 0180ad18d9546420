use std::collections::BTreeMap;

use crate::types::{CommentStyle, Config};

/// Read-only access to the host's string variables.
pub trait VarStore {
    fn get_var(&self, key: &str) -> Option<&str>;
}

impl VarStore for Config {
    fn get_var(&self, key: &str) -> Option<&str> {
        self.var(key)
    }
}

impl VarStore for BTreeMap<String, String> {
    fn get_var(&self, key: &str) -> Option<&str> {
        self.get(key).map(|s| s.as_str())
    }
}

/// Name of the variable holding the comment style for `filetype`.
pub fn style_var_name(filetype: &str) -> String {
    format!("{}-comment-style", filetype)
}

/// Looks up comment styles from `<filetype>-comment-style` variables.
pub struct StyleResolver<'a, V: VarStore + ?Sized> {
    vars: &'a V,
}

impl<'a, V: VarStore + ?Sized> StyleResolver<'a, V> {
    pub fn new(vars: &'a V) -> Self {
        Self { vars }
    }

    /// `None` when the variable is unset or holds no tokens.
    pub fn resolve(&self, filetype: &str) -> Option<CommentStyle> {
        let key = style_var_name(filetype);
        let value = self.vars.get_var(&key)?;
        let style = CommentStyle::parse(value);
        if style.is_none() {
            tracing::debug!(key = %key, "comment style variable has no tokens");
        }
        style
    }
}
