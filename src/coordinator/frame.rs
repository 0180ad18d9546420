use std::path::{Path, PathBuf};

use crate::molecules::editor::{EditSurface, TextBuffer};

/// A view onto at most one buffer, optionally backed by a file.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    buffer: Option<TextBuffer>,
    path: Option<PathBuf>,
}

impl Frame {
    pub fn new(buffer: TextBuffer) -> Self {
        Self {
            buffer: Some(buffer),
            path: None,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_path(mut self, path: &Path) -> Self {
        self.path = Some(path.to_path_buf());
        self
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn buffer(&self) -> Option<&TextBuffer> {
        self.buffer.as_ref()
    }

    pub fn buffer_mut(&mut self) -> Option<&mut TextBuffer> {
        self.buffer.as_mut()
    }
}

impl EditSurface for Frame {
    type Buffer = TextBuffer;

    fn backing_content(&mut self) -> Option<&mut TextBuffer> {
        self.buffer.as_mut()
    }
}
