use std::path::Path;

use anyhow::Result;

use super::commands::{CommandError, CommandRegistry};
use super::{Frame, ToggleController};
use crate::atoms::filetype::detect_filetype;
use crate::atoms::storage::{Document, read_document};
use crate::molecules::editor::TextBuffer;
use crate::types::{Config, ToggleError, ToggleOutcome};

/// Host editor state: configuration variables, open frames and the commands
/// that operate on them.
pub struct App {
    pub config: Config,
    frames: Vec<Frame>,
    active_frame: Option<usize>,
    commands: CommandRegistry,
    pub command_message: String,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            frames: Vec::new(),
            active_frame: None,
            commands: CommandRegistry::with_builtins(),
            command_message: String::new(),
        }
    }

    pub fn set_message(&mut self, msg: &str) {
        self.command_message = msg.to_string();
    }

    /// Add a frame and make it the active one. Returns its index.
    pub fn open_frame(&mut self, frame: Frame) -> usize {
        self.frames.push(frame);
        let index = self.frames.len() - 1;
        self.active_frame = Some(index);
        index
    }

    /// Open `buffer` in a new active frame.
    pub fn open_buffer(&mut self, buffer: TextBuffer) -> usize {
        self.open_frame(Frame::new(buffer))
    }

    /// Read `path` into a new active frame, naming its filetype from the path
    /// unless `filetype` is given.
    pub fn open_file(&mut self, path: &Path, filetype: Option<&str>) -> Result<Document> {
        let document = read_document(path)?;
        let filetype = match filetype {
            Some(ft) => ft.to_string(),
            None => detect_filetype(path, &self.config),
        };
        tracing::debug!(path = %path.display(), filetype = %filetype, "opening file");

        let buffer = TextBuffer::from_lines(&document.lines).with_filetype(&filetype);
        self.open_frame(Frame::new(buffer).with_path(path));
        Ok(document)
    }

    pub fn set_active_frame(&mut self, index: Option<usize>) {
        self.active_frame = index.filter(|&i| i < self.frames.len());
    }

    pub fn active_frame(&self) -> Option<&Frame> {
        self.active_frame.and_then(|i| self.frames.get(i))
    }

    pub fn active_frame_mut(&mut self) -> Option<&mut Frame> {
        self.active_frame.and_then(|i| self.frames.get_mut(i))
    }

    pub fn active_buffer(&self) -> Option<&TextBuffer> {
        self.active_frame().and_then(|f| f.buffer())
    }

    pub fn active_buffer_mut(&mut self) -> Option<&mut TextBuffer> {
        self.active_frame_mut().and_then(|f| f.buffer_mut())
    }

    /// Toggle comments in the active frame using the configured styles.
    pub fn toggle_comments(&mut self) -> Result<ToggleOutcome, ToggleError> {
        let controller = ToggleController::new(&self.config);
        let surface = self.active_frame.and_then(|i| self.frames.get_mut(i));
        controller.toggle(surface)
    }

    /// Dispatch a command by name. A failure is also left in
    /// `command_message` for display.
    pub fn run_command(&mut self, name: &str, args: &[String]) -> Result<(), CommandError> {
        let result = match self.commands.get(name) {
            Some(command) => command(self, args),
            None => Err(CommandError::Unknown(name.to_string())),
        };

        if let Err(e) = &result {
            tracing::warn!(command = name, error = %e, "command failed");
            self.set_message(&e.to_string());
        }
        result
    }
}
