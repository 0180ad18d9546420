use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// A text file split into lines, with enough layout to write it back unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub lines: Vec<String>,
    pub line_ending: LineEnding,
    pub trailing_newline: bool,
}

impl Document {
    /// The line ending is taken from the first line break; a mixed file is
    /// normalized to it on write.
    pub fn parse(content: &str) -> Self {
        let line_ending = match content.find('\n') {
            Some(i) if i > 0 && content.as_bytes()[i - 1] == b'\r' => LineEnding::CrLf,
            _ => LineEnding::Lf,
        };

        let trailing_newline = content.ends_with('\n');
        let body = content
            .strip_suffix(line_ending.as_str())
            .or_else(|| content.strip_suffix('\n'))
            .unwrap_or(content);

        let lines = body
            .split('\n')
            .map(|l| match line_ending {
                LineEnding::CrLf => l.strip_suffix('\r').unwrap_or(l).to_string(),
                LineEnding::Lf => l.to_string(),
            })
            .collect();

        Self {
            lines,
            line_ending,
            trailing_newline,
        }
    }

    pub fn render(&self) -> String {
        let mut out = self.lines.join(self.line_ending.as_str());
        if self.trailing_newline {
            out.push_str(self.line_ending.as_str());
        }
        out
    }
}

pub fn read_document(path: &Path) -> Result<Document> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))?;
    let document = Document::parse(&content);
    tracing::debug!(
        path = %path.display(),
        lines = document.lines.len(),
        crlf = document.line_ending == LineEnding::CrLf,
        "read document"
    );
    Ok(document)
}

pub fn write_document(path: &Path, document: &Document) -> Result<()> {
    fs::write(path, document.render())
        .with_context(|| format!("Failed to write file: {:?}", path))?;
    Ok(())
}
