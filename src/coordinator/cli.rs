//! Command-line host: open one file, run `comment-toggle` on it and write the
//! result back.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};

use super::{App, COMMENT_TOGGLE};
use crate::atoms::storage::{expand_tilde, load_config, load_config_from, write_document};
use crate::molecules::editor::{
    EditBuffer, StyleResolver, TextBuffer, classify, style_var_name,
};
use crate::types::Config;

/// Toggle comment wrappers on lines of a file using per-filetype comment styles.
///
/// Styles come from `<filetype>-comment-style` variables in the config file,
/// e.g. `rust-comment-style = "//"` or `c-comment-style = "/* */"`.
#[derive(Parser, Debug)]
#[command(name = "comment-toggle")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// File to edit in place
    pub file: PathBuf,

    /// Toggle every row in START:END (1-based, inclusive, either order)
    #[arg(long, value_name = "START:END", value_parser = parse_row_range)]
    pub rows: Option<(usize, usize)>,

    /// Cursor row, toggled when no --rows selection is given
    #[arg(long, default_value_t = 1)]
    pub line: usize,

    /// Cursor column
    #[arg(long, default_value_t = 1)]
    pub column: usize,

    /// Filetype name instead of the one derived from the file name
    #[arg(long)]
    pub filetype: Option<String>,

    /// Comment style tokens for this run, e.g. "//" or "/* */"
    #[arg(long)]
    pub style: Option<String>,

    /// Config file (default: ~/.config/comment-toggle/config.toml)
    #[arg(long)]
    pub config: Option<String>,

    /// Print the result instead of rewriting the file
    #[arg(long)]
    pub stdout: bool,

    /// Report whether each targeted row is commented; change nothing
    #[arg(long, conflicts_with = "stdout")]
    pub check: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// How a run ended when it did not hit an I/O or usage error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    /// The command reported a failure; its message went to the error stream.
    Failed,
}

pub fn parse_row_range(s: &str) -> Result<(usize, usize), String> {
    let (start, end) = s
        .split_once(':')
        .ok_or_else(|| format!("expected START:END, got '{}'", s))?;
    let parse = |v: &str| -> Result<usize, String> {
        match v.trim().parse::<usize>() {
            Ok(0) | Err(_) => Err(format!("invalid row '{}': rows start at 1", v)),
            Ok(n) => Ok(n),
        }
    };
    Ok((parse(start)?, parse(end)?))
}

/// Load the config named by `--config`, or the default one. The flag is true
/// when a default config file had to be written.
pub fn load_cli_config(cli: &Cli) -> Result<(Config, bool)> {
    match &cli.config {
        Some(path) => Ok((load_config_from(&expand_tilde(path))?, false)),
        None => load_config(),
    }
}

/// Open `cli.file`, toggle the targeted rows and write the result to the file
/// or to `out`. With `--check`, report each row's state to `out` instead.
pub fn run(
    cli: &Cli,
    config: Config,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<RunStatus> {
    let mut app = App::new(config);
    let mut document = app.open_file(&cli.file, cli.filetype.as_deref())?;

    let filetype = app
        .active_buffer()
        .map(|b| b.filetype_name().to_string())
        .context("file did not open into a buffer")?;
    if let Some(style) = &cli.style {
        app.config.set_var(&style_var_name(&filetype), style);
    }

    let buffer = app
        .active_buffer_mut()
        .context("file did not open into a buffer")?;
    prepare_buffer(buffer, cli)?;

    if cli.check {
        return check_rows(&app, &filetype, cli, out, err);
    }

    if app.run_command(COMMENT_TOGGLE, &[]).is_err() {
        writeln!(err, "{}", app.command_message)?;
        return Ok(RunStatus::Failed);
    }

    if let Some(buffer) = app.active_buffer() {
        document.lines = buffer.lines();
    }

    if cli.stdout {
        out.write_all(document.render().as_bytes())?;
        out.flush()?;
    } else {
        write_document(&cli.file, &document)?;
        tracing::info!(path = %cli.file.display(), "wrote file");
    }

    Ok(RunStatus::Success)
}

/// Check the requested rows against the buffer, then select them and place
/// the cursor.
pub fn prepare_buffer(buffer: &mut TextBuffer, cli: &Cli) -> Result<()> {
    let line_count = buffer.line_count();
    let in_bounds = |row: usize| (1..=line_count).contains(&row);

    if let Some((start, end)) = cli.rows {
        if !in_bounds(start) || !in_bounds(end) {
            bail!(
                "rows {}:{} are outside the file (1..={})",
                start,
                end,
                line_count
            );
        }
        buffer.select((start, 1), (end, 1));
    } else if !in_bounds(cli.line) {
        bail!("line {} is outside the file (1..={})", cli.line, line_count);
    }

    buffer.set_cursor(cli.line.min(line_count), cli.column);
    Ok(())
}

/// Print `row<TAB>state<TAB>text` for every targeted row.
pub fn check_rows(
    app: &App,
    filetype: &str,
    cli: &Cli,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<RunStatus> {
    let Some(style) = StyleResolver::new(&app.config).resolve(filetype) else {
        writeln!(err, "Comment style unknown for {}", filetype)?;
        return Ok(RunStatus::Failed);
    };
    let buffer = app
        .active_buffer()
        .context("file did not open into a buffer")?;

    let (start, end) = match cli.rows {
        Some((a, b)) => (a.min(b), a.max(b)),
        None => (cli.line, cli.line),
    };

    for row in start..=end {
        let state = classify(buffer, row, &style);
        writeln!(
            out,
            "{}\t{}\t{}",
            row,
            state.as_str(),
            buffer.line(row).unwrap_or_default()
        )?;
    }
    Ok(RunStatus::Success)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    use tempfile::TempDir;

    const CONFIG: &str = r#"
[filetypes]
rs = "rust"

[variables]
rust-comment-style = "//"
c-comment-style = "/* */"
"#;

    struct Workspace {
        dir: TempDir,
        config: String,
    }

    impl Workspace {
        fn new() -> Self {
            let dir = tempfile::tempdir().unwrap();
            let config = dir.path().join("config.toml");
            fs::write(&config, CONFIG).unwrap();
            Self {
                config: config.to_string_lossy().into_owned(),
                dir,
            }
        }

        fn file(&self, name: &str, content: &str) -> PathBuf {
            let path = self.dir.path().join(name);
            fs::write(&path, content).unwrap();
            path
        }

        fn cli(&self, file: &Path, args: &[&str]) -> Cli {
            let file = file.to_string_lossy().into_owned();
            let mut argv = vec!["comment-toggle", file.as_str(), "--config", self.config.as_str()];
            argv.extend_from_slice(args);
            Cli::try_parse_from(argv).unwrap()
        }
    }

    struct Output {
        status: RunStatus,
        out: String,
        err: String,
    }

    fn run_cli(cli: &Cli) -> Result<Output> {
        let (config, created) = load_cli_config(cli)?;
        assert!(!created);
        let mut out = Vec::new();
        let mut err = Vec::new();
        let status = run(cli, config, &mut out, &mut err)?;
        Ok(Output {
            status,
            out: String::from_utf8(out).unwrap(),
            err: String::from_utf8(err).unwrap(),
        })
    }

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }

    // ── argument parsing ──────────────────────────────────────────

    #[test]
    fn test_parse_row_range() {
        assert_eq!(parse_row_range("3:7"), Ok((3, 7)));
        assert_eq!(parse_row_range("9:2"), Ok((9, 2)));
        assert_eq!(parse_row_range(" 1 : 1 "), Ok((1, 1)));
    }

    #[test]
    fn test_parse_row_range_rejects_bad_input() {
        assert!(parse_row_range("3").is_err());
        assert!(parse_row_range("0:4").is_err());
        assert!(parse_row_range("a:b").is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_check_conflicts_with_stdout() {
        let result = Cli::try_parse_from(["comment-toggle", "a.rs", "--check", "--stdout"]);
        assert!(result.is_err());
    }

    // ── config ────────────────────────────────────────────────────

    #[test]
    fn test_explicit_config_is_loaded() {
        let ws = Workspace::new();
        let file = ws.file("a.rs", "x\n");
        let (config, created) = load_cli_config(&ws.cli(&file, &[])).unwrap();
        assert!(!created);
        assert_eq!(config.var("rust-comment-style"), Some("//"));
        assert_eq!(config.filetypes.get("rs").map(String::as_str), Some("rust"));
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let ws = Workspace::new();
        let file = ws.file("a.rs", "x\n");
        let missing = ws.dir.path().join("missing.toml");
        let cli = Cli::try_parse_from([
            "comment-toggle",
            file.to_str().unwrap(),
            "--config",
            missing.to_str().unwrap(),
        ])
        .unwrap();
        assert!(load_cli_config(&cli).is_err());
    }

    // ── bounds ────────────────────────────────────────────────────

    #[test]
    fn test_rows_outside_file_rejected() {
        let ws = Workspace::new();
        let file = ws.file("a.rs", "a\nb\n");
        let err = run_cli(&ws.cli(&file, &["--rows", "1:5"])).err().unwrap();
        assert!(err.to_string().contains("rows 1:5 are outside the file (1..=2)"));
        assert_eq!(read(&file), "a\nb\n");
    }

    #[test]
    fn test_line_outside_file_rejected() {
        let ws = Workspace::new();
        let file = ws.file("a.rs", "a\n");
        let err = run_cli(&ws.cli(&file, &["--line", "3"])).err().unwrap();
        assert!(err.to_string().contains("line 3 is outside the file (1..=1)"));
        assert_eq!(read(&file), "a\n");
    }

    // ── --check ───────────────────────────────────────────────────

    #[test]
    fn test_check_reports_rows_and_changes_nothing() {
        let ws = Workspace::new();
        let file = ws.file("a.rs", "// a\nb\n");
        let output = run_cli(&ws.cli(&file, &["--check", "--rows", "2:1"])).unwrap();
        assert_eq!(output.status, RunStatus::Success);
        assert_eq!(output.out, "1\tcommented\t// a\n2\tnot commented\tb\n");
        assert!(output.err.is_empty());
        assert_eq!(read(&file), "// a\nb\n");
    }

    #[test]
    fn test_check_unknown_style_fails() {
        let ws = Workspace::new();
        let file = ws.file("script.py", "x = 1\n");
        let output = run_cli(&ws.cli(&file, &["--check"])).unwrap();
        assert_eq!(output.status, RunStatus::Failed);
        assert_eq!(output.err, "Comment style unknown for py\n");
        assert!(output.out.is_empty());
    }

    // ── toggling ──────────────────────────────────────────────────

    #[test]
    fn test_toggle_writes_file_back() {
        let ws = Workspace::new();
        let file = ws.file("a.rs", "fn a() {}\n// fn b() {}\n");
        let output = run_cli(&ws.cli(&file, &["--rows", "1:2"])).unwrap();
        assert_eq!(output.status, RunStatus::Success);
        assert!(output.out.is_empty());
        assert_eq!(read(&file), "// fn a() {}\nfn b() {}\n");
    }

    #[test]
    fn test_toggle_cursor_line_only() {
        let ws = Workspace::new();
        let file = ws.file("a.c", "int a;\nint b;\n");
        run_cli(&ws.cli(&file, &["--line", "2"])).unwrap();
        assert_eq!(read(&file), "int a;\n/* int b; */\n");
    }

    #[test]
    fn test_stdout_leaves_file_alone() {
        let ws = Workspace::new();
        let file = ws.file("a.rs", "let x = 1;\n");
        let output = run_cli(&ws.cli(&file, &["--stdout"])).unwrap();
        assert_eq!(output.out, "// let x = 1;\n");
        assert_eq!(read(&file), "let x = 1;\n");
    }

    #[test]
    fn test_crlf_and_missing_trailing_newline_preserved() {
        let ws = Workspace::new();
        let crlf = ws.file("win.rs", "a\r\nb\r\n");
        run_cli(&ws.cli(&crlf, &["--rows", "1:2"])).unwrap();
        assert_eq!(read(&crlf), "// a\r\n// b\r\n");

        let bare = ws.file("bare.rs", "a\nb");
        run_cli(&ws.cli(&bare, &["--line", "2"])).unwrap();
        assert_eq!(read(&bare), "a\n// b");
    }

    #[test]
    fn test_style_flag_overrides_config() {
        let ws = Workspace::new();
        let file = ws.file("a.rs", "x\n");
        run_cli(&ws.cli(&file, &["--style", "#"])).unwrap();
        assert_eq!(read(&file), "# x\n");
    }

    #[test]
    fn test_filetype_flag_and_style_for_unknown_type() {
        let ws = Workspace::new();
        let file = ws.file("query.sql", "SELECT 1;\n");
        run_cli(&ws.cli(&file, &["--filetype", "query", "--style", "#"])).unwrap();
        assert_eq!(read(&file), "# SELECT 1;\n");
    }

    #[test]
    fn test_unknown_style_fails_without_writing() {
        let ws = Workspace::new();
        let file = ws.file("script.py", "x = 1\n");
        let output = run_cli(&ws.cli(&file, &[])).unwrap();
        assert_eq!(output.status, RunStatus::Failed);
        assert_eq!(output.err, "Comment style unknown for py\n");
        assert_eq!(read(&file), "x = 1\n");
    }
}
