//! Purpose: `jsonlens` CLI entry point and command definitions.
//! Role: Binary crate root; parses args, runs commands, emits JSON/text on stdout.
//! Invariants: Non-interactive errors are emitted as a JSON envelope on stderr.
//! Invariants: Process exit code is derived from `api::to_exit_code`.
//! Invariants: Parse failures surface the parser's native message verbatim.
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum, ValueHint, error::ErrorKind as ClapErrorKind};
use clap_complete::aot::Shell;
use serde_json::{Map, Value, json};

mod command_dispatch;

use jsonlens::api::{
    Error, ErrorKind, ParseOutcome, ResolveConfig, parse, resolve_top_level, to_compact,
    to_exit_code,
};
use jsonlens::render::{ABSENT_DISPLAY, RenderOptions, render_json};

#[derive(Copy, Clone, Debug)]
struct RunOutcome {
    exit_code: i32,
}

impl RunOutcome {
    fn ok() -> Self {
        Self { exit_code: 0 }
    }

    fn with_code(exit_code: i32) -> Self {
        Self { exit_code }
    }
}

fn main() {
    let exit_code = match run() {
        Ok(outcome) => outcome.exit_code,
        Err((err, color_mode)) => {
            emit_error(&err, color_mode);
            to_exit_code(err.kind())
        }
    };
    std::process::exit(exit_code);
}

fn run() -> Result<RunOutcome, (Error, ColorMode)> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ClapErrorKind::DisplayHelp
            | ClapErrorKind::DisplayVersion
            | ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                err.print().map_err(|io_err| {
                    (
                        Error::new(ErrorKind::Io)
                            .with_message("failed to write help")
                            .with_source(io_err),
                        ColorMode::Auto,
                    )
                })?;
                let exit_code = if matches!(
                    err.kind(),
                    ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                ) {
                    2
                } else {
                    0
                };
                return Ok(RunOutcome::with_code(exit_code));
            }
            _ => {
                return Err((
                    Error::new(ErrorKind::Usage)
                        .with_message(clap_error_summary(&err))
                        .with_hint("Run `jsonlens --help` for usage."),
                    ColorMode::Auto,
                ));
            }
        },
    };

    let color_mode = cli.color;
    command_dispatch::dispatch_command(cli.command, color_mode).map_err(|err| (err, color_mode))
}

fn clap_error_summary(err: &clap::Error) -> String {
    let rendered = err.render().to_string();
    rendered
        .lines()
        .next()
        .unwrap_or("invalid arguments")
        .trim_start_matches("error: ")
        .to_string()
}

#[derive(Parser)]
#[command(
    name = "jsonlens",
    version,
    about = "Inspect JSON documents and unwrap embedded JSON strings",
    long_about = None,
    before_help = r#"Reads a JSON document from a file or stdin, validates it, and pretty-prints
it for inspection. With --resolve, string fields that themselves contain
JSON documents are decoded in place, up to a bounded number of layers."#,
    after_help = r#"EXAMPLES
  $ jsonlens check payload.json
  $ cat payload.json | jsonlens view -
  $ jsonlens view --resolve --max-depth 5 payload.json
  $ jsonlens view --resolve --compact payload.json | jq .
"#
)]
struct Cli {
    #[arg(
        long,
        global = true,
        value_enum,
        default_value = "auto",
        help = "Colorize stderr diagnostics and pretty JSON output: auto|always|never"
    )]
    color: ColorMode,

    #[command(subcommand)]
    command: Command,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    fn use_color(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Validate a JSON document and report the outcome as JSON
    #[command(after_help = r#"EXAMPLES
  $ jsonlens check payload.json
  {"check":{"valid":true,"empty":false}}
  $ echo '{"a":1,' | jsonlens check -
  (error envelope on stderr, exit code 3)
"#)]
    Check {
        /// Input file, or `-` for stdin
        #[arg(value_hint = ValueHint::FilePath, default_value = "-")]
        input: PathBuf,
    },
    /// Pretty-print a JSON document, optionally resolving embedded JSON strings
    #[command(after_help = r#"EXAMPLES
  $ jsonlens view payload.json
  $ jsonlens view --resolve payload.json
  $ jsonlens view --resolve --max-depth 1 payload.json
"#)]
    View {
        /// Input file, or `-` for stdin
        #[arg(value_hint = ValueHint::FilePath, default_value = "-")]
        input: PathBuf,

        /// Decode string fields that contain embedded JSON documents
        #[arg(long)]
        resolve: bool,

        /// Layers of string-encoding to unwrap (clamped to 1..=10)
        #[arg(long, requires = "resolve", default_value_t = jsonlens::api::DEFAULT_DECODE_DEPTH)]
        max_depth: u8,

        /// Emit minified JSON on one line instead of pretty output
        #[arg(long)]
        compact: bool,
    },
    /// Generate shell completion scripts
    Completion {
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Read the whole input up front; the core operates on in-memory text only.
fn read_input(input: &PathBuf) -> Result<String, Error> {
    if input.as_os_str() == "-" {
        let mut raw = String::new();
        io::stdin().read_to_string(&mut raw).map_err(|err| {
            Error::new(ErrorKind::Io)
                .with_message("failed to read stdin")
                .with_source(err)
        })?;
        return Ok(raw);
    }
    std::fs::read_to_string(input).map_err(|err| {
        Error::new(ErrorKind::Io)
            .with_message("failed to read input file")
            .with_path(input.clone())
            .with_source(err)
    })
}

fn syntax_error(message: String, input: &PathBuf) -> Error {
    let err = Error::new(ErrorKind::Syntax)
        .with_message(message)
        .with_hint("The message comes straight from the JSON parser; fix the text at the reported position.");
    if input.as_os_str() == "-" {
        err
    } else {
        err.with_path(input.clone())
    }
}

fn emit_json(value: Value, color_mode: ColorMode) {
    let is_tty = io::stdout().is_terminal();
    let use_color = color_mode.use_color(is_tty);
    let pretty = is_tty || use_color;
    let text = if pretty {
        render_json(
            &value,
            RenderOptions {
                color: use_color,
                ..RenderOptions::default()
            },
        )
    } else {
        to_compact(&value)
    };
    println!("{text}");
}

fn emit_error(err: &Error, color_mode: ColorMode) {
    let is_tty = io::stderr().is_terminal();
    if is_tty {
        eprintln!("{}", error_text(err, color_mode.use_color(is_tty)));
        return;
    }

    let value = error_json(err);
    let text = serde_json::to_string(&value).unwrap_or_else(|_| {
        "{\"error\":{\"kind\":\"Internal\",\"message\":\"json encode failed\"}}".to_string()
    });
    eprintln!("{text}");
}

fn error_message(err: &Error) -> String {
    err.message()
        .map(|message| message.to_string())
        .unwrap_or_else(|| format!("{:?} error", err.kind()))
}

fn error_causes(err: &Error) -> Vec<String> {
    let mut causes = Vec::new();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        causes.push(cause.to_string());
        source = cause.source();
    }
    causes
}

fn error_json(err: &Error) -> Value {
    let mut inner = Map::new();
    inner.insert("kind".to_string(), json!(format!("{:?}", err.kind())));
    inner.insert("message".to_string(), json!(error_message(err)));
    if let Some(hint) = err.hint() {
        inner.insert("hint".to_string(), json!(hint));
    }
    if let Some(path) = err.path() {
        inner.insert("input".to_string(), json!(path.display().to_string()));
    }
    let causes = error_causes(err);
    if !causes.is_empty() {
        inner.insert("causes".to_string(), json!(causes));
    }

    let mut outer = Map::new();
    outer.insert("error".to_string(), Value::Object(inner));
    Value::Object(outer)
}

#[derive(Copy, Clone, Debug)]
enum AnsiColor {
    Red,
    Yellow,
}

impl AnsiColor {
    fn code(self) -> &'static str {
        match self {
            AnsiColor::Red => "31",
            AnsiColor::Yellow => "33",
        }
    }
}

fn colorize_label(text: &str, use_color: bool, color: AnsiColor) -> String {
    if use_color {
        format!("\u{1b}[{}m{text}\u{1b}[0m", color.code())
    } else {
        text.to_string()
    }
}

fn error_text(err: &Error, use_color: bool) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "{} {}",
        colorize_label("error:", use_color, AnsiColor::Red),
        error_message(err)
    ));

    if let Some(hint) = err.hint() {
        lines.push(format!(
            "{} {hint}",
            colorize_label("hint:", use_color, AnsiColor::Yellow)
        ));
    }
    if let Some(path) = err.path() {
        lines.push(format!(
            "{} {}",
            colorize_label("input:", use_color, AnsiColor::Yellow),
            path.display()
        ));
    }

    let causes = error_causes(err);
    if let Some(cause) = causes.first() {
        lines.push(format!(
            "{} {cause}",
            colorize_label("caused by:", use_color, AnsiColor::Yellow)
        ));
    }

    lines.join("\n")
}
