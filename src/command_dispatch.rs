//! Purpose: Hold top-level CLI command dispatch for `jsonlens`.
//! Exports: `dispatch_command`.
//! Role: Keep `main.rs` focused on parse/bootstrap and delegate command execution.
//! Invariants: Command output envelopes and exit code semantics stay stable.
//! Invariants: Invalid input is reported through `ErrorKind::Syntax`, never a panic.

use super::*;
use clap::CommandFactory;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct CheckReport {
    valid: bool,
    empty: bool,
}

pub(super) fn dispatch_command(
    command: Command,
    color_mode: ColorMode,
) -> Result<RunOutcome, Error> {
    match command {
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::aot::generate(shell, &mut cmd, "jsonlens", &mut io::stdout());
            Ok(RunOutcome::ok())
        }
        Command::Check { input } => {
            let raw = read_input(&input)?;
            let empty = raw.trim().is_empty();
            match parse(&raw) {
                ParseOutcome::Valid(_) => {
                    let report = CheckReport { valid: true, empty };
                    emit_json(json!({ "check": report }), color_mode);
                    Ok(RunOutcome::ok())
                }
                ParseOutcome::Invalid(message) => Err(syntax_error(message, &input)),
            }
        }
        Command::View {
            input,
            resolve,
            max_depth,
            compact,
        } => {
            let raw = read_input(&input)?;
            if raw.trim().is_empty() {
                println!("{ABSENT_DISPLAY}");
                return Ok(RunOutcome::ok());
            }
            let value = match parse(&raw) {
                ParseOutcome::Valid(value) => value,
                ParseOutcome::Invalid(message) => return Err(syntax_error(message, &input)),
            };
            let config = ResolveConfig::new(resolve, max_depth);
            let tree = resolve_top_level(value, &config);
            if compact {
                println!("{}", to_compact(&tree));
            } else {
                let use_color = color_mode.use_color(io::stdout().is_terminal());
                let rendered = render_json(
                    &tree,
                    RenderOptions {
                        color: use_color,
                        ..RenderOptions::default()
                    },
                );
                println!("{rendered}");
            }
            Ok(RunOutcome::ok())
        }
    }
}
