//! Blocking execution of external tools.

use std::process::{Command, Output};

use crate::release::error::CommandError;

/// Maximum number of diagnostic lines kept from a failing tool.
const DIAGNOSTIC_LINES: usize = 40;

/// Runs `command` to completion, capturing its output.
///
/// Fails if the process cannot be spawned or exits unsuccessfully; the error
/// carries the tail of stderr (or stdout when stderr is empty).
pub fn run(command: &mut Command) -> Result<Output, CommandError> {
    let display = describe(command);
    log::debug!("Running {display}");

    let output = command.output().map_err(|source| CommandError::Spawn {
        command: display.clone(),
        source,
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let text = if stderr.trim().is_empty() {
            String::from_utf8_lossy(&output.stdout).into_owned()
        } else {
            stderr.into_owned()
        };
        return Err(CommandError::Status {
            command: display,
            status: output.status,
            output: tail(&text),
        });
    }

    Ok(output)
}

/// Program and arguments of `command` as a single line.
pub fn describe(command: &Command) -> String {
    std::iter::once(command.get_program())
        .chain(command.get_args())
        .map(|part| part.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}

fn tail(text: &str) -> String {
    let lines: Vec<&str> = text.trim_end().lines().collect();
    let start = lines.len().saturating_sub(DIAGNOSTIC_LINES);
    lines[start..].join("\n")
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn failing_command_reports_stderr() {
        let mut command = Command::new("sh");
        command.args(["-c", "echo out; echo broken >&2; exit 3"]);

        let err = run(&mut command).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("sh -c"));
        assert!(message.ends_with("broken"));
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let mut command = Command::new("/nonexistent/tool");
        let err = run(&mut command).unwrap_err();
        assert!(matches!(err, CommandError::Spawn { .. }));
    }

    #[test]
    fn keeps_only_the_tail() {
        let text = (0..100).map(|n| n.to_string()).collect::<Vec<_>>().join("\n");
        let kept = tail(&text);
        assert_eq!(kept.lines().count(), DIAGNOSTIC_LINES);
        assert!(kept.ends_with("99"));
    }
}
