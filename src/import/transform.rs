//! Shell transformations
//!
//! A transformation is a shell command used as a text filter: the statement
//! line goes to its stdin and its trimmed stdout is the extracted value.

use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};
use std::thread;

use crate::error::{MoneyGrepError, MoneyGrepResult};

/// Something that turns a statement line into a field value
pub trait LineTransform {
    /// Apply `command` to `line` and return the extracted text
    fn apply(&self, command: &str, line: &str) -> MoneyGrepResult<String>;
}

/// Runs transformations through a shell (`sh -c` or `cmd /C`)
#[derive(Debug, Clone)]
pub struct ShellTransform {
    shell: String,
}

impl ShellTransform {
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }

    fn command_flag(&self) -> &'static str {
        let program = std::path::Path::new(&self.shell)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("");
        if program.eq_ignore_ascii_case("cmd") {
            "/C"
        } else {
            "-c"
        }
    }
}

impl LineTransform for ShellTransform {
    fn apply(&self, command: &str, line: &str) -> MoneyGrepResult<String> {
        let failed = |message: String| MoneyGrepError::Transform {
            command: command.to_string(),
            message,
        };

        log::debug!("Running transformation '{}'", command);

        let mut child = Command::new(&self.shell)
            .arg(self.command_flag())
            .arg(command)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| failed(format!("failed to start {}: {}", self.shell, e)))?;

        // Stdin is written while stdout and stderr are drained
        let stdin = child.stdin.take();
        let (written, output) = thread::scope(|scope| {
            let writer = scope.spawn(move || match stdin {
                Some(mut stdin) => stdin
                    .write_all(line.as_bytes())
                    .and_then(|_| stdin.write_all(b"\n")),
                None => Ok(()),
            });
            let output = child.wait_with_output();
            (writer.join(), output)
        });

        match written {
            Ok(Ok(())) => {}
            // Commands that ignore their input may exit before reading it
            Ok(Err(e)) if e.kind() == ErrorKind::BrokenPipe => {}
            Ok(Err(e)) => return Err(failed(format!("failed to write input: {}", e))),
            Err(_) => return Err(failed("input writer panicked".to_string())),
        }

        let output = output.map_err(|e| failed(format!("failed to wait for command: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let message = if stderr.is_empty() {
                output.status.to_string()
            } else {
                stderr
            };
            return Err(failed(message));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
