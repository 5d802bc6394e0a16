use async_trait::async_trait;
use ferrous_lan_application::ports::NeighborDiagnostic;
use ferrous_lan_domain::DomainError;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, warn};

/// Runs the host's neighbor-cache diagnostic (`ndp -an`, `ip -6 neigh show`)
/// and captures its standard output.
pub struct NeighborCommandRunner {
    program: String,
    args: Vec<String>,
}

impl NeighborCommandRunner {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[async_trait]
impl NeighborDiagnostic for NeighborCommandRunner {
    async fn run_neighbor_diagnostic(&self, timeout: Duration) -> Result<String, DomainError> {
        let child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                DomainError::NeighborSourceUnavailable(format!(
                    "failed to spawn {}: {}",
                    self.program, e
                ))
            })?;

        // Dropping the pending future on timeout kills the child.
        let output = match tokio::time::timeout(timeout, child.wait_with_output()).await {
            Ok(result) => result.map_err(|e| {
                DomainError::NeighborSourceUnavailable(format!("{}: {}", self.program, e))
            })?,
            Err(_) => {
                warn!(
                    command = %self.command_line(),
                    timeout_ms = timeout.as_millis() as u64,
                    "Neighbor diagnostic timed out"
                );
                return Err(DomainError::NeighborSourceTimeout(
                    timeout.as_millis() as u64
                ));
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DomainError::NeighborSourceUnavailable(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        debug!(
            command = %self.command_line(),
            bytes = output.stdout.len(),
            "Neighbor diagnostic completed"
        );
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
