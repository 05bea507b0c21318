use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

/// Result of one external-process execution: exit status plus stdout and
/// stderr concatenated into a single buffer.
#[derive(Debug, Clone)]
pub struct CommandCapture {
    pub exit_code: i32,
    pub success: bool,
    pub combined: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to wait for {program}: {source}")]
    Wait {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{program} timed out after {} seconds", .timeout.as_secs())]
    TimedOut { program: String, timeout: Duration },
}

/// Spawn `command` and wait for it to exit, capturing both output streams.
/// The child is killed if the optional timeout elapses.
pub async fn run_captured(
    mut command: Command,
    timeout: Option<Duration>,
) -> Result<CommandCapture, CommandError> {
    let program = command
        .as_std()
        .get_program()
        .to_string_lossy()
        .into_owned();

    command
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    tracing::debug!(program = %program, "Spawning external process");

    let child = command.spawn().map_err(|source| CommandError::Spawn {
        program: program.clone(),
        source,
    })?;

    let output = match timeout {
        Some(limit) => tokio::time::timeout(limit, child.wait_with_output())
            .await
            .map_err(|_| CommandError::TimedOut {
                program: program.clone(),
                timeout: limit,
            })?,
        None => child.wait_with_output().await,
    }
    .map_err(|source| CommandError::Wait {
        program: program.clone(),
        source,
    })?;

    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));

    let exit_code = output.status.code().unwrap_or(-1);
    tracing::debug!(program = %program, exit_code, "External process completed");

    Ok(CommandCapture {
        exit_code,
        success: output.status.success(),
        combined,
    })
}
