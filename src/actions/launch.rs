use crate::error::{FolderError, Result};
use std::process::{Child, Command, Stdio};
use std::thread;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpawnResult {
    Success { process_id: u32 },
    Failure { message: String },
}

impl SpawnResult {
    pub fn into_result(self) -> Result<u32> {
        match self {
            SpawnResult::Success { process_id } => Ok(process_id),
            SpawnResult::Failure { message } => Err(FolderError::SpawnFailure(message)),
        }
    }
}

/// argv is `[executable_name, target]`, nothing else. No shell is involved.
pub fn build_command(executable_name: &str, target: &str) -> Command {
    let mut cmd = Command::new(executable_name);

    // Detach process output from the caller
    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    cmd.arg(target);
    cmd
}

/// Start `executable_name target` and return as soon as the OS accepts or
/// refuses it. The program is looked up on `PATH`.
pub fn spawn(executable_name: &str, target: &str) -> SpawnResult {
    tracing::debug!(executable = executable_name, path = target, "spawning launcher");

    match build_command(executable_name, target).spawn() {
        Ok(child) => {
            let process_id = child.id();
            reap_in_background(child);
            tracing::debug!(pid = process_id, "launcher started");
            SpawnResult::Success { process_id }
        }
        Err(e) => {
            tracing::debug!(error = %e, "launcher failed to start");
            SpawnResult::Failure {
                message: e.to_string(),
            }
        }
    }
}

/// Nobody looks at the exit status; this only keeps the process table clean
/// when the caller outlives the child.
fn reap_in_background(mut child: Child) {
    let spawned = thread::Builder::new()
        .name(format!("reap-{}", child.id()))
        .spawn(move || {
            let _ = child.wait();
        });

    if let Err(e) = spawned {
        tracing::warn!(error = %e, "could not start reaper thread");
    }
}
