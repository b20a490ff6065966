//! Terminal implementation of the generator's host interface.

use std::env;
use std::path::PathBuf;
use std::process::Command;

use dailytask_core::host::{Host, HostError, Notice, NoticeLevel};
use tracing::debug;

pub struct TerminalHost {
    vault_root: PathBuf,
}

impl TerminalHost {
    pub fn new(vault_root: PathBuf) -> Self {
        Self { vault_root }
    }
}

impl Host for TerminalHost {
    fn notify(&self, notice: Notice) {
        debug!(level = ?notice.level, duration_ms = notice.duration_ms, "notice");
        match notice.level {
            NoticeLevel::Success => println!("{}", notice.message),
            NoticeLevel::Warning => println!("warning: {}", notice.message),
            NoticeLevel::Error => eprintln!("{}", notice.message),
        }
    }

    fn open_file(&self, path: &str) -> Result<(), HostError> {
        let full = self.vault_root.join(path);
        let editor = env::var("EDITOR")
            .or_else(|_| env::var("VISUAL"))
            .unwrap_or_else(|_| "vim".to_string());

        // $EDITOR may carry flags, e.g. "code --wait".
        let mut parts = editor.split_whitespace();
        let program = parts.next().unwrap_or("vim");

        let status = Command::new(program).args(parts).arg(&full).status().map_err(|e| {
            HostError::OpenFailed { path: path.to_string(), reason: format!("{program}: {e}") }
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(HostError::OpenFailed {
                path: path.to_string(),
                reason: format!("{program} exited with {status}"),
            })
        }
    }
}
