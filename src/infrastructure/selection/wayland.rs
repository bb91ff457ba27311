//! Wayland selection adapter using wl-paste

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{SelectionError, SelectionSource};
use crate::domain::capture::SelectionKind;

/// Wayland selection adapter using wl-paste
pub struct WaylandSelection {
    kind: SelectionKind,
}

impl WaylandSelection {
    pub fn new(kind: SelectionKind) -> Self {
        Self { kind }
    }

    fn args(&self) -> Vec<&'static str> {
        let mut args = vec!["--no-newline", "--type", "text/plain"];
        if self.kind == SelectionKind::Primary {
            args.push("--primary");
        }
        args
    }
}

#[async_trait]
impl SelectionSource for WaylandSelection {
    async fn read(&self) -> Result<String, SelectionError> {
        let output = Command::new("wl-paste")
            .args(self.args())
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    SelectionError::WlPasteNotFound
                } else {
                    SelectionError::ReadFailed(e.to_string())
                }
            })?;

        // wl-paste exits non-zero when nothing is selected
        if !output.status.success() {
            if output.stdout.is_empty() {
                return Ok(String::new());
            }
            return Err(SelectionError::ReadFailed(format!(
                "wl-paste exited with status: {}",
                output.status
            )));
        }

        String::from_utf8(output.stdout)
            .map_err(|e| SelectionError::ReadFailed(format!("selection is not UTF-8: {}", e)))
    }
}
