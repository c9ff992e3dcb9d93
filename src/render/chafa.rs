use std::{path::Path, process::Stdio};

use async_trait::async_trait;
use tokio::{process::Command, sync::OnceCell, time::timeout};

use super::{CellRenderer, RenderError};
use crate::spotify::REQUEST_TIMEOUT;

/// The `chafa` command line image viewer.
pub struct Chafa {
    program: String,
    available: OnceCell<bool>,
}

impl Chafa {
    pub fn new() -> Self {
        Self::with_program("chafa")
    }

    pub fn with_program(program: &str) -> Self {
        Chafa {
            program: program.to_string(),
            available: OnceCell::new(),
        }
    }
}

impl Default for Chafa {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CellRenderer for Chafa {
    /// Probes `chafa --version` on first use and remembers the answer.
    async fn available(&self) -> bool {
        *self
            .available
            .get_or_init(|| async {
                Command::new(&self.program)
                    .arg("--version")
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .status()
                    .await
                    .map(|status| status.success())
                    .unwrap_or(false)
            })
            .await
    }

    async fn render(
        &self,
        path: &Path,
        columns: u32,
        rows: u32,
    ) -> Result<Vec<String>, RenderError> {
        let run = Command::new(&self.program)
            .arg("--size")
            .arg(format!("{columns}x{rows}"))
            .arg("--dither")
            .arg("ordered")
            .arg(path)
            .kill_on_drop(true)
            .output();

        let output = timeout(REQUEST_TIMEOUT, run)
            .await
            .map_err(|_| RenderError::Timeout)??;

        if !output.status.success() {
            return Err(RenderError::ExternalTool(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        let lines: Vec<String> = String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::to_string)
            .collect();

        if lines.is_empty() {
            return Err(RenderError::ExternalTool(format!(
                "{} produced no output",
                self.program
            )));
        }

        Ok(lines)
    }
}
