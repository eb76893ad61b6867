//! Adapter for running `python3` and the project venv's `pip`.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct PythonToolRunner {
    project_root: PathBuf,
}

impl PythonToolRunner {
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    // The working directory is left untouched so a relative project root
    // keeps resolving against the directory the CLI was invoked from.
    fn run(&self, program: &Path, args: &[&str]) -> Result<String, AppError> {
        let rendered = format!("{} {}", program.display(), args.join(" "));

        let mut command = Command::new(program);
        command.args(args);

        let output = command.output().map_err(|e| AppError::Tool {
            command: rendered.clone(),
            details: e.to_string(),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::Tool {
                command: rendered,
                details: if stderr.is_empty() { "Unknown error".to_string() } else { stderr },
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn venv_path(&self) -> PathBuf {
        self.project_root.join(".venv")
    }

    /// Create a `.venv/` virtual environment inside the project root.
    pub fn create_venv(&self) -> Result<(), AppError> {
        let venv = self.venv_path();
        let venv = venv.to_string_lossy();
        self.run(Path::new("python3"), &["-m", "venv", venv.as_ref()])?;
        Ok(())
    }

    /// Install packages with the venv's `pip`. An empty list is a no-op.
    pub fn pip_install(&self, packages: &[String]) -> Result<(), AppError> {
        if packages.is_empty() {
            return Ok(());
        }

        let pip = self.venv_path().join("bin").join("pip");
        let mut args = vec!["install"];
        args.extend(packages.iter().map(String::as_str));
        self.run(&pip, &args)?;
        Ok(())
    }
}
