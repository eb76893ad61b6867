use std::path::PathBuf;

use crate::error::AppError;

/// Default linter packages installed with `--use-linters`.
pub const DEFAULT_LINTERS: [&str; 2] = ["flake8", "black"];

/// Options describing the project to bootstrap.
#[derive(Debug, Clone)]
pub struct ProjectOptions {
    /// Directory the project is created in. Must not exist yet.
    pub path: PathBuf,
    /// Packages installed into the virtual environment.
    pub dependencies: Vec<String>,
    /// Whether linter packages are installed.
    pub use_linters: bool,
    /// Linter packages installed when `use_linters` is set.
    pub linters: Vec<String>,
    /// Whether a `Dockerfile` is written.
    pub use_docker: bool,
    /// Skip virtual environment creation and package installs.
    pub skip_venv: bool,
}

impl ProjectOptions {
    /// Options for a plain project at `path` with no extras.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            dependencies: Vec::new(),
            use_linters: false,
            linters: DEFAULT_LINTERS.iter().map(|s| s.to_string()).collect(),
            use_docker: false,
            skip_venv: false,
        }
    }

    /// Project name derived from the final path component.
    pub fn project_name(&self) -> Result<&str, AppError> {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| AppError::InvalidProjectPath(self.path.display().to_string()))
    }
}
