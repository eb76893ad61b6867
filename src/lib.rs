//! ovidiu: bootstrap a Python project directory with git, docs, a license,
//! and a virtual environment, removing the partial tree when a step fails.

pub mod error;
pub mod options;
pub mod pipeline;
pub mod scaffold;
pub mod templates;
pub mod tools;

pub use error::{AppError, CleanupOutcome};
pub use options::ProjectOptions;
pub use pipeline::on_failure;

/// Bootstrap a new project directory described by `options`.
///
/// The target path must not exist; a pre-existing directory is never
/// touched. When a scaffolding step fails after the directory was created,
/// the partial tree is removed before the error is returned.
pub fn create_project(options: &ProjectOptions) -> Result<(), AppError> {
    if options.path.exists() {
        return Err(AppError::ProjectExists(options.path.display().to_string()));
    }

    // Validate the project name before creating anything on disk.
    options.project_name()?;

    let steps = pipeline::plan(options);
    pipeline::execute(options, &steps)
}
