//! Scaffolding steps that populate a new project directory.

use std::fs;

use include_dir::{Dir, DirEntry, include_dir};

use crate::error::AppError;
use crate::options::ProjectOptions;
use crate::templates;
use crate::tools::PythonToolRunner;

static SCAFFOLD_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/scaffold_assets");

/// A file embedded in the scaffold bundle.
#[derive(Debug, Clone)]
pub struct ScaffoldFile {
    /// Path relative to the project root.
    pub path: String,
    /// File content as UTF-8 text.
    pub content: &'static str,
}

/// Returns all static scaffold files, sorted by path.
pub fn scaffold_files() -> Vec<ScaffoldFile> {
    let mut files = Vec::new();
    collect_files(&SCAFFOLD_DIR, &mut files);

    files.sort_by(|a, b| a.path.cmp(&b.path));
    files
}

fn collect_files(dir: &'static Dir, files: &mut Vec<ScaffoldFile>) {
    for entry in dir.entries() {
        match entry {
            DirEntry::File(file) => {
                if let Some(content) = file.contents_utf8() {
                    files.push(ScaffoldFile {
                        path: file.path().to_string_lossy().to_string(),
                        content,
                    });
                }
            }
            DirEntry::Dir(subdir) => collect_files(subdir, files),
        }
    }
}

/// Create the project directory itself.
pub fn create_directory(options: &ProjectOptions) -> Result<(), AppError> {
    fs::create_dir_all(&options.path)?;
    Ok(())
}

/// Initialize an empty git repository at the project root.
pub fn init_git_repo(options: &ProjectOptions) -> Result<(), AppError> {
    git2::Repository::init(&options.path)?;
    Ok(())
}

/// Write the static scaffold bundle (`.gitignore`, `docs/`, `tests/`).
pub fn write_scaffold_assets(options: &ProjectOptions) -> Result<(), AppError> {
    for file in scaffold_files() {
        let target = options.path.join(&file.path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(target, file.content)?;
    }
    Ok(())
}

/// Render and write `README.md`.
pub fn create_readme(options: &ProjectOptions) -> Result<(), AppError> {
    let rendered = templates::render("readme", templates::README, options.project_name()?)?;
    fs::write(options.path.join("README.md"), rendered)?;
    Ok(())
}

/// Render and write the MIT `LICENSE`.
pub fn create_license(options: &ProjectOptions) -> Result<(), AppError> {
    let rendered = templates::render("license", templates::LICENSE, options.project_name()?)?;
    fs::write(options.path.join("LICENSE"), rendered)?;
    Ok(())
}

/// Render and write the `Dockerfile`.
pub fn create_dockerfile(options: &ProjectOptions) -> Result<(), AppError> {
    let rendered = templates::render("dockerfile", templates::DOCKERFILE, options.project_name()?)?;
    fs::write(options.path.join("Dockerfile"), rendered)?;
    Ok(())
}

/// Create the `.venv/` virtual environment.
pub fn create_venv(options: &ProjectOptions) -> Result<(), AppError> {
    PythonToolRunner::new(options.path.clone()).create_venv()
}

/// Install declared dependencies into the venv.
pub fn install_dependencies(options: &ProjectOptions) -> Result<(), AppError> {
    PythonToolRunner::new(options.path.clone()).pip_install(&options.dependencies)
}

/// Install linter packages into the venv.
pub fn install_linters(options: &ProjectOptions) -> Result<(), AppError> {
    PythonToolRunner::new(options.path.clone()).pip_install(&options.linters)
}
