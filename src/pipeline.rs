//! Ordered execution of scaffolding steps with cleanup on failure.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{AppError, CleanupOutcome};
use crate::options::ProjectOptions;
use crate::scaffold;

/// A named scaffolding step.
pub struct Step {
    pub name: &'static str,
    pub run: fn(&ProjectOptions) -> Result<(), AppError>,
}

/// Build the step sequence for the given options.
///
/// Conditional steps are appended for `use_linters` and `use_docker`;
/// venv-related steps are dropped entirely with `skip_venv`.
pub fn plan(options: &ProjectOptions) -> Vec<Step> {
    let mut steps = vec![
        Step { name: "create-directory", run: scaffold::create_directory },
        Step { name: "git-init", run: scaffold::init_git_repo },
        Step { name: "scaffold", run: scaffold::write_scaffold_assets },
        Step { name: "readme", run: scaffold::create_readme },
        Step { name: "license", run: scaffold::create_license },
    ];

    if !options.skip_venv {
        steps.push(Step { name: "venv", run: scaffold::create_venv });
        steps.push(Step { name: "dependencies", run: scaffold::install_dependencies });
        if options.use_linters {
            steps.push(Step { name: "linters", run: scaffold::install_linters });
        }
    }

    if options.use_docker {
        steps.push(Step { name: "dockerfile", run: scaffold::create_dockerfile });
    }

    steps
}

/// Run steps in order. On the first failure, remove the partial project
/// tree and return an error naming the failed step.
pub fn execute(options: &ProjectOptions, steps: &[Step]) -> Result<(), AppError> {
    for step in steps {
        if let Err(err) = (step.run)(options) {
            let cleanup = if on_failure(&options.path) {
                CleanupOutcome::Removed
            } else {
                CleanupOutcome::LeftBehind
            };
            return Err(AppError::StepFailed { step: step.name, cleanup, source: Box::new(err) });
        }
    }
    Ok(())
}

/// Remove the partially created project tree at `path`.
///
/// Returns `true` when the tree is gone afterwards, including when nothing
/// was ever created there, and `false` when removal failed. Never panics.
pub fn on_failure(path: &Path) -> bool {
    match fs::remove_dir_all(path) {
        Ok(()) => true,
        Err(err) if err.kind() == io::ErrorKind::NotFound => true,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step_names(options: &ProjectOptions) -> Vec<&'static str> {
        plan(options).iter().map(|s| s.name).collect()
    }

    fn failing_step(_: &ProjectOptions) -> Result<(), AppError> {
        Err(AppError::Tool { command: "pip install".to_string(), details: "boom".to_string() })
    }

    #[test]
    fn plan_for_defaults_ends_with_dependency_install() {
        let options = ProjectOptions::new("proj");
        assert_eq!(
            step_names(&options),
            vec!["create-directory", "git-init", "scaffold", "readme", "license", "venv",
                "dependencies"]
        );
    }

    #[test]
    fn plan_appends_linters_and_dockerfile_when_requested() {
        let mut options = ProjectOptions::new("proj");
        options.use_linters = true;
        options.use_docker = true;
        let names = step_names(&options);
        assert_eq!(names.last(), Some(&"dockerfile"));
        assert!(names.contains(&"linters"));
    }

    #[test]
    fn plan_with_skip_venv_has_no_install_steps() {
        let mut options = ProjectOptions::new("proj");
        options.skip_venv = true;
        let names = step_names(&options);
        assert!(!names.contains(&"venv"));
        assert!(!names.contains(&"dependencies"));
    }

    #[test]
    fn execute_removes_partial_tree_on_step_failure() {
        let dir = tempfile::tempdir().unwrap();
        let options = ProjectOptions::new(dir.path().join("proj"));
        let steps = [
            Step { name: "create-directory", run: scaffold::create_directory },
            Step { name: "explode", run: failing_step },
        ];

        let err = execute(&options, &steps).unwrap_err();

        assert!(!options.path.exists(), "partial tree should be removed");
        match err {
            AppError::StepFailed { step, cleanup, .. } => {
                assert_eq!(step, "explode");
                assert_eq!(cleanup, CleanupOutcome::Removed);
            }
            other => panic!("expected StepFailed, got {:?}", other),
        }
    }

    #[test]
    fn execute_reports_left_behind_when_cleanup_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("proj");
        fs::write(&path, "plain file").unwrap();
        let options = ProjectOptions::new(&path);
        let steps = [Step { name: "explode", run: failing_step }];

        let err = execute(&options, &steps).unwrap_err();

        match err {
            AppError::StepFailed { cleanup, .. } => {
                assert_eq!(cleanup, CleanupOutcome::LeftBehind);
            }
            other => panic!("expected StepFailed, got {:?}", other),
        }
    }

    #[test]
    fn on_failure_removes_an_existing_tree() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("proj");
        fs::create_dir_all(project.join("docs")).unwrap();
        fs::write(project.join("docs/DOCS.md"), "docs").unwrap();

        assert!(on_failure(&project));
        assert!(!project.exists());
    }

    #[test]
    fn on_failure_is_true_for_a_missing_tree() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("never-created");
        assert!(on_failure(&project));
    }

    #[test]
    fn on_failure_is_false_when_removal_fails() {
        let dir = tempfile::tempdir().unwrap();
        let not_a_dir = dir.path().join("proj");
        fs::write(&not_a_dir, "plain file").unwrap();

        // remove_dir_all cannot remove a non-directory.
        assert!(!on_failure(&not_a_dir));
        assert!(not_a_dir.exists());
    }

    #[test]
    fn on_failure_is_stable_across_repeated_calls() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("proj");
        fs::create_dir_all(&project).unwrap();

        assert!(on_failure(&project));
        assert!(on_failure(&project));
    }
}
