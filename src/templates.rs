//! Embedded templates for rendered project files.

use chrono::{Datelike, Utc};
use minijinja::{Environment, context};

use crate::error::AppError;

pub static README: &str = include_str!("templates/readme.md.j2");
pub static LICENSE: &str = include_str!("templates/license.j2");
pub static DOCKERFILE: &str = include_str!("templates/dockerfile.j2");

/// Render a template with the standard project context.
///
/// The context carries the project name and the current year.
pub fn render(name: &str, template: &str, project_name: &str) -> Result<String, AppError> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);

    env.add_template(name, template).map_err(|e| AppError::Template {
        name: name.to_string(),
        details: e.to_string(),
    })?;

    let template = env.get_template(name).map_err(|e| AppError::Template {
        name: name.to_string(),
        details: e.to_string(),
    })?;

    template
        .render(context! { project_name, year => Utc::now().year() })
        .map_err(|e| AppError::Template { name: name.to_string(), details: e.to_string() })
}
