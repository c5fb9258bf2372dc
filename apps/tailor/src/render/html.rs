use std::path::Path;

use minijinja::{path_loader, Environment};
use tracing::error;

use crate::errors::AppError;
use crate::models::resume::TailoredResume;

/// Template file looked up inside the template directory.
pub const TEMPLATE_NAME: &str = "template.html";

/// Renders `template.html` from `template_dir` with the resume as its context.
/// Every `TailoredResume` field is a top-level template variable.
pub fn render_html(resume: &TailoredResume, template_dir: &Path) -> Result<String, AppError> {
    let mut env = Environment::new();
    env.set_loader(path_loader(template_dir));

    let template = env.get_template(TEMPLATE_NAME).map_err(|e| {
        error!("Failed to load template from {}: {e}", template_dir.display());
        AppError::Render(format!("Failed to load template: {e}"))
    })?;

    template.render(resume).map_err(|e| {
        error!("Failed to render resume template: {e}");
        AppError::Render(format!("Failed to render template: {e}"))
    })
}
