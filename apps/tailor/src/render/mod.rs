//! Resume rendering: template → HTML scratch file → headless-browser PDF.

pub mod filename;
pub mod html;
pub mod pdf;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::errors::AppError;
use crate::models::resume::TailoredResume;

/// Scratch HTML file written next to the PDF.
pub const SCRATCH_HTML: &str = "temp_resume.html";
/// JSON snapshot of the last assembled resume, the input of preview mode.
pub const SNAPSHOT_JSON: &str = "sample_resume.json";
/// Fixed output name for preview mode.
pub const PREVIEW_PDF: &str = "preview.pdf";

/// Renders the resume to HTML, writes it to `output_dir/temp_resume.html`, and prints
/// that file to `pdf_path`. The scratch file is left in place.
/// `sandbox: false` launches Chrome with `--no-sandbox`.
pub async fn render_resume_html_to_pdf(
    resume: &TailoredResume,
    template_dir: &Path,
    output_dir: &Path,
    pdf_path: &Path,
    sandbox: bool,
) -> Result<(), AppError> {
    let html = html::render_html(resume, template_dir)?;

    let html_path = write_scratch_html(output_dir, &html)?;

    let pdf_path: PathBuf = pdf_path.to_path_buf();
    let target = pdf_path.clone();
    tokio::task::spawn_blocking(move || pdf::print_html_to_pdf(&html_path, &target, sandbox))
        .await
        .map_err(|e| AppError::Render(format!("PDF task failed: {e}")))??;

    info!("Wrote {}", pdf_path.display());
    Ok(())
}

fn write_scratch_html(output_dir: &Path, html: &str) -> Result<PathBuf, AppError> {
    let html_path = output_dir.join(SCRATCH_HTML);
    fs::write(&html_path, html).map_err(|e| {
        error!("Failed to write HTML file {}: {e}", html_path.display());
        AppError::Io(e)
    })?;
    Ok(html_path)
}
