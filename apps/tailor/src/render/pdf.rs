//! HTML → PDF via a headless Chromium.
//!
//! Blocking: the caller runs this on a blocking thread. The browser process lives only
//! for the duration of one print and is closed when `Browser` drops.

use std::fs;
use std::path::Path;

use headless_chrome::types::PrintToPdfOptions;
use headless_chrome::{Browser, LaunchOptions};
use tracing::{debug, error};

use crate::errors::AppError;

const A4_WIDTH_IN: f64 = 8.27;
const A4_HEIGHT_IN: f64 = 11.69;

/// A4 paper, backgrounds on, no header/footer.
pub fn a4_options() -> PrintToPdfOptions {
    PrintToPdfOptions {
        paper_width: Some(A4_WIDTH_IN),
        paper_height: Some(A4_HEIGHT_IN),
        print_background: Some(true),
        display_header_footer: Some(false),
        ..Default::default()
    }
}

/// `file://` URL for an HTML file on disk. The path is made absolute first.
pub fn file_url(path: &Path) -> Result<String, AppError> {
    let absolute = path.canonicalize()?;
    Ok(format!("file://{}", absolute.display()))
}

/// Headless launch options. `sandbox: false` adds `--no-sandbox`, which Chrome
/// requires when running as root.
pub fn launch_options(sandbox: bool) -> LaunchOptions<'static> {
    LaunchOptions {
        sandbox,
        ..LaunchOptions::default()
    }
}

/// Loads `html_path` in a headless browser and prints it to `pdf_path`.
pub fn print_html_to_pdf(html_path: &Path, pdf_path: &Path, sandbox: bool) -> Result<(), AppError> {
    let url = file_url(html_path)?;
    debug!("Printing {url} to {}", pdf_path.display());

    let pdf = print_url(&url, sandbox).map_err(|e| {
        error!("Failed to generate PDF: {e:#}");
        AppError::Render(format!("Failed to generate PDF: {e:#}"))
    })?;

    fs::write(pdf_path, pdf).map_err(|e| {
        error!("Failed to write PDF file {}: {e}", pdf_path.display());
        AppError::Io(e)
    })
}

fn print_url(url: &str, sandbox: bool) -> anyhow::Result<Vec<u8>> {
    let browser = Browser::new(launch_options(sandbox)).map_err(|e| {
        let hint = if sandbox {
            " (Chrome refuses to start sandboxed as root; set TAILOR_CHROME_NO_SANDBOX=1)"
        } else {
            ""
        };
        anyhow::anyhow!("Failed to launch headless Chrome{hint}: {e}")
    })?;
    let tab = browser.new_tab()?;
    tab.navigate_to(url)?.wait_until_navigated()?;
    tab.print_to_pdf(Some(a4_options()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_options() {
        let options = a4_options();
        assert_eq!(options.paper_width, Some(8.27));
        assert_eq!(options.paper_height, Some(11.69));
        assert_eq!(options.print_background, Some(true));
    }

    #[test]
    fn test_launch_options_sandbox_switch() {
        assert!(launch_options(true).sandbox);
        assert!(!launch_options(false).sandbox);
        assert!(launch_options(false).headless);
    }

    #[test]
    fn test_file_url_is_absolute() {
        let dir = tempfile::tempdir().unwrap();
        let html = dir.path().join("temp_resume.html");
        fs::write(&html, "<p>hi</p>").unwrap();

        let url = file_url(&html).unwrap();
        assert!(url.starts_with("file:///"));
        assert!(url.ends_with("temp_resume.html"));
    }

    #[test]
    fn test_file_url_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            file_url(&dir.path().join("nope.html")),
            Err(AppError::Io(_))
        ));
    }
}
