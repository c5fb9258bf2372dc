use std::path::{Path, PathBuf};

use crate::models::resume::TailoredResume;

/// Lower-cases `text`, turns spaces into `_`, and drops everything that is not
/// alphanumeric or `_`.
pub fn sanitize(text: &str) -> String {
    text.replace(' ', "_")
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect::<String>()
        .to_lowercase()
}

/// `<dir>/<name>_<company>_<title>.pdf`. Repeat runs for the same job overwrite the file.
pub fn output_filename(resume: &TailoredResume, output_dir: &Path) -> PathBuf {
    output_dir.join(format!(
        "{}_{}_{}.pdf",
        sanitize(&resume.name),
        sanitize(&resume.target_company),
        sanitize(&resume.target_job_title)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::tests::sample_resume;

    #[test]
    fn test_sanitize_strips_punctuation() {
        assert_eq!(sanitize("Jane O'Brien"), "jane_obrien");
        assert_eq!(sanitize("Acme, Inc."), "acme_inc");
        assert_eq!(sanitize("Sr. Engineer!"), "sr_engineer");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn test_output_filename() {
        let mut resume = sample_resume();
        resume.name = "Jane O'Brien".to_string();
        resume.target_company = "Acme, Inc.".to_string();
        resume.target_job_title = "Sr. Engineer!".to_string();

        assert_eq!(
            output_filename(&resume, Path::new("output")),
            PathBuf::from("output/jane_obrien_acme_inc_sr_engineer.pdf")
        );
    }
}
