//! Form state for the terminal client.
//!
//! Mirrors the upload form: one file slot guarded to PDFs, two option groups,
//! a result/error display pair, and a reset back to the initial defaults.

use std::path::{Path, PathBuf};

use clap::ValueEnum;

pub const FILE_TYPE_ERROR: &str = "Whoopsie! PDFs only, buddy! Try again!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Mode {
    #[default]
    Roast,
    Feedback,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Roast => "roast",
            Mode::Feedback => "feedback",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ResponseLength {
    Short,
    #[default]
    Medium,
    Descriptive,
}

impl ResponseLength {
    pub fn as_str(self) -> &'static str {
        match self {
            ResponseLength::Short => "short",
            ResponseLength::Medium => "medium",
            ResponseLength::Descriptive => "descriptive",
        }
    }
}

impl std::fmt::Display for ResponseLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The whole client-side state. Nothing here survives a reset.
#[derive(Debug, Default)]
pub struct RoastForm {
    pub file: Option<PathBuf>,
    pub mode: Mode,
    pub response_length: ResponseLength,
    pub result: Option<String>,
    pub error: Option<String>,
    pub is_loading: bool,
}

impl RoastForm {
    /// File-type guard, applied before any network call. A non-PDF selection
    /// sets the error message and leaves the file slot untouched.
    pub fn select_file(&mut self, path: &Path) {
        let is_pdf = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("pdf"))
            .unwrap_or(false);
        if is_pdf {
            self.file = Some(path.to_path_buf());
            self.error = None;
        } else {
            self.error = Some(FILE_TYPE_ERROR.to_string());
        }
    }

    /// Restores the initial defaults: no file, no result, no error,
    /// mode=roast, responseLength=medium.
    pub fn reset(&mut self) {
        *self = RoastForm::default();
    }
}

/// Abbreviates long file names for the post-success summary line.
/// Counts characters, not bytes: file names come back from the server
/// verbatim and may be non-ASCII.
pub fn slice_text(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() > 20 {
        let head: String = chars[..10].iter().collect();
        let tail: String = chars[chars.len() - 10..].iter().collect();
        format!("{head}...{tail}")
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_roast_and_medium() {
        let form = RoastForm::default();
        assert_eq!(form.mode, Mode::Roast);
        assert_eq!(form.response_length, ResponseLength::Medium);
        assert!(form.file.is_none());
        assert!(form.result.is_none());
        assert!(form.error.is_none());
        assert!(!form.is_loading);
    }

    #[test]
    fn pdf_selection_sets_file_and_clears_error() {
        let mut form = RoastForm::default();
        form.error = Some("stale".to_string());
        form.select_file(Path::new("cv.PDF"));
        assert_eq!(form.file.as_deref(), Some(Path::new("cv.PDF")));
        assert!(form.error.is_none());
    }

    #[test]
    fn non_pdf_selection_sets_error_and_leaves_file_unset() {
        let mut form = RoastForm::default();
        form.select_file(Path::new("cv.docx"));
        assert!(form.file.is_none());
        assert_eq!(form.error.as_deref(), Some(FILE_TYPE_ERROR));
    }

    #[test]
    fn reset_restores_all_defaults() {
        let mut form = RoastForm {
            file: Some(PathBuf::from("cv.pdf")),
            mode: Mode::Feedback,
            response_length: ResponseLength::Descriptive,
            result: Some("roasted".to_string()),
            error: Some("oops".to_string()),
            is_loading: true,
        };
        form.reset();
        assert!(form.file.is_none());
        assert!(form.result.is_none());
        assert!(form.error.is_none());
        assert_eq!(form.mode, Mode::Roast);
        assert_eq!(form.response_length, ResponseLength::Medium);
        assert!(!form.is_loading);
    }

    #[test]
    fn long_file_names_are_abbreviated() {
        assert_eq!(slice_text("short.pdf"), "short.pdf");
        assert_eq!(
            slice_text("a-very-long-resume-file-name.pdf"),
            "a-very-lon...e-name.pdf"
        );
    }

    #[test]
    fn non_ascii_file_names_are_abbreviated_on_char_boundaries() {
        // 17 chars but 29 bytes: stays whole, and must not panic mid-character
        let name = format!("a{}.pdf", "é".repeat(12));
        assert_eq!(slice_text(&name), name);

        // 26 chars: abbreviated to the first and last 10 chars
        let long = format!("{}.pdf", "é".repeat(22));
        assert_eq!(slice_text(&long), "éééééééééé...éééééé.pdf");
    }
}
