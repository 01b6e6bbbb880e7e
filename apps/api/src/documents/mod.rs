//! Startup document loading — the resume PDF and the free-text summary.
//!
//! Loading never fails: a missing or unreadable file yields placeholder text so
//! the service always starts. `DocumentText` records which path was taken.

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use tracing::{error, info};

pub const RESUME_FALLBACK: &str =
    "Resume PDF not found or readable. Please add 'resume.pdf' to the project root.";
pub const SUMMARY_FALLBACK: &str =
    "Summary text not found. Please add 'summary.txt' to the project root.";

/// Outcome of loading one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentText {
    Loaded(String),
    Fallback { reason: String, text: &'static str },
}

impl DocumentText {
    /// The text to hand to the prompt builder, whichever path was taken.
    pub fn text(&self) -> &str {
        match self {
            DocumentText::Loaded(text) => text,
            DocumentText::Fallback { text, .. } => text,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, DocumentText::Loaded(_))
    }

    fn fallback(path: &Path, reason: String, text: &'static str) -> Self {
        error!("Error reading {}: {reason}", path.display());
        DocumentText::Fallback { reason, text }
    }
}

/// Extracts the text of every page of a PDF, each page followed by a newline.
pub fn load_resume(path: impl AsRef<Path>) -> DocumentText {
    let path = path.as_ref();

    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => return DocumentText::fallback(path, e.to_string(), RESUME_FALLBACK),
    };

    // pdf-extract panics on some malformed inputs instead of returning an error.
    let extracted = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(&bytes)
    }));

    match extracted {
        Ok(Ok(pages)) => DocumentText::Loaded(join_pages(&pages)),
        Ok(Err(e)) => DocumentText::fallback(path, e.to_string(), RESUME_FALLBACK),
        Err(_) => DocumentText::fallback(
            path,
            "PDF extractor panicked".to_string(),
            RESUME_FALLBACK,
        ),
    }
}

/// Reads a UTF-8 text file.
pub fn load_summary(path: impl AsRef<Path>) -> DocumentText {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(text) => DocumentText::Loaded(text),
        Err(e) => DocumentText::fallback(path, e.to_string(), SUMMARY_FALLBACK),
    }
}

fn join_pages(pages: &[String]) -> String {
    pages.iter().fold(String::new(), |mut acc, page| {
        acc.push_str(page);
        acc.push('\n');
        acc
    })
}

/// Both grounding documents, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Documents {
    pub resume: DocumentText,
    pub summary: DocumentText,
}

impl Documents {
    pub fn load(resume_path: impl AsRef<Path>, summary_path: impl AsRef<Path>) -> Self {
        let docs = Documents {
            resume: load_resume(resume_path),
            summary: load_summary(summary_path),
        };
        docs.log_outcome();
        docs
    }

    fn log_outcome(&self) {
        for (name, doc) in [("resume", &self.resume), ("summary", &self.summary)] {
            if doc.is_loaded() {
                info!("Loaded {name} ({} chars)", doc.text().chars().count());
            } else {
                info!("Using placeholder {name} text");
            }
        }
    }
}
