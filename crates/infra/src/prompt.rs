//! Where replacement file names come from when a catalog file is missing.

use std::io::{BufRead, Write};
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Source of replacement catalog file names.
///
/// Implementations may block (e.g. on a terminal). Returning `None` means no more
/// input will ever arrive; the loader gives up instead of asking again. An empty
/// answer asks for the configured default file.
pub trait FileNamePrompt {
    fn next_file_name(&mut self, missing: &Path) -> Option<String>;
}

impl<F> FileNamePrompt for F
where
    F: FnMut(&Path) -> Option<String>,
{
    fn next_file_name(&mut self, missing: &Path) -> Option<String> {
        self(missing)
    }
}

/// Interactive prompt on stderr/stdin.
#[derive(Debug, Clone)]
pub struct StdinPrompt {
    default_file: String,
}

impl StdinPrompt {
    pub fn new(default_file: impl Into<String>) -> Self {
        Self {
            default_file: default_file.into(),
        }
    }
}

impl FileNamePrompt for StdinPrompt {
    fn next_file_name(&mut self, missing: &Path) -> Option<String> {
        let mut stderr = std::io::stderr().lock();
        let _ = write!(
            stderr,
            "File '{}' not found. Enter a JSON file name (default '{}'): ",
            missing.display(),
            self.default_file
        );
        let _ = stderr.flush();

        let mut line = String::new();
        match std::io::stdin().lock().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_string()),
            Err(err) => {
                tracing::warn!(error = %err, "failed to read replacement file name");
                None
            }
        }
    }
}

/// Always answers with the same name and counts how often it was asked.
///
/// Clones share the counter.
#[derive(Debug, Clone)]
pub struct FixedPrompt {
    name: String,
    asked: Arc<AtomicUsize>,
}

impl FixedPrompt {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            asked: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn asked(&self) -> usize {
        self.asked.load(Ordering::Relaxed)
    }
}

impl FileNamePrompt for FixedPrompt {
    fn next_file_name(&mut self, _missing: &Path) -> Option<String> {
        self.asked.fetch_add(1, Ordering::Relaxed);
        Some(self.name.clone())
    }
}
