//! Where leaves write their messages.

use std::sync::{Arc, Mutex, PoisonError};

/// Line-oriented output sink shared by every leaf in a routine.
///
/// The binary prints to stdout; tests capture lines in memory.
#[derive(Clone, Debug, Default)]
pub enum Console {
    #[default]
    Stdout,
    Buffer(Arc<Mutex<Vec<String>>>),
}

impl Console {
    pub fn buffer() -> Self {
        Self::Buffer(Arc::default())
    }

    pub fn say(&self, line: impl AsRef<str>) {
        match self {
            Self::Stdout => println!("{}", line.as_ref()),
            Self::Buffer(lines) => lines
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(line.as_ref().to_owned()),
        }
    }

    /// Captured lines; always empty for stdout.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Stdout => Vec::new(),
            Self::Buffer(lines) => lines.lock().unwrap_or_else(PoisonError::into_inner).clone(),
        }
    }
}
