//! Reading documents and writing sorted output.

use std::fmt::Display;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::persistent::PersistentOrderedSet;

// =============================================================================
// TextError
// =============================================================================

/// Error types for document input and output.
#[derive(Debug, Error)]
pub enum TextError {
    /// The input document could not be read.
    #[error("failed to read {}", .path.display())]
    Read {
        /// Path of the document.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The output could not be created or written.
    #[error("failed to write {}", describe_sink(.path.as_deref()))]
    Write {
        /// Path of the output file, or `None` for an arbitrary sink.
        path: Option<PathBuf>,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl TextError {
    fn write(source: io::Error) -> Self {
        Self::Write { path: None, source }
    }

    /// Attaches the output path to a write error.
    fn at_path(self, target: &Path) -> Self {
        match self {
            Self::Write { source, .. } => Self::Write {
                path: Some(target.to_path_buf()),
                source,
            },
            read @ Self::Read { .. } => read,
        }
    }
}

fn describe_sink(path: Option<&Path>) -> String {
    path.map_or_else(|| "output sink".to_string(), |path| path.display().to_string())
}

// =============================================================================
// Input
// =============================================================================

/// Reads a whole document into memory.
///
/// Bytes that are not valid UTF-8 are replaced with `U+FFFD` rather than
/// rejected, so any file can be processed.
///
/// # Errors
///
/// Returns [`TextError::Read`] if the file cannot be opened or read.
pub fn read_document(path: impl AsRef<Path>) -> Result<String, TextError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| TextError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read document");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

// =============================================================================
// Output
// =============================================================================

/// Writes each item on its own line and flushes the sink.
///
/// Returns the number of lines written.
///
/// # Errors
///
/// Returns [`TextError::Write`] if writing or flushing fails.
///
/// # Examples
///
/// ```rust
/// use lexitree::text::write_lines;
///
/// let mut output = Vec::new();
/// assert_eq!(write_lines(&mut output, ["a", "b"]).unwrap(), 2);
/// assert_eq!(output, b"a\nb\n");
/// ```
pub fn write_lines<W, I>(mut sink: W, items: I) -> Result<usize, TextError>
where
    W: Write,
    I: IntoIterator,
    I::Item: Display,
{
    let mut written = 0;
    for item in items {
        writeln!(sink, "{item}").map_err(TextError::write)?;
        written += 1;
    }
    sink.flush().map_err(TextError::write)?;
    Ok(written)
}

/// Creates (or truncates) the file at `path` and writes the set to it in
/// ascending order, one element per line.
///
/// Returns the number of lines written.
///
/// # Errors
///
/// Returns [`TextError::Write`] carrying `path` if the file cannot be
/// created or written.
pub fn write_sorted<T>(path: impl AsRef<Path>, set: &PersistentOrderedSet<T>) -> Result<usize, TextError>
where
    T: Clone + Ord + Display,
{
    let path = path.as_ref();
    let file = File::create(path)
        .map_err(TextError::write)
        .map_err(|error| error.at_path(path))?;

    let written = write_lines(BufWriter::new(file), set).map_err(|error| error.at_path(path))?;
    tracing::debug!(path = %path.display(), lines = written, "wrote sorted output");
    Ok(written)
}
