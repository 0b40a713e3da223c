//! Text pipeline around the persistent ordered set.
//!
//! This module provides the pieces that turn a document into its sorted
//! vocabulary:
//!
//! - [`read_document`]: Load a document from disk
//! - [`tokenize`]: Split text into normalized words
//! - [`collect_vocabulary`]: Fold words into a [`PersistentOrderedSet`]
//! - [`write_lines`] / [`write_sorted`]: Write the sorted words to a sink
//!
//! None of these functions hold state between calls. The set is threaded
//! through the fold as a value, one version per word.
//!
//! # Examples
//!
//! ```rust
//! use lexitree::text::{collect_vocabulary, tokenize, write_lines};
//!
//! let vocabulary = collect_vocabulary(tokenize("The cat saw the other cat."));
//! assert_eq!(vocabulary.token_count(), 6);
//!
//! let mut output = Vec::new();
//! let written = write_lines(&mut output, vocabulary.words()).unwrap();
//! assert_eq!(written, 4);
//! assert_eq!(String::from_utf8(output).unwrap(), "cat\nother\nsaw\nthe\n");
//! ```
//!
//! [`PersistentOrderedSet`]: crate::persistent::PersistentOrderedSet

mod document;
mod tokenize;
mod vocabulary;

pub use document::{TextError, read_document, write_lines, write_sorted};
pub use tokenize::{normalize, tokenize};
pub use vocabulary::{Vocabulary, collect_vocabulary};
