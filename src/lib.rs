//! # lexitree
//!
//! A persistent ordered set built on a left-leaning red-black tree, and the
//! small text pipeline that turns a document into its sorted vocabulary.
//!
//! ## Overview
//!
//! - **Persistent Data Structures**: [`PersistentOrderedSet`](persistent::PersistentOrderedSet),
//!   an immutable, versioned set where every insertion returns a new version
//!   and shares all untouched subtrees with the previous one
//! - **Text Pipeline**: reading a document, normalizing it into words, and
//!   writing the sorted, duplicate-free word list to a sink
//!
//! ## Feature Flags
//!
//! - `persistent`: Persistent ordered set (enabled by default)
//! - `text`: Tokenizer and document I/O (enabled by default)
//! - `arc`: Use `Arc` instead of `Rc` so versions can cross threads
//! - `serde`: Serialize and deserialize sets as sequences
//! - `full`: Enable all features except `arc`
//!
//! ## Example
//!
//! ```rust
//! use lexitree::prelude::*;
//!
//! let first = PersistentOrderedSet::new().insert(5).insert(3).insert(7);
//! let second = first.insert(3);
//!
//! assert_eq!(first.to_sorted_vec(), vec![3, 5, 7]);
//! assert!(first.ptr_eq(&second));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use lexitree::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;

    #[cfg(feature = "text")]
    pub use crate::text::*;
}

#[cfg(feature = "persistent")]
pub mod persistent;

#[cfg(feature = "text")]
pub mod text;
