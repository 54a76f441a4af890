//! models module
pub mod syllabification;
pub mod syllable;
pub mod word;

/// Re-export
pub use syllabification::Syllabification;
pub use syllable::Syllable;
pub use word::{Word, WordClass, normalize};
