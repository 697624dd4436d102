//! Library surface of the nbgist CLI: gist loading and URL query parsing.
//!
//! Kept as a lib so integration tests can exercise the loader plumbing
//! without spawning the binary.

pub mod gist;
pub mod query;
