#![crate_name = "xxhash32"]
#![deny(missing_docs)]

//! XXH32, a fast non-cryptographic 32-bit hash, with one-shot and streaming
//! interfaces that agree bit for bit.
//!
//! ```rust
//! let mut state = xxhash32::XxHash32::new(0);
//! state.update(b"a");
//! assert_eq!(state.digest(), xxhash32::hash(b"a", 0));
//! assert_eq!(xxhash32::hash(b"", 0), 0x02CC5D05);
//! ```

#[macro_use]
extern crate log;

/// Public exports
pub use self::checksum::xxh32::State32 as XxHash32;
pub use self::checksum::xxh32::{hash, BuildXxHash32};

/// Checksum algorithms
// https://github.com/Cyan4973/xxHash
pub mod checksum {
    pub mod io;
    pub mod xxh32;
}

/// Errors reported by the hashing interfaces
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Null input pointer given with a non-zero length
    #[error("invalid input: null pointer with non-zero length")]
    InvalidInput,
}
