//! # Runbit: Boolean Operations over Run-Length Encoded Bitmaps
//!
//! This crate performs the four primitive Boolean operations on bitmaps
//! encoded as alternating run lengths, serving as a building block for
//! bitmap-index data structures: intersection and union of identifier
//! sets, filter composition, and inverted-index postings.
//!
//! ## Key Features
//!
//! - **Compact data model**: a bitmap is a sequence of run lengths,
//!   starting with a (possibly zero-length) run of zeros
//! - **n-ary merge**: union and intersection of any number of inputs in a
//!   single pass, with early termination for intersection
//! - **Parity merge**: symmetric difference without intermediate
//!   allocations
//! - **Universe-bounded complement**: positions past the encoded runs are
//!   implicit zeros up to a configurable universe bound
//! - **Canonical outputs**: no zero-length interior runs, no trailing
//!   zero-run, adjacent runs always alternate polarity
//! - **Checked validation**: run totals are verified against the universe
//!   bound before any work happens; no panics on well-formed input
//!
//! ## Quick Start
//!
//! ```rust
//! use runbit::{and, not, or, xor, RleBitmap};
//!
//! // Three identifier sets in run-length form
//! let a = RleBitmap::from_runs(vec![10, 2]);
//! let b = RleBitmap::from_runs(vec![15, 1]);
//! let c = RleBitmap::from_runs(vec![0, 4, 12, 2]);
//!
//! let union = or(&[a.clone(), b.clone(), c.clone()])?;
//! assert_eq!(union.runs(), &[0, 4, 6, 2, 3, 3]);
//!
//! // The three sets are pairwise disjoint
//! let common = and(&[a.clone(), b.clone(), c.clone()])?;
//! assert!(common.runs().is_empty());
//! assert_eq!(xor(&[a.clone(), b, c])?, union);
//!
//! // Complement extends to the universe bound
//! let flipped = not(&a)?;
//! assert_eq!(&flipped.runs()[..3], &[0, 10, 2]);
//! # Ok::<(), runbit::RunBitError>(())
//! ```
//!
//! ## Degenerate Inputs
//!
//! Empty sequences, all-zeros sequences, interior zero-length runs, and
//! trailing zero-runs are all accepted as input and normalized away in
//! output. A bitmap counts as "empty of ones" exactly when no odd-indexed
//! element is positive.

#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod error;
pub mod rle;

// Re-export core types
pub use error::{Result, RunBitError};
pub use rle::{
    and, not, or, universe, xor, Ones, OpsConfig, RleBitmap, RleOps, RunIter, DEFAULT_UNIVERSE,
};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library (currently no-op, for future use)
pub fn init() {
    log::debug!("Initializing runbit v{}", VERSION);
}
