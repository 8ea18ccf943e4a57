//! Run-length encoded bitmaps and their Boolean algebra
//!
//! This module provides the [`RleBitmap`] value type and the four
//! primitive Boolean operations over it: union, intersection, symmetric
//! difference, and complement against a universe bound. Union and
//! intersection share one n-ary merge loop parameterized by a cursor
//! selection policy; the symmetric difference is a parity merge; the
//! complement is a linear phase-flip rewrite.

pub mod bitmap;
pub mod ops;

mod cursor;
mod merge;

pub use bitmap::{Ones, RleBitmap, RunIter};
pub use ops::{and, not, or, universe, xor, OpsConfig, RleOps, DEFAULT_UNIVERSE};
