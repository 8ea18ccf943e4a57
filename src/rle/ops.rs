//! Boolean operations over run-length encoded bitmaps
//!
//! The operation engine validates every input against its universe bound,
//! then drives the shared merge loop (union, intersection), the parity
//! merge (symmetric difference), or the phase-flip rewrite (complement).
//! Free functions over the default universe cover the common case.

use crate::error::{Result, RunBitError};
use crate::rle::bitmap::{RleBitmap, RunBuilder};
use crate::rle::cursor::Cursor;
use crate::rle::merge::{merge, IntersectionPolicy, UnionPolicy};

/// Default universe bound: `2^53 - 1`
///
/// Inherited from stored data produced by systems whose widest safely
/// representable integer is the 53-bit mantissa of a 64-bit float. Bitmaps
/// validated against this bound are bit-exact compatible with that data.
pub const DEFAULT_UNIVERSE: u64 = (1 << 53) - 1;

/// Configuration for bitmap operations
#[derive(Debug, Clone)]
pub struct OpsConfig {
    /// Total number of bit positions every bitmap is defined over
    pub universe: u64,
}

impl Default for OpsConfig {
    fn default() -> Self {
        Self {
            universe: DEFAULT_UNIVERSE,
        }
    }
}

/// Boolean operation engine with a configurable universe bound
///
/// Every operation validates its inputs, never mutates them, and returns
/// a freshly allocated canonical bitmap.
///
/// # Examples
///
/// ```rust
/// use runbit::{OpsConfig, RleBitmap, RleOps};
///
/// let ops = RleOps::with_config(OpsConfig { universe: 64 })?;
/// let flipped = ops.not(&RleBitmap::from_runs(vec![10, 2]))?;
/// assert_eq!(flipped.runs(), &[0, 10, 2, 52]);
/// # Ok::<(), runbit::RunBitError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct RleOps {
    config: OpsConfig,
}

impl RleOps {
    /// Create an engine over the default universe
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with a custom configuration
    ///
    /// Fails with [`RunBitError::Configuration`] if the universe bound
    /// is zero.
    pub fn with_config(config: OpsConfig) -> Result<Self> {
        if config.universe == 0 {
            return Err(RunBitError::configuration(
                "universe bound must be at least 1",
            ));
        }
        Ok(Self { config })
    }

    /// The universe bound this engine validates against
    #[inline]
    pub fn universe(&self) -> u64 {
        self.config.universe
    }

    /// n-ary union
    ///
    /// Inputs that are empty of ones contribute nothing; the union of no
    /// inputs (or only such inputs) is the empty bitmap.
    pub fn or(&self, inputs: &[RleBitmap]) -> Result<RleBitmap> {
        self.validate_all(inputs)?;
        let live: Vec<&[u64]> = inputs
            .iter()
            .filter(|bitmap| !bitmap.is_empty_of_ones())
            .map(|bitmap| bitmap.runs())
            .collect();
        Ok(RleBitmap::from_runs(merge::<UnionPolicy>(&live)))
    }

    /// n-ary intersection
    ///
    /// Short-circuits to the empty bitmap when any input is empty of
    /// ones; otherwise the merge stops as soon as any input is exhausted,
    /// since everything past that point intersects to zeros.
    pub fn and(&self, inputs: &[RleBitmap]) -> Result<RleBitmap> {
        self.validate_all(inputs)?;
        if inputs.is_empty() || inputs.iter().any(|bitmap| bitmap.is_empty_of_ones()) {
            return Ok(RleBitmap::new());
        }
        let sequences: Vec<&[u64]> = inputs.iter().map(|bitmap| bitmap.runs()).collect();
        Ok(RleBitmap::from_runs(merge::<IntersectionPolicy>(
            &sequences,
        )))
    }

    /// n-ary symmetric difference
    ///
    /// Implemented as a direct parity merge: each emitted run spans the
    /// minimum remaining bits among live cursors, and its polarity is the
    /// parity of the number of cursors currently in the ones-phase. An
    /// exhausted input contributes zeros from then on, so it simply drops
    /// out. Equivalent to folding `AND(OR(a, b), OR(NOT(a), NOT(b)))`
    /// left-to-right, without the intermediate allocations.
    pub fn xor(&self, inputs: &[RleBitmap]) -> Result<RleBitmap> {
        self.validate_all(inputs)?;
        let live: Vec<&[u64]> = inputs
            .iter()
            .filter(|bitmap| !bitmap.is_empty_of_ones())
            .map(|bitmap| bitmap.runs())
            .collect();
        Ok(RleBitmap::from_runs(xor_merge(&live)))
    }

    /// Complement against the universe bound
    ///
    /// Every run keeps its length and flips polarity; the positions past
    /// the input's extent were zeros, so a trailing ones-run covers the
    /// rest of the universe. The input is canonicalized first so interior
    /// zero-length runs never leak into the output.
    pub fn not(&self, input: &RleBitmap) -> Result<RleBitmap> {
        input.validate(self.config.universe)?;
        let universe = self.config.universe;
        let canonical = input.canonicalize();

        let mut out = RunBuilder::new();
        let mut covered = 0u64;
        for (ones, len) in canonical.iter_runs() {
            out.push(!ones, len);
            covered += len;
        }
        out.push(true, universe - covered);
        Ok(RleBitmap::from_runs(out.finish()))
    }

    fn validate_all(&self, inputs: &[RleBitmap]) -> Result<()> {
        for input in inputs {
            input.validate(self.config.universe)?;
        }
        Ok(())
    }
}

/// Parity merge for the symmetric difference
///
/// Advances all cursors in lockstep by the minimum remaining run length
/// and emits that span with ones iff an odd number of cursors are in the
/// ones-phase.
fn xor_merge(inputs: &[&[u64]]) -> Vec<u64> {
    let mut cursors: Vec<Cursor<'_>> = inputs
        .iter()
        .filter_map(|runs| Cursor::new(runs))
        .collect();

    let mut out = RunBuilder::new();
    while let Some(span) = cursors.iter().map(Cursor::bits).min() {
        let ones = cursors.iter().filter(|c| c.ones_phase()).count() % 2 == 1;
        out.push(ones, span);
        cursors.retain_mut(|cursor| cursor.advance(span));
    }
    out.finish()
}

/// n-ary union over the default universe
///
/// See [`RleOps::or`].
pub fn or(inputs: &[RleBitmap]) -> Result<RleBitmap> {
    RleOps::new().or(inputs)
}

/// n-ary intersection over the default universe
///
/// See [`RleOps::and`].
pub fn and(inputs: &[RleBitmap]) -> Result<RleBitmap> {
    RleOps::new().and(inputs)
}

/// n-ary symmetric difference over the default universe
///
/// See [`RleOps::xor`].
pub fn xor(inputs: &[RleBitmap]) -> Result<RleBitmap> {
    RleOps::new().xor(inputs)
}

/// Complement against the default universe
///
/// See [`RleOps::not`].
pub fn not(input: &RleBitmap) -> Result<RleBitmap> {
    RleOps::new().not(input)
}

/// The default universe bound
#[inline]
pub fn universe() -> u64 {
    DEFAULT_UNIVERSE
}
