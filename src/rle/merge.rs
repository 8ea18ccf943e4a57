//! Shared n-ary merge over run-length sequences
//!
//! Union and intersection are the same single-pass loop parameterized by
//! a selection comparator and a termination rule: pick the cursor that
//! governs the next span, emit one run of that cursor's phase polarity,
//! advance every other cursor by the emitted length, then step the
//! governing cursor to its next run.

use crate::rle::bitmap::RunBuilder;
use crate::rle::cursor::Cursor;

/// Selection and termination rules for one Boolean merge
pub(crate) trait MergePolicy {
    /// Stop the whole merge as soon as any input runs out
    const STOP_ON_FIRST_EXHAUSTED: bool;

    /// Whether `a` should govern the next step in preference to `b`
    ///
    /// Must be a strict preference: returning `false` on ties keeps the
    /// earliest input, which makes selection deterministic.
    fn prefer(a: &Cursor<'_>, b: &Cursor<'_>) -> bool;
}

/// Union: emit ones eagerly, spend as little as possible on zeros
///
/// A ones-phase cursor always beats a zeros-phase cursor. Among
/// ones-phase cursors the longest run wins, so the whole span is emitted
/// at once; among zeros-phase cursors the shortest wins, since another
/// input may flip to ones right after it.
pub(crate) struct UnionPolicy;

impl MergePolicy for UnionPolicy {
    const STOP_ON_FIRST_EXHAUSTED: bool = false;

    fn prefer(a: &Cursor<'_>, b: &Cursor<'_>) -> bool {
        match (a.ones_phase(), b.ones_phase()) {
            (true, true) => a.bits() > b.bits(),
            (true, false) => true,
            (false, true) => false,
            (false, false) => a.bits() < b.bits(),
        }
    }
}

/// Intersection: the dual of union
///
/// A zeros-phase cursor always beats a ones-phase cursor, the longest
/// zeros-run wins, and among ones-phase cursors the shortest wins. When
/// every live cursor is in the ones-phase the shortest ones-run is ones
/// in all inputs at once.
pub(crate) struct IntersectionPolicy;

impl MergePolicy for IntersectionPolicy {
    const STOP_ON_FIRST_EXHAUSTED: bool = true;

    fn prefer(a: &Cursor<'_>, b: &Cursor<'_>) -> bool {
        match (a.ones_phase(), b.ones_phase()) {
            (false, false) => a.bits() > b.bits(),
            (false, true) => true,
            (true, false) => false,
            (true, true) => a.bits() < b.bits(),
        }
    }
}

/// Merge any number of run sequences into one canonical sequence
///
/// Inputs that encode no bits at all contribute nothing. The output never
/// contains interior zero-length runs, adjacent same-polarity runs, or a
/// trailing zeros-run.
pub(crate) fn merge<P: MergePolicy>(inputs: &[&[u64]]) -> Vec<u64> {
    let mut cursors: Vec<Cursor<'_>> = Vec::with_capacity(inputs.len());
    for runs in inputs {
        match Cursor::new(runs) {
            Some(cursor) => cursors.push(cursor),
            None if P::STOP_ON_FIRST_EXHAUSTED => return Vec::new(),
            None => {}
        }
    }

    let mut out = RunBuilder::new();
    while let Some(governing) = select::<P>(&cursors) {
        let len = cursors[governing].bits();
        out.push(cursors[governing].ones_phase(), len);

        let mut any_exhausted = false;
        let mut index = 0;
        cursors.retain_mut(|cursor| {
            let live = if index == governing {
                cursor.skip_run()
            } else {
                cursor.advance(len)
            };
            index += 1;
            any_exhausted |= !live;
            live
        });
        if P::STOP_ON_FIRST_EXHAUSTED && any_exhausted {
            break;
        }
    }
    out.finish()
}

/// Linear scan for the governing cursor; ties keep the earliest input
fn select<P: MergePolicy>(cursors: &[Cursor<'_>]) -> Option<usize> {
    if cursors.is_empty() {
        return None;
    }
    let mut best = 0;
    for i in 1..cursors.len() {
        if P::prefer(&cursors[i], &cursors[best]) {
            best = i;
        }
    }
    Some(best)
}
