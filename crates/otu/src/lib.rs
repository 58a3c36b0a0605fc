// This software is licensed under a dual license model:
//
// GNU Affero General Public License v3 (AGPLv3): You may use, modify, and
// distribute this software under the terms of the AGPLv3.
//
// Elastic License v2 (ELv2): You may also use, modify, and distribute this
// software under the Elastic License v2, which has specific restrictions.
//
// We welcome any commercial collaboration or support. For inquiries
// regarding the licenses, please contact us at:
// vectorchord-inquiry@tensorchord.ai
//
// Copyright (c) 2025 TensorChord Inc.

//! The counting reduction over operational taxonomic units.
//!
//! Comparing two binary feature vectors reduces them to the 2x2 contingency
//! tally `(a, b, c, d)`: co-presences, presences only on the left, presences
//! only on the right, and co-absences. The tally is the sole input of every
//! coefficient formula.

use thiserror::Error;
use vector::BinaryVectorBorrowed;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TallyError {
    #[error("length mismatch: lhs has {lhs} dims, rhs has {rhs}")]
    LengthMismatch { lhs: u32, rhs: u32 },

    #[error("mask length mismatch: vectors have {dims} dims, mask has {mask}")]
    MaskLengthMismatch { dims: u32, mask: u32 },
}

/// The 2x2 contingency tally of two binary feature vectors.
///
/// Invariant: `a + b + c + d` equals the number of compared positions, that
/// is the common dimension count, or the number of set positions of the mask
/// when one was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    /// Positions set in both vectors.
    pub a: u64,
    /// Positions set in the left vector only.
    pub b: u64,
    /// Positions set in the right vector only.
    pub c: u64,
    /// Positions set in neither vector.
    pub d: u64,
}

impl Tally {
    #[inline(always)]
    pub fn n(&self) -> u64 {
        self.a + self.b + self.c + self.d
    }

    /// The four counts widened for formula evaluation. Counts are exact in
    /// `f64` up to 2^53, far beyond the dimension bound.
    #[inline(always)]
    pub fn to_f64(self) -> (f64, f64, f64, f64) {
        (self.a as f64, self.b as f64, self.c as f64, self.d as f64)
    }
}

/// Reduces two binary feature vectors to their contingency tally.
///
/// When `mask` is given, only positions set in the mask are compared; the
/// result is the same as projecting all three vectors onto the masked-in
/// positions and reducing without a mask. `None` and an all-ones mask are
/// numerically equivalent.
pub fn tally<V: BinaryVectorBorrowed>(x: V, y: V, mask: Option<V>) -> Result<Tally, TallyError> {
    if x.dims() != y.dims() {
        return Err(TallyError::LengthMismatch {
            lhs: x.dims(),
            rhs: y.dims(),
        });
    }
    let (a, b, c, universe) = match mask {
        None => (
            x.count_and(y),
            x.count_and_not(y),
            y.count_and_not(x),
            x.dims(),
        ),
        Some(mask) => {
            if mask.dims() != x.dims() {
                return Err(TallyError::MaskLengthMismatch {
                    dims: x.dims(),
                    mask: mask.dims(),
                });
            }
            (
                x.count_and_masked(y, mask),
                x.count_and_not_masked(y, mask),
                y.count_and_not_masked(x, mask),
                mask.count_ones(),
            )
        }
    };
    let d = universe - a - b - c;
    Ok(Tally {
        a: a as u64,
        b: b as u64,
        c: c as u64,
        d: d as u64,
    })
}
