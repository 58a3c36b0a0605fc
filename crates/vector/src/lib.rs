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

//! Binary feature vectors.
//!
//! A binary feature vector is an ordered sequence of presence flags over a
//! common feature indexing. Three representation families are provided:
//! bit-packed words ([`bvect`]), dense booleans ([`dvect`]) and sorted sparse
//! indices ([`svect`]). All of them answer the same small set of counting
//! queries through [`BinaryVectorBorrowed`], so code written against the
//! trait never branches on the concrete representation.

pub mod bvect;
pub mod dvect;
pub mod svect;

pub use bvect::{BVectBorrowed, BVectOwned};
pub use dvect::{DVectBorrowed, DVectOwned};
pub use svect::{SVectBorrowed, SVectOwned};

pub trait BinaryVectorOwned: Clone + serde::Serialize + for<'a> serde::Deserialize<'a> + 'static {
    type Borrowed<'a>: BinaryVectorBorrowed<Owned = Self>;

    fn as_borrowed(&self) -> Self::Borrowed<'_>;

    fn zero(dims: u32) -> Self;
}

/// Counting capabilities of a borrowed binary vector.
///
/// The pairwise operations require both operands (and the mask, where one is
/// taken) to share the same number of dimensions; implementations are free to
/// panic otherwise. Checked entry points live one level up, in the tally
/// reduction.
pub trait BinaryVectorBorrowed: Copy {
    type Owned: BinaryVectorOwned;

    fn own(&self) -> Self::Owned;

    fn dims(&self) -> u32;

    /// Number of set positions.
    fn count_ones(&self) -> u32;

    /// Number of positions set in both `self` and `rhs`.
    fn count_and(self, rhs: Self) -> u32;

    /// Number of positions set in `self` but not in `rhs`.
    fn count_and_not(self, rhs: Self) -> u32;

    /// Like [`count_and`](Self::count_and), restricted to positions set in `mask`.
    fn count_and_masked(self, rhs: Self, mask: Self) -> u32;

    /// Like [`count_and_not`](Self::count_and_not), restricted to positions set in `mask`.
    fn count_and_not_masked(self, rhs: Self, mask: Self) -> u32;
}
