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

//! Similarity and distance coefficients for binary feature vectors.
//!
//! Every coefficient reduces its two operands (and an optional mask limiting
//! which positions are compared) to the contingency tally `(a, b, c, d)` and
//! evaluates one published closed-form expression over it:
//!
//! ```
//! use binsim::similarity;
//! use binsim::vector::{BVectOwned, BinaryVectorOwned};
//!
//! let x = BVectOwned::from_bits(&[true, true, false, false]);
//! let y = BVectOwned::from_bits(&[true, false, false, true]);
//! let s = similarity::jaccard(x.as_borrowed(), y.as_borrowed(), None).unwrap();
//! assert_eq!(s, 1.0 / 3.0);
//! ```
//!
//! Coefficients are pure functions: no state, no caching, no input mutation.
//! Representation support is a compile-time contract: any type implementing
//! the counting capabilities of
//! [`vector::BinaryVectorBorrowed`] participates, and there is no runtime
//! probing of representations. The only runtime error is a length mismatch
//! between the operands or the mask. Degenerate tallies (for instance `a + b + c = 0` for Jaccard) are
//! not intercepted: the formula is evaluated as written and division by zero
//! or out-of-domain `ln`/`sqrt` operands surface as IEEE NaN or infinity,
//! exactly as `f64` produces them.
//!
//! Many coefficients appear in the literature under several names, and some
//! names cover several historically inconsistent formulas. Each named form
//! is kept as its own catalog entry; identical formulas are re-exported
//! aliases of one canonical implementation.

pub mod distance;
pub mod similarity;

pub use otu::{Tally, TallyError, tally};

pub use vector;
