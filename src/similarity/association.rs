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

//! The cross-product association family: coefficients built on `ad - bc`.
//!
//! Most members coincide with the main catalog and are re-exported from it.
//! Three carry formulas that disagree with the main catalog's entry of the
//! same name; the historical record itself is inconsistent, so both forms
//! are kept rather than unified.

use otu::{TallyError, tally};
use vector::BinaryVectorBorrowed;

pub use super::{
    cole, cole1, cole2, consonni_todeschini5, dennis, disperson, michael, pearson1, pearson2, phi,
    peirce1, peirce2, yuleq, yulew,
};

/// Cohen's kappa, the root-denominator form. The main catalog's
/// [`cohen`](super::cohen) divides by the sum of the two marginal products
/// instead.
pub fn cohen<V: BinaryVectorBorrowed>(x: V, y: V, mask: Option<V>) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    Ok((2.0 * (a * d - b * c)) / ((a + b) * (b + d) * (a + c) * (c + d)).sqrt())
}

/// Maxwell-Pilliner, the product-denominator form. The main catalog's
/// [`maxwell_pilliner`](super::maxwell_pilliner) sums the two marginal
/// products instead.
pub fn maxwell_pilliner<V: BinaryVectorBorrowed>(
    x: V,
    y: V,
    mask: Option<V>,
) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    Ok((2.0 * (a * d - b * c)) / ((a + b) * (c + d) * (a + c) * (b + d)))
}

/// Stiles, the four-marginal form. The main catalog's
/// [`stiles`](super::stiles) keeps the `|an - bc|` numerator with a
/// marginal-free denominator.
pub fn stiles<V: BinaryVectorBorrowed>(x: V, y: V, mask: Option<V>) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    let n = a + b + c + d;
    Ok(((n * ((a * d - b * c).abs() - n / 2.0).powi(2))
        / ((a + b) * (a + c) * (b + d) * (c + d)))
    .log10())
}
