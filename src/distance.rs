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

//! Distance coefficients over binary feature vectors.
//!
//! On binary data several of the classical vector distances collapse into
//! the mismatch count `b + c`; the collapsed names are kept as aliases of
//! [`hamming`]. Expressions are evaluated exactly as published, including
//! redundant steps such as the square-root-of-square in [`squared_euclid`].

use otu::{TallyError, tally};
use vector::BinaryVectorBorrowed;

/// Hamming distance; the number of mismatched positions.
///
/// Hamming, R. W. (1950). Error detecting and error correcting codes. Bell
/// Syst. Tech. J., 29(2), 147-160.
pub fn hamming<V: BinaryVectorBorrowed>(x: V, y: V, mask: Option<V>) -> Result<f64, TallyError> {
    let (_, b, c, _) = tally(x, y, mask)?.to_f64();
    Ok(b + c)
}

/// Euclidean distance.
pub fn euclid<V: BinaryVectorBorrowed>(x: V, y: V, mask: Option<V>) -> Result<f64, TallyError> {
    let (_, b, c, _) = tally(x, y, mask)?.to_f64();
    Ok((b + c).sqrt())
}

/// Squared Euclidean distance, as published: the square root of the squared
/// mismatch count.
pub fn squared_euclid<V: BinaryVectorBorrowed>(
    x: V,
    y: V,
    mask: Option<V>,
) -> Result<f64, TallyError> {
    let (_, b, c, _) = tally(x, y, mask)?.to_f64();
    Ok((b + c).powi(2).sqrt())
}

/// Mean Manhattan distance; the mismatch rate.
pub fn mean_manhattan<V: BinaryVectorBorrowed>(
    x: V,
    y: V,
    mask: Option<V>,
) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    Ok((b + c) / (a + b + c + d))
}

/// Vari distance.
pub fn vari<V: BinaryVectorBorrowed>(x: V, y: V, mask: Option<V>) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    Ok((b + c) / (4.0 * (a + b + c + d)))
}

/// Size difference.
pub fn size_difference<V: BinaryVectorBorrowed>(
    x: V,
    y: V,
    mask: Option<V>,
) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    Ok((b + c).powi(2) / (a + b + c + d).powi(2))
}

/// Shape difference.
pub fn shape_difference<V: BinaryVectorBorrowed>(
    x: V,
    y: V,
    mask: Option<V>,
) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    let n = a + b + c + d;
    Ok((n * (b + c) - (b + c).powi(2)) / n.powi(2))
}

/// Pattern difference.
pub fn pattern_difference<V: BinaryVectorBorrowed>(
    x: V,
    y: V,
    mask: Option<V>,
) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    Ok((4.0 * b * c) / (a + b + c + d).powi(2))
}

/// Lance-Williams (Bray-Curtis) distance.
///
/// Lance, G. N., & Williams, W. T. (1967). Mixed-data classificatory
/// programs I. Agglomerative systems. Aust. Comput. J., 1(1), 15-20.
pub fn lance_williams<V: BinaryVectorBorrowed>(
    x: V,
    y: V,
    mask: Option<V>,
) -> Result<f64, TallyError> {
    let (a, b, c, _) = tally(x, y, mask)?.to_f64();
    Ok((b + c) / (2.0 * a + b + c))
}

/// Hellinger distance.
pub fn hellinger<V: BinaryVectorBorrowed>(x: V, y: V, mask: Option<V>) -> Result<f64, TallyError> {
    let (a, b, c, _) = tally(x, y, mask)?.to_f64();
    Ok(2.0 * (1.0 - a / ((a + b) * (a + c)).sqrt()).sqrt())
}

/// Chord distance.
pub fn chord<V: BinaryVectorBorrowed>(x: V, y: V, mask: Option<V>) -> Result<f64, TallyError> {
    let (a, b, c, _) = tally(x, y, mask)?.to_f64();
    Ok((2.0 * (1.0 - a / ((a + b) * (a + c)).sqrt())).sqrt())
}

// Classical vector distances that reduce to the mismatch count on binary
// data.

/// Manhattan distance; see [`hamming`].
pub use hamming as manhattan;
/// City-block distance; see [`hamming`].
pub use hamming as cityblock;
/// Minkowski distance; see [`hamming`].
pub use hamming as minkowski;
/// Canberra distance; see [`hamming`].
pub use hamming as canberra;
/// Bray-Curtis distance; see [`lance_williams`].
pub use lance_williams as bray_curtis;
