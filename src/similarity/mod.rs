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

//! Similarity coefficients over binary feature vectors.
//!
//! One entry per historical name. Entries whose formulas coincide are thin
//! re-exports of a single canonical implementation; entries whose names
//! coincide but whose published formulas disagree are kept apart (see
//! [`association`]) and the disagreement is noted on the entry. Values are
//! not normalized into `[0, 1]`: several coefficients are negative or
//! unbounded by construction.

pub mod association;

use otu::{TallyError, tally};
use std::f64::consts::PI;
use vector::BinaryVectorBorrowed;

fn ln_factorial(k: u64) -> f64 {
    (2..=k).map(|i| (i as f64).ln()).sum()
}

/// Austin-Colwell; the angular transformation of the simple matching
/// coefficient.
///
/// Austin, B., & Colwell, R. R. (1977). Evaluation of some coefficients for
/// use in numerical taxonomy of microorganisms. Int. J. Syst. Evol.
/// Microbiol., 27(3), 204-210.
pub fn austin_colwell<V: BinaryVectorBorrowed>(
    x: V,
    y: V,
    mask: Option<V>,
) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    Ok(2.0 / PI * ((a + d) / (a + b + c + d)).sqrt().asin())
}

/// Anderberg.
///
/// Anderberg, M. R. (1973). Cluster Analysis for Applications. Academic
/// Press.
pub fn anderberg<V: BinaryVectorBorrowed>(x: V, y: V, mask: Option<V>) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    let n = a + b + c + d;
    let p1 = a.max(b) + c.max(d) + a.max(c) + b.max(d);
    let p2 = (a + c).max(b + d) + (a + b).max(c + d);
    Ok((p1 - p2) / (2.0 * n))
}

/// Braun-Blanquet.
///
/// Braun-Blanquet, J. (1932). Plant sociology. The study of plant
/// communities.
pub fn braun_blanquet<V: BinaryVectorBorrowed>(
    x: V,
    y: V,
    mask: Option<V>,
) -> Result<f64, TallyError> {
    let (a, b, c, _) = tally(x, y, mask)?.to_f64();
    Ok(a / (a + b).max(a + c))
}

/// Baroni-Urbani-Buser.
///
/// Baroni-Urbani, C., & Buser, M. W. (1976). Similarity of binary data.
/// Systematic Zoology, 25(3), 251-259.
pub fn baroni_urbani_buser1<V: BinaryVectorBorrowed>(
    x: V,
    y: V,
    mask: Option<V>,
) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    Ok(((a * d).sqrt() + a) / ((a * d).sqrt() + a + b + c))
}

/// Baroni-Urbani-Buser 2.
///
/// The correlation form of [`baroni_urbani_buser1`]. Surveys disagree on the
/// sign convention of the `b + c` term; the subtractive form is kept as
/// published in the 1976 paper.
pub fn baroni_urbani_buser2<V: BinaryVectorBorrowed>(
    x: V,
    y: V,
    mask: Option<V>,
) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    Ok(((a * d).sqrt() + a - b - c) / ((a * d).sqrt() + a + b + c))
}

/// Cohen's kappa.
///
/// Cohen, J. (1960). A coefficient of agreement for nominal scales. Educ.
/// Psychol. Meas., 20(1), 37-46. The 2x2 case is not stated explicitly
/// there; a root-denominator rendering circulates as
/// [`association::cohen`].
pub fn cohen<V: BinaryVectorBorrowed>(x: V, y: V, mask: Option<V>) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    Ok((2.0 * (a * d - b * c)) / ((a + b) * (b + d) + (a + c) * (c + d)))
}

/// Cole, piecewise over the sign of `ad - bc` and the smaller diagonal
/// entry.
///
/// Cole, L. C. (1957). The measurement of partial interspecific
/// association. Ecology, 38(2), 226-233. The paper never states a single
/// 2x2 formula; [`cole1`] and [`cole2`] keep the two fixed-denominator
/// renderings found in the literature.
pub fn cole<V: BinaryVectorBorrowed>(x: V, y: V, mask: Option<V>) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    if a * d >= b * c {
        Ok((a * d - b * c) / ((a + b) * (b + d)))
    } else if a <= d {
        Ok((a * d - b * c) / ((a + b) * (a + c)))
    } else {
        Ok((a * d - b * c) / ((b + d) * (c + d)))
    }
}

/// Cole I.
pub fn cole1<V: BinaryVectorBorrowed>(x: V, y: V, mask: Option<V>) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    Ok((a * d - b * c) / ((a + c) * (c + d)))
}

/// Cole II.
pub fn cole2<V: BinaryVectorBorrowed>(x: V, y: V, mask: Option<V>) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    Ok((a * d - b * c) / ((a + b) * (b + d)))
}

/// Consonni-Todeschini 1.
///
/// Consonni, V., & Todeschini, R. (2012). New similarity coefficients for
/// binary data. MATCH Commun. Math. Comput. Chem., 68(2), 581.
pub fn consonni_todeschini1<V: BinaryVectorBorrowed>(
    x: V,
    y: V,
    mask: Option<V>,
) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    Ok((1.0 + a + d).ln() / (1.0 + a + b + c + d).ln())
}

/// Consonni-Todeschini 2.
pub fn consonni_todeschini2<V: BinaryVectorBorrowed>(
    x: V,
    y: V,
    mask: Option<V>,
) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    let n = a + b + c + d;
    Ok(((1.0 + n).ln() - (1.0 + b + c).ln()) / (1.0 + n).ln())
}

/// Consonni-Todeschini 3.
pub fn consonni_todeschini3<V: BinaryVectorBorrowed>(
    x: V,
    y: V,
    mask: Option<V>,
) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    Ok((1.0 + a).ln() / (1.0 + a + b + c + d).ln())
}

/// Consonni-Todeschini 4.
pub fn consonni_todeschini4<V: BinaryVectorBorrowed>(
    x: V,
    y: V,
    mask: Option<V>,
) -> Result<f64, TallyError> {
    let (a, b, c, _) = tally(x, y, mask)?.to_f64();
    Ok((1.0 + a).ln() / (1.0 + a + b + c).ln())
}

/// Consonni-Todeschini 5.
pub fn consonni_todeschini5<V: BinaryVectorBorrowed>(
    x: V,
    y: V,
    mask: Option<V>,
) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    let n = a + b + c + d;
    Ok(((1.0 + a * d).ln() - (1.0 + b * c).ln()) / (1.0 + (n * n) / 4.0).ln())
}

/// Dennis.
///
/// Dennis, S. F. (1965). The construction of a thesaurus automatically from
/// a sample of text. Symposium on Statistical Association Methods for
/// Mechanized Documentation.
pub fn dennis<V: BinaryVectorBorrowed>(x: V, y: V, mask: Option<V>) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    Ok((a * d - b * c) / ((a + b + c + d) * (a + b) * (a + c)).sqrt())
}

/// Dice 1; the conditional probability of `y` given `x`.
///
/// Dice, L. R. (1945). Measures of the amount of ecologic association
/// between species. Ecology, 26(3), 297-302.
pub fn dice1<V: BinaryVectorBorrowed>(x: V, y: V, mask: Option<V>) -> Result<f64, TallyError> {
    let (a, b, _, _) = tally(x, y, mask)?.to_f64();
    Ok(a / (a + b))
}

/// Dice 2; the conditional probability of `x` given `y`.
pub fn dice2<V: BinaryVectorBorrowed>(x: V, y: V, mask: Option<V>) -> Result<f64, TallyError> {
    let (a, _, c, _) = tally(x, y, mask)?.to_f64();
    Ok(a / (a + c))
}

/// Dispersion.
pub fn dispersion<V: BinaryVectorBorrowed>(x: V, y: V, mask: Option<V>) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    let n = a + b + c + d;
    Ok((a * d - b * c) / (n * n))
}

/// Driver-Kroeber; the cosine of the angle between the two presence sets,
/// also known as Ochiai.
///
/// Driver, H. E., & Kroeber, A. L. (1932). Quantitative expression of
/// cultural relationships. Univ. Calif. Publ. Archaeol. Ethnol., 31(4).
pub fn driver_kroeber<V: BinaryVectorBorrowed>(
    x: V,
    y: V,
    mask: Option<V>,
) -> Result<f64, TallyError> {
    let (a, b, c, _) = tally(x, y, mask)?.to_f64();
    Ok(a / ((a + b) * (a + c)).sqrt())
}

/// Eyraud.
///
/// Eyraud, H. (1936). Les principes de la mesure des correlations. Ann.
/// Univ. Lyon, III. Ser., Sect. A, 1, 30-47.
pub fn eyraud<V: BinaryVectorBorrowed>(x: V, y: V, mask: Option<V>) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    let n = a + b + c + d;
    Ok((n * n * (n * a - (a + b) * (a + c))) / ((a + b) * (a + c) * (b + d) * (c + d)))
}

/// Fager-McGowan.
///
/// Fager, E. W. (1957). Determination and analysis of recurrent groups.
/// Ecology, 38(4), 586-595. The correction term is also seen as
/// `max(a+b, a+c) / 2` in older surveys; the square-root form is kept.
pub fn fager_mcgowan<V: BinaryVectorBorrowed>(
    x: V,
    y: V,
    mask: Option<V>,
) -> Result<f64, TallyError> {
    let (a, b, c, _) = tally(x, y, mask)?.to_f64();
    Ok(a / ((a + b) * (a + c)).sqrt() - 1.0 / (2.0 * (a + b).max(a + c).sqrt()))
}

/// Faith. Asymmetric: co-absences count half.
///
/// Faith, D. P. (1983). Asymmetric binary similarity measures. Oecologia,
/// 57(3), 287-290.
pub fn faith<V: BinaryVectorBorrowed>(x: V, y: V, mask: Option<V>) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    Ok((a + 0.5 * d) / (a + b + c + d))
}

/// Forbes.
///
/// Forbes, S. A. (1907). On the local distribution of certain Illinois
/// fishes: an essay in statistical ecology. Ill. State Lab. Nat. Hist., 7.
pub fn forbes1<V: BinaryVectorBorrowed>(x: V, y: V, mask: Option<V>) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    let n = a + b + c + d;
    Ok((n * a) / ((a + b) * (a + c)))
}

/// Forbes 2.
pub fn forbes2<V: BinaryVectorBorrowed>(x: V, y: V, mask: Option<V>) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    let n = a + b + c + d;
    Ok((n * a - (a + b) * (a + c)) / (n * (a + b).min(a + c) - (a + b) * (a + c)))
}

/// Fossum.
///
/// Fossum, E. G., & Kaskey, G. (1966). Optimization and standardization of
/// information retrieval language and systems. Sperry Rand Corp.
pub fn fossum<V: BinaryVectorBorrowed>(x: V, y: V, mask: Option<V>) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    let n = a + b + c + d;
    Ok((n * (a - 0.5).powi(2)) / ((a + b) * (a + c)))
}

/// Gilbert-Wells, the log-likelihood form with exact factorial terms.
///
/// Gilbert, N., & Wells, T. C. E. (1966). Analysis of quadrat data. J.
/// Ecol., 54, 675-685. The factorial terms are evaluated as log-factorial
/// sums, which keeps the arithmetic inside `f64` range for any vector
/// length. Counts are integral by construction, so the factorials are
/// always defined.
pub fn gilbert_wells<V: BinaryVectorBorrowed>(
    x: V,
    y: V,
    mask: Option<V>,
) -> Result<f64, TallyError> {
    let t = tally(x, y, mask)?;
    let (a, b, c, d) = t.to_f64();
    let n = a + b + c + d;
    let ln_q = ln_factorial(t.n()) + ln_factorial(t.a) + ln_factorial(t.b) + ln_factorial(t.c)
        + ln_factorial(t.d)
        - ln_factorial(t.a + t.b)
        - ln_factorial(t.a + t.c)
        - ln_factorial(t.b + t.d)
        - ln_factorial(t.c + t.d);
    Ok((n.powi(3) / (2.0 * PI * (a + b) * (a + c) * (b + d) * (c + d)) + 2.0 * ln_q).ln())
}

/// Gleason; identical to the Sørensen-Dice and Czekanowski coefficients.
///
/// Gleason, H. A. (1920). Some applications of the quadrat method. Bull.
/// Torrey Bot. Club, 47(1), 21-33.
pub fn gleason<V: BinaryVectorBorrowed>(x: V, y: V, mask: Option<V>) -> Result<f64, TallyError> {
    let (a, b, c, _) = tally(x, y, mask)?.to_f64();
    Ok((2.0 * a) / (2.0 * a + b + c))
}

/// Goodman-Kruskal lambda.
///
/// Goodman, L. A., & Kruskal, W. H. (1979). Measures of association for
/// cross classifications. Springer.
pub fn goodman_kruskal1<V: BinaryVectorBorrowed>(
    x: V,
    y: V,
    mask: Option<V>,
) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    let n = a + b + c + d;
    let p1 = a.max(b) + c.max(d) + a.max(c) + b.max(d);
    let p2 = (a + c).max(b + d) + (a + b).max(c + d);
    Ok((p1 - p2) / (2.0 * n - p2))
}

/// Goodman-Kruskal II.
pub fn goodman_kruskal2<V: BinaryVectorBorrowed>(
    x: V,
    y: V,
    mask: Option<V>,
) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    Ok((2.0 * a.min(d) - b - c) / (2.0 * a.min(d) + b + c))
}

/// Gower.
///
/// Gower, J. C., & Legendre, P. (1986). Metric and Euclidean properties of
/// dissimilarity coefficients. J. Classif., 3(1), 5-48.
pub fn gower<V: BinaryVectorBorrowed>(x: V, y: V, mask: Option<V>) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    Ok((a + d) / ((a + b) * (a + c) * (b + d) * (c + d)).sqrt())
}

/// Hamann.
///
/// Hamann, U. (1961). Merkmalsbestand und Verwandtschaftsbeziehungen der
/// Farinosae. Willdenowia, 2, 639-768.
pub fn hamman<V: BinaryVectorBorrowed>(x: V, y: V, mask: Option<V>) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    Ok((a + d - b - c) / (a + b + c + d))
}

/// Harris-Lahey.
pub fn harris_lahey<V: BinaryVectorBorrowed>(
    x: V,
    y: V,
    mask: Option<V>,
) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    Ok((a * (2.0 * d + b + c)) / (2.0 * (a + b + c)) + (d * (2.0 * a + b + c)) / (2.0 * (b + c + d)))
}

/// Hawkins-Dotson.
pub fn hawkins_dotson<V: BinaryVectorBorrowed>(
    x: V,
    y: V,
    mask: Option<V>,
) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    Ok(0.5 * (a / (a + b + c) + d / (d + b + c)))
}

/// Intersection; the bare co-presence count.
pub fn intersection<V: BinaryVectorBorrowed>(
    x: V,
    y: V,
    mask: Option<V>,
) -> Result<f64, TallyError> {
    let (a, _, _, _) = tally(x, y, mask)?.to_f64();
    Ok(a)
}

/// Inner product; co-presences plus co-absences.
pub fn inner_product<V: BinaryVectorBorrowed>(
    x: V,
    y: V,
    mask: Option<V>,
) -> Result<f64, TallyError> {
    let (a, _, _, d) = tally(x, y, mask)?.to_f64();
    Ok(a + d)
}

/// Jaccard (Jaccard-Tanimoto).
///
/// Jaccard, P. (1908). Nouvelles recherches sur la distribution florale.
/// Bull. Soc. Vaud. Sci. Nat., 44, 223-270.
pub fn jaccard<V: BinaryVectorBorrowed>(x: V, y: V, mask: Option<V>) -> Result<f64, TallyError> {
    let (a, b, c, _) = tally(x, y, mask)?.to_f64();
    Ok(a / (a + b + c))
}

/// 3W-Jaccard; mismatches weighted a third of matches.
pub fn sw_jaccard<V: BinaryVectorBorrowed>(x: V, y: V, mask: Option<V>) -> Result<f64, TallyError> {
    let (a, b, c, _) = tally(x, y, mask)?.to_f64();
    Ok((3.0 * a) / (3.0 * a + b + c))
}

/// Kulczynski 1.
///
/// Kulczynski, S. (1927). Die Pflanzenassoziationen der Pieninen. Bull.
/// Int. Acad. Pol. Sci. Lett., B(2), 57-203.
pub fn kulczynski1<V: BinaryVectorBorrowed>(x: V, y: V, mask: Option<V>) -> Result<f64, TallyError> {
    let (a, b, c, _) = tally(x, y, mask)?.to_f64();
    Ok(a / (b + c))
}

/// Kulczynski 2; the mean of the two conditional probabilities.
pub fn kulczynski2<V: BinaryVectorBorrowed>(x: V, y: V, mask: Option<V>) -> Result<f64, TallyError> {
    let (a, b, c, _) = tally(x, y, mask)?.to_f64();
    Ok(0.5 * (a / (a + b) + a / (a + c)))
}

/// Johnson; [`kulczynski2`] without the halving.
pub fn johnson<V: BinaryVectorBorrowed>(x: V, y: V, mask: Option<V>) -> Result<f64, TallyError> {
    let (a, b, c, _) = tally(x, y, mask)?.to_f64();
    Ok(a / (a + b) + a / (a + c))
}

/// van der Maarel.
pub fn van_der_maarel<V: BinaryVectorBorrowed>(
    x: V,
    y: V,
    mask: Option<V>,
) -> Result<f64, TallyError> {
    let (a, b, c, _) = tally(x, y, mask)?.to_f64();
    Ok((2.0 * a - b - c) / (2.0 * a + b + c))
}

/// Maxwell-Pilliner.
///
/// Maxwell, A. E., & Pilliner, A. E. G. (1968). Deriving coefficients of
/// reliability and agreement for ratings. Br. J. Math. Stat. Psychol.,
/// 21(1), 105-116. A product-denominator rendering circulates as
/// [`association::maxwell_pilliner`].
pub fn maxwell_pilliner<V: BinaryVectorBorrowed>(
    x: V,
    y: V,
    mask: Option<V>,
) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    Ok((2.0 * (a * d - b * c)) / ((a + b) * (c + d) + (a + c) * (b + d)))
}

/// McConnaughey.
///
/// McConnaughey, B. H. (1964). The determination and analysis of plankton
/// communities. Marine Research in Indonesia.
pub fn mcconnaughey<V: BinaryVectorBorrowed>(
    x: V,
    y: V,
    mask: Option<V>,
) -> Result<f64, TallyError> {
    let (a, b, c, _) = tally(x, y, mask)?.to_f64();
    Ok((a * a - b * c) / ((a + b) * (a + c)))
}

/// Michael.
///
/// Michael, E. L. (1920). Marine ecology and the coefficient of
/// association. J. Ecol., 8(1), 54-59.
pub fn michael<V: BinaryVectorBorrowed>(x: V, y: V, mask: Option<V>) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    Ok(4.0 * (a * d - b * c) / ((a + d).powi(2) + (b + c).powi(2)))
}

/// Mountford.
///
/// Mountford, M. D. (1962). An index of similarity and its application to
/// classificatory problems. Progress in Soil Zoology, 43-50.
pub fn mountford<V: BinaryVectorBorrowed>(x: V, y: V, mask: Option<V>) -> Result<f64, TallyError> {
    let (a, b, c, _) = tally(x, y, mask)?.to_f64();
    Ok((2.0 * a) / (a * b + a * c + 2.0 * b * c))
}

/// Pearson's chi-squared.
///
/// Pearson, K. (1900). On the criterion that a given system of deviations
/// from the probable... Philos. Mag., 50, 157-175.
pub fn pearson1<V: BinaryVectorBorrowed>(x: V, y: V, mask: Option<V>) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    let n = a + b + c + d;
    Ok((n * (a * d - b * c).powi(2)) / ((a + b) * (a + c) * (b + d) * (c + d)))
}

/// Pearson 2; the mean-square contingency derived from [`pearson1`]. Any
/// correction to the chi-squared entry propagates here.
pub fn pearson2<V: BinaryVectorBorrowed>(x: V, y: V, mask: Option<V>) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    let x_2 = pearson1(x, y, mask)?;
    Ok((x_2 / (a + b + c + d + x_2)).sqrt())
}

/// Pearson-Heron phi.
///
/// Pearson, K., & Heron, D. (1913). On theories of association.
/// Biometrika, 9(1/2), 159-315.
pub fn pearson_heron1<V: BinaryVectorBorrowed>(
    x: V,
    y: V,
    mask: Option<V>,
) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    Ok((a * d - b * c) / ((a + b) * (a + c) * (b + d) * (c + d)).sqrt())
}

/// Pearson 3; derived from [`pearson_heron1`] the way [`pearson2`] is
/// derived from [`pearson1`].
pub fn pearson3<V: BinaryVectorBorrowed>(x: V, y: V, mask: Option<V>) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    let p = pearson_heron1(x, y, mask)?;
    Ok((p / (a + b + c + d + p)).sqrt())
}

/// Pearson-Heron 2, the cosine form.
pub fn pearson_heron2<V: BinaryVectorBorrowed>(
    x: V,
    y: V,
    mask: Option<V>,
) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    Ok(((PI * (b * c).sqrt()) / ((a * d).sqrt() + (b * c).sqrt())).cos())
}

/// Peirce 1.
///
/// Peirce, C. S. (1884). The numerical measure of the success of
/// predictions. Science, 4(93), 453-454.
pub fn peirce1<V: BinaryVectorBorrowed>(x: V, y: V, mask: Option<V>) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    Ok((a * d - b * c) / ((a + b) * (c + d)))
}

/// Peirce 2.
pub fn peirce2<V: BinaryVectorBorrowed>(x: V, y: V, mask: Option<V>) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    Ok((a * d - b * c) / ((a + c) * (b + d)))
}

/// Peirce 3.
pub fn peirce3<V: BinaryVectorBorrowed>(x: V, y: V, mask: Option<V>) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    Ok((a * b + b * c) / (a * b + 2.0 * b * c + c * d))
}

/// Rogot-Goldberg.
///
/// Rogot, E., & Goldberg, I. D. (1966). A proposed index for measuring
/// agreement in test-retest studies. J. Chronic Dis., 19(9), 991-1006.
pub fn rogot_goldberg<V: BinaryVectorBorrowed>(
    x: V,
    y: V,
    mask: Option<V>,
) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    Ok(a / (2.0 * a + b + c) + d / (2.0 * d + b + c))
}

/// Russell-Rao.
///
/// Rao, C. R. (1948). The utilization of multiple measurements in problems
/// of biological classification. J. R. Stat. Soc. B, 10(2), 159-203.
pub fn russell_rao<V: BinaryVectorBorrowed>(x: V, y: V, mask: Option<V>) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    Ok(a / (a + b + c + d))
}

/// Rogers-Tanimoto; mismatches weighted double.
///
/// Rogers, D. J., & Tanimoto, T. T. (1960). A computer program for
/// classifying plants. Science, 132(3434), 1115-1118.
pub fn rogers_tanimoto<V: BinaryVectorBorrowed>(
    x: V,
    y: V,
    mask: Option<V>,
) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    Ok((a + d) / (a + 2.0 * (b + c) + d))
}

/// Scott.
///
/// Scott, W. A. (1955). Reliability of content analysis: the case of
/// nominal scale coding. Public Opin. Q., 19(3), 321-325.
pub fn scott<V: BinaryVectorBorrowed>(x: V, y: V, mask: Option<V>) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    Ok((4.0 * a * d - (b + c).powi(2)) / ((2.0 * a + b + c) * (2.0 * d + b + c)))
}

/// Simpson; overlap relative to the smaller presence set.
///
/// Simpson, G. G. (1943). Mammals and the nature of continents. Am. J.
/// Sci., 241(1), 1-31.
pub fn simpson<V: BinaryVectorBorrowed>(x: V, y: V, mask: Option<V>) -> Result<f64, TallyError> {
    let (a, b, c, _) = tally(x, y, mask)?.to_f64();
    Ok(a / (a + b).min(a + c))
}

/// Simple matching coefficient (Sokal-Michener).
///
/// Sokal, R. R., & Michener, C. D. (1958). A statistical method for
/// evaluating systematic relationships. Univ. Kans. Sci. Bull., 38,
/// 1409-1438.
pub fn smc<V: BinaryVectorBorrowed>(x: V, y: V, mask: Option<V>) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    Ok((a + d) / (a + b + c + d))
}

/// Sokal-Sneath 1.
///
/// Sneath, P. H. A., & Sokal, R. R. (1973). Numerical taxonomy. Freeman.
pub fn sokal_sneath1<V: BinaryVectorBorrowed>(
    x: V,
    y: V,
    mask: Option<V>,
) -> Result<f64, TallyError> {
    let (a, b, c, _) = tally(x, y, mask)?.to_f64();
    Ok(a / (a + 2.0 * b + 2.0 * c))
}

/// Sokal-Sneath 2; matches weighted double.
pub fn sokal_sneath2<V: BinaryVectorBorrowed>(
    x: V,
    y: V,
    mask: Option<V>,
) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    Ok((2.0 * (a + d)) / (2.0 * (a + d) + b + c))
}

/// Gower-Legendre; mismatches weighted half.
pub fn gower_legendre<V: BinaryVectorBorrowed>(
    x: V,
    y: V,
    mask: Option<V>,
) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    Ok((a + d) / (a + 0.5 * (b + c) + d))
}

/// Sokal-Sneath 3; the mean of the four conditional probabilities.
pub fn sokal_sneath3<V: BinaryVectorBorrowed>(
    x: V,
    y: V,
    mask: Option<V>,
) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    Ok(0.25 * (a / (a + b) + a / (a + c) + d / (b + d) + d / (c + d)))
}

/// Sokal-Sneath 4; the geometric counterpart of [`sokal_sneath3`].
pub fn sokal_sneath4<V: BinaryVectorBorrowed>(
    x: V,
    y: V,
    mask: Option<V>,
) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    Ok(a / ((a + b) * (a + c)).sqrt() * d / ((b + d) * (c + d)).sqrt())
}

/// Sokal-Sneath 3a; the ratio of matches to mismatches.
pub fn sokal_sneath3a<V: BinaryVectorBorrowed>(
    x: V,
    y: V,
    mask: Option<V>,
) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    Ok((a + d) / (b + c))
}

/// Sokal-Sneath 4a (Ochiai II).
pub fn sokal_sneath4a<V: BinaryVectorBorrowed>(
    x: V,
    y: V,
    mask: Option<V>,
) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    Ok((a * d) / ((a + b) * (a + c) * (b + d) * (c + d)).sqrt())
}

/// Sorgenfrei.
///
/// Sorgenfrei, T. (1958). Molluscan assemblages from the marine middle
/// Miocene of South Jutland and their environments. Danmarks Geologiske
/// Undersøgelse, II(79).
pub fn sorgenfrei<V: BinaryVectorBorrowed>(x: V, y: V, mask: Option<V>) -> Result<f64, TallyError> {
    let (a, b, c, _) = tally(x, y, mask)?.to_f64();
    Ok((a * a) / ((a + b) * (a + c)))
}

/// Stiles.
///
/// Stiles, H. E. (1961). The association factor in information retrieval.
/// J. ACM, 8(2), 271-279. Two inconsistent statements of this coefficient
/// circulate: this entry keeps the `|an - bc|` numerator with the
/// marginal-free denominator; [`association::stiles`] keeps the
/// `|ad - bc|` numerator over the four marginals.
pub fn stiles<V: BinaryVectorBorrowed>(x: V, y: V, mask: Option<V>) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    let n = a + b + c + d;
    let t = (a * n - b * c).abs() - 0.5 * n;
    Ok(((n * t * t) / (b * c * (n - b) * (n - c))).log10())
}

/// Tanimoto, in the union form of the Jaccard index.
///
/// Tanimoto, T. T. (1958). An elementary mathematical theory of
/// classification and prediction. IBM Report.
pub fn tanimoto<V: BinaryVectorBorrowed>(x: V, y: V, mask: Option<V>) -> Result<f64, TallyError> {
    let (a, b, c, _) = tally(x, y, mask)?.to_f64();
    Ok(a / ((a + b) + (a + c) - a))
}

/// Tarantula. Unbounded.
pub fn tarantula<V: BinaryVectorBorrowed>(x: V, y: V, mask: Option<V>) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    Ok((a * (c + d)) / (c * (a + b)))
}

/// Ample; the magnitude of [`tarantula`].
pub fn ample<V: BinaryVectorBorrowed>(x: V, y: V, mask: Option<V>) -> Result<f64, TallyError> {
    Ok(tarantula(x, y, mask)?.abs())
}

/// Tarwid.
///
/// Tarwid, K. (1960). Szacowanie zbieznosci nisz ekologicznych gatunkow
/// droga oceny prawdopodobienstwa spotykania sie ich w polowach. Ecol.
/// Pol. B, 6, 115-130.
pub fn tarwid<V: BinaryVectorBorrowed>(x: V, y: V, mask: Option<V>) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    let n = a + b + c + d;
    Ok((n * a - (a + b) * (a + c)) / (n * a + (a + b) * (a + c)))
}

/// Yule's Q.
///
/// Yule, G. U. (1900). On the association of attributes in statistics.
/// Philos. Trans. R. Soc. A, 194, 257-319. Ranges over `[-1, 1]`.
pub fn yule1<V: BinaryVectorBorrowed>(x: V, y: V, mask: Option<V>) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    Ok((a * d - b * c) / (a * d + b * c))
}

/// Yule's W (coefficient of colligation).
pub fn yule2<V: BinaryVectorBorrowed>(x: V, y: V, mask: Option<V>) -> Result<f64, TallyError> {
    let (a, b, c, d) = tally(x, y, mask)?.to_f64();
    Ok(((a * d).sqrt() - (b * c).sqrt()) / ((a * d).sqrt() + (b * c).sqrt()))
}

// Historical names that denote formulas already in the catalog.

/// Sørensen-Dice; see [`gleason`].
pub use gleason as dice;
/// Czekanowski; see [`gleason`].
pub use gleason as czekanowski;
/// Nei-Li; see [`gleason`].
pub use gleason as nei_li;
/// Sørensen-Dice under its hyphenated spelling; see [`gleason`].
pub use gleason as sorenson_dice;
/// 3W-Jaccard under its older name; see [`sw_jaccard`].
pub use sw_jaccard as jaccard_3w;
/// Cosine; see [`driver_kroeber`].
pub use driver_kroeber as cosine;
/// Ochiai; see [`driver_kroeber`].
pub use driver_kroeber as ochiai1;
/// Ochiai, alternative spelling; see [`driver_kroeber`].
pub use driver_kroeber as ochiai_1;
/// Otsuka; see [`driver_kroeber`].
pub use driver_kroeber as otsuka;
/// Forbes; see [`forbes1`].
pub use forbes1 as forbesi;
/// Braun-Blanquet under its older transliteration; see [`braun_blanquet`].
pub use braun_blanquet as braun_banquet;
/// Goodman-Kruskal; see [`goodman_kruskal1`].
pub use goodman_kruskal1 as goodman_kruskal;
/// Hamann under its doubled-consonant spelling; see [`hamman`].
pub use hamman as hamann;
/// Dispersion under its older spelling; see [`dispersion`].
pub use dispersion as disperson;
/// Yule's Q; see [`yule1`].
pub use yule1 as yuleq;
/// Yule's W; see [`yule2`].
pub use yule2 as yulew;
/// Phi; see [`pearson_heron1`].
pub use pearson_heron1 as phi;
/// Sokal-Sneath 5; see [`sokal_sneath4a`].
pub use sokal_sneath4a as sokal_sneath5;
/// Ochiai II; see [`sokal_sneath4a`].
pub use sokal_sneath4a as ochiai2;
/// Sokal-Michener; see [`smc`].
pub use smc as sokal_michener;
/// Inner product under its unspaced name; see [`inner_product`].
pub use inner_product as innerproduct;
/// Peirce; see [`peirce3`].
pub use peirce3 as peirce;
