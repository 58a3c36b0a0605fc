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

use binsim::vector::{
    BVectOwned, BinaryVectorBorrowed, BinaryVectorOwned, DVectOwned, SVectOwned,
};
use binsim::{distance, similarity, tally};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn random_bits(rng: &mut ChaCha8Rng, dims: usize, density: f64) -> Vec<bool> {
    let mut bits = (0..dims).map(|_| rng.random_bool(density)).collect::<Vec<_>>();
    // keep projections constructible
    bits[rng.random_range(0..dims)] = true;
    bits
}

fn project(bits: &[bool], mask: &[bool]) -> Vec<bool> {
    bits.iter()
        .zip(mask)
        .filter(|(_, keep)| **keep)
        .map(|(bit, _)| *bit)
        .collect()
}

/// Every catalog entry, evaluated once. Degenerate results stay in the list
/// as NaN or infinity and are compared bit-for-bit.
fn sweep<V: BinaryVectorBorrowed>(x: V, y: V, mask: Option<V>) -> Vec<f64> {
    use binsim::similarity::association;
    [
        similarity::austin_colwell(x, y, mask),
        similarity::anderberg(x, y, mask),
        similarity::braun_blanquet(x, y, mask),
        similarity::baroni_urbani_buser1(x, y, mask),
        similarity::baroni_urbani_buser2(x, y, mask),
        similarity::cohen(x, y, mask),
        similarity::cole(x, y, mask),
        similarity::cole1(x, y, mask),
        similarity::cole2(x, y, mask),
        similarity::consonni_todeschini1(x, y, mask),
        similarity::consonni_todeschini2(x, y, mask),
        similarity::consonni_todeschini3(x, y, mask),
        similarity::consonni_todeschini4(x, y, mask),
        similarity::consonni_todeschini5(x, y, mask),
        similarity::dennis(x, y, mask),
        similarity::dice1(x, y, mask),
        similarity::dice2(x, y, mask),
        similarity::dispersion(x, y, mask),
        similarity::driver_kroeber(x, y, mask),
        similarity::eyraud(x, y, mask),
        similarity::fager_mcgowan(x, y, mask),
        similarity::faith(x, y, mask),
        similarity::forbes1(x, y, mask),
        similarity::forbes2(x, y, mask),
        similarity::fossum(x, y, mask),
        similarity::gilbert_wells(x, y, mask),
        similarity::gleason(x, y, mask),
        similarity::goodman_kruskal1(x, y, mask),
        similarity::goodman_kruskal2(x, y, mask),
        similarity::gower(x, y, mask),
        similarity::hamman(x, y, mask),
        similarity::harris_lahey(x, y, mask),
        similarity::hawkins_dotson(x, y, mask),
        similarity::intersection(x, y, mask),
        similarity::inner_product(x, y, mask),
        similarity::jaccard(x, y, mask),
        similarity::sw_jaccard(x, y, mask),
        similarity::kulczynski1(x, y, mask),
        similarity::kulczynski2(x, y, mask),
        similarity::johnson(x, y, mask),
        similarity::van_der_maarel(x, y, mask),
        similarity::maxwell_pilliner(x, y, mask),
        similarity::mcconnaughey(x, y, mask),
        similarity::michael(x, y, mask),
        similarity::mountford(x, y, mask),
        similarity::pearson1(x, y, mask),
        similarity::pearson2(x, y, mask),
        similarity::pearson_heron1(x, y, mask),
        similarity::pearson3(x, y, mask),
        similarity::pearson_heron2(x, y, mask),
        similarity::peirce1(x, y, mask),
        similarity::peirce2(x, y, mask),
        similarity::peirce3(x, y, mask),
        similarity::rogot_goldberg(x, y, mask),
        similarity::russell_rao(x, y, mask),
        similarity::rogers_tanimoto(x, y, mask),
        similarity::scott(x, y, mask),
        similarity::simpson(x, y, mask),
        similarity::smc(x, y, mask),
        similarity::sokal_sneath1(x, y, mask),
        similarity::sokal_sneath2(x, y, mask),
        similarity::gower_legendre(x, y, mask),
        similarity::sokal_sneath3(x, y, mask),
        similarity::sokal_sneath4(x, y, mask),
        similarity::sokal_sneath3a(x, y, mask),
        similarity::sokal_sneath4a(x, y, mask),
        similarity::sorgenfrei(x, y, mask),
        similarity::stiles(x, y, mask),
        similarity::tanimoto(x, y, mask),
        similarity::tarantula(x, y, mask),
        similarity::ample(x, y, mask),
        similarity::tarwid(x, y, mask),
        similarity::yule1(x, y, mask),
        similarity::yule2(x, y, mask),
        association::cohen(x, y, mask),
        association::maxwell_pilliner(x, y, mask),
        association::stiles(x, y, mask),
        distance::hamming(x, y, mask),
        distance::euclid(x, y, mask),
        distance::squared_euclid(x, y, mask),
        distance::mean_manhattan(x, y, mask),
        distance::vari(x, y, mask),
        distance::size_difference(x, y, mask),
        distance::shape_difference(x, y, mask),
        distance::pattern_difference(x, y, mask),
        distance::lance_williams(x, y, mask),
        distance::hellinger(x, y, mask),
        distance::chord(x, y, mask),
    ]
    .into_iter()
    .map(|r| r.unwrap())
    .collect()
}

fn assert_same(lhs: &[f64], rhs: &[f64]) {
    assert_eq!(lhs.len(), rhs.len());
    for i in 0..lhs.len() {
        assert_eq!(lhs[i].to_bits(), rhs[i].to_bits(), "entry {i}: {} vs {}", lhs[i], rhs[i]);
    }
}

#[test]
fn representation_equivalence() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for _ in 0..64 {
        let dims = rng.random_range(2..300);
        let bits_x = random_bits(&mut rng, dims, 0.5);
        let bits_y = random_bits(&mut rng, dims, 0.5);
        let dense = sweep(
            DVectOwned::new(bits_x.clone()).as_borrowed(),
            DVectOwned::new(bits_y.clone()).as_borrowed(),
            None,
        );
        let packed = sweep(
            BVectOwned::from_bits(&bits_x).as_borrowed(),
            BVectOwned::from_bits(&bits_y).as_borrowed(),
            None,
        );
        let sparse = sweep(
            SVectOwned::from_bits(&bits_x).as_borrowed(),
            SVectOwned::from_bits(&bits_y).as_borrowed(),
            None,
        );
        assert_same(&dense, &packed);
        assert_same(&dense, &sparse);
    }
}

#[test]
fn mask_projection_equivalence() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..64 {
        let dims = rng.random_range(2..300);
        let bits_x = random_bits(&mut rng, dims, 0.5);
        let bits_y = random_bits(&mut rng, dims, 0.5);
        let bits_m = random_bits(&mut rng, dims, 0.7);
        let masked = sweep(
            BVectOwned::from_bits(&bits_x).as_borrowed(),
            BVectOwned::from_bits(&bits_y).as_borrowed(),
            Some(BVectOwned::from_bits(&bits_m).as_borrowed()),
        );
        let projected = sweep(
            BVectOwned::from_bits(&project(&bits_x, &bits_m)).as_borrowed(),
            BVectOwned::from_bits(&project(&bits_y, &bits_m)).as_borrowed(),
            None,
        );
        assert_same(&masked, &projected);
    }
}

#[test]
fn tally_conservation() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    for _ in 0..256 {
        let dims = rng.random_range(1..1000);
        let bits_x = random_bits(&mut rng, dims, 0.3);
        let bits_y = random_bits(&mut rng, dims, 0.6);
        let bits_m = random_bits(&mut rng, dims, 0.5);
        let x = BVectOwned::from_bits(&bits_x);
        let y = BVectOwned::from_bits(&bits_y);
        let m = BVectOwned::from_bits(&bits_m);
        let t = tally(x.as_borrowed(), y.as_borrowed(), None).unwrap();
        assert_eq!(t.n(), dims as u64);
        let t = tally(x.as_borrowed(), y.as_borrowed(), Some(m.as_borrowed())).unwrap();
        assert_eq!(t.n(), bits_m.iter().filter(|b| **b).count() as u64);
    }
}

#[test]
fn documented_symmetric_entries() {
    let mut rng = ChaCha8Rng::seed_from_u64(23);
    for _ in 0..64 {
        let dims = rng.random_range(2..200);
        let bits_x = random_bits(&mut rng, dims, 0.5);
        let bits_y = random_bits(&mut rng, dims, 0.5);
        let x = DVectOwned::new(bits_x);
        let y = DVectOwned::new(bits_y);
        macro_rules! check {
            ($($f:path),* $(,)?) => {
                $(
                    let xy = $f(x.as_borrowed(), y.as_borrowed(), None).unwrap();
                    let yx = $f(y.as_borrowed(), x.as_borrowed(), None).unwrap();
                    assert_eq!(
                        xy.to_bits(),
                        yx.to_bits(),
                        concat!(stringify!($f), ": {} vs {}"),
                        xy,
                        yx
                    );
                )*
            };
        }
        check!(
            similarity::jaccard,
            similarity::gleason,
            similarity::sw_jaccard,
            similarity::smc,
            similarity::austin_colwell,
            similarity::rogers_tanimoto,
            similarity::gower_legendre,
            similarity::sokal_sneath1,
            similarity::sokal_sneath2,
            similarity::sokal_sneath4,
            similarity::driver_kroeber,
            similarity::kulczynski2,
            similarity::johnson,
            similarity::van_der_maarel,
            similarity::mountford,
            similarity::sorgenfrei,
            similarity::simpson,
            similarity::braun_blanquet,
            similarity::michael,
            similarity::hamman,
            similarity::russell_rao,
            similarity::pearson1,
            similarity::pearson_heron1,
            similarity::yule1,
            similarity::yule2,
            distance::hamming,
            distance::euclid,
            distance::mean_manhattan,
            distance::vari,
            distance::pattern_difference,
            distance::lance_williams,
            distance::hellinger,
            distance::chord,
        );
    }
}

#[test]
fn two_stage_composition_holds_everywhere() {
    let mut rng = ChaCha8Rng::seed_from_u64(31);
    for _ in 0..64 {
        let dims = rng.random_range(4..200);
        let bits_x = random_bits(&mut rng, dims, 0.5);
        let bits_y = random_bits(&mut rng, dims, 0.5);
        let bits_m = random_bits(&mut rng, dims, 0.8);
        let x = BVectOwned::from_bits(&bits_x);
        let y = BVectOwned::from_bits(&bits_y);
        let m = BVectOwned::from_bits(&bits_m);
        let (x, y, m) = (x.as_borrowed(), y.as_borrowed(), Some(m.as_borrowed()));
        let n = tally(x, y, m).unwrap().n() as f64;
        let x_2 = similarity::pearson1(x, y, m).unwrap();
        let expected = (x_2 / (n + x_2)).sqrt();
        assert_eq!(similarity::pearson2(x, y, m).unwrap().to_bits(), expected.to_bits());
    }
}
