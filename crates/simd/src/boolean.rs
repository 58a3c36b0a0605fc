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

#[inline(always)]
pub fn reduce_sum_of_x(this: &[bool]) -> u32 {
    let n = this.len();
    let mut sum = 0;
    for i in 0..n {
        sum += this[i] as u32;
    }
    sum
}

#[inline(always)]
pub fn reduce_sum_of_and(lhs: &[bool], rhs: &[bool]) -> u32 {
    assert_eq!(lhs.len(), rhs.len());
    let n = lhs.len();
    let mut and = 0;
    for i in 0..n {
        and += (lhs[i] & rhs[i]) as u32;
    }
    and
}

#[inline(always)]
pub fn reduce_sum_of_and_not(lhs: &[bool], rhs: &[bool]) -> u32 {
    assert_eq!(lhs.len(), rhs.len());
    let n = lhs.len();
    let mut and_not = 0;
    for i in 0..n {
        and_not += (lhs[i] & !rhs[i]) as u32;
    }
    and_not
}

#[inline(always)]
pub fn reduce_sum_of_masked_and(lhs: &[bool], rhs: &[bool], mask: &[bool]) -> u32 {
    assert_eq!(lhs.len(), rhs.len());
    assert_eq!(lhs.len(), mask.len());
    let n = lhs.len();
    let mut and = 0;
    for i in 0..n {
        and += (lhs[i] & rhs[i] & mask[i]) as u32;
    }
    and
}

#[inline(always)]
pub fn reduce_sum_of_masked_and_not(lhs: &[bool], rhs: &[bool], mask: &[bool]) -> u32 {
    assert_eq!(lhs.len(), rhs.len());
    assert_eq!(lhs.len(), mask.len());
    let n = lhs.len();
    let mut and_not = 0;
    for i in 0..n {
        and_not += (lhs[i] & !rhs[i] & mask[i]) as u32;
    }
    and_not
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduce_sum_of_x_test() {
        for _ in 0..256 {
            let this = (0..1009).map(|_| rand::random::<bool>()).collect::<Vec<_>>();
            let specialized = reduce_sum_of_x(&this);
            let fallback = this.iter().filter(|x| **x).count() as u32;
            assert_eq!(specialized, fallback);
        }
    }

    #[test]
    fn reduce_sum_of_and_test() {
        for _ in 0..256 {
            let lhs = (0..1009).map(|_| rand::random::<bool>()).collect::<Vec<_>>();
            let rhs = (0..1009).map(|_| rand::random::<bool>()).collect::<Vec<_>>();
            let specialized = reduce_sum_of_and(&lhs, &rhs);
            let fallback = (0..1009).filter(|&i| lhs[i] && rhs[i]).count() as u32;
            assert_eq!(specialized, fallback);
        }
    }

    #[test]
    fn reduce_sum_of_and_not_test() {
        for _ in 0..256 {
            let lhs = (0..1009).map(|_| rand::random::<bool>()).collect::<Vec<_>>();
            let rhs = (0..1009).map(|_| rand::random::<bool>()).collect::<Vec<_>>();
            let specialized = reduce_sum_of_and_not(&lhs, &rhs);
            let fallback = (0..1009).filter(|&i| lhs[i] && !rhs[i]).count() as u32;
            assert_eq!(specialized, fallback);
        }
    }

    #[test]
    fn reduce_sum_of_masked_and_test() {
        for _ in 0..256 {
            let lhs = (0..1009).map(|_| rand::random::<bool>()).collect::<Vec<_>>();
            let rhs = (0..1009).map(|_| rand::random::<bool>()).collect::<Vec<_>>();
            let mask = (0..1009).map(|_| rand::random::<bool>()).collect::<Vec<_>>();
            let specialized = reduce_sum_of_masked_and(&lhs, &rhs, &mask);
            let fallback = (0..1009).filter(|&i| lhs[i] && rhs[i] && mask[i]).count() as u32;
            assert_eq!(specialized, fallback);
        }
    }

    #[test]
    fn reduce_sum_of_masked_and_not_test() {
        for _ in 0..256 {
            let lhs = (0..1009).map(|_| rand::random::<bool>()).collect::<Vec<_>>();
            let rhs = (0..1009).map(|_| rand::random::<bool>()).collect::<Vec<_>>();
            let mask = (0..1009).map(|_| rand::random::<bool>()).collect::<Vec<_>>();
            let specialized = reduce_sum_of_masked_and_not(&lhs, &rhs, &mask);
            let fallback = (0..1009).filter(|&i| lhs[i] && !rhs[i] && mask[i]).count() as u32;
            assert_eq!(specialized, fallback);
        }
    }
}
