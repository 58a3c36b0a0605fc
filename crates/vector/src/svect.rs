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

use crate::{BinaryVectorBorrowed, BinaryVectorOwned};
use std::cmp::Ordering;

// Indices are strictly increasing and all less than dims.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SVectOwned {
    dims: u32,
    indices: Vec<u32>,
}

impl SVectOwned {
    #[inline(always)]
    pub fn new(dims: u32, indices: Vec<u32>) -> Self {
        Self::new_checked(dims, indices).expect("invalid data")
    }

    #[inline(always)]
    pub fn new_checked(dims: u32, indices: Vec<u32>) -> Option<Self> {
        if !(1..=65535).contains(&dims) {
            return None;
        }
        for i in 1..indices.len() {
            if indices[i - 1] >= indices[i] {
                return None;
            }
        }
        if let Some(&last) = indices.last()
            && last >= dims
        {
            return None;
        }
        Some(Self { dims, indices })
    }

    pub fn from_bits(bits: &[bool]) -> Self {
        let indices = bits
            .iter()
            .enumerate()
            .filter(|(_, bit)| **bit)
            .map(|(i, _)| i as u32)
            .collect();
        Self::new(bits.len() as u32, indices)
    }

    #[inline(always)]
    pub fn indices(&self) -> &[u32] {
        self.indices.as_slice()
    }
}

impl BinaryVectorOwned for SVectOwned {
    type Borrowed<'a> = SVectBorrowed<'a>;

    #[inline(always)]
    fn as_borrowed(&self) -> SVectBorrowed<'_> {
        SVectBorrowed {
            dims: self.dims,
            indices: self.indices.as_slice(),
        }
    }

    fn zero(dims: u32) -> Self {
        Self::new(dims, Vec::new())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SVectBorrowed<'a> {
    dims: u32,
    indices: &'a [u32],
}

impl<'a> SVectBorrowed<'a> {
    #[inline(always)]
    pub fn indices(&self) -> &'a [u32] {
        self.indices
    }
}

impl BinaryVectorBorrowed for SVectBorrowed<'_> {
    type Owned = SVectOwned;

    #[inline(always)]
    fn own(&self) -> SVectOwned {
        SVectOwned {
            dims: self.dims,
            indices: self.indices.to_vec(),
        }
    }

    #[inline(always)]
    fn dims(&self) -> u32 {
        self.dims
    }

    #[inline(always)]
    fn count_ones(&self) -> u32 {
        self.indices.len() as u32
    }

    fn count_and(self, rhs: Self) -> u32 {
        assert_eq!(self.dims, rhs.dims);
        merge_count_and(self.indices, rhs.indices)
    }

    fn count_and_not(self, rhs: Self) -> u32 {
        assert_eq!(self.dims, rhs.dims);
        self.indices.len() as u32 - merge_count_and(self.indices, rhs.indices)
    }

    fn count_and_masked(self, rhs: Self, mask: Self) -> u32 {
        assert_eq!(self.dims, rhs.dims);
        assert_eq!(self.dims, mask.dims);
        merge_count_and3(self.indices, rhs.indices, mask.indices)
    }

    fn count_and_not_masked(self, rhs: Self, mask: Self) -> u32 {
        assert_eq!(self.dims, rhs.dims);
        assert_eq!(self.dims, mask.dims);
        merge_count_and(self.indices, mask.indices)
            - merge_count_and3(self.indices, rhs.indices, mask.indices)
    }
}

fn merge_count_and(lhs: &[u32], rhs: &[u32]) -> u32 {
    let mut i = 0;
    let mut j = 0;
    let mut count = 0;
    while i < lhs.len() && j < rhs.len() {
        match Ord::cmp(&lhs[i], &rhs[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                count += 1;
                i += 1;
                j += 1;
            }
        }
    }
    count
}

fn merge_count_and3(lhs: &[u32], rhs: &[u32], mask: &[u32]) -> u32 {
    let mut i = 0;
    let mut j = 0;
    let mut k = 0;
    let mut count = 0;
    while i < lhs.len() && j < rhs.len() && k < mask.len() {
        let (x, y, z) = (lhs[i], rhs[j], mask[k]);
        if x == y && y == z {
            count += 1;
            i += 1;
            j += 1;
            k += 1;
        } else {
            let m = x.min(y).min(z);
            i += (x == m) as usize;
            j += (y == m) as usize;
            k += (z == m) as usize;
        }
    }
    count
}
