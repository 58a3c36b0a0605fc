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

//! Population-count reductions over the raw storage of binary vectors.
//!
//! `bit` operates on bit-packed `u64` words, `boolean` on plain `bool`
//! slices. Both families return exact integer tallies.

pub mod bit;
pub mod boolean;
