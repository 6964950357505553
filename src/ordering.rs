// Copyright (C) 2023 Dheatly23
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Lesser General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Lesser General Public License for more details.
//
// You should have received a copy of the GNU Lesser General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Ready-made orderings.

use rand::prelude::*;
use rand_xoshiro::Xoshiro256StarStar;
use sha2::{Digest, Sha256};

/// Ordering that leaves every tile in place.
pub fn identity(tile_count: usize) -> Vec<usize> {
    (0..tile_count).collect()
}

/// Random permutation of `0..tile_count`.
///
/// The same `seed` always produces the same ordering.
/// Without a seed, the generator is seeded from OS entropy.
pub fn shuffled(tile_count: usize, seed: Option<&str>) -> Vec<usize> {
    let mut random = if let Some(seed) = seed {
        let mut hasher = Sha256::new();
        hasher.update(seed);

        Xoshiro256StarStar::from_seed(hasher.finalize().into())
    } else {
        Xoshiro256StarStar::from_entropy()
    };

    shuffled_with(tile_count, &mut random)
}

/// Random permutation of `0..tile_count` drawn from `random`.
pub fn shuffled_with<R: Rng + ?Sized>(tile_count: usize, random: &mut R) -> Vec<usize> {
    let mut ordering = identity(tile_count);
    ordering.shuffle(random);
    ordering
}
