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

use std::collections::HashSet;

use crate::geometry::{ImageSize, TileGrid, TileSize};

/// Check whether an image can be rearranged with given tile size and ordering.
///
/// Returns `true` iff:
/// * The tile size divides both image dimensions without remainder.
/// * `ordering` has exactly one entry per tile.
/// * No entry of `ordering` is repeated.
///
/// Entries are *not* required to lie in `0..tile_count`.
/// Use [is_strict_permutation] for that.
pub fn is_valid(image_size: ImageSize, tile_size: TileSize, ordering: &[usize]) -> bool {
    match TileGrid::new(image_size, tile_size) {
        Some(grid) => grid.tile_count() == ordering.len() && all_distinct(ordering),
        None => false,
    }
}

/// Like [is_valid], but also requires `ordering` to be a permutation
/// of exactly `0..tile_count`.
pub fn is_strict_permutation(
    image_size: ImageSize,
    tile_size: TileSize,
    ordering: &[usize],
) -> bool {
    is_valid(image_size, tile_size, ordering) && ordering.iter().all(|&i| i < ordering.len())
}

fn all_distinct(ordering: &[usize]) -> bool {
    ordering.iter().collect::<HashSet<_>>().len() == ordering.len()
}
