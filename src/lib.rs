//! Library to rearrange the tiles of an image.
//!
//! An image is cut into equal tiles, numbered in row-major scan order
//! (tile rows top to bottom, columns left to right). An ordering then
//! says, for each output position in the same scan order, which input
//! tile goes there. The result keeps the size and color type of the input.
//!
//! * [is_valid] checks whether a tile size and ordering fit an image.
//! * [rearrange_tiles] does the whole job on files.
//! * [rearrange_array] does it on an in-memory `ndarray` array.
//! * [ordering] builds identity and (seeded) random orderings.

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
//

mod config;
mod error;
mod geometry;
pub mod ordering;
mod rearrange;
mod validate;

pub use crate::config::{
    ConfigBuilder, CursorPolicy, MissingTilePolicy, RearrangeConfig, Validation,
    LEGACY_OUTPUT_PATH,
};
pub use crate::error::RearrangeError;
pub use crate::geometry::{ImageSize, TileGrid, TileSize};
#[doc(inline)]
pub use crate::rearrange::{rearrange_array, rearrange_tiles, rearrange_tiles_with};
#[doc(inline)]
pub use crate::validate::{is_strict_permutation, is_valid};
