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

use std::fmt;

/// Pixel dimensions of a whole image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl From<(u32, u32)> for ImageSize {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Pixel dimensions of a single tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileSize {
    pub width: u32,
    pub height: u32,
}

impl TileSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl From<(u32, u32)> for TileSize {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for TileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Tile layout of an image, scanned in row-major order.
///
/// Tile rows are visited top to bottom, and within a row the columns
/// left to right. The n-th visited tile has scan index n.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    tile: TileSize,
    tiles_x: u32,
    tiles_y: u32,
}

impl TileGrid {
    /// Build the grid, or `None` if the tile does not divide the image exactly.
    pub fn new(image: ImageSize, tile: TileSize) -> Option<Self> {
        let rem_x = image.width.checked_rem(tile.width)?;
        let rem_y = image.height.checked_rem(tile.height)?;
        if rem_x != 0 || rem_y != 0 {
            return None;
        }

        Some(Self {
            tile,
            tiles_x: image.width / tile.width,
            tiles_y: image.height / tile.height,
        })
    }

    pub fn tile_size(&self) -> TileSize {
        self.tile
    }

    /// Number of tile columns.
    pub fn tiles_x(&self) -> u32 {
        self.tiles_x
    }

    /// Number of tile rows.
    pub fn tiles_y(&self) -> u32 {
        self.tiles_y
    }

    pub fn tile_count(&self) -> usize {
        self.tiles_x as usize * self.tiles_y as usize
    }

    /// Iterate `(index, x, y)` over every tile in scan order.
    pub fn positions(&self) -> impl Iterator<Item = (usize, u32, u32)> {
        let Self {
            tile,
            tiles_x,
            tiles_y,
        } = *self;

        (0..tiles_y)
            .flat_map(move |r| (0..tiles_x).map(move |c| (r, c)))
            .enumerate()
            .map(move |(i, (r, c))| (i, c * tile.width, r * tile.height))
    }
}
