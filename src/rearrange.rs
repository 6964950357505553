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

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::io::Reader as ImageReader;
use image::{ColorType, DynamicImage, ImageEncoder};
use ndarray::prelude::*;
use ndarray::Zip;
use tempfile::Builder;
use tracing::{debug, info, warn};

use crate::config::{CursorPolicy, MissingTilePolicy, RearrangeConfig, Validation};
use crate::error::RearrangeError;
use crate::geometry::{ImageSize, TileGrid, TileSize};
use crate::validate::{is_strict_permutation, is_valid};

/// Where an output tile is taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    Tile(usize),
    Blank,
}

/// Validate, then resolve the source of every output position.
fn prepare(
    image_size: ImageSize,
    tile_size: TileSize,
    ordering: &[usize],
    config: &RearrangeConfig,
) -> Result<(TileGrid, Vec<Source>), RearrangeError> {
    let valid = match config.validation {
        Validation::Loose => is_valid(image_size, tile_size, ordering),
        Validation::Strict => is_strict_permutation(image_size, tile_size, ordering),
    };
    let grid = match TileGrid::new(image_size, tile_size) {
        Some(grid) if valid => grid,
        _ => return Err(RearrangeError::InvalidTiling),
    };

    debug!(
        %image_size,
        %tile_size,
        tiles_x = grid.tiles_x(),
        tiles_y = grid.tiles_y(),
        "Tiling accepted"
    );

    let plan = plan(&grid, ordering, config)?;
    Ok((grid, plan))
}

fn plan(
    grid: &TileGrid,
    ordering: &[usize],
    config: &RearrangeConfig,
) -> Result<Vec<Source>, RearrangeError> {
    let tile_count = grid.tile_count();
    let max = ordering.iter().copied().max().unwrap_or(0);
    let mut cursor = 0;

    let mut plan = Vec::with_capacity(tile_count);
    for (pos, x, y) in grid.positions() {
        if config.cursor == CursorPolicy::Legacy && cursor > max {
            warn!(pos, x, y, max, "Ordering cursor passed largest entry, wrapping");
            cursor = 0;
        }

        let index = match ordering.get(cursor % ordering.len().max(1)) {
            Some(&i) => i,
            None => return Err(RearrangeError::InvalidTiling),
        };
        cursor += 1;

        plan.push(if index < tile_count {
            Source::Tile(index)
        } else {
            match config.missing_tile {
                MissingTilePolicy::Reject => {
                    return Err(RearrangeError::UnknownTile { index, tile_count })
                }
                MissingTilePolicy::Identity => Source::Tile(pos),
                MissingTilePolicy::Blank => Source::Blank,
            }
        });
    }

    Ok(plan)
}

/// Copy out every tile, indexed by scan order.
fn extract_tiles<A: Clone>(arr: ArrayView3<'_, A>, grid: &TileGrid) -> Vec<Array3<A>> {
    let TileSize { width, height } = grid.tile_size();
    let channels = arr.len_of(Axis(2));

    arr.exact_chunks((height as usize, width as usize, channels))
        .into_iter()
        .map(|tile| tile.to_owned())
        .collect()
}

fn compose<A>(
    tiles: &[Array3<A>],
    plan: &[Source],
    dim: (usize, usize, usize),
    grid: &TileGrid,
) -> Array3<A>
where
    A: Clone + Default + Send + Sync,
{
    let TileSize { width, height } = grid.tile_size();
    let tiles_x = grid.tiles_x() as usize;

    let mut out = Array3::<A>::default(dim);

    // Destination chunks never overlap, so every tile is pasted independently.
    Zip::indexed(out.exact_chunks_mut((height as usize, width as usize, dim.2))).par_for_each(
        |(r, c, _), mut dst| {
            if let Source::Tile(i) = plan[r * tiles_x + c] {
                dst.assign(&tiles[i]);
            }
        },
    );

    out
}

/// Rearrange tiles of an in-memory array.
///
/// Parameters:
/// * `arr` : Input array view, shaped `(height, width, channels)`.
/// * `tile_size` : Tile size in pixels.
/// * `ordering` : For each output tile in scan order, the index of the input tile to place there.
/// * `config` : Validation and composition policy.
///
/// Returns a new array of the same shape.
pub fn rearrange_array<A>(
    arr: ArrayView3<'_, A>,
    tile_size: TileSize,
    ordering: &[usize],
    config: &RearrangeConfig,
) -> Result<Array3<A>, RearrangeError>
where
    A: Clone + Default + Send + Sync,
{
    let dim = arr.dim();
    let (Ok(width), Ok(height)) = (u32::try_from(dim.1), u32::try_from(dim.0)) else {
        return Err(RearrangeError::InvalidTiling);
    };
    if dim.2 == 0 {
        return Err(RearrangeError::InvalidTiling);
    }

    let (grid, plan) = prepare(ImageSize::new(width, height), tile_size, ordering, config)?;
    let tiles = extract_tiles(arr, &grid);
    Ok(compose(&tiles, &plan, dim, &grid))
}

/// Rearrange tiles of the image at `image_path` and save it as PNG to `out_path`.
///
/// Uses the default [RearrangeConfig]. See [rearrange_tiles_with].
pub fn rearrange_tiles(
    image_path: impl AsRef<Path>,
    tile_size: TileSize,
    ordering: &[usize],
    out_path: impl AsRef<Path>,
) -> Result<(), RearrangeError> {
    rearrange_tiles_with(
        image_path,
        tile_size,
        ordering,
        out_path,
        &RearrangeConfig::default(),
    )
}

/// Rearrange tiles of the image at `image_path` and save it as PNG.
///
/// Output has the same dimensions and color type as the input.
/// Nothing is written if the tiling is rejected.
pub fn rearrange_tiles_with(
    image_path: impl AsRef<Path>,
    tile_size: TileSize,
    ordering: &[usize],
    out_path: impl AsRef<Path>,
    config: &RearrangeConfig,
) -> Result<(), RearrangeError> {
    let image_path = image_path.as_ref();

    let im = ImageReader::new(BufReader::new(File::open(image_path)?))
        .with_guessed_format()?
        .decode()?;
    let (width, height, color) = (im.width(), im.height(), im.color());
    debug!(path = %image_path.display(), width, height, ?color, "Decoded image");

    let dim = (height as usize, width as usize, pixel_stride(&im)?);
    let (grid, plan) = prepare(ImageSize::new(width, height), tile_size, ordering, config)?;

    let tiles = {
        let arr = <ArrayView3<u8>>::from_shape(dim, im.as_bytes())?;
        extract_tiles(arr, &grid)
    };
    drop(im);

    let out = compose(&tiles, &plan, dim, &grid);
    drop(tiles);

    let out_path = match &config.fixed_output {
        Some(fixed) => {
            warn!(
                requested = %out_path.as_ref().display(),
                fixed = %fixed.display(),
                "Ignoring requested output path"
            );
            fixed.as_path()
        }
        None => out_path.as_ref(),
    };

    write_png(
        out_path,
        &out.into_raw_vec(),
        width,
        height,
        color,
        config.atomic_write,
    )?;
    info!(path = %out_path.display(), tiles = grid.tile_count(), "Wrote rearranged image");

    Ok(())
}

/// Bytes per pixel of the decoded buffer.
fn pixel_stride(im: &DynamicImage) -> Result<usize, RearrangeError> {
    Ok(match im {
        DynamicImage::ImageLuma8(_) => 1,
        DynamicImage::ImageLumaA8(_) => 2,
        DynamicImage::ImageRgb8(_) => 3,
        DynamicImage::ImageRgba8(_) => 4,
        DynamicImage::ImageLuma16(_) => 2,
        DynamicImage::ImageLumaA16(_) => 4,
        DynamicImage::ImageRgb16(_) => 6,
        DynamicImage::ImageRgba16(_) => 8,
        DynamicImage::ImageRgb32F(_) => 12,
        DynamicImage::ImageRgba32F(_) => 16,
        _ => return Err(RearrangeError::UnsupportedColor(im.color())),
    })
}

fn write_png(
    path: &Path,
    buf: &[u8],
    width: u32,
    height: u32,
    color: ColorType,
    atomic: bool,
) -> Result<(), RearrangeError> {
    if !atomic {
        let mut file = BufWriter::new(File::create(path)?);
        PngEncoder::new(&mut file).write_image(buf, width, height, color)?;
        file.flush()?;
        return Ok(());
    }

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    // Same mode a plain create would give: 0o666 less umask, or the
    // existing file's permissions when overwriting.
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let mut tmp = builder.tempfile_in(dir)?;
    if let Ok(meta) = fs::metadata(path) {
        tmp.as_file().set_permissions(meta.permissions())?;
    }

    {
        let mut file = BufWriter::new(tmp.as_file_mut());
        PngEncoder::new(&mut file).write_image(buf, width, height, color)?;
        file.flush()?;
    }
    tmp.persist(path).map_err(|e| e.error)?;

    Ok(())
}
