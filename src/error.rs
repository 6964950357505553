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

use image::{ColorType, ImageError};
use thiserror::Error;

/// Errors produced while rearranging an image.
#[derive(Debug, Error)]
pub enum RearrangeError {
    /// Tile size does not fit the image, or the ordering is unusable.
    #[error("The tile size or ordering are not valid for the given image")]
    InvalidTiling,

    /// Ordering names a tile that does not exist.
    #[error("Ordering references tile {index}, but the image only has {tile_count} tiles")]
    UnknownTile { index: usize, tile_count: usize },

    /// Filesystem failure while reading or writing.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Codec failure while decoding or encoding.
    #[error("Image error: {0}")]
    Image(#[from] ImageError),

    /// Decoded pixel layout cannot be sliced into tiles.
    #[error("Unsupported color type: {0:?}")]
    UnsupportedColor(ColorType),

    /// Pixel buffer size disagrees with image dimensions.
    #[error("Pixel buffer shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

impl RearrangeError {
    /// Whether the source could not be read or the output could not be
    /// written, rather than the tiling itself being rejected.
    pub fn is_io_failure(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Image(_) | Self::UnsupportedColor(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::error::{LimitError, LimitErrorKind, ParameterError, ParameterErrorKind};

    #[test]
    fn test_invalid_tiling_message() {
        assert_eq!(
            RearrangeError::InvalidTiling.to_string(),
            "The tile size or ordering are not valid for the given image"
        );
    }

    #[test]
    fn test_io_failure_kind() {
        let err = RearrangeError::from(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert!(err.is_io_failure());
        assert!(!RearrangeError::InvalidTiling.is_io_failure());
        assert!(!RearrangeError::Shape(ndarray::ShapeError::from_kind(
            ndarray::ErrorKind::IncompatibleShape
        ))
        .is_io_failure());
        assert!(!RearrangeError::UnknownTile {
            index: 5,
            tile_count: 4
        }
        .is_io_failure());
    }

    #[test]
    fn test_codec_errors_are_io_failures() {
        let limits = ImageError::Limits(LimitError::from_kind(LimitErrorKind::InsufficientMemory));
        assert!(RearrangeError::from(limits).is_io_failure());

        let parameter = ImageError::Parameter(ParameterError::from_kind(
            ParameterErrorKind::DimensionMismatch,
        ));
        assert!(RearrangeError::from(parameter).is_io_failure());

        assert!(RearrangeError::UnsupportedColor(ColorType::Rgb8).is_io_failure());
    }
}
