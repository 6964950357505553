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

use std::path::PathBuf;

/// Output location used by [ConfigBuilder::legacy].
pub const LEGACY_OUTPUT_PATH: &str = "./images/user_output.png";

/// Which ordering check runs before composing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validation {
    /// Count and uniqueness only. See [crate::is_valid].
    #[default]
    Loose,
    /// Ordering must be a permutation of `0..tile_count`.
    Strict,
}

/// How the ordering cursor advances while pasting tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorPolicy {
    /// Cursor wraps at the ordering length.
    #[default]
    Cyclic,
    /// Cursor resets to 0 once it exceeds the largest ordering entry.
    Legacy,
}

/// What to paste when the ordering names a tile that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingTilePolicy {
    /// Fail with [crate::RearrangeError::UnknownTile].
    #[default]
    Reject,
    /// Keep the source tile at that position.
    Identity,
    /// Leave the position blank.
    Blank,
}

/// Rearrangement configuration. Build with [ConfigBuilder].
#[derive(Debug, Clone)]
pub struct RearrangeConfig {
    pub validation: Validation,
    pub cursor: CursorPolicy,
    pub missing_tile: MissingTilePolicy,
    /// Encode into a temporary file and rename it over the output.
    pub atomic_write: bool,
    /// If set, output always goes here and the requested path is ignored.
    pub fixed_output: Option<PathBuf>,
}

impl Default for RearrangeConfig {
    fn default() -> Self {
        Self {
            validation: Validation::default(),
            cursor: CursorPolicy::default(),
            missing_tile: MissingTilePolicy::default(),
            atomic_write: true,
            fixed_output: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config: RearrangeConfig,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: RearrangeConfig::default(),
        }
    }

    /// Mimic the historic behavior:
    /// legacy cursor, and output written to [LEGACY_OUTPUT_PATH].
    pub fn legacy() -> Self {
        Self::new()
            .cursor(CursorPolicy::Legacy)
            .fixed_output(Some(LEGACY_OUTPUT_PATH.into()))
    }

    pub fn validation(mut self, validation: Validation) -> Self {
        self.config.validation = validation;
        self
    }

    pub fn cursor(mut self, cursor: CursorPolicy) -> Self {
        self.config.cursor = cursor;
        self
    }

    pub fn missing_tile(mut self, missing_tile: MissingTilePolicy) -> Self {
        self.config.missing_tile = missing_tile;
        self
    }

    pub fn atomic_write(mut self, atomic_write: bool) -> Self {
        self.config.atomic_write = atomic_write;
        self
    }

    pub fn fixed_output(mut self, path: Option<PathBuf>) -> Self {
        self.config.fixed_output = path;
        self
    }

    pub fn build(self) -> RearrangeConfig {
        self.config
    }
}
