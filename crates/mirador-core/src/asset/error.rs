// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;
use std::path::PathBuf;

/// An error raised while reading an asset from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// Nothing was found at the path.
    Missing {
        /// The path that was looked up.
        path: PathBuf,
    },
    /// The file exists but could not be decoded.
    Malformed {
        /// The offending file.
        path: PathBuf,
        /// The decoder's explanation.
        reason: String,
    },
}

impl LoadError {
    /// The path the error refers to.
    pub fn path(&self) -> &PathBuf {
        match self {
            LoadError::Missing { path } | LoadError::Malformed { path, .. } => path,
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Missing { path } => write!(f, "Asset not found: '{}'", path.display()),
            LoadError::Malformed { path, reason } => {
                write!(f, "Failed to decode '{}': {reason}", path.display())
            }
        }
    }
}

impl std::error::Error for LoadError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_error_display() {
        let err = LoadError::Missing {
            path: PathBuf::from("media/Teapot.x"),
        };
        assert_eq!(format!("{err}"), "Asset not found: 'media/Teapot.x'");

        let err = LoadError::Malformed {
            path: PathBuf::from("media/moogle.png"),
            reason: "bad header".to_string(),
        };
        assert_eq!(
            format!("{err}"),
            "Failed to decode 'media/moogle.png': bad header"
        );
        assert_eq!(err.path(), &PathBuf::from("media/moogle.png"));
    }
}
