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

//! Error types raised by a [`GraphicsDevice`](super::GraphicsDevice) while
//! creating or releasing GPU objects.

use super::api::ShaderTechnique;
use std::fmt;

/// An error related to the creation or use of a GPU resource.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceError {
    /// A shader pair failed to load or compile.
    Shader {
        /// The technique whose shaders failed.
        technique: ShaderTechnique,
        /// Detailed error messages from the shader compiler or loader.
        details: String,
    },
    /// The backend refused to create an object.
    Creation {
        /// What was being created ("buffer", "texture", ...).
        kind: &'static str,
        /// The backend's explanation.
        reason: String,
    },
    /// The handle used to reference a resource is unknown or already released.
    InvalidHandle,
    /// Initial data or an update does not fit the resource.
    OutOfBounds,
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceError::Shader { technique, details } => {
                write!(f, "Shader pair '{technique}' failed to load: {details}")
            }
            ResourceError::Creation { kind, reason } => {
                write!(f, "Failed to create {kind}: {reason}")
            }
            ResourceError::InvalidHandle => write!(f, "Invalid resource handle or ID."),
            ResourceError::OutOfBounds => write!(f, "Resource access out of bounds."),
        }
    }
}

impl std::error::Error for ResourceError {}
