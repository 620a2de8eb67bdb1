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

//! Asset collaborator contracts and GPU upload helpers.
//!
//! Decoding mesh and image files is someone else's job: implementors of
//! [`MeshRepository`] and [`TextureLoader`] turn a path into CPU-side data, and
//! the helpers in [`upload`] move that data onto the GPU under a
//! [`ResourceScope`](crate::renderer::ResourceScope).

mod error;
pub mod upload;

pub use self::error::LoadError;
pub use self::upload::{upload_mesh, upload_texture};

use crate::renderer::{MeshData, TextureData};
use std::path::Path;

/// Turns a mesh file into vertex and index data.
pub trait MeshRepository {
    /// Loads the mesh stored at `path`.
    ///
    /// # Errors
    ///
    /// [`LoadError::Missing`] when nothing is found at `path`,
    /// [`LoadError::Malformed`] when the file cannot be parsed.
    fn load_mesh(&self, path: &Path) -> Result<MeshData, LoadError>;
}

/// Turns an image file into RGBA8 texels.
pub trait TextureLoader {
    /// Loads the image stored at `path`.
    fn load_texture(&self, path: &Path) -> Result<TextureData, LoadError>;
}
