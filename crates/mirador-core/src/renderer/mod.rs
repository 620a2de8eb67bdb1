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

//! Provides the public, backend-agnostic rendering contracts.
//!
//! This module defines the "common language" for all rendering operations: the
//! [`GraphicsDevice`] trait, the opaque handles it hands out, the fixed-function
//! state vocabulary, the two constant-buffer records shaders see, and the error
//! types raised while creating GPU objects.
//!
//! This module defines the 'what' of rendering. The 'how' lives in a concrete
//! backend in `mirador-infra`, and `mirador-lanes` drives passes through these
//! traits without knowing which backend is underneath.

pub mod api;
pub mod constants;
pub mod error;
pub mod scope;
pub mod traits;

pub use self::api::*;
pub use self::constants::{LightConstants, PerFrameConstants, PerModelConstants, MAX_LIGHTS};
pub use self::error::ResourceError;
pub use self::scope::ResourceScope;
pub use self::traits::GraphicsDevice;
