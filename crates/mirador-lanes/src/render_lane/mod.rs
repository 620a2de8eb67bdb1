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

//! Rendering lane - hot path for graphics operations.
//!
//! A frame is two passes over the same ordered draw list: first from the
//! portal camera into the portal texture, then from the main camera into the
//! back buffer. The portal texture produced by the first pass is an input of
//! the second.

mod constant_buffer;
mod draw;
mod frame;
mod libraries;
mod pass;
mod portal;

pub use constant_buffer::ConstantBuffer;
pub use draw::{DrawDescriptor, DrawSubject, TextureBinding, TextureSource, MAX_TEXTURE_SLOTS};
pub use frame::{FrameRenderer, FrameSettings, FrameStats, SceneView};
pub use libraries::{SamplerLibrary, ShaderLibrary, StateLibrary};
pub use pass::{PassContext, PassStats, PassTarget};
pub use portal::PortalTargets;
