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

//! # Mirador SDK
//!
//! The public surface of the portal scene: a [`PortalScene`] session driven
//! through `init_geometry`, `init_scene`, `update_scene`, `render_scene` and
//! `release_resources`, configured by a [`SceneConfig`].
//!
//! The session is backend-agnostic. It takes any
//! [`GraphicsDevice`](mirador_core::renderer::GraphicsDevice) and any mesh
//! and texture sources.

pub mod config;
pub mod error;
pub mod layout;
mod scene;

pub use config::SceneConfig;
pub use error::{ConfigError, InitError};
pub use layout::SceneLayout;
pub use scene::PortalScene;

pub mod prelude {
    //! Types most callers need alongside a [`PortalScene`](crate::PortalScene).
    pub use crate::{ConfigError, InitError, PortalScene, SceneConfig, SceneLayout};
    pub use mirador_core::platform::{CameraKey, InputEvent, InputState, NoInput};
    pub use mirador_lanes::animation_lane::FrameReport;
    pub use mirador_lanes::render_lane::{FrameStats, PassStats};
}
