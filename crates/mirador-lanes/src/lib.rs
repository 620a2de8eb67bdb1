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

//! # Mirador Lanes
//!
//! Hot-path execution pipelines run once per frame:
//!
//! * [`animation_lane`] mutates the entity store: pulses, drifts, orbits,
//!   shader phases, the portal rig, free camera control and frame statistics.
//! * [`render_lane`] turns the entity store into GPU commands: two scene
//!   passes (portal, then main) driven by a declarative draw list.

#![warn(missing_docs)]

pub mod animation_lane;
pub mod render_lane;
