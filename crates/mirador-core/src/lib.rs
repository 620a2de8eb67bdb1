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

//! # Mirador Core
//!
//! Foundational crate containing traits, core types, and interface contracts
//! shared by every other Mirador crate.
//!
//! Nothing in here talks to a real GPU, a window, or the filesystem. Those are
//! collaborators reached through the traits defined in [`renderer`], [`asset`]
//! and [`platform`], with concrete implementations living in `mirador-infra`.

#![warn(missing_docs)]

pub mod animation;
pub mod asset;
pub mod math;
pub mod platform;
pub mod renderer;

pub use animation::{Direction, Oscillator, OrbitDriver};
