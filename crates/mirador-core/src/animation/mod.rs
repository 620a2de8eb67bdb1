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

//! Leaf animation drivers.
//!
//! These are plain value types with no knowledge of entities: the animation
//! lane owns them and feeds their output into the entity store.

mod orbit;
mod oscillator;

pub use orbit::OrbitDriver;
pub use oscillator::{Direction, Oscillator};
