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

//! Scoped ownership of GPU objects.

use super::api::ResourceId;
use super::traits::GraphicsDevice;
use std::rc::Rc;

/// Owns every GPU object registered with it and releases them in reverse
/// acquisition order.
///
/// Release happens on [`release_all`](ResourceScope::release_all) or on drop,
/// whichever comes first. Releasing is idempotent: the registry is drained,
/// so a second call does nothing. This makes teardown safe after a partially
/// completed initialisation.
#[derive(Debug)]
pub struct ResourceScope {
    device: Rc<dyn GraphicsDevice>,
    acquired: Vec<ResourceId>,
    label: &'static str,
}

impl ResourceScope {
    /// Creates an empty scope over `device`.
    pub fn new(device: Rc<dyn GraphicsDevice>, label: &'static str) -> Self {
        Self {
            device,
            acquired: Vec::new(),
            label,
        }
    }

    /// The device objects are created on and released to.
    pub fn device(&self) -> &Rc<dyn GraphicsDevice> {
        &self.device
    }

    /// Registers `id` for release and hands it back.
    pub fn track<T: Into<ResourceId> + Copy>(&mut self, id: T) -> T {
        self.acquired.push(id.into());
        id
    }

    /// The number of objects currently owned.
    pub fn len(&self) -> usize {
        self.acquired.len()
    }

    /// Whether the scope owns nothing.
    pub fn is_empty(&self) -> bool {
        self.acquired.is_empty()
    }

    /// Releases every owned object, newest first.
    pub fn release_all(&mut self) {
        if self.acquired.is_empty() {
            return;
        }
        log::debug!(
            "ResourceScope({}): releasing {} objects",
            self.label,
            self.acquired.len()
        );
        while let Some(id) = self.acquired.pop() {
            if let Err(e) = self.device.release(id) {
                log::warn!(
                    "ResourceScope({}): Failed to release {:?}: {}",
                    self.label,
                    id,
                    e
                );
            }
        }
    }
}

impl Drop for ResourceScope {
    fn drop(&mut self) {
        self.release_all();
    }
}
