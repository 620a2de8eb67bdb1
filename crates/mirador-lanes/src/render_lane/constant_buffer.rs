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

//! A typed GPU constant buffer with a CPU-side shadow copy.
//!
//! The shadow is the record code edits; [`ConstantBuffer::upload`] mirrors it
//! to GPU memory. Uploads overwrite the whole buffer, and the immediate
//! context orders them against the draws around them, so rewriting the same
//! buffer before every draw is safe.

use bytemuck::Pod;
use mirador_core::renderer::{
    BufferDescriptor, BufferId, BufferUsage, GraphicsDevice, ResourceError, ResourceScope,
};
use std::borrow::Cow;

/// A constant buffer holding exactly one `T`.
#[derive(Debug)]
pub struct ConstantBuffer<T: Pod> {
    buffer: BufferId,
    shadow: T,
    label: &'static str,
}

impl<T: Pod> ConstantBuffer<T> {
    /// Creates the GPU buffer, initialised from `initial`.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] if buffer creation fails.
    pub fn new(
        scope: &mut ResourceScope,
        initial: T,
        label: &'static str,
    ) -> Result<Self, ResourceError> {
        let bytes = bytemuck::bytes_of(&initial);
        let device = scope.device().clone();
        let buffer = scope.track(device.create_buffer(
            &BufferDescriptor {
                label: Some(Cow::Borrowed(label)),
                size: bytes.len() as u64,
                usage: BufferUsage::Constant,
            },
            Some(bytes),
        )?);
        Ok(Self {
            buffer,
            shadow: initial,
            label,
        })
    }

    /// The CPU-side record.
    pub fn get(&self) -> &T {
        &self.shadow
    }

    /// The CPU-side record, for editing before the next upload.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.shadow
    }

    /// Copies the CPU-side record into GPU memory.
    pub fn upload(&self, device: &dyn GraphicsDevice) {
        log::trace!("ConstantBuffer({}): upload", self.label);
        device.update_buffer(self.buffer, bytemuck::bytes_of(&self.shadow));
    }

    /// Replaces the record and uploads it.
    pub fn write(&mut self, device: &dyn GraphicsDevice, value: T) {
        self.shadow = value;
        self.upload(device);
    }

    /// The GPU buffer handle.
    pub fn buffer(&self) -> BufferId {
        self.buffer
    }

    /// Size of the record in bytes.
    pub fn data_size(&self) -> u64 {
        std::mem::size_of::<T>() as u64
    }
}
