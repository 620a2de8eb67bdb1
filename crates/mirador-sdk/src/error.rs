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

//! Errors raised while setting up a [`PortalScene`](crate::PortalScene) or
//! reading its configuration.

use mirador_core::asset::LoadError;
use mirador_core::renderer::ResourceError;
use std::path::PathBuf;
use thiserror::Error;

/// The first failure of an init step.
///
/// `context` names the step that failed, the source carries the collaborator's
/// own error.
#[derive(Debug, Error)]
pub enum InitError {
    /// A mesh or texture could not be read.
    #[error("{context}: {source}")]
    ResourceLoad {
        /// The init step.
        context: &'static str,
        /// What the loader reported.
        #[source]
        source: LoadError,
    },
    /// The device refused to create an object.
    #[error("{context}: {source}")]
    DeviceResource {
        /// The init step.
        context: &'static str,
        /// What the device reported.
        #[source]
        source: ResourceError,
    },
    /// A step was called before the one it depends on.
    #[error("Cannot {stage} before the geometry is initialised")]
    NotReady {
        /// What was attempted.
        stage: &'static str,
    },
}

impl InitError {
    /// The init step that failed, if any.
    pub fn context(&self) -> Option<&'static str> {
        match self {
            InitError::ResourceLoad { context, .. } | InitError::DeviceResource { context, .. } => {
                Some(context)
            }
            InitError::NotReady { .. } => None,
        }
    }
}

/// Failure to read or write a [`SceneConfig`](crate::SceneConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Failed to read scene config '{}'", .path.display())]
    Io {
        /// The config file.
        path: PathBuf,
        /// The I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The text is not a valid config.
    #[error("Invalid scene config: {0}")]
    Parse(#[from] ron::error::SpannedError),
    /// The config could not be written out.
    #[error("Failed to serialise scene config: {0}")]
    Serialise(#[from] ron::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use mirador_core::renderer::ShaderTechnique;
    use std::error::Error as _;

    #[test]
    fn test_message_starts_with_context() {
        let err = InitError::DeviceResource {
            context: "Error loading shaders",
            source: ResourceError::Shader {
                technique: ShaderTechnique::Wiggle,
                details: "missing entry point".into(),
            },
        };
        assert!(err.to_string().starts_with("Error loading shaders: "));
        assert_eq!(err.context(), Some("Error loading shaders"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_not_ready_has_no_context() {
        let err = InitError::NotReady {
            stage: "initialise the scene",
        };
        assert_eq!(err.context(), None);
        assert!(err.source().is_none());
    }
}
