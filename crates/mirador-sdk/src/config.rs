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

//! Scene configuration, read from RON.

use crate::error::ConfigError;
use mirador_core::math::{Vec3, Vec4};
use mirador_lanes::render_lane::FrameSettings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Mesh file names, relative to [`SceneConfig::media_dir`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshFiles {
    pub light: String,
    pub portal: String,
    pub floor: String,
    pub teapot: String,
    pub sphere: String,
    pub cube: String,
    pub troll: String,
    pub robot: String,
}

impl Default for MeshFiles {
    fn default() -> Self {
        Self {
            light: "Light.obj".into(),
            portal: "Cube.obj".into(),
            floor: "Ground.obj".into(),
            teapot: "Teapot.obj".into(),
            sphere: "Sphere.obj".into(),
            cube: "Cube.obj".into(),
            troll: "troll.obj".into(),
            robot: "Robot.obj".into(),
        }
    }
}

/// Texture file names, relative to [`SceneConfig::media_dir`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextureFiles {
    pub light: String,
    pub floor: String,
    pub teapot: String,
    pub sphere: String,
    pub brick: String,
    pub tiles: String,
    pub additive: String,
    pub glass: String,
    pub moogle: String,
    pub pattern: String,
    pub pattern_normal: String,
    pub troll: String,
    pub cell_gradient: String,
    pub robot: String,
}

impl Default for TextureFiles {
    fn default() -> Self {
        Self {
            light: "Flare.jpg".into(),
            floor: "WoodDiffuseSpecular.png".into(),
            teapot: "BrainDiffuseSpecular.png".into(),
            sphere: "StoneDiffuseSpecular.png".into(),
            brick: "brick1.jpg".into(),
            tiles: "tiles1.jpg".into(),
            additive: "flare.jpg".into(),
            glass: "glass.jpg".into(),
            moogle: "moogle.png".into(),
            pattern: "PatternDiffuseSpecular.png".into(),
            pattern_normal: "PatternNormal.png".into(),
            troll: "Green.png".into(),
            cell_gradient: "CellGradientBlue.png".into(),
            robot: "tech02.jpg".into(),
        }
    }
}

/// Everything about the portal scene that is not hard-wired scene content.
///
/// Every field has a default, so a config file only needs to name what it
/// changes:
///
/// ```
/// use mirador_sdk::SceneConfig;
///
/// let config = SceneConfig::from_ron_str("(portal_size: (512, 256))").unwrap();
/// assert_eq!(config.portal_size, (512, 256));
/// assert_eq!(config.specular_power, 256.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Directory the mesh and texture names are resolved against.
    pub media_dir: PathBuf,
    /// Mesh files.
    pub meshes: MeshFiles,
    /// Texture files.
    pub textures: TextureFiles,
    /// Portal render target size in pixels.
    pub portal_size: (u32, u32),
    /// Clear color of both passes.
    pub background_color: Vec4,
    /// Ambient light color.
    pub ambient_color: Vec3,
    /// Specular exponent.
    pub specular_power: f32,
    /// Cell-shading outline color.
    pub outline_color: Vec3,
    /// Cell-shading outline thickness.
    pub outline_thickness: f32,
    /// Camera turn rate in radians per second.
    pub turn_speed: f32,
    /// Camera movement rate in units per second.
    pub move_speed: f32,
    /// Seconds between frame reports.
    pub report_interval: f32,
    /// Whether the portal pass runs.
    pub portal_enabled: bool,
    /// Window title prefix.
    pub title: String,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            media_dir: PathBuf::from("media"),
            meshes: MeshFiles::default(),
            textures: TextureFiles::default(),
            portal_size: (1024, 1024),
            background_color: Vec4::new(0.2, 0.2, 0.3, 1.0),
            ambient_color: Vec3::new(0.2, 0.2, 0.3),
            specular_power: 256.0,
            outline_color: Vec3::ZERO,
            outline_thickness: 0.05,
            turn_speed: 2.0,
            move_speed: 50.0,
            report_interval: 0.5,
            portal_enabled: true,
            title: "Mirador".into(),
        }
    }
}

impl SceneConfig {
    /// Parses a config from RON text.
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        Ok(ron::de::from_str(text)?)
    }

    /// Reads a config from a RON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let bytes = std::fs::read(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = ron::de::from_bytes(&bytes)?;
        log::info!("Loaded scene config from '{}'", path.display());
        Ok(config)
    }

    /// Pretty-printed RON, loadable with [`SceneConfig::from_ron_str`].
    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        Ok(ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::default(),
        )?)
    }

    /// Resolves a media file name against [`media_dir`](Self::media_dir).
    pub fn media_path(&self, file: &str) -> PathBuf {
        self.media_dir.join(file)
    }

    /// Portal width over height.
    pub fn portal_aspect(&self) -> f32 {
        let (width, height) = self.portal_size;
        width as f32 / height.max(1) as f32
    }

    /// The pass-invariant settings the frame renderer needs.
    pub fn frame_settings(&self) -> FrameSettings {
        FrameSettings {
            ambient_color: self.ambient_color,
            specular_power: self.specular_power,
            outline_color: self.outline_color,
            outline_thickness: self.outline_thickness,
            clear_color: self.background_color,
            portal_enabled: self.portal_enabled,
        }
    }
}
