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

// Headless driver for the portal scene.
// Run with: cargo run -p sandbox -- --synthetic --frames 240

use anyhow::{Context, Result};
use clap::Parser;
use mirador_core::asset::{MeshRepository, TextureLoader};
use mirador_infra::asset::resolve_media_dir;
use mirador_infra::{
    HeadlessDevice, ImageTextureLoader, KeyboardState, ObjMeshRepository, SyntheticAssets,
};
use mirador_sdk::prelude::*;
use std::path::PathBuf;
use std::rc::Rc;

/// Runs the portal scene without a window and logs frame statistics.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Number of frames to simulate.
    #[arg(long, default_value_t = 120)]
    frames: u32,

    /// Fixed time step in seconds.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Display width in pixels.
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Display height in pixels.
    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Scene configuration file (RON).
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Media directory, overriding the configuration.
    #[arg(long, value_name = "DIR")]
    media: Option<PathBuf>,

    /// Generate meshes and textures instead of reading media files.
    #[arg(long)]
    synthetic: bool,

    /// Key code held for the whole run, e.g. `--hold KeyW --hold ArrowLeft`.
    #[arg(long = "hold", value_name = "KEY")]
    held: Vec<String>,

    /// Skip the portal pass.
    #[arg(long)]
    no_portal: bool,

    /// Print the effective configuration as RON and exit.
    #[arg(long)]
    print_config: bool,
}

type Sources = (Rc<dyn MeshRepository>, Rc<dyn TextureLoader>);

fn asset_sources(args: &Args, config: &mut SceneConfig) -> Result<Sources> {
    if args.synthetic {
        log::info!("Using synthetic assets");
        let assets = Rc::new(SyntheticAssets::new());
        return Ok((assets.clone(), assets));
    }
    let media = resolve_media_dir(&config.media_dir)?;
    log::info!("Reading media from '{}'", media.display());
    config.media_dir = media.clone();
    Ok((
        Rc::new(ObjMeshRepository::new(media.clone())),
        Rc::new(ImageTextureLoader::new(media)),
    ))
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SceneConfig::load(path)?,
        None => SceneConfig::default(),
    };
    if let Some(media) = &args.media {
        config.media_dir = media.clone();
    }
    if args.no_portal {
        config.portal_enabled = false;
    }
    if args.print_config {
        println!("{}", config.to_ron_string()?);
        return Ok(());
    }

    let (meshes, textures) = asset_sources(&args, &mut config)?;
    let device = Rc::new(HeadlessDevice::new(args.width, args.height));
    let mut scene = PortalScene::new(device.clone(), meshes, textures, config);
    scene
        .init_geometry()
        .context("Failed to initialise the scene geometry")?;
    scene.init_scene().context("Failed to initialise the scene")?;

    let input = KeyboardState::holding(args.held.iter().map(String::as_str));
    let mut portal_draws = 0;
    let mut main_draws = 0;
    for frame in 0..args.frames {
        if scene.update_scene(args.dt, &input).is_some() {
            log::debug!("{}", scene.window_title());
        }
        if let Some(stats) = scene.render_scene() {
            portal_draws += stats.portal.map_or(0, |pass| pass.draws);
            main_draws += stats.main.draws;
            log::trace!("Frame {frame}: {stats:?}");
        }
    }

    log::info!(
        "{} frames presented: {} portal draws, {} main draws",
        device.present_count(),
        portal_draws,
        main_draws
    );
    if let Some(report) = scene.last_frame_report() {
        log::info!("Last report: {report}");
    }
    if device.hazard_count() > 0 {
        log::warn!(
            "{} draws sampled their own render target",
            device.hazard_count()
        );
    }

    scene.release_resources();
    Ok(())
}
