mod script;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lumen_assets::ResourceCache;
use lumen_camera::Camera;
use lumen_input::{Action, InputController, apply};
use lumen_math::Vec3;
use lumen_render::{
    DEFAULT_ASPECT, DEFAULT_FAR, DEFAULT_NEAR, DebugTextRenderer, FrameBuilder, Renderer,
};
use lumen_scene::{Scene, SceneDescription};
use lumen_tools::SceneInspector;
use script::{InputEvent, scripted_events};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lumen-cli", about = "Headless driver for the lumen renderer")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Drive the active camera with scripted input and print frame reports
    Run {
        /// Number of frames to simulate
        #[arg(short, long, default_value = "8")]
        frames: u64,
        /// Seconds per frame
        #[arg(long, default_value = "0.016")]
        dt: f32,
        /// Scene description (YAML); the built-in demo scene when omitted
        #[arg(short, long)]
        scene: Option<PathBuf>,
        /// Print one JSON object per frame instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print a summary of a scene description file
    Inspect {
        /// Scene description (YAML)
        path: PathBuf,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the demo view, projection and cube model matrices
    Matrices,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .init();

    match cli.command {
        Commands::Info => {
            println!("lumen-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("render: {}", lumen_render::crate_info());
            println!("tools: {}", lumen_tools::crate_info());
            let cam = Camera::default();
            println!(
                "camera defaults: yaw={} pitch={} speed={} sensitivity={} zoom={}",
                cam.yaw(),
                cam.pitch(),
                cam.movement_speed,
                cam.mouse_sensitivity,
                cam.zoom()
            );
        }
        Commands::Run {
            frames,
            dt,
            scene,
            json,
        } => run(frames, dt, scene.as_deref(), json)?,
        Commands::Inspect { path, json } => inspect(&path, json)?,
        Commands::Matrices => matrices(),
    }

    Ok(())
}

fn load_scene(path: Option<&Path>, cache: &mut ResourceCache) -> Result<Scene> {
    let desc = match path {
        Some(p) => SceneDescription::load(p)
            .with_context(|| format!("loading scene {}", p.display()))?,
        None => SceneDescription::demo(),
    };
    desc.instantiate(cache).context("building scene")
}

fn run(frames: u64, dt: f32, scene_path: Option<&Path>, json: bool) -> Result<()> {
    let mut cache = ResourceCache::new();
    let mut scene = load_scene(scene_path, &mut cache)?;
    let builder = FrameBuilder::new();
    let renderer = DebugTextRenderer::new();
    let mut input = InputController::new();

    info!(frames, dt, meshes = cache.mesh_count(), "run started");

    for n in 0..frames {
        let mut actions: Vec<Action> = Vec::new();
        for event in scripted_events(n, frames) {
            let action = match event {
                InputEvent::Key(key, pressed) => input.key_event(key, pressed),
                InputEvent::Cursor(x, y) => input.cursor_moved(x, y),
                InputEvent::Scroll(dy) => input.scrolled(dy),
            };
            actions.extend(action);
        }
        actions.extend(input.held_actions());

        let quit = actions.contains(&Action::Quit);
        if let Some(mut camera) = scene.active_camera_mut() {
            for action in actions {
                apply(action, &mut camera, dt);
            }
        }

        let frame = builder
            .build(&scene, n)
            .context("scene has no active camera")?;
        if json {
            println!("{}", serde_json::to_string(&frame)?);
        } else {
            print!("{}", renderer.render(&frame));
        }

        if quit {
            info!(frame = n, "quit requested");
            break;
        }
    }

    if let Some(cam) = scene.active_camera() {
        info!(
            position = %cam.position,
            yaw = cam.yaw(),
            pitch = cam.pitch(),
            zoom = cam.zoom(),
            "run finished"
        );
    }
    Ok(())
}

fn inspect(path: &Path, json: bool) -> Result<()> {
    let scene = load_scene(Some(path), &mut ResourceCache::new())?;
    let summary = SceneInspector::summary(&scene);
    let infos: Vec<_> = SceneInspector::list_entities(&scene)
        .into_iter()
        .filter_map(|id| SceneInspector::inspect_entity(&scene, id))
        .collect();

    if json {
        let doc = serde_json::json!({ "summary": summary, "entities": infos });
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        println!("{summary}");
        for info in &infos {
            println!("  {info}");
        }
    }
    Ok(())
}

fn matrices() {
    let camera = Camera::new(Vec3::new(0.0, 0.0, 5.0));
    println!("view:\n{}", camera.view_matrix());
    println!(
        "projection (fov={}, aspect={:.3}):\n{}",
        camera.zoom(),
        DEFAULT_ASPECT,
        camera.projection_matrix(DEFAULT_ASPECT, DEFAULT_NEAR, DEFAULT_FAR)
    );

    // translation then rotation_xyz; demo cubes are unscaled
    for (i, model) in SceneDescription::demo().models.iter().enumerate() {
        let t = &model.transform;
        println!("model[{i}] at {}:\n{}", t.position, t.model_matrix());
    }
}
