mod render;

use anyhow::{anyhow, Context as _, Result};
use clap::Parser;
use glutin_window::GlutinWindow;
use log::{error, info, warn};
use opengl_graphics::{GlGraphics, GlyphCache, OpenGL, TextureSettings};
use piston::event_loop::{EventLoop, EventSettings, Events};
use piston::input::{RenderEvent, UpdateEvent};
use piston::window::WindowSettings;

use std::path::PathBuf;

use solar_orbit::view::{self, Projection, SCREEN_DIMS};
use solar_orbit::{Body, ForceEvaluation, ScenarioConfig, Simulation, TIMESTEP};

use render::Scene;

const FPS: u64 = 60;

#[derive(Parser, Debug)]
#[command(name = "solar_orbit")]
#[command(about = "Sun and planets under Newtonian gravity, one day per frame")]
struct Args {
    /// Scenario YAML file (defaults to the built-in inner solar system)
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// TrueType font for the distance labels; labels are skipped without one
    #[arg(long)]
    font: Option<PathBuf>,

    /// Keep at most this many points per orbit trail
    #[arg(long)]
    trail_limit: Option<usize>,

    /// Advance bodies against the live collection instead of a snapshot
    #[arg(long)]
    sequential: bool,

    /// Run this many steps without opening a window and log the result
    #[arg(long)]
    headless: Option<u64>,
}

fn load_scenario(args: &Args) -> Result<ScenarioConfig> {
    let mut cfg = match &args.scenario {
        Some(path) => ScenarioConfig::load(path)
            .with_context(|| format!("failed to load scenario {}", path.display()))?,
        None => ScenarioConfig::inner_solar_system(),
    };

    if args.trail_limit.is_some() {
        cfg.trail_limit = args.trail_limit;
    }
    if args.sequential {
        cfg.force_evaluation = ForceEvaluation::Sequential;
    }

    Ok(cfg)
}

fn run_headless(mut sim: Simulation, steps: u64) -> Result<()> {
    sim.run(steps).context("simulation step failed")?;

    info!("{} steps, {:.1} simulated days", sim.steps(), sim.elapsed() / TIMESTEP);
    for planet in sim.bodies() {
        let pos = planet.position();
        if planet.is_anchor() {
            info!("{:>10}: ({:.4e}, {:.4e}) m", planet.name(), pos.x, pos.y);
        } else {
            info!(
                "{:>10}: ({:.4e}, {:.4e}) m, {} from anchor",
                planet.name(),
                pos.x,
                pos.y,
                view::format_distance_km(planet.distance_to_anchor())
            );
        }
    }
    Ok(())
}

fn run_window(mut sim: Simulation, font: Option<PathBuf>) -> Result<()> {
    let opengl = OpenGL::V3_2;
    let mut window: GlutinWindow = WindowSettings::new("Planet Simulation", [SCREEN_DIMS.0, SCREEN_DIMS.1])
        .graphics_api(opengl)
        .exit_on_esc(true)
        .build()
        .map_err(|e| anyhow!("failed to create window: {}", e))?;
    let mut gl = GlGraphics::new(opengl);

    let glyphs = match font {
        Some(path) => match GlyphCache::new(&path, (), TextureSettings::new()) {
            Ok(glyphs) => Some(glyphs),
            Err(err) => {
                warn!("could not load font {}: {}, distance labels disabled", path.display(), err);
                None
            }
        },
        None => None,
    };
    let mut scene = Scene {
        projection: Projection::default(),
        glyphs,
    };

    // Pacing is ours: one step per update, at most FPS of each
    let mut events = Events::new(EventSettings::new().ups(FPS).max_fps(FPS));
    while let Some(e) = events.next(&mut window) {
        if let Some(args) = e.render_args() {
            gl.draw(args.viewport(), |c, g| scene.draw(&sim, &c, g));
        }

        if e.update_args().is_some() {
            if let Err(err) = sim.step() {
                error!("step {} failed: {}", sim.steps() + 1, err);
                return Err(err).context("simulation step failed");
            }
        }
    }

    info!("window closed after {} steps", sim.steps());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let cfg = load_scenario(&args)?;
    let sim = Simulation::from_config(&cfg).context("invalid scenario")?;

    match args.headless {
        Some(steps) => run_headless(sim, steps),
        None => run_window(sim, args.font),
    }
}
