use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use shooter_input::{Action, Controls, PlayerState};
use shooter_kernel::{SimConfig, TickReport, World};
use shooter_render::{DebugTextRenderer, FrameBuffer, Renderer};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "shooter-cli", about = "Headless driver for the shooter scene")]
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
    /// Simulate the scene and print frame summaries
    Run {
        /// Number of ticks to simulate
        #[arg(short, long, default_value = "600")]
        ticks: u64,
        /// RNG seed
        #[arg(short, long, default_value = "42")]
        seed: u64,
        /// Request a fireball every N ticks (0 never fires)
        #[arg(short, long, default_value = "30")]
        fire_every: u64,
        /// Print a frame summary every N ticks
        #[arg(short, long, default_value = "100")]
        report_every: u64,
        /// YAML file overriding simulation parameters
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Run the same seed twice and compare the outcomes
    Replay {
        /// Number of ticks to simulate
        #[arg(short, long, default_value = "1000")]
        ticks: u64,
        /// RNG seed for deterministic replay
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },
}

/// Scripted player: turns slowly and fires on a fixed period.
struct Pilot {
    controls: Controls,
    player: PlayerState,
    fire_every: u64,
}

impl Pilot {
    fn new(fire_every: u64) -> Self {
        Self {
            controls: Controls::new(),
            player: PlayerState::default(),
            fire_every,
        }
    }

    fn update(&mut self, tick: u64) -> bool {
        let mut actions = vec![Action::Turn {
            yaw: 1.0,
            pitch: 0.0,
        }];
        if self.fire_every > 0 && tick % self.fire_every == 0 {
            actions.push(Action::Fire);
        }
        self.controls.update(&mut self.player, &actions, 1.0 / 60.0)
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = SimConfig::from_yaml_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    tracing::info!(path = %path.display(), "loaded config");
    Ok(config)
}

/// A world driven by a scripted pilot, reusing one frame buffer.
struct Session {
    world: World,
    pilot: Pilot,
    buffer: FrameBuffer,
}

impl Session {
    fn new(config: SimConfig, seed: u64, fire_every: u64) -> anyhow::Result<Self> {
        Ok(Self {
            world: World::from_config(config, seed)?,
            pilot: Pilot::new(fire_every),
            buffer: FrameBuffer::new(),
        })
    }

    fn step(&mut self) -> TickReport {
        let fire = self.pilot.update(self.world.tick());
        self.world.step(&self.pilot.player, fire, &mut self.buffer)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("shooter-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("kernel: {}", shooter_kernel::crate_info());
            println!("geom: {}", shooter_geom::crate_info());
            println!("render: {}", shooter_render::crate_info());
            println!("input: {}", shooter_input::crate_info());
            let creature = shooter_geom::creature();
            println!("creature: triangles={}", creature.triangle_count());
            let sphere = shooter_geom::uv_sphere(0.5, SimConfig::default().fireball_segments);
            println!(
                "fireball: triangles={}, texcoords={}",
                sphere.triangle_count(),
                sphere.texcoords.len()
            );
        }
        Commands::Run {
            ticks,
            seed,
            fire_every,
            report_every,
            config,
        } => {
            let config = load_config(config.as_ref())?;
            println!("Run: seed={seed}, ticks={ticks}, fire_every={fire_every}");

            let renderer = DebugTextRenderer::new();
            let mut session = Session::new(config, seed, fire_every)?;
            let mut hits = 0usize;
            for _ in 0..ticks {
                let report = session.step();
                if report.collision.is_some() {
                    hits += 1;
                }
                let last = report.tick + 1 == ticks;
                if last || (report_every > 0 && report.tick % report_every == 0) {
                    let frame = session.world.frame(&session.buffer, &report, &session.pilot.player);
                    print!("{}", renderer.render(&frame));
                    for event in session.world.drain_events() {
                        tracing::debug!(?event, "world event");
                    }
                }
            }

            let world = &session.world;
            println!(
                "Done: tick={}, targets={}, fireballs={}, hits={hits}",
                world.tick(),
                world.targets().len(),
                world.fireballs().len()
            );
        }
        Commands::Replay { ticks, seed } => {
            println!("Deterministic replay: seed={seed}, ticks={ticks}");

            let mut first = Session::new(SimConfig::default(), seed, 30)?;
            let mut second = Session::new(SimConfig::default(), seed, 30)?;
            let mut mismatch = None;
            for _ in 0..ticks {
                let a = first.step();
                let b = second.step();
                if a != b || first.buffer.vertex_data() != second.buffer.vertex_data() {
                    mismatch = Some(a.tick);
                    break;
                }
            }

            for (name, session) in [("Run 1", &first), ("Run 2", &second)] {
                println!(
                    "{name}: tick={}, targets={}, fireballs={}",
                    session.world.tick(),
                    session.world.targets().len(),
                    session.world.fireballs().len()
                );
            }
            match mismatch {
                None => println!("Match: OK"),
                Some(tick) => println!("Match: MISMATCH at tick {tick}"),
            }
        }
    }

    Ok(())
}
