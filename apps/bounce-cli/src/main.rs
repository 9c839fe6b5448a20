use clap::{Parser, Subcommand};
use serde::Serialize;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use bounce_kernel::{FrameClock, Scene};
use bounce_render::{DebugTextRenderer, FrameDriver};

mod host;

use host::SimulatedHost;

#[derive(Parser)]
#[command(name = "bounce-cli", about = "Run the bounce simulation without a window")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and the demo scene layout
    Info,
    /// Simulate the demo scene at a fixed time step
    Run {
        /// Number of frames to simulate
        #[arg(short, long, default_value = "600")]
        frames: u64,
        /// Seconds between frames
        #[arg(long, default_value = "0.0166667")]
        dt: f64,
        /// Cap a single frame's time step, in seconds
        #[arg(long)]
        max_dt: Option<f64>,
        /// Print every Nth frame
        #[arg(short, long, default_value = "60")]
        every: u64,
        /// Print the final scene as JSON instead of frame listings
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct RunSummary<'a> {
    frames: u64,
    tick: u64,
    elapsed: f64,
    scene: &'a Scene,
}

fn seconds(value: f64, what: &str) -> anyhow::Result<Duration> {
    Duration::try_from_secs_f64(value)
        .map_err(|_| anyhow::anyhow!("{what} must be a finite, non-negative number of seconds"))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Info => {
            let scene = Scene::demo()?;
            println!("bounce-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("render: {}", bounce_render::crate_info());
            println!("demo scene: {} shapes", scene.len());
            for (i, shape) in scene.shapes().iter().enumerate() {
                let p = shape.position();
                let v = shape.velocity();
                println!(
                    "  [{i}] verts={} pos=({:.2}, {:.2}) vel=({:.2}, {:.2})",
                    shape.geometry().len(),
                    p.x,
                    p.y,
                    v.x,
                    v.y
                );
            }
        }
        Commands::Run {
            frames,
            dt,
            max_dt,
            every,
            json,
        } => {
            let step = seconds(dt, "--dt")?;
            let clock = match max_dt {
                Some(max) => FrameClock::with_max_dt(seconds(max, "--max-dt")?),
                None => FrameClock::new(),
            };

            tracing::info!(frames, dt, "simulating demo scene");

            let mut driver = FrameDriver::with_clock(Scene::demo()?, clock);
            let mut host = SimulatedHost::new(frames, step, every);
            let presented = driver.run(&mut host, &mut DebugTextRenderer::new());

            if json {
                let summary = RunSummary {
                    frames: presented,
                    tick: driver.scene().tick(),
                    elapsed: driver.scene().elapsed(),
                    scene: driver.scene(),
                };
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                for frame in host.take_kept() {
                    print!("{frame}");
                }
            }
        }
    }

    Ok(())
}
