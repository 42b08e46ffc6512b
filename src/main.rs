//! Ballpit entry point
//!
//! Headless frame driver: feeds scripted clicks into the simulation, runs a fixed
//! number of frames and reports the final state. A windowed host would call the
//! same `tick` once per displayed frame and draw `renderer::extract_instances`.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use clap::Parser;
    use glam::Vec2;

    use ballpit::renderer::extract_instances;
    use ballpit::sim::{FrameInput, FrameReport, SimState, tick};
    use ballpit::Params;

    /// Run the circle simulation without a window
    #[derive(Debug, Parser)]
    #[command(name = "ballpit", version, about)]
    pub struct Args {
        /// JSON params file (missing fields use defaults)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Frames to simulate
        #[arg(long, default_value_t = 600)]
        frames: u64,

        /// RNG seed (defaults to the current time)
        #[arg(long)]
        seed: Option<u64>,

        /// Click at x,y on the first frame (repeatable)
        #[arg(long = "click", value_parser = parse_point)]
        clicks: Vec<Vec2>,

        /// Print the final bodies as JSON
        #[arg(long)]
        dump: bool,

        /// Print the effective params as JSON and exit
        #[arg(long)]
        print_params: bool,
    }

    fn parse_point(s: &str) -> Result<Vec2, String> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| format!("expected x,y but got {s:?}"))?;
        let x: f32 = x.trim().parse().map_err(|e| format!("bad x in {s:?}: {e}"))?;
        let y: f32 = y.trim().parse().map_err(|e| format!("bad y in {s:?}: {e}"))?;
        Ok(Vec2::new(x, y))
    }

    fn time_seed() -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    }

    pub fn run() -> Result<()> {
        env_logger::init();
        let args = Args::parse();

        let params = match &args.config {
            Some(path) => Params::load(path),
            None => Params::default(),
        };

        if args.print_params {
            println!("{}", params.to_json());
            return Ok(());
        }

        let seed = args.seed.unwrap_or_else(time_seed);
        log::info!("Ballpit (headless) starting, seed={seed}, frames={}", args.frames);

        let mut state = SimState::new(seed, params);
        let mut totals = FrameReport::default();

        for frame in 0..args.frames {
            let input = if frame == 0 {
                FrameInput {
                    spawns: args.clicks.clone(),
                    close: false,
                }
            } else {
                FrameInput::default()
            };

            let report = tick(&mut state, &input);
            totals.spawned += report.spawned;
            totals.rejected += report.rejected;
            totals.bounds.floor_contacts += report.bounds.floor_contacts;
            totals.collisions.contacts += report.collisions.contacts;
            totals.collisions.impulses += report.collisions.impulses;
            totals.collisions.degenerate += report.collisions.degenerate;
        }
        tick(&mut state, &FrameInput::close());

        log::info!(
            "Done: {} bodies, kinetic energy {:.3}, {} contacts, {} impulses, {} coincident pairs",
            state.store.len(),
            state.kinetic_energy(),
            totals.collisions.contacts,
            totals.collisions.impulses,
            totals.collisions.degenerate
        );
        if totals.rejected > 0 {
            log::warn!("{} spawn requests rejected by capacity policy", totals.rejected);
        }

        if args.dump {
            let json = serde_json::to_string_pretty(state.store.bodies())
                .context("failed to serialize bodies")?;
            println!("{json}");
        } else {
            for (i, inst) in extract_instances(&state.store).iter().enumerate() {
                println!(
                    "{i:>4}  center=({:>7.2}, {:>7.2})  r={:<5}  rgba={:?}",
                    inst.center[0], inst.center[1], inst.radius, inst.color
                );
            }
        }

        Ok(())
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Hosts embed the library directly on the web
}
