//! Bounce Sim entry point
//!
//! Composition root: builds the two falling boxes, wires the engine to a
//! frame slot, runs for a fixed amount of simulated time and prints the last
//! frame as JSON.
//!
//! Usage: `bounce-sim [CONFIG.json] [SECONDS]`

use std::error::Error;

use glam::DVec2;

use bounce_sim::math::ORIGIN;
use bounce_sim::renderer;
use bounce_sim::sim::{Engine, EngineConfig, FixedStepper, FrameSlot, WorldBuilder};

/// Arena width used for the floor band
const ARENA_WIDTH: f64 = 800.0;
/// Simulated seconds when none are given
const DEFAULT_SECONDS: f64 = 3.0;

fn main() {
    env_logger::init();
    log::info!("Bounce Sim starting...");

    if let Err(err) = run() {
        log::error!("{err}");
        eprintln!("bounce-sim: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    let seconds: f64 = match args.next() {
        Some(s) => s.parse()?,
        None => DEFAULT_SECONDS,
    };

    let engine = Engine::new(config)?;

    let mut builder = WorldBuilder::new(&config);
    let box_size = DVec2::splat(10.0);
    builder.add_box(DVec2::new(0.0, 300.0), ORIGIN, box_size);
    builder.add_box(DVec2::new(0.0, 450.0), ORIGIN, box_size);
    let mut world = builder.build()?;
    log::info!("World built with {} bodies", world.len());

    let slot = FrameSlot::new(world.snapshot());
    let mut stepper = FixedStepper::new().publishing_to(slot.clone());

    let ticks = (seconds.max(0.0) / config.dt).round() as u64;
    let mut impacts = 0;
    for _ in 0..ticks {
        // Feed exactly one interval per iteration
        for report in stepper.advance(&engine, &mut world, config.dt) {
            for outcome in &report.outcomes {
                for impact in &outcome.impacts {
                    log::info!(
                        "tick {}: body {} bounced at x={:.3} with speed {:.3}",
                        report.tick,
                        outcome.id,
                        impact.position.x,
                        impact.velocity_in.length()
                    );
                }
            }
            impacts += report.impact_count();
            report.into_result()?;
        }
    }

    let frame = slot.latest();
    let vertices = renderer::frame_vertices(&frame, config.ground_y, ARENA_WIDTH);
    log::info!(
        "Finished at tick {} after {} impacts ({} vertices, {} bytes)",
        frame.tick,
        impacts,
        vertices.len(),
        renderer::Vertex::as_bytes(&vertices).len()
    );

    println!("{}", serde_json::to_string_pretty(&*frame)?);
    Ok(())
}
