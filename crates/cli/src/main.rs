mod scenario;

use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use clap::Parser;

use facefollow_core::control::follower::{FaceFollower, FollowerHandle};
use facefollow_core::control::infrastructure::dispatch_loop;
use facefollow_core::control::infrastructure::log_actuator::LogActuator;
use facefollow_core::perception::domain::selector::Selector;
use facefollow_core::shared::constants::DEFAULT_DISPATCH_INTERVAL_MS;
use facefollow_core::shared::target_slot::TargetSlot;

use crate::scenario::Scenario;

/// Replays a scripted detection scenario against the face-follow
/// controller and logs every command it would send to the vehicle.
#[derive(Parser)]
#[command(name = "facefollow")]
struct Cli {
    /// Scenario file (JSON); the built-in demo runs when omitted.
    scenario: Option<PathBuf>,

    /// Dispatch interval in milliseconds.
    #[arg(long, default_value_t = DEFAULT_DISPATCH_INTERVAL_MS)]
    interval_ms: u64,

    /// Print the built-in demo scenario as JSON and exit.
    #[arg(long)]
    print_demo: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.print_demo {
        println!("{}", serde_json::to_string_pretty(&Scenario::demo())?);
        return Ok(());
    }

    let scenario = match &cli.scenario {
        Some(path) => Scenario::load(path)?,
        None => Scenario::demo(),
    };
    validate(&cli, &scenario)?;

    let target = Arc::new(TargetSlot::new());
    let selector = Selector::new(scenario.geometry(), target.clone());
    let follower = FaceFollower::new(scenario.geometry(), target, Box::new(LogActuator::new()));
    let handle = FollowerHandle::new(follower);

    let interval = Duration::from_millis(cli.interval_ms);
    let (dispatch, cancelled) = dispatch_loop::spawn(handle.clone(), interval);

    log::info!(
        "replaying {} frames at {} ms cadence, dispatching every {} ms",
        scenario.frames.len(),
        scenario.frame_interval_ms,
        cli.interval_ms
    );

    let perception = spawn_perception(scenario, selector, handle.clone());
    perception
        .join()
        .map_err(|_| "perception thread panicked")?;

    // Let the dispatcher observe the final frame before shutting down.
    thread::sleep(interval);
    cancelled.store(true, std::sync::atomic::Ordering::Relaxed);
    dispatch.join().map_err(|_| "dispatch thread panicked")?;

    let last = handle.last_command();
    log::info!(
        "scenario finished: tracking={}, last command yaw={} vertical={} forward_back={}",
        handle.is_tracking(),
        last.yaw,
        last.vertical,
        last.forward_back
    );
    Ok(())
}

/// Plays the scenario as the perception activity: one `observe_frame`
/// per scripted frame at the scenario's own cadence, with toggle markers
/// applied before the frame they annotate.
fn spawn_perception(
    scenario: Scenario,
    selector: Selector,
    handle: FollowerHandle,
) -> thread::JoinHandle<()> {
    let frame_interval = Duration::from_millis(scenario.frame_interval_ms);
    thread::spawn(move || {
        for frame in &scenario.frames {
            if frame.toggle {
                handle.toggle();
            }
            selector.observe_frame(&frame.to_detections());
            thread::sleep(frame_interval);
        }
    })
}

fn validate(cli: &Cli, scenario: &Scenario) -> Result<(), Box<dyn std::error::Error>> {
    if cli.interval_ms == 0 {
        return Err("Dispatch interval must be at least 1 ms".into());
    }
    if scenario.frame_width == 0 || scenario.frame_height == 0 {
        return Err(format!(
            "Scenario frame size must be non-zero, got {}x{}",
            scenario.frame_width, scenario.frame_height
        )
        .into());
    }
    if scenario.frames.is_empty() {
        return Err("Scenario has no frames".into());
    }
    Ok(())
}
