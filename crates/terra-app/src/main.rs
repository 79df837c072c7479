//! The `terra` binary: runs the globe headless, flies to the marker once
//! the scene has faded in, and exits when the flight completes.

use std::time::Duration;

use chrono::Utc;
use clap::Parser;
use terra_app::{AppError, FrameLoop, PlatformDirs, TerraApp, load_config};
use terra_config::CliArgs;
use tracing::{error, info, warn};

/// Pause between headless frames, roughly 60 Hz.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

fn main() {
    let args = CliArgs::parse();
    if let Err(err) = run(&args) {
        error!(%err, "terra failed");
        eprintln!("terra: {err}");
        std::process::exit(1);
    }
}

fn run(args: &CliArgs) -> Result<(), AppError> {
    let dirs = PlatformDirs::resolve_and_create(args.config.as_deref())?;
    let loaded = load_config(&dirs.config_dir, args)?;
    let config = loaded.config.clone();

    terra_log::init_logging(Some(&dirs.log_dir), cfg!(debug_assertions), Some(&config));
    loaded.log_source();
    info!(
        logs = %dirs.log_dir.display(),
        time_scale = config.globe.time_scale,
        "terra starting"
    );

    let mut app = TerraApp::new(&config, Utc::now());
    match (args.lat, args.lon) {
        (Some(lat), Some(lon)) => app.relocate_marker(lat, lon),
        (None, None) => {}
        _ => warn!("both --lat and --lon are needed to relocate the marker, keeping default"),
    }

    let mut frame_loop = FrameLoop::new();
    let mut flight_requested = false;

    loop {
        let frame = frame_loop.tick();
        let report = app.step(Utc::now(), frame.delta);

        // Nothing to load headless: textures are ready after the first frame.
        if frame.frame == 0 {
            app.set_loading(false);
        }

        if !flight_requested && report.gain >= 1.0 {
            app.request_marker_flight();
            flight_requested = true;
        }

        if report.pilot.arrived {
            info!(camera = %report.camera.position, "arrived at marker");
        }

        if let Some(max_frames) = args.frames {
            if frame_loop.frame_count() >= max_frames {
                info!(frames = max_frames, "frame limit reached");
                break;
            }
        } else if report.pilot.completed {
            info!(
                frames = frame_loop.frame_count(),
                elapsed = frame_loop.elapsed(),
                "flight complete"
            );
            break;
        }

        std::thread::sleep(FRAME_INTERVAL);
    }

    Ok(())
}
