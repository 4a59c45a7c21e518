//! Cannon Range entry point
//!
//! Headless driver: feeds a timed input script through the fixed-rate tick
//! loop and reports the result.
//!
//! Usage: `cannon-range [SETTINGS_JSON] [SCRIPT_JSON]`

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::Path;
    use std::thread;
    use std::time::Instant;

    use cannon_range::consts::TARGET_COUNT;
    use cannon_range::sim::{GameSession, TickInput, tick};
    use cannon_range::{InputScript, Settings};

    /// How a run finished
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Stop {
        Quit,
        Cleared,
        FrameLimit,
    }

    pub fn run() {
        let args: Vec<String> = std::env::args().skip(1).collect();
        let settings = Settings::load_or_default(args.first().map(Path::new));
        let script = InputScript::load_or_demo(args.get(1).map(Path::new));
        if let Some(last) = script.last_frame() {
            log::info!("Script: {} events through frame {}", script.steps.len(), last);
        }

        log::info!(
            "Cannon Range starting: {} Hz, {} clock",
            settings.frame_rate_hz,
            if settings.real_time { "wall" } else { "synthetic" }
        );

        let mut session = GameSession::new();
        let stop = drive(&mut session, &settings, &script);

        let outcome = match stop {
            Stop::Quit => "quit",
            Stop::Cleared => "range cleared",
            Stop::FrameLimit => "frame limit",
        };
        println!(
            "Score: {}/{} in {} shots after {} ticks ({})",
            session.score, TARGET_COUNT, session.shots_fired, session.time_ticks, outcome
        );
    }

    fn drive(session: &mut GameSession, settings: &Settings, script: &InputScript) -> Stop {
        let interval = settings.frame_interval();
        let start = Instant::now();
        let mut frame: u64 = 0;

        loop {
            if settings.max_frames > 0 && frame >= settings.max_frames {
                log::info!("Stopping at frame limit ({})", settings.max_frames);
                return Stop::FrameLimit;
            }

            let now = if settings.real_time {
                start.elapsed().as_secs_f64()
            } else {
                frame as f64 * interval.as_secs_f64()
            };

            let input = TickInput::new(script.events_at(frame));
            let out = tick(session, &input, now);

            for event in &out.events {
                log::debug!("frame {}: {:?}", frame, event);
            }
            if settings.log_snapshots {
                match out.snapshot.to_json() {
                    Ok(json) => log::trace!("{}", json),
                    Err(e) => log::warn!("Snapshot serialization failed: {}", e),
                }
            }

            if session.quit_requested {
                return Stop::Quit;
            }
            // Let the winning ball finish its flight before stopping
            if session.over && session.projectile.is_idle() {
                return Stop::Cleared;
            }

            frame += 1;
            if settings.real_time {
                let deadline = start + interval.mul_f64(frame as f64);
                let now = Instant::now();
                if deadline > now {
                    thread::sleep(deadline - now);
                }
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No headless driver on the web; embedders call `cannon_range::sim::tick` directly
}
