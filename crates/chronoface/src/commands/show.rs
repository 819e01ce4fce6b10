use chrono::DateTime;
use chronoface_core::{FixedClock, SystemClock, TimeSource, log_debug, snapshot};

use super::face;
use crate::ShowArgs;

/// Prints the watchface once, for now or for `--at`.
pub fn execute(args: &ShowArgs) {
    let config = super::load_config();
    let offset = args.clock.offset.unwrap_or(config.clock.offset_hours);

    let output = match &args.at {
        Some(at) => match DateTime::parse_from_rfc3339(at) {
            Ok(instant) => render(&FixedClock::new(instant), offset, args.json),
            Err(e) => {
                eprintln!("Error: invalid --at timestamp {at:?}: {e}");
                std::process::exit(1);
            }
        },
        None => render(&SystemClock, offset, args.json),
    };

    match output {
        Ok(text) => print!("{text}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn render<S: TimeSource>(source: &S, offset: i32, json: bool) -> Result<String, String> {
    let clock = snapshot(source, offset);
    log_debug!("show: {:?} (offset {offset:+})", clock.lines());
    if json {
        serde_json::to_string_pretty(&clock)
            .map(|s| s + "\n")
            .map_err(|e| format!("could not encode JSON: {e}"))
    } else {
        Ok(face::render(&clock))
    }
}
