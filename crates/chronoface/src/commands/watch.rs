use std::io::{self, ErrorKind, IsTerminal, Write};
use std::sync::mpsc;
use std::thread;

use chrono::Local;
use chronoface_core::{Granularity, SystemClock, log_info, snapshot};

use super::face;
use crate::WatchArgs;

/// Messages from the tick thread to the redraw loop.
enum WatchMsg {
    Tick,
}

/// Redraws the face on every boundary until interrupted or until
/// `--ticks` redraws have happened.
pub fn execute(args: &WatchArgs) {
    let config = super::load_config();
    let offset = args.clock.offset.unwrap_or(config.clock.offset_hours);
    let granularity = match &args.granularity {
        Some(name) => match Granularity::try_from(name.clone()) {
            Ok(g) => g,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
        None => config.refresh.granularity,
    };

    log_info!("watch: offset {offset:+}, granularity {granularity:?}");

    let clear = io::stdout().is_terminal();
    if !redraw(offset, clear) || args.ticks == Some(0) {
        return;
    }

    let (tx, rx) = mpsc::channel();
    spawn_tick_thread(tx, granularity);

    let mut redraws = 0u64;
    for msg in &rx {
        match msg {
            WatchMsg::Tick => {
                if !redraw(offset, clear) {
                    break;
                }
                redraws += 1;
            }
        }
        if args.ticks.is_some_and(|max| redraws >= max) {
            break;
        }
    }
}

/// Draws the face and reports whether watching should continue.
///
/// A closed stdout (e.g. `chronoface watch | head`) ends the watch
/// quietly; any other write error exits with status 1.
fn redraw(offset: i32, clear: bool) -> bool {
    match draw(&mut io::stdout().lock(), offset, clear) {
        Ok(()) => true,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => {
            log_info!("watch: stdout closed, stopping");
            false
        }
        Err(e) => {
            eprintln!("Error: could not write to stdout: {e}");
            std::process::exit(1);
        }
    }
}

/// Takes one snapshot and writes the face to `out`.
fn draw(out: &mut impl Write, offset: i32, clear: bool) -> io::Result<()> {
    let text = face::render(&snapshot(&SystemClock, offset));
    if clear {
        out.write_all(face::CLEAR.as_bytes())?;
    }
    out.write_all(text.as_bytes())?;
    out.flush()
}

/// Spawns a thread that sends a tick on every minute or second boundary.
///
/// The thread ends on its first send after the receiver is gone.
fn spawn_tick_thread(tx: mpsc::Sender<WatchMsg>, granularity: Granularity) {
    thread::spawn(move || {
        loop {
            let wait = chronoface_core::schedule::until_next_tick(&Local::now(), granularity);
            thread::sleep(wait);
            if tx.send(WatchMsg::Tick).is_err() {
                break;
            }
        }
    });
}
