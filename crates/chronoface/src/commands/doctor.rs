use chronoface_core::{Config, SystemClock, config, log, snapshot};

/// ANSI escape helpers for doctor output.
const OK: &str = "\x1b[32m[ok]\x1b[0m";
const WARN: &str = "\x1b[33m[warn]\x1b[0m";
const FAIL: &str = "\x1b[31m[fail]\x1b[0m";

pub fn execute() {
    println!();
    check_config_dir();
    let config = check_config_file();
    check_offset(&config);
    check_logging(&config);
    println!();
}

fn check_config_dir() {
    match config::config_dir() {
        Some(dir) if dir.is_dir() => {
            println!("  {OK} Config directory exists ({})", dir.display());
        }
        Some(dir) => {
            println!(
                "  {WARN} Config directory missing ({}); run `chronoface init`",
                dir.display()
            );
        }
        None => {
            println!("  {FAIL} Could not determine home directory");
        }
    }
}

/// Reports on `config.toml` and returns the config that will be used.
fn check_config_file() -> Config {
    let Some(path) = config::config_path() else {
        println!("  {FAIL} Could not determine config path");
        return Config::default();
    };
    if !path.exists() {
        println!("  {WARN} config.toml not found (using defaults)");
        return Config::default();
    }
    match config::try_load() {
        Ok(config) => {
            println!("  {OK} config.toml is valid");
            config
        }
        Err(e) => {
            println!("  {FAIL} config.toml: {e}");
            Config::default()
        }
    }
}

fn check_offset(config: &Config) {
    let offset = config.clock.offset_hours;
    let clock = snapshot(&SystemClock, offset);
    if (-12..=14).contains(&offset) {
        println!(
            "  {OK} Foreign offset UTC{offset:+} (now {})",
            clock.foreign_time()
        );
    } else {
        println!(
            "  {WARN} Foreign offset UTC{offset:+} is outside real-world zones; it wraps to {}",
            clock.foreign_time()
        );
    }
}

fn check_logging(config: &Config) {
    if !config.logging.enabled {
        println!("  {OK} File logging disabled");
        return;
    }
    match log::log_path() {
        Some(path) => println!(
            "  {OK} Logging at level {:?} to {}",
            log::Level::parse(&config.logging.level),
            path.display()
        ),
        None => println!("  {FAIL} Logging enabled but no log path could be determined"),
    }
}
