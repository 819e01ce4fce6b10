pub mod doctor;
pub mod face;
pub mod init;
pub mod show;
pub mod watch;

use chronoface_core::Config;

/// Loads the config and starts file logging if enabled.
fn load_config() -> Config {
    let config = chronoface_core::config::load();
    chronoface_core::log::init(&config.logging);
    config
}
