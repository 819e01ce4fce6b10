/// Generates the default `config.toml` contents with explanatory comments.
///
/// This is used by `chronoface init` to create a starter config file that
/// users can immediately edit.
pub fn generate_config() -> String {
    r##"# chronoface configuration
# Location: ~/.config/chronoface/config.toml

[clock]
# Whole hours added to UTC for the foreign time shown at the bottom.
# Any integer works (e.g. -5, 8, 30); the hour wraps around the day.
# Minute offsets such as +5:30 are not supported.
offset_hours = 8

[refresh]
# How often `chronoface watch` redraws: "minute" or "second".
granularity = "minute"

[logging]
# Enable file logging to ~/.config/chronoface/logs/chronoface.log.
enabled = false
# Minimum log level: "debug", "info", "warn", or "error".
level = "info"
# Maximum log file size in MB before rotation.
max_file_mb = 10
"##
    .to_string()
}
