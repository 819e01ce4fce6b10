//! Terminal rendering of the watchface: the four labels centred in a
//! small frame.

use chronoface_core::FormattedClock;

/// Inner width of the frame, wide enough for the longest label.
const FACE_WIDTH: usize = 17;

/// ANSI sequence that clears the screen and homes the cursor.
pub const CLEAR: &str = "\x1b[2J\x1b[H";

/// Renders the face as a framed, multi-line string.
pub fn render(clock: &FormattedClock) -> String {
    let border = format!("+{}+", "-".repeat(FACE_WIDTH));
    let mut out = String::with_capacity((FACE_WIDTH + 3) * 6);
    out.push_str(&border);
    out.push('\n');
    for line in clock.lines() {
        out.push('|');
        out.push_str(&center(line, FACE_WIDTH));
        out.push_str("|\n");
    }
    out.push_str(&border);
    out.push('\n');
    out
}

fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let left = width.saturating_sub(len) / 2;
    let right = width.saturating_sub(len + left);
    format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
}
