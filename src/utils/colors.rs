/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const RED: &str = "\x1b[31m";

/// White-on-red, reserved for the offending applied cell.
pub const WHITE_ON_RED: &str = "\x1b[41;97m";

/// Wash applied to every cell of a flagged row.
pub fn flag_row(s: &str) -> String {
    format!("{RED}{s}{RESET}")
}

/// Stronger paint for the applied cell that failed its boundary check.
pub fn flag_cell(s: &str) -> String {
    format!("{WHITE_ON_RED}{BOLD}{s}{RESET}")
}
