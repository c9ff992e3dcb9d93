use std::io::{self, Write};

/// Smallest accepted image size (cells per side).
pub const MIN_IMAGE_SIZE: u32 = 15;
/// Largest accepted image size (cells per side).
pub const MAX_IMAGE_SIZE: u32 = 35;
pub const DEFAULT_IMAGE_SIZE: u32 = 20;

/// ANSI escape sequences used by the renderer and the formatter.
pub mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const PURPLE: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";
    pub const WHITE: &str = "\x1b[37m";
    pub const BOLD: &str = "\x1b[1m";

    pub const HIDE_CURSOR: &str = "\x1b[?25l";
    pub const SHOW_CURSOR: &str = "\x1b[?25h";
}

pub fn clamp_image_size(requested: u32) -> u32 {
    requested.clamp(MIN_IMAGE_SIZE, MAX_IMAGE_SIZE)
}

/// Number of terminal columns `line` occupies once printed.
///
/// CSI sequences (`ESC [ ... final`) and OSC sequences (`ESC ] ... ST` or
/// `... BEL`) take no space; every other char counts as one column.
pub fn visible_width(line: &str) -> usize {
    let mut chars = line.chars().peekable();
    let mut width = 0;

    while let Some(c) = chars.next() {
        if c != '\x1b' {
            width += 1;
            continue;
        }

        match chars.next() {
            Some('[') => {
                for c in chars.by_ref() {
                    if ('\x40'..='\x7e').contains(&c) {
                        break;
                    }
                }
            }
            Some(']') => {
                while let Some(c) = chars.next() {
                    if c == '\x07' {
                        break;
                    }
                    if c == '\x1b' && chars.peek() == Some(&'\\') {
                        chars.next();
                        break;
                    }
                }
            }
            _ => {}
        }
    }

    width
}

/// Hides the terminal cursor for as long as the guard lives.
///
/// The cursor is shown again when the guard is dropped, which covers early
/// returns, errors and a cancelled future alike.
pub struct CursorGuard;

impl CursorGuard {
    pub fn hide() -> Self {
        let mut stdout = io::stdout();
        let _ = write!(stdout, "{}", ansi::HIDE_CURSOR);
        let _ = stdout.flush();
        CursorGuard
    }
}

impl Drop for CursorGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = write!(stdout, "{}", ansi::SHOW_CURSOR);
        let _ = stdout.flush();
    }
}
