//! Centralized warning and prompt messages for CLI output.

use std::io::Write;

use super::quiet;
use crate::pass::strength;

const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Yellow warning on stderr; suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Red error on stderr; always shown.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

pub fn clipboard_copied(count: usize) {
    if !quiet::enabled() {
        if count == 1 {
            eprintln!("Password copied to clipboard!");
        } else {
            eprintln!("{count} passwords copied to clipboard!");
        }
    }
}

/// Ask whether to print instead when the clipboard is unavailable.
/// Quiet or non-interactive runs fall back silently.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true;
    }

    eprintln!("\nAborted.");
    false
}

pub fn passwords_written(count: usize, path: &str) {
    if !quiet::enabled() {
        eprintln!("{count} password(s) \u{2192} {path}");
    }
}

pub fn settings_saved(path: &str) {
    if !quiet::enabled() {
        eprintln!("Settings saved \u{2192} {path}");
    }
}

/// Entropy summary for a batch, e.g. `Entropy: 71.3 bits (Strong)`.
pub fn entropy(min_bits: f64, max_bits: f64) {
    if quiet::enabled() {
        return;
    }
    if (max_bits - min_bits).abs() < 0.05 {
        eprintln!(
            "Entropy: {:.1} bits ({})",
            min_bits,
            strength::label(min_bits)
        );
    } else {
        eprintln!(
            "Entropy: {:.1}-{:.1} bits ({} to {})",
            min_bits,
            max_bits,
            strength::label(min_bits),
            strength::label(max_bits)
        );
    }
}

pub fn seeded_warning() {
    warn("Warning: --seed output is reproducible by anyone who knows the seed.");
}
