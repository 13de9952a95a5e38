//! `-q` handling.
//!
//! Quiet mode drops status lines (clipboard notices, file paths, entropy
//! reports) but never the passwords or errors. Prompts that need an answer
//! fall back to their default when quiet or when stdin is not a terminal.

use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}

fn stdin_is_tty() -> bool {
    unsafe { libc::isatty(libc::STDIN_FILENO) == 1 }
}

/// No one is there to answer, or `-q` asked us not to ask.
pub fn skip_prompt() -> bool {
    enabled() || !stdin_is_tty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_always_skips_prompts() {
        set(true);
        assert!(enabled());
        assert!(skip_prompt());

        set(false);
        assert!(!enabled());
    }
}
