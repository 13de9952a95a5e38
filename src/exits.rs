//! Exit handling: signal handlers and terminal restoration.

use std::sync::atomic::{AtomicBool, Ordering};

/// Set once the interactive menu may have left the terminal in raw mode.
static TERMINAL_DIRTY: AtomicBool = AtomicBool::new(false);

/// Turn canonical mode, echo and output post-processing back on.
fn restore_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

extern "C" fn cleanup_on_exit() {
    if !TERMINAL_DIRTY.load(Ordering::Relaxed) {
        return;
    }
    restore_termios();
    // Escape codes only when stdout is a TTY, never into a pipe.
    unsafe {
        if libc::isatty(1) == 1 {
            let reset = b"\x1b[0m\x1b[?25h\r\n";
            libc::write(1, reset.as_ptr() as *const libc::c_void, reset.len());
        }
    }
}

/// SIGINT/SIGTERM/SIGHUP: exit and let atexit restore the terminal.
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// Install signal handlers and register the atexit cleanup. Call early.
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Keep passwords out of core dumps.
pub fn disable_core_dumps() {
    #[cfg(target_os = "linux")]
    {
        unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
    }
}

/// Restore the terminal now, and again at exit.
pub fn prepare_terminal() {
    TERMINAL_DIRTY.store(true, Ordering::Relaxed);
    restore_termios();
}
