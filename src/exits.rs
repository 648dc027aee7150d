//! Exit handling: signal handlers, cleanup, and graceful shutdown.

use crate::rand;

/// Reset terminal to a sane state using termios directly.
fn reset_terminal_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

/// Registered with atexit - runs on any exit path.
extern "C" fn cleanup_on_exit() {
    reset_terminal_termios();
    // Only emit escape codes when stdout is a tty (not when piping)
    const RESET_SEQ: &[u8] = b"\x1b[0m\x1b[?25h\r\n";
    unsafe {
        if libc::isatty(1) == 1 {
            libc::write(
                1,
                RESET_SEQ.as_ptr() as *const libc::c_void,
                RESET_SEQ.len(),
            );
        }
    }
    rand::zeroize_state();
}

/// SIGINT/SIGTERM/SIGHUP - exit cleanly, atexit handles cleanup.
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// SIGSEGV/SIGABRT - zero RNG state, then re-raise for a proper crash.
extern "C" fn crash_handler(sig: libc::c_int) {
    unsafe {
        rand::zeroize_state();
        libc::signal(sig, libc::SIG_DFL);
        libc::raise(sig);
    }
}

/// Install all signal handlers and register atexit cleanup.
/// Call this early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        libc::signal(
            libc::SIGINT,
            signal_handler as *const () as libc::sighandler_t,
        );
        libc::signal(
            libc::SIGTERM,
            signal_handler as *const () as libc::sighandler_t,
        );
        libc::signal(
            libc::SIGHUP,
            signal_handler as *const () as libc::sighandler_t,
        );
        libc::signal(
            libc::SIGSEGV,
            crash_handler as *const () as libc::sighandler_t,
        );
        libc::signal(
            libc::SIGABRT,
            crash_handler as *const () as libc::sighandler_t,
        );
    }
}

/// Reset terminal state (public for use in other modules).
pub fn reset_terminal() {
    reset_terminal_termios();
}
