//! Exit handling: signal handlers and terminal cleanup.

use crate::terminal;

/// Registered with atexit; runs on every normal or signalled exit.
extern "C" fn cleanup_on_exit() {
    // Escape codes only make sense on a terminal, not when piping
    if unsafe { libc::isatty(libc::STDOUT_FILENO) } == 1 {
        terminal::reset_terminal();
    }
}

/// SIGINT/SIGTERM/SIGHUP: exit so atexit cleanup runs.
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// Keep generated secrets out of core dumps.
pub fn disable_core_dumps() {
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }
}

/// Install signal handlers and register atexit cleanup.
/// Call this early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}
