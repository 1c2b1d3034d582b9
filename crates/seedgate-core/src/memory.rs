//! Process hardening for seed handling
//!
//! Disables core dumps via `setrlimit(RLIMIT_CORE, 0)` so that a crash while a
//! mnemonic or private key is in memory never writes it to disk.
//!
//! Best-effort: containers and unprivileged users may refuse the call, in which
//! case a warning is logged and the process carries on.

use std::sync::atomic::{AtomicBool, Ordering};

static CORE_DUMPS_DISABLED: AtomicBool = AtomicBool::new(false);

/// Disable core dumps for the current process.
///
/// Returns `true` if core dumps are disabled after the call. Calling it again
/// after a success is a no-op.
pub fn disable_core_dumps() -> bool {
    if CORE_DUMPS_DISABLED.load(Ordering::SeqCst) {
        return true;
    }

    let disabled = platform_disable();
    if disabled {
        CORE_DUMPS_DISABLED.store(true, Ordering::SeqCst);
    }
    disabled
}

#[cfg(unix)]
fn platform_disable() -> bool {
    let rlim = libc::rlimit {
        rlim_cur: 0,
        rlim_max: 0,
    };
    // SAFETY: setrlimit only reads the struct we pass in
    let result = unsafe { libc::setrlimit(libc::RLIMIT_CORE, &rlim) };
    if result != 0 {
        log::warn!(
            "Failed to disable core dumps: {}",
            std::io::Error::last_os_error()
        );
        return false;
    }
    log::debug!("Core dumps disabled");
    true
}

#[cfg(not(unix))]
fn platform_disable() -> bool {
    log::warn!("Core dump prevention is not supported on this platform");
    false
}
