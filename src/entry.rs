//! Default generator and entry point functions

#![cfg(feature = "std")]

use crate::{generator::with_rand08::Adapter, Generator, Uuid};
use rand::rngs::OsRng;
use std::cell::RefCell;

thread_local! {
    static DEFAULT_GENERATOR: RefCell<Generator<Adapter<OsRng>>> =
        const { RefCell::new(Generator::with_os_rng()) };
}

/// Generates a UUID.
///
/// This function employs a thread-local generator, so every thread walks its own counter seeded
/// from the operating system on the thread's first call, without any locking. On Unix, this
/// function reseeds the generator when the process ID changes (i.e. upon process forks) so that
/// parent and child do not produce the same sequence.
///
/// # Panics
///
/// Panics if the operating system cannot provide 16 bytes of entropy for the seed.
///
/// # Examples
///
/// ```rust
/// let uuid = hashuuid::generate();
/// println!("{uuid}"); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte array
///
/// let uuid_string: String = hashuuid::generate().to_string();
/// ```
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub fn generate() -> Uuid {
    DEFAULT_GENERATOR.with(|g| {
        if unix_fork_safety::pid_changed() {
            tracing::warn!("process ID changed; reseeding thread-local UUID generator");
            g.replace(Generator::with_os_rng());
        }

        g.borrow_mut().generate()
    })
}

#[cfg(unix)]
mod unix_fork_safety {
    use std::{cell::Cell, process};

    thread_local! {
        static PID: Cell<u32> = Cell::new(process::id());
    }

    /// Returns true if the process ID differs from the one recorded by the previous call on this
    /// thread.
    pub fn pid_changed() -> bool {
        PID.with(|last_pid| {
            let pid = process::id();
            pid != last_pid.replace(pid)
        })
    }
}

#[cfg(not(unix))]
mod unix_fork_safety {
    pub const fn pid_changed() -> bool {
        false
    }
}
