use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::control::follower::FollowerHandle;

/// Runs the dispatch activity on its own thread at a fixed wall-clock
/// interval, decoupled from the perception frame rate.
///
/// Returns the join handle and a cancellation flag; setting the flag
/// stops the loop at its next tick. Each tick is self-contained, so no
/// further coordination is needed to shut down.
pub fn spawn(
    follower: FollowerHandle,
    interval: Duration,
) -> (thread::JoinHandle<()>, Arc<AtomicBool>) {
    let cancelled = Arc::new(AtomicBool::new(false));
    let cancel_flag = cancelled.clone();

    let handle = thread::spawn(move || {
        let ticker = crossbeam_channel::tick(interval);
        for _ in ticker.iter() {
            if cancel_flag.load(Ordering::Relaxed) {
                break;
            }
            follower.tick();
        }
    });

    (handle, cancelled)
}
