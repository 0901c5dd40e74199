// crates/infra/src/watch.rs
use std::path::Path;
use std::sync::mpsc::channel;
use std::time::Duration;

use notify::{RecursiveMode, Watcher};

use gapdash_shared_kernel::{InfraResult, InfrastructureError};

/// Watch the dataset file and re-run the callback on changes.
///
/// Runs the callback once up front, then blocks indefinitely. Change
/// bursts are debounced by sleeping `interval` and draining the queue
/// before re-rendering.
pub fn watch_loop<F>(path: &Path, interval: Duration, mut on_change: F) -> InfraResult<()>
where
    F: FnMut(),
{
    let (tx, rx) = channel();

    let mut watcher = notify::recommended_watcher(move |res| match res {
        Ok(event) => {
            let _ = tx.send(event);
        }
        Err(e) => eprintln!("watch error: {e:?}"),
    })
    .map_err(watch_error)?;

    watcher
        .watch(path, RecursiveMode::NonRecursive)
        .map_err(watch_error)?;

    println!("[gapdash] Watching {} for changes...", path.display());
    on_change();

    while rx.recv().is_ok() {
        std::thread::sleep(interval);
        while rx.try_recv().is_ok() {}

        log::debug!("dataset change detected, re-rendering");
        on_change();
    }

    Ok(())
}

fn watch_error(err: notify::Error) -> InfrastructureError {
    InfrastructureError::WatchFailed { details: err.to_string() }
}
