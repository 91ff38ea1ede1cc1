/* 📖 # Why a plain thread instead of an async task?

Only one computation ever runs in the background and the caller immediately blocks on it.
A thread plus a join handle expresses "launch, then wait" without pulling in an async runtime.
*/

use std::thread::JoinHandle;
use std::time::Duration;

use greeter_base::{ErrorKind, GreeterError, GreeterResult, PalHandle, ResultExt};
use tracing::{debug, instrument, warn};

use crate::Greeter;

const TASK_NAME: &str = "delayed-greeting";

/// Handle to a greeting being produced on a background thread.
#[derive(Debug)]
pub struct DelayedGreeting {
    handle: JoinHandle<String>,
}

impl DelayedGreeting {
    /// Block until the greeting is ready.
    pub fn wait(self) -> GreeterResult<String> {
        self.handle.join().map_err(|panic| {
            let reason = panic
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| panic.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            warn!(%reason, "delayed greeting task panicked");
            Box::new(
                GreeterError::new(ErrorKind::TaskFailed {
                    task: TASK_NAME.to_string(),
                })
                .context(reason),
            )
        })
    }
}

/// Greet `name` after sleeping for `delay` on a background thread.
///
/// The result reads `"<greeting> (after <delay>)"`, e.g. `Hello, Ann! (after 500ms)`.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use greeter_base::{MockPal, PalHandle};
/// use greeter_engine::{PrefixGreeter, spawn_delayed_greeting};
///
/// let pal = PalHandle::new(MockPal::new());
/// let pending = spawn_delayed_greeting(&pal, PrefixGreeter::default(), "Ann", Duration::from_millis(500)).unwrap();
/// assert_eq!(pending.wait().unwrap(), "Hello, Ann! (after 500ms)");
/// ```
#[instrument(skip(pal, greeter))]
pub fn spawn_delayed_greeting<G>(
    pal: &PalHandle,
    greeter: G,
    name: &str,
    delay: Duration,
) -> GreeterResult<DelayedGreeting>
where
    G: Greeter + Send + 'static,
{
    let pal = pal.clone();
    let name = name.to_string();
    let handle = std::thread::Builder::new()
        .name(TASK_NAME.to_string())
        .spawn(move || {
            pal.sleep(delay);
            debug!(?delay, "delay elapsed");
            format!("{} (after {:?})", greeter.format(&name), delay)
        })
        .context("Failed to spawn delayed greeting")?;
    Ok(DelayedGreeting { handle })
}
