use greeter_base::PalHandle;
use tracing::debug;

use crate::Greeter;

/// Rendering pattern for the timestamp prefix.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Greeter that prepends the call-time wall clock to another greeter's output.
///
/// The wrapped greeter is owned exclusively and dropped together with the decorator.
///
/// # Examples
/// ```
/// use greeter_base::{MockPal, PalHandle};
/// use greeter_engine::{Greeter, PrefixGreeter, TimestampDecorator};
///
/// let greeter = TimestampDecorator::new(PrefixGreeter::new("Greetings"), PalHandle::new(MockPal::new()));
/// assert_eq!(greeter.format("X"), "[2000-01-01 00:00:00] Greetings, X!");
/// ```
#[derive(Debug)]
pub struct TimestampDecorator<G> {
    inner: G,
    pal: PalHandle,
}

impl<G: Greeter> TimestampDecorator<G> {
    pub fn new(inner: G, pal: PalHandle) -> Self {
        Self { inner, pal }
    }

    /// Unwrap the decorator, returning the wrapped greeter.
    pub fn into_inner(self) -> G {
        self.inner
    }
}

impl<G: Greeter> Greeter for TimestampDecorator<G> {
    fn format(&self, name: &str) -> String {
        let now = self.pal.now();
        debug!(%now, "stamping greeting");
        format!(
            "[{}] {}",
            now.format(TIMESTAMP_FORMAT),
            self.inner.format(name)
        )
    }
}
