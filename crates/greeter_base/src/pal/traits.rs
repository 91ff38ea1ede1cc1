use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDateTime;

/* 📖 # Why is Pal a trait instead of a struct?

Using a trait enables two key benefits:
1. **Testability**: MockPal implements Pal with a settable clock, so timestamps in tests are exact
2. **Flexibility**: Code depends on the abstraction, not on `chrono::Local` or `std::thread::sleep`
*/

/// Platform Abstraction Layer (PAL) trait providing clock operations.
///
/// Two implementations are provided:
/// - `RealPal`: Uses the local wall clock and really sleeps
/// - `MockPal`: Fixed, settable clock for testing
pub trait Pal: std::fmt::Debug + Send + Sync + 'static {
    /// Current local wall-clock time.
    fn now(&self) -> NaiveDateTime;

    /// Block the calling thread for the given duration.
    fn sleep(&self, duration: Duration);
}

/// Handle to a PAL implementation, enabling shared ownership.
///
/// Internally wraps `Arc<dyn Pal>` for cheap cloning and thread-safe sharing,
/// so it can be moved into a background task.
///
/// # Examples
///
/// ```
/// use greeter_base::{PalHandle, RealPal};
///
/// let pal = PalHandle::new(RealPal::new());
/// let pal_clone = pal.clone(); // Cheap clone, shares the same implementation
/// let _now = pal_clone.now();
/// ```
#[derive(Debug, Clone)]
pub struct PalHandle(Arc<dyn Pal>);

impl PalHandle {
    /// Create a new PalHandle from a Pal implementation.
    pub fn new(pal: impl Pal + 'static) -> Self {
        Self(Arc::new(pal))
    }
}

impl std::ops::Deref for PalHandle {
    type Target = dyn Pal;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}
