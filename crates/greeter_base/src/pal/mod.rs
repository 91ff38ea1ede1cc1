/* 📖 # What is the Platform Abstraction Layer?

The PAL provides a trait-based abstraction over the host clock, enabling testable code.
Key benefits:
- Testability: MockPal returns a fixed time and never really sleeps
- Flexibility: The timestamp decorator and delayed greeting never touch the system clock directly
*/

pub mod mock;
pub mod real_pal;
mod traits;

pub use mock::MockPal;
pub use real_pal::RealPal;
pub use traits::{Pal, PalHandle};
