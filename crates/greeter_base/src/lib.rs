/* 📖 # Why have greeter_base as a core library?
greeter_base provides the error type, tracing setup and the platform abstraction used by the other crates.
Keeping them here prevents circular dependencies between the engine and the CLI.
*/

pub mod error;
mod error_tests;
pub mod pal;
mod pal_tests;
pub mod tracing;

// Re-export commonly used types for convenience
pub use error::{ErrorKind, GreeterError, GreeterResult, ResultExt};
pub use pal::{MockPal, Pal, PalHandle, RealPal};
