pub mod decorator;
pub mod delayed;
pub mod greeter;
pub mod output;

pub use decorator::{TIMESTAMP_FORMAT, TimestampDecorator};
pub use delayed::{DelayedGreeting, spawn_delayed_greeting};
pub use greeter::{DEFAULT_NAME, DEFAULT_PREFIX, Greeter, PrefixGreeter};
pub use output::{GreetingPlan, render_plan, write_greeting};
