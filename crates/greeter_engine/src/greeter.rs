/* 📖 # Why is Greeter a trait and not a base struct?

Any type that can turn a name into a greeting is a greeter.
Decorators hold another greeter by value and forward to it, so composition needs no
class hierarchy and no shared ownership.
*/

use tracing::trace;

/// Salutation used when none is configured.
pub const DEFAULT_PREFIX: &str = "Hello";

/// Subject substituted for an empty name.
pub const DEFAULT_NAME: &str = "World";

/// Capability to produce a greeting for a subject name.
pub trait Greeter {
    /// Produce the greeting for a single name.
    fn format(&self, name: &str) -> String;

    /// Greet every name in order, one greeting per line.
    ///
    /// Returns `None` for an empty sequence, so callers can tell "nothing to greet"
    /// apart from an empty greeting.
    ///
    /// # Examples
    /// ```
    /// use greeter_engine::{Greeter, PrefixGreeter};
    ///
    /// let greeter = PrefixGreeter::default();
    /// assert_eq!(
    ///     greeter.format_many(&["Alice", "Bob"]).as_deref(),
    ///     Some("Hello, Alice!\nHello, Bob!\n")
    /// );
    /// assert_eq!(greeter.format_many::<&str>(&[]), None);
    /// ```
    fn format_many<S: AsRef<str>>(&self, names: &[S]) -> Option<String>
    where
        Self: Sized,
    {
        if names.is_empty() {
            return None;
        }
        let mut result = String::new();
        for name in names {
            result.push_str(&self.format(name.as_ref()));
            result.push('\n');
        }
        Some(result)
    }
}

impl<G: Greeter + ?Sized> Greeter for Box<G> {
    fn format(&self, name: &str) -> String {
        (**self).format(name)
    }
}

/// Greeter composing a fixed salutation prefix with the subject name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixGreeter {
    prefix: String,
    default_name: String,
}

impl PrefixGreeter {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            default_name: DEFAULT_NAME.to_string(),
        }
    }

    /// Replace the subject used for empty names.
    pub fn with_default_name(mut self, default_name: impl Into<String>) -> Self {
        self.default_name = default_name.into();
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn default_name(&self) -> &str {
        &self.default_name
    }

    /// Greet `name`, substituting `default_name` when `name` is empty.
    pub fn format_with_default(&self, name: &str, default_name: &str) -> String {
        let subject = if name.is_empty() { default_name } else { name };
        trace!(prefix = %self.prefix, subject, "formatting greeting");
        format!("{}, {}!", self.prefix, subject)
    }
}

impl Default for PrefixGreeter {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

impl Greeter for PrefixGreeter {
    fn format(&self, name: &str) -> String {
        self.format_with_default(name, &self.default_name)
    }
}
