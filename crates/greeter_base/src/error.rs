use std::error::Error as StdError;
use std::fmt;

use tracing_error::SpanTrace;

/* 📖 # Why a custom error type and not use anyhow/eyre/thiserror etc?

- Better control over error handling
- No dependencies to compile and integrate beyond tracing-error
- The span trace is captured where the error is created, not where it is reported
 */

/// Error variants that can occur while producing greetings.
#[derive(Debug)]
pub enum ErrorKind {
    /// Writing greeting output failed
    Io { source: std::io::Error },

    /// A background greeting task did not produce a result
    TaskFailed { task: String },

    /// Catch-all for other errors with a message
    Message { message: String },
}

/* 📖 # Why separate ErrorKind and GreeterError?
ErrorKind carries the structural variants that callers can match on.
GreeterError wraps it with the context stack and the span trace captured at creation.
*/

/// Error type wrapping [`ErrorKind`] with context and a captured span trace.
pub struct GreeterError {
    kind: ErrorKind,
    context: Vec<String>,
    span_trace: SpanTrace,
}

impl GreeterError {
    /// Creates a new error from an ErrorKind, capturing the current span trace.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: vec![],
            span_trace: SpanTrace::capture(),
        }
    }

    /// Creates a message error.
    pub fn message(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Message {
            message: message.into(),
        })
    }

    /// Creates an I/O error.
    pub fn io(source: std::io::Error) -> Self {
        Self::new(ErrorKind::Io { source })
    }

    /// Attaches context to an error.
    /// Context is displayed before the error message.
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    /// Attaches context using lazy evaluation.
    pub fn with_context<F>(mut self, f: F) -> Self
    where
        F: FnOnce() -> String,
    {
        self.context.push(f());
        self
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn get_context(&self) -> &[String] {
        &self.context
    }

    pub fn span_trace(&self) -> &SpanTrace {
        &self.span_trace
    }
}

impl From<ErrorKind> for GreeterError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl StdError for GreeterError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.kind {
            ErrorKind::Io { source } => Some(source),
            ErrorKind::TaskFailed { .. } | ErrorKind::Message { .. } => None,
        }
    }
}

impl fmt::Display for GreeterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ctx in &self.context {
            write!(f, "{}: ", ctx)?;
        }

        match &self.kind {
            ErrorKind::Io { source } => write!(f, "I/O error: {}", source),
            ErrorKind::TaskFailed { task } => write!(f, "Task '{}' failed", task),
            ErrorKind::Message { message } => write!(f, "{}", message),
        }
    }
}

impl fmt::Debug for GreeterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self)?;
        write!(f, "Trace: {}", self.span_trace)
    }
}

/// Standard result type for greeter operations.
pub type GreeterResult<T> = std::result::Result<T, Box<GreeterError>>;

/// Extension trait for attaching context to Results during propagation.
pub trait ResultExt<T> {
    /// Attaches context to an error, consuming and re-wrapping it.
    fn context(self, context: impl Into<String>) -> GreeterResult<T>;

    /// Attaches context using lazy evaluation.
    /// Context is only evaluated if the result is an error.
    fn with_context<F>(self, f: F) -> GreeterResult<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for GreeterResult<T> {
    fn context(self, context: impl Into<String>) -> GreeterResult<T> {
        self.map_err(|err| Box::new(err.context(context)))
    }

    fn with_context<F>(self, f: F) -> GreeterResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|err| Box::new(err.with_context(f)))
    }
}

impl<T> ResultExt<T> for std::io::Result<T> {
    fn context(self, context: impl Into<String>) -> GreeterResult<T> {
        self.map_err(|err| Box::new(GreeterError::io(err).context(context)))
    }

    fn with_context<F>(self, f: F) -> GreeterResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|err| Box::new(GreeterError::io(err).with_context(f)))
    }
}

/// Creates a boxed message error using `format!` syntax.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        Box::new($crate::GreeterError::message(format!($($arg)*)))
    };
}
