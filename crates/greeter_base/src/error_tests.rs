/* 📖 # Why use a separate file for these error tests?

Errors capture span traces, so tests here set up a subscriber and create spans.
Keeping them out of error.rs keeps the main module readable.
*/

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;
    use crate::{GreeterError, GreeterResult, ResultExt};
    use expect_test::expect;
    use std::error::Error;
    use std::io;
    use tracing::span;
    use tracing_error::ErrorLayer;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    /// Set up tracing with ErrorLayer for tests.
    /// Uses `try_init()` to handle multiple tests running concurrently.
    fn setup_tracing_subscriber() {
        let _ = tracing_subscriber::registry()
            .with(ErrorLayer::default())
            .try_init();
    }

    #[test]
    fn test_error_from_message() {
        let error = GreeterError::message("something went wrong");

        match error.kind() {
            ErrorKind::Message { message } => {
                assert_eq!(message, "something went wrong");
            }
            _ => panic!("Expected Message variant"),
        }
    }

    #[test]
    fn test_error_context_attachment() {
        let error = GreeterError::message("original error")
            .context("first context")
            .with_context(|| "second context".to_string());

        assert_eq!(error.get_context(), ["first context", "second context"]);
    }

    #[test]
    fn test_error_display_with_multiple_contexts() {
        let error = GreeterError::message("root error")
            .context("first")
            .context("second");
        assert_eq!(error.to_string(), "first: second: root error");
    }

    #[test]
    fn test_error_display_variants() {
        let io_error = GreeterError::io(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        let task_error = GreeterError::new(ErrorKind::TaskFailed {
            task: "delayed greeting".to_string(),
        });
        let rendered = format!("{}\n{}\n", io_error, task_error);
        expect![[r#"
            I/O error: pipe closed
            Task 'delayed greeting' failed
        "#]]
        .assert_eq(&rendered);
    }

    #[test]
    fn test_error_source() {
        let io_error = GreeterError::io(io::Error::other("disk gone"));
        assert_eq!(io_error.source().map(|e| e.to_string()).as_deref(), Some("disk gone"));
        assert!(GreeterError::message("no source").source().is_none());
    }

    #[test]
    fn test_io_result_context() {
        let result: io::Result<()> = Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        let err = result.context("writing greeting").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::Io { .. }));
        assert_eq!(err.to_string(), "writing greeting: I/O error: closed");
    }

    #[test]
    fn test_result_ext_chaining() {
        let result: GreeterResult<i32> = Err(crate::err!("root {}", 1));
        let err = result
            .context("step 1")
            .with_context(|| "step 2".to_string())
            .unwrap_err();
        assert_eq!(err.to_string(), "step 1: step 2: root 1");
    }

    #[test]
    fn test_result_ext_success_is_untouched() {
        let result: GreeterResult<i32> = Ok(42);
        assert_eq!(result.context("unused").unwrap(), 42);
    }

    #[test]
    fn test_spantrace_captures_enclosing_span() {
        setup_tracing_subscriber();

        let operation_span = span!(tracing::Level::INFO, "render_greeting", name = "Alice");
        let _guard = operation_span.enter();

        let error = GreeterError::message("write failed");
        let debug = format!("{:?}", error);
        assert!(debug.starts_with("write failed\nTrace: "));
        assert!(debug.contains("render_greeting"));
        assert!(error.span_trace().to_string().contains("render_greeting"));
    }
}
