//! Console logger implementation

use std::io::{self, IsTerminal, Write};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::format::{Formatter, LoggerOptions};
use super::traits::{Logger, LoggerError, LoggerResult};
use crate::context::{EnvContext, SharedContext};

/// Move the cursor home, then erase everything below it
const CLEAR_SCREEN: &str = "\x1b[1;1H\x1b[0J";

type Writer = Box<dyn Write + Send>;

/// A logger that outputs to the console (stdout/stderr)
///
/// Lines carry no prefix. `log` goes to stdout, `error` to stderr with the
/// message escaped onto a single line.
pub struct ConsoleLogger {
    formatter: Formatter,
    stdout: Mutex<Writer>,
    stderr: Mutex<Writer>,
    interactive: bool,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLogger {
    /// Create a console logger writing to the process streams
    pub fn new() -> Self {
        let interactive = io::stdout().is_terminal();
        Self::with_writers(Box::new(io::stdout()), Box::new(io::stderr())).interactive(interactive)
    }

    /// Create a console logger writing to custom streams
    ///
    /// `clear` is a no-op until `interactive(true)` is set.
    pub fn with_writers(stdout: Box<dyn Write + Send>, stderr: Box<dyn Write + Send>) -> Self {
        let context: SharedContext = Arc::new(EnvContext::new());
        Self {
            formatter: Formatter::new(LoggerOptions::bare(), context),
            stdout: Mutex::new(stdout),
            stderr: Mutex::new(stderr),
            interactive: false,
        }
    }

    /// Whether `clear` should emit the clear-screen sequence
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    fn write(writer: &Mutex<Writer>, text: &str) -> LoggerResult<()> {
        let mut writer = writer.lock();
        writer
            .write_all(text.as_bytes())
            .and_then(|_| writer.flush())
            .map_err(LoggerError::Console)
    }

    fn write_line(writer: &Mutex<Writer>, line: &str) -> LoggerResult<()> {
        Self::write(writer, &format!("{}\n", line))
    }
}

impl std::fmt::Debug for ConsoleLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleLogger")
            .field("formatter", &self.formatter)
            .field("interactive", &self.interactive)
            .finish()
    }
}

#[async_trait]
impl Logger for ConsoleLogger {
    fn name(&self) -> &str {
        "console"
    }

    async fn clear(&self) -> LoggerResult<()> {
        if !self.interactive {
            return Ok(());
        }
        Self::write(&self.stdout, CLEAR_SCREEN)
    }

    async fn log(&self, parts: &[&str]) -> LoggerResult<()> {
        Self::write_line(&self.stdout, &self.formatter.format(parts))
    }

    async fn error(&self, parts: &[&str]) -> LoggerResult<()> {
        let message = self.formatter.format_error_message(parts);
        Self::write_line(&self.stderr, &self.formatter.format(&[&message]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Cloneable in-memory sink for capturing output
    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Capture {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().clone()).unwrap()
        }
    }

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn captured() -> (ConsoleLogger, Capture, Capture) {
        let out = Capture::default();
        let err = Capture::default();
        let logger = ConsoleLogger::with_writers(Box::new(out.clone()), Box::new(err.clone()));
        (logger, out, err)
    }

    #[test]
    fn test_console_logger_has_no_prefix() {
        let logger = ConsoleLogger::new();
        assert_eq!(logger.formatter().options(), LoggerOptions::bare());
        assert_eq!(logger.formatter().prefix(), "");
        assert_eq!(logger.name(), "console");
    }

    #[tokio::test]
    async fn test_log_writes_plain_line_to_stdout() {
        let (logger, out, err) = captured();
        logger.log(&["a", "b"]).await.unwrap();
        assert_eq!(out.contents(), "a b\n");
        assert_eq!(err.contents(), "");
    }

    #[tokio::test]
    async fn test_error_writes_escaped_line_to_stderr() {
        let (logger, out, err) = captured();
        logger.error(&["bad\nthing"]).await.unwrap();
        assert_eq!(out.contents(), "");
        assert_eq!(err.contents(), "\"bad\\nthing\"\n");
    }

    #[tokio::test]
    async fn test_clear_only_when_interactive() {
        let (logger, out, _) = captured();
        logger.clear().await.unwrap();
        assert_eq!(out.contents(), "");

        let (logger, out, _) = captured();
        let logger = logger.interactive(true);
        logger.clear().await.unwrap();
        assert_eq!(out.contents(), CLEAR_SCREEN);
    }

    #[tokio::test]
    async fn test_write_failure_propagates() {
        let logger = ConsoleLogger::with_writers(Box::new(Broken), Box::new(Broken));
        assert!(matches!(logger.log(&["x"]).await, Err(LoggerError::Console(_))));
        assert!(matches!(logger.error(&["x"]).await, Err(LoggerError::Console(_))));
    }

    #[tokio::test]
    async fn test_log_parts_macro() {
        let (logger, out, err) = captured();
        crate::log_parts!(&logger, "retry", 3, "of", 5).await.unwrap();
        crate::error_parts!(&logger, "code", 42).await.unwrap();
        assert_eq!(out.contents(), "retry 3 of 5\n");
        assert_eq!(err.contents(), "\"code 42\"\n");
    }
}
