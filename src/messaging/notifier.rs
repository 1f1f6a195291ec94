use std::io::Write;

use anyhow::Result;
use parking_lot::Mutex;

use crate::domain::directory::{Email, UserId};

// ============================================================================
// Email-changed Notifications
// ============================================================================

/// Outbound port the email-change workflow calls after a committed change.
#[cfg_attr(test, mockall::automock)]
pub trait EmailNotifier: Send + Sync {
    fn send_email_changed(&self, user_id: &UserId, new_email: &Email) -> Result<()>;
}

/// Writes one human-readable line per notification to a sink (stdout by
/// default).
pub struct ConsoleNotifier {
    sink: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleNotifier {
    pub fn stdout() -> Self {
        Self::with_sink(std::io::stdout())
    }

    pub fn with_sink(sink: impl Write + Send + 'static) -> Self {
        Self {
            sink: Mutex::new(Box::new(sink)),
        }
    }
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self::stdout()
    }
}

impl EmailNotifier for ConsoleNotifier {
    fn send_email_changed(&self, user_id: &UserId, new_email: &Email) -> Result<()> {
        tracing::info!(
            user_id = %user_id,
            new_email = %new_email,
            "Sending email changed message"
        );

        let mut sink = self.sink.lock();
        writeln!(sink, "Sending email changed message to {} at {}", user_id, new_email)?;
        sink.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_console_notifier_renders_id_and_email() {
        let buffer = SharedBuffer::default();
        let notifier = ConsoleNotifier::with_sink(buffer.clone());

        notifier
            .send_email_changed(&UserId::new("123"), &Email::new("test@example.com"))
            .unwrap();

        assert_eq!(
            buffer.contents(),
            "Sending email changed message to 123 at test@example.com\n"
        );
    }

    #[test]
    fn test_console_notifier_surfaces_sink_errors() {
        let notifier = ConsoleNotifier::with_sink(BrokenPipe);
        let result = notifier.send_email_changed(&UserId::new("1"), &Email::new("a@b.com"));
        assert!(result.is_err());
    }
}
