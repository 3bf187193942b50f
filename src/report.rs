use std::io::Write;

/// Sink for user-facing output. Progress goes to [`Reporter::report`],
/// diagnostics to [`Reporter::error`].
pub trait Reporter {
    fn report(&mut self, message: &str);
    fn error(&mut self, message: &str);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, message: &str) {
        (**self).report(message)
    }

    fn error(&mut self, message: &str) {
        (**self).error(message)
    }
}

/// Writes progress to standard output and diagnostics to standard error.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&mut self, message: &str) {
        let mut stdout = std::io::stdout().lock();
        // A closed stdout must not abort the batch.
        if writeln!(stdout, "{message}").and_then(|_| stdout.flush()).is_err() {
            tracing::debug!("stdout unavailable, dropped progress line");
        }
    }

    fn error(&mut self, message: &str) {
        if writeln!(std::io::stderr().lock(), "{message}").is_err() {
            tracing::debug!("stderr unavailable, dropped diagnostic line");
        }
    }
}
