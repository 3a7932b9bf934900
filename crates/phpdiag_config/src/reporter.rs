/// Receives problems the config loader recovers from.
///
/// The loader never fails; it hands what went wrong to the host through this
/// trait so the host decides where warnings end up.
pub trait Reporter {
    fn warn(&self, message: &str);
}

/// Forwards warnings to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn warn(&self, message: &str) {
        log::warn!("{message}");
    }
}

impl<F: Fn(&str)> Reporter for F {
    fn warn(&self, message: &str) {
        self(message);
    }
}
