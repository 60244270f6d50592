/// Navigation sink: where client-side redirects land.
///
/// The browser app backs this with `window.location`; tests record targets.
pub trait Navigate {
    fn go(&mut self, target: &str);
}

/// Test/dry-run navigator that records every requested target.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    pub targets: Vec<String>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&str> {
        self.targets.last().map(String::as_str)
    }
}

impl Navigate for RecordingNavigator {
    fn go(&mut self, target: &str) {
        self.targets.push(target.to_string());
    }
}
