use std::time::Duration;

/// Status messages shown in the submit button while a signup is in flight.
pub const LOADING_MESSAGES: [&str; 4] = [
    "Creating your account...",
    "Setting up your free trial...",
    "Almost ready...",
    "Preparing your workspace...",
];

/// Delay between two loading messages.
pub const LOADING_TICK: Duration = Duration::from_millis(1000);

/// Cursor into [`LOADING_MESSAGES`], present only while loading.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadingPresenter {
    index: Option<usize>,
}

impl LoadingPresenter {
    pub fn start(&mut self) {
        self.index = Some(0);
    }

    pub fn stop(&mut self) {
        self.index = None;
    }

    pub fn is_loading(&self) -> bool {
        self.index.is_some()
    }

    /// Advances to the next message, wrapping around. Does nothing when idle.
    pub fn tick(&mut self) {
        if let Some(i) = self.index.as_mut() {
            *i = (*i + 1) % LOADING_MESSAGES.len();
        }
    }

    pub fn message(&self) -> Option<&'static str> {
        self.index.map(|i| LOADING_MESSAGES[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_through_messages() {
        let mut loading = LoadingPresenter::default();
        assert!(!loading.is_loading());
        assert_eq!(loading.message(), None);

        loading.start();
        assert_eq!(loading.message(), Some("Creating your account..."));
        loading.tick();
        assert_eq!(loading.message(), Some("Setting up your free trial..."));
        loading.tick();
        assert_eq!(loading.message(), Some("Almost ready..."));
        loading.tick();
        assert_eq!(loading.message(), Some("Preparing your workspace..."));
        loading.tick();
        assert_eq!(loading.message(), Some("Creating your account..."));
    }

    #[test]
    fn ticks_while_idle_are_ignored() {
        let mut loading = LoadingPresenter::default();
        loading.tick();
        assert_eq!(loading, LoadingPresenter::default());

        loading.start();
        loading.tick();
        loading.stop();
        loading.tick();
        assert!(!loading.is_loading());
        assert_eq!(loading.message(), None);

        // A new submission starts from the first message again.
        loading.start();
        assert_eq!(loading.message(), Some(LOADING_MESSAGES[0]));
    }
}
