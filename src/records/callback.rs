//! Non-fatal problem reporting during record loads.

/// Callback record loaders use to report problems without aborting.
///
/// Loaders keep going on recoverable problems (an unrecognized
/// qualification token, a missing optional attribute) and describe them
/// here; the host application decides whether anything reaches the user.
pub trait ErrorCallback {
    /// A problem that needs a caller decision. Return `true` to keep
    /// loading, `false` to abort.
    fn on_error(&mut self, _msg: &str) -> bool {
        false
    }

    /// Record a message; never interrupts the load.
    fn log_message(&mut self, msg: &str);
}

/// Buffers every message and always continues.
#[derive(Debug, Default)]
pub struct CollectingCallback {
    messages: Vec<String>,
}

impl CollectingCallback {
    /// Empty callback.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages reported so far, in order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Whether nothing was reported.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl ErrorCallback for CollectingCallback {
    fn on_error(&mut self, msg: &str) -> bool {
        self.messages.push(msg.to_string());
        true
    }

    fn log_message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collecting_callback_buffers_in_order() {
        let mut callback = CollectingCallback::new();
        callback.log_message("first");
        callback.log_message("second");
        assert_eq!(callback.messages(), ["first", "second"]);
    }

    #[test]
    fn collecting_callback_continues_on_error() {
        let mut callback = CollectingCallback::new();
        assert!(callback.on_error("bad token"));
        assert_eq!(callback.messages(), ["bad token"]);
    }

    #[test]
    fn default_on_error_aborts() {
        struct LogOnly(Vec<String>);
        impl ErrorCallback for LogOnly {
            fn log_message(&mut self, msg: &str) {
                self.0.push(msg.to_string());
            }
        }
        let mut callback = LogOnly(Vec::new());
        assert!(!callback.on_error("fatal"));
    }
}
