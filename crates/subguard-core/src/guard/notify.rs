//! Notification sinks for guard failures.

/// Receives one user-facing message per failed check.
///
/// Any `FnMut(&str)` closure is a notifier, so a UI can pass its own alert
/// function and tests can pass a collector.
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

impl<F> Notifier for F
where
    F: FnMut(&str),
{
    fn notify(&mut self, message: &str) {
        self(message)
    }
}

/// Keeps every message in order.
#[derive(Debug, Default, Clone)]
pub struct Collect {
    pub messages: Vec<String>,
}

impl Notifier for Collect {
    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

/// Forwards messages to the `tracing` warn level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, message: &str) {
        tracing::warn!(target: "subguard::notify", "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn send_two(n: &mut dyn Notifier) {
        n.notify("first");
        n.notify("second");
    }

    #[test]
    fn collect_keeps_order() {
        let mut c = Collect::default();
        send_two(&mut c);
        assert_eq!(c.messages, vec!["first", "second"]);
    }

    #[test]
    fn closure_is_notifier() {
        let mut count = 0;
        let mut counter = |_: &str| count += 1;
        send_two(&mut counter);
        assert_eq!(count, 2);
    }

    #[test]
    fn log_notifier_does_not_panic_without_subscriber() {
        LogNotifier.notify("nobody listening");
    }
}
