mod notifier;

pub use notifier::{ConsoleNotifier, EmailNotifier};

#[cfg(test)]
pub use notifier::MockEmailNotifier;
