//! Transient user-facing messages.

use colored::Colorize;

pub trait Notifier {
    fn notify_error(&self, message: &str);

    fn notify_info(&self, message: &str);
}

/// Writes notices to stderr so they never mix with command output.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify_error(&self, message: &str) {
        eprintln!("{} {}", "✗".red().bold(), message.red());
    }

    fn notify_info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".blue().bold(), message);
    }
}
