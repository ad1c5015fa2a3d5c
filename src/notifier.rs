//! Where a [`Notification`] ends up.

use crate::notification::Notification;
use std::io::{self, Write};
use tracing::warn;

/// Shows a [`Notification`] to the operator.
///
/// Any `Fn(&Notification)` closure is a notifier, which is handy for collecting notifications instead of printing
/// them.
///
/// # Example
///
/// ```
/// # use bootstrap_admin::{Notification, notifier::Notifier};
/// let notifier = |notification: &Notification| eprintln!("{notification}");
///
/// notifier.notify(&Notification::Created { email: None });
/// ```
pub trait Notifier {
    /// Shows `notification`.
    fn notify(&self, notification: &Notification);
}

impl<F> Notifier for F
where
    F: Fn(&Notification),
{
    #[inline]
    fn notify(&self, notification: &Notification) {
        self(notification);
    }
}

/// Prints notifications for a terminal: failures to stderr, everything else to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct Terminal;

impl Terminal {
    fn write(
        notification: &Notification,
        stdout: &mut impl Write,
        stderr: &mut impl Write,
    ) -> io::Result<()> {
        if notification.is_failure() {
            writeln!(stderr, "{notification}")?;
            stderr.flush()
        } else {
            writeln!(stdout, "{notification}")?;
            stdout.flush()
        }
    }
}

impl Notifier for Terminal {
    fn notify(&self, notification: &Notification) {
        if let Err(err) = Self::write(notification, &mut io::stdout().lock(), &mut io::stderr().lock()) {
            warn!(%err, "failed to write notification to the terminal");
        }
    }
}
