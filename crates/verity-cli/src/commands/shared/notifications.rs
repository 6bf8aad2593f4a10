use verity_session::{Notification, NotificationKind};

use crate::context::AppSession;
use crate::ui;

/// Print queued session notifications to stderr.
///
/// Stdout stays reserved for the command's response so `--format json`
/// output can be piped.
pub fn flush(session: &AppSession) {
    let notifications = session.take_notifications();
    if !ui::prefs().notifications {
        return;
    }
    for notification in &notifications {
        eprintln!("{}", format_line(notification));
    }
}

fn format_line(notification: &Notification) -> String {
    let marker = match notification.kind {
        NotificationKind::Success => "✓",
        NotificationKind::Warning => "!",
        NotificationKind::Error => "✗",
    };
    if notification.description.is_empty() {
        format!("{marker} {}", notification.title)
    } else {
        format!("{marker} {}: {}", notification.title, notification.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_title_and_description() {
        let line = format_line(&Notification::error("Error", "Invalid shared link."));
        assert_eq!(line, "✗ Error: Invalid shared link.");
    }

    #[test]
    fn omits_empty_description() {
        let line = format_line(&Notification::success("History Cleared", ""));
        assert_eq!(line, "✓ History Cleared");
    }
}
