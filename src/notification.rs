//! Non-fatal diagnostics collected while reading.
//!
//! Anything the reader steps over instead of failing on (an entity type it
//! does not build, a section it does not read, an entity dropped in
//! failsafe mode) is recorded here. After a read the caller can inspect
//! [`SectionsContainer::notifications`](crate::SectionsContainer::notifications).

use std::fmt;

/// Category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    /// An entity type or section the reader does not build
    NotImplemented,
    /// Data the reader understands but cannot represent, such as spline
    /// edges in a hatch boundary
    NotSupported,
    Warning,
    /// An error that was recovered from in failsafe mode
    Error,
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotImplemented => write!(f, "NotImplemented"),
            Self::NotSupported => write!(f, "NotSupported"),
            Self::Warning => write!(f, "Warning"),
            Self::Error => write!(f, "Error"),
        }
    }
}

/// A single notification produced during reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Category
    pub notification_type: NotificationType,
    /// Human-readable description
    pub message: String,
    /// Physical line where the reader was, when known
    pub line: Option<u64>,
}

impl Notification {
    /// Create a notification with no line
    pub fn new(notification_type: NotificationType, message: impl Into<String>) -> Self {
        Self {
            notification_type,
            message: message.into(),
            line: None,
        }
    }

    /// Attach the input line
    pub fn at_line(mut self, line: u64) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.notification_type, self.message)?;
        if let Some(line) = self.line {
            write!(f, " (line {})", line)?;
        }
        Ok(())
    }
}

/// Notifications of one read, in the order they were raised.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationCollection {
    items: Vec<Notification>,
}

impl NotificationCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Record a notification
    pub fn notify(&mut self, notification_type: NotificationType, message: impl Into<String>) {
        self.items.push(Notification::new(notification_type, message));
    }

    /// Record a notification tied to a line of the input
    pub fn notify_at(&mut self, notification_type: NotificationType, line: u64, message: impl Into<String>) {
        self.items
            .push(Notification::new(notification_type, message).at_line(line));
    }

    /// Check if there are any notifications
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of notifications
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterate over all notifications
    pub fn iter(&self) -> std::slice::Iter<'_, Notification> {
        self.items.iter()
    }

    /// Notifications of one category
    pub fn of_type(&self, nt: NotificationType) -> impl Iterator<Item = &Notification> + '_ {
        self.items.iter().filter(move |n| n.notification_type == nt)
    }

    /// Check whether any notification of the given type exists
    pub fn has_type(&self, nt: NotificationType) -> bool {
        self.items.iter().any(|n| n.notification_type == nt)
    }
}

impl<'a> IntoIterator for &'a NotificationCollection {
    type Item = &'a Notification;
    type IntoIter = std::slice::Iter<'a, Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
