//! Change event model.
//!
//! A change event is a single add/change/delete record handed to the heatmap
//! by the host. Events are owned by the caller and never mutated here; the
//! timestamp stays a raw string until bucketization so one malformed record
//! cannot poison the batch.

use chrono::{DateTime, SecondsFormat, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of change categories, in presentation priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Add,
    Change,
    Delete,
}

impl Category {
    /// All categories in priority order (Add, Change, Delete).
    pub const ALL: [Category; 3] = [Category::Add, Category::Change, Category::Delete];

    /// Map an external `type` string to a category.
    ///
    /// Matching is case-sensitive; anything other than `add`, `change` or
    /// `delete` yields `None` and the event is ignored.
    pub fn from_kind(kind: &str) -> Option<Self> {
        match kind {
            "add" => Some(Self::Add),
            "change" => Some(Self::Change),
            "delete" => Some(Self::Delete),
            _ => None,
        }
    }

    /// The wire name of this category.
    pub fn kind(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Change => "change",
            Self::Delete => "delete",
        }
    }

    /// Past-tense heading used in summaries ("Added", "Changed", "Deleted").
    pub fn heading(self) -> &'static str {
        match self {
            Self::Add => "Added",
            Self::Change => "Changed",
            Self::Delete => "Deleted",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())
    }
}

/// A timestamped, categorised change record as supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    /// ISO-8601 instant, naive date-time or bare date
    pub timestamp: String,
    /// Raw category name; see [`Category::from_kind`]
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ChangeEvent {
    /// Create an event from raw external values.
    ///
    /// # Examples
    /// ```
    /// use change_heatmap::models::change_event::{Category, ChangeEvent};
    ///
    /// let event = ChangeEvent::new("2024-01-10T09:30:00", "add").with_message("created X");
    /// assert_eq!(event.category(), Some(Category::Add));
    /// ```
    pub fn new(timestamp: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            kind: kind.into(),
            message: None,
        }
    }

    /// Create an event for a known instant and category.
    pub fn at<Tz: TimeZone>(timestamp: DateTime<Tz>, category: Category) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        Self::new(
            timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
            category.kind(),
        )
    }

    /// Attach a message to the event
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// The recognised category, or `None` for unknown `type` values.
    pub fn category(&self) -> Option<Category> {
        Category::from_kind(&self.kind)
    }

    /// The message if present and non-empty.
    pub fn display_message(&self) -> Option<&str> {
        self.message.as_deref().filter(|message| !message.is_empty())
    }
}
