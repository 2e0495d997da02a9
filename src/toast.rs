use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ToastLevel {
    Success,
    Error,
    #[default]
    Info,
    Warning,
}

impl ToastLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
            Self::Warning => "warning",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Error => "✕",
            Self::Info => "ℹ",
            Self::Warning => "⚠",
        }
    }
}

impl fmt::Display for ToastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToastId(u64);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastOptions {
    pub message: String,
    pub level: ToastLevel,
    pub title: Option<String>,
    /// Milliseconds; `None` uses the default, `Some(0)` keeps the toast until dismissed.
    pub duration_ms: Option<u64>,
}

impl ToastOptions {
    pub fn new(level: ToastLevel, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level,
            ..Default::default()
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Error, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Warning, message)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_duration(mut self, ms: u64) -> Self {
        self.duration_ms = Some(ms);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub level: ToastLevel,
    pub title: Option<String>,
    pub duration_ms: u64,
    pub deadline: Option<DateTime<Utc>>,
}

/// Longest delay a browser timer honours; anything above stays until dismissed.
pub const MAX_TIMER_MS: u64 = i32::MAX as u64;

/// `None` for sticky toasts, including durations too long to schedule or to represent.
fn deadline_after(now: DateTime<Utc>, duration_ms: u64) -> Option<DateTime<Utc>> {
    if duration_ms == 0 || duration_ms > MAX_TIMER_MS {
        return None;
    }
    let delta = TimeDelta::try_milliseconds(i64::try_from(duration_ms).ok()?)?;
    now.checked_add_signed(delta)
}

/// Stacked notifications in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    /// Enqueues a toast and returns its id plus the auto-dismiss delay, if any.
    pub fn push(
        &mut self,
        options: ToastOptions,
        now: DateTime<Utc>,
        default_ms: u64,
    ) -> (ToastId, Option<u64>) {
        let id = ToastId(self.next_id);
        self.next_id += 1;

        let duration_ms = options.duration_ms.unwrap_or(default_ms);
        let deadline = deadline_after(now, duration_ms);

        self.toasts.push(Toast {
            id,
            message: options.message,
            level: options.level,
            title: options.title,
            duration_ms,
            deadline,
        });
        (id, deadline.map(|_| duration_ms))
    }

    /// Returns false when the toast was already gone.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    /// Drops every toast whose deadline has passed and returns their ids.
    pub fn expire(&mut self, now: DateTime<Utc>) -> Vec<ToastId> {
        let (expired, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.toasts)
            .into_iter()
            .partition(|t| t.deadline.is_some_and(|d| d <= now));
        self.toasts = kept;
        expired.into_iter().map(|t| t.id).collect()
    }

    pub fn visible(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
