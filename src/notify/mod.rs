use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

const DEFAULT_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    posted_at: Instant,
    ttl: Duration,
}

impl Notice {
    pub fn is_expired(&self) -> bool {
        self.posted_at.elapsed() >= self.ttl
    }
}

/// Transient user-facing messages. Notices expire on their own after
/// the TTL or can be dismissed explicitly via their id.
pub struct Notifier {
    notices: Mutex<Vec<Notice>>,
    next_id: AtomicU64,
    ttl: Duration,
}

impl Notifier {
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            notices: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
            ttl,
        }
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.post(Severity::Success, message.into())
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.post(Severity::Error, message.into())
    }

    pub fn info(&self, message: impl Into<String>) -> u64 {
        self.post(Severity::Info, message.into())
    }

    fn post(&self, severity: Severity, message: String) -> u64 {
        match severity {
            Severity::Error => log::error!("{message}"),
            _ => log::info!("{message}"),
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let notice = Notice {
            id,
            message,
            severity,
            posted_at: Instant::now(),
            ttl: self.ttl,
        };

        if let Ok(mut notices) = self.notices.lock() {
            notices.retain(|n| !n.is_expired());
            notices.push(notice);
        }
        id
    }

    /// Currently visible notices, oldest first. Expired ones are
    /// pruned on the way out.
    pub fn active(&self) -> Vec<Notice> {
        match self.notices.lock() {
            Ok(mut notices) => {
                notices.retain(|n| !n.is_expired());
                notices.clone()
            }
            Err(_) => Vec::new(),
        }
    }

    pub fn dismiss(&self, id: u64) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.retain(|n| n.id != id);
        }
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}
