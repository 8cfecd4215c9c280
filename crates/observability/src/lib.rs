use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use once_cell::sync::OnceCell;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: OnceCell<()> = OnceCell::new();

#[derive(Debug, Default)]
pub struct AppMetrics {
    sessions_total: AtomicU64,
    messages_total: AtomicU64,
    replies_total: AtomicU64,
    offers_total: AtomicU64,
    searches_total: AtomicU64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub sessions_total: u64,
    pub messages_total: u64,
    pub replies_total: u64,
    pub offers_total: u64,
    pub searches_total: u64,
}

impl AppMetrics {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn inc_session(&self) {
        self.sessions_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_message(&self) {
        self.messages_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_reply(&self) {
        self.replies_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_offer(&self) {
        self.offers_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_search(&self) {
        self.searches_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            sessions_total: self.sessions_total.load(Ordering::Relaxed),
            messages_total: self.messages_total.load(Ordering::Relaxed),
            replies_total: self.replies_total.load(Ordering::Relaxed),
            offers_total: self.offers_total.load(Ordering::Relaxed),
            searches_total: self.searches_total.load(Ordering::Relaxed),
        }
    }
}

pub fn init_tracing(service_name: &str) {
    TRACING_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}=info,jama_chat=info,jama_search=info", service_name))
        });

        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(true)
            .with_span_list(true)
            .init();
    });
}
