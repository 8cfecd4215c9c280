use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::Utc;
use jama_core::{classify, wants_search, ChatMessage, MessageRole};
use jama_observability::AppMetrics;
use parking_lot::Mutex;
use tracing::info;
use uuid::Uuid;

use crate::config::SessionConfig;
use crate::scheduler::ReplyScheduler;

/// Collaborator invoked when the user confirms a pending search offer. The
/// UI shell wires this to its search surface.
pub trait SearchTrigger: Send + Sync {
    fn trigger_search(&self, query: &str);
}

impl<F> SearchTrigger for F
where
    F: Fn(&str) + Send + Sync,
{
    fn trigger_search(&self, query: &str) {
        self(query)
    }
}

const GREETING: &str = "¡Hola! Soy tu asistente de Jama. Cuéntame qué tipo de lugar estás buscando y te ayudo a encontrarlo. Por ejemplo: \"Busco una cafetería tranquila para trabajar\" o \"Quiero un restaurante romántico para una cita\".";

/// Substring that marks a bot message as a search offer.
const OFFER_MARKER: &str = "busco lugares";

fn offer_message(query: &str) -> String {
    format!(
        "¿Te parece si busco lugares que coincidan con \"{}\"? Puedes hacer clic en el botón de abajo para ver los resultados.",
        query
    )
}

struct SessionInner {
    id: Uuid,
    config: SessionConfig,
    messages: Mutex<Vec<ChatMessage>>,
    typing: AtomicBool,
    pending_offer: Mutex<Option<String>>,
    closed: AtomicBool,
    scheduler: ReplyScheduler,
    trigger: Arc<dyn SearchTrigger>,
    metrics: Arc<AppMetrics>,
}

impl SessionInner {
    fn append(&self, role: MessageRole, content: String) {
        let mut messages = self.messages.lock();
        // History is append-only, so the next index doubles as a monotonic
        // ordering key independent of wall-clock.
        let id = messages.len() as u64 + 1;
        messages.push(ChatMessage {
            id,
            role,
            content,
            timestamp: Utc::now(),
        });
    }
}

/// One chat interaction: an append-only message history, a typing
/// indicator, and at most one pending search offer. Delayed bot replies run
/// on the ambient tokio runtime; closing the session cancels anything not
/// yet fired.
pub struct ChatSession {
    inner: Arc<SessionInner>,
}

impl ChatSession {
    pub fn new(
        config: SessionConfig,
        trigger: Arc<dyn SearchTrigger>,
        metrics: Arc<AppMetrics>,
    ) -> Self {
        let inner = Arc::new(SessionInner {
            id: Uuid::new_v4(),
            messages: Mutex::new(Vec::new()),
            typing: AtomicBool::new(false),
            pending_offer: Mutex::new(None),
            closed: AtomicBool::new(false),
            scheduler: ReplyScheduler::default(),
            trigger,
            metrics,
            config,
        });

        if inner.config.greeting {
            inner.append(MessageRole::Bot, GREETING.to_string());
        }
        inner.metrics.inc_session();
        info!(session_id = %inner.id, "chat session opened");

        Self { inner }
    }

    /// Handle one user turn. Empty or whitespace-only input is ignored and
    /// returns false. Otherwise the user message is appended synchronously
    /// and the canned reply for its classified category is scheduled after
    /// the reply delay. When the text reads as a concrete search, a search
    /// offer echoing the submitted text is scheduled independently after
    /// the offer delay.
    pub fn submit(&self, text: &str) -> bool {
        let inner = &self.inner;
        if inner.closed.load(Ordering::SeqCst) {
            return false;
        }

        let submitted = text.trim().to_string();
        if submitted.is_empty() {
            return false;
        }

        inner.append(MessageRole::User, submitted.clone());
        inner.metrics.inc_message();

        let category = classify(&submitted);
        inner.typing.store(true, Ordering::SeqCst);

        let reply_state = Arc::clone(inner);
        inner.scheduler.schedule(inner.config.reply_delay, move || {
            if reply_state.closed.load(Ordering::SeqCst) {
                return;
            }
            reply_state.append(MessageRole::Bot, category.canned_reply().to_string());
            reply_state.typing.store(false, Ordering::SeqCst);
            reply_state.metrics.inc_reply();
        });

        if wants_search(&submitted) {
            let offer_state = Arc::clone(inner);
            let query = submitted.clone();
            inner.scheduler.schedule(inner.config.offer_delay, move || {
                if offer_state.closed.load(Ordering::SeqCst) {
                    return;
                }
                offer_state.append(MessageRole::Bot, offer_message(&query));
                *offer_state.pending_offer.lock() = Some(query);
                offer_state.metrics.inc_offer();
            });
        }

        info!(
            session_id = %inner.id,
            category = ?category,
            "user message accepted"
        );
        true
    }

    /// Run the pending search offer: dispatches the remembered query to the
    /// `SearchTrigger` and clears the flag. Returns false when no offer is
    /// pending or the offer message is no longer the latest bot turn.
    pub fn confirm_search_offer(&self) -> bool {
        let inner = &self.inner;
        if inner.closed.load(Ordering::SeqCst) {
            return false;
        }

        let offer_visible = {
            let messages = inner.messages.lock();
            messages
                .iter()
                .rev()
                .find(|message| message.role == MessageRole::Bot)
                .is_some_and(|message| message.content.contains(OFFER_MARKER))
        };
        if !offer_visible {
            return false;
        }

        let Some(query) = inner.pending_offer.lock().take() else {
            return false;
        };

        inner.trigger.trigger_search(&query);
        inner.metrics.inc_search();
        info!(session_id = %inner.id, query = %query, "search offer confirmed");
        true
    }

    /// Tear the session down: pending scheduled replies are cancelled and a
    /// task that already slipped past the abort becomes a no-op.
    pub fn close(&self) {
        let inner = &self.inner;
        if inner.closed.swap(true, Ordering::SeqCst) {
            return;
        }
        inner.scheduler.cancel_all();
        inner.typing.store(false, Ordering::SeqCst);
        info!(session_id = %inner.id, "chat session closed");
    }

    pub fn messages(&self) -> Vec<ChatMessage> {
        self.inner.messages.lock().clone()
    }

    pub fn is_typing(&self) -> bool {
        self.inner.typing.load(Ordering::SeqCst)
    }

    pub fn pending_search_offer(&self) -> Option<String> {
        self.inner.pending_offer.lock().clone()
    }

    pub fn is_closed(&self) -> bool {
        self.inner.closed.load(Ordering::SeqCst)
    }

    pub fn session_id(&self) -> Uuid {
        self.inner.id
    }
}

impl Drop for ChatSession {
    fn drop(&mut self) {
        self.close();
    }
}
