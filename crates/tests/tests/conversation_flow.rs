use std::sync::Arc;
use std::time::Duration;

use jama_chat::{ChatSession, SessionConfig};
use jama_core::MessageRole;
use jama_observability::AppMetrics;
use parking_lot::Mutex;

fn session_with_sink() -> (ChatSession, Arc<Mutex<Vec<String>>>) {
    let searches: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = searches.clone();
    let trigger = Arc::new(move |query: &str| {
        sink.lock().push(query.to_string());
    });
    let session = ChatSession::new(SessionConfig::default(), trigger, AppMetrics::shared());
    (session, searches)
}

#[tokio::test(start_paused = true)]
async fn concrete_search_request_produces_a_confirmable_offer() {
    let (session, searches) = session_with_sink();
    let text = "Busco una cafetería tranquila para trabajar";

    assert!(session.submit(text));
    assert!(session.is_typing());

    // canned reply lands first: "trabajar" classifies as the work category
    tokio::time::sleep(Duration::from_millis(1600)).await;
    let messages = session.messages();
    assert_eq!(messages.len(), 3);
    assert!(!session.is_typing());
    assert!(messages[2].content.contains("lugar para trabajar"));
    assert!(session.pending_search_offer().is_none());

    // the offer follows, echoing the submitted text verbatim
    tokio::time::sleep(Duration::from_millis(500)).await;
    let messages = session.messages();
    assert_eq!(messages.len(), 4);
    assert_eq!(messages[3].role, MessageRole::Bot);
    assert!(messages[3].content.contains(text));
    assert_eq!(session.pending_search_offer().as_deref(), Some(text));

    // confirming dispatches the remembered query exactly once
    assert!(session.confirm_search_offer());
    assert_eq!(searches.lock().as_slice(), [text.to_string()]);
    assert!(session.pending_search_offer().is_none());
    assert!(!session.confirm_search_offer());
    assert_eq!(searches.lock().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn casual_greeting_never_offers_a_search() {
    let (session, searches) = session_with_sink();

    assert!(session.submit("hola"));
    tokio::time::sleep(Duration::from_millis(3000)).await;

    // greeting + user turn + canned reply, nothing else
    assert_eq!(session.messages().len(), 3);
    assert!(session.pending_search_offer().is_none());
    assert!(!session.confirm_search_offer());
    assert!(searches.lock().is_empty());
}

#[tokio::test(start_paused = true)]
async fn blank_input_is_ignored_without_a_reply() {
    let (session, _) = session_with_sink();

    assert!(!session.submit("  \t "));
    tokio::time::sleep(Duration::from_millis(3000)).await;

    assert_eq!(session.messages().len(), 1);
    assert!(!session.is_typing());
}

#[tokio::test(start_paused = true)]
async fn closing_before_the_delay_freezes_the_history() {
    let (session, searches) = session_with_sink();

    session.submit("Busco una cafetería tranquila para trabajar");
    let before = session.messages().len();

    session.close();
    tokio::time::sleep(Duration::from_millis(5000)).await;

    assert_eq!(session.messages().len(), before);
    assert!(session.pending_search_offer().is_none());
    assert!(searches.lock().is_empty());
    assert!(session.is_closed());
}

#[tokio::test(start_paused = true)]
async fn fast_second_turn_interleaves_with_monotonic_ids() {
    let (session, _) = session_with_sink();

    session.submit("Busco una cafetería tranquila para trabajar");
    tokio::time::sleep(Duration::from_millis(200)).await;
    session.submit("quiero algo en Palermo, por favor");
    tokio::time::sleep(Duration::from_millis(4000)).await;

    let messages = session.messages();
    // greeting + 2 user turns + 2 canned replies + 2 offers
    assert_eq!(messages.len(), 7);
    let ids: Vec<u64> = messages.iter().map(|m| m.id).collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test(start_paused = true)]
async fn metrics_follow_the_dialogue() {
    let metrics = AppMetrics::shared();
    let trigger = Arc::new(|_: &str| {});
    let session = ChatSession::new(SessionConfig::default(), trigger, metrics.clone());

    session.submit("Necesito un parque para los chicos");
    tokio::time::sleep(Duration::from_millis(3000)).await;
    session.confirm_search_offer();

    let snapshot = metrics.snapshot();
    assert_eq!(snapshot.sessions_total, 1);
    assert_eq!(snapshot.messages_total, 1);
    assert_eq!(snapshot.replies_total, 1);
    assert_eq!(snapshot.offers_total, 1);
    assert_eq!(snapshot.searches_total, 1);
}
