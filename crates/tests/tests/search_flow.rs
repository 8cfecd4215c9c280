use std::sync::Arc;
use std::time::Duration;

use jama_chat::{ChatSession, SessionConfig};
use jama_core::{FilterState, PlaceCategory};
use jama_observability::AppMetrics;
use jama_search::{fixtures, match_places, CatalogProvider, StaticCatalog};
use parking_lot::Mutex;

#[test]
fn trabajo_places_with_wifi_yield_exactly_one_result() {
    let catalog = StaticCatalog::new(fixtures::sample_places()).expect("sample data is valid");
    let filters = FilterState::default().toggle_category(PlaceCategory::Trabajo);

    let result = match_places(catalog.places(), &filters, "wifi");

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].name, "Café Palermo");
    assert_eq!(result[0].category, PlaceCategory::Trabajo);
}

#[test]
fn default_filters_and_empty_query_return_everything() {
    let catalog = StaticCatalog::new(fixtures::sample_places()).expect("sample data is valid");
    let result = match_places(catalog.places(), &FilterState::default(), "  ");
    assert_eq!(result, catalog.places());
}

#[test]
fn results_never_grow_or_reorder() {
    let catalog = StaticCatalog::new(fixtures::sample_places()).expect("sample data is valid");
    let queries = ["", "wifi", "parque", "terraza", "nada que ver"];

    for query in queries {
        let result = match_places(catalog.places(), &FilterState::default(), query);
        assert!(result.len() <= catalog.len());

        let positions: Vec<usize> = result
            .iter()
            .map(|place| {
                catalog
                    .places()
                    .iter()
                    .position(|p| p.id == place.id)
                    .expect("result places come from the catalog")
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "query {:?}", query);
    }
}

#[test]
fn loader_round_trips_the_sample_catalog() -> anyhow::Result<()> {
    let raw = serde_json::to_string(&fixtures::sample_places())?;
    let catalog = StaticCatalog::from_json_str(&raw)?;
    assert_eq!(catalog.places(), fixtures::sample_places().as_slice());
    Ok(())
}

/// The full loop: the chat offer hands the shell a query, the shell runs the
/// matcher with it.
#[tokio::test(start_paused = true)]
async fn confirmed_offer_drives_the_matcher() {
    let catalog = Arc::new(StaticCatalog::new(fixtures::sample_places()).expect("valid"));
    let results: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));

    let sink = results.clone();
    let shared = catalog.clone();
    let trigger = Arc::new(move |query: &str| {
        // the shell searches with the offered text as the free-text query
        for place in match_places(shared.places(), &FilterState::default(), query) {
            sink.lock().push(place.name);
        }
    });

    let session = ChatSession::new(SessionConfig::default(), trigger, AppMetrics::shared());
    session.submit("Busco una terraza romántica");
    tokio::time::sleep(Duration::from_millis(2500)).await;

    assert!(session.confirm_search_offer());
    // the verbatim sentence matches nothing; a refined query would
    assert!(results.lock().is_empty());
    assert_eq!(
        match_places(catalog.places(), &FilterState::default(), "terraza").len(),
        1
    );
}
