//! Loads the website-samples manifest.
//!
//! Every failure (missing file, bad status, network error, malformed JSON)
//! ends in the same empty-but-valid state. Callers never see an error; the
//! cause goes to a [`DiagnosticSink`] and nowhere else.

use std::cell::Cell;
use std::rc::Rc;

use gloo_net::http::Request;
use log::{debug, info, warn};
use thiserror::Error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config;
use crate::models::{SampleCategory, WebsiteSample, WebsitesManifest};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ManifestError {
    #[error("manifest not found")]
    NotFound,
    #[error("manifest request failed with status {0}")]
    Status(u16),
    #[error("manifest request failed: {0}")]
    Transport(String),
    #[error("manifest is malformed: {0}")]
    Parse(String),
}

/// Where the raw manifest text comes from.
#[allow(async_fn_in_trait)]
pub trait ManifestSource {
    async fn fetch(&self) -> Result<String, ManifestError>;
}

pub trait DiagnosticSink {
    fn report(&self, error: &ManifestError);
}

/// Default sink, writes through the `log` facade.
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, error: &ManifestError) {
        match error {
            // Expected before the first samples are published
            ManifestError::NotFound => info!("No website samples manifest yet"),
            other => warn!("Error loading website samples: {}", other),
        }
    }
}

pub struct HttpManifestSource {
    url: String,
}

impl HttpManifestSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl ManifestSource for HttpManifestSource {
    async fn fetch(&self) -> Result<String, ManifestError> {
        let response = Request::get(&self.url)
            .send()
            .await
            .map_err(|e| ManifestError::Transport(e.to_string()))?;

        if response.status() == 404 {
            return Err(ManifestError::NotFound);
        }
        if !response.ok() {
            return Err(ManifestError::Status(response.status()));
        }
        response
            .text()
            .await
            .map_err(|e| ManifestError::Transport(e.to_string()))
    }
}

/// Fetches and parses the manifest. Never fails: any error is reported to
/// `sink` and replaced by an empty manifest.
pub async fn load_manifest<S, D>(source: &S, sink: &D) -> WebsitesManifest
where
    S: ManifestSource,
    D: DiagnosticSink,
{
    let parsed = match source.fetch().await {
        Ok(body) => serde_json::from_str::<WebsitesManifest>(&body)
            .map_err(|e| ManifestError::Parse(e.to_string())),
        Err(err) => Err(err),
    };

    match parsed {
        Ok(manifest) => manifest,
        Err(err) => {
            sink.report(&err);
            WebsitesManifest::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ManifestState {
    pub categories: Vec<SampleCategory>,
    pub samples: Vec<WebsiteSample>,
    pub loading: bool,
    /// Kept for the page's benefit; the loader never fills it in.
    pub error: Option<String>,
}

impl ManifestState {
    pub fn pending() -> Self {
        Self {
            categories: Vec::new(),
            samples: Vec::new(),
            loading: true,
            error: None,
        }
    }

    pub fn settled(manifest: WebsitesManifest) -> Self {
        Self {
            categories: manifest.categories,
            samples: manifest.samples,
            loading: false,
            error: None,
        }
    }
}

/// Cleared when the component that started a load unmounts.
#[derive(Clone)]
pub struct Liveness(Rc<Cell<bool>>);

impl Liveness {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn kill(&self) {
        self.0.set(false);
    }

    pub fn is_alive(&self) -> bool {
        self.0.get()
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

/// Publishes the pending state, loads, then publishes the settled state
/// unless `alive` was cleared while the request was in flight.
pub async fn load_into<S, D, F>(source: &S, sink: &D, alive: &Liveness, publish: F)
where
    S: ManifestSource,
    D: DiagnosticSink,
    F: Fn(ManifestState),
{
    publish(ManifestState::pending());
    let manifest = load_manifest(source, sink).await;
    if alive.is_alive() {
        publish(ManifestState::settled(manifest));
    } else {
        debug!("Manifest settled after unmount, dropping result");
    }
}

/// Loads the manifest once per mount.
#[hook]
pub fn use_website_manifest() -> ManifestState {
    let state = use_state_eq(ManifestState::pending);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let alive = Liveness::new();
                let guard = alive.clone();
                spawn_local(async move {
                    let source = HttpManifestSource::new(config::MANIFEST_PATH);
                    load_into(&source, &LogSink, &guard, |next| state.set(next)).await;
                });
                move || alive.kill()
            },
            (),
        );
    }

    (*state).clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    struct StubSource {
        response: Result<String, ManifestError>,
        // Simulates an unmount while the request is in flight
        kill_on_fetch: Option<Liveness>,
    }

    impl StubSource {
        fn body(body: &str) -> Self {
            Self { response: Ok(body.to_string()), kill_on_fetch: None }
        }

        fn failing(err: ManifestError) -> Self {
            Self { response: Err(err), kill_on_fetch: None }
        }
    }

    impl ManifestSource for StubSource {
        async fn fetch(&self) -> Result<String, ManifestError> {
            if let Some(alive) = &self.kill_on_fetch {
                alive.kill();
            }
            self.response.clone()
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        reports: RefCell<Vec<ManifestError>>,
    }

    impl DiagnosticSink for RecordingSink {
        fn report(&self, error: &ManifestError) {
            self.reports.borrow_mut().push(error.clone());
        }
    }

    const TWO_CATEGORIES: &str = r#"{
        "categories": [
            {"id": "food", "name": "Restaurants", "icon": "UtensilsCrossed"},
            {"id": "health", "name": "Clinics", "icon": "Stethoscope"}
        ],
        "samples": [
            {"id": "s1", "name": "Bistro", "description": "", "folder": "bistro", "file": "index.html", "category": "food"},
            {"id": "s2", "name": "Clinic", "description": "", "folder": "clinic", "file": "index.html", "category": "health"},
            {"id": "s3", "name": "Bakery", "description": "", "folder": "bakery", "file": "index.html", "category": "food"}
        ]
    }"#;

    fn run(source: &StubSource, sink: &RecordingSink, alive: &Liveness) -> Vec<ManifestState> {
        let published = RefCell::new(Vec::new());
        block_on(load_into(source, sink, alive, |s| published.borrow_mut().push(s)));
        published.into_inner()
    }

    #[test]
    fn loads_categories_and_samples() {
        let sink = RecordingSink::default();
        let manifest = block_on(load_manifest(&StubSource::body(TWO_CATEGORIES), &sink));
        assert_eq!(manifest.categories.len(), 2);
        assert_eq!(manifest.samples.len(), 3);
        assert!(sink.reports.borrow().is_empty());
    }

    #[test]
    fn not_found_settles_empty_without_error() {
        let sink = RecordingSink::default();
        let states = run(&StubSource::failing(ManifestError::NotFound), &sink, &Liveness::new());

        assert_eq!(states.len(), 2);
        assert!(states[0].loading);
        let settled = &states[1];
        assert!(!settled.loading);
        assert!(settled.samples.is_empty());
        assert!(settled.categories.is_empty());
        assert_eq!(settled.error, None);
        assert_eq!(*sink.reports.borrow(), vec![ManifestError::NotFound]);
    }

    #[test]
    fn malformed_json_settles_empty_without_error() {
        let sink = RecordingSink::default();
        let states = run(&StubSource::body("{ not json"), &sink, &Liveness::new());

        assert!(states[0].loading);
        assert_eq!(states[1], ManifestState::settled(WebsitesManifest::default()));
        assert!(matches!(sink.reports.borrow()[0], ManifestError::Parse(_)));
    }

    #[test]
    fn server_error_and_transport_failure_are_swallowed() {
        for err in [ManifestError::Status(500), ManifestError::Transport("offline".into())] {
            let sink = RecordingSink::default();
            let states = run(&StubSource::failing(err.clone()), &sink, &Liveness::new());
            assert_eq!(states.last().unwrap().error, None);
            assert!(states.last().unwrap().samples.is_empty());
            assert_eq!(*sink.reports.borrow(), vec![err]);
        }
    }

    #[test]
    fn loaded_page_filters_by_selected_category() {
        use crate::samples::filter::{filter_samples, CategoryQuery};

        let states = run(&StubSource::body(TWO_CATEGORIES), &RecordingSink::default(), &Liveness::new());
        let page = states.last().unwrap();
        assert!(!page.loading);
        assert_eq!(page.categories.len(), 2);

        let food = CategoryQuery { category: Some("food".to_string()) };
        let shown: Vec<_> = filter_samples(&page.samples, food.active_category())
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(shown, vec!["s1", "s3"]);

        let all = CategoryQuery::default();
        assert_eq!(filter_samples(&page.samples, all.active_category()).len(), 3);
    }

    #[test]
    fn late_result_after_unmount_is_dropped() {
        let alive = Liveness::new();
        let source = StubSource {
            response: Ok(TWO_CATEGORIES.to_string()),
            kill_on_fetch: Some(alive.clone()),
        };
        let states = run(&source, &RecordingSink::default(), &alive);

        assert_eq!(states, vec![ManifestState::pending()]);
    }
}
