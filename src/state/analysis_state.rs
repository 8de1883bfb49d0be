// src/state/analysis_state.rs
use chrono::{DateTime, Local};

use crate::api::Pending;
use crate::model::AnalysisResult;
use super::Services;

const SOURCE: &str = "analysis";

/// The only failure text the user ever sees.
pub const ERROR_MESSAGE: &str = "Something went wrong. Try again?";

#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisPhase {
    Idle,
    Submitting,
    Success {
        result: AnalysisResult,
        received_at: DateTime<Local>,
    },
    Error(String),
}

/// A titled block of the result view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSection {
    pub title: &'static str,
    pub body: String,
    /// Render in a monospace block.
    pub preformatted: bool,
}

/// AI analysis tab: query text plus the request lifecycle.
pub struct AnalysisPanel {
    pub query: String,
    phase: AnalysisPhase,
    pending: Option<Pending<AnalysisResult>>,
}

impl Default for AnalysisPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisPanel {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            phase: AnalysisPhase::Idle,
            pending: None,
        }
    }

    pub fn phase(&self) -> &AnalysisPhase {
        &self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == AnalysisPhase::Submitting
    }

    pub fn can_submit(&self) -> bool {
        !self.query.trim().is_empty() && !self.is_submitting()
    }

    /// Sends the query. Returns whether a request went out; when it didn't,
    /// nothing changed.
    pub fn submit(&mut self, services: &Services) -> bool {
        if !self.can_submit() {
            return false;
        }

        services.sink.info(SOURCE, format!("sending query: {}", self.query));
        self.phase = AnalysisPhase::Submitting;
        self.pending = Some(services.client.analyze(&self.query));
        true
    }

    /// Enter in the query field.
    pub fn on_enter(&mut self, services: &Services) -> bool {
        self.submit(services)
    }

    pub fn poll(&mut self, services: &Services) {
        let Some(outcome) = self.pending.as_ref().and_then(Pending::take) else {
            return;
        };
        self.pending = None;

        self.phase = match outcome {
            Ok(result) => {
                services.sink.info(
                    SOURCE,
                    format!("analysis complete: id={} status={}", result.analysis_id, result.status),
                );
                AnalysisPhase::Success { result, received_at: Local::now() }
            }
            Err(e) => {
                services.sink.error(SOURCE, format!("analysis failed: {}", e));
                AnalysisPhase::Error(ERROR_MESSAGE.to_string())
            }
        };
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match &self.phase {
            AnalysisPhase::Success { result, .. } => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            AnalysisPhase::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Body of the result view. Empty until a result carrying `results` arrives.
    pub fn sections(&self) -> Vec<ResultSection> {
        let Some(results) = self.result().and_then(|r| r.results.as_ref()) else {
            return Vec::new();
        };

        vec![
            ResultSection { title: "Analysis", body: results.analysis.clone(), preformatted: false },
            ResultSection { title: "Recommendations", body: results.recommendations.clone(), preformatted: false },
            ResultSection { title: "Raw Data", body: results.pretty_data(), preformatted: true },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Method;
    use crate::state::tests::harness;
    use serde_json::json;

    fn with_query(query: &str) -> AnalysisPanel {
        let mut panel = AnalysisPanel::new();
        panel.query = query.to_string();
        panel
    }

    #[test]
    fn blank_query_never_sends() {
        let (mock, sink, services) = harness();

        for query in ["", "   ", "\t\n"] {
            let mut panel = with_query(query);
            assert!(!panel.can_submit());
            assert!(!panel.submit(&services));
            assert!(!panel.on_enter(&services));
            assert_eq!(panel.phase(), &AnalysisPhase::Idle);
            assert_eq!(panel.query, query);
        }

        assert_eq!(mock.request_count(), 0);
        assert!(sink.events().is_empty());
    }

    #[test]
    fn success_renders_analysis_recommendations_and_data() {
        let (mock, _sink, services) = harness();
        let mut panel = with_query("top products");

        assert!(panel.submit(&services));
        assert!(panel.is_submitting());
        mock.respond_json(0, 200, json!({
            "analysis_id": "temp_id",
            "query": "top products",
            "status": "complete",
            "results": {"analysis": "A", "recommendations": "R", "data": {"x": 1}}
        }));
        panel.poll(&services);

        let result = panel.result().unwrap();
        assert_eq!(result.status, "complete");
        assert!(panel.error().is_none());

        let sections = panel.sections();
        let bodies: Vec<&str> = sections.iter().map(|s| s.body.as_str()).collect();
        assert!(bodies.contains(&"A"));
        assert!(bodies.contains(&"R"));
        assert!(bodies.contains(&"{\n  \"x\": 1\n}"));
        assert!(sections[2].preformatted);
    }

    #[test]
    fn result_without_results_has_no_sections() {
        let (mock, _sink, services) = harness();
        let mut panel = with_query("pending work");
        panel.submit(&services);
        mock.respond_json(0, 200, json!({"analysis_id": "a1", "query": "pending work", "status": "queued"}));
        panel.poll(&services);

        assert_eq!(panel.result().unwrap().status, "queued");
        assert!(panel.sections().is_empty());
    }

    #[test]
    fn failure_shows_fixed_message_and_logs_detail() {
        let (mock, sink, services) = harness();
        let mut panel = with_query("top products");
        panel.submit(&services);
        mock.respond(0, 500, "Internal Server Error", "{\"detail\":\"snowflake down\"}");
        panel.poll(&services);

        assert!(panel.result().is_none());
        assert_eq!(panel.error(), Some("Something went wrong. Try again?"));
        let errors = sink.errors();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("500"));
    }

    #[test]
    fn transport_failure_shows_same_message() {
        let (mock, _sink, services) = harness();
        let mut panel = with_query("top products");
        panel.submit(&services);
        mock.fail(0, "dns error");
        panel.poll(&services);

        assert_eq!(panel.error(), Some(ERROR_MESSAGE));
        assert!(panel.result().is_none());
    }

    #[test]
    fn resubmit_clears_previous_error_and_result() {
        let (mock, _sink, services) = harness();
        let mut panel = with_query("revenue");
        panel.submit(&services);
        mock.fail(0, "timeout");
        panel.poll(&services);
        assert!(panel.error().is_some());

        panel.submit(&services);
        assert!(panel.error().is_none());
        assert!(panel.result().is_none());
        assert!(panel.is_submitting());
    }

    #[test]
    fn enter_matches_click() {
        let (clicked, _, click_services) = harness();
        let (entered, _, enter_services) = harness();

        let mut by_click = with_query("customer segments");
        let mut by_enter = with_query("customer segments");
        assert!(by_click.submit(&click_services));
        assert!(by_enter.on_enter(&enter_services));

        assert_eq!(entered.request_count(), 1);
        assert_eq!(entered.requests(), clicked.requests());
        assert_eq!(entered.requests()[0].method, Method::Post);
        assert_eq!(by_enter.phase(), by_click.phase());
    }

    #[test]
    fn only_one_request_in_flight() {
        let (mock, _sink, services) = harness();
        let mut panel = with_query("top products");

        assert!(panel.submit(&services));
        assert!(!panel.can_submit());
        assert!(!panel.submit(&services));
        assert!(!panel.on_enter(&services));
        assert_eq!(mock.request_count(), 1);
    }

    #[test]
    fn sends_the_raw_query() {
        let (mock, _sink, services) = harness();
        let mut panel = with_query("  top products  ");
        panel.submit(&services);

        let body: serde_json::Value =
            serde_json::from_slice(mock.requests()[0].body.as_ref().unwrap()).unwrap();
        assert_eq!(body["query"], "  top products  ");
    }
}
