// src/state/insights_state.rs
use crate::api::Pending;
use crate::model::Insight;
use super::Services;

const SOURCE: &str = "insights";

#[derive(Debug, Clone, PartialEq)]
pub enum InsightsPhase {
    Loading,
    Ready(Vec<Insight>),
    /// The fetch failed. Logged, then shown as an empty list.
    FailedSilently,
}

/// Quick insights tab. Fetches once per mount.
pub struct InsightsPanel {
    phase: InsightsPhase,
    pending: Option<Pending<Vec<Insight>>>,
}

impl InsightsPanel {
    pub fn mount(services: &Services) -> Self {
        Self {
            phase: InsightsPhase::Loading,
            pending: Some(services.client.quick_insights()),
        }
    }

    /// Applies the fetch outcome once it has arrived.
    pub fn poll(&mut self, services: &Services) {
        let Some(outcome) = self.pending.as_ref().and_then(Pending::take) else {
            return;
        };
        self.pending = None;

        self.phase = match outcome {
            Ok(insights) => {
                services.sink.info(SOURCE, format!("got {} insights", insights.len()));
                InsightsPhase::Ready(insights)
            }
            Err(e) => {
                services.sink.error(SOURCE, format!("failed to fetch insights: {}", e));
                InsightsPhase::FailedSilently
            }
        };
    }

    pub fn phase(&self) -> &InsightsPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == InsightsPhase::Loading
    }

    /// One entry per card, in response order.
    pub fn cards(&self) -> &[Insight] {
        match &self.phase {
            InsightsPhase::Ready(insights) => insights,
            InsightsPhase::Loading | InsightsPhase::FailedSilently => &[],
        }
    }
}
