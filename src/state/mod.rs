// src/state/mod.rs
use std::sync::Arc;

use crate::api::ApiClient;
use crate::diagnostics::DiagnosticSink;

pub mod insights_state;
pub mod analysis_state;

pub use insights_state::{InsightsPanel, InsightsPhase};
pub use analysis_state::{AnalysisPanel, AnalysisPhase};

/// What every panel needs to talk to the outside world.
#[derive(Clone)]
pub struct Services {
    pub client: ApiClient,
    pub sink: Arc<dyn DiagnosticSink>,
}

// Screen/tab tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Insights,
    Analysis,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Insights, Tab::Analysis];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Insights => "Quick Insights",
            Tab::Analysis => "AI Analysis",
        }
    }
}

/// The single panel alive at any moment.
pub enum MountedPanel {
    Insights(InsightsPanel),
    Analysis(AnalysisPanel),
}

impl MountedPanel {
    fn mount(tab: Tab, services: &Services) -> Self {
        match tab {
            Tab::Insights => MountedPanel::Insights(InsightsPanel::mount(services)),
            Tab::Analysis => MountedPanel::Analysis(AnalysisPanel::new()),
        }
    }
}

/// Tab selector and whichever panel it currently shows. Switching drops the
/// old panel along with anything it had in flight.
pub struct Shell {
    services: Services,
    current_tab: Tab,
    panel: MountedPanel,
}

impl Shell {
    pub fn new(services: Services) -> Self {
        let current_tab = Tab::default();
        let panel = MountedPanel::mount(current_tab, &services);
        Self { services, current_tab, panel }
    }

    pub fn current_tab(&self) -> Tab {
        self.current_tab
    }

    pub fn select(&mut self, tab: Tab) {
        if tab == self.current_tab {
            return;
        }
        self.current_tab = tab;
        self.panel = MountedPanel::mount(tab, &self.services);
    }

    /// Picks up finished requests for the mounted panel.
    pub fn poll(&mut self) {
        match &mut self.panel {
            MountedPanel::Insights(panel) => panel.poll(&self.services),
            MountedPanel::Analysis(panel) => panel.poll(&self.services),
        }
    }

    pub fn base_url(&self) -> &str {
        self.services.client.base_url()
    }

    /// Split borrow for views that both mutate the panel and issue requests.
    pub fn panel_mut(&mut self) -> (&mut MountedPanel, &Services) {
        (&mut self.panel, &self.services)
    }
}
