// src/model/analysis.rs
use serde::{Serialize, Deserialize};
use serde_json::Value;

/// Body of `POST /analyze`. The query is sent as typed, untrimmed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(alias = "analysisId")]
    pub analysis_id: String,
    pub query: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<AnalysisResults>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResults {
    /// Raw supporting data. No structure is assumed.
    #[serde(default)]
    pub data: Value,
    pub analysis: String,
    pub recommendations: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_steps: Option<u32>,
}

impl AnalysisResults {
    /// `data` rendered with two-space indentation.
    pub fn pretty_data(&self) -> String {
        serde_json::to_string_pretty(&self.data).unwrap_or_else(|_| self.data.to_string())
    }
}
