// src/model/insight.rs
use serde::{Serialize, Deserialize};

/// A single precomputed metric summary. Displayed verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub metric: String,
    pub value: String,
    pub trend: String,
}

/// Body of `GET /quick-insights`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightsResponse {
    pub insights: Vec<Insight>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_payload() {
        let body = r#"{"insights":[
            {"metric":"Total Revenue (30 days)","value":"$1,204.50","trend":"17 orders"},
            {"metric":"Active Customers","value":"42","trend":"Across all segments"}
        ]}"#;

        let response: InsightsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.insights.len(), 2);
        assert_eq!(response.insights[0].value, "$1,204.50");
        assert_eq!(response.insights[1].trend, "Across all segments");
    }

    #[test]
    fn missing_envelope_is_rejected() {
        assert!(serde_json::from_str::<InsightsResponse>("[]").is_err());
    }
}
