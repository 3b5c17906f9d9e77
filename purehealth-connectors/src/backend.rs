//! HTTP client for the `/api/ai` analysis backend
//!
//! ## Endpoints
//!
//! | Method                | Path                      |
//! |-----------------------|---------------------------|
//! | [`BackendClient::upload`]          | POST `/api/ai/upload`          |
//! | [`BackendClient::analyze`]         | POST `/api/ai/analyze`         |
//! | [`BackendClient::predictions`]     | POST `/api/ai/predictions`     |
//! | [`BackendClient::risk_assessment`] | POST `/api/ai/risk-assessment` |
//! | [`BackendClient::trend_analysis`]  | POST `/api/ai/trend-analysis`  |
//! | [`BackendClient::recommendations`] | POST `/api/ai/recommendations` |
//! | [`BackendClient::save_report`]     | POST `/api/ai/save-report`     |
//! | [`BackendClient::reports`]         | GET  `/api/ai/reports`         |
//!
//! Every call is a single attempt: a non-2xx status comes back as
//! [`BackendError::Status`] with the code embedded, transport failures
//! as [`BackendError::Request`]. The caller renders the notification.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use purehealth_core::WaterSample;

use crate::{AsyncConnector, ConnectionStats};

/// Backend client errors
#[derive(Debug, Error)]
pub enum BackendError {
    /// Network or transport failure
    #[error("request failed: {0}")]
    Request(String),

    /// Backend answered with a non-2xx status
    #[error("backend error {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, as far as it was readable
        message: String,
    },

    /// Request or response JSON was unusable
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Client was misconfigured
    #[error("configuration error: {0}")]
    Config(String),
}

/// Authentication methods the backend accepts
#[derive(Clone)]
pub enum AuthMethod {
    /// No authentication (local development backends)
    None,
    /// Bearer token issued to a field device
    Bearer(String),
    /// Static API key in a custom header
    ApiKey {
        /// Header name
        header: String,
        /// Header value
        value: String,
    },
}

/// Backend client configuration
#[derive(Clone)]
pub struct BackendConfig {
    /// Base URL of the backend, scheme included
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Authentication method
    pub auth: AuthMethod,
    /// Extra headers sent with every request
    pub headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl BackendConfig {
    /// Create a configuration with defaults for the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
            auth: AuthMethod::None,
            headers: HashMap::new(),
            user_agent: format!("PureHealth/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set bearer token authentication
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.auth = AuthMethod::Bearer(token.into());
        self
    }

    /// Set API key authentication
    pub fn api_key(mut self, header: impl Into<String>, value: impl Into<String>) -> Self {
        self.auth = AuthMethod::ApiKey {
            header: header.into(),
            value: value.into(),
        };
        self
    }

    /// Set request timeout in seconds
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    /// Add a custom header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

// ===== Response documents =====
//
// The backend's JSON is free-form and versionless; every field is
// optional so a schema drift degrades to `None`, not a parse failure.

/// Analysis document returned by upload and analyze
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Station the analysis applies to
    #[serde(default)]
    pub station_id: Option<String>,
    /// Backend-computed WQI
    #[serde(default)]
    pub wqi: Option<f32>,
    /// Backend-assigned class letter
    #[serde(default)]
    pub wqi_class: Option<String>,
    /// Narrative summary for display
    #[serde(default)]
    pub summary: Option<String>,
    /// Parameter echo, shapes preserved
    #[serde(default)]
    pub parameters: serde_json::Map<String, serde_json::Value>,
}

/// One predicted index point
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionPoint {
    /// Prediction target time, epoch milliseconds
    pub timestamp: u64,
    /// Predicted WQI
    pub predicted_wqi: f32,
}

/// Prediction document
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionSet {
    /// Station the predictions apply to
    #[serde(default)]
    pub station_id: Option<String>,
    /// Model confidence in [0, 1], when the backend reports one
    #[serde(default)]
    pub confidence: Option<f32>,
    /// Predicted points, soonest first
    #[serde(default)]
    pub points: Vec<PredictionPoint>,
}

/// One disease entry in a backend risk assessment
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiseaseRiskEntry {
    /// Disease name as the backend labels it
    pub disease: String,
    /// Risk percentage
    pub risk_percent: f32,
    /// Backend-assigned level label
    #[serde(default)]
    pub level: Option<String>,
}

/// Risk assessment document
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    /// Outbreak probability score
    #[serde(default)]
    pub outbreak_score: Option<f32>,
    /// Outbreak severity label
    #[serde(default)]
    pub outbreak_level: Option<String>,
    /// Per-disease risks
    #[serde(default)]
    pub disease_risks: Vec<DiseaseRiskEntry>,
}

/// Trend analysis document
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendAnalysis {
    /// Fitted slope in WQI points per day
    #[serde(default)]
    pub slope_per_day: Option<f32>,
    /// "improving", "stable", or "deteriorating"
    #[serde(default)]
    pub direction: Option<String>,
}

/// One actionable recommendation
#[derive(Debug, Clone, Deserialize)]
pub struct Recommendation {
    /// 1 = act now, larger = routine
    pub priority: u8,
    /// Recommendation text
    pub message: String,
}

#[derive(Debug, Default, Deserialize)]
struct RecommendationSet {
    #[serde(default)]
    recommendations: Vec<Recommendation>,
}

/// Report draft submitted to save-report
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDraft {
    /// Report title
    pub title: String,
    /// Station covered
    pub station_id: String,
    /// District covered
    pub district: String,
    /// Rendered report body (markdown)
    pub body: String,
}

/// Stored report acknowledgment
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedReport {
    /// Backend-assigned identifier
    pub report_id: String,
    /// Storage time, epoch milliseconds
    #[serde(default)]
    pub created_at: Option<u64>,
}

/// Report listing entry
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    /// Backend-assigned identifier
    pub report_id: String,
    /// Report title
    pub title: String,
    /// Storage time, epoch milliseconds
    #[serde(default)]
    pub created_at: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct ReportList {
    #[serde(default)]
    reports: Vec<ReportSummary>,
}

/// Client for the analysis backend
pub struct BackendClient {
    config: BackendConfig,
    agent: ureq::Agent,
    stats: Arc<Mutex<ConnectionStats>>,
}

impl BackendClient {
    /// Create a client, validating the configured base URL
    pub fn new(config: BackendConfig) -> Result<Self, BackendError> {
        if !config.base_url.starts_with("http://") && !config.base_url.starts_with("https://") {
            return Err(BackendError::Config(
                "base URL must start with http:// or https://".into(),
            ));
        }

        let agent = ureq::AgentBuilder::new()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build();

        Ok(Self {
            config,
            agent,
            stats: Arc::new(Mutex::new(ConnectionStats::default())),
        })
    }

    /// Upload a collected dataset file for analysis
    ///
    /// The file travels base64-encoded inside the JSON envelope the
    /// backend expects.
    pub async fn upload(&self, file_name: &str, data: &[u8]) -> Result<AnalysisResult, BackendError> {
        let body = serde_json::json!({
            "fileName": file_name,
            "fileData": BASE64.encode(data),
        });
        self.post_parsed("/api/ai/upload", &body)
    }

    /// Request an analysis for a station, optionally with fresh parameters
    pub async fn analyze(
        &self,
        station_id: &str,
        sample: Option<&WaterSample>,
    ) -> Result<AnalysisResult, BackendError> {
        let body = serde_json::json!({
            "stationId": station_id,
            "parameters": sample,
        });
        self.post_parsed("/api/ai/analyze", &body)
    }

    /// Request WQI predictions over a horizon in days
    pub async fn predictions(
        &self,
        station_id: &str,
        horizon_days: u32,
    ) -> Result<PredictionSet, BackendError> {
        let body = serde_json::json!({
            "stationId": station_id,
            "horizonDays": horizon_days,
        });
        self.post_parsed("/api/ai/predictions", &body)
    }

    /// Request the backend's own risk assessment for a station
    pub async fn risk_assessment(&self, station_id: &str) -> Result<RiskAssessment, BackendError> {
        let body = serde_json::json!({ "stationId": station_id });
        self.post_parsed("/api/ai/risk-assessment", &body)
    }

    /// Request a trend analysis over a window in days
    pub async fn trend_analysis(
        &self,
        station_id: &str,
        window_days: u32,
    ) -> Result<TrendAnalysis, BackendError> {
        let body = serde_json::json!({
            "stationId": station_id,
            "windowDays": window_days,
        });
        self.post_parsed("/api/ai/trend-analysis", &body)
    }

    /// Request recommendations for a station
    pub async fn recommendations(
        &self,
        station_id: &str,
    ) -> Result<Vec<Recommendation>, BackendError> {
        let body = serde_json::json!({ "stationId": station_id });
        let set: RecommendationSet = self.post_parsed("/api/ai/recommendations", &body)?;
        Ok(set.recommendations)
    }

    /// Store a rendered report on the backend
    pub async fn save_report(&self, report: &ReportDraft) -> Result<SavedReport, BackendError> {
        self.post_parsed("/api/ai/save-report", report)
    }

    /// List stored reports
    pub async fn reports(&self) -> Result<Vec<ReportSummary>, BackendError> {
        let value = self.get_json("/api/ai/reports")?;
        let list: ReportList = parse_document(value)?;
        Ok(list.reports)
    }

    fn post_parsed<T, B>(&self, path: &str, body: &B) -> Result<T, BackendError>
    where
        T: for<'de> Deserialize<'de>,
        B: Serialize + ?Sized,
    {
        let value = self.post_json(path, body)?;
        parse_document(value)
    }

    fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<serde_json::Value, BackendError> {
        let url = format!("{}{}", self.config.base_url, path);
        let request = self.build_request(self.agent.post(&url));

        let json = serde_json::to_string(body)
            .map_err(|err| BackendError::Serialization(err.to_string()))?;

        log::debug!("POST {path} ({} bytes)", json.len());
        let sent = json.len() as u64;
        self.execute(request.send_string(&json), sent)
    }

    fn get_json(&self, path: &str) -> Result<serde_json::Value, BackendError> {
        let url = format!("{}{}", self.config.base_url, path);
        let request = self.build_request(self.agent.get(&url));

        log::debug!("GET {path}");
        self.execute(request.call(), 0)
    }

    /// Add authentication and standard headers
    fn build_request(&self, mut request: ureq::Request) -> ureq::Request {
        match &self.config.auth {
            AuthMethod::None => {}
            AuthMethod::Bearer(token) => {
                request = request.set("Authorization", &format!("Bearer {token}"));
            }
            AuthMethod::ApiKey { header, value } => {
                request = request.set(header, value);
            }
        }

        for (name, value) in &self.config.headers {
            request = request.set(name, value);
        }

        request
            .set("Content-Type", "application/json")
            .set("Accept", "application/json")
    }

    /// Resolve one attempt; no retry, failures keep their status
    fn execute(
        &self,
        response: Result<ureq::Response, ureq::Error>,
        bytes_sent: u64,
    ) -> Result<serde_json::Value, BackendError> {
        match response {
            Ok(resp) => {
                let text = resp
                    .into_string()
                    .map_err(|err| BackendError::Request(err.to_string()))?;

                self.record(|stats| {
                    stats.requests_ok += 1;
                    stats.bytes_sent += bytes_sent;
                    stats.bytes_received += text.len() as u64;
                });

                if text.is_empty() {
                    return Ok(serde_json::Value::Null);
                }
                serde_json::from_str(&text)
                    .map_err(|err| BackendError::Serialization(err.to_string()))
            }
            Err(ureq::Error::Status(status, resp)) => {
                self.record(|stats| stats.requests_failed += 1);
                let message = resp.into_string().unwrap_or_default();
                log::warn!("backend returned {status}: {message}");
                Err(BackendError::Status { status, message })
            }
            Err(ureq::Error::Transport(err)) => {
                self.record(|stats| stats.requests_failed += 1);
                Err(BackendError::Request(err.to_string()))
            }
        }
    }

    fn record(&self, update: impl FnOnce(&mut ConnectionStats)) {
        let mut stats = match self.stats.lock() {
            Ok(stats) => stats,
            Err(poisoned) => poisoned.into_inner(),
        };
        update(&mut stats);
    }
}

fn parse_document<T: for<'de> Deserialize<'de>>(
    value: serde_json::Value,
) -> Result<T, BackendError> {
    serde_json::from_value(value).map_err(|err| BackendError::Serialization(err.to_string()))
}

#[async_trait::async_trait]
impl AsyncConnector for BackendClient {
    type Error = BackendError;

    async fn send(&self, path: &str, payload: &[u8]) -> Result<serde_json::Value, Self::Error> {
        let value: serde_json::Value = serde_json::from_slice(payload)
            .map_err(|err| BackendError::Serialization(err.to_string()))?;
        self.post_json(path, &value)
    }

    fn is_connected(&self) -> bool {
        // HTTP is stateless; readiness is discovered per request
        true
    }

    fn stats(&self) -> ConnectionStats {
        match self.stats.lock() {
            Ok(stats) => stats.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder() {
        let config = BackendConfig::new("https://api.purehealth.in")
            .bearer_token("test-token")
            .timeout_secs(60)
            .header("X-District", "Nashik");

        assert_eq!(config.base_url, "https://api.purehealth.in");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert!(config.headers.contains_key("X-District"));

        match config.auth {
            AuthMethod::Bearer(token) => assert_eq!(token, "test-token"),
            _ => panic!("wrong auth method"),
        }
    }

    #[test]
    fn url_validation() {
        assert!(BackendClient::new(BackendConfig::new("not-a-url")).is_err());
        assert!(BackendClient::new(BackendConfig::new("https://valid.url")).is_ok());
    }

    #[test]
    fn analysis_parses_tolerantly() {
        // Fields the client never heard of are ignored; missing ones
        // become None rather than failing the document
        let doc: AnalysisResult = parse_document(serde_json::json!({
            "stationId": "MH-GODAVARI-01",
            "wqi": 64.2,
            "modelVersion": "v7-nightly",
            "parameters": {"pH": {"value": "7.1"}}
        }))
        .unwrap();

        assert_eq!(doc.station_id.as_deref(), Some("MH-GODAVARI-01"));
        assert_eq!(doc.wqi, Some(64.2));
        assert!(doc.wqi_class.is_none());
        assert!(doc.parameters.contains_key("pH"));
    }

    #[test]
    fn risk_assessment_parses() {
        let doc: RiskAssessment = parse_document(serde_json::json!({
            "outbreakScore": 55.0,
            "outbreakLevel": "high",
            "diseaseRisks": [
                {"disease": "cholera", "riskPercent": 50.0, "level": "high"},
                {"disease": "typhoid", "riskPercent": 45.5}
            ]
        }))
        .unwrap();

        assert_eq!(doc.outbreak_score, Some(55.0));
        assert_eq!(doc.disease_risks.len(), 2);
        assert!(doc.disease_risks[1].level.is_none());
    }

    #[test]
    fn empty_recommendation_set_degrades_to_empty_vec() {
        let set: RecommendationSet = parse_document(serde_json::json!({})).unwrap();
        assert!(set.recommendations.is_empty());
    }

    #[test]
    fn broken_document_is_a_serialization_error() {
        let result: Result<RiskAssessment, _> =
            parse_document(serde_json::json!({"diseaseRisks": "none"}));
        assert!(matches!(result, Err(BackendError::Serialization(_))));
    }
}
