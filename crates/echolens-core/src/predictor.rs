//! Prediction pipeline: prompt → completion → report.
//!
//! Calls run strictly one after another on the caller's task. Any failure
//! ends the run; nothing is retried and no partial report is produced.

use crate::errors::EchoResult;
use crate::model::QueryParams;
use crate::prompts;
use crate::providers::llm::LlmClient;
use crate::report::progress::{PredictionStage, ProgressSink};
use crate::report::PredictionReport;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info_span, Instrument};

pub struct Predictor {
    client: Arc<dyn LlmClient>,
    model: String,
    progress: Option<ProgressSink>,
}

impl Predictor {
    /// `model` is the identifier recorded in reports; the client owns the one it sends.
    pub fn new(client: Arc<dyn LlmClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
            progress: None,
        }
    }

    pub fn with_progress(mut self, sink: ProgressSink) -> Self {
        self.progress = Some(sink);
        self
    }

    fn emit(&self, stage: PredictionStage) {
        if let Some(sink) = &self.progress {
            sink(stage);
        }
    }

    /// Full outbreak prediction text for `params`.
    pub async fn predict_outbreak(&self, params: &QueryParams) -> EchoResult<String> {
        let request = prompts::outbreak_request(params);
        let resp = self.client.complete(&request).await?;
        Ok(resp.text)
    }

    /// Historical comparison for a one-line situation summary.
    pub async fn analyze_comparison(&self, summary: &str) -> EchoResult<String> {
        let request = prompts::comparison_request(summary);
        let resp = self.client.complete(&request).await?;
        Ok(resp.text)
    }

    /// Three-field quick assessment.
    pub async fn quick_risk(&self, region: &str, cases: u64) -> EchoResult<String> {
        let span = info_span!("echolens.quick_risk", provider = self.client.provider_name());
        let request = prompts::quick_risk_request(region, cases);
        let resp = self.client.complete(&request).instrument(span).await?;
        Ok(resp.text)
    }

    /// Prediction, then comparison, then the assembled report.
    pub async fn run(&self, params: &QueryParams) -> EchoResult<PredictionReport> {
        let span = info_span!(
            "echolens.prediction",
            provider = self.client.provider_name(),
            horizon = params.horizon.days()
        );
        self.run_sequential(params).instrument(span).await
    }

    async fn run_sequential(&self, params: &QueryParams) -> EchoResult<PredictionReport> {
        self.emit(PredictionStage::Initializing);
        self.emit(PredictionStage::AnalyzingPatterns);
        let prediction = self.predict_outbreak(params).await?;
        debug!(chars = prediction.len(), "outbreak prediction received");

        self.emit(PredictionStage::GeneratingInsights);
        self.emit(PredictionStage::Comparing);
        let comparison = self
            .analyze_comparison(&prompts::situation_summary(params))
            .await?;
        debug!(chars = comparison.len(), "historical comparison received");

        self.emit(PredictionStage::Complete);
        Ok(PredictionReport {
            params: params.clone(),
            prediction,
            comparison,
            model: self.model.clone(),
            generated_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EchoError;
    use crate::model::ForecastHorizon;
    use crate::providers::llm::FakeClient;
    use std::sync::Mutex;

    #[tokio::test]
    async fn run_issues_prediction_then_comparison() {
        let fake = Arc::new(FakeClient::new("fake".into()));
        let predictor = Predictor::new(fake.clone(), "fake");
        let params = QueryParams::new("Test Region", 500, ForecastHorizon::Days30);

        let report = predictor.run(&params).await.unwrap();

        let seen = fake.requests();
        assert_eq!(seen.len(), 2);
        assert!(seen[0].user_prompt().contains("- Region: Test Region"));
        assert!(seen[1]
            .user_prompt()
            .contains("Region: Test Region, Cases: 500"));
        assert_eq!(report.params, params);
        assert!(report.prediction.starts_with("fake completion for: You are EchoLens"));
        assert!(report.comparison.starts_with("fake completion for: Compare this outbreak"));
    }

    #[tokio::test]
    async fn comparison_failure_yields_no_report() {
        let fake = Arc::new(FakeClient::new("fake".into()).failing_after(1, "quota exceeded"));
        let stages: Arc<Mutex<Vec<PredictionStage>>> = Arc::new(Mutex::new(Vec::new()));
        let sink_stages = stages.clone();
        let predictor = Predictor::new(fake.clone(), "fake").with_progress(Arc::new(
            move |s: PredictionStage| {
                sink_stages.lock().unwrap().push(s);
            },
        ));

        let err = predictor.run(&QueryParams::default()).await.unwrap_err();
        assert!(matches!(err, EchoError::Network { .. }));
        assert_eq!(fake.requests().len(), 2);

        let stages = stages.lock().unwrap();
        assert!(!stages.contains(&PredictionStage::Complete));
        assert_eq!(stages.last(), Some(&PredictionStage::Comparing));
    }

    #[tokio::test]
    async fn prediction_failure_skips_comparison() {
        let fake = Arc::new(FakeClient::new("fake".into()).failing("dns error"));
        let predictor = Predictor::new(fake.clone(), "fake");

        assert!(predictor.run(&QueryParams::default()).await.is_err());
        assert_eq!(fake.requests().len(), 1);
    }

    #[tokio::test]
    async fn quick_risk_sends_single_user_message() {
        let fake = Arc::new(FakeClient::new("fake".into()).with_response("Score: 40".into()));
        let predictor = Predictor::new(fake.clone(), "fake");

        let text = predictor.quick_risk("Peru", 2500).await.unwrap();
        assert_eq!(text, "Score: 40");
        assert_eq!(fake.requests()[0].messages.len(), 1);
    }
}
