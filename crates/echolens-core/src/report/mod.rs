pub mod console;
pub mod progress;

use crate::errors::{EchoError, EchoResult};
use crate::model::QueryParams;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tracing::info;

/// Caption shown next to the metric tiles and charts.
pub const HARDCODED_METRICS_NOTE: &str =
    "Note: Metric values below are currently hardcoded; they are not parsed from the AI response.";

/// One probability tile: horizon in days, percentage, qualitative label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbabilityPoint {
    pub days: u32,
    pub percent: u8,
    pub label: &'static str,
}

/// Values behind the metric tiles and both charts.
///
/// These are fixed constants. They are NOT derived from the model's text and
/// do not change with the input parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayMetrics {
    pub risk_score: u8,
    pub risk_label: &'static str,
    /// Reference line of the risk gauge.
    pub risk_reference: u8,
    pub probabilities: [ProbabilityPoint; 3],
}

impl DisplayMetrics {
    pub const HARDCODED: DisplayMetrics = DisplayMetrics {
        risk_score: 72,
        risk_label: "High Risk",
        risk_reference: 50,
        probabilities: [
            ProbabilityPoint {
                days: 30,
                percent: 45,
                label: "Moderate",
            },
            ProbabilityPoint {
                days: 60,
                percent: 67,
                label: "Elevated",
            },
            ProbabilityPoint {
                days: 90,
                percent: 78,
                label: "High",
            },
        ],
    };
}

/// Everything one successful prediction produced. Only constructed after both
/// completions returned, so a report is never partial.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionReport {
    pub params: QueryParams,
    pub prediction: String,
    pub comparison: String,
    pub model: String,
    pub generated_at: DateTime<Utc>,
}

impl PredictionReport {
    /// Plain-text report: parameters, timestamp and both raw responses concatenated.
    pub fn render_text(&self) -> String {
        format!(
            "EchoLens Prediction Report
Generated: {generated} UTC

Region: {region}
Active Cases: {cases}
Forecast Period: {days} days

=== PREDICTION ===
{prediction}

=== HISTORICAL COMPARISON ===
{comparison}

---
Generated by EchoLens
Powered by Groq API ({model})
",
            generated = self.generated_at.format("%Y-%m-%d %H:%M:%S"),
            region = self.params.region,
            cases = self.params.formatted_cases(),
            days = self.params.horizon.days(),
            prediction = self.prediction,
            comparison = self.comparison,
            model = self.model,
        )
    }

    /// `echolens_report_{region}_{YYYYmmdd_HHMMSS}.txt`
    pub fn file_name(&self) -> String {
        let region: String = self
            .params
            .region
            .chars()
            .map(|c| match c {
                ' ' | '/' | '\\' => '_',
                c => c,
            })
            .collect();
        format!(
            "echolens_report_{}_{}.txt",
            region,
            self.generated_at.format("%Y%m%d_%H%M%S")
        )
    }

    /// Write the report into `dir`. The file appears complete or not at all.
    pub fn write_to_dir(&self, dir: &Path) -> EchoResult<PathBuf> {
        std::fs::create_dir_all(dir).map_err(|e| EchoError::io(dir, e))?;
        let path = dir.join(self.file_name());
        write_file_atomic(&path, self.render_text().as_bytes())?;
        info!(path = %path.display(), "wrote prediction report");
        Ok(path)
    }
}

fn write_file_atomic(path: &Path, bytes: &[u8]) -> EchoResult<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    let base = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("report");
    let tmp_path = parent.join(format!(".{}.tmp-{}", base, std::process::id()));

    std::fs::write(&tmp_path, bytes).map_err(|e| EchoError::io(&tmp_path, e))?;
    if let Err(err) = std::fs::rename(&tmp_path, path) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(EchoError::io(path, err));
    }
    Ok(())
}
