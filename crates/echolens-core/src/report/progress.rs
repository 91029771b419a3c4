//! Progress reporting for a prediction run. The predictor emits stages in
//! order; the console layer consumes them via a sink.

use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionStage {
    Initializing,
    AnalyzingPatterns,
    GeneratingInsights,
    Comparing,
    Complete,
}

impl PredictionStage {
    /// Rough completion percentage shown next to the stage.
    pub fn percent(self) -> u8 {
        match self {
            Self::Initializing => 20,
            Self::AnalyzingPatterns => 40,
            Self::GeneratingInsights => 80,
            Self::Comparing => 90,
            Self::Complete => 100,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Initializing => "Initializing AI analysis...",
            Self::AnalyzingPatterns => "Analyzing historical patterns...",
            Self::GeneratingInsights => "Generating insights...",
            Self::Comparing => "Comparing to historical pandemics...",
            Self::Complete => "Full prediction analysis complete!",
        }
    }
}

/// Sink for progress events.
pub type ProgressSink = Arc<dyn Fn(PredictionStage) + Send + Sync>;
