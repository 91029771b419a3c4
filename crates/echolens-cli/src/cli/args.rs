use clap::{Parser, Subcommand};
use echolens_core::model::{DEFAULT_CASES, DEFAULT_REGION};
use echolens_core::{ForecastHorizon, QueryParams};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "echolens",
    version,
    about = "EchoLens: AI-powered pandemic outbreak predictions from historical epidemic patterns"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Full prediction: outbreak analysis, historical comparison and a text report
    Predict(PredictArgs),
    /// Quick risk assessment (score, level, one-sentence summary)
    Quick(QuickArgs),
    /// Browse the historical pandemic database
    History(HistoryArgs),
    /// Print a prompt without calling the model
    Prompt(PromptArgs),
    Version,
}

#[derive(clap::Args, Debug, Clone)]
pub struct QueryArgs {
    /// Geographic region to analyze, e.g. "Southeast Asia", "Europe"
    #[arg(long, default_value = DEFAULT_REGION)]
    pub region: String,

    /// Number of confirmed active cases in the region
    #[arg(long, default_value_t = DEFAULT_CASES)]
    pub cases: u64,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ModelArgs {
    /// Model identifier (overrides ECHOLENS_MODEL)
    #[arg(long)]
    pub model: Option<String>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct PredictArgs {
    #[command(flatten)]
    pub query: QueryArgs,

    /// Forecast period in days: 30, 60, 90, 120 or 180
    #[arg(long, default_value = "90")]
    pub days: ForecastHorizon,

    #[command(flatten)]
    pub model: ModelArgs,

    /// Directory the text report is written to
    #[arg(long, default_value = ".", env = "ECHOLENS_REPORT_DIR")]
    pub out_dir: PathBuf,

    /// Skip writing the text report
    #[arg(long)]
    pub no_report: bool,
}

impl PredictArgs {
    pub fn params(&self) -> QueryParams {
        QueryParams::new(self.query.region.clone(), self.query.cases, self.days)
    }
}

#[derive(clap::Args, Debug, Clone)]
pub struct QuickArgs {
    #[command(flatten)]
    pub query: QueryArgs,

    #[command(flatten)]
    pub model: ModelArgs,
}

#[derive(clap::Args, Debug, Clone)]
pub struct HistoryArgs {
    /// JSON file with historical pandemic records
    #[arg(long, default_value = echolens_core::history::DEFAULT_DATA_PATH, env = "ECHOLENS_DATA")]
    pub data: PathBuf,
}

#[derive(clap::Args, Debug, Clone)]
pub struct PromptArgs {
    #[command(subcommand)]
    pub kind: PromptKind,
}

#[derive(Subcommand, Debug, Clone)]
pub enum PromptKind {
    /// Full outbreak prediction prompt
    Outbreak {
        #[command(flatten)]
        query: QueryArgs,

        #[arg(long, default_value = "90")]
        days: ForecastHorizon,
    },
    /// Historical comparison prompt
    Comparison {
        #[command(flatten)]
        query: QueryArgs,

        /// Situation summary; defaults to "Region: <region>, Cases: <cases>"
        #[arg(long)]
        summary: Option<String>,
    },
    /// Quick risk assessment prompt
    Quick {
        #[command(flatten)]
        query: QueryArgs,
    },
}
