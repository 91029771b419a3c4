//! EchoLens prediction client.
//!
//! Turns structured user input (region, active cases, forecast horizon) into
//! prompts for a hosted chat-completion model and turns the returned free
//! text into a displayable report:
//!
//! - [`prompts`]: pure prompt builders
//! - [`providers::llm`]: the completion client trait, the HTTP client and a fake
//! - [`predictor`]: the sequential prediction → comparison pipeline
//! - [`report`]: report artifact, hardcoded display metrics, terminal rendering
//! - [`history`]: static historical-pandemic records
//!
//! # Configuration
//!
//! | Environment Variable | Description |
//! |---------------------|-------------|
//! | `GROQ_API_KEY` | API credential (required) |
//! | `ECHOLENS_MODEL` | Model identifier (default: `openai/gpt-oss-120b`) |
//! | `ECHOLENS_API_URL` | Base URL (default: `https://api.groq.com/openai/v1`) |

pub mod config;
pub mod errors;
pub mod history;
pub mod model;
pub mod predictor;
pub mod prompts;
pub mod providers;
pub mod report;

pub use config::ClientConfig;
pub use errors::{EchoError, EchoResult};
pub use history::{load_records, HistoricalRecord, HistoryLoad};
pub use model::{ForecastHorizon, LlmResponse, QueryParams};
pub use predictor::Predictor;
pub use providers::llm::{CompletionRequest, FakeClient, GroqClient, LlmClient};
pub use report::{DisplayMetrics, PredictionReport};
