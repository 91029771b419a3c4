use super::args::*;
use crate::exit_codes::{self, SUCCESS};
use echolens_core::{ClientConfig, EchoError, EchoResult, GroqClient};

pub mod history;
pub mod predict;
pub mod prompt;
pub mod quick;

pub async fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Predict(args) => predict::run(args).await,
        Command::Quick(args) => quick::run(args).await,
        Command::History(args) => history::run(args),
        Command::Prompt(args) => Ok(prompt::run(args)),
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(SUCCESS)
        }
    }
}

/// Build the completion client from the environment. Runs before any network I/O.
pub(crate) fn build_client(model: &ModelArgs) -> EchoResult<GroqClient> {
    let mut config = ClientConfig::from_env()?;
    if let Some(m) = &model.model {
        config = config.with_model(m.clone());
    }
    GroqClient::new(config)
}

/// Print a setup failure the same way for every command and return its exit code.
pub(crate) fn report_setup_error(err: &EchoError) -> i32 {
    eprintln!("❌ {err}");
    if matches!(err, EchoError::MissingCredential) {
        eprintln!(
            "💡 Setup Instructions:
  1. Get a free API key from https://console.groq.com
  2. Create a `.env` file in the project root
  3. Add: GROQ_API_KEY=your_key_here
  4. Run the command again"
        );
    }
    exit_codes::for_error(err)
}

/// Print a failed model call and return its exit code.
pub(crate) fn report_prediction_error(action: &str, err: &EchoError) -> i32 {
    eprintln!("❌ Error {action}: {err}");
    if err.is_prediction_failure() {
        eprintln!("💡 Make sure your Groq API key is valid and you have an active internet connection.");
    }
    exit_codes::for_error(err)
}
