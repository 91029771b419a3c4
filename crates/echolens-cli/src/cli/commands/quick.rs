use super::{build_client, report_prediction_error, report_setup_error};
use crate::cli::args::QuickArgs;
use crate::exit_codes::SUCCESS;
use echolens_core::report::console::{format_footer, format_quick_risk};
use echolens_core::Predictor;
use std::sync::Arc;

pub async fn run(args: QuickArgs) -> anyhow::Result<i32> {
    let client = match build_client(&args.model) {
        Ok(c) => c,
        Err(e) => return Ok(report_setup_error(&e)),
    };
    let model = client.model().to_string();
    let predictor = Predictor::new(Arc::new(client), model);

    let QuickArgs { query, .. } = args;
    match predictor.quick_risk(&query.region, query.cases).await {
        Ok(text) => {
            println!("{}", format_quick_risk(&query.region, query.cases, &text));
            println!("{}", format_footer());
            Ok(SUCCESS)
        }
        Err(e) => Ok(report_prediction_error("generating quick assessment", &e)),
    }
}
