use super::{build_client, report_prediction_error, report_setup_error};
use crate::cli::args::PredictArgs;
use crate::exit_codes::{self, SUCCESS};
use echolens_core::report::console::{
    format_footer, format_prediction_report, format_progress_line,
};
use echolens_core::report::progress::{PredictionStage, ProgressSink};
use echolens_core::{DisplayMetrics, Predictor};
use std::sync::Arc;

fn stderr_progress_sink() -> ProgressSink {
    Arc::new(|stage: PredictionStage| {
        if stage != PredictionStage::Complete {
            eprintln!("{}", format_progress_line(stage));
        }
    })
}

pub async fn run(args: PredictArgs) -> anyhow::Result<i32> {
    let client = match build_client(&args.model) {
        Ok(c) => c,
        Err(e) => return Ok(report_setup_error(&e)),
    };
    let model = client.model().to_string();
    let params = args.params();

    let predictor = Predictor::new(Arc::new(client), model).with_progress(stderr_progress_sink());

    // Both calls must succeed before anything is shown or written.
    let report = match predictor.run(&params).await {
        Ok(r) => r,
        Err(e) => return Ok(report_prediction_error("generating prediction", &e)),
    };

    println!(
        "{}",
        format_prediction_report(&report, &DisplayMetrics::HARDCODED)
    );
    println!("✅ {}", PredictionStage::Complete.message());
    println!("{}", format_footer());

    if args.no_report {
        return Ok(SUCCESS);
    }
    match report.write_to_dir(&args.out_dir) {
        Ok(path) => {
            println!("📥 Report saved: {}", path.display());
            Ok(SUCCESS)
        }
        Err(e) => {
            eprintln!("❌ {e}");
            Ok(exit_codes::for_error(&e))
        }
    }
}
