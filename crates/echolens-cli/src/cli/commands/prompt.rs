use crate::cli::args::{PromptArgs, PromptKind};
use crate::exit_codes::SUCCESS;
use echolens_core::prompts;
use echolens_core::QueryParams;

pub fn run(args: PromptArgs) -> i32 {
    let text = match args.kind {
        PromptKind::Outbreak { query, days } => {
            prompts::build_outbreak_prompt(&QueryParams::new(query.region, query.cases, days))
        }
        PromptKind::Comparison { query, summary } => {
            let summary = summary.unwrap_or_else(|| {
                prompts::situation_summary(&QueryParams {
                    region: query.region,
                    cases: query.cases,
                    ..Default::default()
                })
            });
            prompts::build_comparison_prompt(&summary)
        }
        PromptKind::Quick { query } => prompts::build_quick_risk_prompt(&query.region, query.cases),
    };
    println!("{text}");
    SUCCESS
}
