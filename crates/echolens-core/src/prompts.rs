//! Prompt templates.
//!
//! Every builder is a pure function of its arguments. Caller-supplied text is
//! embedded verbatim; nothing is escaped or filtered.

use crate::model::QueryParams;
use crate::providers::llm::CompletionRequest;

/// Historical pandemics every comparison is made against, in display order.
pub const HISTORICAL_PANDEMICS: [&str; 4] = [
    "Black Death (1347-1353)",
    "Spanish Flu (1918-1920)",
    "SARS (2002-2004)",
    "COVID-19 (2019-2023)",
];

/// Risk-level labels the quick assessment may answer with.
pub const RISK_LEVELS: [&str; 4] = ["Low", "Medium", "High", "Critical"];

pub const PREDICTION_SYSTEM_PROMPT: &str =
    "You are EchoLens, an expert epidemiologist AI specialized in pandemic prediction.";

pub const HISTORIAN_SYSTEM_PROMPT: &str = "You are a pandemic historian and epidemiologist.";

const HISTORICAL_KNOWLEDGE: &str = "\
HISTORICAL KNOWLEDGE:
- Black Death (1347-1353): Bubonic plague, killed 30-60% of Europe's population
- Spanish Flu (1918-1920): H1N1 virus, 50+ million deaths globally
- SARS (2002-2004): Coronavirus, 10% mortality rate, contained through quarantine
- COVID-19 (2019-2023): SARS-CoV-2, global pandemic, 1-2% mortality";

const PREDICTION_SECTIONS: &str = "\
PREDICT:
1. **Outbreak Risk Score** (0-100): Overall pandemic risk
2. **30/60/90 Day Probability** (%): Likelihood of major outbreak
3. **Spread Pattern**: Expected transmission rate and growth
4. **Top 5 Risk Factors**: Why this region is vulnerable
5. **Top 3 Hotspot Cities**: Specific locations at highest risk
6. **Recommendations**: 
   - Immediate actions (0-7 days)
   - Short-term (1-4 weeks)
   - Long-term (1-3 months)";

/// Full outbreak prediction prompt.
pub fn build_outbreak_prompt(params: &QueryParams) -> String {
    format!(
        "You are EchoLens, an AI expert trained on historical pandemic data.

{HISTORICAL_KNOWLEDGE}

CURRENT SITUATION:
- Region: {region}
- Active Cases: {cases}
- Forecast Period: {days} days

{PREDICTION_SECTIONS}

Format your response clearly with headers and bullet points.
Be specific with numbers and probabilities.
Base predictions on historical epidemic patterns.",
        region = params.region,
        cases = params.cases,
        days = params.horizon.days(),
    )
}

/// One-line situation summary fed to [`build_comparison_prompt`].
pub fn situation_summary(params: &QueryParams) -> String {
    format!("Region: {}, Cases: {}", params.region, params.cases)
}

/// Historical comparison prompt for a caller-provided situation summary.
pub fn build_comparison_prompt(summary: &str) -> String {
    let compare_to = HISTORICAL_PANDEMICS
        .iter()
        .map(|p| format!("- {p}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Compare this outbreak to historical pandemics:

CURRENT OUTBREAK:
{summary}

COMPARE TO:
{compare_to}

Which historical pandemic does this most resemble and why?
What lessons from that pandemic apply here?
What's the likely outcome based on historical patterns?"
    )
}

/// Short three-field risk assessment prompt.
pub fn build_quick_risk_prompt(region: &str, cases: u64) -> String {
    format!(
        "Quick pandemic risk assessment for {region} with {cases} active cases.

Provide ONLY:
1. Risk Score (0-100)
2. Risk Level ({levels})
3. One sentence summary

Be concise.",
        levels = RISK_LEVELS.join("/"),
    )
}

/// Request for the full prediction: epidemiologist persona, long answer.
pub fn outbreak_request(params: &QueryParams) -> CompletionRequest {
    CompletionRequest::new(build_outbreak_prompt(params))
        .with_system(PREDICTION_SYSTEM_PROMPT)
        .with_temperature(0.7)
        .with_max_tokens(2000)
        .with_top_p(1.0)
}

/// Request for the historical comparison: historian persona.
pub fn comparison_request(summary: &str) -> CompletionRequest {
    CompletionRequest::new(build_comparison_prompt(summary))
        .with_system(HISTORIAN_SYSTEM_PROMPT)
        .with_temperature(0.7)
        .with_max_tokens(1500)
}

/// Request for the quick assessment: no system message, short and cool.
pub fn quick_risk_request(region: &str, cases: u64) -> CompletionRequest {
    CompletionRequest::new(build_quick_risk_prompt(region, cases))
        .with_temperature(0.5)
        .with_max_tokens(200)
}
