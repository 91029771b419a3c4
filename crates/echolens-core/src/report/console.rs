//! Terminal rendering. Every function returns a `String` so output is
//! deterministic and unit-testable; printing is left to the caller.

use crate::history::HistoricalRecord;
use crate::model::{group_thousands, QueryParams};
use crate::report::progress::PredictionStage;
use crate::report::{DisplayMetrics, PredictionReport, HARDCODED_METRICS_NOTE};
use std::fmt::Write as _;

/// Shown at the end of every screen.
pub const DISCLAIMER: &str =
    "⚠️ Disclaimer: This is a research tool. Consult epidemiologists for public health decisions.";

const RULE: &str = "────────────────────────────────────────────────────────────";
const GAUGE_WIDTH: usize = 50;
const BAR_WIDTH: usize = 40;

#[must_use]
pub fn format_progress_line(stage: PredictionStage) -> String {
    format!("[{:>3}%] {}", stage.percent(), stage.message())
}

#[must_use]
pub fn format_section(title: &str, body: &str) -> String {
    format!("{RULE}\n{title}\n{RULE}\n{}\n", body.trim_end())
}

/// Box shown above the analysis: region, horizon and case count.
#[must_use]
pub fn format_prediction_header(params: &QueryParams) -> String {
    format!(
        "Prediction Results for {}\nForecast Period: {} days | Active Cases: {}",
        params.region,
        params.horizon.days(),
        params.formatted_cases()
    )
}

/// The four tiles. Values come from [`DisplayMetrics`], never from the model text.
#[must_use]
pub fn format_metric_tiles(metrics: &DisplayMetrics) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{HARDCODED_METRICS_NOTE}");
    let _ = writeln!(
        out,
        "  {:<20} {:>5}   {}",
        "Risk Score", metrics.risk_score, metrics.risk_label
    );
    for p in &metrics.probabilities {
        let _ = writeln!(
            out,
            "  {:<20} {:>5}   {}",
            format!("{}-Day Probability", p.days),
            format!("{}%", p.percent),
            p.label
        );
    }
    out
}

/// Risk gauge on a 0–100 scale with bands 0–30 / 30–70 / 70–100.
#[must_use]
pub fn format_risk_gauge(metrics: &DisplayMetrics) -> String {
    let score = usize::from(metrics.risk_score.min(100));
    let delta = i16::from(metrics.risk_score) - i16::from(metrics.risk_reference);

    let bar: String = (0..GAUGE_WIDTH)
        .map(|i| {
            let value = i * 100 / GAUGE_WIDTH;
            match value {
                0..=29 => '░',
                30..=69 => '▒',
                _ => '▓',
            }
        })
        .collect();
    let marker_pos = (score * GAUGE_WIDTH / 100).min(GAUGE_WIDTH - 1);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Overall Risk Score: {} ({:+} vs {})",
        metrics.risk_score, delta, metrics.risk_reference
    );
    let _ = writeln!(out, "[{bar}]");
    let _ = writeln!(out, " {}^", " ".repeat(marker_pos));
    let _ = writeln!(out, " 0{:>14}{:>20}{:>15}", "30", "70", "100");
    out
}

/// Probability trend over the three horizons.
#[must_use]
pub fn format_probability_trend(metrics: &DisplayMetrics) -> String {
    let mut out = String::from("Outbreak Probability Trend\n");
    for p in &metrics.probabilities {
        let len = usize::from(p.percent.min(100)) * BAR_WIDTH / 100;
        let _ = writeln!(out, "{:>4}d │{} {}%", p.days, "█".repeat(len), p.percent);
    }
    out
}

#[must_use]
pub fn format_quick_risk(region: &str, cases: u64, assessment: &str) -> String {
    format_section(
        &format!(
            "Quick Risk Assessment: {} ({} active cases)",
            region,
            group_thousands(cases)
        ),
        assessment,
    )
}

/// Everything a successful prediction shows, in display order.
#[must_use]
pub fn format_prediction_report(report: &PredictionReport, metrics: &DisplayMetrics) -> String {
    let mut out = String::new();
    out.push_str(&format_section(
        &format_prediction_header(&report.params),
        "",
    ));
    out.push('\n');
    out.push_str(&format_section("AI Analysis", &report.prediction));
    out.push('\n');
    out.push_str(&format_section("Visual Analytics", &format_metric_tiles(metrics)));
    out.push('\n');
    out.push_str(&format_risk_gauge(metrics));
    out.push('\n');
    out.push_str(&format_probability_trend(metrics));
    out.push('\n');
    out.push_str(&format_section("Historical Pattern Comparison", &report.comparison));
    out
}

#[must_use]
pub fn format_footer() -> String {
    format!("{RULE}\n🦠 EchoLens | Powered by Groq API\n{DISCLAIMER}")
}

/// Mortality rate without a trailing `.0` for whole numbers.
fn format_rate(rate: f64) -> String {
    if rate.fract() == 0.0 {
        format!("{rate:.0}")
    } else {
        format!("{rate}")
    }
}

#[must_use]
pub fn format_history_record(record: &HistoricalRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", record.name);
    let _ = writeln!(out, "  Period:         {}", record.period);
    let _ = writeln!(out, "  Pathogen:       {}", record.pathogen);
    let _ = writeln!(out, "  Deaths:         {}", record.deaths);
    let _ = writeln!(out, "  Transmission:   {}", record.transmission);
    let _ = writeln!(out, "  Mortality Rate: {}%", format_rate(record.mortality_rate));
    if !record.lessons.is_empty() {
        let _ = writeln!(out, "  Key Lessons:");
        for lesson in &record.lessons {
            let _ = writeln!(out, "    - {lesson}");
        }
    }
    out
}

/// Horizontal bar chart of mortality rates, scaled to the largest rate.
#[must_use]
pub fn format_mortality_chart(records: &[HistoricalRecord]) -> String {
    let mut out = String::from("Historical Pandemic Mortality Rates\n");
    let name_width = records.iter().map(|r| r.name.chars().count()).max().unwrap_or(0);
    let max = records
        .iter()
        .map(|r| r.mortality_rate)
        .fold(0.0_f64, f64::max);

    for r in records {
        let len = if max > 0.0 {
            ((r.mortality_rate.max(0.0) / max) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let _ = writeln!(
            out,
            "{:<width$} │{} {}%",
            r.name,
            "█".repeat(len),
            format_rate(r.mortality_rate),
            width = name_width
        );
    }
    out
}
