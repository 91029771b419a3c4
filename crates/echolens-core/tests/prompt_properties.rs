use echolens_core::prompts::{build_outbreak_prompt, build_quick_risk_prompt};
use echolens_core::{ForecastHorizon, QueryParams};
use proptest::prelude::*;

fn horizon() -> impl Strategy<Value = ForecastHorizon> {
    prop::sample::select(ForecastHorizon::ALL.to_vec())
}

// Regions stay on one line and carry no ':' so they cannot spell out another slot label.
fn region() -> impl Strategy<Value = String> {
    "[^\n:]{0,40}"
}

proptest! {
    #[test]
    fn outbreak_prompt_fills_each_slot_once(
        region in region(),
        cases in any::<u64>(),
        horizon in horizon(),
    ) {
        let prompt = build_outbreak_prompt(&QueryParams::new(region.clone(), cases, horizon));

        let region_line = format!("- Region: {region}\n");
        let cases_line = format!("- Active Cases: {cases}\n");
        let days_line = format!("- Forecast Period: {} days\n", horizon.days());
        prop_assert_eq!(prompt.matches(region_line.as_str()).count(), 1);
        prop_assert_eq!(prompt.matches(cases_line.as_str()).count(), 1);
        prop_assert_eq!(prompt.matches(days_line.as_str()).count(), 1);
    }

    #[test]
    fn outbreak_prompt_is_deterministic(
        region in region(),
        cases in any::<u64>(),
        horizon in horizon(),
    ) {
        let params = QueryParams::new(region, cases, horizon);
        prop_assert_eq!(build_outbreak_prompt(&params), build_outbreak_prompt(&params));
    }

    #[test]
    fn quick_prompt_embeds_region_and_raw_count(region in region(), cases in any::<u64>()) {
        let prompt = build_quick_risk_prompt(&region, cases);
        let expected = format!("for {region} with {cases} active cases.");
        prop_assert!(prompt.contains(&expected));
    }
}
