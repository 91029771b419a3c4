#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;

fn echolens() -> Command {
    let mut cmd = Command::cargo_bin("echolens").expect("echolens binary");
    // Prompt rendering never needs a credential.
    cmd.env_remove("GROQ_API_KEY");
    cmd
}

#[test]
fn outbreak_prompt_is_printed_offline() {
    echolens()
        .args(["prompt", "outbreak", "--region", "Test Region", "--cases", "500", "--days", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Region: Test Region\n"))
        .stdout(predicate::str::contains("- Active Cases: 500\n"))
        .stdout(predicate::str::contains("- Forecast Period: 30 days\n"));
}

#[test]
fn comparison_prompt_lists_all_pandemics() {
    let assert = echolens()
        .args(["prompt", "comparison", "--summary", "Unknown pathogen in port city"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown pathogen in port city"));

    let out = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    for name in ["Black Death", "Spanish Flu", "SARS", "COVID-19"] {
        assert!(out.contains(name), "missing {name}");
    }
}

#[test]
fn comparison_summary_defaults_to_region_and_cases() {
    echolens()
        .args(["prompt", "comparison", "--region", "Lagos", "--cases", "12000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Region: Lagos, Cases: 12000"));
}

#[test]
fn quick_prompt() {
    echolens()
        .args(["prompt", "quick", "--region", "Peru"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Quick pandemic risk assessment for Peru with 1500 active cases.",
        ));
}
