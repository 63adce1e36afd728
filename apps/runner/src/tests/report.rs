// Unit tests for run accounting

use crate::report::{Outcome, REPORT_FILE_NAME, RunReport};

fn sample_report() -> RunReport {
    let mut report = RunReport::new();
    report.record("key_issued", Outcome::Passed);
    report.record(
        "listing_rejected",
        Outcome::Failed {
            expectation: String::from("listing with an unissued key is answered with 403"),
        },
    );
    report.record(
        "pet_created",
        Outcome::Errored {
            message: String::from("HTTP Error: connection refused"),
        },
    );
    report
}

#[test]
fn given_mixed_outcomes_when_counting_then_totals_are_correct() {
    let report = sample_report();

    assert_eq!(report.total(), 3);
    assert_eq!(report.passed(), 1);
    assert_eq!(report.failed(), 1);
    assert_eq!(report.errored(), 1);
    assert!(!report.all_passed());
}

#[test]
fn given_only_passes_when_checking_then_all_passed() {
    let mut report = RunReport::new();
    report.record("a", Outcome::Passed);
    report.record("b", Outcome::Passed);

    assert!(report.all_passed());
}

#[test]
fn given_report_when_displayed_then_summary_reads_plainly() {
    let report = sample_report();

    assert_eq!(
        report.to_string(),
        "3 scenarios: 1 passed, 1 failed, 1 errored"
    );
}

/// **VALUE**: Verifies the persisted report is valid JSON carrying the
/// outcome tags CI tooling filters on.
///
/// **BUG THIS CATCHES**: A serde attribute change would silently break
/// every downstream consumer of conformance-report.json.
#[test]
fn given_report_when_saved_then_json_lands_on_disk() {
    let dir = tempfile::tempdir().expect("temp dir");
    let report = sample_report();

    report.save(dir.path()).expect("save should succeed");

    let raw = std::fs::read_to_string(dir.path().join(REPORT_FILE_NAME))
        .expect("report file should exist");
    let json: serde_json::Value = serde_json::from_str(&raw).expect("report should be JSON");

    let records = json["records"].as_array().expect("records array");
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["outcome"]["status"], "Passed");
    assert_eq!(records[1]["outcome"]["status"], "Failed");
    assert_eq!(
        records[2]["outcome"]["detail"]["message"],
        "HTTP Error: connection refused"
    );
}
