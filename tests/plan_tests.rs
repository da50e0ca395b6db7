use assert_fs::prelude::*;
use predicates::prelude::*;
use std::fs;

#[test]
fn plan_prints_report_for_constant_profile() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("spendplan");
    cmd.args(["plan", "-s", "1", "-e", "5", "-t", "1000.00", "-p", "constant"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Duration: 5 months"))
        .stdout(predicate::str::contains("Total budget: € 1.000,00"))
        .stdout(predicate::str::contains("Profile: constant"))
        .stdout(predicate::str::contains("01 | 1 | 1 | 12 | 12.00 | € 120,00"))
        .stdout(predicate::str::contains("05 | 5 | 5 | 22 | 22.00 | € 220,00"));
}

#[test]
fn plan_rejects_duration_shorter_than_five_months() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("spendplan");
    cmd.args(["plan", "-s", "3", "-e", "6", "-t", "1000"]);

    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "duration must be at least 5 periods (got 4)",
        ));
}

#[test]
fn plan_reports_failure_once_on_stderr() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("spendplan");
    cmd.env_remove("RUST_LOG");
    cmd.args(["plan", "-s", "1", "-e", "2", "-t", "1000"]);

    cmd.assert()
        .failure()
        .stderr(predicate::function(|stderr: &str| {
            stderr.matches("duration must be at least 5 periods").count() == 1
        }));
}

#[test]
fn plan_rejects_profile_flag_together_with_input_file() {
    let request = assert_fs::NamedTempFile::new("request.yaml").unwrap();
    request
        .write_str("start_month: 1\nend_month: 5\ntotal_budget: 100\n")
        .unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("spendplan");
    cmd.args(["plan", "-i", request.path().to_str().unwrap(), "-p", "centered"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn plan_rejects_negative_budget() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("spendplan");
    cmd.args(["plan", "-s", "1", "-e", "5", "-t=-10"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("total budget must not be negative"));
}

#[test]
fn plan_writes_two_section_export() {
    let output_file = assert_fs::NamedTempFile::new("plan.yaml").unwrap();
    let output_arg = output_file.path().to_str().unwrap().to_string();

    let mut cmd = assert_cmd::cargo_bin_cmd!("spendplan");
    cmd.args([
        "plan", "-s", "1", "-e", "10", "-t", "100.01", "-p", "linear", "-o", &output_arg,
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Spending plan written to {output_arg}"
        )));

    let output = fs::read_to_string(&output_arg).unwrap();
    assert!(output.contains("monthly_detail:"));
    assert!(output.contains("phase_summary:"));
    assert!(output.contains("expected_cost: 16.51"));
    assert!(output.contains("expected_cost: 16.5\n"));
    assert!(output.contains("phase_total: 33.01"));
}

#[test]
fn plan_reads_request_and_profiles_from_yaml() {
    let temp = assert_fs::TempDir::new().unwrap();
    let request = temp.child("request.yaml");
    request
        .write_str("start_month: 2\nend_month: 6\ntotal_budget: \"500\"\nprofile: centered\n")
        .unwrap();
    let profiles = temp.child("profiles.yaml");
    profiles
        .write_str("centered: [20, 20, 20, 20, 20]\n")
        .unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("spendplan");
    cmd.args([
        "plan",
        "-i",
        request.path().to_str().unwrap(),
        "--profiles",
        profiles.path().to_str().unwrap(),
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Profile: centered"))
        .stdout(predicate::str::contains("02 | 1 | 1 | 20 | 20.00 | € 100,00"))
        .stdout(predicate::str::contains("06 | 5 | 5 | 20 | 20.00 | € 100,00"));
}

#[test]
fn plan_rejects_profile_table_not_summing_to_100() {
    let profiles = assert_fs::NamedTempFile::new("profiles.yaml").unwrap();
    profiles
        .write_str("linear: [10, 10, 10, 10, 10]\n")
        .unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("spendplan");
    cmd.args([
        "plan",
        "-s",
        "1",
        "-e",
        "5",
        "-t",
        "100",
        "--profiles",
        profiles.path().to_str().unwrap(),
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("weights must sum to 100, got 50"));
}

#[test]
fn plan_with_charts_creates_pngs() {
    let temp = assert_fs::TempDir::new().unwrap();
    let output = temp.child("plan.yaml");
    let output_arg = output.path().to_str().unwrap().to_string();

    let mut cmd = assert_cmd::cargo_bin_cmd!("spendplan");
    cmd.args([
        "plan", "-s", "2", "-e", "14", "-t", "10000", "-p", "back-loaded", "-o", &output_arg,
        "--charts",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Phase chart written to"))
        .stdout(predicate::str::contains("Monthly chart written to"));

    for suffix in ["phases.png", "monthly.png"] {
        let metadata = fs::metadata(format!("{output_arg}.{suffix}")).unwrap();
        assert!(metadata.len() > 0);
    }
}
