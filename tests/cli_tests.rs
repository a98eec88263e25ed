use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn engine_cmd() -> Command {
    let mut cmd = Command::cargo_bin("engine_sim").expect("binary should be built");
    cmd.env("RUST_LOG", "warn");
    cmd
}

#[test]
fn runs_with_no_arguments() {
    engine_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Simulation Results:"))
        .stdout(predicate::str::contains("Total Impulse:"))
        .stdout(predicate::str::contains("Specific Impulse:"))
        .stdout(predicate::str::contains("Exit Diameter: 0.1 m"))
        .stdout(predicate::str::contains("Rocket Engine Simulation Completed."));
}

#[test]
fn short_variable_burn_reports_diameter_range() {
    engine_cmd()
        .args(["--model", "variable", "--burn-time", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exit Diameter Range: 0.1 m to 0.2 m"));
}

#[test]
fn full_variable_burn_fails_with_domain_fault() {
    engine_cmd()
        .args(["--model", "variable"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("valid pressure domain"));
}

#[test]
fn negative_burn_time_is_rejected() {
    engine_cmd()
        .arg("--burn-time=-3")
        .assert()
        .failure()
        .stderr(predicate::str::contains("burn_time"));
}

#[test]
fn reads_toml_config() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[engine]\nthroat_diameter = 0.04\n\n[run]\nburn_time = 10.0").unwrap();

    engine_cmd()
        .arg("--config")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Throat Diameter: 0.04 m"))
        .stdout(predicate::str::contains("Burn Time: 10.00s (10 s)"));
}

#[test]
fn malformed_config_is_reported() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[engine\nthroat_diameter = ").unwrap();

    engine_cmd()
        .arg("--config")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load configuration"));
}
