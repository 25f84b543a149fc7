//! Tests which run the `local-scripts` binary against the committed fixture.

use std::process::Command;

fn run_local_scripts() -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_local-scripts"))
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .expect("couldn't run local-scripts")
}

#[test]
fn lists_fixture_scripts_as_bullets() {
    let output = run_local_scripts();
    assert!(output.status.success(), "stderr: {:?}", output.stderr);

    let stdout = String::from_utf8(output.stdout).expect("stdout is valid utf8");
    // Only the .sh entries survive the pattern's alternation; the bare
    // py/rb/pl branches never fire on real listing lines.
    assert_eq!(
        stdout,
        "  - hello-world.sh\n  - install-docker.sh\n  - config-system.sh\n"
    );
}

#[test]
fn reruns_are_byte_identical() {
    let first = run_local_scripts();
    let second = run_local_scripts();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn missing_listing_page_is_fatal() {
    let dir = std::env::temp_dir();
    let output = Command::new(env!("CARGO_BIN_EXE_local-scripts"))
        .current_dir(&dir)
        .output()
        .expect("couldn't run local-scripts");
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("data/scripts.html"),
        "diagnostic should name the missing path, got: {stderr}"
    );
}
