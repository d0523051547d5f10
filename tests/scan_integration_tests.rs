//! Integration tests for the scanner binary.

mod common;

use common::{GUARDED_HEADER, TestFixture, parse_issues};
use predicates::prelude::*;

// =============================================================================
// Issue stream
// =============================================================================

#[test]
fn clean_tree_produces_no_output() {
    let fixture = TestFixture::new();
    fixture.create_config_with_paths(&["lib"]);
    fixture.create_file(
        "lib/foo.h",
        "#ifndef __FOO_H__\n#define __FOO_H__\nint x;\n#endif\n",
    );
    fixture.create_file("lib/foo.cc", "#include \"foo.h\"\nint x = 1;\n");

    cc_style_guard!()
        .args(fixture.args())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn issues_are_nul_separated_json() {
    let fixture = TestFixture::new();
    fixture.create_config_with_paths(&["src"]);
    fixture.create_file("src/a.cc", "int x; \n");

    let output = cc_style_guard!().args(fixture.args()).output().unwrap();

    assert!(output.status.success());
    assert!(output.stdout.ends_with(b"\n\0\n"));
    let issues = parse_issues(&output.stdout);
    assert_eq!(issues.len(), 1);

    let issue = &issues[0];
    assert_eq!(issue["type"], "issue");
    assert_eq!(issue["check_name"], "Trailing whitespace");
    assert_eq!(issue["description"], "Line contains trailing whitespace.");
    assert_eq!(issue["categories"], serde_json::json!(["Style"]));
    assert_eq!(issue["location"]["path"], "src/a.cc");
    assert_eq!(issue["location"]["lines"]["begin"], 0);
    assert_eq!(issue["location"]["lines"]["end"], 0);
    assert_eq!(issue["severity"], "normal");
    assert!(
        issue["fingerprint"]
            .as_str()
            .unwrap()
            .starts_with("src_a.cc___")
    );
}

#[test]
fn long_lines_use_one_based_numbers() {
    let fixture = TestFixture::new();
    fixture.create_config_with_paths(&["src"]);
    let long = "x".repeat(85);
    fixture.create_file("src/a.cpp", &format!("ok\n{long}\n"));

    let output = cc_style_guard!().args(fixture.args()).output().unwrap();
    let issues = parse_issues(&output.stdout);

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0]["check_name"], "Line Too Long");
    assert_eq!(issues[0]["description"], "Line longer than 80 characters.");
    assert_eq!(issues[0]["location"]["lines"]["begin"], 2);
    assert_eq!(issues[0]["location"]["lines"]["end"], 2);
}

#[test]
fn header_without_guard_is_reported_once() {
    let fixture = TestFixture::new();
    fixture.create_config_with_paths(&["include"]);
    fixture.create_file("include/bare.hpp", "int bare();\n");

    let output = cc_style_guard!().args(fixture.args()).output().unwrap();
    let issues = parse_issues(&output.stdout);

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0]["check_name"], "Multi-include protection");
    assert_eq!(issues[0]["description"], "No leading comment block");
    assert_eq!(issues[0]["location"]["lines"]["begin"], 1);
    assert_eq!(issues[0]["fingerprint"], "include_bare.hpp");
}

#[test]
fn guard_failures_are_classified() {
    let fixture = TestFixture::new();
    fixture.create_config_with_paths(&["inc"]);
    fixture.create_file("inc/open.h", "#ifndef __OPEN_H__\n#define __OPEN_H__\nint x;\n");
    fixture.create_file(
        "inc/tail.h",
        "#ifndef __TAIL_H__\n#define __TAIL_H__\n#endif // __TAIL_H__\n#define EXTRA 1\n",
    );
    fixture.create_file("inc/good.h", GUARDED_HEADER);

    let output = cc_style_guard!().args(fixture.args()).output().unwrap();
    let mut found: Vec<_> = parse_issues(&output.stdout)
        .iter()
        .map(|i| {
            (
                i["location"]["path"].as_str().unwrap().to_string(),
                i["description"].as_str().unwrap().to_string(),
            )
        })
        .collect();
    found.sort();

    assert_eq!(
        found,
        [
            (
                "inc/open.h".to_string(),
                "No matching close #endif found".to_string()
            ),
            (
                "inc/tail.h".to_string(),
                "Non-comment stuff after closing #endif".to_string()
            ),
        ]
    );
}

#[test]
fn only_include_paths_are_scanned() {
    let fixture = TestFixture::new();
    fixture.create_config_with_paths(&["src"]);
    fixture.create_file("src/ok.cc", "int x;\n");
    fixture.create_file("vendor/bad.cc", "int x; \n");

    cc_style_guard!()
        .args(fixture.args())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn output_is_stable_across_runs() {
    let fixture = TestFixture::new();
    fixture.create_config_with_paths(&["src"]);
    fixture.create_file("src/a.cc", "int x; \nint y;\t\n");
    fixture.create_file("src/a.h", "int z;\n");

    let first = cc_style_guard!().args(fixture.args()).output().unwrap();
    let second = cc_style_guard!().args(fixture.args()).output().unwrap();

    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn changing_a_line_changes_its_fingerprint() {
    let fixture = TestFixture::new();
    fixture.create_config_with_paths(&["src"]);
    fixture.create_file("src/a.cc", "int x; \n");
    let before = cc_style_guard!().args(fixture.args()).output().unwrap();

    fixture.create_file("src/a.cc", "int y; \n");
    let after = cc_style_guard!().args(fixture.args()).output().unwrap();

    let before = parse_issues(&before.stdout);
    let after = parse_issues(&after.stdout);
    assert_ne!(before[0]["fingerprint"], after[0]["fingerprint"]);
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn missing_config_is_a_config_error() {
    let fixture = TestFixture::new();

    cc_style_guard!()
        .args(fixture.args())
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn malformed_config_is_a_config_error() {
    let fixture = TestFixture::new();
    fixture.create_config("{ not json");

    cc_style_guard!().args(fixture.args()).assert().code(2);
}

#[test]
fn config_without_include_paths_is_rejected() {
    let fixture = TestFixture::new();
    fixture.create_config(r#"{"enabled": true}"#);

    cc_style_guard!()
        .args(fixture.args())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("include_paths"));
}

#[test]
fn missing_include_path_aborts_the_run() {
    let fixture = TestFixture::new();
    fixture.create_config_with_paths(&["does-not-exist"]);

    cc_style_guard!()
        .args(fixture.args())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[test]
fn unreadable_content_aborts_the_run() {
    let fixture = TestFixture::new();
    fixture.create_config_with_paths(&["src"]);
    fixture.create_binary_file("src/blob.cc", b"\xff\xfe\xfd\n");

    cc_style_guard!()
        .args(fixture.args())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("blob.cc"));
}
