use crate::PrGuardError;
use crate::config::{Config, parse_config};
use crate::diff::{DiffStats, FileDiff, PullRequest};
use crate::report::Severity;

const FULL_CONFIG: &str = r#"
[size]
max_lines = 100
exclude = ["**/*.lock", "**/generated/**"]

[body]

[labels]
do_not_merge = ["wip"]
required = ["^type:"]

[missing_tests]

[[topic]]
name = "analytics"
content = ['AnalyticsTracker\.track\(']
label = "Tracks"
instructions = "Analytics changed."

[[lockfile]]
manifest = "package.json"
lockfile = "package-lock.json"
"#;

#[test]
fn default_config_builds_empty_suite() {
    assert!(Config::default().build_suite().unwrap().is_empty());
}

#[test]
fn every_section_adds_a_check_in_fixed_order() {
    let suite = parse_config(FULL_CONFIG).unwrap().build_suite().unwrap();
    assert_eq!(
        suite.names().collect::<Vec<_>>(),
        vec![
            "diff-size",
            "body-length",
            "labels",
            "missing-tests",
            "topic-change",
            "lockfile"
        ]
    );
}

#[test]
fn size_exclusions_apply_to_per_file_counts() {
    let config = parse_config("[size]\nmax_lines = 100\nexclude = [\"**/*.lock\"]\n").unwrap();
    let suite = config.build_suite().unwrap();
    let pr = PullRequest::new(vec![
        FileDiff::new("yarn.lock", "").with_stats(DiffStats::new(5000, 0)),
        FileDiff::new("src/app.ts", "").with_stats(DiffStats::new(50, 10)),
    ]);

    assert!(suite.run(&pr).is_empty());
}

#[test]
fn full_config_reports_every_finding() {
    let suite = parse_config(FULL_CONFIG).unwrap().build_suite().unwrap();
    let pr = PullRequest::new(vec![
        FileDiff::new(
            "app/src/main/java/org/app/Feature.kt",
            "+class Feature {\n+    AnalyticsTracker.track(Stat.OPENED)",
        )
        .with_stats(DiffStats::new(200, 0)),
        FileDiff::new("web/package.json", "+\"left-pad\": \"1.0.0\""),
    ])
    .with_labels(["WIP"]);

    let report = suite.run(&pr);
    let messages: Vec<&str> = report.outcomes().iter().map(|o| o.message.as_str()).collect();

    assert!(messages[0].starts_with("This PR is larger than 100"));
    assert!(messages[1].starts_with("The PR description appears very short"));
    assert_eq!(messages[2], "This PR is tagged with `WIP` label(s).");
    assert_eq!(messages[3], "PR is missing at least one label matching: `^type:`.");
    assert!(messages[4].contains("`Feature`"));
    assert!(messages[5].starts_with("Analytics changed."));
    assert_eq!(messages[6], "Please ensure the PR has the `Tracks` label.");
    assert!(messages[7].starts_with("`web/package.json` was changed"));
    assert_eq!(report.count(Severity::Error), 5);
    assert_eq!(report.count(Severity::Warning), 3);
}

#[test]
fn invalid_regex_names_the_pattern() {
    let config = parse_config("[labels]\nrequired = [\"(unclosed\"]\n").unwrap();
    let err = config.build_suite().unwrap_err();

    match err {
        PrGuardError::InvalidRegex { pattern, .. } => assert_eq!(pattern, "(unclosed"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn invalid_glob_names_the_pattern() {
    let config = parse_config("[size]\nmax_lines = 1\ninclude = [\"src/[\"]\n").unwrap();
    let err = config.build_suite().unwrap_err();

    assert!(matches!(err, PrGuardError::InvalidPattern { ref pattern, .. } if pattern == "src/["));
}

#[test]
fn topic_without_label_only_informs() {
    let config = parse_config("[[topic]]\nname = \"db\"\nfiles = [\"schema.sql\"]\n").unwrap();
    let suite = config.build_suite().unwrap();
    let report = suite.run(&PullRequest::new(vec![FileDiff::new("schema.sql", "+x")]));

    assert_eq!(report.outcomes().len(), 1);
    assert_eq!(report.outcomes()[0].severity, Severity::Info);
    assert!(report.outcomes()[0].message.contains("db"));
}
