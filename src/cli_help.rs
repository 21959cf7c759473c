//! Long help text for the `covscan` command.
//!
//! Kept apart from `cli.rs` so the argument definitions stay short.

/// Static coverage estimate: what is measured and how to read it.
pub const COVSCAN: &str = "\
Estimate test coverage of Java services from their source trees.

For every service, *.java files under src/main/java and src/test/java are
scanned. Class, interface and method declarations are found with simple
pattern matching (no compilation, no execution).

Metrics:
  File coverage   = test files / source files * 100
  Class coverage  = test classes / source classes * 100
  Test code ratio = non-blank test lines / non-blank source lines * 100

A source class Foo counts as tested when a test class named FooTest,
FooTests or Foo exists. Every other source class is listed as missing,
with FooTest.java as the suggested test file.

Unless --no-run is given, `./gradlew test jacocoTestReport --no-daemon` is
run in each service directory and its outcome recorded in the report.

Services default to java-services/data-preprocessor and
java-services/model-trainer; override them with --service NAME=PATH or a
covscan.toml file in the project root:

  results_dir = \"test-results\"
  report_name = \"test-coverage-report.json\"
  run_tests = true
  timeout_secs = 300

  [[services]]
  name = \"api\"
  path = \"services/api\"

The JSON report is written to <results_dir>/<report_name>. Relative
service paths and results_dir, from the command line or the config file,
are resolved against the project root. Service names must be unique.";
