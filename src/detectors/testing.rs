// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Test file naming and location.

use crate::inventory::FileInfo;
use crate::report::{Convention, ConventionCategory};

use super::{unique_max, DetectionContext, Detector};

const MIN_NAMING: usize = 2;
const MIN_LOCATION: usize = 3;

/// Test-file suffixes, with the convention each one implies.
const TEST_SUFFIXES: [(&str, &str, &str); 3] = [
    (".test", "Test files use the `.test` suffix", "Button.test.tsx"),
    (".spec", "Test files use the `.spec` suffix", "Button.spec.ts"),
    ("_test", "Test files use the `_test` suffix", "handler_test.go"),
];

fn is_dedicated_test_dir(file: &FileInfo) -> bool {
    let path = file.unix_path();
    path.contains("__tests__")
        || path.contains("/test/")
        || path.contains("/tests/")
        || path.starts_with("test")
}

/// Reports how test files are named and where they live.
pub struct TestLayoutDetector;

impl Detector for TestLayoutDetector {
    fn name(&self) -> &'static str {
        "test-layout"
    }

    fn detect(&self, ctx: &DetectionContext<'_>) -> Vec<Convention> {
        let mut naming = [0usize; 3];
        // [dedicated, colocated]
        let mut location = [0usize; 2];

        for file in ctx.regular_files() {
            let stem = file.stem();
            let Some(idx) = TEST_SUFFIXES
                .iter()
                .position(|(suffix, _, _)| stem.ends_with(suffix))
            else {
                continue;
            };

            naming[idx] += 1;
            if is_dedicated_test_dir(file) {
                location[0] += 1;
            } else {
                location[1] += 1;
            }
        }

        tracing::debug!("Test layout: naming={:?} location={:?}", naming, location);

        let mut conventions = Vec::new();

        if let Some(idx) = unique_max(&naming, MIN_NAMING) {
            let (_, description, example) = TEST_SUFFIXES[idx];
            conventions
                .push(Convention::new(ConventionCategory::Testing, description).with_example(example));
        }

        match unique_max(&location, MIN_LOCATION) {
            Some(0) => conventions.push(
                Convention::new(
                    ConventionCategory::Testing,
                    "Tests live in dedicated test directories",
                )
                .with_example("__tests__/Button.test.tsx"),
            ),
            Some(_) => conventions.push(
                Convention::new(
                    ConventionCategory::Testing,
                    "Tests are colocated with the code they test",
                )
                .with_example("src/Button.tsx + src/Button.test.tsx"),
            ),
            None => {}
        }

        conventions
    }
}

#[cfg(test)]
mod tests {
    use super::super::testutil::{descriptions, Fixture};
    use super::*;

    #[test]
    fn test_colocated_dot_test() {
        let fx = Fixture::new(&[
            ("src/Button.tsx", ""),
            ("src/Button.test.tsx", ""),
            ("src/Card.test.tsx", ""),
            ("src/lib/api.test.ts", ""),
        ]);
        let found = descriptions(&fx.detect(&TestLayoutDetector));
        assert_eq!(
            found,
            vec![
                "Test files use the `.test` suffix",
                "Tests are colocated with the code they test"
            ]
        );
    }

    #[test]
    fn test_dedicated_directories() {
        let fx = Fixture::new(&[
            ("src/__tests__/a.spec.ts", ""),
            ("tests/b.spec.ts", ""),
            ("pkg/test/c.spec.ts", ""),
        ]);
        let found = descriptions(&fx.detect(&TestLayoutDetector));
        assert_eq!(
            found,
            vec![
                "Test files use the `.spec` suffix",
                "Tests live in dedicated test directories"
            ]
        );
    }

    #[test]
    fn test_naming_threshold() {
        let fx = Fixture::new(&[("server_test.go", "")]);
        assert!(fx.detect(&TestLayoutDetector).is_empty());

        let fx = Fixture::new(&[("server_test.go", ""), ("client_test.go", "")]);
        assert_eq!(
            descriptions(&fx.detect(&TestLayoutDetector)),
            vec!["Test files use the `_test` suffix"]
        );
    }

    #[test]
    fn test_ties_emit_nothing() {
        let fx = Fixture::new(&[
            ("src/a.test.ts", ""),
            ("src/b.test.ts", ""),
            ("src/c.spec.ts", ""),
            ("src/d.spec.ts", ""),
            ("tests/e.py", ""),
        ]);
        let found = descriptions(&fx.detect(&TestLayoutDetector));
        assert_eq!(found, vec!["Tests are colocated with the code they test"]);
    }

    #[test]
    fn test_location_threshold() {
        let fx = Fixture::new(&[("src/__tests__/a.spec.ts", ""), ("tests/b.spec.ts", "")]);
        assert_eq!(
            descriptions(&fx.detect(&TestLayoutDetector)),
            vec!["Test files use the `.spec` suffix"]
        );

        let fx = Fixture::new(&[
            ("src/__tests__/a.spec.ts", ""),
            ("tests/b.spec.ts", ""),
            ("tests/c.spec.ts", ""),
        ]);
        assert!(descriptions(&fx.detect(&TestLayoutDetector))
            .contains(&"Tests live in dedicated test directories".to_string()));
    }

    #[test]
    fn test_location_tie() {
        let fx = Fixture::new(&[
            ("tests/a_test.go", ""),
            ("test/b_test.go", ""),
            ("tests/c_test.go", ""),
            ("d_test.go", ""),
            ("e_test.go", ""),
            ("f_test.go", ""),
        ]);
        let found = descriptions(&fx.detect(&TestLayoutDetector));
        assert_eq!(found, vec!["Test files use the `_test` suffix"]);
    }
}
