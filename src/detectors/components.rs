// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! UI component conventions: React, Vue and Svelte.

use crate::report::{Convention, ConventionCategory};

use super::{DetectionContext, Detector};

const MAX_COMPONENT_SAMPLES: usize = 5;
const MIN_FUNCTIONAL: usize = 3;
const MIN_BARRELS: usize = 3;
const FUNCTIONAL_MARKERS: &[&str] = &["export function", "export const", "export default function"];

fn is_react(extension: &str) -> bool {
    extension == ".tsx" || extension == ".jsx"
}

/// Reports component language, style and export layout.
pub struct ComponentDetector;

impl Detector for ComponentDetector {
    fn name(&self) -> &'static str {
        "component-style"
    }

    fn detect(&self, ctx: &DetectionContext<'_>) -> Vec<Convention> {
        let (mut jsx, mut tsx, mut vue, mut svelte, mut barrels) = (0, 0, 0, 0, 0usize);

        for file in ctx.regular_files() {
            match file.extension.as_str() {
                ".jsx" => jsx += 1,
                ".tsx" => tsx += 1,
                ".vue" => vue += 1,
                ".svelte" => svelte += 1,
                _ => {}
            }
            if file.name == "index.ts" || file.name == "index.js" {
                let parent = file.parent_dir();
                if parent.contains("components") || parent.contains("ui") {
                    barrels += 1;
                }
            }
        }

        let mut conventions = Vec::new();

        if tsx > jsx && (tsx > 0 || jsx > 0) {
            conventions.push(
                Convention::new(ConventionCategory::Components, "React components use TypeScript")
                    .with_example("Button.tsx"),
            );
        }

        if tsx + jsx > 0 {
            let functional = ctx
                .sample(MAX_COMPONENT_SAMPLES, is_react)
                .filter(|s| FUNCTIONAL_MARKERS.iter().any(|m| s.content.contains(m)))
                .count();
            if functional >= MIN_FUNCTIONAL {
                conventions.push(
                    Convention::new(ConventionCategory::Components, "Use functional components")
                        .with_example("export function Button(props: ButtonProps) { ... }"),
                );
            }
        }

        if vue > 0 {
            conventions.push(
                Convention::new(ConventionCategory::Components, "Vue single-file components")
                    .with_example("UserCard.vue"),
            );
        }
        if svelte > 0 {
            conventions.push(
                Convention::new(ConventionCategory::Components, "Svelte components")
                    .with_example("UserCard.svelte"),
            );
        }

        if barrels >= MIN_BARRELS {
            conventions.push(
                Convention::new(
                    ConventionCategory::Structure,
                    "Component directories use barrel exports (index files)",
                )
                .with_example("export { Button } from './Button'"),
            );
        }

        conventions
    }
}

#[cfg(test)]
mod tests {
    use super::super::testutil::{descriptions, fixture, many, Fixture};
    use super::*;

    #[test]
    fn test_functional_typescript_components() {
        let fx = fixture(&many(
            3,
            "src/components/C{}.tsx",
            "export function C() { return null }",
        ));
        assert_eq!(
            descriptions(&fx.detect(&ComponentDetector)),
            vec!["React components use TypeScript", "Use functional components"]
        );
    }

    #[test]
    fn test_functional_below_threshold() {
        let mut entries = many(2, "src/C{}.jsx", "export const C = () => null");
        entries.push(("src/Old.jsx".into(), "class Old extends React.Component {}".into()));
        let fx = fixture(&entries);
        assert!(fx.detect(&ComponentDetector).is_empty());
    }

    #[test]
    fn test_jsx_majority_is_not_typescript() {
        let fx = Fixture::new(&[("a.jsx", ""), ("b.jsx", ""), ("c.tsx", "")]);
        assert!(!descriptions(&fx.detect(&ComponentDetector))
            .contains(&"React components use TypeScript".to_string()));
    }

    #[test]
    fn test_vue_and_svelte() {
        let fx = Fixture::new(&[("src/App.vue", ""), ("src/Widget.svelte", "")]);
        assert_eq!(
            descriptions(&fx.detect(&ComponentDetector)),
            vec!["Vue single-file components", "Svelte components"]
        );
    }

    #[test]
    fn test_barrel_exports() {
        let fx = Fixture::new(&[
            ("src/components/Button/index.ts", ""),
            ("src/components/Card/index.ts", ""),
            ("src/ui/index.js", ""),
            ("src/index.ts", ""),
        ]);
        let found = fx.detect(&ComponentDetector);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].category, ConventionCategory::Structure);
    }

    #[test]
    fn test_barrel_threshold() {
        let fx = Fixture::new(&[
            ("src/components/Button/index.ts", ""),
            ("src/components/Card/index.ts", ""),
        ]);
        assert!(fx.detect(&ComponentDetector).is_empty());
    }
}
