// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Import style: path aliases and absolute imports.

use lazy_static::lazy_static;
use regex::Regex;

use crate::report::{Convention, ConventionCategory};

use super::{is_source, tsconfig, DetectionContext, Detector};

const MAX_SAMPLES: usize = 20;
const MIN_ALIAS_IMPORTS: usize = 5;

lazy_static! {
    static ref IMPORT_PATH: Regex = Regex::new(r#"(?:import|from)\s+['"]([^'"]+)['"]"#).unwrap();
}

/// Reports tsconfig path aliases and the preferred import prefix.
pub struct ImportStyleDetector;

impl ImportStyleDetector {
    fn from_tsconfig(ctx: &DetectionContext<'_>) -> Vec<Convention> {
        let mut conventions = Vec::new();
        let Some(config) = tsconfig::load(ctx) else {
            return conventions;
        };
        let Some(options) = tsconfig::compiler_options(&config) else {
            return conventions;
        };

        if let Some(paths) = options.get("paths").and_then(|p| p.as_object()) {
            if !paths.is_empty() {
                let aliases: Vec<&str> = paths
                    .keys()
                    .map(|k| k.strip_suffix("/*").unwrap_or(k.as_str()))
                    .collect();
                conventions.push(
                    Convention::new(
                        ConventionCategory::Imports,
                        format!("Path aliases configured: {}", aliases.join(", ")),
                    )
                    .with_example(format!("import {{ Button }} from '{}/components/Button'", aliases[0])),
                );
            }
        }

        if let Some(base_url) = options.get("baseUrl").and_then(|b| b.as_str()) {
            if !base_url.is_empty() {
                conventions.push(Convention::new(
                    ConventionCategory::Imports,
                    format!("Absolute imports enabled (baseUrl: {})", base_url),
                ));
            }
        }

        conventions
    }
}

impl Detector for ImportStyleDetector {
    fn name(&self) -> &'static str {
        "import-style"
    }

    fn detect(&self, ctx: &DetectionContext<'_>) -> Vec<Convention> {
        let mut conventions = Self::from_tsconfig(ctx);

        let (mut at, mut tilde, mut relative) = (0usize, 0usize, 0usize);
        for sample in ctx.sample(MAX_SAMPLES, is_source) {
            for caps in IMPORT_PATH.captures_iter(&sample.content) {
                let path = &caps[1];
                if path.starts_with('@') {
                    at += 1;
                } else if path.starts_with("~/") {
                    tilde += 1;
                } else if path.starts_with("./") || path.starts_with("../") {
                    relative += 1;
                }
            }
        }

        tracing::debug!(
            "Import counts: @={} ~/={} relative={}",
            at,
            tilde,
            relative
        );

        if at > relative && at >= MIN_ALIAS_IMPORTS {
            conventions.push(
                Convention::new(
                    ConventionCategory::Imports,
                    "Prefer `@/` alias imports over relative paths",
                )
                .with_example("import { api } from '@/lib/api'"),
            );
        } else if tilde > relative && tilde >= MIN_ALIAS_IMPORTS {
            conventions.push(
                Convention::new(
                    ConventionCategory::Imports,
                    "Prefer `~/` alias imports over relative paths",
                )
                .with_example("import { api } from '~/lib/api'"),
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
    fn test_tsconfig_paths_and_base_url() {
        let fx = Fixture::new(&[(
            "tsconfig.json",
            r#"{ "compilerOptions": { "baseUrl": ".", "paths": { "@/*": ["src/*"], "@components/*": ["src/components/*"] } } }"#,
        )]);
        let found = fx.detect(&ImportStyleDetector);
        let text = descriptions(&found);
        assert!(text.contains(&"Path aliases configured: @, @components".to_string()));
        assert!(text.contains(&"Absolute imports enabled (baseUrl: .)".to_string()));
    }

    #[test]
    fn test_empty_paths_and_base_url() {
        let fx = Fixture::new(&[(
            "tsconfig.json",
            r#"{ "compilerOptions": { "baseUrl": "", "paths": {} } }"#,
        )]);
        assert!(fx.detect(&ImportStyleDetector).is_empty());
    }

    #[test]
    fn test_prefers_at_alias() {
        let content = "import { a } from '@/lib/a';\nimport b from './b';\n";
        let fx = fixture(&many(5, "src/f{}.ts", content));
        let found = fx.detect(&ImportStyleDetector);
        assert_eq!(
            descriptions(&found),
            vec!["Prefer `@/` alias imports over relative paths"]
        );
    }

    #[test]
    fn test_at_alias_below_threshold() {
        let content = "import { a } from '@/lib/a';\n";
        let fx = fixture(&many(4, "src/f{}.ts", content));
        assert!(fx.detect(&ImportStyleDetector).is_empty());
    }

    #[test]
    fn test_relative_dominates() {
        let content = "import { a } from '@/lib/a';\nimport b from './b';\nimport c from '../c';\n";
        let fx = fixture(&many(6, "src/f{}.ts", content));
        assert!(fx.detect(&ImportStyleDetector).is_empty());
    }

    #[test]
    fn test_prefers_tilde_alias() {
        let content = "import x from '~/utils/x'\n";
        let fx = fixture(&many(5, "src/f{}.js", content));
        let found = fx.detect(&ImportStyleDetector);
        assert_eq!(
            descriptions(&found),
            vec!["Prefer `~/` alias imports over relative paths"]
        );
    }
}
