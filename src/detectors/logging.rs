// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Logging framework detection.
//!
//! Several patterns share the `logger.info(` shape; the extension allow-list
//! keeps them apart across ecosystems. When two patterns are eligible for the
//! same file both counters move, and the first pattern in table order wins a
//! tie.

use lazy_static::lazy_static;
use regex::Regex;

use crate::report::{Convention, ConventionCategory};

use super::{is_source, DetectionContext, Detector};

const MAX_SAMPLES: usize = 30;
const MIN_FILES: usize = 3;

const JS: &[&str] = &[".js", ".jsx", ".ts", ".tsx"];

/// A logging library or idiom.
#[derive(Debug)]
pub struct LoggingPattern {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
    pub pattern: Regex,
    pub description: &'static str,
}

impl LoggingPattern {
    /// Name under which a match is reported.
    pub fn reported_name(&self) -> &'static str {
        match self.name {
            "python-logger" => "python",
            name => name,
        }
    }
}

macro_rules! logging_pattern {
    ($name:expr, $exts:expr, $re:expr, $desc:expr) => {
        LoggingPattern {
            name: $name,
            extensions: $exts,
            pattern: Regex::new($re).unwrap(),
            description: $desc,
        }
    };
}

lazy_static! {
    static ref PATTERNS: Vec<LoggingPattern> = vec![
        logging_pattern!("console", JS, r"console\.(log|info|warn|error|debug)\(", "Uses console.* for logging"),
        logging_pattern!(
            "winston",
            JS,
            r"winston\.(createLogger|info|warn|error|debug)|logger\.(info|warn|error|debug)\(",
            "Uses Winston for logging"
        ),
        logging_pattern!(
            "pino",
            JS,
            r"pino\(|logger\.(info|warn|error|debug|trace|fatal)\(",
            "Uses Pino for logging"
        ),
        logging_pattern!(
            "log4j",
            &[".java"],
            r"(log|logger|LOG|LOGGER)\.(info|warn|error|debug|trace)\(",
            "Uses Log4j-style logger calls"
        ),
        logging_pattern!("slf4j", &[".java"], r"LoggerFactory\.getLogger|@Slf4j", "Uses SLF4J for logging"),
        logging_pattern!(
            "python",
            &[".py"],
            r"logging\.(info|warning|error|debug|critical|getLogger)\(",
            "Uses Python's logging module"
        ),
        logging_pattern!(
            "python-logger",
            &[".py"],
            r"logger\.(info|warning|error|debug|critical|exception)\(",
            "Uses Python's logging module"
        ),
        logging_pattern!(
            "go-log",
            &[".go"],
            r"log\.(Print|Printf|Println|Fatal|Fatalf|Panic|Panicf)\(",
            "Uses Go's standard log package"
        ),
        logging_pattern!("go-slog", &[".go"], r"slog\.(Info|Warn|Error|Debug)\(", "Uses log/slog structured logging"),
        logging_pattern!(
            "go-zap",
            &[".go"],
            r"zap\.(L|S|New\w*|String|Int|Error)\(|\.Sugar\(\)",
            "Uses zap for logging"
        ),
        logging_pattern!("go-zerolog", &[".go"], r"zerolog\.|\.Msg\(", "Uses zerolog for logging"),
        logging_pattern!(
            "rust-log",
            &[".rs"],
            r"\b(info|warn|error|debug|trace)!\(",
            "Uses log/tracing macros for logging"
        ),
        logging_pattern!(
            "csharp",
            &[".cs"],
            r"[Ll]ogger\.Log(Information|Warning|Error|Debug|Trace|Critical)\(",
            "Uses ILogger for logging"
        ),
        logging_pattern!(
            "ruby",
            &[".rb"],
            r"(Rails\.logger|logger)\.(info|warn|error|debug)\b",
            "Uses Ruby Logger for logging"
        ),
    ];
}

/// The logging patterns in iteration (and tie-break) order.
pub fn patterns() -> &'static [LoggingPattern] {
    &PATTERNS
}

/// Whether any sampled file with this extension could carry logging
/// evidence: a source file, or one named by some pattern's allow-list.
fn is_loggable(extension: &str) -> bool {
    is_source(extension) || patterns().iter().any(|p| p.extensions.contains(&extension))
}

/// Index of the winning pattern: strictly more hits than every earlier
/// pattern, and at least `min`.
fn winner(counts: &[usize], min: usize) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for (idx, &count) in counts.iter().enumerate() {
        if best.map_or(true, |(_, b)| count > b) {
            best = Some((idx, count));
        }
    }
    best.filter(|&(_, count)| count >= min).map(|(idx, _)| idx)
}

/// Reports the dominant logging framework.
pub struct LoggingDetector;

impl Detector for LoggingDetector {
    fn name(&self) -> &'static str {
        "logging"
    }

    fn detect(&self, ctx: &DetectionContext<'_>) -> Vec<Convention> {
        let patterns = patterns();
        let mut counts = vec![0usize; patterns.len()];

        for sample in ctx.sample(MAX_SAMPLES, is_loggable) {
            for (pattern, count) in patterns.iter().zip(counts.iter_mut()) {
                if pattern.extensions.contains(&sample.extension)
                    && pattern.pattern.is_match(&sample.content)
                {
                    *count += 1;
                }
            }
        }

        tracing::debug!("Logging counts: {:?}", counts);

        let Some(idx) = winner(&counts, MIN_FILES) else {
            return Vec::new();
        };
        let chosen = &patterns[idx];
        tracing::debug!("Logging pattern {} reported as {}", chosen.name, chosen.reported_name());

        vec![Convention::new(ConventionCategory::Logging, chosen.description)]
    }
}

#[cfg(test)]
mod tests {
    use super::super::testutil::{descriptions, fixture, many};
    use super::*;

    #[test]
    fn test_console_threshold() {
        let fx = fixture(&many(2, "src/f{}.ts", "console.log('hi')"));
        assert!(fx.detect(&LoggingDetector).is_empty());

        let fx = fixture(&many(3, "src/f{}.ts", "console.log('hi')"));
        assert_eq!(
            descriptions(&fx.detect(&LoggingDetector)),
            vec!["Uses console.* for logging"]
        );
    }

    #[test]
    fn test_overlap_prefers_first_in_table() {
        // logger.info( matches both winston and pino
        let fx = fixture(&many(4, "src/f{}.js", "logger.info('x')"));
        assert_eq!(
            descriptions(&fx.detect(&LoggingDetector)),
            vec!["Uses Winston for logging"]
        );
    }

    #[test]
    fn test_pino_wins_with_more_hits() {
        let mut entries = many(3, "src/a{}.js", "logger.info('x')");
        entries.extend(many(2, "src/b{}.js", "const log = pino()"));
        let fx = fixture(&entries);
        assert_eq!(
            descriptions(&fx.detect(&LoggingDetector)),
            vec!["Uses Pino for logging"]
        );
    }

    #[test]
    fn test_python_logger_reported_as_python() {
        let fx = fixture(&many(3, "app/m{}.py", "logger.exception('boom')"));
        assert_eq!(
            descriptions(&fx.detect(&LoggingDetector)),
            vec!["Uses Python's logging module"]
        );
        let python_logger = patterns().iter().find(|p| p.name == "python-logger").unwrap();
        assert_eq!(python_logger.reported_name(), "python");
    }

    #[test]
    fn test_extension_allow_list() {
        // Rust macros in a .js file are not rust-log evidence
        let fx = fixture(&many(5, "src/f{}.js", "info!(\"x\"); warn!(\"y\");"));
        assert!(fx.detect(&LoggingDetector).is_empty());

        let fx = fixture(&many(3, "src/f{}.rs", "tracing::info!(\"x\");"));
        assert_eq!(
            descriptions(&fx.detect(&LoggingDetector)),
            vec!["Uses log/tracing macros for logging"]
        );
    }

    #[test]
    fn test_go_slog() {
        let fx = fixture(&many(3, "internal/f{}.go", "slog.Info(\"started\")"));
        assert_eq!(
            descriptions(&fx.detect(&LoggingDetector)),
            vec!["Uses log/slog structured logging"]
        );
    }

    #[test]
    fn test_winner_tie_break() {
        assert_eq!(winner(&[3, 3, 1], 3), Some(0));
        assert_eq!(winner(&[1, 4, 4], 3), Some(1));
        assert_eq!(winner(&[2, 2, 2], 3), None);
        assert_eq!(winner(&[0, 0], 1), None);
    }

    #[test]
    fn test_winner_is_order_stable() {
        // Input order of files does not matter, only the counts
        let mut a = many(3, "src/a{}.ts", "console.error(e)");
        a.extend(many(3, "src/b{}.ts", "winston.createLogger()"));
        let mut b = many(3, "src/a{}.ts", "winston.createLogger()");
        b.extend(many(3, "src/b{}.ts", "console.error(e)"));
        assert_eq!(
            descriptions(&fixture(&a).detect(&LoggingDetector)),
            descriptions(&fixture(&b).detect(&LoggingDetector))
        );
    }

    #[test]
    fn test_java_logger_threshold() {
        let content = "private static final Logger log = LoggerFactory.getLogger(A.class);\nlog.info(\"x\");";
        let fx = fixture(&many(2, "src/F{}.java", content));
        assert!(fx.detect(&LoggingDetector).is_empty());

        // log4j and slf4j tie on every file; log4j comes first in the table
        let fx = fixture(&many(3, "src/F{}.java", content));
        assert_eq!(
            descriptions(&fx.detect(&LoggingDetector)),
            vec!["Uses Log4j-style logger calls"]
        );
    }

    #[test]
    fn test_slf4j_annotation() {
        let fx = fixture(&many(3, "src/F{}.java", "@Slf4j\npublic class F {}"));
        assert_eq!(
            descriptions(&fx.detect(&LoggingDetector)),
            vec!["Uses SLF4J for logging"]
        );
    }

    #[test]
    fn test_csharp_threshold() {
        let content = "_logger.LogInformation(\"x\");";
        let fx = fixture(&many(2, "src/F{}.cs", content));
        assert!(fx.detect(&LoggingDetector).is_empty());

        let fx = fixture(&many(3, "src/F{}.cs", content));
        assert_eq!(
            descriptions(&fx.detect(&LoggingDetector)),
            vec!["Uses ILogger for logging"]
        );
    }

    #[test]
    fn test_ruby_threshold() {
        let content = "Rails.logger.info \"started\"";
        let fx = fixture(&many(2, "app/m{}.rb", content));
        assert!(fx.detect(&LoggingDetector).is_empty());

        let fx = fixture(&many(3, "app/m{}.rb", content));
        assert_eq!(
            descriptions(&fx.detect(&LoggingDetector)),
            vec!["Uses Ruby Logger for logging"]
        );
    }

    #[test]
    fn test_loggable_extensions() {
        assert!(is_loggable(".ts"));
        assert!(is_loggable(".java"));
        assert!(is_loggable(".cs"));
        assert!(!is_loggable(".md"));
    }

    #[test]
    fn test_patterns_accessor() {
        assert_eq!(patterns().len(), 14);
        assert_eq!(patterns()[0].name, "console");
        assert!(patterns().iter().all(|p| !p.extensions.is_empty()));
    }
}
