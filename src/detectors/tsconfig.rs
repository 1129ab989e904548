// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Lenient tsconfig.json loading.
//!
//! tsconfig files are JSONC: comments and trailing commas are common, so
//! both are stripped, outside string literals, before handing the text to
//! serde_json.

use serde_json::Value;

use super::DetectionContext;

/// Load and parse `tsconfig.json` at the repository root.
pub fn load(ctx: &DetectionContext<'_>) -> Option<Value> {
    let text = ctx.read_root_file("tsconfig.json")?;
    match parse(&text) {
        Some(value) => Some(value),
        None => {
            tracing::debug!("tsconfig.json could not be parsed");
            None
        }
    }
}

/// Parse tsconfig text, tolerating comments and trailing commas.
pub fn parse(text: &str) -> Option<Value> {
    serde_json::from_str(&to_strict_json(text)).ok()
}

/// The `compilerOptions` object, if any.
pub fn compiler_options(config: &Value) -> Option<&serde_json::Map<String, Value>> {
    config.get("compilerOptions")?.as_object()
}

/// Drop comments and trailing commas, leaving string contents untouched.
fn to_strict_json(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut in_string = false;
    // Byte offset in `out` of a comma that may turn out to be trailing
    let mut pending_comma: Option<usize> = None;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            match c {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match (c, chars.peek()) {
            ('"', _) => {
                pending_comma = None;
                in_string = true;
                out.push(c);
            }
            ('/', Some('/')) => {
                for next in chars.by_ref() {
                    if next == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut prev = '\0';
                for next in chars.by_ref() {
                    if prev == '*' && next == '/' {
                        break;
                    }
                    prev = next;
                }
            }
            (',', _) => {
                pending_comma = Some(out.len());
                out.push(c);
            }
            ('}' | ']', _) => {
                if let Some(idx) = pending_comma.take() {
                    out.remove(idx);
                }
                out.push(c);
            }
            _ => {
                if !c.is_whitespace() {
                    pending_comma = None;
                }
                out.push(c);
            }
        }
    }

    out
}
