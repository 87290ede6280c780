//! Colored CLI output.

use std::fmt::Write as _;

use colored::Colorize;

/// Prints pretty JSON with keys, strings, numbers and literals colored.
pub fn print_highlighted_json(value: &serde_json::Value) {
    let json = serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string());
    println!("{}", highlight_json(&json));
}

/// Colors pretty-printed JSON.
///
/// Keys are cyan, string values green, numbers yellow and `true`/`false`/`null`
/// magenta. Punctuation and whitespace pass through unchanged, so stripping the
/// color codes gives back the input.
#[must_use]
pub fn highlight_json(json: &str) -> String {
    let mut out = String::with_capacity(json.len() * 2);
    let mut chars = json.char_indices().peekable();

    while let Some((start, ch)) = chars.next() {
        match ch {
            '"' => {
                let mut end = json.len();
                let mut escaped = false;
                for (index, c) in chars.by_ref() {
                    if escaped {
                        escaped = false;
                    } else if c == '\\' {
                        escaped = true;
                    } else if c == '"' {
                        end = index + 1;
                        break;
                    }
                }

                let literal = &json[start..end];
                let is_key = json[end..].trim_start().starts_with(':');
                let _ = if is_key {
                    write!(out, "{}", literal.cyan())
                } else {
                    write!(out, "{}", literal.green())
                };
            }
            '-' | '0'..='9' | 't' | 'f' | 'n' => {
                let mut end = start + ch.len_utf8();
                while let Some(&(index, c)) = chars.peek() {
                    if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '+') {
                        end = index + c.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }

                let token = &json[start..end];
                let _ = if matches!(token, "true" | "false" | "null") {
                    write!(out, "{}", token.magenta())
                } else {
                    write!(out, "{}", token.yellow())
                };
            }
            _ => out.push(ch),
        }
    }

    out
}

/// Formats a boolean as a colored check mark or cross.
#[must_use]
pub fn format_bool(value: bool) -> String {
    if value {
        "✓".green().to_string()
    } else {
        "✗".red().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip_ansi(text: &str) -> String {
        let mut out = String::new();
        let mut chars = text.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn test_highlight_without_color_is_identity() {
        let json = serde_json::to_string_pretty(&serde_json::json!({
            "horizontalSnapMargin": 80.5,
            "autoSnap": true,
            "name": "a \"quoted\" value",
            "nothing": null,
            "list": [-1, 2e3]
        }))
        .unwrap();
        assert_eq!(strip_ansi(&highlight_json(&json)), json);
    }

    #[test]
    fn test_highlight_colors_keys_and_values_differently() {
        colored::control::set_override(true);
        let result = highlight_json(r#"{"key": "value"}"#);
        colored::control::unset_override();

        assert!(result.contains(&"\"key\"".cyan().to_string()));
        assert!(result.contains(&"\"value\"".green().to_string()));
    }

    #[test]
    fn test_format_bool_true() {
        let result = format_bool(true);
        assert!(result.contains('✓'));
    }

    #[test]
    fn test_format_bool_false() {
        let result = format_bool(false);
        assert!(result.contains('✗'));
    }
}
