//! Helper functions exposed to the template language.
//! The registry is fixed: templates see exactly these names, and the tree
//! walker never inspects their behavior.

use cruet::Inflector;
use minijinja::value::Value;
use minijinja::{Environment, Error, ErrorKind};

/// Installs the helper registry on a MiniJinja environment. The `upper`
/// and `lower` case transforms come from MiniJinja's builtin filters.
pub fn register(env: &mut Environment<'static>) {
    env.add_filter("title", title);
    env.add_filter("stringreplace", stringreplace);
    env.add_filter("regexreplace", regexreplace);
    env.add_function("now", now);
    env.add_function("json", json);
    env.add_function("jsonindent", jsonindent);
    env.add_function("unescape", unescape);
    env.add_function("add", add);
}

/// Title-cases every word of the input.
pub fn title(value: String) -> String {
    value.to_title_case()
}

/// Replaces every occurrence of a literal substring.
pub fn stringreplace(value: String, from: String, to: String) -> String {
    value.replace(&from, &to)
}

/// Replaces every match of a regular expression. The replacement may
/// reference capture groups with `$1`-style syntax.
pub fn regexreplace(
    value: String,
    pattern: String,
    replacement: String,
) -> std::result::Result<String, Error> {
    let re = regex::Regex::new(&pattern).map_err(|e| {
        Error::new(
            ErrorKind::InvalidOperation,
            format!("invalid regular expression: {}", e),
        )
    })?;
    Ok(re.replace_all(&value, replacement.as_str()).into_owned())
}

/// Current UTC timestamp in RFC 3339 form.
pub fn now() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// Serializes a value as compact JSON.
pub fn json(value: Value) -> std::result::Result<String, Error> {
    serde_json::to_string(&value).map_err(|e| {
        Error::new(
            ErrorKind::InvalidOperation,
            format!("value is not JSON-serializable: {}", e),
        )
    })
}

/// Serializes a value as indented JSON.
pub fn jsonindent(value: Value) -> std::result::Result<String, Error> {
    serde_json::to_string_pretty(&value).map_err(|e| {
        Error::new(
            ErrorKind::InvalidOperation,
            format!("value is not JSON-serializable: {}", e),
        )
    })
}

/// Marks a string as pre-escaped so auto-escaping leaves it alone.
pub fn unescape(value: String) -> Value {
    Value::from_safe_string(value)
}

/// Adds two integers.
pub fn add(a: i64, b: i64) -> i64 {
    a + b
}
