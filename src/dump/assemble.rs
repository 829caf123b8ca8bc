//! Output assembly: wraps formatted records into an array block.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::{RECORD_INDENT, UPSERT_TEMPLATE};

use super::format::compile_regex_unsafe;

static ACRONYM_BOUNDARY_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(r"([A-Z]+)([A-Z][a-z])", "ACRONYM_BOUNDARY_RE"));
static WORD_BOUNDARY_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(r"([a-z\d])([A-Z])", "WORD_BOUNDARY_RE"));

/// Lower-snake-cases a model name: `Sample` → `sample`, `HTTPServer` →
/// `http_server`, `Admin::User` → `admin/user`.
pub fn underscore(model_name: &str) -> String {
    let path = model_name.replace("::", "/");
    let split = ACRONYM_BOUNDARY_RE.replace_all(&path, "${1}_${2}");
    let split = WORD_BOUNDARY_RE.replace_all(&split, "${1}_${2}");
    split.replace('-', "_").to_lowercase()
}

/// Builds the seed block for one dump:
///
/// ```text
/// sample = [
///   {string: "string"},
///   {string: "other"}
/// ]
/// ```
///
/// followed by the update-or-create block when `upsert_template` is set.
pub fn assemble(
    variable_name: &str,
    model_name: &str,
    records: &[String],
    upsert_template: bool,
) -> String {
    let mut out = format!("{variable_name} = [\n");
    if !records.is_empty() {
        let separator = format!(",\n{RECORD_INDENT}");
        out.push_str(RECORD_INDENT);
        out.push_str(&records.join(&separator));
        out.push('\n');
    }
    out.push_str("]\n");
    if upsert_template {
        out.push_str(&upsert_block(variable_name, model_name));
    }
    out
}

/// The update-or-create block with names substituted.
pub fn upsert_block(variable_name: &str, model_name: &str) -> String {
    UPSERT_TEMPLATE
        .replace("[model_name]", model_name)
        .replace("[var_name]", variable_name)
}
