use std::sync::LazyLock;

use regex::Regex;

use crate::error::PullError;
use crate::parser::html::strip_tags;
use crate::problem::TopicTag;

static ILLEGAL_FILE_CHARS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[\\,#%&{}/*<>$'":@]"#).unwrap());

pub const NO_HINTS: &str = "No hints available.";

/// One `   - <prefix><slug>` line per tag, for a YAML `tags:` list.
/// Fails on the first tag without a slug.
pub fn format_tags(tags: &[TopicTag], prefix: &str) -> Result<String, PullError> {
    let lines = tags
        .iter()
        .enumerate()
        .map(|(index, tag)| {
            tag.slug
                .as_deref()
                .map(|slug| format!("   - {}{}", prefix, slug.trim()))
                .ok_or(PullError::MalformedTag { index })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(lines.join("\n"))
}

/// Each hint becomes its own collapsed `>[!Hint]-` callout, numbered from 1.
pub fn format_hints(hints: &[String]) -> String {
    if hints.is_empty() {
        return NO_HINTS.to_string();
    }
    hints
        .iter()
        .enumerate()
        .map(|(i, hint)| {
            format!(
                ">[!Hint]- Hint {}\n>{}",
                i + 1,
                strip_tags(hint).replace('\n', "\n>")
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Delete characters that are not allowed in note file names.
/// Nothing is substituted, so "A/B" becomes "AB".
pub fn sanitize_file_name(name: &str) -> String {
    ILLEGAL_FILE_CHARS_RE.replace_all(name, "").into_owned()
}
