use std::sync::LazyLock;

use regex::Regex;

static EXAMPLE_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Example \d+:").unwrap());
static EXAMPLE_BOUNDARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Example \d+:|Constraints:|Follow-up:").unwrap());
static IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"!\[.*?\]\((.*?)\)").unwrap());
static INPUT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)input:").unwrap());
static INPUT_END_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</div>|output").unwrap());
static OUTPUT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)output:").unwrap());
static OUTPUT_END_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</div>|explanation").unwrap());
static EXPLANATION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)explanation:").unwrap());
static DIV_TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"</?div>").unwrap());
static SUB_POINT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+\))\s?").unwrap());

static CONSTRAINTS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Constraints:").unwrap());
static FOLLOW_UP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Follow-up:").unwrap());

static BLANK_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());
static TRAILING_TICKS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?mR)`+$").unwrap());

#[derive(Debug)]
struct Example<'a> {
    image: Option<&'a str>,
    input: Option<&'a str>,
    output: Option<&'a str>,
    explanation: Option<String>,
}

impl<'a> Example<'a> {
    /// Pull the fields out of one example body (text after `Example N:`).
    /// Each field is located independently, so their order in the body
    /// does not matter.
    fn parse(body: &'a str) -> Self {
        Example {
            image: IMAGE_RE.captures(body).and_then(|c| c.get(1)).map(|m| m.as_str()),
            input: field(body, &INPUT_RE, &INPUT_END_RE).map(code_value),
            output: field(body, &OUTPUT_RE, &OUTPUT_END_RE).map(code_value),
            explanation: EXPLANATION_RE
                .find(body)
                .map(|m| clean_explanation(&body[m.end()..])),
        }
    }

    fn render(&self, number: usize) -> String {
        let mut out = format!(">[!Example]+ Example {}\n", number);
        if let Some(image) = self.image {
            out.push_str(&format!(">![]({})\n>\n", image));
        }
        if let Some(input) = self.input.filter(|s| !s.is_empty()) {
            out.push_str(&format!(">**Input**: `{}`\n", input));
        }
        if let Some(output) = self.output.filter(|s| !s.is_empty()) {
            out.push_str(&format!(">**Output**: `{}`\n", output));
        }
        if let Some(explanation) = self.explanation.as_deref().filter(|s| !s.is_empty()) {
            out.push_str(&format!(">**Explanation**:\n>{}\n", explanation));
        }
        out.push('\n');
        out
    }
}

/// Text after the first `label` match, up to the first `end` match or end of body.
fn field<'a>(body: &'a str, label: &Regex, end: &Regex) -> Option<&'a str> {
    let start = label.find(body)?.end();
    let rest = &body[start..];
    Some(end.find(rest).map_or(rest, |m| &rest[..m.start()]))
}

/// Strip whitespace and the stray backticks a `<pre>` wrapper leaves behind.
fn code_value(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '`')
}

fn clean_explanation(raw: &str) -> String {
    let text = DIV_TAG_RE.replace_all(raw.trim(), "");
    let text = text.strip_suffix('`').unwrap_or(&*text).replace('\n', " ");
    SUB_POINT_RE
        .replace_all(&text, "\n> ${1} ")
        .trim_end()
        .to_string()
}

/// Rewrite every `Example N:` block into an `>[!Example]+` callout.
///
/// A block runs until the next `Example N:`, `Constraints:`, `Follow-up:` or
/// the end of the text. Examples are renumbered 1.. in document order,
/// regardless of the numbers in the source.
pub fn format_examples(markdown: &str) -> String {
    let mut out = String::with_capacity(markdown.len());
    let mut cursor = 0;
    let mut number = 1;

    while let Some(header) = EXAMPLE_HEADER_RE.find_at(markdown, cursor) {
        out.push_str(&markdown[cursor..header.start()]);
        let body_end = EXAMPLE_BOUNDARY_RE
            .find_at(markdown, header.end())
            .map_or(markdown.len(), |m| m.start());

        let example = Example::parse(&markdown[header.end()..body_end]);
        out.push_str(&example.render(number));

        number += 1;
        cursor = body_end;
    }

    out.push_str(&markdown[cursor..]);
    out
}

/// Rewrite the first `Constraints:` block (up to `Follow-up:` or end) into a
/// `>[!warning]+` callout, quoting each trimmed line. No marker, no change.
pub fn format_constraints(markdown: &str) -> String {
    let Some(marker) = CONSTRAINTS_RE.find(markdown) else {
        return markdown.to_string();
    };
    let end = FOLLOW_UP_RE
        .find_at(markdown, marker.end())
        .map_or(markdown.len(), |m| m.start());

    let body = markdown[marker.end()..end]
        .trim()
        .split('\n')
        .map(|line| format!(">{}", line.trim()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{}>[!warning]+ Constraints\n{}\n\n{}",
        &markdown[..marker.start()],
        body,
        &markdown[end..]
    )
}

/// Rewrite everything from the first `Follow-up:` to the end into a collapsed
/// `>[!Todo]-` callout. No marker, no change.
pub fn format_follow_up(markdown: &str) -> String {
    let Some(marker) = FOLLOW_UP_RE.find(markdown) else {
        return markdown.to_string();
    };
    let body = markdown[marker.end()..].trim().replace('\n', "\n>");
    format!("{}>[!Todo]- Follow Up\n>{}\n", &markdown[..marker.start()], body)
}

/// Collapse blank-line runs, squash trailing backtick runs, trim the document.
pub fn normalize(markdown: &str) -> String {
    let collapsed = BLANK_RUN_RE.replace_all(markdown, "\n\n");
    TRAILING_TICKS_RE
        .replace_all(&collapsed, "`")
        .trim()
        .to_string()
}

// ── Tests ──
