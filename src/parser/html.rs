use std::sync::LazyLock;

use regex::Regex;

use super::lists::format_lists;

/// Ordered rewrite table. Each rule sees the output of the rules before it,
/// so entity decoding runs before the image/span rules and `&amp;` is decoded
/// after `&lt;`/`&gt;` (an escaped `&amp;lt;` stays `&lt;`).
static RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"<p>", "\n\n"),
        (r"</p>", ""),
        (r"</?code>", "`"),
        (r"</?em>", "*"),
        (r"<strong[^>]*>", ""),
        (r"</strong>", ""),
        (r"</?pre>", "`"),
        (r"<sup>(.*?)</sup>", "^${1}"),
        (r"<font[^>]*>", ""),
        (r"</font>", ""),
        (r"&nbsp;", " "),
        (r"&lt;", "<"),
        (r"&gt;", ">"),
        (r"&amp;", "&"),
        (r"&#39;", "'"),
        (r#"<img[^>]*src="([^"]*)"[^>]*>"#, "![](${1})"),
        (r#"<span class="example-io">(.*?)</span>"#, "${1}"),
        (r"&quot;", "\""),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), replacement))
    .collect()
});

/// Convert the whitelisted LeetCode HTML subset to Markdown.
///
/// Tags outside the whitelist (`div`, `table`, other `span`s, ...) pass
/// through unchanged; this is a lossy rewrite, not an HTML parser.
pub fn html_to_markdown(html: &str) -> String {
    let markdown = RULES
        .iter()
        .fold(html.to_string(), |text, (re, replacement)| {
            re.replace_all(&text, *replacement).into_owned()
        });
    format_lists(&markdown)
}

/// Remove anything that looks like a tag. No entity decoding.
pub fn strip_tags(html: &str) -> String {
    static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());
    TAG_RE.replace_all(html, "").into_owned()
}
