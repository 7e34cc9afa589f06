pub mod html;
pub mod lists;
pub mod sections;

/// Statement pipeline: html → markdown → examples → constraints → follow-up → normalize.
///
/// Order matters: lists are already Markdown when the example pass runs, and
/// constraints are carved out before follow-up so the `Follow-up:` marker
/// still bounds them.
pub fn format_problem_statement(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }

    let markdown = html::html_to_markdown(html);
    let markdown = sections::format_examples(&markdown);
    let markdown = sections::format_constraints(&markdown);
    let markdown = sections::format_follow_up(&markdown);
    sections::normalize(&markdown)
}
