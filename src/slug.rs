use url::Url;

use crate::error::PullError;

const URL_SCHEMES: &[&str] = &["http://", "https://"];
const PROBLEMS_SEGMENT: &str = "problems";

/// Extract the title slug from either a problem URL or a bare slug.
///
/// URLs must contain `/problems/<slug>`; anything after the slug is ignored.
/// Non-URL input is taken as the slug itself, without validation.
pub fn extract_title_slug(input: &str) -> Result<String, PullError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(PullError::MissingInput);
    }

    if !URL_SCHEMES.iter().any(|s| input.starts_with(s)) {
        return Ok(input.to_string());
    }

    let invalid = || PullError::InvalidUrl { input: input.to_string() };
    let url = Url::parse(input).map_err(|_| invalid())?;
    let segments: Vec<&str> = url.path_segments().map(|s| s.collect()).unwrap_or_default();

    segments
        .iter()
        .position(|s| *s == PROBLEMS_SEGMENT)
        .and_then(|i| segments.get(i + 1))
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .ok_or_else(invalid)
}

/// Canonical problem page for a slug, used when the API omits `link`.
pub fn problem_url(slug: &str) -> String {
    format!("https://leetcode.com/problems/{}", slug)
}
