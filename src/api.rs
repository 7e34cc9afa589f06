use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::{FetchFailure, PullError};

/// Wire shape of the `/select` endpoint. Everything is optional; the API
/// returns `null` or omits fields for unknown slugs and premium problems.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiProblem {
    pub question_frontend_id: Option<String>,
    pub question_title: Option<String>,
    pub difficulty: Option<String>,
    pub link: Option<String>,
    pub topic_tags: Option<Vec<ApiTopicTag>>,
    pub question: Option<String>,
    pub hints: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ApiTopicTag {
    pub name: Option<String>,
    pub slug: Option<String>,
}

/// Fetch one problem by title slug.
///
/// Transport errors, non-2xx statuses and undecodable bodies all surface as
/// `PullError::Fetch`; the detail is logged here and kept as the source.
pub async fn fetch_problem(client: &Client, api_url: &str, slug: &str) -> Result<ApiProblem, PullError> {
    info!(slug = %slug, "Fetching problem");
    fetch_inner(client, api_url, slug).await.map_err(|e| {
        warn!(slug = %slug, error = %e, "Fetch failed");
        PullError::from(e)
    })
}

async fn fetch_inner(client: &Client, api_url: &str, slug: &str) -> Result<ApiProblem, FetchFailure> {
    let response = client
        .get(api_url)
        .query(&[("titleSlug", slug)])
        .header(CONTENT_TYPE, "application/json")
        .header(CACHE_CONTROL, "no-cache")
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchFailure::Status(status));
    }

    let body = response.text().await?;
    debug!(slug = %slug, body = %body, "API response");

    Ok(serde_json::from_str(&body)?)
}
