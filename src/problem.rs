use std::collections::BTreeMap;

use serde::Serialize;
use tracing::warn;

use crate::api::{ApiProblem, ApiTopicTag};
use crate::error::PullError;
use crate::format::{format_hints, format_tags, sanitize_file_name};
use crate::parser::format_problem_statement;
use crate::settings::Settings;
use crate::slug::problem_url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Unknown,
}

impl Difficulty {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "Easy" => Self::Easy,
            "Medium" => Self::Medium,
            "Hard" => Self::Hard,
            "" => Self::Unknown,
            other => {
                warn!(difficulty = %other, "Unrecognized difficulty");
                Self::Unknown
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Unknown => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicTag {
    pub name: String,
    pub slug: Option<String>,
}

impl From<ApiTopicTag> for TopicTag {
    fn from(tag: ApiTopicTag) -> Self {
        TopicTag {
            name: tag.name.unwrap_or_default(),
            slug: tag.slug,
        }
    }
}

/// A fetched problem with absent fields defaulted.
#[derive(Debug, Clone)]
pub struct ProblemRecord {
    pub id: String,
    pub title: String,
    pub difficulty: Difficulty,
    pub link: String,
    pub topic_tags: Vec<TopicTag>,
    pub statement_html: String,
    pub hints: Vec<String>,
}

impl ProblemRecord {
    /// `slug` is only used to build a fallback link when the API has none.
    pub fn from_api(api: ApiProblem, slug: &str) -> Self {
        ProblemRecord {
            id: api.question_frontend_id.unwrap_or_default(),
            title: api.question_title.unwrap_or_default(),
            difficulty: Difficulty::parse(api.difficulty.as_deref().unwrap_or_default()),
            link: api.link.unwrap_or_else(|| problem_url(slug)),
            topic_tags: api
                .topic_tags
                .unwrap_or_default()
                .into_iter()
                .map(TopicTag::from)
                .collect(),
            statement_html: api.question.unwrap_or_default(),
            hints: api.hints.unwrap_or_default(),
        }
    }
}

/// Everything a note template can reference. All values are plain strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedProblem {
    pub id: String,
    pub title: String,
    pub difficulty: String,
    pub link: String,
    pub topic_tags: String,
    pub file_name: String,
    pub difficulty_link: String,
    pub tags: String,
    pub formatted_hints: String,
    pub problem_statement: String,
}

impl FormattedProblem {
    /// Flat `name -> value` view, keyed by the template variable names.
    pub fn variables(&self) -> BTreeMap<&'static str, &str> {
        BTreeMap::from([
            ("id", self.id.as_str()),
            ("title", self.title.as_str()),
            ("difficulty", self.difficulty.as_str()),
            ("link", self.link.as_str()),
            ("topicTags", self.topic_tags.as_str()),
            ("fileName", self.file_name.as_str()),
            ("difficultyLink", self.difficulty_link.as_str()),
            ("tags", self.tags.as_str()),
            ("formattedHints", self.formatted_hints.as_str()),
            ("problemStatement", self.problem_statement.as_str()),
        ])
    }
}

/// Build the output record. Tags are formatted first so a malformed tag
/// fails before any statement work is done.
pub fn assemble(record: &ProblemRecord, settings: &Settings) -> Result<FormattedProblem, PullError> {
    let tags = format_tags(&record.topic_tags, &settings.tag_prefix)?;
    let difficulty = record.difficulty.as_str();

    Ok(FormattedProblem {
        id: record.id.clone(),
        title: record.title.clone(),
        difficulty: difficulty.to_string(),
        link: record.link.clone(),
        topic_tags: record
            .topic_tags
            .iter()
            .map(|t| t.name.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        file_name: format!("{}. {}", record.id, sanitize_file_name(&record.title)),
        difficulty_link: format!("[[{}]]", difficulty),
        tags,
        formatted_hints: format_hints(&record.hints),
        problem_statement: format_problem_statement(&record.statement_html),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_sum() -> ProblemRecord {
        let json = std::fs::read_to_string("tests/fixtures/two_sum.json").unwrap();
        let api: ApiProblem = serde_json::from_str(&json).unwrap();
        ProblemRecord::from_api(api, "two-sum")
    }

    #[test]
    fn record_from_api() {
        let r = two_sum();
        assert_eq!(r.id, "1");
        assert_eq!(r.title, "Two Sum");
        assert_eq!(r.difficulty, Difficulty::Easy);
        assert_eq!(r.link, "https://leetcode.com/problems/two-sum");
        assert_eq!(r.topic_tags[1].slug.as_deref(), Some("hash-table"));
        assert_eq!(r.hints.len(), 2);
    }

    #[test]
    fn empty_api_defaults() {
        let r = ProblemRecord::from_api(ApiProblem::default(), "add-two-numbers");
        assert_eq!(r.id, "");
        assert_eq!(r.difficulty, Difficulty::Unknown);
        assert_eq!(r.link, "https://leetcode.com/problems/add-two-numbers");
        assert!(r.topic_tags.is_empty());
        assert!(r.hints.is_empty());
    }

    #[test]
    fn difficulty_parsing() {
        assert_eq!(Difficulty::parse("Hard"), Difficulty::Hard);
        assert_eq!(Difficulty::parse(""), Difficulty::Unknown);
        assert_eq!(Difficulty::parse("Legendary").as_str(), "");
    }

    #[test]
    fn assemble_two_sum() {
        let p = assemble(&two_sum(), &Settings::default()).unwrap();
        assert_eq!(p.file_name, "1. Two Sum");
        assert_eq!(p.difficulty_link, "[[Easy]]");
        assert_eq!(p.topic_tags, "Array, Hash Table");
        assert_eq!(p.tags, "   - leetcode/array\n   - leetcode/hash-table");
        assert!(p.formatted_hints.starts_with(">[!Hint]- Hint 1\n>A really brute force way"));
        assert!(p.formatted_hints.contains("\n\n>[!Hint]- Hint 2\n>So, if we fix one of the numbers, say x,"));
        assert!(p.problem_statement.contains(">[!Example]+ Example 3"));
    }

    #[test]
    fn assemble_uses_configured_prefix() {
        let settings = Settings {
            tag_prefix: "lc/".into(),
            ..Settings::default()
        };
        let p = assemble(&two_sum(), &settings).unwrap();
        assert!(p.tags.starts_with("   - lc/array"));
    }

    #[test]
    fn assemble_rejects_tag_without_slug() {
        let mut r = two_sum();
        r.topic_tags.push(TopicTag {
            name: "Broken".into(),
            slug: None,
        });
        assert!(matches!(
            assemble(&r, &Settings::default()),
            Err(PullError::MalformedTag { index: 2 })
        ));
    }

    #[test]
    fn empty_record() {
        let r = ProblemRecord::from_api(ApiProblem::default(), "x");
        let p = assemble(&r, &Settings::default()).unwrap();
        assert_eq!(p.file_name, ". ");
        assert_eq!(p.difficulty_link, "[[]]");
        assert_eq!(p.formatted_hints, "No hints available.");
        assert_eq!(p.problem_statement, "");
        assert_eq!(p.tags, "");
    }

    #[test]
    fn variables_are_flat_strings() {
        let p = assemble(&two_sum(), &Settings::default()).unwrap();
        let vars = p.variables();
        assert_eq!(vars.len(), 10);
        assert_eq!(vars["fileName"], "1. Two Sum");
        assert_eq!(vars["difficultyLink"], "[[Easy]]");
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["problemStatement"], p.problem_statement);
    }
}
