use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{bail, Context, Result};
use regex::{Captures, Regex};
use tracing::info;

use crate::problem::FormattedProblem;

/// `{{name}}` or QuickAdd-style `{{VALUE:name}}`.
static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*(?:VALUE:)?(\w+)\s*\}\}").unwrap());

pub const DEFAULT_TEMPLATE: &str = "---
tags:
{{tags}}
difficulty: \"{{difficultyLink}}\"
link: {{link}}
---
# {{id}}. {{title}}

{{problemStatement}}

## Hints

{{formattedHints}}
";

/// Substitute known placeholders; unknown ones are left in place.
pub fn render(template: &str, vars: &BTreeMap<&str, &str>) -> String {
    PLACEHOLDER_RE
        .replace_all(template, |caps: &Captures| match vars.get(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Render the note and write it to `<dir>/<fileName>.md`.
pub fn write_note(
    dir: &Path,
    problem: &FormattedProblem,
    template: &str,
    overwrite: bool,
) -> Result<PathBuf> {
    let path = dir.join(format!("{}.md", problem.file_name));
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    let body = render(template, &problem.variables());

    // create_new makes the existence check and the create a single step.
    let mut options = OpenOptions::new();
    options.write(true);
    if overwrite {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }
    let mut file = match options.open(&path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            bail!("{} already exists (use --force to overwrite)", path.display());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to open {}", path.display()));
        }
    };
    file.write_all(body.as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!(path = %path.display(), "Note written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn problem() -> FormattedProblem {
        FormattedProblem {
            id: "1".into(),
            title: "Two Sum".into(),
            difficulty: "Easy".into(),
            link: "https://leetcode.com/problems/two-sum".into(),
            topic_tags: "Array".into(),
            file_name: "1. Two Sum".into(),
            difficulty_link: "[[Easy]]".into(),
            tags: "   - leetcode/array".into(),
            formatted_hints: "No hints available.".into(),
            problem_statement: "Find two numbers.".into(),
        }
    }

    #[test]
    fn render_both_placeholder_styles() {
        let p = problem();
        let out = render("{{title}} / {{VALUE:difficultyLink}} / {{ id }}", &p.variables());
        assert_eq!(out, "Two Sum / [[Easy]] / 1");
    }

    #[test]
    fn unknown_placeholder_kept() {
        let p = problem();
        assert_eq!(render("{{date}} {{id}}", &p.variables()), "{{date}} 1");
    }

    #[test]
    fn values_not_re_expanded() {
        let mut p = problem();
        p.problem_statement = "literal {{title}}".into();
        assert_eq!(render("{{problemStatement}}", &p.variables()), "literal {{title}}");
    }

    #[test]
    fn default_template() {
        let out = render(DEFAULT_TEMPLATE, &problem().variables());
        assert!(out.starts_with("---\ntags:\n   - leetcode/array\ndifficulty: \"[[Easy]]\"\n"));
        assert!(out.contains("# 1. Two Sum\n\nFind two numbers.\n"));
        assert!(out.contains("## Hints\n\nNo hints available.\n"));
        assert!(!out.contains("{{"));
    }

    #[test]
    fn writes_note_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_note(dir.path(), &problem(), "{{title}}", false).unwrap();
        assert_eq!(path, dir.path().join("1. Two Sum.md"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "Two Sum");
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("LeetCode").join("Easy");
        let path = write_note(&nested, &problem(), "x", false).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        write_note(dir.path(), &problem(), "first", false).unwrap();
        let err = write_note(dir.path(), &problem(), "second", false).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(
            fs::read_to_string(dir.path().join("1. Two Sum.md")).unwrap(),
            "first"
        );

        let path = write_note(dir.path(), &problem(), "second", true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");

        write_note(dir.path(), &problem(), "3", true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "3");
    }
}
