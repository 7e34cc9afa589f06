use std::sync::LazyLock;

use regex::{Captures, Regex};

static LIST_TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"</?(?:ul|ol|li)>").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Unordered,
    Ordered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListToken {
    Open(ListKind),
    Close,
    Item,
    ItemEnd,
}

impl ListToken {
    fn parse(tag: &str) -> Option<Self> {
        match tag {
            "<ul>" => Some(Self::Open(ListKind::Unordered)),
            "<ol>" => Some(Self::Open(ListKind::Ordered)),
            "</ul>" | "</ol>" => Some(Self::Close),
            "<li>" => Some(Self::Item),
            "</li>" => Some(Self::ItemEnd),
            _ => None,
        }
    }
}

/// One open list. The ordinal lives with its frame, so popping a list also
/// discards its counter and a reopened list at the same depth starts at 1.
#[derive(Debug)]
struct ListFrame {
    kind: ListKind,
    next_ordinal: usize,
}

/// Nesting state for one conversion. Depth is the stack length.
#[derive(Debug, Default)]
struct ListState {
    stack: Vec<ListFrame>,
}

impl ListState {
    fn emit(&mut self, token: ListToken) -> String {
        match token {
            ListToken::Open(kind) => {
                self.stack.push(ListFrame { kind, next_ordinal: 1 });
                "\n".to_string()
            }
            // Stray closers outside any list emit nothing
            ListToken::Close => match self.stack.pop() {
                Some(_) => "\n".to_string(),
                None => String::new(),
            },
            ListToken::Item => self.item_marker(),
            ListToken::ItemEnd => String::new(),
        }
    }

    fn item_marker(&mut self) -> String {
        let depth = self.stack.len();
        let Some(frame) = self.stack.last_mut() else {
            return String::new();
        };
        let indent = "  ".repeat(depth - 1);
        match frame.kind {
            ListKind::Unordered => format!("\n{}- ", indent),
            ListKind::Ordered => {
                let n = frame.next_ordinal;
                frame.next_ordinal += 1;
                format!("\n{}{}. ", indent, n)
            }
        }
    }
}

/// Rewrite `<ul>/<ol>/<li>` tags into indented Markdown list markers.
///
/// Only the bare tag forms are recognized; anything with attributes passes
/// through untouched like any other unknown tag.
pub fn format_lists(markdown: &str) -> String {
    let mut state = ListState::default();
    LIST_TAG_RE
        .replace_all(markdown, |caps: &Captures| {
            ListToken::parse(&caps[0])
                .map(|token| state.emit(token))
                .unwrap_or_default()
        })
        .into_owned()
}
