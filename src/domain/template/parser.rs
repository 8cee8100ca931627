//! Two-pass template parser.
//!
//! Pass 1 lifts `&&KEY = VALUE&&` directive lines out of the document.
//! Pass 2 collects `##KEY##` placeholder markers from what remains.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

use chrono::Datelike;
use regex::Regex;

use crate::domain::config::tool_config::DEFAULT_SOURCE_EXTENSION;

use super::descriptor::{EXTENSION, MENUNAME, PRIORITY, TemplateDescriptor};
use super::placeholders::{CLASS_NAME, Placeholders, YEAR};

static DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&&(\w+)[ \t]*=[ \t]*(.?[\w/# ]+)&&(?:\r?\n)?")
        .expect("directive pattern must be valid")
});

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"##(\w+)##").expect("placeholder pattern must be valid"));

/// Parser turning raw template text into a [`TemplateDescriptor`].
#[derive(Debug, Clone)]
pub struct TemplateParser {
    default_extension: String,
    year: i32,
}

impl Default for TemplateParser {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_EXTENSION)
    }
}

impl TemplateParser {
    /// Parser stamping `Year` with the current local year.
    pub fn new(default_extension: impl Into<String>) -> Self {
        Self { default_extension: default_extension.into(), year: chrono::Local::now().year() }
    }

    /// Override the year used for the `Year` placeholder.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Parse `raw` read from `filename`.
    ///
    /// Returns `None` only for an empty document. Markup that does not match
    /// either pattern is left in the body untouched.
    pub fn parse(&self, raw: &str, filename: impl AsRef<Path>) -> Option<TemplateDescriptor> {
        if raw.is_empty() {
            return None;
        }
        let filename = filename.as_ref();

        let (mut directives, body) = lift_directives(raw);

        directives
            .entry(EXTENSION.to_string())
            .or_insert_with(|| self.default_extension.clone());

        let mut placeholders = Placeholders::new();
        placeholders.register(CLASS_NAME, "");
        for caps in PLACEHOLDER.captures_iter(&body) {
            let key = &caps[1];
            if placeholders.register(key, "") && key == YEAR {
                placeholders.set(key, self.year.to_string());
            }
        }

        let menu_label = directives
            .get(MENUNAME)
            .filter(|name| !name.is_empty())
            .cloned()
            .unwrap_or_else(|| file_stem(filename));

        let priority =
            directives.get(PRIORITY).and_then(|value| value.parse::<i32>().ok()).unwrap_or(0);

        Some(TemplateDescriptor {
            menu_label,
            directives,
            placeholders,
            body,
            priority,
            source: filename.to_path_buf(),
        })
    }
}

/// Collect and remove directive spans until none are left.
///
/// Removing one span can join the text around it into a new directive, so
/// stripping repeats until the body no longer matches. The first value seen
/// for a key wins across all rounds.
fn lift_directives(text: &str) -> (BTreeMap<String, String>, String) {
    let mut directives = BTreeMap::new();
    let mut body = text.to_string();
    while DIRECTIVE.is_match(&body) {
        for caps in DIRECTIVE.captures_iter(&body) {
            directives
                .entry(caps[1].to_uppercase())
                .or_insert_with(|| caps[2].trim().to_string());
        }
        body = DIRECTIVE.replace_all(&body, "").into_owned();
    }
    (directives, body)
}

/// Remove every directive span (and its line break) from `text`.
pub fn strip_directives(text: &str) -> String {
    lift_directives(text).1
}

fn file_stem(path: &Path) -> String {
    path.file_stem().map(|stem| stem.to_string_lossy().into_owned()).unwrap_or_default()
}
