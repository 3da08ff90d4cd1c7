use std::sync::LazyLock;

use regex::Regex;

use crate::config::{ParseOptions, TitleCorrection};
use crate::model::CourseInfo;

static COURSE_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-Z]{3}\d{3,4})\b").unwrap());
static INITIALS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z]{2,4}$").unwrap());

/// Line patterns for one numeric section prefix (`66` → `66_A`, `66_B`, ...).
pub struct CourseMatcher {
    on_line: Regex,
    whole_token: Regex,
}

impl CourseMatcher {
    pub fn new(prefix: &str) -> Self {
        let prefix = regex::escape(prefix);
        CourseMatcher {
            on_line: Regex::new(&format!(r"\b{}_[A-Z]\b", prefix)).unwrap(),
            whole_token: Regex::new(&format!(r"^{}_[A-Z]$", prefix)).unwrap(),
        }
    }

    /// First line naming a section of this prefix and a course code, e.g.
    /// `FSIT CSE227 Systems Analysis and Design NS 66_A 208 27 50`.
    /// Returns an empty `CourseInfo` when no line on the page qualifies.
    pub fn extract(&self, text: &str, opts: &ParseOptions) -> CourseInfo {
        text.lines()
            .filter(|line| self.on_line.is_match(line))
            .find_map(|line| self.parse_line(line, opts))
            .unwrap_or_default()
    }

    fn parse_line(&self, line: &str, opts: &ParseOptions) -> Option<CourseInfo> {
        let code = COURSE_CODE_RE.find(line)?;
        let mut title: Vec<&str> = line[code.end()..]
            .split_whitespace()
            .take_while(|tok| !self.whole_token.is_match(tok))
            .collect();

        if opts.strip_trailing_initials {
            strip_trailing_initials(&mut title);
        }

        Some(CourseInfo {
            id: code.as_str().to_string(),
            name: apply_corrections(title.join(" "), &opts.title_corrections),
        })
    }
}

/// Teacher initials (`NS`, `nNS`) often bleed into the end of the title column.
/// This over-trims genuine short words such as `Lab` or `II`.
pub fn looks_like_initials(token: &str) -> bool {
    INITIALS_RE.is_match(token) && token.chars().any(|c| c.is_ascii_uppercase())
}

fn strip_trailing_initials(tokens: &mut Vec<&str>) {
    while tokens.last().is_some_and(|tok| looks_like_initials(tok)) {
        tokens.pop();
    }
}

fn apply_corrections(title: String, corrections: &[TitleCorrection]) -> String {
    corrections
        .iter()
        .find_map(|c| {
            title
                .strip_suffix(c.suffix.as_str())
                .map(|head| format!("{}{}", head, c.replacement))
        })
        .unwrap_or(title)
}
