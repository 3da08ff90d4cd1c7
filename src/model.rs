use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

static SECTION_CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{2}_[A-Z]$").unwrap());

/// One extracted document: page text in physical order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub name: String,
    pub pages: Vec<String>,
}

impl Document {
    pub fn new(name: impl Into<String>, pages: Vec<String>) -> Self {
        Document {
            name: name.into(),
            pages,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExamType {
    Final,
    Midterm,
    ImprovementOrMakeup,
    #[default]
    Unknown,
}

impl fmt::Display for ExamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExamType::Final => "Final",
            ExamType::Midterm => "Midterm",
            ExamType::ImprovementOrMakeup => "Improvement/Makeup",
            ExamType::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseInfo {
    pub id: String,
    pub name: String,
}

impl CourseInfo {
    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
    }
}

/// Seat tokens are kept raw: room rows are not guaranteed to be numeric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSeats {
    pub room: String,
    pub seats: String,
}

impl RoomSeats {
    pub fn new(room: impl Into<String>, seats: impl Into<String>) -> Self {
        RoomSeats {
            room: room.into(),
            seats: seats.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub date: String,
    pub exam_type: ExamType,
    pub current_slot: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionRecord {
    pub section: String,
    pub date: String,
    pub time: String,
    pub exam_type: ExamType,
    pub teacher: String,
    pub rooms: Vec<RoomSeats>,
    pub total: String,
    pub course: CourseInfo,
}

/// A validated `NN_X` section code, e.g. `66_A`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SectionCode(String);

impl SectionCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Digits before the underscore (`"66"` for `66_A`).
    pub fn prefix(&self) -> &str {
        section_prefix(&self.0)
    }
}

impl FromStr for SectionCode {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        if SECTION_CODE_RE.is_match(&normalized) {
            Ok(SectionCode(normalized))
        } else {
            Err(ScheduleError::InvalidSectionCode(s.to_string()))
        }
    }
}

impl fmt::Display for SectionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything before the first underscore; the whole code when there is none.
pub fn section_prefix(code: &str) -> &str {
    code.split('_').next().unwrap_or(code)
}
