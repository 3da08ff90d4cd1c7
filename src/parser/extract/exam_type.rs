use crate::model::ExamType;

const EXAM_MARKERS: &[&str] = &["exam", "examination"];
const MIDTERM_MARKERS: &[&str] = &["midterm", "mid-term", "mid term"];
const MAKEUP_MARKERS: &[&str] = &[
    "improvement",
    "makeup",
    "make-up",
    "make up",
    "supplementary",
    "retake",
];

/// Classify a document from the text of its first page. Rules are checked in
/// priority order: final, midterm, improvement/makeup.
pub fn classify(first_page: &str) -> ExamType {
    let normalized = first_page
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    let has_any = |markers: &[&str]| markers.iter().any(|m| normalized.contains(m));

    if normalized.contains("final") && has_any(EXAM_MARKERS) {
        ExamType::Final
    } else if has_any(MIDTERM_MARKERS) && has_any(EXAM_MARKERS) {
        ExamType::Midterm
    } else if has_any(MAKEUP_MARKERS) {
        ExamType::ImprovementOrMakeup
    } else {
        ExamType::Unknown
    }
}
