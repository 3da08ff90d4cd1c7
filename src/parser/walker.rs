use std::cell::OnceCell;

use tracing::debug;

use super::capture::{Capture, SectionCapture};
use super::extract::{course::CourseMatcher, date, exam_type, slot};
use crate::config::ParseOptions;
use crate::error::ScheduleError;
use crate::model::{
    section_prefix, CourseInfo, Document, DocumentMetadata, ExamType, SectionRecord,
};

/// Per-document values gathered while walking pages. `date` and `course` lock
/// on the first page that yields them; `slot` follows the latest page that
/// names one.
#[derive(Default)]
struct Running {
    date: OnceCell<String>,
    course: OnceCell<CourseInfo>,
    slot: String,
}

impl Running {
    fn absorb(&mut self, page: &str, course: Option<&CourseMatcher>, opts: &ParseOptions) {
        if settle(&self.date, || Some(date::extract(page)).filter(|d| !d.is_empty())) {
            debug!(date = %self.date(), "date locked");
        }
        if slot::mentions_slot(page) {
            let found = slot::extract(page);
            if !found.is_empty() {
                self.slot = found;
            }
        }
        if let Some(matcher) = course {
            let locked = settle(&self.course, || {
                Some(matcher.extract(page, opts)).filter(|c| !c.is_empty())
            });
            if locked {
                debug!(course = %self.course().id, "course locked");
            }
        }
    }

    fn date(&self) -> String {
        self.date.get().cloned().unwrap_or_default()
    }

    fn course(&self) -> CourseInfo {
        self.course.get().cloned().unwrap_or_default()
    }
}

/// Set-if-absent: `find` only runs while the cell is still empty. Returns
/// whether this call filled it.
fn settle<T>(cell: &OnceCell<T>, find: impl FnOnce() -> Option<T>) -> bool {
    if cell.get().is_some() {
        return false;
    }
    match find() {
        Some(value) => cell.set(value).is_ok(),
        None => false,
    }
}

pub(crate) fn validate_section(section: &str) -> Result<(), ScheduleError> {
    if section.is_empty() || section.contains(char::is_whitespace) {
        return Err(ScheduleError::MalformedSectionCode(section.to_string()));
    }
    Ok(())
}

/// Walk one document's pages in order and return the first accepted record
/// for `section`, if any. At most one record comes out of a document.
pub fn walk(
    document: &Document,
    section: &str,
    opts: &ParseOptions,
) -> Result<Option<SectionRecord>, ScheduleError> {
    validate_section(section)?;
    let matcher = CourseMatcher::new(section_prefix(section));
    let exam_type = classify_document(document);
    let mut running = Running::default();

    for (idx, page) in document.pages.iter().enumerate() {
        running.absorb(page, Some(&matcher), opts);
        if !page.contains(section) {
            continue;
        }

        // slot as of this page, not the document-wide final value
        let time = running.slot.clone();
        let capture = capture_page(&document.pages, idx, section, opts.lookahead_pages);
        if !capture.is_accepted() {
            debug!(
                document = %document.name,
                page = idx,
                teacher = %capture.teacher,
                rooms = capture.rooms.len(),
                "section mentioned but capture rejected"
            );
            continue;
        }

        debug!(
            document = %document.name,
            page = idx,
            teacher = %capture.teacher,
            rooms = capture.rooms.len(),
            "section captured"
        );
        let Capture {
            teacher,
            total,
            rooms,
        } = capture;
        return Ok(Some(SectionRecord {
            section: section.to_string(),
            date: running.date(),
            time,
            exam_type,
            teacher,
            rooms,
            total,
            course: running.course(),
        }));
    }

    Ok(None)
}

/// Metadata of a whole document without capturing any section. The course is
/// only looked up when a section prefix is given.
pub fn scan_metadata(
    document: &Document,
    prefix: Option<&str>,
    opts: &ParseOptions,
) -> (DocumentMetadata, CourseInfo) {
    let matcher = prefix.map(CourseMatcher::new);
    let running = document.pages.iter().fold(Running::default(), |mut acc, page| {
        acc.absorb(page, matcher.as_ref(), opts);
        acc
    });
    let metadata = DocumentMetadata {
        date: running.date(),
        exam_type: classify_document(document),
        current_slot: running.slot.clone(),
    };
    (metadata, running.course())
}

fn classify_document(document: &Document) -> ExamType {
    document
        .pages
        .first()
        .map(|first| exam_type::classify(first))
        .unwrap_or_default()
}

/// Lines of page `idx` followed by up to `lookahead` following pages, so room
/// rows that spill over a page break are still seen.
fn capture_page(pages: &[String], idx: usize, section: &str, lookahead: usize) -> Capture {
    let end = idx.saturating_add(lookahead).saturating_add(1).min(pages.len());
    SectionCapture::new(section).run(pages[idx..end].iter().flat_map(|p| p.lines()))
}
