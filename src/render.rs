use crate::model::{CourseInfo, DocumentMetadata, SectionRecord};

const NOT_FOUND: &str = "(not found)";

/// Plain-text reply for a lookup: one block per record, blank line between.
pub fn render_records(section: &str, records: &[SectionRecord]) -> String {
    if records.is_empty() {
        return format!("No occurrences of section {} found.", section);
    }
    records
        .iter()
        .map(render_record)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_record(r: &SectionRecord) -> String {
    let mut out = vec![
        format!("======== SECTION {} ========", r.section),
        format!("Date:    {}", or_not_found(&r.date)),
        format!("Time:    {}", or_not_found(&r.time)),
        format!("Exam:    {}", r.exam_type),
        format!("Course:  {}", course_label(&r.course)),
        format!("Teacher: {}", r.teacher),
        "Rooms & Seats:".to_string(),
    ];
    out.extend(
        r.rooms
            .iter()
            .map(|room| format!("  - Room {:<8} {}", room.room, room.seats)),
    );
    out.push(format!("Total Seats: {}", r.total));
    out.join("\n")
}

/// One-document summary used by `inspect`.
pub fn render_metadata(name: &str, meta: &DocumentMetadata, course: Option<&CourseInfo>) -> String {
    let mut out = vec![
        format!("Document: {}", name),
        format!("  Date:      {}", or_not_found(&meta.date)),
        format!("  Exam:      {}", meta.exam_type),
        format!("  Last slot: {}", or_not_found(&meta.current_slot)),
    ];
    if let Some(c) = course {
        out.push(format!("  Course:    {}", course_label(c)));
    }
    out.join("\n")
}

fn course_label(c: &CourseInfo) -> String {
    if c.is_empty() {
        NOT_FOUND.to_string()
    } else {
        format!("{} ({})", c.name, c.id)
    }
}

fn or_not_found(s: &str) -> &str {
    if s.is_empty() {
        NOT_FOUND
    } else {
        s
    }
}
