pub mod capture;
pub mod extract;
pub mod walker;

use tracing::info;

use crate::config::ParseOptions;
use crate::error::ScheduleError;
use crate::model::{Document, SectionRecord};

/// Documents → at most one record each, in the order the documents were given.
pub fn extract_schedule(
    documents: &[Document],
    section: &str,
    opts: &ParseOptions,
) -> Result<Vec<SectionRecord>, ScheduleError> {
    walker::validate_section(section)?;

    let mut records = Vec::new();
    for document in documents {
        if let Some(record) = walker::walk(document, section, opts)? {
            records.push(record);
        }
    }

    info!(
        section,
        documents = documents.len(),
        records = records.len(),
        "schedule extracted"
    );
    Ok(records)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ExamType, RoomSeats};
    use crate::source;

    fn fixtures() -> Vec<Document> {
        source::load_dir(std::path::Path::new("tests/fixtures")).unwrap()
    }

    #[test]
    fn final_fixture_section_66_a() {
        let records = extract_schedule(&fixtures(), "66_A", &ParseOptions::default()).unwrap();
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.date, "05-11-2025 (Wednesday)");
        assert_eq!(r.time, "Slot B (11:30 AM - 01:00 PM)");
        assert_eq!(r.exam_type, ExamType::Final);
        assert_eq!(r.teacher, "NS");
        assert_eq!(r.rooms, vec![RoomSeats::new("208", "27")]);
        assert_eq!(r.total, "50");
        assert_eq!(r.course.id, "CSE227");
        assert_eq!(r.course.name, "Systems Analysis and Design");
    }

    #[test]
    fn section_in_both_fixtures_keeps_file_order() {
        let records = extract_schedule(&fixtures(), "65_O", &ParseOptions::default()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].exam_type, ExamType::Final);
        assert_eq!(records[1].exam_type, ExamType::Midterm);

        // spills over to the second page, past the slot change
        let final_rec = &records[0];
        assert_eq!(final_rec.teacher, "ASM");
        assert_eq!(final_rec.time, "Slot B (11:30 AM - 01:00 PM)");
        let rooms: Vec<&str> = final_rec.rooms.iter().map(|r| r.room.as_str()).collect();
        assert_eq!(rooms, vec!["801B", "516", "517A", "G26", "501A-L"]);
        assert_eq!(final_rec.total, "51");
        assert_eq!(final_rec.course.name, "Data Structures");

        let mid = &records[1];
        assert_eq!(mid.date, "14-07-2025 (Monday)");
        assert_eq!(mid.time, "Slot A (09:00 AM - 10:30 AM)");
    }

    #[test]
    fn slot_on_later_page_applies_to_later_sections() {
        let records = extract_schedule(&fixtures(), "69_B", &ParseOptions::default()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].time, "Slot C (02:00 PM - 03:30 PM)");
        assert_eq!(records[0].rooms, vec![RoomSeats::new("601", "30"), RoomSeats::new("602", "12")]);
    }

    #[test]
    fn total_footer_never_becomes_a_room() {
        for section in ["66_A", "65_O", "69_B"] {
            let records = extract_schedule(&fixtures(), section, &ParseOptions::default()).unwrap();
            assert!(records
                .iter()
                .flat_map(|r| &r.rooms)
                .all(|room| !room.room.eq_ignore_ascii_case("total")));
        }
    }

    #[test]
    fn unknown_section_is_empty() {
        let records = extract_schedule(&fixtures(), "99_Z", &ParseOptions::default()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn repeated_runs_are_identical() {
        let docs = fixtures();
        let first = extract_schedule(&docs, "65_O", &ParseOptions::default()).unwrap();
        let second = extract_schedule(&docs, "65_O", &ParseOptions::default()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn malformed_code_is_an_error() {
        assert!(extract_schedule(&[], "", &ParseOptions::default()).is_err());
        assert!(extract_schedule(&[], "66_A", &ParseOptions::default())
            .unwrap()
            .is_empty());
    }
}
