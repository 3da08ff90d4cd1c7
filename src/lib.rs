//! Exam seat-plan parsing: turns already-extracted page text into per-section
//! schedule records (date, slot, course, teacher, rooms and seats).

pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod source;

pub use config::{ParseOptions, Settings};
pub use error::ScheduleError;
pub use model::{CourseInfo, Document, ExamType, RoomSeats, SectionCode, SectionRecord};
pub use parser::extract_schedule;
