//! Stateless page-text extractors. Each returns an empty value instead of
//! failing when its pattern is absent.

pub mod course;
pub mod date;
pub mod exam_type;
pub mod slot;
