use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    /// The engine needs a non-empty, whitespace-free code to match tokens against.
    #[error("malformed section code {0:?}: must be a single non-empty token")]
    MalformedSectionCode(String),

    #[error("invalid section code {0:?}: expected a code like 66_A or 69_K")]
    InvalidSectionCode(String),
}
