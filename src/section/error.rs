use thiserror::Error;

use crate::time::TimeError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Malformed course code {0:?}, expected \"DEPT LEVEL SECTION\"")]
    MalformedCourseCode(String),

    #[error("Invalid meeting time for {course}: {source}")]
    Time {
        course: String,
        #[source]
        source: TimeError,
    },
}
