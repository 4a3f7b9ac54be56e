use thiserror::Error;

/// Failures while turning Wavefront OBJ text into meshes.
#[derive(Debug, Error, PartialEq)]
pub enum ObjError {
    #[error("line {line}: expected {expected} numbers after `{keyword}`")]
    MissingComponents {
        line: usize,
        keyword: &'static str,
        expected: usize,
    },
    #[error("line {line}: invalid number `{token}`")]
    InvalidNumber { line: usize, token: String },
    #[error("line {line}: face needs at least 3 vertices, found {found}")]
    DegenerateFace { line: usize, found: usize },
    #[error("line {line}: index {index} out of range (have {available})")]
    IndexOutOfRange {
        line: usize,
        index: i64,
        available: usize,
    },
    #[error("no faces found")]
    Empty,
}
