use thiserror::Error;

pub type Result<T, E = SsspError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum SsspError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// `vertex` is the id as given, which may be negative when it came from
    /// input text.
    #[error("vertex {vertex} out of range for {vertex_count} vertices")]
    OutOfRange { vertex: i128, vertex_count: usize },

    #[error("heap capacity {capacity} exceeded")]
    CapacityExceeded { capacity: usize },

    #[error("vertex {0} is not in the heap")]
    NotInHeap(usize),

    #[error("parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SsspError {
    pub(crate) fn out_of_range(vertex: usize, vertex_count: usize) -> Self {
        Self::OutOfRange {
            vertex: vertex as i128,
            vertex_count,
        }
    }
}
