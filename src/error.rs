use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("polygon needs at least 3 vertices, got {vertex_count}")]
    InvalidPolygon { vertex_count: usize },
    #[error("no active 3D viewport, cannot run lasso select")]
    NoActiveViewport,
}
