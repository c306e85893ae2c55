use thiserror::Error;

/// Top-level error type for the Muralis paint-wall engine.
#[derive(Debug, Error)]
pub enum MuralisError {
    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Provision(#[from] ProvisionError),

    #[error(transparent)]
    Segment(#[from] SegmentError),

    #[error(transparent)]
    Removal(#[from] RemovalError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

/// Errors raised by document primitives.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DocumentError {
    #[error("level not found: {0:?}")]
    LevelNotFound(crate::document::LevelId),

    #[error("room not found: {0:?}")]
    RoomNotFound(crate::document::RoomId),

    #[error("wall not found: {0:?}")]
    WallNotFound(crate::document::WallId),

    #[error("wall type not found: {0:?}")]
    WallTypeNotFound(crate::document::WallTypeId),

    #[error("a wall type named {0:?} already exists")]
    DuplicateTypeName(String),

    #[error("wall type {0:?} does not accept structure edits")]
    NotABasicType(String),

    #[error("curve is degenerate or invalid")]
    InvalidCurve,

    #[error("wall height {0} is not positive")]
    InvalidHeight(f64),

    #[error("no parameter named {0:?} on this element")]
    UnknownParameter(String),

    #[error("parameter {0:?} is read-only")]
    ReadOnlyParameter(String),

    #[error("parameter {0:?} holds a different value kind")]
    ParameterKindMismatch(String),
}

/// Errors that abort wall-type provisioning.
#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("no basic wall type available to duplicate")]
    NoTemplateType,

    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// Errors local to a single boundary segment.
///
/// These never abort a generation pass; they are collected into the
/// pass report instead.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SegmentError {
    #[error("boundary segment has zero length")]
    DegenerateCurve,

    #[error("wall creation rejected: {0}")]
    CreationRejected(#[from] DocumentError),
}

/// Errors that abort a removal pass.
#[derive(Debug, Error)]
pub enum RemovalError {
    #[error("batch delete rejected: {0}")]
    BatchDeleteRejected(#[from] DocumentError),
}

/// Errors crossing the dispatch queue boundary.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("document worker is no longer running")]
    WorkerGone,
}

/// Convenience type alias for results using [`MuralisError`].
pub type Result<T> = std::result::Result<T, MuralisError>;
