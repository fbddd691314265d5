use thiserror::Error;

pub type Result<T> = std::result::Result<T, OrbitError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrbitError {
    #[error("invalid line format: '{line}'")]
    MalformedRecord { line: String },

    #[error("duplicate orbiter detected: '{child}' already orbits '{existing}', cannot orbit '{attempted}'")]
    DuplicateChild {
        child: String,
        existing: String,
        attempted: String,
    },

    #[error("orbit chain loops back on '{node}'")]
    CyclicStructure { node: String },

    #[error("unknown object: '{id}'")]
    UnknownObject { id: String },

    #[error("'{from}' and '{to}' do not share a center of mass")]
    NoCommonAncestor { from: String, to: String },
}
