use mbset_types::{Field, RecordKind};
use thiserror::Error;

/// Errors that can occur with finding the config directory.
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Unable to find the config directory for mbset.")]
    Config,
}

/// Which of the two inputs of a set operation an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

/// Reasons two lists cannot be combined by a set operation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConformityError {
    #[error("The {side} list mixes records of different kinds.")]
    NotHomogeneous { side: Side },
    #[error("Cannot combine a list of {left} records with a list of {right} records.")]
    KindMismatch { left: RecordKind, right: RecordKind },
}

/// Errors that can occur with the set operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationError {
    #[error("`{field}` is not an identifying field of {kind} records (expected one of: {})", expected_fields(.kind))]
    InvalidField { field: Field, kind: RecordKind },
    #[error("Type conformity error: {0}")]
    TypeConformity(#[from] ConformityError),
}

fn expected_fields(kind: &RecordKind) -> String {
    kind.fields()
        .iter()
        .map(|field| format!("`{field}`"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors that can occur when looking up an area by name.
#[cfg(feature = "area_lookup")]
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Unable to build the lookup client: {0}")]
    Client(reqwest::Error),
    #[error("Cannot lookup area name: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Cannot lookup area name, server responded with {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("Cannot lookup area name, invalid JSON returned: {0}")]
    MalformedBody(#[from] serde_json::Error),
    #[error("Cannot find area `{area}`. Must be spelled exactly as in MusicBrainz.")]
    NotFound { area: String },
}
