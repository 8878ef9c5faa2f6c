use crate::version::Version;
use miette::Diagnostic;
use std::fmt::Display;
use thiserror::Error;

/// The category of a named entity, used in reference and duplicate errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Species,
    Phase,
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Species => write!(f, "species"),
            EntityKind::Phase => write!(f, "phase"),
        }
    }
}

#[derive(Error, Debug, Diagnostic)]
pub enum MechanismError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Schema(#[from] SchemaError),

    #[error("cannot read '{path}'")]
    #[diagnostic(
        code(mechanism::file_access),
        help("Check that the path exists and points to a readable file.")
    )]
    FileAccess {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{kind} '{name}' is not defined in this mechanism (required by {context})")]
    #[diagnostic(
        code(mechanism::unresolved_reference),
        help("Every name used by a reaction or phase must be declared in the document's species or phases section.")
    )]
    UnresolvedReference {
        kind: EntityKind,
        name: String,
        context: String,
    },

    #[error("duplicate {kind} name '{name}'")]
    #[diagnostic(
        code(mechanism::duplicate_name),
        help("Species and phase names must be unique within their category.")
    )]
    DuplicateName { kind: EntityKind, name: String },

    #[error("unsupported schema version {version}")]
    #[diagnostic(
        code(mechanism::unsupported_version),
        help("This parser supports major version 1 documents.")
    )]
    UnsupportedVersion { version: Version },
}

/// Structural problems in a document: wrong types, wrong lengths, missing or
/// conflicting fields, unrecognized discriminants.
#[derive(Error, Debug, Diagnostic)]
pub enum SchemaError {
    #[error("document is not valid {format}: {details}")]
    #[diagnostic(code(schema::malformed))]
    Malformed {
        format: &'static str,
        details: String,
    },

    #[error("missing required field '{field}' in {location}")]
    #[diagnostic(code(schema::missing_field))]
    MissingField { field: String, location: String },

    #[error("'{first}' and '{second}' are mutually exclusive in {location}")]
    #[diagnostic(
        code(schema::conflicting_fields),
        help("Specify one of the two fields, not both.")
    )]
    ConflictingFields {
        first: &'static str,
        second: &'static str,
        location: String,
    },

    #[error("expected {expected} but found {found} in {location}")]
    #[diagnostic(code(schema::invalid_type))]
    InvalidType {
        expected: &'static str,
        found: String,
        location: String,
    },

    #[error("'{field}' must contain exactly {expected} entries (found {found}) in {location}")]
    #[diagnostic(code(schema::wrong_length))]
    WrongLength {
        field: &'static str,
        expected: usize,
        found: usize,
        location: String,
    },

    #[error("'{field}' must be one of {allowed} (found '{found}') in {location}")]
    #[diagnostic(code(schema::invalid_value))]
    InvalidValue {
        field: &'static str,
        allowed: &'static str,
        found: String,
        location: String,
    },

    #[error("'{field}' allows at most one entry in {location}")]
    #[diagnostic(code(schema::too_many_components))]
    TooManyReactionComponents {
        field: &'static str,
        location: String,
    },

    #[error("unrecognized reaction type '{tag}' in {location}")]
    #[diagnostic(
        code(schema::unknown_reaction_type),
        help("The 'type' field must name one of the supported rate constant forms, e.g. ARRHENIUS or TROE.")
    )]
    UnknownReactionType { tag: String, location: String },

    #[error("malformed version marker '{marker}'")]
    #[diagnostic(
        code(schema::invalid_version),
        help("The version must be a '<major>.<minor>.<patch>' string or an object with numeric fields.")
    )]
    InvalidVersion { marker: String },
}
