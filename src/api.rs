use crate::error::{MechanismError, SchemaError};
use crate::mechanism::Mechanism;
use crate::parser;
use crate::serializer;
use crate::value::Value;
use log::debug;
use std::fs;
use std::path::Path;

/// The supported textual encodings of a mechanism document.
///
/// Both encodings decode to the same [`Value`] tree, so a document expressed
/// in either parses to an identical [`Mechanism`]. Additional encodings only
/// need a conversion to `Value`; the validators are untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    /// Infers the encoding from a file extension. Anything that is not
    /// `.json` is treated as YAML, which also accepts JSON content.
    pub fn from_path(path: &Path) -> Format {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Format::Json,
            _ => Format::Yaml,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Format::Yaml => "YAML",
            Format::Json => "JSON",
        }
    }
}

/// Parses a mechanism configuration file.
///
/// # Errors
///
/// Returns `MechanismError::FileAccess` when the path does not exist or is
/// unreadable, and the schema/reference errors described in [`MechanismError`]
/// when the content is invalid. A mechanism is either fully valid or no
/// mechanism is returned.
pub fn parse(path: impl AsRef<Path>) -> Result<Mechanism, MechanismError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| MechanismError::FileAccess {
        path: path.display().to_string(),
        source,
    })?;
    parse_str(&content, Format::from_path(path))
}

/// Parses a mechanism from document text in the given encoding.
pub fn parse_str(content: &str, format: Format) -> Result<Mechanism, MechanismError> {
    parse_value(&decode(content, format)?)
}

/// Validates an already-decoded document tree.
pub fn parse_value(value: &Value) -> Result<Mechanism, MechanismError> {
    let mechanism = parser::parse_document(value)?;
    debug!(
        "parsed mechanism '{}' (version {}): {} species, {} phases, {} reactions",
        mechanism.name,
        mechanism.version,
        mechanism.species.len(),
        mechanism.phases.len(),
        mechanism.reactions.len()
    );
    Ok(mechanism)
}

/// Writes a mechanism to a file in the requested encoding.
pub fn serialize(
    mechanism: &Mechanism,
    path: impl AsRef<Path>,
    format: Format,
) -> Result<(), MechanismError> {
    let path = path.as_ref();
    let content = serialize_str(mechanism, format)?;
    fs::write(path, content).map_err(|source| MechanismError::FileAccess {
        path: path.display().to_string(),
        source,
    })
}

/// Renders a mechanism as document text in the requested encoding.
pub fn serialize_str(mechanism: &Mechanism, format: Format) -> Result<String, MechanismError> {
    let value = serializer::to_value(mechanism);
    let rendered = match format {
        Format::Yaml => serde_yaml::to_string(&value).map_err(|err| SchemaError::Malformed {
            format: Format::Yaml.name(),
            details: err.to_string(),
        })?,
        Format::Json => {
            serde_json::to_string_pretty(&value).map_err(|err| SchemaError::Malformed {
                format: Format::Json.name(),
                details: err.to_string(),
            })?
        }
    };
    debug!(
        "serialized mechanism '{}' as {}",
        mechanism.name,
        format.name()
    );
    Ok(rendered)
}

fn decode(content: &str, format: Format) -> Result<Value, MechanismError> {
    match format {
        Format::Yaml => serde_yaml::from_str::<serde_yaml::Value>(content)
            .map(Value::from_yaml)
            .map_err(|err| {
                SchemaError::Malformed {
                    format: Format::Yaml.name(),
                    details: err.to_string(),
                }
                .into()
            }),
        Format::Json => serde_json::from_str::<serde_json::Value>(content)
            .map(Value::from_json)
            .map_err(|err| {
                SchemaError::Malformed {
                    format: Format::Json.name(),
                    details: err.to_string(),
                }
                .into()
            }),
    }
}
