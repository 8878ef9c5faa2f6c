//! Parse, validate, and re-serialize chemical reaction mechanism
//! configurations.
//!
//! A mechanism document declares species, phases, and reactions in YAML or
//! JSON. [`parse`] validates one against its declared schema version and
//! returns an immutable [`Mechanism`]; [`serialize`] writes it back out in
//! either encoding.

pub mod api;
pub mod builder;
pub mod constants;
pub mod error;
pub mod mechanism;
pub mod registry;
pub mod schema;
pub mod value;
pub mod version;
mod parser;
mod serializer;

pub use api::{parse, parse_str, parse_value, serialize, serialize_str, Format};
pub use error::{EntityKind, MechanismError, SchemaError};
pub use mechanism::{
    AqueousEquilibrium, Arrhenius, Branched, CondensedPhaseArrhenius, CondensedPhasePhotolysis,
    Emission, FirstOrderLoss, HenrysLaw, Mechanism, Phase, Photolysis, PropertyMap, Reaction,
    ReactionComponent, ReactionType, Reactions, SimpolPhaseTransfer, Species, Surface, TracerType,
    Troe, Tunneling, UserDefined, WetDeposition,
};
pub use serializer::to_value;
pub use value::Value;
pub use version::Version;
