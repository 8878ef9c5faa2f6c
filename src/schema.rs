use crate::error::MechanismError;
use crate::mechanism::ReactionType;
use crate::version::Version;

/// Document key vocabulary, shared by the validators and the serializer.
pub mod keys {
    // Shared, but also the mechanism root
    pub const VERSION: &str = "version";
    pub const NAME: &str = "name";
    pub const SPECIES: &str = "species";
    pub const PHASES: &str = "phases";
    pub const REACTIONS: &str = "reactions";

    // Species
    pub const HLC_298: &str = "HLC(298K) [mol m-3 Pa-1]";
    pub const HLC_EXPONENTIAL_FACTOR: &str = "HLC exponential factor [K]";
    pub const DIFFUSION_COEFFICIENT: &str = "diffusion coefficient [m2 s-1]";
    pub const N_STAR: &str = "N star";
    pub const MOLECULAR_WEIGHT: &str = "molecular weight [kg mol-1]";
    pub const DENSITY: &str = "density [kg m-3]";
    pub const TRACER_TYPE: &str = "tracer type";

    // Reactions
    pub const TYPE: &str = "type";
    pub const REACTANTS: &str = "reactants";
    pub const PRODUCTS: &str = "products";
    pub const GAS_PHASE: &str = "gas phase";
    pub const AEROSOL_PHASE: &str = "aerosol phase";
    pub const AEROSOL_PHASE_WATER: &str = "aerosol-phase water";
    pub const GAS_PHASE_SPECIES: &str = "gas-phase species";
    pub const AEROSOL_PHASE_SPECIES: &str = "aerosol-phase species";
    pub const GAS_PHASE_PRODUCTS: &str = "gas-phase products";
    pub const NITRATE_PRODUCTS: &str = "nitrate products";
    pub const ALKOXY_PRODUCTS: &str = "alkoxy products";

    // Reactants and products
    pub const SPECIES_NAME: &str = "species name";
    pub const COEFFICIENT: &str = "coefficient";

    // Rate parameters
    pub const A: &str = "A";
    pub const B: &str = "B";
    pub const C: &str = "C";
    pub const D: &str = "D";
    pub const E: &str = "E";
    pub const EA: &str = "Ea";
    pub const K0_A: &str = "k0_A";
    pub const K0_B: &str = "k0_B";
    pub const K0_C: &str = "k0_C";
    pub const KINF_A: &str = "kinf_A";
    pub const KINF_B: &str = "kinf_B";
    pub const KINF_C: &str = "kinf_C";
    pub const FC: &str = "Fc";
    pub const N: &str = "N";
    pub const X: &str = "X";
    pub const Y: &str = "Y";
    pub const A0: &str = "a0";
    pub const N_HEAVY: &str = "n";
    pub const SCALING_FACTOR: &str = "scaling factor";
    pub const REACTION_PROBABILITY: &str = "reaction probability";
    pub const K_REVERSE: &str = "k_reverse";
}

/// The recognized key sets for one kind of document object. Keys outside both
/// sets are carried through to the owning entity's `unknown_properties` map.
#[derive(Debug, Clone, Copy)]
pub struct FieldSchema {
    pub required: &'static [&'static str],
    pub optional: &'static [&'static str],
}

impl FieldSchema {
    pub fn recognizes(&self, key: &str) -> bool {
        self.required.contains(&key) || self.optional.contains(&key)
    }
}

/// The validation rules for one schema generation, selected by major version.
///
/// The field vocabulary and mutual-exclusion rules for reaction variants have
/// shifted between document generations, so the tables live behind the version
/// marker rather than inside the validators.
#[derive(Debug)]
pub struct SchemaRuleSet {
    pub major: u32,
    pub mechanism: FieldSchema,
    pub species: FieldSchema,
    pub phase: FieldSchema,
    pub component: FieldSchema,
    reactions: &'static [(ReactionType, FieldSchema)],
}

impl SchemaRuleSet {
    /// Selects the rule set matching a document's declared version.
    pub fn for_version(version: &Version) -> Result<&'static SchemaRuleSet, MechanismError> {
        match version.major {
            1 => Ok(&V1_RULES),
            _ => Err(MechanismError::UnsupportedVersion { version: *version }),
        }
    }

    pub fn reaction(&self, kind: ReactionType) -> &FieldSchema {
        self.reactions
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, schema)| schema)
            .expect("every reaction kind has a schema entry")
    }
}

static V1_RULES: SchemaRuleSet = SchemaRuleSet {
    major: 1,
    mechanism: FieldSchema {
        required: &[keys::SPECIES, keys::PHASES, keys::REACTIONS],
        optional: &[keys::VERSION, keys::NAME],
    },
    species: FieldSchema {
        required: &[keys::NAME],
        optional: &[
            keys::HLC_298,
            keys::HLC_EXPONENTIAL_FACTOR,
            keys::DIFFUSION_COEFFICIENT,
            keys::N_STAR,
            keys::MOLECULAR_WEIGHT,
            keys::DENSITY,
            keys::TRACER_TYPE,
        ],
    },
    phase: FieldSchema {
        required: &[keys::NAME, keys::SPECIES],
        optional: &[],
    },
    component: FieldSchema {
        required: &[keys::SPECIES_NAME],
        optional: &[keys::COEFFICIENT],
    },
    reactions: &[
        (
            ReactionType::Arrhenius,
            FieldSchema {
                required: &[keys::TYPE, keys::GAS_PHASE, keys::REACTANTS, keys::PRODUCTS],
                optional: &[
                    keys::A,
                    keys::B,
                    keys::C,
                    keys::D,
                    keys::E,
                    keys::EA,
                    keys::NAME,
                ],
            },
        ),
        (
            ReactionType::CondensedPhaseArrhenius,
            FieldSchema {
                required: &[
                    keys::TYPE,
                    keys::AEROSOL_PHASE,
                    keys::AEROSOL_PHASE_WATER,
                    keys::REACTANTS,
                    keys::PRODUCTS,
                ],
                optional: &[
                    keys::A,
                    keys::B,
                    keys::C,
                    keys::D,
                    keys::E,
                    keys::EA,
                    keys::NAME,
                ],
            },
        ),
        (
            ReactionType::Troe,
            FieldSchema {
                required: &[keys::TYPE, keys::GAS_PHASE, keys::REACTANTS, keys::PRODUCTS],
                optional: &[
                    keys::K0_A,
                    keys::K0_B,
                    keys::K0_C,
                    keys::KINF_A,
                    keys::KINF_B,
                    keys::KINF_C,
                    keys::FC,
                    keys::N,
                    keys::NAME,
                ],
            },
        ),
        (
            ReactionType::Branched,
            FieldSchema {
                required: &[
                    keys::TYPE,
                    keys::GAS_PHASE,
                    keys::REACTANTS,
                    keys::NITRATE_PRODUCTS,
                    keys::ALKOXY_PRODUCTS,
                    keys::X,
                    keys::Y,
                    keys::A0,
                    keys::N_HEAVY,
                ],
                optional: &[keys::NAME],
            },
        ),
        (
            ReactionType::Tunneling,
            FieldSchema {
                required: &[keys::TYPE, keys::GAS_PHASE, keys::REACTANTS, keys::PRODUCTS],
                optional: &[keys::A, keys::B, keys::C, keys::NAME],
            },
        ),
        (
            ReactionType::Surface,
            FieldSchema {
                required: &[
                    keys::TYPE,
                    keys::GAS_PHASE,
                    keys::AEROSOL_PHASE,
                    keys::GAS_PHASE_SPECIES,
                    keys::GAS_PHASE_PRODUCTS,
                ],
                optional: &[keys::REACTION_PROBABILITY, keys::NAME],
            },
        ),
        (
            ReactionType::Photolysis,
            FieldSchema {
                required: &[keys::TYPE, keys::GAS_PHASE, keys::REACTANTS, keys::PRODUCTS],
                optional: &[keys::SCALING_FACTOR, keys::NAME],
            },
        ),
        (
            ReactionType::CondensedPhasePhotolysis,
            FieldSchema {
                required: &[
                    keys::TYPE,
                    keys::AEROSOL_PHASE,
                    keys::AEROSOL_PHASE_WATER,
                    keys::REACTANTS,
                    keys::PRODUCTS,
                ],
                optional: &[keys::SCALING_FACTOR, keys::NAME],
            },
        ),
        (
            ReactionType::Emission,
            FieldSchema {
                required: &[keys::TYPE, keys::GAS_PHASE, keys::PRODUCTS],
                optional: &[keys::SCALING_FACTOR, keys::NAME],
            },
        ),
        (
            ReactionType::FirstOrderLoss,
            FieldSchema {
                required: &[keys::TYPE, keys::GAS_PHASE, keys::REACTANTS],
                optional: &[keys::SCALING_FACTOR, keys::NAME],
            },
        ),
        (
            ReactionType::AqueousEquilibrium,
            FieldSchema {
                required: &[
                    keys::TYPE,
                    keys::AEROSOL_PHASE,
                    keys::AEROSOL_PHASE_WATER,
                    keys::REACTANTS,
                    keys::PRODUCTS,
                    keys::K_REVERSE,
                ],
                optional: &[keys::A, keys::C, keys::NAME],
            },
        ),
        (
            ReactionType::WetDeposition,
            FieldSchema {
                required: &[keys::TYPE, keys::AEROSOL_PHASE],
                optional: &[keys::SCALING_FACTOR, keys::NAME],
            },
        ),
        (
            ReactionType::HenrysLaw,
            FieldSchema {
                required: &[
                    keys::TYPE,
                    keys::GAS_PHASE,
                    keys::GAS_PHASE_SPECIES,
                    keys::AEROSOL_PHASE,
                    keys::AEROSOL_PHASE_SPECIES,
                    keys::AEROSOL_PHASE_WATER,
                ],
                optional: &[keys::NAME],
            },
        ),
        (
            ReactionType::SimpolPhaseTransfer,
            FieldSchema {
                required: &[
                    keys::TYPE,
                    keys::GAS_PHASE,
                    keys::GAS_PHASE_SPECIES,
                    keys::AEROSOL_PHASE,
                    keys::AEROSOL_PHASE_SPECIES,
                ],
                optional: &[keys::B, keys::NAME],
            },
        ),
        (
            ReactionType::UserDefined,
            FieldSchema {
                required: &[keys::TYPE, keys::GAS_PHASE, keys::REACTANTS, keys::PRODUCTS],
                optional: &[keys::SCALING_FACTOR, keys::NAME],
            },
        ),
    ],
};
