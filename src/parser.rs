use crate::constants::BOLTZMANN;
use crate::error::{MechanismError, SchemaError};
use crate::mechanism::{
    AqueousEquilibrium, Arrhenius, Branched, CondensedPhaseArrhenius, CondensedPhasePhotolysis,
    Emission, FirstOrderLoss, HenrysLaw, Mechanism, Phase, Photolysis, PropertyMap, Reaction,
    ReactionComponent, ReactionType, Reactions, SimpolPhaseTransfer, Species, Surface, TracerType,
    Troe, Tunneling, UserDefined, WetDeposition,
};
use crate::registry::EntityRegistry;
use crate::schema::{keys, FieldSchema, SchemaRuleSet};
use crate::value::Value;
use crate::version::Version;

const ROOT: &str = "the document root";

/// Validates a decoded document tree into a `Mechanism`.
///
/// The species and phase sections are scanned first so that every reaction
/// can resolve its references against the complete namespace. Validation is
/// fail-fast: the first structural or referential problem aborts the parse,
/// and no partially-validated reaction ever reaches the returned mechanism.
pub(crate) fn parse_document(root: &Value) -> Result<Mechanism, MechanismError> {
    expect_object(root, ROOT)?;

    let version = resolve_version(root)?;
    let rules = SchemaRuleSet::for_version(&version)?;
    check_required(root, &rules.mechanism, ROOT)?;

    let name = optional_str(root, keys::NAME, ROOT)?.unwrap_or_default();
    let species = parse_species(require(root, keys::SPECIES, ROOT)?, rules)?;
    let phases = parse_phases(require(root, keys::PHASES, ROOT)?, rules)?;
    let registry = EntityRegistry::build(&species, &phases)?;
    let reactions = parse_reactions(require(root, keys::REACTIONS, ROOT)?, rules, &registry)?;

    Ok(Mechanism {
        name,
        species,
        phases,
        reactions,
        version,
        unknown_properties: collect_unknown(root, &rules.mechanism),
    })
}

/// Reads the root version marker. A missing marker means the earliest
/// supported version, consistent with legacy document forms.
fn resolve_version(root: &Value) -> Result<Version, SchemaError> {
    match root.get(keys::VERSION) {
        None => Ok(Version::EARLIEST_SUPPORTED),
        Some(Value::String(marker)) => Version::parse(marker),
        Some(node @ Value::Object(_)) => {
            let major = match node.get("major") {
                Some(value) => version_component(value)?,
                None => {
                    return Err(SchemaError::InvalidVersion {
                        marker: "an object without a 'major' field".to_string(),
                    })
                }
            };
            let minor = node.get("minor").map(version_component).transpose()?.unwrap_or(0);
            let patch = node.get("patch").map(version_component).transpose()?.unwrap_or(0);
            Ok(Version::new(major, minor, patch))
        }
        Some(other) => Err(SchemaError::InvalidVersion {
            marker: other.kind().to_string(),
        }),
    }
}

fn version_component(value: &Value) -> Result<u32, SchemaError> {
    match value.as_f64() {
        Some(n) if n >= 0.0 && n.fract() == 0.0 && n <= u32::MAX as f64 => Ok(n as u32),
        _ => Err(SchemaError::InvalidVersion {
            marker: value.kind().to_string(),
        }),
    }
}

fn parse_species(section: &Value, rules: &SchemaRuleSet) -> Result<Vec<Species>, MechanismError> {
    let entries = expect_array(section, "the 'species' section")?;
    let mut all_species = Vec::with_capacity(entries.len());

    for (index, node) in entries.iter().enumerate() {
        let slot = format!("species[{index}]");
        expect_object(node, &slot)?;
        check_required(node, &rules.species, &slot)?;

        let name = required_str(node, keys::NAME, &slot)?.to_string();
        let location = format!("species '{name}'");
        all_species.push(Species {
            henrys_law_constant_298: optional_f64(node, keys::HLC_298, &location)?,
            henrys_law_constant_exponential_factor: optional_f64(
                node,
                keys::HLC_EXPONENTIAL_FACTOR,
                &location,
            )?,
            diffusion_coefficient: optional_f64(node, keys::DIFFUSION_COEFFICIENT, &location)?,
            n_star: optional_f64(node, keys::N_STAR, &location)?,
            molecular_weight: optional_f64(node, keys::MOLECULAR_WEIGHT, &location)?,
            density: optional_f64(node, keys::DENSITY, &location)?,
            tracer_type: parse_tracer_type(node, &location)?,
            unknown_properties: collect_unknown(node, &rules.species),
            name,
        });
    }

    Ok(all_species)
}

fn parse_tracer_type(node: &Value, location: &str) -> Result<Option<TracerType>, SchemaError> {
    match node.get(keys::TRACER_TYPE) {
        None => Ok(None),
        Some(value) => {
            let tag = expect_str(value, &field_location(keys::TRACER_TYPE, location))?;
            TracerType::from_tag(tag)
                .map(Some)
                .ok_or_else(|| SchemaError::InvalidValue {
                    field: keys::TRACER_TYPE,
                    allowed: TracerType::ALLOWED,
                    found: tag.to_string(),
                    location: location.to_string(),
                })
        }
    }
}

fn parse_phases(section: &Value, rules: &SchemaRuleSet) -> Result<Vec<Phase>, MechanismError> {
    let entries = expect_array(section, "the 'phases' section")?;
    let mut all_phases = Vec::with_capacity(entries.len());

    for (index, node) in entries.iter().enumerate() {
        let slot = format!("phases[{index}]");
        expect_object(node, &slot)?;
        check_required(node, &rules.phase, &slot)?;

        let name = required_str(node, keys::NAME, &slot)?.to_string();
        let location = format!("phase '{name}'");
        let members = expect_array(
            require(node, keys::SPECIES, &location)?,
            &field_location(keys::SPECIES, &location),
        )?;
        let mut species = Vec::with_capacity(members.len());
        for (member_index, member) in members.iter().enumerate() {
            species.push(
                expect_str(member, &format!("species[{member_index}] of {location}"))?.to_string(),
            );
        }

        all_phases.push(Phase {
            species,
            unknown_properties: collect_unknown(node, &rules.phase),
            name,
        });
    }

    Ok(all_phases)
}

fn parse_reactions(
    section: &Value,
    rules: &SchemaRuleSet,
    registry: &EntityRegistry,
) -> Result<Reactions, MechanismError> {
    let entries = expect_array(section, "the 'reactions' section")?;
    let mut reactions = Reactions::default();

    for (index, node) in entries.iter().enumerate() {
        let slot = format!("reactions[{index}]");
        expect_object(node, &slot)?;

        let tag = required_str(node, keys::TYPE, &slot)?;
        let kind = ReactionType::from_tag(tag).ok_or_else(|| SchemaError::UnknownReactionType {
            tag: tag.to_string(),
            location: slot.clone(),
        })?;
        let location = format!("reactions[{index}] ({kind})");
        let schema = rules.reaction(kind);
        check_required(node, schema, &location)?;

        let reaction = match kind {
            ReactionType::Arrhenius => {
                Reaction::Arrhenius(parse_arrhenius(node, rules, schema, &location)?)
            }
            ReactionType::CondensedPhaseArrhenius => Reaction::CondensedPhaseArrhenius(
                parse_condensed_phase_arrhenius(node, rules, schema, &location)?,
            ),
            ReactionType::Troe => Reaction::Troe(parse_troe(node, rules, schema, &location)?),
            ReactionType::Branched => {
                Reaction::Branched(parse_branched(node, rules, schema, &location)?)
            }
            ReactionType::Tunneling => {
                Reaction::Tunneling(parse_tunneling(node, rules, schema, &location)?)
            }
            ReactionType::Surface => {
                Reaction::Surface(parse_surface(node, rules, schema, &location)?)
            }
            ReactionType::Photolysis => {
                Reaction::Photolysis(parse_photolysis(node, rules, schema, &location)?)
            }
            ReactionType::CondensedPhasePhotolysis => Reaction::CondensedPhasePhotolysis(
                parse_condensed_phase_photolysis(node, rules, schema, &location)?,
            ),
            ReactionType::Emission => {
                Reaction::Emission(parse_emission(node, rules, schema, &location)?)
            }
            ReactionType::FirstOrderLoss => {
                Reaction::FirstOrderLoss(parse_first_order_loss(node, rules, schema, &location)?)
            }
            ReactionType::AqueousEquilibrium => Reaction::AqueousEquilibrium(
                parse_aqueous_equilibrium(node, rules, schema, &location)?,
            ),
            ReactionType::WetDeposition => {
                Reaction::WetDeposition(parse_wet_deposition(node, schema, &location)?)
            }
            ReactionType::HenrysLaw => {
                Reaction::HenrysLaw(parse_henrys_law(node, rules, schema, &location)?)
            }
            ReactionType::SimpolPhaseTransfer => Reaction::SimpolPhaseTransfer(
                parse_simpol_phase_transfer(node, rules, schema, &location)?,
            ),
            ReactionType::UserDefined => {
                Reaction::UserDefined(parse_user_defined(node, rules, schema, &location)?)
            }
        };

        registry.check(&reaction.reference_set(), &location)?;
        reactions.push(reaction);
    }

    Ok(reactions)
}

// ---------------------------------------------------------------------------
// Variant validators. Each receives a node whose required keys are already
// confirmed present; anything not in the variant's schema lands verbatim in
// the unknown-properties map.
// ---------------------------------------------------------------------------

struct RateTerms {
    a: f64,
    b: f64,
    c: Option<f64>,
    d: f64,
    e: f64,
}

/// The shared Arrhenius parameter block. `C` and `Ea` are mutually exclusive;
/// an `Ea` field is folded into `C = -Ea / k_B` and not retained.
fn parse_rate_terms(node: &Value, location: &str) -> Result<RateTerms, MechanismError> {
    let c = optional_f64(node, keys::C, location)?;
    let ea = optional_f64(node, keys::EA, location)?;
    if c.is_some() && ea.is_some() {
        return Err(SchemaError::ConflictingFields {
            first: keys::C,
            second: keys::EA,
            location: location.to_string(),
        }
        .into());
    }

    Ok(RateTerms {
        a: optional_f64(node, keys::A, location)?.unwrap_or(1.0),
        b: optional_f64(node, keys::B, location)?.unwrap_or(0.0),
        c: ea.map(|ea| -ea / BOLTZMANN).or(c),
        d: optional_f64(node, keys::D, location)?.unwrap_or(300.0),
        e: optional_f64(node, keys::E, location)?.unwrap_or(0.0),
    })
}

fn parse_arrhenius(
    node: &Value,
    rules: &SchemaRuleSet,
    schema: &FieldSchema,
    location: &str,
) -> Result<Arrhenius, MechanismError> {
    let rate = parse_rate_terms(node, location)?;
    Ok(Arrhenius {
        a: rate.a,
        b: rate.b,
        c: rate.c,
        d: rate.d,
        e: rate.e,
        reactants: parse_component_list(node, keys::REACTANTS, rules, location)?,
        products: parse_component_list(node, keys::PRODUCTS, rules, location)?,
        name: optional_str(node, keys::NAME, location)?,
        gas_phase: required_str(node, keys::GAS_PHASE, location)?.to_string(),
        unknown_properties: collect_unknown(node, schema),
    })
}

fn parse_condensed_phase_arrhenius(
    node: &Value,
    rules: &SchemaRuleSet,
    schema: &FieldSchema,
    location: &str,
) -> Result<CondensedPhaseArrhenius, MechanismError> {
    let rate = parse_rate_terms(node, location)?;
    Ok(CondensedPhaseArrhenius {
        a: rate.a,
        b: rate.b,
        c: rate.c,
        d: rate.d,
        e: rate.e,
        reactants: parse_component_list(node, keys::REACTANTS, rules, location)?,
        products: parse_component_list(node, keys::PRODUCTS, rules, location)?,
        name: optional_str(node, keys::NAME, location)?,
        aerosol_phase: required_str(node, keys::AEROSOL_PHASE, location)?.to_string(),
        aerosol_phase_water: required_str(node, keys::AEROSOL_PHASE_WATER, location)?.to_string(),
        unknown_properties: collect_unknown(node, schema),
    })
}

fn parse_troe(
    node: &Value,
    rules: &SchemaRuleSet,
    schema: &FieldSchema,
    location: &str,
) -> Result<Troe, MechanismError> {
    Ok(Troe {
        k0_a: optional_f64(node, keys::K0_A, location)?.unwrap_or(1.0),
        k0_b: optional_f64(node, keys::K0_B, location)?.unwrap_or(0.0),
        k0_c: optional_f64(node, keys::K0_C, location)?.unwrap_or(0.0),
        kinf_a: optional_f64(node, keys::KINF_A, location)?.unwrap_or(1.0),
        kinf_b: optional_f64(node, keys::KINF_B, location)?.unwrap_or(0.0),
        kinf_c: optional_f64(node, keys::KINF_C, location)?.unwrap_or(0.0),
        fc: optional_f64(node, keys::FC, location)?.unwrap_or(0.6),
        n: optional_f64(node, keys::N, location)?.unwrap_or(1.0),
        reactants: parse_component_list(node, keys::REACTANTS, rules, location)?,
        products: parse_component_list(node, keys::PRODUCTS, rules, location)?,
        name: optional_str(node, keys::NAME, location)?,
        gas_phase: required_str(node, keys::GAS_PHASE, location)?.to_string(),
        unknown_properties: collect_unknown(node, schema),
    })
}

fn parse_branched(
    node: &Value,
    rules: &SchemaRuleSet,
    schema: &FieldSchema,
    location: &str,
) -> Result<Branched, MechanismError> {
    Ok(Branched {
        x: required_f64(node, keys::X, location)?,
        y: required_f64(node, keys::Y, location)?,
        a0: required_f64(node, keys::A0, location)?,
        n: required_i64(node, keys::N_HEAVY, location)?,
        reactants: parse_component_list(node, keys::REACTANTS, rules, location)?,
        nitrate_products: parse_component_list(node, keys::NITRATE_PRODUCTS, rules, location)?,
        alkoxy_products: parse_component_list(node, keys::ALKOXY_PRODUCTS, rules, location)?,
        name: optional_str(node, keys::NAME, location)?,
        gas_phase: required_str(node, keys::GAS_PHASE, location)?.to_string(),
        unknown_properties: collect_unknown(node, schema),
    })
}

fn parse_tunneling(
    node: &Value,
    rules: &SchemaRuleSet,
    schema: &FieldSchema,
    location: &str,
) -> Result<Tunneling, MechanismError> {
    Ok(Tunneling {
        a: optional_f64(node, keys::A, location)?.unwrap_or(1.0),
        b: optional_f64(node, keys::B, location)?.unwrap_or(0.0),
        c: optional_f64(node, keys::C, location)?.unwrap_or(0.0),
        reactants: parse_component_list(node, keys::REACTANTS, rules, location)?,
        products: parse_component_list(node, keys::PRODUCTS, rules, location)?,
        name: optional_str(node, keys::NAME, location)?,
        gas_phase: required_str(node, keys::GAS_PHASE, location)?.to_string(),
        unknown_properties: collect_unknown(node, schema),
    })
}

fn parse_surface(
    node: &Value,
    rules: &SchemaRuleSet,
    schema: &FieldSchema,
    location: &str,
) -> Result<Surface, MechanismError> {
    let gas_phase_species = parse_component(
        require(node, keys::GAS_PHASE_SPECIES, location)?,
        rules,
        &field_location(keys::GAS_PHASE_SPECIES, location),
    )?;
    Ok(Surface {
        reaction_probability: optional_f64(node, keys::REACTION_PROBABILITY, location)?
            .unwrap_or(1.0),
        gas_phase_species,
        gas_phase_products: parse_component_list(node, keys::GAS_PHASE_PRODUCTS, rules, location)?,
        name: optional_str(node, keys::NAME, location)?,
        gas_phase: required_str(node, keys::GAS_PHASE, location)?.to_string(),
        aerosol_phase: required_str(node, keys::AEROSOL_PHASE, location)?.to_string(),
        unknown_properties: collect_unknown(node, schema),
    })
}

fn parse_photolysis(
    node: &Value,
    rules: &SchemaRuleSet,
    schema: &FieldSchema,
    location: &str,
) -> Result<Photolysis, MechanismError> {
    let reactants = parse_component_list(node, keys::REACTANTS, rules, location)?;
    limit_to_one(&reactants, keys::REACTANTS, location)?;
    Ok(Photolysis {
        scaling_factor: optional_f64(node, keys::SCALING_FACTOR, location)?.unwrap_or(1.0),
        reactants,
        products: parse_component_list(node, keys::PRODUCTS, rules, location)?,
        name: optional_str(node, keys::NAME, location)?,
        gas_phase: required_str(node, keys::GAS_PHASE, location)?.to_string(),
        unknown_properties: collect_unknown(node, schema),
    })
}

fn parse_condensed_phase_photolysis(
    node: &Value,
    rules: &SchemaRuleSet,
    schema: &FieldSchema,
    location: &str,
) -> Result<CondensedPhasePhotolysis, MechanismError> {
    let reactants = parse_component_list(node, keys::REACTANTS, rules, location)?;
    limit_to_one(&reactants, keys::REACTANTS, location)?;
    Ok(CondensedPhasePhotolysis {
        scaling_factor: optional_f64(node, keys::SCALING_FACTOR, location)?.unwrap_or(1.0),
        reactants,
        products: parse_component_list(node, keys::PRODUCTS, rules, location)?,
        name: optional_str(node, keys::NAME, location)?,
        aerosol_phase: required_str(node, keys::AEROSOL_PHASE, location)?.to_string(),
        aerosol_phase_water: required_str(node, keys::AEROSOL_PHASE_WATER, location)?.to_string(),
        unknown_properties: collect_unknown(node, schema),
    })
}

fn parse_emission(
    node: &Value,
    rules: &SchemaRuleSet,
    schema: &FieldSchema,
    location: &str,
) -> Result<Emission, MechanismError> {
    Ok(Emission {
        scaling_factor: optional_f64(node, keys::SCALING_FACTOR, location)?.unwrap_or(1.0),
        products: parse_component_list(node, keys::PRODUCTS, rules, location)?,
        name: optional_str(node, keys::NAME, location)?,
        gas_phase: required_str(node, keys::GAS_PHASE, location)?.to_string(),
        unknown_properties: collect_unknown(node, schema),
    })
}

fn parse_first_order_loss(
    node: &Value,
    rules: &SchemaRuleSet,
    schema: &FieldSchema,
    location: &str,
) -> Result<FirstOrderLoss, MechanismError> {
    let reactants = parse_component_list(node, keys::REACTANTS, rules, location)?;
    limit_to_one(&reactants, keys::REACTANTS, location)?;
    Ok(FirstOrderLoss {
        scaling_factor: optional_f64(node, keys::SCALING_FACTOR, location)?.unwrap_or(1.0),
        reactants,
        name: optional_str(node, keys::NAME, location)?,
        gas_phase: required_str(node, keys::GAS_PHASE, location)?.to_string(),
        unknown_properties: collect_unknown(node, schema),
    })
}

fn parse_aqueous_equilibrium(
    node: &Value,
    rules: &SchemaRuleSet,
    schema: &FieldSchema,
    location: &str,
) -> Result<AqueousEquilibrium, MechanismError> {
    Ok(AqueousEquilibrium {
        name: optional_str(node, keys::NAME, location)?,
        aerosol_phase: required_str(node, keys::AEROSOL_PHASE, location)?.to_string(),
        aerosol_phase_water: required_str(node, keys::AEROSOL_PHASE_WATER, location)?.to_string(),
        reactants: parse_component_list(node, keys::REACTANTS, rules, location)?,
        products: parse_component_list(node, keys::PRODUCTS, rules, location)?,
        a: optional_f64(node, keys::A, location)?.unwrap_or(1.0),
        c: optional_f64(node, keys::C, location)?.unwrap_or(0.0),
        k_reverse: required_f64(node, keys::K_REVERSE, location)?,
        unknown_properties: collect_unknown(node, schema),
    })
}

fn parse_wet_deposition(
    node: &Value,
    schema: &FieldSchema,
    location: &str,
) -> Result<WetDeposition, MechanismError> {
    Ok(WetDeposition {
        scaling_factor: optional_f64(node, keys::SCALING_FACTOR, location)?.unwrap_or(1.0),
        name: optional_str(node, keys::NAME, location)?,
        aerosol_phase: required_str(node, keys::AEROSOL_PHASE, location)?.to_string(),
        unknown_properties: collect_unknown(node, schema),
    })
}

fn parse_henrys_law(
    node: &Value,
    rules: &SchemaRuleSet,
    schema: &FieldSchema,
    location: &str,
) -> Result<HenrysLaw, MechanismError> {
    Ok(HenrysLaw {
        name: optional_str(node, keys::NAME, location)?,
        gas_phase: required_str(node, keys::GAS_PHASE, location)?.to_string(),
        gas_phase_species: parse_component(
            require(node, keys::GAS_PHASE_SPECIES, location)?,
            rules,
            &field_location(keys::GAS_PHASE_SPECIES, location),
        )?,
        aerosol_phase: required_str(node, keys::AEROSOL_PHASE, location)?.to_string(),
        aerosol_phase_species: parse_component(
            require(node, keys::AEROSOL_PHASE_SPECIES, location)?,
            rules,
            &field_location(keys::AEROSOL_PHASE_SPECIES, location),
        )?,
        aerosol_phase_water: required_str(node, keys::AEROSOL_PHASE_WATER, location)?.to_string(),
        unknown_properties: collect_unknown(node, schema),
    })
}

fn parse_simpol_phase_transfer(
    node: &Value,
    rules: &SchemaRuleSet,
    schema: &FieldSchema,
    location: &str,
) -> Result<SimpolPhaseTransfer, MechanismError> {
    let b = match node.get(keys::B) {
        None => [0.0; 4],
        Some(value) => {
            let entries = expect_array(value, &field_location(keys::B, location))?;
            if entries.len() != 4 {
                return Err(SchemaError::WrongLength {
                    field: keys::B,
                    expected: 4,
                    found: entries.len(),
                    location: location.to_string(),
                }
                .into());
            }
            let mut b = [0.0; 4];
            for (index, entry) in entries.iter().enumerate() {
                b[index] = expect_f64(entry, &format!("B[{index}] of {location}"))?;
            }
            b
        }
    };

    Ok(SimpolPhaseTransfer {
        name: optional_str(node, keys::NAME, location)?,
        gas_phase: required_str(node, keys::GAS_PHASE, location)?.to_string(),
        gas_phase_species: parse_component(
            require(node, keys::GAS_PHASE_SPECIES, location)?,
            rules,
            &field_location(keys::GAS_PHASE_SPECIES, location),
        )?,
        aerosol_phase: required_str(node, keys::AEROSOL_PHASE, location)?.to_string(),
        aerosol_phase_species: parse_component(
            require(node, keys::AEROSOL_PHASE_SPECIES, location)?,
            rules,
            &field_location(keys::AEROSOL_PHASE_SPECIES, location),
        )?,
        b,
        unknown_properties: collect_unknown(node, schema),
    })
}

fn parse_user_defined(
    node: &Value,
    rules: &SchemaRuleSet,
    schema: &FieldSchema,
    location: &str,
) -> Result<UserDefined, MechanismError> {
    Ok(UserDefined {
        scaling_factor: optional_f64(node, keys::SCALING_FACTOR, location)?.unwrap_or(1.0),
        reactants: parse_component_list(node, keys::REACTANTS, rules, location)?,
        products: parse_component_list(node, keys::PRODUCTS, rules, location)?,
        name: optional_str(node, keys::NAME, location)?,
        gas_phase: required_str(node, keys::GAS_PHASE, location)?.to_string(),
        unknown_properties: collect_unknown(node, schema),
    })
}

// ---------------------------------------------------------------------------
// Reaction components
// ---------------------------------------------------------------------------

/// A component is either a bare species name (coefficient 1.0) or a
/// `{ species name, coefficient }` object.
fn parse_component(
    value: &Value,
    rules: &SchemaRuleSet,
    location: &str,
) -> Result<ReactionComponent, MechanismError> {
    match value {
        Value::String(name) => Ok(ReactionComponent::new(name.clone())),
        Value::Object(_) => {
            check_required(value, &rules.component, location)?;
            Ok(ReactionComponent {
                species_name: required_str(value, keys::SPECIES_NAME, location)?.to_string(),
                coefficient: optional_f64(value, keys::COEFFICIENT, location)?.unwrap_or(1.0),
                unknown_properties: collect_unknown(value, &rules.component),
            })
        }
        other => Err(SchemaError::InvalidType {
            expected: "a species name or a component object",
            found: other.kind().to_string(),
            location: location.to_string(),
        }
        .into()),
    }
}

fn parse_component_list(
    node: &Value,
    key: &'static str,
    rules: &SchemaRuleSet,
    location: &str,
) -> Result<Vec<ReactionComponent>, MechanismError> {
    let entries = expect_array(require(node, key, location)?, &field_location(key, location))?;
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| parse_component(entry, rules, &format!("{key}[{index}] of {location}")))
        .collect()
}

fn limit_to_one(
    components: &[ReactionComponent],
    field: &'static str,
    location: &str,
) -> Result<(), SchemaError> {
    if components.len() > 1 {
        return Err(SchemaError::TooManyReactionComponents {
            field,
            location: location.to_string(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Field access helpers
// ---------------------------------------------------------------------------

fn field_location(key: &str, location: &str) -> String {
    format!("field '{key}' of {location}")
}

fn expect_object<'a>(value: &'a Value, location: &str) -> Result<&'a [(String, Value)], SchemaError> {
    value.as_object().ok_or_else(|| SchemaError::InvalidType {
        expected: "an object",
        found: value.kind().to_string(),
        location: location.to_string(),
    })
}

fn expect_array<'a>(value: &'a Value, location: &str) -> Result<&'a [Value], SchemaError> {
    value.as_array().ok_or_else(|| SchemaError::InvalidType {
        expected: "an array",
        found: value.kind().to_string(),
        location: location.to_string(),
    })
}

fn expect_str<'a>(value: &'a Value, location: &str) -> Result<&'a str, SchemaError> {
    value.as_str().ok_or_else(|| SchemaError::InvalidType {
        expected: "a string",
        found: value.kind().to_string(),
        location: location.to_string(),
    })
}

fn expect_f64(value: &Value, location: &str) -> Result<f64, SchemaError> {
    value.as_f64().ok_or_else(|| SchemaError::InvalidType {
        expected: "a number",
        found: value.kind().to_string(),
        location: location.to_string(),
    })
}

/// Fails with `MissingField` for every required key absent from the node.
fn check_required(node: &Value, schema: &FieldSchema, location: &str) -> Result<(), SchemaError> {
    for key in schema.required {
        if node.get(key).is_none() {
            return Err(SchemaError::MissingField {
                field: (*key).to_string(),
                location: location.to_string(),
            });
        }
    }
    Ok(())
}

fn require<'a>(node: &'a Value, key: &str, location: &str) -> Result<&'a Value, SchemaError> {
    node.get(key).ok_or_else(|| SchemaError::MissingField {
        field: key.to_string(),
        location: location.to_string(),
    })
}

fn required_str<'a>(node: &'a Value, key: &str, location: &str) -> Result<&'a str, SchemaError> {
    expect_str(require(node, key, location)?, &field_location(key, location))
}

fn required_f64(node: &Value, key: &str, location: &str) -> Result<f64, SchemaError> {
    expect_f64(require(node, key, location)?, &field_location(key, location))
}

fn required_i64(node: &Value, key: &str, location: &str) -> Result<i64, SchemaError> {
    let value = require(node, key, location)?;
    let field = field_location(key, location);
    match value.as_f64() {
        Some(n) if n.fract() == 0.0 => Ok(n as i64),
        Some(_) => Err(SchemaError::InvalidType {
            expected: "an integer",
            found: "a fractional number".to_string(),
            location: field,
        }),
        None => Err(SchemaError::InvalidType {
            expected: "an integer",
            found: value.kind().to_string(),
            location: field,
        }),
    }
}

fn optional_str(node: &Value, key: &str, location: &str) -> Result<Option<String>, SchemaError> {
    match node.get(key) {
        None => Ok(None),
        Some(value) => Ok(Some(
            expect_str(value, &field_location(key, location))?.to_string(),
        )),
    }
}

fn optional_f64(node: &Value, key: &str, location: &str) -> Result<Option<f64>, SchemaError> {
    match node.get(key) {
        None => Ok(None),
        Some(value) => Ok(Some(expect_f64(value, &field_location(key, location))?)),
    }
}

/// Keys outside the recognized schema are preserved verbatim so hand-authored
/// pass-through fields survive a full round trip.
fn collect_unknown(node: &Value, schema: &FieldSchema) -> PropertyMap {
    node.as_object()
        .map(|members| {
            members
                .iter()
                .filter(|(key, _)| !schema.recognizes(key))
                .cloned()
                .collect()
        })
        .unwrap_or_default()
}
