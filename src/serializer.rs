use crate::mechanism::{
    Mechanism, Phase, PropertyMap, Reaction, ReactionComponent, Species,
};
use crate::schema::keys;
use crate::value::Value;

/// Produces a document tree for a mechanism, the inverse of parsing.
///
/// Feeding the result back through the parser yields an equal `Mechanism`:
/// unknown properties are re-merged at the level they were found on, and
/// every numeric field is written out (including ones that matched their
/// defaults), so nothing depends on the reader applying the same defaults.
/// The one documented exception is a document authored with `Ea`, which
/// re-emits the derived `C` term instead.
pub fn to_value(mechanism: &Mechanism) -> Value {
    let mut root = Vec::new();
    push_str(&mut root, keys::VERSION, &mechanism.version.to_string());
    if !mechanism.name.is_empty() {
        push_str(&mut root, keys::NAME, &mechanism.name);
    }
    root.push((
        keys::SPECIES.to_string(),
        Value::Array(mechanism.species.iter().map(species_value).collect()),
    ));
    root.push((
        keys::PHASES.to_string(),
        Value::Array(mechanism.phases.iter().map(phase_value).collect()),
    ));
    root.push((
        keys::REACTIONS.to_string(),
        Value::Array(mechanism.reactions.iter().map(reaction_value).collect()),
    ));
    push_unknown(&mut root, &mechanism.unknown_properties);
    Value::Object(root)
}

fn species_value(species: &Species) -> Value {
    let mut members = Vec::new();
    push_str(&mut members, keys::NAME, &species.name);
    push_optional_num(&mut members, keys::HLC_298, species.henrys_law_constant_298);
    push_optional_num(
        &mut members,
        keys::HLC_EXPONENTIAL_FACTOR,
        species.henrys_law_constant_exponential_factor,
    );
    push_optional_num(
        &mut members,
        keys::DIFFUSION_COEFFICIENT,
        species.diffusion_coefficient,
    );
    push_optional_num(&mut members, keys::N_STAR, species.n_star);
    push_optional_num(&mut members, keys::MOLECULAR_WEIGHT, species.molecular_weight);
    push_optional_num(&mut members, keys::DENSITY, species.density);
    if let Some(tracer) = species.tracer_type {
        push_str(&mut members, keys::TRACER_TYPE, tracer.tag());
    }
    push_unknown(&mut members, &species.unknown_properties);
    Value::Object(members)
}

fn phase_value(phase: &Phase) -> Value {
    let mut members = Vec::new();
    push_str(&mut members, keys::NAME, &phase.name);
    members.push((
        keys::SPECIES.to_string(),
        Value::Array(
            phase
                .species
                .iter()
                .map(|name| Value::String(name.clone()))
                .collect(),
        ),
    ));
    push_unknown(&mut members, &phase.unknown_properties);
    Value::Object(members)
}

fn reaction_value(reaction: &Reaction) -> Value {
    let mut members = Vec::new();
    push_str(&mut members, keys::TYPE, reaction.reaction_type().tag());

    match reaction {
        Reaction::Arrhenius(r) => {
            push_str(&mut members, keys::GAS_PHASE, &r.gas_phase);
            push_components(&mut members, keys::REACTANTS, &r.reactants);
            push_components(&mut members, keys::PRODUCTS, &r.products);
            push_rate_terms(&mut members, r.a, r.b, r.c, r.d, r.e);
            push_optional_str(&mut members, keys::NAME, &r.name);
            push_unknown(&mut members, &r.unknown_properties);
        }
        Reaction::CondensedPhaseArrhenius(r) => {
            push_str(&mut members, keys::AEROSOL_PHASE, &r.aerosol_phase);
            push_str(&mut members, keys::AEROSOL_PHASE_WATER, &r.aerosol_phase_water);
            push_components(&mut members, keys::REACTANTS, &r.reactants);
            push_components(&mut members, keys::PRODUCTS, &r.products);
            push_rate_terms(&mut members, r.a, r.b, r.c, r.d, r.e);
            push_optional_str(&mut members, keys::NAME, &r.name);
            push_unknown(&mut members, &r.unknown_properties);
        }
        Reaction::Troe(r) => {
            push_str(&mut members, keys::GAS_PHASE, &r.gas_phase);
            push_components(&mut members, keys::REACTANTS, &r.reactants);
            push_components(&mut members, keys::PRODUCTS, &r.products);
            push_num(&mut members, keys::K0_A, r.k0_a);
            push_num(&mut members, keys::K0_B, r.k0_b);
            push_num(&mut members, keys::K0_C, r.k0_c);
            push_num(&mut members, keys::KINF_A, r.kinf_a);
            push_num(&mut members, keys::KINF_B, r.kinf_b);
            push_num(&mut members, keys::KINF_C, r.kinf_c);
            push_num(&mut members, keys::FC, r.fc);
            push_num(&mut members, keys::N, r.n);
            push_optional_str(&mut members, keys::NAME, &r.name);
            push_unknown(&mut members, &r.unknown_properties);
        }
        Reaction::Branched(r) => {
            push_str(&mut members, keys::GAS_PHASE, &r.gas_phase);
            push_components(&mut members, keys::REACTANTS, &r.reactants);
            push_components(&mut members, keys::NITRATE_PRODUCTS, &r.nitrate_products);
            push_components(&mut members, keys::ALKOXY_PRODUCTS, &r.alkoxy_products);
            push_num(&mut members, keys::X, r.x);
            push_num(&mut members, keys::Y, r.y);
            push_num(&mut members, keys::A0, r.a0);
            push_num(&mut members, keys::N_HEAVY, r.n as f64);
            push_optional_str(&mut members, keys::NAME, &r.name);
            push_unknown(&mut members, &r.unknown_properties);
        }
        Reaction::Tunneling(r) => {
            push_str(&mut members, keys::GAS_PHASE, &r.gas_phase);
            push_components(&mut members, keys::REACTANTS, &r.reactants);
            push_components(&mut members, keys::PRODUCTS, &r.products);
            push_num(&mut members, keys::A, r.a);
            push_num(&mut members, keys::B, r.b);
            push_num(&mut members, keys::C, r.c);
            push_optional_str(&mut members, keys::NAME, &r.name);
            push_unknown(&mut members, &r.unknown_properties);
        }
        Reaction::Surface(r) => {
            push_str(&mut members, keys::GAS_PHASE, &r.gas_phase);
            push_str(&mut members, keys::AEROSOL_PHASE, &r.aerosol_phase);
            members.push((
                keys::GAS_PHASE_SPECIES.to_string(),
                component_value(&r.gas_phase_species),
            ));
            push_components(&mut members, keys::GAS_PHASE_PRODUCTS, &r.gas_phase_products);
            push_num(&mut members, keys::REACTION_PROBABILITY, r.reaction_probability);
            push_optional_str(&mut members, keys::NAME, &r.name);
            push_unknown(&mut members, &r.unknown_properties);
        }
        Reaction::Photolysis(r) => {
            push_str(&mut members, keys::GAS_PHASE, &r.gas_phase);
            push_components(&mut members, keys::REACTANTS, &r.reactants);
            push_components(&mut members, keys::PRODUCTS, &r.products);
            push_num(&mut members, keys::SCALING_FACTOR, r.scaling_factor);
            push_optional_str(&mut members, keys::NAME, &r.name);
            push_unknown(&mut members, &r.unknown_properties);
        }
        Reaction::CondensedPhasePhotolysis(r) => {
            push_str(&mut members, keys::AEROSOL_PHASE, &r.aerosol_phase);
            push_str(&mut members, keys::AEROSOL_PHASE_WATER, &r.aerosol_phase_water);
            push_components(&mut members, keys::REACTANTS, &r.reactants);
            push_components(&mut members, keys::PRODUCTS, &r.products);
            push_num(&mut members, keys::SCALING_FACTOR, r.scaling_factor);
            push_optional_str(&mut members, keys::NAME, &r.name);
            push_unknown(&mut members, &r.unknown_properties);
        }
        Reaction::Emission(r) => {
            push_str(&mut members, keys::GAS_PHASE, &r.gas_phase);
            push_components(&mut members, keys::PRODUCTS, &r.products);
            push_num(&mut members, keys::SCALING_FACTOR, r.scaling_factor);
            push_optional_str(&mut members, keys::NAME, &r.name);
            push_unknown(&mut members, &r.unknown_properties);
        }
        Reaction::FirstOrderLoss(r) => {
            push_str(&mut members, keys::GAS_PHASE, &r.gas_phase);
            push_components(&mut members, keys::REACTANTS, &r.reactants);
            push_num(&mut members, keys::SCALING_FACTOR, r.scaling_factor);
            push_optional_str(&mut members, keys::NAME, &r.name);
            push_unknown(&mut members, &r.unknown_properties);
        }
        Reaction::AqueousEquilibrium(r) => {
            push_str(&mut members, keys::AEROSOL_PHASE, &r.aerosol_phase);
            push_str(&mut members, keys::AEROSOL_PHASE_WATER, &r.aerosol_phase_water);
            push_components(&mut members, keys::REACTANTS, &r.reactants);
            push_components(&mut members, keys::PRODUCTS, &r.products);
            push_num(&mut members, keys::A, r.a);
            push_num(&mut members, keys::C, r.c);
            push_num(&mut members, keys::K_REVERSE, r.k_reverse);
            push_optional_str(&mut members, keys::NAME, &r.name);
            push_unknown(&mut members, &r.unknown_properties);
        }
        Reaction::WetDeposition(r) => {
            push_str(&mut members, keys::AEROSOL_PHASE, &r.aerosol_phase);
            push_num(&mut members, keys::SCALING_FACTOR, r.scaling_factor);
            push_optional_str(&mut members, keys::NAME, &r.name);
            push_unknown(&mut members, &r.unknown_properties);
        }
        Reaction::HenrysLaw(r) => {
            push_str(&mut members, keys::GAS_PHASE, &r.gas_phase);
            members.push((
                keys::GAS_PHASE_SPECIES.to_string(),
                component_value(&r.gas_phase_species),
            ));
            push_str(&mut members, keys::AEROSOL_PHASE, &r.aerosol_phase);
            members.push((
                keys::AEROSOL_PHASE_SPECIES.to_string(),
                component_value(&r.aerosol_phase_species),
            ));
            push_str(&mut members, keys::AEROSOL_PHASE_WATER, &r.aerosol_phase_water);
            push_optional_str(&mut members, keys::NAME, &r.name);
            push_unknown(&mut members, &r.unknown_properties);
        }
        Reaction::SimpolPhaseTransfer(r) => {
            push_str(&mut members, keys::GAS_PHASE, &r.gas_phase);
            members.push((
                keys::GAS_PHASE_SPECIES.to_string(),
                component_value(&r.gas_phase_species),
            ));
            push_str(&mut members, keys::AEROSOL_PHASE, &r.aerosol_phase);
            members.push((
                keys::AEROSOL_PHASE_SPECIES.to_string(),
                component_value(&r.aerosol_phase_species),
            ));
            members.push((
                keys::B.to_string(),
                Value::Array(r.b.iter().map(|value| Value::Number(*value)).collect()),
            ));
            push_optional_str(&mut members, keys::NAME, &r.name);
            push_unknown(&mut members, &r.unknown_properties);
        }
        Reaction::UserDefined(r) => {
            push_str(&mut members, keys::GAS_PHASE, &r.gas_phase);
            push_components(&mut members, keys::REACTANTS, &r.reactants);
            push_components(&mut members, keys::PRODUCTS, &r.products);
            push_num(&mut members, keys::SCALING_FACTOR, r.scaling_factor);
            push_optional_str(&mut members, keys::NAME, &r.name);
            push_unknown(&mut members, &r.unknown_properties);
        }
    }

    Value::Object(members)
}

fn component_value(component: &ReactionComponent) -> Value {
    let mut members = Vec::new();
    push_str(&mut members, keys::SPECIES_NAME, &component.species_name);
    push_num(&mut members, keys::COEFFICIENT, component.coefficient);
    push_unknown(&mut members, &component.unknown_properties);
    Value::Object(members)
}

fn push_components(
    members: &mut Vec<(String, Value)>,
    key: &str,
    components: &[ReactionComponent],
) {
    members.push((
        key.to_string(),
        Value::Array(components.iter().map(component_value).collect()),
    ));
}

// `C` stays absent when it was never given, so an unset activation term does
// not reparse as an explicit zero.
fn push_rate_terms(
    members: &mut Vec<(String, Value)>,
    a: f64,
    b: f64,
    c: Option<f64>,
    d: f64,
    e: f64,
) {
    push_num(members, keys::A, a);
    push_num(members, keys::B, b);
    push_optional_num(members, keys::C, c);
    push_num(members, keys::D, d);
    push_num(members, keys::E, e);
}

fn push_str(members: &mut Vec<(String, Value)>, key: &str, value: &str) {
    members.push((key.to_string(), Value::String(value.to_string())));
}

fn push_optional_str(members: &mut Vec<(String, Value)>, key: &str, value: &Option<String>) {
    if let Some(value) = value {
        push_str(members, key, value);
    }
}

fn push_num(members: &mut Vec<(String, Value)>, key: &str, value: f64) {
    members.push((key.to_string(), Value::Number(value)));
}

fn push_optional_num(members: &mut Vec<(String, Value)>, key: &str, value: Option<f64>) {
    if let Some(value) = value {
        push_num(members, key, value);
    }
}

fn push_unknown(members: &mut Vec<(String, Value)>, unknown: &PropertyMap) {
    members.extend(unknown.iter().cloned());
}
