// Unhappy-path tests: every error in the taxonomy should be reachable from a
// document, and each should name the offending location.

use mechanism_config::{
    parse, parse_str, EntityKind, Format, MechanismError, SchemaError, Version,
};

fn parse_yaml(content: &str) -> Result<mechanism_config::Mechanism, MechanismError> {
    parse_str(content, Format::Yaml)
}

fn expect_err(content: &str) -> MechanismError {
    match parse_yaml(content) {
        Ok(_) => panic!("expected the document to be rejected"),
        Err(err) => err,
    }
}

// A small valid document the error cases below are derived from.
fn valid_header() -> String {
    r#"
version: "1.0.0"
name: errors
species:
  - name: A
  - name: B
phases:
  - name: gas
    species: [A, B]
"#
    .to_string()
}

#[test]
fn test_missing_file_is_a_file_access_error() {
    for path in ["examples/_missing_configuration.yaml", "examples/_missing_configuration.json"] {
        match parse(path) {
            Err(MechanismError::FileAccess { path: reported, .. }) => {
                assert!(reported.contains("_missing_configuration"));
            }
            other => panic!("expected FileAccess, got {other:?}"),
        }
    }
}

#[test]
fn test_duplicate_species_name() {
    let doc = r#"
species:
  - name: A
  - name: A
phases: []
reactions: []
"#;
    match expect_err(doc) {
        MechanismError::DuplicateName { kind, name } => {
            assert_eq!(kind, EntityKind::Species);
            assert_eq!(name, "A");
        }
        other => panic!("expected DuplicateName, got {other:?}"),
    }
}

#[test]
fn test_duplicate_phase_name() {
    let doc = r#"
species:
  - name: A
phases:
  - name: gas
    species: [A]
  - name: gas
    species: []
reactions: []
"#;
    match expect_err(doc) {
        MechanismError::DuplicateName { kind, name } => {
            assert_eq!(kind, EntityKind::Phase);
            assert_eq!(name, "gas");
        }
        other => panic!("expected DuplicateName, got {other:?}"),
    }
}

#[test]
fn test_phase_with_undeclared_species() {
    let doc = r#"
species:
  - name: A
phases:
  - name: gas
    species: [A, missing]
reactions: []
"#;
    match expect_err(doc) {
        MechanismError::UnresolvedReference { kind, name, context } => {
            assert_eq!(kind, EntityKind::Species);
            assert_eq!(name, "missing");
            assert!(context.contains("gas"));
        }
        other => panic!("expected UnresolvedReference, got {other:?}"),
    }
}

#[test]
fn test_reaction_with_undeclared_species() {
    let doc = valid_header()
        + r#"
reactions:
  - type: ARRHENIUS
    gas phase: gas
    reactants: [ghost]
    products: [B]
"#;
    match expect_err(&doc) {
        MechanismError::UnresolvedReference { kind, name, context } => {
            assert_eq!(kind, EntityKind::Species);
            assert_eq!(name, "ghost");
            assert!(context.contains("reactions[0]"));
            assert!(context.contains("ARRHENIUS"));
        }
        other => panic!("expected UnresolvedReference, got {other:?}"),
    }
}

#[test]
fn test_reaction_with_undeclared_phase() {
    let doc = valid_header()
        + r#"
reactions:
  - type: ARRHENIUS
    gas phase: stratosphere
    reactants: [A]
    products: [B]
"#;
    match expect_err(&doc) {
        MechanismError::UnresolvedReference { kind, name, .. } => {
            assert_eq!(kind, EntityKind::Phase);
            assert_eq!(name, "stratosphere");
        }
        other => panic!("expected UnresolvedReference, got {other:?}"),
    }
}

#[test]
fn test_conflicting_c_and_ea() {
    let doc = valid_header()
        + r#"
reactions:
  - type: ARRHENIUS
    gas phase: gas
    C: 10.0
    Ea: 101.2
    reactants: [A]
    products: [B]
"#;
    match expect_err(&doc) {
        MechanismError::Schema(SchemaError::ConflictingFields { first, second, location }) => {
            assert_eq!(first, "C");
            assert_eq!(second, "Ea");
            assert!(location.contains("ARRHENIUS"));
        }
        other => panic!("expected ConflictingFields, got {other:?}"),
    }
}

#[test]
fn test_neither_c_nor_ea_leaves_c_unset() {
    let doc = valid_header()
        + r#"
reactions:
  - type: ARRHENIUS
    gas phase: gas
    A: 2.0
    reactants: [A]
    products: [B]
"#;
    let mechanism = parse_yaml(&doc).unwrap();
    let arrhenius = mechanism.reactions.arrhenius().next().unwrap();
    assert_eq!(arrhenius.c, None);
    assert_eq!(arrhenius.a, 2.0);
}

#[test]
fn test_simpol_b_with_wrong_length() {
    let doc = valid_header()
        + r#"
reactions:
  - type: SIMPOL_PHASE_TRANSFER
    gas phase: gas
    gas-phase species: A
    aerosol phase: gas
    aerosol-phase species: B
    B: [1.0, 2.0, 3.0]
"#;
    match expect_err(&doc) {
        MechanismError::Schema(SchemaError::WrongLength { field, expected, found, .. }) => {
            assert_eq!(field, "B");
            assert_eq!(expected, 4);
            assert_eq!(found, 3);
        }
        other => panic!("expected WrongLength, got {other:?}"),
    }
}

#[test]
fn test_simpol_without_b_defaults_to_zeros() {
    let doc = valid_header()
        + r#"
reactions:
  - type: SIMPOL_PHASE_TRANSFER
    gas phase: gas
    gas-phase species: A
    aerosol phase: gas
    aerosol-phase species: B
"#;
    let mechanism = parse_yaml(&doc).unwrap();
    let simpol = mechanism.reactions.simpol_phase_transfer().next().unwrap();
    assert_eq!(simpol.b, [0.0, 0.0, 0.0, 0.0]);
}

#[test]
fn test_unknown_reaction_type_tag() {
    let doc = valid_header()
        + r#"
reactions:
  - type: QUANTUM_FOAM
    gas phase: gas
"#;
    match expect_err(&doc) {
        MechanismError::Schema(SchemaError::UnknownReactionType { tag, location }) => {
            assert_eq!(tag, "QUANTUM_FOAM");
            assert!(location.contains("reactions[0]"));
        }
        other => panic!("expected UnknownReactionType, got {other:?}"),
    }
}

#[test]
fn test_unsupported_major_version() {
    let doc = r#"
version: "2.0.0"
species: []
phases: []
reactions: []
"#;
    match expect_err(doc) {
        MechanismError::UnsupportedVersion { version } => {
            assert_eq!(version, Version::new(2, 0, 0));
        }
        other => panic!("expected UnsupportedVersion, got {other:?}"),
    }
}

#[test]
fn test_malformed_version_marker() {
    let doc = r#"
version: "one point oh"
species: []
phases: []
reactions: []
"#;
    match expect_err(doc) {
        MechanismError::Schema(SchemaError::InvalidVersion { marker }) => {
            assert_eq!(marker, "one point oh");
        }
        other => panic!("expected InvalidVersion, got {other:?}"),
    }
}

#[test]
fn test_missing_version_defaults_to_earliest_supported() {
    let doc = r#"
species: []
phases: []
reactions: []
"#;
    let mechanism = parse_yaml(doc).unwrap();
    assert_eq!(mechanism.version, Version::EARLIEST_SUPPORTED);
    assert_eq!(mechanism.name, "");
}

#[test]
fn test_structured_version_marker() {
    let doc = r#"
version:
  major: 1
  minor: 2
species: []
phases: []
reactions: []
"#;
    let mechanism = parse_yaml(doc).unwrap();
    assert_eq!(mechanism.version, Version::new(1, 2, 0));
}

#[test]
fn test_missing_required_field() {
    let doc = valid_header()
        + r#"
reactions:
  - type: TROE
    gas phase: gas
    products: [B]
"#;
    match expect_err(&doc) {
        MechanismError::Schema(SchemaError::MissingField { field, location }) => {
            assert_eq!(field, "reactants");
            assert!(location.contains("TROE"));
        }
        other => panic!("expected MissingField, got {other:?}"),
    }
}

#[test]
fn test_missing_root_section() {
    let doc = r#"
species: []
reactions: []
"#;
    match expect_err(doc) {
        MechanismError::Schema(SchemaError::MissingField { field, .. }) => {
            assert_eq!(field, "phases");
        }
        other => panic!("expected MissingField, got {other:?}"),
    }
}

#[test]
fn test_photolysis_rejects_multiple_reactants() {
    let doc = valid_header()
        + r#"
reactions:
  - type: PHOTOLYSIS
    gas phase: gas
    reactants: [A, B]
    products: [B]
"#;
    match expect_err(&doc) {
        MechanismError::Schema(SchemaError::TooManyReactionComponents { field, location }) => {
            assert_eq!(field, "reactants");
            assert!(location.contains("PHOTOLYSIS"));
        }
        other => panic!("expected TooManyReactionComponents, got {other:?}"),
    }
}

#[test]
fn test_aqueous_equilibrium_species_outside_aerosol_phase() {
    let doc = r#"
species:
  - name: A
  - name: H2O_aq
phases:
  - name: aqueous aerosol
    species: [H2O_aq]
reactions:
  - type: AQUEOUS_EQUILIBRIUM
    aerosol phase: aqueous aerosol
    aerosol-phase water: H2O_aq
    k_reverse: 0.32
    reactants: [A]
    products: [A]
"#;
    match expect_err(doc) {
        MechanismError::UnresolvedReference { kind, name, context } => {
            assert_eq!(kind, EntityKind::Species);
            assert_eq!(name, "A");
            assert!(context.contains("aqueous aerosol"));
        }
        other => panic!("expected UnresolvedReference, got {other:?}"),
    }
}

#[test]
fn test_invalid_tracer_type() {
    let doc = r#"
species:
  - name: A
    tracer type: GHOST
phases: []
reactions: []
"#;
    match expect_err(doc) {
        MechanismError::Schema(SchemaError::InvalidValue { field, found, .. }) => {
            assert_eq!(field, "tracer type");
            assert_eq!(found, "GHOST");
        }
        other => panic!("expected InvalidValue, got {other:?}"),
    }
}

#[test]
fn test_wrong_type_for_numeric_field() {
    let doc = r#"
species:
  - name: A
    molecular weight [kg mol-1]: heavy
phases: []
reactions: []
"#;
    match expect_err(doc) {
        MechanismError::Schema(SchemaError::InvalidType { expected, location, .. }) => {
            assert_eq!(expected, "a number");
            assert!(location.contains("molecular weight"));
        }
        other => panic!("expected InvalidType, got {other:?}"),
    }
}

#[test]
fn test_branched_requires_integer_heavy_atom_count() {
    let doc = valid_header()
        + r#"
reactions:
  - type: BRANCHED_NO_RO2
    gas phase: gas
    X: 1.0
    "Y": 1.0
    a0: 0.5
    "n": 2.5
    reactants: [A]
    nitrate products: [B]
    alkoxy products: [B]
"#;
    match expect_err(&doc) {
        MechanismError::Schema(SchemaError::InvalidType { expected, .. }) => {
            assert_eq!(expected, "an integer");
        }
        other => panic!("expected InvalidType, got {other:?}"),
    }
}

#[test]
fn test_unrecognized_keys_are_preserved_not_rejected() {
    let doc = r#"
species:
  - name: A
    special stuff: 42.0
phases: []
reactions: []
"#;
    let mechanism = parse_yaml(doc).unwrap();
    let species = mechanism.find_species("A").unwrap();
    assert_eq!(
        species.unknown_properties,
        vec![(
            "special stuff".to_string(),
            mechanism_config::Value::Number(42.0)
        )]
    );
}

#[test]
fn test_non_object_reaction_entry() {
    let doc = valid_header()
        + r#"
reactions:
  - just a string
"#;
    match expect_err(&doc) {
        MechanismError::Schema(SchemaError::InvalidType { expected, .. }) => {
            assert_eq!(expected, "an object");
        }
        other => panic!("expected InvalidType, got {other:?}"),
    }
}
