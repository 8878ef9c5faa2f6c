use mechanism_config::{
    constants::BOLTZMANN, parse, Mechanism, ReactionType, TracerType, Value, Version,
};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests/examples");
    path.push(name);
    path
}

fn validate_species(mechanism: &Mechanism) {
    let h2o2 = mechanism.find_species("H2O2").expect("H2O2 is declared");
    assert_eq!(h2o2.henrys_law_constant_298, Some(1.011596348));
    assert_eq!(h2o2.henrys_law_constant_exponential_factor, Some(6340.0));
    assert_eq!(h2o2.diffusion_coefficient, Some(1.46e-05));
    assert_eq!(h2o2.n_star, Some(1.74));
    assert_eq!(h2o2.molecular_weight, Some(0.0340147));
    assert_eq!(h2o2.density, Some(1000.0));
    assert_eq!(
        h2o2.unknown_properties,
        vec![("__absolute tolerance".to_string(), Value::Number(1.0e-10))]
    );

    let ethanol = mechanism.find_species("ethanol").expect("ethanol is declared");
    assert_eq!(ethanol.diffusion_coefficient, Some(0.95e-05));
    assert_eq!(ethanol.n_star, Some(2.55));
    assert_eq!(ethanol.molecular_weight, Some(0.04607));
    assert_eq!(ethanol.density, None);

    assert_eq!(
        mechanism.find_species("B").and_then(|s| s.tracer_type),
        Some(TracerType::Aerosol)
    );
    assert_eq!(
        mechanism.find_species("C").and_then(|s| s.tracer_type),
        Some(TracerType::ThirdBody)
    );
    assert_eq!(
        mechanism.find_species("A").and_then(|s| s.tracer_type),
        None
    );

    for name in ["aerosol stuff", "more aerosol stuff", "M", "H2O_aq"] {
        assert!(mechanism.find_species(name).is_some(), "missing {name}");
    }
}

fn validate_full_mechanism(mechanism: &Mechanism) {
    assert_eq!(mechanism.name, "Full Configuration");
    assert_eq!(mechanism.version, Version::new(1, 0, 0));
    assert_eq!(mechanism.species.len(), 11);
    assert_eq!(mechanism.phases.len(), 4);
    validate_species(mechanism);

    let reactions = &mechanism.reactions;
    assert_eq!(reactions.len(), 16);
    assert_eq!(reactions.arrhenius().count(), 2);
    assert_eq!(reactions.condensed_phase_arrhenius().count(), 2);
    assert_eq!(reactions.troe().count(), 1);
    assert_eq!(reactions.branched().count(), 1);
    assert_eq!(reactions.tunneling().count(), 1);
    assert_eq!(reactions.surface().count(), 1);
    assert_eq!(reactions.photolysis().count(), 1);
    assert_eq!(reactions.condensed_phase_photolysis().count(), 1);
    assert_eq!(reactions.emission().count(), 1);
    assert_eq!(reactions.first_order_loss().count(), 1);
    assert_eq!(reactions.aqueous_equilibrium().count(), 1);
    assert_eq!(reactions.wet_deposition().count(), 1);
    assert_eq!(reactions.henrys_law().count(), 1);
    assert_eq!(reactions.simpol_phase_transfer().count(), 1);
    assert_eq!(reactions.user_defined().count(), 0);

    // the per-kind groups partition the full sequence
    let grouped: usize = ReactionType::ALL
        .into_iter()
        .map(|kind| reactions.count_of(kind))
        .sum();
    assert_eq!(grouped, reactions.len());

    let troe = reactions.troe().next().unwrap();
    assert_eq!(troe.name.as_deref(), Some("my troe"));
    assert_eq!(troe.k0_a, 1.2e-12);
    assert_eq!(troe.k0_b, 167.0);
    assert_eq!(troe.k0_c, 3.0);
    assert_eq!(troe.kinf_a, 136.0);
    assert_eq!(troe.kinf_b, 5.0);
    assert_eq!(troe.kinf_c, 24.0);
    assert_eq!(troe.fc, 0.9);
    assert_eq!(troe.n, 0.8);
    assert_eq!(troe.reactants.len(), 1);
    assert_eq!(troe.reactants[0].species_name, "B");
    assert_eq!(troe.reactants[0].coefficient, 1.0);
    assert_eq!(troe.products[0].species_name, "C");
    assert_eq!(troe.products[0].coefficient, 1.2);
    assert_eq!(
        troe.unknown_properties,
        vec![(
            "__my special property".to_string(),
            Value::String("hello".to_string())
        )]
    );

    let plain = reactions
        .arrhenius()
        .find(|r| r.name.as_deref() == Some("my arrhenius"))
        .unwrap();
    assert_eq!(plain.a, 32.1);
    assert_eq!(plain.b, -2.3);
    assert_eq!(plain.c, Some(102.3));
    assert_eq!(plain.d, 63.4);
    assert_eq!(plain.e, -1.3);
    assert_eq!(plain.gas_phase, "gas");
    assert_eq!(plain.reactants.len(), 2);

    let derived = reactions
        .arrhenius()
        .find(|r| r.name.as_deref() == Some("my arrhenius with Ea"))
        .unwrap();
    assert_eq!(derived.c, Some(-101.2 / BOLTZMANN));
    assert_eq!(derived.b, 1.2);
    assert_eq!(derived.d, 42.3);
    assert_eq!(derived.a, 1.0);
    assert_eq!(derived.e, 0.0);

    let branched = reactions.branched().next().unwrap();
    assert_eq!(branched.x, 1.2e-4);
    assert_eq!(branched.y, 167.0);
    assert_eq!(branched.a0, 0.15);
    assert_eq!(branched.n, 9);
    assert_eq!(branched.nitrate_products[0].coefficient, 1.3);

    let surface = reactions.surface().next().unwrap();
    assert_eq!(surface.reaction_probability, 2.0e-2);
    assert_eq!(surface.gas_phase_species.species_name, "A");
    assert_eq!(surface.gas_phase_species.coefficient, 1.0);
    assert_eq!(surface.gas_phase_products.len(), 2);
    assert_eq!(surface.aerosol_phase, "surface reacting phase");

    let condensed = reactions
        .condensed_phase_arrhenius()
        .find(|r| r.name.as_deref() == Some("my condensed phase arrhenius with Ea"))
        .unwrap();
    assert_eq!(condensed.c, Some(-123.2 / BOLTZMANN));
    assert_eq!(condensed.aerosol_phase, "aqueous aerosol");
    assert_eq!(condensed.aerosol_phase_water, "H2O_aq");

    let equilibrium = reactions.aqueous_equilibrium().next().unwrap();
    assert_eq!(equilibrium.a, 1.14e-2);
    assert_eq!(equilibrium.c, 2300.0);
    assert_eq!(equilibrium.k_reverse, 0.32);
    assert_eq!(equilibrium.reactants.len(), 1);
    assert_eq!(equilibrium.reactants[0].species_name, "A");
    assert_eq!(equilibrium.reactants[0].coefficient, 2.0);
    assert_eq!(equilibrium.products.len(), 2);
    assert_eq!(equilibrium.products[0].species_name, "B");
    assert_eq!(equilibrium.products[0].coefficient, 1.0);
    assert_eq!(equilibrium.products[1].species_name, "C");
    assert_eq!(equilibrium.products[1].coefficient, 1.0);

    let deposition = reactions.wet_deposition().next().unwrap();
    assert_eq!(deposition.aerosol_phase, "cloud");
    assert_eq!(deposition.scaling_factor, 12.3);
    assert_eq!(deposition.name.as_deref(), Some("rxn cloud"));

    let henrys = reactions.henrys_law().next().unwrap();
    assert_eq!(henrys.gas_phase_species.species_name, "H2O2");
    assert_eq!(henrys.aerosol_phase_species.species_name, "H2O2_aq");
    assert_eq!(henrys.aerosol_phase_water, "H2O_aq");

    let simpol = reactions.simpol_phase_transfer().next().unwrap();
    assert_eq!(simpol.b, [-1.97e3, 2.91, 1.96e-3, -4.96e-1]);
    assert_eq!(simpol.gas_phase_species.species_name, "ethanol");
    assert_eq!(simpol.aerosol_phase_species.species_name, "ethanol_aq");

    // referential completeness: every name a reaction component or phase
    // mentions resolves within the mechanism
    for phase in &mechanism.phases {
        for member in &phase.species {
            assert!(
                mechanism.find_species(member).is_some(),
                "phase '{}' lists undeclared species '{member}'",
                phase.name
            );
        }
    }
    for reaction in mechanism.reactions.iter() {
        for component in reaction_components(reaction) {
            assert!(
                mechanism.find_species(&component).is_some(),
                "{} references undeclared species '{component}'",
                reaction.reaction_type()
            );
        }
    }
}

fn reaction_components(reaction: &mechanism_config::Reaction) -> Vec<String> {
    use mechanism_config::Reaction;
    let collect = |lists: &[&[mechanism_config::ReactionComponent]]| -> Vec<String> {
        lists
            .iter()
            .flat_map(|list| list.iter().map(|c| c.species_name.clone()))
            .collect()
    };
    match reaction {
        Reaction::Arrhenius(r) => collect(&[&r.reactants, &r.products]),
        Reaction::CondensedPhaseArrhenius(r) => collect(&[&r.reactants, &r.products]),
        Reaction::Troe(r) => collect(&[&r.reactants, &r.products]),
        Reaction::Branched(r) => {
            collect(&[&r.reactants, &r.nitrate_products, &r.alkoxy_products])
        }
        Reaction::Tunneling(r) => collect(&[&r.reactants, &r.products]),
        Reaction::Surface(r) => {
            let mut names = collect(&[&r.gas_phase_products]);
            names.push(r.gas_phase_species.species_name.clone());
            names
        }
        Reaction::Photolysis(r) => collect(&[&r.reactants, &r.products]),
        Reaction::CondensedPhasePhotolysis(r) => collect(&[&r.reactants, &r.products]),
        Reaction::Emission(r) => collect(&[&r.products]),
        Reaction::FirstOrderLoss(r) => collect(&[&r.reactants]),
        Reaction::AqueousEquilibrium(r) => collect(&[&r.reactants, &r.products]),
        Reaction::WetDeposition(_) => Vec::new(),
        Reaction::HenrysLaw(r) => vec![
            r.gas_phase_species.species_name.clone(),
            r.aerosol_phase_species.species_name.clone(),
            r.aerosol_phase_water.clone(),
        ],
        Reaction::SimpolPhaseTransfer(r) => vec![
            r.gas_phase_species.species_name.clone(),
            r.aerosol_phase_species.species_name.clone(),
        ],
        Reaction::UserDefined(r) => collect(&[&r.reactants, &r.products]),
    }
}

#[test]
fn test_user_defined_reaction() {
    let doc = r#"
species:
  - name: A
  - name: B
phases:
  - name: gas
    species: [A, B]
reactions:
  - type: USER_DEFINED
    gas phase: gas
    scaling factor: 2.5
    reactants:
      - species name: A
        coefficient: 2.0
    products:
      - B
    name: my user defined
"#;
    let mechanism = mechanism_config::parse_str(doc, mechanism_config::Format::Yaml).unwrap();
    assert_eq!(mechanism.reactions.len(), 1);

    let user_defined = mechanism.reactions.user_defined().next().unwrap();
    assert_eq!(user_defined.name.as_deref(), Some("my user defined"));
    assert_eq!(user_defined.scaling_factor, 2.5);
    assert_eq!(user_defined.reactants[0].species_name, "A");
    assert_eq!(user_defined.reactants[0].coefficient, 2.0);
    assert_eq!(user_defined.products[0].species_name, "B");
    assert_eq!(user_defined.gas_phase, "gas");
}

#[test]
fn test_full_configuration_yaml() {
    let mechanism = parse(fixture("full_configuration.yaml")).unwrap();
    validate_full_mechanism(&mechanism);
}

#[test]
fn test_full_configuration_json() {
    let mechanism = parse(fixture("full_configuration.json")).unwrap();
    validate_full_mechanism(&mechanism);
}

#[test]
fn test_both_encodings_parse_to_the_same_mechanism() {
    let from_yaml = parse(fixture("full_configuration.yaml")).unwrap();
    let from_json = parse(fixture("full_configuration.json")).unwrap();
    assert_eq!(from_yaml, from_json);
}
