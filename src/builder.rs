use crate::error::MechanismError;
use crate::mechanism::{Mechanism, Phase, PropertyMap, Reaction, Reactions, Species};
use crate::registry::EntityRegistry;
use crate::schema::SchemaRuleSet;
use crate::version::Version;

/// Programmatic construction of a [`Mechanism`], enforcing the same invariants
/// as the document parser: unique species/phase names, resolvable references,
/// and a supported schema version. A builder either produces a fully valid
/// mechanism or an error; there is no partially-built result.
///
/// ```
/// use mechanism_config::builder::MechanismBuilder;
/// use mechanism_config::{Arrhenius, Phase, Reaction, ReactionComponent, Species};
///
/// let mechanism = MechanismBuilder::new("toy")
///     .species(Species::new("O3"))
///     .species(Species::new("O2"))
///     .phase(Phase::new("gas", vec!["O3".to_string(), "O2".to_string()]))
///     .reaction(Reaction::Arrhenius(Arrhenius {
///         reactants: vec![ReactionComponent::new("O3")],
///         products: vec![ReactionComponent::new("O2").with_coefficient(1.5)],
///         gas_phase: "gas".to_string(),
///         ..Arrhenius::default()
///     }))
///     .build()
///     .unwrap();
/// assert_eq!(mechanism.reactions.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MechanismBuilder {
    name: String,
    version: Version,
    species: Vec<Species>,
    phases: Vec<Phase>,
    reactions: Reactions,
    unknown_properties: PropertyMap,
}

impl MechanismBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        MechanismBuilder {
            name: name.into(),
            ..MechanismBuilder::default()
        }
    }

    pub fn version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    pub fn species(mut self, species: Species) -> Self {
        self.species.push(species);
        self
    }

    pub fn phase(mut self, phase: Phase) -> Self {
        self.phases.push(phase);
        self
    }

    pub fn reaction(mut self, reaction: Reaction) -> Self {
        self.reactions.push(reaction);
        self
    }

    /// Validates the accumulated entities and assembles the mechanism.
    pub fn build(self) -> Result<Mechanism, MechanismError> {
        SchemaRuleSet::for_version(&self.version)?;
        let registry = EntityRegistry::build(&self.species, &self.phases)?;
        for (index, reaction) in self.reactions.iter().enumerate() {
            let context = match reaction.name() {
                Some(name) => format!("reaction '{name}'"),
                None => format!("reactions[{index}] ({})", reaction.reaction_type()),
            };
            registry.check(&reaction.reference_set(), &context)?;
        }

        Ok(Mechanism {
            name: self.name,
            species: self.species,
            phases: self.phases,
            reactions: self.reactions,
            version: self.version,
            unknown_properties: self.unknown_properties,
        })
    }
}
