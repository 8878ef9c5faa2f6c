use crate::error::{EntityKind, MechanismError};
use crate::mechanism::{Phase, ReferenceSet, Species};
use std::collections::{HashMap, HashSet};

/// The species/phase namespace of one document, built before any reaction is
/// validated. Read-only to all downstream consumers.
#[derive(Debug)]
pub struct EntityRegistry {
    species: HashSet<String>,
    phases: HashMap<String, HashSet<String>>,
}

impl EntityRegistry {
    /// Scans the declared species and phases, rejecting duplicate names within
    /// a category and phase members that name an undeclared species.
    pub fn build(species: &[Species], phases: &[Phase]) -> Result<Self, MechanismError> {
        let mut species_names = HashSet::with_capacity(species.len());
        for entry in species {
            if !species_names.insert(entry.name.clone()) {
                return Err(MechanismError::DuplicateName {
                    kind: EntityKind::Species,
                    name: entry.name.clone(),
                });
            }
        }

        let mut phase_members = HashMap::with_capacity(phases.len());
        for phase in phases {
            for member in &phase.species {
                if !species_names.contains(member) {
                    return Err(MechanismError::UnresolvedReference {
                        kind: EntityKind::Species,
                        name: member.clone(),
                        context: format!("phase '{}'", phase.name),
                    });
                }
            }
            let members: HashSet<String> = phase.species.iter().cloned().collect();
            if phase_members.insert(phase.name.clone(), members).is_some() {
                return Err(MechanismError::DuplicateName {
                    kind: EntityKind::Phase,
                    name: phase.name.clone(),
                });
            }
        }

        Ok(EntityRegistry {
            species: species_names,
            phases: phase_members,
        })
    }

    pub fn has_species(&self, name: &str) -> bool {
        self.species.contains(name)
    }

    pub fn has_phase(&self, name: &str) -> bool {
        self.phases.contains_key(name)
    }

    pub fn species_in_phase(&self, phase_name: &str, species_name: &str) -> bool {
        self.phases
            .get(phase_name)
            .is_some_and(|members| members.contains(species_name))
    }

    /// Resolves one reaction's references against the namespace, failing on
    /// the first missing name. Shared by the document parser and the builder.
    pub(crate) fn check(
        &self,
        refs: &ReferenceSet<'_>,
        context: &str,
    ) -> Result<(), MechanismError> {
        for name in &refs.phases {
            if !self.has_phase(name) {
                return Err(MechanismError::UnresolvedReference {
                    kind: EntityKind::Phase,
                    name: (*name).to_string(),
                    context: context.to_string(),
                });
            }
        }
        for name in &refs.species {
            if !self.has_species(name) {
                return Err(MechanismError::UnresolvedReference {
                    kind: EntityKind::Species,
                    name: (*name).to_string(),
                    context: context.to_string(),
                });
            }
        }
        for (phase, species) in &refs.memberships {
            if !self.species_in_phase(phase, species) {
                return Err(MechanismError::UnresolvedReference {
                    kind: EntityKind::Species,
                    name: (*species).to_string(),
                    context: format!("{context}: species must be listed in phase '{phase}'"),
                });
            }
        }
        Ok(())
    }
}
