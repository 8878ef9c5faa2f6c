use crate::constants::BOLTZMANN;
use crate::error::SchemaError;
use crate::value::Value;
use crate::version::Version;
use std::fmt;

/// Open-ended properties carried verbatim through validation and
/// serialization, in declaration order.
pub type PropertyMap = Vec<(String, Value)>;

/// The closed set of tracer classifications a species may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracerType {
    Aerosol,
    ThirdBody,
    Constant,
}

impl TracerType {
    pub const ALLOWED: &'static str = "AEROSOL, THIRD_BODY, CONSTANT";

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "AEROSOL" => Some(TracerType::Aerosol),
            "THIRD_BODY" => Some(TracerType::ThirdBody),
            "CONSTANT" => Some(TracerType::Constant),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            TracerType::Aerosol => "AEROSOL",
            TracerType::ThirdBody => "THIRD_BODY",
            TracerType::Constant => "CONSTANT",
        }
    }
}

/// A chemical species with its physical and transport properties.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Species {
    pub name: String,
    /// Henry's law constant at 298 K [mol m-3 Pa-1]
    pub henrys_law_constant_298: Option<f64>,
    /// Henry's law constant exponential factor [K]
    pub henrys_law_constant_exponential_factor: Option<f64>,
    /// Diffusion coefficient [m2 s-1]
    pub diffusion_coefficient: Option<f64>,
    /// Parameter used to calculate the mass accommodation factor
    pub n_star: Option<f64>,
    /// Molecular weight [kg mol-1]
    pub molecular_weight: Option<f64>,
    /// Density [kg m-3]
    pub density: Option<f64>,
    pub tracer_type: Option<TracerType>,
    pub unknown_properties: PropertyMap,
}

impl Species {
    pub fn new(name: impl Into<String>) -> Self {
        Species {
            name: name.into(),
            ..Species::default()
        }
    }
}

/// A named grouping of species, e.g. a gas phase or an aqueous aerosol.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Phase {
    pub name: String,
    pub species: Vec<String>,
    pub unknown_properties: PropertyMap,
}

impl Phase {
    pub fn new(name: impl Into<String>, species: Vec<String>) -> Self {
        Phase {
            name: name.into(),
            species,
            unknown_properties: PropertyMap::new(),
        }
    }
}

/// A (species, stoichiometric coefficient) pair used in reactant and product
/// lists. The species name must resolve within the owning mechanism.
#[derive(Debug, Clone, PartialEq)]
pub struct ReactionComponent {
    pub species_name: String,
    pub coefficient: f64,
    pub unknown_properties: PropertyMap,
}

impl ReactionComponent {
    pub fn new(species_name: impl Into<String>) -> Self {
        ReactionComponent {
            species_name: species_name.into(),
            coefficient: 1.0,
            unknown_properties: PropertyMap::new(),
        }
    }

    pub fn with_coefficient(mut self, coefficient: f64) -> Self {
        self.coefficient = coefficient;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Arrhenius {
    /// Pre-exponential factor [(mol m-3)^(-(n-1)) s-1]
    pub a: f64,
    /// Unitless exponential factor
    pub b: f64,
    /// Activation threshold, -E_a / k_B [K]. `None` when the document gives
    /// neither `C` nor `Ea`.
    pub c: Option<f64>,
    /// Temperature-dependence factor [K]
    pub d: f64,
    /// Pressure-dependence factor [Pa-1]
    pub e: f64,
    pub reactants: Vec<ReactionComponent>,
    pub products: Vec<ReactionComponent>,
    pub name: Option<String>,
    pub gas_phase: String,
    pub unknown_properties: PropertyMap,
}

impl Default for Arrhenius {
    fn default() -> Self {
        Arrhenius {
            a: 1.0,
            b: 0.0,
            c: None,
            d: 300.0,
            e: 0.0,
            reactants: Vec::new(),
            products: Vec::new(),
            name: None,
            gas_phase: String::new(),
            unknown_properties: PropertyMap::new(),
        }
    }
}

impl Arrhenius {
    /// Sets `C` from an activation energy [J], the same one-way derivation the
    /// document validators apply to an `Ea` field. Fails if `C` is already set.
    pub fn with_activation_energy(mut self, ea: f64) -> Result<Self, SchemaError> {
        if self.c.is_some() {
            return Err(SchemaError::ConflictingFields {
                first: "C",
                second: "Ea",
                location: "an Arrhenius rate constant".to_string(),
            });
        }
        self.c = Some(-ea / BOLTZMANN);
        Ok(self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CondensedPhaseArrhenius {
    pub a: f64,
    pub b: f64,
    pub c: Option<f64>,
    pub d: f64,
    pub e: f64,
    pub reactants: Vec<ReactionComponent>,
    pub products: Vec<ReactionComponent>,
    pub name: Option<String>,
    pub aerosol_phase: String,
    /// The water species the condensed-phase rate is referenced to. Must be a
    /// member of `aerosol_phase`.
    pub aerosol_phase_water: String,
    pub unknown_properties: PropertyMap,
}

impl Default for CondensedPhaseArrhenius {
    fn default() -> Self {
        CondensedPhaseArrhenius {
            a: 1.0,
            b: 0.0,
            c: None,
            d: 300.0,
            e: 0.0,
            reactants: Vec::new(),
            products: Vec::new(),
            name: None,
            aerosol_phase: String::new(),
            aerosol_phase_water: String::new(),
            unknown_properties: PropertyMap::new(),
        }
    }
}

impl CondensedPhaseArrhenius {
    pub fn with_activation_energy(mut self, ea: f64) -> Result<Self, SchemaError> {
        if self.c.is_some() {
            return Err(SchemaError::ConflictingFields {
                first: "C",
                second: "Ea",
                location: "a condensed-phase Arrhenius rate constant".to_string(),
            });
        }
        self.c = Some(-ea / BOLTZMANN);
        Ok(self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Troe {
    /// Low-pressure pre-exponential factor
    pub k0_a: f64,
    /// Low-pressure temperature-scaling parameter
    pub k0_b: f64,
    /// Low-pressure exponential factor
    pub k0_c: f64,
    /// High-pressure pre-exponential factor
    pub kinf_a: f64,
    /// High-pressure temperature-scaling parameter
    pub kinf_b: f64,
    /// High-pressure exponential factor
    pub kinf_c: f64,
    pub fc: f64,
    pub n: f64,
    pub reactants: Vec<ReactionComponent>,
    pub products: Vec<ReactionComponent>,
    pub name: Option<String>,
    pub gas_phase: String,
    pub unknown_properties: PropertyMap,
}

impl Default for Troe {
    fn default() -> Self {
        Troe {
            k0_a: 1.0,
            k0_b: 0.0,
            k0_c: 0.0,
            kinf_a: 1.0,
            kinf_b: 0.0,
            kinf_c: 0.0,
            fc: 0.6,
            n: 1.0,
            reactants: Vec::new(),
            products: Vec::new(),
            name: None,
            gas_phase: String::new(),
            unknown_properties: PropertyMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Branched {
    /// Pre-exponential factor
    pub x: f64,
    /// Exponential factor
    pub y: f64,
    /// Branching factor
    pub a0: f64,
    /// Number of heavy atoms in the RO2 reacting species
    pub n: i64,
    pub reactants: Vec<ReactionComponent>,
    pub nitrate_products: Vec<ReactionComponent>,
    pub alkoxy_products: Vec<ReactionComponent>,
    pub name: Option<String>,
    pub gas_phase: String,
    pub unknown_properties: PropertyMap,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tunneling {
    /// Pre-exponential factor
    pub a: f64,
    /// Linear temperature-dependent parameter [K]
    pub b: f64,
    /// Cubed temperature-dependent parameter [K^3]
    pub c: f64,
    pub reactants: Vec<ReactionComponent>,
    pub products: Vec<ReactionComponent>,
    pub name: Option<String>,
    pub gas_phase: String,
    pub unknown_properties: PropertyMap,
}

impl Default for Tunneling {
    fn default() -> Self {
        Tunneling {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            reactants: Vec::new(),
            products: Vec::new(),
            name: None,
            gas_phase: String::new(),
            unknown_properties: PropertyMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    /// Reaction probability (0-1) [unitless]
    pub reaction_probability: f64,
    pub gas_phase_species: ReactionComponent,
    pub gas_phase_products: Vec<ReactionComponent>,
    pub name: Option<String>,
    pub gas_phase: String,
    pub aerosol_phase: String,
    pub unknown_properties: PropertyMap,
}

impl Default for Surface {
    fn default() -> Self {
        Surface {
            reaction_probability: 1.0,
            gas_phase_species: ReactionComponent::new(""),
            gas_phase_products: Vec::new(),
            name: None,
            gas_phase: String::new(),
            aerosol_phase: String::new(),
            unknown_properties: PropertyMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Photolysis {
    /// Scaling factor applied to user-provided rate constants
    pub scaling_factor: f64,
    pub reactants: Vec<ReactionComponent>,
    pub products: Vec<ReactionComponent>,
    pub name: Option<String>,
    pub gas_phase: String,
    pub unknown_properties: PropertyMap,
}

impl Default for Photolysis {
    fn default() -> Self {
        Photolysis {
            scaling_factor: 1.0,
            reactants: Vec::new(),
            products: Vec::new(),
            name: None,
            gas_phase: String::new(),
            unknown_properties: PropertyMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CondensedPhasePhotolysis {
    pub scaling_factor: f64,
    pub reactants: Vec<ReactionComponent>,
    pub products: Vec<ReactionComponent>,
    pub name: Option<String>,
    pub aerosol_phase: String,
    pub aerosol_phase_water: String,
    pub unknown_properties: PropertyMap,
}

impl Default for CondensedPhasePhotolysis {
    fn default() -> Self {
        CondensedPhasePhotolysis {
            scaling_factor: 1.0,
            reactants: Vec::new(),
            products: Vec::new(),
            name: None,
            aerosol_phase: String::new(),
            aerosol_phase_water: String::new(),
            unknown_properties: PropertyMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Emission {
    pub scaling_factor: f64,
    pub products: Vec<ReactionComponent>,
    pub name: Option<String>,
    pub gas_phase: String,
    pub unknown_properties: PropertyMap,
}

impl Default for Emission {
    fn default() -> Self {
        Emission {
            scaling_factor: 1.0,
            products: Vec::new(),
            name: None,
            gas_phase: String::new(),
            unknown_properties: PropertyMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FirstOrderLoss {
    pub scaling_factor: f64,
    pub reactants: Vec<ReactionComponent>,
    pub name: Option<String>,
    pub gas_phase: String,
    pub unknown_properties: PropertyMap,
}

impl Default for FirstOrderLoss {
    fn default() -> Self {
        FirstOrderLoss {
            scaling_factor: 1.0,
            reactants: Vec::new(),
            name: None,
            gas_phase: String::new(),
            unknown_properties: PropertyMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AqueousEquilibrium {
    pub name: Option<String>,
    pub aerosol_phase: String,
    pub aerosol_phase_water: String,
    pub reactants: Vec<ReactionComponent>,
    pub products: Vec<ReactionComponent>,
    /// Forward pre-exponential factor [s-1]
    pub a: f64,
    /// Forward exponential term
    pub c: f64,
    /// Reverse reaction rate constant [s-1]. Independent of the forward pair.
    pub k_reverse: f64,
    pub unknown_properties: PropertyMap,
}

impl Default for AqueousEquilibrium {
    fn default() -> Self {
        AqueousEquilibrium {
            name: None,
            aerosol_phase: String::new(),
            aerosol_phase_water: String::new(),
            reactants: Vec::new(),
            products: Vec::new(),
            a: 1.0,
            c: 0.0,
            k_reverse: 0.0,
            unknown_properties: PropertyMap::new(),
        }
    }
}

/// Attaches a scaling factor to a single aerosol-phase reference; has no
/// reactant or product lists at all.
#[derive(Debug, Clone, PartialEq)]
pub struct WetDeposition {
    pub scaling_factor: f64,
    pub name: Option<String>,
    pub aerosol_phase: String,
    pub unknown_properties: PropertyMap,
}

impl Default for WetDeposition {
    fn default() -> Self {
        WetDeposition {
            scaling_factor: 1.0,
            name: None,
            aerosol_phase: String::new(),
            unknown_properties: PropertyMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HenrysLaw {
    pub name: Option<String>,
    pub gas_phase: String,
    pub gas_phase_species: ReactionComponent,
    pub aerosol_phase: String,
    pub aerosol_phase_species: ReactionComponent,
    pub aerosol_phase_water: String,
    pub unknown_properties: PropertyMap,
}

impl Default for HenrysLaw {
    fn default() -> Self {
        HenrysLaw {
            name: None,
            gas_phase: String::new(),
            gas_phase_species: ReactionComponent::new(""),
            aerosol_phase: String::new(),
            aerosol_phase_species: ReactionComponent::new(""),
            aerosol_phase_water: String::new(),
            unknown_properties: PropertyMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimpolPhaseTransfer {
    pub name: Option<String>,
    pub gas_phase: String,
    pub gas_phase_species: ReactionComponent,
    pub aerosol_phase: String,
    pub aerosol_phase_species: ReactionComponent,
    /// The four SIMPOL parameters
    pub b: [f64; 4],
    pub unknown_properties: PropertyMap,
}

impl Default for SimpolPhaseTransfer {
    fn default() -> Self {
        SimpolPhaseTransfer {
            name: None,
            gas_phase: String::new(),
            gas_phase_species: ReactionComponent::new(""),
            aerosol_phase: String::new(),
            aerosol_phase_species: ReactionComponent::new(""),
            b: [0.0; 4],
            unknown_properties: PropertyMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserDefined {
    pub scaling_factor: f64,
    pub reactants: Vec<ReactionComponent>,
    pub products: Vec<ReactionComponent>,
    pub name: Option<String>,
    pub gas_phase: String,
    pub unknown_properties: PropertyMap,
}

impl Default for UserDefined {
    fn default() -> Self {
        UserDefined {
            scaling_factor: 1.0,
            reactants: Vec::new(),
            products: Vec::new(),
            name: None,
            gas_phase: String::new(),
            unknown_properties: PropertyMap::new(),
        }
    }
}

/// The discriminant tags of the supported rate constant forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReactionType {
    Arrhenius,
    CondensedPhaseArrhenius,
    Troe,
    Branched,
    Tunneling,
    Surface,
    Photolysis,
    CondensedPhasePhotolysis,
    Emission,
    FirstOrderLoss,
    AqueousEquilibrium,
    WetDeposition,
    HenrysLaw,
    SimpolPhaseTransfer,
    UserDefined,
}

impl ReactionType {
    pub const ALL: [ReactionType; 15] = [
        ReactionType::Arrhenius,
        ReactionType::CondensedPhaseArrhenius,
        ReactionType::Troe,
        ReactionType::Branched,
        ReactionType::Tunneling,
        ReactionType::Surface,
        ReactionType::Photolysis,
        ReactionType::CondensedPhasePhotolysis,
        ReactionType::Emission,
        ReactionType::FirstOrderLoss,
        ReactionType::AqueousEquilibrium,
        ReactionType::WetDeposition,
        ReactionType::HenrysLaw,
        ReactionType::SimpolPhaseTransfer,
        ReactionType::UserDefined,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            ReactionType::Arrhenius => "ARRHENIUS",
            ReactionType::CondensedPhaseArrhenius => "CONDENSED_PHASE_ARRHENIUS",
            ReactionType::Troe => "TROE",
            ReactionType::Branched => "BRANCHED_NO_RO2",
            ReactionType::Tunneling => "TUNNELING",
            ReactionType::Surface => "SURFACE",
            ReactionType::Photolysis => "PHOTOLYSIS",
            ReactionType::CondensedPhasePhotolysis => "CONDENSED_PHASE_PHOTOLYSIS",
            ReactionType::Emission => "EMISSION",
            ReactionType::FirstOrderLoss => "FIRST_ORDER_LOSS",
            ReactionType::AqueousEquilibrium => "AQUEOUS_EQUILIBRIUM",
            ReactionType::WetDeposition => "WET_DEPOSITION",
            ReactionType::HenrysLaw => "HL_PHASE_TRANSFER",
            ReactionType::SimpolPhaseTransfer => "SIMPOL_PHASE_TRANSFER",
            ReactionType::UserDefined => "USER_DEFINED",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        ReactionType::ALL.into_iter().find(|kind| kind.tag() == tag)
    }
}

impl fmt::Display for ReactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One reaction entry, tagged by its rate constant form.
#[derive(Debug, Clone, PartialEq)]
pub enum Reaction {
    Arrhenius(Arrhenius),
    CondensedPhaseArrhenius(CondensedPhaseArrhenius),
    Troe(Troe),
    Branched(Branched),
    Tunneling(Tunneling),
    Surface(Surface),
    Photolysis(Photolysis),
    CondensedPhasePhotolysis(CondensedPhasePhotolysis),
    Emission(Emission),
    FirstOrderLoss(FirstOrderLoss),
    AqueousEquilibrium(AqueousEquilibrium),
    WetDeposition(WetDeposition),
    HenrysLaw(HenrysLaw),
    SimpolPhaseTransfer(SimpolPhaseTransfer),
    UserDefined(UserDefined),
}

impl Reaction {
    pub fn reaction_type(&self) -> ReactionType {
        match self {
            Reaction::Arrhenius(_) => ReactionType::Arrhenius,
            Reaction::CondensedPhaseArrhenius(_) => ReactionType::CondensedPhaseArrhenius,
            Reaction::Troe(_) => ReactionType::Troe,
            Reaction::Branched(_) => ReactionType::Branched,
            Reaction::Tunneling(_) => ReactionType::Tunneling,
            Reaction::Surface(_) => ReactionType::Surface,
            Reaction::Photolysis(_) => ReactionType::Photolysis,
            Reaction::CondensedPhasePhotolysis(_) => ReactionType::CondensedPhasePhotolysis,
            Reaction::Emission(_) => ReactionType::Emission,
            Reaction::FirstOrderLoss(_) => ReactionType::FirstOrderLoss,
            Reaction::AqueousEquilibrium(_) => ReactionType::AqueousEquilibrium,
            Reaction::WetDeposition(_) => ReactionType::WetDeposition,
            Reaction::HenrysLaw(_) => ReactionType::HenrysLaw,
            Reaction::SimpolPhaseTransfer(_) => ReactionType::SimpolPhaseTransfer,
            Reaction::UserDefined(_) => ReactionType::UserDefined,
        }
    }

    pub fn name(&self) -> Option<&str> {
        let name = match self {
            Reaction::Arrhenius(r) => &r.name,
            Reaction::CondensedPhaseArrhenius(r) => &r.name,
            Reaction::Troe(r) => &r.name,
            Reaction::Branched(r) => &r.name,
            Reaction::Tunneling(r) => &r.name,
            Reaction::Surface(r) => &r.name,
            Reaction::Photolysis(r) => &r.name,
            Reaction::CondensedPhasePhotolysis(r) => &r.name,
            Reaction::Emission(r) => &r.name,
            Reaction::FirstOrderLoss(r) => &r.name,
            Reaction::AqueousEquilibrium(r) => &r.name,
            Reaction::WetDeposition(r) => &r.name,
            Reaction::HenrysLaw(r) => &r.name,
            Reaction::SimpolPhaseTransfer(r) => &r.name,
            Reaction::UserDefined(r) => &r.name,
        };
        name.as_deref()
    }

    /// Collects every name this reaction requires from the species/phase
    /// namespace, so that one routine can resolve references for all variants.
    pub(crate) fn reference_set(&self) -> ReferenceSet<'_> {
        let mut refs = ReferenceSet::default();
        match self {
            Reaction::Arrhenius(r) => {
                refs.add_components(&r.reactants);
                refs.add_components(&r.products);
                refs.add_phase(&r.gas_phase);
            }
            Reaction::CondensedPhaseArrhenius(r) => {
                refs.add_components(&r.reactants);
                refs.add_components(&r.products);
                refs.add_species(&r.aerosol_phase_water);
                refs.add_phase(&r.aerosol_phase);
                refs.require_members_of(&r.aerosol_phase);
            }
            Reaction::Troe(r) => {
                refs.add_components(&r.reactants);
                refs.add_components(&r.products);
                refs.add_phase(&r.gas_phase);
            }
            Reaction::Branched(r) => {
                refs.add_components(&r.reactants);
                refs.add_components(&r.nitrate_products);
                refs.add_components(&r.alkoxy_products);
                refs.add_phase(&r.gas_phase);
            }
            Reaction::Tunneling(r) => {
                refs.add_components(&r.reactants);
                refs.add_components(&r.products);
                refs.add_phase(&r.gas_phase);
            }
            Reaction::Surface(r) => {
                refs.add_species(&r.gas_phase_species.species_name);
                refs.add_components(&r.gas_phase_products);
                refs.add_phase(&r.gas_phase);
                refs.add_phase(&r.aerosol_phase);
            }
            Reaction::Photolysis(r) => {
                refs.add_components(&r.reactants);
                refs.add_components(&r.products);
                refs.add_phase(&r.gas_phase);
            }
            Reaction::CondensedPhasePhotolysis(r) => {
                refs.add_components(&r.reactants);
                refs.add_components(&r.products);
                refs.add_species(&r.aerosol_phase_water);
                refs.add_phase(&r.aerosol_phase);
                refs.require_members_of(&r.aerosol_phase);
            }
            Reaction::Emission(r) => {
                refs.add_components(&r.products);
                refs.add_phase(&r.gas_phase);
            }
            Reaction::FirstOrderLoss(r) => {
                refs.add_components(&r.reactants);
                refs.add_phase(&r.gas_phase);
            }
            Reaction::AqueousEquilibrium(r) => {
                refs.add_components(&r.reactants);
                refs.add_components(&r.products);
                refs.add_species(&r.aerosol_phase_water);
                refs.add_phase(&r.aerosol_phase);
                refs.require_members_of(&r.aerosol_phase);
            }
            Reaction::WetDeposition(r) => {
                refs.add_phase(&r.aerosol_phase);
            }
            Reaction::HenrysLaw(r) => {
                refs.add_species(&r.gas_phase_species.species_name);
                refs.add_species(&r.aerosol_phase_species.species_name);
                refs.add_species(&r.aerosol_phase_water);
                refs.add_phase(&r.gas_phase);
                refs.add_phase(&r.aerosol_phase);
                refs.add_member(&r.aerosol_phase, &r.aerosol_phase_species.species_name);
                refs.add_member(&r.aerosol_phase, &r.aerosol_phase_water);
            }
            Reaction::SimpolPhaseTransfer(r) => {
                refs.add_species(&r.gas_phase_species.species_name);
                refs.add_species(&r.aerosol_phase_species.species_name);
                refs.add_phase(&r.gas_phase);
                refs.add_phase(&r.aerosol_phase);
                refs.add_member(&r.gas_phase, &r.gas_phase_species.species_name);
                refs.add_member(&r.aerosol_phase, &r.aerosol_phase_species.species_name);
            }
            Reaction::UserDefined(r) => {
                refs.add_components(&r.reactants);
                refs.add_components(&r.products);
                refs.add_phase(&r.gas_phase);
            }
        }
        refs
    }
}

/// The names a single reaction draws from the shared namespace: species that
/// must exist, phases that must exist, and (phase, species) pairs where the
/// species must additionally be listed in that phase.
#[derive(Debug, Default)]
pub(crate) struct ReferenceSet<'a> {
    pub species: Vec<&'a str>,
    pub phases: Vec<&'a str>,
    pub memberships: Vec<(&'a str, &'a str)>,
}

impl<'a> ReferenceSet<'a> {
    fn add_species(&mut self, name: &'a str) {
        self.species.push(name);
    }

    fn add_components(&mut self, components: &'a [ReactionComponent]) {
        for component in components {
            self.add_species(&component.species_name);
        }
    }

    fn add_phase(&mut self, name: &'a str) {
        self.phases.push(name);
    }

    fn add_member(&mut self, phase: &'a str, species: &'a str) {
        self.memberships.push((phase, species));
    }

    /// Every species recorded so far must also be a member of `phase`. Used by
    /// the condensed-phase variants, where the whole reaction happens inside
    /// one aerosol phase.
    fn require_members_of(&mut self, phase: &'a str) {
        for name in &self.species {
            self.memberships.push((phase, *name));
        }
    }
}

/// All reactions of a mechanism, in document order, with typed access to each
/// rate constant form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Reactions {
    entries: Vec<Reaction>,
}

macro_rules! kind_accessor {
    ($fn_name:ident, $variant:ident, $ty:ty) => {
        pub fn $fn_name(&self) -> impl Iterator<Item = &$ty> {
            self.entries.iter().filter_map(|reaction| match reaction {
                Reaction::$variant(inner) => Some(inner),
                _ => None,
            })
        }
    };
}

impl Reactions {
    pub fn push(&mut self, reaction: Reaction) {
        self.entries.push(reaction);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All reactions in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, Reaction> {
        self.entries.iter()
    }

    pub fn count_of(&self, kind: ReactionType) -> usize {
        self.entries
            .iter()
            .filter(|reaction| reaction.reaction_type() == kind)
            .count()
    }

    kind_accessor!(arrhenius, Arrhenius, Arrhenius);
    kind_accessor!(
        condensed_phase_arrhenius,
        CondensedPhaseArrhenius,
        CondensedPhaseArrhenius
    );
    kind_accessor!(troe, Troe, Troe);
    kind_accessor!(branched, Branched, Branched);
    kind_accessor!(tunneling, Tunneling, Tunneling);
    kind_accessor!(surface, Surface, Surface);
    kind_accessor!(photolysis, Photolysis, Photolysis);
    kind_accessor!(
        condensed_phase_photolysis,
        CondensedPhasePhotolysis,
        CondensedPhasePhotolysis
    );
    kind_accessor!(emission, Emission, Emission);
    kind_accessor!(first_order_loss, FirstOrderLoss, FirstOrderLoss);
    kind_accessor!(aqueous_equilibrium, AqueousEquilibrium, AqueousEquilibrium);
    kind_accessor!(wet_deposition, WetDeposition, WetDeposition);
    kind_accessor!(henrys_law, HenrysLaw, HenrysLaw);
    kind_accessor!(
        simpol_phase_transfer,
        SimpolPhaseTransfer,
        SimpolPhaseTransfer
    );
    kind_accessor!(user_defined, UserDefined, UserDefined);
}

impl<'a> IntoIterator for &'a Reactions {
    type Item = &'a Reaction;
    type IntoIter = std::slice::Iter<'a, Reaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<Reaction> for Reactions {
    fn from_iter<T: IntoIterator<Item = Reaction>>(iter: T) -> Self {
        Reactions {
            entries: iter.into_iter().collect(),
        }
    }
}

/// The complete, validated description of one configuration document.
/// Immutable once constructed; safe to share read-only across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct Mechanism {
    pub name: String,
    pub species: Vec<Species>,
    pub phases: Vec<Phase>,
    pub reactions: Reactions,
    pub version: Version,
    pub unknown_properties: PropertyMap,
}

impl Mechanism {
    pub fn find_species(&self, name: &str) -> Option<&Species> {
        self.species.iter().find(|species| species.name == name)
    }

    pub fn find_phase(&self, name: &str) -> Option<&Phase> {
        self.phases.iter().find(|phase| phase.name == name)
    }
}
