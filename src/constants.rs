/// Boltzmann constant [J K-1], used to derive the Arrhenius `C` term from an
/// activation energy.
pub const BOLTZMANN: f64 = 1.380649e-23;
