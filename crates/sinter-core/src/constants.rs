//! Physical constants.

/// Stefan–Boltzmann constant in W m^-2 K^-4 (2018 CODATA).
pub const STEFAN_BOLTZMANN: f64 = 5.670374419e-8;
