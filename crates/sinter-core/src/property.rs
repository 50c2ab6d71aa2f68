//! Property taxonomies: per-phase curves and per-material scalars.

use std::fmt;

/// A property evaluated per phase from a temperature-dependent curve.
///
/// The thermal block (`Density` through `RadiationHeatTransferCoef`) is
/// blended across phase fractions each update and written to the
/// per-unit property-value array. The radiation heat transfer
/// coefficient is derived from the blended emissivity, never parsed
/// from a curve.
///
/// The mechanical block (`ElasticModulus`, `PoissonRatio`) is stored
/// for the solid phase only and treated as temperature-independent:
/// only the first table value (or the constant polynomial coefficient)
/// is retained.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StateProperty {
    /// Mass density.
    Density,
    /// Specific heat capacity. Receives the latent-heat correction in
    /// the mushy zone.
    SpecificHeat,
    /// Thermal conductivity.
    ThermalConductivity,
    /// Surface emissivity.
    Emissivity,
    /// Linearized radiative coefficient, derived each update as
    /// `emissivity * sigma * (T + T_inf) * (T^2 + T_inf^2)`.
    RadiationHeatTransferCoef,
    /// Young's modulus of the solid.
    ElasticModulus,
    /// Poisson ratio of the solid.
    PoissonRatio,
}

impl StateProperty {
    /// Number of thermal properties (the per-unit property-value row width).
    pub const THERMAL_COUNT: usize = 5;

    /// Number of mechanical properties.
    pub const MECHANICAL_COUNT: usize = 2;

    /// All properties, thermal block first.
    pub const ALL: [StateProperty; Self::THERMAL_COUNT + Self::MECHANICAL_COUNT] = [
        Self::Density,
        Self::SpecificHeat,
        Self::ThermalConductivity,
        Self::Emissivity,
        Self::RadiationHeatTransferCoef,
        Self::ElasticModulus,
        Self::PoissonRatio,
    ];

    /// First thermal property needed for boundary-condition evaluation.
    ///
    /// The boundary-only update skips density, specific heat, and
    /// conductivity; only emissivity and the radiative coefficient feed
    /// the boundary terms.
    pub const BOUNDARY_START: usize = 3;

    /// Storage index within the combined property ordering.
    pub fn index(self) -> usize {
        match self {
            Self::Density => 0,
            Self::SpecificHeat => 1,
            Self::ThermalConductivity => 2,
            Self::Emissivity => 3,
            Self::RadiationHeatTransferCoef => 4,
            Self::ElasticModulus => 5,
            Self::PoissonRatio => 6,
        }
    }

    /// Whether this property belongs to the thermal block.
    pub fn is_thermal(self) -> bool {
        self.index() < Self::THERMAL_COUNT
    }

    /// Index within the mechanical store, if mechanical.
    pub fn mechanical_index(self) -> Option<usize> {
        self.index().checked_sub(Self::THERMAL_COUNT)
    }

    /// Lower-case property name as used in material configuration blocks.
    pub fn name(self) -> &'static str {
        match self {
            Self::Density => "density",
            Self::SpecificHeat => "specific_heat",
            Self::ThermalConductivity => "thermal_conductivity",
            Self::Emissivity => "emissivity",
            Self::RadiationHeatTransferCoef => "radiation_heat_transfer_coef",
            Self::ElasticModulus => "elastic_modulus",
            Self::PoissonRatio => "poisson_ratio",
        }
    }
}

impl fmt::Display for StateProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A phase-independent scalar property of a material.
///
/// Stored once per material as a plain number. Entries absent from the
/// configuration default to `f64::MAX`, which disables the dependent
/// transition logic (an unset solidus/liquidus means the liquid ratio
/// is always 0).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarProperty {
    /// Temperature above which the material is fully liquid.
    Liquidus,
    /// Temperature below which the material is fully solid.
    Solidus,
    /// Latent heat of fusion, spread over the mushy interval.
    LatentHeat,
    /// Far-field temperature for the radiative boundary linearization.
    RadiationTemperatureInfty,
    /// Far-field temperature for the convective boundary condition.
    ConvectionTemperatureInfty,
}

impl ScalarProperty {
    /// Number of scalar properties.
    pub const COUNT: usize = 5;

    /// All scalar properties in storage order.
    pub const ALL: [ScalarProperty; Self::COUNT] = [
        Self::Liquidus,
        Self::Solidus,
        Self::LatentHeat,
        Self::RadiationTemperatureInfty,
        Self::ConvectionTemperatureInfty,
    ];

    /// Storage index within per-material scalar rows.
    pub fn index(self) -> usize {
        match self {
            Self::Liquidus => 0,
            Self::Solidus => 1,
            Self::LatentHeat => 2,
            Self::RadiationTemperatureInfty => 3,
            Self::ConvectionTemperatureInfty => 4,
        }
    }

    /// Lower-case property name as used in material configuration blocks.
    pub fn name(self) -> &'static str {
        match self {
            Self::Liquidus => "liquidus",
            Self::Solidus => "solidus",
            Self::LatentHeat => "latent_heat",
            Self::RadiationTemperatureInfty => "radiation_temperature_infty",
            Self::ConvectionTemperatureInfty => "convection_temperature_infty",
        }
    }
}

impl fmt::Display for ScalarProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
