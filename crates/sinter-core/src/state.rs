//! The material phase taxonomy.

use std::fmt;

/// Phase of the material occupying (part of) a spatial unit.
///
/// Every unit carries one fraction per phase, summing to 1. Transitions
/// are routed through the liquid phase: powder and solid melt into
/// liquid, liquid solidifies into solid. Powder is never created, so
/// its fraction is non-increasing over the life of a unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MaterialState {
    /// Consolidated solid material.
    Solid,
    /// Molten material.
    Liquid,
    /// Unconsolidated feedstock powder.
    Powder,
}

impl MaterialState {
    /// Number of phases.
    pub const COUNT: usize = 3;

    /// All phases in storage order.
    pub const ALL: [MaterialState; Self::COUNT] =
        [Self::Solid, Self::Liquid, Self::Powder];

    /// Storage index of this phase within per-unit fraction rows.
    pub fn index(self) -> usize {
        match self {
            Self::Solid => 0,
            Self::Liquid => 1,
            Self::Powder => 2,
        }
    }

    /// Phase for a storage index, if in range.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Lower-case phase name as used in material configuration blocks.
    pub fn name(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Liquid => "liquid",
            Self::Powder => "powder",
        }
    }
}

impl fmt::Display for MaterialState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn index_round_trip() {
        for state in MaterialState::ALL {
            assert_eq!(MaterialState::from_index(state.index()), Some(state));
        }
        assert_eq!(MaterialState::from_index(MaterialState::COUNT), None);
    }

    #[test]
    fn names_are_distinct() {
        assert_eq!(MaterialState::Solid.name(), "solid");
        assert_eq!(MaterialState::Liquid.name(), "liquid");
        assert_eq!(MaterialState::Powder.name(), "powder");
    }

    proptest! {
        #[test]
        fn from_index_is_total(i in 0usize..100) {
            match MaterialState::from_index(i) {
                Some(state) => prop_assert_eq!(state.index(), i),
                None => prop_assert!(i >= MaterialState::COUNT),
            }
        }
    }
}
