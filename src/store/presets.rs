//! Hand-placed small-molecule presets, keyed by formula.

use glam::Vec3;

use crate::structure::{Bond, Molecule, MoleculeAtom};

struct Preset {
    formula: &'static str,
    name: &'static str,
    atoms: &'static [(&'static str, [f32; 3])],
    bonds: &'static [(usize, usize)],
}

const PRESETS: &[Preset] = &[
    Preset {
        formula: "H2O",
        name: "Water",
        atoms: &[
            ("O", [0.0, 0.0, 0.0]),
            ("H", [-0.8, 0.6, 0.0]),
            ("H", [0.8, 0.6, 0.0]),
        ],
        bonds: &[(0, 1), (0, 2)],
    },
    Preset {
        formula: "CO2",
        name: "Carbon Dioxide",
        atoms: &[
            ("C", [0.0, 0.0, 0.0]),
            ("O", [-1.2, 0.0, 0.0]),
            ("O", [1.2, 0.0, 0.0]),
        ],
        bonds: &[(0, 1), (0, 2)],
    },
    Preset {
        formula: "CH4",
        name: "Methane",
        atoms: &[
            ("C", [0.0, 0.0, 0.0]),
            ("H", [0.6, 0.6, 0.6]),
            ("H", [-0.6, -0.6, 0.6]),
            ("H", [0.6, -0.6, -0.6]),
            ("H", [-0.6, 0.6, -0.6]),
        ],
        bonds: &[(0, 1), (0, 2), (0, 3), (0, 4)],
    },
    Preset {
        formula: "NH3",
        name: "Ammonia",
        atoms: &[
            ("N", [0.0, 0.0, 0.0]),
            ("H", [0.8, 0.6, 0.0]),
            ("H", [-0.4, 0.6, 0.7]),
            ("H", [-0.4, 0.6, -0.7]),
        ],
        bonds: &[(0, 1), (0, 2), (0, 3)],
    },
    Preset {
        formula: "C2H5OH",
        name: "Ethanol",
        atoms: &[
            ("C", [0.0, 0.0, 0.0]),
            ("C", [1.2, 0.0, 0.0]),
            ("O", [2.4, 0.0, 0.0]),
            ("H", [-0.4, 0.9, 0.0]),
            ("H", [-0.4, -0.5, 0.9]),
            ("H", [-0.4, -0.5, -0.9]),
            ("H", [1.6, 0.9, 0.0]),
            ("H", [1.6, -0.5, -0.9]),
            ("H", [2.8, 0.9, 0.0]),
        ],
        bonds: &[
            (0, 1),
            (1, 2),
            (0, 3),
            (0, 4),
            (0, 5),
            (1, 6),
            (1, 7),
            (2, 8),
        ],
    },
    Preset {
        formula: "C6H6",
        name: "Benzene",
        atoms: &[
            ("C", [0.0, 0.0, 0.0]),
            ("C", [1.2, 0.0, 0.0]),
            ("C", [1.8, 1.2, 0.0]),
            ("C", [1.2, 2.4, 0.0]),
            ("C", [0.0, 2.4, 0.0]),
            ("C", [-0.6, 1.2, 0.0]),
            ("H", [-0.5, -0.9, 0.0]),
            ("H", [2.1, -0.5, 0.0]),
            ("H", [2.9, 1.2, 0.0]),
            ("H", [1.7, 3.3, 0.0]),
            ("H", [-0.9, 2.9, 0.0]),
            ("H", [-1.7, 1.2, 0.0]),
        ],
        bonds: &[
            // ring
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 4),
            (4, 5),
            (5, 0),
            (0, 6),
            (1, 7),
            (2, 8),
            (3, 9),
            (4, 10),
            (5, 11),
        ],
    },
];

impl Preset {
    fn build(&self) -> Molecule {
        Molecule {
            name: Some(self.name.to_owned()),
            formula: Some(self.formula.to_owned()),
            atoms: self
                .atoms
                .iter()
                .map(|(element, pos)| {
                    MoleculeAtom::new(element, Vec3::from_array(*pos))
                })
                .collect(),
            bonds: self.bonds.iter().map(|&(a, b)| Bond::new(a, b)).collect(),
        }
    }
}

/// Preset formulas with their display names, in menu order.
pub fn preset_names() -> impl Iterator<Item = (&'static str, &'static str)> {
    PRESETS.iter().map(|p| (p.formula, p.name))
}

/// The preset molecule for `formula` (exact match), if any.
#[must_use]
pub fn preset(formula: &str) -> Option<Molecule> {
    PRESETS
        .iter()
        .find(|p| p.formula == formula)
        .map(Preset::build)
}
