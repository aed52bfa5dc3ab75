//! Interactive small-molecule construction.
//!
//! [`MoleculeBuilder`] holds the molecule being assembled from the periodic
//! table. [`molecule_from_formula`] turns a typed formula into a molecule,
//! preferring a hand-placed preset and otherwise laying atoms out on a line.

use std::sync::LazyLock;

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regex::Regex;

use crate::error::MolscopeError;
use crate::store::elements::{element, Element};
use crate::store::presets::preset;
use crate::structure::{Bond, Molecule, MoleculeAtom};

/// Name given to molecules assembled atom by atom.
pub const CUSTOM_MOLECULE_NAME: &str = "Custom Molecule";

/// Preset shown when the builder is empty.
pub const DEFAULT_FORMULA: &str = "H2O";

/// Spacing between atoms of a formula-generated molecule.
pub const LINEAR_SPACING: f32 = 1.5;

/// Most atoms a formula-generated molecule may hold.
pub const MAX_FORMULA_ATOMS: usize = 1000;

static FORMULA_TOKEN: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"([A-Z][a-z]*)(\d*)"));

/// Element counts in a formula, in order of first appearance.
///
/// Tokens are an upper-case letter, optional lower-case letters and an
/// optional count (default 1). Repeated elements accumulate. Symbols not in
/// the periodic table are logged and skipped, as is anything that is not a
/// token at all. Counts saturate instead of overflowing.
#[must_use]
pub fn parse_formula(formula: &str) -> Vec<(&'static str, usize)> {
    let token = match FORMULA_TOKEN.as_ref() {
        Ok(token) => token,
        Err(e) => {
            log::error!("formula tokenizer failed to compile: {e}");
            return Vec::new();
        }
    };

    let mut counts: Vec<(&'static str, usize)> = Vec::new();
    for caps in token.captures_iter(formula) {
        let symbol = &caps[1];
        let Some(el) = element(symbol) else {
            log::warn!("unknown element in formula {formula:?}: {symbol}");
            continue;
        };
        let count = match &caps[2] {
            "" => 1,
            digits => match digits.parse::<usize>() {
                Ok(n) => n,
                Err(e) => {
                    log::warn!("bad count {digits:?} for {symbol}: {e}");
                    continue;
                }
            },
        };
        match counts.iter_mut().find(|(s, _)| *s == el.symbol) {
            Some((_, n)) => *n = n.saturating_add(count),
            None => counts.push((el.symbol, count)),
        }
    }
    counts
}

/// Atoms on the X axis, [`LINEAR_SPACING`] apart, each bonded to the one
/// before it. At most [`MAX_FORMULA_ATOMS`] atoms are generated.
#[must_use]
pub fn linear_molecule(counts: &[(&str, usize)]) -> Molecule {
    let requested = counts
        .iter()
        .fold(0_usize, |total, &(_, n)| total.saturating_add(n));
    if requested > MAX_FORMULA_ATOMS {
        log::warn!(
            "formula asks for {requested} atoms, keeping the first \
             {MAX_FORMULA_ATOMS}"
        );
    }
    let atoms: Vec<MoleculeAtom> = counts
        .iter()
        .flat_map(|&(symbol, n)| std::iter::repeat_n(symbol, n))
        .take(MAX_FORMULA_ATOMS)
        .enumerate()
        .map(|(i, symbol)| {
            MoleculeAtom::new(symbol, Vec3::X * (i as f32 * LINEAR_SPACING))
        })
        .collect();
    let bonds = (1..atoms.len()).map(|i| Bond::new(i - 1, i)).collect();
    Molecule {
        name: None,
        formula: None,
        atoms,
        bonds,
    }
}

/// Molecule for a typed formula: the preset when one exists, otherwise a
/// linear chain named after the formula.
#[must_use]
pub fn molecule_from_formula(formula: &str) -> Molecule {
    let formula = formula.trim();
    if let Some(molecule) = preset(formula) {
        return molecule;
    }
    let mut molecule = linear_molecule(&parse_formula(formula));
    molecule.name = Some(formula.to_owned());
    molecule.formula = Some(formula.to_owned());
    log::debug!(
        "generated {} atoms for formula {formula:?}",
        molecule.atoms.len()
    );
    molecule
}

/// Molecule assembled one atom at a time from a selected element.
#[derive(Debug, Clone)]
pub struct MoleculeBuilder {
    selected: Option<&'static Element>,
    molecule: Molecule,
    rng: StdRng,
}

impl Default for MoleculeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MoleculeBuilder {
    /// Empty builder with a randomly seeded placement RNG.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Empty builder with reproducible atom placement.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            selected: None,
            molecule: Molecule::default(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Select the element that [`Self::add_atom`] places.
    pub fn select_element(
        &mut self,
        symbol: &str,
    ) -> Result<&'static Element, MolscopeError> {
        let el = element(symbol.trim())
            .ok_or_else(|| MolscopeError::UnknownElement(symbol.to_owned()))?;
        self.selected = Some(el);
        Ok(el)
    }

    /// Currently selected element.
    #[must_use]
    pub fn selected(&self) -> Option<&'static Element> {
        self.selected
    }

    /// Molecule built so far.
    #[must_use]
    pub fn molecule(&self) -> &Molecule {
        &self.molecule
    }

    /// Append one atom of the selected element and return its index.
    ///
    /// The first atom sits at the origin; each later one lands at a random
    /// point in the [-1, 1] cube and is bonded to the atom added before it.
    pub fn add_atom(&mut self) -> Result<usize, MolscopeError> {
        let el = self.selected.ok_or(MolscopeError::NoElementSelected)?;
        let index = self.molecule.atoms.len();
        let position = if index == 0 {
            Vec3::ZERO
        } else {
            Vec3::new(
                self.rng.random_range(-1.0..=1.0),
                self.rng.random_range(-1.0..=1.0),
                self.rng.random_range(-1.0..=1.0),
            )
        };
        self.molecule.atoms.push(MoleculeAtom::new(el.symbol, position));
        if index > 0 {
            self.molecule.bonds.push(Bond::new(index - 1, index));
        }
        Ok(index)
    }

    /// Drop every atom and bond. The selection is kept.
    pub fn reset(&mut self) {
        self.molecule = Molecule::default();
    }

    /// Replace the molecule with a preset.
    pub fn load_preset(&mut self, formula: &str) -> Result<(), MolscopeError> {
        self.molecule = preset(formula)
            .ok_or_else(|| MolscopeError::UnknownPreset(formula.to_owned()))?;
        Ok(())
    }

    /// Formula of the built molecule from its element counts.
    #[must_use]
    pub fn custom_formula(&self) -> String {
        self.molecule.derived_formula()
    }

    /// The molecule to display: the built atoms as a named custom molecule,
    /// or the default water preset when nothing has been added.
    #[must_use]
    pub fn display_molecule(&self) -> Molecule {
        if self.molecule.is_empty() {
            return molecule_from_formula(DEFAULT_FORMULA);
        }
        Molecule {
            name: Some(CUSTOM_MOLECULE_NAME.to_owned()),
            formula: Some(self.custom_formula()),
            ..self.molecule.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_atom_requires_selection() {
        let mut builder = MoleculeBuilder::with_seed(1);
        assert!(matches!(
            builder.add_atom(),
            Err(MolscopeError::NoElementSelected)
        ));
        assert!(matches!(
            builder.select_element("Xx"),
            Err(MolscopeError::UnknownElement(_))
        ));
        assert!(builder.selected().is_none());
    }

    #[test]
    fn atoms_chain_together() {
        let mut builder = MoleculeBuilder::with_seed(1);
        let _ = builder.select_element("C").unwrap();
        assert_eq!(builder.add_atom().unwrap(), 0);
        let _ = builder.select_element("O").unwrap();
        assert_eq!(builder.add_atom().unwrap(), 1);
        assert_eq!(builder.add_atom().unwrap(), 2);

        let m = builder.molecule();
        assert_eq!(m.atoms[0].position, Vec3::ZERO);
        for atom in &m.atoms[1..] {
            assert!(atom.position.abs().max_element() <= 1.0);
        }
        assert_eq!(m.bonds, [Bond::new(0, 1), Bond::new(1, 2)]);
        assert_eq!(builder.custom_formula(), "CO2");

        let shown = builder.display_molecule();
        assert_eq!(shown.name.as_deref(), Some(CUSTOM_MOLECULE_NAME));
        assert_eq!(shown.formula.as_deref(), Some("CO2"));
    }

    #[test]
    fn reset_and_presets() {
        let mut builder = MoleculeBuilder::with_seed(1);
        builder.load_preset("CH4").unwrap();
        assert_eq!(builder.molecule().atoms.len(), 5);
        assert!(matches!(
            builder.load_preset("XeF4"),
            Err(MolscopeError::UnknownPreset(_))
        ));
        builder.reset();
        assert!(builder.molecule().is_empty());
        assert_eq!(builder.display_molecule().name.as_deref(), Some("Water"));
    }

    #[test]
    fn formula_parsing() {
        assert_eq!(parse_formula("C2H5OH"), [("C", 2), ("H", 6), ("O", 1)]);
        assert_eq!(parse_formula("NaCl"), [("Na", 1), ("Cl", 1)]);
        // Xx is not an element; lower-case noise is not a token.
        assert_eq!(parse_formula("Xx2Fe3abc"), [("Fe", 3)]);
        assert!(parse_formula("").is_empty());
    }

    #[test]
    fn formulas_prefer_presets() {
        let benzene = molecule_from_formula("C6H6");
        assert_eq!(benzene.name.as_deref(), Some("Benzene"));
        assert_eq!(benzene.bonds.len(), 12);

        let salt = molecule_from_formula("NaCl2");
        assert_eq!(salt.name.as_deref(), Some("NaCl2"));
        assert_eq!(salt.atoms.len(), 3);
        assert_eq!(salt.atoms[2].position, Vec3::new(3.0, 0.0, 0.0));
        assert_eq!(salt.bonds, [Bond::new(0, 1), Bond::new(1, 2)]);
    }

    #[test]
    fn huge_counts_saturate_and_are_capped() {
        assert_eq!(
            parse_formula("C18446744073709551615C1"),
            [("C", usize::MAX)]
        );

        let long = molecule_from_formula("C99999999999");
        assert_eq!(long.atoms.len(), MAX_FORMULA_ATOMS);
        assert_eq!(long.bonds.len(), MAX_FORMULA_ATOMS - 1);

        let repeated = molecule_from_formula("C18446744073709551615C1");
        assert_eq!(repeated.atoms.len(), MAX_FORMULA_ATOMS);
    }
}
