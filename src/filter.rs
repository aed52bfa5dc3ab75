//! Display toggles for hydrogens, water and side chains.

use crate::options::DisplayOptions;
use crate::structure::{is_backbone_atom, Atom, Chain, Protein, Residue};

/// Which atoms and bonds survive the display toggles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct DisplayFilter {
    /// Keep atoms whose name starts with `H`.
    pub show_hydrogens: bool,
    /// Keep water residues.
    pub show_water: bool,
    /// Keep non-backbone atoms of non-water residues.
    pub show_side_chains: bool,
}

/// A retained atom together with where it came from.
#[derive(Debug, Clone, Copy)]
pub struct AtomRef<'a> {
    /// Index of the owning chain.
    pub chain_index: usize,
    /// The owning chain.
    pub chain: &'a Chain,
    /// Index of the residue within its chain.
    pub residue_index: usize,
    /// The owning residue.
    pub residue: &'a Residue,
    /// Atom name within the residue.
    pub name: &'a str,
    /// The atom itself.
    pub atom: &'a Atom,
}

/// A retained intra-residue bond with both endpoints resolved.
#[derive(Debug, Clone, Copy)]
pub struct BondRef<'a> {
    /// The owning chain.
    pub chain: &'a Chain,
    /// The owning residue.
    pub residue: &'a Residue,
    /// First endpoint.
    pub start: &'a Atom,
    /// Second endpoint.
    pub end: &'a Atom,
}

impl DisplayFilter {
    /// Filter matching the toggles in `display`.
    #[must_use]
    pub fn from_display(display: &DisplayOptions) -> Self {
        Self {
            show_hydrogens: display.show_hydrogens,
            show_water: display.show_water,
            show_side_chains: display.show_side_chains,
        }
    }

    /// Filter that keeps everything.
    #[must_use]
    pub fn show_all() -> Self {
        Self {
            show_hydrogens: true,
            show_water: true,
            show_side_chains: true,
        }
    }

    fn hides_hydrogen(&self, atom_name: &str) -> bool {
        !self.show_hydrogens && atom_name.starts_with('H')
    }

    fn hides_residue(&self, residue: &Residue) -> bool {
        !self.show_water && residue.is_water()
    }

    /// Whether the atom named `atom_name` in `residue` is drawn.
    ///
    /// Rules apply in order: hydrogens, then water, then side chains.
    #[must_use]
    pub fn includes_atom(&self, residue: &Residue, atom_name: &str) -> bool {
        if self.hides_hydrogen(atom_name) || self.hides_residue(residue) {
            return false;
        }
        self.show_side_chains
            || is_backbone_atom(atom_name)
            || residue.is_water()
    }

    /// Whether the bond `a`–`b` is drawn.
    ///
    /// A bond goes when either end is a hidden hydrogen, or when side chains
    /// are hidden and neither end is a backbone atom. The water toggle does
    /// not apply to bonds.
    #[must_use]
    pub fn includes_bond(&self, a: &str, b: &str) -> bool {
        if self.hides_hydrogen(a) || self.hides_hydrogen(b) {
            return false;
        }
        self.show_side_chains || is_backbone_atom(a) || is_backbone_atom(b)
    }

    /// Every retained atom of `protein`, in chain/residue/atom order.
    pub fn atoms<'a>(
        &'a self,
        protein: &'a Protein,
    ) -> impl Iterator<Item = AtomRef<'a>> + 'a {
        protein.chains.iter().enumerate().flat_map(
            move |(chain_index, chain)| {
                chain.residues.iter().enumerate().flat_map(
                    move |(residue_index, residue)| {
                        residue
                            .atoms
                            .iter()
                            .filter(move |(name, _)| {
                                self.includes_atom(residue, name)
                            })
                            .map(move |(name, atom)| AtomRef {
                                chain_index,
                                chain,
                                residue_index,
                                residue,
                                name,
                                atom,
                            })
                    },
                )
            },
        )
    }

    /// Every retained bond of `protein` whose endpoints both resolve.
    pub fn bonds<'a>(
        &'a self,
        protein: &'a Protein,
    ) -> impl Iterator<Item = BondRef<'a>> + 'a {
        protein.residues().flat_map(move |(chain, residue)| {
            residue
                .resolved_bonds()
                .filter(move |((a, _), (b, _))| {
                    self.includes_bond(a, b)
                })
                .map(move |((_, start), (_, end))| BondRef {
                    chain,
                    residue,
                    start,
                    end,
                })
        })
    }

    /// Copy of `protein` holding only what this filter keeps.
    ///
    /// Residues survive even when all their atoms are dropped, so chain
    /// order and secondary structure stay intact. Applying the same filter
    /// twice gives the same result as applying it once.
    #[must_use]
    pub fn apply(&self, protein: &Protein) -> Protein {
        let chains = protein
            .chains
            .iter()
            .map(|chain| {
                Chain::new(
                    &chain.id,
                    chain.residues.iter().map(|r| self.apply_residue(r)).collect(),
                )
            })
            .collect();
        Protein {
            chains,
            ..protein.clone()
        }
    }

    fn apply_residue(&self, residue: &Residue) -> Residue {
        let mut kept = Residue::new(&residue.name, &residue.ss);
        kept.atoms = residue
            .atoms
            .iter()
            .filter(|(name, _)| self.includes_atom(residue, name))
            .map(|(name, atom)| (name, atom.clone()))
            .collect();
        kept.bonds = residue
            .bonds
            .iter()
            .filter(|(a, b)| self.includes_bond(a, b))
            .cloned()
            .collect();
        kept
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    fn atom(element: &str) -> Atom {
        Atom::new(element, Vec3::ZERO)
    }

    fn alanine() -> Residue {
        Residue::new("ALA", "H")
            .with_atom("N", atom("N"))
            .with_atom("CA", atom("C"))
            .with_atom("C", atom("C"))
            .with_atom("O", atom("O"))
            .with_atom("CB", atom("C"))
            .with_atom("HA", atom("H"))
            .with_bond("N", "CA")
            .with_bond("CA", "C")
            .with_bond("CA", "CB")
            .with_bond("CA", "HA")
            .with_bond("CB", "HB1")
    }

    fn water() -> Residue {
        Residue::new("HOH", "")
            .with_atom("O", atom("O"))
            .with_atom("H1", atom("H"))
            .with_bond("O", "H1")
    }

    fn protein() -> Protein {
        Protein {
            chains: vec![Chain::new("A", vec![alanine(), water()])],
            ..Protein::default()
        }
    }

    fn kept_names(filter: &DisplayFilter, p: &Protein) -> Vec<String> {
        filter
            .atoms(p)
            .map(|a| format!("{}:{}", a.residue.name, a.name))
            .collect()
    }

    #[test]
    fn hidden_hydrogen_wins_over_other_toggles() {
        let residue = alanine();
        for water in [false, true] {
            for side in [false, true] {
                let filter = DisplayFilter {
                    show_hydrogens: false,
                    show_water: water,
                    show_side_chains: side,
                };
                assert!(!filter.includes_atom(&residue, "HA"));
            }
        }
    }

    #[test]
    fn default_filter_keeps_backbone_only() {
        let p = protein();
        assert_eq!(
            kept_names(&DisplayFilter::default(), &p),
            ["ALA:N", "ALA:CA", "ALA:C", "ALA:O"]
        );
    }

    #[test]
    fn water_is_kept_without_side_chains() {
        let filter = DisplayFilter {
            show_water: true,
            ..DisplayFilter::default()
        };
        let names = kept_names(&filter, &protein());
        assert!(names.contains(&"HOH:O".to_owned()));
        assert!(!names.contains(&"HOH:H1".to_owned()));
        assert!(!names.contains(&"ALA:CB".to_owned()));
    }

    #[test]
    fn show_all_keeps_every_atom() {
        assert_eq!(kept_names(&DisplayFilter::show_all(), &protein()).len(), 8);
    }

    #[test]
    fn bond_rules() {
        let filter = DisplayFilter::default();
        assert!(filter.includes_bond("N", "CA"));
        // One backbone end is enough.
        assert!(filter.includes_bond("CA", "CB"));
        assert!(!filter.includes_bond("CA", "HA"));
        assert!(!filter.includes_bond("CB", "CG"));

        let with_sides = DisplayFilter {
            show_side_chains: true,
            ..DisplayFilter::default()
        };
        assert!(with_sides.includes_bond("CB", "CG"));
        // Hidden hydrogen end.
        assert!(!with_sides.includes_bond("O", "H1"));
    }

    #[test]
    fn water_toggle_leaves_bonds_alone() {
        let hydrogens_no_water = DisplayFilter {
            show_hydrogens: true,
            show_water: false,
            show_side_chains: true,
        };
        assert!(!hydrogens_no_water.includes_atom(&water(), "O"));
        assert!(hydrogens_no_water.includes_bond("O", "H1"));
    }

    #[test]
    fn bonds_skip_unresolved_endpoints() {
        let p = protein();
        let all = DisplayFilter::show_all();
        // CB–HB1 has no HB1 atom; the other four alanine bonds plus water.
        assert_eq!(all.bonds(&p).count(), 5);
        assert_eq!(DisplayFilter::default().bonds(&p).count(), 3);
    }

    #[test]
    fn apply_is_idempotent() {
        let p = protein();
        for bits in 0..8u8 {
            let filter = DisplayFilter {
                show_hydrogens: bits & 1 != 0,
                show_water: bits & 2 != 0,
                show_side_chains: bits & 4 != 0,
            };
            let once = filter.apply(&p);
            assert_eq!(filter.apply(&once), once, "toggles {bits:03b}");
            assert_eq!(once.chains[0].residues.len(), 2);
        }
    }
}
