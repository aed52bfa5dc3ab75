//! Periodic table used by the molecule builder and molecule views.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::color::Color;

/// Sphere color for elements missing from the table.
pub const FALLBACK_ELEMENT_COLOR: Color = Color::hex(0xFFFFFF);

/// Sphere radius for elements missing from the table.
pub const FALLBACK_ELEMENT_RADIUS: f32 = 0.5;

/// Period value marking the detached lanthanide row.
pub const LANTHANIDE_ROW: u8 = 9;

/// Period value marking the detached actinide row.
pub const ACTINIDE_ROW: u8 = 10;

/// Broad chemical family, used to tint periodic-table cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementCategory {
    /// He, Ne, Ar, ...
    NobleGas,
    /// Li, Na, K, ...
    AlkaliMetal,
    /// Be, Mg, Ca, ...
    AlkalineEarth,
    /// d-block metals.
    TransitionMetal,
    /// Al, Ga, In, ...
    PostTransitionMetal,
    /// B, Si, Ge, ...
    Metalloid,
    /// H, C, N, O, ...
    Nonmetal,
    /// F, Cl, Br, ...
    Halogen,
    /// La through Lu.
    Lanthanide,
    /// Ac through Lr.
    Actinide,
    /// Superheavy elements with unconfirmed chemistry.
    Unknown,
}

impl ElementCategory {
    /// Cell tint for this category.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::NobleGas => Color::hex(0xFFBC42),
            Self::AlkaliMetal => Color::hex(0xEC674E),
            Self::AlkalineEarth => Color::hex(0xD81159),
            Self::TransitionMetal => Color::hex(0x8F2D56),
            Self::PostTransitionMetal => Color::hex(0x58586B),
            Self::Metalloid => Color::hex(0x218380),
            Self::Nonmetal => Color::hex(0x4AABAF),
            Self::Halogen => Color::hex(0x73D2DE),
            Self::Lanthanide => Color::hex(0x9370DB),
            Self::Actinide => Color::hex(0xBA55D3),
            Self::Unknown => Color::hex(0xCCCCCC),
        }
    }
}

/// One periodic-table entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Element {
    /// Atomic number.
    pub number: u8,
    /// Symbol, e.g. `"Cl"`.
    pub symbol: &'static str,
    /// English name.
    pub name: &'static str,
    /// CPK sphere color.
    pub color: Color,
    /// Display radius in Å.
    pub radius: f32,
    /// Chemical family.
    pub category: ElementCategory,
    /// Group (column), 1-18.
    pub group: u8,
    /// Period (row); f-block rows use 9 and 10.
    pub period: u8,
}

impl Element {
    /// Whether the element sits in one of the detached f-block rows.
    #[must_use]
    pub fn is_f_block(&self) -> bool {
        self.period >= LANTHANIDE_ROW
    }
}

#[allow(clippy::too_many_arguments)]
const fn el(
    number: u8,
    symbol: &'static str,
    name: &'static str,
    color: u32,
    radius: f32,
    category: ElementCategory,
    group: u8,
    period: u8,
) -> Element {
    Element {
        number,
        symbol,
        name,
        color: Color::hex(color),
        radius,
        category,
        group,
        period,
    }
}

use ElementCategory::{
    Actinide, AlkaliMetal, AlkalineEarth, Halogen, Lanthanide, Metalloid,
    NobleGas, Nonmetal, PostTransitionMetal, TransitionMetal, Unknown,
};

/// All 118 elements in atomic-number order.
pub static ELEMENTS: [Element; 118] = [
    el(1, "H", "Hydrogen", 0xFFFFFF, 0.31, Nonmetal, 1, 1),
    el(2, "He", "Helium", 0xD9FFFF, 0.28, NobleGas, 18, 1),
    el(3, "Li", "Lithium", 0xCC80FF, 1.28, AlkaliMetal, 1, 2),
    el(4, "Be", "Beryllium", 0xC2FF00, 0.96, AlkalineEarth, 2, 2),
    el(5, "B", "Boron", 0xFFB5B5, 0.84, Metalloid, 13, 2),
    el(6, "C", "Carbon", 0x909090, 0.77, Nonmetal, 14, 2),
    el(7, "N", "Nitrogen", 0x3050F8, 0.71, Nonmetal, 15, 2),
    el(8, "O", "Oxygen", 0xFF0D0D, 0.66, Nonmetal, 16, 2),
    el(9, "F", "Fluorine", 0x90E050, 0.57, Halogen, 17, 2),
    el(10, "Ne", "Neon", 0xB3E3F5, 0.58, NobleGas, 18, 2),
    el(11, "Na", "Sodium", 0xAB5CF2, 1.66, AlkaliMetal, 1, 3),
    el(12, "Mg", "Magnesium", 0x8AFF00, 1.41, AlkalineEarth, 2, 3),
    el(13, "Al", "Aluminium", 0xBFA6A6, 1.21, PostTransitionMetal, 13, 3),
    el(14, "Si", "Silicon", 0xF0C8A0, 1.11, Metalloid, 14, 3),
    el(15, "P", "Phosphorus", 0xFF8000, 1.07, Nonmetal, 15, 3),
    el(16, "S", "Sulfur", 0xFFFF30, 1.05, Nonmetal, 16, 3),
    el(17, "Cl", "Chlorine", 0x1FF01F, 1.02, Halogen, 17, 3),
    el(18, "Ar", "Argon", 0x80D1E3, 1.06, NobleGas, 18, 3),
    el(19, "K", "Potassium", 0x8F40D4, 2.03, AlkaliMetal, 1, 4),
    el(20, "Ca", "Calcium", 0x3DFF00, 1.76, AlkalineEarth, 2, 4),
    el(21, "Sc", "Scandium", 0xE6E6E6, 1.7, TransitionMetal, 3, 4),
    el(22, "Ti", "Titanium", 0xBFC2C7, 1.6, TransitionMetal, 4, 4),
    el(23, "V", "Vanadium", 0xA6A6AB, 1.53, TransitionMetal, 5, 4),
    el(24, "Cr", "Chromium", 0x8A99C7, 1.39, TransitionMetal, 6, 4),
    el(25, "Mn", "Manganese", 0x9C7AC7, 1.39, TransitionMetal, 7, 4),
    el(26, "Fe", "Iron", 0xE06633, 1.32, TransitionMetal, 8, 4),
    el(27, "Co", "Cobalt", 0xF090A0, 1.26, TransitionMetal, 9, 4),
    el(28, "Ni", "Nickel", 0x50D050, 1.24, TransitionMetal, 10, 4),
    el(29, "Cu", "Copper", 0xC88033, 1.32, TransitionMetal, 11, 4),
    el(30, "Zn", "Zinc", 0x7D80B0, 1.22, TransitionMetal, 12, 4),
    el(31, "Ga", "Gallium", 0xC28F8F, 1.22, PostTransitionMetal, 13, 4),
    el(32, "Ge", "Germanium", 0x668F8F, 1.2, Metalloid, 14, 4),
    el(33, "As", "Arsenic", 0xBD80E3, 1.19, Metalloid, 15, 4),
    el(34, "Se", "Selenium", 0xFFA100, 1.2, Nonmetal, 16, 4),
    el(35, "Br", "Bromine", 0xA62929, 1.2, Halogen, 17, 4),
    el(36, "Kr", "Krypton", 0x5CB8D1, 1.16, NobleGas, 18, 4),
    el(37, "Rb", "Rubidium", 0x702EB0, 2.2, AlkaliMetal, 1, 5),
    el(38, "Sr", "Strontium", 0x00FF00, 1.95, AlkalineEarth, 2, 5),
    el(39, "Y", "Yttrium", 0x94FFFF, 1.9, TransitionMetal, 3, 5),
    el(40, "Zr", "Zirconium", 0x94E0E0, 1.75, TransitionMetal, 4, 5),
    el(41, "Nb", "Niobium", 0x73C2C9, 1.64, TransitionMetal, 5, 5),
    el(42, "Mo", "Molybdenum", 0x54B5B5, 1.54, TransitionMetal, 6, 5),
    el(43, "Tc", "Technetium", 0x3B9E9E, 1.47, TransitionMetal, 7, 5),
    el(44, "Ru", "Ruthenium", 0x248F8F, 1.46, TransitionMetal, 8, 5),
    el(45, "Rh", "Rhodium", 0x0A7D8C, 1.42, TransitionMetal, 9, 5),
    el(46, "Pd", "Palladium", 0x006985, 1.39, TransitionMetal, 10, 5),
    el(47, "Ag", "Silver", 0xC0C0C0, 1.45, TransitionMetal, 11, 5),
    el(48, "Cd", "Cadmium", 0xFFD98F, 1.44, TransitionMetal, 12, 5),
    el(49, "In", "Indium", 0xA67573, 1.42, PostTransitionMetal, 13, 5),
    el(50, "Sn", "Tin", 0x668080, 1.39, PostTransitionMetal, 14, 5),
    el(51, "Sb", "Antimony", 0x9E63B5, 1.39, Metalloid, 15, 5),
    el(52, "Te", "Tellurium", 0xD47A00, 1.38, Metalloid, 16, 5),
    el(53, "I", "Iodine", 0x940094, 1.39, Halogen, 17, 5),
    el(54, "Xe", "Xenon", 0x429EB0, 1.4, NobleGas, 18, 5),
    el(55, "Cs", "Caesium", 0x57178F, 2.44, AlkaliMetal, 1, 6),
    el(56, "Ba", "Barium", 0x00C900, 2.15, AlkalineEarth, 2, 6),
    el(57, "La", "Lanthanum", 0x70D4FF, 2.07, Lanthanide, 3, 6),
    el(58, "Ce", "Cerium", 0xFFFFC7, 2.04, Lanthanide, 4, 9),
    el(59, "Pr", "Praseodymium", 0xD9FFC7, 2.03, Lanthanide, 5, 9),
    el(60, "Nd", "Neodymium", 0xC7FFC7, 2.01, Lanthanide, 6, 9),
    el(61, "Pm", "Promethium", 0xA3FFC7, 1.99, Lanthanide, 7, 9),
    el(62, "Sm", "Samarium", 0x8FFFC7, 1.98, Lanthanide, 8, 9),
    el(63, "Eu", "Europium", 0x61FFC7, 1.98, Lanthanide, 9, 9),
    el(64, "Gd", "Gadolinium", 0x45FFC7, 1.96, Lanthanide, 10, 9),
    el(65, "Tb", "Terbium", 0x30FFC7, 1.94, Lanthanide, 11, 9),
    el(66, "Dy", "Dysprosium", 0x1FFFC7, 1.92, Lanthanide, 12, 9),
    el(67, "Ho", "Holmium", 0x00FF9C, 1.92, Lanthanide, 13, 9),
    el(68, "Er", "Erbium", 0x00E675, 1.89, Lanthanide, 14, 9),
    el(69, "Tm", "Thulium", 0x00D452, 1.9, Lanthanide, 15, 9),
    el(70, "Yb", "Ytterbium", 0x00BF38, 1.87, Lanthanide, 16, 9),
    el(71, "Lu", "Lutetium", 0x00AB24, 1.87, Lanthanide, 17, 9),
    el(72, "Hf", "Hafnium", 0x4DC2FF, 1.75, TransitionMetal, 4, 6),
    el(73, "Ta", "Tantalum", 0x4DA6FF, 1.7, TransitionMetal, 5, 6),
    el(74, "W", "Tungsten", 0x2194D6, 1.62, TransitionMetal, 6, 6),
    el(75, "Re", "Rhenium", 0x267DAB, 1.51, TransitionMetal, 7, 6),
    el(76, "Os", "Osmium", 0x266696, 1.44, TransitionMetal, 8, 6),
    el(77, "Ir", "Iridium", 0x175487, 1.41, TransitionMetal, 9, 6),
    el(78, "Pt", "Platinum", 0xD0D0E0, 1.36, TransitionMetal, 10, 6),
    el(79, "Au", "Gold", 0xFFD123, 1.36, TransitionMetal, 11, 6),
    el(80, "Hg", "Mercury", 0xB8B8D0, 1.32, TransitionMetal, 12, 6),
    el(81, "Tl", "Thallium", 0xA6544D, 1.45, PostTransitionMetal, 13, 6),
    el(82, "Pb", "Lead", 0x575961, 1.46, PostTransitionMetal, 14, 6),
    el(83, "Bi", "Bismuth", 0x9E4FB5, 1.48, PostTransitionMetal, 15, 6),
    el(84, "Po", "Polonium", 0xAB5C00, 1.4, PostTransitionMetal, 16, 6),
    el(85, "At", "Astatine", 0x754F45, 1.5, Halogen, 17, 6),
    el(86, "Rn", "Radon", 0x428296, 1.5, NobleGas, 18, 6),
    el(87, "Fr", "Francium", 0x420066, 2.6, AlkaliMetal, 1, 7),
    el(88, "Ra", "Radium", 0x007D00, 2.21, AlkalineEarth, 2, 7),
    el(89, "Ac", "Actinium", 0x70ABFA, 2.15, Actinide, 3, 7),
    el(90, "Th", "Thorium", 0x00BAFF, 2.06, Actinide, 4, 10),
    el(91, "Pa", "Protactinium", 0x00A1FF, 2.0, Actinide, 5, 10),
    el(92, "U", "Uranium", 0x008FFF, 1.96, Actinide, 6, 10),
    el(93, "Np", "Neptunium", 0x0080FF, 1.9, Actinide, 7, 10),
    el(94, "Pu", "Plutonium", 0x006BFF, 1.87, Actinide, 8, 10),
    el(95, "Am", "Americium", 0x545CF2, 1.8, Actinide, 9, 10),
    el(96, "Cm", "Curium", 0x785CE3, 1.69, Actinide, 10, 10),
    el(97, "Bk", "Berkelium", 0x8A4FE3, 1.68, Actinide, 11, 10),
    el(98, "Cf", "Californium", 0xA136D4, 1.68, Actinide, 12, 10),
    el(99, "Es", "Einsteinium", 0xB31FD4, 1.65, Actinide, 13, 10),
    el(100, "Fm", "Fermium", 0xB31FBA, 1.67, Actinide, 14, 10),
    el(101, "Md", "Mendelevium", 0xB30DA6, 1.73, Actinide, 15, 10),
    el(102, "No", "Nobelium", 0xBD0D87, 1.76, Actinide, 16, 10),
    el(103, "Lr", "Lawrencium", 0xC70066, 1.61, Actinide, 17, 10),
    el(104, "Rf", "Rutherfordium", 0xCC0059, 1.57, TransitionMetal, 4, 7),
    el(105, "Db", "Dubnium", 0xD1004F, 1.49, TransitionMetal, 5, 7),
    el(106, "Sg", "Seaborgium", 0xD90045, 1.43, TransitionMetal, 6, 7),
    el(107, "Bh", "Bohrium", 0xE00038, 1.41, TransitionMetal, 7, 7),
    el(108, "Hs", "Hassium", 0xE6002E, 1.34, TransitionMetal, 8, 7),
    el(109, "Mt", "Meitnerium", 0xEB0026, 1.29, Unknown, 9, 7),
    el(110, "Ds", "Darmstadtium", 0xF0001C, 1.28, Unknown, 10, 7),
    el(111, "Rg", "Roentgenium", 0xF50012, 1.21, Unknown, 11, 7),
    el(112, "Cn", "Copernicium", 0xF90009, 1.22, TransitionMetal, 12, 7),
    el(113, "Nh", "Nihonium", 0xFD0000, 1.36, Unknown, 13, 7),
    el(114, "Fl", "Flerovium", 0xFF1493, 1.43, Unknown, 14, 7),
    el(115, "Mc", "Moscovium", 0xFF1493, 1.62, Unknown, 15, 7),
    el(116, "Lv", "Livermorium", 0xFF1493, 1.75, Unknown, 16, 7),
    el(117, "Ts", "Tennessine", 0xFF1493, 1.65, Unknown, 17, 7),
    el(118, "Og", "Oganesson", 0xFF1493, 1.57, Unknown, 18, 7),
];

static BY_SYMBOL: LazyLock<FxHashMap<&'static str, &'static Element>> =
    LazyLock::new(|| ELEMENTS.iter().map(|e| (e.symbol, e)).collect());

/// Element with exactly this symbol (case-sensitive, as in formulas).
#[must_use]
pub fn element(symbol: &str) -> Option<&'static Element> {
    BY_SYMBOL.get(symbol).copied()
}

/// Sphere color for `symbol`, white when unknown.
#[must_use]
pub fn element_sphere_color(symbol: &str) -> Color {
    element(symbol).map_or(FALLBACK_ELEMENT_COLOR, |e| e.color)
}

/// Sphere radius for `symbol`, 0.5 Å when unknown.
#[must_use]
pub fn element_radius(symbol: &str) -> f32 {
    element(symbol).map_or(FALLBACK_ELEMENT_RADIUS, |e| e.radius)
}

/// Main-table elements (periods 1-7), in atomic-number order.
pub fn main_table() -> impl Iterator<Item = &'static Element> {
    ELEMENTS.iter().filter(|e| !e.is_f_block())
}

/// Elements of one detached f-block row.
pub fn f_block_row(period: u8) -> impl Iterator<Item = &'static Element> {
    ELEMENTS.iter().filter(move |e| e.period == period)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atomic_numbers_are_sequential() {
        for (i, e) in ELEMENTS.iter().enumerate() {
            assert_eq!(usize::from(e.number), i + 1, "{}", e.symbol);
        }
    }

    #[test]
    fn symbols_are_unique() {
        assert_eq!(BY_SYMBOL.len(), ELEMENTS.len());
    }

    #[test]
    fn common_elements() {
        let o = element("O").unwrap();
        assert_eq!((o.name, o.number), ("Oxygen", 8));
        assert_eq!(o.color, Color::hex(0xFF0D0D));
        assert_eq!(element_radius("C"), 0.77);
        assert_eq!(element("Fe").unwrap().category, TransitionMetal);
        // Formula symbols are case-sensitive: "CO" is carbon + oxygen.
        assert!(element("co").is_none());
    }

    #[test]
    fn unknown_symbols_use_fallbacks() {
        assert_eq!(element_sphere_color("Xx"), FALLBACK_ELEMENT_COLOR);
        assert_eq!(element_radius("Xx"), FALLBACK_ELEMENT_RADIUS);
    }

    #[test]
    fn f_block_rows_are_detached() {
        let lanthanides: Vec<_> = f_block_row(LANTHANIDE_ROW).collect();
        let actinides: Vec<_> = f_block_row(ACTINIDE_ROW).collect();
        assert!(!lanthanides.is_empty());
        assert!(!actinides.is_empty());
        assert!(lanthanides.iter().all(|e| e.category == Lanthanide));
        assert!(actinides.iter().all(|e| e.category == Actinide));
        assert_eq!(
            main_table().count() + lanthanides.len() + actinides.len(),
            118
        );
    }

    #[test]
    fn category_colors() {
        assert_eq!(NobleGas.color(), Color::hex(0xFFBC42));
        assert_eq!(Unknown.color(), Color::hex(0xCCCCCC));
    }
}
