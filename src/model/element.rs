//! Element records and their fixed classifications

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::sync::LazyLock;

/// Atomic number, the catalog key
pub type ElementId = u8;

/// Matches one orbital occupancy such as `4f14` or `2p6`
static ORBITAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d[spdf])(\d+)").unwrap());

/// Fine-grained chemical classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Alkali,
    Alkaline,
    Transition,
    PostTransition,
    Lanthanide,
    Actinide,
    Metalloid,
    Nonmetal,
    Halogen,
    NobleGas,
}

impl Category {
    pub fn all() -> [Category; 10] {
        [
            Category::Alkali,
            Category::Alkaline,
            Category::Transition,
            Category::PostTransition,
            Category::Lanthanide,
            Category::Actinide,
            Category::Metalloid,
            Category::Nonmetal,
            Category::Halogen,
            Category::NobleGas,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Alkali => "Alkali Metal",
            Category::Alkaline => "Alkaline Earth Metal",
            Category::Transition => "Transition Metal",
            Category::PostTransition => "Post-Transition Metal",
            Category::Lanthanide => "Lanthanide",
            Category::Actinide => "Actinide",
            Category::Metalloid => "Metalloid",
            Category::Nonmetal => "Nonmetal",
            Category::Halogen => "Halogen",
            Category::NobleGas => "Noble Gas",
        }
    }

    /// Coarse class used by the category filter
    pub fn class(&self) -> ElementClass {
        match self {
            Category::Alkali
            | Category::Alkaline
            | Category::Transition
            | Category::PostTransition
            | Category::Lanthanide
            | Category::Actinide => ElementClass::Metal,
            Category::Nonmetal | Category::Halogen | Category::NobleGas => ElementClass::Nonmetal,
            Category::Metalloid => ElementClass::Metalloid,
        }
    }
}

/// Coarse metal / nonmetal / metalloid grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementClass {
    Metal,
    Nonmetal,
    Metalloid,
}

/// Phase at standard temperature and pressure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
    Solid,
    Liquid,
    Gas,
}

impl State {
    pub fn all() -> [State; 3] {
        [State::Solid, State::Liquid, State::Gas]
    }

    /// Lowercase identifier, as used in filter values
    pub fn as_str(&self) -> &'static str {
        match self {
            State::Solid => "solid",
            State::Liquid => "liquid",
            State::Gas => "gas",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            State::Solid => "Solid",
            State::Liquid => "Liquid",
            State::Gas => "Gas",
        }
    }
}

/// The two f-block series drawn below the main grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Series {
    Lanthanide,
    Actinide,
}

impl Series {
    pub fn ids(&self) -> RangeInclusive<ElementId> {
        match self {
            Series::Lanthanide => 57..=71,
            Series::Actinide => 89..=103,
        }
    }

    pub fn first_id(&self) -> ElementId {
        *self.ids().start()
    }

    pub fn period(&self) -> u8 {
        match self {
            Series::Lanthanide => 6,
            Series::Actinide => 7,
        }
    }

    /// Placeholder text shown in the main grid
    pub fn range_label(&self) -> &'static str {
        match self {
            Series::Lanthanide => "57-71",
            Series::Actinide => "89-103",
        }
    }

    /// Series whose atomic number range contains `id`
    pub fn containing(id: ElementId) -> Option<Series> {
        [Series::Lanthanide, Series::Actinide]
            .into_iter()
            .find(|series| series.ids().contains(&id))
    }
}

/// Numeric element properties that can be read, displayed and compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericProperty {
    AtomicMass,
    Electronegativity,
    MeltingPoint,
    BoilingPoint,
    Density,
    IonizationEnergy,
}

impl NumericProperty {
    pub fn label(&self) -> &'static str {
        match self {
            NumericProperty::AtomicMass => "Atomic Mass",
            NumericProperty::Electronegativity => "Electronegativity",
            NumericProperty::MeltingPoint => "Melting Point",
            NumericProperty::BoilingPoint => "Boiling Point",
            NumericProperty::Density => "Density",
            NumericProperty::IonizationEnergy => "Ionization Energy",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            NumericProperty::AtomicMass => "u",
            NumericProperty::Electronegativity => "",
            NumericProperty::MeltingPoint | NumericProperty::BoilingPoint => "°C",
            NumericProperty::Density => "g/cm³",
            NumericProperty::IonizationEnergy => "kJ/mol",
        }
    }
}

/// A single chemical element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    pub symbol: String,
    pub name: String,
    pub atomic_mass: f64,
    pub category: Category,
    pub period: u8,
    /// Unset for lanthanide and actinide series members
    #[serde(default)]
    pub group: Option<u8>,
    pub state: State,
    #[serde(default)]
    pub electronegativity: Option<f64>,
    #[serde(default)]
    pub melting_point: Option<f64>,
    #[serde(default)]
    pub boiling_point: Option<f64>,
    #[serde(default)]
    pub density: Option<f64>,
    #[serde(default)]
    pub ionization_energy: Option<f64>,
    #[serde(default)]
    pub electron_config: String,
    #[serde(default)]
    pub description: String,
}

impl Element {
    /// The f-block series this element is drawn on, if any.
    ///
    /// Only group-less members of the period matching the series qualify.
    pub fn series(&self) -> Option<Series> {
        Series::containing(self.id)
            .filter(|series| self.group.is_none() && self.period == series.period())
    }

    pub fn value(&self, property: NumericProperty) -> Option<f64> {
        match property {
            NumericProperty::AtomicMass => Some(self.atomic_mass),
            NumericProperty::Electronegativity => self.electronegativity,
            NumericProperty::MeltingPoint => self.melting_point,
            NumericProperty::BoilingPoint => self.boiling_point,
            NumericProperty::Density => self.density,
            NumericProperty::IonizationEnergy => self.ionization_energy,
        }
    }

    pub fn formatted_mass(&self, decimals: usize) -> String {
        format!("{:.*}", decimals, self.atomic_mass)
    }

    pub fn formatted_group(&self) -> String {
        match self.group {
            Some(group) => group.to_string(),
            None => "n/a".to_string(),
        }
    }

    /// Gas densities are tiny, so they switch to scientific notation
    pub fn formatted_density(&self) -> Option<String> {
        self.density.map(|d| {
            if d < 0.01 {
                format!("{:.4e} g/cm³", d)
            } else {
                format!("{:.4} g/cm³", d)
            }
        })
    }

    /// Electron configuration with occupancies as superscripts (`2s1` -> `2s¹`)
    pub fn electron_config_display(&self) -> String {
        ORBITAL_REGEX
            .replace_all(&self.electron_config, |caps: &regex::Captures| {
                format!("{}{}", &caps[1], superscript(&caps[2]))
            })
            .into_owned()
    }

    /// Lowercase symbol and name both contain `needle` (already lowercased)
    pub fn matches_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.symbol.to_lowercase().contains(needle)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.symbol, self.id)
    }
}

fn superscript(digits: &str) -> String {
    digits
        .chars()
        .map(|c| match c {
            '0' => '⁰',
            '1' => '¹',
            '2' => '²',
            '3' => '³',
            '4' => '⁴',
            '5' => '⁵',
            '6' => '⁶',
            '7' => '⁷',
            '8' => '⁸',
            '9' => '⁹',
            other => other,
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Minimal element for unit tests that do not need the real catalog
    pub(crate) fn sample_element(id: ElementId, symbol: &str, name: &str) -> Element {
        Element {
            id,
            symbol: symbol.to_string(),
            name: name.to_string(),
            atomic_mass: id as f64 * 2.0,
            category: Category::Transition,
            period: 4,
            group: Some(8),
            state: State::Solid,
            electronegativity: None,
            melting_point: None,
            boiling_point: None,
            density: None,
            ionization_energy: None,
            electron_config: String::new(),
            description: String::new(),
        }
    }

    #[test]
    fn test_category_class_grouping() {
        assert_eq!(Category::Alkali.class(), ElementClass::Metal);
        assert_eq!(Category::Lanthanide.class(), ElementClass::Metal);
        assert_eq!(Category::PostTransition.class(), ElementClass::Metal);
        assert_eq!(Category::Halogen.class(), ElementClass::Nonmetal);
        assert_eq!(Category::NobleGas.class(), ElementClass::Nonmetal);
        assert_eq!(Category::Metalloid.class(), ElementClass::Metalloid);
    }

    #[test]
    fn test_category_deserializes_lowercase_names() {
        let parsed: Vec<Category> =
            serde_json::from_str(r#"["posttransition", "noblegas", "alkaline"]"#).unwrap();
        assert_eq!(
            parsed,
            vec![Category::PostTransition, Category::NobleGas, Category::Alkaline]
        );
    }

    #[test]
    fn test_series_containing() {
        assert_eq!(Series::containing(57), Some(Series::Lanthanide));
        assert_eq!(Series::containing(71), Some(Series::Lanthanide));
        assert_eq!(Series::containing(89), Some(Series::Actinide));
        assert_eq!(Series::containing(103), Some(Series::Actinide));
        assert_eq!(Series::containing(56), None);
        assert_eq!(Series::containing(72), None);
        assert_eq!(Series::containing(104), None);
    }

    #[test]
    fn test_series_requires_missing_group_and_matching_period() {
        let mut element = sample_element(60, "Nd", "Neodymium");
        element.period = 6;
        assert_eq!(element.series(), None);

        element.group = None;
        assert_eq!(element.series(), Some(Series::Lanthanide));

        element.period = 7;
        assert_eq!(element.series(), None);
    }

    #[test]
    fn test_value_reports_absent_properties() {
        let mut element = sample_element(26, "Fe", "Iron");
        element.electronegativity = Some(1.83);

        assert_eq!(element.value(NumericProperty::Electronegativity), Some(1.83));
        assert_eq!(element.value(NumericProperty::MeltingPoint), None);
        assert_eq!(element.value(NumericProperty::AtomicMass), Some(52.0));
    }

    #[test]
    fn test_electron_config_display_uses_superscripts() {
        let mut element = sample_element(26, "Fe", "Iron");
        element.electron_config = "[Ar] 3d6 4s2".to_string();
        assert_eq!(element.electron_config_display(), "[Ar] 3d⁶ 4s²");

        element.electron_config = "[Xe] 4f14 5d10 6s2".to_string();
        assert_eq!(element.electron_config_display(), "[Xe] 4f¹⁴ 5d¹⁰ 6s²");
    }

    #[test]
    fn test_formatted_density_switches_to_exponent() {
        let mut element = sample_element(1, "H", "Hydrogen");
        element.density = Some(0.00008988);
        assert_eq!(element.formatted_density().as_deref(), Some("8.9880e-5 g/cm³"));

        element.density = Some(7.874);
        assert_eq!(element.formatted_density().as_deref(), Some("7.8740 g/cm³"));

        element.density = None;
        assert_eq!(element.formatted_density(), None);
    }

    #[test]
    fn test_matches_text_checks_name_and_symbol() {
        let element = sample_element(11, "Na", "Sodium");
        assert!(element.matches_text("na"));
        assert!(element.matches_text("odi"));
        assert!(!element.matches_text("k"));
    }
}
