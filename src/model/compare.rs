//! Pairwise property differences between two elements

use super::element::{Element, NumericProperty};
use std::fmt;

/// Properties shown side by side in the comparison panel
pub const COMPARABLE_PROPERTIES: [NumericProperty; 3] = [
    NumericProperty::Electronegativity,
    NumericProperty::MeltingPoint,
    NumericProperty::BoilingPoint,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Increase,
    Decrease,
    Equal,
}

impl Direction {
    fn of(delta: f64) -> Self {
        if delta > 0.0 {
            Direction::Increase
        } else if delta < 0.0 {
            Direction::Decrease
        } else {
            Direction::Equal
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Direction::Increase => "▲",
            Direction::Decrease => "▼",
            Direction::Equal => "=",
        }
    }
}

/// Signed change going from the first element to the second
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyDiff {
    pub property: NumericProperty,
    pub delta: f64,
    pub direction: Direction,
}

impl fmt::Display for PropertyDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Direction::Equal => write!(f, "Equal"),
            direction => write!(f, "{} {:.2}", direction.arrow(), self.delta.abs()),
        }
    }
}

/// `b - a` for one property, or `None` if either side lacks a value.
/// Equality is exact.
pub fn diff(a: &Element, b: &Element, property: NumericProperty) -> Option<PropertyDiff> {
    let delta = b.value(property)? - a.value(property)?;
    Some(PropertyDiff {
        property,
        delta,
        direction: Direction::of(delta),
    })
}

/// One row of the comparison table
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub property: NumericProperty,
    pub first: Option<f64>,
    pub second: Option<f64>,
    pub diff: Option<PropertyDiff>,
}

impl ComparisonRow {
    /// Text for the difference column
    pub fn diff_text(&self) -> String {
        self.diff
            .map(|d| d.to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }
}

pub fn compare_all(a: &Element, b: &Element) -> Vec<ComparisonRow> {
    COMPARABLE_PROPERTIES
        .iter()
        .map(|&property| ComparisonRow {
            property,
            first: a.value(property),
            second: b.value(property),
            diff: diff(a, b, property),
        })
        .collect()
}

/// Render a property value with its unit, or "N/A"
pub fn format_value(property: NumericProperty, value: Option<f64>) -> String {
    match value {
        Some(v) if property.unit().is_empty() => format!("{:.2}", v),
        Some(v) => format!("{:.2} {}", v, property.unit()),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::element::tests::sample_element;

    fn hydrogen() -> Element {
        let mut element = sample_element(1, "H", "Hydrogen");
        element.electronegativity = Some(2.20);
        element.melting_point = Some(-259.16);
        element
    }

    fn oxygen() -> Element {
        let mut element = sample_element(8, "O", "Oxygen");
        element.electronegativity = Some(3.44);
        element.melting_point = Some(-218.79);
        element
    }

    #[test]
    fn test_diff_sign_convention() {
        let result = diff(&hydrogen(), &oxygen(), NumericProperty::Electronegativity).unwrap();
        assert!((result.delta - 1.24).abs() < 1e-9);
        assert_eq!(result.direction, Direction::Increase);

        let reverse = diff(&oxygen(), &hydrogen(), NumericProperty::Electronegativity).unwrap();
        assert!((reverse.delta + 1.24).abs() < 1e-9);
        assert_eq!(reverse.direction, Direction::Decrease);
    }

    #[test]
    fn test_diff_with_itself_is_exactly_equal() {
        let h = hydrogen();
        for property in COMPARABLE_PROPERTIES {
            if let Some(result) = diff(&h, &h, property) {
                assert_eq!(result.delta, 0.0);
                assert_eq!(result.direction, Direction::Equal);
            }
        }
    }

    #[test]
    fn test_diff_missing_value_is_none() {
        let h = hydrogen();
        let mut helium = sample_element(2, "He", "Helium");
        helium.electronegativity = None;

        assert_eq!(diff(&h, &helium, NumericProperty::Electronegativity), None);
        assert_eq!(diff(&helium, &h, NumericProperty::Electronegativity), None);
        // Neither side has a boiling point
        assert_eq!(diff(&h, &oxygen(), NumericProperty::BoilingPoint), None);
    }

    #[test]
    fn test_diff_is_generic_over_properties() {
        let result = diff(&hydrogen(), &oxygen(), NumericProperty::AtomicMass).unwrap();
        assert_eq!(result.delta, 14.0);
        assert_eq!(result.property, NumericProperty::AtomicMass);
    }

    #[test]
    fn test_diff_display() {
        let up = diff(&hydrogen(), &oxygen(), NumericProperty::Electronegativity).unwrap();
        assert_eq!(up.to_string(), "▲ 1.24");
        let down = diff(&oxygen(), &hydrogen(), NumericProperty::Electronegativity).unwrap();
        assert_eq!(down.to_string(), "▼ 1.24");
        let same = diff(&oxygen(), &oxygen(), NumericProperty::Electronegativity).unwrap();
        assert_eq!(same.to_string(), "Equal");
    }

    #[test]
    fn test_compare_all_rows() {
        let rows = compare_all(&hydrogen(), &oxygen());
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].property, NumericProperty::Electronegativity);
        assert_eq!(rows[0].first, Some(2.20));
        assert_eq!(rows[0].second, Some(3.44));
        assert_eq!(rows[2].diff_text(), "N/A");
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(NumericProperty::Electronegativity, Some(2.2)), "2.20");
        assert_eq!(
            format_value(NumericProperty::MeltingPoint, Some(1538.0)),
            "1538.00 °C"
        );
        assert_eq!(format_value(NumericProperty::BoilingPoint, None), "N/A");
    }
}
