//! Multi-predicate element filter
//!
//! Five independent clauses (search text, category, state, period, group)
//! are AND-ed together. Every clause value has a string form, which is what
//! the pickers hand over, and a typed form that does the matching. Values
//! that cannot be parsed never match anything: a broken filter hides
//! elements rather than silently showing all of them.

use super::element::{Element, ElementClass, State};

/// One selectable entry in a filter picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn option(value: &'static str, label: &'static str) -> FilterOption {
    FilterOption { value, label }
}

const CATEGORY_OPTIONS: &[FilterOption] = &[
    option("all", "All"),
    option("metal", "Metals"),
    option("nonmetal", "Nonmetals"),
    option("metalloid", "Metalloids"),
];

const STATE_OPTIONS: &[FilterOption] = &[
    option("all", "All"),
    option("solid", "Solid"),
    option("liquid", "Liquid"),
    option("gas", "Gas"),
];

const PERIOD_OPTIONS: &[FilterOption] = &[
    option("all", "All"),
    option("1", "Period 1"),
    option("2", "Period 2"),
    option("3", "Period 3"),
    option("4", "Period 4"),
    option("5", "Period 5"),
    option("6", "Period 6"),
    option("7", "Period 7"),
];

const GROUP_OPTIONS: &[FilterOption] = &[
    option("all", "All"),
    option("1", "Group 1"),
    option("2", "Group 2"),
    option("transition", "Transition Metals"),
    option("18", "Noble Gases"),
    option("17", "Halogens"),
];

/// The picker-driven clauses (search is typed in directly)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Category,
    State,
    Period,
    Group,
}

impl FilterField {
    pub fn all() -> [FilterField; 4] {
        [
            FilterField::Category,
            FilterField::State,
            FilterField::Period,
            FilterField::Group,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterField::Category => "Category",
            FilterField::State => "State",
            FilterField::Period => "Period",
            FilterField::Group => "Group",
        }
    }

    pub fn options(&self) -> &'static [FilterOption] {
        match self {
            FilterField::Category => CATEGORY_OPTIONS,
            FilterField::State => STATE_OPTIONS,
            FilterField::Period => PERIOD_OPTIONS,
            FilterField::Group => GROUP_OPTIONS,
        }
    }

    /// Picker label for a value, falling back to the raw value
    pub fn label_for(&self, value: &str) -> String {
        self.options()
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.to_string())
            .unwrap_or_else(|| value.to_string())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Clause Types
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Class(ElementClass),
    Unrecognized(String),
}

impl CategoryFilter {
    pub fn parse(value: &str) -> Self {
        match value {
            "all" => CategoryFilter::All,
            "metal" => CategoryFilter::Class(ElementClass::Metal),
            "nonmetal" => CategoryFilter::Class(ElementClass::Nonmetal),
            "metalloid" => CategoryFilter::Class(ElementClass::Metalloid),
            other => CategoryFilter::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Class(ElementClass::Metal) => "metal",
            CategoryFilter::Class(ElementClass::Nonmetal) => "nonmetal",
            CategoryFilter::Class(ElementClass::Metalloid) => "metalloid",
            CategoryFilter::Unrecognized(raw) => raw,
        }
    }

    pub fn matches(&self, element: &Element) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Class(class) => element.category.class() == *class,
            CategoryFilter::Unrecognized(_) => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StateFilter {
    #[default]
    All,
    Only(State),
    Unrecognized(String),
}

impl StateFilter {
    pub fn parse(value: &str) -> Self {
        if value == "all" {
            return StateFilter::All;
        }
        State::all()
            .into_iter()
            .find(|s| s.as_str() == value)
            .map(StateFilter::Only)
            .unwrap_or_else(|| StateFilter::Unrecognized(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            StateFilter::All => "all",
            StateFilter::Only(state) => state.as_str(),
            StateFilter::Unrecognized(raw) => raw,
        }
    }

    pub fn matches(&self, element: &Element) -> bool {
        match self {
            StateFilter::All => true,
            StateFilter::Only(state) => element.state == *state,
            StateFilter::Unrecognized(_) => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PeriodFilter {
    #[default]
    All,
    Only(u8),
    Unparseable(String),
}

impl PeriodFilter {
    pub fn parse(value: &str) -> Self {
        if value == "all" {
            return PeriodFilter::All;
        }
        match value.trim().parse::<u8>() {
            Ok(period) => PeriodFilter::Only(period),
            Err(_) => PeriodFilter::Unparseable(value.to_string()),
        }
    }

    pub fn as_str(&self) -> String {
        match self {
            PeriodFilter::All => "all".to_string(),
            PeriodFilter::Only(period) => period.to_string(),
            PeriodFilter::Unparseable(raw) => raw.clone(),
        }
    }

    pub fn matches(&self, element: &Element) -> bool {
        match self {
            PeriodFilter::All => true,
            PeriodFilter::Only(period) => element.period == *period,
            PeriodFilter::Unparseable(_) => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GroupFilter {
    #[default]
    All,
    /// Any concrete group in 3..=12, whatever the declared category
    Transition,
    Only(u8),
    Unparseable(String),
}

impl GroupFilter {
    pub fn parse(value: &str) -> Self {
        match value {
            "all" => GroupFilter::All,
            "transition" => GroupFilter::Transition,
            other => match other.trim().parse::<u8>() {
                Ok(group) => GroupFilter::Only(group),
                Err(_) => GroupFilter::Unparseable(other.to_string()),
            },
        }
    }

    pub fn as_str(&self) -> String {
        match self {
            GroupFilter::All => "all".to_string(),
            GroupFilter::Transition => "transition".to_string(),
            GroupFilter::Only(group) => group.to_string(),
            GroupFilter::Unparseable(raw) => raw.clone(),
        }
    }

    /// Series members have no group and only ever pass `All`
    pub fn matches(&self, element: &Element) -> bool {
        match self {
            GroupFilter::All => true,
            GroupFilter::Transition => element.group.is_some_and(|g| (3..=12).contains(&g)),
            GroupFilter::Only(group) => element.group == Some(*group),
            GroupFilter::Unparseable(_) => false,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Criteria
// ═══════════════════════════════════════════════════════════════════════════════

/// The complete filter; `Default` is the identity filter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub search: String,
    pub category: CategoryFilter,
    pub state: StateFilter,
    pub period: PeriodFilter,
    pub group: GroupFilter,
}

impl FilterCriteria {
    pub fn identity() -> Self {
        Self::default()
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Replace one picker clause from its string form
    pub fn with(mut self, field: FilterField, value: &str) -> Self {
        match field {
            FilterField::Category => self.category = CategoryFilter::parse(value),
            FilterField::State => self.state = StateFilter::parse(value),
            FilterField::Period => self.period = PeriodFilter::parse(value),
            FilterField::Group => self.group = GroupFilter::parse(value),
        }
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// String form of one picker clause
    pub fn value(&self, field: FilterField) -> String {
        match field {
            FilterField::Category => self.category.as_str().to_string(),
            FilterField::State => self.state.as_str().to_string(),
            FilterField::Period => self.period.as_str(),
            FilterField::Group => self.group.as_str(),
        }
    }

    /// Picker clauses that are not "all", as `(field, value)` pairs
    pub fn active_clauses(&self) -> Vec<(FilterField, String)> {
        FilterField::all()
            .into_iter()
            .map(|field| (field, self.value(field)))
            .filter(|(_, value)| value != "all")
            .collect()
    }

    pub fn matches(&self, element: &Element) -> bool {
        if !self.search.is_empty() && !element.matches_text(&self.search.to_lowercase()) {
            return false;
        }
        self.category.matches(element)
            && self.state.matches(element)
            && self.period.matches(element)
            && self.group.matches(element)
    }
}

/// Elements passing `criteria`, in catalog order
pub fn apply<'a>(elements: &'a [Element], criteria: &FilterCriteria) -> Vec<&'a Element> {
    elements.iter().filter(|e| criteria.matches(e)).collect()
}

/// Whether an element is drawn at full strength rather than dimmed
pub fn is_visible(element: &Element, criteria: &FilterCriteria) -> bool {
    criteria.matches(element)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::Catalog;
    use crate::model::element::{Category, ElementId};

    fn catalog() -> Catalog {
        Catalog::load().expect("embedded catalog should be valid")
    }

    fn ids(elements: &[&Element]) -> Vec<ElementId> {
        elements.iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_identity_filter_returns_full_catalog_in_order() {
        let catalog = catalog();
        let result = apply(catalog.elements(), &FilterCriteria::identity());
        assert_eq!(ids(&result), (1..=118).collect::<Vec<_>>());
        assert!(FilterCriteria::default().is_identity());
    }

    #[test]
    fn test_search_is_case_insensitive_on_name_and_symbol() {
        let catalog = catalog();
        let criteria = FilterCriteria::identity().with_search("NA");
        let result = apply(catalog.elements(), &criteria);

        assert!(result.iter().any(|e| e.name == "Sodium"));
        for element in &result {
            assert!(
                element.name.to_lowercase().contains("na")
                    || element.symbol.to_lowercase().contains("na"),
                "{} should not match",
                element
            );
        }

        let by_name = apply(catalog.elements(), &FilterCriteria::identity().with_search("iron"));
        assert_eq!(ids(&by_name), vec![26]);
    }

    #[test]
    fn test_category_metal_matches_exhaustive_scan() {
        let catalog = catalog();
        let criteria = FilterCriteria::identity().with(FilterField::Category, "metal");
        let expected: Vec<ElementId> = catalog
            .elements()
            .iter()
            .filter(|e| {
                matches!(
                    e.category,
                    Category::Alkali
                        | Category::Alkaline
                        | Category::Transition
                        | Category::PostTransition
                        | Category::Lanthanide
                        | Category::Actinide
                )
            })
            .map(|e| e.id)
            .collect();

        assert_eq!(ids(&apply(catalog.elements(), &criteria)), expected);
    }

    #[test]
    fn test_category_nonmetal_and_metalloid() {
        let catalog = catalog();
        let nonmetals = apply(
            catalog.elements(),
            &FilterCriteria::identity().with(FilterField::Category, "nonmetal"),
        );
        assert!(nonmetals.iter().all(|e| matches!(
            e.category,
            Category::Nonmetal | Category::Halogen | Category::NobleGas
        )));
        assert!(nonmetals.iter().any(|e| e.symbol == "F"));
        assert!(nonmetals.iter().any(|e| e.symbol == "Ne"));

        let metalloids = apply(
            catalog.elements(),
            &FilterCriteria::identity().with(FilterField::Category, "metalloid"),
        );
        assert_eq!(ids(&metalloids), vec![5, 14, 32, 33, 51, 52]);
    }

    #[test]
    fn test_state_filter() {
        let catalog = catalog();
        let liquids = apply(
            catalog.elements(),
            &FilterCriteria::identity().with(FilterField::State, "liquid"),
        );
        assert_eq!(ids(&liquids), vec![35, 80]);
    }

    #[test]
    fn test_period_filter() {
        let catalog = catalog();
        let first = apply(
            catalog.elements(),
            &FilterCriteria::identity().with(FilterField::Period, "1"),
        );
        assert_eq!(ids(&first), vec![1, 2]);

        // Series members keep their period
        let sixth = apply(
            catalog.elements(),
            &FilterCriteria::identity().with(FilterField::Period, "6"),
        );
        assert_eq!(sixth.len(), 32);
    }

    #[test]
    fn test_group_transition_excludes_series_members() {
        let catalog = catalog();
        let result = apply(
            catalog.elements(),
            &FilterCriteria::identity().with(FilterField::Group, "transition"),
        );

        assert!(result
            .iter()
            .all(|e| e.group.is_some_and(|g| (3..=12).contains(&g))));
        assert!(result.iter().all(|e| e.series().is_none()));
        assert_eq!(result.len(), 38);
    }

    #[test]
    fn test_numeric_group_never_matches_series_members() {
        let catalog = catalog();
        let third = apply(
            catalog.elements(),
            &FilterCriteria::identity().with(FilterField::Group, "3"),
        );
        assert_eq!(ids(&third), vec![21, 39]);

        let halogens = apply(
            catalog.elements(),
            &FilterCriteria::identity().with(FilterField::Group, "17"),
        );
        assert_eq!(ids(&halogens), vec![9, 17, 35, 53, 85, 117]);
    }

    #[test]
    fn test_malformed_values_fail_closed() {
        let catalog = catalog();
        for (field, value) in [
            (FilterField::Period, "six"),
            (FilterField::Period, ""),
            (FilterField::Period, "-1"),
            (FilterField::Group, "noble"),
            (FilterField::Category, "plasma"),
            (FilterField::State, "Solid"),
        ] {
            let criteria = FilterCriteria::identity().with(field, value);
            assert!(
                apply(catalog.elements(), &criteria).is_empty(),
                "{:?}={:?} should match nothing",
                field,
                value
            );
        }
    }

    #[test]
    fn test_out_of_range_numbers_match_nothing() {
        let catalog = catalog();
        let criteria = FilterCriteria::identity().with(FilterField::Period, "9");
        assert_eq!(criteria.period, PeriodFilter::Only(9));
        assert!(apply(catalog.elements(), &criteria).is_empty());
    }

    #[test]
    fn test_additional_constraints_never_grow_result() {
        let catalog = catalog();
        let steps = [
            (Some(FilterField::Category), "metal"),
            (Some(FilterField::State), "solid"),
            (None, "n"),
            (Some(FilterField::Period), "5"),
            (Some(FilterField::Group), "transition"),
        ];

        let mut criteria = FilterCriteria::identity();
        let mut previous = apply(catalog.elements(), &criteria);
        for (field, value) in steps {
            criteria = match field {
                Some(field) => criteria.with(field, value),
                None => criteria.with_search(value),
            };
            let current = apply(catalog.elements(), &criteria);
            assert!(current.len() <= previous.len());
            assert!(current.iter().all(|e| previous.iter().any(|p| p.id == e.id)));
            previous = current;
        }
        assert!(!previous.is_empty());
    }

    #[test]
    fn test_is_visible_agrees_with_apply() {
        let catalog = catalog();
        let criteria = FilterCriteria::identity()
            .with(FilterField::Category, "nonmetal")
            .with(FilterField::State, "gas");
        let passed = ids(&apply(catalog.elements(), &criteria));
        for element in catalog.elements() {
            assert_eq!(is_visible(element, &criteria), passed.contains(&element.id));
        }
    }

    #[test]
    fn test_value_round_trips_picker_options() {
        for field in FilterField::all() {
            for option in field.options() {
                let criteria = FilterCriteria::identity().with(field, option.value);
                assert_eq!(criteria.value(field), option.value);
            }
        }
    }

    #[test]
    fn test_active_clauses_and_labels() {
        let criteria = FilterCriteria::identity()
            .with(FilterField::Group, "18")
            .with(FilterField::State, "gas");
        assert_eq!(
            criteria.active_clauses(),
            vec![
                (FilterField::State, "gas".to_string()),
                (FilterField::Group, "18".to_string()),
            ]
        );
        assert_eq!(FilterField::Group.label_for("18"), "Noble Gases");
        assert_eq!(FilterField::Group.label_for("11"), "11");
    }
}
