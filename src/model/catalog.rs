//! The compiled-in element catalog
//!
//! The catalog is embedded as JSON, parsed once at start-up and validated
//! before anything else sees it. It is never mutated afterwards.

use super::element::{Element, ElementId, Series};
use anyhow::{bail, Context, Result};
use std::collections::HashSet;

/// Number of elements the catalog must contain
pub const ELEMENT_COUNT: usize = 118;

static ELEMENTS_JSON: &str = include_str!("../../data/elements.json");

/// Read-only set of element records, ordered by atomic number
#[derive(Debug, Clone)]
pub struct Catalog {
    elements: Vec<Element>,
}

impl Catalog {
    /// Load the embedded catalog
    pub fn load() -> Result<Self> {
        let catalog = Self::from_json(ELEMENTS_JSON)?;
        log::info!("Loaded element catalog ({} elements)", catalog.len());
        Ok(catalog)
    }

    /// Parse and validate a catalog document
    pub fn from_json(json: &str) -> Result<Self> {
        let mut elements: Vec<Element> =
            serde_json::from_str(json).context("Failed to parse element catalog")?;
        elements.sort_by_key(|e| e.id);
        validate(&elements)?;
        Ok(Self { elements })
    }

    /// All elements in ascending atomic number order
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        // Validation guarantees ids are exactly 1..=len in order
        (id as usize)
            .checked_sub(1)
            .and_then(|index| self.elements.get(index))
    }

    /// Case-insensitive symbol lookup
    pub fn find_symbol(&self, symbol: &str) -> Option<&Element> {
        self.elements
            .iter()
            .find(|e| e.symbol.eq_ignore_ascii_case(symbol))
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

fn validate(elements: &[Element]) -> Result<()> {
    if elements.len() != ELEMENT_COUNT {
        bail!(
            "Catalog must contain {} elements, found {}",
            ELEMENT_COUNT,
            elements.len()
        );
    }

    let mut symbols = HashSet::new();
    let mut names = HashSet::new();

    for (index, element) in elements.iter().enumerate() {
        // Sorted input: any gap or duplicate shows up as a mismatch here
        if element.id as usize != index + 1 {
            bail!(
                "Expected atomic number {} but found {} ({})",
                index + 1,
                element.id,
                element.name
            );
        }
        if element.symbol.is_empty()
            || element.symbol.len() > 2
            || !element.symbol.chars().all(|c| c.is_ascii_alphabetic())
        {
            bail!("Invalid symbol {:?} for element {}", element.symbol, element.id);
        }
        if !symbols.insert(element.symbol.clone()) {
            bail!("Duplicate symbol {}", element.symbol);
        }
        if !names.insert(element.name.clone()) {
            bail!("Duplicate name {}", element.name);
        }
        if element.atomic_mass.is_nan() || element.atomic_mass <= 0.0 {
            bail!("Atomic mass of {} must be positive", element.name);
        }
        if !(1..=7).contains(&element.period) {
            bail!("Period {} of {} is out of range", element.period, element.name);
        }

        match (Series::containing(element.id), element.group) {
            (Some(series), None) => {
                if element.period != series.period() {
                    bail!(
                        "{} belongs to the {:?} series but has period {}",
                        element.name,
                        series,
                        element.period
                    );
                }
            }
            (Some(_), Some(group)) => {
                bail!("Series member {} must not declare group {}", element.name, group);
            }
            (None, Some(group)) => {
                if !(1..=18).contains(&group) {
                    bail!("Group {} of {} is out of range", group, element.name);
                }
            }
            (None, None) => {
                bail!("{} is missing a group", element.name);
            }
        }
    }

    Ok(())
}
