//! Variant selection state machine.

use std::collections::BTreeMap;

use merch_catalog::Variant;
use serde::{Deserialize, Serialize};

/// The current option selections and their resolution against variants.
///
/// One conceptual state per distinct combination of selections; transitions
/// are `select` calls. Resolution and the disabled predicate are pure
/// functions of (variants, selections), recomputed on every call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    selected: BTreeMap<String, String>,
    user_selected: bool,
}

impl SelectionState {
    /// Empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed selections from a deep-linked variant's option pairs.
    pub fn from_variant(variant: Option<&Variant>) -> Self {
        let selected = variant
            .map(|v| {
                v.options
                    .iter()
                    .map(|o| (o.name.clone(), o.value.clone()))
                    .collect()
            })
            .unwrap_or_default();
        Self {
            selected,
            user_selected: false,
        }
    }

    /// Apply a user selection for one option name.
    pub fn select(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.selected.insert(name.into(), value.into());
        self.user_selected = true;
    }

    /// Drop the selection for one option name without marking a user
    /// action (used when no deep-linked variant pinned it).
    pub fn unset(&mut self, name: &str) {
        self.selected.remove(name);
    }

    /// The selected value for an option name.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.selected.get(name).map(String::as_str)
    }

    /// All current selections.
    pub fn selections(&self) -> &BTreeMap<String, String> {
        &self.selected
    }

    /// Whether any explicit user selection has happened this session.
    ///
    /// URL state is only updated once this is true, so merely loading a
    /// deep link never rewrites history.
    pub fn has_user_selection(&self) -> bool {
        self.user_selected
    }

    /// Resolve the unique variant consistent with every selection.
    ///
    /// `None` when no variant matches or more than one does; downstream
    /// consumers treat that as a valid, distinct, disabled state.
    pub fn resolve<'a>(&self, variants: &'a [Variant]) -> Option<&'a Variant> {
        let mut matches = variants.iter().filter(|v| self.matches(v));
        let first = matches.next()?;
        match matches.next() {
            Some(_) => None,
            None => Some(first),
        }
    }

    fn matches(&self, variant: &Variant) -> bool {
        self.selected
            .iter()
            .all(|(name, value)| variant.option_value(name) == Some(value.as_str()))
    }

    /// Whether an (option name, option value) pair is disabled.
    ///
    /// Disabled when no available-for-sale variant matches that value for
    /// the named option and the current selection for every other option.
    pub fn is_option_disabled(&self, name: &str, value: &str, variants: &[Variant]) -> bool {
        !variants.iter().any(|variant| {
            variant.available_for_sale
                && variant.options.iter().all(|option| {
                    if option.name == name {
                        option.value == value
                    } else {
                        self.value(&option.name) == Some(option.value.as_str())
                    }
                })
        })
    }

    /// The sibling variant to carry across colorway/attribute navigation.
    ///
    /// First variant whose every non-colour option agrees with the current
    /// selection; the colour axis is exempt since the destination product
    /// is the other colorway.
    pub fn relevant_variant<'a>(&self, variants: &'a [Variant]) -> Option<&'a Variant> {
        variants.iter().find(|variant| {
            variant.options.iter().all(|option| {
                option.name.trim().eq_ignore_ascii_case("colour")
                    || self.value(&option.name) == Some(option.value.as_str())
            })
        })
    }
}
