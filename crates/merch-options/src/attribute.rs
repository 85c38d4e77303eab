//! Attribute option group resolution.

use merch_catalog::{OptionCategory, Product, TagProfile};

/// Canonical presentation order for the Length category.
pub const LENGTH_ORDER: [&str; 11] = [
    "X Short",
    "4\" Short",
    "Mid Short",
    "6\" Short",
    "Bike Short",
    "9\" Short",
    "3/4 Length",
    "7/8 Length",
    "Full Length",
    "X Long",
    "Tall",
];

/// One selectable value within an option group.
#[derive(Debug, Clone)]
pub struct AttributeOption {
    /// Display label: the tag value under the category's prefix.
    pub label: String,
    /// The sibling product this value navigates to.
    pub product: Product,
}

/// One attribute category with its selectable values.
#[derive(Debug, Clone)]
pub struct OptionGroup {
    pub category: OptionCategory,
    /// The current product's value for this category.
    pub selected: Option<String>,
    /// Sorted candidate values, at least two.
    pub options: Vec<AttributeOption>,
}

/// Resolve the attribute option groups for a product.
///
/// For each category the current product has a tag under, candidates are
/// the siblings that carry some tag under that category's prefix and agree
/// with the current product on every *other* selected category. Varying one
/// attribute therefore shows the values reachable holding all other
/// selections fixed. Groups with fewer than two candidates are omitted.
pub fn resolve_option_groups(current: &TagProfile, siblings: &[Product]) -> Vec<OptionGroup> {
    OptionCategory::ALL
        .iter()
        .filter_map(|&category| {
            current.option_tag(category)?;

            let mut options: Vec<AttributeOption> = siblings
                .iter()
                .filter_map(|product| {
                    let tags = TagProfile::decode(&product.tags);
                    let label = tags.option_value(category)?.to_string();

                    let agrees = OptionCategory::ALL.iter().all(|&other| {
                        if other == category {
                            return true;
                        }
                        match current.option_tag(other) {
                            Some(selected_tag) => product.has_tag(selected_tag),
                            None => true,
                        }
                    });

                    agrees.then(|| AttributeOption {
                        label,
                        product: product.clone(),
                    })
                })
                .collect();

            if category == OptionCategory::Length {
                options.sort_by_key(|o| length_rank(&o.label));
            } else {
                options.sort_by(|a, b| a.label.cmp(&b.label));
            }

            (options.len() > 1).then(|| OptionGroup {
                category,
                selected: current.option_value(category).map(str::to_string),
                options,
            })
        })
        .collect()
}

/// Rank of a length value in the canonical order; unknown values rank
/// before all known ones.
fn length_rank(label: &str) -> i32 {
    LENGTH_ORDER
        .iter()
        .position(|l| *l == label)
        .map(|i| i as i32)
        .unwrap_or(-1)
}
