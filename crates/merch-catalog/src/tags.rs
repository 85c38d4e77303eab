//! Typed decode of the merchandising tag grammar.
//!
//! Tags are opaque strings used as a sparse key-value encoding: a group tag
//! has the form `<prefix><value>` for a fixed set of prefixes. Rather than
//! re-scanning the tag array at each use site, `TagProfile::decode` parses
//! it once into optional per-prefix fields. At most one tag per prefix is
//! expected; on violation the first tag in sequence wins.

use serde::{Deserialize, Serialize};

/// Tag marking a sold-out product that should still be presented.
pub const BACK_IN_STOCK_TAG: &str = "BACK-IN-STOCK";

/// The fixed attribute categories presented as option groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OptionCategory {
    Pockets,
    CupSize,
    BagSize,
    TowelSize,
    ShortLiner,
    Waistband,
    Length,
}

impl OptionCategory {
    /// All categories, in presentation order.
    pub const ALL: [OptionCategory; 7] = [
        OptionCategory::Pockets,
        OptionCategory::CupSize,
        OptionCategory::BagSize,
        OptionCategory::TowelSize,
        OptionCategory::ShortLiner,
        OptionCategory::Waistband,
        OptionCategory::Length,
    ];

    /// Human-readable group heading.
    pub fn display_name(&self) -> &'static str {
        match self {
            OptionCategory::Pockets => "Pockets",
            OptionCategory::CupSize => "Cup Size",
            OptionCategory::BagSize => "Bag Size",
            OptionCategory::TowelSize => "Towel Size",
            OptionCategory::ShortLiner => "Short Liner",
            OptionCategory::Waistband => "Waistband",
            OptionCategory::Length => "Length",
        }
    }

    /// Tag prefix for this category, colon included.
    pub fn prefix(&self) -> &'static str {
        match self {
            OptionCategory::Pockets => "pockets:",
            OptionCategory::CupSize => "cupsize:",
            OptionCategory::BagSize => "bagsize:",
            OptionCategory::TowelSize => "towelsize:",
            OptionCategory::ShortLiner => "shortliner:",
            OptionCategory::Waistband => "waistband:",
            OptionCategory::Length => "length:",
        }
    }

    /// Extract this category's value from a full tag, if the tag belongs to
    /// the category.
    pub fn value_of<'a>(&self, tag: &'a str) -> Option<&'a str> {
        tag.strip_prefix(self.prefix())
    }
}

/// One product's tags, decoded into the grammar's fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TagProfile {
    /// Full `handle-*` tag grouping colorway siblings.
    pub handle_tag: Option<String>,
    /// Full `YGroup_*` tag grouping attribute siblings.
    pub group_tag: Option<String>,
    /// Full `colourSwatch:*` tag (kept whole for sibling queries).
    pub swatch_tag: Option<String>,
    /// Full `SizeChart_*` tag; doubles as the size-guide page handle.
    pub size_chart_tag: Option<String>,
    /// Whether the product belongs to the `batch:OG` partition.
    pub og_batch: bool,
    /// Whether the product is tagged back-in-stock.
    pub back_in_stock: bool,
    /// Full tag per attribute category, in `OptionCategory::ALL` order.
    option_tags: [Option<String>; 7],
}

impl TagProfile {
    /// Decode a product's tag array in one pass, first match per field wins.
    pub fn decode<S: AsRef<str>>(tags: &[S]) -> Self {
        let mut profile = TagProfile::default();

        for tag in tags {
            let tag = tag.as_ref();

            if tag.starts_with("batch:OG") {
                profile.og_batch = true;
                continue;
            }
            if tag == BACK_IN_STOCK_TAG {
                profile.back_in_stock = true;
                continue;
            }

            first_match(&mut profile.handle_tag, tag, "handle-");
            first_match(&mut profile.group_tag, tag, "YGroup_");
            first_match(&mut profile.swatch_tag, tag, "colourSwatch:");
            first_match(&mut profile.size_chart_tag, tag, "SizeChart_");

            for (i, category) in OptionCategory::ALL.iter().enumerate() {
                first_match(&mut profile.option_tags[i], tag, category.prefix());
            }
        }

        profile
    }

    /// Full tag under the category's prefix, if any.
    pub fn option_tag(&self, category: OptionCategory) -> Option<&str> {
        let i = OptionCategory::ALL.iter().position(|c| *c == category)?;
        self.option_tags[i].as_deref()
    }

    /// Extracted value under the category's prefix, if any.
    pub fn option_value(&self, category: OptionCategory) -> Option<&str> {
        self.option_tag(category)
            .and_then(|tag| category.value_of(tag))
    }

    /// Swatch payload after the `colourSwatch:` prefix.
    pub fn swatch_value(&self) -> Option<&str> {
        self.swatch_tag
            .as_deref()
            .and_then(|t| t.strip_prefix("colourSwatch:"))
    }
}

fn first_match(slot: &mut Option<String>, tag: &str, prefix: &str) {
    if slot.is_none() && tag.starts_with(prefix) {
        *slot = Some(tag.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_profile() {
        let tags = [
            "handle-rep-tight",
            "YGroup_rep",
            "colourSwatch:Black|#000000",
            "batch:OG",
            "SizeChart_womens-tights",
            "length:Full Length",
            "pockets:Yes",
        ];
        let profile = TagProfile::decode(&tags);

        assert_eq!(profile.handle_tag.as_deref(), Some("handle-rep-tight"));
        assert_eq!(profile.group_tag.as_deref(), Some("YGroup_rep"));
        assert_eq!(
            profile.swatch_tag.as_deref(),
            Some("colourSwatch:Black|#000000")
        );
        assert_eq!(profile.swatch_value(), Some("Black|#000000"));
        assert_eq!(
            profile.size_chart_tag.as_deref(),
            Some("SizeChart_womens-tights")
        );
        assert!(profile.og_batch);
        assert!(!profile.back_in_stock);
        assert_eq!(
            profile.option_value(OptionCategory::Length),
            Some("Full Length")
        );
        assert_eq!(profile.option_value(OptionCategory::Pockets), Some("Yes"));
        assert_eq!(profile.option_value(OptionCategory::CupSize), None);
    }

    #[test]
    fn test_first_match_wins_on_duplicates() {
        let tags = ["length:Tall", "length:X Short"];
        let profile = TagProfile::decode(&tags);
        assert_eq!(profile.option_value(OptionCategory::Length), Some("Tall"));
    }

    #[test]
    fn test_back_in_stock_is_exact() {
        let profile = TagProfile::decode(&["BACK-IN-STOCK"]);
        assert!(profile.back_in_stock);

        let profile = TagProfile::decode(&["BACK-IN-STOCK-SOON"]);
        assert!(!profile.back_in_stock);
    }

    #[test]
    fn test_category_value_extraction() {
        assert_eq!(
            OptionCategory::CupSize.value_of("cupsize:Removable"),
            Some("Removable")
        );
        assert_eq!(OptionCategory::CupSize.value_of("length:Tall"), None);
    }

    #[test]
    fn test_empty_tags() {
        let profile = TagProfile::decode::<&str>(&[]);
        assert_eq!(profile, TagProfile::default());
    }
}
