//! Colorway group resolution.

use std::cmp::Ordering;

use merch_catalog::{Product, TagProfile, BACK_IN_STOCK_TAG};
use merch_core::RegionProfile;

use crate::swatch::{parse_swatch, SwatchColor};

/// One colorway entry, ranked and carrying its display swatch.
#[derive(Debug, Clone)]
pub struct ColorGroup {
    /// The sibling product this colorway navigates to.
    pub product: Product,
    /// Display name from the swatch tag.
    pub colour_name: Option<String>,
    /// Renderable swatch; absent when the product has no usable swatch tag.
    pub swatch: Option<SwatchColor>,
}

/// Resolve the ranked colorway groups for a product.
///
/// `handle_tag` is the current product's full `handle-*` tag; without one
/// there are no colorways. Siblings not carrying the tag, and sold-out
/// siblings without a back-in-stock tag, are dropped before ranking.
pub fn resolve_color_groups(
    handle_tag: Option<&str>,
    siblings: &[Product],
    profile: &RegionProfile,
) -> Vec<ColorGroup> {
    let Some(handle_tag) = handle_tag else {
        return Vec::new();
    };

    let mut candidates: Vec<&Product> = siblings
        .iter()
        .filter(|p| p.has_tag(handle_tag))
        .filter(|p| p.available_for_sale || p.has_tag(BACK_IN_STOCK_TAG))
        .collect();

    candidates.sort_by(|a, b| color_group_order(a, b));

    candidates
        .into_iter()
        .map(|product| {
            let tags = TagProfile::decode(&product.tags);
            let parsed = tags
                .swatch_value()
                .and_then(|value| parse_swatch(value, profile));
            let (colour_name, swatch) = match parsed {
                Some(p) => (Some(p.name), p.color),
                None => (None, None),
            };
            ColorGroup {
                product: product.clone(),
                colour_name,
                swatch,
            }
        })
        .collect()
}

/// The five-rule colorway ordering.
///
/// 1. Available before sold-out. 2. Higher minimum price first. 3. A
/// "black" colorway first when exactly one side is black. 4. Higher
/// available-variant ratio first, when both sides have variants.
/// 5. Input order preserved.
pub fn color_group_order(a: &Product, b: &Product) -> Ordering {
    if a.available_for_sale != b.available_for_sale {
        return if a.available_for_sale {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }

    let a_price = a.min_price.as_ref().map(|p| p.amount).unwrap_or(0.0);
    let b_price = b.min_price.as_ref().map(|p| p.amount).unwrap_or(0.0);
    if let Some(order) = b_price.partial_cmp(&a_price) {
        if order != Ordering::Equal {
            return order;
        }
    }

    let a_black = a.colorway_name().eq_ignore_ascii_case("black");
    let b_black = b.colorway_name().eq_ignore_ascii_case("black");
    match (a_black, b_black) {
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        _ => {}
    }

    if let (Some(a_ratio), Some(b_ratio)) = (a.availability_ratio(), b.availability_ratio()) {
        if let Some(order) = b_ratio.partial_cmp(&a_ratio) {
            if order != Ordering::Equal {
                return order;
            }
        }
    }

    Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::*;
    use merch_catalog::Variant;
    use merch_core::Region;

    const HANDLE: &str = "handle-rep-tight";

    fn profile() -> RegionProfile {
        RegionProfile::for_region(Region::Au)
    }

    fn colorway(id: &str, colour: &str, available: bool, price: f64) -> Product {
        Product::new(id, format!("Rep Tight - {colour}"), available)
            .with_tag(HANDLE)
            .with_tag(format!("colourSwatch:{colour}|#101010"))
            .with_min_price(price, "AUD")
    }

    #[test]
    fn test_no_handle_tag_means_no_groups() {
        let siblings = vec![colorway("1", "Black", true, 80.0)];
        assert!(resolve_color_groups(None, &siblings, &profile()).is_empty());
    }

    #[test]
    fn test_filters_foreign_and_unavailable() {
        let foreign = Product::new("1", "Other - Blue", true).with_tag("handle-other");
        let sold_out = colorway("2", "Moss", false, 80.0);
        let back_in_stock = colorway("3", "Sage", false, 80.0).with_tag(BACK_IN_STOCK_TAG);
        let available = colorway("4", "Black", true, 80.0);

        let groups = resolve_color_groups(
            Some(HANDLE),
            &[foreign, sold_out, back_in_stock, available],
            &profile(),
        );

        let ids: Vec<&str> = groups.iter().map(|g| g.product.id.as_str()).collect();
        assert_eq!(ids, vec!["4", "3"]);
    }

    #[test]
    fn test_availability_beats_price() {
        let cheap_available = colorway("1", "Sage", true, 40.0);
        let pricey_sold_out = colorway("2", "Moss", false, 90.0).with_tag(BACK_IN_STOCK_TAG);

        let groups = resolve_color_groups(
            Some(HANDLE),
            &[pricey_sold_out, cheap_available],
            &profile(),
        );
        let ids: Vec<&str> = groups.iter().map(|g| g.product.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_higher_price_first_within_availability() {
        let discounted = colorway("1", "Sage", true, 40.0);
        let full_price = colorway("2", "Moss", true, 80.0);

        let groups = resolve_color_groups(Some(HANDLE), &[discounted, full_price], &profile());
        let ids: Vec<&str> = groups.iter().map(|g| g.product.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn test_black_wins_price_tie() {
        let moss = colorway("1", "Moss", true, 80.0);
        let black = colorway("2", "Black", true, 80.0);

        let groups = resolve_color_groups(Some(HANDLE), &[moss, black], &profile());
        let ids: Vec<&str> = groups.iter().map(|g| g.product.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn test_availability_ratio_breaks_remaining_ties() {
        let mostly_sold = colorway("1", "Moss", true, 80.0)
            .with_variant(Variant::new("v1", "S", true))
            .with_variant(Variant::new("v2", "M", false))
            .with_variant(Variant::new("v3", "L", false))
            .with_variant(Variant::new("v4", "XL", false));
        let well_stocked = colorway("2", "Sage", true, 80.0)
            .with_variant(Variant::new("v5", "S", true))
            .with_variant(Variant::new("v6", "M", true))
            .with_variant(Variant::new("v7", "L", true))
            .with_variant(Variant::new("v8", "XL", false));

        let groups = resolve_color_groups(Some(HANDLE), &[mostly_sold, well_stocked], &profile());
        let ids: Vec<&str> = groups.iter().map(|g| g.product.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn test_full_ties_preserve_input_order() {
        let first = colorway("1", "Moss", true, 80.0);
        let second = colorway("2", "Sage", true, 80.0);

        let groups = resolve_color_groups(
            Some(HANDLE),
            &[first.clone(), second.clone()],
            &profile(),
        );
        let ids: Vec<&str> = groups.iter().map(|g| g.product.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);

        // Swapping two fully-tied candidates swaps the output: the order is
        // stable, not re-derived.
        let groups = resolve_color_groups(Some(HANDLE), &[second, first], &profile());
        let ids: Vec<&str> = groups.iter().map(|g| g.product.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn test_both_black_falls_through_to_ratio() {
        let black_low = colorway("1", "Black", true, 80.0)
            .with_variant(Variant::new("v1", "S", false))
            .with_variant(Variant::new("v2", "M", true));
        let black_high = colorway("2", "Black", true, 80.0)
            .with_variant(Variant::new("v3", "S", true))
            .with_variant(Variant::new("v4", "M", true));

        let groups = resolve_color_groups(Some(HANDLE), &[black_low, black_high], &profile());
        let ids: Vec<&str> = groups.iter().map(|g| g.product.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn test_groups_carry_swatches() {
        let groups = resolve_color_groups(
            Some(HANDLE),
            &[colorway("1", "Moss", true, 80.0)],
            &profile(),
        );
        assert_eq!(groups[0].colour_name.as_deref(), Some("Moss"));
        assert_eq!(
            groups[0].swatch,
            Some(SwatchColor::Conic(
                "conic-gradient(#101010 0 100%)".to_string()
            ))
        );
    }
}
