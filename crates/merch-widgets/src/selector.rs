//! The product options selector widget.

use merch_catalog::{Product, TagProfile, Variant, VariantId};
use merch_options::{
    resolve_color_groups, resolve_option_groups, ColorGroup, OptionGroup, SelectionState,
};
use merch_storefront::{SiblingSets, StorefrontClient, StorefrontError};
use tracing::{debug, warn};

use crate::{
    push_sibling_params, push_variant_param, LocationPort, RequestGate, RequestTicket,
};

/// A sibling navigation target: the destination product plus the variant
/// carried across, when one agrees with the current selection.
#[derive(Debug, Clone)]
pub struct SiblingTarget {
    pub product_id: merch_catalog::ProductId,
    pub variant_id: Option<VariantId>,
}

/// The options selector: resolved groups, selection state and URL sync.
///
/// Hydration failures never escape: sibling or size-guide fetch errors
/// degrade to empty groups / no guide with a log, leaving the primary
/// product rendering unaffected.
pub struct ProductOptionsWidget {
    client: StorefrontClient,
    location: Box<dyn LocationPort>,
    product: Option<Product>,
    tags: TagProfile,
    selection: SelectionState,
    color_groups: Vec<ColorGroup>,
    option_groups: Vec<OptionGroup>,
    size_guide: Option<String>,
    country: String,
    sibling_gate: RequestGate,
    guide_gate: RequestGate,
}

impl ProductOptionsWidget {
    pub fn new(client: StorefrontClient, location: Box<dyn LocationPort>) -> Self {
        Self {
            client,
            location,
            product: None,
            tags: TagProfile::default(),
            selection: SelectionState::new(),
            color_groups: Vec::new(),
            option_groups: Vec::new(),
            size_guide: None,
            country: String::new(),
            sibling_gate: RequestGate::new(),
            guide_gate: RequestGate::new(),
        }
    }

    /// Load a product context, replacing all prior state wholesale.
    ///
    /// The selection seeds from the deep-linked variant when one is given;
    /// without one the Size axis starts unpinned.
    pub fn load_product(
        &mut self,
        product: Product,
        deep_linked_variant: Option<&VariantId>,
        country: impl Into<String>,
    ) {
        self.tags = TagProfile::decode(&product.tags);
        self.country = country.into();

        let variant = deep_linked_variant
            .and_then(|id| product.variants.iter().find(|v| &v.id == id));
        self.selection = SelectionState::from_variant(variant);
        if deep_linked_variant.is_none() {
            self.selection.unset("Size");
        }

        self.color_groups.clear();
        self.option_groups.clear();
        self.size_guide = None;
        self.product = Some(product);

        // Invalidate fetches still in flight for the previous context.
        self.sibling_gate.issue();
        self.guide_gate.issue();
    }

    /// Fetch sibling sets and resolve the groups.
    pub async fn hydrate_groups(&mut self) {
        if self.product.is_none() {
            return;
        }
        let ticket = self.begin_sibling_fetch();
        let result = self.client.sibling_sets(&self.tags, &self.country).await;
        self.complete_sibling_fetch(ticket, result);
    }

    /// Issue a ticket for an in-flight sibling fetch.
    pub fn begin_sibling_fetch(&mut self) -> RequestTicket {
        self.sibling_gate.issue()
    }

    /// Apply a sibling fetch completion; returns false when superseded.
    ///
    /// Errors degrade to empty groups.
    pub fn complete_sibling_fetch(
        &mut self,
        ticket: RequestTicket,
        result: Result<SiblingSets, StorefrontError>,
    ) -> bool {
        if !self.sibling_gate.is_current(ticket) {
            debug!("discarding superseded sibling fetch");
            return false;
        }

        let sets = match result {
            Ok(sets) => sets,
            Err(e) => {
                warn!("sibling fetch failed, rendering without groups: {e}");
                SiblingSets::default()
            }
        };

        self.color_groups = resolve_color_groups(
            self.tags.handle_tag.as_deref(),
            &sets.colors,
            self.client.profile(),
        );
        self.option_groups = resolve_option_groups(&self.tags, &sets.groups);
        true
    }

    /// Fetch the size-guide page for the product's size-chart tag.
    pub async fn hydrate_size_guide(&mut self) {
        let Some(page_handle) = self.tags.size_chart_tag.clone() else {
            return;
        };
        let ticket = self.guide_gate.issue();
        let result = self.client.size_guide(&page_handle, &self.country).await;

        if !self.guide_gate.is_current(ticket) {
            debug!("discarding superseded size-guide fetch");
            return;
        }
        self.size_guide = result.unwrap_or_else(|e| {
            warn!("size-guide fetch failed: {e}");
            None
        });
    }

    /// Apply a user option selection and sync the URL.
    ///
    /// The URL only updates once an explicit selection happened and a
    /// variant resolved, so deep links replay without rewriting history.
    pub fn select(&mut self, name: &str, value: &str) {
        self.selection.select(name, value);

        if self.selection.has_user_selection() {
            if let Some(variant) = self.selected_variant() {
                let id = variant.id.clone();
                push_variant_param(self.location.as_ref(), &id);
            }
        }
    }

    /// The uniquely resolved variant, if any.
    pub fn selected_variant(&self) -> Option<&Variant> {
        self.product
            .as_ref()
            .and_then(|p| self.selection.resolve(&p.variants))
    }

    /// Whether an option value is disabled for selection.
    pub fn is_option_disabled(&self, name: &str, value: &str) -> bool {
        self.product
            .as_ref()
            .map(|p| self.selection.is_option_disabled(name, value, &p.variants))
            .unwrap_or(true)
    }

    /// Navigation target for a sibling product (colorway or attribute
    /// option), carrying across the variant agreeing with the selection.
    pub fn sibling_target(&self, sibling: &Product) -> SiblingTarget {
        let variant_id = self
            .selection
            .relevant_variant(&sibling.variants)
            .map(|v| v.id.clone());
        SiblingTarget {
            product_id: sibling.id.clone(),
            variant_id,
        }
    }

    /// Navigate to a sibling product: push its ids into the URL.
    pub fn navigate_to_sibling(&self, sibling: &Product) {
        let target = self.sibling_target(sibling);
        push_sibling_params(
            self.location.as_ref(),
            &target.product_id,
            target.variant_id.as_ref(),
        );
    }

    /// Whether the widget has anything worth presenting.
    ///
    /// A single default-titled variant with no groups renders nothing.
    pub fn has_presentable_options(&self) -> bool {
        let Some(product) = self.product.as_ref() else {
            return false;
        };
        !product.is_single_default_variant()
            || !self.color_groups.is_empty()
            || self.option_groups.iter().any(|g| g.options.len() > 1)
    }

    pub fn product(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn color_groups(&self) -> &[ColorGroup] {
        &self.color_groups
    }

    pub fn option_groups(&self) -> &[OptionGroup] {
        &self.option_groups
    }

    pub fn size_guide(&self) -> Option<&str> {
        self.size_guide.as_deref()
    }
}
