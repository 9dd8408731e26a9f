//! View state container.

use crate::basket::Basket;
use crate::catalog::{Catalog, Product};
use crate::ids::ProductId;
use crate::search::{self, QueryParams, ResultSummary, SortOption};
use std::sync::Arc;

/// A user interaction the view reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the search term.
    SetSearchTerm(String),
    /// Change the sort option.
    SetSort(SortOption),
    /// Toggle the in-stock-only filter.
    SetInStockOnly(bool),
    /// Add one unit of a product to the basket.
    AddToBasket(ProductId),
    /// Remove one unit of a product from the basket.
    RemoveOneFromBasket(ProductId),
    /// Show the basket panel.
    OpenBasket,
    /// Hide the basket panel.
    CloseBasket,
    /// Flip the basket panel.
    ToggleBasket,
}

impl Action {
    /// Whether this action changes the query parameters.
    pub fn affects_listing(&self) -> bool {
        matches!(
            self,
            Action::SetSearchTerm(_) | Action::SetSort(_) | Action::SetInStockOnly(_)
        )
    }
}

/// Everything the storefront view displays.
///
/// A value type: [`ViewState::dispatch`] returns the next state and leaves
/// the current one as it was. The catalog is shared between states.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    catalog: Arc<Catalog>,
    params: QueryParams,
    displayed: Vec<ProductId>,
    basket: Basket,
    basket_open: bool,
}

impl ViewState {
    /// Create the initial view: default parameters, empty closed basket.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_params(catalog, QueryParams::default())
    }

    /// Create a view starting from the given parameters.
    pub fn with_params(catalog: Arc<Catalog>, params: QueryParams) -> Self {
        let displayed = listing(&catalog, &params);
        Self {
            catalog,
            params,
            displayed,
            basket: Basket::new(),
            basket_open: false,
        }
    }

    /// Apply an action and return the next state.
    #[must_use]
    pub fn dispatch(&self, action: Action) -> ViewState {
        tracing::debug!(?action, "dispatch");

        let mut next = self.clone();
        match action {
            Action::SetSearchTerm(term) => next.params.term = term,
            Action::SetSort(sort) => next.params.sort = sort,
            Action::SetInStockOnly(in_stock_only) => next.params.in_stock_only = in_stock_only,
            Action::AddToBasket(id) => match self.catalog.get(id) {
                Some(product) => next.basket = self.basket.with_added(product),
                None => tracing::warn!(product_id = %id, "ignoring add of unknown product"),
            },
            Action::RemoveOneFromBasket(id) => next.basket = self.basket.with_removed_one(id),
            Action::OpenBasket => next.basket_open = true,
            Action::CloseBasket => next.basket_open = false,
            Action::ToggleBasket => next.basket_open = !self.basket_open,
        }

        if next.params != self.params {
            next.displayed = listing(&next.catalog, &next.params);
        }

        next
    }

    /// Apply a sequence of actions in order.
    #[must_use]
    pub fn dispatch_all(&self, actions: impl IntoIterator<Item = Action>) -> ViewState {
        actions
            .into_iter()
            .fold(self.clone(), |state, action| state.dispatch(action))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn params(&self) -> &QueryParams {
        &self.params
    }

    /// Ids of the displayed products, in display order.
    pub fn displayed_ids(&self) -> &[ProductId] {
        &self.displayed
    }

    /// The displayed products, in display order.
    pub fn displayed(&self) -> impl Iterator<Item = &Product> + '_ {
        self.displayed.iter().filter_map(|id| self.catalog.get(*id))
    }

    pub fn basket(&self) -> &Basket {
        &self.basket
    }

    pub fn is_basket_open(&self) -> bool {
        self.basket_open
    }

    /// Summary of the current listing.
    pub fn summary(&self) -> ResultSummary {
        ResultSummary::new(self.displayed.len(), self.params.is_searching())
    }

    /// Label for the result indicator.
    pub fn result_label(&self) -> String {
        self.summary().label()
    }
}

fn listing(catalog: &Catalog, params: &QueryParams) -> Vec<ProductId> {
    search::query(catalog.products(), params)
        .into_iter()
        .map(|product| product.id)
        .collect()
}
