//! One-shot catalog listing.

use anyhow::Result;
use serde::Serialize;
use storefront_commerce::catalog::Product;
use storefront_commerce::search::{QueryParams, SortOption};
use storefront_commerce::view::ViewState;

use super::ListArgs;
use crate::config::ViewConfig;
use crate::context::Context;

#[derive(Serialize)]
struct ListingReport<'a> {
    label: String,
    count: usize,
    params: &'a QueryParams,
    categories: Vec<&'a str>,
    products: Vec<&'a Product>,
}

/// Run the list command.
pub fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let (params, unknown_sort) = resolve_params(&args, &ctx.config.view);
    if let Some(code) = unknown_sort {
        ctx.output.warn(&format!("Unknown sort code '{}', keeping catalog order", code));
    }
    let view = ViewState::with_params(catalog, params);

    if ctx.output.is_json() {
        ctx.output.json(&ListingReport {
            label: view.result_label(),
            count: view.displayed_ids().len(),
            params: view.params(),
            categories: view.catalog().categories(),
            products: view.displayed().collect(),
        });
        return Ok(());
    }

    print_listing(&view, ctx);
    ctx.output.kv("Categories", &view.catalog().categories().join(", "));
    Ok(())
}

/// Print the result label and listing of a view.
pub fn print_listing(view: &ViewState, ctx: &Context) {
    let params = view.params();
    ctx.output.header(&view.result_label());
    ctx.output.debug(&format!(
        "term={:?} in_stock_only={} sort={}",
        params.term,
        params.in_stock_only,
        params.sort.display_name()
    ));
    ctx.output.products(view.displayed());
}

/// Config defaults overridden by command-line flags.
///
/// Also returns the `--sort` code when it is not a known one; such codes
/// keep catalog order.
fn resolve_params<'a>(
    args: &'a ListArgs,
    defaults: &ViewConfig,
) -> (QueryParams, Option<&'a str>) {
    let mut params = defaults.initial_params();
    let mut unknown_sort = None;

    if let Some(term) = &args.search {
        params.term = term.clone();
    }
    if args.in_stock {
        params.in_stock_only = true;
    }
    if let Some(code) = &args.sort {
        params.sort = SortOption::from(code.as_str());
        if SortOption::from_code(code).is_none() {
            unknown_sort = Some(code.as_str());
        }
    }

    (params, unknown_sort)
}
