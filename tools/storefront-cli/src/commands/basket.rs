//! One-shot basket calculation.

use std::sync::Arc;

use anyhow::{Context as _, Result};
use serde::Serialize;
use storefront_commerce::basket::Basket;
use storefront_commerce::catalog::Catalog;
use storefront_commerce::view::{Action, ViewState};

use super::BasketArgs;
use crate::context::Context;
use crate::session::parse_basket_op;

#[derive(Serialize)]
struct BasketReport<'a> {
    basket: &'a Basket,
    item_count: u64,
    total: String,
}

/// Run the basket command.
pub fn run(args: BasketArgs, ctx: &Context) -> Result<()> {
    let view = apply_ops(&args.ops, ctx.load_catalog()?)?;
    let basket = view.basket();

    if ctx.output.is_json() {
        ctx.output.json(&BasketReport {
            basket,
            item_count: basket.item_count(),
            total: basket.total().display(),
        });
        return Ok(());
    }

    ctx.output.header("Basket");
    ctx.output.basket(basket);
    warn_over_stock(&view, ctx);

    Ok(())
}

/// Apply basket operations, in order, to a fresh view.
///
/// Every op is validated before any is applied; `add:` needs a known id.
fn apply_ops(ops: &[String], catalog: Arc<Catalog>) -> Result<ViewState> {
    let mut actions = Vec::with_capacity(ops.len());
    for op in ops {
        let action = parse_basket_op(op).with_context(|| format!("Invalid operation '{}'", op))?;
        if let Action::AddToBasket(id) = &action {
            catalog.require(*id)?;
        }
        actions.push(action);
    }

    Ok(ViewState::new(catalog).dispatch_all(actions))
}

/// Warn about lines asking for more than the catalog has in stock.
///
/// The basket itself does not enforce stock; this only reports it.
pub fn warn_over_stock(view: &ViewState, ctx: &Context) {
    for line in view.basket().lines() {
        if let Some(product) = view.catalog().get(line.product_id) {
            if line.exceeds_stock(product) {
                ctx.output.warn(&format!(
                    "{} x{} exceeds stock ({} available)",
                    line.name, line.quantity, product.quantity
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_commerce::catalog::Product;
    use storefront_commerce::ids::ProductId;
    use storefront_commerce::money::Money;

    fn catalog() -> Arc<Catalog> {
        Arc::new(
            Catalog::from_products(vec![
                Product::new(1, "Apple", Money::new(100)).with_quantity(5),
                Product::new(2, "Banana", Money::new(50)),
            ])
            .unwrap(),
        )
    }

    fn ops(ops: &[&str]) -> Vec<String> {
        ops.iter().map(|op| op.to_string()).collect()
    }

    #[test]
    fn test_ops_apply_in_order() {
        let view = apply_ops(&ops(&["add:2", "add:1", "add:1", "remove:2"]), catalog()).unwrap();
        let basket = view.basket();

        assert_eq!(basket.lines().len(), 1);
        assert_eq!(basket.quantity_of(ProductId::new(1)), 2);
        assert_eq!(basket.total(), Money::new(200));

        let removed_first = apply_ops(&ops(&["remove:1", "add:1"]), catalog()).unwrap();
        assert_eq!(removed_first.basket().quantity_of(ProductId::new(1)), 1);

        let added_first = apply_ops(&ops(&["add:1", "remove:1"]), catalog()).unwrap();
        assert!(added_first.basket().is_empty());
    }

    #[test]
    fn test_unknown_id_is_an_error() {
        let err = apply_ops(&ops(&["add:1", "add:99"]), catalog()).unwrap_err();
        assert!(format!("{:#}", err).contains("99"));
    }

    #[test]
    fn test_remove_unknown_id_is_a_no_op() {
        let view = apply_ops(&ops(&["remove:99"]), catalog()).unwrap();
        assert!(view.basket().is_empty());
    }

    #[test]
    fn test_malformed_op_is_an_error() {
        let err = apply_ops(&ops(&["add:1", "buy:2"]), catalog()).unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid operation 'buy:2'"));
    }
}
