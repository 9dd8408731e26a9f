//! List the available sort orders.

use anyhow::Result;
use serde_json::json;
use storefront_commerce::search::SortOption;

use crate::context::Context;

/// Run the sorts command.
pub fn run(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        let options: Vec<_> = SortOption::ALL
            .iter()
            .map(|option| {
                json!({
                    "code": option.code(),
                    "alias": option.alias(),
                    "label": option.display_name(),
                })
            })
            .collect();
        ctx.output.json(&options);
        return Ok(());
    }

    ctx.output.header("Sort orders");
    for option in SortOption::ALL {
        ctx.output.list_item(&format!(
            "{:<6} {:<12} {}",
            option.code(),
            option.alias(),
            option.display_name()
        ));
    }

    Ok(())
}
