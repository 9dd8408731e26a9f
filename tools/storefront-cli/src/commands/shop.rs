//! Interactive storefront session.

use anyhow::Result;
use dialoguer::{Input, Select};
use storefront_commerce::search::SortOption;
use storefront_commerce::view::{Action, ViewState};

use super::basket::warn_over_stock;
use super::list::print_listing;
use super::ShopArgs;
use crate::context::Context;
use crate::session::{parse_command, Command, ParseError, HELP};

/// Run the shop command.
pub fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let mut params = ctx.config.view.initial_params();
    if let Some(term) = args.search {
        params.term = term;
    }

    let mut view = ViewState::with_params(catalog, params);
    if args.open_basket {
        view = view.dispatch(Action::OpenBasket);
    }

    ctx.output.info("Type `help` for commands, `quit` to leave.");
    print_listing(&view, ctx);
    if view.is_basket_open() {
        print_basket(&view, ctx);
    }

    loop {
        let line: String = Input::new()
            .with_prompt("storefront")
            .allow_empty(true)
            .interact_text()?;

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(ParseError::Empty) => continue,
            Err(e) => {
                ctx.output.warn(&e.to_string());
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => print_help(ctx),
            Command::List => print_listing(&view, ctx),
            Command::Basket => print_basket(&view, ctx),
            Command::ChooseSort => {
                if let Some(sort) = choose_sort(view.params().sort)? {
                    view = apply(&view, Action::SetSort(sort), ctx);
                }
            }
            Command::Dispatch(action) => view = apply(&view, action, ctx),
        }
    }

    if !view.basket().is_empty() {
        ctx.output.info(&format!(
            "Leaving with {} item(s), total {}",
            view.basket().item_count(),
            view.basket().total()
        ));
    }

    Ok(())
}

/// Dispatch an action and show what changed.
fn apply(view: &ViewState, action: Action, ctx: &Context) -> ViewState {
    if let Action::AddToBasket(id) = &action {
        if view.catalog().get(*id).is_none() {
            ctx.output.warn(&format!("No product with id {}", id));
            return view.clone();
        }
    }

    let next = view.dispatch(action.clone());

    if action.affects_listing() {
        if next.params() != view.params() {
            print_listing(&next, ctx);
        }
        return next;
    }

    match action {
        Action::AddToBasket(id) | Action::RemoveOneFromBasket(id) => {
            if next.basket() == view.basket() {
                ctx.output.info(&format!("Product {} is not in the basket", id));
            } else if next.is_basket_open() {
                print_basket(&next, ctx);
            } else {
                ctx.output.success(&format!(
                    "Basket: {} item(s), {}",
                    next.basket().item_count(),
                    next.basket().total()
                ));
            }
        }
        _ => {
            if next.is_basket_open() && !view.is_basket_open() {
                print_basket(&next, ctx);
            } else if !next.is_basket_open() && view.is_basket_open() {
                ctx.output.info("Basket hidden");
            }
        }
    }

    next
}

fn print_basket(view: &ViewState, ctx: &Context) {
    ctx.output.header("Your basket");
    ctx.output.basket(view.basket());
    warn_over_stock(view, ctx);
}

fn print_help(ctx: &Context) {
    ctx.output.header("Commands");
    for (usage, description) in HELP {
        ctx.output.kv(usage, description);
    }
}

fn choose_sort(current: SortOption) -> Result<Option<SortOption>> {
    let items: Vec<&str> = SortOption::ALL.iter().map(|o| o.display_name()).collect();
    let default = SortOption::ALL
        .iter()
        .position(|o| *o == current)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Sort products")
        .items(&items)
        .default(default)
        .interact_opt()?;

    Ok(selection.map(|i| SortOption::ALL[i]))
}
