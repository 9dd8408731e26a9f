//! Parsing of interactive session input and basket operations.

use storefront_commerce::ids::ProductId;
use storefront_commerce::search::SortOption;
use storefront_commerce::view::Action;
use thiserror::Error;

/// Help text for the interactive session.
pub const HELP: &[(&str, &str)] = &[
    ("search <term>", "Filter products by name"),
    ("clear", "Clear the search term"),
    ("sort [code]", "Change the sort order (menu when no code is given)"),
    ("stock on|off", "Only show products in stock"),
    ("add <id>", "Add one unit to the basket"),
    ("remove <id>", "Remove one unit from the basket"),
    ("open | close | toggle", "Show or hide the basket"),
    ("basket", "Print the basket"),
    ("list", "Print the current listing"),
    ("help", "Show this help"),
    ("quit", "Leave the session"),
];

/// A parsed line of session input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Send an action to the view state.
    Dispatch(Action),
    /// Pick a sort order from a menu.
    ChooseSort,
    /// Print the listing.
    List,
    /// Print the basket.
    Basket,
    /// Print help.
    Help,
    /// End the session.
    Quit,
}

/// Errors from parsing user input.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing was entered.
    #[error("empty input")]
    Empty,

    #[error("unknown command: {0} (try `help`)")]
    UnknownCommand(String),

    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),

    #[error("not a product id: {0}")]
    InvalidId(String),

    #[error("expected on or off, got: {0}")]
    InvalidToggle(String),

    #[error("unknown sort code: {0}")]
    UnknownSort(String),

    #[error("expected add:<id> or remove:<id>, got: {0}")]
    InvalidBasketOp(String),
}

/// Parse one line of session input.
///
/// The search term is everything after `search`, without surrounding
/// whitespace. Inner spacing is kept as typed.
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let line = line.trim_start();
    if line.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (line, ""),
    };
    let arg = rest.trim();

    let command = match word.to_ascii_lowercase().as_str() {
        "search" | "find" => Command::Dispatch(Action::SetSearchTerm(arg.to_string())),
        "clear" => Command::Dispatch(Action::SetSearchTerm(String::new())),
        "sort" if arg.is_empty() => Command::ChooseSort,
        "sort" => {
            let sort =
                SortOption::from_code(arg).ok_or_else(|| ParseError::UnknownSort(arg.to_string()))?;
            Command::Dispatch(Action::SetSort(sort))
        }
        "stock" => Command::Dispatch(Action::SetInStockOnly(parse_toggle(arg)?)),
        "add" => Command::Dispatch(Action::AddToBasket(parse_id(arg, "add")?)),
        "remove" | "rm" => Command::Dispatch(Action::RemoveOneFromBasket(parse_id(arg, "remove")?)),
        "open" => Command::Dispatch(Action::OpenBasket),
        "close" => Command::Dispatch(Action::CloseBasket),
        "toggle" => Command::Dispatch(Action::ToggleBasket),
        "basket" => Command::Basket,
        "list" | "ls" => Command::List,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(ParseError::UnknownCommand(other.to_string())),
    };

    Ok(command)
}

/// Parse a basket operation of the form `add:<id>` or `remove:<id>`.
pub fn parse_basket_op(op: &str) -> Result<Action, ParseError> {
    let (verb, id) = op
        .split_once(':')
        .ok_or_else(|| ParseError::InvalidBasketOp(op.to_string()))?;

    match verb.trim().to_ascii_lowercase().as_str() {
        "add" => Ok(Action::AddToBasket(parse_id(id, "add")?)),
        "remove" => Ok(Action::RemoveOneFromBasket(parse_id(id, "remove")?)),
        _ => Err(ParseError::InvalidBasketOp(op.to_string())),
    }
}

fn parse_id(arg: &str, command: &'static str) -> Result<ProductId, ParseError> {
    if arg.trim().is_empty() {
        return Err(ParseError::MissingArgument(command));
    }
    arg.parse()
        .map_err(|_| ParseError::InvalidId(arg.trim().to_string()))
}

fn parse_toggle(arg: &str) -> Result<bool, ParseError> {
    match arg.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        "" => Err(ParseError::MissingArgument("stock")),
        other => Err(ParseError::InvalidToggle(other.to_string())),
    }
}
