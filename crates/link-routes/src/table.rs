use std::collections::HashMap;
use std::sync::OnceLock;

use crate::destination::Destination;
use crate::error::RouteError;
use crate::params::QueryParams;

/// A route handler turns query parameters into a navigation destination.
///
/// Handlers are pure. A missing or malformed parameter is an expected,
/// recoverable outcome expressed in the return type.
pub type RouteHandler = fn(&QueryParams) -> Result<Destination, RouteError>;

/// Static route definitions. Populated once, never mutated at runtime.
const ROUTES: &[(&str, RouteHandler)] = &[
    ("/home", handle_home),
    ("/buy", handle_buy),
    ("/swap", handle_swap),
    ("/send", handle_send),
];

/// Looks up the handler for a URL path. Exact string match only; returns
/// `None` for unknown paths.
pub fn lookup(path: &str) -> Option<RouteHandler> {
    static TABLE: OnceLock<HashMap<&'static str, RouteHandler>> = OnceLock::new();
    TABLE
        .get_or_init(|| ROUTES.iter().copied().collect())
        .get(path)
        .copied()
}

/// Paths with a registered handler, in declaration order.
pub fn registered_paths() -> impl Iterator<Item = &'static str> {
    ROUTES.iter().map(|(path, _)| *path)
}

fn handle_home(_params: &QueryParams) -> Result<Destination, RouteError> {
    Ok(Destination::Home)
}

fn handle_buy(params: &QueryParams) -> Result<Destination, RouteError> {
    Ok(Destination::Buy {
        chain_id: params.get_u64("chainId")?,
        asset: params.get("asset").map(str::to_string),
        amount: params.get_amount("amount")?,
    })
}

fn handle_swap(params: &QueryParams) -> Result<Destination, RouteError> {
    Ok(Destination::Swap {
        from_asset: params.require("from")?.to_string(),
        to_asset: params.require("to")?.to_string(),
        amount: params.get_amount("amount")?,
    })
}

fn handle_send(params: &QueryParams) -> Result<Destination, RouteError> {
    Ok(Destination::Send {
        to: params.require("to")?.to_string(),
        chain_id: params.get_u64("chainId")?,
        amount: params.get_amount("amount")?,
    })
}
