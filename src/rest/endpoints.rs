//! SimpleSwap REST API endpoint constants.

/// Base URL for the SimpleSwap REST API.
pub const SIMPLESWAP_BASE_URL: &str = "https://api.simpleswap.io";

/// Look up a single currency.
pub const GET_CURRENCY: &str = "get_currency";
/// List every supported currency.
pub const GET_ALL_CURRENCIES: &str = "get_all_currencies";
/// List the currencies a symbol can be exchanged to.
pub const GET_PAIRS: &str = "get_pairs";
/// List every available pair, keyed by source symbol.
pub const GET_ALL_PAIRS: &str = "get_all_pairs";
/// Create an exchange.
pub const CREATE_EXCHANGE: &str = "create_exchange";
/// Get an exchange by id.
pub const GET_EXCHANGE: &str = "get_exchange";
/// List exchanges created with this API key.
pub const GET_EXCHANGES: &str = "get_exchanges";
/// Get the minimum and maximum exchange amounts for a pair.
pub const GET_RANGES: &str = "get_ranges";
/// Get the estimated output amount.
pub const GET_ESTIMATED: &str = "get_estimated";
/// Check whether an exchange is currently possible.
pub const CHECK_EXCHANGES: &str = "check_exchanges";
/// Get market info for every pair.
pub const GET_MARKET_INFO: &str = "get_market_info";
