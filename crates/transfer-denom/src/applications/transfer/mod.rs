//! ICS 20: Token Transfer Application
//!
//! Denominations of tokens received over a transfer channel carry the trace
//! of every `port/channel` pair they crossed, e.g. `transfer/channel-0/uatom`.
//! Chains keep such tokens under a hashed form, `ibc/{hash}`.

pub mod denom;
pub mod error;
pub mod hash;
pub mod hop;

/// The port identifier that the ICS20 applications
/// typically bind with.
pub const PORT_ID_STR: &str = "transfer";

/// Prefix of denominations expressed as a trace hash, `ibc/{hash}`.
pub const DENOM_PREFIX: &str = "ibc";

/// Separator between the elements of a full denomination path.
pub const DENOM_SEPARATOR: &str = "/";
