#![forbid(unsafe_code)]
#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    rust_2018_idioms
)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]

//! Parsing and validation of ICS-20 denomination traces.
//!
//! A token that crossed one or more IBC channels is identified on the
//! receiving chain by its full path, e.g. `transfer/channel-0/uatom`, where
//! each `port/channel` pair records one hop. The chain itself stores such a
//! token under a hashed denomination of the form `ibc/{hash}`.
//!
//! The layout of this crate mirrors the classification of the [Interchain
//! Standards][ics-standards]:
//!
//! - [`core::ics24_host`] holds the host identifier rules, among them the
//!   channel identifier format used to recognize hops.
//! - [`applications::transfer`] decomposes full paths into a [`Denom`] and
//!   checks hashed denominations with [`validate_ibc_denom`].
//!
//! [ics-standards]: https://github.com/cosmos/ibc#interchain-standards

pub mod applications;
pub mod config;
pub mod core;

pub use applications::transfer::denom::{
    extract_denom_from_full_path, validate_ibc_denom, validate_ibc_denom_with, Denom,
};
pub use applications::transfer::hop::Hop;
