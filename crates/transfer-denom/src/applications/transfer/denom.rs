use std::fmt::{Display, Error as FmtError, Formatter};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::error::Error;
use super::hash::parse_hex_hash;
use super::hop::Hop;
use super::{DENOM_PREFIX, DENOM_SEPARATOR};
use crate::config::DenomConfig;
use crate::core::ics24_host::validate::is_channel_id_format;

/// A denomination split into its base and the trace of hops it crossed.
///
/// The trace lists hops in the order they prefix the full path, so
/// `transfer/channel-0/transfer/channel-60/uatom` has `transfer/channel-0`
/// first. An empty trace denotes a native denomination.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Denom {
    pub base: String,
    pub trace: Vec<Hop>,
}

impl Denom {
    /// A denomination that never left its chain.
    pub fn native(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            trace: Vec::new(),
        }
    }

    /// See [`extract_denom_from_full_path`].
    pub fn from_full_path(full_path: &str) -> Self {
        extract_denom_from_full_path(full_path)
    }

    pub fn is_native(&self) -> bool {
        self.trace.is_empty()
    }

    /// The trace as a path, e.g. `transfer/channel-0/transfer/channel-60`.
    pub fn path(&self) -> String {
        self.trace
            .iter()
            .map(Hop::to_string)
            .collect::<Vec<_>>()
            .join(DENOM_SEPARATOR)
    }

    /// The trace followed by the base denomination, e.g.
    /// `transfer/channel-0/uatom`, or just the base for native denominations.
    pub fn full_path(&self) -> String {
        if self.is_native() {
            self.base.clone()
        } else {
            format!("{}{}{}", self.path(), DENOM_SEPARATOR, self.base)
        }
    }

    /// Checks that the base is not blank and that every hop carries valid
    /// host identifiers.
    pub fn validate(&self) -> Result<(), Error> {
        if self.base.trim().is_empty() {
            return Err(Error::empty_base_denom());
        }

        self.trace.iter().try_for_each(Hop::validate)
    }
}

impl Display for Denom {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}", self.full_path())
    }
}

/// Splits a full denomination path into its trace and base denomination.
///
/// Hops are recognized greedily from the front of the path: a `port/channel`
/// pair is accepted as long as its second element has the `channel-{N}`
/// shape. The first pair that does not match ends the trace, and everything
/// from there on, separators included, is the base. A path made of at most
/// two elements is never split.
///
/// This never fails: input that does not look like a trace is returned whole
/// as a native base denomination.
pub fn extract_denom_from_full_path(full_path: &str) -> Denom {
    let tokens: Vec<&str> = full_path.split(DENOM_SEPARATOR).collect();

    // a two element path such as `transfer/channel-0` carries no base
    if tokens.len() <= 2 {
        return Denom::native(full_path);
    }

    let mut trace = Vec::new();
    let mut cursor = 0;

    while cursor + 1 < tokens.len() && is_channel_id_format(tokens[cursor + 1]) {
        trace.push(Hop::new(tokens[cursor], tokens[cursor + 1]));
        cursor += 2;
    }

    let base = tokens[cursor..].join(DENOM_SEPARATOR);

    trace!(full_path, hops = trace.len(), "extracted denomination trace");

    Denom { base, trace }
}

/// Validates a denomination under the default [`DenomConfig`].
///
/// See [`validate_ibc_denom_with`].
pub fn validate_ibc_denom(denom: &str) -> Result<(), Error> {
    validate_ibc_denom_with(denom, &DenomConfig::default())
}

/// Checks that `denom` is non-empty and, when it is of the form `ibc/{hash}`,
/// that `hash` is a well-formed trace hash.
///
/// Any other non-empty denomination is accepted as an opaque base
/// denomination.
pub fn validate_ibc_denom_with(denom: &str, config: &DenomConfig) -> Result<(), Error> {
    let result = match denom.split_once(DENOM_SEPARATOR) {
        _ if denom.is_empty() => Err(Error::empty_denom()),
        _ if denom == DENOM_PREFIX => Err(Error::missing_trace_hash(denom.to_string())),
        Some((DENOM_PREFIX, hash)) if hash.trim().is_empty() => {
            Err(Error::empty_trace_hash(denom.to_string()))
        }
        Some((DENOM_PREFIX, hash)) => parse_hex_hash(hash, config.hash_case)
            .map(|_| ())
            .map_err(|e| Error::invalid_trace_hash(denom.to_string(), e)),
        _ => Ok(()),
    };

    if let Err(e) = &result {
        debug!(denom, "rejected denomination: {}", e);
    }

    result
}
