//! Denomination validation configuration

pub mod error;

use std::{fs, io::Write, path::Path};

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use error::Error;

use crate::applications::transfer::hash::HashCase;

/// Settings for [`validate_ibc_denom_with`](crate::validate_ibc_denom_with).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DenomConfig {
    /// Letter case accepted for the hex digits of `ibc/{hash}` denominations.
    #[serde(default)]
    pub hash_case: HashCase,
}

/// Attempt to load and parse the TOML config file as a `DenomConfig`.
pub fn parse(path: impl AsRef<Path>) -> Result<DenomConfig, Error> {
    let config_toml = fs::read_to_string(&path).map_err(Error::io)?;

    let config = parse_str(&config_toml)?;

    debug!(
        path = %path.as_ref().display(),
        hash_case = ?config.hash_case,
        "loaded denomination config"
    );

    Ok(config)
}

/// Parse a `DenomConfig` from its TOML representation.
pub fn parse_str(config_toml: &str) -> Result<DenomConfig, Error> {
    toml::from_str::<DenomConfig>(config_toml).map_err(Error::decode)
}

/// Serialize the given `DenomConfig` as TOML to the given writer.
pub fn store_writer(config: &DenomConfig, mut writer: impl Write) -> Result<(), Error> {
    let toml_config = toml::to_string_pretty(&config).map_err(Error::encode)?;

    writeln!(writer, "{toml_config}").map_err(Error::io)?;

    Ok(())
}
