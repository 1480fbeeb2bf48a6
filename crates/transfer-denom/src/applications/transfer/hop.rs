use std::fmt::{Display, Error as FmtError, Formatter};

use serde::{Deserialize, Serialize};

use super::error::Error;
use super::DENOM_SEPARATOR;
use crate::core::ics24_host::identifier::{ChannelId, PortId};

/// One `port/channel` pair of a denomination trace.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hop {
    pub port_id: PortId,
    pub channel_id: ChannelId,
}

impl Hop {
    /// Creates a hop from raw identifiers. The identifiers are not validated,
    /// see [`Hop::validate`].
    pub fn new(port_id: impl Into<String>, channel_id: impl Into<String>) -> Self {
        Self {
            port_id: PortId::new_unchecked(port_id),
            channel_id: ChannelId::new_unchecked(channel_id),
        }
    }

    pub fn port_id(&self) -> &PortId {
        &self.port_id
    }

    pub fn channel_id(&self) -> &ChannelId {
        &self.channel_id
    }

    /// Checks both identifiers against the host identifier rules.
    pub fn validate(&self) -> Result<(), Error> {
        self.port_id
            .validate()
            .map_err(|e| Error::invalid_trace_port(self.port_id.to_string(), e))?;

        self.channel_id
            .validate()
            .map_err(|e| Error::invalid_trace_channel(self.channel_id.to_string(), e))
    }
}

impl Display for Hop {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}{}{}", self.port_id, DENOM_SEPARATOR, self.channel_id)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::Hop;
    use crate::applications::transfer::error::ErrorDetail;
    use crate::core::ics24_host::identifier::{ChannelId, PortId};

    #[test]
    fn new_does_not_validate() {
        let hop = Hop::new("t", "channel");
        assert_eq!(hop.port_id().as_str(), "t");
        assert_eq!(hop.channel_id().as_str(), "channel");
        assert!(hop.validate().is_err());
    }

    #[test]
    fn equality_is_field_wise() {
        let hop = Hop::new("transfer", "channel-0");
        assert_eq!(
            hop,
            Hop {
                port_id: PortId::transfer(),
                channel_id: ChannelId::new(0),
            }
        );
        assert_ne!(hop, Hop::new("transfer", "channel-1"));
        assert_ne!(hop, Hop::new("customtransfer", "channel-0"));
    }

    #[test]
    fn display_joins_identifiers() {
        assert_eq!(
            Hop::new("transfer", "channel-60").to_string(),
            "transfer/channel-60"
        );
    }

    #[test]
    fn validate_reports_offending_identifier() {
        assert!(Hop::new("customtransfer", "channel-1").validate().is_ok());

        let err = Hop::new("p", "channel-1").validate().unwrap_err();
        match err.detail() {
            ErrorDetail::InvalidTracePort(e) => assert_eq!(e.port_id, "p"),
            other => panic!("unexpected error {other:?}"),
        }

        let err = Hop::new("transfer", "chan").validate().unwrap_err();
        match err.detail() {
            ErrorDetail::InvalidTraceChannel(e) => assert_eq!(e.channel_id, "chan"),
            other => panic!("unexpected error {other:?}"),
        }
    }
}
