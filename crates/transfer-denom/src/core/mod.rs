//! The designs and logic pertaining to the transport, authentication, and
//! ordering layers of the IBC protocol that this crate depends on.

pub mod ics24_host;
