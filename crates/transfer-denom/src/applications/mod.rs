//! Various packet encoding semantics which underpin the various types of transactions.

pub mod transfer;
