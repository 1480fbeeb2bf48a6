use flex_error::define_error;

use crate::core::ics24_host::error::ValidationError;

define_error! {
    #[derive(Debug, PartialEq, Eq)]
    HashError {
        InvalidLength
            { hash: String, length: usize, expected: usize }
            | e | {
                format_args!(
                    "expected a hash of {2} hex characters, got {1} in `{0}`",
                    e.hash, e.length, e.expected)
            },

        InvalidCharacter
            { hash: String }
            | e | { format_args!("hash `{0}` contains characters outside the accepted hex alphabet", e.hash) },
    }
}

define_error! {
    #[derive(Debug, PartialEq, Eq)]
    Error {
        EmptyDenom
            | _ | { "denomination cannot be empty" },

        MissingTraceHash
            { denom: String }
            | e | {
                format_args!(
                    "denomination `{0}` should be prefixed with the format 'ibc/{{hash(trace + \"/\" + base denom)}}'",
                    e.denom)
            },

        EmptyTraceHash
            { denom: String }
            | e | { format_args!("denomination `{0}` has an empty trace hash", e.denom) },

        InvalidTraceHash
            { denom: String }
            [ HashError ]
            | e | { format_args!("denomination `{0}` has an invalid trace hash", e.denom) },

        EmptyBaseDenom
            | _ | { "base denomination cannot be blank" },

        InvalidTracePort
            { port_id: String }
            [ ValidationError ]
            | e | { format_args!("invalid port identifier `{0}` in denomination trace", e.port_id) },

        InvalidTraceChannel
            { channel_id: String }
            [ ValidationError ]
            | e | { format_args!("invalid channel identifier `{0}` in denomination trace", e.channel_id) },
    }
}
