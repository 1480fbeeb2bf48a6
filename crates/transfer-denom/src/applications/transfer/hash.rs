//! Syntax of the trace hash carried by `ibc/{hash}` denominations.
//!
//! The hash is the hex encoding of a SHA-256 digest. Computing it from a
//! trace is left to the host chain; this module only checks its shape.

use serde::{Deserialize, Serialize};
use subtle_encoding::{Encoding, Hex};

use super::error::HashError;

/// Size in bytes of a trace hash (SHA-256).
pub const TRACE_HASH_SIZE: usize = 32;

/// Number of hex characters in an encoded trace hash.
pub const TRACE_HASH_HEX_LENGTH: usize = TRACE_HASH_SIZE * 2;

/// Which letter case is accepted for the hex digits of a trace hash.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashCase {
    /// Only `0-9` and `A-F`, as produced by host chains.
    #[default]
    Upper,
    /// Both `A-F` and `a-f`.
    Insensitive,
}

impl HashCase {
    fn accepts(self, b: u8) -> bool {
        match self {
            HashCase::Upper => b.is_ascii_digit() || (b'A'..=b'F').contains(&b),
            HashCase::Insensitive => b.is_ascii_hexdigit(),
        }
    }
}

/// Decodes `hash` into the digest bytes, checking its length and alphabet.
pub fn parse_hex_hash(hash: &str, case: HashCase) -> Result<Vec<u8>, HashError> {
    if hash.len() != TRACE_HASH_HEX_LENGTH {
        return Err(HashError::invalid_length(
            hash.to_string(),
            hash.len(),
            TRACE_HASH_HEX_LENGTH,
        ));
    }

    if !hash.bytes().all(|b| case.accepts(b)) {
        return Err(HashError::invalid_character(hash.to_string()));
    }

    // the alphabet is checked above, decode the normalized form
    Hex::upper_case()
        .decode(hash.to_ascii_uppercase().as_bytes())
        .map_err(|_| HashError::invalid_character(hash.to_string()))
}

/// Whether `hash` is a well-formed trace hash under the given `case` rule.
pub fn is_valid_hash_format(hash: &str, case: HashCase) -> bool {
    parse_hex_hash(hash, case).is_ok()
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::{is_valid_hash_format, parse_hex_hash, HashCase, TRACE_HASH_SIZE};
    use crate::applications::transfer::error::HashErrorDetail;

    const HASH: &str = "7F1D3FCF4AE79E1554D670D1AD949A9BA4E4A3C76C63093E17E446A46061A7A2";

    #[test]
    fn hash_format() {
        struct Test {
            name: &'static str,
            hash: String,
            case: HashCase,
            want_pass: bool,
        }

        let tests = vec![
            Test {
                name: "uppercase digest",
                hash: HASH.to_string(),
                case: HashCase::Upper,
                want_pass: true,
            },
            Test {
                name: "lowercase digest, upper only",
                hash: HASH.to_lowercase(),
                case: HashCase::Upper,
                want_pass: false,
            },
            Test {
                name: "lowercase digest, insensitive",
                hash: HASH.to_lowercase(),
                case: HashCase::Insensitive,
                want_pass: true,
            },
            Test {
                name: "uppercase digest, insensitive",
                hash: HASH.to_string(),
                case: HashCase::Insensitive,
                want_pass: true,
            },
            Test {
                name: "truncated digest",
                hash: HASH[..63].to_string(),
                case: HashCase::Upper,
                want_pass: false,
            },
            Test {
                name: "digest with extra character",
                hash: format!("{HASH}0"),
                case: HashCase::Upper,
                want_pass: false,
            },
            Test {
                name: "non-hex characters",
                hash: "!@#$!@#".to_string(),
                case: HashCase::Upper,
                want_pass: false,
            },
            Test {
                name: "non-hex letter at full length",
                hash: format!("{}G", &HASH[..63]),
                case: HashCase::Insensitive,
                want_pass: false,
            },
            Test {
                name: "empty",
                hash: String::new(),
                case: HashCase::Upper,
                want_pass: false,
            },
        ];

        for test in tests {
            assert_eq!(
                test.want_pass,
                is_valid_hash_format(&test.hash, test.case),
                "is_valid_hash_format failed for test {} with hash {:?}",
                test.name,
                test.hash,
            );
        }
    }

    #[test]
    fn parse_decodes_digest() {
        let bytes = parse_hex_hash(HASH, HashCase::Upper).unwrap();
        assert_eq!(bytes.len(), TRACE_HASH_SIZE);
        assert_eq!(bytes[0], 0x7F);
        assert_eq!(bytes[TRACE_HASH_SIZE - 1], 0xA2);

        let lower = parse_hex_hash(&HASH.to_lowercase(), HashCase::Insensitive).unwrap();
        assert_eq!(bytes, lower);
    }

    #[test]
    fn parse_reports_reason() {
        let err = parse_hex_hash("ABC", HashCase::Upper).unwrap_err();
        match err.detail() {
            HashErrorDetail::InvalidLength(e) => {
                assert_eq!(e.length, 3);
                assert_eq!(e.expected, 64);
            }
            other => panic!("unexpected error {other:?}"),
        }

        let err = parse_hex_hash(&HASH.to_lowercase(), HashCase::Upper).unwrap_err();
        assert!(matches!(err.detail(), HashErrorDetail::InvalidCharacter(_)));
    }
}
