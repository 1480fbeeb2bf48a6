use super::error::ValidationError as Error;

/// Path separator (ie. forward slash '/')
const PATH_SEPARATOR: char = '/';
const VALID_SPECIAL_CHARS: &str = "._+-#[]<>";

/// Prefix of every channel identifier generated by a host chain.
pub const CHANNEL_ID_PREFIX: &str = "channel";

/// Default validator function for identifiers.
///
/// A valid identifier only contains alphanumeric characters or one of `._+-#[]<>`, and is of a
/// given min and max length.
pub fn validate_identifier(id: &str, min: usize, max: usize) -> Result<(), Error> {
    assert!(max >= min);

    // Check identifier is not empty
    if id.is_empty() {
        return Err(Error::empty());
    }

    // Check identifier does not contain path separators
    if id.contains(PATH_SEPARATOR) {
        return Err(Error::contain_separator(id.to_string()));
    }

    // Check identifier length is between given min/max
    if id.len() < min || id.len() > max {
        return Err(Error::invalid_length(id.to_string(), id.len(), min, max));
    }

    // Check that the identifier comprises only valid characters:
    // - Alphanumeric
    // - `.`, `_`, `+`, `-`, `#`
    // - `[`, `]`, `<`, `>`
    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || VALID_SPECIAL_CHARS.contains(c))
    {
        return Err(Error::invalid_character(id.to_string()));
    }

    // All good!
    Ok(())
}

/// Default validator function for Port identifiers.
///
/// A valid identifier must be between 2-128 characters.
pub fn validate_port_identifier(id: &str) -> Result<(), Error> {
    validate_identifier(id, 2, 128)
}

/// Default validator function for Channel identifiers.
///
/// A valid identifier must be between 8-64 characters.
pub fn validate_channel_identifier(id: &str) -> Result<(), Error> {
    validate_identifier(id, 8, 64)
}

/// Checks whether `id` has the shape of a host-generated channel identifier,
/// i.e. `channel-` followed by one or more decimal digits.
///
/// Unlike [`validate_channel_identifier`] this places no bound on the
/// length of the numeric suffix.
pub fn is_channel_id_format(id: &str) -> bool {
    id.strip_prefix(CHANNEL_ID_PREFIX)
        .and_then(|rest| rest.strip_prefix('-'))
        .map_or(false, |counter| {
            !counter.is_empty() && counter.bytes().all(|b| b.is_ascii_digit())
        })
}
