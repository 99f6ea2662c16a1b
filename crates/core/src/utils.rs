//! Utility functions

use crate::error::{CheckerError, Result};
use alloy_primitives::Address;
use std::{path::Path, str::FromStr};
use url::Url;

/// Parses an account address in `0x`-prefixed hex form.
///
/// The letter case of the hex digits is not significant: a mixed-case address with a wrong
/// checksum still parses, so that declared addresses compare case-insensitively.
pub fn parse_address(s: &str) -> Result<Address> {
    let s = s.trim();
    let invalid = || CheckerError::InvalidAddress(s.to_string());
    let digits = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).ok_or_else(invalid)?;
    // exactly one prefix followed by 20 bytes of hex
    if digits.len() != 40 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    Address::from_str(digits).map_err(|_| invalid())
}

/// Returns the checksummed form of `s` if it is an address.
pub fn canonical_address(s: &str) -> Option<String> {
    parse_address(s).ok().map(|address| address.to_checksum(None))
}

/// Returns the parsed URL if `s` is an absolute URL.
pub fn parse_url(s: &str) -> Option<Url> {
    Url::parse(s.trim()).ok().filter(|url| url.has_host())
}

/// Reads the file at `path`, attaching the path to any io error.
pub fn read_to_string(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|err| CheckerError::io(err, path))
}
