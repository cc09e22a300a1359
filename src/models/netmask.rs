//! Dotted-decimal netmask to CIDR prefix length conversion.

use crate::error::{Error, Result};

/// Convert a dotted-decimal subnet mask into a CIDR prefix length by summing
/// the set bits of all four octets.
///
/// # Examples
/// ```
/// use nsx_ipset_loader::models::prefix_len;
/// assert_eq!(prefix_len("255.255.255.0").unwrap(), 24);
/// ```
///
/// Octets are not range-checked and contiguity is not enforced: a
/// non-contiguous mask such as `255.0.255.0` yields a numerically plausible
/// but semantically wrong prefix length. Known limitation, kept as-is.
pub fn prefix_len(mask: &str) -> Result<u8> {
    let octets: Vec<&str> = mask.split('.').collect();
    if octets.len() != 4 {
        return Err(Error::InvalidNetmask(mask.to_string()));
    }
    let mut bits: u32 = 0;
    for octet in octets {
        let value: u32 = octet
            .trim()
            .parse()
            .map_err(|_| Error::InvalidNetmask(mask.to_string()))?;
        bits += value.count_ones();
    }
    Ok(bits as u8)
}

/// Render the ipset value for an address and prefix length.
///
/// A /32 emits the bare address with no suffix, anything else appends
/// `/<prefix>`.
pub fn render_value(address: &str, prefix: u8) -> String {
    if prefix == 32 {
        address.to_string()
    } else {
        format!("{}/{}", address, prefix)
    }
}
