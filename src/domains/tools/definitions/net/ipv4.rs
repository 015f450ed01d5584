//! IPv4 math shared across the networking tools.
//!
//! Everything here works on the 32-bit integer form of an address. Parsing,
//! subnet derivation and range expansion are pure functions returning
//! `Result`; the tool wrappers map errors into the structured
//! result-or-error shape expected by clients.

use std::net::Ipv4Addr;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::Serialize;
use thiserror::Error;

/// Hard ceiling on the number of addresses a range expansion will return.
///
/// The true count is always reported; only the materialized list is capped.
pub const MAX_EXPANDED_ADDRESSES: usize = 65_536;

/// Errors produced by the IPv4 tools.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Ipv4Error {
    /// Malformed input syntax (bad octet, bad prefix, missing parts).
    #[error("invalid IPv4 input: {0}")]
    Parse(String),

    /// A dotted netmask that is syntactically an address but not a valid
    /// mask (ones must be contiguous from the left).
    #[error("invalid netmask: {0}")]
    InvalidMask(String),

    /// A hyphenated range whose end precedes its start.
    #[error("invalid range: {0}")]
    InvalidRange(String),
}

/// Subnet details derived from one CIDR input.
///
/// Usable-host convention: `num_usable_hosts = max(0, num_addresses - 2)`,
/// so /31 and /32 report zero usable hosts and omit the first/last host
/// fields. First/last usable are always `network+1` and `broadcast-1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct SubnetInfo {
    /// Network address in dotted form.
    pub network_address: String,
    /// Broadcast address in dotted form.
    pub broadcast_address: String,
    /// Netmask in dotted form.
    pub netmask: String,
    /// Bitwise complement of the netmask, dotted form.
    pub wildcard_mask: String,
    /// CIDR prefix length.
    pub cidr_prefix: u8,
    /// Total number of addresses in the block.
    pub num_addresses: u64,
    /// Usable host count (see convention above).
    pub num_usable_hosts: u64,
    /// First usable host, absent when the block has no usable hosts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_usable_host: Option<String>,
    /// Last usable host, absent when the block has no usable hosts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_usable_host: Option<String>,
    /// Whether the network address falls in a private block.
    pub is_private: bool,
    /// Whether the network address is multicast.
    pub is_multicast: bool,
    /// Whether the network address is loopback.
    pub is_loopback: bool,
}

/// Result of expanding a CIDR block or hyphenated range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct RangeResult {
    /// True total number of addresses in the range, regardless of capping.
    pub count: u64,
    /// Addresses in strictly ascending order, at most
    /// [`MAX_EXPANDED_ADDRESSES`] entries.
    pub addresses: Vec<String>,
    /// True when the list was capped.
    pub truncated: bool,
}

/// Parse a dotted-decimal address into its integer form.
pub fn parse_addr(input: &str) -> Result<u32, Ipv4Error> {
    Ipv4Addr::from_str(input.trim())
        .map(u32::from)
        .map_err(|_| Ipv4Error::Parse(format!("'{}' is not a valid IPv4 address", input.trim())))
}

/// Render the integer form of an address as dotted decimal.
pub fn dotted(value: u32) -> String {
    Ipv4Addr::from(value).to_string()
}

/// Netmask with `prefix` leading ones.
pub fn mask_from_prefix(prefix: u8) -> u32 {
    match prefix {
        0 => 0,
        p => u32::MAX << (32 - u32::from(p)),
    }
}

/// Recover the prefix length from a netmask, rejecting non-contiguous masks.
pub fn prefix_from_mask(mask: u32) -> Result<u8, Ipv4Error> {
    if mask.count_ones() != mask.leading_ones() {
        return Err(Ipv4Error::InvalidMask(format!(
            "{} does not have contiguous leading ones",
            dotted(mask)
        )));
    }
    Ok(mask.count_ones() as u8)
}

/// Parse `A.B.C.D/N` or `A.B.C.D/M.M.M.M` into (base address, prefix).
pub fn parse_cidr(input: &str) -> Result<(u32, u8), Ipv4Error> {
    let input = input.trim();
    let (addr_part, mask_part) = input.split_once('/').ok_or_else(|| {
        Ipv4Error::Parse(format!(
            "'{input}' is missing a '/prefix' or '/netmask' part"
        ))
    })?;

    let base = parse_addr(addr_part)?;
    let mask_part = mask_part.trim();

    let prefix = if mask_part.contains('.') {
        prefix_from_mask(parse_addr(mask_part)?)?
    } else {
        let prefix: u8 = mask_part
            .parse()
            .map_err(|_| Ipv4Error::Parse(format!("'{mask_part}' is not a valid prefix length")))?;
        if prefix > 32 {
            return Err(Ipv4Error::Parse(format!(
                "prefix length {prefix} is out of range (0-32)"
            )));
        }
        prefix
    };

    Ok((base, prefix))
}

/// Derive all subnet details for one CIDR input.
///
/// Host bits in the base address are allowed and masked off, so
/// `192.168.1.50/24` describes the `192.168.1.0/24` network.
pub fn calculate_subnet(ip_cidr: &str) -> Result<SubnetInfo, Ipv4Error> {
    let (base, prefix) = parse_cidr(ip_cidr)?;
    let mask = mask_from_prefix(prefix);
    let network = base & mask;
    let broadcast = network | !mask;

    let num_addresses = 1u64 << (32 - u32::from(prefix));
    let num_usable_hosts = num_addresses.saturating_sub(2);
    let has_hosts = num_usable_hosts > 0;

    let network_addr = Ipv4Addr::from(network);

    Ok(SubnetInfo {
        network_address: network_addr.to_string(),
        broadcast_address: dotted(broadcast),
        netmask: dotted(mask),
        wildcard_mask: dotted(!mask),
        cidr_prefix: prefix,
        num_addresses,
        num_usable_hosts,
        first_usable_host: has_hosts.then(|| dotted(network + 1)),
        last_usable_host: has_hosts.then(|| dotted(broadcast - 1)),
        is_private: network_addr.is_private(),
        is_multicast: network_addr.is_multicast(),
        is_loopback: network_addr.is_loopback(),
    })
}

/// Expand a CIDR block, a hyphenated `start-end` range, or a single address
/// into an ordered address list.
///
/// The cap is applied before any address is materialized: the cost is
/// proportional to the returned list, never to the true range size.
pub fn expand_range(ip_range: &str) -> Result<RangeResult, Ipv4Error> {
    let input = ip_range.trim();
    if input.is_empty() {
        return Err(Ipv4Error::Parse("range input cannot be empty".to_string()));
    }

    let (start, end) = if input.contains('/') {
        let (base, prefix) = parse_cidr(input)?;
        let mask = mask_from_prefix(prefix);
        let network = base & mask;
        (network, network | !mask)
    } else if let Some((start_part, end_part)) = input.split_once('-') {
        let start = parse_addr(start_part)?;
        let end = parse_addr(end_part)?;
        if end < start {
            return Err(Ipv4Error::InvalidRange(format!(
                "start address {} is greater than end address {}",
                dotted(start),
                dotted(end)
            )));
        }
        (start, end)
    } else {
        // Bare address: a range of one.
        let addr = parse_addr(input)?;
        (addr, addr)
    };

    let count = u64::from(end) - u64::from(start) + 1;
    let truncated = count > MAX_EXPANDED_ADDRESSES as u64;
    let limit = count.min(MAX_EXPANDED_ADDRESSES as u64) as u32;

    let addresses = (0..limit).map(|offset| dotted(start + offset)).collect();

    Ok(RangeResult {
        count,
        addresses,
        truncated,
    })
}

/// Parse an address given in any of the four canonical textual forms.
///
/// With a `hint` of `dotted`, `decimal`, `hex` or `binary` the input is
/// parsed strictly in that form. Without a hint the form is detected in
/// this order: dotted decimal, `0x`-prefixed hex, bare hex containing at
/// least one letter, binary (only `0`/`1`, up to 32 digits, spaces
/// allowed), and finally plain decimal.
pub fn parse_flexible(input: &str, hint: Option<&str>) -> Result<u32, Ipv4Error> {
    let input = input.trim();
    if input.is_empty() {
        return Err(Ipv4Error::Parse("address cannot be empty".to_string()));
    }

    if let Some(hint) = hint {
        return match hint.to_ascii_lowercase().as_str() {
            "dotted" => parse_addr(input),
            "decimal" => parse_decimal(input),
            "hex" => parse_hex_digits(input.strip_prefix("0x").or_else(|| input.strip_prefix("0X")).unwrap_or(input)),
            "binary" => parse_binary(&strip_spaces(input)),
            other => Err(Ipv4Error::Parse(format!("unknown format hint: {other}"))),
        };
    }

    if input.contains('.') {
        return parse_addr(input);
    }
    if let Some(digits) = input.strip_prefix("0x").or_else(|| input.strip_prefix("0X")) {
        return parse_hex_digits(digits);
    }

    let compact = strip_spaces(input);
    if (1..=8).contains(&compact.len())
        && compact.chars().all(|c| c.is_ascii_hexdigit())
        && compact.chars().any(|c| c.is_ascii_alphabetic())
    {
        return parse_hex_digits(&compact);
    }
    if (1..=32).contains(&compact.len()) && compact.chars().all(|c| c == '0' || c == '1') {
        return parse_binary(&compact);
    }
    if !compact.is_empty() && compact.chars().all(|c| c.is_ascii_digit()) {
        return parse_decimal(&compact);
    }

    Err(Ipv4Error::Parse(format!(
        "could not determine the format of '{input}'"
    )))
}

fn strip_spaces(input: &str) -> String {
    input.chars().filter(|c| *c != ' ').collect()
}

fn parse_decimal(input: &str) -> Result<u32, Ipv4Error> {
    let value: u64 = input
        .parse()
        .map_err(|_| Ipv4Error::Parse(format!("'{input}' is not a valid decimal address")))?;
    u32::try_from(value).map_err(|_| {
        Ipv4Error::Parse(format!(
            "decimal address {value} is out of range (0-4294967295)"
        ))
    })
}

fn parse_hex_digits(digits: &str) -> Result<u32, Ipv4Error> {
    if digits.is_empty() || digits.len() > 8 {
        return Err(Ipv4Error::Parse(format!(
            "'{digits}' is not a valid hexadecimal address"
        )));
    }
    u32::from_str_radix(digits, 16)
        .map_err(|_| Ipv4Error::Parse(format!("'{digits}' is not a valid hexadecimal address")))
}

fn parse_binary(digits: &str) -> Result<u32, Ipv4Error> {
    if digits.is_empty() || digits.len() > 32 || !digits.chars().all(|c| c == '0' || c == '1') {
        return Err(Ipv4Error::Parse(format!(
            "'{digits}' is not a valid binary address"
        )));
    }
    u32::from_str_radix(digits, 2)
        .map_err(|_| Ipv4Error::Parse(format!("'{digits}' is not a valid binary address")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_from_prefix() {
        assert_eq!(mask_from_prefix(0), 0);
        assert_eq!(mask_from_prefix(8), 0xFF00_0000);
        assert_eq!(mask_from_prefix(24), 0xFFFF_FF00);
        assert_eq!(mask_from_prefix(32), u32::MAX);
    }

    #[test]
    fn test_prefix_from_mask_contiguous() {
        assert_eq!(prefix_from_mask(0xFFFF_FF00), Ok(24));
        assert_eq!(prefix_from_mask(0), Ok(0));
        assert_eq!(prefix_from_mask(u32::MAX), Ok(32));
    }

    #[test]
    fn test_prefix_from_mask_rejects_holes() {
        let err = prefix_from_mask(0xFF00_FF00).unwrap_err();
        assert!(matches!(err, Ipv4Error::InvalidMask(_)));
    }

    #[test]
    fn test_parse_cidr_dotted_mask() {
        assert_eq!(
            parse_cidr("10.0.0.1/255.255.0.0"),
            Ok((0x0A00_0001, 16))
        );
        assert!(matches!(
            parse_cidr("10.0.0.1/255.0.255.0"),
            Err(Ipv4Error::InvalidMask(_))
        ));
    }

    #[test]
    fn test_parse_cidr_rejects_bad_inputs() {
        assert!(matches!(parse_cidr("10.0.0.1"), Err(Ipv4Error::Parse(_))));
        assert!(matches!(parse_cidr("10.0.0.1/33"), Err(Ipv4Error::Parse(_))));
        assert!(matches!(parse_cidr("10.0.0.256/24"), Err(Ipv4Error::Parse(_))));
        assert!(matches!(parse_cidr("10.0.0/24"), Err(Ipv4Error::Parse(_))));
    }

    #[test]
    fn test_calculate_subnet_slash24() {
        let info = calculate_subnet("192.168.1.50/24").unwrap();
        assert_eq!(info.network_address, "192.168.1.0");
        assert_eq!(info.broadcast_address, "192.168.1.255");
        assert_eq!(info.netmask, "255.255.255.0");
        assert_eq!(info.wildcard_mask, "0.0.0.255");
        assert_eq!(info.cidr_prefix, 24);
        assert_eq!(info.num_addresses, 256);
        assert_eq!(info.num_usable_hosts, 254);
        assert_eq!(info.first_usable_host.as_deref(), Some("192.168.1.1"));
        assert_eq!(info.last_usable_host.as_deref(), Some("192.168.1.254"));
        assert!(info.is_private);
        assert!(!info.is_loopback);
    }

    #[test]
    fn test_calculate_subnet_slash31_and_32_have_no_hosts() {
        let info = calculate_subnet("10.0.0.0/31").unwrap();
        assert_eq!(info.num_addresses, 2);
        assert_eq!(info.num_usable_hosts, 0);
        assert_eq!(info.first_usable_host, None);
        assert_eq!(info.last_usable_host, None);

        let info = calculate_subnet("10.0.0.7/32").unwrap();
        assert_eq!(info.num_addresses, 1);
        assert_eq!(info.num_usable_hosts, 0);
        assert_eq!(info.network_address, "10.0.0.7");
        assert_eq!(info.broadcast_address, "10.0.0.7");
    }

    #[test]
    fn test_calculate_subnet_slash0() {
        let info = calculate_subnet("0.0.0.0/0").unwrap();
        assert_eq!(info.num_addresses, 1u64 << 32);
        assert_eq!(info.netmask, "0.0.0.0");
        assert_eq!(info.wildcard_mask, "255.255.255.255");
    }

    #[test]
    fn test_broadcast_is_network_or_wildcard() {
        for cidr in ["172.16.5.9/12", "192.168.1.254/30", "8.8.8.8/32"] {
            let info = calculate_subnet(cidr).unwrap();
            let network = u32::from(info.network_address.parse::<Ipv4Addr>().unwrap());
            let broadcast = u32::from(info.broadcast_address.parse::<Ipv4Addr>().unwrap());
            let wildcard = u32::from(info.wildcard_mask.parse::<Ipv4Addr>().unwrap());
            assert_eq!(broadcast, network | wildcard);
            assert_eq!(network & wildcard, 0, "host bits of network must be clear");
        }
    }

    #[test]
    fn test_expand_range_slash30_fixture() {
        let result = expand_range("192.168.1.254/30").unwrap();
        assert_eq!(result.count, 4);
        assert!(!result.truncated);
        assert_eq!(
            result.addresses,
            vec![
                "192.168.1.252",
                "192.168.1.253",
                "192.168.1.254",
                "192.168.1.255"
            ]
        );
    }

    #[test]
    fn test_expand_range_slash24_complete_and_ordered() {
        let result = expand_range("10.1.2.0/24").unwrap();
        assert_eq!(result.count, 256);
        assert_eq!(result.addresses.len(), 256);
        assert!(!result.truncated);
        assert_eq!(result.addresses[0], "10.1.2.0");
        assert_eq!(result.addresses[255], "10.1.2.255");

        let mut sorted = result.addresses.clone();
        sorted.sort_by_key(|a| u32::from(a.parse::<Ipv4Addr>().unwrap()));
        assert_eq!(sorted, result.addresses);
    }

    #[test]
    fn test_expand_range_slash8_truncates_with_true_count() {
        let result = expand_range("10.0.0.0/8").unwrap();
        assert_eq!(result.count, 16_777_216);
        assert_eq!(result.addresses.len(), MAX_EXPANDED_ADDRESSES);
        assert!(result.truncated);
        assert_eq!(result.addresses[0], "10.0.0.0");
        assert_eq!(result.addresses[MAX_EXPANDED_ADDRESSES - 1], "10.0.255.255");
    }

    #[test]
    fn test_expand_range_slash0_is_capped_cheaply() {
        // Must never try to materialize the 2^32 range.
        let result = expand_range("0.0.0.0/0").unwrap();
        assert_eq!(result.count, 1u64 << 32);
        assert_eq!(result.addresses.len(), MAX_EXPANDED_ADDRESSES);
        assert!(result.truncated);
    }

    #[test]
    fn test_expand_range_hyphenated_fixture() {
        let result = expand_range("10.0.0.1-10.0.0.3").unwrap();
        assert_eq!(result.count, 3);
        assert!(!result.truncated);
        assert_eq!(result.addresses, vec!["10.0.0.1", "10.0.0.2", "10.0.0.3"]);
    }

    #[test]
    fn test_expand_range_reversed_bounds() {
        let err = expand_range("10.0.0.9-10.0.0.1").unwrap_err();
        assert!(matches!(err, Ipv4Error::InvalidRange(_)));
    }

    #[test]
    fn test_expand_range_single_address() {
        let result = expand_range("172.16.0.1").unwrap();
        assert_eq!(result.count, 1);
        assert_eq!(result.addresses, vec!["172.16.0.1"]);
        assert!(!result.truncated);
    }

    #[test]
    fn test_expand_range_at_address_space_end() {
        let result = expand_range("255.255.255.254-255.255.255.255").unwrap();
        assert_eq!(result.count, 2);
        assert_eq!(
            result.addresses,
            vec!["255.255.255.254", "255.255.255.255"]
        );
    }

    #[test]
    fn test_expand_range_rejects_garbage() {
        assert!(matches!(expand_range(""), Err(Ipv4Error::Parse(_))));
        assert!(matches!(expand_range("not-an-ip"), Err(Ipv4Error::Parse(_))));
        assert!(matches!(
            expand_range("10.0.0.1-10.0.0.2-10.0.0.3"),
            Err(Ipv4Error::Parse(_))
        ));
    }

    #[test]
    fn test_parse_flexible_autodetect() {
        assert_eq!(parse_flexible("192.168.1.1", None), Ok(0xC0A8_0101));
        assert_eq!(parse_flexible("0xC0A80101", None), Ok(0xC0A8_0101));
        assert_eq!(parse_flexible("C0A80101", None), Ok(0xC0A8_0101));
        assert_eq!(parse_flexible("3232235777", None), Ok(0xC0A8_0101));
        assert_eq!(
            parse_flexible("11000000 10101000 00000001 00000001", None),
            Ok(0xC0A8_0101)
        );
        // All-digit 0/1 strings are binary before decimal.
        assert_eq!(parse_flexible("11", None), Ok(3));
    }

    #[test]
    fn test_parse_flexible_hints() {
        assert_eq!(parse_flexible("11", Some("decimal")), Ok(11));
        assert_eq!(parse_flexible("11", Some("binary")), Ok(3));
        assert_eq!(parse_flexible("11", Some("hex")), Ok(17));
        assert!(matches!(
            parse_flexible("192.168.1.1", Some("octal")),
            Err(Ipv4Error::Parse(_))
        ));
    }

    #[test]
    fn test_parse_flexible_rejects_out_of_range() {
        assert!(matches!(
            parse_flexible("4294967296", None),
            Err(Ipv4Error::Parse(_))
        ));
        assert!(matches!(
            parse_flexible("123456789A", None),
            Err(Ipv4Error::Parse(_))
        ));
    }
}
