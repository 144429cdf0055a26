use std::fmt::{self, Display, Formatter};
use std::net::Ipv4Addr;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Errors produced when a wildcard mask is not an inverted subnet mask.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WildcardError {
    /// The "don't care" bits are not a contiguous run at the low end.
    #[error("non-contiguous wildcard mask {0}")]
    NonContiguous(Ipv4Addr),
    /// A prefix length above 32 was requested.
    #[error("prefix length {0} exceeds 32")]
    PrefixTooLong(u8),
}

/// An IPv4 network in CIDR form.
///
/// The address is always stored truncated to its network portion, so two
/// prefixes built from different host addresses in the same network compare
/// equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ipv4Prefix {
    network: Ipv4Addr,
    len: u8,
}

impl Ipv4Prefix {
    /// Build a prefix, clearing any host bits in `addr`.
    pub fn new(addr: Ipv4Addr, len: u8) -> Result<Self, WildcardError> {
        if len > 32 {
            return Err(WildcardError::PrefixTooLong(len));
        }
        let network = u32::from(addr) & netmask_bits(len);
        Ok(Self {
            network: Ipv4Addr::from(network),
            len,
        })
    }

    /// The default route, `0.0.0.0/0`.
    pub const fn any() -> Self {
        Self {
            network: Ipv4Addr::UNSPECIFIED,
            len: 0,
        }
    }

    /// Convert an ACL `address wildcard` pair into CIDR form.
    pub fn from_wildcard(addr: Ipv4Addr, wildcard: Ipv4Addr) -> Result<Self, WildcardError> {
        let len = prefix_len_from_wildcard(wildcard)?;
        Self::new(addr, len)
    }

    pub fn network(&self) -> Ipv4Addr {
        self.network
    }

    pub fn prefix_len(&self) -> u8 {
        self.len
    }

    /// True when the address passed to the constructor had bits set outside
    /// the network portion.
    pub fn truncated_from(&self, addr: Ipv4Addr) -> bool {
        addr != self.network
    }
}

impl Display for Ipv4Prefix {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network, self.len)
    }
}

impl Serialize for Ipv4Prefix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Return the prefix length described by a wildcard (inverted subnet) mask.
///
/// The mask's set bits must form one contiguous run ending at bit 0, e.g.
/// `0.0.15.255` (/20). `0.0.0.0` is a host route (/32) and `255.255.255.255`
/// matches everything (/0).
pub fn prefix_len_from_wildcard(wildcard: Ipv4Addr) -> Result<u8, WildcardError> {
    let netmask = !u32::from(wildcard);
    let ones = netmask.leading_ones();
    if ones + netmask.trailing_zeros() != 32 {
        return Err(WildcardError::NonContiguous(wildcard));
    }
    Ok(ones as u8)
}

fn netmask_bits(len: u8) -> u32 {
    u32::MAX.checked_shl(32 - u32::from(len)).unwrap_or(0)
}
