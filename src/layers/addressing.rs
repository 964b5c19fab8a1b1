//! Synthetic, deterministic addresses derived from router names.

use crate::types::RouterName;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use super::LayerError;

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// Salt that keeps MAC derivation independent of IP derivation
const MAC_SALT: &[u8] = b"mac:";

/// 32-bit FNV-1a over a sequence of byte slices
fn fnv1a(parts: &[&[u8]]) -> u32 {
    let mut hash = FNV_OFFSET_BASIS;
    for part in parts {
        for byte in *part {
            hash ^= u32::from(*byte);
            hash = hash.wrapping_mul(FNV_PRIME);
        }
    }
    hash
}

/// Private `10.0.0.0/8` address of a router
pub fn ip_for(name: &RouterName) -> Ipv4Addr {
    let [_, b, c, d] = fnv1a(&[name.as_str().as_bytes()]).to_be_bytes();
    Ipv4Addr::new(10, b, c, d)
}

/// Locally administered unicast MAC address of a router
pub fn mac_for(name: &RouterName) -> MacAddress {
    let [a, b, c, d] = fnv1a(&[MAC_SALT, name.as_str().as_bytes()]).to_be_bytes();
    MacAddress([0x02, 0x00, a, b, c, d])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct MacAddress(pub [u8; 6]);

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}", a, b, c, d, e, g)
    }
}

impl FromStr for MacAddress {
    type Err = LayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut octets = [0u8; 6];
        let mut parts = s.split(':');
        for octet in octets.iter_mut() {
            let part = parts.next().ok_or_else(|| LayerError::InvalidMac(s.to_string()))?;
            if part.len() != 2 {
                return Err(LayerError::InvalidMac(s.to_string()));
            }
            *octet = u8::from_str_radix(part, 16).map_err(|_| LayerError::InvalidMac(s.to_string()))?;
        }
        if parts.next().is_some() {
            return Err(LayerError::InvalidMac(s.to_string()));
        }
        Ok(MacAddress(octets))
    }
}

impl From<MacAddress> for String {
    fn from(mac: MacAddress) -> Self {
        mac.to_string()
    }
}

impl TryFrom<String> for MacAddress {
    type Error = LayerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
