use crate::DomainError;
use std::fmt;
use std::str::FromStr;

/// Link-layer (MAC) address used as the join key between lease and neighbor data.
///
/// Stored as raw octets, so every textual notation that names the same address
/// compares equal. `Display` always renders the canonical lowercase,
/// colon-separated, zero-padded form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HardwareAddress([u8; 6]);

impl HardwareAddress {
    pub const fn new(octets: [u8; 6]) -> Self {
        Self(octets)
    }

    pub fn octets(&self) -> [u8; 6] {
        self.0
    }

    /// Parses any accepted notation:
    /// `aa:bb:cc:dd:ee:ff`, `AA-BB-CC-DD-EE-FF`, BSD unpadded `0:1b:2c:3:4:5`,
    /// Cisco dotted `aabb.ccdd.eeff` and bare `aabbccddeeff`.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let text = input.trim();
        let invalid = || DomainError::InvalidHardwareAddress(text.to_string());

        if text.contains(':') || text.contains('-') {
            let parts: Vec<&str> = text.split(|c| c == ':' || c == '-').collect();
            if parts.len() != 6 {
                return Err(invalid());
            }
            let mut octets = [0u8; 6];
            for (slot, part) in octets.iter_mut().zip(parts) {
                if part.is_empty() || part.len() > 2 {
                    return Err(invalid());
                }
                *slot = u8::from_str_radix(part, 16).map_err(|_| invalid())?;
            }
            return Ok(Self(octets));
        }

        let digits: String = if text.contains('.') {
            let groups: Vec<&str> = text.split('.').collect();
            if groups.len() != 3 || groups.iter().any(|g| g.len() != 4) {
                return Err(invalid());
            }
            groups.concat()
        } else {
            text.to_string()
        };

        if digits.len() != 12 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let mut octets = [0u8; 6];
        for (i, slot) in octets.iter_mut().enumerate() {
            *slot = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16).map_err(|_| invalid())?;
        }
        Ok(Self(octets))
    }
}

impl FromStr for HardwareAddress {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for HardwareAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            a, b, c, d, e, g
        )
    }
}
