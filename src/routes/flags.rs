// Route flag bitmask decoding

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum RouteFlag {
    Up,        // 0x01
    Gateway,   // 0x02
    Host,      // 0x04
    Reinstate, // 0x08
    Modified,  // 0x10
    Dynamic,   // 0x20
    XResolve,  // 0x40
}

impl RouteFlag {
    /// The surfaced flags, in ascending bit order
    pub const ALL: [RouteFlag; 7] = [
        RouteFlag::Up,
        RouteFlag::Gateway,
        RouteFlag::Host,
        RouteFlag::Reinstate,
        RouteFlag::Modified,
        RouteFlag::Dynamic,
        RouteFlag::XResolve,
    ];

    pub fn bit(self) -> u32 {
        match self {
            RouteFlag::Up => 0x01,
            RouteFlag::Gateway => 0x02,
            RouteFlag::Host => 0x04,
            RouteFlag::Reinstate => 0x08,
            RouteFlag::Modified => 0x10,
            RouteFlag::Dynamic => 0x20,
            RouteFlag::XResolve => 0x40,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RouteFlag::Up => "UP",
            RouteFlag::Gateway => "GATEWAY",
            RouteFlag::Host => "HOST",
            RouteFlag::Reinstate => "REINSTATE",
            RouteFlag::Modified => "MODIFIED",
            RouteFlag::Dynamic => "DYNAMIC",
            RouteFlag::XResolve => "XRESOLVE",
        }
    }
}

/// Named flags found in a route's bitmask
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFlags {
    flags: Vec<RouteFlag>,
}

impl ParsedFlags {
    pub fn contains(&self, flag: RouteFlag) -> bool {
        self.flags.contains(&flag)
    }

    pub fn iter(&self) -> impl Iterator<Item = RouteFlag> + '_ {
        self.flags.iter().copied()
    }

    /// Traffic for this route goes through an intermediate router
    pub fn is_gateway_route(&self) -> bool {
        self.contains(RouteFlag::Gateway)
    }

    /// Names joined with ", " in bit order. With `trailing_separator` every
    /// name, including the last, is followed by the separator.
    pub fn display(&self, trailing_separator: bool) -> String {
        if trailing_separator {
            self.iter().map(|f| format!("{}, ", f.name())).collect()
        } else {
            self.iter().map(RouteFlag::name).collect::<Vec<_>>().join(", ")
        }
    }
}

/// Decode the kernel's hex flags field. Bits above XRESOLVE are ignored.
pub fn decode(flags_hex: &str) -> AppResult<ParsedFlags> {
    if flags_hex.is_empty() || !flags_hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(AppError::InvalidFlags(flags_hex.to_string()));
    }

    // Only the low bits are surfaced, so wider values keep their last 8 digits
    let low = &flags_hex[flags_hex.len().saturating_sub(8)..];
    let bits = u32::from_str_radix(low, 16)
        .map_err(|_| AppError::InvalidFlags(flags_hex.to_string()))?;

    let flags = RouteFlag::ALL
        .into_iter()
        .filter(|flag| bits & flag.bit() != 0)
        .collect();

    Ok(ParsedFlags { flags })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_gateway_route() {
        let flags = decode("0003").unwrap();
        assert!(flags.contains(RouteFlag::Up));
        assert!(flags.contains(RouteFlag::Gateway));
        assert!(flags.is_gateway_route());
        assert_eq!(flags.display(false), "UP, GATEWAY");
        assert_eq!(flags.display(true), "UP, GATEWAY, ");
    }

    #[test]
    fn test_decode_up_only() {
        let flags = decode("1").unwrap();
        assert!(!flags.is_gateway_route());
        assert_eq!(flags.display(false), "UP");
    }

    #[test]
    fn test_gateway_iff_bit_two() {
        for bits in 0u32..=0x1FF {
            let flags = decode(&format!("{:X}", bits)).unwrap();
            assert_eq!(flags.is_gateway_route(), bits & 0x2 != 0, "bits {:#x}", bits);
        }
    }

    #[test]
    fn test_all_flags_in_bit_order() {
        let flags = decode("7F").unwrap();
        assert_eq!(
            flags.display(false),
            "UP, GATEWAY, HOST, REINSTATE, MODIFIED, DYNAMIC, XRESOLVE"
        );
    }

    #[test]
    fn test_high_bits_ignored() {
        assert_eq!(decode("0100").unwrap().display(false), "");
        assert_eq!(decode("0205").unwrap().display(false), "UP, HOST");
        assert_eq!(decode("FFFFFFFF00000001").unwrap().display(false), "UP");
    }

    #[test]
    fn test_invalid_flags() {
        assert!(matches!(decode(""), Err(AppError::InvalidFlags(_))));
        assert!(matches!(decode("xyz"), Err(AppError::InvalidFlags(_))));
        assert!(matches!(decode("+3"), Err(AppError::InvalidFlags(_))));
        assert!(matches!(decode("-1"), Err(AppError::InvalidFlags(_))));
    }
}
