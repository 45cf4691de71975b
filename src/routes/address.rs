// Little-endian hex to dotted-decimal IPv4 conversion

use std::net::Ipv4Addr;

use crate::error::{AppError, AppResult};

/// Convert an 8-character little-endian hex word (as written by the kernel)
/// into dotted-decimal IPv4 text.
pub fn to_dotted_decimal(hex8: &str) -> AppResult<String> {
    if hex8.len() != 8 {
        return Err(AppError::InvalidAddressEncoding(hex8.to_string()));
    }

    let bytes: [u8; 4] = hex::decode(hex8)
        .ok()
        .and_then(|b| b.try_into().ok())
        .ok_or_else(|| AppError::InvalidAddressEncoding(hex8.to_string()))?;

    // First stored byte is the lowest-order octet of the address
    Ok(Ipv4Addr::from(u32::from_le_bytes(bytes)).to_string())
}
