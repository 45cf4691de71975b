// Routes module - reads the kernel IPv4 routing table and decodes its fields

pub mod address;
pub mod flags;
pub mod parser;

/// One data line of the kernel routing table.
///
/// Addresses and flags are kept in their on-disk hex form; decoding happens
/// when the record is rendered. Reference count, use count, MTU, window and
/// IRTT are not kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRecord {
    pub interface: String,
    pub destination_hex: String,
    pub gateway_hex: String,
    pub flags_hex: String,
    pub metric: String,
    pub mask_hex: String,
}
