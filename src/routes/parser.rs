// Linux /proc/net/route reader

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::RouteRecord;
use crate::error::{AppError, AppResult};

pub const DEFAULT_ROUTE_TABLE_PATH: &str = "/proc/net/route";

const FIELD_COUNT: usize = 11;

/// Read every IPv4 route from the kernel table at `path`, in file order.
pub fn read_routes(path: &Path) -> AppResult<Vec<RouteRecord>> {
    let file = File::open(path).map_err(|source| AppError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    parse_routes(BufReader::new(file)).map_err(|e| match e {
        AppError::Io(source) => AppError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}

/// Parse routing table text: one header line, then one route per line.
pub fn parse_routes<R: BufRead>(reader: R) -> AppResult<Vec<RouteRecord>> {
    let mut routes = Vec::new();

    for (index, line) in reader.lines().enumerate().skip(1) {
        let line = line?;
        routes.push(parse_line(&line, index + 1)?);
    }

    Ok(routes)
}

fn parse_line(line: &str, line_number: usize) -> AppResult<RouteRecord> {
    // The kernel pads the last column with spaces; tabs are separators and stay
    let fields: Vec<&str> = line.trim_end_matches([' ', '\r', '\n']).split('\t').collect();

    let &[interface, destination, gateway, flags, _ref_count, _use_count, metric, mask, _mtu, _window, _irtt] =
        fields.as_slice()
    else {
        return Err(AppError::MalformedRecord {
            line: line_number,
            reason: format!("expected {} fields, found {}", FIELD_COUNT, fields.len()),
        });
    };

    if interface.is_empty() {
        return Err(AppError::MalformedRecord {
            line: line_number,
            reason: "empty interface name".to_string(),
        });
    }

    Ok(RouteRecord {
        interface: interface.to_string(),
        destination_hex: destination.to_string(),
        gateway_hex: gateway.to_string(),
        flags_hex: flags.to_string(),
        metric: metric.to_string(),
        mask_hex: mask.to_string(),
    })
}
