//! Parsers for the PoE script's line-oriented output.
//!
//! Pure functions operating on `&str`, no process handling needed. Every
//! record is one line of exactly three single-space separated fields:
//!
//! ```text
//! <id> <status> <hostname>
//! ```
//!
//! `status` is compared verbatim against [`STATUS_UP`]; any other token means
//! the port is powered off.

use poegate_domain::device::Device;
use poegate_domain::id::DeviceId;

use crate::error::{LineParseError, ListingParseError};

/// Status token reported for a powered port.
pub const STATUS_UP: &str = "Up";

const FIELD_COUNT: usize = 3;

/// Parse a single `<id> <status> <hostname>` record.
///
/// Only the line terminator is stripped before splitting; trailing
/// whitespace is then trimmed off the hostname field alone, so `"7 Up "`
/// is a record with an empty hostname.
///
/// # Errors
///
/// Returns [`LineParseError::FieldCount`] when the line does not have exactly
/// three fields, or [`LineParseError::InvalidId`] when the id is not a
/// non-negative integer.
pub fn parse_line(line: &str) -> Result<Device, LineParseError> {
    let fields: Vec<&str> = line.trim_end_matches(['\r', '\n']).split(' ').collect();
    let [id, status, hostname] = fields[..] else {
        return Err(LineParseError::FieldCount {
            found: fields.len(),
        });
    };

    let id = id
        .parse::<DeviceId>()
        .map_err(|source| LineParseError::InvalidId {
            token: id.to_string(),
            source,
        })?;

    Ok(Device::new(id, status == STATUS_UP, hostname))
}

/// Parse the output of a listing, one record per line.
///
/// Blank lines are skipped. The first malformed line aborts the whole
/// listing.
///
/// # Errors
///
/// Returns [`ListingParseError`] carrying the 1-based line number of the
/// first line that fails [`parse_line`].
pub fn parse_listing(output: &str) -> Result<Vec<Device>, ListingParseError> {
    output
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            parse_line(line).map_err(|source| ListingParseError {
                line: idx + 1,
                source,
            })
        })
        .collect()
}

/// Parse the answer to a single-port query.
///
/// Empty output means the script does not know the port. Only the first
/// non-blank line is considered.
///
/// # Errors
///
/// Returns [`LineParseError`] when that line is malformed.
pub fn parse_query(output: &str) -> Result<Option<Device>, LineParseError> {
    output
        .lines()
        .find(|line| !line.trim().is_empty())
        .map(parse_line)
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_powered_port() {
        let device = parse_line("7 Up host-a\n").unwrap();
        assert_eq!(device.id, DeviceId::new(7));
        assert!(device.powered_on);
        assert_eq!(device.hostname, "host-a");
    }

    #[test]
    fn should_treat_any_other_status_as_off() {
        for status in ["Down", "up", "UP", "Disabled", "Up!"] {
            let device = parse_line(&format!("3 {status} node-3")).unwrap();
            assert!(!device.powered_on, "status {status:?} should be off");
        }
    }

    #[test]
    fn should_strip_trailing_whitespace_from_hostname() {
        let device = parse_line("12 Up rpi-12\t\r\n").unwrap();
        assert_eq!(device.hostname, "rpi-12");
    }

    #[test]
    fn should_accept_empty_hostname_field() {
        let device = parse_line("7 Up \n").unwrap();
        assert_eq!(device.id, DeviceId::new(7));
        assert!(device.powered_on);
        assert_eq!(device.hostname, "");
    }

    #[test]
    fn should_reject_trailing_space_after_hostname() {
        let err = parse_line("7 Up host-a \n").unwrap_err();
        assert!(matches!(err, LineParseError::FieldCount { found: 4 }));
    }

    #[test]
    fn should_reject_line_with_too_few_fields() {
        let err = parse_line("7 Up").unwrap_err();
        assert!(matches!(err, LineParseError::FieldCount { found: 2 }));
    }

    #[test]
    fn should_reject_line_with_too_many_fields() {
        let err = parse_line("7 Up host a").unwrap_err();
        assert!(matches!(err, LineParseError::FieldCount { found: 4 }));
    }

    #[test]
    fn should_reject_double_space_separator() {
        let err = parse_line("7  Up host-a").unwrap_err();
        assert!(matches!(err, LineParseError::FieldCount { found: 4 }));
    }

    #[test]
    fn should_reject_non_numeric_id() {
        let err = parse_line("seven Up host-a").unwrap_err();
        assert!(matches!(err, LineParseError::InvalidId { ref token, .. } if token == "seven"));
    }

    #[test]
    fn should_parse_listing_in_output_order() {
        let devices = parse_listing("1 Up node-1\n2 Down node-2\n3 Up node-3\n").unwrap();
        let ids: Vec<u64> = devices.iter().map(|d| d.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(devices[0].powered_on);
        assert!(!devices[1].powered_on);
    }

    #[test]
    fn should_skip_blank_lines_in_listing() {
        let devices = parse_listing("1 Up node-1\n\n2 Down node-2\n").unwrap();
        assert_eq!(devices.len(), 2);
    }

    #[test]
    fn should_return_empty_listing_for_empty_output() {
        assert!(parse_listing("").unwrap().is_empty());
    }

    #[test]
    fn should_report_line_number_of_malformed_listing_line() {
        let err = parse_listing("1 Up node-1\nx Up node-2\n").unwrap_err();
        assert_eq!(err.line, 2);
        assert!(matches!(err.source, LineParseError::InvalidId { .. }));
    }

    #[test]
    fn should_return_none_for_empty_query_output() {
        assert_eq!(parse_query("").unwrap(), None);
        assert_eq!(parse_query("\n").unwrap(), None);
    }

    #[test]
    fn should_parse_first_line_of_query_output() {
        let device = parse_query("7 Down host-a\n").unwrap().unwrap();
        assert_eq!(device, Device::new(DeviceId::new(7), false, "host-a"));
    }
}
