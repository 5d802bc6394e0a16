use super::parse_report::{ParseReport, Parsed};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use ferrous_lan_domain::{
    BindingState, DhcpLease, DomainError, HardwareAddress, LeaseTable, LEASE_TIME_FORMAT,
};
use std::net::Ipv4Addr;
use std::sync::Arc;
use tracing::debug;

/// A single `lease <ip> { ... }` block, before resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaseBlock {
    /// Line of the `lease` keyword
    pub line: usize,
    pub binding_state: BindingState,
    pub lease: DhcpLease,
}

enum ScanState {
    TopLevel,
    InLease {
        line: usize,
        address: String,
        statements: Vec<String>,
        /// Depth inside nested `on <events> { ... }` blocks
        nested: usize,
    },
    /// Inside a non-lease block such as `failover peer "x" { ... }`
    Skipping {
        depth: usize,
    },
}

/// Decoder for the ISC dhcpd lease database.
///
/// The file is append-only: every renewal or state change writes a whole new
/// block, so the same address shows up many times and the newest block is the
/// truth. The writer may be mid-append while we read, which leaves a final
/// block without its closing brace; that block is dropped.
pub struct LeaseRecordParser;

impl LeaseRecordParser {
    /// Resolves the database to one active, unexpired lease per hardware address.
    ///
    /// The last `active` block for an address wins. Blocks in any other binding
    /// state never displace an active one recorded earlier in the pass.
    pub fn parse(text: &str, now: DateTime<Utc>) -> Parsed<LeaseTable> {
        let Parsed { table: blocks, report } = Self::parse_blocks(text);

        let mut leases = LeaseTable::new();
        for block in blocks {
            if block.binding_state.is_active() {
                leases.insert(block.lease.hardware_address, block.lease);
            } else {
                debug!(
                    line = block.line,
                    state = block.binding_state.as_str(),
                    "Ignoring inactive lease block"
                );
            }
        }
        leases.retain(|_, lease| !lease.is_expired_at(now));

        Parsed {
            table: leases,
            report,
        }
    }

    /// Decodes every complete block in file order.
    pub fn parse_blocks(text: &str) -> Parsed<Vec<LeaseBlock>> {
        let mut report = ParseReport::default();
        let mut blocks = Vec::new();
        let mut state = ScanState::TopLevel;

        for (index, raw) in text.lines().enumerate() {
            let line_no = index + 1;
            let line = strip_comment(raw).trim();
            if line.is_empty() {
                continue;
            }

            state = match state {
                ScanState::TopLevel => open_block(line, line_no),
                ScanState::InLease {
                    line: start,
                    address,
                    mut statements,
                    nested,
                } => {
                    let opens = line.matches('{').count();
                    let closes = line.matches('}').count();

                    if nested > 0 {
                        ScanState::InLease {
                            line: start,
                            address,
                            statements,
                            nested: (nested + opens).saturating_sub(closes),
                        }
                    } else if line.starts_with('}') {
                        report.records_seen += 1;
                        match decode_block(start, &address, &statements) {
                            Ok(Some(block)) => blocks.push(block),
                            Ok(None) => {}
                            Err(e) => report.record_error(e),
                        }
                        ScanState::TopLevel
                    } else if is_lease_header(line) {
                        report.records_seen += 1;
                        report.record_error(DomainError::RecordParse {
                            line: start,
                            reason: "lease block not closed before next block".to_string(),
                        });
                        open_block(line, line_no)
                    } else if opens > closes {
                        // `on expiry { ... }` and friends carry no lease facts.
                        ScanState::InLease {
                            line: start,
                            address,
                            statements,
                            nested: opens - closes,
                        }
                    } else {
                        statements.push(line.to_string());
                        ScanState::InLease {
                            line: start,
                            address,
                            statements,
                            nested,
                        }
                    }
                }
                ScanState::Skipping { depth } => {
                    let opens = line.matches('{').count();
                    let closes = line.matches('}').count();
                    match (depth + opens).saturating_sub(closes) {
                        0 => ScanState::TopLevel,
                        depth => ScanState::Skipping { depth },
                    }
                }
            };
        }

        if let ScanState::InLease { line, .. } = state {
            debug!(line, "Discarding unterminated trailing lease block");
            report.truncated_tail = true;
        }

        Parsed {
            table: blocks,
            report,
        }
    }
}

fn is_lease_header(line: &str) -> bool {
    line.starts_with("lease ") && line.ends_with('{')
}

fn open_block(line: &str, line_no: usize) -> ScanState {
    if let Some(address) = line
        .strip_prefix("lease ")
        .and_then(|rest| rest.strip_suffix('{'))
    {
        return ScanState::InLease {
            line: line_no,
            address: address.trim().to_string(),
            statements: Vec::new(),
            nested: 0,
        };
    }

    if line.ends_with('{') {
        ScanState::Skipping { depth: 1 }
    } else {
        ScanState::TopLevel
    }
}

fn decode_block(
    line: usize,
    address: &str,
    statements: &[String],
) -> Result<Option<LeaseBlock>, DomainError> {
    let malformed = |reason: String| DomainError::RecordParse { line, reason };

    let ipv4_address: Ipv4Addr = address
        .parse()
        .map_err(|_| malformed(format!("invalid IPv4 address '{}'", address)))?;

    let mut binding_state = None;
    let mut hardware_address = None;
    let mut starts_at = None;
    let mut expires_at = None;
    let mut hostname = None;

    for statement in statements {
        let statement = statement.trim_end_matches(';').trim();
        let mut words = statement.split_whitespace();

        match words.next() {
            Some("starts") => {
                let value: Vec<&str> = words.collect();
                starts_at = parse_lease_time(&value).map_err(|e| malformed(e.to_string()))?;
            }
            Some("ends") => {
                let value: Vec<&str> = words.collect();
                expires_at = parse_lease_time(&value).map_err(|e| malformed(e.to_string()))?;
            }
            Some("binding") => {
                if words.next() == Some("state") {
                    binding_state = words.next().map(BindingState::from_token);
                }
            }
            Some("hardware") => {
                let raw = words
                    .nth(1)
                    .ok_or_else(|| malformed("hardware statement without address".to_string()))?;
                let parsed = HardwareAddress::parse(raw).map_err(|e| malformed(e.to_string()))?;
                hardware_address = Some(parsed);
            }
            Some("client-hostname") => {
                let value = statement["client-hostname".len()..].trim();
                let value = value.trim_matches('"');
                if !value.is_empty() {
                    hostname = Some(Arc::<str>::from(value));
                }
            }
            _ => {}
        }
    }

    // Blocks written by very old servers carry no binding state at all.
    let binding_state = binding_state.unwrap_or(BindingState::Active);

    let Some(hardware_address) = hardware_address else {
        if binding_state.is_active() {
            return Err(malformed("active lease without hardware address".to_string()));
        }
        return Ok(None);
    };

    Ok(Some(LeaseBlock {
        line,
        binding_state,
        lease: DhcpLease {
            hardware_address,
            ipv4_address,
            starts_at,
            expires_at,
            hostname,
        },
    }))
}

/// `6 2021/02/06 11:17:27`, `epoch 1612610247` or `never`, all UTC.
fn parse_lease_time(value: &[&str]) -> Result<Option<DateTime<Utc>>, DomainError> {
    let invalid = || DomainError::InvalidTimestamp(value.join(" "));

    match value {
        ["never"] => Ok(None),
        ["epoch", secs, ..] => secs
            .parse::<i64>()
            .ok()
            .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
            .map(Some)
            .ok_or_else(invalid),
        [_weekday, date, time] => {
            NaiveDateTime::parse_from_str(&format!("{} {}", date, time), LEASE_TIME_FORMAT)
                .map(|naive| Some(naive.and_utc()))
                .map_err(|_| invalid())
        }
        _ => Err(invalid()),
    }
}

/// Drops a trailing `# comment`, ignoring `#` inside quoted strings.
fn strip_comment(line: &str) -> &str {
    let mut in_quotes = false;
    let mut escaped = false;

    for (i, c) in line.char_indices() {
        match c {
            '\\' if in_quotes && !escaped => {
                escaped = true;
                continue;
            }
            '"' if !escaped => in_quotes = !in_quotes,
            '#' if !in_quotes => return &line[..i],
            _ => {}
        }
        escaped = false;
    }

    line
}
