use super::parse_report::{ParseReport, Parsed};
use ferrous_lan_domain::{
    is_link_local_ipv6, DomainError, HardwareAddress, NdpCacheState, NdpEntry, NeighborFormat,
    NeighborTable,
};
use std::net::Ipv6Addr;
use tracing::debug;

enum NeighborLine {
    Resolved(NdpEntry),
    /// Listed without a link-layer address, so it has no join key
    Unresolved,
}

/// Line-oriented decoder for neighbor-diagnostic output.
///
/// Format of `ndp -an`:
/// Neighbor                     Linklayer Address  Netif Expire    S Flags
/// 2001:db8::10                 aa:bb:cc:dd:ee:ff    em0 23h59m58s S
/// fe80::a8bb:ccff:fedd:eeff%em0 aa:bb:cc:dd:ee:ff   em0 permanent R
///
/// Format of `ip -6 neigh show`:
/// fe80::1 dev eth0 lladdr aa:bb:cc:dd:ee:ff router REACHABLE
pub struct NeighborRecordParser {
    format: NeighborFormat,
}

impl NeighborRecordParser {
    pub fn new(format: NeighborFormat) -> Self {
        Self { format }
    }

    pub fn parse(&self, text: &str) -> Parsed<NeighborTable> {
        let mut report = ParseReport::default();
        let mut table = NeighborTable::new();

        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || is_banner(line) {
                continue;
            }

            report.records_seen += 1;
            let decoded = match self.format {
                NeighborFormat::Ndp => parse_ndp_line(line, index + 1),
                NeighborFormat::IpNeigh => parse_ip_neigh_line(line, index + 1),
            };

            match decoded {
                Ok(NeighborLine::Resolved(entry)) => {
                    table
                        .entry(entry.hardware_address)
                        .or_default()
                        .push(entry);
                }
                Ok(NeighborLine::Unresolved) => {
                    debug!(line = index + 1, "Neighbor without link-layer address");
                    report.unresolved += 1;
                }
                Err(e) => report.record_error(e),
            }
        }

        Parsed { table, report }
    }
}

fn is_banner(line: &str) -> bool {
    line.starts_with("Neighbor ")
}

fn parse_ndp_line(line: &str, line_no: usize) -> Result<NeighborLine, DomainError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 5 {
        return Err(DomainError::RecordParse {
            line: line_no,
            reason: format!("expected at least 5 columns, found {}", fields.len()),
        });
    }

    let ip_address = fields[0];
    check_ipv6(ip_address, line_no)?;

    // "(incomplete)" and similar placeholders
    if fields[1].starts_with('(') {
        return Ok(NeighborLine::Unresolved);
    }

    let hardware_address = parse_hardware(fields[1], line_no)?;
    let cache_state = if fields[3] == "permanent" {
        NdpCacheState::Permanent
    } else {
        NdpCacheState::from_ndp_token(fields[4])
    };

    Ok(NeighborLine::Resolved(NdpEntry::new(
        hardware_address,
        ip_address,
        fields[2],
        cache_state,
    )))
}

fn parse_ip_neigh_line(line: &str, line_no: usize) -> Result<NeighborLine, DomainError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let Some(&ip_address) = fields.first() else {
        return Err(DomainError::RecordParse {
            line: line_no,
            reason: "empty line".to_string(),
        });
    };
    let bare_ip = check_ipv6(ip_address, line_no)?;

    let mut interface = None;
    let mut lladdr = None;
    let mut cache_state = NdpCacheState::Unknown;

    let mut rest = fields[1..].iter();
    while let Some(&token) = rest.next() {
        match token {
            "dev" => interface = rest.next().copied(),
            "lladdr" => lladdr = rest.next().copied(),
            other => {
                if let Some(state) = NdpCacheState::from_ip_neigh_token(other) {
                    cache_state = state;
                }
            }
        }
    }

    let interface = interface.ok_or_else(|| DomainError::RecordParse {
        line: line_no,
        reason: "missing 'dev' column".to_string(),
    })?;

    let Some(lladdr) = lladdr else {
        return Ok(NeighborLine::Unresolved);
    };
    let hardware_address = parse_hardware(lladdr, line_no)?;

    // ip(8) prints link-local neighbors without a zone; add it so the address
    // is usable on its own.
    let ip_address = if is_link_local_ipv6(&bare_ip) && !ip_address.contains('%') {
        format!("{}%{}", ip_address, interface)
    } else {
        ip_address.to_string()
    };

    Ok(NeighborLine::Resolved(NdpEntry::new(
        hardware_address,
        ip_address,
        interface,
        cache_state,
    )))
}

fn check_ipv6(text: &str, line_no: usize) -> Result<Ipv6Addr, DomainError> {
    let bare = text.split('%').next().unwrap_or_default();
    bare.parse::<Ipv6Addr>().map_err(|_| DomainError::RecordParse {
        line: line_no,
        reason: DomainError::InvalidIpAddress(text.to_string()).to_string(),
    })
}

fn parse_hardware(text: &str, line_no: usize) -> Result<HardwareAddress, DomainError> {
    HardwareAddress::parse(text).map_err(|e| DomainError::RecordParse {
        line: line_no,
        reason: e.to_string(),
    })
}
