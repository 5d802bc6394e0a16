use chrono::{DateTime, TimeZone, Utc};
use ferrous_lan_domain::HardwareAddress;

/// Evaluation instant for fixtures dated February 2021.
pub fn feb_2021() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2021, 2, 1, 0, 0, 0).unwrap()
}

pub fn mac(text: &str) -> HardwareAddress {
    HardwareAddress::parse(text).unwrap()
}

pub const WORKED_EXAMPLE_LEASES: &str = r#"# The format of this file is documented in the dhcpd.leases(5) manual page.
# This lease file was written by isc-dhcp-4.4.2

lease 192.168.0.29 {
  starts 6 2021/02/06 10:17:27;
  ends 6 2021/02/06 11:17:27;
  cltt 6 2021/02/06 10:17:27;
  binding state active;
  next binding state free;
  rewind binding state free;
  hardware ethernet aa:bb:cc:dd:ee:ff;
  uid "\001\252\273\314\335\356\377";
}
"#;

pub const WORKED_EXAMPLE_NDP: &str = "\
Neighbor                             Linklayer Address  Netif Expire    S Flags
2001:db8::29                         aa:bb:cc:dd:ee:ff    em0 23h59m58s S
fe80::a8bb:ccff:fedd:eeff%em0        aa:bb:cc:dd:ee:ff    em0 8s        R
";

/// Leases ending far in the future, for tests evaluated at the real clock.
pub const FUTURE_LEASES: &str = r#"
lease 192.168.1.10 {
  starts 4 2024/01/04 08:00:00;
  ends 2 2099/12/29 08:00:00;
  binding state active;
  hardware ethernet 00:11:22:33:44:55;
  client-hostname "laptop";
}
lease 192.168.1.11 {
  starts 4 2024/01/04 08:00:00;
  ends 2 2099/12/29 08:00:00;
  binding state active;
  hardware ethernet 66:77:88:99:aa:bb;
}
"#;

pub const FUTURE_LEASES_RENEWED: &str = r#"
lease 192.168.1.20 {
  starts 4 2024/01/04 09:00:00;
  ends 2 2099/12/29 09:00:00;
  binding state active;
  hardware ethernet 00:11:22:33:44:55;
  client-hostname "laptop-renamed";
}
"#;

pub const NDP_TWO_HOSTS: &str = "\
Neighbor                             Linklayer Address  Netif Expire    S Flags
2001:db8::10                         0:11:22:33:44:55     em0 23h59m58s S
fe80::211:22ff:fe33:4455%em0         0:11:22:33:44:55     em0 10s       R
fe80::1%em0                          de:ad:be:ef:00:01    em0 permanent R
";

pub const NDP_ONE_HOST: &str = "\
Neighbor                             Linklayer Address  Netif Expire    S Flags
fe80::1%em0                          de:ad:be:ef:00:02    em0 permanent R
";
