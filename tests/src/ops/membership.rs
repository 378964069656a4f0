use iptools_common::ops;
use iptools_common::Error;

struct Case {
    name: &'static str,
    ip: &'static str,
    ranges: &'static str,
    want: bool,
}

#[test]
fn in_range_cases() {
    let cases = [
        Case { name: "IPv4 in range", ip: "192.0.2.5", ranges: "192.0.2.0-192.0.2.10", want: true },
        Case { name: "IPv6 in range", ip: "2001:db8::5", ranges: "2001:db8::1-2001:db8::10", want: true },
        Case { name: "IP not in range", ip: "192.0.2.20", ranges: "192.0.2.0-192.0.2.10", want: false },
        Case { name: "IP in CIDR", ip: "192.0.2.128", ranges: "192.0.2.0/24", want: true },
        Case { name: "IP not in CIDR", ip: "192.0.3.1", ranges: "192.0.2.0/24", want: false },
        Case {
            name: "IP in multiple ranges",
            ip: "192.0.2.5",
            ranges: "192.0.2.0-192.0.2.10,192.0.2.20-192.0.2.30",
            want: true,
        },
        Case { name: "IP in multiple CIDRs", ip: "192.0.2.1", ranges: "192.0.2.0/24,192.0.3.0/24", want: true },
        Case {
            name: "IP in mixed ranges and CIDRs",
            ip: "192.0.2.5",
            ranges: "192.0.2.0-192.0.2.10,192.0.3.0/24",
            want: true,
        },
        Case { name: "Specific IP match", ip: "192.0.2.1", ranges: "192.0.2.1", want: true },
        Case { name: "Network address of CIDR", ip: "192.0.2.0", ranges: "192.0.2.0/24", want: true },
        Case { name: "Broadcast address of CIDR", ip: "192.0.2.255", ranges: "192.0.2.0/24", want: true },
        Case { name: "Gap between ranges", ip: "192.0.2.15", ranges: "192.0.2.0-192.0.2.10 192.0.2.20-192.0.2.30", want: false },
        Case { name: "IPv4 probe against IPv6 set", ip: "192.0.2.1", ranges: "::/0", want: false },
        Case { name: "Upper case IPv6", ip: "2001:DB8::A", ranges: "2001:DB8::/120", want: true },
        Case { name: "Empty spec", ip: "192.0.2.1", ranges: "", want: false },
    ];

    for case in cases {
        assert_eq!(ops::is_member(case.ip, case.ranges), Ok(case.want), "{}", case.name);
    }
}

#[test]
fn in_range_errors() {
    assert!(matches!(
        ops::is_member("256.256.256.256", "192.0.2.0-192.0.2.10"),
        Err(Error::AddressParse(_))
    ));
    assert_eq!(
        ops::is_member("192.0.2.5", "invalid-range"),
        Err(Error::Format("invalid-range".to_string()))
    );
    assert!(matches!(ops::is_member("192.0.2.5", "192.0.2.0/33"), Err(Error::PrefixLength(_))));
    assert!(matches!(
        ops::is_member("192.0.2.5", "192.0.2.10-192.0.2.0"),
        Err(Error::EndBeforeStart(_))
    ));
    assert!(matches!(
        ops::is_member("192.0.2.5", "192.0.2.0-2001:db8::1"),
        Err(Error::FamilyMismatch(_))
    ));
}

#[test]
fn adding_ranges_never_loses_members() {
    let base = "192.0.2.0-192.0.2.10";
    let extras = ["", "10.0.0.0/8", "192.0.2.5-192.0.2.50", "2001:db8::/32", "192.0.2.11"];
    for extra in extras {
        let spec = format!("{base},{extra}");
        for ip in ["192.0.2.0", "192.0.2.5", "192.0.2.10"] {
            assert_eq!(ops::is_member(ip, &spec), Ok(true), "{ip} in {spec}");
        }
    }
}
