use iptools_common::ops;
use iptools_common::Error;

#[test]
fn cidr_boundaries_cases() {
    let cases = [
        ("192.0.2.1/32", "192.0.2.1", "192.0.2.1", "1"),
        ("192.0.2.0/31", "192.0.2.0", "192.0.2.1", "2"),
        ("192.0.2.0/30", "192.0.2.0", "192.0.2.3", "4"),
        ("192.0.2.0/29", "192.0.2.0", "192.0.2.7", "8"),
        ("192.0.2.0/28", "192.0.2.0", "192.0.2.15", "16"),
        ("192.0.2.0/24", "192.0.2.0", "192.0.2.255", "256"),
        ("192.0.0.0/16", "192.0.0.0", "192.0.255.255", "65,536"),
        ("192.0.0.0/8", "192.0.0.0", "192.255.255.255", "16,777,216"),
        ("2001:db8::/25", "2001:d80::", "2001:dff:ffff:ffff:ffff:ffff:ffff:ffff", "~Nonillions"),
        ("2001:db8::/35", "2001:db8::", "2001:db8:1fff:ffff:ffff:ffff:ffff:ffff", "~Octillions"),
        ("2001:db8::/45", "2001:db8::", "2001:db8:7:ffff:ffff:ffff:ffff:ffff", "~Septillions"),
        ("2001:db8::/55", "2001:db8::", "2001:db8:0:1ff:ffff:ffff:ffff:ffff", "~Sextillions"),
        ("2001:db8::/64", "2001:db8::", "2001:db8::ffff:ffff:ffff:ffff", "~Quintillions"),
        ("2001:db8::/75", "2001:db8::", "2001:db8::1f:ffff:ffff:ffff", "~Quadrillions"),
        ("2001:db8::/85", "2001:db8::", "2001:db8::7ff:ffff:ffff", "~Trillions"),
        ("2001:db8::/95", "2001:db8::", "2001:db8::1:ffff:ffff", "~Billions"),
        ("2001:db8::/105", "2001:db8::", "2001:db8::7f:ffff", "8,388,608"),
        ("2001:db8::/115", "2001:db8::", "2001:db8::1fff", "8,192"),
        ("2001:db8::/125", "2001:db8::", "2001:db8::7", "8"),
    ];

    for (cidr, first, last, magnitude) in cases {
        let got = ops::cidr_boundaries(cidr).unwrap_or_else(|e| panic!("{cidr}: {e}"));
        assert_eq!(got.first, first, "{cidr} first");
        assert_eq!(got.last, last, "{cidr} last");
        assert_eq!(got.magnitude, magnitude, "{cidr} magnitude");
    }
}

#[test]
fn host_bits_are_cleared_for_first() {
    let got = ops::cidr_boundaries("10.1.2.3/8").unwrap();
    assert_eq!(got.cidr, "10.1.2.3/8");
    assert_eq!(got.first, "10.0.0.0");
    assert_eq!(got.last, "10.255.255.255");
}

#[test]
fn cidr_boundaries_errors() {
    assert!(matches!(ops::cidr_boundaries("invalid-cidr"), Err(Error::Format(_))));
    assert!(matches!(ops::cidr_boundaries("192.0.2.0/33"), Err(Error::PrefixLength(_))));
    assert!(matches!(ops::cidr_boundaries("192.0.2.300/24"), Err(Error::AddressParse(_))));
}
