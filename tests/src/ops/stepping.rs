use iptools_common::ops;
use iptools_common::Error;

#[test]
fn next_cases() {
    assert_eq!(ops::next("192.0.2.1").as_deref(), Ok("192.0.2.2"));
    assert_eq!(ops::next("2001:db8::1").as_deref(), Ok("2001:db8::2"));
    assert_eq!(ops::next("192.0.2.255").as_deref(), Ok("192.0.3.0"));
    assert_eq!(ops::next("::ffff").as_deref(), Ok("::1:0"));
}

#[test]
fn prev_cases() {
    assert_eq!(ops::prev("192.0.2.2").as_deref(), Ok("192.0.2.1"));
    assert_eq!(ops::prev("2001:db8::2").as_deref(), Ok("2001:db8::1"));
    assert_eq!(ops::prev("10.0.0.0").as_deref(), Ok("9.255.255.255"));
}

#[test]
fn round_trips_away_from_the_edges() {
    for ip in ["192.0.2.1", "0.0.0.1", "255.255.255.254", "2001:db8::", "::1"] {
        let forward = ops::next(ip).unwrap();
        assert_eq!(ops::prev(&forward).as_deref(), Ok(ip));
        let backward = ops::prev(ip).unwrap();
        assert_eq!(ops::next(&backward).as_deref(), Ok(ip));
    }
}

#[test]
fn edges_of_the_address_space() {
    assert!(matches!(ops::next("255.255.255.255"), Err(Error::Overflow(_))));
    assert!(matches!(
        ops::next("ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff"),
        Err(Error::Overflow(_))
    ));
    assert!(matches!(ops::prev("0.0.0.0"), Err(Error::Underflow(_))));
    assert!(matches!(ops::prev("::"), Err(Error::Underflow(_))));
}

#[test]
fn invalid_input() {
    assert_eq!(ops::next("invalid-ip"), Err(Error::AddressParse("invalid-ip".to_string())));
    assert_eq!(ops::prev("invalid-ip"), Err(Error::AddressParse("invalid-ip".to_string())));
}
