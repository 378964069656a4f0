use iptools_common::ops;
use iptools_common::Error;

#[test]
fn forward_traversal() {
    assert_eq!(
        ops::enumerate("192.0.2.0/24", 3, 0, false).unwrap(),
        ["192.0.2.1", "192.0.2.2", "192.0.2.3"]
    );
}

#[test]
fn backward_traversal() {
    assert_eq!(
        ops::enumerate("192.0.2.0/24", 3, 0, true).unwrap(),
        ["192.0.2.254", "192.0.2.253", "192.0.2.252"]
    );
}

#[test]
fn with_offset() {
    assert_eq!(
        ops::enumerate("192.0.2.0/24", 2, 2, false).unwrap(),
        ["192.0.2.3", "192.0.2.4"]
    );
}

#[test]
fn partial_and_empty_results() {
    assert_eq!(
        ops::enumerate("192.0.2.0/30", 10, 0, false).unwrap(),
        ["192.0.2.1", "192.0.2.2"]
    );
    assert!(ops::enumerate("192.0.2.0/30", 10, 2, false).unwrap().is_empty());
    assert!(ops::enumerate("192.0.2.0/30", 10, 5, true).unwrap().is_empty());
}

#[test]
fn repeated_calls_agree() {
    let first = ops::enumerate("2001:db8::/64", 4, 10, true).unwrap();
    let second = ops::enumerate("2001:db8::/64", 4, 10, true).unwrap();
    assert_eq!(first, second);
    assert_eq!(first[0], "2001:db8::ffff:ffff:ffff:fff4");
}

#[test]
fn invalid_requests() {
    assert_eq!(ops::enumerate("192.0.2.0/24", 0, 0, false), Err(Error::Count(0)));
    assert!(matches!(ops::enumerate("invalid-cidr", 1, 0, false), Err(Error::Format(_))));
}
