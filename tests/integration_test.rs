//! Integration tests for ip-nets
//!
//! These tests drive the public API from the JSON case files in
//! `tests/test_data/`.

use ip_nets::models::{Ip, Mask, Network};
use ip_nets::{
    copy_ip, ip_add, ip_inc, ip_less_than, ip_mask_count, ip_net_net, net_range, nets_overlap,
};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
struct IncCase {
    ip: Ip,
    want: Ip,
}

#[derive(Deserialize, Debug)]
struct AddCase {
    ip: Ip,
    offset: i64,
    want: Ip,
}

#[derive(Deserialize, Debug)]
struct RangeCase {
    network: Network,
    first: Ip,
    last: Ip,
    count: u128,
}

#[derive(Deserialize, Debug)]
struct OverlapCase {
    a: Network,
    b: Network,
    overlap: bool,
}

fn read_cases<T: for<'de> Deserialize<'de>>(file: &str) -> Vec<T> {
    let path = format!("tests/test_data/{file}");
    let json = std::fs::read_to_string(&path).expect("Failed to read test cases");
    serde_json::from_str(&json).unwrap_or_else(|e| panic!("Error parsing {path}: {e}"))
}

#[test]
fn test_ip_inc_cases() {
    let cases: Vec<IncCase> = read_cases("inc_cases.json");
    assert!(!cases.is_empty(), "Should have inc cases");
    for case in cases {
        let mut got = case.ip;
        ip_inc(&mut got);
        assert_eq!(got, case.want, "ip_inc({})", case.ip);
    }
}

#[test]
fn test_ip_add_cases() {
    let cases: Vec<AddCase> = read_cases("add_cases.json");
    for case in cases {
        let got = ip_add(&case.ip, case.offset);
        assert_eq!(got, case.want, "ip_add({}, {})", case.ip, case.offset);
        // and back again, compared by value since mapped input comes back 4-byte
        let Some(neg) = case.offset.checked_neg() else {
            continue;
        };
        let back = ip_add(&got, neg);
        assert!(
            !ip_less_than(&back, &case.ip) && !ip_less_than(&case.ip, &back),
            "ip_add({got}, {neg}) = {back}, want {}",
            case.ip
        );
    }
}

#[test]
fn test_net_range_cases() {
    let cases: Vec<RangeCase> = read_cases("net_range_cases.json");
    for case in cases {
        let (first, last) = net_range(&case.network);
        assert_eq!(first, case.first, "first of {}", case.network);
        assert_eq!(last, case.last, "last of {}", case.network);
        assert_eq!(
            ip_mask_count(&case.network.mask()).unwrap(),
            case.count,
            "count of {}",
            case.network
        );

        let base = ip_net_net(&case.network);
        assert_eq!(base.mask(), case.network.mask());
        assert_eq!(net_range(&base), (first, last));
    }
}

#[test]
fn test_nets_overlap_cases() {
    let cases: Vec<OverlapCase> = read_cases("overlap_cases.json");
    for case in cases {
        assert_eq!(nets_overlap(&case.a, &case.b), case.overlap, "{} vs {}", case.a, case.b);
        assert_eq!(nets_overlap(&case.b, &case.a), case.overlap, "{} vs {}", case.b, case.a);
    }
}

#[test]
fn test_enumerate_matches_add() {
    let net = Network::parse("10.18.126.7/28").unwrap();
    let (first, last) = net_range(&net);
    let all: Vec<Ip> = net.addresses().collect();

    assert_eq!(all.len() as u128, ip_mask_count(&net.mask()).unwrap());
    assert_eq!(all.first(), Some(&first));
    assert_eq!(all.last(), Some(&last));
    for (i, ip) in all.iter().enumerate() {
        assert_eq!(*ip, ip_add(&first, i as i64));
    }
}

#[test]
fn test_sorted_order() {
    let mut ips: Vec<Ip> = ["10.0.0.2", "::1", "2002::", "10.0.0.1", "0.0.0.0", "fe80::1"]
        .iter()
        .map(|s| Ip::new(s).unwrap())
        .collect();
    ips.sort();

    for i in 1..ips.len() {
        assert!(
            ip_less_than(&ips[i - 1], &ips[i]),
            "Addresses should be sorted: {} >= {}",
            ips[i - 1],
            ips[i]
        );
    }
    assert_eq!(ips[0], Ip::new("::1").unwrap());
}

#[test]
fn test_copy_is_independent() {
    let original = Ip::new("2002::1").unwrap();
    let mut copy = copy_ip(Some(&original));
    ip_inc(&mut copy);
    assert_eq!(original, Ip::new("2002::1").unwrap());
    assert_eq!(copy, Ip::new("2002::2").unwrap());
}

#[test]
fn test_serde_cidr_string() {
    let net = Network::parse("10.0.0.20/24").unwrap();
    let json = serde_json::to_string(&net).unwrap();
    assert_eq!(json, "\"10.0.0.20/24\"");
    let back: Network = serde_json::from_str(&json).unwrap();
    assert_eq!(back, net);

    let bad: Result<Network, _> = serde_json::from_str("\"10.0.0.0/40\"");
    assert!(bad.is_err());

    let mapped = Network::parse("::ffff:172.16.5.4/108").unwrap();
    let json = serde_json::to_string(&mapped).unwrap();
    assert_eq!(json, "\"::ffff:172.16.5.4/108\"");
    assert_eq!(serde_json::from_str::<Network>(&json).unwrap(), mapped);

    let mapped_v4_mask = Network::new(
        Ip::new("::ffff:10.0.0.1").unwrap(),
        Mask::cidr(24, 32).unwrap(),
    )
    .unwrap();
    let odd = Network::new(Ip::new("10.0.0.0").unwrap(), Mask::V4([255, 0, 255, 0])).unwrap();
    for net in [mapped_v4_mask, odd] {
        let json = serde_json::to_string(&net).unwrap();
        let back: Network = serde_json::from_str(&json).unwrap();
        assert_eq!(back, net, "{json}");
    }
}

#[test]
fn test_serde_ip_keeps_width() {
    for s in ["10.0.0.1", "::ffff:10.0.0.1", "2002::1"] {
        let ip = Ip::new(s).unwrap();
        let json = serde_json::to_string(&ip).unwrap();
        assert_eq!(json, format!("\"{s}\""));
        assert_eq!(serde_json::from_str::<Ip>(&json).unwrap(), ip);
    }
}
