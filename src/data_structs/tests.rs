use rstest::rstest;

use super::typedef::PosType;
use super::{
    Interval,
    Region,
};

#[test]
fn test_interval_accessors() {
    let iv = Interval::new(100, 200);
    assert_eq!(iv.start(), 100);
    assert_eq!(iv.end(), 200);
    assert_eq!(iv.length(), 100);
    assert!(!iv.is_empty());
    assert!(Interval::new(100, 100).is_empty());
}

#[test]
#[should_panic(expected = "Start position must be less than or equal to end position")]
fn test_interval_new_invalid_range_panics() {
    Interval::new(200, 100);
}

#[test]
fn test_interval_contains() {
    let iv = Interval::new(100, 200);
    assert!(iv.contains(100));
    assert!(iv.contains(199));
    assert!(!iv.contains(200));
    assert!(!iv.contains(99));
}

#[rstest]
#[case(Interval::new(100, 200), Interval::new(150, 250), true)]
#[case(Interval::new(100, 200), Interval::new(199, 300), true)]
#[case(Interval::new(100, 200), Interval::new(200, 300), false)]
#[case(Interval::new(100, 200), Interval::new(0, 100), false)]
#[case(Interval::new(100, 200), Interval::new(150, 150), false)]
fn test_interval_overlaps(
    #[case] left: Interval,
    #[case] right: Interval,
    #[case] expected: bool,
) {
    assert_eq!(left.overlaps(&right), expected);
    assert_eq!(right.overlaps(&left), expected);
}

#[test]
fn test_interval_partial_cmp() {
    use std::cmp::Ordering;

    let left = Interval::new(0, 100);
    let right = Interval::new(100, 200);
    let crossing = Interval::new(50, 150);

    assert_eq!(left.partial_cmp(&right), Some(Ordering::Less));
    assert_eq!(right.partial_cmp(&left), Some(Ordering::Greater));
    assert_eq!(left.partial_cmp(&crossing), None);
}

#[test]
fn test_interval_display() {
    assert_eq!(format!("{}", Interval::new(100, 200)), "100-200");
}

#[rstest]
#[case("chr1", "chr1", Interval::whole())]
#[case("chr1:100", "chr1", Interval::new(99, 100))]
#[case("chr1:100-200", "chr1", Interval::new(99, 200))]
#[case("chr1:100-100", "chr1", Interval::new(99, 100))]
#[case("chr1:100-", "chr1", Interval::new(99, PosType::MAX))]
#[case("chr1:-200", "chr1", Interval::new(0, 200))]
#[case("chr1:1,000-2,000", "chr1", Interval::new(999, 2000))]
#[case("{HLA-DRB1*10:01}", "HLA-DRB1*10:01", Interval::whole())]
#[case("{HLA-DRB1*10:01}:50-100", "HLA-DRB1*10:01", Interval::new(49, 100))]
fn test_region_parse(
    #[case] query: &str,
    #[case] seqname: &str,
    #[case] interval: Interval,
) {
    let region: Region = query.parse().unwrap();
    assert_eq!(region.seqname().as_str(), seqname);
    assert_eq!(region.interval(), interval);
}

#[rstest]
#[case("")]
#[case(":100-200")]
#[case("chr1:")]
#[case("chr1:0")]
#[case("chr1:0-100")]
#[case("chr1:200-100")]
#[case("chr1:abc")]
#[case("chr1:100-abc")]
#[case("{chr1:100-200")]
#[case("{chr1}100-200")]
fn test_region_parse_invalid(#[case] query: &str) {
    assert!(query.parse::<Region>().is_err());
}

#[rstest]
#[case("chr1")]
#[case("chr1:100")]
#[case("chr1:100-200")]
#[case("chr1:100-")]
#[case("{HLA-DRB1*10:01}:50-100")]
fn test_region_display_round_trip(#[case] query: &str) {
    let region: Region = query.parse().unwrap();
    assert_eq!(format!("{}", region), query);
}
