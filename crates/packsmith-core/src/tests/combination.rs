use crate::*;

fn size(items: u64) -> PackSize {
    PackSize::new(items).unwrap()
}

#[test]
fn test_add_tracks_score() {
    let mut packs = PackCombination::new();
    assert!(packs.is_empty());

    packs.add(size(5000), 2).unwrap();
    packs.add(size(2000), 1).unwrap();
    packs.add(size(250), 1).unwrap();

    assert_eq!(packs.total(), 12_250);
    assert_eq!(packs.pack_count(), 4);
    assert_eq!(packs.len(), 3);
}

#[test]
fn test_zero_count_not_stored() {
    let mut packs = PackCombination::single(size(500));
    packs.add(size(250), 0).unwrap();
    assert_eq!(packs.len(), 1);
    assert_eq!(packs.count_of(size(250)), 0);
}

#[test]
fn test_merge_sums_counts() {
    let mut base = PackCombination::of(size(5000), 24).unwrap();
    let remainder = PackCombination::from_counts([(size(2000), 2), (size(250), 1)]).unwrap();
    base.merge(&remainder).unwrap();

    assert_eq!(base.count_of(size(5000)), 24);
    assert_eq!(base.count_of(size(2000)), 2);
    assert_eq!(base.total(), 124_250);

    let mut base = PackCombination::of(size(5000), 24).unwrap();
    base.merge(&PackCombination::single(size(5000))).unwrap();
    assert_eq!(base.count_of(size(5000)), 25);
    assert_eq!(base.len(), 1);
}

#[test]
fn test_overflow_leaves_combination_unchanged() {
    let mut packs = PackCombination::of(size(u64::MAX), 1).unwrap();
    assert_eq!(packs.add(size(1), 1), Err(PackError::Overflow));
    assert_eq!(packs.total(), u64::MAX);
    assert_eq!(packs.len(), 1);

    let other = PackCombination::single(size(2));
    assert_eq!(packs.merge(&other), Err(PackError::Overflow));
    assert_eq!(packs.pack_count(), 1);
}

#[test]
fn test_iter_largest_first() {
    let packs = PackCombination::from_counts([(size(250), 1), (size(5000), 2), (size(2000), 1)])
        .unwrap();
    let order: Vec<u64> = packs.iter().map(|(s, _)| s.get()).collect();
    assert_eq!(order, vec![5000, 2000, 250]);
    assert_eq!(format!("{}", packs), "2x5000 + 1x2000 + 1x250");
    assert_eq!(format!("{}", PackCombination::new()), "(empty)");
}

#[test]
fn test_to_map() {
    let packs = PackCombination::from_counts([(size(500), 1), (size(250), 1)]).unwrap();
    let map = packs.to_map();
    assert_eq!(map.get(&500), Some(&1));
    assert_eq!(map.get(&250), Some(&1));
    assert_eq!(map.len(), 2);
}

#[cfg(feature = "serde")]
#[test]
fn test_json_shape() {
    let packs = PackCombination::from_counts([(size(5000), 100), (size(250), 1)]).unwrap();
    let json = serde_json::to_string(&packs).unwrap();
    assert_eq!(json, r#"{"5000":100,"250":1}"#);

    let back: PackCombination = serde_json::from_str(&json).unwrap();
    assert_eq!(back, packs);
    assert!(serde_json::from_str::<PackCombination>(r#"{"0":1}"#).is_err());
}
