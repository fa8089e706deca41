use crate::*;

#[test]
fn test_pack_size_rejects_zero() {
    assert_eq!(PackSize::new(0), Err(PackError::InvalidPackSize));
    assert_eq!(PackSize::new(1).unwrap().get(), 1);
}

#[test]
fn test_order_quantity_rejects_zero() {
    assert_eq!(OrderQuantity::new(0), Err(PackError::InvalidQuantity));
    assert_eq!(OrderQuantity::new(12001).unwrap().get(), 12001);
}

#[test]
fn test_sorted_descending_and_deduplicated() {
    let sizes = PackSizes::new([250, 5000, 1000, 250, 500, 2000, 5000]).unwrap();
    assert_eq!(sizes.to_vec(), vec![5000, 2000, 1000, 500, 250]);
    assert_eq!(sizes.len(), 5);
    assert!(!sizes.is_empty());
}

#[test]
fn test_empty_rejected() {
    assert_eq!(
        PackSizes::new(Vec::<u64>::new()),
        Err(PackError::EmptyPackSizes)
    );
}

#[test]
fn test_zero_size_rejected() {
    assert_eq!(
        PackSizes::new([250, 0, 500]),
        Err(PackError::InvalidPackSize)
    );
}

#[test]
fn test_largest_and_smallest() {
    let sizes = PackSizes::new([23, 31, 53]).unwrap();
    assert_eq!(sizes.largest().get(), 53);
    assert_eq!(sizes.smallest().get(), 23);

    let single = PackSizes::new([7]).unwrap();
    assert_eq!(single.largest(), single.smallest());
}

#[test]
fn test_contains() {
    let sizes = PackSizes::new([250, 500, 1000, 2000, 5000]).unwrap();
    for size in [250, 500, 1000, 2000, 5000] {
        assert!(sizes.contains(size), "missing {}", size);
    }
    for items in [0, 1, 249, 251, 750, 4999, 5001, 10_000] {
        assert!(!sizes.contains(items), "unexpected {}", items);
    }
}

#[test]
fn test_debug_lists_sizes() {
    let sizes = PackSizes::new([3, 1, 2]).unwrap();
    assert_eq!(format!("{:?}", sizes), "[3, 2, 1]");
}

#[test]
fn test_find() {
    let sizes = PackSizes::new([53, 31, 23]).unwrap();
    assert_eq!(sizes.find(31), Some(PackSize::new(31).unwrap()));
    assert_eq!(sizes.find(30), None);
}
