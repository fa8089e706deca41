use crate::*;

#[test]
fn test_solution_reports_total_and_overshoot() {
    let quantity = OrderQuantity::new(12_001).unwrap();
    let packs = PackCombination::from_counts([
        (PackSize::new(5000).unwrap(), 2),
        (PackSize::new(2000).unwrap(), 1),
        (PackSize::new(250).unwrap(), 1),
    ])
    .unwrap();
    let solution = PackSolution::new(quantity, packs);

    assert_eq!(solution.total(), 12_250);
    assert_eq!(solution.pack_count(), 4);
    assert_eq!(solution.overshoot(), 249);
    assert_eq!(solution.score(), PackScore::of(12_250, 4));
    assert_eq!(
        format!("{}", solution),
        "12001 -> 2x5000 + 1x2000 + 1x250 (12250total/4packs)"
    );
}
