use gapdash_shared_kernel::Population;

#[test]
fn add_and_add_assign_accumulate() {
    let mut total = Population::zero();
    total += Population::new(100);
    total += Population::new(200);
    assert_eq!(total, Population::new(300));
    assert_eq!((total + Population::new(1)).value(), 301);
}

#[test]
fn sums_past_u32_range_do_not_wrap() {
    let mut total = Population::zero();
    for _ in 0..4 {
        total += Population::new(1_318_683_096);
    }
    assert_eq!(total.value(), 5_274_732_384);
}

#[test]
fn zero_is_default() {
    assert_eq!(Population::default(), Population::zero());
    assert!(Population::zero().is_zero());
    assert!(!Population::new(1).is_zero());
}
