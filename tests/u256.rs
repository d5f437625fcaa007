use hashstream::primitives::U256;

#[test]
fn u256_consts() {
    assert_eq!(U256::ZERO, U256::from([0u8; 32]));
    assert_eq!(U256::MAX, U256::from([255u8; 32]));

    let mut one = [0u8; 32];
    one[31] = 1;
    assert_eq!(U256::ONE, U256::from(one));
}

#[test]
fn u256_from_small_ints_and_back() {
    let a = U256::from(0x42u8);
    assert_eq!(u128::try_from(a).unwrap(), 0x42u128);

    let a = U256::from(0x0123_4567_89AB_CDEFu64);
    assert_eq!(u128::try_from(a).unwrap(), 0x0123_4567_89AB_CDEFu128);

    let a = U256::from(0x0123_4567_89AB_CDEF_0123_4567_89AB_CDEFu128);
    assert_eq!(
        u128::try_from(a).unwrap(),
        0x0123_4567_89AB_CDEF_0123_4567_89AB_CDEFu128
    );

    // upper 128 bits non-zero → error
    let mut bad = [0u8; 32];
    bad[0] = 1;
    assert!(u128::try_from(U256::from(bad)).is_err());
}

#[test]
fn u256_add_carry_propagates() {
    let a = U256::from(255u8);
    let b = U256::from(1u8);
    let sum = a + b;

    let mut expected = [0u8; 32];
    expected[30] = 1;

    assert_eq!(sum, U256::from(expected));
}

#[test]
fn u256_add_wraps_at_the_top() {
    assert_eq!(U256::MAX + U256::ONE, U256::ZERO);

    let near_max = U256::MAX - U256::from(2u8);
    assert_eq!(near_max + U256::from(5u8), U256::from(2u8));
}

#[test]
fn u256_sub_borrow_propagates() {
    let mut arr = [0u8; 32];
    arr[30] = 1;
    let big = U256::from(arr);

    assert_eq!(big - U256::ONE, U256::from(255u8));
}

#[test]
fn u256_sub_wraps_below_zero() {
    assert_eq!(U256::ZERO - U256::ONE, U256::MAX);
}

#[test]
fn u256_ordering_is_big_endian() {
    let small = U256::from(7u64);
    let large = U256::from(8u64);

    assert!(small < large);

    let mut high = [0u8; 32];
    high[0] = 1;
    assert!(U256::from(high) > U256::from(u128::MAX));
}

#[test]
fn u256_display() {
    let formatted = format!("{}", U256::ONE);

    assert!(formatted.starts_with("00:"));
    assert!(formatted.ends_with(":01"));
}
