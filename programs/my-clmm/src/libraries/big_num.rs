//! Fixed width unsigned integers wider than the native `u128`.
//! Limbs are little endian, so `U128([lo, hi])`.

use uint::construct_uint;

construct_uint! {
    pub struct U128(2);
}

construct_uint! {
    pub struct U256(4);
}

construct_uint! {
    pub struct U512(8);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limbs_are_little_endian() {
        assert_eq!(U128([0, 1]).as_u128(), 1u128 << 64);
        assert_eq!(U128::from(u64::MAX).as_u64(), u64::MAX);
        assert_eq!(U128::MAX.as_u128(), u128::MAX);
    }

    #[test]
    fn wide_product_does_not_overflow() {
        let a = U256::from(u128::MAX);
        let product = a * a;
        assert!(product > a);
        assert_eq!(product / a, a);
    }
}
