use anchor_lang::prelude::*;

use crate::errors::GiftCardError;

/// Split `amount` into (fee, net) according to `fee_percentage`.
///
/// The fee is `amount * fee_percentage / 100` with integer truncation, so the
/// fee never exceeds the nominal percentage and `fee + net == amount` always
/// holds.
pub fn split_fee(amount: u64, fee_percentage: u8) -> Result<(u64, u64)> {
    let fee = amount
        .checked_mul(u64::from(fee_percentage))
        .ok_or(GiftCardError::Overflow)?
        / 100;
    // fee <= amount for fee_percentage <= 100, so this cannot underflow
    let net = amount
        .checked_sub(fee)
        .ok_or(GiftCardError::Overflow)?;

    Ok((fee, net))
}

/// XOR-fold digest of a coupon code.
///
/// 32-byte zero buffer, each input byte XORed into `digest[i % 32]`. This is
/// a cheap commitment for low-stakes coupon codes, not a cryptographic hash:
/// codes longer than 32 bytes wrap around, and byte permutations within the
/// same positions collide. Kept as-is for compatibility with digests already
/// stored on-chain.
pub fn hash_coupon_code(code: &str) -> [u8; 32] {
    let mut digest = [0u8; 32];

    for (i, byte) in code.as_bytes().iter().enumerate() {
        digest[i % 32] ^= byte;
    }

    digest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fee_and_net_conserve_amount() {
        for pct in 0..=100u8 {
            for amount in [1u64, 99, 100, 101, 1_000_000, u64::MAX / 100] {
                let (fee, net) = split_fee(amount, pct).unwrap();
                assert_eq!(fee + net, amount);
            }
        }
    }

    #[test]
    fn fee_truncates_toward_zero() {
        // 3% of 101 is 3.03, the fee must floor to 3
        let (fee, net) = split_fee(101, 3).unwrap();
        assert_eq!(fee, 3);
        assert_eq!(net, 98);

        // 2% of 1_000_000 (the documented end-to-end scenario)
        let (fee, net) = split_fee(1_000_000, 2).unwrap();
        assert_eq!(fee, 20_000);
        assert_eq!(net, 980_000);
    }

    #[test]
    fn fee_percentage_bounds() {
        let (fee, net) = split_fee(1_000_000, 0).unwrap();
        assert_eq!(fee, 0);
        assert_eq!(net, 1_000_000);

        let (fee, net) = split_fee(1_000_000, 100).unwrap();
        assert_eq!(fee, 1_000_000);
        assert_eq!(net, 0);
    }

    #[test]
    fn fee_overflow_is_an_error() {
        assert!(split_fee(u64::MAX, 2).is_err());
    }

    #[test]
    fn hash_is_deterministic() {
        assert_eq!(hash_coupon_code("TEST_COUPON"), hash_coupon_code("TEST_COUPON"));
        assert_eq!(hash_coupon_code(""), [0u8; 32]);
    }

    #[test]
    fn hash_distinguishes_positionally_different_codes() {
        assert_ne!(hash_coupon_code("TEST_COUPON"), hash_coupon_code("TEST_C0UPON"));
        assert_ne!(hash_coupon_code("abc"), hash_coupon_code("abcd"));
    }

    #[test]
    fn hash_folds_bytes_into_position_mod_32() {
        let digest = hash_coupon_code("AB");
        let mut expected = [0u8; 32];
        expected[0] = b'A';
        expected[1] = b'B';
        assert_eq!(digest, expected);
    }

    // The XOR fold is order- and wrap-insensitive by design; these collisions
    // are pinned behavior, not bugs to fix.
    #[test]
    fn hash_wraps_after_32_bytes() {
        let long = "A".repeat(33);
        let mut expected = [0u8; 32];
        expected[0] = 0; // b'A' ^ b'A'
        for slot in expected.iter_mut().skip(1) {
            *slot = b'A';
        }
        assert_eq!(hash_coupon_code(&long), expected);
    }
}
