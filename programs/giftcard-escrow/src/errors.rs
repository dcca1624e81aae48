use anchor_lang::prelude::*;

#[error_code]
pub enum GiftCardError {
    #[msg("Invalid coupon code")]
    InvalidCouponCode,
    #[msg("Amount must be greater than zero")]
    InvalidAmount,
    #[msg("Signer is not the admin")]
    Unauthorized,
    #[msg("Fee percentage must be between 0 and 100")]
    InvalidFeePercentage,
    #[msg("Arithmetic overflow")]
    Overflow,
}
