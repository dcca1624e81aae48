use anchor_lang::prelude::*;

declare_id!("95tdskrYsT3f2eCQAh9GUkrZWFo8rTM8aob1BhYcCFFS");

pub mod errors;
pub mod instructions;
pub mod states;
pub mod utils;

use crate::instructions::*;

#[program]
pub mod giftcard_escrow {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::initialize(ctx)
    }

    pub fn update_fee_settings(
        ctx: Context<UpdateFeeSettings>,
        fee_percentage: u8,
        fee_receiver: Pubkey,
    ) -> Result<()> {
        instructions::update_fee_settings::update_fee_settings(ctx, fee_percentage, fee_receiver)
    }

    pub fn create_giftcard(
        ctx: Context<CreateGiftcard>,
        seed: u64,
        coupon_code: String,
        amount: u64,
    ) -> Result<()> {
        instructions::create_giftcard::create_giftcard(ctx, seed, coupon_code, amount)
    }

    pub fn avail(ctx: Context<Avail>, coupon_code: String) -> Result<()> {
        instructions::avail::avail(ctx, coupon_code)
    }
}
