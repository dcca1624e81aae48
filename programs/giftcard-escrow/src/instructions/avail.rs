use anchor_lang::prelude::*;

use crate::errors::*;
use crate::states::*;
use crate::utils::*;

/// Redeem a gift card by presenting its coupon code.
///
/// The card is a bearer instrument: no identity check is performed beyond
/// the claimer's signature, possession of the code is the sole
/// authorization factor. On success `close = claimer` sends the account's
/// full balance - escrowed amount plus rent deposit - to the claimer and
/// deletes the card, so a second redemption fails to even resolve the
/// account.
pub fn avail(ctx: Context<Avail>, coupon_code: String) -> Result<()> {
    let giftcard = &ctx.accounts.giftcard;

    // Full 32-byte comparison; no hint about which position differs
    require!(
        hash_coupon_code(&coupon_code) == giftcard.hashed_coupon_code,
        GiftCardError::InvalidCouponCode
    );

    emit!(GiftCardRedeemed {
        giftcard: giftcard.key(),
        creator: giftcard.creator,
        claimer: ctx.accounts.claimer.key(),
        amount: giftcard.amount,
    });

    // Payout is handled by `close = claimer` in the accounts struct
    Ok(())
}

/// Event emitted when a gift card is redeemed.
#[event]
pub struct GiftCardRedeemed {
    pub giftcard: Pubkey,
    pub creator: Pubkey,
    pub claimer: Pubkey,
    pub amount: u64,
}

#[derive(Accounts)]
pub struct Avail<'info> {
    /// Gift card being redeemed.
    ///
    /// `close = claimer` burns the account after the instruction completes,
    /// sending escrow and rent to the claimer.
    #[account(
        mut,
        seeds = [
            b"giftcard",
            giftcard.creator.as_ref(),
            &giftcard.seed.to_le_bytes(),
        ],
        bump = giftcard.bump,
        close = claimer
    )]
    pub giftcard: Account<'info, GiftCard>,

    /// Claimer receiving the escrowed lamports.
    #[account(mut)]
    pub claimer: Signer<'info>,

    pub system_program: Program<'info, System>,
}
