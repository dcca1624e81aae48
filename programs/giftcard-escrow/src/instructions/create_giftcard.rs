use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::errors::*;
use crate::states::*;
use crate::utils::*;

/// Create a gift card escrowing lamports under a coupon-code secret.
///
/// Flow:
/// - the protocol fee (`global_state.fee_percentage` of `amount`) goes to
///   the fee receiver
/// - the remainder is escrowed in the gift card PDA
/// - the card stores the digest of the coupon code, never the plaintext
///
/// The creator additionally pays rent for the PDA via `init`; that deposit
/// comes back to whoever redeems the card. One PDA per (creator, seed), so
/// re-creating a live card at the same seed is rejected by account
/// creation.
pub fn create_giftcard(
    ctx: Context<CreateGiftcard>,
    seed: u64,
    coupon_code: String,
    amount: u64,
) -> Result<()> {
    require!(amount > 0, GiftCardError::InvalidAmount);

    let global_state = &ctx.accounts.global_state;
    let (fee_amount, net_amount) = split_fee(amount, global_state.fee_percentage)?;

    // Fee leg: creator -> fee receiver, skipped entirely at 0%
    if fee_amount > 0 {
        let cpi_accounts = system_program::Transfer {
            from: ctx.accounts.creator.to_account_info(),
            to: ctx.accounts.fee_receiver.to_account_info(),
        };
        let cpi_ctx = CpiContext::new(ctx.accounts.system_program.to_account_info(), cpi_accounts);
        system_program::transfer(cpi_ctx, fee_amount)?;
    }

    // Escrow leg: creator -> gift card PDA
    let cpi_accounts = system_program::Transfer {
        from: ctx.accounts.creator.to_account_info(),
        to: ctx.accounts.giftcard.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(ctx.accounts.system_program.to_account_info(), cpi_accounts);
    system_program::transfer(cpi_ctx, net_amount)?;

    let giftcard = &mut ctx.accounts.giftcard;
    giftcard.seed = seed;
    giftcard.creator = ctx.accounts.creator.key();
    giftcard.hashed_coupon_code = hash_coupon_code(&coupon_code);
    giftcard.amount = net_amount;
    giftcard.bump = ctx.bumps.giftcard;

    emit!(GiftCardCreated {
        giftcard: giftcard.key(),
        creator: giftcard.creator,
        seed,
        amount: net_amount,
        fee_amount,
    });

    Ok(())
}

/// Event emitted when a gift card is issued.
#[event]
pub struct GiftCardCreated {
    pub giftcard: Pubkey,
    pub creator: Pubkey,
    pub seed: u64,
    pub amount: u64,
    pub fee_amount: u64,
}

#[derive(Accounts)]
#[instruction(seed: u64)]
pub struct CreateGiftcard<'info> {
    /// Gift card PDA. One PDA per (creator, seed).
    #[account(
        init,
        payer = creator,
        space = 8 + GiftCard::SIZE,
        seeds = [
            b"giftcard",
            creator.key().as_ref(),
            &seed.to_le_bytes(),
        ],
        bump
    )]
    pub giftcard: Account<'info, GiftCard>,

    /// Global state - defines the fee percentage and fee receiver.
    #[account(
        seeds = [b"global_state"],
        bump = global_state.bump
    )]
    pub global_state: Account<'info, GlobalState>,

    /// CHECK: Constrained to the fee receiver recorded in the global state;
    /// it only receives lamports, so no data checks are needed.
    #[account(mut, address = global_state.fee_receiver)]
    pub fee_receiver: UncheckedAccount<'info>,

    /// Creator funding the card (escrow amount, fee and rent).
    #[account(mut)]
    pub creator: Signer<'info>,

    pub system_program: Program<'info, System>,
}
