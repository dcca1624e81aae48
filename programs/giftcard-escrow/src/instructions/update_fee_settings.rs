use anchor_lang::prelude::*;

use crate::errors::*;
use crate::states::*;

/// Update the protocol fee settings.
///
/// Only the admin recorded in the global state may call this. Both fields
/// are overwritten in the same instruction, so readers never observe a
/// half-applied update.
pub fn update_fee_settings(
    ctx: Context<UpdateFeeSettings>,
    fee_percentage: u8,
    fee_receiver: Pubkey,
) -> Result<()> {
    let global_state = &mut ctx.accounts.global_state;

    require_keys_eq!(
        ctx.accounts.admin.key(),
        global_state.admin,
        GiftCardError::Unauthorized
    );
    require!(fee_percentage <= 100, GiftCardError::InvalidFeePercentage);

    global_state.fee_percentage = fee_percentage;
    global_state.fee_receiver = fee_receiver;

    emit!(FeeSettingsUpdated {
        admin: global_state.admin,
        fee_percentage,
        fee_receiver,
    });

    Ok(())
}

/// Event emitted when the admin changes the fee settings.
#[event]
pub struct FeeSettingsUpdated {
    pub admin: Pubkey,
    pub fee_percentage: u8,
    pub fee_receiver: Pubkey,
}

#[derive(Accounts)]
pub struct UpdateFeeSettings<'info> {
    #[account(
        mut,
        seeds = [b"global_state"],
        bump = global_state.bump
    )]
    pub global_state: Account<'info, GlobalState>,

    pub admin: Signer<'info>,
}
