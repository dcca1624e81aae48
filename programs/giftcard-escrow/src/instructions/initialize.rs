use anchor_lang::prelude::*;

use crate::states::*;

/// Initialize the global state for the protocol.
///
/// This should be called once by the protocol owner (admin) after deploy.
/// The fee starts at 0% and the admin doubles as the fee receiver until
/// `update_fee_settings` says otherwise. A second call fails because the
/// global state PDA already exists.
pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let global_state = &mut ctx.accounts.global_state;
    global_state.admin = ctx.accounts.admin.key();
    global_state.fee_percentage = 0;
    global_state.fee_receiver = ctx.accounts.admin.key();
    global_state.bump = ctx.bumps.global_state;

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + GlobalState::SIZE,
        seeds = [b"global_state"],
        bump
    )]
    pub global_state: Account<'info, GlobalState>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}
