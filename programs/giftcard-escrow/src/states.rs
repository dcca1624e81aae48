use anchor_lang::prelude::*;

// ---------------------------
// Accounts: State
// ---------------------------

/// Global configuration for the protocol.
///
/// Singleton PDA at seeds `[b"global_state"]`. Created once by `initialize`
/// and mutated only by the admin through `update_fee_settings`.
#[account]
pub struct GlobalState {
    pub admin: Pubkey,        // 32 bytes - who is allowed to update fee settings
    pub fee_percentage: u8,   // 1 byte   - protocol fee in whole percent, 0..=100
    pub fee_receiver: Pubkey, // 32 bytes - wallet receiving the fee cut at issuance
    pub bump: u8,             // 1 byte   - PDA bump, re-checked on every use
}

impl GlobalState {
    /// Space = 32 + 1 + 32 + 1 = 66 bytes (plus 8-byte discriminator on-chain)
    pub const SIZE: usize = 32 + 1 + 32 + 1;
}

/// Gift card escrow account: one PDA per (creator, seed).
///
/// The account exists iff the card has not been redeemed yet. `avail` closes
/// it, so liveness is implied by account existence rather than a flag.
#[account]
pub struct GiftCard {
    pub seed: u64,                    // 8 bytes  - creator-chosen, part of the PDA seeds
    pub creator: Pubkey,              // 32 bytes - wallet that funded the card
    pub hashed_coupon_code: [u8; 32], // 32 bytes - XOR-fold digest of the secret code
    pub amount: u64,                  // 8 bytes  - escrowed lamports, net of the protocol fee
    pub bump: u8,                     // 1 byte   - PDA bump
}

impl GiftCard {
    /// Space = 8 + 32 + 32 + 8 + 1 = 81 bytes (plus 8-byte discriminator on-chain)
    pub const SIZE: usize = 8 + 32 + 32 + 8 + 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serialized_len<T: AnchorSerialize>(value: &T) -> usize {
        let mut buf = Vec::new();
        value.serialize(&mut buf).unwrap();
        buf.len()
    }

    #[test]
    fn global_state_size_matches_layout() {
        let state = GlobalState {
            admin: Pubkey::new_unique(),
            fee_percentage: 2,
            fee_receiver: Pubkey::new_unique(),
            bump: 254,
        };
        assert_eq!(serialized_len(&state), GlobalState::SIZE);
    }

    #[test]
    fn gift_card_size_matches_layout() {
        let card = GiftCard {
            seed: 42,
            creator: Pubkey::new_unique(),
            hashed_coupon_code: [7u8; 32],
            amount: 980_000,
            bump: 255,
        };
        assert_eq!(serialized_len(&card), GiftCard::SIZE);
    }
}
