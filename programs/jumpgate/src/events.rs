use anchor_lang::prelude::*;

/// Event emitted when a jumpgate is created
#[event]
pub struct JumpgateInitialized {
    pub jumpgate: Pubkey,
    pub token_mint: Pubkey,
    pub bridge_program: Pubkey,
    pub recipient_chain: u16,
    pub recipient: [u8; 32],
    pub arbiter_fee: u64,
    pub bridging_cap: u64,
}

/// Event emitted when a balance is forwarded through the bridge.
/// `amount` is what the bridge actually pulled, not what was requested
#[event]
pub struct TokensBridged {
    pub token_mint: Pubkey,
    pub bridge_program: Pubkey,
    pub recipient_chain: u16,
    pub recipient: [u8; 32],
    pub amount: u64,
    pub arbiter_fee: u64,
}

/// Event emitted when the authority recovers mistakenly deposited tokens
#[event]
pub struct TokensRecovered {
    pub token_mint: Pubkey,
    pub destination: Pubkey,
    pub amount: u64,
}
