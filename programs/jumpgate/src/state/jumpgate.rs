use anchor_lang::prelude::*;

/// Jumpgate configuration, written once at initialization and immutable for
/// the life of the account. Reconfiguration means creating a new jumpgate
#[account]
pub struct Jumpgate {
    /// Authority allowed to recover mistakenly deposited tokens
    pub authority: Pubkey,

    /// Mint of the one token this jumpgate forwards
    pub token_mint: Pubkey,

    /// Bridge program invoked to make the cross-chain transfer
    pub bridge_program: Pubkey,

    /// The bridge's transfer authority, delegate of every approval
    pub bridge_authority: Pubkey,

    /// Destination chain identifier (Wormhole numbering)
    pub recipient_chain: u16,

    /// Canonical 32-byte recipient on the destination chain, encoded once
    /// from the human-readable address at initialization
    pub recipient: [u8; 32],

    /// Fee forwarded alongside each transfer for the destination-side relayer
    pub arbiter_fee: u64,

    /// Largest amount a single transfer may carry across the bridge
    pub bridging_cap: u64,

    /// PDA bump seed
    pub bump: u8,
}

impl Jumpgate {
    pub const SIZE: usize = 32  // authority
        + 32                    // token_mint
        + 32                    // bridge_program
        + 32                    // bridge_authority
        + 2                     // recipient_chain
        + 32                    // recipient
        + 8                     // arbiter_fee
        + 8                     // bridging_cap
        + 1;                    // bump
}
