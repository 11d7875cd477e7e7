use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("EyBofv6ygUaJWPF59PuVM4s5KBMWMTLhBwD95XDuQfmM");

/// Jumpgate Token Forwarding Program
///
/// Immutable single-purpose relay: accepts token deposits and forwards the
/// accumulated balance, on demand, through an external bridge program to one
/// fixed recipient on one fixed destination chain
#[program]
pub mod jumpgate {
    use super::*;

    /// Create a jumpgate bound to one token, one bridge and one recipient.
    /// The configuration is validated here and never changes afterwards;
    /// there is no update instruction
    pub fn initialize_jumpgate(
        ctx: Context<InitializeJumpgate>,
        recipient_chain: u16,
        recipient: String,
        arbiter_fee: u64,
        bridging_cap: u64,
    ) -> Result<()> {
        instructions::initialize::handler(
            ctx,
            recipient_chain,
            recipient,
            arbiter_fee,
            bridging_cap,
        )
    }

    /// Forward the jumpgate's current token balance through the bridge.
    /// Permissionless: the destination is fixed, so anyone may pull the trigger
    pub fn bridge_tokens(ctx: Context<BridgeTokens>) -> Result<()> {
        instructions::bridge_tokens::handler(ctx)
    }

    /// Recover tokens parked at the jumpgate by mistake (authority only)
    pub fn recover_tokens(ctx: Context<RecoverTokens>, amount: u64) -> Result<()> {
        instructions::recover::handler(ctx, amount)
    }
}
