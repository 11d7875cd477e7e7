use anchor_lang::prelude::*;
use anchor_lang::solana_program::{
    hash,
    instruction::{AccountMeta, Instruction},
};

/// Anchor-style name of the bridge's transfer entry point
const TRANSFER_TOKENS_IX: &[u8] = b"global:transfer_tokens";

/// Build the bridge `transfer_tokens` instruction.
///
/// The bridge is an external program with a known entry point shape; the
/// jumpgate encodes the instruction data itself and forwards caller-supplied
/// accounts untouched. Data layout per Anchor:
/// [discriminator(8)] + amount(u64 LE) + recipient_chain(u16 LE) +
/// recipient([u8; 32]) + arbiter_fee(u64 LE)
pub fn transfer_tokens_instruction(
    bridge_program: Pubkey,
    accounts: Vec<AccountMeta>,
    amount: u64,
    recipient_chain: u16,
    recipient: [u8; 32],
    arbiter_fee: u64,
) -> Instruction {
    let discriminator = hash::hash(TRANSFER_TOKENS_IX).to_bytes();

    let mut data = Vec::with_capacity(8 + 8 + 2 + 32 + 8);
    data.extend_from_slice(&discriminator[..8]);
    data.extend_from_slice(&amount.to_le_bytes());
    data.extend_from_slice(&recipient_chain.to_le_bytes());
    data.extend_from_slice(&recipient);
    data.extend_from_slice(&arbiter_fee.to_le_bytes());

    Instruction {
        program_id: bridge_program,
        accounts,
        data,
    }
}
