use anchor_lang::prelude::*;
use bech32::FromBase32;

use crate::constants::{SOLANA_CHAIN_ID, TERRA_ADDRESS_LEN, TERRA_CHAIN_ID, TERRA_HRP};
use crate::errors::JumpgateError;

/// Destination chains the jumpgate can forward to.
///
/// Closed set: admitting a new chain means adding a variant here plus its
/// branch in `encode_recipient`, keeping the dispatch exhaustive. There is
/// deliberately no fallback encoding for unknown identifiers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DestinationChain {
    Solana,
    Terra,
}

impl DestinationChain {
    /// Registry lookup by chain identifier
    pub fn from_chain_id(chain_id: u16) -> Option<Self> {
        match chain_id {
            SOLANA_CHAIN_ID => Some(Self::Solana),
            TERRA_CHAIN_ID => Some(Self::Terra),
            _ => None,
        }
    }

    pub fn chain_id(&self) -> u16 {
        match self {
            Self::Solana => SOLANA_CHAIN_ID,
            Self::Terra => TERRA_CHAIN_ID,
        }
    }

    /// Encode a human-readable recipient address into the canonical 32-byte
    /// layout the bridge expects for this chain.
    ///
    /// Deterministic: the result is burned into the jumpgate configuration at
    /// initialization and never re-derived per transfer
    pub fn encode_recipient(&self, address: &str) -> Result<[u8; 32]> {
        match self {
            Self::Solana => encode_base58_recipient(address),
            Self::Terra => encode_bech32_recipient(address),
        }
    }
}

/// Resolve a chain identifier and encode a recipient for it in one step,
/// the exact sequence initialization runs before anything is written
pub fn encode_for_chain(chain_id: u16, address: &str) -> Result<[u8; 32]> {
    DestinationChain::from_chain_id(chain_id)
        .ok_or(error!(JumpgateError::UnsupportedChain))?
        .encode_recipient(address)
}

/// Solana recipients are base58-encoded 32-byte account keys
fn encode_base58_recipient(address: &str) -> Result<[u8; 32]> {
    let bytes = bs58::decode(address)
        .into_vec()
        .map_err(|_| error!(JumpgateError::MalformedAddress))?;

    bytes
        .try_into()
        .map_err(|_| error!(JumpgateError::MalformedAddress))
}

/// Terra recipients are checksummed bech32 strings carrying a 20-byte account
/// value, left-padded with zero bytes to the canonical 32
fn encode_bech32_recipient(address: &str) -> Result<[u8; 32]> {
    let (hrp, data, _variant) =
        bech32::decode(address).map_err(|_| error!(JumpgateError::MalformedAddress))?;

    require!(hrp == TERRA_HRP, JumpgateError::MalformedAddress);

    let raw = Vec::<u8>::from_base32(&data)
        .map_err(|_| error!(JumpgateError::MalformedAddress))?;

    require!(raw.len() == TERRA_ADDRESS_LEN, JumpgateError::MalformedAddress);

    let mut recipient = [0u8; 32];
    recipient[32 - TERRA_ADDRESS_LEN..].copy_from_slice(&raw);
    Ok(recipient)
}
