/// Constants for the Jumpgate forwarding program
pub const JUMPGATE_SEED: &[u8] = b"jumpgate";

/// Wormhole-style identifiers of the supported destination chains
pub const SOLANA_CHAIN_ID: u16 = 1;
pub const TERRA_CHAIN_ID: u16 = 3;

/// Bech32 human-readable part of Terra recipient addresses
pub const TERRA_HRP: &str = "terra";

/// Byte length of a decoded Terra account value before left-padding
pub const TERRA_ADDRESS_LEN: usize = 20;

/// Bridges represent amounts at 8 decimal places; anything finer is dust
pub const TARGET_DECIMALS: u8 = 8;

/// Default cap on a single bridgeable amount (one quintillion base units)
pub const DEFAULT_BRIDGING_CAP: u64 = 1_000_000_000_000_000_000;
