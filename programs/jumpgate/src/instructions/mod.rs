pub mod bridge_tokens;
pub mod initialize;
pub mod recover;

pub use bridge_tokens::*;
pub use initialize::*;
pub use recover::*;
