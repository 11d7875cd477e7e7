pub mod amount;
pub mod bridge;
pub mod chains;

pub use amount::*;
pub use bridge::*;
pub use chains::*;
