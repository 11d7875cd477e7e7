pub mod jumpgate;

pub use jumpgate::*;
