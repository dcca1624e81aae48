pub use initialize::*;
pub mod initialize;

pub use update_fee_settings::*;
pub mod update_fee_settings;

pub use create_giftcard::*;
pub mod create_giftcard;

pub use avail::*;
pub mod avail;
