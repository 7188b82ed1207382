pub mod allocate;
pub mod money;
pub mod rng;
pub mod types;

pub use allocate::{allocate, AllocationError, MAX_RECIPIENTS, MIN_RECIPIENTS, MIN_SHARE};
pub use money::{format_decimal, parse_decimal, MoneyError};
pub use rng::DrawRng;
pub use types::{PacketStatus, RankTier};
