use cosmwasm_std::StdError;
use lucky_packet_common::allocate::AllocationError;
use lucky_packet_common::money::MoneyError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("{0}")]
    InvalidAmount(#[from] MoneyError),

    #[error("{0}")]
    InvalidAllocation(#[from] AllocationError),

    #[error("no packet has been created yet")]
    NotCreated,

    #[error("packet exhausted: all {total_people} shares have been drawn")]
    NoSharesRemaining { total_people: u32 },
}
