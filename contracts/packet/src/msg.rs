use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Timestamp, Uint128};
use lucky_packet_common::types::PacketStatus;

use crate::state::{Config, DrawRecord, LifetimeStats};

#[cw_serde]
pub struct InstantiateMsg {
    /// Defaults to the instantiating sender when unset.
    pub owner: Option<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Create a new packet, discarding any previous packet and its history.
    /// Owner only.
    Create {
        /// Total amount as a decimal string with at most two fractional
        /// digits, e.g. "100.00".
        total_amount: String,
        /// Number of shares to split into (1-50).
        total_people: u32,
        /// Extra entropy mixed into the draw seed.
        entropy: Option<String>,
    },
    /// Draw the next share from the active packet. Owner only.
    Draw {},
    /// Display reset between a closed result view and the next draw.
    /// Notification only; packet and history state are untouched.
    Reset {},
    /// Transfer ownership. Owner only.
    UpdateConfig { owner: Option<String> },
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Config)]
    Config {},
    /// Summary of the active packet; undrawn share values are never exposed.
    #[returns(Option<PacketResponse>)]
    Packet {},
    #[returns(StatisticsResponse)]
    Statistics {},
    /// Draw records, newest first.
    #[returns(HistoryResponse)]
    History {
        /// Return records with seq strictly below this.
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    #[returns(LifetimeStats)]
    LifetimeStats {},
}

#[cw_serde]
pub struct PacketResponse {
    pub total_amount: Uint128,
    pub total_amount_display: String,
    pub total_people: u32,
    pub remaining: u32,
    pub status: PacketStatus,
    pub created_at: Timestamp,
}

#[cw_serde]
pub struct StatisticsResponse {
    /// Largest drawn amount, absent while nothing has been drawn.
    pub best: Option<Uint128>,
    /// Smallest drawn amount, absent while nothing has been drawn.
    pub worst: Option<Uint128>,
    pub remaining: u32,
    pub drawn: u32,
}

#[cw_serde]
pub struct HistoryResponse {
    pub records: Vec<DrawRecord>,
}
