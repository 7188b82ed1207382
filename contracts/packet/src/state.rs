use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};
use lucky_packet_common::types::{PacketStatus, RankTier};

pub const CONFIG: Item<Config> = Item::new("config");
/// The single active packet; absent until the first create.
pub const PACKET: Item<Packet> = Item::new("packet");
/// Draw history for the active packet, keyed by 1-based draw sequence.
/// Cleared wholesale by each create.
pub const HISTORY: Map<u64, DrawRecord> = Map::new("history");
pub const LIFETIME: Item<LifetimeStats> = Item::new("lifetime");

#[cw_serde]
pub struct Config {
    /// The one actor allowed to drive the packet (create/draw/reset).
    pub owner: Addr,
}

#[cw_serde]
pub struct Packet {
    /// Total across all shares, in minor units. Immutable once created.
    pub total_amount: Uint128,
    /// Recipient count the packet was split for. Immutable once created.
    pub total_people: u32,
    /// Undrawn pool; each draw pops the tail. Order is already shuffled.
    pub shares: Vec<Uint128>,
    /// Largest share generated for this packet, drawn or not. A draw equal
    /// to this is the packet's best-luck draw.
    pub best_share: Uint128,
    pub created_at: Timestamp,
}

impl Packet {
    pub fn remaining(&self) -> u32 {
        self.shares.len() as u32
    }

    pub fn drawn(&self) -> u32 {
        self.total_people - self.remaining()
    }

    pub fn status(&self) -> PacketStatus {
        if self.shares.is_empty() {
            PacketStatus::Exhausted
        } else {
            PacketStatus::Active
        }
    }
}

#[cw_serde]
pub struct DrawRecord {
    /// 1-based position of this draw within its packet.
    pub seq: u64,
    /// Drawn share in minor units.
    pub amount: Uint128,
    pub tier: RankTier,
    /// True iff this draw equals the packet's largest generated share.
    pub best_luck: bool,
    pub drawn_at: Timestamp,
}

/// Running counters across all packets ever created on this contract.
#[cw_serde]
pub struct LifetimeStats {
    pub packets_created: u64,
    pub draws_completed: u64,
    pub total_distributed: Uint128,
}
