use cosmwasm_std::{to_json_binary, Binary, Deps, Order, StdResult, Uint128};
use cw_storage_plus::Bound;
use lucky_packet_common::money::format_decimal;

use crate::msg::{HistoryResponse, PacketResponse, StatisticsResponse};
use crate::state::{CONFIG, HISTORY, LIFETIME, PACKET};

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config)
}

pub fn query_packet(deps: Deps) -> StdResult<Binary> {
    let packet = PACKET.may_load(deps.storage)?;
    let response = packet.map(|p| PacketResponse {
        total_amount: p.total_amount,
        total_amount_display: format_decimal(p.total_amount),
        total_people: p.total_people,
        remaining: p.remaining(),
        status: p.status(),
        created_at: p.created_at,
    });
    to_json_binary(&response)
}

pub fn query_statistics(deps: Deps) -> StdResult<Binary> {
    let mut best: Option<Uint128> = None;
    let mut worst: Option<Uint128> = None;
    let mut drawn = 0u32;
    for record in HISTORY.range(deps.storage, None, None, Order::Ascending) {
        let (_, record) = record?;
        best = Some(best.map_or(record.amount, |b| b.max(record.amount)));
        worst = Some(worst.map_or(record.amount, |w| w.min(record.amount)));
        drawn += 1;
    }

    let remaining = PACKET
        .may_load(deps.storage)?
        .map_or(0, |p| p.remaining());

    to_json_binary(&StatisticsResponse {
        best,
        worst,
        remaining,
        drawn,
    })
}

pub fn query_history(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let limit = limit.unwrap_or(20).min(100) as usize;
    let end = start_after.map(Bound::exclusive);

    // Newest first
    let records: Vec<_> = HISTORY
        .range(deps.storage, None, end, Order::Descending)
        .take(limit)
        .filter_map(|r| r.ok())
        .map(|(_, record)| record)
        .collect();

    to_json_binary(&HistoryResponse { records })
}

pub fn query_lifetime_stats(deps: Deps) -> StdResult<Binary> {
    let stats = LIFETIME.load(deps.storage)?;
    to_json_binary(&stats)
}
