use cosmwasm_std::{DepsMut, Env, Event, MessageInfo, Order, Response, StdResult, Storage};
use lucky_packet_common::allocate::allocate;
use lucky_packet_common::money::{format_decimal, parse_decimal};
use lucky_packet_common::rng::DrawRng;
use lucky_packet_common::types::RankTier;

use crate::error::ContractError;
use crate::state::{Config, DrawRecord, Packet, CONFIG, HISTORY, LIFETIME, PACKET};

fn ensure_owner(config: &Config, info: &MessageInfo, action: &str) -> Result<(), ContractError> {
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized {
            reason: format!("only the owner can {action}"),
        });
    }
    Ok(())
}

/// Remove every record of the previous packet. Bounded at 50 entries.
fn clear_history(storage: &mut dyn Storage) -> StdResult<()> {
    let seqs: Vec<u64> = HISTORY
        .keys(storage, None, None, Order::Ascending)
        .collect::<StdResult<_>>()?;
    for seq in seqs {
        HISTORY.remove(storage, seq);
    }
    Ok(())
}

/// Create a new packet. Owner only.
///
/// Parsing and allocation run before anything is written, so a rejected
/// create leaves the previous packet, history and statistics untouched.
pub fn create(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    total_amount: String,
    total_people: u32,
    entropy: Option<String>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info, "create packets")?;

    let total = parse_decimal(&total_amount)?;

    // Seed the draw stream from block state, sender and caller entropy.
    let time_bytes = env.block.time.nanos().to_be_bytes();
    let height_bytes = env.block.height.to_be_bytes();
    let entropy = entropy.unwrap_or_default();
    let mut rng = DrawRng::from_entropy(&[
        time_bytes.as_slice(),
        height_bytes.as_slice(),
        info.sender.as_bytes(),
        entropy.as_bytes(),
    ]);

    let shares = allocate(total, total_people, &mut rng)?;
    let best_share = shares.iter().copied().max().unwrap_or_default();

    clear_history(deps.storage)?;

    let packet = Packet {
        total_amount: total,
        total_people,
        shares,
        best_share,
        created_at: env.block.time,
    };
    PACKET.save(deps.storage, &packet)?;

    let mut lifetime = LIFETIME.load(deps.storage)?;
    lifetime.packets_created += 1;
    LIFETIME.save(deps.storage, &lifetime)?;

    Ok(Response::new()
        .add_attribute("action", "create")
        .add_attribute("total_amount", total.to_string())
        .add_attribute("total_people", total_people.to_string())
        .add_event(
            Event::new("packet_created")
                .add_attribute("total_amount", total.to_string())
                .add_attribute("total_amount_display", format_decimal(total))
                .add_attribute("total_people", total_people.to_string())
                .add_attribute("created_at", env.block.time.seconds().to_string()),
        ))
}

/// Draw the next share. Owner only.
///
/// The `packet_drawn` event carries everything the rendering, audio and
/// narration collaborators need; they react to it after the state change
/// has committed and can never feed back into it.
pub fn draw(deps: DepsMut, env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info, "draw")?;

    let mut packet = PACKET
        .may_load(deps.storage)?
        .ok_or(ContractError::NotCreated)?;

    let Some(amount) = packet.shares.pop() else {
        return Err(ContractError::NoSharesRemaining {
            total_people: packet.total_people,
        });
    };

    let seq = packet.drawn() as u64;
    let tier = RankTier::classify(amount, packet.total_amount, packet.total_people);
    let best_luck = amount == packet.best_share;

    let record = DrawRecord {
        seq,
        amount,
        tier: tier.clone(),
        best_luck,
        drawn_at: env.block.time,
    };
    HISTORY.save(deps.storage, seq, &record)?;
    PACKET.save(deps.storage, &packet)?;

    let mut lifetime = LIFETIME.load(deps.storage)?;
    lifetime.draws_completed += 1;
    lifetime.total_distributed += amount;
    LIFETIME.save(deps.storage, &lifetime)?;

    Ok(Response::new()
        .add_attribute("action", "draw")
        .add_attribute("seq", seq.to_string())
        .add_attribute("amount", amount.to_string())
        .add_event(
            Event::new("packet_drawn")
                .add_attribute("seq", seq.to_string())
                .add_attribute("amount", amount.to_string())
                .add_attribute("amount_display", format_decimal(amount))
                .add_attribute("tier", tier.as_str())
                .add_attribute("best_luck", best_luck.to_string())
                .add_attribute("remaining", packet.remaining().to_string())
                .add_attribute("timestamp", env.block.time.seconds().to_string()),
        ))
}

/// Display reset. Owner only. Mutates nothing; the event tells the UI what
/// to show next (including the new-round prompt once exhausted).
pub fn reset(deps: DepsMut, _env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info, "reset the display")?;

    let packet = PACKET.may_load(deps.storage)?;
    let (remaining, exhausted) = match &packet {
        Some(p) => (p.remaining(), p.shares.is_empty()),
        None => (0, false),
    };

    Ok(Response::new()
        .add_attribute("action", "reset")
        .add_event(
            Event::new("packet_display_reset")
                .add_attribute("remaining", remaining.to_string())
                .add_attribute("exhausted", exhausted.to_string()),
        ))
}

/// Transfer ownership. Owner only.
pub fn update_config(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    owner: Option<String>,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info, "update config")?;

    if let Some(owner) = owner {
        config.owner = deps.api.addr_validate(&owner)?;
    }
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "update_config")
        .add_attribute("owner", config.owner.to_string()))
}
