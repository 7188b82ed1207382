use cosmwasm_std::Uint128;
use thiserror::Error;

use crate::money::format_decimal;
use crate::rng::DrawRng;

pub const MIN_RECIPIENTS: u32 = 1;
pub const MAX_RECIPIENTS: u32 = 50;
/// Floor per recipient, in minor units.
pub const MIN_SHARE: u128 = 1;

#[derive(Error, Debug, PartialEq)]
pub enum AllocationError {
    #[error("total amount must be greater than zero")]
    ZeroTotal,

    #[error("recipient count {count} out of range (1-50)")]
    CountOutOfRange { count: u32 },

    #[error("total {total} is below the {required} needed to give {count} recipients at least 0.01 each")]
    TotalBelowMinimum {
        total: String,
        required: String,
        count: u32,
    },
}

/// Split `total` minor units into `count` random shares summing exactly to
/// `total`, each at least [`MIN_SHARE`].
///
/// Each of the first `count - 1` recipients draws uniformly from
/// `[1, ceiling * 8/10]`, where `ceiling` is what remains after reserving one
/// minor unit for everyone still waiting. The cap keeps an early draw from
/// starving the pool; the reserve keeps every later ceiling at >= 1. The last
/// recipient takes the exact remainder, so the sum invariant needs no
/// correction step. A final shuffle decorrelates draw order from generation
/// order.
pub fn allocate(
    total: Uint128,
    count: u32,
    rng: &mut DrawRng,
) -> Result<Vec<Uint128>, AllocationError> {
    if total.is_zero() {
        return Err(AllocationError::ZeroTotal);
    }
    if !(MIN_RECIPIENTS..=MAX_RECIPIENTS).contains(&count) {
        return Err(AllocationError::CountOutOfRange { count });
    }
    let required = MIN_SHARE * count as u128;
    if total.u128() < required {
        return Err(AllocationError::TotalBelowMinimum {
            total: format_decimal(total),
            required: format_decimal(Uint128::new(required)),
            count,
        });
    }

    let mut shares: Vec<Uint128> = Vec::with_capacity(count as usize);
    let mut remaining = total.u128();
    let mut people_left = count as u128;

    for _ in 0..count - 1 {
        let ceiling = remaining - (people_left - 1) * MIN_SHARE;
        let cap = (ceiling * 8 / 10).max(MIN_SHARE);
        let share = MIN_SHARE + rng.next_below(cap - MIN_SHARE + 1);
        shares.push(Uint128::new(share));
        remaining -= share;
        people_left -= 1;
    }
    shares.push(Uint128::new(remaining));

    rng.shuffle(&mut shares);
    Ok(shares)
}
