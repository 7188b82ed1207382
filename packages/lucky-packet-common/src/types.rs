use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;

/// The lifecycle status of a packet.
#[cw_serde]
pub enum PacketStatus {
    /// Shares remain to be drawn.
    Active,
    /// Every share has been drawn; only a new create leaves this state.
    Exhausted,
}

/// Qualitative luck bucket for a drawn share, relative to the even split.
#[cw_serde]
pub enum RankTier {
    /// At least 150% of the average share.
    Exceptional,
    /// At least the average share.
    Good,
    /// At least 70% of the average share.
    Fair,
    Encouraging,
}

impl RankTier {
    /// Bucket `amount` against the average share `total / count`.
    ///
    /// Compared cross-multiplied in minor units (`amount * count` vs scaled
    /// `total`) so no division or rounding is involved.
    pub fn classify(amount: Uint128, total: Uint128, count: u32) -> Self {
        let lhs = amount.u128().saturating_mul(count as u128);
        let total = total.u128();
        if lhs.saturating_mul(10) >= total.saturating_mul(15) {
            RankTier::Exceptional
        } else if lhs >= total {
            RankTier::Good
        } else if lhs.saturating_mul(10) >= total.saturating_mul(7) {
            RankTier::Fair
        } else {
            RankTier::Encouraging
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RankTier::Exceptional => "exceptional",
            RankTier::Good => "good",
            RankTier::Fair => "fair",
            RankTier::Encouraging => "encouraging",
        }
    }
}
