//! Beat rules between classified combinations.

use crate::domain::combos::{ComboKind, Combination};

/// Total order key among bomb-class combinations: card count is primary
/// (tiers are doubled counts), the straight flush slots between the 5- and
/// 6-card bombs, and the joker bomb tops everything. Power breaks ties
/// inside a tier.
pub fn bomb_order(combo: &Combination) -> Option<(u8, u8)> {
    match combo.kind {
        ComboKind::JokerBomb => Some((u8::MAX, combo.power)),
        ComboKind::StraightFlush => Some((11, combo.power)),
        ComboKind::Bomb => Some((2 * combo.size() as u8, combo.power)),
        _ => None,
    }
}

/// Whether `incoming` beats `current` on the table.
///
/// Same category and card count compare by power; a bomb-class combination
/// beats any non-bomb; bombs compare by `bomb_order`. Irreflexive: a
/// combination never beats an equal one.
pub fn beats(incoming: &Combination, current: &Combination) -> bool {
    match (bomb_order(incoming), bomb_order(current)) {
        (Some(a), Some(b)) => a > b,
        (Some(_), None) => true,
        (None, Some(_)) => false,
        (None, None) => {
            incoming.kind == current.kind
                && incoming.size() == current.size()
                && incoming.power > current.power
        }
    }
}
