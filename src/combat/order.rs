//! Execution order for a round.

use crate::actions::PendingAction;
use crate::core::Roster;

/// Order pending actions by the acting monster's agility, highest first.
///
/// The sort is stable, so actions whose monsters share an agility value
/// keep their registration order. An action whose actor is not on the
/// board sorts as agility 0; it will be skipped when it resolves.
#[must_use]
pub fn execution_order(actions: &[PendingAction], roster: &Roster) -> Vec<PendingAction> {
    let mut ordered = actions.to_vec();
    ordered.sort_by_key(|action| {
        let agi = roster
            .monster(action.player, action.monster)
            .map_or(0, |m| m.stats.agi);
        std::cmp::Reverse(agi)
    });
    ordered
}
