//! Round resolution.
//!
//! The resolver never touches the caller's roster. It clones it (O(1) for
//! `im` vectors), runs every pending action against the clone in
//! agility order, and returns the clone with the log lines and a typed
//! report. The caller swaps the result in once the whole round is done.

use serde::{Deserialize, Serialize};

use super::damage::compute_hit;
use super::order::execution_order;
use crate::actions::{PendingAction, Target};
use crate::cards::{Card, Effect};
use crate::core::{CardId, CombatConfig, GameRng, MonsterId, PlayerId, Roster};
use crate::effects::{BehaviorContext, BehaviorRegistry, HookContext, HookTiming, Outcome};
use crate::monsters::Monster;

// =============================================================================
// Report types
// =============================================================================

/// Why an action did not resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// The actor or the target is no longer on the board.
    MissingCombatant,
    /// The chosen card is not in the actor's hand.
    MissingCard(CardId),
    /// The chosen card ran out of uses earlier in the round.
    CardExhausted(CardId),
}

/// An action that was skipped during resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedAction {
    pub action: PendingAction,
    pub reason: SkipReason,
}

/// Structured summary of one resolved round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    /// The round that was resolved.
    pub round: u32,

    /// Actions in the order they were executed, skipped ones included.
    pub order: Vec<PendingAction>,

    pub skipped: Vec<SkippedAction>,

    /// Monsters removed from the board, in defeat order.
    pub defeated: Vec<(PlayerId, MonsterId)>,

    /// Replacement cards drawn per player after resolution.
    pub drawn: Vec<(PlayerId, usize)>,

    /// The game's winner after this round, if any.
    pub winner: Option<PlayerId>,
}

/// Output of [`CombatResolver::resolve`].
#[derive(Clone, Debug)]
pub struct Resolution {
    /// The board after every action has resolved.
    pub roster: Roster,

    /// Log lines produced, in order.
    pub lines: Vec<String>,

    pub report: RoundReport,
}

impl Resolution {
    fn skip(&mut self, action: PendingAction, reason: SkipReason, line: String) {
        self.lines.push(line);
        self.report.skipped.push(SkippedAction { action, reason });
    }
}

// =============================================================================
// Resolver
// =============================================================================

/// Applies a round's pending actions.
#[derive(Clone, Copy, Debug)]
pub struct CombatResolver<'a> {
    config: &'a CombatConfig,
    behaviors: &'a BehaviorRegistry,
}

impl<'a> CombatResolver<'a> {
    /// Create a resolver over the given constants and behaviors.
    #[must_use]
    pub fn new(config: &'a CombatConfig, behaviors: &'a BehaviorRegistry) -> Self {
        Self { config, behaviors }
    }

    /// Resolve every action against a snapshot of `roster`.
    ///
    /// `winner` is the winner going into the round. It is never replaced;
    /// the first player to empty an opponent's board during a game keeps
    /// the win.
    pub fn resolve(
        &self,
        roster: &Roster,
        actions: &[PendingAction],
        round: u32,
        winner: Option<PlayerId>,
        rng: &mut GameRng,
    ) -> Resolution {
        let order = execution_order(actions, roster);

        let mut res = Resolution {
            roster: roster.clone(),
            lines: vec!["Executing actions...".to_string()],
            report: RoundReport {
                round,
                order: order.clone(),
                winner,
                ..RoundReport::default()
            },
        };

        for action in &order {
            self.resolve_action(&mut res, action, round, rng);
        }

        res
    }

    fn resolve_action(
        &self,
        res: &mut Resolution,
        action: &PendingAction,
        round: u32,
        rng: &mut GameRng,
    ) {
        let Some((actor_name, target_name)) = combatants(&res.roster, action)
            .map(|(actor, target)| (actor.name.clone(), target.name.clone()))
        else {
            res.skip(
                *action,
                SkipReason::MissingCombatant,
                "Error: Couldn't find attacker or defender".to_string(),
            );
            return;
        };

        let card = match action.card {
            Some(id) => match res
                .roster
                .player(action.player)
                .and_then(|p| p.hand_card(id))
                .cloned()
            {
                None => {
                    res.skip(
                        *action,
                        SkipReason::MissingCard(id),
                        format!("Error: Couldn't find card {}", id),
                    );
                    return;
                }
                Some(card) if card.is_exhausted() => {
                    let line = format!("Error: {} has no uses left", card.name());
                    res.skip(*action, SkipReason::CardExhausted(id), line);
                    return;
                }
                Some(card) => Some(card),
            },
            None => None,
        };

        let ctx = BehaviorContext {
            round,
            actor_player: action.player,
            target_player: action.target.player,
        };

        self.run_hooks(res, action, HookTiming::BeforeAction, round);

        match card {
            Some(Card::Attack(card)) => {
                let roll = rng.roll_percent();
                let hit = match combatants(&res.roster, action) {
                    Some((actor, target)) => compute_hit(actor, target, &card, roll, self.config),
                    None => return,
                };
                let dealt = hit.dealt();
                if hit.critical {
                    res.lines.push(format!(
                        "CRITICAL HIT! {} deals {} damage to {}!",
                        actor_name, dealt, target_name
                    ));
                } else {
                    res.lines.push(format!(
                        "{} deals {} damage to {}!",
                        actor_name, dealt, target_name
                    ));
                }
                if let Some(target) = res.roster.monster_mut(action.target.player, action.target.monster) {
                    target.stats.hp -= dealt;
                }

                self.apply_effects(res, action, &card.effects, &target_name, &ctx);
                consume_card(&mut res.roster, action.player, card.id);
            }
            Some(Card::Support(card)) => {
                self.apply_effects(res, action, &card.effects, &target_name, &ctx);
                consume_card(&mut res.roster, action.player, card.id);
            }
            None => {
                let (skill, outcome) = match combatants(&res.roster, action) {
                    Some((actor, target)) => {
                        let skill = actor.active_skill().name.clone();
                        let outcome = self.behaviors.run_skill(&skill, actor, target, &ctx);
                        (skill, outcome)
                    }
                    None => return,
                };
                res.lines.push(format!(
                    "{} used {} on {}!",
                    actor_name, skill, target_name
                ));
                apply_outcome(res, action, outcome);
            }
        }

        self.run_hooks(res, action, HookTiming::AfterAction, round);

        check_defeat(res, action, action.target, &target_name);
        let actor = Target::new(action.player, action.monster);
        if actor != action.target {
            check_defeat(res, action, actor, &actor_name);
        }
    }

    /// Apply card effects to the action's target, in list order.
    fn apply_effects(
        &self,
        res: &mut Resolution,
        action: &PendingAction,
        effects: &[Effect],
        target_name: &str,
        ctx: &BehaviorContext,
    ) {
        for effect in effects {
            let Some(outcome) = combatants(&res.roster, action)
                .map(|(actor, target)| self.behaviors.run_effect(&effect.name, actor, target, ctx))
            else {
                return;
            };
            let line = outcome.line.clone();
            apply_deltas(&mut res.roster, action, &outcome);
            res.lines
                .push(format!("{} applied to {}!", effect.name, target_name));
            res.lines.extend(line);
        }
    }

    /// Run every hook registered for `timing`.
    ///
    /// All hooks of one timing observe the board as it was before any of
    /// them applied its outcome.
    fn run_hooks(&self, res: &mut Resolution, action: &PendingAction, timing: HookTiming, round: u32) {
        let outcomes: Vec<Outcome> = match combatants(&res.roster, action) {
            Some((actor, target)) => {
                let ctx = HookContext {
                    timing,
                    round,
                    action,
                    actor,
                    target,
                };
                self.behaviors
                    .hooks(timing)
                    .filter_map(|hook| hook(&ctx))
                    .collect()
            }
            None => return,
        };

        for outcome in outcomes {
            apply_outcome(res, action, outcome);
        }
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// The acting and targeted monsters, if both are still on the board.
fn combatants<'r>(roster: &'r Roster, action: &PendingAction) -> Option<(&'r Monster, &'r Monster)> {
    let actor = roster.monster(action.player, action.monster)?;
    let target = roster.monster(action.target.player, action.target.monster)?;
    Some((actor, target))
}

fn apply_deltas(roster: &mut Roster, action: &PendingAction, outcome: &Outcome) {
    if let Some(actor) = roster.monster_mut(action.player, action.monster) {
        outcome.actor.apply_to(&mut actor.stats);
    }
    if let Some(target) = roster.monster_mut(action.target.player, action.target.monster) {
        outcome.target.apply_to(&mut target.stats);
    }
}

fn apply_outcome(res: &mut Resolution, action: &PendingAction, outcome: Outcome) {
    apply_deltas(&mut res.roster, action, &outcome);
    res.lines.extend(outcome.line);
}

fn consume_card(roster: &mut Roster, player: PlayerId, card: CardId) {
    if let Some(card) = roster
        .player_mut(player)
        .and_then(|p| p.hand_card_mut(card))
    {
        card.consume_use();
    }
}

/// Remove `victim` if it dropped to 0 HP, and settle the winner.
///
/// The first board emptied this round hands the win to the acting player.
fn check_defeat(res: &mut Resolution, action: &PendingAction, victim: Target, name: &str) {
    let defeated = res
        .roster
        .monster(victim.player, victim.monster)
        .is_some_and(Monster::is_defeated);
    if !defeated {
        return;
    }

    res.lines.push(format!("{} has been defeated!", name));

    let Some(owner) = res.roster.player_mut(victim.player) else {
        return;
    };
    owner.remove_monster(victim.monster);
    res.report.defeated.push((victim.player, victim.monster));

    if !owner.has_monsters() && res.report.winner.is_none() {
        res.report.winner = Some(action.player);
        res.lines.push(format!("{} wins!", action.player));
    }
}
