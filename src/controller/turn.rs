//! The turn controller.
//!
//! Owns the board, the round state and every random stream. External
//! actors only submit `PendingAction`s; all monster and card mutation
//! happens inside `resolve_round`.

use serde::{Deserialize, Serialize};

use super::timer::PolicyTimer;
use crate::actions::{ActionRegistry, PendingAction};
use crate::combat::{CombatResolver, Resolution, RoundReport};
use crate::core::{
    ActionLog, EngineConfig, GameRng, MonsterId, Player, PlayerId, Roster, RoundState,
};
use crate::effects::BehaviorRegistry;
use crate::error::EngineError;
use crate::policy::{DecisionPolicy, ScriptedOpponent};
use crate::zones::refresh_hands;

/// Where the controller is in the round lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// No game has been started.
    Idle,
    /// Waiting for every monster to have a pending action.
    CollectingActions,
    /// Running the combat resolver.
    Resolving,
    /// Round resolved, hands refreshed, not yet advanced.
    RoundComplete,
    /// A winner exists. Terminal until reset.
    GameOver,
}

/// Result of a manual resolution request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolutionStatus {
    /// The round resolved.
    Resolved(RoundReport),

    /// Some monsters still need an action.
    Waiting { missing: Vec<(PlayerId, MonsterId)> },

    /// Not collecting actions (no game, or the game is over).
    Ignored,
}

/// Result of advancing the clock.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PolicyTick {
    /// Nothing was due.
    NotDue,

    /// A timer fired but the round or game moved on since it was armed.
    Discarded,

    /// The decision policy ran. Holds the report if that completed the round.
    Ran(Option<RoundReport>),
}

/// One random stream per concern.
#[derive(Clone, Debug)]
struct RngStreams {
    combat: GameRng,
    draw: GameRng,
    policy: GameRng,
}

impl RngStreams {
    fn new(seed: u64) -> Self {
        let base = GameRng::new(seed);
        Self {
            combat: base.for_context("combat"),
            draw: base.for_context("draw"),
            policy: base.for_context("policy"),
        }
    }
}

/// Round orchestration: collect, resolve, refresh hands, advance.
///
/// ## Example
///
/// ```
/// use monster_duel::controller::{TurnController, TurnPhase};
/// use monster_duel::core::EngineConfig;
///
/// let mut game = TurnController::new(EngineConfig::default());
/// assert_eq!(game.phase(), TurnPhase::Idle);
///
/// game.reset();
/// assert_eq!(game.phase(), TurnPhase::CollectingActions);
/// assert_eq!(game.round(), 1);
/// assert_eq!(game.log().to_vec(), vec!["Game reset!".to_string()]);
/// ```
pub struct TurnController {
    config: EngineConfig,
    behaviors: BehaviorRegistry,
    policy: Box<dyn DecisionPolicy>,
    roster: Roster,
    state: RoundState,
    phase: TurnPhase,
    rngs: RngStreams,
    timer: PolicyTimer,
    clock_ms: u64,
    last_report: Option<RoundReport>,
}

impl std::fmt::Debug for TurnController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TurnController")
            .field("phase", &self.phase)
            .field("round", &self.state.round)
            .field("winner", &self.state.winner)
            .field("players", &self.roster.len())
            .field("pending", &self.state.pending.len())
            .field("clock_ms", &self.clock_ms)
            .finish_non_exhaustive()
    }
}

impl TurnController {
    /// Create an idle controller with no behaviors registered and the
    /// scripted opponent as decision policy.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let policy = ScriptedOpponent::from_config(&config.policy);
        let rngs = RngStreams::new(config.seed);
        Self {
            config,
            behaviors: BehaviorRegistry::new(),
            policy: Box::new(policy),
            roster: Roster::default(),
            state: RoundState::default(),
            phase: TurnPhase::Idle,
            rngs,
            timer: PolicyTimer::new(),
            clock_ms: 0,
            last_report: None,
        }
    }

    /// Use these skill, effect and hook behaviors (builder pattern).
    #[must_use]
    pub fn with_behaviors(mut self, behaviors: BehaviorRegistry) -> Self {
        self.behaviors = behaviors;
        self
    }

    /// Use a different decision policy (builder pattern).
    #[must_use]
    pub fn with_policy(mut self, policy: impl DecisionPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Start a game with the given players.
    ///
    /// The second player is marked as policy-controlled and every other
    /// player as human. Round state, random streams and the policy timer
    /// all start over.
    pub fn initialize_game(&mut self, players: impl IntoIterator<Item = Player>) {
        self.roster = players
            .into_iter()
            .enumerate()
            .map(|(index, player)| player.policy_controlled(index == 1))
            .collect();
        self.state = RoundState::seeded("Game started!");
        self.phase = TurnPhase::CollectingActions;
        self.rngs = RngStreams::new(self.config.seed);
        self.timer.cancel();
        self.last_report = None;
    }

    /// Register an action for the current round.
    ///
    /// Replaces any earlier action for the same monster and logs the
    /// selection. Ignored unless actions are being collected. Returns the
    /// round report if this registration completed the round and
    /// auto-resolution is on.
    pub fn register_action(&mut self, action: PendingAction) -> Option<RoundReport> {
        if self.phase != TurnPhase::CollectingActions {
            return None;
        }

        self.record(action);

        if self.config.auto_resolve && self.state.pending.is_complete(&self.roster) {
            Some(self.resolve_round())
        } else {
            None
        }
    }

    /// Validate an action, then register it.
    ///
    /// The target is not validated; an unknown target is logged as
    /// "unknown" and the action is skipped when it resolves.
    pub fn try_register_action(
        &mut self,
        action: PendingAction,
    ) -> Result<Option<RoundReport>, EngineError> {
        self.validate(&action)?;
        Ok(self.register_action(action))
    }

    /// Resolve the round now if every monster has an action.
    ///
    /// Safe to call at any time: outside `CollectingActions` it does
    /// nothing, and with actions missing it only logs that it is waiting.
    pub fn trigger_resolution(&mut self) -> ResolutionStatus {
        if self.phase != TurnPhase::CollectingActions {
            return ResolutionStatus::Ignored;
        }

        if !self.state.pending.is_complete(&self.roster) {
            self.state
                .log
                .push("Waiting for all players to select actions...");
            return ResolutionStatus::Waiting {
                missing: self.state.pending.missing(&self.roster),
            };
        }

        ResolutionStatus::Resolved(self.resolve_round())
    }

    /// Let the decision policy pick actions for every policy-controlled
    /// player.
    ///
    /// All choices are registered before completeness is checked, so a
    /// round never resolves halfway through the policy's picks.
    pub fn run_decision_policy(&mut self) -> Option<RoundReport> {
        if self.phase != TurnPhase::CollectingActions {
            return None;
        }

        let controlled: Vec<PlayerId> = self
            .roster
            .iter()
            .filter(|p| p.policy_controlled)
            .map(|p| p.id)
            .collect();

        let mut choices = Vec::new();
        for player in controlled {
            choices.extend(
                self.policy
                    .choose_actions(&self.roster, player, &mut self.rngs.policy),
            );
        }

        for action in choices {
            self.record(action);
        }

        if self.config.auto_resolve && self.state.pending.is_complete(&self.roster) {
            Some(self.resolve_round())
        } else {
            None
        }
    }

    /// Abandon the current game state and go back to round 1.
    ///
    /// Clears pending actions and the winner, replaces the log with a
    /// single reset line and cancels the policy timer. The board is kept
    /// as it is.
    pub fn reset(&mut self) {
        self.state = RoundState::seeded("Game reset!");
        self.phase = TurnPhase::CollectingActions;
        self.timer.cancel();
        self.last_report = None;
    }

    // =========================================================================
    // Policy timer
    // =========================================================================

    /// Arm the policy timer for the current round.
    ///
    /// Returns false (and arms nothing) unless actions are being collected.
    pub fn schedule_policy(&mut self) -> bool {
        if self.phase != TurnPhase::CollectingActions {
            return false;
        }
        self.timer
            .schedule(self.clock_ms, self.config.policy.delay_ms, self.state.round);
        true
    }

    /// Cancel any armed policy invocation.
    pub fn cancel_policy(&mut self) {
        self.timer.cancel();
    }

    /// Advance the logical clock and fire the policy timer if it is due.
    pub fn advance_clock(&mut self, ms: u64) -> PolicyTick {
        self.clock_ms = self.clock_ms.saturating_add(ms);

        let Some(fired) = self.timer.take_due(self.clock_ms) else {
            return PolicyTick::NotDue;
        };

        let current = fired.epoch == self.timer.epoch()
            && fired.round == self.state.round
            && self.phase == TurnPhase::CollectingActions
            && !self.state.is_over();
        if !current {
            return PolicyTick::Discarded;
        }

        PolicyTick::Ran(self.run_decision_policy())
    }

    // =========================================================================
    // Observers
    // =========================================================================

    /// Players with their live monsters, hands and decks.
    #[must_use]
    pub fn players(&self) -> &Roster {
        &self.roster
    }

    /// Find a player by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.roster.player(id)
    }

    /// Current round number.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.state.round
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.state.winner
    }

    #[must_use]
    pub fn log(&self) -> &ActionLog {
        &self.state.log
    }

    /// True only while a round is being resolved.
    #[must_use]
    pub fn is_action_phase(&self) -> bool {
        self.state.resolving
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Actions registered so far this round.
    #[must_use]
    pub fn pending(&self) -> &ActionRegistry {
        &self.state.pending
    }

    #[must_use]
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn behaviors(&self) -> &BehaviorRegistry {
        &self.behaviors
    }

    /// Report of the most recently resolved round.
    #[must_use]
    pub fn last_report(&self) -> Option<&RoundReport> {
        self.last_report.as_ref()
    }

    #[must_use]
    pub fn policy_timer(&self) -> &PolicyTimer {
        &self.timer
    }

    /// Logical clock, in milliseconds.
    #[must_use]
    pub fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn record(&mut self, action: PendingAction) {
        let line = action.describe(&self.roster);
        self.state.pending.register(action);
        self.state.log.push(line);
    }

    fn validate(&self, action: &PendingAction) -> Result<(), EngineError> {
        match self.phase {
            TurnPhase::Idle => return Err(EngineError::NotStarted),
            _ => {
                if let Some(winner) = self.state.winner {
                    return Err(EngineError::GameOver(winner));
                }
            }
        }

        let player = self
            .roster
            .player(action.player)
            .ok_or(EngineError::UnknownPlayer(action.player))?;

        if player.monster(action.monster).is_none() {
            return Err(EngineError::UnknownMonster {
                player: action.player,
                monster: action.monster,
            });
        }

        if let Some(card_id) = action.card {
            let card = player.hand_card(card_id).ok_or(EngineError::CardNotInHand {
                player: action.player,
                card: card_id,
            })?;
            if card.is_exhausted() {
                return Err(EngineError::CardExhausted(card_id));
            }
        }

        Ok(())
    }

    fn resolve_round(&mut self) -> RoundReport {
        self.phase = TurnPhase::Resolving;
        self.state.resolving = true;

        let resolver = CombatResolver::new(&self.config.combat, &self.behaviors);
        let Resolution {
            mut roster,
            lines,
            mut report,
        } = resolver.resolve(
            &self.roster,
            self.state.pending.as_slice(),
            self.state.round,
            self.state.winner,
            &mut self.rngs.combat,
        );
        self.state.log.extend(lines);

        for draw in refresh_hands(&mut roster, &mut self.rngs.draw) {
            self.state.log.push(draw.to_string());
            report.drawn.push((draw.player, draw.drawn));
        }

        self.roster = roster;
        self.state.pending.clear();
        self.state.resolving = false;
        self.phase = TurnPhase::RoundComplete;

        if let Some(winner) = report.winner {
            self.state.declare_winner(winner);
        }

        if self.state.is_over() {
            self.phase = TurnPhase::GameOver;
            self.timer.cancel();
        } else {
            self.state.round += 1;
            self.phase = TurnPhase::CollectingActions;
        }

        self.last_report = Some(report.clone());
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::Target;
    use crate::monsters::{Affinity, Attribute, Monster, Skill, SkillSet, Stat, StatBlock};

    fn monster(id: u32, hp: i64, agi: i64) -> Monster {
        let skill = Skill::new("Basic Strike", "");
        Monster {
            id: MonsterId::new(id),
            name: format!("M{}", id),
            description: String::new(),
            stats: StatBlock::default().with(Stat::Hp, hp).with(Stat::Agi, agi),
            affinity: Affinity::Water,
            attribute: Attribute::Blunt,
            skills: SkillSet {
                active: skill.clone(),
                passive: skill.clone(),
                reaction: skill,
            },
        }
    }

    fn started() -> TurnController {
        let mut game = TurnController::new(EngineConfig::default());
        game.initialize_game([
            Player::new(PlayerId::new(0)).with_monster(monster(1, 100, 40)),
            Player::new(PlayerId::new(1)).with_monster(monster(2, 100, 20)),
        ]);
        game
    }

    fn hit(from: (u8, u32), to: (u8, u32)) -> PendingAction {
        PendingAction::skill(
            PlayerId::new(from.0),
            MonsterId::new(from.1),
            Target::new(PlayerId::new(to.0), MonsterId::new(to.1)),
        )
    }

    #[test]
    fn test_initialize_marks_second_player() {
        let game = started();

        assert_eq!(game.phase(), TurnPhase::CollectingActions);
        assert_eq!(game.round(), 1);
        assert!(!game.player(PlayerId::new(0)).unwrap().policy_controlled);
        assert!(game.player(PlayerId::new(1)).unwrap().policy_controlled);
        assert_eq!(game.log().to_vec(), vec!["Game started!".to_string()]);
    }

    #[test]
    fn test_registration_ignored_before_start() {
        let mut game = TurnController::new(EngineConfig::default());

        assert!(game.register_action(hit((0, 1), (1, 2))).is_none());
        assert!(game.log().is_empty());
        assert_eq!(
            game.try_register_action(hit((0, 1), (1, 2))),
            Err(EngineError::NotStarted)
        );
    }

    #[test]
    fn test_auto_resolves_when_complete() {
        let mut game = started();

        assert!(game.register_action(hit((0, 1), (1, 2))).is_none());
        assert_eq!(game.round(), 1);

        let report = game.register_action(hit((1, 2), (0, 1))).unwrap();
        assert_eq!(report.round, 1);
        assert_eq!(report.order[0].monster, MonsterId::new(1));
        assert_eq!(game.round(), 2);
        assert!(game.pending().is_empty());
        assert!(!game.is_action_phase());
        assert_eq!(game.phase(), TurnPhase::CollectingActions);
    }

    #[test]
    fn test_manual_trigger_waits_then_resolves() {
        let mut game = TurnController::new(EngineConfig::default().with_auto_resolve(false));
        game.initialize_game([
            Player::new(PlayerId::new(0)).with_monster(monster(1, 100, 40)),
            Player::new(PlayerId::new(1)).with_monster(monster(2, 100, 20)),
        ]);

        game.register_action(hit((0, 1), (1, 2)));
        assert_eq!(
            game.trigger_resolution(),
            ResolutionStatus::Waiting {
                missing: vec![(PlayerId::new(1), MonsterId::new(2))]
            }
        );
        assert_eq!(
            game.log().last(),
            Some("Waiting for all players to select actions...")
        );

        assert!(game.register_action(hit((1, 2), (0, 1))).is_none());
        assert!(matches!(game.trigger_resolution(), ResolutionStatus::Resolved(_)));
        assert_eq!(game.round(), 2);
    }

    #[test]
    fn test_validation_errors() {
        let mut game = started();

        assert_eq!(
            game.try_register_action(hit((5, 1), (1, 2))),
            Err(EngineError::UnknownPlayer(PlayerId::new(5)))
        );
        assert_eq!(
            game.try_register_action(hit((0, 9), (1, 2))),
            Err(EngineError::UnknownMonster {
                player: PlayerId::new(0),
                monster: MonsterId::new(9),
            })
        );

        let card = crate::core::CardId::new(77);
        let play = PendingAction::play(
            PlayerId::new(0),
            MonsterId::new(1),
            card,
            Target::new(PlayerId::new(1), MonsterId::new(2)),
        );
        assert_eq!(
            game.try_register_action(play),
            Err(EngineError::CardNotInHand {
                player: PlayerId::new(0),
                card,
            })
        );
        assert!(game.pending().is_empty());
    }

    #[test]
    fn test_stale_timer_is_discarded() {
        let mut game = started();

        assert!(game.schedule_policy());
        game.reset();
        assert!(!game.policy_timer().is_armed());
        assert_eq!(game.advance_clock(10_000), PolicyTick::NotDue);

        assert!(game.schedule_policy());
        assert_eq!(game.advance_clock(799), PolicyTick::NotDue);
        assert!(matches!(game.advance_clock(1), PolicyTick::Ran(_)));
        assert!(game.pending().get(PlayerId::new(1), MonsterId::new(2)).is_some());
    }
}
