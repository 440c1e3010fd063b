//! Round resolution tests.
//!
//! These drive full rounds through the `TurnController` and check
//! ordering, damage, defeat, victory and card use.

use monster_duel::actions::{PendingAction, Target};
use monster_duel::cards::{AttackCard, Card, Effect, SupportCard};
use monster_duel::combat::SkipReason;
use monster_duel::controller::{ResolutionStatus, TurnController, TurnPhase};
use monster_duel::core::{CardId, EngineConfig, MonsterId, Player, PlayerId};
use monster_duel::effects::{BehaviorRegistry, HookTiming, Outcome, StatDelta};
use monster_duel::monsters::{Affinity, Attribute, Monster, Skill, SkillSet, Stat, StatBlock};
use smallvec::smallvec;

const P0: PlayerId = PlayerId(0);
const P1: PlayerId = PlayerId(1);

fn monster(id: u32, name: &str, stats: StatBlock) -> Monster {
    Monster {
        id: MonsterId::new(id),
        name: name.to_string(),
        description: String::new(),
        stats,
        affinity: Affinity::Fire,
        attribute: Attribute::Slash,
        skills: SkillSet {
            active: Skill::new("Basic Strike", ""),
            passive: Skill::new("Endurance", ""),
            reaction: Skill::new("Counter Stance", ""),
        },
    }
}

/// HP 100, no crits.
fn stats(patk: i64, def: i64, agi: i64) -> StatBlock {
    StatBlock::default()
        .with(Stat::Hp, 100)
        .with(Stat::Patk, patk)
        .with(Stat::Def, def)
        .with(Stat::Agi, agi)
        .with(Stat::Skill, -1)
}

fn attack_card(id: u32, name: &str, attack_type: impl Into<monster_duel::cards::AttackType>, base_power: i64, uses: u32) -> Card {
    Card::Attack(AttackCard {
        id: CardId::new(id),
        name: name.to_string(),
        description: String::new(),
        attack_type: attack_type.into(),
        base_power,
        effects: smallvec![],
        uses,
    })
}

fn target(player: PlayerId, monster: u32) -> Target {
    Target::new(player, MonsterId::new(monster))
}

fn game(players: Vec<Player>) -> TurnController {
    let mut game = TurnController::new(EngineConfig::default());
    game.initialize_game(players);
    game
}

/// Test that equal agility keeps registration order ahead of a slower monster.
#[test]
fn test_stable_agility_order() {
    let mut game = game(vec![
        Player::new(P0)
            .with_monster(monster(1, "Fast", stats(10, 0, 40)))
            .with_monster(monster(2, "Slow", stats(10, 0, 20))),
        Player::new(P1).with_monster(monster(3, "Also Fast", stats(10, 0, 40))),
    ]);

    game.register_action(PendingAction::skill(P0, MonsterId::new(1), target(P1, 3)));
    game.register_action(PendingAction::skill(P0, MonsterId::new(2), target(P1, 3)));
    let report = game
        .register_action(PendingAction::skill(P1, MonsterId::new(3), target(P0, 1)))
        .unwrap();

    let order: Vec<u32> = report.order.iter().map(|a| a.monster.raw()).collect();
    assert_eq!(order, vec![1, 3, 2]);
}

/// Test that re-registering moves an action to the end of the tie-break order.
#[test]
fn test_reregistration_changes_tie_break() {
    let mut game = game(vec![
        Player::new(P0)
            .with_monster(monster(1, "A", stats(10, 0, 40)))
            .with_monster(monster(2, "B", stats(10, 0, 40))),
        Player::new(P1).with_monster(monster(3, "C", stats(10, 0, 5))),
    ]);

    game.register_action(PendingAction::skill(P0, MonsterId::new(1), target(P1, 3)));
    game.register_action(PendingAction::skill(P0, MonsterId::new(2), target(P1, 3)));
    game.register_action(PendingAction::skill(P0, MonsterId::new(1), target(P1, 3)));
    assert_eq!(game.pending().len(), 2);

    let report = game
        .register_action(PendingAction::skill(P1, MonsterId::new(3), target(P0, 1)))
        .unwrap();

    let order: Vec<u32> = report.order.iter().map(|a| a.monster.raw()).collect();
    assert_eq!(order, vec![2, 1, 3]);
}

/// Test that PATK 30 with a 70-power card into DEF 25 clamps to zero damage.
#[test]
fn test_zero_damage_scenario() {
    let mut game = game(vec![
        Player::new(P0)
            .with_monster(monster(1, "Rookie Warrior", stats(30, 25, 40)))
            .with_hand([attack_card(10, "Quick Strike", Attribute::Slash, 70, 4)]),
        Player::new(P1).with_monster(monster(2, "Training Dummy", stats(30, 25, 20))),
    ]);

    game.register_action(PendingAction::play(P0, MonsterId::new(1), CardId::new(10), target(P1, 2)));
    let report = game
        .register_action(PendingAction::skill(P1, MonsterId::new(2), target(P0, 1)))
        .unwrap();

    let defender = game.players().monster(P1, MonsterId::new(2)).unwrap();
    assert_eq!(defender.stats.hp, 100);
    assert!(game
        .log()
        .contains("Rookie Warrior deals 0 damage to Training Dummy!"));
    assert!(report.defeated.is_empty());
    assert_eq!(report.winner, None);
}

/// Test magical damage when the card element matches the attacker.
#[test]
fn test_magical_attack() {
    let attacker_stats = stats(0, 0, 40).with(Stat::Matk, 100);
    let defender_stats = stats(0, 999, 20).with(Stat::Res, 10);
    let mut game = game(vec![
        Player::new(P0)
            .with_monster(monster(1, "Caster", attacker_stats))
            .with_hand([attack_card(10, "Flame Slash", Affinity::Fire, 90, 3)]),
        Player::new(P1).with_monster(monster(2, "Wall", defender_stats)),
    ]);

    game.register_action(PendingAction::play(P0, MonsterId::new(1), CardId::new(10), target(P1, 2)));
    game.register_action(PendingAction::skill(P1, MonsterId::new(2), target(P0, 1)));

    // 100 * 0.9 - 10 * 1.5 = 75
    assert_eq!(game.players().monster(P1, MonsterId::new(2)).unwrap().stats.hp, 25);
    assert!(game.log().contains("Caster deals 75 damage to Wall!"));
}

/// Test that a guaranteed crit multiplies damage and logs the critical line.
#[test]
fn test_critical_hit() {
    let attacker_stats = stats(40, 0, 40).with(Stat::Skill, 100);
    let mut game = game(vec![
        Player::new(P0)
            .with_monster(monster(1, "Duelist", attacker_stats))
            .with_hand([attack_card(10, "Quick Strike", Attribute::Slash, 100, 4)]),
        Player::new(P1).with_monster(monster(2, "Target", stats(0, 0, 20))),
    ]);

    game.register_action(PendingAction::play(P0, MonsterId::new(1), CardId::new(10), target(P1, 2)));
    game.register_action(PendingAction::skill(P1, MonsterId::new(2), target(P0, 1)));

    assert!(game.log().contains("CRITICAL HIT! Duelist deals 60 damage to Target!"));
    assert_eq!(game.players().monster(P1, MonsterId::new(2)).unwrap().stats.hp, 40);
}

/// Test that a one-use card ends at zero uses and is then refused.
#[test]
fn test_last_use_never_underflows() {
    let mut game = game(vec![
        Player::new(P0)
            .with_monster(monster(1, "A", stats(30, 0, 40)))
            .with_hand([attack_card(10, "Feint", Attribute::Pierce, 0, 1)]),
        Player::new(P1).with_monster(monster(2, "B", stats(30, 0, 20))),
    ]);

    game.register_action(PendingAction::play(P0, MonsterId::new(1), CardId::new(10), target(P1, 2)));
    game.register_action(PendingAction::skill(P1, MonsterId::new(2), target(P0, 1)));

    // Empty deck: the spent card stays in hand.
    let card = game.player(P0).unwrap().hand_card(CardId::new(10)).unwrap();
    assert_eq!(card.uses(), 0);

    assert_eq!(
        game.try_register_action(PendingAction::play(P0, MonsterId::new(1), CardId::new(10), target(P1, 2))),
        Err(monster_duel::EngineError::CardExhausted(CardId::new(10)))
    );

    // The lenient path accepts it and the resolver skips it.
    game.register_action(PendingAction::play(P0, MonsterId::new(1), CardId::new(10), target(P1, 2)));
    let report = game
        .register_action(PendingAction::skill(P1, MonsterId::new(2), target(P0, 1)))
        .unwrap();

    assert_eq!(report.skipped[0].reason, SkipReason::CardExhausted(CardId::new(10)));
    assert_eq!(game.player(P0).unwrap().hand_card(CardId::new(10)).unwrap().uses(), 0);
}

/// Test that emptying a board ends the game.
#[test]
fn test_victory_ends_game() {
    let mut game = game(vec![
        Player::new(P0)
            .with_monster(monster(1, "Champion", stats(200, 0, 40)))
            .with_hand([attack_card(10, "Quick Strike", Attribute::Slash, 100, 4)]),
        Player::new(P1).with_monster(monster(2, "Slime", stats(0, 0, 20))),
    ]);

    game.register_action(PendingAction::play(P0, MonsterId::new(1), CardId::new(10), target(P1, 2)));
    let report = game
        .register_action(PendingAction::skill(P1, MonsterId::new(2), target(P0, 1)))
        .unwrap();

    assert_eq!(report.winner, Some(P0));
    assert_eq!(report.defeated, vec![(P1, MonsterId::new(2))]);
    assert_eq!(game.winner(), Some(P0));
    assert_eq!(game.phase(), TurnPhase::GameOver);
    assert_eq!(game.round(), 1);

    let tail: Vec<&str> = game.log().iter().rev().take(3).collect();
    assert_eq!(
        tail,
        vec![
            "Error: Couldn't find attacker or defender",
            "Player 0 wins!",
            "Slime has been defeated!",
        ]
    );

    let before = game.log().len();
    assert!(game
        .register_action(PendingAction::skill(P0, MonsterId::new(1), target(P1, 2)))
        .is_none());
    assert_eq!(game.trigger_resolution(), ResolutionStatus::Ignored);
    assert!(game.run_decision_policy().is_none());
    assert_eq!(game.log().len(), before);
    assert_eq!(game.round(), 1);
}

/// Test that support cards apply every effect to a friendly target.
#[test]
fn test_support_card_on_ally() {
    let grit = SupportCard::new(
        CardId::new(20),
        "Grit",
        "",
        [Effect::new("Resolve", "", 1), Effect::new("Attack Up I", "", 3)],
        1,
    );
    let mut behaviors = BehaviorRegistry::new();
    behaviors.register_effect("Resolve", BehaviorRegistry::stat_shift(Stat::Hp, 10));
    behaviors.register_effect("Attack Up I", BehaviorRegistry::stat_shift(Stat::Patk, 5));

    let mut game = TurnController::new(EngineConfig::default()).with_behaviors(behaviors);
    game.initialize_game([
        Player::new(P0)
            .with_monster(monster(1, "Medic", stats(10, 0, 40)))
            .with_monster(monster(2, "Tank", stats(10, 0, 30)))
            .with_hand([Card::from(grit)]),
        Player::new(P1).with_monster(monster(3, "Foe", stats(10, 0, 20))),
    ]);

    game.register_action(PendingAction::play(P0, MonsterId::new(1), CardId::new(20), target(P0, 2)));
    game.register_action(PendingAction::skill(P0, MonsterId::new(2), target(P1, 3)));
    game.register_action(PendingAction::skill(P1, MonsterId::new(3), target(P0, 1)));

    let tank = game.players().monster(P0, MonsterId::new(2)).unwrap();
    assert_eq!(tank.stats.hp, 110);
    assert_eq!(tank.stats.patk, 15);
    assert!(game.log().contains("Resolve applied to Tank!"));
    assert!(game.log().contains("Attack Up I applied to Tank!"));
}

/// Test that hooks see every action.
#[test]
fn test_hooks_extend_resolution() {
    let mut behaviors = BehaviorRegistry::new();
    behaviors.register_hook(HookTiming::AfterAction, |ctx| {
        (ctx.target.skills.reaction.name == "Counter Stance").then(|| {
            Outcome::on_actor(StatDelta::single(Stat::Hp, -1))
                .with_line(format!("{} counters!", ctx.target.name))
        })
    });

    let mut game = TurnController::new(EngineConfig::default()).with_behaviors(behaviors);
    game.initialize_game([
        Player::new(P0).with_monster(monster(1, "A", stats(10, 0, 40))),
        Player::new(P1).with_monster(monster(2, "B", stats(10, 0, 20))),
    ]);

    game.register_action(PendingAction::skill(P0, MonsterId::new(1), target(P1, 2)));
    game.register_action(PendingAction::skill(P1, MonsterId::new(2), target(P0, 1)));

    assert!(game.log().contains("B counters!"));
    assert!(game.log().contains("A counters!"));
    assert_eq!(game.players().monster(P0, MonsterId::new(1)).unwrap().stats.hp, 99);
    assert_eq!(game.players().monster(P1, MonsterId::new(2)).unwrap().stats.hp, 99);
}

/// Test that actions aimed at a monster defeated earlier in the round are skipped.
#[test]
fn test_target_removed_mid_round() {
    let mut game = game(vec![
        Player::new(P0)
            .with_monster(monster(1, "Striker", stats(500, 0, 40)))
            .with_monster(monster(2, "Follow-up", stats(10, 0, 30)))
            .with_hand([attack_card(10, "Quick Strike", Attribute::Slash, 100, 4)]),
        Player::new(P1)
            .with_monster(monster(3, "Victim", stats(0, 0, 10)))
            .with_monster(monster(4, "Survivor", stats(0, 0, 5))),
    ]);

    game.register_action(PendingAction::play(P0, MonsterId::new(1), CardId::new(10), target(P1, 3)));
    game.register_action(PendingAction::skill(P0, MonsterId::new(2), target(P1, 3)));
    game.register_action(PendingAction::skill(P1, MonsterId::new(3), target(P0, 1)));
    let report = game
        .register_action(PendingAction::skill(P1, MonsterId::new(4), target(P0, 2)))
        .unwrap();

    assert_eq!(report.defeated, vec![(P1, MonsterId::new(3))]);
    assert_eq!(report.skipped.len(), 2);
    assert!(report
        .skipped
        .iter()
        .all(|s| s.reason == SkipReason::MissingCombatant));
    assert_eq!(report.winner, None);
    assert_eq!(game.round(), 2);
    assert!(game.players().monster(P1, MonsterId::new(3)).is_none());
}
