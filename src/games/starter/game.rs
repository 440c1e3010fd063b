//! Two-player starter game setup.

use super::content::{starter_behaviors, starter_templates, ROOKIE_WARRIOR, STARTER_CARDS};
use crate::cards::TemplateRegistry;
use crate::controller::TurnController;
use crate::core::{EngineConfig, IdAllocator, Player, PlayerId};
use crate::error::EngineError;

/// Builder for a human-vs-scripted-opponent game on starter content.
#[derive(Clone, Debug)]
pub struct StarterGameBuilder {
    monsters_per_player: usize,
    hand: Vec<String>,
    deck_copies: usize,
    config: EngineConfig,
}

impl Default for StarterGameBuilder {
    fn default() -> Self {
        Self {
            monsters_per_player: 1,
            hand: STARTER_CARDS.iter().map(|name| name.to_string()).collect(),
            deck_copies: 1,
            config: EngineConfig::default(),
        }
    }
}

impl StarterGameBuilder {
    /// One monster per player, the four starter cards in hand and one
    /// copy of each in the deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rookie Warriors placed on each board.
    ///
    /// Panics if `count` is zero.
    pub fn monsters_per_player(mut self, count: usize) -> Self {
        assert!(count >= 1, "Each player needs at least one monster");
        self.monsters_per_player = count;
        self
    }

    /// Card template names dealt to each player's hand, in order.
    pub fn hand<S: Into<String>>(mut self, cards: impl IntoIterator<Item = S>) -> Self {
        self.hand = cards.into_iter().map(Into::into).collect();
        self
    }

    /// Copies of every starter card placed in each player's deck.
    pub fn deck_copies(mut self, copies: usize) -> Self {
        self.deck_copies = copies;
        self
    }

    /// Engine configuration for the built controller.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Instantiate both players from `templates`.
    ///
    /// Player 0 is the human, player 1 the scripted opponent.
    pub fn build_players(
        &self,
        templates: &TemplateRegistry,
        ids: &mut IdAllocator,
    ) -> Result<Vec<Player>, EngineError> {
        (0..2u8)
            .map(|seat| {
                let mut player = Player::new(PlayerId::new(seat)).policy_controlled(seat == 1);

                for _ in 0..self.monsters_per_player {
                    player = player.with_monster(templates.monster(ROOKIE_WARRIOR, ids)?);
                }

                let hand = self
                    .hand
                    .iter()
                    .map(|name| templates.card(name, ids))
                    .collect::<Result<Vec<_>, _>>()?;

                let mut deck = Vec::with_capacity(self.deck_copies * STARTER_CARDS.len());
                for _ in 0..self.deck_copies {
                    for name in STARTER_CARDS {
                        deck.push(templates.card(name, ids)?);
                    }
                }

                Ok(player.with_hand(hand).with_deck(deck))
            })
            .collect()
    }

    /// Build a started game.
    pub fn build(self) -> Result<TurnController, EngineError> {
        let templates = starter_templates();
        let mut ids = IdAllocator::new();
        let players = self.build_players(&templates, &mut ids)?;

        let mut game = TurnController::new(self.config).with_behaviors(starter_behaviors());
        game.initialize_game(players);
        Ok(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::TurnPhase;

    #[test]
    fn test_default_game() {
        let game = StarterGameBuilder::new().build().unwrap();

        assert_eq!(game.phase(), TurnPhase::CollectingActions);
        assert_eq!(game.players().len(), 2);

        let human = game.player(PlayerId::new(0)).unwrap();
        assert!(!human.policy_controlled);
        assert_eq!(human.monsters.len(), 1);
        assert_eq!(human.hand.len(), 4);
        assert_eq!(human.deck.len(), 4);
        assert_eq!(human.monsters[0].stats.hp, 100);

        assert!(game.player(PlayerId::new(1)).unwrap().policy_controlled);
    }

    #[test]
    fn test_custom_layout() {
        let game = StarterGameBuilder::new()
            .monsters_per_player(3)
            .hand(["Quick Strike", "Quick Strike"])
            .deck_copies(0)
            .build()
            .unwrap();

        let bot = game.player(PlayerId::new(1)).unwrap();
        assert_eq!(bot.monsters.len(), 3);
        assert_eq!(bot.hand.len(), 2);
        assert!(bot.deck.is_empty());
    }

    #[test]
    fn test_unknown_card_name() {
        let err = StarterGameBuilder::new().hand(["Meteor"]).build().unwrap_err();
        assert_eq!(err, EngineError::UnknownTemplate("Meteor".to_string()));
    }

    #[test]
    fn test_ids_are_unique_across_players() {
        let game = StarterGameBuilder::new().monsters_per_player(2).build().unwrap();

        let mut monsters: Vec<_> = game.players().monsters().map(|(_, m)| m.id).collect();
        monsters.sort();
        monsters.dedup();
        assert_eq!(monsters.len(), 4);
    }
}
