//! Card and deck generation.
//!
//! ## Deck recipe
//!
//! 1. Generate `deck_size` cards; the first `taunt_count()` get Taunt.
//! 2. Pick `battlecast_count + rage_count` distinct slots without
//!    replacement: the first picks become Battlecasters, the rest Ragers.
//!    Taunt and an effect may share a card; two effects never do.
//! 3. Shuffle (skipped for preview decks). The back of the deck is the top.

use super::archetype::{Archetype, StatBias};
use super::card::{Card, CardId};
use crate::core::{GameConfig, RandomSource};

/// Roll one stat: `floor(cost * per_cost + U[0, 2))`, at least 1.
fn roll_stat<R: RandomSource>(cost: u32, per_cost: f64, rng: &mut R) -> i32 {
    let raw = (f64::from(cost) * per_cost + rng.gen_unit() * 2.0).floor() as i32;
    raw.max(1)
}

/// Generate a single card.
///
/// Cost is uniform in `1..=max_card_cost`. Taunt cards use the guardian
/// profile (weak but tanky); everything else uses the archetype's bias.
pub fn generate_card<R: RandomSource>(
    id: CardId,
    archetype: Archetype,
    has_taunt: bool,
    config: &GameConfig,
    rng: &mut R,
) -> Card {
    let cost = rng.gen_range_inclusive(1, config.max_card_cost);
    let bias = if has_taunt { StatBias::GUARDIAN } else { archetype.bias() };

    let attack = roll_stat(cost, bias.attack_per_cost, rng);
    let health = roll_stat(cost, bias.health_per_cost, rng);

    if has_taunt {
        let name = format!("{} Guardian", archetype.name());
        Card::new(id, name, cost, attack, health, archetype).with_taunt()
    } else {
        let name = format!("{} Warrior", archetype.name());
        Card::new(id, name, cost, attack, health, archetype)
    }
}

/// Build the unshuffled deck with Taunt and effects assigned.
fn build_deck<R: RandomSource>(archetype: Archetype, config: &GameConfig, rng: &mut R) -> Vec<Card> {
    let taunt_count = config.taunt_count();

    let mut deck: Vec<Card> = (1..=config.deck_size)
        .map(|i| generate_card(CardId::new(i as u32), archetype, i <= taunt_count, config, rng))
        .collect();

    let picks = rng.distinct_indices(deck.len(), config.effect_count());
    let (battlecasters, ragers) = picks.split_at(config.battlecast_count.min(picks.len()));

    for &i in battlecasters {
        deck[i] = deck[i].clone().with_battlecast_bonus(config.battlecast_bonus);
    }
    for &i in ragers {
        deck[i] = deck[i].clone().with_rage_bonus(config.rage_bonus);
    }

    deck
}

/// Generate a shuffled deck. Draw order is back to front.
pub fn generate_deck<R: RandomSource>(archetype: Archetype, config: &GameConfig, rng: &mut R) -> Vec<Card> {
    let mut deck = build_deck(archetype, config, rng);
    rng.shuffle(&mut deck);
    log::debug!("generated {} card {} deck", deck.len(), archetype.key());
    deck
}

/// Generate a deck for browsing. Same recipe as `generate_deck`, unshuffled.
pub fn generate_preview_deck<R: RandomSource>(
    archetype: Archetype,
    config: &GameConfig,
    rng: &mut R,
) -> Vec<Card> {
    build_deck(archetype, config, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;

    /// Scripted source: fixed costs, fixed jitter, identity shuffle.
    struct ScriptedRng {
        costs: Vec<u32>,
        jitter: f64,
        picks: Vec<usize>,
    }

    impl RandomSource for ScriptedRng {
        fn gen_range_inclusive(&mut self, low: u32, _high: u32) -> u32 {
            self.costs.pop().unwrap_or(low)
        }

        fn gen_unit(&mut self) -> f64 {
            self.jitter
        }

        fn distinct_indices(&mut self, _length: usize, amount: usize) -> Vec<usize> {
            self.picks.iter().copied().take(amount).collect()
        }

        fn shuffle<T>(&mut self, _items: &mut [T]) {}
    }

    fn scripted(costs: Vec<u32>, jitter: f64) -> ScriptedRng {
        ScriptedRng {
            costs,
            jitter,
            picks: vec![0, 5, 1, 9],
        }
    }

    #[test]
    fn test_archetype_bias() {
        let config = GameConfig::default();

        // cost 10, no jitter: orc 12/8, minotaur 8/13, human 9/11, undead 10/10
        let expected = [
            (Archetype::Orc, 12, 8),
            (Archetype::Minotaur, 8, 13),
            (Archetype::Human, 9, 11),
            (Archetype::Undead, 10, 10),
        ];

        for (archetype, attack, health) in expected {
            let mut rng = scripted(vec![10], 0.0);
            let card = generate_card(CardId::new(1), archetype, false, &config, &mut rng);
            assert_eq!((card.attack, card.health), (attack, health), "{archetype}");
            assert_eq!(card.name, format!("{} Warrior", archetype.name()));
        }
    }

    #[test]
    fn test_guardian_profile() {
        let config = GameConfig::default();
        let mut rng = scripted(vec![5], 0.0);

        let card = generate_card(CardId::new(1), Archetype::Orc, true, &config, &mut rng);

        assert!(card.has_taunt);
        assert_eq!(card.name, "Orc Guardian");
        assert_eq!(card.attack, 3); // floor(5 * 0.6)
        assert_eq!(card.health, 7); // floor(5 * 1.4)
    }

    #[test]
    fn test_stats_floor_at_one() {
        let config = GameConfig::default();
        let mut rng = scripted(vec![1], 0.0);

        // floor(1 * 0.6) = 0 -> clamped to 1
        let card = generate_card(CardId::new(1), Archetype::Human, true, &config, &mut rng);
        assert_eq!(card.attack, 1);
        assert!(card.health >= 1);
    }

    #[test]
    fn test_jitter_stays_below_two() {
        let config = GameConfig::default();
        let mut rng = scripted(vec![1], 0.999);

        let card = generate_card(CardId::new(1), Archetype::Undead, false, &config, &mut rng);
        assert_eq!((card.attack, card.health), (2, 2));
    }

    #[test]
    fn test_effect_slots_follow_picks() {
        let config = GameConfig::default();
        let mut rng = scripted(vec![], 0.0);

        let deck = generate_preview_deck(Archetype::Minotaur, &config, &mut rng);

        assert_eq!(deck.len(), 15);
        assert!(deck[0].has_battlecast && deck[5].has_battlecast);
        assert!(deck[1].has_rage && deck[9].has_rage);
        // Slot 0 is also within the Taunt prefix.
        assert!(deck[0].has_taunt);
        assert_eq!(deck[0].name, "Minotaur Guardian Battlecaster");
        assert_eq!(deck[9].name, "Minotaur Warrior Rager");
        assert!(deck.iter().take(3).all(|c| c.has_taunt));
        assert!(deck.iter().skip(3).all(|c| !c.has_taunt));
    }

    #[test]
    fn test_ids_are_unique_and_stable() {
        let config = GameConfig::default();
        let mut rng = GameRng::new(11);

        let deck = generate_deck(Archetype::Orc, &config, &mut rng);
        let mut ids: Vec<u32> = deck.iter().map(|c| c.id.raw()).collect();
        ids.sort_unstable();

        assert_eq!(ids, (1..=15).collect::<Vec<_>>());
    }

    #[test]
    fn test_deck_composition() {
        let config = GameConfig::default();

        for seed in 0..25 {
            let mut rng = GameRng::new(seed);
            let deck = generate_deck(Archetype::Human, &config, &mut rng);

            assert_eq!(deck.len(), 15);
            assert_eq!(deck.iter().filter(|c| c.has_taunt).count(), 3);
            assert_eq!(deck.iter().filter(|c| c.has_battlecast).count(), 2);
            assert_eq!(deck.iter().filter(|c| c.has_rage).count(), 2);
            assert!(deck.iter().all(|c| !(c.has_battlecast && c.has_rage)));
        }
    }

    #[test]
    fn test_same_seed_same_deck() {
        let config = GameConfig::default();
        let a = generate_deck(Archetype::Orc, &config, &mut GameRng::new(3));
        let b = generate_deck(Archetype::Orc, &config, &mut GameRng::new(3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_effect_text_uses_configured_bonuses() {
        let mut config = GameConfig::default();
        config.battlecast_bonus = 5;
        config.rage_bonus = 1;
        let mut rng = scripted(vec![], 0.0);

        let deck = generate_preview_deck(Archetype::Orc, &config, &mut rng);

        assert!(deck[0].description.ends_with("Gains +5/+5 when played."));
        assert!(deck[9].description.ends_with("Gains +1 attack when it takes damage."));
    }
}
