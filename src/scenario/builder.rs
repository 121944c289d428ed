//! Seeded world builder.

use crate::core::{Base, BaseId, GameState, PlayerId, Position};

use super::rng::WorldRng;

/// Builder for synthetic world snapshots.
///
/// Players are numbered `1..=player_count`; the snapshot acts for
/// player 1. Uids are assigned `1..=base_count` in collection order.
#[derive(Clone, Debug)]
pub struct ScenarioBuilder {
    player_count: u32,
    base_count: usize,
    extent: i64,
    max_population: i64,
    neutral_share: f64,
    upgrade_share: f64,
}

impl Default for ScenarioBuilder {
    fn default() -> Self {
        Self {
            player_count: 2,
            base_count: 16,
            extent: 20,
            max_population: 100,
            neutral_share: 0.25,
            upgrade_share: 0.2,
        }
    }
}

impl ScenarioBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player_count(mut self, count: u32) -> Self {
        assert!(count >= 1, "Need at least one player");
        self.player_count = count;
        self
    }

    pub fn base_count(mut self, count: usize) -> Self {
        self.base_count = count;
        self
    }

    /// Half-width of the cube bases are scattered in.
    pub fn extent(mut self, extent: i64) -> Self {
        assert!(extent >= 0, "Extent must be non-negative");
        self.extent = extent;
        self
    }

    /// Upper bound for each base's capacity.
    pub fn max_population(mut self, max: i64) -> Self {
        assert!(max >= 1, "Capacity must be positive");
        self.max_population = max;
        self
    }

    /// Probability that a base is unclaimed.
    pub fn neutral_share(mut self, share: f64) -> Self {
        self.neutral_share = share;
        self
    }

    /// Probability that a base has an upgrade pending.
    pub fn upgrade_share(mut self, share: f64) -> Self {
        self.upgrade_share = share;
        self
    }

    /// Build the snapshot. Same seed, same world.
    pub fn build(&self, seed: u64) -> GameState {
        let mut rng = WorldRng::new(seed);
        let mut state = GameState::new(PlayerId::new(1));

        for index in 0..self.base_count {
            let mut base_rng = rng.fork();
            let uid = BaseId::new(u32::try_from(index + 1).unwrap_or(u32::MAX));
            state.bases.push(self.random_base(&mut base_rng, uid));
        }

        state
    }

    fn random_base(&self, rng: &mut WorldRng, uid: BaseId) -> Base {
        let player = if rng.gen_bool(self.neutral_share) {
            PlayerId::NEUTRAL
        } else {
            let id = rng.gen_inclusive(1..=i64::from(self.player_count));
            PlayerId::new(u32::try_from(id).unwrap_or(1))
        };

        let position = Position::new(
            rng.gen_inclusive(-self.extent..=self.extent),
            rng.gen_inclusive(-self.extent..=self.extent),
            rng.gen_inclusive(-self.extent..=self.extent),
        );

        let max_population = rng.gen_inclusive(1..=self.max_population);
        // Bases may sit above capacity; the reinforce stage drains them.
        let population = rng.gen_inclusive(0..=max_population + max_population / 2);
        let units_until_upgrade = if rng.gen_bool(self.upgrade_share) {
            rng.gen_inclusive(1..=max_population)
        } else {
            0
        };

        Base::new(uid, player, position)
            .with_population(population)
            .with_max_population(max_population)
            .with_units_until_upgrade(units_until_upgrade)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_is_deterministic() {
        let builder = ScenarioBuilder::new().base_count(32).player_count(4);
        assert_eq!(builder.build(42), builder.build(42));
        assert_ne!(builder.build(42), builder.build(43));
    }

    #[test]
    fn test_build_respects_bounds() {
        let builder = ScenarioBuilder::new()
            .base_count(64)
            .player_count(3)
            .extent(5)
            .max_population(30);
        let state = builder.build(7);

        assert_eq!(state.bases.len(), 64);
        assert_eq!(state.player_id(), PlayerId::new(1));
        assert!(state.validate().is_ok());

        for base in &state.bases {
            assert!(base.player.raw() <= 3);
            assert!((1..=30).contains(&base.max_population));
            assert!(base.population >= 0);
            assert!(base.units_until_upgrade >= 0);
            for coord in [base.position.x, base.position.y, base.position.z] {
                assert!((-5..=5).contains(&coord));
            }
        }
    }

    #[test]
    fn test_neutral_share_extremes() {
        let all_neutral = ScenarioBuilder::new().neutral_share(1.0).build(1);
        assert!(all_neutral.bases.iter().all(Base::is_neutral));

        let none_neutral = ScenarioBuilder::new().neutral_share(0.0).build(1);
        assert!(none_neutral.bases.iter().all(|b| !b.is_neutral()));
    }

    #[test]
    #[should_panic(expected = "Need at least one player")]
    fn test_zero_players() {
        let _ = ScenarioBuilder::new().player_count(0);
    }
}
