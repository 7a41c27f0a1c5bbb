//! Food placement and capture.
//!
//! Food is placed by rejection sampling: draw a uniform integer position on
//! the ground plane and keep it only if it is at least `min_food_distance`
//! away from every other item.

use log::warn;
use rand::Rng;

use super::config::GameConfig;
use super::state::Position;

/// Draw a uniformly random food position in `[-half, half)` on both axes
pub fn random_food_position<R: Rng>(rng: &mut R, config: &GameConfig) -> Position {
    let half = config.half_extent();
    let x = rng.gen_range(-half..config.grid_size - half);
    let z = rng.gen_range(-half..config.grid_size - half);
    Position::new(x, z)
}

/// Check the minimum-separation constraint against existing food items
pub fn is_valid_food_position<'a, I>(candidate: Position, existing: I, min_distance: f64) -> bool
where
    I: IntoIterator<Item = &'a Position>,
{
    existing
        .into_iter()
        .all(|food| candidate.planar_distance(food) >= min_distance)
}

/// Generate the initial food set.
///
/// Each slot is retried until a separated position is found. After
/// `max_food_attempts` failures the next draw is accepted as is, so placement
/// always terminates even when the grid cannot fit the requested spacing.
pub fn generate_foods<R: Rng>(rng: &mut R, config: &GameConfig) -> Vec<Position> {
    let mut foods = Vec::with_capacity(config.food_count);

    while foods.len() < config.food_count {
        let mut attempts = 0;
        let placed = loop {
            let candidate = random_food_position(rng, config);
            if is_valid_food_position(candidate, &foods, config.min_food_distance) {
                break candidate;
            }

            attempts += 1;
            if attempts >= config.max_food_attempts {
                warn!(
                    "food slot {} still unplaced after {} attempts, dropping the separation check",
                    foods.len(),
                    attempts
                );
                break random_food_position(rng, config);
            }
        };
        foods.push(placed);
    }

    foods
}

/// Index of the first food item whose capture box contains `head`
pub fn find_food_hit(head: Position, foods: &[Position], capture_radius: f32) -> Option<usize> {
    foods.iter().position(|food| {
        ((head.x - food.x).abs() as f32) < capture_radius
            && ((head.z - food.z).abs() as f32) < capture_radius
    })
}

/// Make a single attempt to replace the food at `index`.
///
/// The candidate is checked against every other slot. Returns whether the
/// slot was replaced; on failure the slot keeps its old position.
pub fn try_replace_food<R: Rng>(
    rng: &mut R,
    foods: &mut [Position],
    index: usize,
    config: &GameConfig,
) -> bool {
    let candidate = random_food_position(rng, config);
    let others = foods
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, food)| food);

    if !is_valid_food_position(candidate, others, config.min_food_distance) {
        return false;
    }

    foods[index] = candidate;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn assert_separated(foods: &[Position], min_distance: f64) {
        for (i, a) in foods.iter().enumerate() {
            for b in &foods[i + 1..] {
                assert!(
                    a.planar_distance(b) >= min_distance,
                    "{:?} and {:?} are closer than {}",
                    a,
                    b,
                    min_distance
                );
            }
        }
    }

    #[test]
    fn test_random_positions_stay_in_grid() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..1_000 {
            let pos = random_food_position(&mut rng, &config);
            assert!((-100..100).contains(&pos.x));
            assert!((-100..100).contains(&pos.z));
            assert_eq!(pos.y, 0);
        }
    }

    #[test]
    fn test_validity_uses_min_distance() {
        let existing = [Position::new(0, 0)];
        assert!(!is_valid_food_position(Position::new(10, 10), &existing, 20.0));
        assert!(is_valid_food_position(Position::new(20, 0), &existing, 20.0));
        assert!(is_valid_food_position(Position::new(-12, 16), &existing, 20.0));
        assert!(is_valid_food_position(Position::new(5, 5), &Vec::new(), 20.0));
    }

    #[test]
    fn test_generate_foods_is_separated() {
        let config = GameConfig::default();

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let foods = generate_foods(&mut rng, &config);
            assert_eq!(foods.len(), config.food_count);
            assert_separated(&foods, config.min_food_distance);
        }
    }

    #[test]
    fn test_generate_foods_terminates_when_spacing_cannot_fit() {
        let config = GameConfig {
            grid_size: 10,
            food_count: 4,
            min_food_distance: 100.0,
            max_food_attempts: 50,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(3);

        let foods = generate_foods(&mut rng, &config);
        assert_eq!(foods.len(), 4);
    }

    #[test]
    fn test_find_food_hit_capture_box() {
        let foods = [Position::new(10, 10), Position::new(50, 50)];

        assert_eq!(find_food_hit(Position::new(10, 10), &foods, 3.2), Some(0));
        assert_eq!(find_food_hit(Position::new(13, 7), &foods, 3.2), Some(0));
        assert_eq!(find_food_hit(Position::new(14, 10), &foods, 3.2), None);
        assert_eq!(find_food_hit(Position::new(10, 6), &foods, 3.2), None);
        assert_eq!(find_food_hit(Position::new(48, 52), &foods, 3.2), Some(1));
    }

    #[test]
    fn test_find_food_hit_prefers_list_order() {
        let foods = [Position::new(12, 0), Position::new(8, 0)];
        assert_eq!(find_food_hit(Position::new(10, 0), &foods, 3.2), Some(0));
    }

    #[test]
    fn test_replacement_ignores_the_slot_being_replaced() {
        // A single slot has no neighbours, so any draw is accepted
        let config = GameConfig {
            food_count: 1,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(11);
        let mut foods = vec![Position::new(0, 0)];

        assert!(try_replace_food(&mut rng, &mut foods, 0, &config));
        assert!((-100..100).contains(&foods[0].x));
    }

    #[test]
    fn test_replacement_failure_keeps_slot() {
        // Spacing larger than the grid diagonal: every candidate is rejected
        let config = GameConfig {
            grid_size: 20,
            min_food_distance: 1_000.0,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(5);
        let mut foods = vec![Position::new(0, 0), Position::new(5, 5)];

        assert!(!try_replace_food(&mut rng, &mut foods, 0, &config));
        assert_eq!(foods, vec![Position::new(0, 0), Position::new(5, 5)]);
    }
}
