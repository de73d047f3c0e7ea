use common::constants::WHEEL_SIZE;
use common::types::candidate::{RestaurantCandidate, WheelOption};
use rand::seq::SliceRandom;

/// Uniformly shuffles the deduplicated candidates and keeps at most
/// [`WHEEL_SIZE`] of them as the current spin targets.
pub fn sample_options(candidates: &[RestaurantCandidate]) -> Vec<WheelOption> {
    let mut pool: Vec<&RestaurantCandidate> = candidates.iter().collect();
    pool.shuffle(&mut rand::thread_rng());
    pool.into_iter()
        .take(WHEEL_SIZE)
        .map(WheelOption::from)
        .collect()
}

/// Uniform winner among the current options.
pub fn pick_winner(options: &[WheelOption]) -> Option<&WheelOption> {
    options.choose(&mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn candidates(n: usize) -> Vec<RestaurantCandidate> {
        (0..n)
            .map(|i| RestaurantCandidate {
                name: format!("restaurant-{}", i),
                distance_miles: 0.5,
                price_tier: "$$".to_string(),
                lat: 0.0,
                lng: 0.0,
                place_id: format!("id-{}", i),
                maps_link: format!("https://www.google.com/maps/place/?q=place_id:id-{}", i),
            })
            .collect()
    }

    #[test]
    #[ntest::timeout(1000)]
    fn sample_caps_at_wheel_size() {
        let pool = candidates(20);
        let options = sample_options(&pool);
        assert_eq!(options.len(), WHEEL_SIZE);
    }

    #[test]
    fn sample_draws_only_from_candidates_without_duplicates() {
        let pool = candidates(20);
        let valid: HashSet<&str> = pool.iter().map(|c| c.name.as_str()).collect();
        let options = sample_options(&pool);

        let mut seen = HashSet::new();
        for option in &options {
            assert!(valid.contains(option.name.as_str()));
            assert!(seen.insert(option.name.clone()), "duplicate on the wheel");
        }
    }

    #[test]
    fn small_candidate_sets_all_make_the_wheel() {
        let pool = candidates(3);
        let options = sample_options(&pool);
        assert_eq!(options.len(), 3);

        let names: HashSet<String> = options.into_iter().map(|o| o.name).collect();
        for candidate in &pool {
            assert!(names.contains(&candidate.name));
        }
    }

    #[test]
    fn winner_comes_from_the_options() {
        let pool = candidates(5);
        let options = sample_options(&pool);
        let winner = pick_winner(&options).unwrap();
        assert!(options.contains(winner));
    }

    #[test]
    fn empty_wheel_has_no_winner() {
        assert!(pick_winner(&[]).is_none());
    }
}
