use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG for ball placement. Without a seed a fresh one is drawn and
/// logged so a layout can be reproduced.
pub fn placement_rng(seed: Option<u64>) -> StdRng {
    let seed = seed.unwrap_or_else(rand::random);
    tracing::info!(seed, "Ball placement seed");
    StdRng::seed_from_u64(seed)
}

/// Grid positions for `count` balls: `x, y ∈ {0, 1}`, `z ∈ {0, -1, .., -4}`.
/// Positions may repeat.
pub fn ball_positions(count: usize, rng: &mut StdRng) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            let x = rng.gen_range(0..=1) as f32;
            let y = rng.gen_range(0..=1) as f32;
            let z = -(rng.gen_range(0..=4) as f32);
            Vec3::new(x, y, z)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_stay_on_grid() {
        let mut rng = StdRng::seed_from_u64(7);
        let positions = ball_positions(500, &mut rng);
        assert_eq!(positions.len(), 500);
        for p in positions {
            assert!(p.x == 0.0 || p.x == 1.0, "x = {}", p.x);
            assert!(p.y == 0.0 || p.y == 1.0, "y = {}", p.y);
            assert!((-4.0..=0.0).contains(&p.z) && p.z.fract() == 0.0, "z = {}", p.z);
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let a = ball_positions(10, &mut StdRng::seed_from_u64(42));
        let b = ball_positions(10, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn whole_grid_is_reachable() {
        let positions = ball_positions(2000, &mut StdRng::seed_from_u64(1));
        assert!(positions.iter().any(|p| p.z == -4.0));
        assert!(positions.iter().any(|p| p.z == 0.0));
        assert!(positions.iter().any(|p| p.x == 1.0 && p.y == 1.0));
    }

    #[test]
    fn zero_balls() {
        assert!(ball_positions(0, &mut placement_rng(Some(3))).is_empty());
    }
}
