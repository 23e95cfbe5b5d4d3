//! Procedural level layout
//!
//! The first level is a fixed tutorial screen. Every later level is a chain
//! of platforms climbing from the spawn point toward a randomly placed goal,
//! with spikes sprinkled on top and a few safe ledges under the goal.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::distance;
use super::geometry::{Circle, Field, Rect, Shape, Triangle};
use crate::tuning::GeneratorTuning;

/// A solid ledge the player can land on from above
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
}

/// A spike standing on top of a platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    pub shape: Triangle,
    /// Index into `Level::platforms` of the platform carrying this spike
    pub platform: usize,
}

/// The level exit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub shape: Circle,
}

impl Goal {
    /// Top-left of the goal's bounding box (where it was placed)
    pub fn origin(&self) -> Vec2 {
        self.shape.bounding_box().pos
    }

    pub fn as_shape(&self) -> Shape {
        Shape::Circle(self.shape)
    }
}

/// Everything the player interacts with on one screen
///
/// Platform order matters: landing checks take the first match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub index: u32,
    pub spawn: Vec2,
    pub platforms: Vec<Platform>,
    pub hazards: Vec<Hazard>,
    pub goal: Goal,
}

/// Spawn point of the first level: horizontally centered, resting on the floor
pub fn first_spawn(field: &Field, player_size: Vec2) -> Vec2 {
    Vec2::new(field.center_x(), field.bottom() - player_size.y)
}

/// Build a fresh level
///
/// `spawn` is ignored for level 0, which always uses [`first_spawn`]; later
/// levels reuse it unchanged. The field must have positive size.
pub fn generate<R: Rng + ?Sized>(
    index: u32,
    spawn: Vec2,
    field: &Field,
    player_size: Vec2,
    tuning: &GeneratorTuning,
    rng: &mut R,
) -> Level {
    let level = if index == 0 {
        first_level(field, player_size, tuning)
    } else {
        random_level(index, spawn, field, tuning, rng)
    };

    log::info!(
        "Level {}: {} platforms, {} spikes, goal at ({:.0}, {:.0})",
        level.index,
        level.platforms.len(),
        level.hazards.len(),
        level.goal.origin().x,
        level.goal.origin().y
    );

    level
}

fn first_level(field: &Field, player_size: Vec2, tuning: &GeneratorTuning) -> Level {
    let spawn = first_spawn(field, player_size);

    let goal_origin = Vec2::new(
        field.center_x() - tuning.first_goal_offset.x,
        field.bottom() - tuning.first_goal_offset.y,
    );

    let base = Rect::from_pos_size(
        Vec2::new(
            spawn.x - tuning.first_platform_inset,
            spawn.y + tuning.first_platform_drop,
        ),
        tuning.first_platform_size,
    );

    Level {
        index: 0,
        spawn,
        platforms: vec![Platform { rect: base }],
        hazards: Vec::new(),
        goal: Goal {
            shape: Circle::inscribed(goal_origin, tuning.goal_size),
        },
    }
}

fn random_level<R: Rng + ?Sized>(
    index: u32,
    spawn: Vec2,
    field: &Field,
    tuning: &GeneratorTuning,
    rng: &mut R,
) -> Level {
    let goal_origin = place_goal(spawn, field, tuning, rng);
    let size = tuning.platform_size;

    let mut platforms = Vec::with_capacity(
        (tuning.chain_platforms + tuning.safe_platforms_max) as usize,
    );
    let mut hazards = Vec::new();

    // Chain: evenly stepped from the spawn height toward the goal height
    let count = tuning.chain_platforms.max(1);
    let step_y = (spawn.y - goal_origin.y) / count as f32;
    for i in 0..count {
        let y = spawn.y - i as f32 * step_y;
        let x = place_chain_x(spawn, y, field, tuning, rng);
        platforms.push(Platform {
            rect: Rect::from_pos_size(Vec2::new(x, y), size),
        });

        if rng.random_range(0..100) < tuning.hazard_percent {
            let offset = sample_i32(rng, tuning.hazard_offset_min, tuning.hazard_offset_max);
            hazards.push(Hazard {
                shape: Triangle::spike(
                    Vec2::new(x + offset as f32, y),
                    tuning.hazard_base,
                    tuning.hazard_height,
                ),
                platform: platforms.len() - 1,
            });
        }
    }

    // Safe ledges under the goal
    let safe_max = tuning.safe_platforms_max.max(tuning.safe_platforms_min);
    let safe = rng.random_range(tuning.safe_platforms_min..=safe_max);
    for _ in 0..safe {
        let jitter = sample_i32(rng, -tuning.safe_jitter_x, tuning.safe_jitter_x);
        let drop = sample_i32(rng, tuning.safe_drop_min, tuning.safe_drop_max);
        let x = (goal_origin.x + jitter as f32)
            .min(field.width - size.x)
            .max(0.0);
        let y = (goal_origin.y + drop as f32)
            .min(field.height - size.y)
            .max(0.0);
        platforms.push(Platform {
            rect: Rect::from_pos_size(Vec2::new(x, y), size),
        });
    }

    log::debug!(
        "Level {}: chain step {:.1}, {} safe ledges",
        index,
        step_y,
        safe
    );

    Level {
        index,
        spawn,
        platforms,
        hazards,
        goal: Goal {
            shape: Circle::inscribed(goal_origin, tuning.goal_size),
        },
    }
}

/// Rejection-sample a goal in the upper half of the field, far enough from
/// spawn. Falls back to the farthest candidate seen.
fn place_goal<R: Rng + ?Sized>(
    spawn: Vec2,
    field: &Field,
    tuning: &GeneratorTuning,
    rng: &mut R,
) -> Vec2 {
    let mut best = Vec2::ZERO;
    let mut best_dist = f32::NEG_INFINITY;

    for _ in 0..tuning.max_attempts.max(1) {
        let candidate = Vec2::new(
            sample_f32(rng, 0.0, field.width),
            sample_f32(rng, 0.0, field.height / 2.0),
        );
        let d = distance(spawn, candidate);
        if d >= tuning.goal_min_distance {
            return candidate;
        }
        if d > best_dist {
            best = candidate;
            best_dist = d;
        }
    }

    log::warn!(
        "Goal placement gave up after {} attempts, using best distance {:.1}",
        tuning.max_attempts,
        best_dist
    );
    best
}

/// Rejection-sample a chain platform's x. A spot is only rejected when it
/// crowds the spawn point on both axes at once. Falls back to the candidate
/// farthest from spawn horizontally.
fn place_chain_x<R: Rng + ?Sized>(
    spawn: Vec2,
    y: f32,
    field: &Field,
    tuning: &GeneratorTuning,
    rng: &mut R,
) -> f32 {
    let near_y = (y - spawn.y).abs() < tuning.spawn_clear_y;
    let mut best = 0.0;
    let mut best_dx = f32::NEG_INFINITY;

    for _ in 0..tuning.max_attempts.max(1) {
        let x = sample_f32(rng, 0.0, field.width - tuning.platform_size.x);
        let dx = (x - spawn.x).abs();
        if !(dx < tuning.spawn_clear_x && near_y) {
            return x;
        }
        if dx > best_dx {
            best = x;
            best_dx = dx;
        }
    }

    log::warn!(
        "Platform placement at y={:.0} gave up after {} attempts",
        y,
        tuning.max_attempts
    );
    best
}

/// Uniform sample in `[lo, hi)`; an empty range collapses to `lo`
fn sample_f32<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi > lo { rng.random_range(lo..hi) } else { lo }
}

/// Uniform sample in `[lo, hi)`; an empty range collapses to `lo`
fn sample_i32<R: Rng + ?Sized>(rng: &mut R, lo: i32, hi: i32) -> i32 {
    if hi > lo { rng.random_range(lo..hi) } else { lo }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const PLAYER: Vec2 = Vec2::new(20.0, 20.0);

    fn field() -> Field {
        Field::new(1000.0, 500.0)
    }

    fn later_level(seed: u64, index: u32) -> Level {
        let field = field();
        let spawn = first_spawn(&field, PLAYER);
        let mut rng = Pcg32::seed_from_u64(seed);
        generate(index, spawn, &field, PLAYER, &GeneratorTuning::default(), &mut rng)
    }

    #[test]
    fn test_first_level_layout() {
        let mut rng = Pcg32::seed_from_u64(1);
        let tuning = GeneratorTuning::default();
        let level = generate(0, Vec2::ZERO, &field(), PLAYER, &tuning, &mut rng);

        assert_eq!(level.spawn, Vec2::new(500.0, 480.0));
        assert_eq!(level.goal.shape.bounding_box(), Rect::new(400.0, 450.0, 30.0, 30.0));
        assert_eq!(level.platforms.len(), 1);
        assert_eq!(level.platforms[0].rect, Rect::new(460.0, 500.0, 100.0, 10.0));
        assert!(level.hazards.is_empty());
    }

    #[test]
    fn test_later_level_counts() {
        for seed in 0..20 {
            let level = later_level(seed, 1);
            let safe = level.platforms.len() - 14;
            assert!((2..=3).contains(&safe), "seed {seed}: {safe} safe ledges");
            assert!(level.hazards.len() <= 14);
            for p in &level.platforms {
                assert_eq!(p.rect.size, Vec2::new(80.0, 10.0));
            }
        }
    }

    #[test]
    fn test_spawn_is_reused() {
        let field = field();
        let spawn = Vec2::new(123.0, 456.0);
        let mut rng = Pcg32::seed_from_u64(5);
        let level = generate(3, spawn, &field, PLAYER, &GeneratorTuning::default(), &mut rng);
        assert_eq!(level.spawn, spawn);
        assert_eq!(level.index, 3);
    }

    #[test]
    fn test_chain_steps_toward_goal() {
        let level = later_level(42, 2);
        let goal = level.goal.origin();
        let step = (level.spawn.y - goal.y) / 14.0;
        for (i, p) in level.platforms.iter().take(14).enumerate() {
            let expected = level.spawn.y - i as f32 * step;
            assert!((p.rect.top() - expected).abs() < 0.001);
        }
    }

    #[test]
    fn test_hazards_sit_on_their_platform() {
        for seed in 0..20 {
            let level = later_level(seed, 1);
            for hazard in &level.hazards {
                let platform = level.platforms[hazard.platform].rect;
                let [apex, left, right] = hazard.shape.points;
                assert_eq!(left.y, platform.top());
                assert_eq!(right.y, platform.top());
                assert!((right.x - left.x - 20.0).abs() < 0.001);
                assert!((platform.top() - apex.y - 10.0).abs() < 0.001);
                let offset = left.x - platform.left();
                assert!((10.0..70.0).contains(&offset), "offset {offset}");
            }
        }
    }

    #[test]
    fn test_safe_ledges_near_goal() {
        for seed in 0..20 {
            let level = later_level(seed, 1);
            let goal = level.goal.origin();
            for p in level.platforms.iter().skip(14) {
                assert!(p.rect.left() >= 0.0 && p.rect.right() <= 1000.0);
                assert!(p.rect.top() >= 0.0 && p.rect.bottom() <= 500.0);
                let dx = p.rect.left() - goal.x;
                let clamped = p.rect.left() == 0.0 || p.rect.left() == 920.0;
                assert!(clamped || (-60.0..60.0).contains(&dx));
                assert!(p.rect.top() >= goal.y + 40.0 || p.rect.top() == 490.0);
            }
        }
    }

    #[test]
    fn test_same_seed_same_level() {
        assert_eq!(later_level(77, 4), later_level(77, 4));
    }

    #[test]
    fn test_tiny_field_terminates() {
        // No spot is 150 away from spawn, so the sampler must fall back
        let field = Field::new(120.0, 60.0);
        let spawn = first_spawn(&field, PLAYER);
        let mut rng = Pcg32::seed_from_u64(9);
        let level = generate(1, spawn, &field, PLAYER, &GeneratorTuning::default(), &mut rng);
        assert!(distance(spawn, level.goal.origin()) < 150.0);
        assert!(level.platforms.len() >= 16);
    }

    #[test]
    fn test_chain_fallback_keeps_farthest_candidate() {
        // Every x in [0, 40) is within 100 of spawn.x = 60, and row 0 sits at
        // spawn height, so all candidates are rejected
        let field = Field::new(120.0, 60.0);
        let spawn = first_spawn(&field, PLAYER);
        let tuning = GeneratorTuning::default();
        let mut rng = Pcg32::seed_from_u64(9);
        let mut replay = rng.clone();

        let x = place_chain_x(spawn, spawn.y, &field, &tuning, &mut rng);

        let candidates: Vec<f32> = (0..tuning.max_attempts)
            .map(|_| sample_f32(&mut replay, 0.0, field.width - tuning.platform_size.x))
            .collect();
        assert!(candidates.iter().all(|c| (c - spawn.x).abs() < tuning.spawn_clear_x));
        let farthest = candidates.iter().copied().fold(candidates[0], |best, c| {
            if (c - spawn.x).abs() > (best - spawn.x).abs() { c } else { best }
        });
        assert_eq!(x, farthest);
        assert!((0.0..=field.width - tuning.platform_size.x).contains(&x), "x={x}");
        // Both generators consumed the same draws
        assert_eq!(rng.random::<u32>(), replay.random::<u32>());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn goal_is_far_from_spawn(seed in any::<u64>(), index in 1u32..50) {
                let level = later_level(seed, index);
                prop_assert!(distance(level.spawn, level.goal.origin()) >= 150.0);
            }

            #[test]
            fn chain_platforms_clear_spawn(seed in any::<u64>()) {
                let level = later_level(seed, 1);
                for p in level.platforms.iter().take(14) {
                    let dx = (p.rect.left() - level.spawn.x).abs();
                    let dy = (p.rect.top() - level.spawn.y).abs();
                    prop_assert!(dx >= 100.0 || dy >= 80.0, "dx={} dy={}", dx, dy);
                }
            }
        }
    }
}
