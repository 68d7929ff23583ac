//! Falling turkeys
//!
//! A turkey is plain data: where it is, how fast it falls and whether it is
//! cooked. The cooked flag and the point value are kept in step by
//! [`Turkey::set_cooked`], so the two can never disagree.

use crate::config::GameConfig;
use rand::Rng;
use sdl2::rect::{Point, Rect};

pub const RAW_POINTS: u32 = 1;
pub const COOKED_POINTS: u32 = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct Turkey {
    pub x: i32,
    pub y: i32,
    pub speed: i32,
    pub size: u32,
    cooked: bool,
    points: u32,
}

impl Turkey {
    pub fn new(x: i32, y: i32, speed: i32, size: u32, cooked: bool) -> Self {
        Turkey {
            x,
            y,
            speed,
            size,
            cooked,
            points: points_for(cooked),
        }
    }

    pub fn is_cooked(&self) -> bool {
        self.cooked
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn set_cooked(&mut self, cooked: bool) {
        self.cooked = cooked;
        self.points = points_for(cooked);
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.size, self.size)
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.size as i32
    }

    pub fn contains(&self, point: Point) -> bool {
        self.bounds().contains_point(point)
    }
}

fn points_for(cooked: bool) -> u32 {
    if cooked { COOKED_POINTS } else { RAW_POINTS }
}

/// Creates a turkey just above the top edge at a random column and speed.
pub fn spawn<R: Rng>(rng: &mut R, config: &GameConfig, cooked: bool) -> Turkey {
    let max_x = (config.screen_width - config.turkey_size) as i32;
    let x = rng.gen_range(0..=max_x);
    let speed = rng.gen_range(config.turkey_speed_min..=config.turkey_speed_max);
    Turkey::new(x, -(config.turkey_size as i32), speed, config.turkey_size, cooked)
}

/// Moves the turkey down one frame.
///
/// Returns true when its bottom edge has reached `floor_y`; the turkey is
/// then pinned so it rests on the edge instead of sinking past it.
pub fn fall(turkey: &mut Turkey, floor_y: i32) -> bool {
    turkey.y += turkey.speed;
    if turkey.bottom() >= floor_y {
        turkey.y = floor_y - turkey.size as i32;
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_points_follow_cooked_flag() {
        let mut turkey = Turkey::new(0, 0, 1, 60, false);
        assert_eq!(turkey.points(), 1);

        turkey.set_cooked(true);
        assert!(turkey.is_cooked());
        assert_eq!(turkey.points(), 2);

        turkey.set_cooked(false);
        assert_eq!(turkey.points(), 1);
    }

    #[test]
    fn test_spawn_stays_in_bounds() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let turkey = spawn(&mut rng, &config, false);
            assert!(turkey.x >= 0);
            assert!(turkey.x + turkey.size as i32 <= config.screen_width as i32);
            assert_eq!(turkey.y, -60);
            assert!((1..=3).contains(&turkey.speed));
        }
    }

    #[test]
    fn test_spawn_inherits_cooked() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(1);

        let turkey = spawn(&mut rng, &config, true);
        assert!(turkey.is_cooked());
        assert_eq!(turkey.points(), 2);
    }

    #[test]
    fn test_fall_reaches_floor_after_200_frames() {
        let mut turkey = Turkey::new(100, -60, 3, 60, false);

        for _ in 0..21 {
            assert!(!fall(&mut turkey, 600));
        }
        assert_eq!(turkey.y, 3);

        let mut frames = 21;
        while !fall(&mut turkey, 600) {
            frames += 1;
        }
        assert_eq!(frames + 1, 200);
        assert_eq!(turkey.bottom(), 600);
    }

    #[test]
    fn test_fall_pins_overshoot_to_floor() {
        let mut turkey = Turkey::new(0, 538, 3, 60, false);
        assert!(fall(&mut turkey, 600));
        assert_eq!(turkey.y, 540);
    }

    #[test]
    fn test_contains_uses_exclusive_far_edge() {
        let turkey = Turkey::new(10, 10, 1, 60, false);
        assert!(turkey.contains(Point::new(10, 10)));
        assert!(turkey.contains(Point::new(69, 69)));
        assert!(!turkey.contains(Point::new(70, 40)));
    }
}
