//! Collision detection
//!
//! Everything is treated as a circle. Extents are the entities' width/size
//! values ("diameters"), so two things touch when their centres are closer
//! than half the sum of their extents. This is the game's approximation, not
//! exact geometry.

use glam::Vec2;

use super::state::{Dragon, FireDragon, HostileKind, Missile, Player};
use crate::consts::*;

/// Circle overlap on extents (strict: touching is not a hit)
#[inline]
pub fn extents_overlap(a: Vec2, a_extent: f32, b: Vec2, b_extent: f32) -> bool {
    a.distance(b) < (a_extent + b_extent) / 2.0
}

/// Player against a hazard centred at `center` with extent `size`
#[inline]
pub fn player_touches(player: &Player, center: Vec2, size: f32) -> bool {
    extents_overlap(player.center(), player.width, center, size)
}

/// A missile reaches a hostile when its nose is within the hostile's full
/// size of the hostile's centre
#[inline]
pub fn missile_reaches(missile: &Missile, hostile_center: Vec2, hostile_size: f32) -> bool {
    missile.pos.distance(hostile_center) < hostile_size
}

/// Which hostile a missile struck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissileHit {
    pub kind: HostileKind,
    /// Index into the hostile's collection
    pub index: usize,
}

/// First hostile a missile strikes. Dragons are tested before fire dragons;
/// within a kind, collection (spawn) order wins.
pub fn missile_target(missile: &Missile, dragons: &[Dragon], fire_dragons: &[FireDragon]) -> Option<MissileHit> {
    if let Some(index) = dragons
        .iter()
        .position(|d| missile_reaches(missile, d.center(), DRAGON_SIZE))
    {
        return Some(MissileHit {
            kind: HostileKind::Dragon,
            index,
        });
    }

    fire_dragons
        .iter()
        .position(|fd| missile_reaches(missile, fd.center(), FIRE_DRAGON_SIZE))
        .map(|index| MissileHit {
            kind: HostileKind::FireDragon,
            index,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Viewport;

    fn dragon_at(id: u32, pos: Vec2) -> Dragon {
        Dragon {
            id,
            pos,
            speed: 0.0,
            amplitude: 0.0,
            frequency: 0.0,
            initial_y: pos.y,
            scale: 1.0,
            rotation: 0.0,
        }
    }

    fn fire_dragon_at(id: u32, pos: Vec2) -> FireDragon {
        FireDragon {
            id,
            pos,
            scale: 1.2,
            rotation: 0.0,
            fire_timer_ms: 0.0,
            fire_interval_ms: 2000.0,
        }
    }

    fn missile_at(pos: Vec2) -> Missile {
        Missile {
            id: 99,
            pos,
            speed: 10.0,
            size: MISSILE_SIZE,
        }
    }

    #[test]
    fn test_extents_overlap_is_strict() {
        let a = Vec2::ZERO;
        assert!(extents_overlap(a, 80.0, Vec2::new(59.9, 0.0), 40.0));
        assert!(!extents_overlap(a, 80.0, Vec2::new(60.0, 0.0), 40.0));
    }

    #[test]
    fn test_player_touch_uses_player_width() {
        let player = Player::new(Viewport::new(800.0, 600.0));
        // player centre is (240, 315)
        assert!(player_touches(&player, Vec2::new(240.0, 315.0 + 47.0), 15.0));
        assert!(!player_touches(&player, Vec2::new(240.0, 315.0 + 48.0), 15.0));
    }

    #[test]
    fn test_missile_prefers_dragon_over_fire_dragon() {
        let spot = Vec2::new(300.0, 200.0);
        let dragons = vec![dragon_at(1, spot)];
        let fire_dragons = vec![fire_dragon_at(2, spot)];
        let missile = missile_at(spot + Vec2::splat(20.0));

        let hit = missile_target(&missile, &dragons, &fire_dragons).unwrap();
        assert_eq!(hit.kind, HostileKind::Dragon);
        assert_eq!(hit.index, 0);
    }

    #[test]
    fn test_missile_first_in_collection_order() {
        let spot = Vec2::new(300.0, 200.0);
        let dragons = vec![dragon_at(1, Vec2::new(900.0, 0.0)), dragon_at(2, spot), dragon_at(3, spot)];
        let missile = missile_at(spot);

        let hit = missile_target(&missile, &dragons, &[]).unwrap();
        assert_eq!(hit.index, 1);
    }

    #[test]
    fn test_missile_falls_through_to_fire_dragon() {
        let dragons = vec![dragon_at(1, Vec2::new(900.0, 0.0))];
        let fire_dragons = vec![fire_dragon_at(2, Vec2::new(300.0, 200.0))];
        let missile = missile_at(Vec2::new(300.0, 200.0));

        let hit = missile_target(&missile, &dragons, &fire_dragons).unwrap();
        assert_eq!(hit.kind, HostileKind::FireDragon);
    }

    #[test]
    fn test_missile_miss() {
        let dragons = vec![dragon_at(1, Vec2::new(300.0, 200.0))];
        let missile = missile_at(Vec2::new(300.0, 300.0));
        assert!(missile_target(&missile, &dragons, &[]).is_none());
    }
}
