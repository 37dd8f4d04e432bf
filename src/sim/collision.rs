//! Collision world and axis-separated movement
//!
//! The tricky part of the prototype: actors move with fractional positions
//! but collide as integer boxes against tile-sized walls. Movement is
//! resolved one axis at a time (x first, then y), which keeps the math to
//! edge clamping and gives diagonal movement its sliding feel.

use glam::{IVec2, Vec2};

use super::bounds::BoundingBox;
use super::grid::TileGrid;

/// Static obstacles for the current room
#[derive(Debug, Clone, Default)]
pub struct CollisionWorld {
    obstacles: Vec<BoundingBox>,
}

impl CollisionWorld {
    /// Build a world with one obstacle per wall tile
    pub fn from_grid(grid: &TileGrid) -> Self {
        let mut world = Self::default();
        world.rebuild(grid);
        world
    }

    /// Replace every obstacle with the walls of `grid`
    pub fn rebuild(&mut self, grid: &TileGrid) {
        let tile = grid.tile_size();
        self.obstacles.clear();
        self.obstacles.extend(grid.walls().map(|(col, row)| {
            BoundingBox::new(col as i32 * tile, row as i32 * tile, tile, tile)
        }));
    }

    pub fn obstacles(&self) -> &[BoundingBox] {
        &self.obstacles
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Obstacles that overlap `bounds`
    pub fn overlapping<'a>(
        &'a self,
        bounds: &'a BoundingBox,
    ) -> impl Iterator<Item = &'a BoundingBox> + 'a {
        self.obstacles.iter().filter(move |o| bounds.intersects(o))
    }

    /// Check whether `bounds` overlaps any obstacle
    pub fn intersects_any(&self, bounds: &BoundingBox) -> bool {
        self.overlapping(bounds).next().is_some()
    }
}

/// Move an actor by `displacement`, resolving wall hits per axis
///
/// The x component is applied and resolved first, then the y component.
/// On a hit, the box edge facing the motion is clamped to the obstacle's
/// near edge and the (now integral) box origin is written back into
/// `position`. A zero component skips its axis entirely.
///
/// Returns the bounding box for the final position.
pub fn move_and_collide(
    position: &mut Vec2,
    size: IVec2,
    displacement: Vec2,
    world: &CollisionWorld,
) -> BoundingBox {
    let mut bounds = BoundingBox::at(*position, size);

    if displacement.x != 0.0 {
        position.x += displacement.x;
        bounds.x = position.x as i32;
        // Re-test against the box as clamped so far
        for obstacle in world.obstacles() {
            if bounds.intersects(obstacle) {
                if displacement.x > 0.0 {
                    bounds.set_right(obstacle.left());
                } else {
                    bounds.set_left(obstacle.right());
                }
                position.x = bounds.x as f32;
            }
        }
    }

    if displacement.y != 0.0 {
        position.y += displacement.y;
        bounds.y = position.y as i32;
        for obstacle in world.obstacles() {
            if bounds.intersects(obstacle) {
                if displacement.y > 0.0 {
                    bounds.set_bottom(obstacle.top());
                } else {
                    bounds.set_top(obstacle.bottom());
                }
                position.y = bounds.y as f32;
            }
        }
    }

    BoundingBox::at(*position, size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    const SIZE: IVec2 = IVec2::new(24, 24);

    fn boxed_room() -> CollisionWorld {
        // 5x5 room of 32px tiles, walls on the border only
        let mut tiles = vec![vec![0; 5]; 5];
        for i in 0..5 {
            tiles[0][i] = 1;
            tiles[4][i] = 1;
            tiles[i][0] = 1;
            tiles[i][4] = 1;
        }
        CollisionWorld::from_grid(&TileGrid::new(32, tiles).unwrap())
    }

    #[test]
    fn test_single_floor_tile_room() {
        let grid = TileGrid::new(10, vec![vec![1, 1, 1], vec![1, 0, 1], vec![1, 1, 1]]).unwrap();
        let world = CollisionWorld::from_grid(&grid);

        let expected: HashSet<BoundingBox> = [
            (0, 0),
            (1, 0),
            (2, 0),
            (0, 1),
            (2, 1),
            (0, 2),
            (1, 2),
            (2, 2),
        ]
        .into_iter()
        .map(|(x, y)| BoundingBox::new(x * 10, y * 10, 10, 10))
        .collect();

        assert_eq!(world.obstacles().len(), 8);
        assert_eq!(world.obstacles().iter().copied().collect::<HashSet<_>>(), expected);
        assert!(!world.intersects_any(&BoundingBox::new(10, 10, 10, 10)));
    }

    #[test]
    fn test_rebuild_is_idempotent_and_replaces() {
        let grid = TileGrid::new(16, vec![vec![1, 0, 1], vec![0, 1, 0]]).unwrap();
        let mut world = CollisionWorld::from_grid(&grid);
        let first: HashSet<_> = world.obstacles().iter().copied().collect();

        world.rebuild(&grid);
        let second: HashSet<_> = world.obstacles().iter().copied().collect();
        assert_eq!(first, second);
        assert_eq!(world.obstacles().len(), 3);

        world.rebuild(&TileGrid::new(16, vec![vec![0, 0]]).unwrap());
        assert!(world.is_empty());
    }

    #[test]
    fn test_empty_world_never_overlaps() {
        let world = CollisionWorld::default();
        let bounds = BoundingBox::new(-100, -100, 1000, 1000);
        assert!(!world.intersects_any(&bounds));
        assert_eq!(world.overlapping(&bounds).count(), 0);

        let mut pos = Vec2::new(5.5, 5.5);
        let bounds = move_and_collide(&mut pos, SIZE, Vec2::new(300.0, -300.0), &world);
        assert_eq!(pos, Vec2::new(305.5, -294.5));
        assert_eq!(bounds, BoundingBox::new(305, -294, 24, 24));
    }

    #[test]
    fn test_overlapping_reports_hit_obstacles() {
        let world = boxed_room();
        let bounds = BoundingBox::new(20, 20, 24, 24);
        let hits: Vec<_> = world.overlapping(&bounds).copied().collect();
        // Touches (0,0), (1,0) and (0,1) wall tiles
        assert_eq!(hits.len(), 3);
        assert!(hits.contains(&BoundingBox::new(0, 0, 32, 32)));
        assert!(hits.contains(&BoundingBox::new(32, 0, 32, 32)));
        assert!(hits.contains(&BoundingBox::new(0, 32, 32, 32)));
    }

    #[test]
    fn test_clamp_right_into_wall() {
        let world = boxed_room();
        // Right wall starts at x = 128
        let mut pos = Vec2::new(100.0, 64.0);
        let bounds = move_and_collide(&mut pos, SIZE, Vec2::new(10.0, 0.0), &world);
        assert_eq!(bounds.right(), 128);
        assert_eq!(pos, Vec2::new(104.0, 64.0));
    }

    #[test]
    fn test_clamp_left_into_wall() {
        let world = boxed_room();
        let mut pos = Vec2::new(35.5, 64.0);
        let bounds = move_and_collide(&mut pos, SIZE, Vec2::new(-6.0, 0.0), &world);
        assert_eq!(bounds.left(), 32);
        assert_eq!(pos.x, 32.0);
    }

    #[test]
    fn test_clamp_vertical() {
        let world = boxed_room();
        let mut pos = Vec2::new(64.0, 100.0);
        let bounds = move_and_collide(&mut pos, SIZE, Vec2::new(0.0, 9.0), &world);
        assert_eq!(bounds.bottom(), 128);

        let mut pos = Vec2::new(64.0, 34.0);
        let bounds = move_and_collide(&mut pos, SIZE, Vec2::new(0.0, -9.0), &world);
        assert_eq!(bounds.top(), 32);
        assert_eq!(pos.y, 32.0);
    }

    #[test]
    fn test_diagonal_slides_along_wall() {
        let world = boxed_room();
        // Pressed against the right wall, moving down-right keeps the y motion
        let mut pos = Vec2::new(104.0, 60.0);
        move_and_collide(&mut pos, SIZE, Vec2::new(5.0, 5.0), &world);
        assert_eq!(pos, Vec2::new(104.0, 65.0));
    }

    #[test]
    fn test_fractional_motion_without_hit_keeps_fraction() {
        let world = boxed_room();
        let mut pos = Vec2::new(64.0, 64.0);
        let bounds = move_and_collide(&mut pos, SIZE, Vec2::new(2.5, 1.25), &world);
        assert_eq!(pos, Vec2::new(66.5, 65.25));
        assert_eq!(bounds, BoundingBox::new(66, 65, 24, 24));
    }

    #[test]
    fn test_zero_displacement_is_noop() {
        let world = boxed_room();
        // Fractional position resting against a wall must not be snapped
        let mut pos = Vec2::new(104.75, 32.5);
        let before = BoundingBox::at(pos, SIZE);
        let bounds = move_and_collide(&mut pos, SIZE, Vec2::ZERO, &world);
        assert_eq!(pos, Vec2::new(104.75, 32.5));
        assert_eq!(bounds, before);
    }

    /// Random 8x8 rooms of 32px tiles with a solid border
    fn room_strategy() -> impl Strategy<Value = Vec<Vec<i32>>> {
        prop::collection::vec(prop::bool::weighted(0.3), 36).prop_map(|interior| {
            let mut tiles = vec![vec![1; 8]; 8];
            for (i, wall) in interior.into_iter().enumerate() {
                tiles[1 + i / 6][1 + i % 6] = i32::from(wall);
            }
            tiles
        })
    }

    proptest! {
        /// A box starting clear of every wall ends clear of every wall
        #[test]
        fn move_never_leaves_overlap(
            tiles in room_strategy(),
            col in 1usize..7,
            row in 1usize..7,
            offset in (0.0f32..8.0, 0.0f32..8.0),
            dx in -31.0f32..31.0,
            dy in -31.0f32..31.0,
        ) {
            // Start fully inside a floor tile
            let mut tiles = tiles;
            tiles[row][col] = 0;
            let world = CollisionWorld::from_grid(&TileGrid::new(32, tiles).unwrap());
            let mut pos = Vec2::new(col as f32 * 32.0 + offset.0, row as f32 * 32.0 + offset.1);
            prop_assert!(!world.intersects_any(&BoundingBox::at(pos, SIZE)));

            let bounds = move_and_collide(&mut pos, SIZE, Vec2::new(dx, dy), &world);

            prop_assert_eq!(bounds, BoundingBox::at(pos, SIZE));
            prop_assert!(!world.intersects_any(&bounds), "overlap at {:?}", bounds);
        }
    }
}
