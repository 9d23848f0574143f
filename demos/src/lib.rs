//! Shared world model for the navgrid demos.
//!
//! A procedurally tiled terrain stands in for the physics scene, the player
//! walks a loop around the origin, and a hunter re-plans a path toward the
//! player every tick. The grid is streamed around a [`StreamingFocus`] that
//! trails the player.

use navgrid_core::Vec3;
use navgrid_paths::{
    Algorithm, GridConfig, GridTracker, NavError, OnNoPath, Path, PathSlot, Pathfinder,
    StreamingFocus, WalkabilityOracle,
};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

// ---------------------------------------------------------------------------
// Terrain
// ---------------------------------------------------------------------------

/// Value-noise terrain of unit tiles. Tiles below the water line or above
/// the mountain line are not walkable.
#[derive(Clone, Debug)]
pub struct Terrain {
    seed: u64,
    /// World units per noise lattice cell.
    pub scale: f32,
    pub water: f32,
    pub mountain: f32,
}

impl Terrain {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            scale: 6.0,
            water: 0.3,
            mountain: 0.78,
        }
    }

    fn lattice(&self, ix: i32, iz: i32) -> f32 {
        let key = self
            .seed
            .wrapping_mul(0x9E37_79B9_7F4A_7C15)
            .wrapping_add(((ix as u32 as u64) << 32) | (iz as u32 as u64));
        StdRng::seed_from_u64(key).random::<f32>()
    }

    /// Noise height in `[0, 1)` at a world position.
    pub fn height(&self, x: f32, z: f32) -> f32 {
        let (fx, fz) = (x / self.scale, z / self.scale);
        let (x0, z0) = (fx.floor(), fz.floor());
        let smooth = |t: f32| t * t * (3.0 - 2.0 * t);
        let (tx, tz) = (smooth(fx - x0), smooth(fz - z0));
        let (ix, iz) = (x0 as i32, z0 as i32);
        let a = self.lattice(ix, iz);
        let b = self.lattice(ix + 1, iz);
        let c = self.lattice(ix, iz + 1);
        let d = self.lattice(ix + 1, iz + 1);
        let top = a + (b - a) * tx;
        let bottom = c + (d - c) * tx;
        top + (bottom - top) * tz
    }

    /// Whether the unit tile centred on `(tx, tz)` is walkable.
    pub fn is_walkable_tile(&self, tx: i32, tz: i32) -> bool {
        let h = self.height(tx as f32, tz as f32);
        h >= self.water && h < self.mountain
    }
}

impl WalkabilityOracle for Terrain {
    fn is_walkable(&self, point: Vec3, _radius: f32) -> Result<bool, NavError> {
        // Tiles tile the plane, so a probe always lands on exactly one.
        Ok(self.is_walkable_tile(point.x.round() as i32, point.z.round() as i32))
    }
}

// ---------------------------------------------------------------------------
// World
// ---------------------------------------------------------------------------

/// What happened during one [`World::step`].
#[derive(Clone, Debug, PartialEq)]
pub struct TickReport {
    pub tick: u64,
    pub rebuilt: bool,
    /// Steps in the hunter's path, `None` when the player is unreachable.
    pub path_len: Option<usize>,
    pub path_cost: Option<i32>,
}

pub struct World {
    pub terrain: Terrain,
    pub tracker: GridTracker,
    pub focus: StreamingFocus,
    pub pathfinder: Pathfinder,
    pub slot: PathSlot,
    pub algorithm: Algorithm,
    pub player: Vec3,
    pub hunter: Vec3,
    /// Hunter speed in world units per tick.
    pub hunter_speed: f32,
    /// Radius of the player's walking loop.
    pub orbit: f32,
    pub tick: u64,
}

impl World {
    pub fn new(seed: u64, config: GridConfig) -> Result<Self, NavError> {
        let terrain = Terrain::new(seed);
        let orbit = config.chunk_size as f32 * 1.5;
        let player = Self::orbit_position(orbit, 0);
        let focus = StreamingFocus::new(Vec3::ZERO, &config);
        let tracker = GridTracker::new(config, &focus, &terrain)?;
        Ok(Self {
            terrain,
            tracker,
            focus,
            pathfinder: Pathfinder::new(),
            slot: PathSlot::new(OnNoPath::Clear),
            algorithm: Algorithm::AStar,
            player,
            hunter: Vec3::ZERO,
            hunter_speed: 0.6,
            orbit,
            tick: 0,
        })
    }

    fn orbit_position(orbit: f32, tick: u64) -> Vec3 {
        let angle = tick as f32 * 0.02;
        Vec3::new(orbit * angle.cos(), 0.0, orbit * angle.sin())
    }

    /// Advance one tick: move the player, stream the grid, then re-plan and
    /// move the hunter.
    ///
    /// A failed rebuild aborts the tick before any search runs; the rebuild
    /// is retried on the next tick.
    pub fn step(&mut self) -> Result<TickReport, NavError> {
        self.tick += 1;
        self.player = Self::orbit_position(self.orbit, self.tick);
        self.focus.follow(self.player);
        let rebuilt = self.tracker.update(&self.focus, &self.terrain)?;

        let grid = self.tracker.grid();
        let path = self
            .pathfinder
            .find_path(self.algorithm, grid, self.hunter, self.player);
        self.slot.record(path.as_ref());

        match path.as_ref().map(|p| p.waypoints().first()) {
            Some(Some(next)) => {
                self.hunter = step_toward(self.hunter, *next, self.hunter_speed);
            }
            Some(None) => {}
            None => log::debug!(
                "tick {}: player at {} unreachable from {}",
                self.tick,
                self.player,
                self.hunter
            ),
        }

        Ok(TickReport {
            tick: self.tick,
            rebuilt,
            path_len: path.as_ref().map(Path::len),
            path_cost: path.as_ref().map(Path::cost),
        })
    }
}

/// Move `from` toward `to` on the ground plane by at most `speed`.
fn step_toward(from: Vec3, to: Vec3, speed: f32) -> Vec3 {
    let flat = to.with_y(from.y);
    let d = flat.distance(from);
    if d <= speed {
        flat
    } else {
        from + (flat - from) * (speed / d)
    }
}
