//! The world border.

/// The largest diameter the border may have.
pub const MAX_SIZE: f64 = 59_999_968.0;
/// The furthest the border centre may be from the origin.
pub const MAX_CENTER: f64 = 29_999_984.0;

/// A square border around the playable area.
#[derive(Debug, Clone)]
pub struct WorldBorder {
    /// Centre x coordinate.
    pub center_x: f64,
    /// Centre z coordinate.
    pub center_z: f64,
    size_from: f64,
    size_to: f64,
    lerp_total: i64,
    lerp_remaining: i64,
    /// Damage per block outside the safe zone, per second.
    pub damage_per_block: f64,
    /// Distance outside the border where no damage is dealt.
    pub safe_zone: f64,
    /// Distance at which players get warned.
    pub warning_blocks: i32,
    /// Seconds of shrinking at which players get warned.
    pub warning_time: i32,
}

impl WorldBorder {
    /// A border with the given diameter and vanilla defaults for everything else.
    #[must_use]
    pub const fn new(size: f64) -> Self {
        Self {
            center_x: 0.0,
            center_z: 0.0,
            size_from: size,
            size_to: size,
            lerp_total: 0,
            lerp_remaining: 0,
            damage_per_block: 0.2,
            safe_zone: 5.0,
            warning_blocks: 5,
            warning_time: 15,
        }
    }

    /// The current diameter.
    #[must_use]
    pub fn size(&self) -> f64 {
        if self.lerp_remaining <= 0 {
            return self.size_to;
        }
        let progress = 1.0 - self.lerp_remaining as f64 / self.lerp_total as f64;
        self.size_from + (self.size_to - self.size_from) * progress
    }

    /// The diameter the border is moving towards.
    #[must_use]
    pub const fn lerp_target(&self) -> f64 {
        self.size_to
    }

    /// Remaining ticks of the current size change.
    #[must_use]
    pub const fn lerp_remaining(&self) -> i64 {
        self.lerp_remaining
    }

    /// Sets the diameter at once.
    pub fn set_size(&mut self, size: f64) {
        self.size_from = size;
        self.size_to = size;
        self.lerp_total = 0;
        self.lerp_remaining = 0;
    }

    /// Moves the diameter from `from` to `to` over `ticks` ticks.
    pub fn lerp_size_between(&mut self, from: f64, to: f64, ticks: i64) {
        if ticks <= 0 {
            self.set_size(to);
            return;
        }
        self.size_from = from;
        self.size_to = to;
        self.lerp_total = ticks;
        self.lerp_remaining = ticks;
    }

    /// Whether the block column at `x`, `z` is inside the border.
    #[must_use]
    pub fn is_within_bounds(&self, x: f64, z: f64) -> bool {
        let radius = self.size() / 2.0;
        x >= self.center_x - radius
            && x < self.center_x + radius
            && z >= self.center_z - radius
            && z < self.center_z + radius
    }

    /// Advances a running size change by one tick.
    pub fn tick(&mut self) {
        if self.lerp_remaining > 0 {
            self.lerp_remaining -= 1;
        }
    }
}

impl Default for WorldBorder {
    fn default() -> Self {
        Self::new(MAX_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerps_linearly() {
        let mut border = WorldBorder::new(100.0);
        border.lerp_size_between(100.0, 200.0, 4);
        assert!((border.size() - 100.0).abs() < 1e-9);
        border.tick();
        border.tick();
        assert!((border.size() - 150.0).abs() < 1e-9);
        assert!((border.lerp_target() - 200.0).abs() < 1e-9);
        border.tick();
        border.tick();
        border.tick();
        assert!((border.size() - 200.0).abs() < 1e-9);
    }

    #[test]
    fn bounds_are_half_open() {
        let border = WorldBorder::new(10.0);
        assert!(border.is_within_bounds(-5.0, 4.9));
        assert!(!border.is_within_bounds(5.0, 0.0));
    }
}
