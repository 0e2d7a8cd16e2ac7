//! Time, weather and spawn state of a world.
use ingot_utils::BlockPos;

/// Ticks in a Minecraft day.
pub const TICKS_PER_DAY: i64 = 24_000;

/// Weather, clock and spawn point of a world.
#[derive(Debug, Clone, Default)]
pub struct LevelData {
    /// Ticks since the world was created.
    pub game_time: i64,
    /// Time of day; keeps counting past one day.
    pub day_time: i64,
    /// Ticks left of forced clear weather.
    pub clear_weather_time: i32,
    /// Ticks until rain toggles.
    pub rain_time: i32,
    /// Ticks until thunder toggles.
    pub thunder_time: i32,
    /// Whether it rains.
    pub raining: bool,
    /// Whether it thunders.
    pub thundering: bool,
    /// The world spawn.
    pub spawn: BlockPos,
    /// The yaw players spawn with.
    pub spawn_angle: f32,
}

impl LevelData {
    /// Sets clear weather, rain or thunder for a number of ticks.
    pub fn set_weather(&mut self, clear_time: i32, weather_time: i32, raining: bool, thundering: bool) {
        self.clear_weather_time = clear_time;
        self.rain_time = weather_time;
        self.thunder_time = weather_time;
        self.raining = raining;
        self.thundering = thundering;
    }

    /// Advances the clock and the weather cycle by one tick.
    pub fn tick(&mut self) {
        self.game_time += 1;
        self.day_time += 1;

        if self.clear_weather_time > 0 {
            self.clear_weather_time -= 1;
            self.thunder_time = i32::from(!self.thundering);
            self.rain_time = i32::from(!self.raining);
            self.thundering = false;
            self.raining = false;
            return;
        }

        if self.thunder_time > 0 {
            self.thunder_time -= 1;
            if self.thunder_time == 0 {
                self.thundering = !self.thundering;
            }
        } else if self.thundering {
            self.thunder_time = rand::random_range(3_600..=15_600);
        } else {
            self.thunder_time = rand::random_range(12_000..=180_000);
        }

        if self.rain_time > 0 {
            self.rain_time -= 1;
            if self.rain_time == 0 {
                self.raining = !self.raining;
            }
        } else if self.raining {
            self.rain_time = rand::random_range(12_000..=24_000);
        } else {
            self.rain_time = rand::random_range(12_000..=180_000);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forced_clear_weather_stops_rain() {
        let mut data = LevelData::default();
        data.set_weather(0, 100, true, true);
        data.set_weather(10, 0, false, false);
        data.tick();
        assert!(!data.raining);
        assert_eq!(data.clear_weather_time, 9);
        assert_eq!(data.game_time, 1);
    }

    #[test]
    fn weather_toggles_when_timer_runs_out() {
        let mut data = LevelData::default();
        data.set_weather(0, 1, true, false);
        data.tick();
        assert!(!data.raining);
    }
}
