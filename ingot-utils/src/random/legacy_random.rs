//! The game's legacy linear congruential generator.
use super::Random;

/// The 48 bit linear congruential generator used by the game.
pub struct LegacyRandom {
    seed: i64,
}

impl LegacyRandom {
    /// Creates a generator from a seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed: (seed as i64 ^ 0x5DEE_CE66D) & 0xFFFF_FFFF_FFFF,
        }
    }

    fn next(&mut self, bits: u64) -> i32 {
        (self.next_random() >> (48 - bits)) as i32
    }

    fn next_random(&mut self) -> i64 {
        let l = self.seed;
        let m = l.wrapping_mul(0x5DEE_CE66D).wrapping_add(0xB) & 0xFFFF_FFFF_FFFF;
        self.seed = m;
        m
    }
}

impl Random for LegacyRandom {
    fn next_i32(&mut self) -> i32 {
        self.next(32)
    }

    fn next_i32_bounded(&mut self, bound: i32) -> i32 {
        if bound & bound.wrapping_sub(1) == 0 {
            (i64::from(bound).wrapping_mul(i64::from(self.next(31))) >> 31) as i32
        } else {
            loop {
                let i = self.next(31);
                let j = i % bound;
                if i.wrapping_sub(j).wrapping_add(bound.wrapping_sub(1)) >= 0 {
                    return j;
                }
            }
        }
    }

    fn next_i64(&mut self) -> i64 {
        let i = self.next_i32();
        let j = self.next_i32();
        (i64::from(i) << 32).wrapping_add(i64::from(j))
    }

    fn next_f32(&mut self) -> f32 {
        self.next(24) as f32 * 5.960_464_5e-8_f32
    }

    fn next_f64(&mut self) -> f64 {
        (((self.next(26) as u64) << 27) | (self.next(27) as u64)) as f64
            * f64::from(1.110_223e-16_f32)
    }

    fn next_bool(&mut self) -> bool {
        self.next(1) != 0
    }
}

#[cfg(test)]
mod test {
    use super::{LegacyRandom, Random};

    #[test]
    fn test_next_i32() {
        let mut rand = LegacyRandom::from_seed(0);

        let values = [
            -1_155_484_576,
            -723_955_400,
            1_033_096_058,
            -1_690_734_402,
            -1_557_280_266,
            1_327_362_106,
            -1_930_858_313,
            502_539_523,
            -1_728_529_858,
            -938_301_587,
        ];

        for value in values {
            assert_eq!(rand.next_i32(), value);
        }
    }

    #[test]
    fn test_next_i32_bounded() {
        let mut rand = LegacyRandom::from_seed(0);
        let values = [0, 13, 4, 2, 5, 8, 11, 6, 9, 14];
        for value in values {
            assert_eq!(rand.next_i32_bounded(0xf), value);
        }

        let mut rand = LegacyRandom::from_seed(0);
        let values = [1, 1, 0, 1, 1, 0, 1, 0, 1, 1];
        for value in values {
            assert_eq!(rand.next_i32_bounded(2), value);
        }
    }

    #[test]
    fn test_next_i32_between() {
        let mut rand = LegacyRandom::from_seed(0);
        let values = [1, 5, 2, 12, 12, 6, 12, 10, 4, 3];
        for value in values {
            assert_eq!(rand.next_i32_between(1, 12), value);
        }
    }

    #[test]
    fn test_next_f64() {
        let mut rand = LegacyRandom::from_seed(0);

        let values = [
            0.730_967_787_376_657,
            0.240_536_415_671_485_87,
            0.637_417_425_350_108_3,
            0.550_437_005_117_633_9,
            0.597_545_277_797_201_8,
        ];

        for value in values {
            assert_eq!(rand.next_f64(), value);
        }
    }

    #[test]
    fn test_next_i64() {
        let mut rand = LegacyRandom::from_seed(0);
        assert_eq!(rand.next_i64(), -4_962_768_465_676_381_896);
        assert_eq!(rand.next_i64(), 4_437_113_781_045_784_766);
    }

    #[test]
    fn test_next_f64_between_handles_empty_ranges() {
        let mut rand = LegacyRandom::from_seed(0);
        assert_eq!(rand.next_f64_between(5.0, 5.0), 5.0);
        let value = rand.next_f64_between(-10.0, 10.0);
        assert!((-10.0..10.0).contains(&value));
    }
}
