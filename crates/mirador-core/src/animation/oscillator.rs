// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A bounded back-and-forth scalar driver.

/// The current travel direction of an [`Oscillator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// The value grows by `rate * dt` each step.
    #[default]
    Increasing,
    /// The value shrinks by `rate * dt` each step.
    Decreasing,
}

impl Direction {
    fn sign(self) -> f32 {
        match self {
            Direction::Increasing => 1.0,
            Direction::Decreasing => -1.0,
        }
    }
}

/// A scalar that travels between two bounds and turns around once it crosses one.
///
/// Bounds are soft: the value is never clamped, so a large step overshoots the
/// bound by up to `rate * dt` before the direction flips. The flip only happens
/// on the bound the oscillator is travelling towards, which lets a value that
/// starts outside the range walk back into it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oscillator {
    value: f32,
    rate: f32,
    lower: f32,
    upper: f32,
    direction: Direction,
}

impl Oscillator {
    /// Creates an oscillator starting at `value`, travelling upwards.
    pub fn new(value: f32, rate: f32, lower: f32, upper: f32) -> Self {
        debug_assert!(lower <= upper, "oscillator bounds are inverted");
        Self {
            value,
            rate,
            lower,
            upper,
            direction: Direction::Increasing,
        }
    }

    /// Sets the starting direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Steps the oscillator by `dt` seconds and returns the new value.
    pub fn advance(&mut self, dt: f32) -> f32 {
        self.value += self.direction.sign() * self.rate * dt;
        match self.direction {
            Direction::Increasing if self.value > self.upper => {
                self.direction = Direction::Decreasing;
            }
            Direction::Decreasing if self.value < self.lower => {
                self.direction = Direction::Increasing;
            }
            _ => {}
        }
        self.value
    }

    /// The current value.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// The current travel direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The rate of change, in units per second.
    pub fn rate(&self) -> f32 {
        self.rate
    }

    /// The `(lower, upper)` bounds.
    pub fn bounds(&self) -> (f32, f32) {
        (self.lower, self.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_oscillator_moves_up_then_flips_on_crossing() {
        let mut osc = Oscillator::new(10.0, 10.0, 1.0, 30.0);
        assert_relative_eq!(osc.advance(1.0), 20.0);
        assert_eq!(osc.direction(), Direction::Increasing);

        // Landing exactly on the bound is not a crossing.
        assert_relative_eq!(osc.advance(1.0), 30.0);
        assert_eq!(osc.direction(), Direction::Increasing);

        assert_relative_eq!(osc.advance(1.0), 40.0);
        assert_eq!(osc.direction(), Direction::Decreasing);

        assert_relative_eq!(osc.advance(1.0), 30.0);
        assert_eq!(osc.direction(), Direction::Decreasing);
    }

    #[test]
    fn test_oscillator_flips_back_up_below_lower_bound() {
        let mut osc = Oscillator::new(0.5, 1.0, 0.0, 1.0).with_direction(Direction::Decreasing);
        osc.advance(0.4);
        assert_eq!(osc.direction(), Direction::Decreasing);
        osc.advance(0.4);
        assert!(osc.value() < 0.0);
        assert_eq!(osc.direction(), Direction::Increasing);
    }

    #[test]
    fn test_oscillator_zero_step_is_a_no_op() {
        let mut osc = Oscillator::new(0.7, 3.0, 0.2, 0.99);
        let before = osc;
        assert_relative_eq!(osc.advance(0.0), 0.7);
        assert_eq!(osc, before);
    }

    #[test]
    fn test_oscillator_stays_within_overshoot_envelope() {
        let rate = 1.0 / 5.0;
        let max_dt = 0.25;
        let mut osc = Oscillator::new(0.1, rate, 0.2, 0.99);
        // Starts below the range; it must climb into it and then stay bounded.
        for step in 0..4000 {
            let dt = if step % 3 == 0 { max_dt } else { 0.016 };
            let value = osc.advance(dt);
            if step > 100 {
                assert!(value >= 0.2 - rate * max_dt - 1e-5);
            }
            assert!(value <= 0.99 + rate * max_dt + 1e-5);
        }
    }

    #[test]
    fn test_oscillator_does_not_clamp() {
        let mut osc = Oscillator::new(0.9, 1.0, 0.0, 1.0);
        assert_relative_eq!(osc.advance(0.5), 1.4);
        assert_eq!(osc.direction(), Direction::Decreasing);
    }
}
