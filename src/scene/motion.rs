//! Motion programs: declarative timed-translation sequences.
//!
//! A list of `MoveBy` steps advanced by dt each tick, repeating forever or
//! running once and reporting completion. A zero-duration step applies its
//! whole delta instantly -- that is how the scroll layers snap back after
//! drifting one tile width.

use crate::scene::entity::Vec2;

/// One timed translation. `duration == 0` applies instantaneously.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveBy {
    pub delta: Vec2,
    pub duration: f64,
}

impl MoveBy {
    pub fn new(dx: f64, dy: f64, duration: f64) -> Self {
        Self {
            delta: Vec2::new(dx, dy),
            duration,
        }
    }
}

/// What happens when the step list runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    /// Wrap to the first step, forever.
    Forever,
    /// Report completion; the scene removes the entity.
    OnceThenRemove,
}

/// Result of advancing a program by one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionTick {
    /// Translation to apply to the entity this tick.
    pub displacement: Vec2,
    /// True when a `OnceThenRemove` program has run to completion.
    pub finished: bool,
}

#[derive(Debug, Clone)]
pub struct MotionProgram {
    steps: Vec<MoveBy>,
    repeat: Repeat,
    step: usize,
    elapsed: f64,
}

impl MotionProgram {
    pub fn new(steps: Vec<MoveBy>, repeat: Repeat) -> Self {
        Self {
            steps,
            repeat,
            step: 0,
            elapsed: 0.0,
        }
    }

    /// The infinite scroll loop: left by `w` over `duration`, then snap back.
    pub fn scroll_loop(w: f64, duration: f64) -> Self {
        Self::new(
            vec![MoveBy::new(-w, 0.0, duration), MoveBy::new(w, 0.0, 0.0)],
            Repeat::Forever,
        )
    }

    /// One leftward traversal, then despawn.
    pub fn traverse_once(dx: f64, duration: f64) -> Self {
        Self::new(vec![MoveBy::new(dx, 0.0, duration)], Repeat::OnceThenRemove)
    }

    /// Advance by `dt`, carrying leftover time across step boundaries.
    pub fn advance(&mut self, mut dt: f64) -> MotionTick {
        let mut displacement = Vec2::ZERO;
        if self.steps.is_empty() {
            return MotionTick {
                displacement,
                finished: self.repeat == Repeat::OnceThenRemove,
            };
        }

        // Instantaneous steps run even with no time budget left, but at most
        // one full pass so an all-zero Forever program cannot spin.
        let mut zero_run = 0usize;
        loop {
            let step = self.steps[self.step];
            if step.duration <= 0.0 {
                zero_run += 1;
                if zero_run > self.steps.len() {
                    break;
                }
                displacement += step.delta;
                if !self.next_step() {
                    return MotionTick {
                        displacement,
                        finished: true,
                    };
                }
                continue;
            }
            zero_run = 0;

            if dt <= 0.0 {
                break;
            }
            let remaining = step.duration - self.elapsed;
            let consumed = dt.min(remaining);
            displacement += step.delta * (consumed / step.duration);
            self.elapsed += consumed;
            dt -= consumed;

            if self.elapsed >= step.duration && !self.next_step() {
                return MotionTick {
                    displacement,
                    finished: true,
                };
            }
        }

        MotionTick {
            displacement,
            finished: false,
        }
    }

    /// Move to the next step. Returns false when the program is complete.
    fn next_step(&mut self) -> bool {
        self.elapsed = 0.0;
        self.step += 1;
        if self.step < self.steps.len() {
            return true;
        }
        match self.repeat {
            Repeat::Forever => {
                self.step = 0;
                true
            }
            Repeat::OnceThenRemove => {
                self.step = self.steps.len() - 1;
                false
            }
        }
    }
}
