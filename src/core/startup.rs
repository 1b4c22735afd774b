use std::time::{Duration, Instant};

use crate::i18n::keys;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    LoadingFile,
    LoadingSource,
    Compiling,
    Starting,
    Done,
}

impl Stage {
    pub fn label_key(&self) -> Option<&'static str> {
        match self {
            Stage::LoadingFile => Some(keys::LOADING_FILE),
            Stage::LoadingSource => Some(keys::LOADING_SOURCE),
            Stage::Compiling => Some(keys::COMPILING),
            Stage::Starting => Some(keys::STARTING),
            Stage::Done => None,
        }
    }
}

// Ticks spent in each stage; every tick adds 10%.
const SCHEDULE: [(Stage, u32); 4] = [
    (Stage::LoadingFile, 3),
    (Stage::LoadingSource, 3),
    (Stage::Compiling, 3),
    (Stage::Starting, 1),
];
const PERCENT_PER_TICK: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartupState {
    pub stage: Stage,
    pub percent: u32,
}

#[derive(Debug, Clone)]
pub struct StartupSequence {
    started: Instant,
    tick: Duration,
}

impl StartupSequence {
    pub const DEFAULT_TICK: Duration = Duration::from_secs(1);

    pub fn new(tick: Duration) -> Self {
        Self {
            started: Instant::now(),
            tick,
        }
    }

    pub fn state(&self) -> StartupState {
        self.state_at(self.started.elapsed())
    }

    pub fn state_at(&self, elapsed: Duration) -> StartupState {
        let ticks_done = if self.tick.is_zero() {
            u32::MAX
        } else {
            (elapsed.as_nanos() / self.tick.as_nanos()).min(u32::MAX as u128) as u32
        };

        let mut budget = ticks_done;
        for (stage, ticks) in SCHEDULE {
            if budget < ticks {
                return StartupState {
                    stage,
                    percent: ticks_done * PERCENT_PER_TICK,
                };
            }
            budget -= ticks;
        }

        StartupState {
            stage: Stage::Done,
            percent: 100,
        }
    }

    pub fn is_done(&self) -> bool {
        self.state().stage == Stage::Done
    }

    pub fn until_next_tick(&self) -> Duration {
        if self.tick.is_zero() {
            return Duration::ZERO;
        }
        let elapsed = self.started.elapsed().as_nanos();
        let tick = self.tick.as_nanos();
        let remaining = tick - elapsed % tick;
        Duration::from_nanos(remaining.min(u64::MAX as u128) as u64)
    }
}
