// Pattern 3: Behavioral Patterns - State
// A traffic light whose behaviour depends on the current state value.
// Transitions are paced by an externally owned ticker and end either when
// the cycle budget runs out or when the caller cancels.

use crate::config::DemoConfig;
use crate::error::{ConfigError, PatternError};
use std::future::Future;
use std::time::Duration;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightState {
    Red,
    Green,
    Yellow,
}

impl LightState {
    pub fn next(self) -> Self {
        match self {
            LightState::Red => LightState::Green,
            LightState::Green => LightState::Yellow,
            LightState::Yellow => LightState::Red,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LightState::Red => "Red Light",
            LightState::Green => "Green Light",
            LightState::Yellow => "Yellow Light",
        }
    }
}

#[derive(Debug, Clone)]
pub struct TrafficLight {
    state: LightState,
    cycles: u32,
    reds_shown: u32,
    stopped: bool,
}

impl TrafficLight {
    /// A light starting on red that shows red at most `cycles` times.
    pub fn new(cycles: u32) -> Self {
        Self {
            state: LightState::Red,
            cycles,
            reds_shown: 0,
            stopped: false,
        }
    }

    pub fn state(&self) -> LightState {
        self.state
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Announces the current state and moves to the next one.
    ///
    /// Returns `None` once the light has stopped.
    pub fn change(&mut self) -> Option<LightState> {
        if self.stopped {
            return None;
        }
        if self.state == LightState::Red && self.reds_shown == self.cycles {
            tracing::debug!(cycles = self.cycles, "cycle budget spent, light stops");
            self.stopped = true;
            return None;
        }

        let shown = self.state;
        if shown == LightState::Red {
            self.reds_shown += 1;
        }
        self.state = shown.next();
        tracing::debug!(from = ?shown, to = ?self.state, "light changed");
        Some(shown)
    }
}

// ============================================================================
// Tickers
// ============================================================================

/// Paces the light. Owned by the caller, not by the states.
pub trait Ticker {
    fn tick(&mut self) -> impl Future<Output = ()> + Send;
}

/// Fires every `period`, starting one period from now.
pub struct IntervalTicker {
    interval: Interval,
}

impl IntervalTicker {
    /// Fails on a zero period, which tokio cannot schedule.
    pub fn new(period: Duration) -> Result<Self, ConfigError> {
        if period.is_zero() {
            return Err(ConfigError::invalid("traffic_light.tick_ms", "must be greater than 0"));
        }
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Ok(Self { interval })
    }
}

impl Ticker for IntervalTicker {
    async fn tick(&mut self) {
        self.interval.tick().await;
    }
}

/// Drives `light` until it stops or `cancel` fires, calling `on_change`
/// for every announced state. Returns everything that was announced.
pub async fn run<T, F>(
    light: &mut TrafficLight,
    ticker: &mut T,
    cancel: &CancellationToken,
    mut on_change: F,
) -> Vec<LightState>
where
    T: Ticker,
    F: FnMut(LightState),
{
    let mut announced = Vec::new();

    while !light.is_stopped() {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::debug!("traffic light cancelled");
                break;
            }
            _ = ticker.tick() => {}
        }

        match light.change() {
            Some(shown) => {
                on_change(shown);
                announced.push(shown);
            }
            None => break,
        }
    }

    announced
}

pub async fn demo(config: &DemoConfig) -> Result<(), PatternError> {
    config.validate()?;

    let mut light = TrafficLight::new(config.traffic_light.cycles);
    let mut ticker = IntervalTicker::new(config.traffic_light.tick())?;
    let cancel = CancellationToken::new();

    run(&mut light, &mut ticker, &cancel, |state| println!("{}", state.label())).await;
    Ok(())
}
