//! Elapsed-time tracker that refreshes a display sink on a fixed period.

use std::cell::RefCell;
use std::rc::Rc;

use crate::clock::Clock;
use crate::error::TimerError;
use crate::scheduler::{Scheduler, TaskHandle};
use crate::sink::DisplaySink;
use crate::util::format_elapsed;

pub const DEFAULT_PERIOD_MS: u32 = 1000;

#[derive(Debug, Default)]
struct TimerState {
    start_time: u64,
    elapsed_ms: u64,
    running: bool,
    display: String,
}

impl TimerState {
    /// Never moves backwards, even if the clock does.
    fn measure(&self, now: u64) -> u64 {
        now.saturating_sub(self.start_time).max(self.elapsed_ms)
    }
}

// Shared between Timer::tick and the scheduled task.
fn refresh(state: &RefCell<TimerState>, clock: &dyn Clock, sink: &dyn DisplaySink) {
    let text = {
        let mut s = state.borrow_mut();
        if !s.running {
            return;
        }
        s.elapsed_ms = s.measure(clock.now_ms());
        s.display = format_elapsed(s.elapsed_ms);
        s.display.clone()
    };
    // released before notifying so the sink may read the timer
    sink.show(&text);
}

pub struct Timer {
    clock: Rc<dyn Clock>,
    scheduler: Rc<dyn Scheduler>,
    sink: Option<Rc<dyn DisplaySink>>,
    period_ms: u32,
    state: Rc<RefCell<TimerState>>,
    task: Option<TaskHandle>,
    missing_sink_reported: bool,
}

impl Timer {
    /// Creates a stopped timer with no display sink.
    pub fn new(clock: impl Clock + 'static, scheduler: impl Scheduler + 'static) -> Self {
        Self {
            clock: Rc::new(clock),
            scheduler: Rc::new(scheduler),
            sink: None,
            period_ms: DEFAULT_PERIOD_MS,
            state: Rc::default(),
            task: None,
            missing_sink_reported: false,
        }
    }

    pub fn with_sink(mut self, sink: impl DisplaySink + 'static) -> Self {
        self.sink = Some(Rc::new(sink));
        self
    }

    /// Takes effect on the next `start()`. Zero falls back to the default.
    pub fn with_period(mut self, period_ms: u32) -> Self {
        self.period_ms = if period_ms == 0 {
            DEFAULT_PERIOD_MS
        } else {
            period_ms
        };
        self
    }

    /// Starts counting from now. A running timer is restarted from zero.
    ///
    /// Errors are logged here, a missing sink only the first time, so
    /// callers just handle the result.
    pub fn start(&mut self) -> Result<(), TimerError> {
        let Some(sink) = self.sink.clone() else {
            if !self.missing_sink_reported {
                log::error!("timer has no display sink; not starting");
                self.missing_sink_reported = true;
            }
            return Err(TimerError::config("no display sink attached"));
        };
        if let Some(mut task) = self.task.take() {
            task.cancel();
            log::debug!("restarting running timer");
        }

        let now = self.clock.now_ms();
        {
            let mut s = self.state.borrow_mut();
            s.start_time = now;
            s.elapsed_ms = 0;
            s.running = true;
        }
        refresh(&self.state, &*self.clock, &*sink);

        let state = Rc::clone(&self.state);
        let clock = Rc::clone(&self.clock);
        let tick = Box::new(move || refresh(&state, &*clock, &*sink));
        match self.scheduler.every(self.period_ms, tick) {
            Ok(handle) => self.task = Some(handle),
            Err(e) => {
                self.state.borrow_mut().running = false;
                log::error!("{}", e);
                return Err(e);
            }
        }
        log::debug!("timer started at {} ms, period {} ms", now, self.period_ms);
        Ok(())
    }

    /// Recomputes the elapsed time and pushes it to the sink.
    pub fn tick(&self) {
        if let Some(sink) = &self.sink {
            refresh(&self.state, &*self.clock, &**sink);
        }
    }

    /// Cancels the periodic update and freezes the elapsed time.
    pub fn stop(&mut self) {
        if let Some(mut task) = self.task.take() {
            task.cancel();
        }
        let mut s = self.state.borrow_mut();
        if !s.running {
            return;
        }
        s.elapsed_ms = s.measure(self.clock.now_ms());
        s.running = false;
        log::debug!("timer stopped at {}", format_elapsed(s.elapsed_ms));
    }

    pub fn destroy(mut self) {
        self.stop();
    }

    pub fn is_running(&self) -> bool {
        self.state.borrow().running
    }

    pub fn start_time(&self) -> u64 {
        self.state.borrow().start_time
    }

    /// Live while running, frozen once stopped.
    pub fn elapsed_ms(&self) -> u64 {
        let s = self.state.borrow();
        if s.running {
            s.measure(self.clock.now_ms())
        } else {
            s.elapsed_ms
        }
    }

    /// Text last sent to the sink.
    pub fn display(&self) -> String {
        self.state.borrow().display.clone()
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        self.stop();
    }
}
