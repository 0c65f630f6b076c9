use std::fmt;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::error::TimerError;

/// Host facility that runs a task every `period_ms` until cancelled.
pub trait Scheduler {
    fn every(&self, period_ms: u32, task: Box<dyn FnMut()>) -> Result<TaskHandle, TimerError>;
}

/// Handle to a repeating task. Cancels on drop.
pub struct TaskHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TaskHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Stops the task. Returns false if it was already cancelled.
    pub fn cancel(&mut self) -> bool {
        match self.cancel.take() {
            Some(f) => {
                f();
                true
            }
            None => false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.cancel.is_some()
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl fmt::Debug for TaskHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskHandle")
            .field("active", &self.is_active())
            .finish()
    }
}

/// `setInterval` / `clearInterval` on the browser window.
#[derive(Clone)]
pub struct WindowScheduler {
    window: web_sys::Window,
}

impl WindowScheduler {
    pub fn new() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }
}

impl Scheduler for WindowScheduler {
    fn every(&self, period_ms: u32, task: Box<dyn FnMut()>) -> Result<TaskHandle, TimerError> {
        let timeout = i32::try_from(period_ms)
            .map_err(|_| TimerError::config(format!("period {} ms is too long", period_ms)))?;
        let tick = Closure::wrap(task);
        let id = self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                tick.as_ref().unchecked_ref(),
                timeout,
            )
            .map_err(|e| TimerError::config(format!("setInterval failed: {:?}", e)))?;
        let window = self.window.clone();
        Ok(TaskHandle::new(move || {
            window.clear_interval_with_handle(id);
            // the closure must outlive the interval registration
            drop(tick);
        }))
    }
}
