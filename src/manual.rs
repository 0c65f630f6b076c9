//! Deterministic scheduler for driving timers without a browser.
//!
//! Tasks fire in due-time order (ties by registration order) as
//! [`ManualScheduler::advance`] moves the paired [`ManualClock`] forward.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::clock::{Clock, ManualClock};
use crate::error::TimerError;
use crate::scheduler::{Scheduler, TaskHandle};

type Task = Rc<RefCell<Box<dyn FnMut()>>>;

struct Entry {
    id: u64,
    period: u64,
    next_due: u64,
    task: Task,
}

#[derive(Default)]
struct Queue {
    next_id: u64,
    entries: Vec<Entry>,
    fired: u64,
}

#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: ManualClock,
    queue: Rc<RefCell<Queue>>,
}

impl ManualScheduler {
    pub fn new(clock: ManualClock) -> Self {
        Self {
            clock,
            queue: Rc::default(),
        }
    }

    pub fn clock(&self) -> &ManualClock {
        &self.clock
    }

    pub fn active_tasks(&self) -> usize {
        self.queue.borrow().entries.len()
    }

    /// Total task invocations so far.
    pub fn fired(&self) -> u64 {
        self.queue.borrow().fired
    }

    /// Moves time forward by `ms`, running every task that falls due.
    pub fn advance(&self, ms: u64) {
        let target = self.clock.now_ms().saturating_add(ms);
        loop {
            // no borrow may be held while a task runs; tasks cancel themselves
            let due = {
                let mut guard = self.queue.borrow_mut();
                let queue = &mut *guard;
                let next = queue
                    .entries
                    .iter_mut()
                    .filter(|e| e.next_due <= target)
                    .min_by_key(|e| (e.next_due, e.id));
                match next {
                    Some(e) => {
                        let at = e.next_due;
                        e.next_due = at.saturating_add(e.period);
                        let task = Rc::clone(&e.task);
                        queue.fired += 1;
                        Some((at, task))
                    }
                    None => None,
                }
            };
            let Some((at, task)) = due else { break };
            if at > self.clock.now_ms() {
                self.clock.set(at);
            }
            (task.borrow_mut())();
        }
        self.clock.set(target);
    }
}

impl Scheduler for ManualScheduler {
    fn every(&self, period_ms: u32, task: Box<dyn FnMut()>) -> Result<TaskHandle, TimerError> {
        let period = u64::from(period_ms.max(1));
        let id = {
            let mut queue = self.queue.borrow_mut();
            let id = queue.next_id;
            queue.next_id += 1;
            queue.entries.push(Entry {
                id,
                period,
                next_due: self.clock.now_ms().saturating_add(period),
                task: Rc::new(RefCell::new(task)),
            });
            id
        };
        let queue: Weak<RefCell<Queue>> = Rc::downgrade(&self.queue);
        Ok(TaskHandle::new(move || {
            if let Some(queue) = queue.upgrade() {
                queue.borrow_mut().entries.retain(|e| e.id != id);
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counter() -> (Rc<Cell<u32>>, Box<dyn FnMut()>) {
        let n = Rc::new(Cell::new(0));
        let c = n.clone();
        (n, Box::new(move || c.set(c.get() + 1)))
    }

    #[test]
    fn fires_once_per_period() {
        let sched = ManualScheduler::new(ManualClock::starting_at(0));
        let (n, task) = counter();
        let _h = sched.every(1000, task).unwrap();
        sched.advance(999);
        assert_eq!(n.get(), 0);
        sched.advance(1);
        assert_eq!(n.get(), 1);
        sched.advance(3000);
        assert_eq!(n.get(), 4);
        assert_eq!(sched.clock().now_ms(), 4000);
    }

    #[test]
    fn clock_reads_due_time_inside_task() {
        let clock = ManualClock::starting_at(100);
        let sched = ManualScheduler::new(clock.clone());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = seen.clone();
        let c = clock.clone();
        let _h = sched
            .every(500, Box::new(move || s.borrow_mut().push(c.now_ms())))
            .unwrap();
        sched.advance(1200);
        assert_eq!(*seen.borrow(), vec![600, 1100]);
        assert_eq!(clock.now_ms(), 1300);
    }

    #[test]
    fn cancelled_task_never_fires() {
        let sched = ManualScheduler::new(ManualClock::default());
        let (n, task) = counter();
        let mut h = sched.every(10, task).unwrap();
        sched.advance(10);
        assert!(h.cancel());
        sched.advance(1000);
        assert_eq!(n.get(), 1);
        assert_eq!(sched.active_tasks(), 0);
    }

    #[test]
    fn task_can_cancel_itself() {
        let sched = ManualScheduler::new(ManualClock::default());
        let slot: Rc<RefCell<Option<TaskHandle>>> = Rc::default();
        let n = Rc::new(Cell::new(0));
        let (s, c) = (slot.clone(), n.clone());
        let h = sched
            .every(10, Box::new(move || {
                c.set(c.get() + 1);
                if let Some(mut h) = s.borrow_mut().take() {
                    h.cancel();
                }
            }))
            .unwrap();
        *slot.borrow_mut() = Some(h);
        sched.advance(100);
        assert_eq!(n.get(), 1);
    }

    #[test]
    fn interleaves_by_due_time() {
        let sched = ManualScheduler::new(ManualClock::default());
        let order = Rc::new(RefCell::new(Vec::new()));
        let (a, b) = (order.clone(), order.clone());
        let _fast = sched.every(300, Box::new(move || a.borrow_mut().push('f'))).unwrap();
        let _slow = sched.every(500, Box::new(move || b.borrow_mut().push('s'))).unwrap();
        sched.advance(1000);
        // f@300 s@500 f@600 f@900 s@1000
        assert_eq!(order.borrow().iter().collect::<String>(), "fsffs");
        assert_eq!(sched.fired(), 5);
    }
}
