//! Periodic task bookkeeping for the dashboard.
//!
//! Nothing here sleeps or spawns. The owner polls with the current time and
//! a task reports whether it is due; the frame loop (or `simulate`) decides
//! how long to wait from `until_next_due`.

use std::time::Duration;

use strum_macros::{Display, EnumIter};

#[cfg(debug_assertions)]
use crate::config::DF;
use crate::config::SCHEDULE;
use crate::domain::TimeFrame;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum TaskId {
    Session,
    DisplayClock,
    Series,
    Prediction,
    Performance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodicTask {
    period_ms: i64,
    next_due_ms: Option<i64>,
}

impl PeriodicTask {
    pub fn new(period_ms: i64) -> Self {
        Self {
            period_ms: period_ms.max(1),
            next_due_ms: None,
        }
    }

    pub fn period_ms(&self) -> i64 {
        self.period_ms
    }

    pub fn is_armed(&self) -> bool {
        self.next_due_ms.is_some()
    }

    /// Arm so the next poll at or after `now_ms` fires.
    pub fn start(&mut self, now_ms: i64) {
        self.next_due_ms = Some(now_ms);
    }

    /// Arm so the first firing is one period after `now_ms`.
    pub fn start_after(&mut self, now_ms: i64) {
        self.next_due_ms = Some(now_ms + self.period_ms);
    }

    pub fn cancel(&mut self) {
        self.next_due_ms = None;
    }

    /// Takes effect from the next arming.
    pub fn set_period(&mut self, period_ms: i64) {
        self.period_ms = period_ms.max(1);
    }

    /// Fires at most once per call. Missed periods are skipped, not replayed,
    /// and the next due time stays on the original period grid.
    pub fn poll(&mut self, now_ms: i64) -> bool {
        match self.next_due_ms {
            Some(due) if now_ms >= due => {
                let missed = (now_ms - due) / self.period_ms;
                self.next_due_ms = Some(due + (missed + 1) * self.period_ms);
                true
            }
            _ => false,
        }
    }

    pub fn until_due_ms(&self, now_ms: i64) -> Option<i64> {
        self.next_due_ms.map(|due| (due - now_ms).max(0))
    }
}

/// Owns every timer the dashboard runs. Dropping it drops them all.
#[derive(Debug, Clone)]
pub struct Scheduler {
    tasks: Vec<(TaskId, PeriodicTask)>,
}

impl Scheduler {
    /// Standard dashboard tasks, all disarmed.
    pub fn new(time_frame: TimeFrame) -> Self {
        Self {
            tasks: vec![
                (TaskId::Session, PeriodicTask::new(SCHEDULE.session_ms)),
                (
                    TaskId::DisplayClock,
                    PeriodicTask::new(SCHEDULE.display_clock_ms),
                ),
                (
                    TaskId::Series,
                    PeriodicTask::new(time_frame.sample_interval_ms()),
                ),
                (TaskId::Prediction, PeriodicTask::new(SCHEDULE.prediction_ms)),
                (
                    TaskId::Performance,
                    PeriodicTask::new(SCHEDULE.performance_ms),
                ),
            ],
        }
    }

    pub fn task(&self, id: TaskId) -> Option<&PeriodicTask> {
        self.tasks.iter().find(|(t, _)| *t == id).map(|(_, task)| task)
    }

    fn task_mut(&mut self, id: TaskId) -> Option<&mut PeriodicTask> {
        self.tasks
            .iter_mut()
            .find(|(t, _)| *t == id)
            .map(|(_, task)| task)
    }

    pub fn start_after(&mut self, id: TaskId, now_ms: i64) {
        if let Some(task) = self.task_mut(id) {
            task.start_after(now_ms);
            #[cfg(debug_assertions)]
            if DF.log_scheduler {
                log::info!(
                    "SCHEDULER: armed {} every {}ms (delayed)",
                    id,
                    task.period_ms()
                );
            }
        }
    }

    pub fn start_all(&mut self, now_ms: i64) {
        for (_, task) in &mut self.tasks {
            task.start(now_ms);
        }
    }

    pub fn cancel(&mut self, id: TaskId) {
        if let Some(task) = self.task_mut(id) {
            task.cancel();
            #[cfg(debug_assertions)]
            if DF.log_scheduler {
                log::info!("SCHEDULER: cancelled {}", id);
            }
        }
    }

    pub fn set_period(&mut self, id: TaskId, period_ms: i64) {
        if let Some(task) = self.task_mut(id) {
            task.set_period(period_ms);
        }
    }

    pub fn is_armed(&self, id: TaskId) -> bool {
        self.task(id).is_some_and(PeriodicTask::is_armed)
    }

    pub fn poll(&mut self, id: TaskId, now_ms: i64) -> bool {
        self.task_mut(id).is_some_and(|task| task.poll(now_ms))
    }

    /// Time until the earliest armed task is due. `None` when nothing is armed.
    pub fn until_next_due(&self, now_ms: i64) -> Option<Duration> {
        self.tasks
            .iter()
            .filter_map(|(_, task)| task.until_due_ms(now_ms))
            .min()
            .map(|ms| Duration::from_millis(ms as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn fires_at_start_then_once_per_period() {
        let mut task = PeriodicTask::new(1_000);
        task.start(10_000);
        assert!(task.poll(10_000));
        assert!(!task.poll(10_000));
        assert!(!task.poll(10_999));
        assert!(task.poll(11_000));
        assert!(!task.poll(11_500));
        assert!(task.poll(12_000));
    }

    #[test]
    fn late_poll_fires_once_and_stays_on_grid() {
        let mut task = PeriodicTask::new(1_000);
        task.start(0);
        assert!(task.poll(0));
        // asleep for several periods
        assert!(task.poll(4_300));
        assert!(!task.poll(4_900));
        assert_eq!(task.until_due_ms(4_900), Some(100));
        assert!(task.poll(5_000));
    }

    #[test]
    fn cancelled_task_never_fires() {
        let mut task = PeriodicTask::new(500);
        task.start(0);
        task.cancel();
        assert!(!task.is_armed());
        for t in (0..10_000).step_by(250) {
            assert!(!task.poll(t));
        }
        assert_eq!(task.until_due_ms(0), None);
    }

    #[test]
    fn rearm_with_new_period() {
        let mut task = PeriodicTask::new(1_000);
        task.start(0);
        assert!(task.poll(0));
        task.cancel();
        task.set_period(5_000);
        task.start_after(2_000);
        assert!(!task.poll(3_000));
        assert!(!task.poll(6_999));
        assert!(task.poll(7_000));
        assert!(task.poll(12_000));
    }

    #[test]
    fn zero_period_is_clamped() {
        let mut task = PeriodicTask::new(0);
        task.start(0);
        assert!(task.poll(0));
        assert!(task.poll(1));
    }

    #[test]
    fn scheduler_registers_every_task() {
        let s = Scheduler::new(TimeFrame::H1);
        for id in TaskId::iter() {
            assert!(s.task(id).is_some(), "{id} missing");
            assert!(!s.is_armed(id));
        }
        assert_eq!(s.task(TaskId::Series).map(|t| t.period_ms()), Some(60_000));
        assert_eq!(s.until_next_due(0), None);
    }

    #[test]
    fn until_next_due_picks_earliest() {
        let mut s = Scheduler::new(TimeFrame::M5);
        s.start_all(0);
        for id in TaskId::iter() {
            assert!(s.poll(id, 0));
        }
        s.cancel(TaskId::Session);
        s.cancel(TaskId::DisplayClock);
        s.cancel(TaskId::Prediction);
        s.cancel(TaskId::Performance);
        assert_eq!(s.until_next_due(1_000), Some(Duration::from_millis(4_000)));

        s.cancel(TaskId::Series);
        assert_eq!(s.until_next_due(1_000), None);
    }
}
