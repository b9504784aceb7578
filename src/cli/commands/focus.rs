//! Headless Pomodoro run.

use crate::features::notify::{announce, Notifier};
use crate::features::timer::Pomodoro;
use crate::output::TimerEvent;

use super::HeadlessRun;

/// A Pomodoro that restarts itself after every phase and notifies on each
/// transition.
pub struct FocusRun<'a> {
    pomodoro: Pomodoro,
    notifier: &'a dyn Notifier,
    cycle_limit: Option<u32>,
}

impl<'a> FocusRun<'a> {
    /// Start a run, optionally ending after `cycle_limit` focus phases.
    pub fn new(notifier: &'a dyn Notifier, cycle_limit: Option<u32>) -> Self {
        let mut pomodoro = Pomodoro::new();
        pomodoro.start();
        Self {
            pomodoro,
            notifier,
            cycle_limit,
        }
    }

    #[must_use]
    pub const fn pomodoro(&self) -> &Pomodoro {
        &self.pomodoro
    }
}

impl HeadlessRun for FocusRun<'_> {
    fn initial_events(&self) -> Vec<TimerEvent> {
        vec![TimerEvent::Pomodoro(self.pomodoro.snapshot())]
    }

    fn on_tick(&mut self) -> Vec<TimerEvent> {
        let Some(transition) = self.pomodoro.tick() else {
            // Report whole minutes only
            return if self.pomodoro.remaining_seconds() % 60 == 0 {
                vec![TimerEvent::Pomodoro(self.pomodoro.snapshot())]
            } else {
                Vec::new()
            };
        };

        announce(self.notifier, &transition);
        if !self.is_finished() {
            self.pomodoro.start();
        }

        vec![
            TimerEvent::Transition(transition),
            TimerEvent::Pomodoro(self.pomodoro.snapshot()),
        ]
    }

    fn is_finished(&self) -> bool {
        self.cycle_limit
            .is_some_and(|limit| self.pomodoro.cycles() >= limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::notify::MockNotifier;
    use crate::features::timer::{Phase, BREAK_SECONDS, FOCUS_SECONDS};

    fn tick_n(run: &mut FocusRun<'_>, n: u64) -> Vec<TimerEvent> {
        (0..n).flat_map(|_| run.on_tick()).collect()
    }

    fn transitions(events: &[TimerEvent]) -> usize {
        events
            .iter()
            .filter(|e| matches!(e, TimerEvent::Transition(_)))
            .count()
    }

    #[test]
    fn test_reports_once_per_minute() {
        let notifier = MockNotifier::new();
        let mut run = FocusRun::new(&notifier, None);

        let events = tick_n(&mut run, 120);
        assert_eq!(events.len(), 2);
        assert!(matches!(
            &events[0],
            TimerEvent::Pomodoro(s) if s.remaining_seconds == FOCUS_SECONDS - 60
        ));
    }

    #[test]
    fn test_restarts_after_each_phase() {
        let mut notifier = MockNotifier::new();
        notifier.expect_notify().times(2).returning(|_, _| Ok(()));
        let mut run = FocusRun::new(&notifier, None);

        let events = tick_n(&mut run, FOCUS_SECONDS);
        assert_eq!(transitions(&events), 1);
        assert_eq!(run.pomodoro().phase(), Phase::Break);
        assert!(run.pomodoro().is_running());

        let events = tick_n(&mut run, BREAK_SECONDS);
        assert_eq!(transitions(&events), 1);
        assert_eq!(run.pomodoro().phase(), Phase::Focus);
        assert_eq!(run.pomodoro().cycles(), 1);
        assert!(!run.is_finished());
    }

    #[test]
    fn test_stops_at_cycle_limit() {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|title, _| title == "Pomodoro Complete!")
            .times(1)
            .returning(|_, _| Ok(()));
        let mut run = FocusRun::new(&notifier, Some(1));

        tick_n(&mut run, FOCUS_SECONDS);
        assert!(run.is_finished());
        assert!(!run.pomodoro().is_running());
    }
}
