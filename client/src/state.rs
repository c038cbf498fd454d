use std::time::{Duration, Instant};

use libgame::{AutoAdvance, GameError, Position, Session, SessionEvent};
use log::{debug, warn};

/// One user intent, already translated from raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Toggle(Position),
    Step,
    Clear,
    Save,
    Load,
    ToggleAuto,
    Slower,
    Faster,
}

/// The last thing that happened, shown in the window title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Session(SessionEvent),
    AutoStep,
    AutoToggled { enabled: bool, interval: Duration },
    IntervalChanged(Duration),
}

pub struct State {
    pub session: Session,
    pub auto: AutoAdvance,
    feedback: Option<Feedback>,
    title_dirty: bool,
}

impl State {
    pub fn new(session: Session, auto: AutoAdvance) -> Self {
        Self {
            session,
            auto,
            feedback: None,
            title_dirty: false,
        }
    }

    pub fn apply(&mut self, command: Command) {
        let feedback = match command {
            Command::Toggle(position) => self.session.edit_toggle(position).map(Feedback::Session),
            Command::Step => Ok(Feedback::Session(self.session.step())),
            Command::Clear => Ok(Feedback::Session(self.session.clear())),
            Command::Save => Ok(Feedback::Session(self.session.save())),
            Command::Load => self.session.load().map(Feedback::Session),
            Command::ToggleAuto => Ok(Feedback::AutoToggled {
                enabled: self.auto.toggle(),
                interval: self.auto.interval(),
            }),
            Command::Slower => Ok(Feedback::IntervalChanged(self.auto.increase_interval())),
            Command::Faster => Ok(Feedback::IntervalChanged(self.auto.decrease_interval())),
        };

        match feedback {
            Ok(feedback) => self.set_feedback(feedback),
            // Clicking off the board and loading with nothing saved are both no-ops.
            Err(e @ (GameError::OutOfBounds { .. } | GameError::NoSavedState)) => {
                debug!("ignored {command:?}: {e}")
            }
            Err(e) => warn!("{command:?} failed: {e}"),
        }
    }

    /// Steps the session if auto-advance is due.
    pub fn tick(&mut self, now: Instant) {
        if self.auto.poll(now) {
            self.session.step();
            self.set_feedback(Feedback::AutoStep);
        }
    }

    /// The title, if it changed since the last call.
    pub fn take_title(&mut self) -> Option<String> {
        if !self.title_dirty {
            return None;
        }

        self.title_dirty = false;
        Some(self.title())
    }

    pub fn title(&self) -> String {
        let generation = self.session.generation();

        let suffix = match self.feedback {
            None | Some(Feedback::Session(SessionEvent::Stepped { .. })) => String::new(),
            Some(Feedback::Session(SessionEvent::Edited { .. })) => " [EDITED]".to_owned(),
            Some(Feedback::Session(SessionEvent::Cleared)) => " [CLEARED]".to_owned(),
            Some(Feedback::Session(SessionEvent::Saved { .. })) => " [SAVED]".to_owned(),
            Some(Feedback::Session(SessionEvent::Loaded { .. })) => " [LOADED]".to_owned(),
            Some(Feedback::AutoStep) => " [AUTO]".to_owned(),
            Some(Feedback::AutoToggled { enabled: true, interval }) => {
                format!(" [AUTO ON {:.2}s]", interval.as_secs_f64())
            }
            Some(Feedback::AutoToggled { enabled: false, .. }) => " [AUTO OFF]".to_owned(),
            Some(Feedback::IntervalChanged(interval)) => {
                format!(" [INTERVAL {:.2}s]", interval.as_secs_f64())
            }
        };

        format!("Game of Life - generation {generation}{suffix}")
    }

    fn set_feedback(&mut self, feedback: Feedback) {
        self.feedback = Some(feedback);
        self.title_dirty = true;
    }
}
