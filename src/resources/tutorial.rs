//! Tutorial progress.
//!
//! The first stage opens with a short tutorial: the janitor must plunge a
//! clogged toilet and then mop a dirty fixture. Until the tutorial reaches
//! [`TutorialStep::Done`] the clock stands still and nobody comes in.

use bevy_ecs::prelude::Resource;
use log::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TutorialStep {
    Unclog,
    Clean,
    Done,
}

impl TutorialStep {
    pub fn hint(self) -> &'static str {
        match self {
            TutorialStep::Unclog => "Grab the plunger and unclog a toilet",
            TutorialStep::Clean => "Grab the mop and clean up the mess",
            TutorialStep::Done => "",
        }
    }
}

#[derive(Resource, Debug, Clone, Copy)]
pub struct Tutorial {
    step: TutorialStep,
}

impl Default for Tutorial {
    fn default() -> Self {
        Self::finished()
    }
}

impl Tutorial {
    pub fn started() -> Self {
        Tutorial {
            step: TutorialStep::Unclog,
        }
    }

    pub fn finished() -> Self {
        Tutorial {
            step: TutorialStep::Done,
        }
    }

    pub fn step(&self) -> TutorialStep {
        self.step
    }

    pub fn is_done(&self) -> bool {
        self.step == TutorialStep::Done
    }

    /// Complete the current step if it is `step`.
    pub fn complete(&mut self, step: TutorialStep) {
        if self.step != step {
            return;
        }
        self.step = match step {
            TutorialStep::Unclog => TutorialStep::Clean,
            TutorialStep::Clean | TutorialStep::Done => TutorialStep::Done,
        };
        info!("Tutorial step {:?} complete, next: {:?}", step, self.step);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_done() {
        assert!(Tutorial::default().is_done());
    }

    #[test]
    fn test_steps_advance_in_order() {
        let mut t = Tutorial::started();
        t.complete(TutorialStep::Clean);
        assert_eq!(t.step(), TutorialStep::Unclog);
        t.complete(TutorialStep::Unclog);
        assert_eq!(t.step(), TutorialStep::Clean);
        t.complete(TutorialStep::Clean);
        assert!(t.is_done());
    }
}
