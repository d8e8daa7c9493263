use std::rc::Rc;

use log::info;
use yew::Reducible;

use super::script::{self, Step, StepAction};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub text: String,
    /// Still "typing": rendered as an indicator, text is empty.
    pub pending: bool,
}

/// Step-index state machine behind the wealth coach chat demo.
///
/// Arms on the first visible signal and never again. The host schedules one
/// timer per step using `next_delay` and calls `advance` when it fires.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RevealSequencer {
    has_started: bool,
    cursor: usize,
    messages: Vec<ChatMessage>,
}

impl RevealSequencer {
    pub fn has_started(&self) -> bool {
        self.has_started
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Index of the next step to run.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= script::STEP_COUNT
    }

    /// Returns true only for the call that arms the sequence.
    pub fn observe_visibility(&mut self, visible: bool) -> bool {
        if !visible || self.has_started {
            return false;
        }
        info!("Wealth coach section visible, starting conversation");
        self.has_started = true;
        true
    }

    /// Delay before the next step, or `None` when idle or done.
    pub fn next_delay(&self) -> Option<u32> {
        if !self.has_started {
            return None;
        }
        self.next_step().map(|step| step.delay_ms)
    }

    pub fn advance(&mut self) -> bool {
        if !self.has_started {
            return false;
        }
        let Some(step) = self.next_step() else {
            return false;
        };
        match step.action {
            StepAction::Ask(text) => self.messages.push(ChatMessage {
                speaker: Speaker::User,
                text: text.to_string(),
                pending: false,
            }),
            StepAction::StartTyping => self.messages.push(ChatMessage {
                speaker: Speaker::Assistant,
                text: String::new(),
                pending: true,
            }),
            StepAction::Answer(text) => {
                if let Some(last) = self.messages.last_mut().filter(|m| m.pending) {
                    last.text = text.to_string();
                    last.pending = false;
                }
            }
        }
        self.cursor += 1;
        if self.is_finished() {
            info!("Wealth coach conversation finished");
        }
        true
    }

    fn next_step(&self) -> Option<Step> {
        script::steps().get(self.cursor).copied()
    }
}

pub enum RevealAction {
    Visibility(bool),
    Advance,
}

impl Reducible for RevealSequencer {
    type Action = RevealAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            RevealAction::Visibility(visible) => next.observe_visibility(visible),
            RevealAction::Advance => next.advance(),
        };
        if changed {
            next.into()
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::script::CONVERSATION;

    /// Fires the pending step, returning the clock after it ran.
    fn tick(sequencer: &mut RevealSequencer, clock: u32) -> u32 {
        let delay = sequencer.next_delay().expect("a step is scheduled");
        assert!(sequencer.advance());
        clock + delay
    }

    #[test]
    fn nothing_is_scheduled_before_visibility() {
        let mut sequencer = RevealSequencer::default();
        assert_eq!(sequencer.next_delay(), None);
        assert!(!sequencer.advance());
        assert!(!sequencer.observe_visibility(false));
        assert!(sequencer.messages().is_empty());
    }

    #[test]
    fn plays_the_scripted_conversation_on_schedule() {
        let mut sequencer = RevealSequencer::default();
        assert!(sequencer.observe_visibility(true));

        let mut clock = tick(&mut sequencer, 0);
        assert_eq!(clock, 500);
        assert_eq!(sequencer.messages().len(), 1);
        assert_eq!(sequencer.messages()[0].speaker, Speaker::User);
        assert_eq!(sequencer.messages()[0].text, CONVERSATION[0].0);

        clock = tick(&mut sequencer, clock);
        assert_eq!(clock, 1500);
        let typing = &sequencer.messages()[1];
        assert_eq!((typing.speaker, typing.pending, typing.text.as_str()), (Speaker::Assistant, true, ""));

        clock = tick(&mut sequencer, clock);
        assert_eq!(clock, 3000);
        assert_eq!(sequencer.messages().len(), 2);
        assert!(!sequencer.messages()[1].pending);
        assert_eq!(sequencer.messages()[1].text, CONVERSATION[0].1);

        clock = tick(&mut sequencer, clock);
        assert_eq!(clock, 3500);
        assert_eq!(sequencer.messages()[2].text, CONVERSATION[1].0);

        clock = tick(&mut sequencer, clock);
        assert_eq!(clock, 4500);
        assert!(sequencer.messages()[3].pending);

        clock = tick(&mut sequencer, clock);
        assert_eq!(clock, 6000);
        assert_eq!(sequencer.messages()[3].text, CONVERSATION[1].1);

        assert!(sequencer.is_finished());
        assert_eq!(sequencer.next_delay(), None);
        assert!(!sequencer.advance());
        let speakers: Vec<Speaker> = sequencer.messages().iter().map(|m| m.speaker).collect();
        assert_eq!(speakers, vec![Speaker::User, Speaker::Assistant, Speaker::User, Speaker::Assistant]);
        assert!(sequencer.messages().iter().all(|m| !m.pending));
    }

    #[test]
    fn later_visibility_changes_do_not_replay() {
        let mut sequencer = RevealSequencer::default();
        assert!(sequencer.observe_visibility(true));
        sequencer.advance();
        sequencer.advance();

        assert!(!sequencer.observe_visibility(false));
        assert!(!sequencer.observe_visibility(true));
        assert_eq!(sequencer.cursor(), 2);
        assert_eq!(sequencer.messages().len(), 2);
    }

    #[test]
    fn reducer_keeps_state_identity_for_ignored_signals() {
        let armed = Rc::new(RevealSequencer::default()).reduce(RevealAction::Visibility(true));
        let again = armed.clone().reduce(RevealAction::Visibility(true));
        assert!(Rc::ptr_eq(&armed, &again));

        let advanced = again.reduce(RevealAction::Advance);
        assert_eq!(advanced.messages().len(), 1);
    }
}
