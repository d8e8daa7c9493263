/// Questions and answers the wealth coach demo plays back, in order.
pub const CONVERSATION: [(&str, &str); 2] = [
    (
        "What if I invested 5 CHF daily?",
        "Assuming a 7.5% annual return tracking the S&P 500 index: In 5 years: CHF 10,600. In 10 years: CHF 25'800.",
    ),
    (
        "How much could I save on coffee?",
        "Assuming a 7.5% annual return in the S&P 500 index: Skip 2 coffees/week = CHF 416/year invested = CHF 5'885 in 10 years.",
    ),
];

pub const ASK_DELAY_MS: u32 = 500;
pub const TYPING_DELAY_MS: u32 = 1000;
pub const ANSWER_DELAY_MS: u32 = 1500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepAction {
    Ask(&'static str),
    StartTyping,
    Answer(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub delay_ms: u32,
    pub action: StepAction,
}

pub const STEP_COUNT: usize = CONVERSATION.len() * 3;

pub fn steps() -> [Step; STEP_COUNT] {
    let [(q1, a1), (q2, a2)] = CONVERSATION;
    [
        Step { delay_ms: ASK_DELAY_MS, action: StepAction::Ask(q1) },
        Step { delay_ms: TYPING_DELAY_MS, action: StepAction::StartTyping },
        Step { delay_ms: ANSWER_DELAY_MS, action: StepAction::Answer(a1) },
        Step { delay_ms: ASK_DELAY_MS, action: StepAction::Ask(q2) },
        Step { delay_ms: TYPING_DELAY_MS, action: StepAction::StartTyping },
        Step { delay_ms: ANSWER_DELAY_MS, action: StepAction::Answer(a2) },
    ]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    Currency,
}

/// Splits text around each literal `CHF` so the view can emphasise it.
pub fn highlight_currency(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    for (i, part) in text.split("CHF").enumerate() {
        if i > 0 {
            segments.push(Segment::Currency);
        }
        if !part.is_empty() {
            segments.push(Segment::Plain(part));
        }
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_delays_total_six_seconds() {
        let delays: Vec<u32> = steps().iter().map(|step| step.delay_ms).collect();
        assert_eq!(delays, vec![500, 1000, 1500, 500, 1000, 1500]);
        assert_eq!(delays.iter().sum::<u32>(), 6000);
    }

    #[test]
    fn currency_is_split_out() {
        assert_eq!(
            highlight_currency("Save CHF 416/year = CHF 5'885"),
            vec![
                Segment::Plain("Save "),
                Segment::Currency,
                Segment::Plain(" 416/year = "),
                Segment::Currency,
                Segment::Plain(" 5'885"),
            ]
        );
        assert_eq!(highlight_currency("no money here"), vec![Segment::Plain("no money here")]);
        assert_eq!(highlight_currency("CHF"), vec![Segment::Currency]);
    }
}
