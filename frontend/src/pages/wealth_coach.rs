use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::viewport::{use_in_view, SECTION_MARGIN_PX};
use crate::reveal::script::{highlight_currency, Segment};
use crate::reveal::sequencer::{ChatMessage, RevealAction, RevealSequencer, Speaker};

const COACH_FEATURES: [&str; 4] = [
    "Personalized investment scenarios",
    "Spending pattern analysis",
    "Smart saving recommendations",
    "24/7 financial guidance",
];

fn render_message(message: &ChatMessage) -> Html {
    let (row_class, bubble_class) = match message.speaker {
        Speaker::User => ("chat-row user", "chat-bubble user"),
        Speaker::Assistant => ("chat-row assistant", "chat-bubble assistant"),
    };
    let body = if message.pending {
        html! {
            <span class="typing">
                <span></span><span></span><span></span>
            </span>
        }
    } else {
        highlight_currency(&message.text)
            .into_iter()
            .map(|segment| match segment {
                Segment::Plain(text) => html! { <>{text}</> },
                Segment::Currency => html! { <span class="currency">{"CHF"}</span> },
            })
            .collect::<Html>()
    };

    html! {
        <div class={row_class}>
            if message.speaker == Speaker::Assistant {
                <div class="chat-avatar">{"🤖"}</div>
            }
            <div class={bubble_class}>{body}</div>
        </div>
    }
}

#[function_component(WealthCoach)]
pub fn wealth_coach() -> Html {
    let section = use_node_ref();
    let visible = use_in_view(section.clone(), SECTION_MARGIN_PX, false);
    let sequencer = use_reducer(RevealSequencer::default);

    {
        let dispatcher = sequencer.dispatcher();
        use_effect_with_deps(
            move |visible| {
                dispatcher.dispatch(RevealAction::Visibility(*visible));
                || ()
            },
            visible,
        );
    }

    // One timer per step. Dropping the Timeout cancels it, so nothing fires
    // after the section is torn down.
    {
        let dispatcher = sequencer.dispatcher();
        use_effect_with_deps(
            move |delay: &Option<(usize, u32)>| {
                let timeout = delay.map(|(_, ms)| {
                    Timeout::new(ms, move || dispatcher.dispatch(RevealAction::Advance))
                });
                move || drop(timeout)
            },
            sequencer.next_delay().map(|ms| (sequencer.cursor(), ms)),
        );
    }

    let revealed = sequencer.has_started();

    html! {
        <section id="ai-coach" class="coach-section" ref={section}>
            <style>
                {r#"
                    .coach-section { padding: 6rem 1.5rem; }
                    .coach-grid {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                        gap: 4rem;
                        align-items: center;
                    }
                    .coach-copy, .chat-card { opacity: 0; transform: translateX(-30px); transition: all 0.7s ease; }
                    .chat-card { transform: translateX(30px); transition-delay: 0.2s; }
                    .revealed .coach-copy, .revealed .chat-card { opacity: 1; transform: none; }
                    .coach-label { text-transform: uppercase; letter-spacing: 0.15em; font-size: 0.875rem; color: var(--muted); }
                    .coach-features li { list-style: none; margin: 0.75rem 0; }
                    .coach-features li::before { content: "●"; color: #14b8a6; margin-right: 0.75rem; }
                    .chat-card { border-radius: 1.5rem; overflow: hidden; background: var(--surface); box-shadow: 0 24px 48px rgba(15, 23, 42, 0.12); }
                    .chat-header { padding: 1rem 1.5rem; color: #fff; background: linear-gradient(90deg, #2563eb, #1d4ed8); }
                    .chat-log { padding: 1.5rem; min-height: 320px; max-height: 400px; overflow-y: auto; }
                    .chat-empty { color: #94a3b8; font-size: 0.875rem; text-align: center; padding-top: 8rem; }
                    .chat-row { display: flex; margin-bottom: 1rem; animation: chatIn 0.3s ease-out; }
                    .chat-row.user { justify-content: flex-end; }
                    .chat-avatar { margin-right: 0.5rem; }
                    .chat-bubble { max-width: 80%; padding: 0.75rem 1rem; border-radius: 1rem; font-size: 0.875rem; line-height: 1.6; }
                    .chat-bubble.user { background: #2563eb; color: #fff; border-bottom-right-radius: 0.25rem; }
                    .chat-bubble.assistant { background: var(--input); color: var(--text); border-bottom-left-radius: 0.25rem; }
                    .currency { font-weight: 700; color: #059669; }
                    .typing span {
                        display: inline-block;
                        width: 8px;
                        height: 8px;
                        margin-right: 4px;
                        border-radius: 50%;
                        background: #94a3b8;
                        animation: typingBounce 0.9s infinite;
                    }
                    .typing span:nth-child(2) { animation-delay: 150ms; }
                    .typing span:nth-child(3) { animation-delay: 300ms; }
                    .chat-input { padding: 1rem 1.5rem; border-top: 1px solid var(--border); color: #94a3b8; }
                    @keyframes chatIn { from { opacity: 0; transform: translateY(10px); } to { opacity: 1; transform: none; } }
                    @keyframes typingBounce { 0%, 100% { transform: none; } 50% { transform: translateY(-4px); } }
                "#}
            </style>
            <div class={classes!("coach-grid", revealed.then(|| "revealed"))}>
                <div class="coach-copy">
                    <span class="coach-label">{"✦ AI-Powered"}</span>
                    <h2>{"Meet Your "}<span class="gradient-text">{"AI Wealth Coach"}</span></h2>
                    <h3>{"Ask. Learn. Optimize."}</h3>
                    <p>
                        {"Our AI analyzes your spending and answers questions like \"How much could I save if I invested my coffee money?\" Get personalized insights to accelerate your wealth."}
                    </p>
                    <ul class="coach-features">
                        { for COACH_FEATURES.iter().map(|feature| html! { <li key={*feature}>{*feature}</li> }) }
                    </ul>
                </div>
                <div class="chat-card">
                    <div class="chat-header">
                        <strong>{"SpareVest AI"}</strong>
                        <div>{"Always here to help · Online"}</div>
                    </div>
                    <div class="chat-log">
                        if sequencer.messages().is_empty() {
                            <div class="chat-empty">{"Start scrolling to see the conversation..."}</div>
                        }
                        { for sequencer.messages().iter().map(render_message) }
                    </div>
                    <div class="chat-input">{"Type your question..."}</div>
                </div>
            </div>
        </section>
    }
}
