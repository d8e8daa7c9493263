use yew::prelude::*;

use super::viewport::use_scroll_progress;

struct Activity {
    icon: &'static str,
    name: &'static str,
    category: &'static str,
    amount: &'static str,
    roundup: &'static str,
}

const ACTIVITIES: [Activity; 4] = [
    Activity { icon: "☕", name: "Starbucks Coffee", category: "FOOD & DRINK", amount: "CHF 8.45", roundup: "+0.55" },
    Activity { icon: "🚗", name: "Uber Ride", category: "TRANSPORT", amount: "CHF 14.20", roundup: "+0.80" },
    Activity { icon: "🛒", name: "Migros Super", category: "SHOPPING", amount: "CHF 127.30", roundup: "+0.70" },
    Activity { icon: "⛽", name: "Shell Gas", category: "TRANSPORT", amount: "CHF 89.23", roundup: "+0.77" },
];

const TABS: [(&str, bool); 4] = [("Home", true), ("Activity", false), ("Invest", false), ("Profile", false)];

/// Vertical drift in px: +60 at entry, -60 at exit.
pub fn parallax_offset(progress: f64) -> f64 {
    60.0 - 120.0 * progress.clamp(0.0, 1.0)
}

/// Y rotation in degrees: 8 at entry, flat in the middle, -8 at exit.
pub fn parallax_rotation(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    if p <= 0.5 {
        8.0 * (1.0 - p / 0.5)
    } else {
        -8.0 * ((p - 0.5) / 0.5)
    }
}

#[function_component(PhoneMockup)]
pub fn phone_mockup() -> Html {
    let container = use_node_ref();
    let progress = use_scroll_progress(container.clone());

    let phone_style = format!(
        "transform: translateY({:.1}px) rotateY({:.1}deg);",
        parallax_offset(progress),
        parallax_rotation(progress)
    );

    html! {
        <div class="phone-mockup" ref={container}>
            <style>
                {r#"
                    .phone-mockup { position: relative; perspective: 1000px; }
                    .phone-frame {
                        width: 340px;
                        margin: 0 auto;
                        padding: 8px;
                        border-radius: 2.75rem;
                        background: #f5f5f7;
                        border: 1px solid rgba(148, 163, 184, 0.5);
                        box-shadow: 0 32px 64px rgba(15, 23, 42, 0.2);
                        animation: phoneFloat 5s ease-in-out infinite;
                    }
                    .phone-screen {
                        position: relative;
                        aspect-ratio: 9 / 19.5;
                        overflow: hidden;
                        border-radius: 2.25rem;
                        background: #fff;
                        color: #0f172a;
                        padding: 3.5rem 1rem 4rem;
                    }
                    .phone-notch {
                        position: absolute;
                        top: 12px;
                        left: 50%;
                        transform: translateX(-50%);
                        width: 7rem;
                        height: 2rem;
                        border-radius: 999px;
                        background: #000;
                    }
                    .portfolio-card {
                        padding: 1rem;
                        border-radius: 1rem;
                        color: #fff;
                        background: linear-gradient(90deg, #2563eb, #1d4ed8);
                        margin-bottom: 1rem;
                    }
                    .portfolio-value { font-size: 1.75rem; font-weight: 700; margin: 0.25rem 0; }
                    .activity-row { display: flex; justify-content: space-between; margin-bottom: 0.75rem; }
                    .activity-roundup { color: #059669; font-size: 0.75rem; }
                    .phone-tabs {
                        position: absolute;
                        left: 0;
                        right: 0;
                        bottom: 0;
                        height: 4rem;
                        display: flex;
                        justify-content: space-around;
                        align-items: center;
                        border-top: 1px solid #f1f5f9;
                        font-size: 0.65rem;
                        color: #94a3b8;
                    }
                    .phone-tabs .active { color: #2563eb; font-weight: 600; }
                    @keyframes phoneFloat {
                        0%, 100% { translate: 0 0; }
                        50% { translate: 0 -8px; }
                    }
                "#}
            </style>
            <div class="phone-frame" style={phone_style}>
                <div class="phone-screen">
                    <div class="phone-notch"></div>
                    <h2>{"Hi, Alex"}</h2>
                    <p class="phone-caption">{"Your wealth is growing automatically"}</p>
                    <div class="portfolio-card">
                        <span>{"PORTFOLIO VALUE · 12.4%"}</span>
                        <p class="portfolio-value">{"CHF 2'847.32"}</p>
                        <span>{"65% to goal"}</span>
                    </div>
                    <p><strong>{"Recent Activity"}</strong></p>
                    {
                        ACTIVITIES.iter().map(|activity| html! {
                            <div class="activity-row" key={activity.name}>
                                <div>
                                    <span>{activity.icon}{" "}{activity.name}</span>
                                    <br/>
                                    <small>{activity.category}</small>
                                </div>
                                <div>
                                    <span>{activity.amount}</span>
                                    <br/>
                                    <span class="activity-roundup">{activity.roundup}</span>
                                </div>
                            </div>
                        }).collect::<Html>()
                    }
                    <div class="phone-tabs">
                        {
                            TABS.iter().map(|(label, active)| html! {
                                <span key={*label} class={classes!(active.then(|| "active"))}>{*label}</span>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>
        </div>
    }
}
