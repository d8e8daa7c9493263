use yew::prelude::*;

use crate::components::modal::Modal;
use crate::components::viewport::{use_in_view, SECTION_MARGIN_PX};

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub accent: &'static str,
}

pub static FEATURES: [Feature; 3] = [
    Feature {
        icon: "🪙",
        title: "Automatic Roundups",
        description: "Every purchase gets rounded up to the nearest franc. The spare change goes straight into your investment portfolio.",
        accent: "blue",
    },
    Feature {
        icon: "🛡",
        title: "Swiss Security",
        description: "Bank-grade encryption, two-factor authentication, and Swiss data protection laws keep your wealth secure.",
        accent: "emerald",
    },
    Feature {
        icon: "📈",
        title: "Portfolio Growth",
        description: "Expert-curated ETF portfolios designed for long-term growth. Diversified across global markets.",
        accent: "purple",
    },
];

#[function_component(Features)]
pub fn features() -> Html {
    let section = use_node_ref();
    let revealed = use_in_view(section.clone(), SECTION_MARGIN_PX, true);
    let selected = use_state(|| None::<usize>);

    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_: ()| selected.set(None))
    };

    let open_feature = (*selected).and_then(|index| FEATURES.get(index));

    html! {
        <section id="features" class={classes!("features-section", revealed.then(|| "revealed"))} ref={section}>
            <style>
                {r#"
                    .features-section { padding: 6rem 1.5rem; background: var(--band); }
                    .features-header { max-width: 48rem; margin: 0 auto 4rem; text-align: center; }
                    .features-grid {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 2rem;
                    }
                    .feature-card {
                        position: relative;
                        padding: 2rem;
                        border-radius: 1rem;
                        border: 1px solid var(--border);
                        opacity: 0;
                        transform: translateY(40px);
                        transition: opacity 0.6s ease, transform 0.6s ease, box-shadow 0.3s ease;
                    }
                    .revealed .feature-card { opacity: 1; transform: none; }
                    .feature-card:hover { transform: translateY(-4px); box-shadow: 0 20px 40px rgba(15, 23, 42, 0.08); }
                    .feature-card.blue { background: rgba(59, 130, 246, 0.08); }
                    .feature-card.emerald { background: rgba(16, 185, 129, 0.08); }
                    .feature-card.purple { background: rgba(139, 92, 246, 0.08); }
                    .feature-icon { font-size: 2rem; margin-bottom: 1.5rem; }
                    .learn-more {
                        border: none;
                        background: none;
                        padding: 0;
                        font-weight: 600;
                        color: var(--muted);
                        cursor: pointer;
                    }
                    .learn-more:hover { color: #2563eb; }
                    .features-cta { margin-top: 4rem; text-align: center; }
                    .features-cta a {
                        display: inline-block;
                        padding: 1rem 2rem;
                        border-radius: 999px;
                        background: #0f172a;
                        color: #fff;
                        font-weight: 600;
                        text-decoration: none;
                    }
                "#}
            </style>
            <div class="features-header">
                <span class="coach-label">{"Features"}</span>
                <h2>{"Simple. Smart. "}<span class="gradient-text">{"Swiss."}</span></h2>
                <p>{"Everything you need to grow your wealth, designed with Swiss precision and simplicity."}</p>
            </div>
            <div class="features-grid">
                {
                    FEATURES.iter().enumerate().map(|(index, feature)| {
                        let onclick = {
                            let selected = selected.clone();
                            Callback::from(move |_: MouseEvent| selected.set(Some(index)))
                        };
                        html! {
                            <div
                                key={feature.title}
                                class={classes!("feature-card", feature.accent)}
                                style={format!("transition-delay: {}ms;", index * 150)}
                            >
                                <div class="feature-icon">{feature.icon}</div>
                                <h3>{feature.title}</h3>
                                <p>{feature.description}</p>
                                <button class="learn-more" {onclick}>{"Learn more →"}</button>
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>
            <div class="features-cta">
                <a href="#waitlist">{"Join the waitlist →"}</a>
            </div>
            <Modal
                open={open_feature.is_some()}
                on_close={on_close}
                title={open_feature.map(|f| f.title).unwrap_or_default()}
            >
                if let Some(feature) = open_feature {
                    <div class="feature-icon">{feature.icon}</div>
                    <p>{feature.description}</p>
                }
            </Modal>
        </section>
    }
}
