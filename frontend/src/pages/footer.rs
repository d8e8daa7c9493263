use chrono::{Datelike, Utc};
use yew::prelude::*;

use super::landing::{scroll_to_section, scroll_to_top};

const SOCIAL_LINKS: [(&str, &str); 3] = [("Twitter", "𝕏"), ("LinkedIn", "in"), ("GitHub", "⌥")];
const LEGAL_LINKS: [&str; 4] = ["Privacy", "Terms", "Cookies", "Licenses"];

fn section_link(id: &'static str, label: &'static str) -> Html {
    let onclick = Callback::from(move |_: MouseEvent| scroll_to_section(id));
    html! {
        <li><button class="footer-link" {onclick}>{label}</button></li>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().year();
    let to_top = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_top();
    });

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer { border-top: 1px solid var(--border); padding: 4rem 1.5rem 0; }
                    .footer-grid {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 2fr 1fr 1fr 1fr;
                        gap: 3rem;
                    }
                    .footer-grid h4 { text-transform: uppercase; letter-spacing: 0.08em; font-size: 0.875rem; }
                    .footer-grid ul { list-style: none; padding: 0; }
                    .footer-grid li { margin-bottom: 0.75rem; }
                    .footer-link, .footer-grid a {
                        border: none;
                        background: none;
                        padding: 0;
                        font-size: 0.875rem;
                        color: var(--muted);
                        text-decoration: none;
                        cursor: pointer;
                    }
                    .footer-link:hover, .footer-grid a:hover { color: #2563eb; }
                    .social-links { display: flex; gap: 0.75rem; }
                    .social-links a {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 0.75rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: var(--input);
                    }
                    .footer-bottom {
                        max-width: 80rem;
                        margin: 3rem auto 0;
                        padding: 1.5rem 0;
                        display: flex;
                        justify-content: space-between;
                        flex-wrap: wrap;
                        gap: 1rem;
                        border-top: 1px solid var(--border);
                        font-size: 0.875rem;
                        color: var(--muted);
                    }
                    @media (max-width: 900px) {
                        .footer-grid { grid-template-columns: 1fr 1fr; }
                    }
                "#}
            </style>
            <div class="footer-grid">
                <div class="footer-brand">
                    <a href="#" onclick={to_top}>
                        <img src="/logo.png" alt="SpareVest" class="footer-logo" />
                    </a>
                    <p>{"Smart money management for Swiss investors. Grow your wealth automatically with AI-powered insights."}</p>
                    <div class="social-links">
                        {
                            SOCIAL_LINKS.iter().map(|(label, glyph)| html! {
                                <a key={*label} href="#" aria-label={*label}>{*glyph}</a>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
                <div>
                    <h4>{"Product"}</h4>
                    <ul>
                        { section_link("features", "Features") }
                        { section_link("ai-coach", "Meet your AI Wealth Coach") }
                    </ul>
                </div>
                <div>
                    <h4>{"Company"}</h4>
                    <ul>
                        { section_link("about", "About") }
                    </ul>
                </div>
                <div>
                    <h4>{"Legal"}</h4>
                    <ul>
                        {
                            LEGAL_LINKS.iter().map(|link| html! {
                                <li key={*link}><a href="#">{*link}</a></li>
                            }).collect::<Html>()
                        }
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{format!("© {} SpareVest. All rights reserved.", year)}</p>
                <p>{"Made with precision in Switzerland 🇨🇭"}</p>
            </div>
        </footer>
    }
}
