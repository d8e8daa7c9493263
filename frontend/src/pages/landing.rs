use yew::prelude::*;

use crate::components::phone_mockup::PhoneMockup;
use crate::components::signup_form::EmailCaptureForm;
use crate::components::theme::ThemeToggle;
use crate::pages::features::Features;
use crate::pages::footer::Footer;
use crate::pages::wealth_coach::WealthCoach;

/// Brings the section with the given id into view. Missing ids are ignored.
pub fn scroll_to_section(id: &str) {
    if let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    {
        element.scroll_into_view();
    }
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let to_top = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_top();
    });
    let to_features = Callback::from(|_: MouseEvent| scroll_to_section("features"));
    let to_coach = Callback::from(|_: MouseEvent| scroll_to_section("ai-coach"));

    html! {
        <section class="hero">
            <style>
                {r#"
                    .hero { position: relative; min-height: 100vh; overflow: hidden; padding: 0 1.5rem 5rem; }
                    .hero-orb {
                        position: absolute;
                        top: 5rem;
                        right: 25%;
                        width: 600px;
                        height: 600px;
                        border-radius: 50%;
                        filter: blur(64px);
                        background: linear-gradient(135deg, rgba(59,130,246,0.2), rgba(168,85,247,0.15), rgba(20,184,166,0.2));
                        pointer-events: none;
                    }
                    .hero-nav {
                        position: relative;
                        z-index: 20;
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 1.5rem 0;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .hero-nav img { height: 3rem; }
                    .nav-links { display: flex; gap: 2rem; }
                    .nav-links button {
                        border: none;
                        background: none;
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: var(--muted);
                        cursor: pointer;
                    }
                    .nav-links button:hover { color: var(--text); }
                    .theme-toggle {
                        position: relative;
                        width: 2.5rem;
                        height: 2.5rem;
                        border: none;
                        border-radius: 0.75rem;
                        background: var(--input);
                        cursor: pointer;
                    }
                    .theme-icon { position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; transition: all 0.3s ease; }
                    .theme-icon.sun { color: #f59e0b; }
                    .theme-icon.moon { color: #60a5fa; opacity: 0; transform: rotate(-180deg); }
                    .theme-toggle.is-dark .sun { opacity: 0; transform: rotate(180deg); }
                    .theme-toggle.is-dark .moon { opacity: 1; transform: none; }
                    .hero-grid {
                        position: relative;
                        z-index: 10;
                        max-width: 80rem;
                        margin: 0 auto;
                        padding-top: 4rem;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(340px, 1fr));
                        gap: 4rem;
                        align-items: center;
                    }
                    .launch-badge {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.5rem 1rem;
                        border-radius: 999px;
                        border: 1px solid rgba(59, 130, 246, 0.2);
                        background: rgba(59, 130, 246, 0.08);
                        color: #1d4ed8;
                        font-size: 0.875rem;
                    }
                    .hero h1 { font-size: clamp(2.5rem, 6vw, 4.5rem); line-height: 1.1; letter-spacing: -0.04em; }
                    .hero-copy p { font-size: 1.125rem; color: var(--muted); max-width: 32rem; }
                    .early-adopters { display: flex; align-items: center; gap: 0.5rem; font-size: 0.875rem; color: var(--muted); }
                    .avatar-stack span {
                        display: inline-block;
                        width: 2rem;
                        height: 2rem;
                        margin-left: -0.5rem;
                        border-radius: 50%;
                        border: 2px solid var(--surface);
                        background: linear-gradient(135deg, #60a5fa, #2563eb);
                    }
                    #waitlist { max-width: 28rem; margin-top: 2rem; }
                    @media (max-width: 768px) { .nav-links { display: none; } }
                "#}
            </style>
            <div class="hero-orb"></div>
            <nav class="hero-nav">
                <a href="#" onclick={to_top}>
                    <img src="/logo.png" alt="SpareVest" />
                </a>
                <div class="nav-links">
                    <button onclick={to_features}>{"Features"}</button>
                    <button onclick={to_coach}>{"AI Coach"}</button>
                </div>
                <ThemeToggle />
            </nav>
            <div class="hero-grid">
                <div class="hero-copy">
                    <span class="launch-badge">{"● Launching soon in Switzerland"}</span>
                    <h1>
                        {"Grow your wealth "}
                        <span class="gradient-text">{"automatically"}</span>
                    </h1>
                    <p>
                        {"Be among the first Swiss investors to build wealth on autopilot."}
                        <br />
                        <strong>{"Waitinglist members receive updates and exclusive early benefits."}</strong>
                    </p>
                    <div class="early-adopters">
                        <span class="avatar-stack">
                            <span></span><span></span><span></span><span></span>
                        </span>
                        {"Early adopters joining"}
                    </div>
                    <div id="waitlist">
                        <EmailCaptureForm />
                    </div>
                </div>
                <PhoneMockup />
            </div>
        </section>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            scroll_to_top();
            || ()
        },
        (),
    );

    html! {
        <main class="landing-page">
            <style>
                {r#"
                    html { scroll-behavior: smooth; }
                    :root {
                        --surface: #ffffff;
                        --band: #f8fafc;
                        --input: #f1f5f9;
                        --border: #e2e8f0;
                        --text: #0f172a;
                        --muted: #475569;
                    }
                    :root.dark {
                        --surface: #1e293b;
                        --band: #0f172a;
                        --input: #334155;
                        --border: #334155;
                        --text: #f8fafc;
                        --muted: #94a3b8;
                    }
                    body {
                        margin: 0;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        background: var(--surface);
                        color: var(--text);
                        transition: background-color 0.3s ease, color 0.3s ease;
                    }
                    .gradient-text {
                        background: linear-gradient(90deg, #2563eb, #14b8a6);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                "#}
            </style>
            <Hero />
            <WealthCoach />
            <Features />
            <Footer />
        </main>
    }
}
