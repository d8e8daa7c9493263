use std::rc::Rc;

use chrono::Utc;
use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::waitlist::controller::{SignupAction, SignupController, SubmitStatus};
use crate::waitlist::form::Field;
use crate::waitlist::sink::{RestSink, SignupSink};

struct InputSpec {
    field: Field,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    class: &'static str,
}

const INPUTS: [InputSpec; 4] = [
    InputSpec { field: Field::FirstName, label: "First Name", input_type: "text", placeholder: "John", class: "half" },
    InputSpec { field: Field::LastName, label: "Last Name", input_type: "text", placeholder: "Doe", class: "half" },
    InputSpec { field: Field::Age, label: "Age", input_type: "number", placeholder: "25", class: "third" },
    InputSpec { field: Field::Email, label: "Email", input_type: "email", placeholder: "john@example.com", class: "two-thirds" },
];

#[function_component(EmailCaptureForm)]
pub fn email_capture_form() -> Html {
    let state = use_reducer(SignupController::default);
    let sink = use_memo(|_| RestSink::from_config(), ());

    // Hand each accepted submission to the sink; the reducer refuses
    // everything else until it settles.
    {
        let dispatcher = state.dispatcher();
        let sink: Rc<RestSink> = sink.clone();
        use_effect_with_deps(
            move |in_flight| {
                if let Some(request) = in_flight.clone() {
                    info!("Submitting waitlist signup");
                    spawn_local(async move {
                        let outcome = sink.insert(request).await;
                        dispatcher.dispatch(SignupAction::Settled(outcome));
                    });
                }
                || ()
            },
            state.in_flight().cloned(),
        );
    }

    let oninput = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(field) = Field::from_name(&input.name()) {
                dispatcher.dispatch(SignupAction::Edit(field, input.value()));
            }
        })
    };

    let onsubmit = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            dispatcher.dispatch(SignupAction::Submit(Utc::now()));
        })
    };

    if state.status() == SubmitStatus::Success {
        return html! {
            <div class="signup-card signup-success">
                <div class="success-badge">{"✓"}</div>
                <h3>{"Welcome to SpareVest!"}</h3>
                <p>{"We'll notify you at launch."}</p>
            </div>
        };
    }

    let submitting = state.status() == SubmitStatus::Submitting;

    html! {
        <form class="signup-card" {onsubmit} novalidate=true>
            <style>
                {r#"
                    .signup-card {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        padding: 2rem;
                        border-radius: 16px;
                        background: var(--surface);
                        box-shadow: 0 16px 40px rgba(15, 23, 42, 0.12);
                    }
                    .signup-field { display: flex; flex-direction: column; gap: 0.35rem; }
                    .signup-field.half { flex: 1 1 calc(50% - 0.5rem); }
                    .signup-field.third { flex: 1 1 calc(33% - 0.5rem); }
                    .signup-field.two-thirds { flex: 2 1 calc(66% - 0.5rem); }
                    .signup-field label { font-size: 0.875rem; font-weight: 500; color: var(--muted); }
                    .signup-field input {
                        height: 3rem;
                        padding: 0 1rem;
                        border-radius: 12px;
                        border: 1px solid var(--border);
                        background: var(--input);
                        color: var(--text);
                    }
                    .signup-field input.invalid { border-color: #fca5a5; }
                    .field-error { font-size: 0.75rem; color: #ef4444; margin: 0; }
                    .submit-error {
                        flex-basis: 100%;
                        padding: 0.75rem;
                        border-radius: 12px;
                        border: 1px solid #fecaca;
                        background: rgba(254, 226, 226, 0.5);
                        color: #dc2626;
                        font-size: 0.875rem;
                    }
                    .signup-submit {
                        flex-basis: 100%;
                        height: 3.5rem;
                        border: none;
                        border-radius: 999px;
                        background: linear-gradient(90deg, #2563eb, #1d4ed8);
                        color: #fff;
                        font-weight: 600;
                        cursor: pointer;
                    }
                    .signup-submit:disabled { opacity: 0.7; cursor: not-allowed; }
                    .signup-note { flex-basis: 100%; text-align: center; font-size: 0.75rem; color: var(--muted); }
                    .signup-success { flex-direction: column; align-items: center; text-align: center; }
                    .success-badge {
                        width: 4rem;
                        height: 4rem;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #fff;
                        font-size: 2rem;
                        background: linear-gradient(90deg, #10b981, #14b8a6);
                    }
                "#}
            </style>
            {
                INPUTS.iter().map(|spec| {
                    let error = state.errors().get(spec.field);
                    html! {
                        <div class={classes!("signup-field", spec.class)} key={spec.field.name()}>
                            <label for={spec.field.name()}>{spec.label}</label>
                            <input
                                id={spec.field.name()}
                                name={spec.field.name()}
                                type={spec.input_type}
                                placeholder={spec.placeholder}
                                value={state.form().value(spec.field).to_string()}
                                oninput={oninput.clone()}
                                disabled={submitting}
                                class={classes!(error.is_some().then(|| "invalid"))}
                            />
                            if let Some(error) = error {
                                <p class="field-error">{error.to_string()}</p>
                            }
                        </div>
                    }
                }).collect::<Html>()
            }
            if let Some(message) = state.submit_error() {
                <div class="submit-error">{message}</div>
            }
            <button type="submit" class="signup-submit" disabled={submitting}>
                { if submitting { "Securing your spot..." } else { "Secure My Spot" } }
            </button>
            <p class="signup-note">{"✓ No spam. Unsubscribe anytime."}</p>
        </form>
    }
}
