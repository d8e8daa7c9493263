use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub title: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

fn set_body_overflow(value: &str) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let _ = body.style().set_property("overflow", value);
    }
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    // Lock page scroll while open
    use_effect_with_deps(
        |open: &bool| {
            set_body_overflow(if *open { "hidden" } else { "unset" });
            || set_body_overflow("unset")
        },
        props.open,
    );

    {
        let open = props.open;
        let on_close = props.on_close.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if open && e.key() == "Escape" {
                on_close.emit(());
            }
        });
    }

    if !props.open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-backdrop" onclick={close.clone()}>
            <style>
                {r#"
                    .modal-backdrop {
                        position: fixed;
                        inset: 0;
                        z-index: 50;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                        background: rgba(0, 0, 0, 0.5);
                        backdrop-filter: blur(4px);
                        animation: modalFade 0.2s ease-out;
                    }
                    .modal-card {
                        position: relative;
                        width: 100%;
                        max-width: 600px;
                        max-height: 90vh;
                        overflow-y: auto;
                        padding: 2rem;
                        border-radius: 16px;
                        background: var(--surface);
                        color: var(--text);
                        box-shadow: 0 24px 48px rgba(15, 23, 42, 0.25);
                        animation: modalRise 0.3s cubic-bezier(0.25, 0.46, 0.45, 0.94);
                    }
                    .modal-card h2 {
                        margin: 0 2rem 1.5rem 0;
                        font-size: 1.75rem;
                    }
                    .modal-close {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        border: none;
                        background: none;
                        color: var(--muted);
                        font-size: 1.25rem;
                        cursor: pointer;
                    }
                    .modal-footer {
                        margin-top: 2rem;
                        padding-top: 1.5rem;
                        border-top: 1px solid var(--border);
                    }
                    .modal-footer button {
                        padding: 0.75rem 1.5rem;
                        border: none;
                        border-radius: 8px;
                        background: var(--text);
                        color: var(--surface);
                        font-weight: 600;
                        cursor: pointer;
                    }
                    @keyframes modalFade { from { opacity: 0; } to { opacity: 1; } }
                    @keyframes modalRise {
                        from { opacity: 0; transform: translateY(20px) scale(0.95); }
                        to { opacity: 1; transform: none; }
                    }
                "#}
            </style>
            <div class="modal-card" role="dialog" aria-modal="true" onclick={keep_open}>
                <button class="modal-close" aria-label="Close" onclick={close.clone()}>{"✕"}</button>
                <h2>{props.title.clone()}</h2>
                <div class="modal-body">
                    { for props.children.iter() }
                </div>
                <div class="modal-footer">
                    <button onclick={close}>{"Got it"}</button>
                </div>
            </div>
        </div>
    }
}
