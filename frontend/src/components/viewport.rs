use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

/// Root margin the sections use: the element has to be this far inside the
/// viewport before it counts as visible.
pub const SECTION_MARGIN_PX: f64 = 100.0;

/// Whether a box spanning `top..bottom` (viewport coordinates) overlaps the
/// viewport shrunk by `margin` at the top and bottom.
pub fn intersects_viewport(top: f64, bottom: f64, viewport_height: f64, margin: f64) -> bool {
    top < viewport_height - margin && bottom > margin
}

/// 0.0 when the element's top enters the bottom of the viewport, 1.0 when its
/// bottom leaves the top.
pub fn scroll_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    let travel = viewport_height + height;
    if travel <= 0.0 {
        return 0.0;
    }
    ((viewport_height - top) / travel).clamp(0.0, 1.0)
}

struct Measurement {
    top: f64,
    bottom: f64,
    height: f64,
    viewport_height: f64,
}

fn measure(element: &Element) -> Option<Measurement> {
    let viewport_height = web_sys::window()?.inner_height().ok()?.as_f64()?;
    let rect = element.get_bounding_client_rect();
    Some(Measurement {
        top: rect.top(),
        bottom: rect.bottom(),
        height: rect.height(),
        viewport_height,
    })
}

/// Re-runs `on_measure` on every scroll and resize, and once right away.
#[hook]
fn use_viewport_listener<F>(node: NodeRef, on_measure: F)
where
    F: Fn(Measurement) + 'static,
{
    use_effect_with_deps(
        move |node: &NodeRef| {
            let node = node.clone();
            let window = web_sys::window();
            let check = Closure::wrap(Box::new(move || {
                if let Some(measurement) = node.cast::<Element>().as_ref().and_then(measure) {
                    on_measure(measurement);
                }
            }) as Box<dyn Fn()>);

            if let Some(window) = &window {
                for event in ["scroll", "resize"] {
                    let _ = window.add_event_listener_with_callback(event, check.as_ref().unchecked_ref());
                }
            }
            let _ = check
                .as_ref()
                .unchecked_ref::<web_sys::js_sys::Function>()
                .call0(&wasm_bindgen::JsValue::NULL);

            move || {
                if let Some(window) = window {
                    for event in ["scroll", "resize"] {
                        let _ = window
                            .remove_event_listener_with_callback(event, check.as_ref().unchecked_ref());
                    }
                }
            }
        },
        node,
    );
}

/// Visibility of the element behind `node`. With `once`, stays true after the
/// first time the element is seen.
#[hook]
pub fn use_in_view(node: NodeRef, margin: f64, once: bool) -> bool {
    let visible = use_state_eq(|| false);
    {
        let visible = visible.clone();
        let seen = use_mut_ref(|| false);
        use_viewport_listener(node, move |m| {
            let now = intersects_viewport(m.top, m.bottom, m.viewport_height, margin);
            if now {
                *seen.borrow_mut() = true;
            }
            visible.set(now || (once && *seen.borrow()));
        });
    }
    *visible
}

#[hook]
pub fn use_scroll_progress(node: NodeRef) -> f64 {
    let progress = use_state_eq(|| 0.0_f64);
    {
        let progress = progress.clone();
        use_viewport_listener(node, move |m| {
            progress.set(scroll_progress(m.top, m.height, m.viewport_height));
        });
    }
    *progress
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn margin_shrinks_the_viewport() {
        // 800px viewport, 100px margin: the visible band is 100..700.
        assert!(intersects_viewport(650.0, 900.0, 800.0, 100.0));
        assert!(!intersects_viewport(720.0, 900.0, 800.0, 100.0));
        assert!(!intersects_viewport(-400.0, 80.0, 800.0, 100.0));
        assert!(intersects_viewport(-400.0, 150.0, 800.0, 100.0));
    }

    #[test]
    fn progress_runs_from_entry_to_exit() {
        assert_eq!(scroll_progress(800.0, 400.0, 800.0), 0.0);
        assert_eq!(scroll_progress(-400.0, 400.0, 800.0), 1.0);
        assert!((scroll_progress(200.0, 400.0, 800.0) - 0.5).abs() < f64::EPSILON);
        assert_eq!(scroll_progress(2000.0, 400.0, 800.0), 0.0);
        assert_eq!(scroll_progress(0.0, 0.0, 0.0), 0.0);
    }
}
