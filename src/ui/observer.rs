//! Viewport-intersection wiring
//!
//! Installs one `IntersectionObserver` over every animated region and routes
//! intersections through [`AnimationDispatcher`], which owns all the
//! played-once state. This module is pure plumbing: classify the element,
//! ask the dispatcher, apply whatever it hands back.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::{RwSignal, Set};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::core::counter::{FRAME_INTERVAL_MS, StatTarget};
use crate::core::dispatch::{Animation, AnimationDispatcher, SectionKind};

const OBSERVER_THRESHOLD: f64 = 0.1;
/// Shrinks the bottom of the viewport so elements animate slightly before
/// they would otherwise be considered visible.
const OBSERVER_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Install the scroll-animation observer over every marker-classed element
/// on the page. Runs once after hydration.
pub fn setup_scroll_animations(demo_start: RwSignal<bool>) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let dispatcher = Rc::new(RefCell::new(AnimationDispatcher::new()));

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let Some((kind, index)) = classify(&target) else {
                    continue;
                };
                let Some(animation) = dispatcher.borrow_mut().on_intersect(kind, index) else {
                    continue;
                };
                apply(&target, animation, demo_start);
                // Already played, nothing left to watch for.
                observer.unobserve(&target);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(OBSERVER_THRESHOLD));
    options.set_root_margin(OBSERVER_ROOT_MARGIN);

    let observer = match IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(observer) => observer,
        Err(e) => {
            leptos::logging::error!("failed to create IntersectionObserver: {e:?}");
            return;
        }
    };
    // Listener lives for the whole page.
    callback.forget();

    for kind in SectionKind::ALL {
        let Ok(nodes) = document.query_selector_all(&format!(".{}", kind.marker())) else {
            continue;
        };
        for i in 0..nodes.length() {
            if let Some(element) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                observer.observe(&element);
            }
        }
    }
}

/// Map an observed element back to its dispatcher key via marker class and
/// `data-index` attribute. Singleton regions carry no index and get 0.
fn classify(target: &Element) -> Option<(SectionKind, usize)> {
    let class_list = target.class_list();
    let kind = SectionKind::ALL
        .iter()
        .copied()
        .find(|kind| class_list.contains(kind.marker()))?;
    let index = target
        .get_attribute("data-index")
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(0);
    Some((kind, index))
}

fn apply(target: &Element, animation: Animation, demo_start: RwSignal<bool>) {
    match animation {
        Animation::CardFadeIn | Animation::TestimonialFadeIn => {
            let _ = target.class_list().add_1("visible");
        }
        Animation::StepReveal {
            badge_delay_ms,
            body_delay_ms,
        } => {
            let _ = target.class_list().add_1("visible");
            schedule_child_reveal(target, ".step-number", badge_delay_ms);
            schedule_child_reveal(target, ".step-content", body_delay_ms);
        }
        Animation::DemoReveal { pre_delay_ms } => {
            Timeout::new(pre_delay_ms, move || demo_start.set(true)).forget();
        }
        Animation::StatsBatch { stagger_ms } => {
            animate_stats(target, stagger_ms);
        }
    }
}

fn schedule_child_reveal(parent: &Element, selector: &str, delay_ms: u32) {
    let Ok(Some(child)) = parent.query_selector(selector) else {
        return;
    };
    Timeout::new(delay_ms, move || {
        let _ = child.class_list().add_1("visible");
    })
    .forget();
}

/// Start one staggered counter per stat value in the section. Targets are
/// read back from the markup at trigger time, not captured at render.
fn animate_stats(container: &Element, stagger_ms: u32) {
    use leptos::task::spawn_local;

    let Ok(values) = container.query_selector_all(".stat-value") else {
        return;
    };
    for i in 0..values.length() {
        let Some(element) = values.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let Some(raw) = element.get_attribute("data-target") else {
            leptos::logging::error!("stat value is missing its data-target attribute");
            continue;
        };
        let Some(target) = StatTarget::parse(&raw) else {
            leptos::logging::error!("unparseable stat target: {raw:?}");
            continue;
        };

        let delay_ms = i * stagger_ms;
        spawn_local(async move {
            if delay_ms > 0 {
                gloo_timers::future::TimeoutFuture::new(delay_ms).await;
            }
            run_counter(&element, target).await;
        });
    }
}

/// Drive one counter against the real clock until it completes.
async fn run_counter(element: &Element, target: StatTarget) {
    let Some(performance) = web_sys::window().and_then(|w| w.performance()) else {
        return;
    };

    let animation = target.animation();
    let started = performance.now();
    loop {
        let elapsed = performance.now() - started;
        element.set_text_content(Some(&animation.display_at(elapsed)));
        if animation.is_complete(elapsed) {
            break;
        }
        gloo_timers::future::TimeoutFuture::new(FRAME_INTERVAL_MS).await;
    }
}
