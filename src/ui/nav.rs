//! Fixed navigation header
//!
//! Anchor clicks smooth-scroll to their section, compensating for the fixed
//! header height. A debounced scroll listener keeps the link for the section
//! currently under the viewport highlighted.

use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

const NAV_LINKS: [(&str, &str); 4] = [
    ("features", "Features"),
    ("how-it-works", "How it works"),
    ("demo", "Demo"),
    ("testimonials", "Testimonials"),
];

/// Fixed header height, subtracted from scroll targets
#[cfg(not(feature = "ssr"))]
const HEADER_OFFSET_PX: f64 = 80.0;

/// Probe line below the top of the viewport used by the scroll spy
#[cfg(not(feature = "ssr"))]
const SCROLL_SPY_OFFSET_PX: f64 = 150.0;

#[cfg(not(feature = "ssr"))]
const SCROLL_DEBOUNCE_MS: u32 = 10;

#[component]
pub fn Header() -> impl IntoView {
    let active = RwSignal::new(Option::<String>::None);

    #[cfg(not(feature = "ssr"))]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use gloo_timers::callback::Timeout;

        // Replacing the stored handle drops (and so cancels) the previous
        // one, which is the whole debounce.
        let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let timeout = Timeout::new(SCROLL_DEBOUNCE_MS, move || {
                active.set(section_in_view());
            });
            *pending.borrow_mut() = Some(timeout);
        });
        on_cleanup(move || handle.remove());
    }

    let scroll_to = move |id: &'static str| {
        #[cfg(not(feature = "ssr"))]
        scroll_to_section(id);
        #[cfg(feature = "ssr")]
        let _ = id;
    };

    view! {
        <header class="site-header">
            <div class="header-inner">
                <a href="#" class="logo">
                    <Icon name=icons::TERMINAL class="icon-logo" />
                    <span>"SilentInstall"</span>
                </a>

                <nav class="site-nav">
                    {NAV_LINKS
                        .iter()
                        .map(|&(id, label)| {
                            view! {
                                <a
                                    href=format!("#{id}")
                                    class:active=move || active.get().as_deref() == Some(id)
                                    on:click=move |ev: leptos::ev::MouseEvent| {
                                        ev.prevent_default();
                                        scroll_to(id);
                                    }
                                >
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>

                <a
                    href="#waitlist"
                    class="btn btn-primary btn-nav"
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.prevent_default();
                        scroll_to("waitlist");
                    }
                >
                    "Join Waitlist"
                </a>
            </div>
        </header>
    }
}

#[cfg(not(feature = "ssr"))]
fn scroll_to_section(id: &str) {
    use wasm_bindgen::JsCast;
    use web_sys::{ScrollBehavior, ScrollToOptions};

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(target) = window
        .document()
        .and_then(|document| document.get_element_by_id(id))
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(f64::from(target.offset_top()) - HEADER_OFFSET_PX);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Id of the section currently under the scroll-spy probe line, if any.
#[cfg(not(feature = "ssr"))]
fn section_in_view() -> Option<String> {
    use wasm_bindgen::JsCast;

    let window = web_sys::window()?;
    let document = window.document()?;
    let probe = window.scroll_y().ok()? + SCROLL_SPY_OFFSET_PX;

    let sections = document.query_selector_all("section[id]").ok()?;
    for i in 0..sections.length() {
        let Some(section) = sections
            .get(i)
            .and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            continue;
        };
        let top = f64::from(section.offset_top());
        let height = f64::from(section.offset_height());
        if probe >= top && probe < top + height {
            return Some(section.id());
        }
    }
    None
}
