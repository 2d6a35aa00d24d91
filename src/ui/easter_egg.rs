//! Konami-code easter egg overlay
//!
//! A global keydown listener feeds the rolling matcher; on a match the
//! overlay appears, then auto-dismisses after ten seconds. Clicking anywhere
//! on it dismisses early. The epoch counter keeps a stale auto-dismiss timer
//! from closing an overlay re-triggered in the meantime.

use leptos::prelude::*;

#[component]
pub fn EasterEgg() -> impl IntoView {
    let visible = RwSignal::new(false);
    let epoch = RwSignal::new(0u32);

    #[cfg(not(feature = "ssr"))]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use gloo_timers::future::TimeoutFuture;
        use leptos::task::spawn_local;

        use crate::core::konami::{EASTER_EGG_DISMISS_MS, KonamiTracker};

        let tracker = Rc::new(RefCell::new(KonamiTracker::new()));
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if !tracker.borrow_mut().push(&ev.code()) {
                return;
            }
            visible.set(true);
            let shown = epoch.get_untracked() + 1;
            epoch.set(shown);
            spawn_local(async move {
                TimeoutFuture::new(EASTER_EGG_DISMISS_MS).await;
                if epoch.get_untracked() == shown {
                    visible.set(false);
                }
            });
        });
        on_cleanup(move || handle.remove());
    }

    let dismiss = move |_ev: leptos::ev::MouseEvent| visible.set(false);

    view! {
        <Show when=move || visible.get()>
            <div class="easter-egg" on:click=dismiss>
                <div class="easter-egg-card">
                    <div class="easter-egg-emoji">"🎮"</div>
                    <h3>"Achievement unlocked!"</h3>
                    <p>
                        "You found the secret. Deployment engineers with this kind of "
                        "persistence skip the queue - mention code KONAMI when we reach out."
                    </p>
                    <button class="btn btn-secondary" on:click=dismiss>
                        "Back to the page"
                    </button>
                </div>
            </div>
        </Show>
    }
}
