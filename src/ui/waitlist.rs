//! Waitlist signup form and bottom call-to-action section
//!
//! The form simulates a submission: validate, disable the control, wait out
//! a fake network delay, log the signup, confirm, then reset. Nothing is
//! actually sent anywhere.

use leptos::prelude::*;

use crate::core::validation::validate_email;
use crate::core::waitlist::FormPhase;
use crate::ui::icon::{Icon, icons};

/// One waitlist form instance. The page renders two: one in the hero and
/// one in the bottom section; `source` tells them apart in the signup log.
#[component]
pub fn WaitlistForm(
    /// Where on the page this form lives ("hero" or "footer")
    source: &'static str,
) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let phase = RwSignal::new(FormPhase::Idle);
    let error = RwSignal::new(Option::<String>::None);
    // Bumped per shown error so a stale clear timer cannot hide a newer one.
    let error_epoch = RwSignal::new(0u32);

    let _ = source;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if phase.get_untracked() != FormPhase::Idle {
            return;
        }

        let value = email.get_untracked();
        if let Err(invalid) = validate_email(value.trim()) {
            error.set(Some(invalid.to_string()));
            let shown = error_epoch.get_untracked() + 1;
            error_epoch.set(shown);

            #[cfg(not(feature = "ssr"))]
            {
                use crate::core::waitlist::ERROR_VISIBLE_MS;
                use gloo_timers::future::TimeoutFuture;

                leptos::task::spawn_local(async move {
                    TimeoutFuture::new(ERROR_VISIBLE_MS).await;
                    if error_epoch.get_untracked() == shown {
                        error.set(None);
                    }
                });
            }
            return;
        }

        error.set(None);
        phase.set(FormPhase::Submitting);

        #[cfg(not(feature = "ssr"))]
        {
            use crate::core::waitlist::{SUBMIT_LATENCY_MS, SUCCESS_RESET_MS, SignupRecord};
            use gloo_timers::future::TimeoutFuture;

            let address = value.trim().to_string();
            leptos::task::spawn_local(async move {
                // Simulated network call; nothing leaves the browser.
                TimeoutFuture::new(SUBMIT_LATENCY_MS).await;

                let record = SignupRecord::new(address, source);
                match serde_json::to_string(&record) {
                    Ok(json) => leptos::logging::log!("Waitlist signup: {}", json),
                    Err(e) => leptos::logging::error!("Failed to serialize signup: {}", e),
                }

                phase.set(FormPhase::Success);
                TimeoutFuture::new(SUCCESS_RESET_MS).await;
                email.set(String::new());
                phase.set(FormPhase::Idle);
            });
        }
    };

    view! {
        <form class="waitlist-form" on:submit=on_submit novalidate>
            <div class="waitlist-controls">
                <input
                    type="email"
                    class="waitlist-input"
                    placeholder="you@company.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                    disabled=move || phase.get() != FormPhase::Idle
                    aria-label="Work email"
                />
                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled=move || phase.get() != FormPhase::Idle
                >
                    {move || match phase.get() {
                        FormPhase::Submitting => "Joining...",
                        _ => "Join the Waitlist",
                    }}
                </button>
            </div>

            {move || {
                error.get().map(|message| {
                    view! {
                        <div class="form-error">
                            <Icon name=icons::ALERT_CIRCLE class="icon-text" />
                            <span>{message}</span>
                        </div>
                    }
                })
            }}

            <Show when=move || phase.get() == FormPhase::Success>
                <div class="form-success">
                    <Icon name=icons::CHECK class="icon-text" />
                    <span>"Successfully joined the waitlist! Check your email."</span>
                </div>
            </Show>
        </form>
    }
}

/// Bottom call-to-action section with the second form instance.
#[component]
pub fn WaitlistSection() -> impl IntoView {
    view! {
        <section id="waitlist" class="section waitlist-benefits">
            <div class="section-inner narrow">
                <div class="section-heading">
                    <h2>"Be first in line"</h2>
                    <p>
                        "Early-access teams get white-glove onboarding, a free fleet "
                        "audit, and locked-in launch pricing."
                    </p>
                </div>
                <WaitlistForm source="footer" />
            </div>
        </section>
    }
}
