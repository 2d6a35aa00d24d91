//! "How it works" section
//!
//! Each step is revealed in two parts when scrolled into view: the index
//! badge pops in first, the body slides in 200 ms later.

use leptos::prelude::*;

use crate::core::content::STEPS;

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section id="how-it-works" class="section section-alt">
            <div class="section-inner">
                <div class="section-heading">
                    <h2>"From zero to silent deployment in an afternoon"</h2>
                </div>

                <div class="steps">
                    {STEPS
                        .iter()
                        .enumerate()
                        .map(|(index, step)| {
                            view! {
                                <div class="step" data-index=index.to_string()>
                                    <div class="step-number">{(index + 1).to_string()}</div>
                                    <div class="step-content">
                                        <h3>{step.title}</h3>
                                        <p>{step.description}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
