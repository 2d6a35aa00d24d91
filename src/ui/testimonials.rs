//! Testimonial cards

use leptos::prelude::*;

use crate::core::content::TESTIMONIALS;

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section id="testimonials" class="section">
            <div class="section-inner">
                <div class="section-heading">
                    <h2>"Trusted by the people who carry the pager"</h2>
                </div>

                <div class="testimonials-grid">
                    {TESTIMONIALS
                        .iter()
                        .enumerate()
                        .map(|(index, testimonial)| {
                            view! {
                                <div class="testimonial-card" data-index=index.to_string()>
                                    <p class="testimonial-quote">{format!("“{}”", testimonial.quote)}</p>
                                    <div class="testimonial-author">
                                        <span class="testimonial-name">{testimonial.author}</span>
                                        <span class="testimonial-role">{testimonial.role}</span>
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
