//! Statistics section
//!
//! Each stat value carries its target in a `data-target` attribute - the
//! markup contract the counter driver reads back when the section scrolls
//! into view. Values render as "0" until the batch animation runs.

use leptos::prelude::*;

use crate::core::content::STATS;

#[component]
pub fn Stats() -> impl IntoView {
    view! {
        <section id="stats" class="section section-alt">
            <div class="section-inner">
                <div class="stats">
                    {STATS
                        .iter()
                        .enumerate()
                        .map(|(index, stat)| {
                            view! {
                                <div class="stat-card" data-index=index.to_string()>
                                    <div class="stat-row">
                                        <span class="stat-value" data-target=stat.target>"0"</span>
                                        <span class="stat-suffix">{stat.suffix}</span>
                                    </div>
                                    <div class="stat-label">{stat.label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
