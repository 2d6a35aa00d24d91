//! Feature card grid

use leptos::prelude::*;

use crate::core::content::FEATURES;
use crate::ui::icon::Icon;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="section">
            <div class="section-inner">
                <div class="section-heading">
                    <h2>"Why IT teams switch to SilentInstall"</h2>
                    <p>"Everything you need to deploy, patch, and roll back software at fleet scale."</p>
                </div>

                <div class="features-grid">
                    {FEATURES
                        .iter()
                        .enumerate()
                        .map(|(index, feature)| {
                            view! {
                                <div class="feature-card" data-index=index.to_string()>
                                    <div class="feature-icon">
                                        <Icon name=feature.icon class="w-6 h-6" />
                                    </div>
                                    <h3>{feature.title}</h3>
                                    <p>{feature.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
