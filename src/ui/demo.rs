//! Demo code panel
//!
//! A terminal-styled panel whose script lines appear one at a time once the
//! panel scrolls into view. The dispatcher sets `start` after the pre-delay;
//! its animated-once flag guarantees the reveal runs at most once, so this
//! component only ever sees a single false→true transition.

use leptos::prelude::*;

use crate::core::content::DEMO_LINES;

#[component]
pub fn CodeDemo(
    /// Flipped by the visibility dispatcher when the reveal should begin
    start: RwSignal<bool>,
) -> impl IntoView {
    let revealed = RwSignal::new(0usize);

    #[cfg(not(feature = "ssr"))]
    {
        use gloo_timers::future::TimeoutFuture;
        use leptos::task::spawn_local;

        use crate::core::reveal::{LINE_REVEAL_INTERVAL_MS, LineRevealer};

        Effect::new(move |_| {
            if !start.get() {
                return;
            }
            spawn_local(async move {
                let mut revealer = LineRevealer::new(&DEMO_LINES);
                while revealer.next_line().is_some() {
                    revealed.set(revealer.revealed());
                    if revealer.is_done() {
                        break;
                    }
                    TimeoutFuture::new(LINE_REVEAL_INTERVAL_MS).await;
                }
            });
        });
    }

    view! {
        <section id="demo" class="section">
            <div class="section-inner">
                <div class="section-heading">
                    <h2>"One pipeline. 247 machines. No interruptions."</h2>
                    <p>"Watch a real deployment session - from module import to fleet-wide rollout."</p>
                </div>

                <div class="code-demo terminal">
                    <div class="terminal-header">
                        <span class="terminal-dot dot-red"></span>
                        <span class="terminal-dot dot-yellow"></span>
                        <span class="terminal-dot dot-green"></span>
                        <span class="terminal-title">"deployment session"</span>
                    </div>
                    <div class="terminal-body demo-lines">
                        {move || {
                            DEMO_LINES
                                .iter()
                                .take(revealed.get())
                                .enumerate()
                                .map(|(index, line)| {
                                    view! {
                                        <div
                                            class=format!("code-line {}", line.kind)
                                            style=format!("animation-delay: {}ms", index * 100)
                                        >
                                            {line.text}
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </div>
            </div>
        </section>
    }
}
