//! Hero section
//!
//! Headline, waitlist form, and the animated terminal: a typewriter cycling
//! through the hero commands plus canned output lines that appear below the
//! prompt. Both loops start at page load and run until the page unloads.

use leptos::prelude::*;

use crate::core::content::{HERO_COMMANDS, TERMINAL_OUTPUTS};
use crate::ui::waitlist::WaitlistForm;

/// Number of decorative background particles
const PARTICLE_COUNT: usize = 12;

#[component]
pub fn Hero() -> impl IntoView {
    let typed_command = RwSignal::new(String::new());
    let output_count = RwSignal::new(0usize);

    #[cfg(not(feature = "ssr"))]
    {
        use gloo_timers::future::TimeoutFuture;
        use leptos::task::spawn_local;

        use crate::core::content::TERMINAL_OUTPUT_INTERVAL_MS;
        use crate::core::typing::TypingSequencer;

        Effect::new(move |_| {
            // Typewriter loop, lives for the whole page.
            spawn_local(async move {
                let mut sequencer = TypingSequencer::new(
                    HERO_COMMANDS.iter().map(|c| c.to_string()).collect(),
                );
                loop {
                    let frame = sequencer.tick(js_sys::Math::random());
                    typed_command.set(frame.text);
                    TimeoutFuture::new(frame.delay_ms).await;
                }
            });

            // Canned output lines, one every 3 s.
            spawn_local(async move {
                for _ in 0..TERMINAL_OUTPUTS.len() {
                    TimeoutFuture::new(TERMINAL_OUTPUT_INTERVAL_MS).await;
                    output_count.update(|n| *n += 1);
                }
            });

            randomize_particles();
        });
    }

    view! {
        <section id="hero" class="hero">
            // Decorative floating particles, positioned on the client
            <div class="hero-particles" aria-hidden="true">
                {(0..PARTICLE_COUNT)
                    .map(|_| view! { <div class="particle"></div> })
                    .collect_view()}
            </div>

            <div class="hero-inner">
                <div class="hero-copy">
                    <h1 class="hero-title">
                        "Deploy software to every machine. "
                        <span class="hero-accent">"Silently."</span>
                    </h1>
                    <p class="hero-subtitle">
                        "SilentInstall pushes applications across your entire fleet with "
                        "zero user prompts, zero downtime, and zero help-desk tickets. "
                        "Built PowerShell-first for enterprise IT."
                    </p>
                    <WaitlistForm source="hero" />
                </div>

                <div class="hero-terminal terminal">
                    <div class="terminal-header">
                        <span class="terminal-dot dot-red"></span>
                        <span class="terminal-dot dot-yellow"></span>
                        <span class="terminal-dot dot-green"></span>
                        <span class="terminal-title">"PowerShell 7 — silentinstall"</span>
                    </div>
                    <div class="terminal-body">
                        <div class="terminal-line">
                            <span class="terminal-prompt">"PS C:\\> "</span>
                            <span class="typed-command">{move || typed_command.get()}</span>
                            <span class="terminal-cursor" aria-hidden="true">"▋"</span>
                        </div>
                        <div class="terminal-output">
                            {move || {
                                TERMINAL_OUTPUTS
                                    .iter()
                                    .take(output_count.get())
                                    .map(|line| {
                                        view! {
                                            <div class="output-line output-success">{*line}</div>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Scatter the hero particles: random horizontal position, animation delay,
/// and duration, exactly once per page load.
#[cfg(not(feature = "ssr"))]
fn randomize_particles() {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(nodes) = document.query_selector_all(".particle") else {
        return;
    };

    for i in 0..nodes.length() {
        let Some(element) = nodes
            .get(i)
            .and_then(|n| n.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            continue;
        };
        let style = element.style();
        let _ = style.set_property("left", &format!("{}%", js_sys::Math::random() * 100.0));
        let _ = style.set_property(
            "animation-delay",
            &format!("{}s", js_sys::Math::random() * 20.0),
        );
        let _ = style.set_property(
            "animation-duration",
            &format!("{}s", 15.0 + js_sys::Math::random() * 10.0),
        );
    }
}
