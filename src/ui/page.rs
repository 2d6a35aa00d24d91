//! Landing page assembly
//!
//! Single scroll page: hero terminal, feature grid, deployment walkthrough,
//! live demo panel, statistics, testimonials, waitlist, footer. The scroll
//! animation observer is installed once after hydration; the demo panel's
//! start signal is the only cross-section wiring.

use leptos::prelude::*;

use crate::ui::demo::CodeDemo;
use crate::ui::easter_egg::EasterEgg;
use crate::ui::features::Features;
use crate::ui::footer::Footer;
use crate::ui::hero::Hero;
use crate::ui::nav::Header;
use crate::ui::stats::Stats;
use crate::ui::steps::HowItWorks;
use crate::ui::styles::LandingStyles;
use crate::ui::testimonials::Testimonials;
use crate::ui::waitlist::WaitlistSection;

/// The whole landing page.
#[component]
pub fn LandingPage() -> impl IntoView {
    // Set once by the visibility dispatcher, after the demo panel's
    // pre-delay has elapsed. Never unset.
    let demo_start = RwSignal::new(false);

    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            crate::ui::observer::setup_scroll_animations(demo_start);
        });
    }

    view! {
        <div class="landing">
            <Header />
            <main>
                <Hero />
                <Features />
                <HowItWorks />
                <CodeDemo start=demo_start />
                <Stats />
                <Testimonials />
                <WaitlistSection />
            </main>
            <Footer />
            <EasterEgg />
            <LandingStyles />
        </div>
    }
}
