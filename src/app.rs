use leptos::prelude::*;
use leptos_meta::{Link, Meta, MetaTags, Stylesheet, Title, provide_meta_context};

use crate::ui::LandingPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Developer-console greeting, once per page load.
    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::content::CONSOLE_GREETING;
        Effect::new(move |_| {
            leptos::logging::log!("{}", CONSOLE_GREETING);
        });
    }

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/silentinstall.css"/>

        <SeoMeta />

        <LandingPage />
    }
}

/// SEO meta tags using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="SilentInstall - Enterprise Software Deployment Without Interruptions" />

        <Meta name="description" content="Deploy software across your entire fleet silently. No user prompts, no downtime, no help-desk tickets. PowerShell-first enterprise deployment." />
        <Meta name="keywords" content="silent install, software deployment, enterprise IT, PowerShell, endpoint management, MSI deployment" />

        // Open Graph / Facebook
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content="https://silentinstall.com/" />
        <Meta property="og:title" content="SilentInstall - Enterprise Software Deployment Without Interruptions" />
        <Meta property="og:description" content="Deploy software across your entire fleet silently. No user prompts, no downtime, no help-desk tickets." />
        <Meta property="og:image" content="https://silentinstall.com/og-image.png" />

        // Twitter
        <Meta property="twitter:card" content="summary_large_image" />
        <Meta property="twitter:url" content="https://silentinstall.com/" />
        <Meta property="twitter:title" content="SilentInstall - Enterprise Software Deployment Without Interruptions" />
        <Meta property="twitter:description" content="Deploy software across your entire fleet silently. No user prompts, no downtime, no help-desk tickets." />
        <Meta property="twitter:image" content="https://silentinstall.com/og-image.png" />

        <Link rel="canonical" href="https://silentinstall.com/" />
    }
}
