//! Page footer

use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="footer-brand">
                    <a href="#" class="logo">
                        <Icon name=icons::TERMINAL class="icon-logo" />
                        <span>"SilentInstall"</span>
                    </a>
                    <p>"Silent software deployment for Windows fleets."</p>
                </div>
                <div class="footer-links">
                    <a href="#features">"Features"</a>
                    <a href="#how-it-works">"How it works"</a>
                    <a href="#demo">"Demo"</a>
                    <a href="#waitlist">"Waitlist"</a>
                </div>
            </div>
            <div class="footer-legal">
                <span>"© 2026 SilentInstall. All rights reserved."</span>
            </div>
        </footer>
    }
}
