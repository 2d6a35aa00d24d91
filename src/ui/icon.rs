use leptos::prelude::*;

/// Inline SVG icon component. Stroke icons on a 24x24 viewBox; unknown
/// names fall back to the lightning bolt.
#[component]
pub fn Icon(
    /// Icon name from the `icons` module
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let path = match name {
        icons::CHECK => "M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z",
        icons::X => "M6 18L18 6M6 6l12 12",
        icons::CHEVRON_DOWN => "M19 9l-7 7-7-7",
        icons::MENU => "M4 6h16M4 12h16M4 18h16",
        icons::ALERT_CIRCLE => "M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
        icons::TERMINAL => "M8 9l3 3-3 3m5 0h3M5 20h14a2 2 0 002-2V6a2 2 0 00-2-2H5a2 2 0 00-2 2v12a2 2 0 002 2z",
        icons::SILENT => "M5.586 15H4a1 1 0 01-1-1v-4a1 1 0 011-1h1.586l4.707-4.707C10.923 3.663 12 4.109 12 5v14c0 .891-1.077 1.337-1.707.707L5.586 15zM17 14l2-2m0 0l2-2m-2 2l-2-2m2 2l2 2",
        icons::FLEET => "M9 3v2m6-2v2M9 19v2m6-2v2M5 9H3m2 6H3m18-6h-2m2 6h-2M7 19h10a2 2 0 002-2V7a2 2 0 00-2-2H7a2 2 0 00-2 2v10a2 2 0 002 2zM9 9h6v6H9V9z",
        icons::SCHEDULE => "M12 8v4l3 3m6-3a9 9 0 11-18 0 9 9 0 0118 0z",
        icons::ROLLBACK => "M3 10h10a4 4 0 014 4v1a4 4 0 01-4 4H7m-4-9l4-4m-4 4l4 4",
        icons::AUDIT => "M9 12h6m-6 4h6m2 5H7a2 2 0 01-2-2V5a2 2 0 012-2h5.586a1 1 0 01.707.293l5.414 5.414a1 1 0 01.293.707V19a2 2 0 01-2 2z",
        icons::API => "M10 20l4-16m4 4l4 4-4 4M6 16l-4-4 4-4",
        _ => "M13 10V3L4 14h7v7l9-11h-7z",
    };

    view! {
        <svg class=class fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=path />
        </svg>
    }
}

/// Predefined icon names
#[allow(dead_code)]
pub mod icons {
    pub const CHECK: &str = "check";
    pub const X: &str = "x";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const MENU: &str = "menu";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const TERMINAL: &str = "terminal";
    pub const LIGHTNING: &str = "lightning";

    // Feature card icons
    pub const SILENT: &str = "silent";
    pub const FLEET: &str = "fleet";
    pub const SCHEDULE: &str = "schedule";
    pub const ROLLBACK: &str = "rollback";
    pub const AUDIT: &str = "audit";
    pub const API: &str = "api";
}
