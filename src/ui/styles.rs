//! Landing page stylesheet
//!
//! All page styling lives in this one component so the hidden-to-visible
//! transition classes the animation drivers toggle are defined next to the
//! components that carry them.

use leptos::prelude::*;

#[component]
pub fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            :root {
                --bg: #0d1117;
                --bg-alt: #161b22;
                --border: #30363d;
                --text: #e6edf3;
                --text-muted: #7d8590;
                --accent: #58a6ff;
                --success: #3fb950;
                --danger: #f85149;
            }

            * { box-sizing: border-box; }

            body {
                margin: 0;
                background: var(--bg);
                color: var(--text);
                font-family: -apple-system, 'Segoe UI', Roboto, Helvetica, Arial, sans-serif;
                line-height: 1.6;
            }

            .terminal, .code-line, .terminal-body, .stat-value {
                font-family: 'SFMono-Regular', Consolas, 'Liberation Mono', Menlo, monospace;
            }

            /* Header */
            .site-header {
                position: fixed;
                top: 0;
                left: 0;
                right: 0;
                z-index: 100;
                background: rgba(13, 17, 23, 0.85);
                backdrop-filter: blur(10px);
                border-bottom: 1px solid var(--border);
            }
            .header-inner {
                max-width: 1100px;
                margin: 0 auto;
                padding: 0.75rem 1.5rem;
                display: flex;
                align-items: center;
                justify-content: space-between;
                gap: 2rem;
            }
            .logo {
                display: flex;
                align-items: center;
                gap: 0.5rem;
                font-weight: 700;
                font-size: 1.1rem;
                color: var(--text);
                text-decoration: none;
            }
            .icon-logo { width: 1.4rem; height: 1.4rem; color: var(--accent); }
            .site-nav { display: flex; gap: 1.5rem; }
            .site-nav a {
                color: var(--text-muted);
                text-decoration: none;
                font-size: 0.95rem;
                transition: color 0.2s;
            }
            .site-nav a:hover { color: var(--text); }
            .site-nav a.active { color: var(--accent); }

            /* Buttons */
            .btn {
                display: inline-block;
                padding: 0.6rem 1.4rem;
                border-radius: 6px;
                border: 1px solid transparent;
                font-size: 0.95rem;
                font-weight: 600;
                cursor: pointer;
                text-decoration: none;
                transition: transform 0.2s, box-shadow 0.2s, background 0.2s;
            }
            .btn-primary {
                background: var(--accent);
                color: #0d1117;
            }
            .btn-primary:hover:not(:disabled) {
                transform: translateY(-2px);
                box-shadow: 0 6px 20px rgba(88, 166, 255, 0.35);
            }
            .btn-primary:disabled { opacity: 0.6; cursor: default; }
            .btn-secondary {
                background: transparent;
                color: var(--text);
                border-color: var(--border);
            }
            .btn-secondary:hover { border-color: var(--accent); }
            .btn-nav { padding: 0.45rem 1.1rem; }

            /* Sections */
            .section { padding: 5rem 1.5rem; }
            .section-alt { background: var(--bg-alt); }
            .section-inner { max-width: 1100px; margin: 0 auto; }
            .section-inner.narrow { max-width: 640px; text-align: center; }
            .section-heading { text-align: center; margin-bottom: 3rem; }
            .section-heading h2 { font-size: 2rem; margin: 0 0 0.75rem; }
            .section-heading p { color: var(--text-muted); margin: 0 auto; max-width: 600px; }

            /* Hero */
            .hero {
                position: relative;
                overflow: hidden;
                padding: 9rem 1.5rem 5rem;
            }
            .hero-inner {
                max-width: 1100px;
                margin: 0 auto;
                display: grid;
                grid-template-columns: 1fr 1fr;
                gap: 3rem;
                align-items: center;
            }
            .hero-title { font-size: 2.6rem; line-height: 1.2; margin: 0 0 1rem; }
            .hero-accent { color: var(--accent); }
            .hero-subtitle { color: var(--text-muted); font-size: 1.1rem; margin-bottom: 2rem; }
            .hero-particles { position: absolute; inset: 0; pointer-events: none; }
            .particle {
                position: absolute;
                bottom: -10px;
                width: 4px;
                height: 4px;
                border-radius: 50%;
                background: var(--accent);
                opacity: 0.4;
                animation: float-up 12s linear infinite;
            }
            @keyframes float-up {
                from { transform: translateY(0); opacity: 0.4; }
                to { transform: translateY(-110vh); opacity: 0; }
            }

            /* Terminal */
            .terminal {
                background: #010409;
                border: 1px solid var(--border);
                border-radius: 8px;
                overflow: hidden;
                box-shadow: 0 16px 40px rgba(0, 0, 0, 0.5);
            }
            .terminal-header {
                display: flex;
                align-items: center;
                gap: 0.5rem;
                padding: 0.6rem 1rem;
                background: var(--bg-alt);
                border-bottom: 1px solid var(--border);
            }
            .terminal-dot { width: 12px; height: 12px; border-radius: 50%; }
            .dot-red { background: #ff5f56; }
            .dot-yellow { background: #ffbd2e; }
            .dot-green { background: #27c93f; }
            .terminal-title {
                margin-left: 0.5rem;
                color: var(--text-muted);
                font-size: 0.8rem;
            }
            .terminal-body { padding: 1rem 1.25rem; font-size: 0.9rem; min-height: 220px; }
            .terminal-line { white-space: pre-wrap; word-break: break-word; }
            .terminal-prompt { color: var(--success); }
            .terminal-cursor {
                color: var(--accent);
                animation: blink 1s step-end infinite;
            }
            @keyframes blink {
                0%, 100% { opacity: 1; }
                50% { opacity: 0; }
            }
            .terminal-output { margin-top: 0.5rem; }
            .output-line {
                animation: line-in 0.4s ease forwards;
            }
            .output-success { color: var(--success); }

            /* Feature cards */
            .features-grid {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                gap: 1.5rem;
            }
            .feature-card {
                background: var(--bg-alt);
                border: 1px solid var(--border);
                border-radius: 8px;
                padding: 1.75rem;
                opacity: 0;
                transform: translateY(24px);
                transition: opacity 0.6s ease, transform 0.6s ease,
                    border-color 0.2s, box-shadow 0.2s;
            }
            .feature-card.visible { opacity: 1; transform: translateY(0); }
            .feature-card:hover {
                border-color: var(--accent);
                box-shadow: 0 8px 24px rgba(1, 4, 9, 0.6);
            }
            .feature-icon {
                width: 2rem;
                height: 2rem;
                color: var(--accent);
                margin-bottom: 1rem;
            }
            .feature-icon svg { width: 100%; height: 100%; }
            .feature-card h3 { margin: 0 0 0.5rem; font-size: 1.1rem; }
            .feature-card p { margin: 0; color: var(--text-muted); font-size: 0.95rem; }

            /* Steps */
            .steps { display: grid; gap: 2.5rem; max-width: 720px; margin: 0 auto; }
            .step { display: flex; gap: 1.5rem; align-items: flex-start; }
            .step-number {
                flex-shrink: 0;
                width: 2.5rem;
                height: 2.5rem;
                display: flex;
                align-items: center;
                justify-content: center;
                border-radius: 50%;
                background: var(--accent);
                color: #0d1117;
                font-weight: 700;
                opacity: 0;
                transform: scale(0.4);
                transition: opacity 0.45s ease, transform 0.45s cubic-bezier(0.34, 1.56, 0.64, 1);
            }
            .step-number.visible { opacity: 1; transform: scale(1); }
            .step-content {
                opacity: 0;
                transform: translateX(-20px);
                transition: opacity 0.5s ease, transform 0.5s ease;
            }
            .step-content.visible { opacity: 1; transform: translateX(0); }
            .step-content h3 { margin: 0 0 0.4rem; }
            .step-content p { margin: 0; color: var(--text-muted); }

            /* Demo panel */
            .code-demo { max-width: 760px; margin: 0 auto; }
            .demo-lines { min-height: 260px; }
            .code-line {
                opacity: 0;
                animation: line-in 0.4s ease forwards;
            }
            @keyframes line-in {
                from { opacity: 0; transform: translateX(-8px); }
                to { opacity: 1; transform: translateX(0); }
            }
            .code-line.prompt { color: var(--text); }
            .code-line.success { color: var(--success); }
            .code-line.info { color: var(--text-muted); }

            /* Stats */
            .stats {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                gap: 1.5rem;
                text-align: center;
            }
            .stat-card {
                background: var(--bg);
                border: 1px solid var(--border);
                border-radius: 8px;
                padding: 2rem 1rem;
            }
            .stat-row {
                display: flex;
                justify-content: center;
                align-items: baseline;
                gap: 0.15rem;
            }
            .stat-value { font-size: 2.4rem; font-weight: 700; color: var(--accent); }
            .stat-suffix { font-size: 1.4rem; color: var(--accent); }
            .stat-label { margin-top: 0.5rem; color: var(--text-muted); font-size: 0.9rem; }

            /* Testimonials */
            .testimonials-grid {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                gap: 1.5rem;
            }
            .testimonial-card {
                background: var(--bg-alt);
                border: 1px solid var(--border);
                border-radius: 8px;
                padding: 1.75rem;
                opacity: 0;
                transform: translateY(24px);
                transition: opacity 0.6s ease, transform 0.6s ease;
            }
            .testimonial-card.visible { opacity: 1; transform: translateY(0); }
            .testimonial-quote { margin: 0 0 1.25rem; font-style: italic; }
            .testimonial-author { display: flex; flex-direction: column; }
            .testimonial-name { font-weight: 600; }
            .testimonial-role { color: var(--text-muted); font-size: 0.85rem; }

            /* Waitlist form */
            .waitlist-form { max-width: 480px; margin: 0 auto; }
            .waitlist-controls { display: flex; gap: 0.75rem; }
            .waitlist-input {
                flex: 1;
                padding: 0.6rem 0.9rem;
                border-radius: 6px;
                border: 1px solid var(--border);
                background: var(--bg);
                color: var(--text);
                font-size: 0.95rem;
            }
            .waitlist-input:focus {
                outline: none;
                border-color: var(--accent);
            }
            .waitlist-input:disabled { opacity: 0.6; }
            .form-error, .form-success {
                display: flex;
                align-items: center;
                gap: 0.4rem;
                margin-top: 0.75rem;
                font-size: 0.9rem;
                text-align: left;
            }
            .form-error { color: var(--danger); }
            .form-success { color: var(--success); }
            .icon-text { width: 1rem; height: 1rem; flex-shrink: 0; }

            /* Easter egg overlay */
            .easter-egg {
                position: fixed;
                inset: 0;
                z-index: 200;
                display: flex;
                align-items: center;
                justify-content: center;
                background: rgba(1, 4, 9, 0.8);
                animation: overlay-in 0.3s ease;
            }
            @keyframes overlay-in {
                from { opacity: 0; }
                to { opacity: 1; }
            }
            .easter-egg-card {
                max-width: 420px;
                margin: 1rem;
                padding: 2.5rem 2rem;
                text-align: center;
                background: var(--bg-alt);
                border: 1px solid var(--accent);
                border-radius: 12px;
                box-shadow: 0 0 60px rgba(88, 166, 255, 0.3);
            }
            .easter-egg-emoji { font-size: 3rem; margin-bottom: 0.5rem; }
            .easter-egg-card h3 { margin: 0 0 0.75rem; font-size: 1.4rem; }
            .easter-egg-card p { color: var(--text-muted); margin: 0 0 1.5rem; }

            /* Footer */
            .site-footer {
                border-top: 1px solid var(--border);
                padding: 3rem 1.5rem 1.5rem;
                background: var(--bg-alt);
            }
            .footer-inner {
                max-width: 1100px;
                margin: 0 auto;
                display: flex;
                justify-content: space-between;
                flex-wrap: wrap;
                gap: 2rem;
            }
            .footer-brand p { color: var(--text-muted); margin: 0.75rem 0 0; }
            .footer-links { display: flex; gap: 1.5rem; align-items: center; }
            .footer-links a { color: var(--text-muted); text-decoration: none; }
            .footer-links a:hover { color: var(--text); }
            .footer-legal {
                max-width: 1100px;
                margin: 2rem auto 0;
                padding-top: 1.5rem;
                border-top: 1px solid var(--border);
                color: var(--text-muted);
                font-size: 0.85rem;
            }

            @media (max-width: 820px) {
                .hero-inner { grid-template-columns: 1fr; }
                .site-nav { display: none; }
                .waitlist-controls { flex-direction: column; }
            }
            "#
        </style>
    }
}
