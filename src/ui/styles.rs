use leptos::prelude::*;

/// Page-wide styles that utility classes cannot express: the custom
/// cursor, carousel pinning, glyph layout and keyframes.
#[component]
pub fn PortfolioStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            html { scroll-behavior: smooth; }
            body { background: #000; color: #fff; overflow-x: hidden; }

            .custom-cursor, .custom-cursor * { cursor: none !important; }

            .cursor-dot, .cursor-outline {
                position: fixed;
                top: 0;
                left: 0;
                pointer-events: none;
                z-index: 9999;
                will-change: transform;
            }
            .cursor-dot {
                width: 0;
                height: 0;
                margin: -6px 0 0 -5px;
                border-left: 5px solid transparent;
                border-right: 5px solid transparent;
                border-bottom: 12px solid #22d3ee;
                transition: opacity 150ms ease, scale 150ms ease;
            }
            .cursor-dot.cursor-over { scale: 0; }
            .cursor-outline { width: 0; height: 0; }
            .cursor-ring {
                position: absolute;
                width: 48px;
                height: 48px;
                margin: -24px 0 0 -24px;
                border: 1px solid rgba(255, 255, 255, 0.6);
                border-radius: 9999px;
                mix-blend-mode: difference;
                transition: scale 200ms ease, background-color 200ms ease;
            }
            .cursor-outline.cursor-over .cursor-ring {
                scale: 1.5;
                background-color: rgba(34, 211, 238, 0.15);
            }
            .cursor-hidden { opacity: 0; }

            .cursor-particles { opacity: 0; transition: opacity 400ms ease; }
            .cursor-particles-on { opacity: 1; animation: cursor-spin 6s linear infinite; }
            .cursor-particle {
                position: absolute;
                width: 4px;
                height: 4px;
                margin: -2px 0 0 -2px;
                border-radius: 9999px;
                background: #22d3ee;
                animation: cursor-pulse 1.2s ease-in-out infinite;
            }
            .cursor-hint {
                position: absolute;
                left: 36px;
                top: 20px;
                white-space: nowrap;
                padding: 6px 10px;
                border-radius: 6px;
                font-size: 12px;
                color: #000;
                background: #22d3ee;
                animation: fade-in 300ms ease both;
            }
            @keyframes cursor-spin { to { rotate: 360deg; } }
            @keyframes cursor-pulse {
                0%, 100% { opacity: 0.3; scale: 0.8; }
                50% { opacity: 1; scale: 1.2; }
            }
            @keyframes fade-in { from { opacity: 0; } to { opacity: 1; } }

            .glyph { display: inline-block; will-change: transform, opacity; }
            .perspective { perspective: 1000px; }

            .typewriter-caret { animation: caret-blink 1s step-end infinite; }
            @keyframes caret-blink { 50% { opacity: 0; } }

            .loader-banner { animation: loader-slide 3s linear infinite; }
            @keyframes loader-slide {
                from { transform: translateX(100%); }
                to { transform: translateX(-100%); }
            }

            .carousel-wrapper { position: relative; }
            .carousel-sticky {
                position: sticky;
                top: 0;
                height: 100vh;
                overflow: hidden;
            }
            .carousel-track { display: flex; height: 100%; will-change: transform; }
            .carousel-card { flex: 0 0 100vw; width: 100vw; height: 100%; }
            .carousel-stacked .carousel-sticky { position: static; height: auto; overflow: visible; }
            .carousel-stacked .carousel-track { flex-direction: column; transform: none !important; }
            .carousel-stacked .carousel-card { flex-basis: auto; min-height: 100vh; }
            .carousel-stacked .scroll-indicator { display: none; }

            .project-line { transform-origin: left center; }

            .scroll-indicator { animation: bounce-horizontal 1.6s ease-in-out infinite; }
            @keyframes bounce-horizontal {
                0%, 100% { transform: translateX(0); }
                50% { transform: translateX(10px); }
            }

            .cert-float { animation: cert-float 4s ease-in-out infinite; }
            @keyframes cert-float {
                0%, 100% { translate: 0 0; }
                50% { translate: 0 -10px; }
            }
            .cert-card {
                transition: width 500ms cubic-bezier(0.22, 1, 0.36, 1),
                            translate 500ms cubic-bezier(0.22, 1, 0.36, 1),
                            opacity 300ms ease;
            }
            .cert-dimmed { opacity: 0.4; }
            .cert-border {
                background: linear-gradient(90deg, #22d3ee, #a855f7, #22d3ee);
                background-size: 200% 100%;
                animation: border-flow 3s linear infinite;
            }
            @keyframes border-flow {
                from { background-position: 0% 50%; }
                to { background-position: 200% 50%; }
            }

            @media (prefers-reduced-motion: reduce) {
                html { scroll-behavior: auto; }
                .loader-banner, .scroll-indicator, .cert-float, .cert-border,
                .cursor-particles-on, .cursor-particle, .typewriter-caret { animation: none; }
            }
            "#
        </style>
    }
}
