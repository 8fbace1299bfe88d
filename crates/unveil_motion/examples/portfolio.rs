//! Portfolio Page Reveal Demo
//!
//! Rebuilds the binding set of a single-page portfolio (hero, about,
//! experience timeline, skills grids, project cards, contact form) and
//! scrolls a simulated viewport down the page at 60fps, logging each
//! section as it reveals.
//!
//! Features demonstrated:
//! - On-mount reveal for the hero, plus its endless badge wobble
//! - Viewport-triggered fire-once sections with a -100px margin
//! - Stagger cascades across skill items and project cards
//!
//! Run with: cargo run -p unveil_motion --example portfolio

use unveil_animation::AnimationPreset;
use unveil_core::Rect;
use unveil_motion::{RevealAnimator, RevealSubscription, SectionBinding, TriggerMode};

const VIEWPORT_W: f32 = 1280.0;
const VIEWPORT_H: f32 = 800.0;
const DT: f32 = 1.0 / 60.0;
/// Scroll speed in px per frame
const SCROLL_STEP: f32 = 12.0;

/// A page section: stable key, vertical position, and staggered child
/// count (0 for plain sections). Content itself is opaque to the
/// animator - only geometry matters here.
struct Section {
    key: &'static str,
    y: f32,
    height: f32,
    children: usize,
}

/// The page layout, top to bottom, as the portfolio renders it
const SECTIONS: &[Section] = &[
    Section { key: "hero", y: 0.0, height: 760.0, children: 0 },
    Section { key: "about", y: 760.0, height: 720.0, children: 0 },
    Section { key: "experience", y: 1480.0, height: 1100.0, children: 3 },
    Section { key: "skills-frontend", y: 2580.0, height: 320.0, children: 8 },
    Section { key: "skills-backend", y: 2900.0, height: 440.0, children: 14 },
    Section { key: "skills-devops", y: 3340.0, height: 360.0, children: 11 },
    Section { key: "projects", y: 3700.0, height: 900.0, children: 3 },
    Section { key: "contact", y: 4600.0, height: 820.0, children: 0 },
];

fn bind_page(animator: &RevealAnimator) -> Vec<RevealSubscription> {
    let mut subs = Vec::new();

    for section in SECTIONS {
        let binding = match section.key {
            // The hero animates as soon as the page mounts
            "hero" => SectionBinding::new(section.key, AnimationPreset::fade_in_up()).on_mount(),
            // Grids fade in as containers and cascade their items
            _ if section.children > 0 => {
                SectionBinding::new(section.key, AnimationPreset::stagger_container(0.1))
                    .trigger(TriggerMode::viewport_margin(-100.0))
                    .children(AnimationPreset::pop_in(), section.children)
            }
            // Plain sections slide up once they are 100px into view
            _ => SectionBinding::new(section.key, AnimationPreset::fade_in_up())
                .trigger(TriggerMode::viewport_margin(-100.0)),
        };
        subs.push(animator.bind(binding).expect("preset is valid"));
        animator.set_layout(
            section.key,
            Rect::new(0.0, section.y, VIEWPORT_W, section.height),
        );
    }

    // The hero badge wobbles forever, independent of scrolling
    subs.push(
        animator
            .bind(SectionBinding::new("hero-badge", AnimationPreset::wobble()).on_mount())
            .expect("preset is valid"),
    );
    animator.set_layout("hero-badge", Rect::new(490.0, 120.0, 300.0, 40.0));

    subs
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    let animator = RevealAnimator::new();
    let _subs = bind_page(&animator);

    let page_height = SECTIONS.last().map(|s| s.y + s.height).unwrap_or(0.0);
    let mut reported = vec![false; SECTIONS.len()];
    let mut offset = 0.0;
    let mut t = 0.0;

    // The badge wobble never settles, so run until every section has
    // revealed rather than until the animator goes idle.
    while reported.iter().any(|done| !done) {
        animator.set_viewport(Rect::new(0.0, offset, VIEWPORT_W, VIEWPORT_H));
        animator.tick(DT);
        t += DT;

        // Report sections the moment they finish revealing
        for (i, section) in SECTIONS.iter().enumerate() {
            if !reported[i]
                && animator.state_of(section.key).is_some_and(|s| s.is_visible())
            {
                tracing::info!(
                    "t={:5.2}s  '{}' revealed ({} staggered children)",
                    t,
                    section.key,
                    section.children
                );
                reported[i] = true;
            }
        }

        if offset + VIEWPORT_H < page_height {
            offset += SCROLL_STEP;
        }
    }

    let badge = animator
        .visual_state("hero-badge")
        .expect("badge is bound");
    tracing::info!(
        "scrolled {:.0}px in {:.1}s; badge rotation now {:+.2} degrees",
        offset,
        t,
        badge.rotation
    );
}
