use super::constants::{TRANSITION_REVEAL_DELAY, TRANSITION_SEC};
use super::easing::Ease;
use super::timeline::{Prop, Step, TargetId, Timeline};

/// Suffix marking an internal page link.
pub const PAGE_SUFFIX: &str = ".html";
/// Prefixes that bypass the transition overlay.
pub const PASS_THROUGH_PREFIXES: [&str; 2] = ["http", "#"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    /// Same-site page: navigate behind the cover animation.
    Page,
    /// External or in-page link: let the browser handle it.
    PassThrough,
    /// Anything else is not watched at all.
    Ignored,
}

/// Classify an anchor's raw `href` attribute.
///
/// This is a plain string check on the attribute text, so query strings or
/// fragments after the suffix and differently cased suffixes are not treated
/// as page links.
pub fn classify_href(href: &str) -> LinkKind {
    if !href.ends_with(PAGE_SUFFIX) {
        return LinkKind::Ignored;
    }
    if PASS_THROUGH_PREFIXES.iter().any(|p| href.starts_with(p)) {
        return LinkKind::PassThrough;
    }
    LinkKind::Page
}

/// Slide the overlay over the viewport; navigation waits for this to finish.
pub fn cover_timeline(overlay: TargetId) -> Timeline {
    let mut tl = Timeline::new();
    tl.push(
        Step::to(overlay)
            .prop(Prop::YPercent, 0.0)
            .duration(TRANSITION_SEC)
            .ease(Ease::Power4InOut),
    );
    tl
}

/// Slide the overlay off the top of the viewport after a page load.
pub fn uncover_timeline(overlay: TargetId) -> Timeline {
    let mut tl = Timeline::with_delay(TRANSITION_REVEAL_DELAY);
    tl.push(
        Step::to(overlay)
            .prop(Prop::YPercent, -100.0)
            .duration(TRANSITION_SEC)
            .ease(Ease::Power4InOut),
    );
    tl
}
