use crate::core::{Cue, Prop, PropStore, TargetId};
use web_sys as web;

/// Elements animated through the [`PropStore`], indexed by [`TargetId`].
#[derive(Default)]
pub struct Targets {
    elements: Vec<web::HtmlElement>,
}

impl Targets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `el`, reusing its id when it is already known.
    pub fn register(&mut self, el: web::HtmlElement) -> TargetId {
        if let Some(id) = self.elements.iter().position(|e| *e == el) {
            return id;
        }
        self.elements.push(el);
        self.elements.len() - 1
    }

    pub fn register_opt(&mut self, el: Option<web::HtmlElement>) -> Option<TargetId> {
        el.map(|el| self.register(el))
    }

    pub fn get(&self, id: TargetId) -> Option<&web::HtmlElement> {
        self.elements.get(id)
    }
}

/// Write every changed target's values into its inline style.
pub fn flush(targets: &Targets, store: &mut PropStore) {
    for id in store.take_dirty() {
        if let Some(el) = targets.get(id) {
            apply_props(el, store, id);
        }
    }
}

const TRANSFORM_PROPS: [Prop; 6] = [
    Prop::X,
    Prop::Y,
    Prop::XPercent,
    Prop::YPercent,
    Prop::Scale,
    Prop::ScaleY,
];

fn apply_props(el: &web::HtmlElement, store: &PropStore, id: TargetId) {
    let style = el.style();
    let has = |p: Prop| store.contains(id, p);

    if has(Prop::Opacity) || has(Prop::OpacityMul) {
        let opacity = store.get(id, Prop::Opacity) * store.get(id, Prop::OpacityMul);
        _ = style.set_property("opacity", &format!("{:.4}", opacity));
    }
    if TRANSFORM_PROPS.iter().any(|&p| has(p)) || has(Prop::ScaleMul) {
        _ = style.set_property("transform", &transform_css(store, id));
    }
    if has(Prop::WidthPercent) {
        let width = store.get(id, Prop::WidthPercent);
        _ = style.set_property("width", &format!("{:.3}%", width));
    }
}

fn transform_css(store: &PropStore, id: TargetId) -> String {
    let get = |p: Prop| store.get(id, p);
    format!(
        "translate({:.3}px, {:.3}px) translate({:.3}%, {:.3}%) scale({:.4}) scaleY({:.4})",
        get(Prop::X),
        get(Prop::Y),
        get(Prop::XPercent),
        get(Prop::YPercent),
        get(Prop::Scale) * get(Prop::ScaleMul),
        get(Prop::ScaleY),
    )
}

/// Perform queued timeline side effects in order.
pub fn run_cues(targets: &Targets, cues: &mut Vec<Cue>) {
    for cue in cues.drain(..) {
        match cue {
            Cue::Text { target, text } => {
                if let Some(el) = targets.get(target) {
                    el.set_text_content(Some(text));
                }
            }
            Cue::Hide { target } => {
                if let Some(el) = targets.get(target) {
                    _ = el.style().set_property("display", "none");
                }
            }
        }
    }
}
