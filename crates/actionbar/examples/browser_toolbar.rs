//! A browser-style toolbar strip driven from the command line.
//!
//! Run with `RUST_LOG=actionbar=trace` to watch the container's bookkeeping.

use std::sync::Arc;

use actionbar::{
    Action, ActionContainer, ActionContainerConfig, ActionRef, ActionSurface, ActionView,
    ViewHandle, ViewId,
};
use actionbar_core::Property;

/// Surface that prints what it is asked to do.
#[derive(Default)]
struct ConsoleSurface {
    attached: Vec<ViewId>,
}

impl ActionSurface for ConsoleSurface {
    fn attach_view(&mut self, slot: usize, view: &ViewHandle, size: u32) {
        self.attached.insert(slot, view.id());
        println!("  attach {} at slot {slot} ({size}x{size})", view.id());
    }

    fn detach_view(&mut self, view: ViewId) {
        self.attached.retain(|id| *id != view);
        println!("  detach {view}");
    }

    fn set_visible(&mut self, visible: bool) {
        println!("  strip {}", if visible { "shown" } else { "hidden" });
    }

    fn begin_transition(&mut self) {
        println!("  (transition)");
    }
}

struct IconButton {
    glyph: char,
    shown: bool,
}

impl ActionView for IconButton {
    fn set_shown(&mut self, shown: bool) {
        self.shown = shown;
    }

    fn is_shown(&self) -> bool {
        self.shown
    }
}

struct ToggleIcon {
    glyphs: (char, char),
    active: Property<bool>,
    visible: Property<bool>,
    auto_hide: bool,
}

impl ToggleIcon {
    fn new(off: char, on: char) -> Arc<Self> {
        Self::build(off, on, false)
    }

    fn auto_hiding(glyph: char) -> Arc<Self> {
        Self::build(glyph, glyph, true)
    }

    fn build(off: char, on: char, auto_hide: bool) -> Arc<Self> {
        Arc::new(Self {
            glyphs: (off, on),
            active: Property::new(false),
            visible: Property::new(true),
            auto_hide,
        })
    }

    fn glyph(&self) -> char {
        if self.active.get() {
            self.glyphs.1
        } else {
            self.glyphs.0
        }
    }
}

impl Action for ToggleIcon {
    fn visible(&self) -> bool {
        self.visible.get()
    }

    fn auto_hide(&self) -> bool {
        self.auto_hide
    }

    fn create_view(&self, _config: &ActionContainerConfig) -> ViewHandle {
        ViewHandle::new(IconButton {
            glyph: self.glyph(),
            shown: true,
        })
    }

    fn bind(&self, view: &ViewHandle) {
        let glyph = self.glyph();
        view.with_mut(|button: &mut IconButton| button.glyph = glyph);
    }
}

fn render(container: &ActionContainer<ConsoleSurface>) -> String {
    container
        .actions()
        .iter()
        .filter_map(|wrapper| wrapper.view())
        .filter_map(|view| view.with(|b: &IconButton| if b.shown { b.glyph } else { ' ' }))
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = ActionContainerConfig::from_toml_str("[action_container]\naction-size = 48\n")?;
    let mut container = ActionContainer::new(ConsoleSurface::default(), config);

    let star = ToggleIcon::new('☆', '★');
    let reload = ToggleIcon::new('↻', '✕');
    let tabs = ToggleIcon::new('1', '2');
    let share = ToggleIcon::auto_hiding('⇪');

    println!("add reload, tab counter, star, share");
    container.add_action(reload.clone());
    container.set_end_bound_limit(true, 1);
    container.add_end_bound_item(tabs.clone());
    container.add_action(star.clone());
    container.add_action(share);
    println!("strip: [{}]", render(&container));

    println!("bookmark page, start loading");
    star.active.set(true);
    reload.active.set(true);
    container.invalidate_actions();
    println!("strip: [{}]", render(&container));

    println!("scroll: auto-hide");
    container.auto_hide_action(false);
    println!("strip: [{}]", render(&container));
    container.auto_hide_action(true);

    println!("hide star");
    star.visible.set(false);
    container.invalidate_actions();
    println!("strip: [{}]", render(&container));

    println!("remove tab counter");
    let tabs_ref: ActionRef = tabs;
    container.remove_action(&tabs_ref);
    println!(
        "strip: [{}], end-bound index {:?}",
        render(&container),
        container.end_bound_index()
    );

    Ok(())
}
