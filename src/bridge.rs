//! Script bridge between the page and the controller.
//!
//! Layout and global key presses are only observable from inside the
//! document, so two small listeners report them back over `dioxus.send`.
//! Effects travel the other way as one-off scripts.

use dioxus::prelude::*;
use folio_core::{Effect, LayoutSnapshot, NavKey, UiEvent};
use tracing::{debug, warn};

use crate::context::PageHandle;

/// Reports scroll offset, section geometry and watched element boxes on
/// every scroll event, and once immediately.
const LAYOUT_LISTENER: &str = r#"
const report = () => {
    const sections = Array.from(document.querySelectorAll('section[id]')).map((el) => ({
        id: el.id,
        top: el.offsetTop,
        height: el.offsetHeight,
    }));
    const watched = Array.from(document.querySelectorAll('[data-watch]')).map((el) => {
        const rect = el.getBoundingClientRect();
        return { id: el.id, top: rect.top, height: rect.height };
    });
    dioxus.send({
        offset: window.pageYOffset,
        viewport_height: window.innerHeight,
        sections,
        watched,
    });
};
window.addEventListener('scroll', report, { passive: true });
report();
await new Promise(() => {});
"#;

/// Forwards key names from anywhere in the document. While the mobile menu
/// is open, an arrow key that will move focus does not scroll the page; at
/// either end of the list it keeps its default action.
const KEY_LISTENER: &str = r#"
document.addEventListener('keydown', (e) => {
    if (document.querySelector('.nav-menu.active') !== null) {
        const links = Array.from(document.querySelectorAll('.nav-link'));
        const active = document.querySelector('.nav-link.active');
        const index = active ? links.indexOf(active) : 0;
        const moves = (e.key === 'ArrowDown' && index < links.length - 1)
            || (e.key === 'ArrowUp' && index > 0);
        if (moves) {
            e.preventDefault();
        }
    }
    dioxus.send(e.key);
});
await new Promise(() => {});
"#;

/// Script carrying out one controller effect.
pub fn effect_script(effect: &Effect) -> String {
    match effect {
        Effect::ScrollTo { top } => {
            format!("window.scrollTo({{ top: {}, behavior: 'smooth' }});", top)
        }
        Effect::Navigate(uri) => {
            format!(
                "window.location.href = {};",
                serde_json::Value::from(uri.as_str())
            )
        }
        Effect::FocusNavLink(index) => format!(
            "const link = document.querySelectorAll('.nav-link')[{}]; if (link) {{ link.focus(); }}",
            index
        ),
    }
}

/// Run an effect script, reporting it if the script throws.
pub fn apply(effect: &Effect) {
    debug!(?effect, "applying effect");
    let eval = document::eval(&effect_script(effect));
    let effect = effect.clone();
    spawn(async move {
        if let Err(e) = eval.join::<serde_json::Value>().await {
            warn!(?effect, "Effect script failed: {:?}", e);
        }
    });
}

/// Feed layout snapshots into the controller until the page goes away.
pub async fn run_layout_listener(page: PageHandle) {
    let mut eval = document::eval(LAYOUT_LISTENER);
    loop {
        match eval.recv::<serde_json::Value>().await {
            Ok(value) => match LayoutSnapshot::from_json(value) {
                Ok(snapshot) => page.dispatch(UiEvent::Scroll(snapshot)),
                Err(e) => warn!("Dropping layout report: {}", e),
            },
            Err(e) => {
                warn!("Layout listener stopped: {:?}", e);
                break;
            }
        }
    }
}

/// Feed document key presses into the controller.
pub async fn run_key_listener(page: PageHandle) {
    let mut eval = document::eval(KEY_LISTENER);
    loop {
        match eval.recv::<String>().await {
            Ok(key) => match NavKey::from_key_name(&key) {
                NavKey::Other => {}
                nav_key => page.dispatch(UiEvent::Key(nav_key)),
            },
            Err(e) => {
                warn!("Key listener stopped: {:?}", e);
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_script() {
        assert_eq!(
            effect_script(&Effect::ScrollTo { top: 720.0 }),
            "window.scrollTo({ top: 720, behavior: 'smooth' });"
        );
    }

    #[test]
    fn navigate_script_quotes_uri() {
        let script = effect_script(&Effect::Navigate("mailto:a@b.com?subject=\"hi\"".into()));
        assert_eq!(script, r#"window.location.href = "mailto:a@b.com?subject=\"hi\"";"#);
    }

    #[test]
    fn key_listener_only_blocks_moving_arrows() {
        assert!(KEY_LISTENER.contains("e.key === 'ArrowDown' && index < links.length - 1"));
        assert!(KEY_LISTENER.contains("e.key === 'ArrowUp' && index > 0"));
        assert!(KEY_LISTENER.contains("if (moves) {\n            e.preventDefault();"));
    }

    #[test]
    fn focus_script_targets_index() {
        assert!(effect_script(&Effect::FocusNavLink(3)).contains("querySelectorAll('.nav-link')[3]"));
    }
}
