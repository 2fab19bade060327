use std::cell::RefCell;
use std::fmt::Debug;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Window};
use yew::prelude::*;

use crate::config::{self, RevealConfig};
use crate::error::DomError;
use crate::reveal::{Bounds, RevealSession, RevealTarget};

const WATCHED_EVENTS: [&str; 2] = ["scroll", "resize"];

struct AnimatedElement {
    element: Element,
    visible_class: &'static str,
}

impl RevealTarget for AnimatedElement {
    fn bounds(&self) -> Bounds {
        let rect = self.element.get_bounding_client_rect();
        Bounds::new(rect.top(), rect.bottom())
    }

    fn reveal(&self) {
        if let Err(e) = self.element.class_list().add_1(self.visible_class) {
            warn!("could not reveal element: {:?}", e);
        }
    }
}

fn viewport_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

/// Log a listener that could not be removed. Returns whether removal worked.
pub fn report_listener_removal<E: Debug>(owner: &str, event: &str, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            warn!("{} {} listener not removed: {:?}", owner, event, e);
            false
        }
    }
}

/// Release the session unless a sweep is still holding it.
fn release_session<T: RevealTarget>(session: &RefCell<RevealSession<T>>) -> bool {
    match session.try_borrow_mut() {
        Ok(mut session) => {
            debug!(
                "Releasing scroll reveal: {} revealed, {} still hidden",
                session.revealed_count(),
                session.pending_count()
            );
            session.release();
            true
        }
        Err(_) => {
            warn!("Scroll reveal session busy, release skipped");
            false
        }
    }
}

/// Scroll watch over the animated elements of the mounted page.
///
/// Dropping the handle removes the listeners and releases every element.
pub struct ScrollReveal {
    window: Window,
    root: Element,
    ready_class: &'static str,
    session: Rc<RefCell<RevealSession<AnimatedElement>>>,
    listener: Closure<dyn FnMut()>,
    registered: Vec<&'static str>,
}

impl ScrollReveal {
    pub fn attach(config: &RevealConfig) -> Result<Self, DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let document = window.document().ok_or(DomError::NoDocument)?;
        let root = document.document_element().ok_or(DomError::NoDocument)?;

        let selector = config.selector();
        let nodes = document
            .query_selector_all(&selector)
            .map_err(|e| DomError::query(&selector, e))?;
        let targets: Vec<AnimatedElement> = (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(|element| AnimatedElement {
                element,
                visible_class: config.visible_class,
            })
            .collect();
        debug!("Watching {} animated elements", targets.len());

        let session = Rc::new(RefCell::new(RevealSession::new(targets, config.threshold)));

        let listener = {
            let session = Rc::clone(&session);
            let window = window.clone();
            Closure::<dyn FnMut()>::new(move || {
                if let Ok(mut session) = session.try_borrow_mut() {
                    session.sweep(viewport_height(&window));
                }
            })
        };

        let mut reveal = ScrollReveal {
            window,
            root,
            ready_class: config.ready_class,
            session,
            listener,
            registered: Vec::with_capacity(WATCHED_EVENTS.len()),
        };
        for event in WATCHED_EVENTS {
            reveal
                .window
                .add_event_listener_with_callback(event, reveal.listener.as_ref().unchecked_ref())
                .map_err(|e| DomError::listener(event, e))?;
            reveal.registered.push(event);
        }

        // Animated elements are only hidden from here on.
        reveal
            .root
            .class_list()
            .add_1(reveal.ready_class)
            .map_err(|e| DomError::class_list(reveal.ready_class, e))?;

        // Content already above the fold should not wait for a scroll.
        let height = viewport_height(&reveal.window);
        let shown = reveal.session.borrow_mut().sweep(height);
        debug!("{} animated elements already in view", shown);

        Ok(reveal)
    }
}

impl Drop for ScrollReveal {
    fn drop(&mut self) {
        if let Err(e) = self.root.class_list().remove_1(self.ready_class) {
            warn!("could not clear {}: {:?}", self.ready_class, e);
        }
        for event in self.registered.drain(..) {
            report_listener_removal(
                "Scroll reveal",
                event,
                self.window
                    .remove_event_listener_with_callback(event, self.listener.as_ref().unchecked_ref()),
            );
        }
        release_session(&self.session);
    }
}

/// Reveal `.slide-in-*` / `.scale-in` elements of the calling page as they
/// scroll into view. The watch lives exactly as long as the component.
#[hook]
pub fn use_scroll_reveal() {
    use_effect_with_deps(
        |_| {
            let reveal = match ScrollReveal::attach(&config::reveal_config()) {
                Ok(reveal) => Some(reveal),
                Err(e) => {
                    warn!("Scroll reveal disabled: {}", e);
                    None
                }
            };
            move || drop(reveal)
        },
        (),
    );
}

// Scroll to top only on initial mount
#[hook]
pub fn use_scroll_to_top() {
    use_effect_with_deps(
        |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::RevealThreshold;

    struct Block(f64);

    impl RevealTarget for Block {
        fn bounds(&self) -> Bounds {
            Bounds::new(self.0, self.0 + 100.0)
        }

        fn reveal(&self) {}
    }

    #[test]
    fn test_release_session() {
        let session = RefCell::new(RevealSession::new(
            vec![Block(2000.0)],
            RevealThreshold::AnyOverlap,
        ));
        assert!(release_session(&session));
        assert!(session.borrow().is_released());
        assert_eq!(session.borrow().pending_count(), 0);
    }

    #[test]
    fn test_busy_session_is_not_released() {
        let session = RefCell::new(RevealSession::new(
            vec![Block(2000.0)],
            RevealThreshold::AnyOverlap,
        ));
        {
            let _sweeping = session.borrow_mut();
            assert!(!release_session(&session));
        }
        assert!(!session.borrow().is_released());
        assert_eq!(session.borrow().pending_count(), 1);
    }

    #[test]
    fn test_report_listener_removal() {
        assert!(report_listener_removal::<String>("Header", "scroll", Ok(())));
        assert!(!report_listener_removal("Header", "scroll", Err("detached".to_string())));
    }
}
