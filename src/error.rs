use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while talking to the browser. None of these are fatal for the
/// site: callers log them and fall back to the un-animated page.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomError {
    #[error("no global window object")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("selector query `{selector}` failed: {reason}")]
    Query { selector: String, reason: String },
    #[error("could not register `{event}` listener: {reason}")]
    Listener { event: &'static str, reason: String },
    #[error("could not toggle class `{class}`: {reason}")]
    ClassList { class: &'static str, reason: String },
}

impl DomError {
    pub fn query(selector: &str, err: JsValue) -> Self {
        DomError::Query {
            selector: selector.to_string(),
            reason: describe(&err),
        }
    }

    pub fn listener(event: &'static str, err: JsValue) -> Self {
        DomError::Listener {
            event,
            reason: describe(&err),
        }
    }

    pub fn class_list(class: &'static str, err: JsValue) -> Self {
        DomError::ClassList {
            class,
            reason: describe(&err),
        }
    }
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
