//! `%(key)s` template substitution.
//!
//! Rendering templates use named placeholders (`%(function)s`,
//! `%(expressions)s`, ...) filled from a per-call substitution map. Bare
//! `%s` parameter markers are not placeholders and pass through untouched.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{RenderError, RenderResult};

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"%\((\w+)\)s").expect("placeholder pattern is valid"));

/// Substitute every `%(key)s` placeholder in `template` from `values`.
///
/// A placeholder with no matching key is a bug in the rule that supplied
/// the template and fails immediately with [`RenderError::MissingTemplateKey`].
pub fn fill(template: &str, values: &BTreeMap<String, String>) -> RenderResult<String> {
    let mut out = String::with_capacity(template.len());
    let mut last = 0;
    for caps in PLACEHOLDER.captures_iter(template) {
        let whole = caps.get(0).expect("capture 0 always exists");
        let key = &caps[1];
        out.push_str(&template[last..whole.start()]);
        match values.get(key) {
            Some(value) => out.push_str(value),
            None => return Err(RenderError::MissingTemplateKey(key.into())),
        }
        last = whole.end();
    }
    out.push_str(&template[last..]);
    Ok(out)
}
