//! Single-step lookup with fallback

use std::borrow::Cow;

use tracing::{debug, trace};

use crate::access::Navigable;
use crate::error::{AccessError, Fault};
use crate::key::Key;
use crate::value::Value;

/// Look up `key` in `container`, falling back to `default`.
///
/// Resolution order, first success wins:
///
/// 1. a map-like container answers through [`MapAccess::get_or`], which
///    receives `default` itself;
/// 2. a sequence-like container answers through
///    [`SequenceAccess::subscript`];
/// 3. `default`.
///
/// Recognized lookup failures (wrong key type, missing key, bad position,
/// unsupported operation) move on to the next step. An absent container
/// resolves to `default`. Only a [`Fault`] raised by a capability escapes.
///
/// A key that is present but holds [`Value::Null`] resolves to `None`, not
/// to `default`.
///
/// ```
/// use ferrule_value::{safe_get, Key, Value};
///
/// let record = Value::object([("a", 1), ("b", 2)]);
/// let fallback = Value::from(42);
///
/// assert_eq!(safe_get(Some(&record), &Key::from("a"), None)?, Some(Value::from(1)));
/// assert_eq!(safe_get(Some(&record), &Key::from("z"), None)?, None);
/// assert_eq!(safe_get(Some(&record), &Key::from("z"), Some(&fallback))?, Some(fallback.clone()));
///
/// let nulled = Value::object([("a", Value::Null)]);
/// assert_eq!(safe_get(Some(&nulled), &Key::from("a"), Some(&fallback))?, None);
/// # Ok::<(), ferrule_value::Fault>(())
/// ```
///
/// [`MapAccess::get_or`]: crate::MapAccess::get_or
/// [`SequenceAccess::subscript`]: crate::SequenceAccess::subscript
pub fn safe_get<C>(
    container: Option<&C>,
    key: &Key,
    default: Option<&Value>,
) -> Result<Option<Value>, Fault>
where
    C: Navigable + ?Sized,
{
    resolve(container, key, default).map(|found| found.map(Cow::into_owned))
}

/// Borrowing core of [`safe_get`], shared with `dig`.
pub(crate) fn resolve<'a, C>(
    container: Option<&'a C>,
    key: &Key,
    default: Option<&'a Value>,
) -> Result<Option<Cow<'a, Value>>, Fault>
where
    C: Navigable + ?Sized,
{
    let Some(container) = container else {
        trace!(%key, "absent container, using default");
        return Ok(present(default.map(Cow::Borrowed)));
    };

    if let Some(map) = container.as_map() {
        match map.get_or(key, default) {
            Ok(found) => return Ok(present(found)),
            Err(error) => fall_through(error, "map", key)?,
        }
    }

    if let Some(sequence) = container.as_sequence() {
        match sequence.subscript(key) {
            Ok(found) => return Ok(present(Some(found))),
            Err(error) => fall_through(error, "sequence", key)?,
        }
    }

    trace!(shape = %container.shape(), %key, "lookup fell back to default");
    Ok(present(default.map(Cow::Borrowed)))
}

/// A null the lookup lands on reads as absent
fn present(found: Option<Cow<'_, Value>>) -> Option<Cow<'_, Value>> {
    found.filter(|value| !value.is_null())
}

fn fall_through(error: AccessError, capability: &'static str, key: &Key) -> Result<(), Fault> {
    match error.into_fault() {
        Ok(recognized) => {
            trace!(capability, %key, reason = %recognized, "lookup miss");
            Ok(())
        }
        Err(fault) => {
            debug!(capability, %key, error = %fault, "container fault");
            Err(fault)
        }
    }
}

impl Value {
    /// Method form of [`safe_get`] on a present value
    pub fn get_or(
        &self,
        key: impl Into<Key>,
        default: Option<&Value>,
    ) -> Result<Option<Value>, Fault> {
        safe_get(Some(self), &key.into(), default)
    }
}
