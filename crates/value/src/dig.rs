//! Multi-step navigation

use std::borrow::{Borrow, Cow};

use tracing::trace;

use crate::access::Navigable;
use crate::error::{Fault, ValueResult};
use crate::get::resolve;
use crate::key::Key;
use crate::path::Path;
use crate::value::Value;

/// Apply [`safe_get`] once per key, feeding each result into the next step.
///
/// The root may be any [`Navigable`] container; every later step walks a
/// [`Value`]. The same `default` is passed at every step and a miss does not
/// stop the walk: when `default` is itself a container, the remaining keys
/// resolve against it. With no keys the container comes back unchanged; a
/// root that is not already a [`Value`] comes back as [`Value::Custom`].
///
/// ```
/// use ferrule_value::{dig, path, Value};
///
/// let data = Value::object([("a", Value::object([("b", Value::array([10, 20]))]))]);
///
/// assert_eq!(dig(Some(&data), &path!["a", "b", 1], None)?, Some(Value::from(20)));
/// assert_eq!(dig(Some(&data), &path!["a", "x", 0], None)?, None);
/// # Ok::<(), ferrule_value::Fault>(())
/// ```
///
/// [`safe_get`]: crate::safe_get
pub fn dig<C, I>(
    container: Option<&C>,
    keys: I,
    default: Option<&Value>,
) -> Result<Option<Value>, Fault>
where
    C: Navigable + Clone + 'static,
    I: IntoIterator,
    I::Item: Borrow<Key>,
{
    let mut keys = keys.into_iter();
    let Some(first) = keys.next() else {
        trace!(depth = 0_usize, found = container.is_some(), "dig finished");
        return Ok(container.map(root_value));
    };

    let mut current = resolve(container, first.borrow(), default)?;
    let mut depth = 1_usize;

    for key in keys {
        let key = key.borrow();
        current = match current {
            None => resolve::<Value>(None, key, default)?,
            Some(Cow::Borrowed(value)) => resolve(Some(value), key, default)?,
            Some(Cow::Owned(value)) => {
                resolve(Some(&value), key, default)?.map(|found| Cow::Owned(found.into_owned()))
            }
        };
        depth += 1;
    }

    trace!(depth, found = current.is_some(), "dig finished");
    Ok(current.map(Cow::into_owned))
}

fn root_value<C: Navigable + Clone + 'static>(root: &C) -> Value {
    root.as_value()
        .cloned()
        .unwrap_or_else(|| Value::custom(root.clone()))
}

/// Parse `path` and [`dig`] along it.
///
/// ```
/// use ferrule_value::{dig_path, Value};
///
/// let data = Value::object([("items", Value::array([Value::object([("id", 7)])]))]);
/// assert_eq!(dig_path(Some(&data), "items[0].id", None)?, Some(Value::from(7)));
/// # Ok::<(), ferrule_value::ValueError>(())
/// ```
pub fn dig_path<C>(
    container: Option<&C>,
    path: &str,
    default: Option<&Value>,
) -> ValueResult<Option<Value>>
where
    C: Navigable + Clone + 'static,
{
    let path = Path::parse(path)?;
    Ok(dig(container, &path, default)?)
}

impl Value {
    /// Method form of [`dig`] on a present value
    pub fn dig<I>(&self, keys: I, default: Option<&Value>) -> Result<Option<Value>, Fault>
    where
        I: IntoIterator,
        I::Item: Borrow<Key>,
    {
        dig(Some(self), keys, default)
    }

    /// Method form of [`dig_path`] on a present value
    pub fn dig_path(&self, path: &str, default: Option<&Value>) -> ValueResult<Option<Value>> {
        dig_path(Some(self), path, default)
    }
}
