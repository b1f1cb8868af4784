//! Typed invocation arguments
//!
//! The core never interprets an [`InterfaceArgument`]: it is handed to every
//! transformation as-is and stays immutable for the life of the view.

use std::any::Any;
use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;

/// A named, typed key into an [`InterfaceArgument`]
///
/// ```
/// use interfaces_core::argument::{ArgumentKey, InterfaceArgument};
///
/// const PAGE: ArgumentKey<u32> = ArgumentKey::new("page");
///
/// let argument = InterfaceArgument::builder().with(&PAGE, 3).build();
/// assert_eq!(argument.get(&PAGE), Some(&3));
/// ```
pub struct ArgumentKey<T> {
    name: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> ArgumentKey<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<T> Clone for ArgumentKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ArgumentKey<T> {}

impl<T> std::fmt::Debug for ArgumentKey<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ArgumentKey").field(&self.name).finish()
    }
}

type ArgumentValue = Arc<dyn Any + Send + Sync>;

/// Immutable bag of values passed from the caller through to transformations
#[derive(Clone, Default)]
pub struct InterfaceArgument {
    values: Arc<HashMap<&'static str, ArgumentValue>>,
}

impl InterfaceArgument {
    /// An argument carrying no values
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builder() -> ArgumentBuilder {
        ArgumentBuilder::default()
    }

    /// Look up `key`. Returns `None` when the key is absent or was stored
    /// with a different type.
    pub fn get<T: Any + Send + Sync>(&self, key: &ArgumentKey<T>) -> Option<&T> {
        let value: &(dyn Any + Send + Sync) = &**self.values.get(key.name)?;
        value.downcast_ref::<T>()
    }

    pub fn contains<T: Any + Send + Sync>(&self, key: &ArgumentKey<T>) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl std::fmt::Debug for InterfaceArgument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut keys: Vec<_> = self.values.keys().collect();
        keys.sort();
        f.debug_struct("InterfaceArgument")
            .field("keys", &keys)
            .finish()
    }
}

/// Builder for [`InterfaceArgument`]
#[derive(Default)]
pub struct ArgumentBuilder {
    values: HashMap<&'static str, ArgumentValue>,
}

impl ArgumentBuilder {
    /// Store `value` under `key`, replacing any previous value for the key
    pub fn with<T: Any + Send + Sync>(mut self, key: &ArgumentKey<T>, value: T) -> Self {
        self.values.insert(key.name, Arc::new(value));
        self
    }

    pub fn build(self) -> InterfaceArgument {
        InterfaceArgument {
            values: Arc::new(self.values),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: ArgumentKey<u32> = ArgumentKey::new("page");
    const OWNER: ArgumentKey<String> = ArgumentKey::new("owner");

    #[test]
    fn test_empty_argument() {
        let argument = InterfaceArgument::empty();
        assert!(argument.is_empty());
        assert_eq!(argument.get(&PAGE), None);
        assert!(!argument.contains(&OWNER));
    }

    #[test]
    fn test_typed_lookup() {
        let argument = InterfaceArgument::builder()
            .with(&PAGE, 2)
            .with(&OWNER, "alex".to_string())
            .build();

        assert_eq!(argument.len(), 2);
        assert_eq!(argument.get(&PAGE), Some(&2));
        assert_eq!(argument.get(&OWNER).map(String::as_str), Some("alex"));
    }

    #[test]
    fn test_type_mismatch_is_absent() {
        const PAGE_AS_TEXT: ArgumentKey<String> = ArgumentKey::new("page");

        let argument = InterfaceArgument::builder().with(&PAGE, 7).build();
        assert_eq!(argument.get(&PAGE_AS_TEXT), None);
        assert!(!argument.contains(&PAGE_AS_TEXT));
    }

    #[test]
    fn test_later_value_replaces_earlier() {
        let argument = InterfaceArgument::builder()
            .with(&PAGE, 1)
            .with(&PAGE, 5)
            .build();
        assert_eq!(argument.get(&PAGE), Some(&5));
    }

    #[test]
    fn test_clones_share_values() {
        let argument = InterfaceArgument::builder().with(&PAGE, 4).build();
        let copy = argument.clone();
        assert_eq!(copy.get(&PAGE), Some(&4));
    }

    #[test]
    fn test_debug_lists_keys() {
        let argument = InterfaceArgument::builder()
            .with(&PAGE, 1)
            .with(&OWNER, "steve".to_string())
            .build();
        assert_eq!(
            format!("{:?}", argument),
            r#"InterfaceArgument { keys: ["owner", "page"] }"#
        );
    }
}
