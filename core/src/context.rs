//! Opaque host context attached to violation records.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A cheaply clonable handle to a host-supplied context object.
///
/// The engine never inspects the payload; it only threads the handle
/// through a walk and attaches it to every record produced, so the host
/// can recover where a violation came from (a scene, an asset path, a
/// document id). Recover the payload with [`downcast_ref`].
///
/// [`downcast_ref`]: ContextRef::downcast_ref
#[derive(Clone)]
pub struct ContextRef(Arc<dyn Any + Send + Sync>);

impl ContextRef {
    /// Wrap a host context object.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// Recover the host type, if it matches.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }
}

impl fmt::Debug for ContextRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ContextRef(..)")
    }
}
