//! Process-wide, per-type instance registry
//!
//! [`instance`] hands out one `'static` instance per type. The first request
//! for a type creates it; every later request returns the same instance.
//! Distinct types never share an instance, so a wrapper type around another
//! singleton gets its own.
//!
//! Instances are never dropped. Types that need to change after creation
//! carry their own interior mutability.
//!
//! ```
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use oop_patterns::core::services::singleton;
//!
//! #[derive(Debug, Default)]
//! struct Hits(AtomicUsize);
//!
//! singleton::instance::<Hits>().0.fetch_add(1, Ordering::SeqCst);
//! assert_eq!(singleton::instance::<Hits>().0.load(Ordering::SeqCst), 1);
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

type Instances = HashMap<TypeId, &'static (dyn Any + Send + Sync)>;

fn registry() -> MutexGuard<'static, Instances> {
    static REGISTRY: OnceLock<Mutex<Instances>> = OnceLock::new();
    REGISTRY
        .get_or_init(|| Mutex::new(HashMap::new()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

fn lookup<T: 'static>() -> Option<&'static T> {
    registry()
        .get(&TypeId::of::<T>())
        .copied()
        .and_then(|any| any.downcast_ref::<T>())
}

/// The shared instance of `T`, created with `T::default()` on first use
#[must_use]
pub fn instance<T>() -> &'static T
where
    T: Default + Send + Sync + 'static,
{
    instance_with(T::default)
}

/// The shared instance of `T`, created with `init` on first use
///
/// `init` is ignored once an instance exists. It runs without the registry
/// locked, so it may request other singletons. If two threads race to create
/// the first instance, both run `init` and the first one registered wins.
#[must_use]
pub fn instance_with<T, F>(init: F) -> &'static T
where
    T: Send + Sync + 'static,
    F: FnOnce() -> T,
{
    if let Some(existing) = lookup::<T>() {
        return existing;
    }

    log::debug!("creating singleton instance of {}", std::any::type_name::<T>());
    let created: &'static T = Box::leak(Box::new(init()));

    let winner = *registry().entry(TypeId::of::<T>()).or_insert(created);
    winner.downcast_ref::<T>().unwrap_or(created)
}

/// Whether an instance of `T` has been created yet
#[must_use]
pub fn is_initialized<T: 'static>() -> bool {
    registry().contains_key(&TypeId::of::<T>())
}
