//! Weakly-held observers keyed by event code.
//!
//! A [`Subject`] never keeps an observer alive. Expired entries are pruned
//! lazily when their event code is notified (or detached). Dispatch works on
//! a snapshot of the live observers, so observers may attach, detach or
//! trigger further notifications from inside `update`:
//!
//! - an observer attached during a pass is first called on the next `notify`;
//! - an observer detached during a pass is still called in that pass if it
//!   was already in the snapshot.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use rustc_hash::FxHashMap;
use tracing::trace;

use super::event::{Event, EventKind};

/// Receives events of type `E`.
///
/// `update` takes `&self`; observers that keep state use interior mutability.
pub trait Observer<E> {
    fn update(&self, event: &E);
}

/// Multimap from event code to weakly-held observers.
pub struct Subject<E> {
    observers: RefCell<FxHashMap<EventKind, Vec<Weak<dyn Observer<E>>>>>,
}

impl<E> Default for Subject<E> {
    fn default() -> Self {
        Self {
            observers: RefCell::new(FxHashMap::default()),
        }
    }
}

impl<E> std::fmt::Debug for Subject<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let observers = self.observers.borrow();
        let mut kinds: Vec<_> = observers.iter().map(|(k, v)| (*k, v.len())).collect();
        kinds.sort();
        f.debug_struct("Subject").field("observers", &kinds).finish()
    }
}

impl<E: Event> Subject<E> {
    /// Create a subject with no observers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `observer` for `kind`. The subject only keeps a weak reference.
    ///
    /// Attaching the same observer twice for one code delivers each event twice.
    pub fn attach<O>(&self, observer: &Rc<O>, kind: EventKind)
    where
        O: Observer<E> + 'static,
    {
        let strong: Rc<dyn Observer<E>> = observer.clone();
        self.observers
            .borrow_mut()
            .entry(kind)
            .or_default()
            .push(Rc::downgrade(&strong));
    }

    /// Register `observer` for every code in `kinds`.
    pub fn attach_all<O>(&self, observer: &Rc<O>, kinds: &[EventKind])
    where
        O: Observer<E> + 'static,
    {
        for &kind in kinds {
            self.attach(observer, kind);
        }
    }

    /// Remove one registration of `observer` for `kind`.
    ///
    /// A no-op if the observer is not registered for that code.
    pub fn detach<O>(&self, observer: &Rc<O>, kind: EventKind)
    where
        O: Observer<E> + 'static,
    {
        let target = Rc::as_ptr(observer) as *const ();
        let mut observers = self.observers.borrow_mut();
        let Some(list) = observers.get_mut(&kind) else {
            return;
        };
        list.retain(|weak| weak.strong_count() > 0);
        if let Some(index) = list
            .iter()
            .position(|weak| weak.as_ptr() as *const () == target)
        {
            list.remove(index);
        }
    }

    /// Deliver `event` to every live observer registered for its code.
    ///
    /// Returns the number of observers called.
    pub fn notify(&self, event: &E) -> usize {
        let kind = event.kind();
        let live: Vec<Rc<dyn Observer<E>>> = {
            let mut observers = self.observers.borrow_mut();
            let Some(list) = observers.get_mut(&kind) else {
                return 0;
            };
            list.retain(|weak| weak.strong_count() > 0);
            list.iter().filter_map(Weak::upgrade).collect()
        };

        for observer in &live {
            observer.update(event);
        }
        trace!(%kind, delivered = live.len(), "notified");
        live.len()
    }

    /// Registrations for `kind`, expired ones included until the next prune.
    #[must_use]
    pub fn observer_count(&self, kind: EventKind) -> usize {
        self.observers.borrow().get(&kind).map_or(0, Vec::len)
    }
}
