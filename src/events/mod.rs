//! In-process publish/subscribe.
//!
//! The field and the model each own a [`Subject`] and publish typed payloads
//! through it; views, controllers and the model's own bookkeeping subscribe
//! per [`EventKind`].
//!
//! ## Example Usage
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use life_arena::core::{CellPos, PlayerId};
//! use life_arena::events::{EventKind, FieldEvent, Observer, Subject};
//!
//! #[derive(Default)]
//! struct Placements(Cell<u32>);
//!
//! impl Observer<FieldEvent> for Placements {
//!     fn update(&self, _event: &FieldEvent) {
//!         self.0.set(self.0.get() + 1);
//!     }
//! }
//!
//! let subject = Subject::new();
//! let placements = Rc::new(Placements::default());
//! subject.attach(&placements, EventKind::CreatureSet);
//!
//! subject.notify(&FieldEvent::CreatureSet { pos: CellPos::new(0, 0), owner: PlayerId::new(0) });
//! subject.notify(&FieldEvent::Cleared);
//! assert_eq!(placements.0.get(), 1);
//! ```

mod event;
mod subject;

pub use event::{Event, EventKind, FieldEvent, ModelEvent};
pub use subject::{Observer, Subject};
