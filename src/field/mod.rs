//! Cells, the shared field and the areas carved out of it.
//!
//! ## Key Components
//!
//! - [`Creature`]: liveness plus owning [`PlayerId`](crate::core::PlayerId)
//! - [`Cell`]: optional creature slot and precomputed neighbor coordinates
//! - [`Shape`]: mask selecting playable coordinates ([`Rectangle`],
//!   [`Rhombus`], [`ExcludedCells`])
//! - [`Field`]: the grid, shared as `Rc<Field>`, publishing
//!   [`FieldEvent`](crate::events::FieldEvent)s
//! - [`FieldArea`]: lockable rectangle over a field, the unit of access for
//!   players and for the judge
//! - [`AreaFactory`]: builds areas over one field, including the per-player
//!   partition
//!
//! ## Example Usage
//!
//! ```
//! use std::rc::Rc;
//! use life_arena::core::{CellPos, PlayerId};
//! use life_arena::field::{Field, FieldArea, Rhombus};
//!
//! let field = Rc::new(Field::new(5, 5, Box::new(Rhombus::inscribed(5, 5))).unwrap());
//! let mut area = FieldArea::whole(Rc::clone(&field));
//!
//! // corners of the rhombus board are not playable
//! area.unlock();
//! assert!(!area.is_cell_available(CellPos::new(0, 0)));
//!
//! area.set_creature_in_cell(CellPos::new(2, 2), PlayerId::new(0)).unwrap();
//! assert_eq!(field.occupancy(), vec![(CellPos::new(2, 2), PlayerId::new(0))]);
//! ```

mod area;
mod cell;
mod creature;
mod factory;
mod grid;
mod neighbors;
mod shape;

pub use area::FieldArea;
pub use cell::{Cell, NeighborList};
pub use creature::{Creature, CreatureFactory, LivingCreatureFactory};
pub use factory::AreaFactory;
pub use grid::Field;
pub use neighbors::NeighborCounts;
pub use shape::{ExcludedCells, Rectangle, Rhombus, Shape};
