//! Area factory bound to one shared field.

use std::rc::Rc;

use super::area::FieldArea;
use super::grid::Field;
use crate::core::{CellPos, ConfigError};

/// Builds [`FieldArea`]s over a single field.
///
/// ```
/// use std::rc::Rc;
/// use life_arena::core::CellPos;
/// use life_arena::field::{AreaFactory, Field, Rectangle};
///
/// let field = Rc::new(Field::new(10, 4, Box::new(Rectangle)).unwrap());
/// let factory = AreaFactory::new(field);
/// let halves = factory.vertical_strips(2).unwrap();
/// assert_eq!(halves[0].lower_right_corner(), CellPos::new(4, 3));
/// assert_eq!(halves[1].upper_left_corner(), CellPos::new(5, 0));
/// ```
#[derive(Debug, Clone)]
pub struct AreaFactory {
    field: Rc<Field>,
}

impl AreaFactory {
    pub fn new(field: Rc<Field>) -> Self {
        Self { field }
    }

    #[must_use]
    pub fn field(&self) -> &Rc<Field> {
        &self.field
    }

    /// A locked area spanning `upper_left..=lower_right`.
    pub fn create_area(&self, upper_left: CellPos, lower_right: CellPos) -> Result<FieldArea, ConfigError> {
        FieldArea::new(Rc::clone(&self.field), upper_left, lower_right)
    }

    /// A locked area covering the whole field.
    #[must_use]
    pub fn whole_field(&self) -> FieldArea {
        FieldArea::whole(Rc::clone(&self.field))
    }

    /// Split the board into `count` full-height strips, left to right.
    ///
    /// Strips are `width / count` columns wide; the last one takes the
    /// remaining columns.
    pub fn vertical_strips(&self, count: usize) -> Result<Vec<FieldArea>, ConfigError> {
        let columns = self.field.width();
        if count == 0 || count > columns {
            return Err(ConfigError::TooManyStrips {
                columns,
                strips: count,
            });
        }
        let strip = columns / count;
        let bottom = self.field.height() - 1;

        (0..count)
            .map(|i| {
                let left = i * strip;
                let right = if i + 1 == count { columns - 1 } else { left + strip - 1 };
                self.create_area(CellPos::new(left, 0), CellPos::new(right, bottom))
            })
            .collect()
    }
}
