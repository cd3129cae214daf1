//! Column Definition
//!
//! Columns name a record field, a header label and optionally a custom cell
//! renderer. Without a renderer the cell shows the field's display text.

use std::rc::Rc;

use gpui::{AnyElement, IntoElement, SharedString};

use crate::domain::record::Fields;

/// Column width mode
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum ColumnWidth {
    /// Fixed width in pixels
    Fixed(f32),
    /// Share the remaining space
    #[default]
    Flex,
}

type CellRenderer<R> = Rc<dyn Fn(&R) -> AnyElement + 'static>;

/// Column definition for the DataTable
pub struct Column<R> {
    /// Field this column displays and sorts by
    pub field: SharedString,
    /// Column header label
    pub label: SharedString,
    pub width: ColumnWidth,
    pub sortable: bool,
    render: Option<CellRenderer<R>>,
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            field: self.field.clone(),
            label: self.label.clone(),
            width: self.width,
            sortable: self.sortable,
            render: self.render.clone(),
        }
    }
}

impl<R: Fields + 'static> Column<R> {
    pub fn new(field: impl Into<SharedString>, label: impl Into<SharedString>) -> Self {
        Self {
            field: field.into(),
            label: label.into(),
            width: ColumnWidth::default(),
            sortable: false,
            render: None,
        }
    }

    pub fn fixed_width(mut self, width: f32) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Replace the default text cell with a custom element
    pub fn render(mut self, render: impl Fn(&R) -> AnyElement + 'static) -> Self {
        self.render = Some(Rc::new(render));
        self
    }

    /// Plain text for a cell; empty when the field is missing
    pub fn cell_text(&self, row: &R) -> SharedString {
        row.field(&self.field)
            .map(|v| SharedString::from(v.to_string()))
            .unwrap_or_default()
    }

    /// Render a cell
    pub fn render_cell(&self, row: &R) -> AnyElement {
        match &self.render {
            Some(render) => render(row),
            None => self.cell_text(row).into_any_element(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::Record;

    #[test]
    fn test_cell_text_defaults_to_field_value() {
        let column: Column<Record> = Column::new("age", "Age").sortable();
        let row = Record::new().with("name", "John Doe").with("age", 30);
        assert_eq!(column.cell_text(&row).as_ref(), "30");
        assert!(column.sortable);

        let missing = Record::new().with("name", "Jane");
        assert_eq!(column.cell_text(&missing).as_ref(), "");
    }

    #[test]
    fn test_builder_width() {
        let column: Column<Record> = Column::new("id", "ID").fixed_width(60.0);
        assert_eq!(column.width, ColumnWidth::Fixed(60.0));
        assert_eq!(Column::<Record>::new("x", "X").width, ColumnWidth::Flex);
    }
}
