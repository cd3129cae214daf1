//! DataTable Component
//!
//! Renders one page of rows with clickable sortable headers. The table holds
//! no state: rows, sort and page come from the caller's `TableState`.

use std::rc::Rc;

use gpui::{
    App, ElementId, FontWeight, InteractiveElement, IntoElement, ParentElement, Rgba, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use super::column::{Column, ColumnWidth};
use super::pagination::Pagination;
use crate::domain::config::TableVariant;
use crate::domain::query::SortSpec;
use crate::domain::record::Fields;
use crate::theme::colors::CatalogColors;

/// Resolved look of a table variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableStyle {
    pub cell_px: f32,
    pub cell_py: f32,
    pub striped: bool,
    pub cell_borders: bool,
    pub dark_header: bool,
    pub rounded: bool,
}

impl TableStyle {
    pub fn for_variant(variant: TableVariant) -> Self {
        let base = TableStyle {
            cell_px: 24.0,
            cell_py: 12.0,
            striped: false,
            cell_borders: false,
            dark_header: false,
            rounded: false,
        };
        match variant {
            TableVariant::Default => base,
            TableVariant::Striped => TableStyle {
                striped: true,
                ..base
            },
            TableVariant::Bordered => TableStyle {
                cell_borders: true,
                ..base
            },
            TableVariant::Compact => TableStyle {
                cell_px: 12.0,
                cell_py: 4.0,
                ..base
            },
            TableVariant::Modern => TableStyle {
                dark_header: true,
                rounded: true,
                ..base
            },
        }
    }

    fn header_colors(&self) -> (Rgba, Rgba) {
        if self.dark_header {
            (CatalogColors::table_header_dark(), CatalogColors::text_light())
        } else {
            (CatalogColors::table_header_bg(), CatalogColors::text_secondary())
        }
    }

    fn row_bg(&self, index: usize) -> Rgba {
        if self.striped && index % 2 == 1 {
            CatalogColors::table_row_alt()
        } else {
            CatalogColors::surface()
        }
    }
}

type SortHandler = Rc<dyn Fn(&str, &mut Window, &mut App) + 'static>;

/// DataTable component
#[derive(IntoElement)]
pub struct DataTable<R: Fields + 'static> {
    id: SharedString,
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    sort: Option<SortSpec>,
    variant: TableVariant,
    loading: bool,
    loading_message: SharedString,
    empty_message: SharedString,
    on_sort: Option<SortHandler>,
    pagination: Option<Pagination>,
}

impl<R: Fields + 'static> DataTable<R> {
    pub fn new(id: impl Into<SharedString>, columns: Vec<Column<R>>, rows: Vec<R>) -> Self {
        Self {
            id: id.into(),
            columns,
            rows,
            sort: None,
            variant: TableVariant::Default,
            loading: false,
            loading_message: "Loading...".into(),
            empty_message: "No data".into(),
            on_sort: None,
            pagination: None,
        }
    }

    /// Current sort, shown as an arrow on its header
    pub fn sort(mut self, sort: Option<SortSpec>) -> Self {
        self.sort = sort;
        self
    }

    pub fn variant(mut self, variant: TableVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn loading(mut self, loading: bool, message: impl Into<SharedString>) -> Self {
        self.loading = loading;
        self.loading_message = message.into();
        self
    }

    pub fn empty_message(mut self, message: impl Into<SharedString>) -> Self {
        self.empty_message = message.into();
        self
    }

    /// Called with the field of a clicked sortable header
    pub fn on_sort(mut self, handler: impl Fn(&str, &mut Window, &mut App) + 'static) -> Self {
        self.on_sort = Some(Rc::new(handler));
        self
    }

    /// Footer shown under the rows
    pub fn pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }

    fn header_cell(&self, ix: usize, column: &Column<R>, style: &TableStyle) -> impl IntoElement {
        let (_, header_text) = style.header_colors();
        let arrow = self
            .sort
            .as_ref()
            .filter(|s| column.sortable && s.field.as_str() == column.field.as_ref())
            .map(|s| s.direction.arrow());

        let mut cell = sized_cell(
            div().id(ElementId::NamedInteger(
                format!("{}-header", self.id).into(),
                ix as u64,
            )),
            column.width,
        )
        .px(px(style.cell_px))
        .py(px(style.cell_py))
        .flex()
        .items_center()
        .gap_1()
        .text_xs()
        .font_weight(FontWeight::MEDIUM)
        .text_color(header_text)
        .when(style.cell_borders, |el| {
            el.border_r_1().border_color(CatalogColors::border())
        })
        .child(column.label.to_uppercase())
        .when_some(arrow, |el, arrow| el.child(arrow));

        if column.sortable {
            cell = cell.cursor_pointer().hover(|s| s.text_color(CatalogColors::text_primary()));
            if let Some(handler) = self.on_sort.clone() {
                let field = column.field.clone();
                cell = cell.on_click(move |_, window, cx| handler(&field, window, cx));
            }
        }
        cell
    }

    fn render_row(&self, index: usize, row: &R, style: &TableStyle) -> impl IntoElement {
        div()
            .w_full()
            .flex()
            .bg(style.row_bg(index))
            .border_b_1()
            .border_color(CatalogColors::border())
            .children(self.columns.iter().map(|column| {
                sized_cell(div(), column.width)
                    .px(px(style.cell_px))
                    .py(px(style.cell_py))
                    .text_sm()
                    .text_color(CatalogColors::text_primary())
                    .overflow_hidden()
                    .when(style.cell_borders, |el| {
                        el.border_r_1().border_color(CatalogColors::border())
                    })
                    .child(column.render_cell(row))
            }))
    }
}

fn sized_cell<E: Styled>(el: E, width: ColumnWidth) -> E {
    match width {
        ColumnWidth::Fixed(w) => el.w(px(w)).flex_none(),
        ColumnWidth::Flex => el.flex_1().min_w(px(80.0)),
    }
}

fn placeholder(message: SharedString) -> impl IntoElement {
    div()
        .w_full()
        .py_8()
        .flex()
        .justify_center()
        .text_sm()
        .text_color(CatalogColors::text_muted())
        .child(message)
}

impl<R: Fields + 'static> RenderOnce for DataTable<R> {
    fn render(mut self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let style = TableStyle::for_variant(self.variant);
        let (header_bg, _) = style.header_colors();
        let rows = std::mem::take(&mut self.rows);
        let pagination = self.pagination.take();

        let header = div()
            .w_full()
            .flex()
            .bg(header_bg)
            .border_b_1()
            .border_color(CatalogColors::border())
            .children(
                self.columns
                    .iter()
                    .enumerate()
                    .map(|(ix, column)| self.header_cell(ix, column, &style)),
            );

        let body = if self.loading {
            placeholder(self.loading_message.clone()).into_any_element()
        } else if rows.is_empty() {
            placeholder(self.empty_message.clone()).into_any_element()
        } else {
            div()
                .w_full()
                .flex()
                .flex_col()
                .children(
                    rows.iter()
                        .enumerate()
                        .map(|(ix, row)| self.render_row(ix, row, &style)),
                )
                .into_any_element()
        };

        div()
            .id(ElementId::Name(self.id.clone()))
            .w_full()
            .flex()
            .flex_col()
            .bg(CatalogColors::surface())
            .overflow_hidden()
            .when(style.cell_borders, |el| {
                el.border_1().border_color(CatalogColors::border())
            })
            .when(style.rounded, |el| el.rounded_lg().shadow_md())
            .child(header)
            .child(body)
            .children(pagination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_styles() {
        assert!(TableStyle::for_variant(TableVariant::Striped).striped);
        assert!(TableStyle::for_variant(TableVariant::Bordered).cell_borders);
        assert!(TableStyle::for_variant(TableVariant::Modern).dark_header);

        let compact = TableStyle::for_variant(TableVariant::Compact);
        let default = TableStyle::for_variant(TableVariant::Default);
        assert!(compact.cell_py < default.cell_py);
        assert!(!default.striped && !default.cell_borders && !default.dark_header);
    }

    #[test]
    fn test_striped_rows_alternate() {
        let style = TableStyle::for_variant(TableVariant::Striped);
        assert_ne!(style.row_bg(0), style.row_bg(1));
        assert_eq!(style.row_bg(0), style.row_bg(2));

        let plain = TableStyle::for_variant(TableVariant::Default);
        assert_eq!(plain.row_bg(0), plain.row_bg(1));
    }
}
