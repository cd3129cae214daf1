//! Sidebar Component
//!
//! `NavBar` renders page links in one of five styles; `Sidebar` is the
//! vertical NavBar bound to the app's navigation state. The collapsible and
//! mega-menu styles are stateless too: the parent owns which part is open.

use std::rc::Rc;

use gpui::{
    App, ClickEvent, Context, ElementId, FontWeight, InteractiveElement, IntoElement,
    ParentElement, Render, RenderOnce, Rgba, SharedString, StatefulInteractiveElement, Styled,
    Window, div, prelude::*, px,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::ActivePage;
use crate::constants::SIDEBAR_WIDTH;
use crate::i18n::{Locale, t};
use crate::theme::colors::CatalogColors;
use crate::theme::typography::Typography;

/// Navigation layout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NavVariant {
    #[default]
    Vertical,
    Horizontal,
    Minimal,
    /// Dark bar whose links fold behind a menu button
    Responsive,
    /// Link row with groups that open a panel of described entries
    MegaMenu,
}

impl NavVariant {
    pub fn all() -> [NavVariant; 5] {
        [
            NavVariant::Vertical,
            NavVariant::Horizontal,
            NavVariant::Minimal,
            NavVariant::Responsive,
            NavVariant::MegaMenu,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavVariant::Vertical => "Vertical",
            NavVariant::Horizontal => "Horizontal",
            NavVariant::Minimal => "Minimal",
            NavVariant::Responsive => "Responsive",
            NavVariant::MegaMenu => "Mega Menu",
        }
    }

    /// Bar background; None is transparent
    fn bar_bg(&self) -> Option<Rgba> {
        match self {
            NavVariant::Horizontal | NavVariant::Responsive => {
                Some(CatalogColors::table_header_dark())
            }
            NavVariant::MegaMenu => Some(CatalogColors::surface_muted()),
            NavVariant::Vertical | NavVariant::Minimal => None,
        }
    }
}

/// One described entry inside a mega-menu group
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub title: SharedString,
    pub description: SharedString,
}

impl MenuItem {
    pub fn new(title: impl Into<SharedString>, description: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// A mega-menu heading and the entries its panel shows
#[derive(Debug, Clone, PartialEq)]
pub struct MenuGroup {
    pub title: SharedString,
    pub items: Vec<MenuItem>,
}

impl MenuGroup {
    pub fn new(title: impl Into<SharedString>, items: Vec<MenuItem>) -> Self {
        Self {
            title: title.into(),
            items,
        }
    }
}

/// Clicking a group heading opens it, or closes it when already open
pub fn toggle_group(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) { None } else { Some(clicked) }
}

/// Glyph on the collapse button
pub fn menu_glyph(expanded: bool) -> &'static str {
    if expanded { "✕" } else { "☰" }
}

/// Colors of one link
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkStyle {
    pub bg: Option<Rgba>,
    pub text: Rgba,
}

pub fn link_style(variant: NavVariant, active: bool) -> LinkStyle {
    match (variant, active) {
        (NavVariant::Vertical, true) => LinkStyle {
            bg: Some(CatalogColors::table_header_dark()),
            text: CatalogColors::text_light(),
        },
        (NavVariant::Vertical, false) => LinkStyle {
            bg: None,
            text: CatalogColors::text_secondary(),
        },
        (NavVariant::Horizontal | NavVariant::Responsive, true) => LinkStyle {
            bg: Some(CatalogColors::text_primary()),
            text: CatalogColors::text_light(),
        },
        (NavVariant::Horizontal | NavVariant::Responsive, false) => LinkStyle {
            bg: None,
            text: CatalogColors::border_strong(),
        },
        (NavVariant::Minimal | NavVariant::MegaMenu, true) => LinkStyle {
            bg: None,
            text: CatalogColors::primary(),
        },
        (NavVariant::Minimal | NavVariant::MegaMenu, false) => LinkStyle {
            bg: None,
            text: CatalogColors::text_secondary(),
        },
    }
}

type SelectHandler = Rc<dyn Fn(ActivePage, &mut Window, &mut App) + 'static>;
type GroupHandler = Rc<dyn Fn(Option<usize>, &mut Window, &mut App) + 'static>;

/// Row or column of page links
#[derive(IntoElement)]
pub struct NavBar {
    id: SharedString,
    variant: NavVariant,
    active: ActivePage,
    items: Vec<(ActivePage, SharedString)>,
    on_select: Option<SelectHandler>,
    brand: SharedString,
    expanded: bool,
    on_toggle: Option<Box<dyn Fn(&mut Window, &mut App) + 'static>>,
    groups: Vec<MenuGroup>,
    open_group: Option<usize>,
    on_open_group: Option<GroupHandler>,
}

impl NavBar {
    pub fn new(id: impl Into<SharedString>, active: ActivePage) -> Self {
        Self {
            id: id.into(),
            variant: NavVariant::default(),
            active,
            items: Vec::new(),
            on_select: None,
            brand: SharedString::default(),
            expanded: false,
            on_toggle: None,
            groups: Vec::new(),
            open_group: None,
            on_open_group: None,
        }
    }

    pub fn variant(mut self, variant: NavVariant) -> Self {
        self.variant = variant;
        self
    }

    /// One link per page, labelled in the given locale
    pub fn pages(mut self, pages: &[ActivePage], locale: Locale) -> Self {
        self.items = pages
            .iter()
            .map(|page| (*page, t(locale, page.title_key())))
            .collect();
        self
    }

    pub fn on_select(
        mut self,
        handler: impl Fn(ActivePage, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_select = Some(Rc::new(handler));
        self
    }

    /// Title shown beside the collapse button
    pub fn brand(mut self, brand: impl Into<SharedString>) -> Self {
        self.brand = brand.into();
        self
    }

    /// Whether a collapsible bar shows its links
    pub fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    pub fn on_toggle(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_toggle = Some(Box::new(handler));
        self
    }

    /// Mega-menu groups and which one (if any) has its panel open
    pub fn menu(mut self, groups: Vec<MenuGroup>, open: Option<usize>) -> Self {
        self.groups = groups;
        self.open_group = open;
        self
    }

    /// Called with the group that should be open next
    pub fn on_open_group(
        mut self,
        handler: impl Fn(Option<usize>, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_open_group = Some(Rc::new(handler));
        self
    }
}

fn render_menu_panel(group: MenuGroup) -> gpui::Div {
    div()
        .w_full()
        .p_4()
        .flex()
        .flex_wrap()
        .gap_4()
        .bg(CatalogColors::surface())
        .border_1()
        .border_color(CatalogColors::border())
        .rounded_md()
        .shadow_md()
        .children(group.items.into_iter().map(|item| {
            div()
                .w(px(200.0))
                .flex()
                .flex_col()
                .gap_1()
                .child(
                    div()
                        .text_size(px(Typography::TEXT_SM))
                        .font_weight(FontWeight::MEDIUM)
                        .text_color(CatalogColors::text_primary())
                        .child(item.title),
                )
                .child(
                    div()
                        .text_size(px(Typography::TEXT_XS))
                        .text_color(CatalogColors::text_muted())
                        .child(item.description),
                )
        }))
}

impl RenderOnce for NavBar {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let variant = self.variant;
        let active = self.active;
        let id = self.id;
        let on_select = self.on_select;

        let links: Vec<_> = self
            .items
            .into_iter()
            .enumerate()
            .map(|(ix, (page, label))| {
                let is_active = page == active;
                let style = link_style(variant, is_active);
                let handler = on_select.clone();

                div()
                    .id(ElementId::NamedInteger(format!("{id}-link").into(), ix as u64))
                    .flex()
                    .items_center()
                    .gap_2()
                    .text_size(px(Typography::TEXT_SM))
                    .text_color(style.text)
                    .cursor_pointer()
                    .when_some(style.bg, |el, bg| el.bg(bg))
                    .map(|el| match variant {
                        NavVariant::Vertical => {
                            el.w_full().px_4().py_2().font_weight(FontWeight::MEDIUM)
                        }
                        NavVariant::Horizontal => {
                            el.px_3().py_2().rounded_md().font_weight(FontWeight::MEDIUM)
                        }
                        NavVariant::Responsive => el.w_full().px_3().py_2().rounded_md(),
                        NavVariant::Minimal | NavVariant::MegaMenu => el.px_2().py_1(),
                    })
                    .when(!is_active, |el| match variant {
                        NavVariant::Minimal | NavVariant::MegaMenu => {
                            el.hover(|s| s.text_color(CatalogColors::primary()))
                        }
                        _ => el.hover(|s| {
                            s.bg(CatalogColors::button_secondary_bg())
                                .text_color(CatalogColors::text_light())
                        }),
                    })
                    .when_some(handler, |el, handler| {
                        el.on_click(move |_event: &ClickEvent, window, cx| {
                            handler(page, window, cx)
                        })
                    })
                    .when(variant == NavVariant::Vertical, |el| el.child(page.icon()))
                    .child(label)
            })
            .collect();

        let bar = div()
            .flex()
            .when_some(variant.bar_bg(), |el, bg| el.bg(bg).rounded_md());

        match variant {
            NavVariant::Vertical => bar.flex_col().gap_1().children(links),
            NavVariant::Horizontal => bar.items_center().gap_1().px_2().py_2().children(links),
            NavVariant::Minimal => bar.items_center().gap_4().children(links),
            NavVariant::Responsive => {
                let expanded = self.expanded;
                let mut toggle = div()
                    .id(ElementId::Name(format!("{id}-toggle").into()))
                    .px_2()
                    .py_1()
                    .rounded_md()
                    .text_color(CatalogColors::text_light())
                    .cursor_pointer()
                    .hover(|s| s.bg(CatalogColors::button_secondary_bg()))
                    .child(menu_glyph(expanded));
                if let Some(handler) = self.on_toggle {
                    toggle = toggle.on_click(move |_event: &ClickEvent, window, cx| {
                        handler(window, cx)
                    });
                }

                bar.flex_col()
                    .gap_1()
                    .p_2()
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .justify_between()
                            .child(
                                div()
                                    .px_2()
                                    .font_weight(FontWeight::SEMIBOLD)
                                    .text_color(CatalogColors::text_light())
                                    .child(self.brand),
                            )
                            .child(toggle),
                    )
                    .when(expanded, |el| el.children(links))
            }
            NavVariant::MegaMenu => {
                let open = self.open_group;
                let on_open = self.on_open_group;
                let panel = open
                    .and_then(|ix| self.groups.get(ix).cloned())
                    .map(render_menu_panel);

                let headings: Vec<_> = self
                    .groups
                    .into_iter()
                    .enumerate()
                    .map(|(ix, group)| {
                        let is_open = open == Some(ix);
                        let handler = on_open.clone();
                        div()
                            .id(ElementId::NamedInteger(format!("{id}-group").into(), ix as u64))
                            .flex()
                            .items_center()
                            .gap_1()
                            .px_2()
                            .py_1()
                            .text_size(px(Typography::TEXT_SM))
                            .font_weight(FontWeight::MEDIUM)
                            .cursor_pointer()
                            .text_color(if is_open {
                                CatalogColors::primary()
                            } else {
                                CatalogColors::text_secondary()
                            })
                            .hover(|s| s.text_color(CatalogColors::primary()))
                            .when_some(handler, |el, handler| {
                                el.on_click(move |_event: &ClickEvent, window, cx| {
                                    handler(toggle_group(open, ix), window, cx)
                                })
                            })
                            .child(group.title)
                            .child(div().text_size(px(10.0)).child(if is_open { "▲" } else { "▼" }))
                    })
                    .collect();

                div()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child(
                        bar.items_center()
                            .gap_4()
                            .px_3()
                            .py_2()
                            .children(headings)
                            .children(links),
                    )
                    .children(panel)
            }
        }
    }
}

/// Sidebar component
pub struct Sidebar {
    entities: AppEntities,
}

impl Sidebar {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.nav, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.session, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }
}

impl Render for Sidebar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let signed_in = self.entities.session.read(cx).is_authenticated();
        let active = self.entities.nav.read(cx).resolve(signed_in);
        let nav = self.entities.nav.clone();

        div()
            .w(px(SIDEBAR_WIDTH))
            .h_full()
            .flex_none()
            .bg(CatalogColors::sidebar_bg())
            .border_r_1()
            .border_color(CatalogColors::border())
            .pt_4()
            .child(
                NavBar::new("sidebar-nav", active)
                    .pages(ActivePage::all(), locale)
                    .on_select(move |page, _window, cx| {
                        nav.update(cx, |nav, cx| {
                            nav.navigate(page);
                            cx.notify();
                        });
                    }),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_link_is_highlighted() {
        for variant in NavVariant::all() {
            assert_ne!(link_style(variant, true), link_style(variant, false));
        }
        assert_eq!(link_style(NavVariant::Minimal, true).bg, None);
        assert_eq!(
            link_style(NavVariant::Minimal, true).text,
            CatalogColors::primary()
        );
    }

    #[test]
    fn test_bar_backgrounds() {
        assert!(NavVariant::Horizontal.bar_bg().is_some());
        assert!(NavVariant::Responsive.bar_bg().is_some());
        assert!(NavVariant::MegaMenu.bar_bg().is_some());
        assert!(NavVariant::Vertical.bar_bg().is_none());
        assert!(NavVariant::Minimal.bar_bg().is_none());
    }

    #[test]
    fn test_group_toggle_opens_one_at_a_time() {
        assert_eq!(toggle_group(None, 1), Some(1));
        assert_eq!(toggle_group(Some(1), 1), None);
        assert_eq!(toggle_group(Some(0), 1), Some(1));
    }

    #[test]
    fn test_menu_glyph_follows_state() {
        assert_eq!(menu_glyph(false), "☰");
        assert_eq!(menu_glyph(true), "✕");
    }
}
