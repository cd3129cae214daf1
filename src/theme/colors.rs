//! Colors - Catalog Theme Colors

use gpui::{Rgba, rgb};

/// Catalog color palette - All colors are accessed via associated functions
pub struct CatalogColors;

impl CatalogColors {
    // Brand colors
    /// Primary accent - Blue 600
    pub fn primary() -> Rgba { rgb(0x2563eb) }
    /// Primary accent hover - Blue 700
    pub fn primary_hover() -> Rgba { rgb(0x1d4ed8) }
    /// Light primary tint for active navigation
    pub fn primary_soft() -> Rgba { rgb(0xeff6ff) }

    // Background colors
    /// Main background - Gray 100
    pub fn background() -> Rgba { rgb(0xf3f4f6) }
    /// Cards and panels
    pub fn surface() -> Rgba { rgb(0xffffff) }
    /// Filled inputs, table headers - Gray 50
    pub fn surface_muted() -> Rgba { rgb(0xf9fafb) }
    /// Sidebar background
    pub fn sidebar_bg() -> Rgba { rgb(0xffffff) }
    /// Log panel background - Dark slate
    pub fn log_panel_bg() -> Rgba { rgb(0x1e293b) }
    /// Modal backdrop
    pub fn overlay() -> Rgba { gpui::rgba(0x11182780) }

    // Text colors
    /// Primary text - Gray 900
    pub fn text_primary() -> Rgba { rgb(0x111827) }
    /// Secondary text - Gray 600
    pub fn text_secondary() -> Rgba { rgb(0x4b5563) }
    /// Muted text - Gray 400
    pub fn text_muted() -> Rgba { rgb(0x9ca3af) }
    /// Text on dark or colored backgrounds
    pub fn text_light() -> Rgba { rgb(0xffffff) }

    // Status colors
    /// Success - Green 600
    pub fn success() -> Rgba { rgb(0x16a34a) }
    /// Warning - Amber 500
    pub fn warning() -> Rgba { rgb(0xf59e0b) }
    /// Danger - Red 600
    pub fn danger() -> Rgba { rgb(0xdc2626) }
    /// Info - Blue 500
    pub fn info() -> Rgba { rgb(0x3b82f6) }

    // Border colors
    /// Default border - Gray 200
    pub fn border() -> Rgba { rgb(0xe5e7eb) }
    /// Input border - Gray 300
    pub fn border_strong() -> Rgba { rgb(0xd1d5db) }
    /// Focused border
    pub fn border_focus() -> Rgba { rgb(0x3b82f6) }

    // Button colors
    /// Secondary button background - Gray 600
    pub fn button_secondary_bg() -> Rgba { rgb(0x4b5563) }
    /// Ghost button hover
    pub fn button_ghost_hover() -> Rgba { rgb(0xf3f4f6) }

    // Table colors
    /// Table header background
    pub fn table_header_bg() -> Rgba { rgb(0xf9fafb) }
    /// Modern table header background
    pub fn table_header_dark() -> Rgba { rgb(0x1f2937) }
    /// Table row hover
    pub fn table_row_hover() -> Rgba { rgb(0xf3f4f6) }
    /// Table row alternate
    pub fn table_row_alt() -> Rgba { rgb(0xf9fafb) }

    // Badge colors (background, text)
    pub fn badge_active() -> (Rgba, Rgba) { (rgb(0xdcfce7), rgb(0x166534)) }
    pub fn badge_pending() -> (Rgba, Rgba) { (rgb(0xfef9c3), rgb(0x854d0e)) }
    pub fn badge_inactive() -> (Rgba, Rgba) { (rgb(0xfee2e2), rgb(0x991b1b)) }
    pub fn badge_completed() -> (Rgba, Rgba) { (rgb(0xdbeafe), rgb(0x1e40af)) }
    pub fn badge_default() -> (Rgba, Rgba) { (rgb(0xf3f4f6), rgb(0x1f2937)) }

    // Timeline markers
    pub fn marker_task() -> Rgba { rgb(0x3b82f6) }
    pub fn marker_comment() -> Rgba { rgb(0x22c55e) }
    pub fn marker_other() -> Rgba { rgb(0x6b7280) }

    // Accents for form control variants
    pub fn accent_green() -> Rgba { rgb(0x16a34a) }
    pub fn accent_purple() -> Rgba { rgb(0x9333ea) }
    pub fn accent_pink() -> Rgba { rgb(0xdb2777) }
    pub fn accent_indigo() -> Rgba { rgb(0x4f46e5) }
    pub fn accent_gray() -> Rgba { rgb(0x4b5563) }
    /// Switch track when off
    pub fn track_off() -> Rgba { rgb(0xe5e7eb) }
    pub fn track_off_pink() -> Rgba { rgb(0xfbcfe8) }
}
