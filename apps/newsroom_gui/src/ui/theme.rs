//! Brand palette and egui style for the newsroom.

use eframe::egui::{self, Color32, CornerRadius, FontId, Stroke, TextStyle};

/// Ailancy green scale (the light half plus the 600/700 shades used for text).
pub const BRAND_50: Color32 = Color32::from_rgb(0xe6, 0xf3, 0xef);
pub const BRAND_100: Color32 = Color32::from_rgb(0xcd, 0xe7, 0xdf);
pub const BRAND_200: Color32 = Color32::from_rgb(0x9b, 0xd0, 0xbf);
pub const BRAND_300: Color32 = Color32::from_rgb(0x69, 0xb8, 0x9f);
pub const BRAND_400: Color32 = Color32::from_rgb(0x37, 0xa1, 0x7f);
pub const BRAND_500: Color32 = Color32::from_rgb(0x06, 0x84, 0x5e);
pub const BRAND_600: Color32 = Color32::from_rgb(0x05, 0x6a, 0x4b);
pub const BRAND_700: Color32 = Color32::from_rgb(0x04, 0x50, 0x38);

/// Hover tint for primary buttons.
pub const BRAND_BRIGHT: Color32 = Color32::from_rgb(0x06, 0xb4, 0x7e);

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub brand: Color32,
    pub brand_hover: Color32,
    pub page_background: Color32,
    pub surface: Color32,
    pub header_fill: Color32,
    pub title_text: Color32,
    pub body_text: Color32,
    pub muted_text: Color32,
    pub chip_fill: Color32,
    pub image_placeholder: Color32,
    pub divider: Color32,
    pub backdrop: Color32,
    pub shadow: Color32,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            brand: BRAND_500,
            brand_hover: BRAND_BRIGHT,
            page_background: Color32::WHITE,
            surface: Color32::WHITE,
            header_fill: Color32::from_white_alpha(204),
            title_text: Color32::from_rgb(17, 24, 39),
            body_text: Color32::from_rgb(75, 85, 99),
            muted_text: Color32::from_rgb(107, 114, 128),
            chip_fill: Color32::from_rgb(249, 250, 251),
            image_placeholder: Color32::from_rgb(229, 231, 235),
            divider: Color32::from_rgb(229, 231, 235),
            backdrop: Color32::from_black_alpha(77),
            shadow: Color32::from_black_alpha(40),
        }
    }
}

pub fn visuals(palette: &Palette) -> egui::Visuals {
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = palette.page_background;
    visuals.window_fill = palette.surface;
    visuals.extreme_bg_color = Color32::WHITE;
    visuals.faint_bg_color = palette.chip_fill;
    visuals.hyperlink_color = palette.brand;
    visuals.selection.bg_fill = BRAND_200;
    visuals.selection.stroke = Stroke::new(1.0, BRAND_700);
    visuals.window_corner_radius = CornerRadius::same(12);
    visuals.menu_corner_radius = CornerRadius::same(8);
    visuals.window_stroke = Stroke::NONE;
    visuals.widgets.hovered.bg_fill = BRAND_50;
    visuals.widgets.active.bg_fill = BRAND_100;
    visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, Color32::from_rgb(209, 213, 219));
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, BRAND_400);
    visuals.widgets.active.bg_stroke = Stroke::new(1.2, palette.brand);
    visuals
}

pub fn apply(ctx: &egui::Context, palette: &Palette) {
    let mut style = (*ctx.style()).clone();
    style.visuals = visuals(palette);
    style.text_styles = [
        (TextStyle::Heading, FontId::proportional(36.0)),
        (TextStyle::Body, FontId::proportional(15.0)),
        (TextStyle::Monospace, FontId::monospace(14.0)),
        (TextStyle::Button, FontId::proportional(14.0)),
        (TextStyle::Small, FontId::proportional(12.0)),
    ]
    .into();
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(16.0, 10.0);
    style.spacing.interact_size = egui::vec2(40.0, 34.0);
    ctx.set_style(style);
}
