//! Overlay surfaces and small reusable widgets.

use eframe::egui;

use crate::ui::theme::{Palette, BRAND_600};

pub fn ui_in_rect<R>(
    ui: &mut egui::Ui,
    rect: egui::Rect,
    add: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    let mut child = ui.new_child(
        egui::UiBuilder::new()
            .max_rect(rect)
            .layout(egui::Layout::top_down(egui::Align::Min)),
    );
    child.set_clip_rect(rect.intersect(ui.clip_rect()));
    add(&mut child)
}

pub struct SurfaceResponse<R> {
    pub inner: Option<R>,
    /// Backdrop click or Escape.
    pub dismissed: bool,
}

/// Open/close overlay with a dismiss signal. Contents decide their own close
/// controls and report them through `inner`.
pub trait ModalSurface {
    fn is_open(&self) -> bool;

    fn show<R>(
        &self,
        ctx: &egui::Context,
        add_contents: impl FnOnce(&mut egui::Ui) -> R,
    ) -> SurfaceResponse<R>;
}

/// Centered dialog over a dimmed backdrop.
pub struct NewsDialog {
    id: egui::Id,
    open: bool,
    max_width: f32,
    viewport: egui::Rect,
    palette: Palette,
}

impl NewsDialog {
    pub fn new(
        id_salt: impl std::hash::Hash,
        open: bool,
        viewport: egui::Rect,
        palette: Palette,
    ) -> Self {
        Self {
            id: egui::Id::new(id_salt),
            open,
            max_width: 768.0,
            viewport,
            palette,
        }
    }

    fn content_width(&self) -> f32 {
        (self.viewport.width() - 64.0).clamp(240.0, self.max_width)
    }
}

impl ModalSurface for NewsDialog {
    fn is_open(&self) -> bool {
        self.open
    }

    fn show<R>(
        &self,
        ctx: &egui::Context,
        add_contents: impl FnOnce(&mut egui::Ui) -> R,
    ) -> SurfaceResponse<R> {
        if !self.open {
            return SurfaceResponse {
                inner: None,
                dismissed: false,
            };
        }

        let frame = egui::Frame::new()
            .fill(self.palette.surface)
            .corner_radius(egui::CornerRadius::same(12))
            .inner_margin(egui::Margin::same(24))
            .shadow(egui::Shadow {
                offset: [0, 12],
                blur: 40,
                spread: 0,
                color: self.palette.shadow,
            });
        let width = self.content_width();
        let response = egui::Modal::new(self.id)
            .backdrop_color(self.palette.backdrop)
            .frame(frame)
            .show(ctx, |ui| {
                ui.set_width(width);
                add_contents(ui)
            });
        let dismissed = response.should_close();
        SurfaceResponse {
            inner: Some(response.inner),
            dismissed,
        }
    }
}

/// Full-height panel sliding over the right edge of the window.
pub struct SlideOverPanel {
    id: egui::Id,
    open: bool,
    covered: bool,
    max_width: f32,
    viewport: egui::Rect,
    palette: Palette,
}

impl SlideOverPanel {
    pub fn new(
        id_salt: impl std::hash::Hash,
        open: bool,
        viewport: egui::Rect,
        palette: Palette,
    ) -> Self {
        Self {
            id: egui::Id::new(id_salt),
            open,
            covered: false,
            max_width: 384.0,
            viewport,
            palette,
        }
    }

    /// While a dialog sits above the panel, Escape and backdrop clicks belong
    /// to that dialog.
    pub fn covered_by_modal(mut self, covered: bool) -> Self {
        self.covered = covered;
        self
    }

    fn dismisses(&self, outside_click: bool, escape: bool) -> bool {
        !self.covered && (outside_click || escape)
    }

    fn panel_rect(&self) -> egui::Rect {
        let width = self.viewport.width().min(self.max_width);
        egui::Rect::from_min_max(
            egui::pos2(self.viewport.right() - width, self.viewport.top()),
            self.viewport.max,
        )
    }
}

impl ModalSurface for SlideOverPanel {
    fn is_open(&self) -> bool {
        self.open
    }

    fn show<R>(
        &self,
        ctx: &egui::Context,
        add_contents: impl FnOnce(&mut egui::Ui) -> R,
    ) -> SurfaceResponse<R> {
        if !self.open {
            return SurfaceResponse {
                inner: None,
                dismissed: false,
            };
        }

        let viewport = self.viewport;
        let panel_rect = self.panel_rect();
        let palette = self.palette;
        let area = egui::Area::new(self.id)
            .order(egui::Order::Foreground)
            .fixed_pos(viewport.min)
            .show(ctx, |ui| {
                let backdrop = ui.allocate_rect(viewport, egui::Sense::click());
                ui.painter().rect_filled(
                    panel_rect.expand(1.0),
                    egui::CornerRadius::ZERO,
                    palette.divider,
                );
                ui.painter()
                    .rect_filled(panel_rect, egui::CornerRadius::ZERO, palette.surface);
                let inner = ui_in_rect(ui, panel_rect.shrink(24.0), add_contents);
                let outside_click = backdrop.clicked()
                    && backdrop
                        .interact_pointer_pos()
                        .is_some_and(|pos| !panel_rect.contains(pos));
                (inner, outside_click)
            });

        let (inner, outside_click) = area.inner;
        let escape = ctx.input(|input| input.key_pressed(egui::Key::Escape));
        SurfaceResponse {
            inner: Some(inner),
            dismissed: self.dismisses(outside_click, escape),
        }
    }
}

/// Filled brand button. Hover brightens, press darkens.
pub fn primary_button(ui: &mut egui::Ui, label: &str, palette: &Palette) -> egui::Response {
    ui.scope(|ui| {
        let widgets = &mut ui.visuals_mut().widgets;
        widgets.inactive.weak_bg_fill = palette.brand;
        widgets.hovered.weak_bg_fill = palette.brand_hover;
        widgets.active.weak_bg_fill = BRAND_600;
        for state in [
            &mut widgets.inactive,
            &mut widgets.hovered,
            &mut widgets.active,
        ] {
            state.bg_stroke = egui::Stroke::NONE;
            state.corner_radius = egui::CornerRadius::same(6);
        }
        ui.add(egui::Button::new(
            egui::RichText::new(label)
                .strong()
                .color(egui::Color32::WHITE),
        ))
    })
    .inner
}

/// Text-only navigation entry; `block` renders the wide mobile-menu variant.
pub fn nav_item(
    ui: &mut egui::Ui,
    label: &str,
    active: bool,
    block: bool,
    palette: &Palette,
) -> egui::Response {
    let font = if block {
        egui::FontId::proportional(16.0)
    } else {
        egui::FontId::proportional(14.0)
    };
    let galley = egui::WidgetText::from(egui::RichText::new(label).strong().font(font))
        .into_galley(
            ui,
            Some(egui::TextWrapMode::Extend),
            f32::INFINITY,
            egui::TextStyle::Button,
        );
    let padding = if block {
        egui::vec2(12.0, 8.0)
    } else {
        egui::vec2(4.0, 6.0)
    };
    let mut desired = galley.size() + padding * 2.0;
    if block {
        desired.x = ui.available_width();
    }
    let (rect, response) = ui.allocate_exact_size(desired, egui::Sense::click());
    if ui.is_rect_visible(rect) {
        let hovered = response.hovered();
        if block && (active || hovered) {
            ui.painter()
                .rect_filled(rect, egui::CornerRadius::same(8), palette.chip_fill);
        }
        let color = if active || (hovered && !block) {
            palette.brand
        } else {
            palette.title_text
        };
        ui.painter().galley(rect.min + padding, galley, color);
    }
    response.on_hover_cursor(egui::CursorIcon::PointingHand)
}

/// Borderless icon button for the menu and close controls.
pub fn icon_button(ui: &mut egui::Ui, icon: &str, palette: &Palette) -> egui::Response {
    ui.add(
        egui::Button::new(
            egui::RichText::new(icon)
                .size(20.0)
                .color(palette.muted_text),
        )
        .frame(false)
        .min_size(egui::vec2(32.0, 32.0)),
    )
    .on_hover_cursor(egui::CursorIcon::PointingHand)
}
