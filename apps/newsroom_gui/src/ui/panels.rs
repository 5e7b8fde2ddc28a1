//! Page sections drawn from a composed `Scene`. Panels never mutate the
//! session; they push `UiAction`s that the app applies after the frame.

use crossbeam_channel::Sender;
use eframe::egui;
use shared::domain::{NewsId, NewsItem, Page};
use view_core::{NavEntry, Pose, SearchForm};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::reducer::{NavSource, UiAction};
use crate::ui::images::ImageCache;
use crate::ui::theme::{Palette, BRAND_300, BRAND_BRIGHT};
use crate::ui::widgets::{icon_button, nav_item, primary_button};

/// Below this width the header collapses into the menu button.
pub const DESKTOP_NAV_MIN_WIDTH: f32 = 1024.0;
/// At or above this width the news grid uses two columns.
pub const TWO_COLUMN_MIN_WIDTH: f32 = 768.0;
pub const HEADER_HEIGHT: f32 = 80.0;
pub const CONTENT_MAX_WIDTH: f32 = 1280.0;
const CARD_HOVER_LIFT: f32 = 5.0;
const CARD_GAP: f32 = 32.0;
const AVATAR_SIZE: f32 = 40.0;
const PLACEHOLDER_LABEL: &str = "Image indisponible";

/// Per-frame rendering inputs shared by every panel.
pub struct RenderCtx<'a> {
    pub palette: &'a Palette,
    pub images: &'a mut ImageCache,
    pub cmd_tx: &'a Sender<BackendCommand>,
    pub actions: &'a mut Vec<UiAction>,
}

pub fn grid_columns(width: f32) -> usize {
    if width >= TWO_COLUMN_MIN_WIDTH {
        2
    } else {
        1
    }
}

pub fn shows_desktop_nav(width: f32) -> bool {
    width >= DESKTOP_NAV_MIN_WIDTH
}

fn content_margin(width: f32) -> f32 {
    if width >= DESKTOP_NAV_MIN_WIDTH {
        32.0
    } else {
        24.0
    }
}

pub fn header(ui: &mut egui::Ui, rcx: &mut RenderCtx<'_>, brand: &str, nav: &[NavEntry; 3]) {
    let width = ui.available_width();
    let margin = content_margin(width) as i8;
    egui::Frame::new()
        .fill(rcx.palette.header_fill)
        .inner_margin(egui::Margin::symmetric(margin, 20))
        .show(ui, |ui| {
            ui.set_min_height(HEADER_HEIGHT - 40.0);
            ui.horizontal_centered(|ui| {
                ui.label(
                    egui::RichText::new(brand)
                        .size(24.0)
                        .strong()
                        .color(rcx.palette.brand),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if !shows_desktop_nav(width) {
                        if icon_button(ui, "☰", rcx.palette)
                            .on_hover_text("Open main menu")
                            .clicked()
                        {
                            rcx.actions.push(UiAction::OpenMobileMenu);
                        }
                        return;
                    }
                    for entry in nav.iter().rev() {
                        if nav_item(ui, entry.label, entry.active, false, rcx.palette).clicked() {
                            rcx.actions.push(UiAction::Navigate {
                                page: entry.page,
                                from: NavSource::Header,
                            });
                        }
                        ui.add_space(40.0);
                    }
                });
            });
        });
}

pub fn mobile_menu(
    ui: &mut egui::Ui,
    rcx: &mut RenderCtx<'_>,
    brand: &str,
    nav: &[NavEntry; 3],
) -> bool {
    let mut close_requested = false;
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(brand)
                .size(24.0)
                .strong()
                .color(rcx.palette.brand),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            close_requested = icon_button(ui, "✕", rcx.palette)
                .on_hover_text("Close menu")
                .clicked();
        });
    });
    ui.add_space(24.0);
    ui.separator();
    ui.add_space(12.0);
    for entry in nav {
        if nav_item(ui, entry.label, entry.active, true, rcx.palette).clicked() {
            rcx.actions.push(UiAction::Navigate {
                page: entry.page,
                from: NavSource::MobileMenu,
            });
        }
        ui.add_space(4.0);
    }
    close_requested
}

fn page_heading(ui: &mut egui::Ui, palette: &Palette, heading: &str, intro: &str) {
    ui.label(
        egui::RichText::new(heading)
            .size(if ui.available_width() >= 640.0 { 48.0 } else { 36.0 })
            .strong()
            .color(palette.title_text),
    );
    ui.add_space(8.0);
    ui.label(
        egui::RichText::new(intro)
            .size(18.0)
            .color(palette.body_text),
    );
    ui.add_space(48.0);
}

/// Centers page content inside the window, capped at the content width.
pub fn page_container<R>(ui: &mut egui::Ui, add: impl FnOnce(&mut egui::Ui) -> R) -> R {
    let full = ui.available_width();
    let margin = content_margin(full);
    let width = (full - margin * 2.0).clamp(0.0, CONTENT_MAX_WIDTH - margin * 2.0);
    let side = ((full - width) / 2.0).max(0.0);
    ui.horizontal_top(|ui| {
        ui.add_space(side);
        ui.vertical(|ui| {
            ui.set_width(width);
            ui.add_space(48.0);
            let inner = add(ui);
            ui.add_space(48.0);
            inner
        })
        .inner
    })
    .inner
}

pub fn news_page(
    ui: &mut egui::Ui,
    rcx: &mut RenderCtx<'_>,
    heading: &str,
    intro: &str,
    items: &[NewsItem],
    hovered_card: &mut Option<NewsId>,
) {
    page_heading(ui, rcx.palette, heading, intro);

    let columns = grid_columns(ui.available_width());
    let previous_hover = *hovered_card;
    let mut hovered_now = None;
    let gap = CARD_GAP;
    let column_width = (ui.available_width() - gap * (columns as f32 - 1.0)) / columns as f32;

    for row in items.chunks(columns) {
        ui.horizontal_top(|ui| {
            ui.spacing_mut().item_spacing.x = gap;
            for item in row {
                ui.vertical(|ui| {
                    ui.set_width(column_width);
                    let lifted = previous_hover == Some(item.id);
                    let response = news_card(ui, rcx, item, lifted);
                    if response.hovered() {
                        hovered_now = Some(item.id);
                    }
                    if response.clicked() {
                        rcx.actions.push(UiAction::SelectNews(item.id));
                    }
                });
            }
        });
        ui.add_space(gap);
    }
    *hovered_card = hovered_now;
}

fn news_card(
    ui: &mut egui::Ui,
    rcx: &mut RenderCtx<'_>,
    item: &NewsItem,
    lifted: bool,
) -> egui::Response {
    let lift = ui.ctx().animate_bool_with_time(
        egui::Id::new(("news-card-lift", item.id.0)),
        lifted,
        0.3,
    ) * CARD_HOVER_LIFT;
    let palette = rcx.palette;
    let shadow = egui::Shadow {
        offset: [0, (6.0 + lift * 2.0) as i8],
        blur: (18.0 + lift * 4.0) as u8,
        spread: 0,
        color: palette.shadow,
    };

    ui.scope_builder(
        egui::UiBuilder::new()
            .id_salt(("news-card", item.id.0))
            .sense(egui::Sense::click()),
        |ui| {
            ui.style_mut().interaction.selectable_labels = false;
            egui::Frame::new()
                .fill(palette.surface)
                .corner_radius(egui::CornerRadius::same(16))
                .shadow(shadow)
                .outer_margin(egui::Margin {
                    left: 0,
                    right: 0,
                    top: (CARD_HOVER_LIFT - lift).round() as i8,
                    bottom: lift.round() as i8,
                })
                .show(ui, |ui| {
                    let width = ui.available_width();
                    image_slot(
                        ui,
                        rcx,
                        &item.image_url,
                        egui::vec2(width, width * 9.0 / 16.0),
                        egui::CornerRadius {
                            nw: 16,
                            ne: 16,
                            sw: 0,
                            se: 0,
                        },
                    );
                    egui::Frame::new()
                        .inner_margin(egui::Margin::same(24))
                        .show(ui, |ui| {
                            meta_row(ui, palette, item);
                            ui.add_space(16.0);
                            let title_color = if lifted {
                                palette.brand
                            } else {
                                palette.title_text
                            };
                            ui.label(
                                egui::RichText::new(&item.title)
                                    .size(18.0)
                                    .strong()
                                    .color(title_color),
                            );
                            ui.add_space(8.0);
                            clamped_description(ui, palette, &item.description, 3);
                            if let Some(author) = &item.author {
                                ui.add_space(24.0);
                                author_row(ui, rcx, &author.name, &author.role, &author.image_url);
                            }
                        });
                });
        },
    )
    .response
    .on_hover_cursor(egui::CursorIcon::PointingHand)
}

fn meta_row(ui: &mut egui::Ui, palette: &Palette, item: &NewsItem) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 16.0;
        ui.label(
            egui::RichText::new(item.display_date())
                .size(12.0)
                .color(palette.muted_text),
        );
        egui::Frame::new()
            .fill(palette.chip_fill)
            .corner_radius(egui::CornerRadius::same(255))
            .inner_margin(egui::Margin::symmetric(12, 6))
            .show(ui, |ui| {
                ui.label(
                    egui::RichText::new(&item.category)
                        .size(12.0)
                        .color(palette.body_text),
                );
            });
    });
}

fn clamped_description(ui: &mut egui::Ui, palette: &Palette, text: &str, max_rows: usize) {
    let mut job = egui::text::LayoutJob::simple(
        text.to_owned(),
        egui::FontId::proportional(14.0),
        palette.body_text,
        ui.available_width(),
    );
    job.wrap.max_rows = max_rows;
    job.wrap.overflow_character = Some('…');
    let galley = ui.painter().layout_job(job);
    ui.label(galley);
}

fn author_row(ui: &mut egui::Ui, rcx: &mut RenderCtx<'_>, name: &str, role: &str, image: &str) {
    let palette = rcx.palette;
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 16.0;
        avatar(ui, rcx, image);
        ui.vertical(|ui| {
            ui.label(
                egui::RichText::new(name)
                    .size(14.0)
                    .strong()
                    .color(palette.title_text),
            );
            ui.label(egui::RichText::new(role).size(14.0).color(palette.body_text));
        });
    });
}

fn avatar(ui: &mut egui::Ui, rcx: &mut RenderCtx<'_>, reference: &str) {
    rcx.images.request(reference, rcx.cmd_tx);
    let size = egui::vec2(AVATAR_SIZE, AVATAR_SIZE);
    match rcx.images.texture(ui.ctx(), reference) {
        Some((texture, texture_size)) => {
            ui.add(
                egui::Image::new(&texture)
                    .uv(cover_uv(texture_size, size))
                    .fit_to_exact_size(size)
                    .corner_radius(AVATAR_SIZE / 2.0),
            );
        }
        None => {
            let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
            ui.painter()
                .circle_filled(rect.center(), AVATAR_SIZE / 2.0, rcx.palette.chip_fill);
        }
    }
}

/// Cropped UV rect so the texture covers `target` without distortion.
pub fn cover_uv(texture: egui::Vec2, target: egui::Vec2) -> egui::Rect {
    let full = egui::Rect::from_min_max(egui::Pos2::ZERO, egui::pos2(1.0, 1.0));
    if texture.x <= 0.0 || texture.y <= 0.0 || target.x <= 0.0 || target.y <= 0.0 {
        return full;
    }
    let texture_aspect = texture.x / texture.y;
    let target_aspect = target.x / target.y;
    if texture_aspect > target_aspect {
        let visible = target_aspect / texture_aspect;
        let inset = (1.0 - visible) / 2.0;
        egui::Rect::from_min_max(egui::pos2(inset, 0.0), egui::pos2(1.0 - inset, 1.0))
    } else {
        let visible = texture_aspect / target_aspect;
        let inset = (1.0 - visible) / 2.0;
        egui::Rect::from_min_max(egui::pos2(0.0, inset), egui::pos2(1.0, 1.0 - inset))
    }
}

fn image_slot(
    ui: &mut egui::Ui,
    rcx: &mut RenderCtx<'_>,
    reference: &str,
    size: egui::Vec2,
    corner_radius: egui::CornerRadius,
) {
    rcx.images.request(reference, rcx.cmd_tx);
    if let Some((texture, texture_size)) = rcx.images.texture(ui.ctx(), reference) {
        ui.add(
            egui::Image::new(&texture)
                .uv(cover_uv(texture_size, size))
                .fit_to_exact_size(size)
                .corner_radius(corner_radius),
        );
        return;
    }

    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    ui.painter()
        .rect_filled(rect, corner_radius, rcx.palette.image_placeholder);
    if rcx.images.is_failed(reference) {
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            PLACEHOLDER_LABEL,
            egui::FontId::proportional(14.0),
            rcx.palette.muted_text,
        );
    }
}

pub fn search_page(
    ui: &mut egui::Ui,
    rcx: &mut RenderCtx<'_>,
    form: &SearchForm,
    query: &mut String,
) {
    page_heading(ui, rcx.palette, form.heading, form.intro);

    let width = ui.available_width().min(576.0);
    let side = ((ui.available_width() - width) / 2.0).max(0.0);
    ui.horizontal_top(|ui| {
        ui.add_space(side);
        ui.vertical(|ui| {
            ui.set_width(width);
            ui.label(
                egui::RichText::new(form.field_label)
                    .size(14.0)
                    .color(rcx.palette.title_text),
            );
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("🔍").color(rcx.palette.muted_text));
                ui.add(
                    egui::TextEdit::singleline(query)
                        .id_salt(form.field_id)
                        .hint_text(form.placeholder)
                        .desired_width(f32::INFINITY)
                        .margin(egui::Margin::symmetric(10, 8)),
                );
            });
            ui.add_space(24.0);
            ui.vertical_centered(|ui| {
                if primary_button(ui, form.button_label, rcx.palette).clicked() {
                    tracing::debug!(
                        field = form.field_id,
                        query = %query.trim(),
                        "search submitted; no search backend is attached"
                    );
                }
            });
        });
    });
}

/// Detail contents; returns `true` when the close control was clicked.
pub fn news_detail(
    ui: &mut egui::Ui,
    rcx: &mut RenderCtx<'_>,
    item: &NewsItem,
    max_body_height: f32,
) -> bool {
    let palette = rcx.palette;
    let mut close_requested = false;
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(&item.title)
                .size(18.0)
                .strong()
                .color(palette.title_text),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            close_requested = icon_button(ui, "✕", palette).clicked();
        });
    });
    ui.add_space(16.0);

    let width = ui.available_width();
    egui::ScrollArea::vertical()
        .max_height(max_body_height)
        .show(ui, |ui| {
            image_slot(
                ui,
                rcx,
                &item.image_url,
                egui::vec2(width, width * 9.0 / 16.0),
                egui::CornerRadius::same(8),
            );
            ui.add_space(16.0);
            meta_row(ui, palette, item);
            ui.add_space(16.0);
            ui.label(
                egui::RichText::new(&item.description)
                    .size(16.0)
                    .color(palette.body_text),
            );
            if let Some(author) = &item.author {
                ui.add_space(24.0);
                ui.separator();
                ui.add_space(16.0);
                author_row(ui, rcx, &author.name, &author.role, &author.image_url);
            }
        });
    close_requested
}

/// Soft drifting brand glow with a faint cross pattern on top.
pub fn ambient_background(painter: &egui::Painter, rect: egui::Rect, pose: Pose, palette: &Palette) {
    let rotation = egui::emath::Rot2::from_angle(pose.rotation_deg.to_radians());
    let center = rect.center() + egui::vec2(pose.dx, pose.dy);
    let reach = rect.size().max_elem() * 0.75;

    let blobs = [
        (egui::vec2(0.0, 0.0), 1.0, palette.brand),
        (egui::vec2(-0.35, -0.25), 0.7, BRAND_BRIGHT),
        (egui::vec2(0.4, 0.3), 0.65, BRAND_BRIGHT),
        (egui::vec2(0.3, -0.4), 0.5, BRAND_300),
    ];
    for (offset, scale, color) in blobs {
        let blob_center = center + rotation * (offset * reach);
        let radius = reach * scale;
        // stacked translucent discs approximate a blurred radial gradient
        for step in 0..10 {
            let t = step as f32 / 10.0;
            painter.circle_filled(
                blob_center,
                radius * (1.0 - t * 0.9),
                color.gamma_multiply(0.012 + t * 0.004),
            );
        }
    }

    let cross = palette.brand.gamma_multiply(0.04);
    let mut y = rect.top() + 5.0;
    while y < rect.bottom() + 10.0 {
        let mut x = rect.left() + 5.0;
        while x < rect.right() + 10.0 {
            let c = egui::pos2(x, y);
            painter.rect_filled(
                egui::Rect::from_center_size(c, egui::vec2(10.0, 2.0)),
                egui::CornerRadius::ZERO,
                cross,
            );
            painter.rect_filled(
                egui::Rect::from_center_size(c, egui::vec2(2.0, 10.0)),
                egui::CornerRadius::ZERO,
                cross,
            );
            x += 30.0;
        }
        y += 30.0;
    }
}

/// Chrome label for a mounted page, used in debug traces.
pub fn page_slug(page: Page) -> &'static str {
    match page {
        Page::News => "news",
        Page::Company => "company",
        Page::Project => "project",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_switches_to_two_columns_at_tablet_width() {
        assert_eq!(grid_columns(767.0), 1);
        assert_eq!(grid_columns(768.0), 2);
        assert_eq!(grid_columns(1440.0), 2);
    }

    #[test]
    fn desktop_nav_needs_a_wide_window() {
        assert!(!shows_desktop_nav(1023.0));
        assert!(shows_desktop_nav(1024.0));
    }

    #[test]
    fn cover_uv_crops_the_long_side() {
        let wide = cover_uv(egui::vec2(200.0, 100.0), egui::vec2(100.0, 100.0));
        assert_eq!(wide.min, egui::pos2(0.25, 0.0));
        assert_eq!(wide.max, egui::pos2(0.75, 1.0));

        let tall = cover_uv(egui::vec2(100.0, 200.0), egui::vec2(100.0, 100.0));
        assert_eq!(tall.min, egui::pos2(0.0, 0.25));
        assert_eq!(tall.max, egui::pos2(1.0, 0.75));

        let exact = cover_uv(egui::vec2(160.0, 90.0), egui::vec2(320.0, 180.0));
        assert_eq!(exact.min, egui::Pos2::ZERO);
        assert_eq!(exact.max, egui::pos2(1.0, 1.0));
    }

    #[test]
    fn page_slugs_match_page_keys() {
        let slugs: Vec<_> = Page::ALL.into_iter().map(page_slug).collect();
        assert_eq!(slugs, ["news", "company", "project"]);
    }
}
