use std::sync::Arc;

use content_store::NewsSource;
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::{NewsId, SearchPanel};
use view_core::{AmbientLoop, AnimationScheduler, DriftBounds, NewsroomSession, PageBody};

use crate::backend_bridge::commands::BackendCommand;
use crate::config::Settings;
use crate::controller::events::{err_label, UiEvent};
use crate::controller::reducer::{reduce_all, UiAction};
use crate::ui::images::ImageCache;
use crate::ui::panels::{self, RenderCtx, HEADER_HEIGHT};
use crate::ui::theme::{self, Palette};
use crate::ui::widgets::{ui_in_rect, ModalSurface, NewsDialog, SlideOverPanel};

pub struct NewsroomApp {
    session: NewsroomSession,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    images: ImageCache,
    palette: Palette,
    hovered_card: Option<NewsId>,
    company_query: String,
    project_query: String,
    scheduler: AnimationScheduler,
    ambient: Option<AmbientLoop>,
}

impl NewsroomApp {
    pub fn bootstrap(
        cc: &eframe::CreationContext<'_>,
        source: Arc<dyn NewsSource>,
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        settings: &Settings,
    ) -> Self {
        Self::new(
            &cc.egui_ctx,
            source,
            cmd_tx,
            ui_rx,
            settings.ambient_background,
        )
    }

    pub fn new(
        ctx: &egui::Context,
        source: Arc<dyn NewsSource>,
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        ambient_background: bool,
    ) -> Self {
        let palette = Palette::light();
        theme::apply(ctx, &palette);

        let now = ctx.input(|input| input.time);
        let scheduler = AnimationScheduler::new();
        let ambient = ambient_background.then(|| {
            AmbientLoop::mount(&scheduler, DriftBounds::default(), rand::random(), now)
        });
        tracing::info!(ambient = ambient.is_some(), "newsroom mounted");

        Self {
            session: NewsroomSession::mount(source, now),
            cmd_tx,
            ui_rx,
            images: ImageCache::default(),
            palette,
            hovered_card: None,
            company_query: String::new(),
            project_query: String::new(),
            scheduler,
            ambient,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => tracing::debug!("{message}"),
                UiEvent::Error(error) => {
                    tracing::error!(
                        category = err_label(error.category()),
                        context = ?error.context(),
                        "{}",
                        error.message()
                    );
                    if error.is_fatal() {
                        self.images.fail_pending(&error);
                    }
                }
                UiEvent::ImageLoaded { reference, image } => {
                    tracing::debug!(%reference, width = image.width, height = image.height, "image ready");
                    self.images.loaded(reference, image);
                }
                UiEvent::ImageFailed { reference, error } => {
                    self.images.failed(reference, error);
                }
            }
        }
    }

    fn render(&mut self, ctx: &egui::Context) -> Vec<UiAction> {
        let now = ctx.input(|input| input.time);
        let pose = self.ambient.as_mut().map(|ambient| ambient.pose(now));
        let mut actions = Vec::new();

        let panel_frame = egui::Frame::NONE.fill(self.palette.page_background);
        egui::CentralPanel::default()
            .frame(panel_frame)
            .show(ctx, |ui| {
                let viewport = ui.max_rect();
                if let Some(pose) = pose {
                    panels::ambient_background(ui.painter(), viewport, pose, &self.palette);
                }

                let scene = self.session.scene(now);
                let mut rcx = RenderCtx {
                    palette: &self.palette,
                    images: &mut self.images,
                    cmd_tx: &self.cmd_tx,
                    actions: &mut actions,
                };

                let header_rect = egui::Rect::from_min_size(
                    viewport.min,
                    egui::vec2(viewport.width(), HEADER_HEIGHT),
                );
                let page_rect =
                    egui::Rect::from_min_max(egui::pos2(viewport.left(), header_rect.bottom()), viewport.max);

                let frame = scene.page.frame;
                let company_query = &mut self.company_query;
                let project_query = &mut self.project_query;
                let hovered_card = &mut self.hovered_card;
                ui_in_rect(
                    ui,
                    page_rect.translate(egui::vec2(frame.offset_x, 0.0)),
                    |ui| {
                        ui.set_clip_rect(page_rect);
                        ui.set_opacity(frame.opacity);
                        egui::ScrollArea::vertical()
                            .id_salt(panels::page_slug(frame.page))
                            .auto_shrink([false, false])
                            .show(ui, |ui| {
                                panels::page_container(ui, |ui| match &scene.page.body {
                                    PageBody::NewsGrid {
                                        heading,
                                        intro,
                                        items,
                                    } => panels::news_page(
                                        ui,
                                        &mut rcx,
                                        heading,
                                        intro,
                                        items,
                                        hovered_card,
                                    ),
                                    PageBody::Search(form) => {
                                        let query = match form.panel {
                                            SearchPanel::Company => &mut *company_query,
                                            SearchPanel::Project | SearchPanel::None => {
                                                &mut *project_query
                                            }
                                        };
                                        panels::search_page(ui, &mut rcx, form, query);
                                    }
                                });
                            });
                    },
                );

                ui_in_rect(ui, header_rect, |ui| {
                    panels::header(ui, &mut rcx, scene.brand, &scene.nav)
                });

                let menu = SlideOverPanel::new(
                    "mobile-menu",
                    scene.mobile_menu_open && !panels::shows_desktop_nav(viewport.width()),
                    viewport,
                    self.palette,
                )
                .covered_by_modal(scene.detail.is_some());
                if menu.is_open() {
                    let response = menu.show(ctx, |ui| {
                        panels::mobile_menu(ui, &mut rcx, scene.brand, &scene.nav)
                    });
                    if response.dismissed || response.inner == Some(true) {
                        rcx.actions.push(UiAction::CloseMobileMenu);
                    }
                }

                if let Some(item) = scene.detail {
                    let dialog = NewsDialog::new("news-detail", true, viewport, self.palette);
                    let response = dialog.show(ctx, |ui| {
                        panels::news_detail(ui, &mut rcx, item, viewport.height() * 0.6)
                    });
                    if response.dismissed || response.inner == Some(true) {
                        rcx.actions.push(UiAction::CloseNews);
                    }
                }
            });

        actions
    }

    fn needs_animation_frames(&self, now: f64) -> bool {
        self.session.is_animating(now) || !self.scheduler.is_idle()
    }
}

impl eframe::App for NewsroomApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        let actions = self.render(ctx);
        let now = ctx.input(|input| input.time);
        reduce_all(&mut self.session, actions, now);

        if self.needs_animation_frames(now) {
            ctx.request_repaint_after(std::time::Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use content_store::StaticNewsStore;
    use crossbeam_channel::bounded;
    use shared::domain::Page;

    use super::*;
    use crate::controller::events::{UiError, UiErrorContext};
    use crate::controller::reducer::NavSource;
    use crate::ui::images::{DecodedImage, ImageState};

    fn app(ambient: bool) -> (NewsroomApp, Receiver<BackendCommand>, Sender<UiEvent>) {
        let ctx = egui::Context::default();
        let (cmd_tx, cmd_rx) = bounded(64);
        let (ui_tx, ui_rx) = bounded(64);
        let app = NewsroomApp::new(
            &ctx,
            Arc::new(StaticNewsStore::bundled()),
            cmd_tx,
            ui_rx,
            ambient,
        );
        (app, cmd_rx, ui_tx)
    }

    fn run_frame(app: &mut NewsroomApp, ctx: &egui::Context) -> Vec<UiAction> {
        let mut actions = Vec::new();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            actions = app.render(ctx);
        });
        actions
    }

    #[test]
    fn ambient_loop_is_released_with_the_app() {
        let (app, _cmd_rx, _ui_tx) = app(true);
        let scheduler = app.scheduler.clone();
        assert_eq!(scheduler.active_loops(), 1);
        assert!(app.needs_animation_frames(0.0));

        drop(app);
        assert!(scheduler.is_idle());
    }

    #[test]
    fn disabled_ambient_settles_to_slow_repaints() {
        let (app, _cmd_rx, _ui_tx) = app(false);
        assert!(app.scheduler.is_idle());
        assert!(!app.needs_animation_frames(60.0));
    }

    #[test]
    fn first_frame_requests_every_distinct_image_once() {
        let (mut app, cmd_rx, _ui_tx) = app(false);
        let ctx = egui::Context::default();
        run_frame(&mut app, &ctx);
        run_frame(&mut app, &ctx);

        let expected: HashSet<String> = app
            .session
            .source()
            .news()
            .iter()
            .flat_map(|item| {
                std::iter::once(item.image_url.clone())
                    .chain(item.author.iter().map(|author| author.image_url.clone()))
            })
            .collect();
        let requested: Vec<String> = cmd_rx
            .try_iter()
            .map(|cmd| match cmd {
                BackendCommand::FetchImage { reference } => reference,
            })
            .collect();
        assert_eq!(requested.len(), expected.len());
        assert_eq!(requested.into_iter().collect::<HashSet<_>>(), expected);
    }

    #[test]
    fn worker_events_update_the_image_cache() {
        let (mut app, _cmd_rx, ui_tx) = app(false);
        ui_tx
            .send(UiEvent::ImageLoaded {
                reference: "/placeholder.jpg".to_string(),
                image: DecodedImage {
                    width: 1,
                    height: 1,
                    rgba: vec![255, 255, 255, 255],
                },
            })
            .expect("send loaded");
        ui_tx
            .send(UiEvent::ImageFailed {
                reference: "https://example.com/missing.jpg".to_string(),
                error: UiError::from_message(UiErrorContext::ImageFetch, "image not found (HTTP 404)"),
            })
            .expect("send failed");
        app.process_ui_events();

        assert!(matches!(
            app.images.get("/placeholder.jpg"),
            Some(ImageState::Decoded(_))
        ));
        assert!(app.images.is_failed("https://example.com/missing.jpg"));
    }

    #[test]
    fn startup_failure_fails_in_flight_images() {
        let (mut app, _cmd_rx, ui_tx) = app(false);
        let ctx = egui::Context::default();
        run_frame(&mut app, &ctx);
        assert!(app.images.pending() > 0);

        ui_tx
            .send(UiEvent::Error(UiError::from_message(
                UiErrorContext::BackendStartup,
                "backend worker startup failure: failed to build runtime",
            )))
            .expect("send error");
        app.process_ui_events();
        assert_eq!(app.images.pending(), 0);
        assert!(app.images.is_failed("/placeholder.jpg"));
    }

    #[test]
    fn collected_actions_drive_the_session() {
        let (mut app, _cmd_rx, _ui_tx) = app(false);
        let actions = vec![
            UiAction::Navigate {
                page: Page::Project,
                from: NavSource::Header,
            },
            UiAction::SelectNews(NewsId(4)),
        ];
        reduce_all(&mut app.session, actions, 0.0);
        assert_eq!(app.session.state().active_page(), Page::Project);
        assert_eq!(
            app.session.selected_news().map(|item| item.title.as_str()),
            Some("Durabilité et croissance économique")
        );
        assert!(app.needs_animation_frames(0.1));
    }
}
