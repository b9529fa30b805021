use std::collections::HashMap;
use std::path::{Path, PathBuf};

use eframe::egui;
use folio_adapters::{thumbnail_path, InMemoryStaleSet};
use folio_application::{
    ApplicationError, LikeOutcome, ListPhotographersQuery, PortfolioService, SubmitContactCommand,
};
use folio_domain::{
    ContactMessage, Direction, MediaId, MediaItem, MediaSource, Photographer, PhotographerId,
    SortKey,
};
use tracing::warn;

use crate::config::AppConfig;
use crate::session::ProfileSession;

const ACCENT: egui::Color32 = egui::Color32::from_rgb(0x91, 0x1c, 0x1c);
const TILE_SIZE: egui::Vec2 = egui::Vec2::new(350.0, 300.0);
const LIGHTBOX_SIZE: egui::Vec2 = egui::Vec2::new(900.0, 640.0);

enum UiAction {
    OpenProfile(PhotographerId),
    BackToIndex,
    SetSort(SortKey),
    OpenViewer(MediaId),
    CloseViewer,
    Navigate(Direction),
    Like(MediaId),
    OpenContact,
    SubmitContact,
    CloseContact,
}

#[derive(Default)]
struct ContactForm {
    open: bool,
    first_name: String,
    last_name: String,
    email: String,
    message: String,
    error: Option<String>,
}

type TextureCache = HashMap<String, Option<egui::TextureHandle>>;

pub struct FolioApp {
    service: PortfolioService,
    stale: InMemoryStaleSet,
    config: AppConfig,
    photographers: Vec<Photographer>,
    session: Option<ProfileSession>,
    contact: ContactForm,
    textures: TextureCache,
    status: Option<String>,
}

impl FolioApp {
    pub fn new(
        service: PortfolioService,
        stale: InMemoryStaleSet,
        config: AppConfig,
    ) -> Result<Self, ApplicationError> {
        let photographers = service.list_photographers(ListPhotographersQuery)?;
        Ok(Self {
            service,
            stale,
            config,
            photographers,
            session: None,
            contact: ContactForm::default(),
            textures: TextureCache::new(),
            status: None,
        })
    }

    fn header(&self, ctx: &egui::Context, actions: &mut Vec<UiAction>) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(egui::RichText::new("Folio").color(ACCENT));
                if self.session.is_some() && ui.button("← Photographes").clicked() {
                    actions.push(UiAction::BackToIndex);
                }
                if let Some(status) = &self.status {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(status);
                    });
                }
            });
        });
    }

    fn index_screen(&mut self, ctx: &egui::Context, actions: &mut Vec<UiAction>) {
        let textures = &mut self.textures;
        let content_dir = self.config.content_dir.clone();
        let photographers = &self.photographers;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                ui.heading("Nos photographes");
            });
            ui.add_space(12.0);

            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    for photographer in photographers {
                        photographer_card(ui, ctx, textures, &content_dir, photographer, actions);
                    }
                });
            });
        });
    }

    fn profile_screen(&mut self, ctx: &egui::Context, actions: &mut Vec<UiAction>) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let textures = &mut self.textures;
        let content_dir = self.config.content_dir.clone();
        let cache_dir = self.config.cache_dir.clone();

        egui::TopBottomPanel::bottom("summary").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!("{} ♥", session.total_likes()))
                        .strong()
                        .color(ACCENT),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("{}€/jour", session.photographer().price));
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let photographer = session.photographer();
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.heading(egui::RichText::new(&photographer.name).size(28.0));
                    ui.label(format!("{}, {}", photographer.city, photographer.country));
                    ui.label(egui::RichText::new(&photographer.tagline).italics());
                });
                if ui.button("Contactez-moi").clicked() {
                    actions.push(UiAction::OpenContact);
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let key = format!("portrait-{}", photographer.id.get());
                    let path = Path::new(&content_dir).join(&photographer.portrait);
                    if let Some(texture) = texture_for(textures, ctx, &key, &path) {
                        ui.add(sized_image(&texture, egui::vec2(90.0, 90.0)));
                    }
                });
            });
            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Trier par");
                let mut selected = session.sort_key();
                egui::ComboBox::from_id_salt("media-sort")
                    .selected_text(selected.label())
                    .show_ui(ui, |ui| {
                        for key in SortKey::ALL {
                            ui.selectable_value(&mut selected, key, key.label());
                        }
                    });
                if selected != session.sort_key() {
                    actions.push(UiAction::SetSort(selected));
                }
            });
            ui.add_space(8.0);

            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    for media in session.medias() {
                        media_tile(ui, ctx, textures, &cache_dir, media, actions);
                    }
                });
            });
        });
    }

    fn lightbox(&mut self, ctx: &egui::Context, actions: &mut Vec<UiAction>) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        if !session.navigator().is_open() {
            return;
        }
        let Some(media) = session.selected_media() else {
            // The selected item vanished from the gallery; close the viewer.
            actions.push(UiAction::CloseViewer);
            return;
        };
        let textures = &mut self.textures;
        let content_dir = self.config.content_dir.clone();

        egui::Window::new("lightbox")
            .title_bar(false)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    if ui.button("✕").clicked() {
                        actions.push(UiAction::CloseViewer);
                    }
                });
                ui.horizontal(|ui| {
                    if ui.button(egui::RichText::new("‹").size(32.0).color(ACCENT)).clicked() {
                        actions.push(UiAction::Navigate(Direction::Previous));
                    }
                    ui.vertical(|ui| {
                        match &media.source {
                            MediaSource::Image(file) => {
                                let key = format!("full-{}", media.id.get());
                                let path = Path::new(&content_dir).join(file);
                                match texture_for(textures, ctx, &key, &path) {
                                    Some(texture) => {
                                        let size =
                                            fit_size(texture.size_vec2(), LIGHTBOX_SIZE);
                                        ui.add(sized_image(&texture, size));
                                    }
                                    None => {
                                        placeholder(ui, LIGHTBOX_SIZE, &media.title);
                                    }
                                }
                            }
                            MediaSource::Video(_) => {
                                placeholder(ui, LIGHTBOX_SIZE, &format!("▶ {}", media.title));
                            }
                        }
                        ui.label(egui::RichText::new(&media.title).color(ACCENT));
                    });
                    if ui.button(egui::RichText::new("›").size(32.0).color(ACCENT)).clicked() {
                        actions.push(UiAction::Navigate(Direction::Next));
                    }
                });
            });
    }

    fn contact_window(&mut self, ctx: &egui::Context, actions: &mut Vec<UiAction>) {
        if !self.contact.open {
            return;
        }
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let title = format!("Contactez-moi {}", session.photographer().name);
        let contact = &mut self.contact;

        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label("Prénom");
                ui.text_edit_singleline(&mut contact.first_name);
                ui.label("Nom");
                ui.text_edit_singleline(&mut contact.last_name);
                ui.label("Email");
                ui.text_edit_singleline(&mut contact.email);
                ui.label("Votre message");
                ui.text_edit_multiline(&mut contact.message);

                if let Some(error) = &contact.error {
                    ui.colored_label(ACCENT, error);
                }

                ui.horizontal(|ui| {
                    if ui.button("Envoyer").clicked() {
                        actions.push(UiAction::SubmitContact);
                    }
                    if ui.button("Annuler").clicked() {
                        actions.push(UiAction::CloseContact);
                    }
                });
            });
    }

    fn apply(&mut self, action: UiAction) {
        match action {
            UiAction::OpenProfile(photographer_id) => {
                match ProfileSession::load(&self.service, photographer_id, SortKey::Popularity) {
                    Ok(session) => {
                        self.session = Some(session);
                        self.status = None;
                    }
                    Err(error) => self.status = Some(error.to_string()),
                }
            }
            UiAction::BackToIndex => {
                self.session = None;
                self.contact = ContactForm::default();
                match self.service.list_photographers(ListPhotographersQuery) {
                    Ok(photographers) => self.photographers = photographers,
                    Err(error) => self.status = Some(error.to_string()),
                }
            }
            UiAction::SetSort(sort_key) => {
                if let Some(session) = self.session.as_mut() {
                    session.set_sort(sort_key);
                }
            }
            UiAction::OpenViewer(media_id) => {
                if let Some(session) = self.session.as_mut() {
                    session.open_viewer(media_id);
                }
            }
            UiAction::CloseViewer => {
                if let Some(session) = self.session.as_mut() {
                    session.close_viewer();
                }
            }
            UiAction::Navigate(direction) => {
                if let Some(session) = self.session.as_mut() {
                    session.navigate(direction);
                }
            }
            UiAction::Like(media_id) => {
                if let Some(session) = self.session.as_mut() {
                    if let LikeOutcome::Failed(reason) = session.like(&self.service, media_id) {
                        warn!("like failed for media {}: {reason}", media_id.get());
                        self.status = Some(format!("like failed: {reason}"));
                    }
                }
            }
            UiAction::OpenContact => {
                self.contact = ContactForm {
                    open: true,
                    ..ContactForm::default()
                };
            }
            UiAction::CloseContact => self.contact.open = false,
            UiAction::SubmitContact => self.submit_contact(),
        }
    }

    fn submit_contact(&mut self) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let command = SubmitContactCommand {
            photographer_id: session.photographer().id,
            message: ContactMessage {
                first_name: self.contact.first_name.clone(),
                last_name: self.contact.last_name.clone(),
                email: self.contact.email.clone(),
                message: self.contact.message.clone(),
            },
        };

        match self.service.submit_contact(command) {
            Ok(()) => {
                self.contact = ContactForm::default();
                self.status = Some("Message envoyé".to_string());
            }
            Err(error) => self.contact.error = Some(error.to_string()),
        }
    }
}

impl eframe::App for FolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions: Vec<UiAction> = Vec::new();

        if let Some(session) = self.session.as_mut() {
            if let Err(error) = session.refresh_if_stale(&self.service, &self.stale) {
                self.status = Some(error.to_string());
            }
        }

        let viewer_open = self
            .session
            .as_ref()
            .is_some_and(|session| session.navigator().is_open());
        if viewer_open {
            ctx.input(|input| {
                if input.key_pressed(egui::Key::ArrowLeft) {
                    actions.push(UiAction::Navigate(Direction::Previous));
                }
                if input.key_pressed(egui::Key::ArrowRight) {
                    actions.push(UiAction::Navigate(Direction::Next));
                }
                if input.key_pressed(egui::Key::Escape) {
                    actions.push(UiAction::CloseViewer);
                }
            });
        }

        self.header(ctx, &mut actions);
        if self.session.is_some() {
            self.profile_screen(ctx, &mut actions);
            self.lightbox(ctx, &mut actions);
            self.contact_window(ctx, &mut actions);
        } else {
            self.index_screen(ctx, &mut actions);
        }

        for action in actions {
            self.apply(action);
        }
    }
}

pub fn launch_window(
    service: PortfolioService,
    stale: InMemoryStaleSet,
    config: AppConfig,
) -> Result<(), String> {
    let app = FolioApp::new(service, stale, config).map_err(|error| error.to_string())?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1180.0, 840.0]),
        ..Default::default()
    };

    eframe::run_native("Folio", options, Box::new(move |_cc| Ok(Box::new(app))))
        .map_err(|error| format!("failed to start UI: {error}"))
}

fn photographer_card(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    textures: &mut TextureCache,
    content_dir: &str,
    photographer: &Photographer,
    actions: &mut Vec<UiAction>,
) {
    ui.allocate_ui(egui::vec2(260.0, 320.0), |ui| {
        ui.vertical_centered(|ui| {
            let key = format!("portrait-{}", photographer.id.get());
            let path = Path::new(content_dir).join(&photographer.portrait);
            let opened = match texture_for(textures, ctx, &key, &path) {
                Some(texture) => ui
                    .add(egui::ImageButton::new(sized_image(
                        &texture,
                        egui::vec2(180.0, 180.0),
                    )))
                    .clicked(),
                None => ui
                    .add_sized(egui::vec2(180.0, 180.0), egui::Button::new(&photographer.name))
                    .clicked(),
            };

            let named = ui
                .link(egui::RichText::new(&photographer.name).heading().color(ACCENT))
                .clicked();
            if opened || named {
                actions.push(UiAction::OpenProfile(photographer.id));
            }

            ui.label(format!("{}, {}", photographer.city, photographer.country));
            ui.label(egui::RichText::new(&photographer.tagline).italics());
            ui.label(egui::RichText::new(format!("{}€/jour", photographer.price)).small());
        });
    });
}

fn media_tile(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    textures: &mut TextureCache,
    cache_dir: &str,
    media: &MediaItem,
    actions: &mut Vec<UiAction>,
) {
    ui.allocate_ui(egui::vec2(TILE_SIZE.x + 10.0, TILE_SIZE.y + 50.0), |ui| {
        ui.vertical(|ui| {
            let opened = match &media.source {
                MediaSource::Image(_) => {
                    let key = format!("thumb-{}", media.id.get());
                    let path = PathBuf::from(thumbnail_path(cache_dir, media.id));
                    match texture_for(textures, ctx, &key, &path) {
                        Some(texture) => ui
                            .add(egui::ImageButton::new(sized_image(&texture, TILE_SIZE)))
                            .clicked(),
                        None => ui
                            .add_sized(TILE_SIZE, egui::Button::new(&media.title))
                            .clicked(),
                    }
                }
                MediaSource::Video(_) => ui
                    .add_sized(TILE_SIZE, egui::Button::new("▶ Vidéo"))
                    .clicked(),
            };
            if opened {
                actions.push(UiAction::OpenViewer(media.id));
            }

            ui.horizontal(|ui| {
                ui.label(&media.title);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let heart = egui::RichText::new(format!("{} ♥", media.likes)).color(ACCENT);
                    if ui.button(heart).clicked() {
                        actions.push(UiAction::Like(media.id));
                    }
                });
            });
        });
    });
}

fn placeholder(ui: &mut egui::Ui, size: egui::Vec2, text: &str) {
    ui.add_sized(size, egui::Label::new(egui::RichText::new(text).size(24.0)));
}

fn sized_image(texture: &egui::TextureHandle, size: egui::Vec2) -> egui::Image<'static> {
    egui::Image::new(egui::load::SizedTexture::new(texture.id(), size))
}

fn fit_size(actual: egui::Vec2, bounds: egui::Vec2) -> egui::Vec2 {
    if actual.x <= 0.0 || actual.y <= 0.0 {
        return bounds;
    }
    let scale = (bounds.x / actual.x).min(bounds.y / actual.y).min(1.0);
    actual * scale
}

/// Decodes and uploads an image once; failures are cached too so a missing
/// file is not re-read every frame.
fn texture_for(
    textures: &mut TextureCache,
    ctx: &egui::Context,
    key: &str,
    path: &Path,
) -> Option<egui::TextureHandle> {
    if let Some(cached) = textures.get(key) {
        return cached.clone();
    }

    let loaded = load_color_image(path)
        .map(|color| ctx.load_texture(key, color, egui::TextureOptions::LINEAR));
    if loaded.is_none() {
        warn!("failed to load texture for {}", path.display());
    }
    textures.insert(key.to_string(), loaded.clone());
    loaded
}

fn load_color_image(path: &Path) -> Option<egui::ColorImage> {
    let decoded = image::ImageReader::open(path)
        .ok()?
        .with_guessed_format()
        .ok()?
        .decode()
        .ok()?;
    let rgba = decoded.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Some(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}
