use eframe::egui::{self, Color32, Rounding, Stroke};
use folio_core::{
    render_detail, render_list, t, AppConfig, AppState, Card, ContactForm, ContentListEngine,
    ContentRecord, DetailView, Field, Message, SortKey, ThemeConfig, ViewMode,
};
use tracing::warn;

pub struct AppInit {
    pub config: AppConfig,
    pub state: AppState,
    pub records: Vec<ContentRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Page {
    Blog,
    // Raw `?id=` value, parsed by the engine on lookup.
    Detail(String),
    Contact,
}

/// User intents collected while drawing and applied once the frame is laid out.
enum Action {
    Search,
    Sort(SortKey),
    Filter(String),
    LoadMore,
    Open(Page),
    ToggleLocale,
    ToggleMenu,
    OpenLink(String),
    SubmitContact,
}

pub struct FolioApp {
    config: AppConfig,
    state: AppState,
    engine: ContentListEngine,
    page: Page,
    search_input: String,
    contact: ContactForm,
    contact_feedback: Option<(bool, Message)>,
    actions: Vec<Action>,
}

/// Body-sized text follows the configured size; headings and small text scale with it.
fn apply_font_size(style: &mut egui::Style, size: f32) {
    for (text_style, font_id) in style.text_styles.iter_mut() {
        font_id.size = match text_style {
            egui::TextStyle::Heading => size * 1.45,
            egui::TextStyle::Small => size * 0.7,
            _ => size,
        };
    }
}

fn color(rgb: [u8; 3]) -> Color32 {
    Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

impl FolioApp {
    pub fn new(init: AppInit) -> Self {
        let mut engine = ContentListEngine::new(init.config.ui.initial_reveal);
        engine.load(init.records);
        Self {
            config: init.config,
            state: init.state,
            engine,
            page: Page::Blog,
            search_input: String::new(),
            contact: ContactForm::default(),
            contact_feedback: None,
            actions: Vec::new(),
        }
    }

    fn setup_theme(&self, ctx: &egui::Context) {
        let theme: &ThemeConfig = &self.config.theme;
        let mut style = (*ctx.style()).clone();

        let panel_color = color(theme.panel_color);
        let text_color = color(theme.text_color);
        let accent_color = color(theme.accent_color);
        let border_color = Color32::from_rgb(62, 62, 66);

        style.visuals.dark_mode = true;
        style.visuals.panel_fill = panel_color;
        style.visuals.window_fill = color(theme.background_color);
        style.visuals.override_text_color = Some(text_color);

        style.visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, border_color);
        style.visuals.widgets.inactive.bg_fill = Color32::from_rgb(50, 50, 50);
        style.visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, accent_color);
        style.visuals.widgets.active.bg_fill = accent_color;
        style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, Color32::WHITE);
        style.visuals.selection.stroke = Stroke::new(1.0, accent_color);

        style.visuals.widgets.inactive.rounding = Rounding::same(3.0);
        style.visuals.widgets.hovered.rounding = Rounding::same(3.0);
        style.visuals.widgets.active.rounding = Rounding::same(3.0);

        style.spacing.item_spacing = egui::vec2(10.0, 8.0);
        style.spacing.button_padding = egui::vec2(10.0, 6.0);
        apply_font_size(&mut style, self.config.ui.font_size);

        ctx.set_style(style);
    }

    fn apply_actions(&mut self) {
        for action in std::mem::take(&mut self.actions) {
            match action {
                Action::Search => {
                    self.engine.search(&self.search_input);
                }
                Action::Sort(key) => {
                    self.engine.apply(ViewMode::AllSorted(key));
                }
                Action::Filter(category) => {
                    self.engine.filter_by_category(&category);
                    self.page = Page::Blog;
                }
                Action::LoadMore => {
                    self.engine.load_more();
                }
                Action::Open(page) => {
                    self.contact_feedback = None;
                    self.page = page;
                }
                Action::ToggleLocale => {
                    self.state.toggle_locale();
                }
                Action::ToggleMenu => self.state.toggle_menu(),
                Action::OpenLink(url) => {
                    if let Err(e) = webbrowser::open(&url) {
                        warn!(error = %e, %url, "failed to open link");
                    }
                }
                Action::SubmitContact => {
                    let result = self.contact.submit();
                    self.contact_feedback = Some((result.success, result.message));
                }
            }
        }
    }

    fn draw_top_bar(&mut self, ctx: &egui::Context) {
        let locale = self.state.locale();
        egui::TopBottomPanel::top("nav").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("☰").clicked() {
                    self.actions.push(Action::ToggleMenu);
                }
                ui.heading(egui::RichText::new(&self.config.profile.name).strong());
                ui.label(egui::RichText::new(&self.config.profile.headline).weak());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(t(locale, Message::LanguageToggle)).clicked() {
                        self.actions.push(Action::ToggleLocale);
                    }
                    ui.separator();
                    if ui
                        .selectable_label(self.page == Page::Contact, t(locale, Message::ContactTitle))
                        .clicked()
                    {
                        self.actions.push(Action::Open(Page::Contact));
                    }
                    if ui.selectable_label(self.page == Page::Blog, "Blog").clicked() {
                        self.actions.push(Action::Open(Page::Blog));
                    }
                });
            });
        });
    }

    fn draw_menu(&mut self, ctx: &egui::Context) {
        if !self.state.is_menu_open() {
            return;
        }
        let locale = self.state.locale();
        egui::SidePanel::left("menu")
            .resizable(false)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.label(egui::RichText::new(t(locale, Message::Categories)).strong());
                ui.horizontal_wrapped(|ui| {
                    for category in self.engine.categories() {
                        let selected =
                            matches!(&self.engine.view().mode, ViewMode::Filtered(c) if *c == category);
                        if ui.selectable_label(selected, format!("#{category}")).clicked() {
                            self.actions.push(Action::Filter(category));
                        }
                    }
                });
                ui.separator();
                for link in &self.config.profile.links {
                    if ui.link(&link.label).on_hover_text(&link.url).clicked() {
                        self.actions.push(Action::OpenLink(link.url.clone()));
                    }
                }
            });
    }

    fn draw_blog(&mut self, ui: &mut egui::Ui) {
        let locale = self.state.locale();
        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.search_input)
                    .hint_text(t(locale, Message::SearchPlaceholder))
                    .desired_width(320.0),
            );
            let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button("🔍").clicked() || submitted {
                self.actions.push(Action::Search);
            }
            ui.separator();
            let mode = &self.engine.view().mode;
            for (key, label) in [
                (SortKey::Author, Message::SortByAuthor),
                (SortKey::Views, Message::SortByViews),
            ] {
                let selected = *mode == ViewMode::AllSorted(key);
                if ui.selectable_label(selected, t(locale, label)).clicked() {
                    self.actions.push(Action::Sort(key));
                }
            }
        });

        let tree = render_list(self.engine.view(), self.engine.len(), locale);
        ui.label(egui::RichText::new(&tree.available).weak());
        ui.separator();

        egui::ScrollArea::vertical()
            .auto_shrink([false, true])
            .show(ui, |ui| {
                if let Some(message) = tree.empty_message {
                    ui.vertical_centered(|ui| {
                        ui.add_space(50.0);
                        ui.label(egui::RichText::new(message).size(16.0));
                    });
                    return;
                }
                for card in &tree.cards {
                    self.draw_card(ui, card);
                    ui.add_space(5.0);
                }
                if tree.show_load_more && ui.button(t(locale, Message::LoadMore)).clicked() {
                    self.actions.push(Action::LoadMore);
                }
            });
    }

    fn draw_card(&mut self, ui: &mut egui::Ui, card: &Card) {
        let locale = self.state.locale();
        let accent = color(self.config.theme.accent_color);
        let secondary = color(self.config.theme.secondary_text_color);
        ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(&card.title).strong().size(16.0));
            ui.label(egui::RichText::new(&card.teaser).size(13.0));
            ui.horizontal_wrapped(|ui| {
                if ui
                    .link(egui::RichText::new(&card.tag).color(accent))
                    .clicked()
                {
                    self.actions.push(Action::Filter(card.category.clone()));
                }
                ui.label(egui::RichText::new(&card.author).color(secondary));
                ui.label(egui::RichText::new(&card.date).color(secondary));
                ui.label(egui::RichText::new(format!("👁 {}", card.views)).color(secondary));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(t(locale, Message::ReadMore)).clicked() {
                        self.actions
                            .push(Action::Open(Page::Detail(card.id.to_string())));
                    }
                });
            });
        });
    }

    fn draw_detail(&mut self, ui: &mut egui::Ui, param: &str) {
        let locale = self.state.locale();
        if ui.button(t(locale, Message::Back)).clicked() {
            self.actions.push(Action::Open(Page::Blog));
        }
        ui.separator();

        match render_detail(self.engine.find_by_param(param), locale) {
            DetailView::Found {
                card,
                author_line,
                date_line,
            } => {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(&card.title).strong().size(22.0));
                        ui.label(egui::RichText::new(format!("👁 {}", card.views)).weak());
                    });
                    ui.add_space(10.0);
                    ui.label(egui::RichText::new(&card.teaser).size(15.0));
                    ui.add_space(10.0);
                    if ui.link(&card.tag).clicked() {
                        self.actions.push(Action::Filter(card.category.clone()));
                    }
                    ui.label(author_line);
                    ui.label(egui::RichText::new(date_line).weak());
                });
            }
            DetailView::NotFound(message) => {
                ui.label(egui::RichText::new(message).size(16.0));
            }
        }
    }

    fn draw_contact(&mut self, ui: &mut egui::Ui) {
        let locale = self.state.locale();
        ui.heading(t(locale, Message::ContactTitle));
        if !self.config.profile.email.is_empty() {
            ui.label(egui::RichText::new(&self.config.profile.email).weak());
        }
        ui.separator();

        for (field, label) in [
            (Field::Name, Message::ContactName),
            (Field::Email, Message::ContactEmail),
            (Field::Message, Message::ContactMessage),
        ] {
            ui.label(t(locale, label));
            let value = match field {
                Field::Name => &mut self.contact.name,
                Field::Email => &mut self.contact.email,
                Field::Message => &mut self.contact.message,
            };
            let response = if field == Field::Message {
                ui.add(egui::TextEdit::multiline(value).desired_rows(5))
            } else {
                ui.text_edit_singleline(value)
            };
            if response.lost_focus() {
                self.contact.validate_field(field);
            }
            if let Some(error) = self.contact.error(field) {
                ui.label(egui::RichText::new(t(locale, error)).color(Color32::from_rgb(229, 57, 53)));
            }
        }

        ui.add_space(10.0);
        if ui.button(t(locale, Message::ContactSend)).clicked() {
            self.actions.push(Action::SubmitContact);
        }
        if let Some((ok, message)) = self.contact_feedback {
            let color = if ok {
                Color32::from_rgb(76, 175, 80)
            } else {
                Color32::from_rgb(229, 57, 53)
            };
            ui.label(egui::RichText::new(t(locale, message)).color(color));
        }
    }

    fn draw_main_content(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| match self.page.clone() {
            Page::Blog => self.draw_blog(ui),
            Page::Detail(param) => self.draw_detail(ui, &param),
            Page::Contact => self.draw_contact(ui),
        });
    }
}

impl eframe::App for FolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.setup_theme(ctx);

        self.draw_top_bar(ctx);
        self.draw_menu(ctx);
        self.draw_main_content(ctx);

        self.apply_actions();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_font_size_drives_text_styles() {
        let mut style = egui::Style::default();
        apply_font_size(&mut style, 16.0);
        assert_eq!(style.text_styles[&egui::TextStyle::Body].size, 16.0);
        assert_eq!(style.text_styles[&egui::TextStyle::Button].size, 16.0);
        assert_eq!(style.text_styles[&egui::TextStyle::Heading].size, 16.0 * 1.45);
    }
}
