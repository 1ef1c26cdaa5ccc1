use iced::widget::{button, column, container, row, text, Space};
use iced::{window, Alignment, Element, Length, Subscription, Task, Theme};

use senden_core::config::AppConfig;
use senden_core::layout::{GridLayout, LayoutMode, Viewport};
use senden_core::session;
use senden_core::signup::{ErrorResponse, SignupRecord, WaitlistRequest};

use crate::grid;
use crate::screen::{manifesto, waitlist, Action, Section};
use crate::session_disk::DiskStore;
use crate::style;
use crate::subscription;
use crate::theme::{self, ColorScheme, SendenTheme};
use crate::widgets;

/// Shown when the endpoint can't be reached or answers with something
/// other than a signup rejection.
const NETWORK_ERROR: &str = "Could not reach the waitlist. Please try again.";

/// Application state — slim router that delegates to screens.
pub struct Senden {
    config: AppConfig,
    current_theme: SendenTheme,
    dark: bool,
    /// Current grid partition; `None` until the window reports a size with
    /// at least one full cell in each axis.
    layout: Option<GridLayout>,
    section: Section,
    drawer_open: bool,
    session: DiskStore,
    // Screens
    manifesto: manifesto::Manifesto,
    waitlist: waitlist::Waitlist,
}

/// All messages the application can handle.
#[derive(Debug, Clone)]
pub enum Message {
    WindowEvent(window::Event),
    Navigate(Section),
    ToggleDark,
    OpenDrawer,
    CloseDrawer,
    Manifesto(manifesto::Message),
    Waitlist(waitlist::Message),
}

impl Senden {
    pub fn new() -> (Self, Task<Message>) {
        let config = AppConfig::load().unwrap_or_default();
        let dark = theme::resolve_dark(config.appearance.mode);
        let session = DiskStore::load();
        // Returning visitors land straight on the joined view.
        let waitlist = waitlist::Waitlist::new(session::joined_record(&session));

        (
            Self {
                config,
                current_theme: SendenTheme::default_theme(),
                dark,
                layout: None,
                section: Section::default(),
                drawer_open: false,
                session,
                manifesto: manifesto::Manifesto::new(),
                waitlist,
            },
            Task::none(),
        )
    }

    pub fn title(&self) -> String {
        String::from("Senden")
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::WindowEvent(event) => {
                match event {
                    window::Event::Opened { size, .. } | window::Event::Resized(size) => {
                        self.measure(size);
                    }
                    _ => {}
                }
                Task::none()
            }
            Message::Navigate(section) => {
                self.section = section;
                self.drawer_open = false;
                Task::none()
            }
            Message::ToggleDark => {
                // Session-only: never written back to config.
                self.dark = !self.dark;
                Task::none()
            }
            Message::OpenDrawer => {
                self.drawer_open = true;
                Task::none()
            }
            Message::CloseDrawer => {
                self.drawer_open = false;
                Task::none()
            }
            Message::Manifesto(msg) => {
                let action = self.manifesto.update(msg);
                self.handle_action(action)
            }
            Message::Waitlist(msg) => {
                // Intercept accepted submissions to record them for future
                // visits before the screen flips to its joined view.
                if let waitlist::Message::Submitted(Ok(record)) = &msg {
                    session::record_joined(&mut self.session, record);
                }
                let action = self.waitlist.update(msg);
                self.handle_action(action)
            }
        }
    }

    /// Recompute the grid from one viewport snapshot.
    fn measure(&mut self, size: iced::Size) {
        self.layout = GridLayout::from_viewport(Viewport::new(size.width, size.height));
        // The drawer only exists in compact mode; drop it if a resize left it.
        if !matches!(self.layout, Some(l) if l.mode == LayoutMode::Compact) {
            self.drawer_open = false;
        }
    }

    /// Interpret an Action returned by a screen.
    fn handle_action(&mut self, action: Action) -> Task<Message> {
        match action {
            Action::None => Task::none(),
            Action::Submit(record) => self.spawn_submit(record),
            Action::OpenUrl(url) => {
                if let Err(e) = open::that(url.as_str()) {
                    tracing::warn!("Failed to open {url}: {e}");
                }
                Task::none()
            }
        }
    }

    /// Spawn the waitlist POST as an async task.
    fn spawn_submit(&self, record: SignupRecord) -> Task<Message> {
        let endpoint = self.config.general.endpoint.clone();
        Task::perform(
            async move { submit(endpoint, record).await },
            |result| Message::Waitlist(waitlist::Message::Submitted(result)),
        )
    }

    pub fn view(&self) -> Element<'_, Message> {
        let Some(layout) = self.layout else {
            // Not yet measured — render nothing.
            return Space::new().into();
        };
        let cs = self.current_theme.colors(self.dark);

        let content: Element<'_, Message> = match self.section {
            Section::Manifesto => self.manifesto.view(cs).map(Message::Manifesto),
            Section::Waitlist => self.waitlist.view(cs).map(Message::Waitlist),
        };

        let mut layers = vec![grid::background(&layout, cs)];
        if !layout.content.is_empty() {
            layers.push(grid::place(layout.content, content));
        }
        layers.push(grid::place(layout.sidebar, self.sidebar(layout.mode, cs)));
        layers.push(grid::place(layout.dark_toggle, self.dark_toggle(cs)));

        let main: Element<'_, Message> = iced::widget::stack(layers).into();

        if self.drawer_open && layout.mode == LayoutMode::Compact {
            widgets::modal(main, self.drawer(cs), Message::CloseDrawer, cs.modal_backdrop)
        } else {
            main
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::window_events()
    }

    pub fn theme(&self) -> Theme {
        self.current_theme.iced_theme(self.dark)
    }

    /// The sidebar region's contents, shaped by the active layout mode.
    fn sidebar<'a>(&'a self, mode: LayoutMode, cs: &ColorScheme) -> Element<'a, Message> {
        use lucide_icons::iced as icons;

        match mode {
            // One cell: branding collapses to a drawer trigger.
            LayoutMode::Compact => button(
                icons::icon_menu()
                    .size(style::NAV_ICON_SIZE)
                    .center()
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .on_press(Message::OpenDrawer)
            .style(theme::icon_button(cs))
            .into(),
            // Bottom strip: inline branding, sections trailing.
            LayoutMode::Mobile => row![
                self.branding(cs, style::TEXT_SM),
                Space::new().width(Length::Fill),
                self.nav_button(Section::Manifesto, cs),
                self.nav_button(Section::Waitlist, cs),
            ]
            .spacing(style::SPACE_SM)
            .padding([style::SPACE_XXS, style::SPACE_SM])
            .align_y(Alignment::Center)
            .height(Length::Fill)
            .into(),
            // Column rail: branding above stacked sections.
            LayoutMode::Desktop => column![
                self.branding(cs, style::TEXT_SM),
                self.nav_button(Section::Manifesto, cs),
                self.nav_button(Section::Waitlist, cs),
            ]
            .spacing(style::SPACE_SM)
            .padding([style::SPACE_SM, style::SPACE_XS])
            .into(),
        }
    }

    fn nav_button<'a>(&self, section: Section, cs: &ColorScheme) -> Element<'a, Message> {
        button(text(section.label()).size(style::NAV_LABEL_SIZE))
            .padding([style::SPACE_XXS, style::SPACE_SM])
            .on_press(Message::Navigate(section))
            .style(theme::nav_item(self.section == section, cs))
            .into()
    }

    fn branding<'a>(&self, cs: &ColorScheme, size: f32) -> Element<'a, Message> {
        use lucide_icons::iced as icons;

        row![
            icons::icon_send()
                .size(style::NAV_ICON_SIZE)
                .color(cs.primary),
            text("senden").size(size),
        ]
        .spacing(style::SPACE_XS)
        .align_y(Alignment::Center)
        .into()
    }

    fn dark_toggle<'a>(&self, cs: &ColorScheme) -> Element<'a, Message> {
        use lucide_icons::iced as icons;

        let icon = if self.dark {
            icons::icon_sun()
        } else {
            icons::icon_moon()
        };
        button(
            icon.size(style::NAV_ICON_SIZE)
                .center()
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .on_press(Message::ToggleDark)
        .style(theme::icon_button(cs))
        .into()
    }

    /// The compact-mode overlay panel listing the navigable sections.
    fn drawer(&self, cs: &ColorScheme) -> Element<'_, Message> {
        let mut items = column![self.branding(cs, style::TEXT_LG)].spacing(style::SPACE_MD);
        for section in Section::ALL {
            items = items.push(self.nav_button(section, cs));
        }

        container(items)
            .style(theme::dialog_container(cs))
            .width(Length::Fixed(style::DRAWER_WIDTH))
            .padding(style::SPACE_XL)
            .into()
    }
}

/// POST the submission to the configured endpoint.
///
/// A 400 body carries the rejection verbatim for inline display; anything
/// else collapses to the generic network message.
async fn submit(endpoint: String, record: SignupRecord) -> Result<SignupRecord, String> {
    let request = WaitlistRequest {
        name: record.name.clone(),
        email: record.email.clone(),
    };
    let resp = reqwest::Client::new()
        .post(&endpoint)
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            tracing::warn!("Waitlist request failed: {e}");
            NETWORK_ERROR.to_string()
        })?;

    if resp.status().is_success() {
        Ok(record)
    } else {
        let error = resp
            .json::<ErrorResponse>()
            .await
            .map(|body| body.error)
            .unwrap_or_else(|_| NETWORK_ERROR.to_string());
        Err(error)
    }
}
