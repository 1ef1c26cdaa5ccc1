pub mod manifesto;
pub mod waitlist;

use iced::widget::markdown;

use senden_core::signup::SignupRecord;

/// Which navigable section is shown in the content pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Manifesto,
    Waitlist,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::Manifesto, Section::Waitlist];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Manifesto => "Manifesto",
            Section::Waitlist => "Waitlist",
        }
    }
}

/// Actions a screen can request from the app router.
///
/// Screens return these from `update()` instead of directly reaching for
/// shared state — the app interprets them in one place.
pub enum Action {
    /// No side-effect.
    None,
    /// Post a validated submission to the waitlist endpoint.
    Submit(SignupRecord),
    /// Open a link from rendered markdown in the system browser.
    OpenUrl(markdown::Uri),
}
