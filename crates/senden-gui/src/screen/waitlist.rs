use iced::widget::{button, column, container, markdown, text, text_input};
use iced::{Element, Length};

use senden_core::signup::{self, SignupRecord};

use crate::screen::Action;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets;

const SOURCE: &str = include_str!("../../assets/content/waitlist.md");

/// Waitlist screen state: the intro page plus the signup form, or the
/// "already joined" view once a submission has gone through.
pub struct Waitlist {
    items: Vec<markdown::Item>,
    name: String,
    email: String,
    error: Option<String>,
    submitting: bool,
    joined: Option<SignupRecord>,
}

#[derive(Debug, Clone)]
pub enum Message {
    LinkClicked(markdown::Uri),
    NameChanged(String),
    EmailChanged(String),
    Submit,
    /// Outcome of the POST: the accepted record, or an inline error string.
    Submitted(Result<SignupRecord, String>),
}

impl Waitlist {
    /// Start from the recorded last submission, if any — returning visitors
    /// land straight on the joined view.
    pub fn new(joined: Option<SignupRecord>) -> Self {
        Self {
            items: markdown::parse(SOURCE).collect(),
            name: String::new(),
            email: String::new(),
            error: None,
            submitting: false,
            joined,
        }
    }

    pub fn update(&mut self, msg: Message) -> Action {
        match msg {
            Message::LinkClicked(url) => Action::OpenUrl(url),
            Message::NameChanged(name) => {
                self.name = name;
                self.error = None;
                Action::None
            }
            Message::EmailChanged(email) => {
                self.email = email;
                self.error = None;
                Action::None
            }
            Message::Submit => match signup::validate(&self.name, &self.email) {
                Ok(record) => {
                    self.submitting = true;
                    self.error = None;
                    Action::Submit(record)
                }
                Err(e) => {
                    self.error = Some(e.to_string());
                    Action::None
                }
            },
            Message::Submitted(Ok(record)) => {
                self.submitting = false;
                self.joined = Some(record);
                Action::None
            }
            Message::Submitted(Err(e)) => {
                self.submitting = false;
                self.error = Some(e);
                Action::None
            }
        }
    }

    pub fn view(&self, cs: &ColorScheme) -> Element<'_, Message> {
        let card: Element<'_, Message> = match &self.joined {
            Some(record) => self.joined_card(cs, record),
            None => self.form_card(cs),
        };

        let page = markdown::view(
            &self.items,
            markdown::Settings::with_style(markdown::Style::from_palette(
                theme::build_theme(cs).palette(),
            )),
        )
        .map(Message::LinkClicked);

        widgets::styled_scrollable(
            container(column![page, card].spacing(style::SPACE_XL))
                .width(Length::Fill)
                .padding([style::SPACE_LG, style::SPACE_XL]),
            cs,
        )
        .height(Length::Fill)
        .into()
    }

    fn form_card(&self, cs: &ColorScheme) -> Element<'_, Message> {
        let name_input = text_input("Your name", &self.name)
            .on_input(Message::NameChanged)
            .size(style::INPUT_FONT_SIZE)
            .padding(style::INPUT_PADDING)
            .width(Length::Fixed(style::INPUT_WIDTH))
            .style(theme::text_input_style(cs));

        let email_input = text_input("you@example.com", &self.email)
            .on_input(Message::EmailChanged)
            .on_submit(Message::Submit)
            .size(style::INPUT_FONT_SIZE)
            .padding(style::INPUT_PADDING)
            .width(Length::Fixed(style::INPUT_WIDTH))
            .style(theme::text_input_style(cs));

        let mut join = button(
            text(if self.submitting { "Joining…" } else { "Join" }).size(style::TEXT_SM),
        )
        .padding([style::SPACE_SM, style::SPACE_XL])
        .style(theme::primary_button(cs));
        if !self.submitting {
            join = join.on_press(Message::Submit);
        }

        let mut form = column![name_input, email_input, join].spacing(style::SPACE_MD);
        if let Some(error) = &self.error {
            form = form.push(
                text(error.as_str())
                    .size(style::TEXT_SM)
                    .color(cs.error)
                    .line_height(style::LINE_HEIGHT_NORMAL),
            );
        }

        container(form)
            .style(theme::card(cs))
            .padding(style::SPACE_2XL)
            .into()
    }

    fn joined_card(&self, cs: &ColorScheme, record: &SignupRecord) -> Element<'_, Message> {
        container(
            column![
                text("You're on the list")
                    .size(style::TEXT_XL)
                    .line_height(style::LINE_HEIGHT_TIGHT),
                text(format!(
                    "We'll write to {} when your spot is ready.",
                    record.email
                ))
                .size(style::TEXT_SM)
                .color(cs.on_surface_variant)
                .line_height(style::LINE_HEIGHT_LOOSE),
            ]
            .spacing(style::SPACE_SM),
        )
        .style(theme::card(cs))
        .padding(style::SPACE_2XL)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_submit_stays_inline() {
        let mut screen = Waitlist::new(None);
        screen.update(Message::NameChanged("Ann".into()));
        screen.update(Message::EmailChanged("bad".into()));
        let action = screen.update(Message::Submit);
        assert!(matches!(action, Action::None));
        assert_eq!(screen.error.as_deref(), Some("Invalid email address"));
        assert!(!screen.submitting);
    }

    #[test]
    fn test_valid_submit_requests_post() {
        let mut screen = Waitlist::new(None);
        screen.update(Message::NameChanged("Ann".into()));
        screen.update(Message::EmailChanged("ann@x.com".into()));
        let action = screen.update(Message::Submit);
        match action {
            Action::Submit(record) => assert_eq!(record.email, "ann@x.com"),
            _ => panic!("expected a submit action"),
        }
        assert!(screen.submitting);
    }

    #[test]
    fn test_success_flips_to_joined_view() {
        let mut screen = Waitlist::new(None);
        let record = signup::validate("Ann", "ann@x.com").unwrap();
        screen.update(Message::Submitted(Ok(record.clone())));
        assert_eq!(screen.joined, Some(record));
    }

    #[test]
    fn test_editing_clears_error() {
        let mut screen = Waitlist::new(None);
        screen.update(Message::NameChanged("Ann".into()));
        screen.update(Message::Submit);
        assert!(screen.error.is_some());
        screen.update(Message::EmailChanged("a".into()));
        assert!(screen.error.is_none());
    }
}
