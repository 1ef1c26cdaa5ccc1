use iced::widget::{container, markdown};
use iced::{Element, Length};

use crate::screen::Action;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets;

const SOURCE: &str = include_str!("../../assets/content/manifesto.md");

/// Manifesto screen state: the parsed page, kept across renders.
pub struct Manifesto {
    items: Vec<markdown::Item>,
}

#[derive(Debug, Clone)]
pub enum Message {
    LinkClicked(markdown::Uri),
}

impl Manifesto {
    pub fn new() -> Self {
        Self {
            items: markdown::parse(SOURCE).collect(),
        }
    }

    pub fn update(&mut self, msg: Message) -> Action {
        match msg {
            Message::LinkClicked(url) => Action::OpenUrl(url),
        }
    }

    pub fn view(&self, cs: &ColorScheme) -> Element<'_, Message> {
        let page = markdown::view(
            &self.items,
            markdown::Settings::with_style(markdown::Style::from_palette(
                theme::build_theme(cs).palette(),
            )),
        )
        .map(Message::LinkClicked);

        widgets::styled_scrollable(
            container(page)
                .width(Length::Fill)
                .padding([style::SPACE_LG, style::SPACE_XL]),
            cs,
        )
        .height(Length::Fill)
        .into()
    }
}
