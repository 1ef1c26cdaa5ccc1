use iced::widget::{center, container, mouse_area, opaque, scrollable, stack};
use iced::{Color, Element, Length};

use crate::theme::{self, ColorScheme};

/// A scrollable with consistent direction and style across the application.
pub fn styled_scrollable<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    cs: &ColorScheme,
) -> scrollable::Scrollable<'a, Message> {
    scrollable(content)
        .direction(scrollable::Direction::Vertical(
            scrollable::Scrollbar::new()
                .width(6)
                .scroller_width(4)
                .margin(2),
        ))
        .style(theme::overlay_scrollbar(cs))
}

/// Overlay `panel` above `base` behind a dimmed backdrop.
///
/// Clicking the backdrop produces `on_dismiss`; the panel itself swallows
/// clicks.
pub fn modal<'a, Message: Clone + 'a>(
    base: impl Into<Element<'a, Message>>,
    panel: impl Into<Element<'a, Message>>,
    on_dismiss: Message,
    backdrop: Color,
) -> Element<'a, Message> {
    let scrim = center(opaque(panel))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme| container::Style {
            background: Some(backdrop.into()),
            ..container::Style::default()
        });

    stack![base.into(), opaque(mouse_area(scrim).on_press(on_dismiss))].into()
}
