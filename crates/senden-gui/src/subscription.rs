use iced::Subscription;

use crate::app::Message;

/// Window events drive the layout: every open/resize notification lands in
/// `update` and recomputes the grid before the next render.
pub fn window_events() -> Subscription<Message> {
    iced::event::listen_with(|event, _status, _id| match event {
        iced::Event::Window(event) => Some(Message::WindowEvent(event)),
        _ => None,
    })
}
