mod app;
mod grid;
mod screen;
mod session_disk;
mod style;
mod subscription;
mod theme;
mod widgets;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter("senden=debug,senden_core=debug")
        .init();

    iced::application(app::Senden::new, app::Senden::update, app::Senden::view)
        .title(app::Senden::title)
        .subscription(app::Senden::subscription)
        .theme(app::Senden::theme)
        .font(lucide_icons::LUCIDE_FONT_BYTES)
        .window(iced::window::Settings {
            size: iced::Size::new(1024.0, 768.0),
            ..Default::default()
        })
        .run()
}
