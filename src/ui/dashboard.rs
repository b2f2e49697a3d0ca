/// Authenticated dashboard
///
/// Header with sign-out, then one of three bodies depending on the
/// session state: the uploader, the preview with Analyze/Cancel, or the
/// diagnosis report. A status line sits at the bottom.

use iced::widget::{
    button, column, container, horizontal_rule, horizontal_space, image, row, text,
};
use iced::{Alignment, Element, Length};

use crate::state::session::{Screen, Session};
use crate::ui::results;
use crate::Message;

pub fn view<'a>(session: &'a Session, analyzing: bool, status: &'a str) -> Element<'a, Message> {
    let header = row![
        column![
            text("🩺 MediScan AI").size(34),
            text("Medical Image Analysis").size(16),
        ]
        .spacing(4),
        horizontal_space(),
        button(text("Sign out"))
            .on_press(Message::Logout)
            .style(button::secondary)
            .padding(10),
    ]
    .align_y(Alignment::Center);

    let body: Element<Message> = match session.screen() {
        Screen::Report => results::view(session),
        Screen::Preview => preview(session, analyzing),
        _ => uploader(),
    };

    let content = column![
        header,
        horizontal_rule(1),
        container(body)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill),
        text(status).size(14),
    ]
    .spacing(20)
    .padding(30);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Initial body: prompt the user to pick a chest X-ray
fn uploader<'a>() -> Element<'a, Message> {
    let prompt = column![
        text("Upload a chest X-ray").size(24),
        text("Pick a PNG or JPEG image to analyze.").size(16),
        button(text("Choose image"))
            .on_press(Message::PickScan)
            .style(button::primary)
            .padding(12),
    ]
    .spacing(16)
    .align_x(Alignment::Center);

    container(prompt)
        .style(container::bordered_box)
        .padding(40)
        .into()
}

/// Body shown once a scan is loaded but not yet analyzed
fn preview<'a>(session: &'a Session, analyzing: bool) -> Element<'a, Message> {
    let Some(scan) = session.scan() else {
        return uploader();
    };

    let caption = format!("{} ({}x{})", scan.filename, scan.width, scan.height);

    let mut content = column![
        text("Loaded scan").size(24),
        image(scan.handle.clone())
            .width(Length::Fill)
            .height(Length::FillPortion(4)),
        text(caption).size(14),
        row![
            button(text("Analyze image"))
                .on_press_maybe((!analyzing).then_some(Message::Analyze))
                .style(button::primary)
                .padding(12),
            button(text("Cancel"))
                .on_press(Message::ResetAnalysis)
                .style(button::secondary)
                .padding(12),
        ]
        .spacing(16),
    ]
    .spacing(16)
    .align_x(Alignment::Center);

    if analyzing {
        content = content.push(
            text("Analyzing image... our AI system is processing the radiograph.").size(16),
        );
    }

    content.into()
}
