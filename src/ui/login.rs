/// Login screen
///
/// Any non-empty credential pair is accepted; validation happens in
/// `Session::login`. A failed attempt renders inline error text under
/// the form.

use iced::widget::{button, column, container, text, text_input, Column};
use iced::{Alignment, Element, Length};

use crate::Message;

pub fn view<'a>(
    email: &'a str,
    password: &'a str,
    error: Option<&'a str>,
) -> Element<'a, Message> {
    let mut form: Column<Message> = column![
        text("🩺").size(56),
        text("Welcome to MediScan AI").size(32),
        text("Medical image diagnosis system.").size(16),
        text_input("doctor@hospital.com", email)
            .on_input(Message::EmailChanged)
            .on_submit(Message::LoginSubmitted)
            .padding(10),
        text_input("••••••••", password)
            .secure(true)
            .on_input(Message::PasswordChanged)
            .on_submit(Message::LoginSubmitted)
            .padding(10),
        button(text("Sign in"))
            .on_press(Message::LoginSubmitted)
            .style(button::primary)
            .padding(10),
    ]
    .spacing(16)
    .max_width(420)
    .align_x(Alignment::Center);

    if let Some(message) = error {
        form = form.push(text(message).size(14).style(text::danger));
    }

    container(form)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
