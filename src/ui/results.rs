/// Diagnosis report screen
///
/// Banner color follows the normal/abnormal flag, confidence renders as
/// a progress bar, and the recommendation list comes straight from the
/// diagnosis record.

use iced::widget::{button, column, container, image, progress_bar, row, text, Column};
use iced::{border, Alignment, Background, Color, Element, Length, Theme};

use crate::state::session::Session;
use crate::Message;

pub fn view(session: &Session) -> Element<'_, Message> {
    let (Some(diagnosis), Some(scan)) = (session.diagnosis(), session.scan()) else {
        // Screen::Report guarantees both are set; render nothing if not
        return column![].into();
    };

    let (icon, banner_style) = if diagnosis.is_normal {
        ("✅", normal_banner as fn(&Theme) -> container::Style)
    } else {
        ("⚠️", abnormal_banner as fn(&Theme) -> container::Style)
    };

    let banner = container(
        text(format!(
            "{} {} (Confidence: {}%)",
            icon, diagnosis.condition, diagnosis.confidence
        ))
        .size(20),
    )
    .style(banner_style)
    .width(Length::Fill)
    .padding(14);

    let mut recommendations: Column<Message> =
        column![text("Recommendations").size(20)].spacing(8);
    for line in diagnosis.recommendations() {
        recommendations = recommendations.push(text(format!("• {}", line)).size(15));
    }

    let details_card = container(
        column![
            text("Analysis Details").size(20),
            text("Confidence level:").size(15),
            progress_bar(0.0..=100.0, diagnosis.confidence as f32).height(14),
            text(format!("{}%", diagnosis.confidence)).size(14),
            recommendations,
        ]
        .spacing(12),
    )
    .style(container::bordered_box)
    .padding(20);

    let disclaimer = container(
        text("ℹ️ This analysis is AI-generated and must be validated by a medical professional.")
            .size(14),
    )
    .style(info_notice)
    .width(Length::Fill)
    .padding(12);

    column![
        banner,
        text(diagnosis.details).size(16),
        row![
            column![
                image(scan.handle.clone()).width(Length::Fill),
                text("Analyzed image").size(14),
            ]
            .spacing(8)
            .align_x(Alignment::Center)
            .width(Length::FillPortion(1)),
            details_card,
        ]
        .spacing(20),
        disclaimer,
        row![
            button(text("Save report"))
                .on_press(Message::ExportReport)
                .style(button::secondary)
                .padding(12),
            button(text("Analyze another image"))
                .on_press(Message::ResetAnalysis)
                .style(button::primary)
                .padding(12),
        ]
        .spacing(16),
    ]
    .spacing(16)
    .into()
}

fn normal_banner(_theme: &Theme) -> container::Style {
    notice_style(
        Color::from_rgb(0.09, 0.32, 0.18),
        Color::from_rgb(0.78, 0.95, 0.82),
    )
}

fn abnormal_banner(_theme: &Theme) -> container::Style {
    notice_style(
        Color::from_rgb(0.42, 0.30, 0.05),
        Color::from_rgb(0.99, 0.91, 0.64),
    )
}

fn info_notice(_theme: &Theme) -> container::Style {
    notice_style(
        Color::from_rgb(0.08, 0.22, 0.36),
        Color::from_rgb(0.75, 0.88, 0.99),
    )
}

fn notice_style(background: Color, text_color: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text_color),
        border: border::rounded(8.0),
        ..container::Style::default()
    }
}
