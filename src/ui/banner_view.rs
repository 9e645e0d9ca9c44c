// SPDX-License-Identifier: MPL-2.0
//! Widget for rendering a single banner.
//!
//! Banners are full-width strips filled with their style's background
//! color: `[icon] [title / subtitle]`. The whole strip fades with the
//! banner's current opacity.

use super::overlay::Message;
use crate::banner::{BannerContent, BannerIcon, BannerId};
use iced::widget::image::Handle;
use iced::widget::{container, image, mouse_area, text, Column, Container, Row};
use iced::{alignment, Background, Color, Element, Font, Length, Padding, Theme};

/// Layout constants for banner strips.
pub mod metrics {
    pub const ICON_SIZE: f32 = 24.0;
    pub const PADDING_X: f32 = 16.0;
    pub const PADDING_Y: f32 = 8.0;
    pub const SPACING: f32 = 12.0;
    pub const TITLE_SIZE: f32 = 16.0;
    pub const SUBTITLE_SIZE: f32 = 13.0;
}

/// Renders one banner at its full size.
///
/// Tapping the strip posts [`Message::Tapped`].
pub fn view<'a>(
    id: BannerId,
    content: &'a BannerContent,
    width: f32,
    height: f32,
    opacity: f32,
) -> Element<'a, Message> {
    let text_color = Color {
        a: opacity,
        ..Color::WHITE
    };

    let mut lines = Column::new().spacing(2.0).push(
        text(content.title.as_str())
            .size(metrics::TITLE_SIZE)
            .font(Font {
                weight: iced::font::Weight::Bold,
                ..Font::DEFAULT
            })
            .color(text_color),
    );
    if let Some(subtitle) = &content.subtitle {
        lines = lines.push(
            text(subtitle.as_str())
                .size(metrics::SUBTITLE_SIZE)
                .color(text_color),
        );
    }

    let mut strip = Row::new()
        .spacing(metrics::SPACING)
        .align_y(alignment::Vertical::Center);
    if let Some(icon) = content.style.icon() {
        strip = strip.push(icon_view(icon, text_color));
    }
    strip = strip.push(lines.width(Length::Fill));

    let background = with_alpha(content.style.background_color(), opacity);
    let body = Container::new(strip)
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .padding(Padding {
            top: metrics::PADDING_Y,
            bottom: metrics::PADDING_Y,
            left: metrics::PADDING_X,
            right: metrics::PADDING_X,
        })
        .align_y(alignment::Vertical::Center)
        .style(move |_theme: &Theme| banner_style(background));

    mouse_area(body).on_press(Message::Tapped(id)).into()
}

fn icon_view<'a>(icon: &'a BannerIcon, color: Color) -> Element<'a, Message> {
    let glyph = match icon {
        BannerIcon::Success => "\u{2713}",
        BannerIcon::Failure => "\u{2715}",
        BannerIcon::Info => "i",
        BannerIcon::Warning => "!",
        BannerIcon::Path(path) => {
            return image(Handle::from_path(path))
                .width(Length::Fixed(metrics::ICON_SIZE))
                .height(Length::Fixed(metrics::ICON_SIZE))
                .into();
        }
    };
    Container::new(
        text(glyph)
            .size(metrics::ICON_SIZE * 0.75)
            .color(color),
    )
    .width(Length::Fixed(metrics::ICON_SIZE))
    .height(Length::Fixed(metrics::ICON_SIZE))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}

/// Places a banner at `frame`, clipped to the surface `bounds`.
///
/// Returns `None` when the banner is entirely outside the surface, which
/// happens at the start of an entrance and the end of an exit.
pub fn positioned<'a>(
    banner: Element<'a, Message>,
    frame: iced::Rectangle,
    bounds: iced::Rectangle,
) -> Option<Element<'a, Message>> {
    let top = frame.y.max(bounds.y);
    let bottom = (frame.y + frame.height).min(bounds.y + bounds.height);
    if bottom <= top {
        return None;
    }

    // Keep the edge that is still on screen pinned while sliding.
    let anchor = if frame.y < bounds.y {
        alignment::Vertical::Bottom
    } else {
        alignment::Vertical::Top
    };
    let visible = Container::new(banner)
        .height(Length::Fixed(bottom - top))
        .align_y(anchor)
        .clip(true);

    Some(
        Container::new(visible)
            .padding(Padding {
                top: top - bounds.y,
                left: (frame.x - bounds.x).max(0.0),
                ..Padding::ZERO
            })
            .into(),
    )
}

fn with_alpha(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity.clamp(0.0, 1.0),
        ..color
    }
}

fn banner_style(background: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(Color::WHITE),
        ..Default::default()
    }
}
