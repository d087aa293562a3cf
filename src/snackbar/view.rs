// SPDX-License-Identifier: MPL-2.0
//! Banner rendering.
//!
//! Layout: a full-size, bottom-anchored root holding the body panel
//! `[message] [action]`. Iced has no transform or z-index, so the hidden
//! banner renders as an empty container and the owner stacks the banner
//! above its content.

use iced::widget::{button, container, text, Container, Row};
use iced::{alignment, Color, Element, Length, Padding};

use crate::snackbar::component::Message;
use crate::snackbar::controller::Banner;
use crate::snackbar::style::body_width;
use crate::ui::design_tokens::typography;
use crate::ui::styles;

pub(crate) fn render(banner: &Banner) -> Element<'_, Message> {
    let computed = banner.styles();

    if !computed.root.visible {
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let content = banner.displayed();
    let message_color = Color {
        a: computed.content.color.a * computed.content.opacity,
        ..computed.content.color
    };
    let message = text(content.message.as_str())
        .size(computed.content.font_size)
        .color(message_color);

    let mut row = Row::new()
        .align_y(alignment::Vertical::Center)
        .height(Length::Fill)
        .push(
            Container::new(message)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        );

    let mut padding = Padding::ZERO
        .left(computed.body.padding_x)
        .right(computed.body.padding_x);

    if let Some(label) = &content.action {
        let action = button(text(label.as_str()).size(typography::BUTTON))
            .on_press(Message::ActionPressed)
            .style(styles::button::flat(computed.action.color));
        row = row.push(
            Container::new(action)
                .align_y(alignment::Vertical::Top)
                .padding(
                    Padding::ZERO
                        .left(computed.action.margin_left)
                        .top(computed.action.margin_top),
                ),
        );
        // The action hangs into the right padding.
        padding = padding.right((computed.body.padding_x + computed.action.margin_right).max(0.0));
    }

    // Same width the click-away rectangle uses.
    let width = if computed.body.fill_width {
        Length::Fill
    } else {
        let viewport_width = banner
            .viewport_size()
            .map_or(f32::INFINITY, |size| size.width);
        Length::Fixed(body_width(viewport_width, content, banner.theme(), &computed.body))
    };

    let body = container(row)
        .width(width)
        .height(Length::Fixed(computed.body.height))
        .padding(padding)
        .style(styles::container::snackbar_body(
            computed.body.background,
            message_color,
            computed.body.radius,
        ));

    container(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Bottom)
        .style(styles::container::snackbar_root(computed.root.background))
        .into()
}
