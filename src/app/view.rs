// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.
//!
//! The page content sits at the bottom of a [`Stack`] and the banner layer
//! above it, so the banner always paints over the page.

use super::Message;
use crate::snackbar::Snackbar;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons::{navigation, toggle};
use crate::ui::styles;
use crate::ui::theming::AppTheme;
use iced::widget::{button, container, text, Column, Row, Stack};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub theme: &'a AppTheme,
    pub snackbar: &'a Snackbar<Message>,
    pub favourite: bool,
    pub checked: bool,
    pub status: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let controls = Row::new()
        .spacing(spacing::XS)
        .push(
            button(text("Notify").size(typography::BUTTON))
                .on_press(Message::Notify)
                .style(styles::button::primary),
        )
        .push(button(text("Hide").size(typography::BUTTON)).on_press(Message::Hide))
        .push(button(text("Theme").size(typography::BUTTON)).on_press(Message::ToggleTheme))
        .push(
            button(text("Export diagnostics").size(typography::BUTTON))
                .on_press(Message::ExportDiagnostics),
        );

    let banner_state = ctx.snackbar.banner();
    let state_line = text(format!(
        "phase: {:?} | message: \"{}\"",
        banner_state.phase(),
        banner_state.displayed().message
    ))
    .size(typography::BODY);

    let mut page = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(controls)
        .push(icon_row(&ctx))
        .push(state_line);

    if let Some(status) = ctx.status {
        page = page.push(text(status).size(typography::BODY));
    }

    let content = container(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Left)
        .align_y(alignment::Vertical::Top)
        .style(styles::container::panel);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(content)
        .push(ctx.snackbar.view().map(Message::Snackbar))
        .into()
}

fn icon_row<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let theme = ctx.theme;
    let star = if ctx.favourite {
        toggle::star().color(theme.colors.accent)
    } else {
        toggle::star_border()
    };
    let check = if ctx.checked {
        toggle::check_box().color(theme.colors.brand_primary)
    } else {
        toggle::check_box_outline_blank()
    };
    let radio = if ctx.checked {
        toggle::radio_button_checked()
    } else {
        toggle::radio_button_unchecked()
    };

    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            button(star.size(sizing::ICON_LG).view(theme))
                .on_press(Message::ToggleFavourite)
                .style(styles::button::flat(theme.colors.text_primary)),
        )
        .push(
            button(check.view(theme))
                .on_press(Message::ToggleChecked)
                .style(styles::button::flat(theme.colors.text_primary)),
        )
        .push(radio.view(theme))
        .push(toggle::indeterminate_check_box().view(theme))
        .push(
            button(
                navigation::close()
                    .size(sizing::ICON_SM)
                    .hover_color(theme.colors.accent)
                    .view(theme),
            )
            .on_press(Message::Hide)
            .style(styles::button::flat(theme.colors.text_primary)),
        )
        .into()
}
