//! Overlay rendering (category picker, QR code, favorites, help popup)

use qrcode::QrCode;
use qrcode::render::unicode;
use qrcode::types::QrError;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::model::ViewState;

use super::utils::{centered_rect, truncate_string};

pub fn render_category_picker(frame: &mut Frame, state: &ViewState) {
    let area = frame.area();

    let entries: Vec<(&str, &str)> = std::iter::once(("", "Select category"))
        .chain(
            state
                .categories
                .iter()
                .map(|c| (c.slug.as_str(), c.name.as_str())),
        )
        .collect();

    let max_name_len = entries.iter().map(|(_, name)| name.chars().count()).max().unwrap_or(20);
    let popup_width = (max_name_len as u16 + 8).clamp(30, 50);
    let popup_height = (entries.len() as u16 + 2).max(5);
    let popup_area = centered_rect(area, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let items: Vec<ListItem> = entries
        .iter()
        .enumerate()
        .map(|(i, (slug, name))| {
            let is_cursor = i == state.category_cursor;
            let is_current = *slug == state.category;
            let marker = if is_current { " ●" } else { "" };

            let style = if is_cursor {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else if is_current {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!("{}{}", name, marker)).style(style)
        })
        .collect();

    let title = if state.categories.is_empty() && state.is_loading {
        " Loading categories... "
    } else {
        " Category (↑↓ Enter Esc) "
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(title)
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .style(Style::default().bg(Color::Black)),
    );

    let mut list_state = ListState::default();
    list_state.select(Some(state.category_cursor));

    frame.render_stateful_widget(list, popup_area, &mut list_state);
}

/// Encode `payload` as a QR code drawn with half-block characters.
///
/// Every module is one cell wide and half a cell tall; dark modules use the
/// foreground colour.
pub fn qr_lines(payload: &str) -> Result<Vec<String>, QrError> {
    let code = QrCode::new(payload.as_bytes())?;
    let image = code
        .render::<unicode::Dense1x2>()
        .quiet_zone(true)
        .build();
    Ok(image.lines().map(str::to_owned).collect())
}

pub fn render_qr_code(frame: &mut Frame, state: &ViewState) {
    let Some(quote) = &state.quote else {
        return;
    };
    let area = frame.area();

    let lines = match qr_lines(&quote.share_text()) {
        Ok(lines) => lines,
        Err(e) => {
            tracing::warn!(error = %e, "Quote does not fit in a QR code");
            vec!["Quote is too long for a QR code".to_string()]
        }
    };

    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16 + 2;
    let height = lines.len() as u16 + 2;
    let popup_area = centered_rect(area, width.max(24), height);

    frame.render_widget(Clear, popup_area);

    let qr = Paragraph::new(lines.into_iter().map(Line::from).collect::<Vec<_>>()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Black))
            .title(" QR (r/Esc) ")
            .title_style(Style::default().fg(Color::Black).add_modifier(Modifier::BOLD))
            .style(Style::default().fg(Color::Black).bg(Color::White)),
    );
    frame.render_widget(qr, popup_area);
}

pub fn render_favorites(frame: &mut Frame, state: &ViewState) {
    let area = frame.area();
    let popup_width = 70.min(area.width.saturating_sub(4));
    let inner_width = popup_width.saturating_sub(4) as usize;
    let popup_height = (state.favorites.len() as u16 * 2 + 2)
        .max(4)
        .min(area.height.saturating_sub(4));
    let popup_area = centered_rect(area, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let lines: Vec<Line> = if state.favorites.is_empty() {
        vec![Line::from(Span::styled(
            "No favorites yet. Press [f] on a quote to save it.",
            Style::default().fg(Color::Gray),
        ))]
    } else {
        state
            .favorites
            .iter()
            .flat_map(|favorite| {
                [
                    Line::from(Span::styled(
                        truncate_string(&favorite.quote, inner_width),
                        Style::default().fg(Color::White),
                    )),
                    Line::from(Span::styled(
                        format!("- {}", favorite.author),
                        Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
                    )),
                ]
            })
            .collect()
    };

    let favorites = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(format!(" Favorites ({}) ", state.favorites.len()))
            .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(favorites, popup_area);
}

pub fn render_help_popup(frame: &mut Frame) {
    let area = frame.area();

    let keybindings = vec![
        ("", "── Quotes ──"),
        ("N", "New quote"),
        ("C", "Pick a category"),
        ("/ or S", "Search by author"),
        ("Enter", "Submit search"),
        ("Esc", "Clear search"),
        ("", ""),
        ("", "── Actions ──"),
        ("T", "Tweet quote"),
        ("F", "Add / remove favorite"),
        ("Y", "Copy quote"),
        ("R", "Show QR code"),
        ("V", "Show favorites"),
        ("D", "Toggle dark mode"),
        ("", ""),
        ("", "── General ──"),
        ("H", "Toggle this help"),
        ("Q", "Quit"),
    ];

    let popup_width = 50;
    let popup_height = keybindings.len() as u16 + 2;
    let popup_area = centered_rect(area, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let lines: Vec<Line> = keybindings
        .iter()
        .map(|(key, desc)| {
            if key.is_empty() {
                Line::from(Span::styled(
                    format!("{:^46}", desc),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("{:>12}", key),
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(desc.to_string(), Style::default().fg(Color::White)),
                ])
            }
        })
        .collect();

    let help_text = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Help (H or Esc to close) ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(help_text, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qr_lines_form_a_square_of_half_blocks() {
        let payload = "Be yourself. - Oscar Wilde";
        let lines = qr_lines(payload).unwrap();

        let modules = QrCode::new(payload.as_bytes()).unwrap().width() + 8;
        assert_eq!(lines.len(), modules.div_ceil(2));
        assert!(lines.iter().all(|l| l.chars().count() == modules));
    }

    #[test]
    fn oversized_payload_is_an_error() {
        let payload = "x".repeat(5000);
        assert!(qr_lines(&payload).is_err());
    }
}
