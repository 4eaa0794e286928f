use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};

use crate::ui::NerdFont;
use crate::ui::catppuccin::{color, colors};

use super::models::{StatusFilter, User};
use super::session::{ManagerSession, ModalState};
use super::store::{UserStore, filter_users};

/// Render one frame of the manager.
///
/// Pure presentation over the current store/session state; the filtered
/// view is recomputed here on every draw.
pub fn draw(frame: &mut Frame, store: &UserStore, session: &ManagerSession, selected: usize) {
    let area = frame.area();
    frame.render_widget(Clear, area);

    let layout = Layout::vertical([
        Constraint::Length(1), // Title
        Constraint::Length(3), // Search input
        Constraint::Length(1), // Status filter
        Constraint::Min(3),    // User list
        Constraint::Length(1), // Key hints
    ])
    .split(area);

    let visible = filter_users(store.users(), session.search(), session.status_filter());

    draw_title(frame, layout[0], visible.len(), store.users().len());
    draw_search(frame, layout[1], session.search());
    draw_filter(frame, layout[2], session.status_filter());
    draw_list(frame, layout[3], &visible, selected);
    draw_footer(frame, layout[4]);

    if session.is_modal_open() {
        draw_modal(frame, area, session);
    }
}

fn draw_title(frame: &mut Frame, area: Rect, shown: usize, total: usize) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {}  User Management", char::from(NerdFont::Users)),
            Style::default()
                .fg(color(colors::MAUVE))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {shown} of {total} shown"),
            Style::default().fg(color(colors::OVERLAY0)),
        ),
    ]));
    frame.render_widget(title, area);
}

fn draw_search(frame: &mut Frame, area: Rect, search: &str) {
    let mut spans = Vec::new();
    if search.is_empty() {
        spans.push(Span::styled("▌", Style::default().fg(color(colors::MAUVE))));
        spans.push(Span::styled(
            "Type to search by name",
            Style::default().fg(color(colors::OVERLAY0)),
        ));
    } else {
        spans.push(Span::styled(
            search.to_string(),
            Style::default().fg(color(colors::TEXT)),
        ));
        spans.push(Span::styled("▌", Style::default().fg(color(colors::MAUVE))));
    }

    let input = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color(colors::SURFACE1)))
            .title(format!(" {} Search ", char::from(NerdFont::Search))),
    );
    frame.render_widget(input, area);
}

fn draw_filter(frame: &mut Frame, area: Rect, filter: StatusFilter) {
    let value_color = match filter {
        StatusFilter::All => colors::TEXT,
        StatusFilter::Active => colors::GREEN,
        StatusFilter::Inactive => colors::YELLOW,
    };

    let line = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {} Filter: ", char::from(NerdFont::Filter)),
            Style::default().fg(color(colors::SUBTEXT0)),
        ),
        Span::styled(filter.label(), Style::default().fg(color(value_color))),
        Span::styled(
            "  (tab to cycle)",
            Style::default().fg(color(colors::OVERLAY0)),
        ),
    ]));
    frame.render_widget(line, area);
}

fn draw_list(frame: &mut Frame, area: Rect, visible: &[&User], selected: usize) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color(colors::SURFACE1)))
        .title(" Users ");

    if visible.is_empty() {
        let placeholder = Paragraph::new("No users found.")
            .style(Style::default().fg(color(colors::OVERLAY1)))
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .map(|user| {
            let (toggle, toggle_color) = if user.status {
                (NerdFont::ToggleOn, colors::GREEN)
            } else {
                (NerdFont::ToggleOff, colors::OVERLAY0)
            };

            ListItem::new(Line::from(vec![
                Span::styled(
                    format!(" {} ", char::from(NerdFont::User)),
                    Style::default().fg(color(colors::BLUE)),
                ),
                Span::styled(user.name.clone(), Style::default().fg(color(colors::TEXT))),
                Span::raw("  "),
                Span::styled(
                    format!("{} {}", char::from(toggle), user.status_label()),
                    Style::default().fg(color(toggle_color)),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(color(colors::SURFACE0)))
        .highlight_symbol("▌");

    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();
    for (i, (key, action)) in [
        ("enter", "edit"),
        ("ctrl-a", "add"),
        ("ctrl-d", "delete"),
        ("ctrl-t", "toggle"),
        ("tab", "filter"),
        ("esc", "quit"),
    ]
    .into_iter()
    .enumerate()
    {
        if i > 0 {
            spans.push(Span::styled(
                "  •  ",
                Style::default().fg(color(colors::SURFACE2)),
            ));
        }
        spans.push(Span::styled(key, Style::default().fg(color(colors::SKY))));
        spans.push(Span::styled(
            format!(" {action}"),
            Style::default().fg(color(colors::OVERLAY1)),
        ));
    }

    let hints = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(hints, area);
}

fn draw_modal(frame: &mut Frame, area: Rect, session: &ManagerSession) {
    let [popup] = Layout::vertical([Constraint::Length(7)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Max(48)])
        .flex(Flex::Center)
        .areas(popup);

    let editing = session.modal() == ModalState::OpenForEdit;
    let (icon, title) = if editing {
        (NerdFont::Edit, "Edit User")
    } else {
        (NerdFont::Plus, "Add User")
    };

    let draft = session.draft();
    let mut name_spans = vec![Span::styled(
        "Name: ",
        Style::default().fg(color(colors::SUBTEXT0)),
    )];
    name_spans.push(Span::styled(
        draft.name.clone(),
        Style::default().fg(color(colors::TEXT)),
    ));
    name_spans.push(Span::styled("▌", Style::default().fg(color(colors::MAUVE))));
    if draft.name.is_empty() {
        name_spans.push(Span::styled(
            "Enter user name",
            Style::default().fg(color(colors::OVERLAY0)),
        ));
    }

    let status_line = if editing {
        let status_color = if draft.status {
            colors::GREEN
        } else {
            colors::OVERLAY0
        };
        let label = if draft.status { "Active" } else { "Inactive" };
        Line::from(vec![
            Span::styled("Status: ", Style::default().fg(color(colors::SUBTEXT0))),
            Span::styled(label, Style::default().fg(color(status_color))),
            Span::styled(
                "  (ctrl-t to toggle)",
                Style::default().fg(color(colors::OVERLAY0)),
            ),
        ])
    } else {
        Line::from(Span::styled(
            "New users start inactive.",
            Style::default().fg(color(colors::OVERLAY0)),
        ))
    };

    let hints = Line::from(vec![
        Span::styled("enter", Style::default().fg(color(colors::SKY))),
        Span::styled(" save", Style::default().fg(color(colors::OVERLAY1))),
        Span::styled("  •  ", Style::default().fg(color(colors::SURFACE2))),
        Span::styled("esc", Style::default().fg(color(colors::SKY))),
        Span::styled(" cancel", Style::default().fg(color(colors::OVERLAY1))),
    ]);

    let body = Paragraph::new(vec![
        Line::default(),
        Line::from(name_spans),
        Line::default(),
        status_line,
        hints,
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color(colors::MAUVE)))
            .title(format!(" {}  {} ", char::from(icon), title))
            .title_style(
                Style::default()
                    .fg(color(colors::MAUVE))
                    .add_modifier(Modifier::BOLD),
            ),
    );

    frame.render_widget(Clear, popup);
    frame.render_widget(body, popup);
}
