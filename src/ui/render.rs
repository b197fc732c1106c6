use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::app::{App, Focus};
use crate::ui::form::{FormField, FormState};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, POPUP_BORDER,
    STATUS_ERROR,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const DIALOG_WIDTH: u16 = 46;
const DIALOG_HEIGHT: u16 = 5;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let regions = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // header
            Constraint::Length(5),  // form
            Constraint::Min(3),     // list
            Constraint::Length(1),  // pagination
            Constraint::Length(3),  // footer
        ])
        .split(area);

    draw_header(frame, regions[0]);
    draw_form(frame, regions[1], app);
    draw_list(frame, regions[2], app);
    draw_pagination(frame, regions[3], app);
    draw_footer(frame, regions[4]);

    if app.confirm().is_visible() {
        draw_confirm_dialog(frame, area);
    }
}

fn draw_header(frame: &mut Frame<'_>, area: Rect) {
    let line = Line::from(vec![
        Span::styled(" User Management", Style::default().fg(HEADER_TEXT)),
        Span::styled("  │  ", Style::default().fg(HEADER_SEPARATOR)),
        Span::styled("roster", Style::default().fg(HEADER_SEPARATOR)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_form(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let form = app.form();
    let title = if form.is_editing() {
        " Edit User "
    } else {
        " Add New User "
    };
    let border = if app.focus() == Focus::Form {
        ACCENT
    } else {
        GLOBAL_BORDER
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    let focused = app.focus() == Focus::Form;
    let lines = vec![
        field_line(form, FormField::Name, focused),
        field_line(form, FormField::Email, focused),
        field_line(form, FormField::Role, focused),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn field_line(form: &FormState, field: FormField, form_focused: bool) -> Line<'static> {
    let value = match field {
        FormField::Name => &form.name,
        FormField::Email => &form.email,
        FormField::Role => &form.role,
    };
    let active = form_focused && form.focused == field;
    let label_style = if active {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(HEADER_SEPARATOR)
    };
    let cursor = if active { "▏" } else { "" };
    Line::from(vec![
        Span::styled(format!(" {:<6}", field.label()), label_style),
        Span::styled(value.clone(), Style::default().fg(HEADER_TEXT)),
        Span::styled(cursor, Style::default().fg(ACCENT)),
    ])
}

fn draw_list(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let users = app.users();
    let border = if app.focus() == Focus::List {
        ACCENT
    } else {
        GLOBAL_BORDER
    };
    let block = Block::default()
        .title(" Users ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    // Loading and error both replace the list; they can never show together.
    let lines: Vec<Line> = if users.loading {
        vec![Line::from(Span::styled(
            " Loading…",
            Style::default().fg(HEADER_SEPARATOR),
        ))]
    } else if let Some(error) = &users.error {
        vec![Line::from(Span::styled(
            format!(" Error: {error}"),
            Style::default().fg(STATUS_ERROR),
        ))]
    } else {
        app.visible_users()
            .iter()
            .enumerate()
            .map(|(i, user)| {
                let selected = app.focus() == Focus::List && i == app.selected();
                let row_style = if selected {
                    Style::default().fg(HEADER_TEXT).bg(ACTIVE_HIGHLIGHT)
                } else {
                    Style::default().fg(HEADER_TEXT)
                };
                Line::from(vec![
                    Span::styled(format!(" {:>3}  ", user.id), row_style),
                    Span::styled(
                        user.name.clone(),
                        row_style.add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(" — ", row_style.fg(HEADER_SEPARATOR)),
                    Span::styled(user.email.clone(), row_style),
                    Span::styled(" — ", row_style.fg(HEADER_SEPARATOR)),
                    Span::styled(
                        user.role.clone(),
                        row_style.add_modifier(Modifier::ITALIC),
                    ),
                ])
            })
            .collect()
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_pagination(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let pages = app.page_count();
    let mut spans = vec![Span::styled(" ", Style::default())];
    for page in 0..pages {
        let style = if page == app.page() {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HEADER_SEPARATOR)
        };
        spans.push(Span::styled(format!("[{}] ", page + 1), style));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn draw_footer(frame: &mut Frame<'_>, area: Rect) {
    let hints =
        " ↑/↓: Select │ ←/→: Page │ e: Edit │ d: Delete │ r: Refresh │ Tab: Form │ Ctrl+Q: Quit";
    let version = format!("v{VERSION} ");

    let hints_width = hints.chars().count();
    let version_width = version.chars().count();
    let content_width = area.width.saturating_sub(2) as usize;
    let padding = content_width
        .saturating_sub(hints_width)
        .saturating_sub(version_width);

    let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
    let line = Line::from(vec![
        Span::styled(hints, text_style),
        Span::styled(" ".repeat(padding), text_style),
        Span::styled(version, text_style),
    ]);

    frame.render_widget(
        Paragraph::new(line).style(text_style).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        area,
    );
}

fn draw_confirm_dialog(frame: &mut Frame<'_>, area: Rect) {
    let dialog = centered_rect_by_size(DIALOG_WIDTH, DIALOG_HEIGHT, area);
    frame.render_widget(Clear, dialog);

    let block = Block::default()
        .title(" Confirm Deletion ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    let lines = vec![
        Line::from(Span::styled(
            " Are you sure you want to delete this user?",
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Enter/y: Delete", Style::default().fg(STATUS_ERROR)),
            Span::styled("   Esc/n: Cancel", Style::default().fg(HEADER_SEPARATOR)),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), dialog);
}

fn centered_rect_by_size(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
