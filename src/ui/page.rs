//! Sidebar, page content and the login form.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph, Tabs, Wrap},
};

use crate::app::App;
use crate::catalog::{CatalogItem, SIDEBAR_PLAYLISTS, Song};
use crate::pages::{
    BROWSE_HINT, BROWSE_PROMPT, LibraryTab, LoginField, LoginForm, NavTarget,
    QUERY_PLACEHOLDER, Route, SIDEBAR_MAIN, SIDEBAR_SECONDARY,
};
use crate::playback::PositionSource;

fn is_active<S: PositionSource>(app: &App<S>, target: NavTarget) -> bool {
    match (target, app.route()) {
        (NavTarget::Home, Route::Home) | (NavTarget::Search, Route::Search) => true,
        (NavTarget::Library, Route::Library) => app.library.tab() != LibraryTab::LikedSongs,
        (NavTarget::LikedSongs, Route::Library) => app.library.tab() == LibraryTab::LikedSongs,
        _ => false,
    }
}

pub fn render_sidebar<S: PositionSource>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let mut lines: Vec<Line> = Vec::new();
    for group in [SIDEBAR_MAIN, SIDEBAR_SECONDARY] {
        for entry in group {
            let style = if is_active(app, entry.target) {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", entry.key), Style::default().add_modifier(Modifier::DIM)),
                Span::styled(entry.label, style),
            ]));
        }
        lines.push(Line::raw(""));
    }
    lines.push(Line::styled(
        "PLAYLISTS",
        Style::default().add_modifier(Modifier::DIM | Modifier::BOLD),
    ));
    for name in SIDEBAR_PLAYLISTS {
        lines.push(Line::raw(format!("  {name}")));
    }

    let sidebar = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" DoraTunes ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(sidebar, area);
}

/// Glyph shown at the start of a song row.
fn row_glyph<S: PositionSource>(app: &App<S>, id: &str) -> &'static str {
    if app.session.is_playing_track(id) {
        "⏸ "
    } else if app.session.is_current(id) {
        "▶ "
    } else {
        "  "
    }
}

fn song_row<S: PositionSource>(app: &App<S>, song: &Song) -> ListItem<'static> {
    let current = app.session.is_current(song.id);
    let title_style = if current {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let mut spans = vec![
        Span::raw(row_glyph(app, song.id)),
        Span::styled(song.title, title_style),
        Span::styled(format!(" · {}", song.artist), Style::default().add_modifier(Modifier::DIM)),
    ];
    if let Some(album) = song.album {
        spans.push(Span::styled(format!(" · {album}"), Style::default().add_modifier(Modifier::DIM)));
    }
    spans.push(Span::raw(format!("  {}", song.duration)));
    if app.is_liked(song.id) {
        spans.push(Span::styled("  ♥", Style::default().fg(Color::Red)));
    }
    ListItem::new(Line::from(spans))
}

fn card_row<S: PositionSource>(app: &App<S>, item: &CatalogItem) -> ListItem<'static> {
    let mut spans = vec![
        Span::styled(
            format!("[{}] ", item.kind()),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(item.title(), Style::default().add_modifier(Modifier::BOLD)),
    ];
    if let Some(sub) = item.subtitle() {
        spans.push(Span::styled(format!(" · {sub}"), Style::default().add_modifier(Modifier::DIM)));
    }
    if app.session.is_current(item.id()) {
        spans.push(Span::styled("  ♪", Style::default().fg(Color::Cyan)));
    }
    if app.is_liked(item.id()) {
        spans.push(Span::styled("  ♥", Style::default().fg(Color::Red)));
    }
    ListItem::new(Line::from(spans))
}

/// Lines above the item list: search box, detail header, or nothing.
fn page_header<S: PositionSource>(app: &App<S>) -> Vec<Line<'static>> {
    match app.route() {
        Route::Search => {
            let query = if app.search.has_query() || app.search.is_editing() {
                let caret = if app.search.is_editing() { "▏" } else { "" };
                Span::raw(format!("{}{}", app.search.query(), caret))
            } else {
                Span::styled(QUERY_PLACEHOLDER, Style::default().add_modifier(Modifier::DIM))
            };
            vec![Line::from(vec![Span::raw("🔍 "), query]), Line::raw("")]
        }
        Route::Detail { .. } => match app.detail.detail() {
            Some(d) => vec![
                Line::styled(
                    d.kind.label().to_uppercase(),
                    Style::default().add_modifier(Modifier::DIM),
                ),
                Line::styled(d.title, Style::default().add_modifier(Modifier::BOLD)),
                Line::raw(format!("Created by: {}", d.creator_or_unknown())),
                Line::raw(format!("{} songs", d.tracks.len())),
                Line::styled(
                    "[P] Play All   [X] Shuffle",
                    Style::default().fg(Color::Yellow),
                ),
                Line::raw(""),
            ],
            None => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// Placeholder shown instead of the item list, if any.
fn page_placeholder<S: PositionSource>(app: &App<S>) -> Option<Vec<Line<'static>>> {
    match app.route() {
        Route::Search if !app.search.has_query() => Some(vec![
            Line::raw(BROWSE_PROMPT),
            Line::styled(BROWSE_HINT, Style::default().add_modifier(Modifier::DIM)),
        ]),
        Route::Detail { .. } => app.detail.empty_message().map(|m| vec![Line::raw(m)]),
        _ => None,
    }
}

pub fn render_page<S: PositionSource>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let Some(page) = app.active_page() else {
        return;
    };
    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", app.route().label()))
        .padding(Padding::horizontal(1));
    if let Some(status) = app.status() {
        block = block.title_bottom(Line::from(format!(" {status} ")).right_aligned());
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let header = page_header(app);
    let tabs = page.tabs();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header.len() as u16),
            Constraint::Length(if tabs.is_some() { 2 } else { 0 }),
            Constraint::Min(1),
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(header), chunks[0]);
    if let Some((labels, selected)) = tabs {
        let tabs = Tabs::new(labels)
            .select(selected)
            .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
        frame.render_widget(tabs, chunks[1]);
    }

    if let Some(lines) = page_placeholder(app) {
        let placeholder = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(placeholder, chunks[2]);
        return;
    }

    // Section titles are list entries too, so map the flat item cursor to
    // a list row.
    let mut items: Vec<ListItem> = Vec::new();
    let mut selected_row = None;
    let mut flat = 0;
    for section in page.sections() {
        items.push(ListItem::new(Line::styled(
            section.title.clone(),
            Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )));
        for item in &section.items {
            if flat == page.cursor() {
                selected_row = Some(items.len());
            }
            items.push(match item {
                CatalogItem::Song(song) => song_row(app, song),
                _ => card_row(app, item),
            });
            flat += 1;
        }
        items.push(ListItem::new(""));
    }

    let list = List::new(items)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    state.select(selected_row);
    frame.render_stateful_widget(list, chunks[2], &mut state);
}

fn field_line(form: &LoginForm, field: LoginField) -> Line<'static> {
    let (label, value, secret) = match field {
        LoginField::Email => ("Email", form.email.as_str(), false),
        LoginField::Password => ("Password", form.password.as_str(), true),
        LoginField::ConfirmPassword => ("Confirm", form.confirm_password.as_str(), true),
    };
    let shown = if secret {
        "•".repeat(value.chars().count())
    } else {
        value.to_string()
    };
    let focused = form.focus() == field;
    let marker = if focused { "> " } else { "  " };
    let style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::raw(marker),
        Span::styled(format!("{label:<9}"), Style::default().add_modifier(Modifier::DIM)),
        Span::styled(shown, style),
    ])
}

pub fn render_login(frame: &mut Frame, area: Rect, form: &LoginForm) {
    let popup = super::centered_rect_sized(64, 14, area);
    frame.render_widget(Clear, popup);

    let mut lines = vec![
        Line::styled(form.title(), Style::default().add_modifier(Modifier::BOLD)),
        Line::styled(form.subtitle(), Style::default().add_modifier(Modifier::DIM)),
        Line::raw(""),
    ];
    for field in form.fields() {
        lines.push(field_line(form, *field));
    }
    lines.push(Line::raw(""));
    if let Some(err) = form.error() {
        lines.push(Line::styled(
            "Oops! Something went wrong!",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::styled(err.to_string(), Style::default().fg(Color::Red)));
    }
    let toggle = if form.is_register_mode() {
        "Already have an account? Login"
    } else {
        "Don't have an account? Register"
    };
    lines.push(Line::styled(toggle, Style::default().fg(Color::Blue)));

    let card = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" DoraTunes Login ")
                .title_alignment(Alignment::Center)
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(card, popup);
}
