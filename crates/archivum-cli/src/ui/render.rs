use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{
        Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap,
        canvas::{Canvas, Line as CanvasLine},
    },
};
use std::collections::HashMap;

use archivum_engine::{Card, Orientation, Source};

use super::app::{App, InputMode, NOTE_IDS, Section};

const GOLD: Color = Color::Rgb(0xDA, 0xA5, 0x20);

/// Render the whole screen for the current section.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Section tabs
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Status / hints
        ])
        .split(f.area());

    draw_tabs(f, chunks[0], app);

    match app.section() {
        Section::Home => draw_home(f, chunks[1], app),
        Section::Library => draw_library(f, chunks[1], app),
        Section::Timeline => draw_timeline(f, chunks[1], app),
        Section::Map => draw_map(f, chunks[1], app),
        Section::Notes => draw_notes(f, chunks[1], app),
        Section::Detail => draw_detail(f, chunks[1], app),
    }

    draw_status(f, chunks[2], app);
}

fn draw_tabs(f: &mut Frame, area: Rect, app: &App) {
    let titles = ["1 Home", "2 Library", "3 Timeline", "4 Map", "5 Notes"];
    // Detail keeps the originating list section highlighted.
    let section = match app.section() {
        Section::Detail => app.last_list_section(),
        other => other,
    };
    let selected = match section {
        Section::Home | Section::Detail => 0,
        Section::Library => 1,
        Section::Timeline => 2,
        Section::Map => 3,
        Section::Notes => 4,
    };

    let tabs = Tabs::new(titles.iter().map(|t| Line::from(*t)).collect::<Vec<_>>())
        .select(selected)
        .highlight_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));
    f.render_widget(tabs, area);
}

fn draw_home(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    // Welcome quote overlay, while the sequence runs.
    if let Some(quote) = app.quotes.state() {
        let style = if quote.visible {
            Style::default().fg(GOLD).add_modifier(Modifier::ITALIC)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let quote_widget = Paragraph::new(Line::from(Span::styled(quote.text, style)))
            .centered()
            .block(Block::default().borders(Borders::BOTTOM));
        f.render_widget(quote_widget, chunks[0]);
    }

    let body = match app
        .daily_id
        .as_deref()
        .and_then(|id| app.archive().get(id))
    {
        Some(record) => {
            let mut lines = vec![
                Line::from(Span::styled(
                    "Daily review",
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    record.name.clone(),
                    Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
                )),
                Line::from(record.dates.clone()),
                Line::from(""),
                Line::from(record.summary.clone()),
            ];
            if !record.key_terms.is_empty() {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    record.key_terms.join(" · "),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Enter: open detail   1-5: sections   q: quit",
                Style::default().fg(Color::DarkGray),
            )));
            Text::from(lines)
        }
        None => Text::from("The archive is empty."),
    };

    let widget = Paragraph::new(body)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" archivum "));
    f.render_widget(widget, chunks[1]);
}

fn draw_library(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let search_style = if app.mode == InputMode::Search {
        Style::default().fg(GOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let search =
        Paragraph::new(format!("/ {}", app.filter.query)).style(search_style);
    f.render_widget(search, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(chunks[1]);

    // The cursor runs over the three grids in display order; work out
    // which grid it currently falls into.
    let people_len = app.grids.people.len();
    let movements_len = app.grids.movements.len();
    let cursor = app.library_cursor;

    let selections = [
        (cursor < people_len).then_some(cursor),
        (cursor >= people_len && cursor < people_len + movements_len)
            .then(|| cursor - people_len),
        (cursor >= people_len + movements_len)
            .then(|| cursor - people_len - movements_len),
    ];

    let grids = [
        ("People", &app.grids.people),
        ("Movements & Events", &app.grids.movements),
        ("Resources", &app.grids.resources),
    ];

    for ((area, (title, cards)), selected) in columns.iter().zip(grids).zip(selections) {
        draw_grid_column(f, *area, title, cards, selected);
    }
}

fn draw_grid_column(f: &mut Frame, area: Rect, title: &str, cards: &[Card], selected: Option<usize>) {
    let items: Vec<ListItem> = cards
        .iter()
        .map(|card| {
            let lines = vec![
                Line::from(Span::styled(
                    card.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    card.dates.clone(),
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(card.summary.clone()),
            ];
            ListItem::new(Text::from(lines))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(format!(" {} ", title)))
        .highlight_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));

    let mut state = ListState::default();
    state.select(selected);
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_timeline(f: &mut Frame, area: Rect, app: &App) {
    let title = match app.mode {
        InputMode::JumpYear => format!(" Timeline - jump to year: {}_ ", app.jump_input),
        _ => " Timeline (o: orientation, g: jump) ".to_string(),
    };
    let block = Block::default().borders(Borders::ALL).title(title);

    match app.orientation {
        Orientation::Vertical => {
            let items: Vec<ListItem> = app
                .timeline
                .iter()
                .map(|entry| {
                    let year = entry
                        .year
                        .map(|y| y.to_string())
                        .unwrap_or_else(|| "----".to_string());
                    let style = if entry.accent {
                        Style::default().fg(Color::Red)
                    } else {
                        Style::default()
                    };
                    ListItem::new(Line::from(Span::styled(
                        format!("{:>5}  {}  ({})", year, entry.name, entry.dates),
                        style,
                    )))
                })
                .collect();

            let list = List::new(items)
                .block(block)
                .highlight_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
                .highlight_symbol("> ");

            let mut state = ListState::default();
            state.select(Some(app.timeline_cursor));
            f.render_stateful_widget(list, area, &mut state);
        }
        Orientation::Horizontal => {
            let mut spans: Vec<Span> = Vec::new();
            for (idx, entry) in app.timeline.iter().enumerate() {
                if idx > 0 {
                    spans.push(Span::styled(" -> ", Style::default().fg(Color::DarkGray)));
                }
                let year = entry
                    .year
                    .map(|y| y.to_string())
                    .unwrap_or_else(|| "----".to_string());
                let mut style = if entry.accent {
                    Style::default().fg(Color::Red)
                } else {
                    Style::default()
                };
                if idx == app.timeline_cursor {
                    style = style.fg(GOLD).add_modifier(Modifier::BOLD);
                }
                spans.push(Span::styled(format!("{} {}", year, entry.name), style));
            }

            let widget = Paragraph::new(Line::from(spans))
                .wrap(Wrap { trim: true })
                .block(block);
            f.render_widget(widget, area);
        }
    }
}

fn draw_map(f: &mut Frame, area: Rect, app: &App) {
    let nodes = &app.graph.nodes;
    let edges = &app.graph.edges;

    // Deterministic circular layout; physics stays with external tooling
    // (see `archivum map export`).
    let mut positions: HashMap<&str, (f64, f64)> = HashMap::new();
    let n = nodes.len().max(1) as f64;
    for (idx, node) in nodes.iter().enumerate() {
        let angle = std::f64::consts::TAU * idx as f64 / n;
        positions.insert(node.id.as_str(), (80.0 * angle.cos(), 80.0 * angle.sin()));
    }

    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Relationship map (r: reset) "),
        )
        .x_bounds([-100.0, 100.0])
        .y_bounds([-100.0, 100.0])
        .paint(|ctx| {
            for edge in edges {
                if let (Some(&(x1, y1)), Some(&(x2, y2))) = (
                    positions.get(edge.from.as_str()),
                    positions.get(edge.to.as_str()),
                ) {
                    ctx.draw(&CanvasLine {
                        x1,
                        y1,
                        x2,
                        y2,
                        color: Color::DarkGray,
                    });
                }
            }
            for node in nodes {
                if let Some(&(x, y)) = positions.get(node.id.as_str()) {
                    ctx.print(
                        x,
                        y,
                        Line::from(Span::styled(
                            node.label.clone(),
                            Style::default().fg(color_from_hex(node.color)),
                        )),
                    );
                }
            }
        });

    f.render_widget(canvas, area);
}

fn draw_notes(f: &mut Frame, area: Rect, app: &App) {
    if app.notes_minimized {
        let widget = Paragraph::new("+ Notes (m: restore)")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(widget, area);
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let titles = ["Global notes", "Daily notes"];
    for (idx, (area, title)) in columns.iter().zip(titles).enumerate() {
        let active = idx == app.active_note;
        let border_style = if active {
            Style::default().fg(GOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let mode_hint = if active && app.mode == InputMode::NoteEdit {
            " (editing) "
        } else {
            " "
        };

        let widget = Paragraph::new(app.note_buffers[idx].clone())
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(format!(" {} [{}]{}", title, NOTE_IDS[idx], mode_hint)),
            );
        f.render_widget(widget, *area);
    }
}

fn draw_detail(f: &mut Frame, area: Rect, app: &App) {
    let Some(view) = &app.detail else {
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            view.name.clone(),
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
        )),
        Line::from(view.dates.clone()),
        Line::from(""),
    ];

    if !view.body.is_empty() {
        for body_line in view.body.lines() {
            lines.push(Line::from(body_line.to_string()));
        }
        lines.push(Line::from(""));
    }

    if !view.gallery.is_empty() {
        lines.push(Line::from(Span::styled(
            "Gallery",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for url in &view.gallery {
            lines.push(Line::from(format!("  {}", url)));
        }
        lines.push(Line::from(""));
    }

    if !view.sources.is_empty() {
        lines.push(Line::from(Span::styled(
            "Sources",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for source in &view.sources {
            match source {
                Source::Link(url) => lines.push(Line::from(Span::styled(
                    format!("  View Source -> {}", url),
                    Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
                ))),
                Source::Citation(text) => lines.push(Line::from(format!("  {}", text))),
            }
        }
    }

    let widget = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Detail (Esc: back) "));
    f.render_widget(widget, area);
}

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let text = match (&app.status, app.section()) {
        (Some(status), _) => status.clone(),
        (None, Section::Notes) => {
            "e: edit  s: save  y: copy  m: minimize  left/right: field".to_string()
        }
        (None, Section::Library) => "/: search  enter: detail  j/k: move".to_string(),
        (None, _) => "tab: next section  q: quit".to_string(),
    };

    let widget = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    f.render_widget(widget, area);
}

fn color_from_hex(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return Color::White;
    }
    match (
        u8::from_str_radix(&hex[0..2], 16),
        u8::from_str_radix(&hex[2..4], 16),
        u8::from_str_radix(&hex[4..6], 16),
    ) {
        (Ok(r), Ok(g), Ok(b)) => Color::Rgb(r, g, b),
        _ => Color::White,
    }
}
