//! TUI rendering for Riddlecast using ratatui.

mod format;
mod input;
mod theme;

pub use input::{InputPump, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, pulse_frame, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use riddlecast_engine::{App, ViewStyle};

use self::format::format_clock;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);

    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(1),    // Puzzle card
            Constraint::Length(2), // Countdown
            Constraint::Length(4), // Answer panel (blank while thinking)
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_board(frame, app, chunks[0], &palette, &glyphs);
    draw_countdown(frame, app, chunks[1], &palette);
    draw_answer(frame, app, chunks[2], &palette);
    draw_status_bar(frame, app, chunks[3], &palette, &glyphs);
}

fn draw_board(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let session = app.session();

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        "Find the rule behind the sequence",
        styles::subtitle(palette),
    )));
    lines.push(Line::from(""));

    if let Some(puzzle) = session.puzzle() {
        let revealed = session.phase().is_revealed();

        match app.view_style() {
            ViewStyle::Compact => {
                for pair in puzzle.examples() {
                    lines.push(Line::from(Span::styled(
                        pair.worked_line(),
                        styles::board_line(palette),
                    )));
                }
                lines.push(Line::from(""));
            }
            ViewStyle::Split => {
                lines.push(Line::from(Span::styled("Given", styles::subtitle(palette))));
                for pair in puzzle.examples() {
                    lines.push(Line::from(Span::styled(
                        pair.worked_line(),
                        styles::board_line(palette),
                    )));
                }
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled("Find", styles::subtitle(palette))));
            }
        }

        let question = puzzle.question();
        if revealed {
            lines.push(Line::from(Span::styled(
                question.worked_line(),
                styles::answer(palette),
            )));
        } else {
            let marker = pulse_frame(app.tick_count(), app.ui_options());
            lines.push(Line::from(vec![
                Span::styled(format!("{marker} "), Style::default().fg(palette.accent)),
                Span::styled(question.question_line(), styles::question_line(palette)),
                Span::styled(format!(" {marker}"), Style::default().fg(palette.accent)),
            ]));
        }
    } else {
        lines.push(Line::from(Span::styled(
            "Warming up...",
            Style::default().fg(palette.text_muted),
        )));
    }

    // Center the card over the board area; everything saturates so a tiny
    // terminal degrades to clipping instead of panicking.
    let content_width = lines.iter().map(Line::width).max().unwrap_or(10) as u16;
    let width = content_width.saturating_add(8).min(area.width);
    let height = (lines.len() as u16).saturating_add(4).min(area.height);
    let card = Rect {
        x: area.x + (area.width.saturating_sub(width) / 2),
        y: area.y + (area.height.saturating_sub(height) / 2),
        width,
        height,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(glyphs.border)
        .border_style(Style::default().fg(palette.bg_border))
        .style(Style::default().bg(palette.bg_panel))
        .padding(Padding::uniform(1))
        .title(Line::from(Span::styled(
            " Riddlecast ",
            styles::card_title(palette),
        )));

    frame.render_widget(Clear, card);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        card,
    );
}

fn draw_countdown(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let session = app.session();
    let in_warn_window = session.phase().is_thinking()
        && session.remaining_seconds() <= session.timer().warn_seconds;
    let value_style = if in_warn_window {
        styles::timer_warn(palette)
    } else {
        styles::timer_value(palette)
    };

    let label = Span::styled(session.phase().timer_label(), styles::timer_label(palette));
    let value = Span::styled(
        format_clock(i64::from(session.remaining_seconds())),
        value_style,
    );

    let countdown = Paragraph::new(vec![Line::from(label), Line::from(value)])
        .alignment(Alignment::Center);
    frame.render_widget(countdown, area);
}

fn draw_answer(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let session = app.session();
    if !session.phase().is_revealed() {
        return;
    }
    let Some(puzzle) = session.puzzle() else {
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!("Answer: {}", puzzle.answer_value()),
            styles::answer(palette),
        )),
        Line::from(Span::styled(
            format!("Logic: {}", puzzle.logic()),
            Style::default().fg(palette.text_secondary),
        )),
    ];
    if app.view_style() == ViewStyle::Split {
        lines.push(Line::from(Span::styled(
            puzzle.explanation().to_string(),
            Style::default().fg(palette.text_muted),
        )));
    }

    let answer = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(answer, area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let separator_style = Style::default().fg(palette.text_muted);

    let status = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled("q", styles::key_highlight(palette)),
        Span::styled(" quit ", styles::key_hint(palette)),
        Span::styled(format!("{} ", glyphs.separator), separator_style),
        Span::styled(
            format!("Round {} ", app.session().rounds()),
            styles::key_hint(palette),
        ),
        Span::styled(format!("{} ", glyphs.separator), separator_style),
        Span::styled(format!("{} view", app.view_style()), styles::key_hint(palette)),
    ]));
    frame.render_widget(status, area);
}
