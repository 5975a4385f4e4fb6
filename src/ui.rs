use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::session::{Phase, Session};
use crate::{App, Screen};

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 2;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.screen {
            Screen::Leaderboard => render_leaderboard(self, area, buf),
            Screen::Typing => match &self.session {
                None => render_welcome(area, buf),
                Some(session) if session.phase != Phase::Stopped => {
                    render_typing(session, area, buf)
                }
                Some(session) => render_results(self, session, area, buf),
            },
        }
    }
}

fn bold() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

fn dim_bold() -> Style {
    bold().add_modifier(Modifier::DIM)
}

fn hint_style() -> Style {
    Style::default()
        .fg(Color::Gray)
        .add_modifier(Modifier::ITALIC)
}

fn render_welcome(area: Rect, buf: &mut Buffer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let banner = Paragraph::new(Span::styled("retype", bold()))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    banner.render(chunks[0], buf);

    let hint = Paragraph::new(Span::styled(
        "(enter) start a passage  (tab) best scores  (esc) quit",
        hint_style(),
    ))
    .alignment(Alignment::Center);
    hint.render(chunks[1], buf);
}

fn render_typing(session: &Session, area: Rect, buf: &mut Buffer) {
    let green_bold = bold().fg(Color::Green);
    let red_bold = bold().fg(Color::Red);
    let cursor_style = dim_bold().add_modifier(Modifier::UNDERLINED);

    let max_chars_per_line = area.width.saturating_sub(HORIZONTAL_MARGIN * 2).max(1);
    let mut passage_occupied_lines =
        ((session.passage.width() as f64 / max_chars_per_line as f64).ceil() + 1.0) as u16;

    if session.passage.width() <= max_chars_per_line as usize {
        passage_occupied_lines = 1;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .constraints([
            Constraint::Length(
                ((area.height as f64 - passage_occupied_lines as f64) / 2.0) as u16,
            ),
            Constraint::Length(passage_occupied_lines),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let passage_chars: Vec<char> = session.passage.chars().collect();
    let typed_chars: Vec<char> = session.typed.chars().collect();

    let mut spans: Vec<Span> = typed_chars
        .iter()
        .enumerate()
        .map(|(idx, typed)| match passage_chars.get(idx) {
            Some(expected) if typed == expected => {
                Span::styled(expected.to_string(), green_bold)
            }
            _ => Span::styled(
                match typed {
                    ' ' => "·".to_owned(),
                    c => c.to_string(),
                },
                red_bold,
            ),
        })
        .collect();

    if typed_chars.len() < passage_chars.len() {
        spans.push(Span::styled(
            passage_chars[typed_chars.len()].to_string(),
            cursor_style,
        ));

        let rest: String = passage_chars[(typed_chars.len() + 1).min(passage_chars.len())..]
            .iter()
            .collect();
        spans.push(Span::styled(rest, dim_bold()));
    }

    let passage_widget = Paragraph::new(Line::from(spans))
        .alignment(if passage_occupied_lines == 1 {
            Alignment::Center
        } else {
            Alignment::Left
        })
        .wrap(Wrap { trim: true });
    passage_widget.render(chunks[1], buf);

    let counters = Paragraph::new(Span::styled(
        format!(
            "{}s   {:.0}% acc   {} wpm   [{}]",
            session.elapsed_secs,
            session.accuracy * 100.0,
            session.wpm,
            session.phase.to_string().to_lowercase(),
        ),
        bold(),
    ))
    .alignment(Alignment::Center);
    counters.render(chunks[3], buf);

    let hint = Paragraph::new(Span::styled(
        "(enter) stop  (ctrl+l) clear  (ctrl+r) retry passage  (tab) best scores  (esc) quit",
        hint_style(),
    ))
    .alignment(Alignment::Center);
    hint.render(chunks[4], buf);
}

fn render_results(app: &App, session: &Session, area: Rect, buf: &mut Buffer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let stats = Paragraph::new(Span::styled(
        format!(
            "{} wpm   {:.0}% acc   {}s",
            session.wpm,
            session.accuracy * 100.0,
            session.elapsed_secs
        ),
        bold(),
    ))
    .alignment(Alignment::Center);
    stats.render(chunks[0], buf);

    let verdict = if app.last_record.is_some() {
        Span::styled("score recorded", bold().fg(Color::Green))
    } else if !session.is_complete() {
        Span::styled("passage not finished - score not recorded", hint_style())
    } else {
        Span::styled("accuracy below 90% - score not recorded", hint_style())
    };
    Paragraph::new(verdict)
        .alignment(Alignment::Center)
        .render(chunks[1], buf);

    let hint = Paragraph::new(Span::styled(
        "(enter) new passage  (ctrl+r) retry passage  (tab) best scores  (esc) quit",
        hint_style(),
    ))
    .alignment(Alignment::Center);
    hint.render(chunks[3], buf);
}

fn render_leaderboard(app: &App, area: Rect, buf: &mut Buffer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let title = Paragraph::new("Best Scores")
        .block(Block::default().borders(Borders::ALL))
        .style(bold().fg(Color::Cyan))
        .alignment(Alignment::Center);
    title.render(chunks[0], buf);

    if app.leaderboard.is_empty() {
        let no_data = Paragraph::new("No recorded scores yet.\nFinish a passage at 90% accuracy or better to get on the board!")
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center);
        no_data.render(chunks[1], buf);
    } else {
        let header = Row::new(vec![
            Cell::from("#"),
            Cell::from("wpm"),
            Cell::from("accuracy"),
            Cell::from("time"),
        ])
        .style(bold().fg(Color::Yellow));

        let rows: Vec<Row> = app
            .leaderboard
            .iter()
            .enumerate()
            .map(|(i, record)| {
                Row::new(vec![
                    Cell::from(format!("{}", i + 1)),
                    Cell::from(format!("{}", record.wpm)),
                    Cell::from(format!("{:.1}%", record.accuracy * 100.0)),
                    Cell::from(format!("{}s", record.elapsed_secs)),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            &[
                Constraint::Length(4),
                Constraint::Length(6),
                Constraint::Length(10),
                Constraint::Length(8),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Top {}", app.top_scores)),
        );

        table.render(chunks[1], buf);
    }

    let instructions = Paragraph::new("(tab) back  (esc) quit")
        .block(Block::default().borders(Borders::ALL))
        .style(hint_style())
        .alignment(Alignment::Center);
    instructions.render(chunks[2], buf);
}
