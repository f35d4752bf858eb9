use super::state::{App, ExportStatus, ModalKind};
use crate::survey::{Emotion, Intensity, Page};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // title + progress
            Constraint::Min(8),    // page body
            Constraint::Length(1), // last log line
            Constraint::Length(1), // key help
        ])
        .split(f.area());

    draw_header(f, app, chunks[0]);
    match app.session.page() {
        Page::Emotion => draw_emotion_page(f, app, chunks[1]),
        Page::Intensity => draw_intensity_page(f, app, chunks[1]),
        Page::Done => draw_done_page(f, app, chunks[1]),
    }
    draw_last_log(f, app, chunks[2]);
    draw_footer(f, app, chunks[3]);

    if app.modal.is_some() {
        draw_modal(f, app);
    }
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let (answered, total) = app.session.progress();
    let ratio = if total == 0 { 1.0 } else { answered as f64 / total as f64 };
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", app.title)),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(ratio)
        .label(format!("{} / {}", answered, total));
    f.render_widget(gauge, area);
}

fn option_span(label: String, selected: bool) -> Span<'static> {
    if selected {
        Span::styled(
            format!("(•) {}", label),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::raw(format!("( ) {}", label))
    }
}

fn button_span(label: &str, enabled: bool, color: Color) -> Span<'static> {
    if enabled {
        Span::styled(
            format!("[ {} ]", label),
            Style::default().fg(Color::White).bg(color).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(format!("[ {} ]", label), Style::default().fg(Color::DarkGray))
    }
}

fn draw_emotion_page(f: &mut Frame, app: &App, area: Rect) {
    let word = app.session.current_word().unwrap_or_default();
    let pending = app.session.pending_emotion();

    let mut options: Vec<Span> = Vec::new();
    for (i, emotion) in Emotion::ALL.iter().enumerate() {
        if i > 0 {
            options.push(Span::raw("     "));
        }
        options.push(option_span(
            format!("{} {}", i + 1, emotion.label()),
            pending == Some(*emotion),
        ));
    }

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            word.to_string(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(options),
        Line::from(""),
        Line::from(button_span("下一步 →", app.session.can_advance(), Color::Green)),
    ];

    let para = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(para, area);
}

fn draw_intensity_page(f: &mut Frame, app: &App, area: Rect) {
    let word = app.session.current_word().unwrap_or_default();
    let emotion = app
        .session
        .pending_emotion()
        .map(|e| e.label())
        .unwrap_or_default();
    let pending = app.session.pending_intensity().map(|i| i.get());

    let mut options: Vec<Span> = Vec::new();
    for v in Intensity::MIN..=Intensity::MAX {
        if v > Intensity::MIN {
            options.push(Span::raw("   "));
        }
        options.push(option_span(v.to_string(), pending == Some(v)));
    }

    let lines = vec![
        Line::from(Span::styled(
            format!("{} · {}", word, emotion),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "请选择情感程度(1-5):",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(options),
        Line::from(""),
        Line::from(button_span("确认", true, Color::Blue)),
        Line::from(button_span("← 返回", true, Color::DarkGray)),
    ];

    let para = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(para, area);
}

fn draw_done_page(f: &mut Frame, app: &App, area: Rect) {
    let status = match &app.export_status {
        ExportStatus::Pending => Line::from("Saving..."),
        ExportStatus::Saved(path) => Line::from(Span::styled(
            format!("结果已保存到 {}", path.display()),
            Style::default().fg(Color::Green),
        )),
        ExportStatus::Failed(err) => Line::from(Span::styled(
            format!("保存失败: {}", err),
            Style::default().fg(Color::Red),
        )),
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "调查已完成",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        status,
    ];
    let para = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(para, area);
}

fn draw_last_log(f: &mut Frame, app: &App, area: Rect) {
    let Some(entry) = app.logs.back() else { return };
    let color = match entry.level.as_str() {
        "ERROR" => Color::Red,
        "WARN" => Color::Yellow,
        _ => Color::DarkGray,
    };
    let line = Line::from(vec![
        Span::styled(
            format!(" {} [{}] ", entry.time, entry.level),
            Style::default().fg(color),
        ),
        Span::raw(entry.message.as_str()),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn key_hint(key: &'static str, label: &'static str) -> [Span<'static>; 2] {
    [
        Span::styled(key, Style::default().fg(Color::Yellow)),
        Span::raw(label),
    ]
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let hints: Vec<[Span; 2]> = if app.modal.is_some() {
        vec![key_hint("  [Enter]", " dismiss  ")]
    } else {
        match app.session.page() {
            Page::Emotion => vec![
                key_hint("  [1-3/←→]", " select  "),
                key_hint("[Enter]", " next  "),
                key_hint("[q]", "uit  "),
            ],
            Page::Intensity => vec![
                key_hint("  [1-5/←→]", " select  "),
                key_hint("[Enter]", " confirm  "),
                key_hint("[Esc]", " back  "),
                key_hint("[q]", "uit  "),
            ],
            Page::Done if matches!(app.export_status, ExportStatus::Failed(_)) => vec![
                key_hint("  [r]", "etry save  "),
                key_hint("[q]", "uit  "),
            ],
            Page::Done => vec![key_hint("  [q]", "uit  ")],
        }
    };
    let line = Line::from(hints.into_iter().flatten().collect::<Vec<_>>());
    f.render_widget(Paragraph::new(line), area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    rect
}

fn draw_modal(f: &mut Frame, app: &App) {
    let Some(modal) = &app.modal else { return };
    let color = match modal.kind {
        ModalKind::Info => Color::Cyan,
        ModalKind::Error => Color::Red,
    };
    let area = centered(f.area(), 50.min(f.area().width), 9.min(f.area().height));

    let mut lines: Vec<Line> = vec![Line::from("")];
    lines.extend(modal.message.lines().map(|l| Line::from(l.to_string())));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[ 确定 ]",
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )));

    let block = Block::default()
        .title(format!(" {} ", modal.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let para = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    f.render_widget(Clear, area);
    f.render_widget(para, area);
}
