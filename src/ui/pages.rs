//! One draw function per page. All of them read the `App` and render
//! into the content area right of the sidebar.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{BarChart, Gauge, Paragraph, Row, Sparkline, Table, Tabs, Wrap},
    Frame,
};

use super::components::{checkbox_line, pane_block, selection_style, stat_line};
use crate::app::{App, Focus};
use crate::data::filter::{revenue_by_region, revenue_series, summarize};
use crate::data::{Platform, Region};
use crate::files::PreviewBody;
use crate::session::Role;
use crate::theme::Theme;

fn is_active(app: &App, pane: usize) -> bool {
    app.focus == Focus::Content(pane)
}

// ---------------------------------------------------------------- Home

pub fn draw_home(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let active = is_active(app, 0);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(area);

    let welcome = Paragraph::new(vec![
        Line::from(Span::styled(
            "☁ paneru - a terminal dashboard lab",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Every page on the left exercises a different corner of the widget catalog.",
            Style::default().fg(theme.text_dim),
        )),
    ])
    .wrap(Wrap { trim: true });
    f.render_widget(welcome, chunks[0]);

    let cursor = if active { "_" } else { "" };
    let name_input = Paragraph::new(format!("{}{}", app.name_input, cursor))
        .style(Style::default().fg(theme.text))
        .block(pane_block("Enter your name", active, theme));
    f.render_widget(name_input, chunks[1]);

    let greeting = if app.name_input.trim().is_empty() {
        Line::from(Span::styled(
            "Type a name above and a greeting appears here.",
            Style::default().fg(theme.text_dim),
        ))
    } else {
        Line::from(Span::styled(
            format!("✓ Hello, {}! Welcome to the dashboard.", app.name_input.trim()),
            Style::default()
                .fg(theme.success)
                .add_modifier(Modifier::BOLD),
        ))
    };
    f.render_widget(Paragraph::new(greeting), chunks[2]);

    let info = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "The whole app redraws from state on every key press; nothing here",
            Style::default().fg(theme.text_dim),
        )),
        Line::from(Span::styled(
            "survives past the session. Tab moves focus, ? shows the key reference.",
            Style::default().fg(theme.text_dim),
        )),
    ]);
    f.render_widget(info, chunks[3]);
}

// ----------------------------------------------------------- Analytics

pub fn draw_analytics(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),  // filter row
            Constraint::Length(3),  // summary line
            Constraint::Min(8),     // charts
            Constraint::Length(8),  // recent rows
        ])
        .split(area);

    draw_filter_row(f, app, chunks[0]);

    let rows = app.filter.apply(&app.dataset);
    let summary = summarize(&rows);

    let parts = vec![
        format!("{} rows", summary.rows),
        format!("Σ revenue {:.0}", summary.total_revenue),
        format!("⌀ users {:.1}", summary.avg_users),
        format!("{:.0}% high satisfaction", summary.high_satisfaction_pct),
    ];
    let summary_line = Paragraph::new(Line::from(Span::styled(
        parts.join(" │ "),
        Style::default().fg(theme.text),
    )))
    .alignment(Alignment::Center)
    .block(pane_block("Summary", false, theme));
    f.render_widget(summary_line, chunks[1]);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[2]);

    let series = revenue_series(&rows);
    let spark = Sparkline::default()
        .block(pane_block("Revenue over time", false, theme))
        .data(&series)
        .style(Style::default().fg(theme.accent));
    f.render_widget(spark, charts[0]);

    let by_region = revenue_by_region(&rows);
    let bars: Vec<(&str, u64)> = by_region
        .iter()
        .map(|(region, total)| (region.label(), *total))
        .collect();
    let chart = BarChart::default()
        .block(pane_block("Revenue by region", false, theme))
        .data(&bars)
        .bar_width(7)
        .bar_gap(2)
        .bar_style(Style::default().fg(theme.accent_bright))
        .value_style(Style::default().fg(theme.bg).bg(theme.accent_bright))
        .label_style(Style::default().fg(theme.text_dim));
    f.render_widget(chart, charts[1]);

    draw_recent_rows(f, app, &rows, chunks[3]);
}

fn draw_filter_row(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ])
        .split(area);

    // Date range window
    let days = (app.filter.to - app.filter.from).num_days() + 1;
    let date_box = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("{} → {}", app.filter.from, app.filter.to),
            Style::default().fg(theme.text),
        )),
        Line::from(Span::styled(
            format!("{} days", days),
            Style::default().fg(theme.text_dim),
        )),
        Line::from(Span::styled(
            "←→ shift · +/- resize · f reset",
            Style::default().fg(theme.text_dim),
        )),
    ])
    .block(pane_block("Date range", is_active(app, 0), theme));
    f.render_widget(date_box, chunks[0]);

    // Region subset
    let active = is_active(app, 1);
    let region_lines: Vec<Line> = Region::ALL
        .iter()
        .enumerate()
        .map(|(i, region)| {
            checkbox_line(
                region.label(),
                app.filter.regions.contains(region),
                theme,
            )
            .style(selection_style(i == app.region_cursor, active, theme))
        })
        .collect();
    let regions = Paragraph::new(region_lines).block(pane_block("Regions", active, theme));
    f.render_widget(regions, chunks[1]);

    // Platform subset
    let active = is_active(app, 2);
    let platform_lines: Vec<Line> = Platform::ALL
        .iter()
        .enumerate()
        .map(|(i, platform)| {
            checkbox_line(
                platform.label(),
                app.filter.platforms.contains(platform),
                theme,
            )
            .style(selection_style(i == app.platform_cursor, active, theme))
        })
        .collect();
    let platforms = Paragraph::new(platform_lines).block(pane_block("Platforms", active, theme));
    f.render_widget(platforms, chunks[2]);
}

fn draw_recent_rows(f: &mut Frame, app: &App, rows: &[&crate::data::Row], area: Rect) {
    let theme = &app.theme;
    let block = pane_block("Recent rows", false, theme);

    let header = Row::new(vec![
        Span::styled("Date", Style::default().fg(theme.header)),
        Span::styled("Region", Style::default().fg(theme.header)),
        Span::styled("Platform", Style::default().fg(theme.header)),
        Span::styled("Revenue", Style::default().fg(theme.header)),
        Span::styled("Users", Style::default().fg(theme.header)),
        Span::styled("Satisfaction", Style::default().fg(theme.header)),
    ]);

    let visible = area.height.saturating_sub(3) as usize;
    let table_rows: Vec<Row> = if rows.is_empty() {
        vec![Row::new(vec![Span::styled(
            "  No rows match the current filter",
            Style::default().fg(theme.text_dim),
        )])]
    } else {
        rows.iter()
            .rev()
            .take(visible.max(1))
            .map(|row| {
                Row::new(vec![
                    Span::styled(row.date.to_string(), Style::default().fg(theme.text)),
                    Span::styled(row.region.label(), Style::default().fg(theme.text)),
                    Span::styled(row.platform.label(), Style::default().fg(theme.text)),
                    Span::styled(format!("{:.2}", row.revenue), Style::default().fg(theme.text)),
                    Span::styled(row.users.to_string(), Style::default().fg(theme.text)),
                    Span::styled(
                        row.satisfaction.label(),
                        Style::default().fg(match row.satisfaction {
                            crate::data::Satisfaction::High => theme.success,
                            crate::data::Satisfaction::Medium => theme.warning,
                            crate::data::Satisfaction::Low => theme.danger,
                        }),
                    ),
                ])
            })
            .collect()
    };

    let widths = [
        Constraint::Length(12),
        Constraint::Length(8),
        Constraint::Length(9),
        Constraint::Length(10),
        Constraint::Length(7),
        Constraint::Min(12),
    ];
    let table = Table::new(table_rows, widths).header(header).block(block);
    f.render_widget(table, area);
}

// ------------------------------------------------------ Widgets Gallery

pub fn draw_gallery(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Ratio(1, 2),
            Constraint::Ratio(1, 2),
        ])
        .split(area);

    // Tabs strip mirrors the pane focus
    let titles = ["Slider", "Theme", "Checkboxes", "Progress"];
    let selected = match app.focus {
        Focus::Content(i) => i.min(titles.len() - 1),
        Focus::Sidebar => 0,
    };
    let tabs = Tabs::new(titles.iter().map(|t| Line::from(*t)).collect::<Vec<_>>())
        .select(selected)
        .style(Style::default().fg(theme.text_dim))
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .block(pane_block("Widgets", false, theme));
    f.render_widget(tabs, chunks[0]);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);

    // Slider rendered as a gauge
    let slider = Gauge::default()
        .block(pane_block("Slider  ←/→", is_active(app, 0), theme))
        .gauge_style(Style::default().fg(theme.accent))
        .percent(app.slider)
        .label(format!("{}", app.slider));
    f.render_widget(slider, top[0]);

    // Theme picker
    let active = is_active(app, 1);
    let theme_lines: Vec<Line> = app
        .theme_names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let marker = if *name == app.session.theme_name {
                "● "
            } else {
                "  "
            };
            Line::from(vec![
                Span::styled(marker, Style::default().fg(theme.success)),
                Span::styled(name.clone(), Style::default().fg(theme.text)),
            ])
            .style(selection_style(i == app.theme_cursor, active, theme))
        })
        .collect();
    let picker = Paragraph::new(theme_lines).block(pane_block("Theme  Space applies", active, theme));
    f.render_widget(picker, top[1]);

    // Checkboxes
    let active = is_active(app, 2);
    let labels = ["Autorefresh", "Show grid", "Compact rows"];
    let checkbox_lines: Vec<Line> = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            checkbox_line(label, app.checkboxes[i], theme)
                .style(selection_style(i == app.checkbox_cursor, active, theme))
        })
        .collect();
    let checkboxes =
        Paragraph::new(checkbox_lines).block(pane_block("Checkboxes  Space toggles", active, theme));
    f.render_widget(checkboxes, bottom[0]);

    // Simulated progress run
    let label = if app.progress_started.is_some() {
        format!("{}%", app.progress_pct)
    } else if app.progress_pct >= 100 {
        "done".to_string()
    } else {
        "Enter starts".to_string()
    };
    let progress = Gauge::default()
        .block(pane_block("Progress", is_active(app, 3), theme))
        .gauge_style(Style::default().fg(theme.success))
        .percent(app.progress_pct)
        .label(label);
    f.render_widget(progress, bottom[1]);
}

// ------------------------------------------------------- Forms & State

pub fn draw_forms(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(1)])
        .split(area);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(40),
            Constraint::Percentage(35),
        ])
        .split(chunks[0]);

    draw_counter(f, app, panels[0]);
    draw_todos(f, app, panels[1]);
    draw_calculator(f, app, panels[2]);

    let submit_line = if app.session.form_submitted {
        Line::from(Span::styled(
            "✓ Form submitted - thanks!",
            Style::default()
                .fg(theme.success)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            "Press s to submit the demo form",
            Style::default().fg(theme.text_dim),
        ))
    };
    f.render_widget(
        Paragraph::new(submit_line).alignment(Alignment::Center),
        chunks[1],
    );
}

fn draw_counter(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let active = is_active(app, 0);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            app.session.counter.to_string(),
            Style::default()
                .fg(theme.accent_bright)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(Span::styled(
            "+ / - adjust · r reset",
            Style::default().fg(theme.text_dim),
        ))
        .alignment(Alignment::Center),
    ];
    let counter = Paragraph::new(lines).block(pane_block("Counter", active, theme));
    f.render_widget(counter, area);
}

fn draw_todos(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let active = is_active(app, 1);

    let mut lines = Vec::new();
    if app.todo_editing {
        lines.push(Line::from(vec![
            Span::styled("> ", Style::default().fg(theme.accent)),
            Span::styled(
                format!("{}_", app.todo_input),
                Style::default().fg(theme.text),
            ),
        ]));
    } else {
        lines.push(Line::from(Span::styled(
            "a adds · d removes · j/k select",
            Style::default().fg(theme.text_dim),
        )));
    }
    lines.push(Line::from(""));

    if app.session.todos.is_empty() {
        lines.push(Line::from(Span::styled(
            "  Nothing to do yet",
            Style::default().fg(theme.text_dim),
        )));
    } else {
        for (i, todo) in app.session.todos.iter().enumerate() {
            lines.push(
                Line::from(vec![
                    Span::styled(format!("{:2}. ", i + 1), Style::default().fg(theme.text_dim)),
                    Span::styled(todo.clone(), Style::default().fg(theme.text)),
                ])
                .style(selection_style(i == app.todo_cursor, active && !app.todo_editing, theme)),
            );
        }
    }

    let todos = Paragraph::new(lines).block(pane_block(
        &format!("Todos ({})", app.session.todos.len()),
        active,
        theme,
    ));
    f.render_widget(todos, area);
}

fn draw_calculator(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let active = is_active(app, 2);

    let field_style = |field: usize| {
        if active && app.calc_field == field {
            Style::default()
                .bg(theme.bg_selected)
                .fg(theme.accent_bright)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        }
    };

    let result = app.calc_op.apply(app.calc_a, app.calc_b);
    let result_style = if result == crate::calc::UNDEFINED {
        Style::default().fg(theme.danger).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(theme.success)
            .add_modifier(Modifier::BOLD)
    };

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("   "),
            Span::styled(format!(" {} ", app.calc_a), field_style(0)),
            Span::raw("  "),
            Span::styled(format!(" {} ", app.calc_op.symbol()), field_style(1)),
            Span::raw("  "),
            Span::styled(format!(" {} ", app.calc_b), field_style(2)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("   = ", Style::default().fg(theme.text_dim)),
            Span::styled(result, result_style),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "←→ field · ↑↓ adjust",
            Style::default().fg(theme.text_dim),
        )),
    ];

    let calc = Paragraph::new(lines).block(pane_block("Calculator", active, theme));
    f.render_widget(calc, area);
}

// ------------------------------------------------------------- AI Chat

pub fn draw_chat(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let active = is_active(app, 0);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3)])
        .split(area);

    let mut lines: Vec<Line> = Vec::new();
    for msg in &app.session.chat {
        let (label, color) = match msg.role {
            Role::User => ("You", theme.accent),
            Role::Assistant => ("Bot", theme.success),
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}: ", label),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(msg.content.clone(), Style::default().fg(theme.text)),
        ]));
        lines.push(Line::from(""));
    }
    if app.pending_reply.is_some() {
        lines.push(Line::from(Span::styled(
            "Bot is typing...",
            Style::default()
                .fg(theme.text_dim)
                .add_modifier(Modifier::ITALIC),
        )));
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "Say something - the bot answers from a fixed keyword table.",
            Style::default().fg(theme.text_dim),
        )));
    }

    // Stick to the bottom of the transcript; Up scrolls back
    let inner_height = chunks[0].height.saturating_sub(2) as usize;
    let offset = lines
        .len()
        .saturating_sub(inner_height)
        .saturating_sub(app.chat_scroll);
    let transcript = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((offset as u16, 0))
        .block(pane_block(
            &format!("Transcript ({} messages)", app.session.chat.len()),
            false,
            theme,
        ));
    f.render_widget(transcript, chunks[0]);

    let cursor = if active { "_" } else { "" };
    let input = Paragraph::new(format!("{}{}", app.chat_input, cursor))
        .style(Style::default().fg(theme.text))
        .block(pane_block(
            "Message  Enter sends · Ctrl-L clears",
            active,
            theme,
        ));
    f.render_widget(input, chunks[1]);
}

// ---------------------------------------------------------- File Tools

pub fn draw_files(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let active = is_active(app, 0);

    let Some(preview) = &app.preview else {
        let hint = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Press o to open the file browser.",
                Style::default().fg(theme.text),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "CSV becomes a table, JSON is pretty-printed (raw text on parse",
                Style::default().fg(theme.text_dim),
            )),
            Line::from(Span::styled(
                "failure), text and code show as-is, media files list metadata.",
                Style::default().fg(theme.text_dim),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Nothing is copied or stored; the preview lives in memory only.",
                Style::default().fg(theme.text_dim),
            )),
        ])
        .alignment(Alignment::Center)
        .block(pane_block("File Tools", active, theme));
        f.render_widget(hint, area);
        return;
    };

    let title = format!("{}  ·  {}  ·  {}", preview.name, preview.kind.label(), preview.size);

    match &preview.body {
        PreviewBody::Table {
            headers,
            rows,
            total_rows,
            total_columns,
        } => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(5), Constraint::Length(1)])
                .split(area);

            let header = Row::new(
                headers
                    .iter()
                    .map(|h| Span::styled(h.clone(), Style::default().fg(theme.header)))
                    .collect::<Vec<_>>(),
            );
            let table_rows: Vec<Row> = rows
                .iter()
                .skip(app.preview_scroll)
                .map(|cells| {
                    Row::new(
                        cells
                            .iter()
                            .map(|c| Span::styled(c.clone(), Style::default().fg(theme.text)))
                            .collect::<Vec<_>>(),
                    )
                })
                .collect();
            let width = Constraint::Ratio(1, headers.len().max(1) as u32);
            let widths = vec![width; headers.len().max(1)];
            let table = Table::new(table_rows, widths)
                .header(header)
                .block(pane_block(&title, active, theme));
            f.render_widget(table, chunks[0]);

            let note = Paragraph::new(Line::from(Span::styled(
                format!(
                    "{} rows × {} columns · j/k scroll · x discard",
                    total_rows, total_columns
                ),
                Style::default().fg(theme.text_dim),
            )))
            .alignment(Alignment::Center);
            f.render_widget(note, chunks[1]);
        }
        PreviewBody::Lines { lines, truncated } => {
            let inner_height = area.height.saturating_sub(2) as usize;
            let start = app.preview_scroll.min(lines.len().saturating_sub(1));
            let end = (start + inner_height).min(lines.len());

            let mut visible: Vec<Line> = lines[start..end]
                .iter()
                .enumerate()
                .map(|(i, line)| {
                    Line::from(vec![
                        Span::styled(
                            format!("{:4} ", start + i + 1),
                            Style::default().fg(theme.inactive),
                        ),
                        Span::styled(line.clone(), Style::default().fg(theme.text)),
                    ])
                })
                .collect();
            if *truncated && end == lines.len() {
                visible.push(Line::from(Span::styled(
                    "   ... preview truncated",
                    Style::default().fg(theme.warning),
                )));
            }

            let content = Paragraph::new(visible).block(pane_block(&title, active, theme));
            f.render_widget(content, area);
        }
        PreviewBody::MetadataOnly => {
            let icon = match preview.kind {
                crate::files::FileKind::Image => "🖼",
                _ => "♫",
            };
            let lines = vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("{}  {}", icon, preview.name),
                    Style::default().fg(theme.accent),
                )),
                Line::from(""),
                stat_line("Kind", preview.kind.label().to_string(), theme),
                stat_line("Size", preview.size.clone(), theme),
                Line::from(""),
                Line::from(Span::styled(
                    "A terminal can't render this; metadata only.",
                    Style::default().fg(theme.text_dim),
                )),
            ];
            let meta = Paragraph::new(lines).block(pane_block(&title, active, theme));
            f.render_widget(meta, area);
        }
    }
}

// ------------------------------------------------------ Media & Visuals

pub fn draw_media(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(6),
        ])
        .split(area);

    let banner = Paragraph::new(Line::from(Span::styled(
        "░▒▓█  p a n e r u  █▓▒░",
        Style::default()
            .fg(theme.accent_bright)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(pane_block("Banner", false, theme));
    f.render_widget(banner, chunks[0]);

    // Palette swatches for every selectable theme
    let swatch_lines: Vec<Line> = app
        .theme_names
        .iter()
        .map(|name| {
            let palette = Theme::by_name(name);
            let mut spans = vec![Span::styled(
                format!("{:<12}", name),
                if *name == app.session.theme_name {
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.text_dim)
                },
            )];
            for color in [
                palette.accent,
                palette.accent_bright,
                palette.success,
                palette.warning,
                palette.danger,
                palette.text,
                palette.bg_selected,
            ] {
                spans.push(Span::styled("██", Style::default().fg(color)));
            }
            Line::from(spans)
        })
        .collect();
    let swatches = Paragraph::new(swatch_lines).block(pane_block("Palettes", false, theme));
    f.render_widget(swatches, chunks[1]);

    // Synthetic waveform, purely decorative
    let width = chunks[2].width.saturating_sub(2) as usize;
    let wave: Vec<u64> = (0..width)
        .map(|i| {
            let t = i as f64 * 0.35;
            let v = (t.sin() + (t * 0.5).sin() * 0.5 + 1.5) / 3.0;
            (v * 100.0) as u64
        })
        .collect();
    let waveform = Sparkline::default()
        .block(pane_block("Waveform", false, theme))
        .data(&wave)
        .style(Style::default().fg(theme.success));
    f.render_widget(waveform, chunks[2]);
}

// --------------------------------------------------------------- About

pub fn draw_about(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let lines = vec![
        Line::from(Span::styled(
            format!("paneru {}", env!("CARGO_PKG_VERSION")),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "A demo dashboard: eight pages of widgets, charts and toy state,",
            Style::default().fg(theme.text),
        )),
        Line::from(Span::styled(
            "redrawn from scratch on every interaction.",
            Style::default().fg(theme.text),
        )),
        Line::from(""),
        stat_line(
            "Dataset",
            format!(
                "{} rows, seed {}",
                app.dataset.rows.len(),
                app.config.dataset_seed
            ),
            theme,
        ),
        stat_line("Theme", app.session.theme_name.clone(), theme),
        Line::from(""),
        Line::from(Span::styled(
            "Keys",
            Style::default().fg(theme.header).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "  Tab/Shift-Tab  cycle focus        1-8  jump to page",
            Style::default().fg(theme.text_dim),
        )),
        Line::from(Span::styled(
            "  ↑↓ / j k       navigate           ?    key reference",
            Style::default().fg(theme.text_dim),
        )),
        Line::from(Span::styled(
            "  Esc            back to sidebar    q    quit (from sidebar)",
            Style::default().fg(theme.text_dim),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Built with ratatui. No browser was involved.",
            Style::default().fg(theme.text_dim),
        )),
    ];

    let about = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(pane_block("About", is_active(app, 0), theme));
    f.render_widget(about, area);
}
