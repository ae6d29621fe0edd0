mod components;
mod pages;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Row, Table, Wrap},
    Frame,
};

use crate::app::{App, Focus, Page, Popup};
use components::{centered_rect, pane_block, selection_style};

pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(1), // Info line
            Constraint::Min(10),   // Sidebar + page content
            Constraint::Length(1), // Footer
        ])
        .split(area);

    draw_info_line(f, app, chunks[0]);

    // Narrow terminals get a slimmer sidebar
    let sidebar_width = if area.width < 70 { 16 } else { 22 };
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_width), Constraint::Min(20)])
        .split(chunks[1]);

    draw_sidebar(f, app, body[0]);

    match app.page {
        Page::Home => pages::draw_home(f, app, body[1]),
        Page::Analytics => pages::draw_analytics(f, app, body[1]),
        Page::Gallery => pages::draw_gallery(f, app, body[1]),
        Page::Forms => pages::draw_forms(f, app, body[1]),
        Page::Chat => pages::draw_chat(f, app, body[1]),
        Page::Files => pages::draw_files(f, app, body[1]),
        Page::Media => pages::draw_media(f, app, body[1]),
        Page::About => pages::draw_about(f, app, body[1]),
    }

    draw_footer(f, app, chunks[2]);

    // Draw popups on top
    match app.popup {
        Popup::None => {}
        Popup::FileBrowser => draw_file_browser(f, app),
        Popup::Help => draw_help_popup(f, app),
        Popup::ConfirmClearChat => draw_confirm_popup(f, app),
    }
}

fn draw_info_line(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    // Priority: pending chat reply > status message > page blurb
    let line = if app.pending_reply.is_some() {
        Line::from(vec![
            Span::styled("󰔟 ", Style::default().fg(theme.warning)),
            Span::styled("Bot is thinking...", Style::default().fg(theme.text)),
            Span::styled(" │ ", Style::default().fg(theme.text_dim)),
            Span::styled("(Esc cancels)", Style::default().fg(theme.text_dim)),
        ])
    } else if let Some(ref status) = app.status_message {
        Line::from(Span::styled(status, Style::default().fg(theme.warning)))
    } else {
        Line::from(Span::styled(
            page_blurb(app.page),
            Style::default().fg(theme.text_dim),
        ))
    };

    let info = Paragraph::new(line).alignment(Alignment::Center);
    f.render_widget(info, area);
}

fn page_blurb(page: Page) -> &'static str {
    match page {
        Page::Home => "Welcome - a text input and a greeting",
        Page::Analytics => "Filter the synthetic dataset and watch the charts follow",
        Page::Gallery => "Sliders, pickers, toggles and a fake progress run",
        Page::Forms => "Counter, todo list and a tiny calculator",
        Page::Chat => "A scripted bot with a keyword table and a typing delay",
        Page::Files => "Inspect CSV, JSON, text and media files",
        Page::Media => "Palettes and a decorative waveform",
        Page::About => "What this is and which keys do what",
    }
}

fn draw_sidebar(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let active = app.focus == Focus::Sidebar;

    let lines: Vec<Line> = Page::ALL
        .iter()
        .enumerate()
        .map(|(i, page)| {
            let current = *page == app.page;
            let marker = if current { "▸" } else { " " };
            let title_color = if current {
                theme.accent_bright
            } else {
                theme.text
            };
            Line::from(vec![
                Span::styled(
                    format!(" {} {} ", marker, i + 1),
                    Style::default().fg(theme.text_dim),
                ),
                Span::styled(page.title(), Style::default().fg(title_color)),
            ])
            .style(selection_style(current, active, theme))
        })
        .collect();

    let sidebar = Paragraph::new(lines).block(pane_block("Pages", active, theme));
    f.render_widget(sidebar, area);
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let hints: Vec<(&str, &str)> = match app.focus {
        Focus::Sidebar => vec![
            ("↑↓", "Page"),
            ("1-8", "Jump"),
            ("Enter", "Focus"),
            ("?", "Help"),
            ("q", "Quit"),
        ],
        Focus::Content(_) => match app.page {
            Page::Home => vec![("type", "Name"), ("Tab", "Focus"), ("Esc", "Back")],
            Page::Analytics => vec![
                ("Tab", "Pane"),
                ("←→", "Dates"),
                ("Space", "Toggle"),
                ("f", "Reset"),
                ("Esc", "Back"),
            ],
            Page::Gallery => vec![
                ("Tab", "Pane"),
                ("←→/↑↓", "Adjust"),
                ("Space", "Apply"),
                ("Esc", "Back"),
            ],
            Page::Forms => vec![
                ("Tab", "Pane"),
                ("+/-", "Counter"),
                ("a/d", "Todos"),
                ("s", "Submit"),
                ("Esc", "Back"),
            ],
            Page::Chat => vec![
                ("Enter", "Send"),
                ("↑↓", "Scroll"),
                ("Ctrl-L", "Clear"),
                ("Esc", "Back"),
            ],
            Page::Files => vec![
                ("o", "Browse"),
                ("j/k", "Scroll"),
                ("x", "Discard"),
                ("Esc", "Back"),
            ],
            Page::Media | Page::About => vec![("Tab", "Focus"), ("Esc", "Back")],
        },
    };

    // Responsive: show fewer hints on narrow terminals
    let max_hints = if area.width < 60 {
        3
    } else if area.width < 80 {
        4
    } else {
        hints.len()
    };

    let hint_spans: Vec<Span> = hints
        .iter()
        .take(max_hints)
        .flat_map(|(key, action)| {
            vec![
                Span::styled(*key, Style::default().fg(theme.accent)),
                Span::styled(
                    format!(" {} │ ", action),
                    Style::default().fg(theme.text_dim),
                ),
            ]
        })
        .collect();

    let footer = Paragraph::new(Line::from(hint_spans)).alignment(Alignment::Center);
    f.render_widget(footer, area);
}

fn draw_file_browser(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = f.area();
    let popup_area = centered_rect(
        if area.width < 80 { 90 } else { 70 },
        if area.height < 30 { 85 } else { 70 },
        area,
    );

    f.render_widget(Clear, popup_area);

    let block = pane_block("󰈔 Select a file", true, theme);
    f.render_widget(block, popup_area);

    let inner = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(5),
            Constraint::Length(2),
        ])
        .split(popup_area);

    let path_str = app.browser_path.to_string_lossy();
    let path_display = Paragraph::new(Line::from(vec![
        Span::styled("󰉋 ", Style::default().fg(theme.accent)),
        Span::styled(path_str.into_owned(), Style::default().fg(theme.text)),
    ]));
    f.render_widget(path_display, inner[0]);

    let rows: Vec<Row> = if app.browser_entries.is_empty() {
        vec![Row::new(vec![Span::styled(
            "  No previewable files in this directory",
            Style::default().fg(theme.text_dim),
        )])]
    } else {
        app.browser_entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let icon = if entry.is_dir { "󰉋" } else { "󰈔" };
                let icon_color = if entry.is_dir {
                    theme.accent
                } else {
                    theme.success
                };

                Row::new(vec![
                    Span::styled(format!("  {} ", icon), Style::default().fg(icon_color)),
                    Span::styled(entry.name.clone(), Style::default().fg(theme.text)),
                ])
                .style(selection_style(i == app.browser_selected, true, theme))
            })
            .collect()
    };

    let widths = [Constraint::Length(5), Constraint::Percentage(90)];
    let table = Table::new(rows, widths);
    f.render_widget(table, inner[1]);

    let hint = Paragraph::new(Line::from(vec![
        Span::styled("j/k", Style::default().fg(theme.accent)),
        Span::raw(" nav │ "),
        Span::styled("Enter", Style::default().fg(theme.accent)),
        Span::raw(" select │ "),
        Span::styled("Backspace", Style::default().fg(theme.accent)),
        Span::raw(" up │ "),
        Span::styled("Esc", Style::default().fg(theme.accent)),
        Span::raw(" cancel"),
    ]))
    .alignment(Alignment::Center)
    .style(Style::default().fg(theme.text_dim));
    f.render_widget(hint, inner[2]);
}

fn draw_help_popup(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = f.area();
    let popup_area = centered_rect(
        if area.width < 80 { 95 } else { 65 },
        if area.height < 40 { 95 } else { 80 },
        area,
    );

    f.render_widget(Clear, popup_area);

    let section = |title: &str| {
        Line::from(Span::styled(
            format!("═══ {} ═══", title),
            Style::default()
                .fg(theme.header)
                .add_modifier(Modifier::BOLD),
        ))
    };
    let entry = |key: &str, desc: &str| {
        Line::from(vec![
            Span::styled(format!("  {:<12}", key), Style::default().fg(theme.accent)),
            Span::raw(desc.to_string()),
        ])
    };

    let help_text = vec![
        section("Navigation"),
        entry("Tab", "Cycle focus: sidebar → page panes → sidebar"),
        entry("↑/↓ j/k", "Move within the focused list"),
        entry("1-8", "Jump straight to a page (sidebar)"),
        entry("Esc", "Back out: cancel input, then back to sidebar"),
        Line::from(""),
        section("Pages"),
        entry("Analytics", "←→ shift dates, +/- resize, Space toggles subsets"),
        entry("Gallery", "←→ slider, Space applies theme / toggles boxes"),
        entry("Forms", "+/- counter, a/d todos, s submits the form"),
        entry("Chat", "Enter sends, Ctrl-L clears the transcript"),
        entry("Files", "o opens the browser, j/k scrolls the preview"),
        Line::from(""),
        section("Quick start"),
        entry("paneru", "Launch this dashboard"),
        entry("--page chat", "Open on a specific page"),
        entry("--dataset", "Dump the synthetic dataset as JSON"),
        entry("--ask \"hi\"", "One-shot scripted bot reply"),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Press ", Style::default().fg(theme.text_dim)),
            Span::styled("?", Style::default().fg(theme.accent)),
            Span::styled("/", Style::default().fg(theme.text_dim)),
            Span::styled("Esc", Style::default().fg(theme.accent)),
            Span::styled(" to close", Style::default().fg(theme.text_dim)),
        ]),
    ];

    let help = Paragraph::new(help_text)
        .block(pane_block("󰋖 paneru Help", true, theme))
        .wrap(Wrap { trim: false });

    f.render_widget(help, popup_area);
}

fn draw_confirm_popup(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let popup_area = centered_rect(40, 20, f.area());

    f.render_widget(Clear, popup_area);

    let confirm = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Clear the chat transcript?",
            Style::default().fg(theme.warning),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "  y",
                Style::default()
                    .fg(theme.success)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Yes   "),
            Span::styled(
                "n",
                Style::default()
                    .fg(theme.danger)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" No"),
        ]),
    ])
    .block(pane_block("Confirm", true, theme))
    .alignment(Alignment::Center);

    f.render_widget(confirm, popup_area);
}
