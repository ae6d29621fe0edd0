use anyhow::Result;
use chrono::Duration as ChronoDuration;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::bot;
use crate::calc::Op;
use crate::config::AppConfig;
use crate::data::filter::Filter;
use crate::data::{Dataset, Platform, Region};
use crate::files::{self, Preview};
use crate::session::{Role, Session};
use crate::theme::Theme;

/// How long transient status messages stay on the info line.
const STATUS_SECONDS: u64 = 3;

/// Timeout for building a file preview off the draw loop.
const PREVIEW_TIMEOUT: Duration = Duration::from_secs(5);

/// How many days one date-range keystroke moves.
const DATE_STEP_DAYS: i64 = 7;

/// Simulated progress run speed: milliseconds per percent.
const PROGRESS_MS_PER_PCT: u128 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Analytics,
    Gallery,
    Forms,
    Chat,
    Files,
    Media,
    About,
}

impl Page {
    pub const ALL: [Page; 8] = [
        Page::Home,
        Page::Analytics,
        Page::Gallery,
        Page::Forms,
        Page::Chat,
        Page::Files,
        Page::Media,
        Page::About,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Analytics => "Analytics",
            Page::Gallery => "Widgets Gallery",
            Page::Forms => "Forms & State",
            Page::Chat => "AI Chat",
            Page::Files => "File Tools",
            Page::Media => "Media & Visuals",
            Page::About => "About",
        }
    }

    /// Parse a page name from the CLI or config (case-insensitive,
    /// forgiving about the longer titles).
    pub fn parse(name: &str) -> Option<Page> {
        match name.to_lowercase().as_str() {
            "home" => Some(Page::Home),
            "analytics" => Some(Page::Analytics),
            "gallery" | "widgets" => Some(Page::Gallery),
            "forms" | "state" => Some(Page::Forms),
            "chat" | "ai" => Some(Page::Chat),
            "files" | "file-tools" => Some(Page::Files),
            "media" | "visuals" => Some(Page::Media),
            "about" => Some(Page::About),
            _ => None,
        }
    }

    /// Number of focusable panes inside the page content.
    pub fn pane_count(&self) -> usize {
        match self {
            Page::Analytics => 3,
            Page::Gallery => 4,
            Page::Forms => 3,
            _ => 1,
        }
    }

    fn index(&self) -> usize {
        Page::ALL.iter().position(|p| p == self).unwrap_or(0)
    }
}

/// Where key input goes: the sidebar page selector or a pane of the
/// current page's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Content(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popup {
    None,
    FileBrowser,
    Help,
    ConfirmClearChat,
}

/// A chat reply scheduled to appear after the simulated thinking
/// delay. Resolved in `tick()`, cancellable with Esc.
#[derive(Debug, Clone)]
pub struct PendingReply {
    pub prompt: String,
    pub due: Instant,
}

#[derive(Debug, Clone)]
pub struct BrowserEntry {
    pub name: String,
    pub is_dir: bool,
    pub path: PathBuf,
}

pub struct App {
    pub page: Page,
    pub focus: Focus,
    pub popup: Popup,

    pub session: Session,
    pub theme: Theme,
    pub theme_names: Vec<String>,
    pub config: AppConfig,

    // Reference dataset + Analytics filter state
    pub dataset: Dataset,
    pub filter: Filter,
    pub region_cursor: usize,
    pub platform_cursor: usize,

    // Home
    pub name_input: String,

    // Widgets Gallery
    pub slider: u16,
    pub theme_cursor: usize,
    pub checkboxes: [bool; 3],
    pub checkbox_cursor: usize,
    pub progress_pct: u16,
    pub progress_started: Option<Instant>,

    // Forms & State
    pub todo_input: String,
    pub todo_editing: bool,
    pub todo_cursor: usize,
    pub calc_a: i64,
    pub calc_b: i64,
    pub calc_op: Op,
    pub calc_field: usize, // 0 = a, 1 = op, 2 = b

    // AI Chat
    pub chat_input: String,
    pub chat_scroll: usize,
    pub pending_reply: Option<PendingReply>,

    // File Tools
    pub preview: Option<Preview>,
    pub preview_scroll: usize,

    // File browser popup state
    pub browser_path: PathBuf,
    pub browser_entries: Vec<BrowserEntry>,
    pub browser_selected: usize,

    // Status message (shown in info line, auto-clears after timeout)
    pub status_message: Option<String>,
    pub status_message_time: Option<Instant>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let dataset = Dataset::generate(config.dataset_seed, config.dataset_rows);
        let filter = Filter::all(&dataset);

        let mut session = Session::default();
        if let Some(theme) = &config.theme {
            session.theme_name = theme.clone();
        }
        let theme = Theme::by_name(&session.theme_name);
        let theme_names = Theme::available();
        let theme_cursor = theme_names
            .iter()
            .position(|n| *n == session.theme_name)
            .unwrap_or(0);

        let page = config
            .start_page
            .as_deref()
            .and_then(Page::parse)
            .unwrap_or(Page::Home);

        Self {
            page,
            focus: Focus::Sidebar,
            popup: Popup::None,

            session,
            theme,
            theme_names,
            config,

            dataset,
            filter,
            region_cursor: 0,
            platform_cursor: 0,

            name_input: String::new(),

            slider: 40,
            theme_cursor,
            checkboxes: [true, false, false],
            checkbox_cursor: 0,
            progress_pct: 0,
            progress_started: None,

            todo_input: String::new(),
            todo_editing: false,
            todo_cursor: 0,
            calc_a: 10,
            calc_b: 5,
            calc_op: Op::Add,
            calc_field: 0,

            chat_input: String::new(),
            chat_scroll: 0,
            pending_reply: None,

            preview: None,
            preview_scroll: 0,

            browser_path: dirs::home_dir().unwrap_or_else(|| PathBuf::from("/")),
            browser_entries: Vec::new(),
            browser_selected: 0,

            status_message: None,
            status_message_time: None,
        }
    }

    /// Set a status message (auto-clears after a few seconds)
    fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
        self.status_message_time = Some(Instant::now());
    }

    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Popups capture input first
        if self.popup != Popup::None {
            return self.handle_popup_key(key).await;
        }

        // Focus cycling: Sidebar -> pane 0 .. pane n-1 -> Sidebar
        match key.code {
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Sidebar => Focus::Content(0),
                    Focus::Content(i) if i + 1 < self.page.pane_count() => Focus::Content(i + 1),
                    Focus::Content(_) => Focus::Sidebar,
                };
                return Ok(());
            }
            KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Sidebar => Focus::Content(self.page.pane_count() - 1),
                    Focus::Content(0) => Focus::Sidebar,
                    Focus::Content(i) => Focus::Content(i - 1),
                };
                return Ok(());
            }
            _ => {}
        }

        match self.focus {
            Focus::Sidebar => self.handle_sidebar_key(key),
            Focus::Content(pane) => self.handle_content_key(key, pane).await?,
        }
        Ok(())
    }

    fn handle_sidebar_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.switch_page(Page::ALL[(self.page.index() + 1) % Page::ALL.len()]);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                let i = self
                    .page
                    .index()
                    .checked_sub(1)
                    .unwrap_or(Page::ALL.len() - 1);
                self.switch_page(Page::ALL[i]);
            }
            KeyCode::Char(c @ '1'..='8') => {
                let i = c as usize - '1' as usize;
                self.switch_page(Page::ALL[i]);
            }
            KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => {
                self.focus = Focus::Content(0);
            }
            KeyCode::Char('?') => self.popup = Popup::Help,
            _ => {}
        }
    }

    /// Change page, keeping focus on the sidebar (radio semantics: the
    /// highlighted entry is the rendered page).
    fn switch_page(&mut self, page: Page) {
        if self.page != page {
            self.page = page;
            tracing::debug!(page = page.title(), "switched page");
        }
    }

    async fn handle_content_key(&mut self, key: KeyEvent, pane: usize) -> Result<()> {
        // Esc walks back: cancel pending reply / input edit, else
        // return focus to the sidebar.
        if key.code == KeyCode::Esc {
            if self.page == Page::Chat && self.pending_reply.is_some() {
                self.pending_reply = None;
                self.set_status("Reply cancelled");
            } else if self.page == Page::Forms && self.todo_editing {
                self.todo_editing = false;
                self.todo_input.clear();
            } else {
                self.focus = Focus::Sidebar;
            }
            return Ok(());
        }

        match self.page {
            Page::Home => self.handle_home_key(key),
            Page::Analytics => self.handle_analytics_key(key, pane),
            Page::Gallery => self.handle_gallery_key(key, pane),
            Page::Forms => self.handle_forms_key(key, pane),
            Page::Chat => self.handle_chat_key(key),
            Page::Files => self.handle_files_key(key),
            Page::Media | Page::About => {}
        }
        Ok(())
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.name_input.push(c);
            }
            KeyCode::Backspace => {
                self.name_input.pop();
            }
            _ => {}
        }
    }

    fn handle_analytics_key(&mut self, key: KeyEvent, pane: usize) {
        match pane {
            // Date range window
            0 => {
                let (first, last) = match (self.dataset.first_date(), self.dataset.last_date()) {
                    (Some(f), Some(l)) => (f, l),
                    _ => return,
                };
                let step = ChronoDuration::days(DATE_STEP_DAYS);
                match key.code {
                    KeyCode::Left | KeyCode::Char('h') => {
                        self.filter.from = (self.filter.from - step).max(first);
                        self.filter.to = (self.filter.to - step).max(self.filter.from);
                    }
                    KeyCode::Right | KeyCode::Char('l') => {
                        self.filter.to = (self.filter.to + step).min(last);
                        self.filter.from = (self.filter.from + step).min(self.filter.to);
                    }
                    KeyCode::Char('+') | KeyCode::Char('=') => {
                        self.filter.from = (self.filter.from - step).max(first);
                        self.filter.to = (self.filter.to + step).min(last);
                    }
                    KeyCode::Char('-') => {
                        // Shrink from both ends, never inverting the range
                        let from = self.filter.from + step;
                        let to = self.filter.to - step;
                        if from <= to {
                            self.filter.from = from;
                            self.filter.to = to;
                        }
                    }
                    KeyCode::Char('f') => {
                        self.filter = Filter::all(&self.dataset);
                        self.set_status("Filter reset to full range");
                    }
                    _ => {}
                }
            }
            // Region subset
            1 => match key.code {
                KeyCode::Char('j') | KeyCode::Down => {
                    self.region_cursor = (self.region_cursor + 1) % Region::ALL.len();
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    self.region_cursor = self
                        .region_cursor
                        .checked_sub(1)
                        .unwrap_or(Region::ALL.len() - 1);
                }
                KeyCode::Char(' ') | KeyCode::Enter => {
                    self.filter.toggle_region(Region::ALL[self.region_cursor]);
                }
                _ => {}
            },
            // Platform subset
            2 => match key.code {
                KeyCode::Char('j') | KeyCode::Down => {
                    self.platform_cursor = (self.platform_cursor + 1) % Platform::ALL.len();
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    self.platform_cursor = self
                        .platform_cursor
                        .checked_sub(1)
                        .unwrap_or(Platform::ALL.len() - 1);
                }
                KeyCode::Char(' ') | KeyCode::Enter => {
                    self.filter
                        .toggle_platform(Platform::ALL[self.platform_cursor]);
                }
                _ => {}
            },
            _ => {}
        }
    }

    fn handle_gallery_key(&mut self, key: KeyEvent, pane: usize) {
        match pane {
            // Slider
            0 => match key.code {
                KeyCode::Left | KeyCode::Char('h') => {
                    self.slider = self.slider.saturating_sub(5);
                }
                KeyCode::Right | KeyCode::Char('l') => {
                    self.slider = (self.slider + 5).min(100);
                }
                _ => {}
            },
            // Theme picker
            1 => match key.code {
                KeyCode::Char('j') | KeyCode::Down => {
                    self.theme_cursor = (self.theme_cursor + 1) % self.theme_names.len();
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    self.theme_cursor = self
                        .theme_cursor
                        .checked_sub(1)
                        .unwrap_or(self.theme_names.len() - 1);
                }
                KeyCode::Char(' ') | KeyCode::Enter => self.apply_theme(),
                _ => {}
            },
            // Checkboxes
            2 => match key.code {
                KeyCode::Char('j') | KeyCode::Down => {
                    self.checkbox_cursor = (self.checkbox_cursor + 1) % self.checkboxes.len();
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    self.checkbox_cursor = self
                        .checkbox_cursor
                        .checked_sub(1)
                        .unwrap_or(self.checkboxes.len() - 1);
                }
                KeyCode::Char(' ') | KeyCode::Enter => {
                    self.checkboxes[self.checkbox_cursor] = !self.checkboxes[self.checkbox_cursor];
                }
                _ => {}
            },
            // Simulated progress run
            3 => {
                if matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter) {
                    self.progress_pct = 0;
                    self.progress_started = Some(Instant::now());
                    self.set_status("Processing...");
                }
            }
            _ => {}
        }
    }

    /// Apply the theme under the picker cursor and remember it in the
    /// config so the next session starts with it.
    fn apply_theme(&mut self) {
        let name = match self.theme_names.get(self.theme_cursor) {
            Some(n) => n.clone(),
            None => return,
        };
        self.session.theme_name = name.clone();
        self.theme = Theme::by_name(&name);
        self.config.theme = Some(name.clone());
        if let Err(e) = self.config.save() {
            tracing::warn!("could not persist theme choice: {}", e);
        }
        self.set_status(format!("Theme: {}", name));
    }

    fn handle_forms_key(&mut self, key: KeyEvent, pane: usize) {
        // The todo input grabs every printable key while editing.
        if pane == 1 && self.todo_editing {
            match key.code {
                KeyCode::Enter => {
                    let text = self.todo_input.clone();
                    if self.session.add_todo(&text) {
                        self.set_status(format!("Added: {}", text.trim()));
                    } else {
                        self.set_status("Not added (empty or duplicate)");
                    }
                    self.todo_input.clear();
                    self.todo_editing = false;
                }
                KeyCode::Backspace => {
                    self.todo_input.pop();
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.todo_input.push(c);
                }
                _ => {}
            }
            return;
        }

        // Submitting the demo form works from any pane.
        if key.code == KeyCode::Char('s') {
            self.session.form_submitted = true;
            self.set_status("Form submitted");
            return;
        }

        match pane {
            // Counter
            0 => match key.code {
                KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => {
                    self.session.increment();
                }
                KeyCode::Char('-') | KeyCode::Down => {
                    self.session.decrement();
                }
                KeyCode::Char('r') => {
                    self.session.reset_counter();
                    self.set_status("Counter reset");
                }
                _ => {}
            },
            // Todo list
            1 => match key.code {
                KeyCode::Enter | KeyCode::Char('a') | KeyCode::Char('i') => {
                    self.todo_editing = true;
                }
                KeyCode::Char('j') | KeyCode::Down => {
                    if !self.session.todos.is_empty() {
                        self.todo_cursor = (self.todo_cursor + 1) % self.session.todos.len();
                    }
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    if !self.session.todos.is_empty() {
                        self.todo_cursor = self
                            .todo_cursor
                            .checked_sub(1)
                            .unwrap_or(self.session.todos.len() - 1);
                    }
                }
                KeyCode::Char('d') | KeyCode::Delete => {
                    if self.session.remove_todo(self.todo_cursor) {
                        self.set_status("Todo removed");
                        if self.todo_cursor >= self.session.todos.len()
                            && !self.session.todos.is_empty()
                        {
                            self.todo_cursor = self.session.todos.len() - 1;
                        }
                    }
                }
                _ => {}
            },
            // Calculator: Left/Right pick a field, Up/Down adjust it
            2 => match key.code {
                KeyCode::Left | KeyCode::Char('h') => {
                    self.calc_field = self.calc_field.checked_sub(1).unwrap_or(2);
                }
                KeyCode::Right | KeyCode::Char('l') => {
                    self.calc_field = (self.calc_field + 1) % 3;
                }
                KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('=') => match self.calc_field {
                    0 => self.calc_a += 1,
                    1 => self.calc_op = self.calc_op.next(),
                    _ => self.calc_b += 1,
                },
                KeyCode::Down | KeyCode::Char('-') => match self.calc_field {
                    0 => self.calc_a -= 1,
                    1 => self.calc_op = self.calc_op.prev(),
                    _ => self.calc_b -= 1,
                },
                _ => {}
            },
            _ => {}
        }
    }

    fn handle_chat_key(&mut self, key: KeyEvent) {
        // Ctrl-L asks before wiping the transcript
        if key.code == KeyCode::Char('l') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if !self.session.chat.is_empty() {
                self.popup = Popup::ConfirmClearChat;
            }
            return;
        }

        match key.code {
            KeyCode::Enter => self.send_chat_message(),
            KeyCode::Backspace => {
                self.chat_input.pop();
            }
            KeyCode::Up => self.chat_scroll = self.chat_scroll.saturating_add(1),
            KeyCode::Down => self.chat_scroll = self.chat_scroll.saturating_sub(1),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.chat_input.push(c);
            }
            _ => {}
        }
    }

    fn send_chat_message(&mut self) {
        let text = self.chat_input.trim().to_string();
        if text.is_empty() {
            return;
        }
        if self.pending_reply.is_some() {
            self.set_status("Still thinking...");
            return;
        }
        self.session.push_chat(Role::User, text.clone());
        self.chat_input.clear();
        self.chat_scroll = 0;
        self.pending_reply = Some(PendingReply {
            prompt: text,
            due: Instant::now() + Duration::from_millis(self.config.reply_delay_ms),
        });
    }

    fn handle_files_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char('o') => self.start_file_browser(),
            KeyCode::Up | KeyCode::Char('k') => {
                self.preview_scroll = self.preview_scroll.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.preview_scroll = self.preview_scroll.saturating_add(1);
            }
            KeyCode::PageUp => {
                self.preview_scroll = self.preview_scroll.saturating_sub(20);
            }
            KeyCode::PageDown => {
                self.preview_scroll = self.preview_scroll.saturating_add(20);
            }
            KeyCode::Char('x') => {
                if self.preview.take().is_some() {
                    self.preview_scroll = 0;
                    self.set_status("Preview discarded");
                }
            }
            _ => {}
        }
    }

    async fn handle_popup_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.popup {
            Popup::FileBrowser => self.handle_browser_key(key).await,
            Popup::Help => {
                if matches!(
                    key.code,
                    KeyCode::Esc | KeyCode::Char('?') | KeyCode::Enter | KeyCode::Char('q')
                ) {
                    self.popup = Popup::None;
                }
                Ok(())
            }
            Popup::ConfirmClearChat => {
                match key.code {
                    KeyCode::Char('y') | KeyCode::Enter => {
                        self.session.clear_chat();
                        self.chat_scroll = 0;
                        self.pending_reply = None;
                        self.popup = Popup::None;
                        self.set_status("Chat cleared");
                    }
                    KeyCode::Char('n') | KeyCode::Esc => {
                        self.popup = Popup::None;
                    }
                    _ => {}
                }
                Ok(())
            }
            Popup::None => Ok(()),
        }
    }

    fn start_file_browser(&mut self) {
        self.popup = Popup::FileBrowser;
        self.browser_selected = 0;
        self.refresh_browser();
    }

    fn refresh_browser(&mut self) {
        self.browser_entries.clear();

        // Add parent directory entry if not at root
        if let Some(parent) = self.browser_path.parent() {
            self.browser_entries.push(BrowserEntry {
                name: "..".to_string(),
                is_dir: true,
                path: parent.to_path_buf(),
            });
        }

        if let Ok(entries) = std::fs::read_dir(&self.browser_path) {
            let mut dirs: Vec<BrowserEntry> = Vec::new();
            let mut files_list: Vec<BrowserEntry> = Vec::new();

            for entry in entries.flatten() {
                let path = entry.path();
                let name = entry.file_name().to_string_lossy().to_string();

                // Skip hidden files
                if name.starts_with('.') {
                    continue;
                }

                if path.is_dir() {
                    dirs.push(BrowserEntry {
                        name,
                        is_dir: true,
                        path,
                    });
                } else if files::FileKind::detect(&path).is_some() {
                    files_list.push(BrowserEntry {
                        name,
                        is_dir: false,
                        path,
                    });
                }
            }

            dirs.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
            files_list.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

            self.browser_entries.extend(dirs);
            self.browser_entries.extend(files_list);
        }

        if self.browser_selected >= self.browser_entries.len() {
            self.browser_selected = 0;
        }
    }

    async fn handle_browser_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.popup = Popup::None;
            }
            KeyCode::Char('j') | KeyCode::Down => {
                if !self.browser_entries.is_empty() {
                    self.browser_selected =
                        (self.browser_selected + 1) % self.browser_entries.len();
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if !self.browser_entries.is_empty() {
                    self.browser_selected = self
                        .browser_selected
                        .checked_sub(1)
                        .unwrap_or(self.browser_entries.len() - 1);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(entry) = self.browser_entries.get(self.browser_selected).cloned() {
                    if entry.is_dir {
                        self.browser_path = entry.path;
                        self.browser_selected = 0;
                        self.refresh_browser();
                    } else {
                        self.load_preview(entry.path).await;
                    }
                }
            }
            KeyCode::Backspace => {
                if let Some(parent) = self.browser_path.parent() {
                    self.browser_path = parent.to_path_buf();
                    self.browser_selected = 0;
                    self.refresh_browser();
                }
            }
            KeyCode::Char('h') => {
                self.browser_path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"));
                self.browser_selected = 0;
                self.refresh_browser();
            }
            _ => {}
        }
        Ok(())
    }

    /// Build the preview off the draw loop; a huge or slow file must
    /// not freeze the terminal.
    async fn load_preview(&mut self, path: PathBuf) {
        let target = path.clone();
        let result = tokio::time::timeout(
            PREVIEW_TIMEOUT,
            tokio::task::spawn_blocking(move || files::build_preview(&target)),
        )
        .await;

        match result {
            Ok(Ok(Ok(preview))) => {
                self.set_status(format!(
                    "Loaded {} ({}, {})",
                    preview.name,
                    preview.kind.label(),
                    preview.size
                ));
                self.preview = Some(preview);
                self.preview_scroll = 0;
                self.popup = Popup::None;
            }
            Ok(Ok(Err(e))) => {
                tracing::warn!("preview failed for {}: {}", path.display(), e);
                self.set_status(format!("Cannot preview: {}", e));
            }
            Ok(Err(e)) => {
                self.set_status(format!("Preview task failed: {}", e));
            }
            Err(_) => {
                self.set_status("Preview timed out");
            }
        }
    }

    /// Time-based effects, run once per main-loop iteration.
    pub fn tick(&mut self) {
        // Clear status message after a few seconds
        if let Some(time) = self.status_message_time {
            if time.elapsed().as_secs() >= STATUS_SECONDS {
                self.status_message = None;
                self.status_message_time = None;
            }
        }

        // Deliver the scripted chat reply once its delay has passed
        if let Some(pending) = &self.pending_reply {
            if Instant::now() >= pending.due {
                let prompt = pending.prompt.clone();
                self.pending_reply = None;
                let reply = bot::reply(&prompt);
                self.session.push_chat(Role::Assistant, reply);
                self.chat_scroll = 0;
            }
        }

        // Advance the gallery's simulated progress run
        if let Some(started) = self.progress_started {
            let pct = (started.elapsed().as_millis() / PROGRESS_MS_PER_PCT).min(100) as u16;
            self.progress_pct = pct;
            if pct >= 100 {
                self.progress_started = None;
                self.set_status("Processing complete");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn app() -> App {
        let config = AppConfig {
            dataset_rows: 50,
            reply_delay_ms: 0,
            ..AppConfig::default()
        };
        App::new(config)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[tokio::test]
    async fn tab_cycles_through_sidebar_and_panes() {
        let mut a = app();
        a.page = Page::Forms;
        assert_eq!(a.focus, Focus::Sidebar);
        for expected in [
            Focus::Content(0),
            Focus::Content(1),
            Focus::Content(2),
            Focus::Sidebar,
        ] {
            a.handle_key(key(KeyCode::Tab)).await.unwrap();
            assert_eq!(a.focus, expected);
        }
    }

    #[tokio::test]
    async fn digits_jump_pages_from_sidebar() {
        let mut a = app();
        a.handle_key(key(KeyCode::Char('5'))).await.unwrap();
        assert_eq!(a.page, Page::Chat);
        a.handle_key(key(KeyCode::Char('1'))).await.unwrap();
        assert_eq!(a.page, Page::Home);
    }

    #[tokio::test]
    async fn counter_keys_mutate_session() {
        let mut a = app();
        a.page = Page::Forms;
        a.focus = Focus::Content(0);
        a.handle_key(key(KeyCode::Char('+'))).await.unwrap();
        a.handle_key(key(KeyCode::Char('+'))).await.unwrap();
        a.handle_key(key(KeyCode::Char('-'))).await.unwrap();
        assert_eq!(a.session.counter, 1);
        a.handle_key(key(KeyCode::Char('r'))).await.unwrap();
        assert_eq!(a.session.counter, 0);
    }

    #[tokio::test]
    async fn todo_edit_flow() {
        let mut a = app();
        a.page = Page::Forms;
        a.focus = Focus::Content(1);
        a.handle_key(key(KeyCode::Char('a'))).await.unwrap();
        assert!(a.todo_editing);
        for c in "tea".chars() {
            a.handle_key(key(KeyCode::Char(c))).await.unwrap();
        }
        a.handle_key(key(KeyCode::Enter)).await.unwrap();
        assert_eq!(a.session.todos, vec!["tea"]);
        assert!(!a.todo_editing);
        // 'd' removes the selected entry
        a.handle_key(key(KeyCode::Char('d'))).await.unwrap();
        assert!(a.session.todos.is_empty());
    }

    #[tokio::test]
    async fn chat_reply_arrives_after_tick() {
        let mut a = app();
        a.page = Page::Chat;
        a.focus = Focus::Content(0);
        for c in "hi streamlit".chars() {
            a.handle_key(key(KeyCode::Char(c))).await.unwrap();
        }
        a.handle_key(key(KeyCode::Enter)).await.unwrap();
        assert_eq!(a.session.chat.len(), 1);
        assert!(a.pending_reply.is_some());
        // Zero delay in the test config: the reply is due immediately.
        a.tick();
        assert_eq!(a.session.chat.len(), 2);
        assert_eq!(a.session.chat[1].role, Role::Assistant);
    }

    #[tokio::test]
    async fn empty_region_subset_filters_everything() {
        let mut a = app();
        a.page = Page::Analytics;
        a.focus = Focus::Content(1);
        // Toggle all four regions off
        for _ in 0..Region::ALL.len() {
            a.handle_key(key(KeyCode::Char(' '))).await.unwrap();
            a.handle_key(key(KeyCode::Char('j'))).await.unwrap();
        }
        assert!(a.filter.regions.is_empty());
        assert!(a.filter.apply(&a.dataset).is_empty());
    }

    #[tokio::test]
    async fn slider_stays_in_bounds() {
        let mut a = app();
        a.page = Page::Gallery;
        a.focus = Focus::Content(0);
        for _ in 0..40 {
            a.handle_key(key(KeyCode::Right)).await.unwrap();
        }
        assert_eq!(a.slider, 100);
        for _ in 0..40 {
            a.handle_key(key(KeyCode::Left)).await.unwrap();
        }
        assert_eq!(a.slider, 0);
    }

    #[tokio::test]
    async fn form_submit_sets_flag() {
        let mut a = app();
        a.page = Page::Forms;
        a.focus = Focus::Content(2);
        assert!(!a.session.form_submitted);
        a.handle_key(key(KeyCode::Char('s'))).await.unwrap();
        assert!(a.session.form_submitted);
    }

    #[tokio::test]
    async fn esc_returns_focus_to_sidebar() {
        let mut a = app();
        a.page = Page::Home;
        a.focus = Focus::Content(0);
        a.handle_key(key(KeyCode::Esc)).await.unwrap();
        assert_eq!(a.focus, Focus::Sidebar);
    }
}
