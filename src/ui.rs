use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
    MouseEventKind,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};
use ratatui::{Frame, Terminal};
use unicode_width::UnicodeWidthStr;

use crate::controller::{
    Controller, Input, Key, MenuEntry, Region, Regions, RenderSink, RenderState, Target, HOME,
};
use crate::view::ViewState;

const MENU_WIDTH: u16 = 28;
const BUTTON_GAP: &str = "  ";
const BEST_MESSAGE: &str =
    "The Best Of collection is hand-picked and not streamable yet. Stay tuned!";

#[derive(Clone, Copy)]
struct Palette {
    bg: Color,
    panel_bg: Color,
    selected_bg: Color,
    border: Color,
    text_primary: Color,
    text_secondary: Color,
    accent: Color,
    success: Color,
}

impl Palette {
    fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "mono" | "monochrome" => Self {
                bg: Color::Reset,
                panel_bg: Color::Reset,
                selected_bg: Color::DarkGray,
                border: Color::Gray,
                text_primary: Color::White,
                text_secondary: Color::Gray,
                accent: Color::White,
                success: Color::White,
            },
            _ => Self {
                bg: Color::Rgb(30, 30, 46),
                panel_bg: Color::Rgb(24, 24, 36),
                selected_bg: Color::Rgb(69, 71, 90),
                border: Color::Rgb(137, 180, 250),
                text_primary: Color::Rgb(205, 214, 244),
                text_secondary: Color::Rgb(166, 173, 200),
                accent: Color::Rgb(137, 180, 250),
                success: Color::Rgb(166, 227, 161),
            },
        }
    }
}

#[derive(Default)]
pub struct TerminalSink {
    state: Option<RenderState>,
    alert: Option<String>,
    dirty: bool,
}

impl TerminalSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn dismiss_alert(&mut self) -> bool {
        let had_alert = self.alert.take().is_some();
        self.dirty |= had_alert;
        had_alert
    }
}

impl RenderSink for TerminalSink {
    fn regions(&self) -> Regions {
        Region::ALL.into_iter().collect()
    }

    fn render(&mut self, state: &RenderState) {
        self.state = Some(state.clone());
        self.dirty = true;
    }

    fn alert(&mut self, message: &str) {
        self.alert = Some(message.to_string());
        self.dirty = true;
    }
}

#[derive(Clone, Debug)]
pub struct Options {
    pub theme: String,
    pub tick_rate: Duration,
    pub qualities: Vec<String>,
    pub status_message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Action {
    Quit,
    Dispatch(Input),
    MenuMove(isize),
    MenuActivate,
    QualityMove(isize),
    QualityActivate,
    QualityPick(usize),
    Ignore,
}

fn click(target: Target) -> Action {
    Action::Dispatch(Input::Click(target))
}

fn press(key: Key) -> Action {
    Action::Dispatch(Input::Key {
        key,
        text_input_focused: false,
    })
}

fn map_key(code: KeyCode, view: &ViewState) -> Action {
    match code {
        KeyCode::Char('q') => return Action::Quit,
        KeyCode::Esc => return press(Key::Escape),
        KeyCode::Left => return press(Key::ArrowLeft),
        KeyCode::Right => return press(Key::ArrowRight),
        KeyCode::Char('m') | KeyCode::Char('M') => return click(Target::MenuToggle),
        _ => {}
    }

    if view.download_popup_visible() {
        return match code {
            KeyCode::Up | KeyCode::Char('k') => Action::QualityMove(-1),
            KeyCode::Down | KeyCode::Char('j') => Action::QualityMove(1),
            KeyCode::Enter => Action::QualityActivate,
            KeyCode::Char(ch @ '1'..='9') => Action::QualityPick(ch as usize - '1' as usize),
            KeyCode::Char('x') => click(Target::PopupClose),
            _ => Action::Ignore,
        };
    }

    if view.info_popup_visible() {
        return match code {
            KeyCode::Enter | KeyCode::Char('o') => click(Target::OkButton),
            _ => Action::Ignore,
        };
    }

    if view.menu_open() {
        return match code {
            KeyCode::Up | KeyCode::Char('k') => Action::MenuMove(-1),
            KeyCode::Down | KeyCode::Char('j') => Action::MenuMove(1),
            KeyCode::Enter => Action::MenuActivate,
            KeyCode::Char('x') => click(Target::MenuClose),
            _ => Action::Ignore,
        };
    }

    match code {
        KeyCode::Enter | KeyCode::Char('g') if view.home_visible() => click(Target::GetVideo),
        KeyCode::Char('n') => click(Target::Next),
        KeyCode::Char('p') => click(Target::Prev),
        KeyCode::Char('d') => click(Target::Download),
        KeyCode::Char('c') => click(Target::ClearFilter),
        KeyCode::Char('H') | KeyCode::Home => click(Target::Category(HOME.to_string())),
        _ => Action::Ignore,
    }
}

fn step_index(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current as isize + delta).clamp(0, len as isize - 1) as usize
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Hit {
    area: Rect,
    target: Target,
}

fn hit_test(hits: &[Hit], column: u16, row: u16) -> Target {
    hits.iter()
        .rev()
        .find(|hit| {
            column >= hit.area.x
                && column < hit.area.x.saturating_add(hit.area.width)
                && row >= hit.area.y
                && row < hit.area.y.saturating_add(hit.area.height)
        })
        .map(|hit| hit.target.clone())
        .unwrap_or(Target::Elsewhere)
}

fn button_row(area: Rect, buttons: &[(&str, Target)], style: Style) -> (Line<'static>, Vec<Hit>) {
    let mut spans = Vec::with_capacity(buttons.len() * 2);
    let mut hits = Vec::with_capacity(buttons.len());
    let mut x = area.x;
    let limit = area.x.saturating_add(area.width);
    for (idx, (label, target)) in buttons.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw(BUTTON_GAP));
            x = x.saturating_add(BUTTON_GAP.len() as u16);
        }
        let text = format!("[{label}]");
        let width = UnicodeWidthStr::width(text.as_str()) as u16;
        if x < limit {
            hits.push(Hit {
                area: Rect::new(x, area.y, width.min(limit - x), 1),
                target: target.clone(),
            });
        }
        spans.push(Span::styled(text, style));
        x = x.saturating_add(width);
    }
    (Line::from(spans), hits)
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let percent_x = percent_x.min(100);
    let percent_y = percent_y.min(100);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage(100 - percent_x - (100 - percent_x) / 2),
        ])
        .split(area);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage(100 - percent_y - (100 - percent_y) / 2),
        ])
        .split(horizontal[1]);
    vertical[1]
}

fn row_of(area: Rect, offset: u16) -> Option<Rect> {
    (offset < area.height).then(|| Rect::new(area.x, area.y + offset, area.width, 1))
}

pub struct Model {
    controller: Controller<TerminalSink>,
    menu: Vec<MenuEntry>,
    menu_index: usize,
    qualities: Vec<String>,
    quality_index: usize,
    hits: Vec<Hit>,
    palette: Palette,
    tick_rate: Duration,
    status_message: String,
}

impl Model {
    pub fn new(controller: Controller<TerminalSink>, options: Options) -> Self {
        let menu = controller.menu();
        Self {
            controller,
            menu,
            menu_index: 0,
            qualities: options.qualities,
            quality_index: 0,
            hits: Vec::new(),
            palette: Palette::from_name(&options.theme),
            tick_rate: options.tick_rate,
            status_message: options.status_message,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut stdout = io::stdout();
        enable_raw_mode()?;
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        terminal.backend_mut().execute(DisableMouseCapture)?;
        terminal.backend_mut().execute(LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let mut last_tick = Instant::now();
        let mut needs_redraw = true;

        loop {
            if self.controller.sink_mut().take_dirty() || needs_redraw {
                terminal.draw(|frame| self.draw(frame))?;
                needs_redraw = false;
            }

            let timeout = self
                .tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or_else(|| Duration::from_millis(16));

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key.code) {
                            break;
                        }
                        needs_redraw = true;
                    }
                    Event::Mouse(mouse) => {
                        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                            self.handle_click(mouse.column, mouse.row);
                        }
                    }
                    Event::Resize(width, _) => {
                        self.controller.dispatch(Input::Resize { width });
                        needs_redraw = true;
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= self.tick_rate {
                last_tick = Instant::now();
                self.controller.dispatch(Input::Tick(last_tick));
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode) -> bool {
        if self.controller.sink_mut().dismiss_alert() {
            return false;
        }

        match map_key(code, self.controller.view()) {
            Action::Quit => return true,
            Action::Dispatch(input) => self.controller.dispatch(input),
            Action::MenuMove(delta) => {
                self.menu_index = step_index(self.menu_index, delta, self.menu.len());
            }
            Action::MenuActivate => {
                if let Some(entry) = self.menu.get(self.menu_index) {
                    let target = Target::Category(entry.id.clone());
                    self.controller.dispatch(Input::Click(target));
                }
            }
            Action::QualityMove(delta) => {
                self.quality_index = step_index(self.quality_index, delta, self.qualities.len());
            }
            Action::QualityActivate => self.pick_quality(self.quality_index),
            Action::QualityPick(index) => self.pick_quality(index),
            Action::Ignore => {}
        }
        false
    }

    fn pick_quality(&mut self, index: usize) {
        if let Some(quality) = self.qualities.get(index).cloned() {
            self.quality_index = index;
            self.controller
                .dispatch(Input::Click(Target::Quality(quality)));
        }
    }

    fn handle_click(&mut self, column: u16, row: u16) {
        if self.controller.sink_mut().dismiss_alert() {
            return;
        }
        let target = hit_test(&self.hits, column, row);
        if let Target::Category(id) = &target {
            if let Some(index) = self.menu.iter().position(|entry| &entry.id == id) {
                self.menu_index = index;
            }
        }
        self.controller.dispatch(Input::Click(target));
    }

    fn draw(&mut self, frame: &mut Frame<'_>) {
        self.hits.clear();
        let Some(state) = self.controller.sink().state.clone() else {
            return;
        };
        let palette = self.palette;
        let full = frame.size();
        frame.render_widget(Block::default().style(Style::default().bg(palette.bg)), full);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(full);

        self.draw_header(frame, layout[0], &state);

        let main = layout[1];
        let (menu_area, content_area) = if state.view.menu_open() {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(MENU_WIDTH), Constraint::Min(0)])
                .split(main);
            (Some(chunks[0]), chunks[1])
        } else {
            (None, main)
        };

        if state.view.home_visible() {
            self.draw_home(frame, content_area);
        } else {
            self.draw_player(frame, content_area, &state);
        }

        if state.view.backdrop_visible() {
            frame
                .buffer_mut()
                .set_style(content_area, Style::default().add_modifier(Modifier::DIM));
            self.hits.push(Hit {
                area: content_area,
                target: Target::Backdrop,
            });
        }

        if let Some(area) = menu_area {
            self.draw_menu(frame, area, &state);
        }

        if state.view.download_popup_visible() {
            self.draw_download_popup(frame, main, &state);
        }
        if state.view.info_popup_visible() {
            self.draw_info_popup(frame, main);
        }

        self.draw_notices(frame, main, &state);

        let footer = Paragraph::new(self.footer_text(&state.view))
            .style(
                Style::default()
                    .fg(palette.text_secondary)
                    .bg(palette.panel_bg)
                    .add_modifier(Modifier::ITALIC),
            )
            .alignment(Alignment::Center);
        frame.render_widget(footer, layout[2]);

        if let Some(message) = self.controller.sink().alert.clone() {
            self.draw_alert(frame, full, &message);
        }
    }

    fn draw_header(&mut self, frame: &mut Frame<'_>, area: Rect, state: &RenderState) {
        let palette = self.palette;
        let button_style = Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD);
        let mut buttons = vec![("☰ Menu", Target::MenuToggle)];
        if state.category_status_visible && state.clear_filter_visible {
            buttons.push(("✕ Clear filter", Target::ClearFilter));
        }
        let (mut line, hits) = button_row(area, &buttons, button_style);
        self.hits.extend(hits);

        line.spans.push(Span::styled(
            "  Ani Vision",
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        ));
        if state.category_status_visible {
            line.spans.push(Span::styled(
                format!("  Category: {}", state.active_category_label),
                Style::default().fg(palette.text_secondary),
            ));
        }
        let header = Paragraph::new(line).style(Style::default().bg(palette.selected_bg));
        frame.render_widget(header, area);
    }

    fn panel_block(&self, title: String) -> Block<'static> {
        Block::default()
            .title(Span::styled(
                title,
                Style::default()
                    .fg(self.palette.accent)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.palette.border))
            .style(Style::default().bg(self.palette.panel_bg))
            .padding(Padding::uniform(1))
    }

    fn draw_home(&mut self, frame: &mut Frame<'_>, area: Rect) {
        let palette = self.palette;
        let block = self.panel_block("Home".to_string());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let catalog = self.controller.navigator().catalog();
        let mut lines = vec![
            Line::from(Span::styled(
                "Welcome to Ani Vision",
                Style::default()
                    .fg(palette.text_primary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(
                format!(
                    "Browse {} videos across {} categories.",
                    catalog.len(),
                    catalog.categories().len()
                ),
                Style::default().fg(palette.text_secondary),
            )),
            Line::from(Span::styled(
                "Open the menu with m, or press Enter to start watching.",
                Style::default().fg(palette.text_secondary),
            )),
            Line::default(),
        ];
        if let Some(row) = row_of(inner, lines.len() as u16) {
            let (line, hits) = button_row(
                row,
                &[("▶ Get Video", Target::GetVideo)],
                Style::default()
                    .fg(palette.success)
                    .add_modifier(Modifier::BOLD),
            );
            lines.push(line);
            self.hits.extend(hits);
        }
        frame.render_widget(Paragraph::new(Text::from(lines)), inner);
    }

    fn draw_player(&mut self, frame: &mut Frame<'_>, area: Rect, state: &RenderState) {
        let palette = self.palette;
        let block = self.panel_block(state.title.clone());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let source = state.source_url.as_deref().unwrap_or("-");
        let mut lines = vec![
            Line::from(Span::styled(
                state.video_category_label.clone(),
                Style::default().fg(palette.accent),
            )),
            Line::from(Span::styled(
                format!("Video {}", state.counter),
                Style::default().fg(palette.text_primary),
            )),
            Line::from(Span::styled(
                format!("Source: {source}"),
                Style::default().fg(palette.text_secondary),
            )),
            Line::default(),
        ];
        if let Some(row) = row_of(inner, lines.len() as u16) {
            let (line, hits) = button_row(
                row,
                &[
                    ("◀ Prev", Target::Prev),
                    ("⬇ Download", Target::Download),
                    ("Next ▶", Target::Next),
                ],
                Style::default()
                    .fg(palette.text_primary)
                    .add_modifier(Modifier::BOLD),
            );
            lines.push(line);
            self.hits.extend(hits);
        }
        frame.render_widget(
            Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false }),
            inner,
        );
    }

    fn draw_menu(&mut self, frame: &mut Frame<'_>, area: Rect, state: &RenderState) {
        let palette = self.palette;
        frame.render_widget(Clear, area);
        let block = self.panel_block("Categories".to_string());
        let inner = block.inner(area);
        frame.render_widget(block, area);
        self.hits.push(Hit {
            area,
            target: Target::SideMenu,
        });

        let mut lines = Vec::with_capacity(self.menu.len() + 2);
        if let Some(row) = row_of(inner, 0) {
            let (line, hits) = button_row(
                row,
                &[("✕ Close", Target::MenuClose)],
                Style::default().fg(palette.text_secondary),
            );
            lines.push(line);
            self.hits.extend(hits);
        }
        lines.push(Line::default());

        for (idx, entry) in self.menu.iter().enumerate() {
            let offset = lines.len() as u16;
            let Some(row) = row_of(inner, offset) else {
                break;
            };
            let is_active = entry.id == state.active_menu_item;
            let is_selected = idx == self.menu_index;
            let mut style = Style::default().fg(if is_active {
                palette.accent
            } else {
                palette.text_secondary
            });
            if is_selected {
                style = style
                    .bg(palette.selected_bg)
                    .fg(palette.text_primary)
                    .add_modifier(Modifier::BOLD);
            }
            let marker = if is_active { "●" } else { "○" };
            lines.push(Line::from(Span::styled(
                format!("{marker} {}", entry.label),
                style,
            )));
            self.hits.push(Hit {
                area: row,
                target: Target::Category(entry.id.clone()),
            });
        }
        frame.render_widget(Paragraph::new(Text::from(lines)), inner);
    }

    fn draw_download_popup(&mut self, frame: &mut Frame<'_>, area: Rect, state: &RenderState) {
        let palette = self.palette;
        self.hits.push(Hit {
            area,
            target: Target::PopupOverlay,
        });
        let popup_area = centered_rect(50, 60, area);
        frame.render_widget(Clear, popup_area);
        let block = self.panel_block("Download".to_string());
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);
        self.hits.push(Hit {
            area: popup_area,
            target: Target::Elsewhere,
        });

        let video = state.download_target.as_deref().unwrap_or("-");
        let mut lines = vec![
            Line::from(Span::styled(
                format!("Choose a quality for video {video}:"),
                Style::default().fg(palette.text_primary),
            )),
            Line::default(),
        ];
        for (idx, quality) in self.qualities.iter().enumerate() {
            let Some(row) = row_of(inner, lines.len() as u16) else {
                break;
            };
            let mut style = Style::default().fg(palette.text_secondary);
            if idx == self.quality_index {
                style = style
                    .bg(palette.selected_bg)
                    .fg(palette.text_primary)
                    .add_modifier(Modifier::BOLD);
            }
            lines.push(Line::from(Span::styled(
                format!("{}. {quality}", idx + 1),
                style,
            )));
            self.hits.push(Hit {
                area: row,
                target: Target::Quality(quality.clone()),
            });
        }
        lines.push(Line::default());
        if let Some(row) = row_of(inner, lines.len() as u16) {
            let (line, hits) = button_row(
                row,
                &[("Cancel", Target::PopupClose)],
                Style::default().fg(palette.text_secondary),
            );
            lines.push(line);
            self.hits.extend(hits);
        }
        frame.render_widget(Paragraph::new(Text::from(lines)), inner);
    }

    fn draw_info_popup(&mut self, frame: &mut Frame<'_>, area: Rect) {
        let palette = self.palette;
        let popup_area = centered_rect(50, 40, area);
        frame.render_widget(Clear, popup_area);
        let title = self
            .controller
            .navigator()
            .catalog()
            .display_name(crate::catalog::BEST)
            .to_string();
        let block = self.panel_block(title);
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);
        self.hits.push(Hit {
            area: popup_area,
            target: Target::Elsewhere,
        });

        let mut lines = vec![
            Line::from(Span::styled(
                BEST_MESSAGE,
                Style::default().fg(palette.text_primary),
            )),
            Line::default(),
        ];
        // the message may wrap, so the button goes on the last row
        if let Some(row) = row_of(inner, inner.height.saturating_sub(1)) {
            let (line, hits) = button_row(
                row,
                &[("OK", Target::OkButton)],
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            );
            self.hits.extend(hits);
            frame.render_widget(Paragraph::new(line), row);
        }
        let text_area = Rect {
            height: inner.height.saturating_sub(1),
            ..inner
        };
        lines.truncate(text_area.height as usize);
        frame.render_widget(
            Paragraph::new(Text::from(lines)).wrap(Wrap { trim: true }),
            text_area,
        );
    }

    fn draw_notices(&self, frame: &mut Frame<'_>, area: Rect, state: &RenderState) {
        let palette = self.palette;
        let mut bottom = area.y.saturating_add(area.height);
        for message in state.notices.iter().rev() {
            if bottom <= area.y {
                break;
            }
            bottom -= 1;
            let width = (UnicodeWidthStr::width(message.as_str()) as u16 + 4).min(area.width);
            let x = area.x + area.width.saturating_sub(width);
            let notice_area = Rect::new(x, bottom, width, 1);
            let notice = Paragraph::new(format!("✔ {message}"))
                .style(
                    Style::default()
                        .fg(palette.bg)
                        .bg(palette.success)
                        .add_modifier(Modifier::BOLD),
                )
                .alignment(Alignment::Center);
            frame.render_widget(Clear, notice_area);
            frame.render_widget(notice, notice_area);
        }
    }

    fn draw_alert(&self, frame: &mut Frame<'_>, area: Rect, message: &str) {
        let popup_area = centered_rect(40, 30, area);
        frame.render_widget(Clear, popup_area);
        let body = Paragraph::new(Text::from(vec![
            Line::from(message.to_string()),
            Line::default(),
            Line::from(Span::styled(
                "Press any key to continue",
                Style::default().add_modifier(Modifier::ITALIC),
            )),
        ]))
        .block(self.panel_block("Notice".to_string()))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        frame.render_widget(body, popup_area);
    }

    fn footer_text(&self, view: &ViewState) -> String {
        let hint = if view.download_popup_visible() {
            "j/k select quality · Enter or 1-9 download · x cancel · Esc close"
        } else if view.info_popup_visible() {
            "Enter/o OK · Esc close"
        } else if view.menu_open() {
            "j/k move · Enter select category · m/x close menu · q quit"
        } else if view.home_visible() {
            "Enter get video · m menu · q quit"
        } else {
            "←/→ or p/n previous/next · d download · c clear filter · H home · m menu · q quit"
        };
        if self.status_message.is_empty() {
            hint.to_string()
        } else {
            format!("{} · {hint}", self.status_message)
        }
    }
}
