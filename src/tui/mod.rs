//! Ratatui-based terminal UI.
//!
//! Four sections mirror the app's content: Home (overview + progress), Quiz
//! (question flow + result), Types (catalog gallery + detail), Strategies
//! (the four educational tabs). Section navigation updates the persisted
//! visited-set after every switch.

use std::collections::HashSet;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{BarChart, Block, Borders, Gauge, List, ListItem, Paragraph, Tabs, Wrap},
};

use crate::app::startup::{self, LoadedData};
use crate::cli::DataArgs;
use crate::domain::{ClassificationResult, CustomerType, Section};
use crate::error::AppError;
use crate::io::progress;
use crate::quiz::{QuizSession, classify};
use crate::report::StrategyTab;

/// Start the TUI.
pub fn run(args: &DataArgs) -> Result<(), AppError> {
    let data = startup::load_all(&crate::app::data_sources(args));
    let visited = progress::load_visited(&args.progress_file);

    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::new(4, format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(data, visited, args.progress_file.clone());
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::new(4, format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::new(4, format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

struct App {
    data: LoadedData,
    section: Section,
    visited: HashSet<Section>,
    progress_path: PathBuf,
    status: String,

    session: QuizSession,
    selected_option: usize,
    result: Option<ClassificationResult>,

    selected_type: usize,
    strategy_tab: StrategyTab,
}

impl App {
    fn new(data: LoadedData, mut visited: HashSet<Section>, progress_path: PathBuf) -> Self {
        let mut session = QuizSession::new(data.questions.clone());
        session.start();

        let status = if data.catalog.is_empty() {
            "No customer types loaded; see the log for details.".to_string()
        } else {
            format!(
                "Loaded {} types, {} questions.",
                data.catalog.len(),
                data.questions.len()
            )
        };

        visited.insert(Section::Home);
        progress::save_visited(&progress_path, &visited);

        Self {
            data,
            section: Section::Home,
            visited,
            progress_path,
            status,
            session,
            selected_option: 0,
            result: None,
            selected_type: 0,
            strategy_tab: StrategyTab::Communication,
        }
    }

    fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::new(4, format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::new(4, format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::new(4, format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns `true` when the app should quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Tab => {
                self.navigate(next_section(self.section));
                return false;
            }
            KeyCode::BackTab => {
                self.navigate(prev_section(self.section));
                return false;
            }
            KeyCode::Char('1') => {
                self.navigate(Section::Home);
                return false;
            }
            KeyCode::Char('2') => {
                self.navigate(Section::Quiz);
                return false;
            }
            KeyCode::Char('3') => {
                self.navigate(Section::Types);
                return false;
            }
            KeyCode::Char('4') => {
                self.navigate(Section::Strategies);
                return false;
            }
            _ => {}
        }

        match self.section {
            Section::Home => {}
            Section::Quiz => self.handle_quiz_key(code),
            Section::Types => self.handle_types_key(code),
            Section::Strategies => self.handle_strategies_key(code),
        }
        false
    }

    /// Switch sections, marking the target visited and persisting the set.
    ///
    /// The progress file is rewritten on every navigation, not only on new
    /// visits, matching the persisted-entry contract.
    fn navigate(&mut self, target: Section) {
        self.section = target;
        self.visited.insert(target);
        progress::save_visited(&self.progress_path, &self.visited);
        self.status = format!(
            "{} ({}/{} sections visited)",
            target.title(),
            self.visited.len(),
            Section::ALL.len()
        );
    }

    fn handle_quiz_key(&mut self, code: KeyCode) {
        if self.result.is_some() {
            match code {
                KeyCode::Char('r') => {
                    self.session.start();
                    self.result = None;
                    self.selected_option = 0;
                    self.status = "Quiz restarted.".to_string();
                }
                KeyCode::Char('t') => self.navigate(Section::Types),
                _ => {}
            }
            return;
        }

        let Some(question) = self.session.current_question().cloned() else {
            // Complete without a result means classification failed.
            if code == KeyCode::Char('r') {
                self.session.start();
                self.selected_option = 0;
                self.status = "Quiz restarted.".to_string();
            }
            return;
        };

        match code {
            KeyCode::Up => {
                if self.selected_option > 0 {
                    self.selected_option -= 1;
                }
            }
            KeyCode::Down => {
                if self.selected_option + 1 < question.answers.len() {
                    self.selected_option += 1;
                }
            }
            KeyCode::Enter => {
                let tag = question.answers[self.selected_option].type_tag.clone();
                if self.session.select_answer(tag).is_ok() {
                    self.selected_option = 0;
                    if self.session.is_complete() {
                        self.finish_quiz();
                    }
                }
            }
            KeyCode::Left | KeyCode::Backspace => {
                let _ = self.session.previous();
                self.selected_option = 0;
            }
            _ => {}
        }
    }

    fn finish_quiz(&mut self) {
        match classify(self.session.answers(), &self.data.catalog) {
            Ok(result) => {
                self.status = format!("Result: {}", result.primary.name);
                self.result = Some(result);
            }
            Err(e) => {
                self.status = format!("Classification failed: {e}");
                self.result = None;
            }
        }
    }

    fn handle_types_key(&mut self, code: KeyCode) {
        let n = self.data.catalog.len();
        match code {
            KeyCode::Up => {
                if self.selected_type > 0 {
                    self.selected_type -= 1;
                }
            }
            KeyCode::Down => {
                if n > 0 && self.selected_type + 1 < n {
                    self.selected_type += 1;
                }
            }
            _ => {}
        }
    }

    fn handle_strategies_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left => self.strategy_tab = self.strategy_tab.prev(),
            KeyCode::Right => self.strategy_tab = self.strategy_tab.next(),
            _ => {}
        }
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        self.draw_header(frame, chunks[0]);
        match self.section {
            Section::Home => self.draw_home(frame, chunks[1]),
            Section::Quiz => self.draw_quiz(frame, chunks[1]),
            Section::Types => self.draw_types(frame, chunks[1]),
            Section::Strategies => self.draw_strategies(frame, chunks[1]),
        }
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let titles: Vec<Line> = Section::ALL
            .iter()
            .map(|s| {
                let mark = if self.visited.contains(s) { "✓" } else { " " };
                Line::from(format!("{} {mark}", s.title()))
            })
            .collect();

        let selected = Section::ALL.iter().position(|&s| s == self.section).unwrap_or(0);

        let tabs = Tabs::new(titles)
            .select(selected)
            .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL).title("compass"));
        frame.render_widget(tabs, area);
    }

    fn draw_home(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut lines: Vec<Line> = vec![
            Line::from(Span::styled(
                "Understand your customers, close with confidence.",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("  2  Quiz       - find a customer's personality type"),
            Line::from("  3  Types      - browse the four customer types"),
            Line::from("  4  Strategies - communication, trust, objections, closing"),
            Line::from(""),
            Line::from(format!(
                "Data: {} customer types, {} quiz questions.",
                self.data.catalog.len(),
                self.data.questions.len()
            )),
            Line::from(""),
            Line::from("Progress:"),
        ];

        for section in Section::ALL {
            let mark = if self.visited.contains(&section) { "✓" } else { "·" };
            lines.push(Line::from(format!("  {mark} {}", section.title())));
        }

        if !self.data.findings.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("{} data finding(s); see the log.", self.data.findings.len()),
                Style::default().fg(Color::Yellow),
            )));
        }

        let p = Paragraph::new(Text::from(lines))
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title("Home"));
        frame.render_widget(p, area);
    }

    fn draw_quiz(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        if self.data.catalog.is_empty() || self.data.questions.is_empty() {
            let msg = Paragraph::new("No quiz data loaded. Check the data files and restart.")
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default().borders(Borders::ALL).title("Quiz"));
            frame.render_widget(msg, area);
            return;
        }

        if let Some(result) = &self.result {
            self.draw_result(frame, area, result);
            return;
        }

        let Some(question) = self.session.current_question() else {
            // Complete but classification failed; the status line has the error.
            let msg = Paragraph::new("Quiz complete. Press r to retake.")
                .block(Block::default().borders(Borders::ALL).title("Quiz"));
            frame.render_widget(msg, area);
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(4),
                Constraint::Min(0),
            ])
            .split(area);

        let index = self.session.current_index();
        let total = self.session.total();
        let ratio = index as f64 / total as f64;
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title("Progress"))
            .gauge_style(Style::default().fg(Color::Cyan))
            .ratio(ratio)
            .label(format!(
                "Question {} of {}  {:.0}% complete",
                index + 1,
                total,
                ratio * 100.0
            ));
        frame.render_widget(gauge, chunks[0]);

        let q = Paragraph::new(question.question.clone())
            .wrap(Wrap { trim: true })
            .style(Style::default().add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL).title("Quiz"));
        frame.render_widget(q, chunks[1]);

        let items: Vec<ListItem> = question
            .answers
            .iter()
            .enumerate()
            .map(|(i, opt)| {
                ListItem::new(format!("{}. {}", letter(i), opt.text))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("↑/↓ select, Enter answer, ←/Backspace previous"),
            )
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ratatui::widgets::ListState::default();
        state.select(Some(self.selected_option));
        frame.render_stateful_widget(list, chunks[2], &mut state);
    }

    fn draw_result(&self, frame: &mut ratatui::Frame<'_>, area: Rect, result: &ClassificationResult) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);

        let mut lines: Vec<Line> = vec![
            Line::from(Span::styled(
                format!("{} Your result: {}", result.primary.icon, result.primary.name),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Key characteristics:"),
        ];
        for c in &result.primary.characteristics {
            lines.push(Line::from(format!("  - {c}")));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(format!(
            "Communication style: {}",
            result.primary.communication_style
        )));
        lines.push(Line::from(format!(
            "Decision timeline:   {}",
            result.primary.decision_time
        )));
        lines.push(Line::from(""));
        lines.push(Line::from("Best engagement tips:"));
        for tip in &result.primary.engagement_tips {
            lines.push(Line::from(format!("  - {tip}")));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "r retake quiz   t view all types",
            Style::default().fg(Color::Gray),
        )));

        let card = Paragraph::new(Text::from(lines))
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title("Result"));
        frame.render_widget(card, chunks[0]);

        let bars: Vec<(String, u64)> = result
            .scores
            .iter()
            .map(|s| (s.tag.clone(), s.count as u64))
            .collect();
        let bar_refs: Vec<(&str, u64)> = bars.iter().map(|(tag, n)| (tag.as_str(), *n)).collect();

        let chart = BarChart::default()
            .block(Block::default().borders(Borders::ALL).title("Scores"))
            .data(&bar_refs)
            .bar_width(9)
            .bar_gap(2)
            .bar_style(Style::default().fg(Color::Cyan))
            .value_style(Style::default().fg(Color::Black).bg(Color::Cyan));
        frame.render_widget(chart, chunks[1]);
    }

    fn draw_types(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        if self.data.catalog.is_empty() {
            let msg = Paragraph::new("No customer types loaded.")
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default().borders(Borders::ALL).title("Types"));
            frame.render_widget(msg, area);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(30), Constraint::Min(0)])
            .split(area);

        let items: Vec<ListItem> = self
            .data
            .catalog
            .iter()
            .map(|t| ListItem::new(format!("{} {}", t.icon, t.name)))
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Customer types"))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ratatui::widgets::ListState::default();
        state.select(Some(self.selected_type.min(self.data.catalog.len() - 1)));
        frame.render_stateful_widget(list, chunks[0], &mut state);

        if let Some(t) = self.data.catalog.iter().nth(self.selected_type) {
            self.draw_type_detail(frame, chunks[1], t);
        }
    }

    fn draw_type_detail(&self, frame: &mut ratatui::Frame<'_>, area: Rect, t: &CustomerType) {
        let mut lines: Vec<Line> = vec![
            Line::from(Span::styled(
                format!("{} {}", t.icon, t.name),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Characteristics:"),
        ];
        for c in &t.characteristics {
            lines.push(Line::from(format!("  - {c}")));
        }
        lines.push(Line::from(""));
        lines.push(Line::from("Personality traits:"));
        for tr in &t.traits {
            lines.push(Line::from(format!("  - {tr}")));
        }
        lines.push(Line::from(""));
        lines.push(Line::from("Primary motivations:"));
        for m in &t.primary_motivations {
            lines.push(Line::from(format!("  - {m}")));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(format!("Communication style: {}", t.communication_style)));
        lines.push(Line::from(format!("Decision timeline:   {}", t.decision_time)));
        lines.push(Line::from(""));
        lines.push(Line::from("Engagement best practices:"));
        for tip in &t.engagement_tips {
            lines.push(Line::from(format!("  - {tip}")));
        }

        let p = Paragraph::new(Text::from(lines))
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title(t.id.clone()));
        frame.render_widget(p, area);
    }

    fn draw_strategies(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let titles: Vec<Line> = StrategyTab::ALL.iter().map(|t| Line::from(t.title())).collect();
        let selected = StrategyTab::ALL
            .iter()
            .position(|&t| t == self.strategy_tab)
            .unwrap_or(0);

        let tabs = Tabs::new(titles)
            .select(selected)
            .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL).title("←/→ switch tab"));
        frame.render_widget(tabs, chunks[0]);

        let body = Paragraph::new(self.strategy_tab.body())
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(self.strategy_tab.title()),
            );
        frame.render_widget(body, chunks[1]);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "1-4 sections  Tab next  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

fn next_section(cur: Section) -> Section {
    match cur {
        Section::Home => Section::Quiz,
        Section::Quiz => Section::Types,
        Section::Types => Section::Strategies,
        Section::Strategies => Section::Home,
    }
}

fn prev_section(cur: Section) -> Section {
    match cur {
        Section::Home => Section::Strategies,
        Section::Quiz => Section::Home,
        Section::Types => Section::Quiz,
        Section::Strategies => Section::Types,
    }
}

fn letter(i: usize) -> char {
    (b'A' + (i % 26) as u8) as char
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_cycle_is_closed() {
        let mut s = Section::Home;
        for _ in 0..Section::ALL.len() {
            s = next_section(s);
        }
        assert_eq!(s, Section::Home);
        assert_eq!(prev_section(Section::Home), Section::Strategies);
    }

    #[test]
    fn option_letters_start_at_a() {
        assert_eq!(letter(0), 'A');
        assert_eq!(letter(3), 'D');
    }
}
