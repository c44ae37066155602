use color_eyre::eyre::Result;
use crossterm::{
    event::{
        Event,
        KeyCode,
        KeyEvent,
        KeyEventKind,
        KeyModifiers,
    },
    terminal::{
        disable_raw_mode,
        enable_raw_mode,
    },
};
use one_armed_bandit::{
    Column,
    Fruit,
    Outcome,
    Presenter,
    Statistics,
    Tier,
};
use ratatui::{
    prelude::*,
    widgets::*,
};
use std::io::{
    Stdout,
    stdout,
};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

pub enum UserEvent {
    Spin,
    Quit,
    Redraw,
}

/// Everything the screen shows, updated through [`Presenter`].
#[derive(Clone, Debug)]
pub struct Screen {
    // indexed [tier][column]
    icons: [[Fruit; 3]; 3],
    spin_enabled: bool,
    result: Option<Outcome>,
    total_spins: u64,
    wins: u64,
    losses: u64,
    win_ratio: u64,
}

impl Default for Screen {
    fn default() -> Self {
        Screen {
            icons: [[Fruit::default(); 3]; 3],
            spin_enabled: true,
            result: None,
            total_spins: 0,
            wins: 0,
            losses: 0,
            win_ratio: 0,
        }
    }
}

impl Screen {
    pub fn icon(&self, column: Column, tier: Tier) -> Fruit {
        self.icons[tier.index()][column.index()]
    }
}

#[derive(Debug, Default)]
pub struct TuiPresenter {
    screen: Screen,
}

impl TuiPresenter {
    pub fn screen(&self) -> &Screen {
        &self.screen
    }
}

impl Presenter for TuiPresenter {
    fn set_icon(&mut self, column: Column, tier: Tier, fruit: Fruit) {
        self.screen.icons[tier.index()][column.index()] = fruit;
    }

    fn set_spin_enabled(&mut self, enabled: bool) {
        self.screen.spin_enabled = enabled;
    }

    fn show_result(&mut self, outcome: Outcome) {
        self.screen.result = Some(outcome);
    }

    fn hide_result(&mut self) {
        self.screen.result = None;
    }

    fn show_statistics(&mut self, stats: &Statistics, refresh_losses: bool) {
        self.screen.total_spins = stats.total_spins();
        self.screen.wins = stats.total_wins();
        if refresh_losses {
            self.screen.losses = stats.losses();
        }
        self.screen.win_ratio = stats.win_ratio_percent();
    }
}

pub fn terminal_enter() -> Result<Tui> {
    enable_raw_mode()?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn terminal_exit() -> Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn draw<B: Backend>(terminal: &mut Terminal<B>, screen: &Screen) -> Result<()> {
    terminal.draw(|f| render(f, screen))?;
    Ok(())
}

/// Maps raw terminal input onto game actions.
pub fn interpret_event(event: Event) -> Option<UserEvent> {
    match event {
        Event::Key(key) => interpret_key(key),
        Event::Resize(_, _) => Some(UserEvent::Redraw),
        _ => None,
    }
}

fn interpret_key(key: KeyEvent) -> Option<UserEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        // raw mode swallows SIGINT
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(UserEvent::Quit)
        }
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('s') => Some(UserEvent::Spin),
        KeyCode::Char('q') | KeyCode::Esc => Some(UserEvent::Quit),
        _ => None,
    }
}

fn render(f: &mut Frame, screen: &Screen) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(11),
            Constraint::Length(5),
            Constraint::Length(6),
            Constraint::Min(3),
        ])
        .split(f.area());

    let title = Paragraph::new("🎰 One-Armed Bandit 🎰")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    draw_reels(f, chunks[1], screen);
    draw_controls(f, chunks[2], screen);
    draw_statistics(f, chunks[3], screen);

    let help = Paragraph::new("space/enter/s spin | q/Esc quit")
        .block(Block::default().borders(Borders::ALL).title("Help"));
    f.render_widget(help, chunks[4]);
}

fn draw_reels(f: &mut Frame, area: Rect, screen: &Screen) {
    let outer = Block::default().borders(Borders::ALL).title("Reels");
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(inner);

    for column in Column::ALL {
        let cells = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(columns[column.index()]);
        for tier in Tier::ALL {
            let fruit = screen.icon(column, tier);
            let border = if tier == Tier::Middle {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let cell = Paragraph::new(format!("{} {}", fruit.emoji(), fruit.name()))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).border_style(border));
            f.render_widget(cell, cells[tier.index()]);
        }
    }
}

fn draw_controls(f: &mut Frame, area: Rect, screen: &Screen) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let (label, colour) = if screen.spin_enabled {
        ("SPIN", Color::Blue)
    } else {
        ("SPINNING...", Color::Red)
    };
    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(Style::default().bg(colour).fg(Color::White).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(button, chunks[0]);

    let result_block = Block::default().borders(Borders::ALL).title("Result");
    let result = match screen.result {
        Some(Outcome::Win) => Paragraph::new("🎉 WIN! 🎉")
            .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        Some(Outcome::Lose) => {
            Paragraph::new("LOSE").style(Style::default().fg(Color::Red))
        }
        None => Paragraph::new(""),
    };
    f.render_widget(
        result.alignment(Alignment::Center).block(result_block),
        chunks[1],
    );
}

fn draw_statistics(f: &mut Frame, area: Rect, screen: &Screen) {
    let lines = vec![
        Line::from(format!("Total spins: {}", screen.total_spins)),
        Line::from(format!("Wins: {}", screen.wins)),
        Line::from(format!("Losses: {}", screen.losses)),
        Line::from(format!("Win ratio: {}%", screen.win_ratio)),
    ];
    let stats = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Statistics"));
    f.render_widget(stats, area);
}
