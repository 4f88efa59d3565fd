pub mod theme;
pub mod widgets;

use crate::state::AppState;
use checkers::{BoardConfig, Side};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    Terminal,
};
use self::theme::Theme;
use self::widgets::{
    board_inner, BoardWidget, ControlsPanel, GameInfoPanel, SQUARE_HEIGHT, SQUARE_WIDTH,
};
use std::io;
use std::time::Duration;

const BOARD_SIZE: u8 = 8;

/// Split the frame into the board area and the two side panels.
fn layout_chunks(area: Rect) -> (Rect, Rect, Rect) {
    let board_width = u16::from(BOARD_SIZE) * SQUARE_WIDTH + 2;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(board_width), Constraint::Length(34)])
        .split(area);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(10)])
        .split(chunks[1]);

    (chunks[0], right[0], right[1])
}

/// Run the TUI application. Returns the winning side, or `None` if the game
/// was quit before either side ran out of pieces.
pub fn run_app(theme: Theme) -> anyhow::Result<Option<Side>> {
    // The click surface is the board in terminal cells, one unit per cell.
    let config = BoardConfig::new(
        BOARD_SIZE,
        u16::from(BOARD_SIZE) * SQUARE_WIDTH,
        u16::from(BOARD_SIZE) * SQUARE_HEIGHT,
    )?;
    let mut app_state = AppState::new(config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_game_loop(&mut terminal, &mut app_state, &theme);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_game_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app_state: &mut AppState,
    theme: &Theme,
) -> anyhow::Result<Option<Side>> {
    let mut board_area = Rect::default();

    let winner = loop {
        terminal.draw(|f| {
            let (board, controls, info) = layout_chunks(f.area());
            board_area = board;

            f.render_widget(BoardWidget::new(app_state, theme), board);
            f.render_widget(ControlsPanel::new(theme), controls);
            f.render_widget(GameInfoPanel::new(app_state, theme), info);
        })?;

        // One winner poll per tick; the loop, not the board, ends the game.
        if let Some(side) = app_state.winner() {
            tracing::info!(%side, "game over");
            break Some(side);
        }

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.code == KeyCode::Char('q') {
                        break None;
                    }
                }
                Event::Mouse(mouse) => {
                    if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                        if let Some((x, y)) =
                            surface_position(board_area, mouse.column, mouse.row)
                        {
                            app_state.click(x, y);
                        }
                    }
                }
                _ => {}
            }
        }
    };

    Ok(winner)
}

/// Translate a terminal position into board-surface coordinates, or `None`
/// if the press landed outside the drawn board.
fn surface_position(board_area: Rect, column: u16, row: u16) -> Option<(u16, u16)> {
    let inner = board_inner(board_area);
    if column < inner.x || row < inner.y {
        return None;
    }

    let x = column - inner.x;
    let y = row - inner.y;
    if x >= u16::from(BOARD_SIZE) * SQUARE_WIDTH || y >= u16::from(BOARD_SIZE) * SQUARE_HEIGHT {
        return None;
    }

    Some((x, y))
}
