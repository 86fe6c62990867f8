//! Interactive tour of the stacked grid.
//!
//! `n` cycles between the basic, framed and expanding layouts; `q` quits.
//! Set `STACKGRID_LOG=/path/to/file.jsonl` to capture layout logs.

use std::io::{self, Write};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::style::Color;
use crossterm::{execute, terminal};

use stackgrid::{
    AnsiRenderer, FileSink, Frame, Grid, GridOptions, HostEvent, Logger, Placement,
    RendererSettings, Result, Size, Text, Viewport,
};

const ACCENT: Color = Color::Rgb {
    r: 0x87,
    g: 0x4b,
    b: 0xfd,
};

fn item(label: &str) -> Text {
    Text::new(label).with_background(ACCENT)
}

fn options(logger: &Option<Logger>) -> GridOptions {
    let mut options = GridOptions::default();
    options.logger = logger.clone();
    options
}

fn basic_grid(logger: &Option<Logger>) -> Grid {
    Grid::with_options(options(logger))
        .with_item(item("Item 1"), Placement::column(0))
        .with_item(item("Item 2"), Placement::column(1))
        .with_item(item("Item 3"), Placement::column(2))
}

fn framed_grid(logger: &Option<Logger>) -> Grid {
    Grid::with_options(options(logger))
        .with_item(Frame::new(item("Framed Item 1")), Placement::column(0))
        .with_item(Frame::new(item("Framed Item 2")), Placement::column(1))
        .with_item(Frame::new(item("Framed Item 3")), Placement::column(2))
        .with_item(Frame::new(item("Framed Item 4")), Placement::column(1))
}

fn expanding_grid(logger: &Option<Logger>) -> Grid {
    let nested = Grid::with_options(options(logger))
        .with_item(Frame::new(item("Nested A")), Placement::column(0))
        .with_item(Frame::new(item("Nested B")), Placement::column(1));

    Grid::with_options(options(logger))
        .with_item(Frame::new(item("Framed Item 1")), Placement::column(0))
        .with_item(Frame::new(item("Framed Item 2")), Placement::column(1).expand())
        .with_item(Frame::new(nested), Placement::column(1).expand())
        .with_item(Frame::new(item("Framed Item 4")), Placement::column(1))
        .with_item(Frame::new(item("Framed Item 5")), Placement::column(2))
        .with_item(Frame::new(item("Framed Item 6")), Placement::column(2))
        .with_item(
            Frame::new(item("Framed Item 7")).with_border_color(Color::DarkCyan),
            Placement::column(2),
        )
}

fn main() -> Result<()> {
    let logger = match std::env::var("STACKGRID_LOG") {
        Ok(path) => Some(Logger::new(FileSink::new(path, 1 << 20)?)),
        Err(_) => None,
    };
    let builders: [fn(&Option<Logger>) -> Grid; 3] = [basic_grid, framed_grid, expanding_grid];
    let mut current = 0;

    let renderer = AnsiRenderer::new(RendererSettings {
        restore_cursor: None,
        hide_cursor: true,
    });
    let mut viewport = Viewport::new(builders[current](&logger), renderer);
    if let Some(logger) = &logger {
        viewport = viewport.with_logger(logger.clone());
    }

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, terminal::EnterAlternateScreen)?;

    let (width, height) = terminal::size()?;
    viewport.handle(HostEvent::Resize(Size::new(width, height)));

    let outcome = run(&mut viewport, &mut stdout, &builders, &mut current, &logger);

    execute!(stdout, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    outcome
}

fn run(
    viewport: &mut Viewport,
    stdout: &mut impl Write,
    builders: &[fn(&Option<Logger>) -> Grid],
    current: &mut usize,
    logger: &Option<Logger>,
) -> Result<()> {
    loop {
        if viewport.paint_pending() {
            viewport.paint(stdout)?;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char('n') => {
                    *current = (*current + 1) % builders.len();
                    viewport.replace_grid(builders[*current](logger));
                }
                _ => {}
            },
            other => {
                viewport.handle(other);
            }
        }
    }
}
