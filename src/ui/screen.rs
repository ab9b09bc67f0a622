use crate::core::prelude::*;
use crate::input::event::{AppEvent, EventHandler};
use crate::ui::terminal::TerminalManager;
use crate::ui::view::{ChatView, Flow};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::Stdout;

pub type TerminalBackend = Terminal<CrosstermBackend<Stdout>>;

pub struct ScreenManager {
    terminal: TerminalBackend,
    terminal_mgr: TerminalManager,
    view: ChatView,
    events: EventHandler,
}

impl ScreenManager {
    pub async fn new(config: &Config) -> Result<Self> {
        let mut terminal_mgr = TerminalManager::new();
        terminal_mgr.setup().await?;

        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        let mut view = ChatView::new(config);
        view.resize(terminal.size()?);

        Ok(Self {
            terminal,
            terminal_mgr,
            view,
            events: EventHandler::new(config.poll_rate),
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let result = self.event_loop().await;
        self.events.shutdown().await;
        self.terminal_mgr.cleanup().await?;
        result
    }

    async fn event_loop(&mut self) -> Result<()> {
        self.render()?;
        while let Some(event) = self.events.next().await {
            match event {
                AppEvent::Input(key) => {
                    if self.view.handle_key(key) == Flow::Quit {
                        log::info!("Quit requested");
                        return Ok(());
                    }
                }
                AppEvent::Resize(width, height) => {
                    self.terminal.resize(Rect::new(0, 0, width, height))?;
                    self.view.resize(Rect::new(0, 0, width, height));
                }
                AppEvent::Tick => self.view.tick(),
            }

            self.render()?;
        }
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        let view = &mut self.view;
        self.terminal.draw(|frame| view.draw(frame))?;
        Ok(())
    }
}
