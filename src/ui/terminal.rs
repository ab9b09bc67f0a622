use crate::core::constants::APP_TITLE;
use crate::core::prelude::*;
use crossterm::{
    cursor, execute,
    style::ResetColor,
    terminal::{
        self, disable_raw_mode, enable_raw_mode, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use std::io::Stdout;

/// Owns raw mode and the alternate screen for the lifetime of the UI.
pub struct TerminalManager {
    stdout: Stdout,
    raw_mode_enabled: bool,
}

impl TerminalManager {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            raw_mode_enabled: false,
        }
    }

    pub async fn setup(&mut self) -> Result<()> {
        enable_raw_mode()?;
        self.raw_mode_enabled = true;
        execute!(
            self.stdout,
            EnterAlternateScreen,
            terminal::Clear(ClearType::All),
            terminal::DisableLineWrap,
            terminal::SetTitle(APP_TITLE),
            cursor::Hide
        )?;
        log::debug!("Terminal set up (raw mode, alternate screen)");
        Ok(())
    }

    pub async fn cleanup(&mut self) -> Result<()> {
        log::info!("Starting terminal cleanup...");

        if self.raw_mode_enabled {
            disable_raw_mode()?;
            self.raw_mode_enabled = false;
        }

        execute!(
            self.stdout,
            ResetColor,
            terminal::Clear(ClearType::All),
            LeaveAlternateScreen,
            terminal::EnableLineWrap,
            cursor::MoveTo(0, 0),
            cursor::Show
        )?;

        self.stdout.flush()?;
        log::info!("Terminal restored");
        Ok(())
    }
}

impl Default for TerminalManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalManager {
    fn drop(&mut self) {
        if self.raw_mode_enabled {
            let _ = disable_raw_mode();
            let _ = execute!(
                std::io::stdout(),
                terminal::LeaveAlternateScreen,
                cursor::Show,
                ResetColor
            );
            log::warn!("Emergency terminal cleanup in destructor");
        }
    }
}

/// Best-effort restore for the panic hook, where no manager is reachable.
pub fn restore_after_panic() {
    let _ = disable_raw_mode();
    let _ = execute!(
        std::io::stdout(),
        LeaveAlternateScreen,
        cursor::Show,
        ResetColor
    );
}
