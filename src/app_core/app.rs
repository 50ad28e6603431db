use crate::{
    SessionController,
    config::{self, AppConfig},
    database::HistoryLog,
    key_handler::{self, Action, MoveDirection},
    overwrite_line,
    player::RodioBackend,
    power::SystemPower,
    resolver::TrackResolver,
    session::{TICK_INTERVAL, Transition},
    tui,
    ui_state::{Mode, PopupType, UiState},
};
use anyhow::Result;
use ratatui::{
    DefaultTerminal,
    crossterm::event::{Event, KeyEventKind},
};
use std::{path::PathBuf, time::Instant};

pub struct Recite {
    ui: UiState,
    controller: SessionController,
    config: AppConfig,
    config_path: PathBuf,
}

impl Recite {
    pub fn new() -> Result<Self> {
        let config_path = config::default_path()?;
        let config = AppConfig::load_or_create(&config_path)?;

        let player = RodioBackend::new()?;
        let resolver =
            TrackResolver::with_default_roots().with_naming(&config.folder, &config.reciter);
        let history = HistoryLog::open_default()?;

        let mut controller = SessionController::new(
            Box::new(player),
            resolver,
            Box::new(history),
            Box::new(SystemPower),
        );
        controller.set_shutdown_on_finish(config.shutdown);

        Ok(Recite {
            ui: UiState::new(&config),
            controller,
            config,
            config_path,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ratatui::init();
        terminal.clear()?;

        let result = self.main_loop(&mut terminal);

        ratatui::restore();

        if self.controller.is_active() {
            tracing::warn!("Exiting mid-session, session not recorded");
        }
        self.save_config();
        overwrite_line("Goodbye!\n");

        result
    }

    // MAIN ROUTINE
    fn main_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        let mut last_tick = Instant::now();

        loop {
            // Blocks for at most one poll interval
            match key_handler::next_event()? {
                Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if let Some(action) = key_handler::handle_key_event(key, &self.ui) {
                        if let Err(e) = self.handle_action(action) {
                            self.ui.set_error(e);
                        }
                    }
                }
                _ => (),
            }

            self.poll_session();

            while last_tick.elapsed() >= TICK_INTERVAL {
                self.controller.tick();
                last_tick += TICK_INTERVAL;
            }

            self.ui.sync_snapshot(self.controller.snapshot());
            terminal.draw(|f| tui::render(f, &mut self.ui))?;

            if self.ui.get_mode() == Mode::QUIT {
                break;
            }
        }

        Ok(())
    }

    fn poll_session(&mut self) {
        match self.controller.poll() {
            Ok(transition) => {
                if let Transition::Completed { shutdown: true, .. } = transition {
                    self.ui.set_mode(Mode::QUIT);
                }
                self.ui.apply_transition(&transition);
            }
            Err(e) => self.ui.set_error(e.into()),
        }
    }

    fn save_config(&mut self) {
        self.config = self.ui.to_config(&self.config);

        match self.config.save_to_file(&self.config_path) {
            Ok(()) => tracing::info!("Config saved"),
            Err(e) => tracing::error!("Could not save config: {e}"),
        }
    }
}

impl Recite {
    #[rustfmt::skip]
    fn handle_action(&mut self, action: Action) -> Result<()> {
        match action {
            // Player
            Action::TogglePlay      => self.toggle_play()?,
            Action::Stop            => {
                let transition = self.controller.stop();
                self.ui.apply_transition(&transition);
            }

            // Controls
            Action::SelectNext      => self.ui.select_next(),
            Action::SelectPrev      => self.ui.select_prev(),
            Action::FocusNext       => self.ui.toggle_pane(),
            Action::RepeatInput(k)  => self.ui.input_repeat(k),
            Action::ToggleShutdown  => {
                self.ui.toggle_shutdown();
                self.controller.set_shutdown_on_finish(self.ui.shutdown);
            }

            // Popups
            Action::ViewHistory     => self.view_history()?,
            Action::PopupScroll(d)  => self.ui.scroll_popup(d == MoveDirection::Down),
            Action::SoftReset       => self.ui.soft_reset(),

            Action::QUIT            => self.ui.set_mode(Mode::QUIT),
        }
        Ok(())
    }

    fn toggle_play(&mut self) -> Result<()> {
        self.controller.set_shutdown_on_finish(self.ui.shutdown);

        let transition = self
            .controller
            .toggle(self.ui.selection, &self.ui.repeat_text())?;

        self.ui.apply_transition(&transition);
        Ok(())
    }

    fn view_history(&mut self) -> Result<()> {
        let records = self.controller.history()?;
        self.ui.show_popup(PopupType::History(records));
        Ok(())
    }
}
