use std::path::PathBuf;
use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use tracing::{debug, info, warn};

use crate::config::{Config, PanelVariant};
use crate::core::{parse_command, Action, Command, NotifyLevel};
use crate::modules::approvals::{AcknowledgeOnly, ReviewBackend};
use crate::modules::review_dialog::{Acknowledgment, DialogEvent, ReviewDialog};
use crate::modules::tiles::{summary_tiles, SummaryTile, TileKind};
use crate::store::FixtureStore;
use crate::ui::layout;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warn,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct CommandBar {
    pub input: String,
    pub last: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub since: Instant,
}

/// Dashboard session state. The fixtures are borrowed for the whole session;
/// the review dialog is the only thing that changes in response to the data.
pub struct App<'a> {
    pub fixtures: &'a FixtureStore,
    pub config: Config,
    pub dialog: ReviewDialog,
    pub focus: TileKind,
    pub selections: [usize; 4],
    pub panel: PanelVariant,
    pub input_mode: InputMode,
    pub command: CommandBar,
    pub status: Option<StatusMessage>,
    pub export_dir: PathBuf,
    pub help_open: bool,
    pub should_quit: bool,
    backend: Box<dyn ReviewBackend + 'a>,
}

impl<'a> App<'a> {
    pub fn new(fixtures: &'a FixtureStore, config: Config) -> Self {
        Self::with_backend(fixtures, config, Box::new(AcknowledgeOnly::new()))
    }

    pub fn with_backend(
        fixtures: &'a FixtureStore,
        config: Config,
        backend: Box<dyn ReviewBackend + 'a>,
    ) -> Self {
        let export_dir = config
            .export_dir
            .clone()
            .unwrap_or_else(crate::modules::export::default_export_dir);
        Self {
            fixtures,
            panel: config.panel,
            config,
            dialog: ReviewDialog::Closed,
            focus: TileKind::Revenue,
            selections: [0; 4],
            input_mode: InputMode::Normal,
            command: CommandBar::default(),
            status: None,
            export_dir,
            help_open: false,
            should_quit: false,
            backend,
        }
    }

    pub fn tiles(&self) -> [SummaryTile; 4] {
        summary_tiles(self.fixtures)
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            since: Instant::now(),
        });
    }

    pub fn status_text(&self) -> Option<(&str, StatusLevel)> {
        self.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.level))
    }

    pub fn on_tick(&mut self) {
        self.expire_status(Instant::now());
    }

    /// Drop the status notice once it is older than `notice_secs`.
    pub fn expire_status(&mut self, now: Instant) {
        let ttl = Duration::from_secs(self.config.notice_secs);
        if let Some(status) = self.status.as_ref() {
            if now.saturating_duration_since(status.since) > ttl {
                self.status = None;
            }
        }
    }

    // === Tile focus and selection ===

    pub fn cycle_focus(&mut self, forward: bool) {
        self.focus = if forward {
            self.focus.next()
        } else {
            self.focus.prev()
        };
    }

    pub fn current_selection(&self) -> usize {
        self.selections[self.focus.index()]
    }

    fn tile_len(&self, kind: TileKind) -> usize {
        match kind {
            TileKind::Revenue => self.fixtures.customers().len(),
            TileKind::Deliveries => self.fixtures.deliveries().len(),
            TileKind::Reviews => self.fixtures.reviews().len(),
            TileKind::Support => self.fixtures.supports().len(),
        }
    }

    pub fn move_selection_up(&mut self) {
        let selection = &mut self.selections[self.focus.index()];
        *selection = selection.saturating_sub(1);
    }

    pub fn move_selection_down(&mut self) {
        let len = self.tile_len(self.focus);
        let selection = &mut self.selections[self.focus.index()];
        if *selection + 1 < len {
            *selection += 1;
        }
    }

    /// Focus `kind` and select row `index` if it exists.
    pub fn select_row(&mut self, kind: TileKind, index: usize) -> bool {
        self.focus = kind;
        if index < self.tile_len(kind) {
            self.selections[kind.index()] = index;
            true
        } else {
            false
        }
    }

    /// Activate the inline control of the focused row, if it has one.
    pub fn activate_selected(&self) -> Action {
        let tiles = self.tiles();
        let tile = &tiles[self.focus.index()];
        match tile.activate(self.current_selection()) {
            Some(event) => Action::Review(event),
            None => Action::None,
        }
    }

    // === Mouse ===

    /// Left click at (`col`, `row`) on a frame of `size`. While the dialog is
    /// open only its buttons respond.
    pub fn handle_click(&mut self, size: Rect, col: u16, row: u16) {
        if self.help_open || self.input_mode == InputMode::Command {
            return;
        }
        if self.dialog.is_open() {
            let controls = layout::dialog_controls(size);
            if let Some(event) = layout::dialog_hit(&controls, col, row) {
                self.apply_action(Action::Review(event));
            }
            return;
        }

        let areas = layout::areas(size);
        let Some(hit) = layout::hit_test(&areas, &self.selections, col, row) else {
            return;
        };
        self.focus = hit.kind;
        let Some(index) = hit.row else {
            return;
        };
        if self.select_row(hit.kind, index) && hit.on_cog {
            let action = self.activate_selected();
            self.apply_action(action);
        }
    }

    /// Wheel over a tile moves that tile's selection.
    pub fn handle_scroll(&mut self, size: Rect, col: u16, row: u16, up: bool) {
        if self.help_open || self.dialog.is_open() || self.input_mode == InputMode::Command {
            return;
        }
        let areas = layout::areas(size);
        let Some(hit) = layout::hit_test(&areas, &self.selections, col, row) else {
            return;
        };
        self.focus = hit.kind;
        if up {
            self.move_selection_up();
        } else {
            self.move_selection_down();
        }
    }

    // === Review dialog ===

    /// Feed `event` to the dialog. Approve and deny are delivered to the
    /// backend first; if it refuses, the dialog stays open with a warning.
    pub fn handle_dialog(&mut self, event: DialogEvent) -> Option<Acknowledgment> {
        match &event {
            DialogEvent::Approve | DialogEvent::Deny => {
                let review = self.dialog.review()?.clone();
                let decision = if event == DialogEvent::Approve {
                    Acknowledgment::Approved
                } else {
                    Acknowledgment::Denied
                };
                if let Err(err) = self.backend.submit(&review, decision) {
                    warn!(review_id = review.id(), %err, "review decision not delivered");
                    self.set_status(format!("{err}; try again"), StatusLevel::Warn);
                    return None;
                }
                let ack = self.dialog.apply(&event, self.fixtures.reviews());
                if let Some(ack) = ack {
                    info!(review_id = review.id(), decision = ack.as_str(), "review closed");
                    self.set_status(
                        format!("{}: {}", review.product(), ack.as_str()),
                        StatusLevel::Info,
                    );
                }
                ack
            }
            DialogEvent::SelectReview(id) => {
                self.dialog.apply(&event, self.fixtures.reviews());
                match self.fixtures.reviews().iter().position(|r| r.id() == id.as_str()) {
                    Some(index) => {
                        debug!(review_id = %id, "review dialog opened");
                        self.select_row(TileKind::Reviews, index);
                    }
                    None => {
                        self.set_status(format!("Unknown review {id}"), StatusLevel::Error);
                    }
                }
                None
            }
            DialogEvent::Dismiss => {
                if self.dialog.is_open() {
                    debug!("review dialog dismissed");
                }
                self.dialog.apply(&event, self.fixtures.reviews())
            }
        }
    }

    // === Command line ===

    pub fn enter_command(&mut self) {
        self.input_mode = InputMode::Command;
        self.command.input.clear();
    }

    pub fn exit_command(&mut self) {
        self.input_mode = InputMode::Normal;
        self.command.input.clear();
    }

    /// Put the last executed command back on the command line.
    pub fn recall_last_command(&mut self) {
        if let Some(last) = &self.command.last {
            self.command.input = last.clone();
        }
    }

    pub fn apply_command(&mut self) {
        let input = self.command.input.trim().to_string();
        if input.is_empty() {
            self.exit_command();
            return;
        }

        let cmd = parse_command(&input);
        let action = self.execute_command(&cmd);
        self.command.last = Some(input);
        self.exit_command();
        self.apply_action(action);
    }

    pub fn execute_command(&mut self, cmd: &Command) -> Action {
        match cmd {
            Command::Review(id) => Action::Review(DialogEvent::SelectReview(id.clone())),
            Command::Approve => Action::Review(DialogEvent::Approve),
            Command::Deny => Action::Review(DialogEvent::Deny),
            Command::Dismiss => Action::Review(DialogEvent::Dismiss),
            Command::Map => Action::ShowPanel(PanelVariant::Map),
            Command::Trends => Action::ShowPanel(PanelVariant::Trends),
            Command::Export => Action::Export,
            Command::Help => Action::ToggleHelp,
            Command::Quit => Action::Quit,
            Command::Unknown(input) => {
                Action::Notify(format!("Unknown command: {input}"), NotifyLevel::Error)
            }
        }
    }

    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Review(event) => {
                self.handle_dialog(event);
            }
            Action::ShowPanel(panel) => self.panel = panel,
            Action::TogglePanel => self.panel = self.panel.toggled(),
            Action::Export => {
                let action = crate::modules::export::export_snapshot(self.fixtures, &self.export_dir);
                self.apply_action(action);
            }
            Action::ToggleHelp => self.help_open = !self.help_open,
            Action::Notify(msg, level) => {
                let level = match level {
                    NotifyLevel::Info => StatusLevel::Info,
                    NotifyLevel::Warn => StatusLevel::Warn,
                    NotifyLevel::Error => StatusLevel::Error,
                };
                self.set_status(msg, level);
            }
            Action::Quit => self.should_quit = true,
        }
    }
}
