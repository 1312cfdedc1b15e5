use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::action::Action;
use crate::config::{Config, parse_key};
use crate::system::procfs::ProcFs;
use crate::system::sampler::SampleLoop;
use crate::system::snapshot::Snapshot;
use crate::ui::theme::{ColorSupport, Theme, resolve_color_support};

#[derive(Debug, Clone)]
pub struct ResolvedKeybinds {
    pub quit: KeyCode,
}

impl ResolvedKeybinds {
    pub fn from_config(kb: &crate::config::KeybindsConfig) -> Self {
        Self {
            quit: parse_key(&kb.quit).unwrap_or(KeyCode::Char('q')),
        }
    }
}

pub fn key_label(code: KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "Bksp".to_string(),
        KeyCode::Delete => "Del".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        _ => "?".to_string(),
    }
}

pub struct App {
    /// Checked once per loop iteration; cleared by [`Action::Quit`].
    pub running: bool,
    pub sampler: SampleLoop<ProcFs>,
    pub snapshot: Snapshot,
    pub theme: Theme,
    pub color_support: ColorSupport,
    pub keybinds: ResolvedKeybinds,
}

impl App {
    /// The snapshot stays empty until the first tick.
    pub fn new(config: Config) -> Self {
        let color_support = resolve_color_support(&config.general.color_support);
        let theme = Theme::from_config(&config.colors, color_support);
        let keybinds = ResolvedKeybinds::from_config(&config.keybinds);
        let sampler = SampleLoop::new(ProcFs::new(config.general.proc_root));

        Self {
            running: true,
            sampler,
            snapshot: Snapshot::default(),
            theme,
            color_support,
            keybinds,
        }
    }

    pub fn refresh_data(&mut self) {
        self.snapshot = self.sampler.tick();
    }

    pub fn map_key(&self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Action::Quit;
        }
        if key.code == self.keybinds.quit {
            return Action::Quit;
        }
        Action::None
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => {
                tracing::debug!("quit requested");
                self.running = false;
            }
            Action::None => {}
        }
    }

    pub fn quit_key_label(&self) -> String {
        key_label(self.keybinds.quit)
    }
}
