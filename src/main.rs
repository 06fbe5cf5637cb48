//! Zellij plugin entry point.
//!
//! This binary is a thin shim: it translates host events into
//! [`emoji_catalog::Event`]s, feeds them to [`handle_event`], and executes the
//! returned [`Action`]s through the `zellij-tile` API. Everything else lives
//! in the library so it can be tested off-host.

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use emoji_catalog::source::FetchPurpose;
use emoji_catalog::{handle_event, Action, AppState, Config, Event, InputMode};

register_plugin!(State);

struct State {
    app: AppState,
    data_url: String,
}

impl Default for State {
    fn default() -> Self {
        let config = Config::default();
        Self {
            app: emoji_catalog::initialize(&config),
            data_url: config.data_url,
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        let tracing_ready = emoji_catalog::observability::init_tracing(&config.trace_level);

        let _guard = tracing::debug_span!("plugin_load").entered();
        tracing::debug!(tracing_ready, ?config, "parsed configuration");

        self.app = emoji_catalog::initialize(&config);
        self.data_url = config.data_url;

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::Timer,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete, waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::event_name(&event);
        let _guard = tracing::debug_span!("plugin_update", event_type = event_name).entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                let Some(purpose) = FetchPurpose::from_context(&context) else {
                    tracing::debug!(status, "ignoring web response without a purpose tag");
                    return false;
                };
                tracing::debug!(status, %purpose, bytes = body.len(), "web response");
                Event::FetchCompleted {
                    purpose,
                    status,
                    body,
                }
            }
            zellij_tile::prelude::Event::Timer(secs) => Event::Timer { secs },
            zellij_tile::prelude::Event::PermissionRequestResult(status) => match status {
                PermissionStatus::Granted => {
                    tracing::debug!("web access granted");
                    Event::Start
                }
                PermissionStatus::Denied => {
                    tracing::warn!("web access denied, the catalog cannot be fetched");
                    return false;
                }
            },
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled");
                for action in &actions {
                    self.execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        emoji_catalog::ui::render(&self.app, rows, cols);
    }
}

impl State {
    const fn event_name(event: &zellij_tile::prelude::Event) -> &'static str {
        match event {
            zellij_tile::prelude::Event::Key(_) => "Key",
            zellij_tile::prelude::Event::WebRequestResult(..) => "WebRequestResult",
            zellij_tile::prelude::Event::Timer(_) => "Timer",
            zellij_tile::prelude::Event::PermissionRequestResult(_) => "PermissionRequestResult",
            _ => "Other",
        }
    }

    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if self.app.notice.is_some() {
            return Some(Event::DismissNotice);
        }

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                _ => None,
            };
        }

        match self.app.input_mode {
            InputMode::Search => Some(match key.bare_key {
                BareKey::Enter => Event::SubmitSearch,
                BareKey::Esc => Event::ExitSearch,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            }),
            InputMode::Normal => Some(match key.bare_key {
                BareKey::Char('r') => Event::LoadCatalog,
                BareKey::Char('a') => Event::SortAscending,
                BareKey::Char('d') => Event::SortDescending,
                BareKey::Char('/') => Event::SearchMode,
                BareKey::Char('c') => Event::NextCategory,
                BareKey::Char('C') => Event::PreviousCategory,
                BareKey::Down | BareKey::Char('j') => Event::KeyDown,
                BareKey::Up | BareKey::Char('k') => Event::KeyUp,
                BareKey::Char('q') => Event::CloseFocus,
                _ => return None,
            }),
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => hide_self(),
            Action::Fetch { purpose } => {
                tracing::info!(url = %self.data_url, %purpose, "fetching catalog");
                web_request(
                    &self.data_url,
                    HttpVerb::Get,
                    BTreeMap::new(),
                    vec![],
                    purpose.to_context(),
                );
            }
            Action::SetTimeout { secs } => set_timeout(*secs),
        }
    }
}
