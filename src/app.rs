//! Application state and update logic.
//!
//! `App` owns the in-memory plate list and reacts to two inputs: key events
//! from the terminal and [`ApiUpdate`] messages from request workers. The
//! backend is the system of record; every successful mutation folds the
//! server's response into the local list.

use std::sync::mpsc::{self, Receiver, Sender};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::ListState;

use crate::api::{self, ApiClient, ApiUpdate};
use crate::constants;
use crate::state::{FoodDraft, FoodForm, FoodPlate, ModalState, Toast, ToastKind};

/// Progress of the initial collection fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadPhase {
    /// Fetch in flight; the list renders a loading banner.
    Loading,
    /// Collection arrived at least once.
    Ready,
    /// Fetch failed; the reason is shown with a retry hint.
    Failed(String),
}

/// The draft stashed while a create/update is in flight, so a failure can
/// reopen the modal with the user's input intact. A newer submission
/// overwrites an older stash (last write wins, matching the backend race).
enum PendingSubmit {
    Add(FoodDraft),
    Edit {
        draft: FoodDraft,
        id: u64,
        available: bool,
    },
}

/// Dashboard state.
pub struct App {
    /// In-memory plate list; at most one entry per id.
    pub plates: Vec<FoodPlate>,
    /// List selection driving the edit/delete targets.
    pub list_state: ListState,
    /// Which modal is on screen, if any.
    pub modal: ModalState,
    /// Transient notification, if any.
    pub toast: Option<Toast>,
    /// Progress of the initial load.
    pub load: LoadPhase,
    /// Set once the user asks to quit.
    pub should_quit: bool,
    pending: Option<PendingSubmit>,
    client: ApiClient,
    updates_tx: Sender<ApiUpdate>,
    updates_rx: Receiver<ApiUpdate>,
}

impl App {
    /// Creates the app and fires the initial collection fetch.
    pub fn new(client: ApiClient) -> Self {
        let (updates_tx, updates_rx) = mpsc::channel();
        let mut app = Self {
            plates: Vec::new(),
            list_state: ListState::default(),
            modal: ModalState::Closed,
            toast: None,
            load: LoadPhase::Loading,
            should_quit: false,
            pending: None,
            client,
            updates_tx,
            updates_rx,
        };
        app.request_load();
        app
    }

    /// Fetches the collection from scratch.
    pub fn request_load(&mut self) {
        self.load = LoadPhase::Loading;
        api::spawn_load(&self.client, &self.updates_tx);
    }

    /// The plate the selection points at.
    pub fn selected_plate(&self) -> Option<&FoodPlate> {
        self.plates.get(self.list_state.selected()?)
    }

    /// Advances time: drains worker results and ages the toast.
    pub fn on_tick(&mut self) {
        while let Ok(update) = self.updates_rx.try_recv() {
            self.apply_update(update);
        }
        if let Some(toast) = &mut self.toast {
            if !toast.tick() {
                self.toast = None;
            }
        }
    }

    /// Routes a key press to the modal or the list view.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.modal.is_open() {
            self.handle_modal_key(key);
        } else {
            self.handle_list_key(key);
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('a') => self.modal = ModalState::Add(FoodForm::new()),
            KeyCode::Char('e') => {
                if let Some(plate) = self.selected_plate() {
                    self.modal = ModalState::edit(plate);
                }
            }
            KeyCode::Char('d') => {
                if let Some(plate) = self.selected_plate() {
                    api::spawn_delete(&self.client, &self.updates_tx, plate.id);
                }
            }
            KeyCode::Char('r') => {
                if matches!(self.load, LoadPhase::Failed(_)) {
                    self.request_load();
                }
            }
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            _ => {}
        }
    }

    fn handle_modal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.modal = ModalState::Closed,
            KeyCode::Enter => self.submit_modal(),
            KeyCode::Tab | KeyCode::Down => self.with_form(FoodForm::focus_next),
            KeyCode::BackTab | KeyCode::Up => self.with_form(FoodForm::focus_prev),
            _ => self.with_form(|form| form.handle_key(key)),
        }
    }

    fn with_form(&mut self, f: impl FnOnce(&mut FoodForm)) {
        match &mut self.modal {
            ModalState::Add(form) | ModalState::Edit { form, .. } => f(form),
            ModalState::Closed => {}
        }
    }

    /// Closes the modal and hands its draft to a request worker, stashing the
    /// draft so a failure can reopen the modal.
    fn submit_modal(&mut self) {
        match std::mem::take(&mut self.modal) {
            ModalState::Closed => {}
            ModalState::Add(form) => {
                let draft = form.to_draft();
                self.pending = Some(PendingSubmit::Add(draft.clone()));
                api::spawn_create(&self.client, &self.updates_tx, draft);
            }
            ModalState::Edit {
                form,
                id,
                available,
            } => {
                let draft = form.to_draft();
                self.pending = Some(PendingSubmit::Edit {
                    draft: draft.clone(),
                    id,
                    available,
                });
                api::spawn_update(
                    &self.client,
                    &self.updates_tx,
                    draft.into_plate(id, available),
                );
            }
        }
    }

    fn reopen_pending(&mut self) {
        match self.pending.take() {
            Some(PendingSubmit::Add(draft)) => {
                self.modal = ModalState::Add(FoodForm::from_draft(&draft));
            }
            Some(PendingSubmit::Edit {
                draft,
                id,
                available,
            }) => {
                self.modal = ModalState::Edit {
                    form: FoodForm::from_draft(&draft),
                    id,
                    available,
                };
            }
            None => {}
        }
    }

    /// Folds one worker result into the local state.
    pub fn apply_update(&mut self, update: ApiUpdate) {
        match update {
            ApiUpdate::Loaded(plates) => {
                self.plates = plates;
                self.load = LoadPhase::Ready;
                self.clamp_selection();
            }
            ApiUpdate::LoadFailed(reason) => {
                self.load = LoadPhase::Failed(reason);
            }
            ApiUpdate::Created(plate) => {
                self.plates.push(plate);
                self.pending = None;
                if self.list_state.selected().is_none() {
                    self.list_state.select(Some(0));
                }
                self.toast = Some(Toast::new(constants::MSG_PLATE_ADDED, ToastKind::Success));
            }
            ApiUpdate::CreateFailed(_) | ApiUpdate::UpdateFailed(_) => {
                self.reopen_pending();
            }
            ApiUpdate::Updated(updated) => {
                if let Some(plate) = self.plates.iter_mut().find(|p| p.id == updated.id) {
                    *plate = updated;
                }
                self.pending = None;
                self.toast = Some(Toast::new(constants::MSG_PLATE_UPDATED, ToastKind::Success));
            }
            ApiUpdate::Deleted(id) => {
                self.plates.retain(|p| p.id != id);
                self.clamp_selection();
                self.toast = Some(Toast::new(constants::MSG_PLATE_DELETED, ToastKind::Info));
            }
            ApiUpdate::DeleteFailed(_) => {
                self.toast = Some(Toast::new(constants::MSG_DELETE_FAILED, ToastKind::Error));
            }
        }
    }

    fn select_next(&mut self) {
        if self.plates.is_empty() {
            return;
        }
        let next = match self.list_state.selected() {
            Some(idx) => (idx + 1) % self.plates.len(),
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    fn select_prev(&mut self) {
        if self.plates.is_empty() {
            return;
        }
        let prev = match self.list_state.selected() {
            Some(0) | None => self.plates.len() - 1,
            Some(idx) => idx - 1,
        };
        self.list_state.select(Some(prev));
    }

    fn clamp_selection(&mut self) {
        if self.plates.is_empty() {
            self.list_state.select(None);
        } else {
            let idx = self.list_state.selected().unwrap_or(0);
            self.list_state.select(Some(idx.min(self.plates.len() - 1)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    fn app() -> App {
        App::new(ApiClient::new("http://localhost:3333").expect("client"))
    }

    fn plate(id: u64, name: &str, available: bool) -> FoodPlate {
        FoodPlate {
            id,
            name: name.to_string(),
            image: format!("https://example.com/{id}.png"),
            price: "10.00".to_string(),
            description: "test plate".to_string(),
            available,
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_loaded_replaces_list_wholesale() {
        let mut app = app();
        app.plates = vec![plate(99, "Stale", true)];
        app.apply_update(ApiUpdate::Loaded(vec![
            plate(1, "Pizza", true),
            plate(2, "Pasta", false),
        ]));
        assert_eq!(app.plates.len(), 2);
        assert_eq!(app.load, LoadPhase::Ready);
        assert!(app.plates.iter().all(|p| p.id != 99));
    }

    #[test]
    fn test_load_failure_is_surfaced() {
        let mut app = app();
        app.apply_update(ApiUpdate::LoadFailed("connection refused".to_string()));
        assert_eq!(app.load, LoadPhase::Failed("connection refused".to_string()));
    }

    #[test]
    fn test_created_appends_server_record() {
        let mut app = app();
        app.apply_update(ApiUpdate::Loaded(vec![plate(1, "Pizza", true)]));
        app.apply_update(ApiUpdate::Created(plate(2, "Salad", true)));
        assert_eq!(app.plates.len(), 2);
        assert!(app.plates.iter().any(|p| p.id == 2 && p.name == "Salad"));
    }

    #[test]
    fn test_updated_replaces_by_id_keeping_availability() {
        let mut app = app();
        app.apply_update(ApiUpdate::Loaded(vec![plate(1, "Pizza", true)]));
        app.apply_update(ApiUpdate::Updated(plate(1, "Pasta", true)));
        assert_eq!(app.plates.len(), 1);
        assert_eq!(app.plates[0].name, "Pasta");
        assert!(app.plates[0].available);
    }

    #[test]
    fn test_deleted_removes_by_id() {
        let mut app = app();
        app.apply_update(ApiUpdate::Loaded(vec![plate(1, "Pizza", true)]));
        app.apply_update(ApiUpdate::Deleted(1));
        assert!(app.plates.is_empty());
        assert_eq!(app.list_state.selected(), None);
    }

    #[test]
    fn test_delete_failure_shows_fixed_toast() {
        let mut app = app();
        app.apply_update(ApiUpdate::Loaded(vec![plate(1, "Pizza", true)]));
        app.apply_update(ApiUpdate::DeleteFailed("boom".to_string()));
        assert_eq!(app.plates.len(), 1);
        let toast = app.toast.expect("toast");
        assert_eq!(toast.message, constants::MSG_DELETE_FAILED);
        assert_eq!(toast.kind, ToastKind::Error);
    }

    #[test]
    fn test_create_failure_reopens_add_modal_with_draft() {
        let mut app = app();
        app.apply_update(ApiUpdate::Loaded(vec![]));
        app.handle_key(key(KeyCode::Char('a')));
        for ch in "Tacos".chars() {
            app.handle_key(key(KeyCode::Char(ch)));
        }
        app.handle_key(key(KeyCode::Enter));
        assert!(!app.modal.is_open());

        app.apply_update(ApiUpdate::CreateFailed("500".to_string()));
        match &app.modal {
            ModalState::Add(form) => assert_eq!(form.value(0), "Tacos"),
            _ => panic!("expected reopened add modal"),
        }
        assert!(app.plates.is_empty());
    }

    #[test]
    fn test_update_failure_reopens_edit_modal() {
        let mut app = app();
        app.apply_update(ApiUpdate::Loaded(vec![plate(1, "Pizza", false)]));
        app.handle_key(key(KeyCode::Char('e')));
        assert!(app.modal.is_open());
        app.handle_key(key(KeyCode::Enter));
        assert!(!app.modal.is_open());

        app.apply_update(ApiUpdate::UpdateFailed("500".to_string()));
        match &app.modal {
            ModalState::Edit { id, available, .. } => {
                assert_eq!(*id, 1);
                assert!(!*available);
            }
            _ => panic!("expected reopened edit modal"),
        }
        assert_eq!(app.plates[0].name, "Pizza");
    }

    #[test]
    fn test_edit_key_needs_selection() {
        let mut app = app();
        app.apply_update(ApiUpdate::Loaded(vec![]));
        app.handle_key(key(KeyCode::Char('e')));
        assert!(!app.modal.is_open());
    }

    #[test]
    fn test_selection_wraps() {
        let mut app = app();
        app.apply_update(ApiUpdate::Loaded(vec![
            plate(1, "Pizza", true),
            plate(2, "Pasta", true),
        ]));
        assert_eq!(app.list_state.selected(), Some(0));
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.list_state.selected(), Some(1));
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.list_state.selected(), Some(0));
        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.list_state.selected(), Some(1));
    }

    #[test]
    fn test_escape_closes_modal_without_submitting() {
        let mut app = app();
        app.apply_update(ApiUpdate::Loaded(vec![]));
        app.handle_key(key(KeyCode::Char('a')));
        assert!(app.modal.is_open());
        app.handle_key(key(KeyCode::Esc));
        assert!(!app.modal.is_open());
        assert!(app.plates.is_empty());
    }

    #[test]
    fn test_retry_only_after_failure() {
        let mut app = app();
        app.apply_update(ApiUpdate::Loaded(vec![]));
        app.handle_key(key(KeyCode::Char('r')));
        assert_eq!(app.load, LoadPhase::Ready);

        app.apply_update(ApiUpdate::LoadFailed("down".to_string()));
        app.handle_key(key(KeyCode::Char('r')));
        assert_eq!(app.load, LoadPhase::Loading);
    }
}
