//! Form session orchestration.

use std::sync::Arc;

use tokio::sync::broadcast;

use crate::behavior::BehaviorRegistry;
use crate::config::ConfigurationLoader;
use crate::form::FieldState;
use crate::model::{FieldValue, FormData};

/// Where a form session currently is.
///
/// `Submitting` only exists while `submit` runs (validation is
/// synchronous); `Submitted` is terminal: the payload is emitted
/// exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Loading,
    Ready,
    Submitting,
    Submitted,
}

/// State-change notifications for the rendering collaborator.
#[derive(Debug, Clone)]
pub enum FormEvent {
    LoadingChanged(bool),
    /// Field states were replaced wholesale (count may be zero after a
    /// failed load).
    FieldsReloaded { count: usize },
    ValidationFailed { invalid_fields: usize },
    Submitted(FormData),
}

/// Owns one form session: loading, per-field editing state, validation,
/// and the final submission payload.
///
/// All mutation goes through `&mut self`, so a session has a single
/// logical owner and there is no parallel mutation to guard against.
/// Loading suspends at the configuration fetch and the optional
/// pre-fill fetch; `submit` operates purely on resident state.
pub struct FormController {
    configuration_loader: Arc<dyn ConfigurationLoader>,
    behavior_registry: BehaviorRegistry,
    fields: Vec<FieldState>,
    phase: FormPhase,
    loading: bool,
    selected_country: Option<String>,
    events: broadcast::Sender<FormEvent>,
    on_complete: Option<Box<dyn FnOnce(&FormData) + Send>>,
    submission: Option<FormData>,
}

impl FormController {
    pub fn new(
        configuration_loader: Arc<dyn ConfigurationLoader>,
        behavior_registry: BehaviorRegistry,
    ) -> Self {
        let (events, _) = broadcast::channel(32);
        Self {
            configuration_loader,
            behavior_registry,
            fields: Vec::new(),
            phase: FormPhase::Idle,
            loading: false,
            selected_country: None,
            events,
            on_complete: None,
            submission: None,
        }
    }

    /// Subscribes to state-change notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<FormEvent> {
        self.events.subscribe()
    }

    /// Registers the consumer invoked exactly once with the final
    /// payload.
    pub fn on_complete(&mut self, callback: impl FnOnce(&FormData) + Send + 'static) {
        self.on_complete = Some(Box::new(callback));
    }

    pub fn field_states(&self) -> &[FieldState] {
        &self.fields
    }

    /// Mutable access to one field's editing state, for user input.
    pub fn field_mut(&mut self, id: &str) -> Option<&mut FieldState> {
        self.fields.iter_mut().find(|field| field.id() == id)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn selected_country(&self) -> Option<&str> {
        self.selected_country.as_deref()
    }

    /// The payload produced by a successful submit, if any.
    pub fn submission(&self) -> Option<&FormData> {
        self.submission.as_ref()
    }

    /// Records the country selection and reloads the form for it.
    pub async fn select_country(&mut self, country_code: &str) {
        self.selected_country = Some(country_code.to_uppercase());
        self.load_form(country_code).await;
    }

    /// Loads the form for a country: configuration, behavior, optional
    /// pre-fill, then one field state per surviving definition.
    ///
    /// Failures are not propagated: a failed configuration load clears
    /// the form, a failed pre-fill load proceeds without pre-fill. Both
    /// are logged. The loading flag clears on every exit path.
    pub async fn load_form(&mut self, country_code: &str) {
        self.set_loading(true);
        self.phase = FormPhase::Loading;

        match self.configuration_loader.load(country_code).await {
            Ok(config) => {
                let behavior = self.behavior_registry.behavior(country_code).clone();

                let prefilled = match behavior.prefill_loader() {
                    Some(loader) => match loader.load().await {
                        Ok(data) => Some(data),
                        Err(error) => {
                            tracing::warn!(
                                %error,
                                country = country_code,
                                "pre-fill load failed, continuing without pre-fill"
                            );
                            None
                        }
                    },
                    None => None,
                };

                let definitions = behavior.apply(config.fields, prefilled.as_ref());
                self.fields = definitions
                    .into_iter()
                    .map(|definition| {
                        let seed = prefilled.as_ref().and_then(|data| data.get(&definition.id));
                        FieldState::new(definition, seed)
                    })
                    .collect();
                self.phase = FormPhase::Ready;
            }
            Err(error) => {
                tracing::warn!(
                    %error,
                    country = country_code,
                    "configuration load failed, clearing form"
                );
                self.fields.clear();
                self.phase = FormPhase::Idle;
            }
        }

        self.set_loading(false);
        let _ = self.events.send(FormEvent::FieldsReloaded {
            count: self.fields.len(),
        });
    }

    /// Validates every field and, if all pass, produces the submission
    /// payload from the non-read-only fields.
    ///
    /// Every field is validated regardless of earlier failures, so all
    /// invalid fields surface their messages at once. Read-only fields
    /// are excluded from the payload even when pre-filled; `Absent`
    /// values are omitted.
    pub fn submit(&mut self) {
        if self.phase == FormPhase::Submitted {
            return;
        }
        self.phase = FormPhase::Submitting;

        let mut invalid_fields = 0usize;
        for field in &mut self.fields {
            if !field.validate() {
                invalid_fields += 1;
            }
        }

        if invalid_fields > 0 {
            tracing::debug!(invalid_fields, "submit rejected by field validation");
            self.phase = FormPhase::Ready;
            let _ = self.events.send(FormEvent::ValidationFailed { invalid_fields });
            return;
        }

        let mut payload = FormData::new();
        for field in &self.fields {
            if field.is_read_only() {
                continue;
            }
            match field.typed_value() {
                FieldValue::Absent => {}
                value => {
                    payload.insert(field.id().to_string(), value);
                }
            }
        }

        tracing::info!(fields = payload.len(), "form submitted");
        self.phase = FormPhase::Submitted;
        self.submission = Some(payload.clone());
        if let Some(callback) = self.on_complete.take() {
            callback(&payload);
        }
        let _ = self.events.send(FormEvent::Submitted(payload));
    }

    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
        let _ = self.events.send(FormEvent::LoadingChanged(loading));
    }
}
