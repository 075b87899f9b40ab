use parkdesk_business::{AppConfig, Attendant, AttendantsState, Route};

use crate::widgets::attendants::{DeleteResultReceiver, DeleteResultSender, create_delete_channel};

/// Form state for the update-attendant page.
#[derive(Debug, Clone, Default)]
pub struct UpdateFormState {
    pub name: String,
    pub email: String,
    /// Which attendant id the fields were last prefilled from.
    pub loaded_for: Option<String>,
    /// Whether the save request is in flight.
    pub in_progress: bool,
    /// Error from the last failed save, shown on the page.
    pub error: Option<String>,
}

impl UpdateFormState {
    /// Prefills the form for `id`. Unknown ids leave the fields empty; the
    /// page renders its not-found body instead of the form.
    pub fn load(&mut self, id: &str, attendant: Option<&Attendant>) {
        self.loaded_for = Some(id.to_string());
        self.name = attendant.map(|a| a.name.clone()).unwrap_or_default();
        self.email = attendant.map(|a| a.email.clone()).unwrap_or_default();
        self.in_progress = false;
        self.error = None;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// The main application state.
///
/// Note: we manually implement Default because the delete result channel
/// ends don't implement Default.
pub struct State {
    /// Store backend configuration.
    pub config: AppConfig,
    /// The page currently shown.
    pub route: Route,
    /// Attendants roster state.
    pub attendants: AttendantsState,
    /// Update-attendant page form.
    pub update_form: UpdateFormState,
    /// Sender handed to the delete control.
    pub delete_result_sender: DeleteResultSender,
    /// Receiver drained by the app each frame.
    pub delete_result_receiver: DeleteResultReceiver,
}

impl Default for State {
    fn default() -> Self {
        let (delete_result_sender, delete_result_receiver) = create_delete_channel();

        Self {
            config: AppConfig::default(),
            route: Route::default(),
            attendants: AttendantsState::new(),
            update_form: UpdateFormState::default(),
            delete_result_sender,
            delete_result_receiver,
        }
    }
}

impl State {
    /// State pointed at a test backend, used by the integration tests.
    pub fn test(store_base_url: String) -> Self {
        Self {
            config: AppConfig::new(store_base_url),
            ..Self::default()
        }
    }
}
