use dioxus_logger::tracing;

use crate::{
    client::{error::ApiError, store::session::Session},
    model::auth::{AuthMode, Credentials},
};

/// Fields and request status of the login/register form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub email: String,
    pub password: String,
    pub loading: bool,
    pub error: Option<String>,
}

impl AuthForm {
    pub fn title(&self) -> &'static str {
        match self.mode {
            AuthMode::Login => "Login",
            AuthMode::Register => "Create account",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.loading {
            return "Please wait…";
        }

        match self.mode {
            AuthMode::Login => "Login",
            AuthMode::Register => "Register",
        }
    }

    pub fn toggle_label(&self) -> &'static str {
        match self.mode {
            AuthMode::Login => "New here? Create an account",
            AuthMode::Register => "Have an account? Log in",
        }
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.error = None;
    }
}

/// Result of settling an auth request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    Authenticated,
    Failed,
    /// The response belonged to a request the dialog no longer waits for.
    Discarded,
}

/// A submit handed out by [`AuthDialog::begin_submit`].
#[derive(Debug, Clone, PartialEq)]
pub struct AuthRequest {
    /// Generation the response must be settled with.
    pub id: u64,
    pub mode: AuthMode,
    pub credentials: Credentials,
}

/// The auth modal: `Closed`, or open in login or register mode.
///
/// Closing drops the form, so typed credentials never outlive the modal.
/// Every submit and every close starts a new request generation; only the
/// response of the current one is applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthDialog {
    open: bool,
    form: AuthForm,
    request: u64,
}

impl AuthDialog {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Mode shown by the dialog, `None` while closed.
    pub fn mode(&self) -> Option<AuthMode> {
        self.open.then_some(self.form.mode)
    }

    pub fn form(&self) -> &AuthForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut AuthForm {
        &mut self.form
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.form = AuthForm::default();
        self.request = self.request.wrapping_add(1);
    }

    /// Mark the form as submitting and hand back what to send.
    ///
    /// Returns `None` while a request is already in flight or the dialog is
    /// closed, which is what keeps the submit button from double-posting.
    pub fn begin_submit(&mut self) -> Option<AuthRequest> {
        if !self.open || self.form.loading {
            return None;
        }

        self.form.loading = true;
        self.form.error = None;
        self.request = self.request.wrapping_add(1);

        Some(AuthRequest {
            id: self.request,
            mode: self.form.mode,
            credentials: Credentials {
                email: self.form.email.clone(),
                password: self.form.password.clone(),
            },
        })
    }

    /// Apply the response of the request started by [`begin_submit`](Self::begin_submit).
    ///
    /// On a token the session is established and the dialog closes. Any failure
    /// leaves the session untouched, keeps the dialog open in the same mode and
    /// shows an error. The loading flag is cleared either way.
    ///
    /// A response for an older generation (the dialog was closed, or a newer
    /// submit started since) changes nothing and yields
    /// [`AuthOutcome::Discarded`].
    pub fn settle(
        &mut self,
        request: u64,
        result: Result<String, ApiError>,
        session: &mut Session,
    ) -> AuthOutcome {
        if request != self.request || !self.form.loading {
            tracing::debug!(request, current = self.request, "Discarding stale auth response");

            return AuthOutcome::Discarded;
        }

        self.form.loading = false;

        let token = match result {
            Ok(token) => token,
            Err(err) => {
                tracing::warn!("Authentication failed: {}", err);
                self.form.error = Some(err.user_message());

                return AuthOutcome::Failed;
            }
        };

        match session.establish(&token) {
            Ok(()) => {
                self.close();

                AuthOutcome::Authenticated
            }
            Err(err) => {
                tracing::error!("{}", err);
                self.form.error = Some("Could not save your session in this browser.".to_string());

                AuthOutcome::Failed
            }
        }
    }
}
