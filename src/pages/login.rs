//! The dummy login/register form.

pub const DEMO_EMAIL: &str = "nobita@doraemon.com";
pub const DEMO_PASSWORD: &str = "doraemon";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Email and Password are required.")]
    MissingFields,
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("Invalid credentials or user not found. Try nobita@doraemon.com and \"doraemon\"")]
    InvalidCredentials,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Credentials accepted; the app should go home.
    LoggedIn,
    /// Registration accepted; the form is back in login mode.
    Registered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
    ConfirmPassword,
}

#[derive(Debug)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    focus: LoginField,
    register_mode: bool,
    error: Option<LoginError>,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            email: DEMO_EMAIL.to_string(),
            password: DEMO_PASSWORD.to_string(),
            confirm_password: String::new(),
            focus: LoginField::Email,
            register_mode: false,
            error: None,
        }
    }
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) -> LoginField {
        self.focus
    }

    pub fn is_register_mode(&self) -> bool {
        self.register_mode
    }

    pub fn error(&self) -> Option<&LoginError> {
        self.error.as_ref()
    }

    pub fn title(&self) -> &'static str {
        if self.register_mode {
            "Create Your Account"
        } else {
            "Access Your Music Pocket"
        }
    }

    pub fn subtitle(&self) -> &'static str {
        if self.register_mode {
            "Join the future of music!"
        } else {
            "Enter your credentials to open the Anywhere Door to tunes!"
        }
    }

    pub fn fields(&self) -> &'static [LoginField] {
        if self.register_mode {
            &[LoginField::Email, LoginField::Password, LoginField::ConfirmPassword]
        } else {
            &[LoginField::Email, LoginField::Password]
        }
    }

    pub fn toggle_mode(&mut self) {
        self.register_mode = !self.register_mode;
        self.error = None;
        if !self.register_mode && self.focus == LoginField::ConfirmPassword {
            self.focus = LoginField::Password;
        }
    }

    /// Move focus to the next field, wrapping.
    pub fn focus_next(&mut self) {
        let fields = self.fields();
        let i = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(i + 1) % fields.len()];
    }

    pub fn focus_prev(&mut self) {
        let fields = self.fields();
        let i = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(i + fields.len() - 1) % fields.len()];
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
            LoginField::ConfirmPassword => &mut self.confirm_password,
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    pub fn pop_char(&mut self) {
        self.focused_mut().pop();
    }

    /// Validate the form. The error, if any, is also kept for display.
    pub fn submit(&mut self) -> Result<LoginOutcome, LoginError> {
        let result = self.check();
        match &result {
            Ok(LoginOutcome::Registered) => {
                tracing::info!(email = %self.email, "registration accepted");
                self.register_mode = false;
                self.focus = LoginField::Email;
                self.confirm_password.clear();
            }
            Ok(LoginOutcome::LoggedIn) => tracing::info!(email = %self.email, "logged in"),
            Err(err) => tracing::info!(email = %self.email, %err, "login rejected"),
        }
        self.error = result.as_ref().err().cloned();
        result
    }

    fn check(&self) -> Result<LoginOutcome, LoginError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(LoginError::MissingFields);
        }
        if self.register_mode {
            if !self.confirm_password.is_empty() && self.confirm_password != self.password {
                return Err(LoginError::PasswordMismatch);
            }
            return Ok(LoginOutcome::Registered);
        }
        if self.email == DEMO_EMAIL && self.password == DEMO_PASSWORD {
            Ok(LoginOutcome::LoggedIn)
        } else {
            Err(LoginError::InvalidCredentials)
        }
    }
}
