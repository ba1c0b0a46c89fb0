//! Application state management for greenlight-tui.
//!
//! This module contains the core `App` struct that owns the session, the API
//! client, per-screen form state, and the background task coordination. All
//! network work runs in spawned tasks that report back over an mpsc channel;
//! results are applied on the main loop.

use std::collections::HashMap;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::api::{ApiClient, ApiError, MovieList};
use crate::auth::{Session, TokenStore};
use crate::config::Config;
use crate::models::{AuthToken, Metadata, Movie, MovieQuery, User};

// ============================================================================
// Constants
// ============================================================================

/// Buffer size for the background task message channel.
/// 16 is generous for a single user driving one interaction at a time.
const CHANNEL_BUFFER_SIZE: usize = 16;

/// Movies fetched per page.
pub const MOVIES_PAGE_SIZE: i64 = 20;

/// Maximum length for text inputs.
/// 128 chars accommodates long emails, passphrases, and activation tokens.
pub const MAX_INPUT_LENGTH: usize = 128;

// ============================================================================
// Routing
// ============================================================================

/// Navigable screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Activate,
    Movies,
}

impl Route {
    /// Screens that require an authenticated session.
    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Movies)
    }
}

// ============================================================================
// Form State Types
// ============================================================================

/// Focused field on the login form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

impl LoginField {
    pub fn next(&self) -> Self {
        match self {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        }
    }
}

/// Focused field on the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegisterField {
    #[default]
    Name,
    Email,
    Password,
}

impl RegisterField {
    pub fn next(&self) -> Self {
        match self {
            RegisterField::Name => RegisterField::Email,
            RegisterField::Email => RegisterField::Password,
            RegisterField::Password => RegisterField::Name,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            RegisterField::Name => RegisterField::Password,
            RegisterField::Email => RegisterField::Name,
            RegisterField::Password => RegisterField::Email,
        }
    }
}

#[derive(Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub focus: LoginField,
    pub field_errors: HashMap<String, String>,
    pub error: Option<String>,
    pub loading: bool,
}

impl LoginForm {
    fn input_mut(&mut self) -> &mut String {
        match self.focus {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }

    pub fn push_char(&mut self, c: char) {
        let input = self.input_mut();
        if input.len() < MAX_INPUT_LENGTH {
            input.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.input_mut().pop();
    }
}

#[derive(Debug, Default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub focus: RegisterField,
    pub field_errors: HashMap<String, String>,
    pub error: Option<String>,
    pub success: bool,
    pub loading: bool,
}

impl RegisterForm {
    fn input_mut(&mut self) -> &mut String {
        match self.focus {
            RegisterField::Name => &mut self.name,
            RegisterField::Email => &mut self.email,
            RegisterField::Password => &mut self.password,
        }
    }

    pub fn push_char(&mut self, c: char) {
        let input = self.input_mut();
        if input.len() < MAX_INPUT_LENGTH {
            input.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.input_mut().pop();
    }
}

#[derive(Debug, Default)]
pub struct ActivateForm {
    pub token: String,
    pub field_errors: HashMap<String, String>,
    pub error: Option<String>,
    pub success: bool,
    pub loading: bool,
}

impl ActivateForm {
    pub fn push_char(&mut self, c: char) {
        if self.token.len() < MAX_INPUT_LENGTH {
            self.token.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.token.pop();
    }
}

/// State for the paginated movie catalog view.
#[derive(Debug)]
pub struct MoviesView {
    pub movies: Vec<Movie>,
    pub metadata: Option<Metadata>,
    /// The page most recently requested (not necessarily loaded yet).
    pub page: i64,
    pub selection: usize,
    pub loading: bool,
    pub error: Option<String>,
}

impl MoviesView {
    fn new() -> Self {
        Self {
            movies: Vec::new(),
            metadata: None,
            page: 1,
            selection: 0,
            loading: false,
            error: None,
        }
    }
}

// ============================================================================
// Background Events
// ============================================================================

/// Results of background work, delivered over the mpsc channel.
#[derive(Debug)]
pub enum AppEvent {
    LoggedIn(Result<AuthToken, ApiError>),
    Registered(Result<User, ApiError>),
    Activated(Result<User, ApiError>),
    MoviesLoaded {
        request_id: u64,
        result: Result<MovieList, ApiError>,
    },
}

// ============================================================================
// App
// ============================================================================

/// Main application state container
pub struct App {
    // Core services
    pub config: Config,
    pub session: Session,
    pub api: ApiClient,

    // Current screen
    pub route: Route,

    // Per-screen state
    pub login: LoginForm,
    pub register: RegisterForm,
    pub activate: ActivateForm,
    pub movies: MoviesView,

    pub should_quit: bool,

    // Background task channel
    events_rx: mpsc::Receiver<AppEvent>,
    events_tx: mpsc::Sender<AppEvent>,

    /// Id of the most recently issued movies request. Results carrying an
    /// older id are stale and must be discarded.
    movies_request_seq: u64,
}

impl App {
    /// Create a new application instance with services resolved from the
    /// environment: config file, persisted credential, configured API URL.
    pub fn new() -> Result<Self> {
        let config = match Config::load() {
            Ok(c) => c,
            Err(e) => {
                warn!(error = %e, "Failed to load config, using defaults");
                Config::default()
            }
        };

        let credential_dir = Config::credential_dir()?;
        let session = Session::new(TokenStore::new(credential_dir));

        let mut api = ApiClient::new(config.api_url())?;
        if let Some(token) = session.token() {
            debug!("Restored persisted session");
            api.set_token(token.to_string());
        }

        Ok(Self::with_services(config, session, api))
    }

    /// Assemble the app from explicit services. Used by `new` and by tests.
    pub fn with_services(config: Config, session: Session, api: ApiClient) -> Self {
        let (events_tx, events_rx) = mpsc::channel(CHANNEL_BUFFER_SIZE);

        let route = if session.is_authenticated() {
            Route::Movies
        } else {
            Route::Login
        };

        let login = LoginForm {
            email: config.last_email.clone().unwrap_or_default(),
            focus: if config.last_email.is_some() {
                LoginField::Password
            } else {
                LoginField::Email
            },
            ..LoginForm::default()
        };

        Self {
            config,
            session,
            api,
            route,
            login,
            register: RegisterForm::default(),
            activate: ActivateForm::default(),
            movies: MoviesView::new(),
            should_quit: false,
            events_rx,
            events_tx,
            movies_request_seq: 0,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Navigate to a screen, redirecting protected screens to the login
    /// screen while the session is anonymous.
    pub fn navigate(&mut self, route: Route) {
        let target = if route.is_protected() && !self.session.is_authenticated() {
            debug!(?route, "Redirecting anonymous navigation to login");
            Route::Login
        } else {
            route
        };
        self.route = target;

        if target == Route::Movies {
            self.refresh_movies(self.movies.page);
        }
    }

    /// Drop the session and return to the login screen.
    pub fn logout(&mut self) {
        self.session.logout();
        self.api.clear_token();
        self.movies = MoviesView::new();
        self.route = Route::Login;
        info!("Logged out");
    }

    // =========================================================================
    // Movie Catalog
    // =========================================================================

    /// Record a new movies request, superseding any in-flight one. Returns
    /// the id the result must carry to be applied.
    fn begin_movies_request(&mut self, page: i64) -> u64 {
        self.movies_request_seq += 1;
        self.movies.page = page;
        self.movies.loading = true;
        self.movies.error = None;
        self.movies_request_seq
    }

    /// Fetch the given catalog page in the background.
    pub fn refresh_movies(&mut self, page: i64) {
        let request_id = self.begin_movies_request(page);
        let api = self.api.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = api
                .list_movies(&MovieQuery::page(page, MOVIES_PAGE_SIZE))
                .await;
            Self::send_event(&tx, AppEvent::MoviesLoaded { request_id, result }).await;
        });
    }

    pub fn next_page(&mut self) {
        if self.movies.metadata.is_some_and(|m| m.has_next_page()) {
            self.refresh_movies(self.movies.page + 1);
        }
    }

    pub fn previous_page(&mut self) {
        if self.movies.metadata.is_some_and(|m| m.has_previous_page()) {
            self.refresh_movies(self.movies.page - 1);
        }
    }

    pub fn select_next_movie(&mut self) {
        if self.movies.selection + 1 < self.movies.movies.len() {
            self.movies.selection += 1;
        }
    }

    pub fn select_previous_movie(&mut self) {
        self.movies.selection = self.movies.selection.saturating_sub(1);
    }

    // =========================================================================
    // Form Submission
    // =========================================================================

    /// Submit the login form. Ignored while a submission is in flight.
    pub fn submit_login(&mut self) {
        if self.login.loading {
            return;
        }
        self.login.loading = true;
        self.login.error = None;
        self.login.field_errors.clear();

        let email = self.login.email.trim().to_string();
        let password = self.login.password.clone();
        let api = self.api.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = api.create_auth_token(&email, &password).await;
            Self::send_event(&tx, AppEvent::LoggedIn(result)).await;
        });
    }

    /// Submit the registration form. Ignored while a submission is in flight.
    pub fn submit_register(&mut self) {
        if self.register.loading {
            return;
        }
        self.register.loading = true;
        self.register.error = None;
        self.register.field_errors.clear();

        let name = self.register.name.trim().to_string();
        let email = self.register.email.trim().to_string();
        let password = self.register.password.clone();
        let api = self.api.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = api.register_user(&name, &email, &password).await;
            Self::send_event(&tx, AppEvent::Registered(result)).await;
        });
    }

    /// Submit the activation form. Ignored while a submission is in flight.
    pub fn submit_activate(&mut self) {
        if self.activate.loading {
            return;
        }
        self.activate.loading = true;
        self.activate.error = None;
        self.activate.field_errors.clear();

        let token = self.activate.token.trim().to_string();
        let api = self.api.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = api.activate_user(&token).await;
            Self::send_event(&tx, AppEvent::Activated(result)).await;
        });
    }

    // =========================================================================
    // Background Events
    // =========================================================================

    /// Helper to send events, logging any channel errors
    async fn send_event(tx: &mpsc::Sender<AppEvent>, event: AppEvent) {
        if let Err(e) = tx.send(event).await {
            error!(error = %e, "Failed to send app event - channel closed");
        }
    }

    /// Drain completed background work and apply it to app state.
    pub fn check_background_tasks(&mut self) {
        let mut events = Vec::new();
        while let Ok(event) = self.events_rx.try_recv() {
            events.push(event);
        }
        for event in events {
            self.process_event(event);
        }
    }

    /// Split an API failure into a general banner message and per-field
    /// validation messages. Exactly one side is populated.
    fn split_error(e: ApiError) -> (Option<String>, HashMap<String, String>) {
        match e {
            ApiError::Validation { errors, .. } => (None, errors),
            other => (Some(other.to_string()), HashMap::new()),
        }
    }

    /// Apply a single background event to app state.
    pub fn process_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::LoggedIn(result) => {
                self.login.loading = false;
                match result {
                    Ok(auth) => {
                        self.session.login(&auth);
                        self.api.set_token(auth.token.clone());

                        self.config.last_email = Some(self.login.email.trim().to_string());
                        if let Err(e) = self.config.save() {
                            warn!(error = %e, "Failed to save config");
                        }

                        self.login.password.clear();
                        self.login.field_errors.clear();
                        self.login.error = None;
                        info!("Login successful");
                        self.navigate(Route::Movies);
                    }
                    Err(e) => {
                        debug!(error = %e, "Login failed");
                        let (general, fields) = Self::split_error(e);
                        self.login.error = general;
                        self.login.field_errors = fields;
                    }
                }
            }
            AppEvent::Registered(result) => {
                self.register.loading = false;
                match result {
                    Ok(user) => {
                        info!(email = %user.email, "Registration accepted");
                        self.register.success = true;
                        self.register.password.clear();
                    }
                    Err(e) => {
                        debug!(error = %e, "Registration failed");
                        let (general, fields) = Self::split_error(e);
                        self.register.error = general;
                        self.register.field_errors = fields;
                    }
                }
            }
            AppEvent::Activated(result) => {
                self.activate.loading = false;
                match result {
                    Ok(user) => {
                        info!(email = %user.email, "Account activated");
                        self.activate.success = true;
                    }
                    Err(e) => {
                        debug!(error = %e, "Activation failed");
                        let (general, fields) = Self::split_error(e);
                        self.activate.error = general;
                        self.activate.field_errors = fields;
                    }
                }
            }
            AppEvent::MoviesLoaded { request_id, result } => {
                if request_id != self.movies_request_seq {
                    debug!(
                        request_id,
                        latest = self.movies_request_seq,
                        "Dropping stale movies result"
                    );
                    return;
                }
                self.movies.loading = false;
                match result {
                    Ok(list) => {
                        debug!(count = list.movies.len(), page = self.movies.page, "Movies loaded");
                        self.movies.movies = list.movies;
                        self.movies.metadata = Some(list.metadata);
                        self.movies.selection = 0;
                    }
                    Err(e) if e.is_unauthorized() => {
                        // Token rejected or expired; the gateway only reports
                        // the status, dropping the session is this view's job.
                        warn!("Movies fetch unauthorized, dropping session");
                        self.logout();
                    }
                    Err(e) => {
                        debug!(error = %e, "Movies fetch failed");
                        self.movies.error = Some(e.to_string());
                    }
                }
            }
        }
    }
}
