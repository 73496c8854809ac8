//! Application flow state machine
//!
//! Screens move LoggedOut -> Welcome -> QuizInProgress -> Loading -> ResultsShown
//! only through explicit actions. The loading phase runs the engine on a
//! spawned task that can be cancelled; nothing here is driven by timers.

use serde::{Deserialize, Serialize};
use std::{fmt::Display, sync::Arc};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::{
    catalog::Catalog,
    error::{AppError, AppResult},
    models::{QuizAnswers, Recommendation},
    services::recommendations::{recommend, trending},
};

/// Screen currently shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    LoggedOut,
    Welcome,
    QuizInProgress,
    Loading,
    ResultsShown,
}

impl Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Screen::LoggedOut => "LoggedOut",
            Screen::Welcome => "Welcome",
            Screen::QuizInProgress => "QuizInProgress",
            Screen::Loading => "Loading",
            Screen::ResultsShown => "ResultsShown",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// The signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
}

enum LoadingRequest {
    Quiz(QuizAnswers),
    Trending,
}

/// Persisted user and theme, restored at start-up
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowSnapshot {
    pub user: Option<UserProfile>,
    #[serde(default)]
    pub theme: Theme,
}

impl FlowSnapshot {
    pub fn to_json(&self) -> AppResult<String> {
        serde_json::to_string(self).map_err(|e| AppError::Internal(e.to_string()))
    }

    pub fn from_json(json: &str) -> AppResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| AppError::InvalidInput(format!("invalid saved flow state: {}", e)))
    }
}

/// A running recommendation computation
struct LoadingJob {
    token: CancellationToken,
    handle: JoinHandle<AppResult<Option<Vec<Recommendation>>>>,
}

impl Drop for LoadingJob {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// Explicit application state for one user session
pub struct AppFlow {
    catalog: Arc<Catalog>,
    screen: Screen,
    user: Option<UserProfile>,
    theme: Theme,
    results: Vec<Recommendation>,
    job: Option<LoadingJob>,
    /// Screen to return to if loading is cancelled or fails
    loading_origin: Option<Screen>,
}

impl AppFlow {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            screen: Screen::LoggedOut,
            user: None,
            theme: Theme::default(),
            results: Vec::new(),
            job: None,
            loading_origin: None,
        }
    }

    /// Rebuilds a flow from saved state; a saved user lands on the welcome screen
    pub fn restore(catalog: Arc<Catalog>, snapshot: FlowSnapshot) -> Self {
        let mut flow = Self::new(catalog);
        flow.theme = snapshot.theme;
        if let Some(user) = snapshot.user.filter(|u| !u.name.trim().is_empty()) {
            tracing::info!(user = %user.name, "Restored saved session");
            flow.user = Some(user);
            flow.screen = Screen::Welcome;
        }
        flow
    }

    /// State worth persisting between runs
    pub fn snapshot(&self) -> FlowSnapshot {
        FlowSnapshot {
            user: self.user.clone(),
            theme: self.theme,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Results of the last completed loading phase
    pub fn results(&self) -> &[Recommendation] {
        &self.results
    }

    pub fn login(&mut self, name: &str) -> AppResult<()> {
        self.require(&[Screen::LoggedOut], "log in")?;

        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::InvalidInput("name must not be empty".to_string()));
        }

        self.user = Some(UserProfile {
            name: name.to_string(),
        });
        self.go(Screen::Welcome);
        Ok(())
    }

    /// Signs out from any screen, abandoning a pending computation
    pub fn logout(&mut self) -> AppResult<()> {
        if self.screen == Screen::LoggedOut {
            return Err(self.invalid("log out"));
        }

        self.job = None;
        self.loading_origin = None;
        self.user = None;
        self.results.clear();
        self.go(Screen::LoggedOut);
        Ok(())
    }

    pub fn start_quiz(&mut self) -> AppResult<()> {
        self.require(&[Screen::Welcome, Screen::ResultsShown], "start the quiz")?;
        self.go(Screen::QuizInProgress);
        Ok(())
    }

    /// Submits completed answers and starts scoring in the background.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn submit_answers(&mut self, answers: QuizAnswers) -> AppResult<()> {
        self.require(&[Screen::QuizInProgress], "submit answers")?;
        self.begin_loading(LoadingRequest::Quiz(answers));
        Ok(())
    }

    /// Skips the quiz and loads the trending list.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn surprise_me(&mut self) -> AppResult<()> {
        self.require(&[Screen::Welcome], "ask for a surprise")?;
        self.begin_loading(LoadingRequest::Trending);
        Ok(())
    }

    /// Waits for the pending computation and shows its results.
    ///
    /// Dropping the returned future leaves the computation pending; it can be
    /// awaited again or cancelled.
    pub async fn await_results(&mut self) -> AppResult<&[Recommendation]> {
        self.require(&[Screen::Loading], "wait for results")?;
        let job = self
            .job
            .as_mut()
            .ok_or_else(|| AppError::Internal("loading without a pending job".to_string()))?;

        let outcome = match (&mut job.handle).await {
            Ok(outcome) => outcome,
            Err(e) => Err(AppError::Internal(e.to_string())),
        };
        self.job = None;
        let origin = self.loading_origin.take().unwrap_or(Screen::Welcome);

        match outcome {
            Ok(Some(results)) => {
                self.results = results;
                self.go(Screen::ResultsShown);
                Ok(&self.results)
            }
            Ok(None) => {
                self.go(origin);
                Err(AppError::Internal("recommendation task was cancelled".to_string()))
            }
            Err(e) => {
                tracing::error!(error = %e, "Recommendation task failed");
                self.go(origin);
                Err(e)
            }
        }
    }

    /// Abandons the pending computation and returns to where it started
    pub fn cancel_loading(&mut self) -> AppResult<()> {
        self.require(&[Screen::Loading], "cancel loading")?;

        self.job = None;
        let origin = self.loading_origin.take().unwrap_or(Screen::Welcome);
        tracing::info!(origin = %origin, "Loading cancelled");
        self.go(origin);
        Ok(())
    }

    pub fn back_to_welcome(&mut self) -> AppResult<()> {
        self.require(
            &[Screen::QuizInProgress, Screen::ResultsShown],
            "go back to the welcome screen",
        )?;
        self.go(Screen::Welcome);
        Ok(())
    }

    /// Retakes the quiz from the results screen
    pub fn back_to_quiz(&mut self) -> AppResult<()> {
        self.require(&[Screen::ResultsShown], "go back to the quiz")?;
        self.go(Screen::QuizInProgress);
        Ok(())
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    fn begin_loading(&mut self, request: LoadingRequest) {
        let token = CancellationToken::new();
        let cancelled = token.clone();
        let catalog = Arc::clone(&self.catalog);

        let handle = tokio::spawn(async move {
            let work = tokio::task::spawn_blocking(move || match request {
                LoadingRequest::Quiz(answers) => recommend(&answers, &catalog),
                LoadingRequest::Trending => trending(&catalog),
            });

            tokio::select! {
                biased;
                _ = cancelled.cancelled() => Ok(None),
                result = work => result
                    .map(Some)
                    .map_err(|e| AppError::Internal(e.to_string())),
            }
        });

        self.track_loading(token, handle);
    }

    fn track_loading(
        &mut self,
        token: CancellationToken,
        handle: JoinHandle<AppResult<Option<Vec<Recommendation>>>>,
    ) {
        self.job = Some(LoadingJob { token, handle });
        self.loading_origin = Some(self.screen);
        self.go(Screen::Loading);
    }

    fn require(&self, allowed: &[Screen], action: &str) -> AppResult<()> {
        if allowed.contains(&self.screen) {
            Ok(())
        } else {
            Err(self.invalid(action))
        }
    }

    fn invalid(&self, action: &str) -> AppError {
        AppError::InvalidTransition {
            from: self.screen.to_string(),
            action: action.to_string(),
        }
    }

    fn go(&mut self, next: Screen) {
        tracing::debug!(from = %self.screen, to = %next, "Screen transition");
        self.screen = next;
    }
}
