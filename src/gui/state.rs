use crate::api::auth::HttpTransport;
use crate::config::Config;
use crate::error::SubmitError;
use crate::login::{LoginHandler, Submission, DASHBOARD_PATH};
use crate::models::events::Event;
use crate::page::{Element, Navigator, Page};
use log::{debug, info};
use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;
use tokio::task::JoinHandle;

pub const LOGIN_PATH: &str = "/";

/// The login form as the window renders it.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct LoginPage {
    pub username: String,
    pub passcode: String,
    pub alert_visible: bool,
    pub alert_message: String,
}

impl Page for LoginPage {
    fn value(&self, element: Element) -> String {
        match element {
            Element::Username => self.username.clone(),
            Element::Passcode => self.passcode.clone(),
            Element::Alert | Element::AlertMessage => String::new(),
        }
    }

    fn set_text(&mut self, element: Element, text: &str) {
        match element {
            Element::Username => self.username = text.to_owned(),
            Element::Passcode => self.passcode = text.to_owned(),
            Element::AlertMessage => self.alert_message = text.to_owned(),
            Element::Alert => debug!("Ignoring text for {}", element),
        }
    }

    fn set_visible(&mut self, element: Element, visible: bool) {
        match element {
            Element::Alert => self.alert_visible = visible,
            _ => debug!("Ignoring visibility for {}", element),
        }
    }
}

/// Forwards navigation requests to the UI thread.
pub struct ChannelNavigator {
    sender: Sender<Event>,
}

impl ChannelNavigator {
    pub fn new(sender: Sender<Event>) -> Self {
        Self { sender }
    }
}

impl Navigator for ChannelNavigator {
    fn navigate(&self, path: &str) {
        if self
            .sender
            .send(Event::Navigate {
                path: path.to_owned(),
            })
            .is_err()
        {
            log::error!("Window closed before navigating to {}", path);
        }
    }
}

pub struct AppState {
    pub server_url: String,
    pub location: String,
    pub page: LoginPage,
    pub status_message: String,
    handler: Option<LoginHandler>,
    event_receiver: Option<Receiver<Event>>,
    in_flight: Vec<JoinHandle<Result<(), SubmitError>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            server_url: String::new(),
            location: LOGIN_PATH.to_owned(),
            page: LoginPage::default(),
            status_message: "Idle".to_owned(),
            handler: None,
            event_receiver: None,
            in_flight: Vec::new(),
        }
    }
}

impl AppState {
    pub fn connect(&mut self, config: &Config, runtime: tokio::runtime::Handle) {
        let (sender, receiver) = std::sync::mpsc::channel();
        let transport = HttpTransport::new(reqwest::Client::new(), config.server_url.clone());
        self.handler = Some(LoginHandler::new(
            Arc::new(transport),
            Arc::new(ChannelNavigator::new(sender)),
            runtime,
        ));
        self.event_receiver = Some(receiver);
        self.server_url = config.server_url.clone();
        info!("Using login server {}", self.server_url);
    }

    pub fn submit_login(&mut self) {
        let Some(handler) = &self.handler else {
            log::error!("Login submitted before the client was configured");
            return;
        };
        if let Submission::Sent(task) = handler.submit(&mut self.page) {
            self.in_flight.push(task);
        }
    }

    /// True while a verification request has not completed yet.
    pub fn is_waiting(&mut self) -> bool {
        self.in_flight.retain(|task| !task.is_finished());
        !self.in_flight.is_empty()
    }

    /// Applies queued events. Returns true if any were applied.
    pub fn process_events(&mut self) -> bool {
        let mut pending_events = Vec::new();
        if let Some(receiver) = &self.event_receiver {
            while let Ok(event) = receiver.try_recv() {
                pending_events.push(event);
            }
        }

        let drained = !pending_events.is_empty();
        for event in pending_events {
            match event {
                Event::Navigate { path } => self.navigate(&path),
            }
        }
        drained
    }

    /// Replaces the whole view, like a full page load.
    pub fn navigate(&mut self, path: &str) {
        info!("Navigating to {}", path);
        self.location = path.to_owned();
        self.page = LoginPage::default();
        self.status_message = if path == DASHBOARD_PATH {
            "Logged in".to_owned()
        } else {
            "Idle".to_owned()
        };
    }

    pub fn on_dashboard(&self) -> bool {
        self.location == DASHBOARD_PATH
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::login::alert;

    #[test]
    fn login_page_exposes_form_fields() {
        let mut page = LoginPage {
            username: "alice".to_owned(),
            passcode: "123456".to_owned(),
            ..Default::default()
        };
        assert_eq!(page.value(Element::Username), "alice");
        assert_eq!(page.value(Element::Passcode), "123456");

        alert::show(&mut page, "Please enter a otp passcode");
        assert!(page.alert_visible);
        assert_eq!(page.alert_message, "Please enter a otp passcode");

        alert::hide(&mut page);
        assert!(!page.alert_visible);
    }

    #[test]
    fn navigation_event_replaces_view() {
        let (sender, receiver) = std::sync::mpsc::channel();
        let mut state = AppState {
            event_receiver: Some(receiver),
            page: LoginPage {
                username: "alice".to_owned(),
                passcode: "123456".to_owned(),
                ..Default::default()
            },
            ..Default::default()
        };

        ChannelNavigator::new(sender).navigate(DASHBOARD_PATH);
        assert!(!state.on_dashboard());

        assert!(state.process_events());
        assert!(state.on_dashboard());
        assert_eq!(state.page, LoginPage::default());
        assert!(!state.process_events());
    }

    #[tokio::test]
    async fn navigation_from_finished_request_is_applied() {
        let (sender, receiver) = std::sync::mpsc::channel();
        let navigator = ChannelNavigator::new(sender);
        let mut state = AppState {
            event_receiver: Some(receiver),
            ..Default::default()
        };

        let task = tokio::spawn(async move {
            navigator.navigate(DASHBOARD_PATH);
            Ok::<(), SubmitError>(())
        });
        state.in_flight.push(task);
        while !state.in_flight[0].is_finished() {
            tokio::task::yield_now().await;
        }

        // Same order as a frame: the task is already done, yet the drain
        // reports the queued navigation so another repaint is scheduled.
        assert!(!state.is_waiting());
        assert!(state.process_events());
        assert!(state.on_dashboard());
    }

    #[test]
    fn submit_without_handler_does_nothing() {
        let mut state = AppState::default();
        state.page.username = "alice".to_owned();
        state.submit_login();
        assert!(!state.is_waiting());
        assert_eq!(state.location, LOGIN_PATH);
    }

    #[tokio::test]
    async fn empty_form_shows_alert_in_window() {
        let mut state = AppState::default();
        let config = Config {
            server_url: "http://127.0.0.1:9".to_owned(),
            window_title: "test".to_owned(),
        };
        state.connect(&config, tokio::runtime::Handle::current());

        state.submit_login();

        assert!(state.page.alert_visible);
        assert_eq!(state.page.alert_message, "Please enter a otp username");
        assert!(!state.is_waiting());
    }
}
