/// Events delivered from background tasks to the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Navigate { path: String },
}
