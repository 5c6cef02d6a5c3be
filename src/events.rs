/// Events produced by background services and fed into the UI component.
#[derive(Debug, Clone)]
pub enum AppEvent {
    ConfigReload,
}
