// Application state for HTTP handlers

/// Documents produced by the single render pass; never mutated afterwards.
#[derive(Clone, Debug)]
pub struct AppState {
    pub page: String,
    pub svg: Option<String>,
}
