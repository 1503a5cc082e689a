pub struct UiState {
    pub(super) side_open: bool,
    pub(super) info_window_open: bool,
    pub(super) last_status: Option<String>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            side_open: true,
            info_window_open: false,
            last_status: None,
        }
    }
}
