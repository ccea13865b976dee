#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
enum Panel {
    #[default]
    Home,
    Player,
}

/// Panel and overlay visibility. Exactly one panel is shown at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ViewState {
    panel: Panel,
    download_popup: bool,
    info_popup: bool,
    menu_open: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn home_visible(&self) -> bool {
        self.panel == Panel::Home
    }

    pub fn player_visible(&self) -> bool {
        self.panel == Panel::Player
    }

    pub fn download_popup_visible(&self) -> bool {
        self.download_popup
    }

    pub fn info_popup_visible(&self) -> bool {
        self.info_popup
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn backdrop_visible(&self) -> bool {
        self.download_popup || self.info_popup || self.menu_open
    }

    pub fn show_player(&mut self) {
        self.panel = Panel::Player;
    }

    /// Returning home also dismisses every overlay.
    pub fn show_home(&mut self) {
        self.panel = Panel::Home;
        self.close_all_overlays();
    }

    pub fn open_download_popup(&mut self) {
        self.download_popup = true;
    }

    pub fn close_download_popup(&mut self) {
        self.download_popup = false;
    }

    pub fn open_info_popup(&mut self) {
        self.info_popup = true;
    }

    pub fn close_info_popup(&mut self) {
        self.info_popup = false;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_all_overlays(&mut self) {
        self.download_popup = false;
        self.info_popup = false;
        self.menu_open = false;
    }
}
