use std::collections::BTreeSet;
use std::time::{Duration, Instant};

pub use crate::catalog::{HISTORY, HOME};

use crate::catalog::{ALL, BEST};
use crate::navigator::{Direction, Navigator};
use crate::view::ViewState;

const EMPTY_TITLE: &str = "No videos available";

/// Named interactive regions a front end may or may not provide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    MenuToggle,
    MenuClose,
    SideMenu,
    CategoryItem,
    ClearFilter,
    GetVideo,
    Prev,
    Next,
    Download,
    PopupOverlay,
    PopupClose,
    QualityOption,
    OkButton,
    Backdrop,
}

impl Region {
    pub const ALL: [Region; 14] = [
        Region::MenuToggle,
        Region::MenuClose,
        Region::SideMenu,
        Region::CategoryItem,
        Region::ClearFilter,
        Region::GetVideo,
        Region::Prev,
        Region::Next,
        Region::Download,
        Region::PopupOverlay,
        Region::PopupClose,
        Region::QualityOption,
        Region::OkButton,
        Region::Backdrop,
    ];
}

pub type Regions = BTreeSet<Region>;

/// What a pointer click landed on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    MenuToggle,
    MenuClose,
    SideMenu,
    Category(String),
    ClearFilter,
    GetVideo,
    Prev,
    Next,
    Download,
    PopupOverlay,
    PopupClose,
    Quality(String),
    OkButton,
    Backdrop,
    Elsewhere,
}

impl Target {
    fn region(&self) -> Option<Region> {
        Some(match self {
            Target::MenuToggle => Region::MenuToggle,
            Target::MenuClose => Region::MenuClose,
            Target::SideMenu => Region::SideMenu,
            Target::Category(_) => Region::CategoryItem,
            Target::ClearFilter => Region::ClearFilter,
            Target::GetVideo => Region::GetVideo,
            Target::Prev => Region::Prev,
            Target::Next => Region::Next,
            Target::Download => Region::Download,
            Target::PopupOverlay => Region::PopupOverlay,
            Target::PopupClose => Region::PopupClose,
            Target::Quality(_) => Region::QualityOption,
            Target::OkButton => Region::OkButton,
            Target::Backdrop => Region::Backdrop,
            Target::Elsewhere => return None,
        })
    }

    fn within_menu(&self) -> bool {
        matches!(
            self,
            Target::MenuToggle | Target::MenuClose | Target::SideMenu | Target::Category(_)
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Click(Target),
    Key { key: Key, text_input_focused: bool },
    Resize { width: u16 },
    Tick(Instant),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ControllerError {
    #[error("{0} is not available")]
    MissingDependency(String),
    #[error("No videos available in {0}")]
    EmptyCollection(String),
    #[error("{0} feature coming soon!")]
    UnimplementedFeature(&'static str),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    pub id: String,
    pub label: String,
}

/// Snapshot pushed to the render sink after every mutating input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderState {
    pub view: ViewState,
    pub title: String,
    pub video_category_label: String,
    pub active_category: String,
    pub active_category_label: String,
    pub counter: String,
    pub source_url: Option<String>,
    pub active_menu_item: String,
    pub category_status_visible: bool,
    pub clear_filter_visible: bool,
    pub download_target: Option<String>,
    pub notices: Vec<String>,
}

pub trait RenderSink {
    fn regions(&self) -> Regions;
    fn render(&mut self, state: &RenderState);
    /// Blocking user-facing message, such as an unimplemented feature.
    fn alert(&mut self, message: &str);
}

#[derive(Clone, Debug)]
pub struct Options {
    pub narrow_width: u16,
    pub notice_ttl: Duration,
    pub viewport_width: u16,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            narrow_width: 100,
            notice_ttl: Duration::from_secs(3),
            viewport_width: u16::MAX,
        }
    }
}

struct Notice {
    message: String,
    expires_at: Instant,
}

pub struct Controller<S: RenderSink> {
    navigator: Navigator,
    view: ViewState,
    sink: S,
    regions: Regions,
    options: Options,
    viewport_width: u16,
    active_menu_item: String,
    download_target: Option<String>,
    notices: Vec<Notice>,
    diagnostics: Vec<ControllerError>,
}

impl<S: RenderSink> Controller<S> {
    pub fn new(navigator: Navigator, view: ViewState, sink: S, options: Options) -> Self {
        let regions = sink.regions();
        let viewport_width = options.viewport_width;
        let mut controller = Self {
            navigator,
            view,
            sink,
            regions,
            options,
            viewport_width,
            active_menu_item: HOME.to_string(),
            download_target: None,
            notices: Vec::new(),
            diagnostics: Vec::new(),
        };

        for region in Region::ALL {
            if !controller.regions.contains(&region) {
                controller.report(ControllerError::MissingDependency(format!("{region:?}")));
            }
        }
        tracing::info!(
            bound = controller.regions.len(),
            videos = controller.navigator.catalog().len(),
            "controller ready"
        );

        let state = controller.render_state();
        controller.sink.render(&state);
        controller
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn diagnostics(&self) -> &[ControllerError] {
        &self.diagnostics
    }

    /// Side menu entries in display order.
    pub fn menu(&self) -> Vec<MenuEntry> {
        let catalog = self.navigator.catalog();
        let mut entries = vec![
            MenuEntry {
                id: HOME.to_string(),
                label: "Home".to_string(),
            },
            MenuEntry {
                id: ALL.to_string(),
                label: catalog.display_name(ALL).to_string(),
            },
        ];
        entries.extend(catalog.categories().iter().map(|entry| MenuEntry {
            id: entry.id.clone(),
            label: entry.name.clone(),
        }));
        entries.push(MenuEntry {
            id: BEST.to_string(),
            label: catalog.display_name(BEST).to_string(),
        });
        entries.push(MenuEntry {
            id: HISTORY.to_string(),
            label: "History".to_string(),
        });
        entries
    }

    pub fn dispatch(&mut self, input: Input) {
        let before = self.render_state();
        match input {
            Input::Click(target) => self.handle_click(target),
            Input::Key {
                key,
                text_input_focused,
            } => {
                if !text_input_focused {
                    self.handle_key(key);
                }
            }
            Input::Resize { width } => self.viewport_width = width,
            Input::Tick(now) => self.notices.retain(|notice| notice.expires_at > now),
        }
        let after = self.render_state();
        if after != before {
            self.sink.render(&after);
        }
    }

    /// Absorbs a failure into UI-visible state.
    pub fn report(&mut self, err: ControllerError) {
        match &err {
            ControllerError::MissingDependency(_) => {
                tracing::warn!(error = %err, "missing dependency");
            }
            ControllerError::EmptyCollection(_) => {
                tracing::debug!(error = %err, "empty collection");
                self.push_notice(err.to_string());
            }
            ControllerError::UnimplementedFeature(_) => {
                tracing::info!(error = %err, "unimplemented feature requested");
                self.sink.alert(&err.to_string());
            }
        }
        self.diagnostics.push(err);
    }

    pub fn close_all_overlays(&mut self) {
        self.view.close_all_overlays();
        self.download_target = None;
    }

    pub fn render_state(&self) -> RenderState {
        let catalog = self.navigator.catalog();
        let video = self.navigator.current_video();
        let active = self.navigator.active_category();
        RenderState {
            view: self.view,
            title: video
                .map(|video| video.title.clone())
                .unwrap_or_else(|| EMPTY_TITLE.to_string()),
            video_category_label: video
                .map(|video| catalog.display_name(&video.category).to_string())
                .unwrap_or_default(),
            active_category: active.to_string(),
            active_category_label: catalog.display_name(active).to_string(),
            counter: self.navigator.counter_text(),
            source_url: video.map(|video| video.url.clone()),
            active_menu_item: self.active_menu_item.clone(),
            category_status_visible: self.view.player_visible(),
            clear_filter_visible: active != ALL,
            download_target: self.download_target.clone(),
            notices: self
                .notices
                .iter()
                .map(|notice| notice.message.clone())
                .collect(),
        }
    }

    fn handle_click(&mut self, target: Target) {
        let bound = target
            .region()
            .map_or(true, |region| self.regions.contains(&region));
        if bound {
            self.handle_target(&target);
        } else {
            tracing::trace!(clicked = ?target, "click on unbound region ignored");
        }
        self.dismiss_menu_on_outside_click(&target);
    }

    fn handle_target(&mut self, target: &Target) {
        match target {
            Target::MenuToggle | Target::MenuClose => self.view.toggle_menu(),
            Target::Category(name) => self.category_click(name),
            Target::ClearFilter => self.category_click(ALL),
            Target::GetVideo => {
                self.view.show_player();
                if let Err(err) = self.navigator.jump_to(0) {
                    tracing::debug!(error = %err, "no video to start");
                }
            }
            Target::Prev => self.step(Direction::Previous),
            Target::Next => self.step(Direction::Next),
            Target::Download => self.download(),
            Target::PopupOverlay | Target::PopupClose => self.close_download_popup(),
            Target::Quality(quality) => self.select_quality(quality),
            Target::OkButton => self.view.close_info_popup(),
            Target::Backdrop => self.close_all_overlays(),
            Target::SideMenu | Target::Elsewhere => {}
        }
    }

    fn dismiss_menu_on_outside_click(&mut self, target: &Target) {
        if self.view.menu_open()
            && self.regions.contains(&Region::SideMenu)
            && !target.within_menu()
            && self.viewport_width <= self.options.narrow_width
        {
            self.view.toggle_menu();
        }
    }

    fn category_click(&mut self, name: &str) {
        tracing::debug!(category = name, "category selected");
        self.active_menu_item = name.to_string();
        match name {
            HOME => {
                self.view.show_home();
                self.download_target = None;
            }
            HISTORY => self.report(ControllerError::UnimplementedFeature("History")),
            BEST => self.view.open_info_popup(),
            _ => {
                self.navigator.select_category(name);
                self.view.show_player();
            }
        }
    }

    fn handle_key(&mut self, key: Key) {
        match key {
            Key::Escape => self.close_all_overlays(),
            Key::ArrowLeft => self.arrow(Direction::Previous),
            Key::ArrowRight => self.arrow(Direction::Next),
            Key::Other => {}
        }
    }

    fn arrow(&mut self, direction: Direction) {
        if self.navigator.active_category() == BEST {
            self.view.open_info_popup();
        } else if self.view.player_visible() {
            self.step(direction);
        }
    }

    fn step(&mut self, direction: Direction) {
        if self.navigator.active_category() == BEST {
            self.view.open_info_popup();
            return;
        }
        match self.navigator.advance(direction) {
            Ok(index) => tracing::debug!(index, "playing video"),
            Err(err) => tracing::debug!(error = %err, "navigation unavailable"),
        }
    }

    fn download(&mut self) {
        if self.navigator.active_category() == BEST {
            self.view.open_info_popup();
            return;
        }
        match self.navigator.current_video().map(|video| video.id.clone()) {
            Some(id) => {
                self.download_target = Some(id);
                self.view.open_download_popup();
            }
            None => {
                let label = self
                    .navigator
                    .catalog()
                    .display_name(self.navigator.active_category())
                    .to_string();
                self.report(ControllerError::EmptyCollection(label));
            }
        }
    }

    fn close_download_popup(&mut self) {
        self.view.close_download_popup();
        self.download_target = None;
    }

    fn select_quality(&mut self, quality: &str) {
        if !self.view.download_popup_visible() {
            return;
        }
        tracing::info!(
            video = self.download_target.as_deref().unwrap_or_default(),
            quality,
            "simulated download started"
        );
        self.close_download_popup();
        self.push_notice(format!("Downloading in {quality}..."));
    }

    fn push_notice(&mut self, message: String) {
        self.notices.push(Notice {
            message,
            expires_at: Instant::now() + self.options.notice_ttl,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use std::sync::Arc;

    #[derive(Default)]
    struct RecordingSink {
        regions: Option<Regions>,
        renders: Vec<RenderState>,
        alerts: Vec<String>,
    }

    impl RenderSink for RecordingSink {
        fn regions(&self) -> Regions {
            self.regions
                .clone()
                .unwrap_or_else(|| Region::ALL.into_iter().collect())
        }

        fn render(&mut self, state: &RenderState) {
            self.renders.push(state.clone());
        }

        fn alert(&mut self, message: &str) {
            self.alerts.push(message.to_string());
        }
    }

    fn catalog() -> Arc<Catalog> {
        let raw = r#"
categories:
  - id: action
    name: Action
  - id: empty
    name: Empty
videos:
  - { id: A, title: Alpha, url: "https://example.com/a", category: action }
  - { id: B, title: Beta, url: "https://example.com/b", category: drama }
  - { id: C, title: Gamma, url: "https://example.com/c", category: action }
"#;
        Arc::new(Catalog::from_yaml(raw).unwrap())
    }

    fn controller_with(sink: RecordingSink, options: Options) -> Controller<RecordingSink> {
        Controller::new(Navigator::new(catalog()), ViewState::new(), sink, options)
    }

    fn controller() -> Controller<RecordingSink> {
        controller_with(RecordingSink::default(), Options::default())
    }

    fn click(ctrl: &mut Controller<RecordingSink>, target: Target) {
        ctrl.dispatch(Input::Click(target));
    }

    fn key(ctrl: &mut Controller<RecordingSink>, key: Key) {
        ctrl.dispatch(Input::Key {
            key,
            text_input_focused: false,
        });
    }

    fn category(name: &str) -> Target {
        Target::Category(name.to_string())
    }

    fn last(ctrl: &Controller<RecordingSink>) -> &RenderState {
        ctrl.sink().renders.last().unwrap()
    }

    #[test]
    fn renders_initial_state_once() {
        let ctrl = controller();
        assert_eq!(ctrl.sink().renders.len(), 1);
        let state = last(&ctrl);
        assert!(state.view.home_visible());
        assert_eq!(state.title, "Alpha");
        assert_eq!(state.counter, "1 / 3");
        assert!(!state.clear_filter_visible);
        assert!(ctrl.diagnostics().is_empty());
    }

    #[test]
    fn category_click_enters_player() {
        let mut ctrl = controller();
        click(&mut ctrl, category("action"));
        let state = last(&ctrl);
        assert!(state.view.player_visible());
        assert_eq!(state.active_category_label, "Action");
        assert_eq!(state.counter, "1 / 2");
        assert_eq!(state.source_url.as_deref(), Some("https://example.com/a"));
        assert_eq!(state.active_menu_item, "action");
        assert!(state.category_status_visible);
        assert!(state.clear_filter_visible);
    }

    #[test]
    fn best_opens_info_popup_and_keeps_navigator() {
        let mut ctrl = controller();
        click(&mut ctrl, category("action"));
        click(&mut ctrl, Target::Next);
        click(&mut ctrl, category("best"));
        assert_eq!(ctrl.navigator().active_category(), "action");
        assert_eq!(ctrl.navigator().active_index(), 1);
        assert!(ctrl.view().info_popup_visible());
        assert!(ctrl.view().player_visible());
        assert!(last(&ctrl).view.backdrop_visible());
    }

    #[test]
    fn history_alerts_without_state_change() {
        let mut ctrl = controller();
        let renders = ctrl.sink().renders.len();
        let view = *ctrl.view();
        click(&mut ctrl, category("history"));
        assert_eq!(ctrl.sink().alerts, ["History feature coming soon!"]);
        assert_eq!(*ctrl.view(), view);
        // only the menu highlight moves
        assert_eq!(ctrl.sink().renders.len(), renders + 1);
        assert_eq!(last(&ctrl).active_menu_item, "history");
    }

    #[test]
    fn home_click_returns_home_and_dismisses_overlays() {
        let mut ctrl = controller();
        click(&mut ctrl, category("action"));
        click(&mut ctrl, Target::Download);
        click(&mut ctrl, category("home"));
        let state = last(&ctrl);
        assert!(state.view.home_visible());
        assert!(!state.view.backdrop_visible());
        assert!(state.download_target.is_none());
        assert!(!state.category_status_visible);
    }

    #[test]
    fn clear_filter_selects_all() {
        let mut ctrl = controller();
        click(&mut ctrl, category("action"));
        click(&mut ctrl, Target::ClearFilter);
        assert_eq!(ctrl.navigator().active_category(), "all");
        assert!(!last(&ctrl).clear_filter_visible);
    }

    #[test]
    fn get_video_starts_at_first_record() {
        let mut ctrl = controller();
        click(&mut ctrl, Target::GetVideo);
        assert!(ctrl.view().player_visible());
        assert_eq!(ctrl.navigator().active_index(), 0);
    }

    #[test]
    fn get_video_on_empty_category_shows_empty_player() {
        let mut ctrl = controller();
        click(&mut ctrl, category("empty"));
        click(&mut ctrl, category(HOME));
        click(&mut ctrl, Target::GetVideo);
        assert!(ctrl.view().player_visible());
        assert!(ctrl.navigator().current_video().is_none());
        assert_eq!(ctrl.render_state().counter, "0 / 0");
    }

    #[test]
    fn arrows_navigate_only_in_player() {
        let mut ctrl = controller();
        key(&mut ctrl, Key::ArrowRight);
        assert_eq!(ctrl.navigator().active_index(), 0);

        click(&mut ctrl, Target::GetVideo);
        key(&mut ctrl, Key::ArrowLeft);
        assert_eq!(ctrl.navigator().active_index(), 2);
        key(&mut ctrl, Key::ArrowRight);
        assert_eq!(ctrl.navigator().active_index(), 0);
    }

    #[test]
    fn keys_are_ignored_while_typing() {
        let mut ctrl = controller();
        click(&mut ctrl, Target::MenuToggle);
        ctrl.dispatch(Input::Key {
            key: Key::Escape,
            text_input_focused: true,
        });
        assert!(ctrl.view().menu_open());
    }

    #[test]
    fn escape_closes_popup_and_menu_in_one_call() {
        let mut ctrl = controller();
        click(&mut ctrl, category("action"));
        click(&mut ctrl, Target::MenuToggle);
        click(&mut ctrl, Target::Download);
        assert!(ctrl.view().download_popup_visible());
        assert!(ctrl.view().menu_open());
        let renders = ctrl.sink().renders.len();

        key(&mut ctrl, Key::Escape);
        assert!(!ctrl.view().download_popup_visible());
        assert!(!ctrl.view().menu_open());
        assert_eq!(ctrl.sink().renders.len(), renders + 1);

        key(&mut ctrl, Key::Escape);
        assert_eq!(ctrl.sink().renders.len(), renders + 1);
    }

    #[test]
    fn arrows_on_best_open_info_popup() {
        let mut ctrl = controller();
        ctrl.navigator.select_category("best");
        key(&mut ctrl, Key::ArrowRight);
        assert!(ctrl.view().info_popup_visible());
        click(&mut ctrl, Target::OkButton);
        assert!(!ctrl.view().info_popup_visible());
        click(&mut ctrl, Target::Download);
        assert!(ctrl.view().info_popup_visible());
        assert!(!ctrl.view().download_popup_visible());
    }

    #[test]
    fn download_carries_current_video() {
        let mut ctrl = controller();
        click(&mut ctrl, Target::GetVideo);
        click(&mut ctrl, Target::Next);
        click(&mut ctrl, Target::Download);
        assert_eq!(last(&ctrl).download_target.as_deref(), Some("B"));
        click(&mut ctrl, Target::PopupClose);
        assert!(last(&ctrl).download_target.is_none());
        assert!(!ctrl.view().download_popup_visible());
    }

    #[test]
    fn download_on_empty_category_reports_notice() {
        let mut ctrl = controller();
        click(&mut ctrl, category("empty"));
        let state = last(&ctrl);
        assert_eq!(state.title, "No videos available");
        assert_eq!(state.counter, "0 / 0");
        assert!(state.source_url.is_none());

        click(&mut ctrl, Target::Download);
        assert!(!ctrl.view().download_popup_visible());
        assert_eq!(last(&ctrl).notices, ["No videos available in Empty"]);
        assert!(matches!(
            ctrl.diagnostics(),
            [ControllerError::EmptyCollection(_)]
        ));
    }

    #[test]
    fn quality_selection_closes_popup_and_notifies() {
        let mut ctrl = controller();
        click(&mut ctrl, Target::GetVideo);
        click(&mut ctrl, Target::Download);
        click(&mut ctrl, Target::Quality("720p".into()));
        let state = last(&ctrl);
        assert!(!state.view.download_popup_visible());
        assert_eq!(state.notices, ["Downloading in 720p..."]);
    }

    #[test]
    fn quality_without_popup_is_ignored() {
        let mut ctrl = controller();
        let renders = ctrl.sink().renders.len();
        click(&mut ctrl, Target::Quality("720p".into()));
        assert_eq!(ctrl.sink().renders.len(), renders);
    }

    #[test]
    fn notices_expire_independently() {
        let options = Options {
            notice_ttl: Duration::from_secs(5),
            ..Options::default()
        };
        let mut ctrl = controller_with(RecordingSink::default(), options);
        click(&mut ctrl, Target::GetVideo);
        for quality in ["1080p", "360p"] {
            click(&mut ctrl, Target::Download);
            click(&mut ctrl, Target::Quality(quality.into()));
        }
        assert_eq!(last(&ctrl).notices.len(), 2);

        let renders = ctrl.sink().renders.len();
        ctrl.dispatch(Input::Tick(Instant::now()));
        assert_eq!(ctrl.sink().renders.len(), renders);

        ctrl.dispatch(Input::Tick(Instant::now() + Duration::from_secs(60)));
        assert!(last(&ctrl).notices.is_empty());
        assert_eq!(ctrl.sink().renders.len(), renders + 1);
    }

    #[test]
    fn backdrop_click_closes_everything() {
        let mut ctrl = controller();
        click(&mut ctrl, category("best"));
        click(&mut ctrl, Target::MenuToggle);
        click(&mut ctrl, Target::Backdrop);
        assert!(!ctrl.view().backdrop_visible());
    }

    #[test]
    fn outside_click_closes_menu_only_when_narrow() {
        let mut ctrl = controller();
        ctrl.dispatch(Input::Resize { width: 200 });
        click(&mut ctrl, Target::MenuToggle);
        click(&mut ctrl, Target::Elsewhere);
        assert!(ctrl.view().menu_open());

        ctrl.dispatch(Input::Resize { width: 80 });
        click(&mut ctrl, category("action"));
        assert!(ctrl.view().menu_open());
        click(&mut ctrl, Target::SideMenu);
        assert!(ctrl.view().menu_open());
        click(&mut ctrl, Target::Elsewhere);
        assert!(!ctrl.view().menu_open());
    }

    #[test]
    fn menu_toggle_is_not_an_outside_click() {
        let mut ctrl = controller();
        ctrl.dispatch(Input::Resize { width: 40 });
        click(&mut ctrl, Target::MenuToggle);
        assert!(ctrl.view().menu_open());
        click(&mut ctrl, Target::MenuClose);
        assert!(!ctrl.view().menu_open());
    }

    #[test]
    fn absent_regions_are_not_bound() {
        let sink = RecordingSink {
            regions: Some([Region::CategoryItem, Region::MenuToggle].into_iter().collect()),
            ..RecordingSink::default()
        };
        let mut ctrl = controller_with(sink, Options::default());
        assert_eq!(ctrl.diagnostics().len(), Region::ALL.len() - 2);

        click(&mut ctrl, Target::GetVideo);
        assert!(ctrl.view().home_visible());
        click(&mut ctrl, category("action"));
        assert!(ctrl.view().player_visible());

        // no side menu region, so outside clicks never dismiss it
        ctrl.dispatch(Input::Resize { width: 10 });
        click(&mut ctrl, Target::MenuToggle);
        click(&mut ctrl, Target::Elsewhere);
        assert!(ctrl.view().menu_open());
    }

    #[test]
    fn resize_alone_does_not_render() {
        let mut ctrl = controller();
        let renders = ctrl.sink().renders.len();
        ctrl.dispatch(Input::Resize { width: 42 });
        assert_eq!(ctrl.sink().renders.len(), renders);
    }

    #[test]
    fn menu_lists_reserved_and_declared_categories() {
        let ctrl = controller();
        let ids: Vec<_> = ctrl.menu().into_iter().map(|entry| entry.id).collect();
        assert_eq!(ids, ["home", "all", "action", "empty", "best", "history"]);
    }
}
