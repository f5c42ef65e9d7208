#![forbid(unsafe_code)]

//! Host-driven dashboard page runtime.
//!
//! [`DashboardPage`] owns every piece of view state and a deterministic
//! [`Scheduler`] standing in for timers and animation frames. The host
//! (JavaScript) drives it:
//!
//! 1. [`DashboardPage::new`] with the scanned [`PageLayout`], then
//!    [`DashboardPage::init`] once the document is parsed.
//! 2. Forward DOM events via [`DashboardPage::handle`] and call the global
//!    entry points (`open_modal`, `toggle_description`, ...) from inline
//!    handlers.
//! 3. Advance time via [`DashboardPage::advance_time`] and signal each
//!    animation frame via [`DashboardPage::animation_frame`].
//! 4. Apply [`DashboardPage::take_outputs`] to the document.
//!
//! # Example
//!
//! ```
//! use core::time::Duration;
//! use dashview_web::{DashboardPage, HostEvent, PageConfig, PageLayout};
//!
//! let mut page = DashboardPage::new(PageLayout::default(), PageConfig::default())?;
//! page.init()?;
//! page.handle(HostEvent::Loaded);
//! page.advance_time(Duration::from_millis(1000));
//! let outputs = page.take_outputs();
//! assert!(!outputs.patches.is_empty());
//! # Ok::<(), dashview_web::PageError>(())
//! ```

use core::time::Duration;
use std::collections::HashMap;

use dashview_core::animation::{
    CounterAnimation, ProgressFill, Reveal, parse_counter_target, translate_y_css,
};
use dashview_core::debounce::Debouncer;
use dashview_core::scheduler::{Scheduler, TimerId};
use dashview_core::visibility::OneShotObserver;
use dashview_widgets::ItemId;
use dashview_widgets::accordion::Accordion;
use dashview_widgets::chart::{ChartAdapter, ChartRender};
use dashview_widgets::description::{DescriptionPanels, ScrollBlock, ScrollTarget};
use dashview_widgets::document::{DocumentAction, route_document};
use dashview_widgets::filter::{CategoryFilter, FilterEffect};
use dashview_widgets::modal::{
    Layer, ModalConfig, ModalController, ModalEffect, Overlay, OverlayElement, SourceSlot,
};
use dashview_widgets::navigation::{AnchorScroll, MobileMenu, resolve_anchor};
use dashview_widgets::scroll_tracker::{ScrollTracker, ScrollUpdate};
use dashview_widgets::search::{GallerySearch, SearchQuery};
use dashview_widgets::view_mode::{ViewLayout, ViewMode, ViewModeSwitch};

use crate::event::{EventResponse, HostEvent};
use crate::layout::{Elements, PageLayout};
use crate::node::Node;
use crate::{DomPatch, HostCommand, PageConfig, PageError, PageOutputs};

/// Console lines printed once startup completes.
pub const READY_BANNER: [&str; 3] = [
    "🎯 Objectives 2025 - Application Initialized Successfully",
    "📊 Dashboard loaded and ready",
    "بلدية مدينة أبوظبي - إدارة الرفق بالحيوان",
];

const ACTIVE: &str = "active";
const HIDDEN: &str = "hidden";
const SEARCH_HIDDEN: &str = "search-hidden";
const FILTER_LEAVE_OFFSET: f64 = 20.0;

/// Deferred work queued on the scheduler.
#[derive(Debug, Clone, PartialEq)]
enum PageTask {
    HideLoadingScreen,
    ScrollFrame,
    FilterFrame(String),
    FadeIn(ItemId),
    RemoveItem(ItemId),
    Search(TimerId),
    CounterFrame(String),
    ProgressFill(String),
    ProgressFrame(String),
    ClearSource(SourceSlot),
    ScrollIntoView(Node, ScrollBlock),
}

/// The page's complete view state.
#[derive(Debug)]
pub struct DashboardPage {
    config: PageConfig,
    layout: PageLayout,
    sched: Scheduler<PageTask>,
    outputs: PageOutputs,
    initialized: bool,
    frame_idx: u64,

    menu: MobileMenu,
    scroll: ScrollTracker,
    navbar_hidden: bool,
    active_link: Option<String>,

    counter_observer: OneShotObserver<String>,
    progress_observer: OneShotObserver<String>,
    reveal_observer: OneShotObserver<String>,
    counters: HashMap<String, CounterAnimation>,
    progress: HashMap<String, ProgressFill>,

    filter: CategoryFilter,
    accordion: Accordion,
    search: GallerySearch,
    search_debounce: Debouncer<String>,
    view: ViewModeSwitch,

    modal: ModalController,
    source_clears: HashMap<SourceSlot, TimerId>,
    descriptions: DescriptionPanels,
    charts: ChartAdapter,
}

impl DashboardPage {
    /// Build the page state from the scanned layout.
    ///
    /// Fails when a required element is missing.
    pub fn new(layout: PageLayout, config: PageConfig) -> Result<Self, PageError> {
        layout.validate()?;

        let frame = config.frame_interval();
        let mut counters = HashMap::new();
        for spec in &layout.counters {
            match parse_counter_target(&spec.target) {
                Some(target) => {
                    counters.insert(
                        spec.key.clone(),
                        CounterAnimation::new(target, config.counter_duration(), frame),
                    );
                }
                None => {
                    dashview_core::warn!(
                        key = %spec.key,
                        raw = %spec.target,
                        "counter target is not a number"
                    );
                }
            }
        }
        let mut progress = HashMap::new();
        for spec in &layout.progress_bars {
            match parse_counter_target(&spec.percent) {
                Some(percent) => {
                    let mut fill = ProgressFill::new(percent);
                    *fill.counter_mut() =
                        CounterAnimation::new(percent, config.progress_duration(), frame);
                    progress.insert(spec.key.clone(), fill);
                }
                None => {
                    dashview_core::warn!(
                        key = %spec.key,
                        raw = %spec.percent,
                        "progress value is not a number"
                    );
                }
            }
        }

        let modal = ModalController::new(ModalConfig {
            location: layout.location.clone(),
            office_viewer: config.office_viewer_url.clone(),
            monthly_plan_url: config.monthly_plan_url.clone(),
            popup_clear_delay: config.popup_clear_delay(),
        });

        Ok(Self {
            sched: Scheduler::new(),
            outputs: PageOutputs::default(),
            initialized: false,
            frame_idx: 0,
            menu: MobileMenu::default(),
            scroll: ScrollTracker::new(config.scroll()),
            navbar_hidden: false,
            active_link: None,
            counter_observer: OneShotObserver::new(config.counter_observer()),
            progress_observer: OneShotObserver::new(config.progress_observer()),
            reveal_observer: OneShotObserver::new(config.reveal_observer()),
            counters,
            progress,
            filter: CategoryFilter::new(layout.gallery_tabs.clone(), layout.grid_items.clone())
                .with_removal_delay(config.fade_removal()),
            accordion: Accordion::new(layout.accordion_groups.clone()),
            search: GallerySearch::new(),
            search_debounce: Debouncer::new(config.search_debounce()),
            view: ViewModeSwitch::default(),
            modal,
            source_clears: HashMap::new(),
            descriptions: DescriptionPanels::new(
                config.description_expand_scroll(),
                config.description_collapse_scroll(),
            ),
            charts: ChartAdapter::new(config.charts.clone()),
            config,
            layout,
        })
    }

    /// Document-ready initialization. Call exactly once.
    pub fn init(&mut self) -> Result<(), PageError> {
        if self.initialized {
            return Err(PageError::AlreadyInitialized);
        }
        self.initialized = true;

        let expanded: Vec<_> = self.accordion.expanded_ids().cloned().collect();
        for id in expanded {
            self.patch(DomPatch::class(Node::AccordionGroup(id), ACTIVE, true));
        }

        for key in self.counters.keys() {
            self.counter_observer.observe(key.clone());
        }
        for key in self.progress.keys() {
            self.progress_observer.observe(key.clone());
        }
        let reveals = self.layout.reveals.clone();
        for key in reveals {
            let node = Node::Reveal(key.clone());
            self.patch(DomPatch::style(node.clone(), "opacity", Reveal::REST.opacity_css()));
            self.patch(DomPatch::style(node.clone(), "transform", Reveal::REST.transform_css()));
            self.patch(DomPatch::style(node, "transition", Reveal::TRANSITION));
            self.reveal_observer.observe(key);
        }

        let canvases = &self.layout.chart_canvases;
        let render = self.charts.init(self.layout.has(Elements::CHART_LIBRARY), |id| {
            canvases.iter().any(|c| c == id)
        });
        match render {
            ChartRender::Skipped { warning } => self.outputs.logs.push(warning.to_owned()),
            ChartRender::Rendered(specs) => {
                for spec in specs {
                    self.outputs.commands.push(HostCommand::CreateChart {
                        config: spec.library_config(),
                        canvas_id: spec.canvas_id,
                        value_suffix: spec.value_suffix,
                    });
                }
            }
            ChartRender::AlreadyInitialized => {}
        }

        self.outputs
            .logs
            .extend(READY_BANNER.iter().map(|line| (*line).to_owned()));
        dashview_core::info!(
            counters = self.counters.len(),
            progress_bars = self.progress.len(),
            reveals = self.reveal_observer.len(),
            "dashboard initialized"
        );
        Ok(())
    }

    /// Dispatch one DOM event.
    pub fn handle(&mut self, event: HostEvent) -> EventResponse {
        match event {
            HostEvent::Loaded => {
                self.sched
                    .set_timeout(self.config.loading_delay(), PageTask::HideLoadingScreen);
            }
            HostEvent::Scroll { offset } => {
                self.scroll
                    .on_scroll(&mut self.sched, offset, PageTask::ScrollFrame);
            }
            HostEvent::Click(node) => return self.click(node),
            HostEvent::Key(key) => {
                if key == "Escape" {
                    let effects = self.modal.escape();
                    self.apply_modal(effects);
                }
            }
            HostEvent::SearchInput(value) => {
                if self.layout.has(Elements::SEARCH_BOX) {
                    self.search_debounce
                        .call(&mut self.sched, value, PageTask::Search);
                }
            }
            HostEvent::Intersection { node, fraction } => self.intersect(node, fraction),
            HostEvent::BeforePrint => self.fill_progress_for_print(),
        }
        EventResponse::default()
    }

    /// Advance the clock by `dt` and run every timer that comes due.
    pub fn advance_time(&mut self, dt: Duration) {
        let mut due = self.sched.advance(dt);
        while !due.is_empty() {
            for task in due {
                self.run(task);
            }
            due = self.sched.advance(Duration::ZERO);
        }
    }

    /// Run the callbacks queued for this animation frame.
    ///
    /// Callbacks requested while the frame runs wait for the next one.
    pub fn animation_frame(&mut self) {
        self.frame_idx += 1;
        for task in self.sched.begin_frame() {
            self.run(task);
        }
    }

    /// Take and reset accumulated outputs.
    pub fn take_outputs(&mut self) -> PageOutputs {
        std::mem::take(&mut self.outputs)
    }

    #[must_use]
    pub const fn outputs(&self) -> &PageOutputs {
        &self.outputs
    }

    #[must_use]
    pub const fn config(&self) -> &PageConfig {
        &self.config
    }

    #[must_use]
    pub const fn layout(&self) -> &PageLayout {
        &self.layout
    }

    #[must_use]
    pub fn now(&self) -> Duration {
        self.sched.now()
    }

    /// Animation frames signalled so far.
    #[must_use]
    pub const fn frame_idx(&self) -> u64 {
        self.frame_idx
    }

    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.sched.pending_timers()
    }

    /// Time until the earliest pending timer fires, for the host's
    /// `setTimeout`. `None` when no timer is pending.
    #[must_use]
    pub fn next_deadline_in(&self) -> Option<Duration> {
        self.sched.next_deadline_in()
    }

    #[must_use]
    pub fn pending_frames(&self) -> usize {
        self.sched.pending_frames()
    }

    #[must_use]
    pub const fn scroll_tracker(&self) -> &ScrollTracker {
        &self.scroll
    }

    #[must_use]
    pub const fn menu(&self) -> &MobileMenu {
        &self.menu
    }

    #[must_use]
    pub const fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    #[must_use]
    pub const fn accordion(&self) -> &Accordion {
        &self.accordion
    }

    #[must_use]
    pub const fn search(&self) -> &GallerySearch {
        &self.search
    }

    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        self.view.active()
    }

    #[must_use]
    pub const fn modal(&self) -> &ModalController {
        &self.modal
    }

    #[must_use]
    pub fn is_description_expanded(&self, id: &str) -> bool {
        self.descriptions.is_expanded(id)
    }

    // ---- global entry points -------------------------------------------

    /// Preview `src` in the shared document modal. `kind` is the markup
    /// type (`image`, `pdf`, `pptx`, `docx`); unknown kinds are ignored.
    pub fn open_modal(&mut self, src: &str, kind: &str) {
        match Overlay::document(src, kind) {
            Ok(overlay) => {
                let effects = self.modal.open(overlay);
                self.apply_modal(effects);
            }
            Err(err) => {
                dashview_core::warn!(src, "ignoring modal open: {err}");
            }
        }
    }

    pub fn close_modal(&mut self) {
        let effects = self.modal.close_element(OverlayElement::DocumentModal);
        self.apply_modal(effects);
    }

    /// Download entry point: PDFs open in a new tab, decks download.
    pub fn open_document(&mut self, filename: &str) {
        match route_document(filename) {
            Some(DocumentAction::OpenInNewTab { href }) => {
                self.outputs.commands.push(HostCommand::OpenInNewTab { href });
            }
            Some(DocumentAction::Download { href, file_name }) => {
                self.outputs
                    .commands
                    .push(HostCommand::Download { href, file_name });
            }
            None => {
                dashview_core::warn!(filename, "no download route for document");
            }
        }
    }

    pub fn open_external_project(&mut self, url: &str) {
        if self.overlay_present(OverlayElement::ProjectModal) {
            let effects = self.modal.open(Overlay::ExternalProject {
                url: url.to_owned(),
            });
            self.apply_modal(effects);
        }
    }

    pub fn close_project_modal(&mut self) {
        let effects = self.modal.close_element(OverlayElement::ProjectModal);
        self.apply_modal(effects);
    }

    pub fn show_inspection_plan_description(&mut self) {
        if self.overlay_present(OverlayElement::InspectionModal) {
            let effects = self.modal.open(Overlay::InspectionPlan);
            self.apply_modal(effects);
        }
    }

    pub fn close_inspection_plan_modal(&mut self) {
        let effects = self.modal.close_layer(Layer::InspectionPlan);
        self.apply_modal(effects);
    }

    /// The popup stacks above whatever is open.
    pub fn open_monthly_plan_popup(&mut self) {
        if self.overlay_present(OverlayElement::MonthlyPopup) {
            let effects = self.modal.layer(Overlay::MonthlyPlanPopup);
            self.apply_modal(effects);
        }
    }

    pub fn close_monthly_plan_popup(&mut self) {
        let effects = self.modal.close_layer(Layer::MonthlyPlanPopup);
        self.apply_modal(effects);
    }

    /// Expand or collapse objective description `id`, then scroll it into view.
    pub fn toggle_description(&mut self, id: &str) {
        let toggle = self.descriptions.toggle(id);
        self.patch(DomPatch::class(
            Node::Description(toggle.id.clone()),
            ACTIVE,
            toggle.expanded,
        ));
        self.patch(DomPatch::class(
            Node::DescriptionButton(toggle.id.clone()),
            ACTIVE,
            toggle.expanded,
        ));
        let target = match toggle.scroll_target {
            ScrollTarget::Content => Node::Description(toggle.id),
            ScrollTarget::Button => Node::DescriptionButton(toggle.id),
        };
        self.sched.set_timeout(
            toggle.scroll_delay,
            PageTask::ScrollIntoView(target, toggle.block),
        );
    }

    /// View toggle button carrying a raw `data-view` value.
    ///
    /// Values other than `accordion` and `grid` are ignored.
    pub fn select_view(&mut self, raw: &str) {
        match raw.parse::<ViewMode>() {
            Ok(mode) => self.switch_view(mode),
            Err(err) => {
                dashview_core::debug!("ignoring view toggle: {err}");
            }
        }
    }

    // ---- dispatch ------------------------------------------------------

    fn click(&mut self, node: Node) -> EventResponse {
        match node {
            Node::MenuToggle => {
                let open = self.menu.toggle();
                self.patch_menu(open);
            }
            Node::NavLink(id) => {
                if self.menu.close() {
                    self.patch_menu(false);
                }
                return self.scroll_to_anchor(&format!("#{id}"));
            }
            Node::Anchor(href) => return self.scroll_to_anchor(&href),
            Node::GalleryTab(tag) => self.select_tab(tag),
            Node::AccordionHeader(id) => {
                if let Some(expanded) = self.accordion.toggle(&id) {
                    self.patch(DomPatch::class(Node::AccordionGroup(id), ACTIVE, expanded));
                }
            }
            Node::ViewButton(mode) => self.switch_view(mode),
            Node::ModalClose => self.close_modal(),
            Node::Overlay(element) => {
                let effects = self.modal.scrim_click(element);
                self.apply_modal(effects);
            }
            Node::DescriptionButton(id) => self.toggle_description(&id),
            _ => {}
        }
        EventResponse::default()
    }

    fn run(&mut self, task: PageTask) {
        match task {
            PageTask::HideLoadingScreen => {
                self.patch(DomPatch::class(Node::LoadingScreen, HIDDEN, true));
            }
            PageTask::ScrollFrame => {
                if let Some(update) = self.scroll.on_frame(&self.layout.sections) {
                    self.apply_scroll(update);
                }
            }
            PageTask::FilterFrame(tag) => {
                let effects = self.filter.apply(
                    &tag,
                    &mut self.sched,
                    |id| PageTask::FadeIn(id.clone()),
                    |id| PageTask::RemoveItem(id.clone()),
                );
                self.apply_filter(effects);
            }
            PageTask::FadeIn(id) => {
                if let Some(effect) = self.filter.fade_in(&id) {
                    self.apply_filter(vec![effect]);
                }
            }
            PageTask::RemoveItem(id) => {
                if let Some(effect) = self.filter.remove(&id) {
                    self.apply_filter(vec![effect]);
                }
            }
            PageTask::Search(timer) => {
                if let Some(raw) = self.search_debounce.fire(timer) {
                    self.run_search(&raw);
                }
            }
            PageTask::CounterFrame(key) => self.counter_frame(key),
            PageTask::ProgressFill(key) => {
                if let Some(fill) = self.progress.get(&key) {
                    let width = fill.width_css();
                    self.patch(DomPatch::style(Node::ProgressFill(key), "width", width));
                }
            }
            PageTask::ProgressFrame(key) => self.progress_frame(key),
            PageTask::ClearSource(slot) => {
                self.source_clears.remove(&slot);
                self.patch(DomPatch::SetSource {
                    node: Node::Source(slot),
                    src: String::new(),
                });
            }
            PageTask::ScrollIntoView(node, block) => {
                self.outputs
                    .commands
                    .push(HostCommand::ScrollIntoView { node, block });
            }
        }
    }

    // ---- navigation ----------------------------------------------------

    fn patch_menu(&mut self, open: bool) {
        self.patch(DomPatch::class(Node::NavLinks, ACTIVE, open));
        self.patch(DomPatch::class(Node::MenuToggle, ACTIVE, open));
    }

    fn scroll_to_anchor(&mut self, href: &str) -> EventResponse {
        let AnchorScroll {
            prevent_default,
            scroll_to,
        } = resolve_anchor(href, &self.layout.sections, self.config.anchor_offset);
        if let Some(top) = scroll_to {
            self.outputs
                .commands
                .push(HostCommand::ScrollTo { top, smooth: true });
        }
        EventResponse { prevent_default }
    }

    fn apply_scroll(&mut self, update: ScrollUpdate) {
        if update.navbar_hidden != self.navbar_hidden {
            self.navbar_hidden = update.navbar_hidden;
            let transform = if update.navbar_hidden {
                "translateY(-100%)"
            } else {
                "translateY(0)"
            };
            self.patch(DomPatch::style(Node::Navbar, "transform", transform));
        }
        if update.active_section != self.active_link {
            if let Some(previous) = self.active_link.take() {
                self.patch(DomPatch::class(Node::NavLink(previous), ACTIVE, false));
            }
            if let Some(current) = &update.active_section {
                self.patch(DomPatch::class(Node::NavLink(current.clone()), ACTIVE, true));
            }
            self.active_link = update.active_section;
        }
        if self.layout.has(Elements::HERO) {
            self.patch(DomPatch::style(
                Node::Hero,
                "transform",
                translate_y_css(update.parallax_offset),
            ));
        }
    }

    // ---- gallery -------------------------------------------------------

    fn select_tab(&mut self, tag: String) {
        for (tab, active) in self.filter.select(&tag) {
            self.patch(DomPatch::class(Node::GalleryTab(tab), ACTIVE, active));
        }
        self.sched.request_frame(PageTask::FilterFrame(tag));
    }

    fn apply_filter(&mut self, effects: Vec<FilterEffect>) {
        for effect in effects {
            match effect {
                FilterEffect::Display(id) => {
                    self.patch(DomPatch::style(Node::GridItem(id), "display", "block"));
                }
                FilterEffect::FadeIn(id) => {
                    self.patch(DomPatch::style(Node::GridItem(id.clone()), "opacity", "1"));
                    self.patch(DomPatch::style(
                        Node::GridItem(id),
                        "transform",
                        translate_y_css(0.0),
                    ));
                }
                FilterEffect::FadeOut(id) => {
                    self.patch(DomPatch::style(Node::GridItem(id.clone()), "opacity", "0"));
                    self.patch(DomPatch::style(
                        Node::GridItem(id),
                        "transform",
                        translate_y_css(FILTER_LEAVE_OFFSET),
                    ));
                }
                FilterEffect::Remove(id) => {
                    self.patch(DomPatch::style(Node::GridItem(id), "display", "none"));
                }
            }
        }
    }

    fn run_search(&mut self, raw: &str) {
        let report = self
            .search
            .apply(&mut self.accordion, SearchQuery::parse(raw));
        for (id, hidden) in report.items {
            self.patch(DomPatch::class(Node::AccordionItem(id), SEARCH_HIDDEN, hidden));
        }
        for (id, hidden) in report.groups {
            self.patch(DomPatch::class(Node::AccordionGroup(id), SEARCH_HIDDEN, hidden));
        }
        for id in report.opened {
            self.patch(DomPatch::class(Node::AccordionGroup(id), ACTIVE, true));
        }
    }

    fn switch_view(&mut self, mode: ViewMode) {
        let layout = self.view.switch(mode);
        self.apply_view_layout(&layout);
    }

    fn apply_view_layout(&mut self, layout: &ViewLayout) {
        for (mode, active) in layout.controls {
            self.patch(DomPatch::class(Node::ViewButton(mode), ACTIVE, active));
            self.patch(DomPatch::SetAttribute {
                node: Node::ViewButton(mode),
                name: "aria-selected",
                value: active.to_string(),
            });
        }
        let targets = [
            (Elements::ACCORDION_VIEW, Node::AccordionView, layout.accordion_hidden),
            (Elements::GRID_VIEW, Node::GridView, layout.grid_hidden),
            (Elements::GRID_TABS, Node::GridTabs, layout.tabs_hidden),
        ];
        for (flag, node, hidden) in targets {
            if self.layout.has(flag) {
                self.patch(DomPatch::class(node, HIDDEN, hidden));
            }
        }
    }

    // ---- visibility-driven animation -----------------------------------

    fn intersect(&mut self, node: Node, fraction: f64) {
        match node {
            Node::Counter(key) => {
                if self.counter_observer.report(&key, fraction) {
                    self.counter_frame(key);
                }
            }
            Node::ProgressFill(key) => {
                if self.progress_observer.report(&key, fraction) {
                    self.sched.set_timeout(
                        self.config.progress_fill_delay(),
                        PageTask::ProgressFill(key.clone()),
                    );
                    self.progress_frame(key);
                }
            }
            Node::Reveal(key) => {
                if self.reveal_observer.report(&key, fraction) {
                    let node = Node::Reveal(key);
                    self.patch(DomPatch::style(
                        node.clone(),
                        "opacity",
                        Reveal::SHOWN.opacity_css(),
                    ));
                    self.patch(DomPatch::style(node, "transform", Reveal::SHOWN.transform_css()));
                }
            }
            _ => {}
        }
    }

    fn counter_frame(&mut self, key: String) {
        let Some(frame) = self.counters.get_mut(&key).map(CounterAnimation::tick) else {
            return;
        };
        self.patch(DomPatch::SetText {
            node: Node::Counter(key.clone()),
            text: frame.label(""),
        });
        if !frame.done {
            self.sched.request_frame(PageTask::CounterFrame(key));
        }
    }

    fn progress_frame(&mut self, key: String) {
        let Some(frame) = self
            .progress
            .get_mut(&key)
            .map(|fill| fill.counter_mut().tick())
        else {
            return;
        };
        self.patch(DomPatch::SetText {
            node: Node::ProgressLabel(key.clone()),
            text: frame.label("%"),
        });
        if !frame.done {
            self.sched.request_frame(PageTask::ProgressFrame(key));
        }
    }

    fn fill_progress_for_print(&mut self) {
        let mut widths: Vec<_> = self
            .progress
            .iter()
            .map(|(key, fill)| (key.clone(), fill.width_css()))
            .collect();
        widths.sort();
        for (key, width) in widths {
            self.patch(DomPatch::style(Node::ProgressFill(key), "width", width));
        }
    }

    // ---- overlays ------------------------------------------------------

    fn overlay_present(&self, element: OverlayElement) -> bool {
        let present = self.layout.has(Elements::overlay(element));
        if !present {
            dashview_core::warn!(element = ?element, "overlay element missing; ignoring open");
        }
        present
    }

    fn cancel_source_clear(&mut self, slot: SourceSlot) {
        if let Some(timer) = self.source_clears.remove(&slot) {
            self.sched.clear_timeout(timer);
        }
    }

    fn apply_modal(&mut self, effects: Vec<ModalEffect>) {
        for effect in effects {
            match effect {
                ModalEffect::Activate(element) => {
                    self.patch(DomPatch::class(Node::Overlay(element), ACTIVE, true));
                }
                ModalEffect::Deactivate(element) => {
                    self.patch(DomPatch::class(Node::Overlay(element), ACTIVE, false));
                }
                ModalEffect::ShowViewer(viewer) => {
                    self.patch(DomPatch::style(Node::viewer(viewer), "display", "block"));
                }
                ModalEffect::HideViewer(viewer) => {
                    self.patch(DomPatch::style(Node::viewer(viewer), "display", "none"));
                }
                ModalEffect::SetSource { slot, url } => {
                    self.cancel_source_clear(slot);
                    self.patch(DomPatch::SetSource {
                        node: Node::Source(slot),
                        src: url,
                    });
                }
                ModalEffect::ClearSource(slot) => {
                    self.cancel_source_clear(slot);
                    self.patch(DomPatch::SetSource {
                        node: Node::Source(slot),
                        src: String::new(),
                    });
                }
                ModalEffect::ClearSourceAfter { slot, delay } => {
                    self.cancel_source_clear(slot);
                    let timer = self.sched.set_timeout(delay, PageTask::ClearSource(slot));
                    self.source_clears.insert(slot, timer);
                }
                ModalEffect::LockScroll(lock) => {
                    let overflow = if lock { "hidden" } else { "auto" };
                    self.patch(DomPatch::style(Node::Body, "overflow", overflow));
                }
            }
        }
    }

    fn patch(&mut self, patch: DomPatch) {
        self.outputs.patches.push(patch);
    }
}
