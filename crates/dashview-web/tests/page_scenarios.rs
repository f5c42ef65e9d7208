#![forbid(unsafe_code)]

//! Deterministic page scenarios: host events in, DOM patches out.
//!
//! Run: `cargo test -p dashview-web --test page_scenarios`

use core::time::Duration;

use pretty_assertions::assert_eq;

use dashview_web::{
    CounterSpec, DashboardPage, DomPatch, Elements, EventResponse, HostCommand, HostEvent, Node,
    PageConfig, PageError, PageLayout, ProgressSpec,
};
use dashview_widgets::accordion::AccordionGroup;
use dashview_widgets::document::{DocumentKind, OfficeFormat};
use dashview_widgets::modal::{Layer, Overlay, OverlayElement, SourceSlot};
use dashview_widgets::scroll_tracker::Section;
use dashview_widgets::view_mode::ViewMode;
use dashview_widgets::{ContentItem, GroupId, ItemId};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn grid_items() -> Vec<ContentItem> {
    vec![
        ContentItem::new("g1").with_category("vaccination"),
        ContentItem::new("g2").with_category("inspection"),
        ContentItem::new("g3").with_category("vaccination"),
    ]
}

fn accordion_groups() -> Vec<AccordionGroup> {
    vec![
        AccordionGroup::new(
            "campaigns",
            vec![
                ContentItem::new("a1")
                    .with_search_text("rabies vaccination drive")
                    .with_display_text("Vaccination"),
                ContentItem::new("a2")
                    .with_search_text("cat adoption day")
                    .with_display_text("Adoption"),
            ],
        ),
        AccordionGroup::new(
            "inspections",
            vec![
                ContentItem::new("a3")
                    .with_search_text("market inspection")
                    .with_display_text("Pet shop visit"),
            ],
        ),
        AccordionGroup::new(
            "reports",
            vec![ContentItem::new("a4").with_search_text("stray dog census")],
        ),
    ]
}

fn full_layout() -> PageLayout {
    PageLayout::default()
        .with_elements(
            Elements::HERO
                | Elements::SEARCH_BOX
                | Elements::ACCORDION_VIEW
                | Elements::GRID_VIEW
                | Elements::GRID_TABS
                | Elements::PROJECT_MODAL
                | Elements::INSPECTION_MODAL
                | Elements::MONTHLY_POPUP,
        )
        .with_sections(vec![
            Section::new("home", 0.0),
            Section::new("objectives", 600.0),
            Section::new("gallery", 1400.0),
        ])
        .with_gallery(
            vec!["all".into(), "vaccination".into(), "inspection".into()],
            grid_items(),
        )
        .with_accordion(accordion_groups())
}

fn started(layout: PageLayout) -> DashboardPage {
    let mut page = DashboardPage::new(layout, PageConfig::default()).expect("valid layout");
    page.init().expect("init");
    page.take_outputs();
    page
}

fn patches(page: &mut DashboardPage) -> Vec<DomPatch> {
    page.take_outputs().patches
}

fn style(node: Node, property: &'static str, value: &str) -> DomPatch {
    DomPatch::style(node, property, value)
}

fn grid(id: &str) -> Node {
    Node::GridItem(ItemId::new(id))
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn missing_required_element_fails_construction() {
    let layout = PageLayout {
        elements: Elements::REQUIRED - Elements::NAVBAR,
        ..PageLayout::default()
    };
    let err = DashboardPage::new(layout, PageConfig::default()).unwrap_err();
    assert_eq!(err, PageError::MissingElement("NAVBAR"));
}

#[test]
fn init_expands_first_accordion_group() {
    let mut page = DashboardPage::new(full_layout(), PageConfig::default()).expect("layout");
    page.init().expect("init");
    let out = page.take_outputs();
    assert_eq!(
        out.patches,
        vec![DomPatch::class(
            Node::AccordionGroup(GroupId::new("campaigns")),
            "active",
            true
        )]
    );
    assert!(page.accordion().is_expanded(&GroupId::new("campaigns")));
    assert!(!page.accordion().is_expanded(&GroupId::new("reports")));
}

#[test]
fn charts_render_only_with_library_and_canvas() {
    let layout = PageLayout::default()
        .with_elements(Elements::CHART_LIBRARY)
        .with_chart_canvases(vec!["objectivesChart".into()]);
    let mut page = DashboardPage::new(layout, PageConfig::default()).expect("layout");
    page.init().expect("init");
    let out = page.take_outputs();
    let canvases: Vec<&str> = out
        .commands
        .iter()
        .filter_map(|c| match c {
            HostCommand::CreateChart { canvas_id, .. } => Some(canvas_id.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(canvases, vec!["objectivesChart"]);
    assert!(
        !out.logs
            .iter()
            .any(|l| l == dashview_widgets::chart::LIBRARY_MISSING_WARNING)
    );
}

// ---------------------------------------------------------------------------
// Scroll tracking
// ---------------------------------------------------------------------------

#[test]
fn navbar_stays_until_a_downward_delta_past_threshold() {
    let mut page = started(full_layout());

    page.handle(HostEvent::Scroll { offset: 150.0 });
    page.animation_frame();
    assert!(!page.scroll_tracker().navbar_hidden());
    assert_eq!(
        patches(&mut page),
        vec![
            DomPatch::class(Node::NavLink("home".into()), "active", true),
            style(Node::Hero, "transform", "translate3d(0, 75px, 0)"),
        ]
    );

    page.handle(HostEvent::Scroll { offset: 200.0 });
    page.animation_frame();
    assert!(page.scroll_tracker().navbar_hidden());
    assert_eq!(
        patches(&mut page),
        vec![
            style(Node::Navbar, "transform", "translateY(-100%)"),
            style(Node::Hero, "transform", "translate3d(0, 100px, 0)"),
        ]
    );

    page.handle(HostEvent::Scroll { offset: 180.0 });
    page.animation_frame();
    assert!(!page.scroll_tracker().navbar_hidden());
}

#[test]
fn scroll_burst_coalesces_into_one_frame() {
    let mut page = started(full_layout());
    for offset in [300.0, 500.0, 700.0] {
        page.handle(HostEvent::Scroll { offset });
    }
    assert_eq!(page.pending_frames(), 1);
    page.animation_frame();
    assert_eq!(page.scroll_tracker().last_offset(), Some(700.0));
    assert_eq!(page.scroll_tracker().active_section(), Some("objectives"));
    assert_eq!(page.pending_frames(), 0);
}

#[test]
fn active_link_moves_between_sections() {
    let mut page = started(PageLayout::default().with_sections(vec![
        Section::new("home", 0.0),
        Section::new("gallery", 1400.0),
    ]));
    page.handle(HostEvent::Scroll { offset: 10.0 });
    page.animation_frame();
    page.take_outputs();

    page.handle(HostEvent::Scroll { offset: 1250.0 });
    page.animation_frame();
    assert_eq!(
        patches(&mut page),
        vec![
            DomPatch::style(Node::Navbar, "transform", "translateY(-100%)"),
            DomPatch::class(Node::NavLink("home".into()), "active", false),
            DomPatch::class(Node::NavLink("gallery".into()), "active", true),
        ]
    );
}

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

#[test]
fn anchor_click_scrolls_with_offset() {
    let mut page = started(full_layout());
    let response = page.handle(HostEvent::click(Node::Anchor("#gallery".into())));
    assert_eq!(
        response,
        EventResponse {
            prevent_default: true
        }
    );
    assert_eq!(
        page.take_outputs().commands,
        vec![HostCommand::ScrollTo {
            top: 1320.0,
            smooth: true
        }]
    );

    let response = page.handle(HostEvent::click(Node::Anchor("#".into())));
    assert_eq!(response, EventResponse::default());
    assert!(page.outputs().commands.is_empty());
}

#[test]
fn nav_link_closes_mobile_menu() {
    let mut page = started(full_layout());
    page.handle(HostEvent::click(Node::MenuToggle));
    assert!(page.menu().is_open());
    page.take_outputs();

    let response = page.handle(HostEvent::click(Node::NavLink("objectives".into())));
    assert!(response.prevent_default);
    assert!(!page.menu().is_open());
    let out = page.take_outputs();
    assert_eq!(
        out.patches,
        vec![
            DomPatch::class(Node::NavLinks, "active", false),
            DomPatch::class(Node::MenuToggle, "active", false),
        ]
    );
    assert_eq!(
        out.commands,
        vec![HostCommand::ScrollTo {
            top: 520.0,
            smooth: true
        }]
    );
}

// ---------------------------------------------------------------------------
// View mode
// ---------------------------------------------------------------------------

#[test]
fn switching_to_grid_swaps_subtrees_and_keeps_gallery_state() {
    let mut page = started(full_layout());
    page.handle(HostEvent::SearchInput("cat".into()));
    page.advance_time(ms(300));
    page.take_outputs();
    let hidden_before = page.search().is_item_hidden(&ItemId::new("a1"));

    page.handle(HostEvent::click(Node::ViewButton(ViewMode::Grid)));
    assert_eq!(page.view_mode(), ViewMode::Grid);
    assert_eq!(
        patches(&mut page),
        vec![
            DomPatch::class(Node::ViewButton(ViewMode::Accordion), "active", false),
            DomPatch::SetAttribute {
                node: Node::ViewButton(ViewMode::Accordion),
                name: "aria-selected",
                value: "false".into(),
            },
            DomPatch::class(Node::ViewButton(ViewMode::Grid), "active", true),
            DomPatch::SetAttribute {
                node: Node::ViewButton(ViewMode::Grid),
                name: "aria-selected",
                value: "true".into(),
            },
            DomPatch::class(Node::AccordionView, "hidden", true),
            DomPatch::class(Node::GridView, "hidden", false),
            DomPatch::class(Node::GridTabs, "hidden", false),
        ]
    );
    assert_eq!(page.search().query().as_str(), "cat");
    assert_eq!(
        page.search().is_item_hidden(&ItemId::new("a1")),
        hidden_before
    );
    assert_eq!(page.filter().active(), "all");
}

#[test]
fn unknown_view_value_is_ignored() {
    let mut page = started(full_layout());
    page.select_view("list");
    assert_eq!(page.view_mode(), ViewMode::Accordion);
    assert!(page.outputs().patches.is_empty());

    page.select_view("grid");
    assert_eq!(page.view_mode(), ViewMode::Grid);
}

// ---------------------------------------------------------------------------
// Category filter
// ---------------------------------------------------------------------------

#[test]
fn all_tab_starts_active_whatever_the_tab_order() {
    let page = started(full_layout().with_gallery(
        vec!["vaccination".into(), "inspection".into(), "all".into()],
        grid_items(),
    ));
    assert_eq!(page.filter().active(), "all");
}

#[test]
fn category_filter_fades_out_then_removes() {
    let mut page = started(full_layout());
    page.handle(HostEvent::click(Node::GalleryTab("inspection".into())));
    assert_eq!(
        patches(&mut page),
        vec![
            DomPatch::class(Node::GalleryTab("all".into()), "active", false),
            DomPatch::class(Node::GalleryTab("vaccination".into()), "active", false),
            DomPatch::class(Node::GalleryTab("inspection".into()), "active", true),
        ]
    );

    page.animation_frame();
    assert_eq!(
        patches(&mut page),
        vec![
            style(grid("g1"), "opacity", "0"),
            style(grid("g1"), "transform", "translate3d(0, 20px, 0)"),
            style(grid("g3"), "opacity", "0"),
            style(grid("g3"), "transform", "translate3d(0, 20px, 0)"),
        ]
    );

    page.advance_time(ms(299));
    assert!(page.outputs().patches.is_empty());
    page.advance_time(ms(1));
    assert_eq!(
        patches(&mut page),
        vec![
            style(grid("g1"), "display", "none"),
            style(grid("g3"), "display", "none"),
        ]
    );
    let visible: Vec<&str> = page.filter().visible_ids().map(ItemId::as_str).collect();
    assert_eq!(visible, vec!["g2"]);
}

#[test]
fn restored_items_display_first_then_fade_in_next_frame() {
    let mut page = started(full_layout());
    page.handle(HostEvent::click(Node::GalleryTab("inspection".into())));
    page.animation_frame();
    page.advance_time(ms(300));
    page.take_outputs();

    page.handle(HostEvent::click(Node::GalleryTab("all".into())));
    page.take_outputs();
    page.animation_frame();
    assert_eq!(
        patches(&mut page),
        vec![
            style(grid("g1"), "display", "block"),
            style(grid("g3"), "display", "block"),
        ]
    );
    assert_eq!(page.pending_frames(), 2);

    page.animation_frame();
    assert_eq!(
        patches(&mut page),
        vec![
            style(grid("g1"), "opacity", "1"),
            style(grid("g1"), "transform", "translate3d(0, 0, 0)"),
            style(grid("g3"), "opacity", "1"),
            style(grid("g3"), "transform", "translate3d(0, 0, 0)"),
        ]
    );
}

#[test]
fn reselecting_before_removal_cancels_the_removal() {
    let mut page = started(full_layout());
    page.handle(HostEvent::click(Node::GalleryTab("inspection".into())));
    page.animation_frame();
    page.advance_time(ms(100));
    page.handle(HostEvent::click(Node::GalleryTab("all".into())));
    page.animation_frame();
    page.animation_frame();
    page.take_outputs();

    page.advance_time(ms(500));
    assert!(
        !patches(&mut page)
            .iter()
            .any(|p| matches!(p, DomPatch::SetStyle { property: "display", value, .. } if value == "none"))
    );
    assert_eq!(page.filter().visible_ids().count(), 3);
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[test]
fn search_is_debounced_to_the_last_input() {
    let mut page = started(full_layout());
    page.handle(HostEvent::SearchInput("ca".into()));
    page.advance_time(ms(200));
    page.handle(HostEvent::SearchInput("  MARKET ".into()));
    page.advance_time(ms(299));
    assert!(page.outputs().patches.is_empty());
    assert_eq!(page.pending_timers(), 1);

    page.advance_time(ms(1));
    assert_eq!(
        patches(&mut page),
        vec![
            DomPatch::class(Node::AccordionItem(ItemId::new("a1")), "search-hidden", true),
            DomPatch::class(Node::AccordionItem(ItemId::new("a2")), "search-hidden", true),
            DomPatch::class(Node::AccordionItem(ItemId::new("a3")), "search-hidden", false),
            DomPatch::class(Node::AccordionItem(ItemId::new("a4")), "search-hidden", true),
            DomPatch::class(Node::AccordionGroup(GroupId::new("campaigns")), "search-hidden", true),
            DomPatch::class(Node::AccordionGroup(GroupId::new("inspections")), "search-hidden", false),
            DomPatch::class(Node::AccordionGroup(GroupId::new("reports")), "search-hidden", true),
            DomPatch::class(Node::AccordionGroup(GroupId::new("inspections")), "active", true),
        ]
    );
    assert_eq!(page.search().query().as_str(), "market");
    assert!(page.accordion().is_expanded(&GroupId::new("inspections")));
}

#[test]
fn empty_search_clears_marks_and_keeps_expansion() {
    let mut page = started(full_layout());
    page.handle(HostEvent::SearchInput("dog".into()));
    page.advance_time(ms(300));
    page.take_outputs();
    assert!(page.accordion().is_expanded(&GroupId::new("reports")));

    page.handle(HostEvent::SearchInput("   ".into()));
    page.advance_time(ms(300));
    let out = patches(&mut page);
    assert!(out.iter().all(|p| matches!(p, DomPatch::RemoveClass { class: "search-hidden", .. })));
    assert_eq!(out.len(), 4 + 3);
    assert!(page.accordion().is_expanded(&GroupId::new("reports")));
    assert!(page.accordion().is_expanded(&GroupId::new("campaigns")));
}

#[test]
fn search_without_search_box_is_a_no_op() {
    let mut page = started(PageLayout::default().with_accordion(accordion_groups()));
    page.handle(HostEvent::SearchInput("dog".into()));
    assert_eq!(page.pending_timers(), 0);
    page.advance_time(ms(1000));
    assert!(page.outputs().patches.is_empty());
}

#[test]
fn accordion_header_toggles_independently() {
    let mut page = started(full_layout());
    page.handle(HostEvent::click(Node::AccordionHeader(GroupId::new("reports"))));
    page.handle(HostEvent::click(Node::AccordionHeader(GroupId::new("campaigns"))));
    assert_eq!(
        patches(&mut page),
        vec![
            DomPatch::class(Node::AccordionGroup(GroupId::new("reports")), "active", true),
            DomPatch::class(Node::AccordionGroup(GroupId::new("campaigns")), "active", false),
        ]
    );
}

// ---------------------------------------------------------------------------
// Overlays
// ---------------------------------------------------------------------------

#[test]
fn second_open_replaces_the_first_and_clears_its_source() {
    let mut page = started(full_layout());
    page.open_modal("photos/a.jpg", "image");
    page.take_outputs();

    page.open_modal("decks/plan.pptx", "pptx");
    let out = patches(&mut page);
    assert_eq!(
        page.modal().active(),
        Some(&Overlay::Document {
            src: "decks/plan.pptx".into(),
            kind: DocumentKind::Office(OfficeFormat::Pptx),
        })
    );
    let image_src = out.iter().rev().find_map(|p| match p {
        DomPatch::SetSource {
            node: Node::Source(SourceSlot::Image),
            src,
        } => Some(src.as_str()),
        _ => None,
    });
    assert_eq!(image_src, Some(""));
    assert_eq!(
        out.last(),
        Some(&DomPatch::SetSource {
            node: Node::Source(SourceSlot::Office),
            src: "https://view.officeapps.live.com/op/embed.aspx?src=http%3A%2F%2Flocalhost%2Fdecks%2Fplan.pptx"
                .into(),
        })
    );
    assert!(out.contains(&style(Node::Source(SourceSlot::Office), "display", "block")));
    assert!(out.contains(&style(Node::Source(SourceSlot::Image), "display", "none")));
}

#[test]
fn unknown_modal_type_is_ignored() {
    let mut page = started(full_layout());
    page.open_modal("video.mp4", "video");
    assert!(page.modal().active().is_none());
    assert!(page.outputs().patches.is_empty());
}

#[test]
fn escape_closes_popup_before_generic_modal() {
    let mut page = started(full_layout());
    page.open_modal("a.jpg", "image");
    page.open_monthly_plan_popup();
    assert!(page.modal().is_active(OverlayElement::DocumentModal));
    assert!(page.modal().is_active(OverlayElement::MonthlyPopup));
    page.take_outputs();

    page.handle(HostEvent::escape());
    assert_eq!(
        patches(&mut page),
        vec![DomPatch::class(
            Node::Overlay(OverlayElement::MonthlyPopup),
            "active",
            false
        )]
    );
    assert!(page.modal().is_active(OverlayElement::DocumentModal));
    assert!(page.modal().on_layer(Layer::MonthlyPlanPopup).is_none());

    page.advance_time(ms(300));
    assert_eq!(
        patches(&mut page),
        vec![DomPatch::SetSource {
            node: Node::Source(SourceSlot::MonthlyPlan),
            src: String::new(),
        }]
    );

    page.handle(HostEvent::escape());
    assert!(page.modal().active().is_none());
}

#[test]
fn reopening_popup_cancels_pending_source_clear() {
    let mut page = started(full_layout());
    page.open_monthly_plan_popup();
    page.close_monthly_plan_popup();
    page.advance_time(ms(100));
    page.open_monthly_plan_popup();
    page.take_outputs();

    page.advance_time(ms(500));
    assert!(page.outputs().patches.is_empty());
    assert_eq!(page.pending_timers(), 0);
    assert!(page.modal().is_active(OverlayElement::MonthlyPopup));
}

#[test]
fn scrim_click_closes_only_that_overlay() {
    let mut page = started(full_layout());
    page.open_external_project("https://example.org/project");
    page.take_outputs();

    page.handle(HostEvent::click(Node::Overlay(OverlayElement::DocumentModal)));
    assert!(page.modal().is_active(OverlayElement::ProjectModal));

    page.handle(HostEvent::click(Node::Overlay(OverlayElement::ProjectModal)));
    assert!(page.modal().active().is_none());
    assert_eq!(
        patches(&mut page),
        vec![
            DomPatch::class(Node::Overlay(OverlayElement::ProjectModal), "active", false),
            DomPatch::SetSource {
                node: Node::Source(SourceSlot::Project),
                src: String::new(),
            },
        ]
    );
}

#[test]
fn inspection_plan_locks_body_scroll() {
    let mut page = started(full_layout());
    page.show_inspection_plan_description();
    assert_eq!(
        patches(&mut page),
        vec![
            DomPatch::class(Node::Overlay(OverlayElement::InspectionModal), "active", true),
            style(Node::Body, "overflow", "hidden"),
        ]
    );
    page.close_inspection_plan_modal();
    assert_eq!(
        patches(&mut page),
        vec![
            DomPatch::class(Node::Overlay(OverlayElement::InspectionModal), "active", false),
            style(Node::Body, "overflow", "auto"),
        ]
    );
}

#[test]
fn close_button_closes_document_modal() {
    let mut page = started(full_layout());
    page.open_modal("report.pdf", "pdf");
    page.handle(HostEvent::click(Node::ModalClose));
    assert!(page.modal().active().is_none());
}

#[test]
fn open_document_routes_by_extension() {
    let mut page = started(full_layout());
    page.open_document("plan.pdf");
    page.open_document("deck.pptx");
    page.open_document("notes.txt");
    assert_eq!(
        page.take_outputs().commands,
        vec![
            HostCommand::OpenInNewTab {
                href: "plan.pdf".into()
            },
            HostCommand::Download {
                href: "deck.pptx".into(),
                file_name: "deck.pptx".into(),
            },
        ]
    );
}

// ---------------------------------------------------------------------------
// Visibility-driven animation
// ---------------------------------------------------------------------------

#[test]
fn progress_bar_fills_after_delay_with_counting_label() {
    let layout = PageLayout::default().with_progress_bars(vec![ProgressSpec::new("p1", "85")]);
    let mut page = started(layout);
    page.handle(HostEvent::Intersection {
        node: Node::ProgressFill("p1".into()),
        fraction: 0.2,
    });
    assert!(page.outputs().patches.is_empty());

    page.handle(HostEvent::Intersection {
        node: Node::ProgressFill("p1".into()),
        fraction: 0.5,
    });
    assert_eq!(
        patches(&mut page),
        vec![DomPatch::SetText {
            node: Node::ProgressLabel("p1".into()),
            text: "0%".into(),
        }]
    );
    page.advance_time(ms(200));
    assert_eq!(
        patches(&mut page),
        vec![style(Node::ProgressFill("p1".into()), "width", "85%")]
    );

    while page.pending_frames() > 0 {
        page.animation_frame();
    }
    let last_label = patches(&mut page).into_iter().rev().find_map(|p| match p {
        DomPatch::SetText { text, .. } => Some(text),
        _ => None,
    });
    assert_eq!(last_label.as_deref(), Some("85%"));
}

#[test]
fn before_print_fills_every_bar() {
    let layout = PageLayout::default().with_progress_bars(vec![
        ProgressSpec::new("b", "40"),
        ProgressSpec::new("a", "90"),
    ]);
    let mut page = started(layout);
    page.handle(HostEvent::BeforePrint);
    assert_eq!(
        patches(&mut page),
        vec![
            style(Node::ProgressFill("a".into()), "width", "90%"),
            style(Node::ProgressFill("b".into()), "width", "40%"),
        ]
    );
}

#[test]
fn reveal_rests_then_shows_once() {
    let layout = PageLayout::default().with_reveals(vec!["card-1".into()]);
    let mut page = DashboardPage::new(layout, PageConfig::default()).expect("layout");
    page.init().expect("init");
    assert_eq!(
        patches(&mut page),
        vec![
            style(Node::Reveal("card-1".into()), "opacity", "0"),
            style(Node::Reveal("card-1".into()), "transform", "translate3d(0, 30px, 0)"),
            style(
                Node::Reveal("card-1".into()),
                "transition",
                "opacity 0.6s ease-out, transform 0.6s ease-out"
            ),
        ]
    );

    for _ in 0..2 {
        page.handle(HostEvent::Intersection {
            node: Node::Reveal("card-1".into()),
            fraction: 0.3,
        });
    }
    assert_eq!(
        patches(&mut page),
        vec![
            style(Node::Reveal("card-1".into()), "opacity", "1"),
            style(Node::Reveal("card-1".into()), "transform", "translate3d(0, 0, 0)"),
        ]
    );
}

#[test]
fn invalid_counter_target_is_never_animated() {
    let layout = PageLayout::default().with_counters(vec![CounterSpec::new("bad", "n/a")]);
    let mut page = started(layout);
    page.handle(HostEvent::Intersection {
        node: Node::Counter("bad".into()),
        fraction: 1.0,
    });
    assert!(page.outputs().patches.is_empty());
}

// ---------------------------------------------------------------------------
// Determinism
// ---------------------------------------------------------------------------

fn replay() -> String {
    let mut page = started(full_layout());
    page.handle(HostEvent::Loaded);
    page.handle(HostEvent::Scroll { offset: 420.0 });
    page.animation_frame();
    page.handle(HostEvent::click(Node::GalleryTab("vaccination".into())));
    page.animation_frame();
    page.handle(HostEvent::SearchInput("adoption".into()));
    page.advance_time(ms(1000));
    page.open_modal("a.jpg", "image");
    page.handle(HostEvent::escape());
    page.take_outputs().patch_hash()
}

#[test]
fn identical_sessions_produce_identical_patch_hashes() {
    assert_eq!(replay(), replay());
}
