//! Headless model of the travel safety screen: map, draggable panel with the
//! route form and quick actions, and the app-bar menu.
//!
//! All state is owned by [`Screen`]. Every user interaction is an [`Event`]
//! applied with [`Screen::handle`], which may produce an [`Alert`] to show.

pub mod actions;
pub mod location;
pub mod map;
pub mod panel;
pub mod route_draft;

use std::time::Duration;

use actions::{Alert, MenuOption, QuickAction};
use location::LocationState;
use map::MapView;
use panel::{ArrowDirection, PanelController};
use route_draft::{RouteDraft, RouteField};

pub const TITLE: &str = "SAFE STEPS";

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    FieldChanged { field: RouteField, text: String },
    Submit,
    Sos,
    QuickAction(QuickAction),
    MenuPressed,
    MenuSelected(MenuOption),
    MenuClosed,
    ArrowPressed,
    DragMoved { dy: f64 },
    DragReleased { dy: f64 },
    Tick(Duration),
    LocationResolved(LocationState),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub panel: PanelController,
    pub draft: RouteDraft,
    pub menu_visible: bool,
    pub location: LocationState,
}

impl Screen {
    pub fn new(screen_height: f64) -> Self {
        Self {
            panel: PanelController::new(screen_height),
            draft: RouteDraft::default(),
            menu_visible: false,
            location: LocationState::Pending,
        }
    }

    pub fn handle(&mut self, event: Event) -> Option<Alert> {
        match event {
            Event::FieldChanged { field, text } => {
                self.draft.set(field, &text);
                None
            }
            Event::Submit => {
                log::info!("route details: {:?}", self.draft);
                Some(Alert::route_added())
            }
            Event::Sos => Some(Alert::sos()),
            Event::QuickAction(action) => Some(action.alert()),
            Event::MenuPressed => {
                self.menu_visible = true;
                None
            }
            Event::MenuSelected(option) => {
                self.menu_visible = false;
                Some(option.alert())
            }
            Event::MenuClosed => {
                self.menu_visible = false;
                None
            }
            Event::ArrowPressed => {
                self.panel.toggle();
                None
            }
            Event::DragMoved { dy } => {
                self.panel.on_move(dy);
                None
            }
            Event::DragReleased { dy } => {
                self.panel.on_release(dy);
                None
            }
            Event::Tick(dt) => {
                self.panel.tick(dt);
                None
            }
            Event::LocationResolved(state) => self.resolve_location(state),
        }
    }

    pub fn map(&self) -> MapView {
        MapView::from_location(&self.location)
    }

    pub fn arrow(&self) -> ArrowDirection {
        self.panel.arrow()
    }

    /// The location resolves once; later results are ignored.
    fn resolve_location(&mut self, state: LocationState) -> Option<Alert> {
        if !self.location.is_pending() || state.is_pending() {
            log::debug!("location: ignoring {state:?}, already {:?}", self.location);
            return None;
        }

        let alert = match &state {
            LocationState::Denied => Some(Alert::permission_denied()),
            LocationState::Failed(reason) => {
                log::warn!("location: {reason}");
                None
            }
            LocationState::Pending | LocationState::Granted(_) => None,
        };

        self.location = state;
        alert
    }
}
