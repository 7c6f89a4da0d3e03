/// Blocking confirmation message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: Option<String>,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: Some(message.into()),
        }
    }

    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: None,
        }
    }

    pub fn route_added() -> Self {
        Self::new("Route Added", "Route details have been added successfully.")
    }

    pub fn sos() -> Self {
        Self::new(
            "SOS Alert",
            "Your location has been sent to emergency contacts.",
        )
    }

    pub fn permission_denied() -> Self {
        Self::new(
            "Permission Denied",
            "Permission to access location was denied.",
        )
    }
}

/// Icons in the options row of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    SafetyTips,
    Alerts,
    RouteHistory,
    CurrentLocation,
    ReportIssue,
}

impl QuickAction {
    pub const ALL: [QuickAction; 5] = [
        QuickAction::SafetyTips,
        QuickAction::Alerts,
        QuickAction::RouteHistory,
        QuickAction::CurrentLocation,
        QuickAction::ReportIssue,
    ];

    pub fn title(self) -> &'static str {
        match self {
            QuickAction::SafetyTips => "Safety Tips",
            QuickAction::Alerts => "Alerts",
            QuickAction::RouteHistory => "Route History",
            QuickAction::CurrentLocation => "Current Location",
            QuickAction::ReportIssue => "Report Issue",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QuickAction::SafetyTips => "Safety Tips",
            QuickAction::Alerts => "Alerts",
            QuickAction::RouteHistory => "History",
            QuickAction::CurrentLocation => "Location",
            QuickAction::ReportIssue => "Report",
        }
    }

    pub fn alert(self) -> Alert {
        Alert::title(self.title())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Profile,
    SignUpIn,
    Notifications,
    Ratings,
    Reports,
    LogOut,
}

impl MenuOption {
    pub const ALL: [MenuOption; 6] = [
        MenuOption::Profile,
        MenuOption::SignUpIn,
        MenuOption::Notifications,
        MenuOption::Ratings,
        MenuOption::Reports,
        MenuOption::LogOut,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuOption::Profile => "Profile",
            MenuOption::SignUpIn => "Sign up/in",
            MenuOption::Notifications => "notifications",
            MenuOption::Ratings => "Ratings",
            MenuOption::Reports => "Reports",
            MenuOption::LogOut => "Log Out",
        }
    }

    pub fn alert(self) -> Alert {
        let label = self.label();
        Alert::new(label, format!("{label} selected!"))
    }
}
