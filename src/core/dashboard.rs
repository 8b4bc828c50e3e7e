//! Dashboard panel selection: a string tag picks one static panel.

use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardView {
    Admin,
    Accommodations,
    Add,
    Unknown,
}

impl DashboardView {
    /// Tags match the site's routes, including the "accomodations" spelling.
    pub fn from_tag(tag: &str) -> Self {
        let view = match tag {
            "admin" => DashboardView::Admin,
            "accomodations" => DashboardView::Accommodations,
            "add" => DashboardView::Add,
            _ => DashboardView::Unknown,
        };
        debug!("Dashboard tag {:?} -> {:?}", tag, view);
        view
    }

    pub fn title(self) -> &'static str {
        match self {
            DashboardView::Admin => "Dashboard Admin",
            DashboardView::Accommodations => "Dashboard Accomodations",
            DashboardView::Add => "Dashboard Add",
            DashboardView::Unknown => "Looks like theres an error, please contact support",
        }
    }
}
