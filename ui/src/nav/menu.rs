//! Fixed navigation structure: top-level dropdown menus and every link target.

use crate::t;

/// Top-level navbar items that reveal a dropdown panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuId {
    Dashboard,
    Schemes,
}

impl MenuId {
    /// Display order in the navbar.
    pub const ALL: [MenuId; 2] = [MenuId::Dashboard, MenuId::Schemes];

    /// Stable identifier, also used as the render key.
    pub fn as_str(self) -> &'static str {
        match self {
            MenuId::Dashboard => "dashboard",
            MenuId::Schemes => "schemes",
        }
    }

    pub fn label(self) -> String {
        match self {
            MenuId::Dashboard => t!("nav-dashboard"),
            MenuId::Schemes => t!("nav-schemes"),
        }
    }

    /// Links listed inside this menu's dropdown panel.
    pub fn items(self) -> &'static [NavTarget] {
        match self {
            MenuId::Dashboard => &[
                NavTarget::Home,
                NavTarget::DiseaseDetection,
                NavTarget::CropRecommendation,
                NavTarget::Fertilizer,
                NavTarget::SatelliteImaging,
            ],
            MenuId::Schemes => &[NavTarget::Agriculture],
        }
    }
}

/// Every page the navbar can link to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavTarget {
    Home,
    DiseaseDetection,
    CropRecommendation,
    Fertilizer,
    SatelliteImaging,
    Agriculture,
    About,
    Contact,
    Feedback,
}

/// Plain links rendered after the dropdown menus.
pub const STANDALONE_LINKS: [NavTarget; 3] =
    [NavTarget::About, NavTarget::Contact, NavTarget::Feedback];

impl NavTarget {
    pub const ALL: [NavTarget; 9] = [
        NavTarget::Home,
        NavTarget::DiseaseDetection,
        NavTarget::CropRecommendation,
        NavTarget::Fertilizer,
        NavTarget::SatelliteImaging,
        NavTarget::Agriculture,
        NavTarget::About,
        NavTarget::Contact,
        NavTarget::Feedback,
    ];

    pub fn path(self) -> &'static str {
        match self {
            NavTarget::Home => "/",
            NavTarget::DiseaseDetection => "/diseasedetection",
            NavTarget::CropRecommendation => "/croprecommendation",
            NavTarget::Fertilizer => "/fertilizer",
            NavTarget::SatelliteImaging => "/satelliteimaging",
            NavTarget::Agriculture => "/agriculture",
            NavTarget::About => "/about",
            NavTarget::Contact => "/contact",
            NavTarget::Feedback => "/feedback",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.path() == path)
    }

    pub fn label(self) -> String {
        match self {
            NavTarget::Home => t!("nav-home"),
            NavTarget::DiseaseDetection => t!("nav-disease-detection"),
            NavTarget::CropRecommendation => t!("nav-crop-recommendation"),
            NavTarget::Fertilizer => t!("nav-fertilizer"),
            NavTarget::SatelliteImaging => t!("nav-satellite-imaging"),
            NavTarget::Agriculture => t!("nav-agriculture"),
            NavTarget::About => t!("nav-about"),
            NavTarget::Contact => t!("nav-contact"),
            NavTarget::Feedback => t!("nav-feedback"),
        }
    }
}
