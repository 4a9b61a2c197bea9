//! Viewport classification

use serde::Serialize;
use shell_core::{Breakpoints, DeviceClass, Orientation, Viewport};

/// Device class and orientation derived from one geometry reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub device: DeviceClass,
    pub orientation: Orientation,
}

impl Default for Classification {
    fn default() -> Self {
        classify(None, &Breakpoints::default())
    }
}

/// Classify a viewport. With no geometry yet the result is desktop/portrait,
/// so nothing gets hidden before the first real reading.
pub fn classify(viewport: Option<Viewport>, breakpoints: &Breakpoints) -> Classification {
    match viewport {
        Some(vp) => Classification {
            device: DeviceClass::from_width(vp.width, breakpoints),
            orientation: vp.orientation(),
        },
        None => Classification {
            device: DeviceClass::Desktop,
            orientation: Orientation::Portrait,
        },
    }
}
