/// Which branch a frame takes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderPath {
    /// Advance interaction state and draw.
    Live,
    /// First off-screen frame: apply the static background and draw once
    /// without touching interaction state.
    Fallback,
    /// Off-screen, fallback already in place.
    Skip,
}

/// Tracks whether the mount point intersects the viewport.
///
/// Starts hidden: the observer reports the first state asynchronously, and
/// until then the effect shows the static fallback.
#[derive(Clone, Debug, Default)]
pub struct VisibilityGate {
    visible: bool,
    fallback_applied: bool,
}

impl VisibilityGate {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn fallback_applied(&self) -> bool {
        self.fallback_applied
    }

    /// Record an intersection signal. Returns `true` when it changed state.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        let changed = self.visible != intersecting;
        self.visible = intersecting;
        changed
    }

    /// Decide this frame's path. The fallback is handed out at most once per
    /// effect; the canvas keeps it as its CSS background from then on.
    pub fn next_path(&mut self) -> RenderPath {
        if self.visible {
            RenderPath::Live
        } else if !self.fallback_applied {
            self.fallback_applied = true;
            RenderPath::Fallback
        } else {
            RenderPath::Skip
        }
    }
}

/// CSS shown behind the canvas while live rendering is suspended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FallbackStyle {
    pub background_image: String,
    pub background_size: &'static str,
    pub background_position: &'static str,
}

impl FallbackStyle {
    pub fn for_image(url: &str) -> Self {
        Self {
            background_image: format!("url('{}')", url.replace('\'', "%27")),
            background_size: "cover",
            background_position: "center center",
        }
    }

    /// `(property, value)` pairs in application order.
    pub fn declarations(&self) -> [(&'static str, &str); 3] {
        [
            ("background-image", self.background_image.as_str()),
            ("background-size", self.background_size),
            ("background-position", self.background_position),
        ]
    }
}
