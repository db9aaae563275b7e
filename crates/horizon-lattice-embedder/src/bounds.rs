//! Last-known display rectangles of embedded views.

use slotmap::SecondaryMap;

use crate::geometry::Rect;
use crate::ids::EmbeddedViewHandle;

/// Where each embedded view is currently displayed, in host screen
/// coordinates, as last reported by the host.
#[derive(Debug, Default)]
pub struct DisplayBoundsRegistry {
    bounds: SecondaryMap<EmbeddedViewHandle, Rect>,
}

impl DisplayBoundsRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `rect` as the display bounds of `view`, replacing any earlier value.
    pub fn set_bounds(&mut self, view: EmbeddedViewHandle, rect: Rect) {
        self.bounds.insert(view, rect);
    }

    /// The display bounds of `view`, if the host has reported them.
    pub fn bounds(&self, view: EmbeddedViewHandle) -> Option<Rect> {
        self.bounds.get(view).copied()
    }

    /// Forget the bounds of `view`.
    pub fn remove(&mut self, view: EmbeddedViewHandle) -> Option<Rect> {
        self.bounds.remove(view)
    }
}

#[cfg(test)]
mod tests {
    use slotmap::SlotMap;

    use super::*;

    #[test]
    fn test_set_overwrites() {
        let mut views: SlotMap<EmbeddedViewHandle, ()> = SlotMap::with_key();
        let view = views.insert(());
        let other = views.insert(());
        let mut registry = DisplayBoundsRegistry::new();

        assert_eq!(registry.bounds(view), None);
        registry.set_bounds(view, Rect::new(0.0, 0.0, 10.0, 10.0));
        registry.set_bounds(view, Rect::new(5.0, 5.0, 10.0, 10.0));

        assert_eq!(registry.bounds(view), Some(Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert_eq!(registry.bounds(other), None);
        assert!(registry.remove(view).is_some());
        assert_eq!(registry.bounds(view), None);
    }
}
