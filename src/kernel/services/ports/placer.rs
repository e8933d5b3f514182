use crate::kernel::model::{MarkerLineUpdate, MarkerMap};
use std::fmt;
use std::rc::Rc;

pub type LineUpdateCallback = Rc<dyn Fn(MarkerLineUpdate)>;

/// Releases every decoration placed by one [`MarkerPlacer::place`] call.
pub struct MarkerDisposer<W> {
    release: Box<dyn FnOnce(&mut W)>,
}

impl<W> MarkerDisposer<W> {
    pub fn new(release: impl FnOnce(&mut W) + 'static) -> Self {
        Self {
            release: Box::new(release),
        }
    }

    pub fn dispose(self, widget: &mut W) {
        (self.release)(widget)
    }
}

impl<W> fmt::Debug for MarkerDisposer<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MarkerDisposer")
    }
}

/// Turns logical marker line ranges into widget decorations.
pub trait MarkerPlacer<W> {
    fn place(
        &mut self,
        widget: &mut W,
        markers: &MarkerMap,
        on_line_update: LineUpdateCallback,
    ) -> MarkerDisposer<W>;
}

impl<W, F> MarkerPlacer<W> for F
where
    F: FnMut(&mut W, &MarkerMap, LineUpdateCallback) -> MarkerDisposer<W>,
{
    fn place(
        &mut self,
        widget: &mut W,
        markers: &MarkerMap,
        on_line_update: LineUpdateCallback,
    ) -> MarkerDisposer<W> {
        self(widget, markers, on_line_update)
    }
}
