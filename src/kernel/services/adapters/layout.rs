use crate::kernel::services::ports::LayoutProbe;
use std::cell::Cell;
use std::rc::Rc;

/// A container width the host sets by hand. Clones share the value.
#[derive(Debug, Clone, Default)]
pub struct SharedLayout {
    width: Rc<Cell<Option<f64>>>,
}

impl SharedLayout {
    pub fn new(width: Option<f64>) -> Self {
        Self {
            width: Rc::new(Cell::new(width)),
        }
    }

    pub fn set_width(&self, width: Option<f64>) {
        self.width.set(width);
    }
}

impl LayoutProbe for SharedLayout {
    fn container_width(&self, _container_id: &str) -> Option<f64> {
        self.width.get()
    }
}
