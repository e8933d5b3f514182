/// Measures the container the widget lives in.
pub trait LayoutProbe {
    /// Current width of the container, or `None` if it is not laid out.
    fn container_width(&self, container_id: &str) -> Option<f64>;
}

impl<F> LayoutProbe for F
where
    F: Fn(&str) -> Option<f64>,
{
    fn container_width(&self, container_id: &str) -> Option<f64> {
        self(container_id)
    }
}
