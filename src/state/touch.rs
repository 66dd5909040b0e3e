// Touch gesture origin, held only between touchstart and touchend.
#[derive(Default, Debug, Clone)]
pub struct TouchState {
    pub start_x: f64,
    pub start_y: f64,
    pub tracking: bool,
}
