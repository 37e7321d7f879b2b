/// Chart layer: pure pagination of aggregated results into renderable
/// pages.  Drawing itself happens in `ui::plot`, so everything here can be
/// tested without a graphics backend.

pub mod page;
