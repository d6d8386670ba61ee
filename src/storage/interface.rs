use crate::map::models::{CoordinateField, CoordinatePair, CoordinateTarget, LatLng};

pub trait IPlotStorage: PlotRepo + CoordinatePairRepo + PlotSocketsRepo {}

pub trait PlotRepo {
    async fn exists(&self, plot_id: &str) -> bool;

    async fn create(&self) -> String;
}

pub trait CoordinatePairRepo {
    async fn pair(&self, plot_id: &str) -> CoordinatePair;

    /// Applies one field edit and returns the resulting pair, so the caller
    /// can derive the view from exactly the state it just produced.
    async fn set_field(
        &self,
        plot_id: &str,
        target: CoordinateTarget,
        field: CoordinateField,
        raw_text: &str,
    ) -> CoordinatePair;

    /// Records `center` as the last center pushed into the viewport.
    /// Returns `true` iff it differs by value from the previously recorded
    /// one, i.e. iff a viewport push is due.
    async fn record_pushed_center(&self, plot_id: &str, center: LatLng) -> bool;
}

pub trait PlotSocketsRepo {
    async fn attach_socket(&self, plot_id: &str, socket_id: usize);

    async fn detach_socket(&self, plot_id: &str, socket_id: usize);

    async fn socket_ids(&self, plot_id: &str) -> Vec<usize>;
}
