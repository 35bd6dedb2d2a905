use super::*;

impl AppState {
    /// Starts a query for `city` exactly as typed; the remote API is the only
    /// validator.
    pub(crate) fn submit(&mut self, city: String, tx: &mpsc::Sender<AppEvent>) {
        self.generation += 1;
        tracing::info!(%city, generation = self.generation, "weather query submitted");
        self.weather = WeatherPanel::Loading(city.clone());
        self.forecast = ForecastPanel::Empty;
        spawn_query(self.client.clone(), city, self.generation, tx.clone());
    }
}

/// Current conditions first; the forecast is requested only once those
/// succeeded.
pub(crate) fn spawn_query(
    client: WeatherClient,
    city: String,
    generation: u64,
    tx: mpsc::Sender<AppEvent>,
) {
    tokio::spawn(async move {
        let result = client.fetch_current(&city).await;
        let found = result.is_ok();
        if tx
            .send(AppEvent::CurrentLoaded { generation, result })
            .await
            .is_err()
            || !found
        {
            return;
        }
        let result = client.fetch_forecast(&city).await;
        let _ = tx.send(AppEvent::ForecastLoaded { generation, result }).await;
    });
}
