use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use catalog::Catalog;
use mesh_analysis::{diagnostics, AnalyzeError};
use mesh_fetch::{CancelToken, FetchError, MeshSource, Progress};
use quote_engine::PricingConfig;
use quote_types::{CartLineItem, MeshMetrics, QuoteBreakdown};

use crate::error::SessionError;
use crate::messages::{FailureKind, SessionEvent};

/// Buffered events per analysis; progress ticks beyond this are dropped.
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// The user's current quote configuration.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub material_id: Option<String>,
    pub finish_id: Option<String>,
    pub quantity: u32,
}

/// One custom-print quoting session: a single active analysis plus the
/// selection state the quote derives from.
///
/// Single-writer: the owning view starts analyses, pumps events back in via
/// [`QuoteSession::apply`], and reads the derived quote. Starting a new
/// analysis invalidates the previous one — its events are discarded on
/// arrival and its transfer is cancelled.
pub struct QuoteSession {
    /// Session identity, for tracing.
    pub id: Uuid,
    generation: u64,
    metrics: Option<MeshMetrics>,
    catalog: Catalog,
    pricing: PricingConfig,
    selection: Selection,
    inflight: Option<CancelToken>,
}

impl QuoteSession {
    pub fn new(catalog: Catalog, pricing: PricingConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            generation: 0,
            metrics: None,
            catalog,
            pricing,
            selection: Selection {
                quantity: 1,
                ..Selection::default()
            },
            inflight: None,
        }
    }

    /// Metrics of the most recent successfully analyzed upload.
    pub fn metrics(&self) -> Option<&MeshMetrics> {
        self.metrics.as_ref()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Start analyzing a newly uploaded mesh.
    ///
    /// Cancels any in-flight analysis, bumps the generation, and spawns a
    /// background task that fetches and parses the file. Returns the event
    /// stream for this upload; feed every received event to
    /// [`QuoteSession::apply`].
    pub fn start_analysis(&mut self, source: MeshSource) -> mpsc::Receiver<SessionEvent> {
        if let Some(token) = self.inflight.take() {
            token.cancel();
        }
        self.generation += 1;
        let generation = self.generation;

        let cancel = CancelToken::new();
        self.inflight = Some(cancel.clone());

        info!(session = %self.id, generation, ?source, "starting mesh analysis");

        let (tx, rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        tokio::spawn(run_analysis(source, generation, tx, cancel));
        rx
    }

    /// Apply an event from an analysis task.
    ///
    /// Events from any generation other than the current one are discarded,
    /// so a stale analysis can never overwrite newer metrics. A `Failed`
    /// event leaves previously accepted metrics untouched. Returns whether
    /// the event was current and applied.
    pub fn apply(&mut self, event: SessionEvent) -> bool {
        if event.generation() != self.generation {
            debug!(
                session = %self.id,
                stale = event.generation(),
                current = self.generation,
                "discarding stale analysis event"
            );
            return false;
        }

        match event {
            SessionEvent::Progress { .. } => {}
            SessionEvent::Complete { metrics, .. } => {
                self.inflight = None;
                self.metrics = Some(metrics);
            }
            SessionEvent::Failed { kind, message, .. } => {
                self.inflight = None;
                warn!(session = %self.id, ?kind, message, "mesh analysis failed");
            }
        }
        true
    }

    /// Abort any in-flight analysis, e.g. when the owning view goes away.
    pub fn abandon(&mut self) {
        if let Some(token) = self.inflight.take() {
            token.cancel();
        }
    }

    pub fn select_material(&mut self, id: &str) -> Result<(), SessionError> {
        if self.catalog.material(id).is_none() {
            return Err(SessionError::UnknownMaterial { id: id.to_string() });
        }
        self.selection.material_id = Some(id.to_string());
        Ok(())
    }

    pub fn select_finish(&mut self, id: &str) -> Result<(), SessionError> {
        if self.catalog.finish(id).is_none() {
            return Err(SessionError::UnknownFinish { id: id.to_string() });
        }
        self.selection.finish_id = Some(id.to_string());
        Ok(())
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.selection.quantity = quantity.max(1);
    }

    /// The quote for the current metrics and selection.
    ///
    /// `None` until a mesh with non-zero volume has been analyzed and both
    /// material and finish are selected. Recomputed on every call; nothing
    /// is cached.
    pub fn current_quote(&self) -> Option<QuoteBreakdown> {
        let metrics = self.metrics.as_ref().filter(|m| m.volume_mm3 > 0.0)?;
        let material = self.catalog.material(self.selection.material_id.as_deref()?)?;
        let finish = self.catalog.finish(self.selection.finish_id.as_deref()?)?;

        Some(quote_engine::quote(
            metrics.volume_mm3,
            metrics.surface_area_mm2,
            material,
            finish.kind,
            self.selection.quantity,
            &self.pricing,
        ))
    }

    /// The cart line item for the current configuration.
    pub fn line_item(&self) -> Option<CartLineItem> {
        let metrics = self.metrics.as_ref().filter(|m| m.volume_mm3 > 0.0)?;
        let material = self.catalog.material(self.selection.material_id.as_deref()?)?;
        let finish = self.catalog.finish(self.selection.finish_id.as_deref()?)?;

        let unit = quote_engine::quote(
            metrics.volume_mm3,
            metrics.surface_area_mm2,
            material,
            finish.kind,
            1,
            &self.pricing,
        );

        Some(CartLineItem {
            id: Uuid::new_v4(),
            description: quote_engine::describe(material, finish),
            unit_price: unit.total,
            quantity: self.selection.quantity,
            weight_grams: unit.weight_grams,
        })
    }
}

/// The background analysis task: fetch, parse, publish.
async fn run_analysis(
    source: MeshSource,
    generation: u64,
    events: mpsc::Sender<SessionEvent>,
    cancel: CancelToken,
) {
    // Forward transfer progress into the event stream.
    let (progress_tx, mut progress_rx) = mpsc::channel::<Progress>(EVENT_CHANNEL_CAPACITY);
    let forwarder = {
        let events = events.clone();
        tokio::spawn(async move {
            while let Some(p) = progress_rx.recv().await {
                let _ = events.try_send(SessionEvent::Progress {
                    generation,
                    bytes_loaded: p.bytes_loaded,
                    bytes_total: p.bytes_total,
                });
            }
        })
    };

    let fetched = mesh_fetch::fetch(&source, &progress_tx, &cancel).await;
    drop(progress_tx);
    let _ = forwarder.await;

    let bytes = match fetched {
        Ok(bytes) => bytes,
        Err(e) => {
            publish_failure(&events, generation, failure_kind_for_fetch(&e), e.to_string()).await;
            return;
        }
    };

    // Parsing is CPU-bound; keep it off the async workers.
    let parsed = tokio::task::spawn_blocking(move || mesh_analysis::analyze(&bytes)).await;

    let result = match parsed {
        Ok(result) => result,
        Err(e) => {
            publish_failure(&events, generation, FailureKind::Cancelled, e.to_string()).await;
            return;
        }
    };

    match result {
        Ok(metrics) => {
            // Checked before publishing so an abandoned session's result is
            // never applied even if the transfer won the race.
            if cancel.is_cancelled() {
                publish_failure(
                    &events,
                    generation,
                    FailureKind::Cancelled,
                    "analysis cancelled".to_string(),
                )
                .await;
                return;
            }

            let boundary_edges = diagnostics::boundary_edge_count(&metrics);
            if boundary_edges > 0 {
                warn!(
                    generation,
                    boundary_edges, "mesh is not watertight; volume is best-effort"
                );
            }

            let _ = events
                .send(SessionEvent::Complete {
                    generation,
                    metrics,
                })
                .await;
        }
        Err(e) => {
            publish_failure(&events, generation, failure_kind_for_analyze(&e), e.to_string()).await;
        }
    }
}

async fn publish_failure(
    events: &mpsc::Sender<SessionEvent>,
    generation: u64,
    kind: FailureKind,
    message: String,
) {
    let _ = events
        .send(SessionEvent::Failed {
            generation,
            kind,
            message,
        })
        .await;
}

fn failure_kind_for_fetch(error: &FetchError) -> FailureKind {
    match error {
        FetchError::Cancelled => FailureKind::Cancelled,
        FetchError::Network(_) | FetchError::Http { .. } | FetchError::Io(_) => {
            FailureKind::Network
        }
    }
}

fn failure_kind_for_analyze(error: &AnalyzeError) -> FailureKind {
    match error {
        AnalyzeError::UnsupportedFormat => FailureKind::UnsupportedFormat,
        AnalyzeError::TruncatedHeader { .. } | AnalyzeError::CorruptMesh { .. } => {
            FailureKind::CorruptMesh
        }
    }
}
