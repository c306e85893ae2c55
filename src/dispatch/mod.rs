use std::sync::mpsc;
use std::thread::{self, JoinHandle};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::PaintConfig;
use crate::document::Document;
use crate::error::{DispatchError, Result};
use crate::operations::{CreatePaintWalls, DeletePaintWalls};

/// Wire payload for a generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatePaintWallsRequest {
    /// Accepted for wire compatibility; every placed room is always visited.
    pub include_all_rooms: bool,
}

impl Default for CreatePaintWallsRequest {
    fn default() -> Self {
        Self {
            include_all_rooms: true,
        }
    }
}

/// Wire envelope answering a generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePaintWallsOutcome {
    pub success: bool,
    pub walls_created: usize,
    pub room_count: usize,
    pub message: String,
}

/// Wire envelope answering a removal request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletePaintWallsOutcome {
    pub success: bool,
    pub walls_deleted: usize,
    pub message: String,
}

enum Request {
    Create(CreatePaintWallsRequest, mpsc::Sender<CreatePaintWallsOutcome>),
    Delete(mpsc::Sender<DeletePaintWallsOutcome>),
    Shutdown,
}

/// Owns the document and a worker thread that applies requests to it
/// one at a time, in arrival order.
#[derive(Debug)]
pub struct Dispatcher {
    sender: mpsc::Sender<Request>,
    worker: JoinHandle<Document>,
}

impl Dispatcher {
    /// Moves the document onto a fresh worker thread.
    #[must_use]
    pub fn spawn(document: Document, config: PaintConfig) -> Self {
        let (sender, receiver) = mpsc::channel();
        let worker = thread::spawn(move || worker_loop(document, &config, &receiver));
        Self { sender, worker }
    }

    /// Hands out a cloneable handle for submitting requests.
    #[must_use]
    pub fn client(&self) -> DispatcherClient {
        DispatcherClient {
            sender: self.sender.clone(),
        }
    }

    /// Stops the worker once queued requests drain and returns the document.
    ///
    /// # Panics
    ///
    /// Propagates a panic from the worker thread.
    #[must_use]
    pub fn join(self) -> Document {
        if self.sender.send(Request::Shutdown).is_err() {
            debug!("worker already gone at shutdown");
        }
        match self.worker.join() {
            Ok(document) => document,
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }
}

/// Submits requests to a [`Dispatcher`] and waits for their outcomes.
///
/// Clones share the same worker; requests from all handles are serialized
/// into a single queue.
#[derive(Debug, Clone)]
pub struct DispatcherClient {
    sender: mpsc::Sender<Request>,
}

impl DispatcherClient {
    /// Runs one generation pass and waits for its outcome.
    ///
    /// # Errors
    ///
    /// Returns an error when the worker has already stopped.
    pub fn create_paint_walls(
        &self,
        request: CreatePaintWallsRequest,
    ) -> Result<CreatePaintWallsOutcome> {
        let (reply, inbox) = mpsc::channel();
        self.sender
            .send(Request::Create(request, reply))
            .map_err(|_| DispatchError::WorkerGone)?;
        Ok(inbox.recv().map_err(|_| DispatchError::WorkerGone)?)
    }

    /// Runs one removal pass and waits for its outcome.
    ///
    /// # Errors
    ///
    /// Returns an error when the worker has already stopped.
    pub fn delete_paint_walls(&self) -> Result<DeletePaintWallsOutcome> {
        let (reply, inbox) = mpsc::channel();
        self.sender
            .send(Request::Delete(reply))
            .map_err(|_| DispatchError::WorkerGone)?;
        Ok(inbox.recv().map_err(|_| DispatchError::WorkerGone)?)
    }
}

fn worker_loop(
    mut document: Document,
    config: &PaintConfig,
    inbox: &mpsc::Receiver<Request>,
) -> Document {
    while let Ok(request) = inbox.recv() {
        match request {
            Request::Create(payload, reply) => {
                let outcome = run_create(&mut document, config, &payload);
                if reply.send(outcome).is_err() {
                    debug!("caller went away before its outcome arrived");
                }
            }
            Request::Delete(reply) => {
                let outcome = run_delete(&mut document, config);
                if reply.send(outcome).is_err() {
                    debug!("caller went away before its outcome arrived");
                }
            }
            Request::Shutdown => break,
        }
    }
    document
}

/// Runs generation and flattens the result into a wire envelope.
fn run_create(
    document: &mut Document,
    config: &PaintConfig,
    request: &CreatePaintWallsRequest,
) -> CreatePaintWallsOutcome {
    if !request.include_all_rooms {
        debug!("per-room selection is not supported, visiting every placed room");
    }
    match CreatePaintWalls::new(config).execute(document) {
        Ok(report) => CreatePaintWallsOutcome {
            success: true,
            walls_created: report.walls_created,
            room_count: report.room_count,
            message: report.summary(),
        },
        Err(error) => {
            warn!("generation failed: {error}");
            CreatePaintWallsOutcome {
                success: false,
                walls_created: 0,
                room_count: 0,
                message: format!("generation failed: {error}"),
            }
        }
    }
}

/// Runs removal and flattens the result into a wire envelope.
fn run_delete(document: &mut Document, config: &PaintConfig) -> DeletePaintWallsOutcome {
    match DeletePaintWalls::new(config).execute(document) {
        Ok(report) => DeletePaintWallsOutcome {
            success: true,
            walls_deleted: report.walls_deleted,
            message: report.summary(),
        },
        Err(error) => {
            warn!("removal failed: {error}");
            DeletePaintWallsOutcome {
                success: false,
                walls_deleted: 0,
                message: format!("removal failed: {error}"),
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::document::fixtures::{add_rect_room, base_document};
    use crate::document::LevelData;
    use crate::error::MuralisError;
    use crate::math::Point3;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn office_document() -> Document {
        let (mut doc, level, _) = base_document();
        add_rect_room(&mut doc, level, "Office", "101", p(0.0, 0.0, 0.0), 10.0, 8.0);
        doc
    }

    #[test]
    fn round_trip_through_the_worker() {
        let dispatcher = Dispatcher::spawn(office_document(), PaintConfig::default());
        let client = dispatcher.client();

        let outcome = client
            .create_paint_walls(CreatePaintWallsRequest::default())
            .unwrap();
        assert!(outcome.success);
        assert_eq!(outcome.walls_created, 4);
        assert_eq!(outcome.room_count, 1);
        assert!(outcome.message.contains("4 paint wall(s)"));

        let removal = client.delete_paint_walls().unwrap();
        assert!(removal.success);
        assert_eq!(removal.walls_deleted, 4);

        let document = dispatcher.join();
        assert_eq!(document.walls().count(), 0);
    }

    #[test]
    fn concurrent_clients_share_one_worker() {
        let dispatcher = Dispatcher::spawn(office_document(), PaintConfig::default());
        let first = dispatcher.client();
        let second = dispatcher.client();

        let handles = [
            thread::spawn(move || {
                first
                    .create_paint_walls(CreatePaintWallsRequest::default())
                    .unwrap()
            }),
            thread::spawn(move || {
                second
                    .create_paint_walls(CreatePaintWallsRequest::default())
                    .unwrap()
            }),
        ];
        let mut created: Vec<usize> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap().walls_created)
            .collect();
        created.sort_unstable();
        assert_eq!(created, vec![0, 4]);

        let document = dispatcher.join();
        assert_eq!(document.walls().count(), 4);
    }

    #[test]
    fn client_after_join_reports_worker_gone() {
        let dispatcher = Dispatcher::spawn(Document::new(), PaintConfig::default());
        let client = dispatcher.client();
        let _document = dispatcher.join();

        let error = client.delete_paint_walls().unwrap_err();
        assert!(matches!(
            error,
            MuralisError::Dispatch(DispatchError::WorkerGone)
        ));
    }

    #[test]
    fn failures_flatten_into_the_outcome() {
        let mut doc = Document::new();
        let level = doc.add_level(LevelData::new("Level 1", 0.0));
        add_rect_room(&mut doc, level, "Office", "101", p(0.0, 0.0, 0.0), 10.0, 8.0);

        let dispatcher = Dispatcher::spawn(doc, PaintConfig::default());
        let outcome = dispatcher
            .client()
            .create_paint_walls(CreatePaintWallsRequest::default())
            .unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.walls_created, 0);
        assert!(outcome.message.contains("generation failed"));

        let document = dispatcher.join();
        assert_eq!(document.walls().count(), 0);
        assert_eq!(document.wall_types().count(), 0);
    }

    #[test]
    fn per_room_selection_flag_is_tolerated() {
        let dispatcher = Dispatcher::spawn(office_document(), PaintConfig::default());
        let outcome = dispatcher
            .client()
            .create_paint_walls(CreatePaintWallsRequest {
                include_all_rooms: false,
            })
            .unwrap();
        assert!(outcome.success);
        assert_eq!(outcome.walls_created, 4);
        let _document = dispatcher.join();
    }

    #[test]
    fn wire_payload_defaults_to_all_rooms() {
        let request: CreatePaintWallsRequest = serde_json::from_str("{}").unwrap();
        assert!(request.include_all_rooms);

        let outcome = CreatePaintWallsOutcome {
            success: true,
            walls_created: 4,
            room_count: 1,
            message: "4 paint wall(s) created for 1 room(s)".into(),
        };
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["walls_created"], 4);
        assert_eq!(value["success"], true);
    }
}
