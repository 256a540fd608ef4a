use angastr::config::DatabaseConfig;
use angastr::contact::{
    newest_first, ContactRequest, ContactRequestRepository, RepositoryError, RequestId,
    LISTING_LIMIT,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sled::transaction::{ConflictableTransactionResult, TransactionError};
use sled::{Db, Transactional, Tree};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Contact-request collection stored as JSON documents in an embedded sled tree.
///
/// Documents are keyed by creation time so the newest sit at the end of the tree.
/// A second tree maps each request id to its document key.
pub(crate) struct SledContactRepository {
    db: Db,
    requests: Tree,
    ids: Tree,
}

impl SledContactRepository {
    /// Opens (or creates) the store described by `config`.
    pub(crate) fn open(config: &DatabaseConfig) -> Result<Self, RepositoryError> {
        let dir = config.data_dir();
        std::fs::create_dir_all(&dir).map_err(|err| {
            RepositoryError::Unavailable(format!("failed to create {}: {err}", dir.display()))
        })?;

        let db = sled::Config::default()
            .path(&dir)
            .open()
            .map_err(|err| RepositoryError::Unavailable(format!("failed to open store: {err}")))?;

        let repository = Self::with_db(db, &config.contact_requests_collection())?;
        info!(
            path = %dir.display(),
            collection = %config.contact_requests_collection(),
            "document store opened"
        );
        Ok(repository)
    }

    pub(crate) fn with_db(db: Db, collection: &str) -> Result<Self, RepositoryError> {
        let open = |name: &str| {
            db.open_tree(name).map_err(|err| {
                RepositoryError::Unavailable(format!("failed to open collection {name}: {err}"))
            })
        };
        let requests = open(collection)?;
        let ids = open(&format!("{collection}.ids"))?;
        Ok(Self { db, requests, ids })
    }

    /// Flushes pending writes; called once when the service shuts down.
    pub(crate) fn close(&self) -> Result<(), RepositoryError> {
        self.db
            .flush()
            .map_err(|err| RepositoryError::Unavailable(format!("failed to flush store: {err}")))?;
        Ok(())
    }

    /// Zero-padded microseconds since the epoch, then the id to break ties.
    fn document_key(record: &ContactRequest) -> String {
        let micros = record.created_at.timestamp_micros().max(0);
        format!("{micros:020}-{}", record.id)
    }

    fn decode(key: &[u8], bytes: &[u8]) -> Result<ContactRequest, RepositoryError> {
        serde_json::from_slice(bytes).map_err(|err| RepositoryError::Corrupt {
            key: String::from_utf8_lossy(key).into_owned(),
            reason: err.to_string(),
        })
    }
}

impl ContactRequestRepository for SledContactRepository {
    fn insert(&self, record: &ContactRequest) -> Result<Option<RequestId>, RepositoryError> {
        let document = serde_json::to_vec(record)
            .map_err(|err| RepositoryError::Unavailable(format!("failed to encode: {err}")))?;

        let key = Self::document_key(record);
        let id = record.id.as_str();

        let stored: Result<bool, TransactionError<()>> = (&self.requests, &self.ids)
            .transaction(|(requests, ids)| -> ConflictableTransactionResult<bool, ()> {
                if ids.get(id)?.is_some() {
                    return Ok(false);
                }
                requests.insert(key.as_bytes(), document.as_slice())?;
                ids.insert(id, key.as_bytes())?;
                Ok(true)
            });

        match stored {
            Ok(true) => {}
            // id already present, nothing was written
            Ok(false) => return Ok(None),
            Err(TransactionError::Storage(err)) => {
                return Err(RepositoryError::Unavailable(format!("insert failed: {err}")));
            }
            Err(TransactionError::Abort(())) => {
                return Err(RepositoryError::Unavailable("insert aborted".to_string()));
            }
        }

        self.requests
            .flush()
            .map_err(|err| RepositoryError::Unavailable(format!("flush failed: {err}")))?;

        Ok(Some(record.id.clone()))
    }

    fn recent(&self, limit: usize) -> Result<Vec<ContactRequest>, RepositoryError> {
        let mut records = Vec::new();
        for entry in self.requests.iter().rev().take(limit.min(LISTING_LIMIT)) {
            let (key, value) = entry
                .map_err(|err| RepositoryError::Unavailable(format!("read failed: {err}")))?;
            records.push(Self::decode(&key, &value)?);
        }
        Ok(newest_first(records, limit))
    }
}
