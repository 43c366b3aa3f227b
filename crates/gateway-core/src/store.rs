//! # Payment Store
//!
//! Concurrent storage for redacted payment records. The store owns its
//! own synchronization; callers never hold a lock.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::payment::Payment;

/// Storage contract for payment records.
///
/// `insert` and `get` must tolerate arbitrary interleavings from
/// concurrently executing requests. Absence is a normal outcome rather
/// than an error, so `get` returns an `Option`. No update, delete, or
/// list operations exist.
#[async_trait]
pub trait PaymentStore: Send + Sync {
    /// Add a payment record. Identifiers are unique by construction,
    /// so no uniqueness check is performed.
    async fn insert(&self, payment: Payment);

    /// Point lookup by identifier.
    async fn get(&self, id: Uuid) -> Option<Payment>;
}

/// Type alias for a shared store (dynamic dispatch)
pub type BoxedPaymentStore = Arc<dyn PaymentStore>;

/// In-memory store backed by a read-write locked map.
///
/// Clones share the same underlying map.
#[derive(Clone, Default)]
pub struct InMemoryPaymentStore {
    payments: Arc<RwLock<HashMap<Uuid, Payment>>>,
}

impl InMemoryPaymentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored payments
    pub async fn len(&self) -> usize {
        self.payments.read().await.len()
    }

    /// Returns true if nothing has been stored yet
    pub async fn is_empty(&self) -> bool {
        self.payments.read().await.is_empty()
    }
}

#[async_trait]
impl PaymentStore for InMemoryPaymentStore {
    async fn insert(&self, payment: Payment) {
        self.payments.write().await.insert(payment.id, payment);
    }

    async fn get(&self, id: Uuid) -> Option<Payment> {
        self.payments.read().await.get(&id).cloned()
    }
}
