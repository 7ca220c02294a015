// Generation-based cancellation for searches
use crate::domain::model::FetchOutcome;
use std::future::Future;
use tokio::sync::watch;

/// Issues search tokens. Issuing a token invalidates every token issued before it.
#[derive(Debug)]
pub struct SearchTokens {
    current: watch::Sender<u64>,
}

impl SearchTokens {
    pub fn new() -> Self {
        let (current, _) = watch::channel(0);
        Self { current }
    }

    pub fn issue(&self) -> SearchToken {
        let mut id = 0;
        self.current.send_modify(|generation| {
            *generation += 1;
            id = *generation;
        });
        SearchToken {
            id,
            current: self.current.subscribe(),
        }
    }

    /// Invalidate the live token without issuing a replacement.
    pub fn cancel_all(&self) {
        self.current.send_modify(|generation| *generation += 1);
    }
}

impl Default for SearchTokens {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct SearchToken {
    id: u64,
    current: watch::Receiver<u64>,
}

impl SearchToken {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_live(&self) -> bool {
        *self.current.borrow() == self.id
    }

    /// Resolves once a newer token has been issued (or the issuer is gone).
    pub async fn cancelled(&self) {
        let mut current = self.current.clone();
        let id = self.id;
        let _ = current.wait_for(|generation| *generation != id).await;
    }

    /// Run a source call, short-circuiting to `Cancelled` if this token is
    /// superseded before or while it runs. Dropping `fut` aborts the request.
    pub async fn guard<T, E, F>(&self, fut: F) -> Result<FetchOutcome<T>, E>
    where
        F: Future<Output = Result<FetchOutcome<T>, E>>,
    {
        if !self.is_live() {
            return Ok(FetchOutcome::Cancelled);
        }

        tokio::select! {
            biased;
            _ = self.cancelled() => Ok(FetchOutcome::Cancelled),
            result = fut => {
                if self.is_live() {
                    result
                } else {
                    Ok(FetchOutcome::Cancelled)
                }
            }
        }
    }
}
