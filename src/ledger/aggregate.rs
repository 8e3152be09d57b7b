//! Read-only aggregation over the payment list
//!
//! The payment slice is split into chunks that are handled by a bounded
//! number of worker threads. Nothing here mutates the ledger.

use std::panic;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread;

use tracing::warn;

use super::Ledger;
use crate::error::{WalletError, WalletResult};
use crate::models::{AccountId, Money, Payment};

/// Partial sum for one chunk of payments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Zero-based chunk index
    pub part: usize,
    /// Sum of the chunk's payment amounts
    pub result: Money,
}

/// Run `work` over consecutive chunks of `payments`, one thread per chunk,
/// and return the results in chunk order.
fn fan_out<T, F>(payments: &[Payment], chunk_size: usize, work: F) -> Vec<T>
where
    T: Send,
    F: Fn(&[Payment]) -> T + Sync,
{
    let work = &work;
    thread::scope(|s| {
        let handles: Vec<_> = payments
            .chunks(chunk_size)
            .map(|chunk| s.spawn(move || work(chunk)))
            .collect();

        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|e| panic::resume_unwind(e)))
            .collect()
    })
}

/// Sum `chunks` on up to `workers` threads, the calling thread included
fn sum_chunks(chunks: &[Vec<Money>], workers: usize, sender: mpsc::Sender<Progress>) {
    let next = AtomicUsize::new(0);

    thread::scope(|s| {
        for worker in 1..workers {
            let (next, sender) = (&next, sender.clone());
            let spawned = thread::Builder::new()
                .name(format!("payment-sum-{worker}"))
                .spawn_scoped(s, move || drain_chunks(chunks, next, sender));
            if let Err(e) = spawned {
                warn!(error = %e, worker, "could not start sum worker");
                break;
            }
        }
        drain_chunks(chunks, &next, sender);
    });
}

/// Claim chunks from `next` until none are left, reporting each sum
fn drain_chunks(chunks: &[Vec<Money>], next: &AtomicUsize, sender: mpsc::Sender<Progress>) {
    loop {
        let part = next.fetch_add(1, Ordering::Relaxed);
        let Some(chunk) = chunks.get(part) else {
            break;
        };
        let result = chunk.iter().copied().sum();
        // receiver gone, nobody is listening
        if sender.send(Progress { part, result }).is_err() {
            break;
        }
    }
}

/// Chunk size that spreads `len` items over `workers` threads
fn chunk_for_workers(len: usize, workers: usize) -> usize {
    len.div_ceil(workers.max(1)).max(1)
}

impl Ledger {
    /// Total amount of all payments, summed across `workers` threads
    pub fn sum_payments(&self, workers: usize) -> Money {
        let chunk = chunk_for_workers(self.payments.len(), workers);
        fan_out(&self.payments, chunk, |c| c.iter().map(|p| p.amount).sum::<Money>())
            .into_iter()
            .sum()
    }

    /// Sum payments in chunks of `chunk_size`, reporting each chunk
    ///
    /// At most `workers` threads sum chunks in the background and send one
    /// [`Progress`] per chunk as soon as it is done, so the receiver yields
    /// results while work is still running. Arrival order depends on
    /// scheduling; use `part` to put them back in sequence. The channel
    /// closes once every chunk has been reported.
    pub fn sum_payments_with_progress(
        &self,
        chunk_size: usize,
        workers: usize,
    ) -> WalletResult<mpsc::Receiver<Progress>> {
        if chunk_size == 0 {
            return Err(WalletError::InvalidChunkSize);
        }

        let chunks: Vec<Vec<Money>> = self
            .payments
            .chunks(chunk_size)
            .map(|c| c.iter().map(|p| p.amount).collect())
            .collect();
        let workers = workers.clamp(1, chunks.len().max(1));

        let (sender, receiver) = mpsc::channel();
        thread::Builder::new()
            .name("payment-sum".into())
            .spawn(move || sum_chunks(&chunks, workers, sender))?;

        Ok(receiver)
    }

    /// Payments belonging to an account, in ledger order
    pub fn filter_payments(&self, account_id: AccountId, workers: usize) -> WalletResult<Vec<Payment>> {
        self.find_account_by_id(account_id)?;
        Ok(self.filter_payments_by(|p| p.account_id == account_id, workers))
    }

    /// Payments matching `predicate`, in ledger order
    pub fn filter_payments_by<F>(&self, predicate: F, workers: usize) -> Vec<Payment>
    where
        F: Fn(&Payment) -> bool + Sync,
    {
        let chunk = chunk_for_workers(self.payments.len(), workers);
        fan_out(&self.payments, chunk, |c| {
            c.iter().filter(|&p| predicate(p)).cloned().collect::<Vec<_>>()
        })
        .into_iter()
        .flatten()
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_ledger() -> (Ledger, AccountId, AccountId) {
        let mut ledger = Ledger::new();
        let a = ledger.register_account("917590330").unwrap();
        let b = ledger.register_account("917590331").unwrap();
        ledger.deposit(a.id, Money::new(10_000)).unwrap();
        ledger.deposit(b.id, Money::new(10_000)).unwrap();

        let categories = ["auto", "internet", "food", "learn"];
        for i in 1..=11 {
            let owner = if i % 2 == 0 { a.id } else { b.id };
            ledger
                .pay(owner, Money::new(i * 10), categories[i as usize % 4])
                .unwrap();
        }
        (ledger, a.id, b.id)
    }

    #[test]
    fn test_sum_payments() {
        let (ledger, _, _) = sample_ledger();
        let expected: i64 = (1..=11).map(|i| i * 10).sum();

        for workers in [0, 1, 3, 50] {
            assert_eq!(ledger.sum_payments(workers), Money::new(expected));
        }
    }

    #[test]
    fn test_sum_empty_ledger() {
        assert_eq!(Ledger::new().sum_payments(4), Money::zero());
    }

    #[test]
    fn test_sum_with_progress() {
        let (ledger, _, _) = sample_ledger();

        let mut parts: Vec<Progress> = ledger.sum_payments_with_progress(4, 2).unwrap().iter().collect();
        parts.sort_by_key(|p| p.part);

        assert_eq!(parts.len(), 3);
        assert_eq!(parts.iter().map(|p| p.part).collect::<Vec<_>>(), vec![0, 1, 2]);
        // 10+20+30+40, 50+60+70+80, 90+100+110
        assert_eq!(parts[0].result, Money::new(100));
        assert_eq!(parts[1].result, Money::new(260));
        assert_eq!(parts[2].result, Money::new(300));

        let total: Money = parts.iter().map(|p| p.result).sum();
        assert_eq!(total, ledger.sum_payments(1));
    }

    #[test]
    fn test_progress_with_more_chunks_than_workers() {
        let (ledger, _, _) = sample_ledger();

        for workers in [0, 1, 3, 100] {
            let mut parts: Vec<Progress> =
                ledger.sum_payments_with_progress(1, workers).unwrap().iter().collect();
            parts.sort_by_key(|p| p.part);

            assert_eq!(parts.len(), 11);
            assert!(parts.iter().enumerate().all(|(i, p)| p.part == i));
            assert_eq!(parts[10].result, Money::new(110));
        }
    }

    #[test]
    fn test_progress_on_empty_ledger_closes() {
        let receiver = Ledger::new().sum_payments_with_progress(3, 4).unwrap();
        assert_eq!(receiver.iter().count(), 0);
    }

    #[test]
    fn test_progress_rejects_zero_chunk() {
        let (ledger, _, _) = sample_ledger();
        assert!(matches!(
            ledger.sum_payments_with_progress(0, 2),
            Err(WalletError::InvalidChunkSize)
        ));
    }

    #[test]
    fn test_filter_payments_by_account_keeps_order() {
        let (ledger, a, _) = sample_ledger();

        let filtered = ledger.filter_payments(a, 3).unwrap();

        let amounts: Vec<i64> = filtered.iter().map(|p| p.amount.units()).collect();
        assert_eq!(amounts, vec![20, 40, 60, 80, 100]);
    }

    #[test]
    fn test_filter_payments_unknown_account() {
        let (ledger, _, _) = sample_ledger();
        assert!(ledger.filter_payments(AccountId::new(99), 2).is_err());
    }

    #[test]
    fn test_filter_payments_by_predicate() {
        let (ledger, _, b) = sample_ledger();

        let filtered =
            ledger.filter_payments_by(|p| p.category == "learn" && p.account_id == b, 4);

        // i = 3, 7, 11 map to "learn" and are odd
        let amounts: Vec<i64> = filtered.iter().map(|p| p.amount.units()).collect();
        assert_eq!(amounts, vec![30, 70, 110]);
    }
}
