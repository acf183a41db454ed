//! Bulk generation of independent keypairs across worker threads.

use crate::{
    account::{KeyError, Keypair},
    config::Config,
};
use std::{panic, thread};

/// Generates `count` random keypairs.
///
/// The count is clamped to `1..=config.batch_limit`. Keypairs are generated
/// in parallel on up to one worker thread per CPU. The result is either all
/// the keypairs in generation order or the first error encountered.
pub fn generate_keypairs(count: usize, config: &Config) -> Result<Vec<Keypair>, KeyError> {
    let limit = config.batch_limit.max(1);
    let clamped = count.clamp(1, limit);
    if clamped != count {
        tracing::warn!(requested = count, limit, "clamped keypair batch size");
    }

    let workers = num_cpus::get().clamp(1, clamped);
    tracing::debug!(count = clamped, workers, "generating keypairs");

    thread::scope(|scope| {
        let handles = (0..workers)
            .map(|worker| {
                // Spread the remainder over the first workers.
                let share = clamped / workers + usize::from(worker < clamped % workers);
                scope.spawn(move || {
                    (0..share)
                        .map(|_| Keypair::generate(&config.key))
                        .collect::<Result<Vec<_>, _>>()
                })
            })
            .collect::<Vec<_>>();

        let mut keypairs = Vec::with_capacity(clamped);
        for handle in handles {
            match handle.join() {
                Ok(batch) => keypairs.extend(batch?),
                Err(payload) => panic::resume_unwind(payload),
            }
        }

        Ok(keypairs)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generates_requested_number_of_distinct_keypairs() {
        let keypairs = generate_keypairs(17, &Config::default()).unwrap();
        assert_eq!(keypairs.len(), 17);

        let addresses = keypairs
            .iter()
            .map(|keypair| keypair.address.0)
            .collect::<HashSet<_>>();
        assert_eq!(addresses.len(), 17);
        for keypair in &keypairs {
            assert_eq!(keypair.private.address(), keypair.address);
        }
    }

    #[test]
    fn clamps_batch_size() {
        let config = Config {
            batch_limit: 3,
            ..Default::default()
        };
        assert_eq!(generate_keypairs(0, &config).unwrap().len(), 1);
        assert_eq!(generate_keypairs(10, &config).unwrap().len(), 3);
    }
}
