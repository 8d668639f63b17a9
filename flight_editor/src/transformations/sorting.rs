use log::debug;

use crate::core::fields::SortKey;
use crate::db::store::FlightStore;

/// Outcome of a sort run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortReport {
    /// Full passes over the store, including the final swap-free pass.
    pub passes: usize,
    /// Adjacent transpositions performed.
    pub swaps: usize,
}

/// Sort the store in place into ascending order of `key`.
///
/// Adjacent transposition: each pass walks from the head and swaps every
/// out-of-order neighbour pair through [`FlightStore::swap_adjacent`];
/// passes repeat until one makes no swap. Equal keys are never swapped, so
/// the sort is stable. Quadratic in the worst case, which is fine for
/// datasets of a few hundred rows.
///
/// Records are relinked, never copied, so [`RecordId`](crate::db::RecordId)
/// handles held elsewhere still resolve to the same records afterwards.
pub fn sort_store(store: &mut FlightStore, key: SortKey) -> SortReport {
    let cmp = key.comparator();
    let mut report = SortReport::default();

    loop {
        report.passes += 1;
        let mut swapped = false;
        let mut cursor = store.head();

        while let Some(current) = cursor {
            let Some(next) = store.next(current) else {
                break;
            };
            let out_of_order = match (store.get(current), store.get(next)) {
                (Some(a), Some(b)) => cmp(a, b).is_gt(),
                _ => false,
            };

            if out_of_order && store.swap_adjacent(current, next).is_ok() {
                swapped = true;
                report.swaps += 1;
                // `current` moved one step forward; compare it with its new successor
                cursor = Some(current);
            } else {
                cursor = Some(next);
            }
        }

        if !swapped {
            break;
        }
    }

    debug!(
        "Sorted {} records by {}: {} passes, {} swaps",
        store.len(),
        key,
        report.passes,
        report.swaps
    );
    report
}
