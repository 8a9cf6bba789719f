use crate::{
    error::{Result, SortError},
    record::{CompareConfig, Criterion, Direction, Record},
    stat::Stat,
};

const RADIX: usize = 10;

/// LSD decimal radix sort on `Record::id`.
///
/// Only orders identifiers ascending and only non-negative ones; both are
/// checked before any record moves. Makes no comparisons.
pub fn radix_sort_by_id(arr: &mut [Record], config: CompareConfig, stat: &mut Stat) -> Result<()> {
    if config.criterion != Criterion::Identifier || config.direction != Direction::Ascending {
        return Err(SortError::RadixUnsupported {
            criterion: config.criterion,
            direction: config.direction,
        });
    }
    if let Some(r) = arr.iter().find(|r| r.id < 0) {
        return Err(SortError::NegativeIdentifier(r.id));
    }
    if arr.len() < 2 {
        return Ok(());
    }

    let max = arr.iter().map(|r| r.id as u64).max().unwrap_or(0);
    let mut output = arr.to_vec();
    let mut exp = 1u64;
    while max / exp > 0 {
        counting_pass(arr, &mut output, exp, stat);
        exp *= RADIX as u64;
    }
    Ok(())
}

/// Stable counting sort on the decimal digit selected by `exp`.
fn counting_pass(arr: &mut [Record], output: &mut [Record], exp: u64, stat: &mut Stat) {
    let digit = |r: &Record| ((r.id as u64 / exp) % RADIX as u64) as usize;

    let mut count = [0usize; RADIX];
    for r in arr.iter() {
        count[digit(r)] += 1;
        stat.record_memory_op(1);
    }
    for d in 1..RADIX {
        count[d] += count[d - 1];
    }
    for r in arr.iter().rev() {
        let d = digit(r);
        count[d] -= 1;
        output[count[d]] = *r;
        stat.record_memory_op(1);
    }
    arr.copy_from_slice(output);
    stat.record_memory_op(arr.len() as u64);
}
