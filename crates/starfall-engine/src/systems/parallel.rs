//! Per-entity passes. With the `parallel` feature each pass is spread over
//! the rayon pool; without it the same closures run sequentially. Every
//! function returns only after the whole pass has completed.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Collections shorter than this run on a single worker.
#[cfg(feature = "parallel")]
const MIN_CHUNK: usize = 256;

/// Run `f` on every item.
pub fn for_each_mut<T, F>(items: &mut [T], f: F)
where
    T: Send,
    F: Fn(&mut T) + Sync + Send,
{
    #[cfg(feature = "parallel")]
    items.par_iter_mut().with_min_len(MIN_CHUNK).for_each(f);

    #[cfg(not(feature = "parallel"))]
    items.iter_mut().for_each(f);
}

/// Run `f` on every item and count how many returned `true`.
pub fn count_mut<T, F>(items: &mut [T], f: F) -> usize
where
    T: Send,
    F: Fn(&mut T) -> bool + Sync + Send,
{
    #[cfg(feature = "parallel")]
    let count: usize = items
        .par_iter_mut()
        .with_min_len(MIN_CHUNK)
        .map(|item| f(item) as usize)
        .sum();

    #[cfg(not(feature = "parallel"))]
    let count: usize = items.iter_mut().map(|item| f(item) as usize).sum();

    count
}

/// Visit `a[i]` and `b[i]` together for every index, collecting the
/// `Some` results in index order. Extra items of the longer slice are skipped.
pub fn filter_map_pairs<A, B, R, F>(a: &mut [A], b: &mut [B], f: F) -> Vec<R>
where
    A: Send,
    B: Send,
    R: Send,
    F: Fn(usize, &mut A, &mut B) -> Option<R> + Sync + Send,
{
    #[cfg(feature = "parallel")]
    let out: Vec<R> = a
        .par_iter_mut()
        .zip(b.par_iter_mut())
        .enumerate()
        .with_min_len(MIN_CHUNK)
        .filter_map(|(i, (a, b))| f(i, a, b))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let out: Vec<R> = a
        .iter_mut()
        .zip(b.iter_mut())
        .enumerate()
        .filter_map(|(i, (a, b))| f(i, a, b))
        .collect();

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_each_visits_all() {
        let mut v: Vec<u32> = (0..1000).collect();
        for_each_mut(&mut v, |x| *x *= 2);
        assert!(v.iter().enumerate().all(|(i, &x)| x == 2 * i as u32));
    }

    #[test]
    fn count_counts_true() {
        let mut v: Vec<u32> = (0..1000).collect();
        let odd = count_mut(&mut v, |x| {
            *x += 1;
            *x % 2 == 0
        });
        assert_eq!(odd, 500);
        assert_eq!(v[0], 1);
    }

    #[test]
    fn pairs_keep_index_order() {
        let mut a: Vec<i32> = (0..1000).collect();
        let mut b = vec![0i32; 1000];
        let hits = filter_map_pairs(&mut a, &mut b, |i, a, b| {
            *b = *a * 10;
            (i % 100 == 0).then_some(i)
        });
        assert_eq!(hits, (0..1000).step_by(100).collect::<Vec<_>>());
        assert_eq!(b[999], 9990);
    }

    #[test]
    fn empty_slices_are_noops() {
        let mut a: Vec<u8> = Vec::new();
        let mut b: Vec<u8> = Vec::new();
        for_each_mut(&mut a, |_| unreachable!());
        assert_eq!(count_mut(&mut a, |_| true), 0);
        assert!(filter_map_pairs(&mut a, &mut b, |_, _, _| Some(())).is_empty());
    }
}
