/// Sorts `keys` ascending and applies the same permutation to `values`.
///
/// # Panics
///
/// Panics if the two slices have different lengths.
pub fn heap_sort_pairs<V: Copy>(keys: &mut [f64], values: &mut [V]) {
    assert_eq!(
        keys.len(),
        values.len(),
        "keys and values must have the same length"
    );
    let n = keys.len();
    // SAFETY: both slices hold exactly `n` elements.
    unsafe { heap_sort_pairs_unchecked(n, keys, values) }
}

/// Heap-sorts the first `n` key/value pairs in place.
///
/// The loop is the classic two-phase heapsort written with 1-based positions:
/// children of `i` are `2i` and `2i + 1`, and position `p` is stored at offset
/// `p - 1`. While the build pointer `l` is above the root the candidate comes
/// from the heap-construction phase; afterwards each step moves the current
/// maximum to the end of the live heap `1..=ir` and sifts the displaced element
/// down from the root.
///
/// Elements at offsets `n..` are not read or written.
///
/// # Safety
///
/// The caller must guarantee `n <= keys.len()` and `n <= values.len()`.
pub unsafe fn heap_sort_pairs_unchecked<V: Copy>(n: usize, keys: &mut [f64], values: &mut [V]) {
    debug_assert!(n <= keys.len());
    debug_assert!(n <= values.len());
    if n < 2 {
        return;
    }

    let ra = keys.as_mut_ptr();
    let rb = values.as_mut_ptr();
    let mut l = (n >> 1) + 1;
    let mut ir = n;

    // SAFETY: every position touched below lies in `1..=n`, i.e. offsets `0..n`.
    unsafe {
        loop {
            let rra;
            let rrb;
            if l > 1 {
                l -= 1;
                rra = *ra.add(l - 1);
                rrb = *rb.add(l - 1);
            } else {
                rra = *ra.add(ir - 1);
                rrb = *rb.add(ir - 1);
                *ra.add(ir - 1) = *ra;
                *rb.add(ir - 1) = *rb;
                ir -= 1;
                if ir == 1 {
                    *ra = rra;
                    *rb = rrb;
                    return;
                }
            }

            let mut i = l;
            let mut j = l << 1;
            while j <= ir {
                if j < ir && *ra.add(j - 1) < *ra.add(j) {
                    j += 1;
                }
                if rra < *ra.add(j - 1) {
                    *ra.add(i - 1) = *ra.add(j - 1);
                    *rb.add(i - 1) = *rb.add(j - 1);
                    i = j;
                    j <<= 1;
                } else {
                    break;
                }
            }
            *ra.add(i - 1) = rra;
            *rb.add(i - 1) = rrb;
        }
    }
}
