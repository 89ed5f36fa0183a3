//! Height and power-of-two arithmetic.

/// Number of level slots to pre-allocate for a tree over `block_count` raw
/// blocks (the count BEFORE leaf padding).
///
/// Power-of-two counts yield `count/2 + 1`; everything else yields
/// `bit_length(next_power_of_two(count)) - 1`. This does not reduce to the
/// textbook `ceil(log2(count)) + 1` for larger power-of-two counts (e.g. it
/// returns 5 for 8 blocks), so it is used strictly as a capacity hint:
/// level construction terminates on producing the single-node root level,
/// never on this value.
pub(crate) fn tree_height(block_count: usize) -> usize {
    if block_count.is_power_of_two() {
        block_count / 2 + 1
    } else {
        bit_length(block_count.next_power_of_two()) - 1
    }
}

/// Number of binary digits in `n`: shifts until zero, so `bit_length(4) == 3`
/// and `bit_length(0) == 0`. Equals `floor(log2(n)) + 1` for `n > 0`.
pub(crate) fn bit_length(n: usize) -> usize {
    (usize::BITS - n.leading_zeros()) as usize
}
