use pathviz_core::Pos;

/// Manhattan (L1) distance between two positions.
///
/// Admissible and consistent for 4-way movement when every weight is at
/// least 1.
#[inline]
pub fn manhattan(a: Pos, b: Pos) -> u32 {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}
