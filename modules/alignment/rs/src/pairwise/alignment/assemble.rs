use itertools::Itertools;

use super::Column;

/// Turn a traceback path into alignment columns.
///
/// The path lists DP matrix cells from the bottom-right corner back to the border cell where the
/// walk stopped. Every step between two neighbouring cells is one alignment column: an index that
/// repeats the index of the previous cell is a gap on that side, so only the first occurrence of
/// each row/column index becomes a real sequence position. The border cell itself implies the
/// leading gaps, (k, 0) means that the first k symbols of seq1 precede any symbol of seq2.
pub fn assemble(path: &[(usize, usize)]) -> Vec<Column> {
    let Some(&(row, col)) = path.last() else {
        return Vec::new();
    };
    debug_assert!(row == 0 || col == 0, "traceback must stop at the matrix border");

    let mut columns = Vec::with_capacity(row + col + path.len());
    columns.extend((0..row).map(Column::only_seq1));
    columns.extend((0..col).map(Column::only_seq2));
    columns.extend(
        path.iter()
            .rev()
            .tuple_windows()
            .map(|(prev, next)| Column {
                seq1: (next.0 != prev.0).then_some(prev.0),
                seq2: (next.1 != prev.1).then_some(prev.1),
            }),
    );
    columns
}
