use crate::aggregate::AggregateTable;

/// Fold any number of partial tables into one, in iteration order.
///
/// The per-key fold is commutative and associative, so the result does not
/// depend on the order tables arrive in (up to floating point rounding of `sum`).
pub fn merge_tables<I>(tables: I) -> AggregateTable
where
    I: IntoIterator<Item = AggregateTable>,
{
    tables
        .into_iter()
        .fold(AggregateTable::new(), |mut acc, table| {
            acc.merge(table);
            acc
        })
}
