//! The range table: a validated, gapless partition of a roll domain.

use serde::{Deserialize, Serialize};

use surge_dice::RandomSource;

use crate::error::{TableError, TableResult};
use crate::range::Range;
use crate::resolver::Resolver;

/// Text returned when a roll falls outside every entry.
pub const NOT_FOUND: &str = "Значение не найдено";

/// One row of a range table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableEntry {
    /// Rolls selecting this entry.
    pub range: Range,
    /// Produces the entry's text when selected.
    pub resolver: Resolver,
}

impl TableEntry {
    /// Create an entry covering `min..=max`.
    pub fn new(min: i64, max: i64, resolver: Resolver) -> Self {
        Self {
            range: Range::new(min, max),
            resolver,
        }
    }

    /// Resolve this entry's text.
    pub fn resolve(&self, source: &dyn RandomSource) -> String {
        self.resolver.resolve(source)
    }
}

/// An ordered set of entries whose ranges exactly cover `domain`.
///
/// Construction guarantees the entries are sorted, non-overlapping and
/// contiguous, so `max` values strictly increase and lookup can binary
/// search on them.
#[derive(Debug, Clone)]
pub struct RangeTable {
    name: String,
    domain: Range,
    entries: Vec<TableEntry>,
}

impl RangeTable {
    /// Build and validate a table.
    pub fn new(
        name: impl Into<String>,
        domain: Range,
        entries: Vec<TableEntry>,
    ) -> TableResult<Self> {
        let name = name.into();
        validate(&name, domain, &entries)?;
        tracing::info!(
            table = %name,
            domain = %domain,
            entries = entries.len(),
            "built range table"
        );
        Ok(Self {
            name,
            domain,
            entries,
        })
    }

    /// The table's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The covered domain.
    pub fn domain(&self) -> Range {
        self.domain
    }

    /// Entries in ascending order.
    pub fn entries(&self) -> &[TableEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a validated table.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the entry whose range contains `roll`.
    ///
    /// Binary search for the first entry with `max >= roll`, then confirm
    /// `roll >= min`.
    pub fn entry_for(&self, roll: i64) -> Option<&TableEntry> {
        let idx = self.entries.partition_point(|e| e.range.max < roll);
        self.entries
            .get(idx)
            .filter(|entry| entry.range.contains(roll))
    }

    /// Resolve `roll` to text, or [`NOT_FOUND`] when it is out of domain.
    pub fn lookup(&self, roll: i64, source: &dyn RandomSource) -> String {
        match self.entry_for(roll) {
            Some(entry) => {
                tracing::debug!(
                    table = %self.name,
                    roll,
                    range = %entry.range,
                    kind = entry.resolver.kind(),
                    "roll matched"
                );
                entry.resolve(source)
            }
            None => {
                tracing::debug!(table = %self.name, roll, "roll outside table");
                NOT_FOUND.to_string()
            }
        }
    }
}

fn validate(name: &str, domain: Range, entries: &[TableEntry]) -> TableResult<()> {
    if !domain.is_valid() {
        return Err(TableError::InvalidDomain(domain));
    }
    let (Some(first), Some(last)) = (entries.first(), entries.last()) else {
        return Err(TableError::Empty(name.to_string()));
    };

    for entry in entries {
        if !entry.range.is_valid() {
            return Err(TableError::InvertedRange(entry.range));
        }
        entry
            .resolver
            .validate()
            .map_err(|message| TableError::InvalidResolver {
                range: entry.range,
                message,
            })?;
    }

    for pair in entries.windows(2) {
        let (prev, range) = (pair[0].range, pair[1].range);
        if range.min <= prev.min {
            return Err(TableError::Unsorted { prev, range });
        }
        if range.min <= prev.max {
            return Err(TableError::Overlap { prev, range });
        }
        if range.min > prev.max + 1 {
            return Err(TableError::Gap { prev, range });
        }
    }

    if first.range.min != domain.min {
        return Err(TableError::FloorMismatch {
            expected: domain.min,
            found: first.range.min,
        });
    }
    if last.range.max != domain.max {
        return Err(TableError::CeilingMismatch {
            expected: domain.max,
            found: last.range.max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::EffectPool;
    use proptest::prelude::*;
    use surge_dice::{DiceExpr, FixedSource, SeededSource};

    fn text(s: &str) -> Resolver {
        Resolver::text(s)
    }

    fn small_table() -> RangeTable {
        RangeTable::new(
            "small",
            Range::new(1, 10),
            vec![
                TableEntry::new(1, 3, text("low")),
                TableEntry::new(4, 4, text("four")),
                TableEntry::new(5, 10, text("high")),
            ],
        )
        .unwrap()
    }

    #[test]
    fn lookup_hits_every_entry() {
        let table = small_table();
        let source = SeededSource::from_seed(1);
        assert_eq!(table.lookup(1, &source), "low");
        assert_eq!(table.lookup(3, &source), "low");
        assert_eq!(table.lookup(4, &source), "four");
        assert_eq!(table.lookup(5, &source), "high");
        assert_eq!(table.lookup(10, &source), "high");
    }

    #[test]
    fn out_of_domain_returns_sentinel() {
        let table = small_table();
        let source = SeededSource::from_seed(1);
        assert_eq!(table.lookup(0, &source), NOT_FOUND);
        assert_eq!(table.lookup(11, &source), NOT_FOUND);
        assert_eq!(table.lookup(i64::MIN, &source), NOT_FOUND);
        assert_eq!(table.lookup(i64::MAX, &source), NOT_FOUND);
        assert!(table.entry_for(-3).is_none());
    }

    #[test]
    fn accessors() {
        let table = small_table();
        assert_eq!(table.name(), "small");
        assert_eq!(table.domain(), Range::new(1, 10));
        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());
        assert_eq!(table.entries()[1].range, Range::new(4, 4));
    }

    #[test]
    fn single_entry_table() {
        let table = RangeTable::new(
            "one",
            Range::new(7, 7),
            vec![TableEntry::new(7, 7, text("only"))],
        )
        .unwrap();
        let source = SeededSource::from_seed(1);
        assert_eq!(table.lookup(7, &source), "only");
        assert_eq!(table.lookup(6, &source), NOT_FOUND);
        assert_eq!(table.lookup(8, &source), NOT_FOUND);
    }

    #[test]
    fn rejects_empty() {
        let err = RangeTable::new("none", Range::new(1, 10), Vec::new()).unwrap_err();
        assert!(matches!(err, TableError::Empty(name) if name == "none"));
    }

    #[test]
    fn rejects_inverted_domain() {
        let err = RangeTable::new(
            "bad",
            Range::new(10, 1),
            vec![TableEntry::new(1, 10, text("x"))],
        )
        .unwrap_err();
        assert!(matches!(err, TableError::InvalidDomain(_)));
    }

    #[test]
    fn rejects_inverted_range() {
        let err = RangeTable::new(
            "bad",
            Range::new(1, 10),
            vec![TableEntry::new(1, 5, text("a")), TableEntry::new(8, 6, text("b"))],
        )
        .unwrap_err();
        assert!(matches!(err, TableError::InvertedRange(r) if r == Range::new(8, 6)));
    }

    #[test]
    fn rejects_unsorted() {
        let err = RangeTable::new(
            "bad",
            Range::new(1, 10),
            vec![TableEntry::new(6, 10, text("a")), TableEntry::new(1, 5, text("b"))],
        )
        .unwrap_err();
        assert!(matches!(err, TableError::Unsorted { .. }));
    }

    #[test]
    fn rejects_overlap() {
        let err = RangeTable::new(
            "bad",
            Range::new(1, 10),
            vec![TableEntry::new(1, 5, text("a")), TableEntry::new(5, 10, text("b"))],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            TableError::Overlap { prev, range }
                if prev == Range::new(1, 5) && range == Range::new(5, 10)
        ));
    }

    #[test]
    fn rejects_gap() {
        let err = RangeTable::new(
            "bad",
            Range::new(1, 10),
            vec![TableEntry::new(1, 4, text("a")), TableEntry::new(6, 10, text("b"))],
        )
        .unwrap_err();
        assert!(matches!(err, TableError::Gap { .. }));
        assert_eq!(err.to_string(), "gap between 01–04 and 06–10");
    }

    #[test]
    fn rejects_floor_and_ceiling_mismatch() {
        let err = RangeTable::new(
            "bad",
            Range::new(1, 10),
            vec![TableEntry::new(2, 10, text("a"))],
        )
        .unwrap_err();
        assert!(matches!(err, TableError::FloorMismatch { expected: 1, found: 2 }));

        let err = RangeTable::new(
            "bad",
            Range::new(1, 10),
            vec![TableEntry::new(1, 9, text("a"))],
        )
        .unwrap_err();
        assert!(matches!(err, TableError::CeilingMismatch { expected: 10, found: 9 }));
    }

    #[test]
    fn rejects_malformed_resolver() {
        let err = RangeTable::new(
            "bad",
            Range::new(1, 2),
            vec![
                TableEntry::new(1, 1, text("a")),
                TableEntry::new(2, 2, Resolver::pick("{}", EffectPool::new("void", Vec::new()))),
            ],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            TableError::InvalidResolver { range, .. } if range == Range::new(2, 2)
        ));
    }

    #[test]
    fn resolver_invoked_only_for_selected_entry() {
        let table = RangeTable::new(
            "lazy",
            Range::new(1, 2),
            vec![
                TableEntry::new(1, 1, Resolver::dice("{}", DiceExpr { count: 1, sides: 6 })),
                TableEntry::new(2, 2, text("static")),
            ],
        )
        .unwrap();
        // A static entry consumes no draws, so the next dice roll sees the first value.
        let source = FixedSource::new(vec![3, 4]);
        assert_eq!(table.lookup(2, &source), "static");
        assert_eq!(table.lookup(1, &source), "1к6(3)");
    }

    proptest! {
        #[test]
        fn generated_partitions_cover_their_domain(
            widths in proptest::collection::vec(1i64..8, 1..20),
            floor in -50i64..50,
        ) {
            let mut entries = Vec::new();
            let mut min = floor;
            for (i, width) in widths.iter().enumerate() {
                let max = min + width - 1;
                entries.push(TableEntry::new(min, max, Resolver::text(i.to_string())));
                min = max + 1;
            }
            let domain = Range::new(floor, min - 1);
            let table = RangeTable::new("generated", domain, entries).unwrap();
            let source = FixedSource::constant(1);

            for roll in domain.min..=domain.max {
                let entry = table.entry_for(roll).unwrap();
                prop_assert!(entry.range.contains(roll));
                let matching = table.entries().iter().filter(|e| e.range.contains(roll)).count();
                prop_assert_eq!(matching, 1);
            }
            prop_assert_eq!(table.lookup(domain.min - 1, &source), NOT_FOUND);
            prop_assert_eq!(table.lookup(domain.max + 1, &source), NOT_FOUND);
        }
    }
}
