//! Range-dispatch tables for wild-magic surges.
//!
//! A [`RangeTable`] partitions an integer domain into contiguous, disjoint
//! ranges, each bound to a [`Resolver`] that produces the entry's text.
//! Tables are validated on construction and can be loaded from JSON.
//! The built-in d100 surge table lives in [`wild_magic`].

pub mod def;
pub mod error;
pub mod pool;
pub mod range;
pub mod resolver;
pub mod table;
pub mod wild_magic;

pub use def::{TableDef, load_table};
pub use error::{TableError, TableResult};
pub use pool::EffectPool;
pub use range::Range;
pub use resolver::Resolver;
pub use table::{NOT_FOUND, RangeTable, TableEntry};
pub use wild_magic::wild_magic_table;
