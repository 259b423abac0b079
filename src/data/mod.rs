/// Data layer: core types, loading, filtering, statistics and export.
///
/// Architecture:
/// ```text
///   data/penguins.csv (bundled)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → PenguinDataset
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ PenguinDataset │  Vec<Penguin>, shared via Arc
///   └────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  species / island predicates → FilteredView
///   └──────────┘
///        │
///        ├──► stats   describe() per numeric column
///        └──► export  FilteredView → .csv / .json / .parquet
/// ```

pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
pub mod stats;
