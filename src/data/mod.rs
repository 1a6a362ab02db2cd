/// Data layer: candidate model, source, filtering, stats and export.
///
/// Architecture:
/// ```text
///   candidates.json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  CandidateSource → Vec<Candidate>
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ CandidateSet  │  versioned snapshot, filter options
///   └──────────────┘
///        │                      ┌──────────┐
///        ├─────────────────────▶│  stats    │  once per load
///        ▼                      └──────────┘
///   ┌──────────┐   ┌──────────┐
///   │  filter   │◀──│ language  │  predicate pipeline → filtered indices
///   └──────────┘   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  export   │  filtered / selected → CSV document
///   └──────────┘
/// ```

pub mod export;
pub mod filter;
pub mod language;
pub mod loader;
pub mod model;
pub mod stats;
