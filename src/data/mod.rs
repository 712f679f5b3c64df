//! Data layer: the series model and the log-file loader.
//!
//! ```text
//!  pesa.txt / nsga2.txt
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse two-column text → Series
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  Series   │  label + parallel x/y vectors
//!   └──────────┘
//! ```

pub mod loader;
pub mod model;
