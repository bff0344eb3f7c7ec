//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!                 ┌──────────────────────────┐
//!                 │       Application        │
//!                 │  ScanService ─► Domain   │
//!                 └────────────┬─────────────┘
//!                              │ port::outbound
//!                 ┌────────────┴─────────────┐
//!                 ▼                          ▼
//!          ┌─────────────┐           ┌─────────────┐
//!          │ MatchSource │           │ OddsSource  │
//!          └─────────────┘           └─────────────┘
//!                 ▲                          ▲
//!                 └──── adapter::outbound ───┘
//! ```

pub mod outbound;
