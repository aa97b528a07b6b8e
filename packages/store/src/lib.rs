//! Client-side state core for the FraudDetect front-end.
//!
//! Everything in this crate is plain data and decision logic — no network,
//! no framework types — so it runs and tests on any target. The browser-only
//! storage backend is gated behind the `web` feature.

pub mod banks;
pub mod models;

mod session;
pub use session::{AuthSnapshot, RoleSync};

mod kv;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use kv::LocalStorageKv;
pub use kv::{KvStore, MemoryKv};

mod agent;
pub use agent::{
    clear_agent_session, load_agent_session, save_agent_session, AgentSession, AGENT_TOKEN_KEY,
    AGENT_USER_KEY,
};

pub use banks::{bank_id_from_rib, theme_for_bank, BankTheme, DEFAULT_THEME};
pub use models::{ProfileRecord, Role};
