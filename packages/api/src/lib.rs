//! # API crate — REST client for the FraudDetect backend
//!
//! Everything the front-end sends over HTTP goes through this crate. It owns
//! the bearer-injection policy, the wire models, and the error mapping; it
//! knows nothing about the UI.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`] — token-injecting `reqwest` wrapper, base URLs |
//! | [`identity`] | [`IdentityProvider`] seam to the identity SDK |
//! | [`profile`] | `GET /users/me` — the role/bank/RIB profile |
//! | [`agents`] | Legacy agent login and forced password reset |
//! | [`cheques`] | Agent work queue listing |
//! | [`notifications`] | Realtime frame format and parsing |
//! | [`error`] | [`ApiError`] |

pub mod agents;
pub mod cheques;
pub mod client;
pub mod error;
pub mod identity;
pub mod notifications;
pub mod profile;

pub use agents::{login_agent, reset_agent_password, AgentLoginResponse, AgentResetResponse};
pub use cheques::{fetch_agent_cheques, AgentCheques, ChequeSummary};
pub use client::{api_base, ws_base, ApiClient, AGENT_PATH_PREFIX};
pub use error::ApiError;
pub use identity::{IdentityProvider, NullIdentity};
pub use notifications::{NotificationEvent, NotificationKind};
pub use profile::fetch_profile;
