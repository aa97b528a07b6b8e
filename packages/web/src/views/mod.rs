mod auth;
pub use auth::Auth;

mod dashboard;
pub use dashboard::Dashboard;

mod admin;
pub use admin::AdminDashboard;

mod beneficiary;
pub use beneficiary::BeneficiarySpace;

mod agent_login;
pub use agent_login::AgentLogin;

mod agent_first_login;
pub use agent_first_login::AgentFirstLogin;

mod agent_dashboard;
pub use agent_dashboard::AgentDashboard;
