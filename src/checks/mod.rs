pub mod auth;
pub mod betting;
pub mod quota;
pub mod sports;
pub mod wallet;

use crate::runner::RunContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    Auth,
    Sports,
    Wallet,
    Betting,
    Quota,
}

/// One entry of the suite table.
pub struct CheckSpec {
    pub name: &'static str,
    pub kind: CheckKind,
    /// A failing fatal group aborts the rest of the run. Only the login
    /// group carries this flag: every later group depends on its token.
    pub fatal: bool,
}

/// The whole suite, in execution order.
pub const SUITE: &[CheckSpec] = &[
    CheckSpec {
        name: "Authentication Endpoints",
        kind: CheckKind::Auth,
        fatal: true,
    },
    CheckSpec {
        name: "Sports Data Endpoints",
        kind: CheckKind::Sports,
        fatal: false,
    },
    CheckSpec {
        name: "Wallet Endpoints",
        kind: CheckKind::Wallet,
        fatal: false,
    },
    CheckSpec {
        name: "Betting Endpoints",
        kind: CheckKind::Betting,
        fatal: false,
    },
    CheckSpec {
        name: "API Quota Usage",
        kind: CheckKind::Quota,
        fatal: false,
    },
];

/// Dispatch one group. Returns false when the group wants to stop the run;
/// the runner only honors that for groups marked fatal.
pub async fn run_check(kind: CheckKind, ctx: &mut RunContext) -> bool {
    match kind {
        CheckKind::Auth => auth::run(ctx).await,
        CheckKind::Sports => sports::run(ctx).await,
        CheckKind::Wallet => wallet::run(ctx).await,
        CheckKind::Betting => betting::run(ctx).await,
        CheckKind::Quota => quota::run(ctx).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suite_order_and_fatality() {
        assert_eq!(SUITE.len(), 5);
        assert_eq!(SUITE[0].kind, CheckKind::Auth);
        assert!(SUITE[0].fatal);
        assert!(SUITE[1..].iter().all(|spec| !spec.fatal));
    }
}
