use std::fmt;

/// In-app destinations the transfer flow navigates to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    AccountPaymentsRoot {
        account_membership_id: String,
    },
    AccountTransactionsListRoot {
        account_membership_id: String,
        payment_id: Option<String>,
    },
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Route::AccountPaymentsRoot { .. } => "AccountPaymentsRoot",
            Route::AccountTransactionsListRoot { .. } => "AccountTransactionsListRoot",
        }
    }

    /// Path relative to the dashboard origin.
    pub fn path(&self) -> String {
        match self {
            Route::AccountPaymentsRoot {
                account_membership_id,
            } => format!("/{account_membership_id}/payments"),
            Route::AccountTransactionsListRoot {
                account_membership_id,
                ..
            } => format!("/{account_membership_id}/transactions"),
        }
    }

    /// Absolute URL of this route under `origin`.
    pub fn absolute(&self, origin: &str) -> String {
        format!("{}{}", origin.trim_end_matches('/'), self.path())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}
