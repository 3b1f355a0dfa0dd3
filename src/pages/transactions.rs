//! Dashboard transaction history, paged locally.

#[cfg(test)]
#[path = "transactions_test.rs"]
mod transactions_test;

use leptos::prelude::*;

use crate::components::dashboard_nav::DashboardNav;
use crate::components::pager::{Pager, page_count, page_slice};
use crate::config::ApiConfig;
use crate::net::marketplace::{Amount, Transaction, status_modifier};
use crate::state::credential::Credentials;
use crate::state::session::{SessionStore, end_session_if_rejected};

pub const TRANSACTIONS_PAGE_SIZE: u32 = 10;

/// Sum of every listed amount.
pub fn total_amount(transactions: &[Transaction]) -> Amount {
    Amount(transactions.iter().map(|t| t.amount.0).sum())
}

#[component]
pub fn TransactionsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let credentials = expect_context::<Credentials>();
    let config = expect_context::<ApiConfig>();

    let transactions = RwSignal::new(Vec::<Transaction>::new());
    let loading = RwSignal::new(true);
    let info = RwSignal::new(String::new());
    let page = RwSignal::new(1_u32);

    #[cfg(feature = "hydrate")]
    {
        match credentials.access_token() {
            Some(token) => {
                leptos::task::spawn_local(async move {
                    match crate::net::api::list_transactions(&config, &token).await {
                        Ok(list) => transactions.set(list),
                        Err(e) => {
                            if !session.try_update(|s| end_session_if_rejected(s, &credentials, &e)).unwrap_or(false) {
                                info.set(e.detail_or("Failed to load transactions"));
                            }
                        }
                    }
                    loading.set(false);
                });
            }
            None => loading.set(false),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (config, credentials, session);

    let pages = Signal::derive(move || {
        let total = transactions.with(|t| u64::try_from(t.len()).unwrap_or(u64::MAX));
        page_count(total, TRANSACTIONS_PAGE_SIZE)
    });

    view! {
        <div class="dashboard-page">
            <DashboardNav/>
            <h1>"Transactions"</h1>
            <Show when=move || !info.get().is_empty()>
                <p class="dashboard-message">{move || info.get()}</p>
            </Show>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="dashboard-empty">"Loading transactions..."</p> }
            >
                <Show
                    when=move || transactions.with(|t| !t.is_empty())
                    fallback=|| view! { <p class="dashboard-empty">"No transactions yet."</p> }
                >
                    <p class="transactions__total">
                        "Total: " {move || transactions.with(|t| total_amount(t).label())}
                    </p>
                    <table class="transactions">
                        <thead>
                            <tr>
                                <th>"Description"</th>
                                <th>"Amount"</th>
                                <th>"Status"</th>
                                <th>"Date"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                transactions
                                    .with(|t| page_slice(t, page.get(), TRANSACTIONS_PAGE_SIZE))
                                    .into_iter()
                                    .map(|tx| {
                                        let status = tx.status.clone().unwrap_or_default();
                                        view! {
                                            <tr>
                                                <td>{tx.description.clone().unwrap_or_default()}</td>
                                                <td>{tx.amount.label()}</td>
                                                <td class=format!(
                                                    "status status--{}",
                                                    status_modifier(tx.status.as_deref()),
                                                )>{status}</td>
                                                <td>{tx.when().unwrap_or_default().to_owned()}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                    <Pager page=page pages=pages/>
                </Show>
            </Show>
        </div>
    }
}
