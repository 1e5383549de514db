pub mod overview;
pub mod risk;
pub mod settings;
pub mod wallet_detail;
pub mod wallets;

use shared::{mock_data, Section, Wallet};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::delete_wallet_modal::DeleteWalletModal;
use crate::components::deposit_wallet_modal::DepositWalletModal;
use crate::components::edit_wallet_modal::EditWalletModal;
use crate::components::sidebar::Sidebar;
use crate::components::transaction_table::TransactionTable;
use crate::hooks::use_auth::use_auth;
use crate::services::logging::Logger;

use overview::OverviewSection;
use risk::RiskDashboard;
use settings::SettingsSection;
use wallet_detail::WalletDetail;
use wallets::WalletsSection;

/// Which wallet dialog is showing, and for which wallet
#[derive(Clone, PartialEq)]
pub enum WalletDialog {
    Deposit(Wallet),
    Edit(Wallet),
    Delete(Wallet),
}

/// Wallet actions the sections can request
#[derive(Clone, PartialEq)]
pub struct WalletActions {
    pub select: Callback<String>,
    pub open_dialog: Callback<WalletDialog>,
}

#[derive(Properties, PartialEq)]
pub struct DashboardPageProps {
    pub on_logout: Callback<()>,
}

#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardPageProps) -> Html {
    let auth = use_auth();
    let user_id = auth.user.as_ref().map(|u| u.id.clone()).unwrap_or_default();

    let section = use_state(Section::default);
    let selected_wallet = use_state(|| Option::<String>::None);
    // Page-local copy; edits and deletes never leave this component
    let wallets = use_state({
        let user_id = user_id.clone();
        move || mock_data::wallets_for_user(&user_id)
    });
    let dialog = use_state(|| Option::<WalletDialog>::None);

    // A different user signing in gets their own wallets
    use_effect_with(user_id, {
        let wallets = wallets.clone();
        let selected_wallet = selected_wallet.clone();
        move |user_id| {
            wallets.set(mock_data::wallets_for_user(user_id));
            selected_wallet.set(None);
            || ()
        }
    });

    let on_navigate = {
        let section = section.clone();
        let selected_wallet = selected_wallet.clone();
        Callback::from(move |next: Section| {
            Logger::debug_with_component("dashboard", &format!("Section -> {}", next.id()));
            selected_wallet.set(None);
            section.set(next);
        })
    };

    let actions = WalletActions {
        select: {
            let section = section.clone();
            let selected_wallet = selected_wallet.clone();
            Callback::from(move |wallet_id: String| {
                section.set(Section::Wallets);
                selected_wallet.set(Some(wallet_id));
            })
        },
        open_dialog: {
            let dialog = dialog.clone();
            Callback::from(move |target: WalletDialog| dialog.set(Some(target)))
        },
    };

    let close_dialog = {
        let dialog = dialog.clone();
        Callback::from(move |_: ()| dialog.set(None))
    };

    let on_save = {
        let wallets = wallets.clone();
        let dialog = dialog.clone();
        Callback::from(move |updated: Wallet| {
            let next: Vec<Wallet> = wallets
                .iter()
                .map(|w| if w.id == updated.id { updated.clone() } else { w.clone() })
                .collect();
            wallets.set(next);
            dialog.set(None);
        })
    };

    let on_delete = {
        let wallets = wallets.clone();
        let dialog = dialog.clone();
        let selected_wallet = selected_wallet.clone();
        Callback::from(move |_: ()| {
            if let Some(WalletDialog::Delete(target)) = (*dialog).clone() {
                let next: Vec<Wallet> = wallets.iter().filter(|w| w.id != target.id).cloned().collect();
                wallets.set(next);
                if selected_wallet.as_deref() == Some(target.id.as_str()) {
                    selected_wallet.set(None);
                }
            }
            dialog.set(None);
        })
    };

    let on_back_to_list = {
        let selected_wallet = selected_wallet.clone();
        Callback::from(move |_: MouseEvent| selected_wallet.set(None))
    };

    let transactions = mock_data::transactions_for_wallets(&wallets);

    let content = match (*section, (*selected_wallet).clone()) {
        (Section::Wallets, Some(wallet_id)) => match wallets.iter().find(|w| w.id == wallet_id) {
            Some(wallet) => html! {
                <WalletDetail
                    wallet={wallet.clone()}
                    actions={actions.clone()}
                    on_back={on_back_to_list}
                />
            },
            None => html! { <div class="empty-state">{"Wallet not found"}</div> },
        },
        (Section::Wallets, None) => html! {
            <WalletsSection wallets={(*wallets).clone()} actions={actions.clone()} />
        },
        (Section::Overview, _) => html! {
            <OverviewSection
                wallets={(*wallets).clone()}
                transactions={transactions.clone()}
                actions={actions.clone()}
            />
        },
        (Section::Transactions, _) => html! {
            <TransactionTable
                title="All Transactions"
                transactions={transactions.clone()}
                wallets={Some((*wallets).clone())}
            />
        },
        (Section::Risk, _) => html! { <RiskDashboard /> },
        (Section::Settings, _) => html! { <SettingsSection on_logout={props.on_logout.clone()} /> },
    };

    let (deposit_target, edit_target, delete_target) = match (*dialog).clone() {
        Some(WalletDialog::Deposit(w)) => (Some(w), None, None),
        Some(WalletDialog::Edit(w)) => (None, Some(w), None),
        Some(WalletDialog::Delete(w)) => (None, None, Some(w)),
        None => (None, None, None),
    };

    html! {
        <div class="dashboard">
            <Sidebar current_section={*section} on_navigate={on_navigate} />
            <main class="dashboard-main">
                <header class="dashboard-header">
                    <h1>{dashboard_title(*section)}</h1>
                    if let Some(user) = auth.user.as_ref() {
                        <span class="dashboard-user">{format!("Signed in as {}", user.name)}</span>
                    }
                </header>
                {content}
            </main>

            <DepositWalletModal
                is_open={deposit_target.is_some()}
                wallet={deposit_target}
                on_close={close_dialog.clone()}
            />
            <EditWalletModal
                is_open={edit_target.is_some()}
                wallet={edit_target}
                on_save={on_save}
                on_close={close_dialog.clone()}
            />
            <DeleteWalletModal
                is_open={delete_target.is_some()}
                wallet={delete_target}
                on_delete={on_delete}
                on_close={close_dialog}
            />
        </div>
    }
}

fn dashboard_title(section: Section) -> &'static str {
    shared::navigation::MENU
        .iter()
        .find(|item| item.section == section)
        .map(|item| item.label)
        .unwrap_or("Dashboard")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_title() {
        assert_eq!(dashboard_title(Section::Risk), "Risk Control");
        assert_eq!(dashboard_title(Section::Overview), "Overview");
    }
}
