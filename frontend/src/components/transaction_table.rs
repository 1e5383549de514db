use shared::format::format_timestamp;
use shared::{Transaction, TransactionType, Wallet};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TransactionTableProps {
    pub title: AttrValue,
    pub transactions: Vec<Transaction>,
    /// When given, a wallet column is shown using these names
    #[prop_or_default]
    pub wallets: Option<Vec<Wallet>>,
}

fn amount_class(transaction_type: TransactionType) -> &'static str {
    match transaction_type {
        TransactionType::Receive | TransactionType::Buy => "amount positive",
        TransactionType::Send => "amount negative",
    }
}

fn signed_amount(transaction: &Transaction) -> String {
    match transaction.transaction_type {
        TransactionType::Send => format!("-{}", transaction.amount),
        TransactionType::Receive | TransactionType::Buy => format!("+{}", transaction.amount),
    }
}

#[function_component(TransactionTable)]
pub fn transaction_table(props: &TransactionTableProps) -> Html {
    let wallet_name = |wallet_id: &str| -> String {
        props
            .wallets
            .as_ref()
            .and_then(|wallets| wallets.iter().find(|w| w.id == wallet_id))
            .map(|w| w.display_name())
            .unwrap_or_else(|| wallet_id.to_string())
    };
    let show_wallet = props.wallets.is_some();

    html! {
        <section class="transactions-section">
            <h2>{&props.title}</h2>

            {if props.transactions.is_empty() {
                html! { <div class="empty-state">{"No transactions yet"}</div> }
            } else {
                html! {
                    <div class="table-container">
                        <table class="transactions-table">
                            <thead>
                                <tr>
                                    <th>{"Date"}</th>
                                    if show_wallet {
                                        <th>{"Wallet"}</th>
                                    }
                                    <th>{"Type"}</th>
                                    <th>{"Amount"}</th>
                                    <th>{"Status"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {for props.transactions.iter().map(|transaction| {
                                    html! {
                                        <tr key={transaction.id.clone()}>
                                            <td class="date">{format_timestamp(&transaction.timestamp)}</td>
                                            if show_wallet {
                                                <td class="wallet">{wallet_name(&transaction.wallet_id)}</td>
                                            }
                                            <td class="type">{transaction.transaction_type.to_string()}</td>
                                            <td class={amount_class(transaction.transaction_type)}>
                                                {signed_amount(transaction)}
                                            </td>
                                            <td>
                                                <span class={transaction.status.css_class()}>
                                                    {transaction.status.to_string()}
                                                </span>
                                            </td>
                                        </tr>
                                    }
                                })}
                            </tbody>
                        </table>
                    </div>
                }
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::mock_data;

    #[test]
    fn test_signed_amount() {
        let txs = mock_data::transactions();
        let send = txs.iter().find(|tx| tx.transaction_type == TransactionType::Send).unwrap();
        let receive = txs.iter().find(|tx| tx.transaction_type == TransactionType::Receive).unwrap();

        assert!(signed_amount(send).starts_with('-'));
        assert!(signed_amount(receive).starts_with('+'));
        assert_eq!(amount_class(TransactionType::Send), "amount negative");
    }
}
