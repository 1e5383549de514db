pub mod content_page;
pub mod delete_wallet_modal;
pub mod deposit_wallet_modal;
pub mod edit_wallet_modal;
pub mod sidebar;
pub mod site_footer;
pub mod site_header;
pub mod toggle_switch;
pub mod transaction_table;
