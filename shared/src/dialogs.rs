//! Modal state machines for the wallet dialogs.
//!
//! Every dialog moves `Closed -> Open -> Busy -> Closed`. The parent owns
//! whether a dialog is shown; these types own what happens while it is.

use log::{debug, info};
use url::Url;

use crate::models::Wallet;

/// Text the user must type to enable wallet deletion
pub const DELETE_CONFIRMATION: &str = "DELETE";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogPhase {
    #[default]
    Closed,
    Open,
    /// A simulated operation is in flight
    Busy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DialogState {
    phase: DialogPhase,
}

impl DialogState {
    pub fn phase(&self) -> DialogPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase != DialogPhase::Closed
    }

    pub fn is_busy(&self) -> bool {
        self.phase == DialogPhase::Busy
    }

    pub fn open(&mut self) {
        if self.phase == DialogPhase::Closed {
            self.phase = DialogPhase::Open;
        }
    }

    /// Open -> Busy. Fails from any other phase.
    pub fn begin(&mut self) -> bool {
        if self.phase != DialogPhase::Open {
            return false;
        }
        self.phase = DialogPhase::Busy;
        true
    }

    /// Busy -> Closed once the operation completes
    pub fn finish(&mut self) {
        if self.phase == DialogPhase::Busy {
            self.phase = DialogPhase::Closed;
        }
    }

    /// Close unless an operation is in flight
    pub fn close(&mut self) -> bool {
        if self.phase == DialogPhase::Busy {
            debug!("Ignoring close request while busy");
            return false;
        }
        self.phase = DialogPhase::Closed;
        true
    }
}

pub fn can_confirm_delete(typed: &str) -> bool {
    typed == DELETE_CONFIRMATION
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeleteWalletDialog {
    pub state: DialogState,
    pub typed: String,
}

impl DeleteWalletDialog {
    pub fn open(&mut self) {
        self.typed.clear();
        self.state.open();
    }

    pub fn confirm_enabled(&self) -> bool {
        self.state.phase() == DialogPhase::Open && can_confirm_delete(&self.typed)
    }

    /// Start deleting if the confirmation text matches
    pub fn confirm(&mut self) -> bool {
        if !self.confirm_enabled() {
            return false;
        }
        self.state.begin()
    }

    pub fn close(&mut self) -> bool {
        self.state.close()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditWalletDialog {
    pub state: DialogState,
    pub name: String,
    pub description: String,
}

impl EditWalletDialog {
    /// Open with the form seeded from `wallet`
    pub fn open(&mut self, wallet: &Wallet) {
        self.name = wallet.name.clone().unwrap_or_default();
        self.description = wallet.description.clone().unwrap_or_default();
        self.state.open();
    }

    pub fn save(&mut self) -> bool {
        self.state.begin()
    }

    /// Copy of `wallet` carrying the edited fields; blank fields become `None`
    pub fn apply(&self, wallet: &Wallet) -> Wallet {
        let non_blank = |value: &str| {
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        };
        info!("Applying local edit to wallet {}", wallet.id);
        Wallet {
            name: non_blank(&self.name),
            description: non_blank(&self.description),
            ..wallet.clone()
        }
    }

    pub fn close(&mut self) -> bool {
        self.state.close()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DepositDialog {
    pub state: DialogState,
    copied: bool,
}

impl DepositDialog {
    pub fn open(&mut self) {
        self.copied = false;
        self.state.open();
    }

    pub fn copied(&self) -> bool {
        self.copied
    }

    pub fn mark_copied(&mut self) {
        self.copied = true;
    }

    /// Called once the "copied" indicator delay elapses
    pub fn reset_copied(&mut self) {
        self.copied = false;
    }

    pub fn close(&mut self) -> bool {
        self.copied = false;
        self.state.close()
    }
}

/// Image URL for a deposit QR code of `address`
pub fn qr_code_url(endpoint: &str, size_px: u32, address: &str) -> Result<String, url::ParseError> {
    let size = format!("{}x{}", size_px, size_px);
    let url = Url::parse_with_params(endpoint, &[("size", size.as_str()), ("data", address)])?;
    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_data;

    #[test]
    fn test_dialog_phases() {
        let mut state = DialogState::default();
        assert_eq!(state.phase(), DialogPhase::Closed);
        assert!(!state.begin());

        state.open();
        assert!(state.is_open());
        assert!(state.begin());
        assert!(state.is_busy());

        state.finish();
        assert_eq!(state.phase(), DialogPhase::Closed);
    }

    #[test]
    fn test_cannot_close_while_busy() {
        let mut state = DialogState::default();
        state.open();
        state.begin();

        assert!(!state.close());
        assert!(state.is_busy());

        state.finish();
        assert!(state.close());
    }

    #[test]
    fn test_delete_requires_exact_text() {
        let mut dialog = DeleteWalletDialog::default();
        dialog.open();

        for typed in ["", "delete", "Delete", "DELETE ", " DELETE", "DELET"] {
            dialog.typed = typed.to_string();
            assert!(!dialog.confirm_enabled(), "{:?} must not enable delete", typed);
            assert!(!dialog.confirm());
        }

        dialog.typed = "DELETE".to_string();
        assert!(dialog.confirm_enabled());
        assert!(dialog.confirm());
        assert!(dialog.state.is_busy());
        assert!(!dialog.close());
    }

    #[test]
    fn test_delete_open_resets_typed_text() {
        let mut dialog = DeleteWalletDialog::default();
        dialog.open();
        dialog.typed = "DELETE".to_string();
        dialog.close();

        dialog.open();
        assert!(dialog.typed.is_empty());
        assert!(!dialog.confirm_enabled());
    }

    #[test]
    fn test_edit_seeds_and_applies() {
        let wallet = mock_data::wallets().remove(0);
        let mut dialog = EditWalletDialog::default();
        dialog.open(&wallet);
        assert_eq!(dialog.name, "Main Wallet");
        assert_eq!(dialog.description, "Primary trading wallet");

        dialog.name = "  Trading  ".to_string();
        dialog.description = "   ".to_string();
        assert!(dialog.save());

        let updated = dialog.apply(&wallet);
        assert_eq!(updated.name.as_deref(), Some("Trading"));
        assert_eq!(updated.description, None);
        assert_eq!(updated.address, wallet.address);
        assert_eq!(updated.id, wallet.id);
    }

    #[test]
    fn test_deposit_copied_resets() {
        let mut dialog = DepositDialog::default();
        dialog.open();
        dialog.mark_copied();
        assert!(dialog.copied());

        dialog.reset_copied();
        assert!(!dialog.copied());

        dialog.mark_copied();
        assert!(dialog.close());
        dialog.open();
        assert!(!dialog.copied());
    }

    #[test]
    fn test_qr_code_url_encodes_address() {
        let url = qr_code_url(
            "https://api.qrserver.com/v1/create-qr-code/",
            200,
            "0xabc&evil=1",
        )
        .unwrap();
        assert_eq!(
            url,
            "https://api.qrserver.com/v1/create-qr-code/?size=200x200&data=0xabc%26evil%3D1"
        );

        assert!(qr_code_url("not a url", 200, "0xabc").is_err());
    }
}
