//! Maps an error identifier to the way it is presented.
//!
//! [`classify`] is pure. Whether an error also ends the session is answered by
//! [`ErrorCode::invalidates_session`] and acted upon by the caller.

use crate::codes::{ClientError, ErrorCode, ServerCode};
use crate::dialog::ButtonSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreatmentCategory {
    ConfirmationDialog,
    PasswordMismatch,
    GenericMessage,
    PurchasePrompt,
    Popup,
    ReplaceDevice,
    PvrSpecific,
    RescheduleFailure,
    SessionTimeout,
}

impl TreatmentCategory {
    pub fn buttons(&self) -> ButtonSet {
        match self {
            TreatmentCategory::ConfirmationDialog => ButtonSet::OkCancel,
            TreatmentCategory::PurchasePrompt | TreatmentCategory::ReplaceDevice => {
                ButtonSet::YesNo
            }
            TreatmentCategory::PasswordMismatch
            | TreatmentCategory::GenericMessage
            | TreatmentCategory::Popup
            | TreatmentCategory::PvrSpecific
            | TreatmentCategory::RescheduleFailure
            | TreatmentCategory::SessionTimeout => ButtonSet::Ok,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: TreatmentCategory,
    pub title_key: &'static str,
    pub message_key: String,
    pub buttons: ButtonSet,
}

pub fn category_of(code: &ErrorCode) -> TreatmentCategory {
    match code {
        ErrorCode::Client(ClientError::PasswordMismatch) => TreatmentCategory::PasswordMismatch,
        ErrorCode::Client(
            ClientError::MissingFields
            | ClientError::InvalidEmail
            | ClientError::NoTaskSelected
            | ClientError::InvalidDate,
        ) => TreatmentCategory::Popup,
        ErrorCode::Server(ServerCode::NoSession) => TreatmentCategory::SessionTimeout,
        ErrorCode::Server(
            ServerCode::NewPasswordDoesntMatchVerification | ServerCode::InvalidCredentials,
        ) => TreatmentCategory::PasswordMismatch,
        ErrorCode::Server(_) => TreatmentCategory::Popup,
        ErrorCode::Catalog(catalog) => catalog.category(),
        ErrorCode::Unrecognized(_) => TreatmentCategory::Popup,
    }
}

pub fn classify(code: &ErrorCode) -> Classification {
    let category = category_of(code);
    Classification {
        category,
        title_key: "error",
        message_key: code.message_key(),
        buttons: category.buttons(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::CatalogCode;

    #[test]
    fn test_classify_session_loss() {
        let classification = classify(&ErrorCode::Server(ServerCode::NoSession));
        assert_eq!(classification.category, TreatmentCategory::SessionTimeout);
        assert_eq!(classification.message_key, "-401");
        assert_eq!(classification.buttons, ButtonSet::Ok);
    }

    #[test]
    fn test_classify_client_errors() {
        let classification = classify(&ClientError::PasswordMismatch.into());
        assert_eq!(classification.category, TreatmentCategory::PasswordMismatch);
        assert_eq!(classification.message_key, "client-104");

        let classification = classify(&ClientError::MissingFields.into());
        assert_eq!(classification.category, TreatmentCategory::Popup);
        assert_eq!(classification.title_key, "error");
    }

    #[test]
    fn test_classify_catalog_buttons() {
        let confirm = classify(&ErrorCode::Catalog(CatalogCode::PlayVod144020011));
        assert_eq!(confirm.category, TreatmentCategory::ConfirmationDialog);
        assert_eq!(confirm.buttons, ButtonSet::OkCancel);

        let purchase = classify(&ErrorCode::Catalog(CatalogCode::PlayChannel146021006));
        assert_eq!(purchase.buttons, ButtonSet::YesNo);
    }

    #[test]
    fn test_unknown_codes_still_pop_up() {
        let unknown = classify(&ErrorCode::Server(ServerCode::Unknown(-77)));
        assert_eq!(unknown.category, TreatmentCategory::Popup);
        let unrecognized = classify(&ErrorCode::Unrecognized("Weird_1".to_string()));
        assert_eq!(unrecognized.category, TreatmentCategory::Popup);
        assert_eq!(unrecognized.message_key, "Weird_1");
    }
}
