//! Error identifiers the console can receive or produce.
//!
//! Three families exist: codes synthesised locally before any request is
//! made ([`ClientError`]), numeric codes returned in the API envelope
//! ([`ServerCode`]) and the string identifiers of the shared EasyTV
//! platform catalog ([`CatalogCode`]).

use std::fmt;

use serde_json::Value;

use crate::classifier::TreatmentCategory;

/// Envelope code of a successful call
pub const CODE_OK: i64 = 200;

/// Validation failures detected before a request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientError {
    MissingFields,
    InvalidEmail,
    NoTaskSelected,
    InvalidDate,
    PasswordMismatch,
}

impl ClientError {
    pub const ALL: [ClientError; 5] = [
        ClientError::MissingFields,
        ClientError::InvalidEmail,
        ClientError::NoTaskSelected,
        ClientError::InvalidDate,
        ClientError::PasswordMismatch,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ClientError::MissingFields => "client-100",
            ClientError::InvalidEmail => "client-101",
            ClientError::NoTaskSelected => "client-102",
            ClientError::InvalidDate => "client-103",
            ClientError::PasswordMismatch => "client-104",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.id() == id)
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Numeric codes of the service-manager API envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServerCode {
    TaskNotDisabled,
    TaskHasActiveJobs,
    JobAlreadyCanceled,
    JobAlreadyCompleted,
    EmptyAsset,
    TaskAlreadyExists,
    TaskNoInputParameter,
    TaskNoOutputParameter,
    InvalidStartUrl,
    InvalidCancelUrl,
    InvalidInput,
    InvalidPublicationDate,
    InvalidExpirationDate,
    JobStatusNotUpdatable,
    ForbiddenAsset,
    InvalidOutput,
    NotCompletable,
    LinkedParameterNotTheSameType,
    LinkedOutputNotFound,
    ServiceNameInUse,
    ContentOwnerNameExists,
    ContentOwnerUsernameExists,
    ContentOwnerEmailExists,
    JobWithDisabledTasks,
    PasswordIsTooShort,
    InvalidCredentials,
    NewPasswordDoesntMatchVerification,
    MissingInput,
    NoSession,
    NotFound,
    InternalServerError,
    Unknown(i64),
}

impl ServerCode {
    pub fn from_code(code: i64) -> Self {
        match code {
            -1 => ServerCode::TaskNotDisabled,
            -2 => ServerCode::TaskHasActiveJobs,
            -3 => ServerCode::JobAlreadyCanceled,
            -4 => ServerCode::JobAlreadyCompleted,
            -5 => ServerCode::EmptyAsset,
            -8 => ServerCode::TaskAlreadyExists,
            -9 => ServerCode::TaskNoInputParameter,
            -10 => ServerCode::TaskNoOutputParameter,
            -11 => ServerCode::InvalidStartUrl,
            -12 => ServerCode::InvalidCancelUrl,
            -13 => ServerCode::InvalidInput,
            -14 => ServerCode::InvalidPublicationDate,
            -15 => ServerCode::InvalidExpirationDate,
            -16 => ServerCode::JobStatusNotUpdatable,
            -17 => ServerCode::ForbiddenAsset,
            -18 => ServerCode::InvalidOutput,
            -19 => ServerCode::NotCompletable,
            -20 => ServerCode::LinkedParameterNotTheSameType,
            -21 => ServerCode::LinkedOutputNotFound,
            -22 => ServerCode::ServiceNameInUse,
            -23 => ServerCode::ContentOwnerNameExists,
            -24 => ServerCode::ContentOwnerUsernameExists,
            -25 => ServerCode::ContentOwnerEmailExists,
            -26 => ServerCode::JobWithDisabledTasks,
            -27 => ServerCode::PasswordIsTooShort,
            -28 => ServerCode::InvalidCredentials,
            -29 => ServerCode::NewPasswordDoesntMatchVerification,
            -400 => ServerCode::MissingInput,
            -401 => ServerCode::NoSession,
            -404 => ServerCode::NotFound,
            -500 => ServerCode::InternalServerError,
            other => ServerCode::Unknown(other),
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            ServerCode::TaskNotDisabled => -1,
            ServerCode::TaskHasActiveJobs => -2,
            ServerCode::JobAlreadyCanceled => -3,
            ServerCode::JobAlreadyCompleted => -4,
            ServerCode::EmptyAsset => -5,
            ServerCode::TaskAlreadyExists => -8,
            ServerCode::TaskNoInputParameter => -9,
            ServerCode::TaskNoOutputParameter => -10,
            ServerCode::InvalidStartUrl => -11,
            ServerCode::InvalidCancelUrl => -12,
            ServerCode::InvalidInput => -13,
            ServerCode::InvalidPublicationDate => -14,
            ServerCode::InvalidExpirationDate => -15,
            ServerCode::JobStatusNotUpdatable => -16,
            ServerCode::ForbiddenAsset => -17,
            ServerCode::InvalidOutput => -18,
            ServerCode::NotCompletable => -19,
            ServerCode::LinkedParameterNotTheSameType => -20,
            ServerCode::LinkedOutputNotFound => -21,
            ServerCode::ServiceNameInUse => -22,
            ServerCode::ContentOwnerNameExists => -23,
            ServerCode::ContentOwnerUsernameExists => -24,
            ServerCode::ContentOwnerEmailExists => -25,
            ServerCode::JobWithDisabledTasks => -26,
            ServerCode::PasswordIsTooShort => -27,
            ServerCode::InvalidCredentials => -28,
            ServerCode::NewPasswordDoesntMatchVerification => -29,
            ServerCode::MissingInput => -400,
            ServerCode::NoSession => -401,
            ServerCode::NotFound => -404,
            ServerCode::InternalServerError => -500,
            ServerCode::Unknown(code) => *code,
        }
    }
}

impl fmt::Display for ServerCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

macro_rules! catalog_codes {
    ($($variant:ident => ($id:literal, $category:ident)),+ $(,)?) => {
        /// Identifiers of the EasyTV platform error catalog.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum CatalogCode {
            $($variant),+
        }

        impl CatalogCode {
            pub const ALL: &'static [CatalogCode] = &[$(CatalogCode::$variant),+];

            pub fn id(&self) -> &'static str {
                match self {
                    $(CatalogCode::$variant => $id),+
                }
            }

            pub fn category(&self) -> TreatmentCategory {
                match self {
                    $(CatalogCode::$variant => TreatmentCategory::$category),+
                }
            }

            pub fn from_id(id: &str) -> Option<Self> {
                match id {
                    $($id => Some(CatalogCode::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

catalog_codes! {
    PlayChannel146021007 => ("PlayChannel_146021007", ConfirmationDialog),
    PlayChannel146021008 => ("PlayChannel_146021008", ConfirmationDialog),
    PlayVod144020011 => ("PlayVOD_144020011", ConfirmationDialog),

    PlayChannel157021009 => ("PlayChannel_157021009", PasswordMismatch),
    PlayVod157021009 => ("PlayVOD_157021009", PasswordMismatch),
    CheckPassword157021009 => ("CheckPassword_157021009", PasswordMismatch),

    Authenticate157021002 => ("Authenticate_157021002", GenericMessage),
    Authenticate157021009 => ("Authenticate_157021009", GenericMessage),

    PlayChannel146021006 => ("PlayChannel_146021006", PurchasePrompt),
    PlayVod144020008 => ("PlayVOD_144020008", PurchasePrompt),

    CreateFavorite145020006 => ("CreateFavorite_145020006", Popup),
    PlayVod114020007 => ("PlayVOD_114020007", Popup),
    Authenticate157021010 => ("Authenticate_157021010", Popup),
    PlayVod114020001 => ("PlayVOD_114020001", Popup),
    PlayVod114020002 => ("PlayVOD_114020002", Popup),
    PlayVod114020003 => ("PlayVOD_114020003", Popup),
    PlayVod114020004 => ("PlayVOD_114020004", Popup),
    PlayPvr114020004 => ("PlayPVR_114020004", Popup),
    PlayChannel146020014 => ("PlayChannel_146020014", Popup),
    PlayChannel146021001 => ("PlayChannel_146021001", Popup),
    PlayChannel146021002 => ("PlayChannel_146021002", Popup),
    ModifyPassword110021008 => ("ModifyPassword_110021008", Popup),
    ModifyPassword110021018 => ("ModifyPassword_110021018", Popup),
    ModifyPassword110022044 => ("ModifyPassword_110022044", Popup),
    PlayChannel146021010 => ("PlayChannel_146021010", Popup),

    Authenticate157022007 => ("Authenticate_157022007", ReplaceDevice),

    AddPvr147020025 => ("AddPVR_147020025", PvrSpecific),
    AddPeriodicPvr147020025 => ("AddPeriodicPVR_147020025", PvrSpecific),
    AddPvr147020026 => ("AddPVR_147020026", PvrSpecific),
    AddPeriodicPvr147020026 => ("AddPeriodicPVR_147020026", PvrSpecific),
    AddPvr147020005 => ("AddPVR_147020005", PvrSpecific),
    AddPeriodicPvr147020005 => ("AddPeriodicPVR_147020005", PvrSpecific),

    Reschedule125023018 => ("125023018", RescheduleFailure),

    SessionTimeout125023001 => ("125023001", SessionTimeout),
}

/// Any error identifier, whatever its origin.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    Client(ClientError),
    Server(ServerCode),
    Catalog(CatalogCode),
    Unrecognized(String),
}

impl ErrorCode {
    /// Interpret the `code` field of an envelope, which may be a number or a
    /// string identifier.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_i64().map(|code| ErrorCode::Server(ServerCode::from_code(code))),
            Value::String(s) => Some(Self::from_identifier(s)),
            _ => None,
        }
    }

    pub fn from_identifier(id: &str) -> Self {
        if let Some(client) = ClientError::from_id(id) {
            return ErrorCode::Client(client);
        }
        if let Some(catalog) = CatalogCode::from_id(id) {
            return ErrorCode::Catalog(catalog);
        }
        match id.trim().parse::<i64>() {
            Ok(code) => ErrorCode::Server(ServerCode::from_code(code)),
            Err(_) => ErrorCode::Unrecognized(id.to_string()),
        }
    }

    /// Whether this code means the session token is no longer accepted.
    ///
    /// Kept apart from classification: the caller decides what to do about it.
    pub fn invalidates_session(&self) -> bool {
        matches!(self, ErrorCode::Server(ServerCode::NoSession))
    }

    /// The identifier used as i18n key for the message of this code.
    pub fn message_key(&self) -> String {
        match self {
            ErrorCode::Client(client) => client.id().to_string(),
            ErrorCode::Server(server) => server.code().to_string(),
            ErrorCode::Catalog(catalog) => catalog.id().to_string(),
            ErrorCode::Unrecognized(id) => id.clone(),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message_key())
    }
}

impl From<ClientError> for ErrorCode {
    fn from(e: ClientError) -> Self {
        ErrorCode::Client(e)
    }
}

impl From<ServerCode> for ErrorCode {
    fn from(code: ServerCode) -> Self {
        ErrorCode::Server(code)
    }
}
