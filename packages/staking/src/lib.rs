pub mod address;
pub mod codec;
pub mod coin;
pub mod commission;
mod decimal;
pub mod description;
pub mod error;
pub mod msg;
pub mod params;
pub mod pubkey;
pub mod validation;

pub use address::{gov_authority, ACCOUNT_PREFIX, GOV_MODULE_NAME};
pub use codec::Codec;
pub use commission::CommissionRates;
pub use description::{Description, DescriptionUpdate, FieldUpdate, DO_NOT_MODIFY_DESC};
pub use error::{CommissionError, ParamsError, StakingError};
pub use msg::{
    Msg, MsgBeginRedelegate, MsgCreateValidator, MsgDelegate, MsgEditValidator, MsgUndelegate,
    MsgUpdateParams, StakingMsg, MODULE_NAME, ROUTER_KEY,
};
pub use params::{Params, SignedDuration};
pub use pubkey::{KeyEnvelope, PubKey, PubKeyRegistry};
pub use validation::ValidateBasic;

pub type Result<T> = std::result::Result<T, error::StakingError>;
