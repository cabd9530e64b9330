//! Protobuf wire types for the staking messages and the consensus key algorithms they carry.
//!
//! The structures mirror the `cosmos.staking.v1beta1` and `cosmos.crypto.*` packages, with the
//! validator messages extended by the auxiliary role addresses and the BLS key.

pub mod cosmos {
    pub mod staking {
        pub mod v1beta1 {
            include!("gen/cosmos.staking.v1beta1.rs");
        }
    }

    pub mod crypto {
        pub mod ed25519 {
            include!("gen/cosmos.crypto.ed25519.rs");
        }

        pub mod secp256k1 {
            include!("gen/cosmos.crypto.secp256k1.rs");
        }

        pub mod bls12_381 {
            include!("gen/cosmos.crypto.bls12_381.rs");
        }
    }
}

pub use cosmos_sdk_proto::cosmos::base::v1beta1::Coin;
pub use pbjson_types::{Any, Duration};
