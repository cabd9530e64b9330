/// PubKey is a BLS12-381 public key in the min-pk setting, i.e. a compressed G1 point.
/// It is used by validators whose consensus votes are aggregated.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PubKey {
    #[prost(bytes="vec", tag="1")]
    pub key: ::prost::alloc::vec::Vec<u8>,
}
