use bech32::{ToBase32, Variant};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use rand::{CryptoRng, Rng, RngCore};

pub const ED25519_PUBKEY_LEN: usize = 32;
pub const SECP256K1_PUBKEY_LEN: usize = 33;
pub const BLS12_381_PUBKEY_LEN: usize = 48;
pub const ACCOUNT_ADDRESS_LEN: usize = 20;

/// Generate random bytes of specified length using the provided RNG
pub fn gen_random_bytes<R: RngCore>(rng: &mut R, len: usize) -> Vec<u8> {
    (0..len).map(|_| rng.gen()).collect()
}

/// Generate a random ed25519 public key.
/// Any 32 bytes are accepted as an ed25519 key, so no curve arithmetic is needed
pub fn gen_ed25519_pubkey<R: RngCore>(rng: &mut R) -> [u8; ED25519_PUBKEY_LEN] {
    rng.gen()
}

/// Generate the compressed SEC1 encoding of a random secp256k1 public key
pub fn gen_secp256k1_pubkey<R: RngCore + CryptoRng>(rng: &mut R) -> [u8; SECP256K1_PUBKEY_LEN] {
    let sk = k256::SecretKey::random(rng);
    let point = sk.public_key().to_encoded_point(true);
    point
        .as_bytes()
        .try_into()
        .expect("compressed secp256k1 points are 33 bytes")
}

/// Generate the compressed encoding of a random BLS12-381 (min-pk) public key
pub fn gen_bls_pubkey<R: RngCore>(rng: &mut R) -> [u8; BLS12_381_PUBKEY_LEN] {
    let ikm: [u8; 32] = rng.gen();
    let sk = blst::min_pk::SecretKey::key_gen(&ikm, &[]).expect("32 bytes of key material");
    sk.sk_to_pk().compress()
}

/// Generate a random BLS12-381 public key, hex encoded
pub fn gen_bls_pubkey_hex<R: RngCore>(rng: &mut R) -> String {
    hex::encode(gen_bls_pubkey(rng))
}

/// Generate a random bech32 account address with the given prefix
pub fn gen_address<R: RngCore>(rng: &mut R, prefix: &str) -> String {
    let bytes = gen_random_bytes(rng, ACCOUNT_ADDRESS_LEN);
    bech32::encode(prefix, bytes.to_base32(), Variant::Bech32).expect("valid bech32 prefix")
}
