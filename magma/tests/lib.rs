use hex_literal::hex;
use magma_cipher::cipher::{generic_array::GenericArray, BlockDecrypt, BlockEncrypt, KeyInit};
use magma_cipher::cipher::Block as CipherBlock;
use magma_cipher::{
    decrypt_block, derive_round_keys, encrypt_block, g, Error, Magma, RoundKeys, BLOCK_SIZE,
};
use proptest::prelude::*;

type Block = CipherBlock<Magma>;

const SEQ_KEY: [u8; 32] = hex!("
    000102030405060708090A0B0C0D0E0F
    101112131415161718191A1B1C1D1E1F
");

const GOST_KEY: [u8; 32] = hex!("
    FFEEDDCCBBAA99887766554433221100
    F0F1F2F3F4F5F6F7F8F9FAFBFCFDFEFF
");

fn keys(key: &[u8]) -> RoundKeys {
    derive_round_keys(key).unwrap()
}

#[test]
fn round_function_vectors() {
    assert_eq!(g(0, 0), 0xFBE5D76C);
    assert_eq!(g(0x12345678, 0), 0x2C7C97B4);
    assert_eq!(g(0x87654321, 0xFEDCBA98), 0xF6A79936);
    assert_eq!(g(0xFDB97531, 0x2A196F34), 0xE50C713F);
}

#[test]
fn round_function_wraps_addition() {
    // 0xFFFFFFFF + 1 wraps to zero
    assert_eq!(g(0xFFFF_FFFF, 1), g(0, 0));
    assert_eq!(g(0x8000_0000, 0x8000_0000), g(0, 0));
}

#[test]
fn key_length_is_checked() {
    for len in [0usize, 1, 31, 33, 64].iter() {
        let key = vec![0u8; *len];
        assert_eq!(derive_round_keys(&key), Err(Error::InvalidKeyLength(*len)));
    }
    assert!(derive_round_keys(&[0u8; 32]).is_ok());
}

#[test]
fn key_schedule_shape() {
    let rk = keys(&SEQ_KEY);
    let words: Vec<u32> = SEQ_KEY
        .chunks(4)
        .map(|c| u32::from_be_bytes([c[0], c[1], c[2], c[3]]))
        .collect();
    assert_eq!(words[0], 0x00010203);
    assert_eq!(words[7], 0x1C1D1E1F);

    let mut expected = Vec::new();
    for _ in 0..3 {
        expected.extend_from_slice(&words);
    }
    expected.extend(words.iter().rev());

    assert_eq!(rk.as_slice().len(), 32);
    for i in 0..32 {
        assert_eq!(rk[i], expected[i], "round key {}", i);
    }
}

#[test]
fn block_length_is_checked() {
    let rk = keys(&SEQ_KEY);
    assert_eq!(encrypt_block(&[0u8; 7], &rk), Err(Error::InvalidBlockLength(7)));
    assert_eq!(encrypt_block(&[], &rk), Err(Error::InvalidBlockLength(0)));
    assert_eq!(decrypt_block(&[0u8; 9], &rk), Err(Error::InvalidBlockLength(9)));
    assert_eq!(decrypt_block(&[0u8; 16], &rk), Err(Error::InvalidBlockLength(16)));
}

#[test]
fn known_answers() {
    let rk = keys(&SEQ_KEY);
    assert_eq!(encrypt_block(&[0u8; 8], &rk).unwrap(), hex!("6FDF695B6DD27959"));
    assert_eq!(encrypt_block(b"ABCDEFGH", &rk).unwrap(), hex!("62D5107D6BB07AF0"));
    assert_eq!(encrypt_block(b"IJKL\0\0\0\0", &rk).unwrap(), hex!("7E67C8A74B1F4F46"));
    assert_eq!(encrypt_block(b"ABCDE\0\0\0", &rk).unwrap(), hex!("BCCDFEDA4445B58B"));

    let rk = keys(&GOST_KEY);
    let plaintext = hex!("FEDCBA9876543210");
    assert_eq!(encrypt_block(&plaintext, &rk).unwrap(), hex!("4C831FAD5766F1C2"));
    assert_eq!(decrypt_block(&plaintext, &rk).unwrap(), hex!("D69CE3AA10657FEC"));
}

#[test]
fn debug_hides_key_material() {
    let rk = keys(&GOST_KEY);
    assert_eq!(format!("{:?}", rk), "RoundKeys { ... }");
    assert_eq!(format!("{:?}", Magma::from_round_keys(rk)), "Magma { ... }");
}

#[test]
fn error_messages() {
    assert_eq!(
        Error::InvalidKeyLength(31).to_string(),
        "invalid key length: expected 32 bytes, got 31",
    );
    assert_eq!(
        Error::InvalidBlockLength(5).to_string(),
        "invalid block length: expected 8 bytes, got 5",
    );
}

/// The `cipher` trait implementation agrees with the free functions.
#[test]
fn cipher_traits() {
    let cipher = Magma::new(GenericArray::from_slice(&GOST_KEY));
    assert_eq!(cipher.round_keys(), &keys(&GOST_KEY));
    assert!(Magma::new_from_slice(&GOST_KEY[..31]).is_err());

    let plaintext = hex!("FEDCBA9876543210");
    let ciphertext = hex!("4C831FAD5766F1C2");

    let mut block = GenericArray::clone_from_slice(&plaintext);
    cipher.encrypt_block(&mut block);
    assert_eq!(&ciphertext, block.as_slice());

    cipher.decrypt_block(&mut block);
    assert_eq!(&plaintext, block.as_slice());

    // test that encrypt_blocks/decrypt_blocks work correctly
    let mut blocks = [Block::default(); 101];
    for (i, block) in blocks.iter_mut().enumerate() {
        block.iter_mut().enumerate().for_each(|(j, b)| {
            *b = (i + j) as u8;
        });
    }

    let blocks_cpy = blocks;
    let rk = cipher.round_keys();

    cipher.encrypt_blocks(&mut blocks);
    assert!(blocks[..] != blocks_cpy[..]);
    for (enc, plain) in blocks.iter().zip(blocks_cpy.iter()) {
        assert_eq!(enc.as_slice(), &encrypt_block(plain, rk).unwrap());
    }

    cipher.decrypt_blocks(&mut blocks);
    assert_eq!(blocks[..], blocks_cpy[..]);
}

/// Blocks are transformed independently of each other.
#[test]
fn no_propagation_between_blocks() {
    let cipher = Magma::new_from_slice(&SEQ_KEY).unwrap();
    let mut a = [Block::default(); 4];
    let mut b = a;
    b[2][5] = 0x42;

    cipher.encrypt_blocks(&mut a);
    cipher.encrypt_blocks(&mut b);
    for i in 0..4 {
        if i == 2 {
            assert_ne!(a[i], b[i]);
        } else {
            assert_eq!(a[i], b[i]);
        }
    }
}

proptest! {
    #[test]
    fn decrypt_inverts_encrypt(key in any::<[u8; 32]>(), block in any::<[u8; BLOCK_SIZE]>()) {
        let rk = keys(&key);
        let ct = encrypt_block(&block, &rk).unwrap();
        prop_assert_eq!(decrypt_block(&ct, &rk).unwrap(), block);
        prop_assert_eq!(rk.encrypt(&rk.decrypt(&block)), block);
    }
}
