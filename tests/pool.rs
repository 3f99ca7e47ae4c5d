use devrandom_pool::{
    EntropyPool, HashAlgorithm, ManualClock, PoolConfig, PoolError, PoolHasher,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn pool_with(hash: HashAlgorithm) -> EntropyPool {
    EntropyPool::new(PoolConfig {
        hash,
        ..Default::default()
    })
    .unwrap()
}

#[test]
fn md5_hash_fixture() {
    let pool = pool_with(HashAlgorithm::Md5);
    assert_eq!(
        hex::encode(pool.get_hash("shitty shitty bang bang")),
        "097abfc0f4242b193a22bcab953f5089"
    );
}

#[test]
fn sha1_hash_fixture() {
    let pool = pool_with(HashAlgorithm::Sha1);
    assert_eq!(
        hex::encode(pool.get_hash("shitty shitty bang bang")),
        "4a11c7329e44d0518bb7f448ef162cb75d2eba3c"
    );
}

#[test]
fn exhaustion_and_recovery() {
    init_tracing();
    let mut pool = EntropyPool::default();
    pool.add_entropy(1111, true).unwrap();
    assert_eq!(pool.entropy_count(), 2);

    assert_eq!(pool.get_random_bytes(16).unwrap().len(), 16);
    assert_eq!(pool.get_random_bytes(32).unwrap().len(), 32);
    assert_eq!(pool.entropy_count(), 0);

    assert_eq!(pool.get_random_bytes(16), Err(PoolError::NotEnoughEntropy));

    pool.add_entropy("click", true).unwrap();
    assert_eq!(pool.get_random_bytes(16).unwrap().len(), 16);
    assert_eq!(pool.entropy_count(), 0);
}

#[test]
fn lengths_not_multiple_of_digest() {
    for hash in [HashAlgorithm::Md5, HashAlgorithm::Sha1, HashAlgorithm::Blake3] {
        let mut pool = pool_with(hash);
        for nbytes in [0usize, 1, 15, 17, 33, 100] {
            pool.credit_entropy();
            assert_eq!(pool.get_random_bytes(nbytes).unwrap().len(), nbytes);
        }
    }
}

#[test]
fn request_of_n_digests_extracts_n_times() {
    let mut pool = pool_with(HashAlgorithm::Md5);
    pool.get_random_bytes(40).unwrap();
    // 40 bytes at 16 bytes per digest needs three extractions.
    assert_eq!(pool.total_extractions(), 3);
}

#[test]
fn identical_pools_produce_identical_output() {
    let clock = ManualClock::new(1_700_000_000_000_000);
    let mut a = EntropyPool::with_components(
        PoolConfig::default(),
        Box::new(HashAlgorithm::Md5),
        Box::new(clock.clone()),
    )
    .unwrap();
    let mut b = EntropyPool::with_components(
        PoolConfig::default(),
        Box::new(HashAlgorithm::Md5),
        Box::new(clock.clone()),
    )
    .unwrap();

    clock.advance(4_321);
    a.add_entropy_from_time_interval();
    b.add_entropy_from_time_interval();

    assert_eq!(a.get_random_bytes(48).unwrap(), b.get_random_bytes(48).unwrap());
}

struct XorFold;

impl PoolHasher for XorFold {
    fn digest(&self, data: &[u8]) -> Vec<u8> {
        let mut out = [0u8; 3];
        for (i, b) in data.iter().enumerate() {
            out[i % 3] ^= b;
        }
        out.to_vec()
    }

    fn name(&self) -> &str {
        "xor-fold"
    }
}

#[test]
fn custom_hasher_is_used() {
    let mut pool = EntropyPool::with_components(
        PoolConfig::with_nbits(64),
        Box::new(XorFold),
        Box::new(ManualClock::new(99)),
    )
    .unwrap();

    assert_eq!(pool.get_hash("abc"), vec![b'a', b'b', b'c']);
    assert_eq!(pool.get_random_bytes(7).unwrap().len(), 7);
    assert_eq!(pool.total_extractions(), 3);
}

#[test]
fn config_file_round_trip() {
    let path = std::env::temp_dir().join(format!("devrandom-pool-{}.toml", std::process::id()));
    std::fs::write(&path, "nbits = 256\nhash = \"sha256\"\nstir_ror_by = 3\n").unwrap();

    let config = PoolConfig::from_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let mut pool = EntropyPool::new(config).unwrap();
    assert_eq!(pool.nbits(), 256);
    assert_eq!(pool.stir_ror_by(), 3);
    assert_eq!(pool.extract_from_pool().len(), 32);
}

#[test]
fn pool_can_move_to_another_thread() {
    let mut pool = EntropyPool::default();
    let handle = std::thread::spawn(move || pool.get_random_bytes(8));
    assert_eq!(handle.join().unwrap().unwrap().len(), 8);
}
