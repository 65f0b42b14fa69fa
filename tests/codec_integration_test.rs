use recwire::codec::enumeration::{invalid_discriminant, read_discriminant, write_discriminant};
use recwire::{
    fixed_record, wire_enum, wire_record, Decode, Discriminator, Encode, Error, FixedLen, ReadResult, Record,
    Result, WireEnum,
};

fixed_record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct PriceExpo {
        pub expo: i32,
    }
}

fixed_record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct Tick {
        pub v: u8,
    }
}

wire_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Abc {
        A,
        B,
        C,
    }
}

wire_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum LockingMode {
        Unlocked,
        Continuous,
        WithExpiry,
    }
}

wire_record! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct RefreshParams;
}

fixed_record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct RewardInfo {
        pub mint: [u8; 32],
        pub rate: u64,
        pub paused: bool,
    }
}

wire_record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct FarmConfig {
        pub discriminator: Discriminator,
        pub name: String,
        pub locking: LockingMode,
        pub deposit_cap: Option<u64>,
        pub rewards: Vec<RewardInfo>,
        pub tiers: Vec<Vec<u16>>,
        pub refresh: RefreshParams,
    }
}

/// A payload-bearing enumeration in the style of generated bindings.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Flag(bool),
    Integer(i32),
    Label(String),
    Keys(Vec<[u8; 4]>),
    Cleared,
}

impl WireEnum for FieldValue {
    const VARIANT_COUNT: usize = 5;

    fn ordinal(&self) -> u8 {
        match self {
            FieldValue::Flag(_) => 0,
            FieldValue::Integer(_) => 1,
            FieldValue::Label(_) => 2,
            FieldValue::Keys(_) => 3,
            FieldValue::Cleared => 4,
        }
    }
}

impl Encode for FieldValue {
    fn encoded_len(&self) -> usize {
        1 + match self {
            FieldValue::Flag(v) => v.encoded_len(),
            FieldValue::Integer(v) => v.encoded_len(),
            FieldValue::Label(v) => v.encoded_len(),
            FieldValue::Keys(v) => v.encoded_len(),
            FieldValue::Cleared => 0,
        }
    }

    fn write(&self, buf: &mut [u8], offset: usize) -> Result<usize> {
        let i = offset + write_discriminant(self, buf, offset)?;
        let payload = match self {
            FieldValue::Flag(v) => v.write(buf, i)?,
            FieldValue::Integer(v) => v.write(buf, i)?,
            FieldValue::Label(v) => v.write(buf, i)?,
            FieldValue::Keys(v) => v.write(buf, i)?,
            FieldValue::Cleared => 0,
        };
        Ok(i + payload - offset)
    }
}

impl Decode for FieldValue {
    fn read(buf: &[u8], offset: usize) -> Result<(Self, usize)> {
        let ordinal = read_discriminant::<Self>(buf, offset)?;
        let i = offset + 1;
        let (value, payload) = match ordinal {
            0 => bool::read(buf, i).map(|(v, n)| (FieldValue::Flag(v), n))?,
            1 => i32::read(buf, i).map(|(v, n)| (FieldValue::Integer(v), n))?,
            2 => String::read(buf, i).map(|(v, n)| (FieldValue::Label(v), n))?,
            3 => Vec::<[u8; 4]>::read(buf, i).map(|(v, n)| (FieldValue::Keys(v), n))?,
            4 => (FieldValue::Cleared, 0),
            _ => return Err(invalid_discriminant::<Self>(ordinal)),
        };
        Ok((value, 1 + payload))
    }
}

fn sample_config() -> FarmConfig {
    FarmConfig {
        discriminator: Discriminator::for_account("FarmConfig"),
        name: "sol-usdc".to_string(),
        locking: LockingMode::WithExpiry,
        deposit_cap: Some(1_000_000),
        rewards: vec![
            RewardInfo { mint: [1; 32], rate: 10, paused: false },
            RewardInfo { mint: [2; 32], rate: 20, paused: true },
        ],
        tiers: vec![vec![], vec![5, 6, 7]],
        refresh: RefreshParams::INSTANCE,
    }
}

/// `{expo: int32}` with expo = -5 is four two's-complement bytes.
#[test]
fn test_price_expo_scenario() {
    let record = PriceExpo { expo: -5 };
    let encoded = record.encode().unwrap();
    assert_eq!(encoded, vec![0xFB, 0xFF, 0xFF, 0xFF]);

    let (decoded, consumed) = PriceExpo::read(&encoded, 0).unwrap();
    assert_eq!(decoded.expo, -5);
    assert_eq!(consumed, 4);
    assert_eq!(PriceExpo::BYTES, 4);
}

/// Three declared variants: B writes 0x01, 0x02 reads C, 0x03 fails.
#[test]
fn test_enum_scenario() {
    assert_eq!(Abc::B.encode().unwrap(), vec![0x01]);
    assert_eq!(Abc::from_slice(&[0x00]).unwrap(), Abc::A);
    assert_eq!(Abc::from_slice(&[0x02]).unwrap(), Abc::C);
    assert!(matches!(
        Abc::from_slice(&[0x03]),
        Err(Error::InvalidDiscriminant { value: 3, variants: 3, .. })
    ));
}

/// Two 1-byte records: count 2 then the two elements.
#[test]
fn test_vector_scenario() {
    let ticks = vec![Tick { v: 1 }, Tick { v: 2 }];
    let encoded = ticks.encode().unwrap();
    assert_eq!(encoded, vec![0x02, 0x00, 0x00, 0x00, 0x01, 0x02]);
    assert_eq!(Vec::<Tick>::read(&encoded, 0).unwrap(), (ticks, 6));

    let empty: Vec<Tick> = vec![];
    assert_eq!(empty.encode().unwrap(), vec![0, 0, 0, 0]);
    assert_eq!(Vec::<Tick>::read(&[0, 0, 0, 0], 0).unwrap(), (vec![], 4));

    assert!(matches!(
        Vec::<Tick>::read(&[0x03, 0x00, 0x00, 0x00, 0x01, 0x02], 0),
        Err(Error::TruncatedElement { index: 2, count: 3, .. })
    ));
}

#[test]
fn test_absent_and_singleton_records() {
    assert_eq!(PriceExpo::read_record(&[], 0).unwrap(), ReadResult::Absent);
    assert_eq!(FarmConfig::read_record(&[], 0).unwrap(), ReadResult::Absent);

    let first = RefreshParams::read_record(&[], 0).unwrap();
    let second = RefreshParams::read_record(&[9, 9, 9], 2).unwrap();
    assert_eq!(first, ReadResult::Some(RefreshParams::INSTANCE, 0));
    assert_eq!(first, second);
    assert_eq!(RefreshParams.encoded_len(), 0);
}

#[test]
fn test_composite_record_round_trip() {
    let config = sample_config();
    let encoded = config.encode().unwrap();
    assert_eq!(encoded.len(), config.encoded_len());
    assert_eq!(
        config.encoded_len(),
        8 + (4 + 8) + 1 + (1 + 8) + (4 + 2 * RewardInfo::BYTES) + (4 + 4 + (4 + 6))
    );
    assert!(config.discriminator.matches(&encoded, 0));

    let (decoded, consumed) = FarmConfig::read(&encoded, 0).unwrap();
    assert_eq!(decoded, config);
    assert_eq!(consumed, encoded.len());
}

#[test]
fn test_consecutive_records_in_one_stream() {
    let values = [
        FieldValue::Flag(true),
        FieldValue::Integer(-1),
        FieldValue::Label("uri".to_string()),
        FieldValue::Keys(vec![[1, 2, 3, 4], [5, 6, 7, 8]]),
        FieldValue::Cleared,
    ];

    let total: usize = values.iter().map(|v| v.encoded_len()).sum();
    let mut buf = vec![0u8; total];
    let mut offset = 0;
    for value in &values {
        offset += value.write(&mut buf, offset).unwrap();
    }
    assert_eq!(offset, total);

    let mut offset = 0;
    for expected in &values {
        let (value, consumed) = FieldValue::read(&buf, offset).unwrap();
        assert_eq!(&value, expected);
        assert_eq!(consumed, expected.encoded_len());
        offset += consumed;
    }
    assert_eq!(offset, buf.len());
    assert!(matches!(
        FieldValue::read(&[5], 0),
        Err(Error::InvalidDiscriminant { value: 5, variants: 5, .. })
    ));
}

#[test]
fn test_truncated_composite_fails_cleanly() {
    let encoded = sample_config().encode().unwrap();
    for cut in [0, 7, 8, 20, encoded.len() - 1] {
        assert!(FarmConfig::read(&encoded[..cut], 0).is_err(), "cut at {}", cut);
    }
}

#[test]
fn test_write_into_short_buffer_fails() {
    let config = sample_config();
    let mut buf = vec![0u8; config.encoded_len() - 1];
    assert!(matches!(config.write(&mut buf, 0), Err(Error::OutOfBounds { .. })));
}
