use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid ring degree: log_n = {0} not in [1, 16]")]
    InvalidRingDegree(usize),

    #[error("invalid plaintext modulus: t = {0} < 2")]
    InvalidPlaintextModulus(u64),

    #[error("invalid modulus size: {bits} bits not in [2, 61]")]
    InvalidModulusSize { bits: usize },

    #[error("empty ciphertext modulus chain")]
    EmptyModulusChain,

    #[error("no {bits}-bit prime congruent to 1 mod {nth_root} left")]
    PrimesExhausted { bits: usize, nth_root: u64 },

    #[error("plaintext modulus t = {t} is too large for a {log_q}-bit ciphertext modulus")]
    PlaintextModulusTooLarge { t: u64, log_q: usize },

    #[error("invalid noise standard deviation: {0}")]
    InvalidSigma(f64),

    #[error("invalid secret density: {0} not in (0, 1]")]
    InvalidSecretDensity(f64),

    #[error("value {value} out of range for plaintext modulus {t}")]
    ValueOutOfRange { value: u64, t: u64 },

    #[error("{len} values do not fit in a plaintext of {n} coefficients")]
    TooManyValues { len: usize, n: usize },

    #[error("ring degree mismatch: expected {expected}, found {found}")]
    RingDegreeMismatch { expected: usize, found: usize },

    #[error("unsupported ciphertext degrees for multiplication: {lhs} x {rhs}")]
    UnsupportedDegree { lhs: usize, rhs: usize },

    #[error("malformed ciphertext: {0}")]
    MalformedCiphertext(&'static str),
}
