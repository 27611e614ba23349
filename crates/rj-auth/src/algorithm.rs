use std::fmt;

/// JWA signing algorithm named in a token header or picked by the user
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AlgorithmId {
    HS256,
    HS384,
    HS512,
    RS256,
    RS384,
    RS512,
    ES256,
    ES384,
    ES512,
    PS256,
    PS384,
    PS512,
    /// Anything else found in a token header, kept verbatim
    Other(String),
}

impl AlgorithmId {
    /// Prompt order for the algorithm picker
    pub const CHOICES: [AlgorithmId; 12] = [
        AlgorithmId::HS256,
        AlgorithmId::HS384,
        AlgorithmId::HS512,
        AlgorithmId::RS256,
        AlgorithmId::RS384,
        AlgorithmId::RS512,
        AlgorithmId::ES256,
        AlgorithmId::ES384,
        AlgorithmId::ES512,
        AlgorithmId::PS256,
        AlgorithmId::PS384,
        AlgorithmId::PS512,
    ];

    /// Parse a header `alg` value. Never fails: unknown names become `Other`.
    pub fn parse(value: &str) -> Self {
        match value {
            "HS256" => Self::HS256,
            "HS384" => Self::HS384,
            "HS512" => Self::HS512,
            "RS256" => Self::RS256,
            "RS384" => Self::RS384,
            "RS512" => Self::RS512,
            "ES256" => Self::ES256,
            "ES384" => Self::ES384,
            "ES512" => Self::ES512,
            "PS256" => Self::PS256,
            "PS384" => Self::PS384,
            "PS512" => Self::PS512,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::HS256 => "HS256",
            Self::HS384 => "HS384",
            Self::HS512 => "HS512",
            Self::RS256 => "RS256",
            Self::RS384 => "RS384",
            Self::RS512 => "RS512",
            Self::ES256 => "ES256",
            Self::ES384 => "ES384",
            Self::ES512 => "ES512",
            Self::PS256 => "PS256",
            Self::PS384 => "PS384",
            Self::PS512 => "PS512",
            Self::Other(other) => other,
        }
    }

    pub fn class(&self) -> AlgorithmClass {
        match self {
            Self::HS256 | Self::HS384 | Self::HS512 => AlgorithmClass::Symmetric,
            Self::ES256 | Self::ES384 | Self::ES512 => AlgorithmClass::AsymmetricEc,
            Self::RS256 | Self::RS384 | Self::RS512 => AlgorithmClass::AsymmetricRsa,
            Self::PS256 | Self::PS384 | Self::PS512 => AlgorithmClass::AsymmetricRsaPss,
            Self::Other(_) => AlgorithmClass::Unknown,
        }
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key family an algorithm belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmClass {
    Symmetric,
    AsymmetricEc,
    AsymmetricRsa,
    AsymmetricRsaPss,
    Unknown,
}

impl AlgorithmClass {
    /// `Unknown` counts as asymmetric.
    pub fn is_symmetric(self) -> bool {
        matches!(self, Self::Symmetric)
    }

    pub fn explanation(self) -> &'static str {
        match self {
            Self::Symmetric => "It appears you are using an HMAC hash for symmetric token signing.",
            Self::AsymmetricEc => {
                "It appears you are using an Elliptic Curve Digital Signature Algorithm (ECDSA) signing key for asymmetric token signing."
            }
            Self::AsymmetricRsa => {
                "It appears you are using an RSA-based signing key for asymmetric token signing."
            }
            Self::AsymmetricRsaPss => {
                "It appears you are using an RSASSA-PSS signing key for asymmetric token signing."
            }
            Self::Unknown => {
                "Unable to determine JWT algorithm. Please ensure the JWT is formatted correctly and try again."
            }
        }
    }
}

/// Result of [`classify`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub class: AlgorithmClass,
    pub explanation: &'static str,
}

impl Classification {
    pub fn is_symmetric(&self) -> bool {
        self.class.is_symmetric()
    }
}

/// Map an algorithm (or its absence) to its key family and explanation text
pub fn classify(algorithm: Option<&AlgorithmId>) -> Classification {
    let class = algorithm
        .map(AlgorithmId::class)
        .unwrap_or(AlgorithmClass::Unknown);

    Classification {
        class,
        explanation: class.explanation(),
    }
}
